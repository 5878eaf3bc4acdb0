use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveStore;

impl From<DeriveStore> for TokenStream2 {
    fn from(value: DeriveStore) -> Self {
        let DeriveStore {
            struct_name,
            fields,
        } = value;
        let fields = fields.into_iter().map(TokenStream2::from);

        quote! {
            impl ::argvise::OptionStore for #struct_name {
                fn fields(&mut self) -> ::std::vec::Vec<::argvise::StoreField<'_>> {
                    ::std::vec![ #( #fields ),* ]
                }
            }
        }
    }
}
