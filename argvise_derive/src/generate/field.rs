use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::ext::IdentExt;

use crate::model::{DeriveField, DeriveValue};

impl From<DeriveField> for TokenStream2 {
    fn from(value: DeriveField) -> Self {
        let DeriveField {
            field_name,
            field_type: DeriveValue { tokens: field_type },
            tag,
            help,
            label,
        } = value;
        let name = Literal::string(&field_name.unraw().to_string());
        let tag = match tag {
            Some(DeriveValue { tokens }) => quote! { ::std::option::Option::Some(#tokens) },
            None => quote! { ::std::option::Option::None },
        };
        let description = help.map(|DeriveValue { tokens }| quote! { .description(#tokens) });
        let help_label = label.map(|DeriveValue { tokens }| quote! { .help_label(#tokens) });

        quote! {
            ::argvise::StoreField::new(
                #name,
                #tag,
                ::std::any::type_name::<#field_type>(),
                &mut self.#field_name,
            )
            #description
            #help_label
        }
    }
}
