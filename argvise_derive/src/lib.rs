//! Derive macro for `argvise` option stores.
//! See [documentation root](https://docs.rs/argvise/latest/argvise/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveStore;

/// Implement `OptionStore` for a struct with named fields.
///
/// Each field becomes one option; configure it with `#[argvise(tag = "..", help = "..", label = "..")]`.
#[proc_macro_derive(OptionStore, attributes(argvise))]
pub fn option_store(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveStore::try_from(derive_input) {
        Ok(store) => TokenStream2::from(store).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
