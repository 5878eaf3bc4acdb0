use crate::model::{DeriveField, DeriveStore};
use syn::spanned::Spanned;

impl TryFrom<syn::DeriveInput> for DeriveStore {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = value.ident.clone();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                value.generics.span(),
                format!("Invalid - `{struct_name}` must not be generic."),
            ));
        }

        let fields = match &value.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(DeriveField::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
                _ => {
                    return Err(syn::Error::new(
                        value.span(),
                        format!("Invalid - `{struct_name}` must have named fields."),
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new(
                    value.span(),
                    format!("Invalid - `{struct_name}` must be a struct."),
                ));
            }
        };

        Ok(DeriveStore {
            struct_name,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use quote::{quote, ToTokens};
    use syn::parse_quote;

    #[test]
    fn construct_derive_store_empty() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Options {}
        };

        // Execute
        let store = DeriveStore::try_from(input).unwrap();

        // Verify
        assert_eq!(
            store,
            DeriveStore {
                struct_name: syn::Ident::new("Options", Span::call_site()),
                fields: vec![],
            }
        );
    }

    #[test]
    fn construct_derive_store() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            #[derive(Default)]
            struct Options {
                #[argvise(tag = "v,verbose")]
                verbose: bool,
                names: Vec<String>,
            }
        };

        // Execute
        let store = DeriveStore::try_from(input).unwrap();

        // Verify
        assert_eq!(
            store,
            DeriveStore {
                struct_name: syn::Ident::new("Options", Span::call_site()),
                fields: vec![
                    DeriveField {
                        field_name: syn::Ident::new("verbose", Span::call_site()),
                        field_type: DeriveValue {
                            tokens: quote! { bool },
                        },
                        tag: Some(DeriveValue {
                            tokens: Literal::string("v,verbose").into_token_stream(),
                        }),
                        help: None,
                        label: None,
                    },
                    DeriveField {
                        field_name: syn::Ident::new("names", Span::call_site()),
                        field_type: DeriveValue {
                            tokens: quote! { Vec<String> },
                        },
                        tag: None,
                        help: None,
                        label: None,
                    },
                ],
            }
        );
    }

    #[test]
    fn construct_derive_store_field_error() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Options {
                #[argvise(unknown)]
                verbose: bool,
            }
        };

        // Execute & verify
        assert!(DeriveStore::try_from(input).is_err());
    }

    #[test]
    fn construct_derive_store_tuple() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Options(bool);
        };

        // Execute
        let error = DeriveStore::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - `Options` must have named fields.");
    }

    #[test]
    fn construct_derive_store_enum() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            enum Options {
                A,
            }
        };

        // Execute
        let error = DeriveStore::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - `Options` must be a struct.");
    }

    #[test]
    fn construct_derive_store_generic() {
        // Setup
        let input: syn::DeriveInput = parse_quote! {
            struct Options<T> {
                value: T,
            }
        };

        // Execute
        let error = DeriveStore::try_from(input).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - `Options` must not be generic.");
    }
}
