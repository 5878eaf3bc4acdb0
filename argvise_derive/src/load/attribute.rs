use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};
use syn::spanned::Spanned;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match &expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    singletons.insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new(
                        expression.span(),
                        format!(
                            "Invalid - unparseable attribute: `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Literal;
    use syn::parse_quote;

    #[test]
    fn construct_derive_attributes_empty() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argvise()]
        };

        // Execute
        let derive_attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            derive_attributes,
            IntermediateAttributes {
                singletons: HashSet::default(),
                pairs: HashMap::default()
            }
        );
    }

    #[test]
    fn construct_derive_attributes() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argvise(abc, tag = "a,b=1")]
        };

        // Execute
        let derive_attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            derive_attributes,
            IntermediateAttributes {
                singletons: HashSet::from(["abc".to_string()]),
                pairs: HashMap::from([(
                    "tag".to_string(),
                    vec![DeriveValue {
                        tokens: Literal::string("a,b=1").into_token_stream(),
                    }]
                )])
            }
        );
    }

    #[test]
    fn construct_derive_attributes_multiple() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argvise(help = "123", help = "456")]
        };

        // Execute
        let derive_attributes = IntermediateAttributes::try_from(&attribute).unwrap();

        // Verify
        assert_eq!(
            derive_attributes.pairs["help"],
            vec![
                DeriveValue {
                    tokens: Literal::string("123").into_token_stream(),
                },
                DeriveValue {
                    tokens: Literal::string("456").into_token_stream(),
                }
            ]
        );
    }

    #[test]
    fn construct_derive_attributes_invalid() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argvise]
        };

        // Execute & verify
        assert!(IntermediateAttributes::try_from(&attribute).is_err());
    }

    #[test]
    fn construct_derive_attributes_invalid_expression() {
        // Setup
        let attribute: syn::Attribute = parse_quote! {
            #[argvise(1 + 2)]
        };

        // Execute
        let error = IntermediateAttributes::try_from(&attribute).unwrap_err();

        // Verify
        assert_eq!(error.to_string(), "Invalid - unparseable attribute: `1 + 2`.");
    }
}
