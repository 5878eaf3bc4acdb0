use crate::load::ATTRIBUTE;
use crate::model::{DeriveField, DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use syn::spanned::Spanned;

const KEYS: [&str; 3] = ["tag", "help", "label"];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new(value.span(), "Invalid - fields must be named.")
        })?;
        let mut attributes = IntermediateAttributes::default();

        for attribute in &value.attrs {
            if attribute.path().is_ident(ATTRIBUTE) {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(singletons);

                for (key, values) in pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        if let Some(singleton) = attributes.singletons.iter().next() {
            return Err(syn::Error::new(
                value.span(),
                format!("Invalid - field `{field_name}` has unknown attribute `{singleton}`."),
            ));
        }

        for key in attributes.pairs.keys() {
            if !KEYS.contains(&key.as_str()) {
                return Err(syn::Error::new(
                    value.span(),
                    format!("Invalid - field `{field_name}` has unknown attribute `{key} = ..`."),
                ));
            }
        }

        let tag = single(&attributes, "tag", &field_name, value)?;
        let help = single(&attributes, "help", &field_name, value)?;
        let label = single(&attributes, "label", &field_name, value)?;

        Ok(DeriveField {
            field_name,
            field_type: DeriveValue {
                tokens: value.ty.to_token_stream(),
            },
            tag,
            help,
            label,
        })
    }
}

fn single(
    attributes: &IntermediateAttributes,
    key: &str,
    field_name: &syn::Ident,
    field: &syn::Field,
) -> Result<Option<DeriveValue>, syn::Error> {
    match attributes.pairs.get(key).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) => Ok(Some(value.clone())),
        Some(_) => Err(syn::Error::new(
            field.span(),
            format!("Invalid - field `{field_name}` repeats attribute `{key} = ..`."),
        )),
    }
}
