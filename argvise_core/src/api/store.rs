use std::any::{Any, TypeId};

use crate::api::capture::{collection, scalar, switch, Coerce, Target};
use crate::api::OptionConfig;
use crate::error::Error;

/// A record whose fields are filled in from the command line.
///
/// Usually implemented with `#[derive(OptionStore)]` (see the `argvise` crate).
/// Each field contributes one option configuration; see [`StoreField::new`] for the tag grammar.
pub trait OptionStore {
    /// Describe each field, handing out a mutable reference to its value.
    fn fields(&mut self) -> Vec<StoreField<'_>>;
}

/// One field of an [`OptionStore`].
pub struct StoreField<'s> {
    name: String,
    tag: Option<String>,
    type_name: String,
    value: &'s mut dyn Any,
    description: Option<String>,
    help_label: Option<String>,
}

impl<'s> StoreField<'s> {
    /// Describe the field `name`, whose value is `value`.
    ///
    /// The tag has the form `names[=default]`:
    /// * `names` is a comma separated list of option names (empty entries are help placeholders).
    /// * `=value` sets a default; for list fields `=[a,b]` sets several, and `=;[a;b]` picks another separator.
    /// * a lone `=` sets no default.
    ///
    /// Without a tag the option is named after the field, with `_` replaced by `-`.
    /// `bool` fields are flags: they take no argument and ignore any default.
    /// `type_name` is only used to report unsupported field types.
    pub fn new(
        name: impl Into<String>,
        tag: Option<&str>,
        type_name: impl Into<String>,
        value: &'s mut dyn Any,
    ) -> Self {
        Self {
            name: name.into(),
            tag: tag.map(str::to_string),
            type_name: type_name.into(),
            value,
            description: None,
            help_label: None,
        }
    }

    /// Document the option in the help output.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Name the argument in the help output.
    pub fn help_label(mut self, help_label: impl Into<String>) -> Self {
        self.help_label.replace(help_label.into());
        self
    }

    fn bad_type(&self) -> Error {
        Error::BadFieldType {
            field: self.name.clone(),
            type_name: self.type_name.clone(),
        }
    }
}

/// Derive one option configuration per field of `store`.
///
/// The configurations store under the field names, and assign the parsed values into the store once parsing completes.
pub fn derive_configs<S>(store: &mut S) -> Result<Vec<OptionConfig<'_>>, Error>
where
    S: OptionStore + ?Sized,
{
    store.fields().into_iter().map(field_config).collect()
}

macro_rules! dispatch {
    ($field:ident, $type_id:ident, $($type:ty),+) => {
        $(
            if $type_id == TypeId::of::<$type>() {
                return typed_config::<$type>($field, Shape::Scalar);
            }

            if $type_id == TypeId::of::<Vec<$type>>() {
                return typed_config::<$type>($field, Shape::List);
            }
        )+
    };
}

fn field_config(field: StoreField<'_>) -> Result<OptionConfig<'_>, Error> {
    let type_id = Any::type_id(&*field.value);

    if type_id == TypeId::of::<bool>() {
        return flag_config(field);
    }

    dispatch!(
        field, type_id, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
        f32, f64
    );

    Err(field.bad_type())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Scalar,
    List,
}

fn flag_config(field: StoreField<'_>) -> Result<OptionConfig<'_>, Error> {
    let error = field.bad_type();
    let StoreField {
        name,
        tag,
        value,
        description,
        help_label,
        ..
    } = field;
    let variable = value.downcast_mut::<bool>().ok_or(error)?;
    let tag = Tag::parse(tag.as_deref(), &name);

    let config = base_config(name, tag.names, description, help_label);
    Ok(config.on_parsed(switch(variable)))
}

fn typed_config<T: Coerce>(field: StoreField<'_>, shape: Shape) -> Result<OptionConfig<'_>, Error> {
    let error = field.bad_type();
    let StoreField {
        name,
        tag,
        value,
        description,
        help_label,
        ..
    } = field;
    let tag = Tag::parse(tag.as_deref(), &name);
    let mut config = base_config(name, tag.names, description, help_label).takes_argument();

    let defaults = match shape {
        Shape::Scalar => tag.default.filter(|d| !d.is_empty()).map(|d| vec![d]),
        Shape::List => tag.default.and_then(|d| list_defaults(&d)),
    };

    if let Some(defaults) = defaults {
        config = config.defaults(defaults);
    }

    let target = Target {
        store_key: config.effective_store_key().to_string(),
        name: config.display_name().to_string(),
    };

    match shape {
        Shape::Scalar => {
            let variable = value.downcast_mut::<T>().ok_or(error)?;
            Ok(config.on_parsed(scalar(target, variable)))
        }
        Shape::List => {
            let variable = value.downcast_mut::<Vec<T>>().ok_or(error)?;
            Ok(config.array().on_parsed(collection(target, variable)))
        }
    }
}

fn base_config<'s>(
    store_key: String,
    names: Vec<String>,
    description: Option<String>,
    help_label: Option<String>,
) -> OptionConfig<'s> {
    let mut config = OptionConfig::new(names).store_key(store_key);

    if let Some(description) = description {
        config = config.description(description);
    }

    if let Some(help_label) = help_label {
        config = config.help_label(help_label);
    }

    config
}

/// The parsed form of a field tag.
#[derive(Debug, PartialEq, Eq)]
struct Tag {
    names: Vec<String>,
    default: Option<String>,
}

impl Tag {
    fn parse(tag: Option<&str>, field: &str) -> Self {
        let tag = match tag {
            Some(tag) => tag,
            None => {
                return Tag {
                    names: vec![field.replace('_', "-")],
                    default: None,
                }
            }
        };

        let (names, default) = match tag.split_once('=') {
            Some((names, default)) => (names, Some(default.to_string())),
            None => (tag, None),
        };

        Tag {
            names: names.split(',').map(|n| n.trim().to_string()).collect(),
            default,
        }
    }
}

/// Split a list default: `a`, `[a,b]` or `<sep>[a<sep>b]`.
fn list_defaults(default: &str) -> Option<Vec<String>> {
    if default.is_empty() {
        return None;
    }

    let (separator, inner) = match default.find('[') {
        Some(open) if default.ends_with(']') => {
            let separator = &default[..open];
            let inner = &default[open + 1..default.len() - 1];
            (if separator.is_empty() { "," } else { separator }, inner)
        }
        _ => return Some(vec![default.to_string()]),
    };

    if inner.is_empty() {
        return None;
    }

    Some(inner.split(separator).map(str::to_string).collect())
}
