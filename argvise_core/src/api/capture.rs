use crate::error::{BoxError, Error};
use crate::model::Kind;

/// Conversion of a single argument into a field type.
///
/// Conversions go through [`std::str::FromStr`], so numbers follow Rust's locale independent grammar.
pub(crate) trait Coerce: Sized + 'static {
    const KIND: Kind;

    fn coerce(token: &str) -> Result<Self, BoxError>;
}

macro_rules! coerce_from_str {
    ($kind:expr => $($type:ty),+) => {
        $(
            impl Coerce for $type {
                const KIND: Kind = $kind;

                fn coerce(token: &str) -> Result<Self, BoxError> {
                    token.parse::<$type>().map_err(Into::into)
                }
            }
        )+
    };
}

coerce_from_str!(Kind::Int => i8, i16, i32, i64, i128, isize);
coerce_from_str!(Kind::Uint => u8, u16, u32, u64, u128, usize);
coerce_from_str!(Kind::Float => f32, f64);
coerce_from_str!(Kind::String => String);

/// Identifies the option in conversion errors.
#[derive(Debug, Clone)]
pub(crate) struct Target {
    pub(crate) store_key: String,
    pub(crate) name: String,
}

impl Target {
    fn coerce<T: Coerce>(&self, argument: &str) -> Result<T, Error> {
        T::coerce(argument).map_err(|cause| {
            Error::invalid_argument(&self.store_key, &self.name, argument, T::KIND, cause)
        })
    }
}

/// A flag: observed means `true`.
pub(crate) fn switch(variable: &mut bool) -> impl FnMut(&[String]) -> Result<(), Error> + '_ {
    move |_values| {
        *variable = true;
        Ok(())
    }
}

/// A single value: the first argument is converted.
pub(crate) fn scalar<T: Coerce>(
    target: Target,
    variable: &mut T,
) -> impl FnMut(&[String]) -> Result<(), Error> + '_ {
    move |values| {
        if let Some(argument) = values.first() {
            *variable = target.coerce(argument)?;
        }

        Ok(())
    }
}

/// A list: every argument is converted, in order, replacing the previous contents.
/// Nothing is assigned unless every argument converts.
pub(crate) fn collection<T: Coerce>(
    target: Target,
    variable: &mut Vec<T>,
) -> impl FnMut(&[String]) -> Result<(), Error> + '_ {
    move |values| {
        let converted = values
            .iter()
            .map(|argument| target.coerce(argument))
            .collect::<Result<Vec<T>, Error>>()?;
        *variable = converted;
        Ok(())
    }
}
