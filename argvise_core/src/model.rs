/// The kind of value an option argument is converted into.
///
/// Reported by [`Error::OptionArgumentIsInvalid`](crate::Error::OptionArgumentIsInvalid) so a caller can explain what was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// `true`/`false`.
    Bool,
    /// A signed integer.
    Int,
    /// An unsigned integer.
    Uint,
    /// A floating point number.
    Float,
    /// Free text.
    String,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::String => "string",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Kind::Bool, "bool")]
    #[case(Kind::Int, "int")]
    #[case(Kind::Uint, "uint")]
    #[case(Kind::Float, "float")]
    #[case(Kind::String, "string")]
    fn display(#[case] kind: Kind, #[case] expected: &str) {
        // Execute
        let actual = kind.to_string();

        // Verify
        assert_eq!(actual, expected);
    }
}
