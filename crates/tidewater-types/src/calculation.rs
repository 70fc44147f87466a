use derive_more::Display;

///
/// LiteralCalculation
///
/// Free-form calculation expression standing in for a literal argument in a
/// parameterized type declaration (e.g. the `x + 2` of `varchar(x + 2)`).
/// Resolved upstream during analysis; never valid as a wire literal, so
/// there is deliberately no conversion into [`Literal`](crate::literal::Literal).
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct LiteralCalculation(String);

impl LiteralCalculation {
    #[must_use]
    pub fn new(calculation: impl Into<String>) -> Self {
        Self(calculation.into())
    }

    #[must_use]
    pub const fn calculation(&self) -> &str {
        self.0.as_str()
    }
}
