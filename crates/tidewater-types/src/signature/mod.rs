mod shape;


use crate::{error::SignatureError, literal::Literal};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

// re-exports
pub use shape::{RAW_TYPE_DELIMITERS, SignatureShape, validate_raw_type};

///
/// TypeSignature
///
/// Canonical server-side description of a data type: a raw type name plus
/// ordered nested and literal parameters (`array<varchar>`,
/// `decimal(10,2)`). Immutable once constructed; every transformation
/// builds a new value.
///

#[derive(Clone, Debug)]
pub struct TypeSignature {
    raw_type: String,
    type_arguments: Vec<TypeSignature>,
    literal_arguments: Vec<Literal>,
}

impl TypeSignature {
    /// Construct a validated signature.
    ///
    /// The argument vectors are taken by value; the stored lists are never
    /// observable mutably afterwards.
    pub fn new(
        raw_type: impl Into<String>,
        type_arguments: Vec<Self>,
        literal_arguments: Vec<Literal>,
    ) -> Result<Self, SignatureError> {
        let raw_type = raw_type.into();
        validate_raw_type(&raw_type)?;

        Ok(Self {
            raw_type,
            type_arguments,
            literal_arguments,
        })
    }

    #[must_use]
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    #[must_use]
    pub fn type_arguments(&self) -> &[Self] {
        &self.type_arguments
    }

    #[must_use]
    pub fn literal_arguments(&self) -> &[Literal] {
        &self.literal_arguments
    }
}

impl SignatureShape for TypeSignature {
    fn raw_type(&self) -> &str {
        &self.raw_type
    }

    fn type_arguments(&self) -> &[Self] {
        &self.type_arguments
    }

    fn literal_arguments(&self) -> &[Literal] {
        &self.literal_arguments
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_canonical(f)
    }
}

impl PartialEq for TypeSignature {
    fn eq(&self, other: &Self) -> bool {
        self.shape_eq(other)
    }
}

impl Eq for TypeSignature {}

impl Hash for TypeSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape_hash(state);
    }
}
