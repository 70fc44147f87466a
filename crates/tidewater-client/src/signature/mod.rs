mod wire;


use serde::Serialize;
use std::{
    fmt,
    hash::{Hash, Hasher},
};
use tidewater_types::{
    error::SignatureError,
    literal::Literal,
    signature::{SignatureShape, TypeSignature, validate_raw_type},
};

///
/// ClientTypeSignature
///
/// Wire-facing rendition of a type signature. Structurally identical to the
/// canonical [`TypeSignature`]; constructed by converting one or by decoding
/// the structured record received from the server. Serializes as
/// `{rawType, typeArguments, literalArguments}`.
///

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypeSignature {
    raw_type: String,
    type_arguments: Vec<ClientTypeSignature>,
    literal_arguments: Vec<Literal>,
}

impl ClientTypeSignature {
    /// Construct a validated wire signature.
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

// Depth-first and order-preserving. The source tree is validated at
// construction and both shapes share the same invariants, so conversion
// cannot fail.
impl From<&TypeSignature> for ClientTypeSignature {
    fn from(signature: &TypeSignature) -> Self {
        Self {
            raw_type: signature.raw_type().to_string(),
            type_arguments: signature.type_arguments().iter().map(Self::from).collect(),
            literal_arguments: signature.literal_arguments().to_vec(),
        }
    }
}

impl From<TypeSignature> for ClientTypeSignature {
    fn from(signature: TypeSignature) -> Self {
        Self::from(&signature)
    }
}

impl SignatureShape for ClientTypeSignature {
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

impl fmt::Display for ClientTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_canonical(f)
    }
}

impl PartialEq for ClientTypeSignature {
    fn eq(&self, other: &Self) -> bool {
        self.shape_eq(other)
    }
}

impl Eq for ClientTypeSignature {}

impl Hash for ClientTypeSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape_hash(state);
    }
}
