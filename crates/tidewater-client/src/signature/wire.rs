use super::ClientTypeSignature;
use serde::{Deserialize, Deserializer};
use tidewater_types::{error::SignatureError, literal::Literal, signature::validate_raw_type};

///
/// SignatureWire
/// Serde decode shape used to re-run construction validation during
/// deserialization. Optional fields distinguish an absent list from an
/// empty one; unknown fields are ignored for protocol evolution.
///

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureWire {
    raw_type: Option<String>,
    type_arguments: Option<Vec<SignatureWire>>,
    literal_arguments: Option<Vec<Literal>>,
}

impl SignatureWire {
    // Decode recursively in construction-validation order: raw type
    // presence, raw type content, argument-list presence, nested arguments.
    fn into_signature(self) -> Result<ClientTypeSignature, SignatureError> {
        let raw_type = self.raw_type.ok_or(SignatureError::MissingRawType)?;
        validate_raw_type(&raw_type)?;

        let type_arguments = self
            .type_arguments
            .ok_or(SignatureError::MissingTypeArguments)?;
        let literal_arguments = self
            .literal_arguments
            .ok_or(SignatureError::MissingLiteralArguments)?;

        let type_arguments = type_arguments
            .into_iter()
            .map(Self::into_signature)
            .collect::<Result<Vec<_>, _>>()?;

        ClientTypeSignature::new(raw_type, type_arguments, literal_arguments)
    }
}

impl<'de> Deserialize<'de> for ClientTypeSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = SignatureWire::deserialize(deserializer)?;
        wire.into_signature().map_err(serde::de::Error::custom)
    }
}
