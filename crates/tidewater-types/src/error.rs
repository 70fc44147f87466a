use thiserror::Error as ThisError;

///
/// SignatureError
///
/// Validation failure while constructing a signature or decoding its wire
/// record. Raised only during construction; a constructed value can no
/// longer fail.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum SignatureError {
    #[error("raw type is empty")]
    EmptyRawType,

    #[error("literal arguments are missing")]
    MissingLiteralArguments,

    #[error("raw type is missing")]
    MissingRawType,

    #[error("type arguments are missing")]
    MissingTypeArguments,

    #[error("raw type contains reserved character '{found}': {raw_type}")]
    ReservedDelimiter { found: char, raw_type: String },

    #[error("unsupported literal kind: {kind}")]
    UnsupportedLiteral { kind: &'static str },
}
