use crate::{error::SignatureError, literal::Literal};
use std::{
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
};

/// Grammar delimiters reserved by the canonical textual form.
pub const RAW_TYPE_DELIMITERS: [char; 3] = ['<', '>', ','];

/// Validate a raw type name against the construction invariants:
/// non-empty, and free of the grammar delimiter characters.
pub fn validate_raw_type(raw_type: &str) -> Result<(), SignatureError> {
    if raw_type.is_empty() {
        return Err(SignatureError::EmptyRawType);
    }
    if let Some(found) = raw_type.chars().find(|c| RAW_TYPE_DELIMITERS.contains(c)) {
        return Err(SignatureError::ReservedDelimiter {
            found,
            raw_type: raw_type.to_string(),
        });
    }

    Ok(())
}

// Locale-invariant fold for raw-type identity. ASCII fast path;
// NOTE: non-ASCII falls back to simple Unicode lowercase.
fn fold_raw_type(raw_type: &str) -> Cow<'_, str> {
    if raw_type.is_ascii() {
        if raw_type.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(raw_type.to_ascii_lowercase())
        } else {
            Cow::Borrowed(raw_type)
        }
    } else {
        Cow::Owned(raw_type.to_lowercase())
    }
}

///
/// SignatureShape
///
/// Shared shape of the canonical and client-facing signature trees: a raw
/// type name plus ordered nested and literal arguments. Canonical
/// rendering, structural equality, and the equality-consistent hash are
/// implemented once here; the concrete shapes only supply accessors.
///

pub trait SignatureShape: Sized {
    fn raw_type(&self) -> &str;

    fn type_arguments(&self) -> &[Self];

    fn literal_arguments(&self) -> &[Literal];

    /// Case-folded identity key for the raw type.
    /// The stored casing is never mutated; folding happens only here.
    fn folded_raw_type(&self) -> Cow<'_, str> {
        fold_raw_type(self.raw_type())
    }

    /// Structural equality: case-insensitive on the raw type, element-wise
    /// and order-sensitive on both argument lists.
    fn shape_eq(&self, other: &Self) -> bool {
        self.folded_raw_type() == other.folded_raw_type()
            && self.type_arguments().len() == other.type_arguments().len()
            && self
                .type_arguments()
                .iter()
                .zip(other.type_arguments())
                .all(|(left, right)| left.shape_eq(right))
            && self.literal_arguments() == other.literal_arguments()
    }

    /// Hash consistent with [`shape_eq`](Self::shape_eq).
    fn shape_hash<H: Hasher>(&self, state: &mut H) {
        self.folded_raw_type().hash(state);
        state.write_usize(self.type_arguments().len());
        for argument in self.type_arguments() {
            argument.shape_hash(state);
        }
        self.literal_arguments().hash(state);
    }

    /// Canonical textual form: `raw<args,...>(literals,...)`.
    ///
    /// Deterministic and stable; not guaranteed to be parseable back into a
    /// signature.
    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_type())?;

        let type_arguments = self.type_arguments();
        if !type_arguments.is_empty() {
            f.write_str("<")?;
            for (i, argument) in type_arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                argument.fmt_canonical(f)?;
            }
            f.write_str(">")?;
        }

        let literal_arguments = self.literal_arguments();
        if !literal_arguments.is_empty() {
            f.write_str("(")?;
            for (i, literal) in literal_arguments.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{literal}")?;
            }
            f.write_str(")")?;
        }

        Ok(())
    }
}
