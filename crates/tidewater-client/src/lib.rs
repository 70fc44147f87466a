//! Client-facing wire models for the Tidewater query protocol. The server
//! converts its canonical [`TypeSignature`](types::signature::TypeSignature)
//! trees into [`ClientTypeSignature`](signature::ClientTypeSignature)
//! values, which travel as structured records inside column-metadata
//! messages.

pub use tidewater_types as types;

pub mod signature;

///
/// Prelude
///

pub mod prelude {
    pub use crate::signature::ClientTypeSignature;
    pub use tidewater_types::prelude::*;
}
