//! Error types for universe lookups and codec operations.

use thiserror::Error;

/// Every failure the hand universe or the codec can surface.
///
/// All operations in this crate are synchronous and deterministic, so no
/// error is transient: a failed call will fail identically on retry. Decode
/// errors ([`Error::MalformedToken`]) are the expected outcome for corrupted
/// or hand-edited share links and should degrade to an empty/default state
/// in the consumer; the other variants indicate caller bugs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not one of the 169 canonical hand identifiers.
    #[error("unknown hand: {0:?}")]
    UnknownHand(String),
    /// The index is outside `0..169`.
    #[error("hand index out of range: {0}")]
    IndexOutOfRange(u8),
    /// The token is not something this codec ever produced: bad alphabet,
    /// wrong byte length, inconsistent framing, or trailing garbage.
    #[error("malformed token: {0}")]
    MalformedToken(&'static str),
    /// Encode-time precondition violation: the collection exceeds a
    /// fixed-width field of the wire format.
    #[error("collection too large: {0}")]
    CollectionTooLarge(&'static str),
}
