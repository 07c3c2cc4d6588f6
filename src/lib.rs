//! URL-safe share tokens for poker starting-hand ranges.
//!
//! This crate serializes a selection of the 169 canonical Texas Hold'em
//! starting hands (a [`Range`]) and an ordered, named group of such
//! selections (a [`Collection`]) into short printable tokens that can sit
//! unescaped inside a URL path segment or fragment, and reconstructs the
//! original selection from a token — including tokens received from
//! strangers, which are treated as untrusted input and rejected with a
//! typed [`Error`] rather than trusted or crashed on.
//!
//! ## Core Types
//!
//! - [`Rank`] — One of the thirteen card ranks, deuce through ace
//! - [`Hand`] — One of the 169 starting-hand categories (`"AKs"`, `"77"`, `"T9o"`)
//! - [`Range`] — A set of hands as a 169-bit mask
//! - [`Collection`] — An ordered list of named ranges
//!
//! ## Codec
//!
//! - [`encode_range`] / [`decode_range`] — One range to/from a 30-character token
//! - [`encode_collection`] / [`decode_collection`] — A whole collection to/from one token
//! - [`codec::alphabet`] — The underlying padding-free base64url transport
//!
//! Tokens are deterministic: equal selections encode to byte-identical
//! tokens no matter the order in which hands were inserted, because all
//! serialization walks the universe in its frozen index order.
//!
//! ## Share Links
//!
//! [`share`] assembles collection share URLs of the shape
//! `{origin}/app/c/{slug}#{token}`, with the token in the fragment so that
//! it never travels to a server.

pub mod cards;
pub mod codec;
pub mod error;
pub mod share;

pub use cards::*;
pub use codec::*;
pub use error::Error;

/// Opaque printable string produced by the codec for embedding in a URL.
pub type Token = String;

/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}
