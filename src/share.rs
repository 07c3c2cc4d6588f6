//! Share link assembly.
//!
//! A collection travels as `{origin}/app/c/{slug}#{token}`. The slug is a
//! readable, url-safe rendering of the user-chosen link name and carries no
//! data, the token rides the fragment so the range bytes never reach a
//! server in a request line or log.

use crate::codec;
use crate::codec::Collection;
use crate::error::Error;

/// Flatten a link name into a url path segment. Whitespace runs become
/// single dashes, anything outside lowercase ascii alphanumerics and dashes
/// is dropped, and dash runs collapse. Names with no usable characters
/// flatten to the empty string, which the caller may or may not accept.
pub fn slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        match c {
            'a'..='z' | '0'..='9' => slug.push(c),
            '-' if !slug.ends_with('-') => slug.push(c),
            _ => continue,
        }
    }
    slug
}

/// Encode a collection and assemble its share link under the given name.
pub fn collection_url(origin: &str, name: &str, collection: &Collection) -> Result<String, Error> {
    let token = codec::encode_collection(collection)?;
    let origin = origin.trim_end_matches('/');
    Ok(format!("{}/app/c/{}#{}", origin, slug(name), token))
}
