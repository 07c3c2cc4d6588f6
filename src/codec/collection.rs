use byteorder::BE;
use byteorder::ReadBytesExt;
use std::io::Read;

use super::alphabet;
use crate::Token;
use crate::cards::range::Range;
use crate::error::Error;

/// Collection represents an ordered list of named ranges, the unit a study
/// session or coaching pack is shared as. Order and duplicate names are
/// preserved, and names may be empty. The wire frame is a big-endian u16
/// entry count followed by, per entry, a big-endian u16 name length, the
/// name in utf-8, and the 22 packed range bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection(Vec<(String, Range)>);

impl Collection {
    /// Both the entry count and each name's byte length ride u16 fields.
    pub const MAX: usize = u16::MAX as usize;

    pub fn new() -> Self {
        Self::default()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn push(&mut self, name: String, range: Range) {
        self.0.push((name, range));
    }
    /// The entry a viewer lands on when opening a shared collection.
    pub fn first(&self) -> Option<&(String, Range)> {
        self.0.first()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, (String, Range)> {
        self.0.iter()
    }
}

impl From<Vec<(String, Range)>> for Collection {
    fn from(entries: Vec<(String, Range)>) -> Self {
        Self(entries)
    }
}
impl From<Collection> for Vec<(String, Range)> {
    fn from(collection: Collection) -> Self {
        collection.0
    }
}

impl FromIterator<(String, Range)> for Collection {
    fn from_iter<I: IntoIterator<Item = (String, Range)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = (String, Range);
    type IntoIter = std::vec::IntoIter<Self::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl crate::Arbitrary for Collection {
    fn random() -> Self {
        (0..rand::random_range(0..50))
            .map(|i| (format!("range {}", i), Range::random()))
            .collect()
    }
}

#[cfg(feature = "client")]
impl serde::Serialize for Collection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "client")]
impl<'de> serde::Deserialize<'de> for Collection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(Vec::deserialize(deserializer)?))
    }
}

/// Spell a collection as a share token. The whole frame is assembled first
/// and run through the alphabet in one pass, so the token length is fixed
/// by the entry names alone. Fails only when a count no longer fits its
/// u16 field.
pub fn encode_collection(collection: &Collection) -> Result<Token, Error> {
    if collection.len() > Collection::MAX {
        return Err(Error::CollectionTooLarge("too many entries for a u16 count"));
    }
    if collection.iter().any(|(name, _)| name.len() > Collection::MAX) {
        return Err(Error::CollectionTooLarge("name exceeds u16 length prefix"));
    }
    let size = 2 + collection
        .iter()
        .map(|(name, _)| 2 + name.len() + Range::BYTES)
        .sum::<usize>();
    let mut bytes = Vec::with_capacity(size);
    bytes.extend_from_slice(&(collection.len() as u16).to_be_bytes());
    for (name, range) in collection.iter() {
        bytes.extend_from_slice(&(name.len() as u16).to_be_bytes());
        bytes.extend_from_slice(name.as_bytes());
        bytes.extend_from_slice(&<[u8; Range::BYTES]>::from(*range));
    }
    Ok(alphabet::encode(&bytes))
}

/// Read a collection back out of a share token. The frame must account for
/// every decoded byte, so a token with bytes left over after the final
/// entry is rejected rather than silently truncated.
pub fn decode_collection(text: &str) -> Result<Collection, Error> {
    let bytes = alphabet::decode(text)?;
    let ref mut reader = std::io::Cursor::new(bytes.as_slice());
    let count = reader
        .read_u16::<BE>()
        .map_err(|_| Error::MalformedToken("missing entry count"))?;
    let mut entries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let length = reader
            .read_u16::<BE>()
            .map_err(|_| Error::MalformedToken("missing name length"))?;
        let mut name = vec![0u8; length as usize];
        reader
            .read_exact(&mut name)
            .map_err(|_| Error::MalformedToken("name overruns the token"))?;
        let name = String::from_utf8(name) //
            .map_err(|_| Error::MalformedToken("name is not valid utf-8"))?;
        let mut packed = [0u8; Range::BYTES];
        reader
            .read_exact(&mut packed)
            .map_err(|_| Error::MalformedToken("range overruns the token"))?;
        entries.push((name, Range::from(packed)));
    }
    if reader.position() != bytes.len() as u64 {
        return Err(Error::MalformedToken("trailing bytes after the final entry"));
    }
    Ok(Collection(entries))
}
