use super::hand::Hand;
use super::shape::Shape;
use crate::error::Error;

/// Range represents an unordered set of starting hands. nice to avoid heap allocation by packing the full 169-hand universe into three u64 words as an LSB bitstring, where bit i stands for the hand at grid index i. membership, insertion, and union are single bitwise operations independent of how many hands the range holds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Range([u64; 3]);

impl Range {
    /// Number of bytes a range packs into: 169 bits fit in 22.
    pub const BYTES: usize = 22;
    /// Number of distinct two-card deals the full universe covers.
    pub const COMBOS: usize = 1326;

    pub fn empty() -> Self {
        Self::default()
    }
    pub fn full() -> Self {
        Self(Self::mask())
    }
    /// All 13 pocket pairs.
    pub fn pairs() -> Self {
        Hand::exhaust().filter(|h| h.shape() == Shape::Pair).collect()
    }
    /// All 78 suited hands.
    pub fn suited() -> Self {
        Hand::exhaust().filter(|h| h.shape() == Shape::Suited).collect()
    }
    /// The 25 hands whose both cards rank Ten or above.
    pub fn broadway() -> Self {
        Hand::exhaust().filter(Hand::is_broadway).collect()
    }

    pub fn union(lhs: Self, rhs: Self) -> Self {
        Self([lhs.0[0] | rhs.0[0], lhs.0[1] | rhs.0[1], lhs.0[2] | rhs.0[2]])
    }
    pub fn size(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 3]
    }
    pub fn contains(&self, hand: &Hand) -> bool {
        let i = u8::from(*hand) as usize;
        self.0[i / 64] & (1 << (i % 64)) != 0
    }
    pub fn insert(&mut self, hand: Hand) {
        let i = u8::from(hand) as usize;
        self.0[i / 64] |= 1 << (i % 64);
    }
    pub fn remove(&mut self, hand: Hand) {
        let i = u8::from(hand) as usize;
        self.0[i / 64] &= !(1 << (i % 64));
    }

    /// Number of two-card deals the range covers, weighting each hand by its shape.
    pub fn combos(&self) -> usize {
        (*self).map(|hand| hand.combos()).sum()
    }
    /// Share of all 1326 deals, as a percentage.
    pub fn percent(&self) -> f32 {
        self.combos() as f32 / Self::COMBOS as f32 * 100.0
    }

    /// Words 0 and 1 are fully populated, word 2 carries the last 41 bits.
    const fn mask() -> [u64; 3] {
        [!0, !0, (1 << 41) - 1]
    }
}

/// we can empty a range from low to high
/// by removing the lowest hand until the range is empty
impl Iterator for Range {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0.iter().position(|word| *word != 0) {
            None => None,
            Some(i) => {
                let bit = self.0[i].trailing_zeros() as u8;
                let hand = Hand::at(i as u8 * 64 + bit);
                self.remove(hand);
                Some(hand)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

impl ExactSizeIterator for Range {}

/// we SUM/OR the hands to get the bitstring
impl FromIterator<Hand> for Range {
    fn from_iter<I: IntoIterator<Item = Hand>>(iter: I) -> Self {
        let mut range = Self::empty();
        for hand in iter {
            range.insert(hand);
        }
        range
    }
}

impl From<Hand> for Range {
    fn from(hand: Hand) -> Self {
        Self::from_iter([hand])
    }
}

/// byte isomorphism
/// bit i lands in byte i / 8 at position i % 8, LSB first. 169 bits pack
/// into 22 bytes and leave the top seven bits of the last byte at zero.
impl From<Range> for [u8; Range::BYTES] {
    fn from(range: Range) -> Self {
        let mut bytes = [0u8; Range::BYTES];
        bytes[0..8].copy_from_slice(&range.0[0].to_le_bytes());
        bytes[8..16].copy_from_slice(&range.0[1].to_le_bytes());
        bytes[16..22].copy_from_slice(&range.0[2].to_le_bytes()[..6]);
        bytes
    }
}

/// byte isomorphism
/// bits above index 168 are ignored on the way in
impl From<[u8; Range::BYTES]> for Range {
    fn from(bytes: [u8; Range::BYTES]) -> Self {
        let mut w0 = [0u8; 8];
        let mut w1 = [0u8; 8];
        let mut w2 = [0u8; 8];
        w0.copy_from_slice(&bytes[0..8]);
        w1.copy_from_slice(&bytes[8..16]);
        w2[..6].copy_from_slice(&bytes[16..22]);
        let mask = Self::mask();
        Self([
            u64::from_le_bytes(w0) & mask[0],
            u64::from_le_bytes(w1) & mask[1],
            u64::from_le_bytes(w2) & mask[2],
        ])
    }
}

/// str isomorphism
/// whitespace-separated identifiers, fallible because every token must name
/// one of the 169 hands
impl TryFrom<&str> for Range {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace().map(Hand::try_from).collect()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, hand) in (*self).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", hand)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Range {
    fn random() -> Self {
        let mask = Self::mask();
        Self([
            rand::random::<u64>() & mask[0],
            rand::random::<u64>() & mask[1],
            rand::random::<u64>() & mask[2],
        ])
    }
}

#[cfg(feature = "client")]
impl serde::Serialize for Range {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(*self)
    }
}

#[cfg(feature = "client")]
impl<'de> serde::Deserialize<'de> for Range {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Vec::<Hand>::deserialize(deserializer)?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_bytes() {
        let range = Range::random();
        assert_eq!(range, Range::from(<[u8; Range::BYTES]>::from(range)));
    }

    #[test]
    fn bijective_str() {
        let range = Range::random();
        assert_eq!(range, Range::try_from(range.to_string().as_str()).unwrap());
    }

    #[test]
    fn set_operations() {
        let aa = Hand::try_from("AA").unwrap();
        let kk = Hand::try_from("KK").unwrap();
        let mut range = Range::empty();
        assert!(range.is_empty());
        range.insert(aa);
        range.insert(aa);
        range.insert(kk);
        assert_eq!(range.size(), 2);
        assert!(range.contains(&aa));
        range.remove(aa);
        assert!(!range.contains(&aa));
        assert!(range.contains(&kk));
    }

    #[test]
    fn extremes() {
        assert_eq!(Range::empty().size(), 0);
        assert_eq!(Range::full().size(), 169);
        assert_eq!(Range::full().combos(), Range::COMBOS);
        assert_eq!(Range::full().percent(), 100.0);
        assert_eq!(Range::empty().percent(), 0.0);
    }

    #[test]
    fn quick_selects() {
        assert_eq!(Range::pairs().size(), 13);
        assert_eq!(Range::suited().size(), 78);
        assert_eq!(Range::broadway().size(), 25);
        assert_eq!(Range::pairs().combos(), 13 * 6);
        let both = Range::union(Range::pairs(), Range::broadway());
        assert_eq!(both.size(), 13 + 25 - 5);
    }

    #[test]
    fn hand_iteration() {
        let range = Range::try_from("T9o AA KQs").unwrap();
        let mut iter = range.into_iter();
        assert_eq!(iter.next(), Some(Hand::try_from("AA").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("KQs").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("T9o").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn byte_endpoints() {
        let lo = Range::from(Hand::try_from("AA").unwrap());
        let hi = Range::from(Hand::try_from("22").unwrap());
        assert_eq!(<[u8; Range::BYTES]>::from(lo)[0], 0b0000_0001);
        assert_eq!(<[u8; Range::BYTES]>::from(hi)[21], 0b0000_0001);
    }

    #[test]
    fn spare_bits_ignored() {
        let mut bytes = [0u8; Range::BYTES];
        bytes[21] = 0xFF;
        let range = Range::from(bytes);
        assert_eq!(range.size(), 1);
        assert!(range.contains(&Hand::try_from("22").unwrap()));
    }

    #[test]
    fn rejects_junk() {
        assert!(Range::try_from("AA KQx").is_err());
        assert!(Range::try_from("KAs").is_err());
        assert_eq!(Range::try_from(""), Ok(Range::empty()));
    }
}
