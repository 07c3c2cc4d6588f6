use super::rank::Rank;
use super::shape::Shape;
use crate::error::Error;

/// Hand represents one of the 169 canonical hold'em starting hands, the suit-blind classes a preflop range is built from. Stored as a u8 index into the 13x13 grid laid out row-major from Ace down to Two: row r and column c meet at index r * 13 + c, the diagonal holds pairs, above the diagonal sits suited, below offsuit. So AA = 0, AKs = 1, A2s = 12, AKo = 13, 22 = 168.
///
/// The index encoding is what the codec packs into bitsets, so it is frozen.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u8);

impl Hand {
    /// Number of canonical starting hands: 13 pairs + 78 suited + 78 offsuit.
    pub const N: u8 = 169;

    /// The pair of a given rank. AA sits at index 0, 22 at 168.
    pub fn pair(rank: Rank) -> Self {
        let r = 12 - u8::from(rank);
        Self(r * 13 + r)
    }
    /// The suited hand of two distinct ranks. The higher rank must come first.
    pub fn suited(hi: Rank, lo: Rank) -> Self {
        debug_assert!(hi > lo);
        Self((12 - u8::from(hi)) * 13 + (12 - u8::from(lo)))
    }
    /// The offsuit hand of two distinct ranks. The higher rank must come first.
    pub fn offsuit(hi: Rank, lo: Rank) -> Self {
        debug_assert!(hi > lo);
        Self((12 - u8::from(lo)) * 13 + (12 - u8::from(hi)))
    }

    /// The higher of the two ranks, or the paired rank itself.
    pub fn hi(&self) -> Rank {
        Rank::from(12 - std::cmp::min(self.row(), self.col()))
    }
    /// The lower of the two ranks, or the paired rank itself.
    pub fn lo(&self) -> Rank {
        Rank::from(12 - std::cmp::max(self.row(), self.col()))
    }
    /// Pair on the diagonal, suited above it, offsuit below.
    pub fn shape(&self) -> Shape {
        match self.row().cmp(&self.col()) {
            std::cmp::Ordering::Equal => Shape::Pair,
            std::cmp::Ordering::Less => Shape::Suited,
            std::cmp::Ordering::Greater => Shape::Offsuit,
        }
    }
    /// Number of distinct two-card deals collapsing into this hand.
    pub fn combos(&self) -> usize {
        self.shape().combos()
    }
    /// Both hole cards rank Ten or above.
    pub fn is_broadway(&self) -> bool {
        self.lo().is_broadway()
    }
    /// All 169 hands in index order.
    pub fn exhaust() -> super::hands::HandIterator {
        super::hands::HandIterator::default()
    }

    /// Trusted constructor for callers that already hold a valid index.
    pub(crate) const fn at(index: u8) -> Self {
        Self(index)
    }
    fn row(&self) -> u8 {
        self.0 / 13
    }
    fn col(&self) -> u8 {
        self.0 % 13
    }
}

/// u8 isomorphism
/// the grid index is the canonical wire representation
impl From<Hand> for u8 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// u8 isomorphism
/// indices arrive from untrusted callers, so this direction is fallible
impl TryFrom<u8> for Hand {
    type Error = Error;
    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index < Self::N {
            Ok(Self(index))
        } else {
            Err(Error::IndexOutOfRange(index))
        }
    }
}

/// str isomorphism
/// canonical identifiers only: "AA", "AKs", "AKo". the higher rank leads,
/// pairs take no suffix, and nothing else parses.
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let a = chars.next().and_then(|c| Rank::try_from(c).ok());
        let b = chars.next().and_then(|c| Rank::try_from(c).ok());
        let suffix = chars.next();
        let end = chars.next();
        match (a, b, suffix, end) {
            (Some(a), Some(b), None, None) if a == b => Ok(Self::pair(a)),
            (Some(a), Some(b), Some('s'), None) if a > b => Ok(Self::suited(a, b)),
            (Some(a), Some(b), Some('o'), None) if a > b => Ok(Self::offsuit(a, b)),
            _ => Err(Error::UnknownHand(s.to_string())),
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.hi(), self.lo(), self.shape().suffix())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self::at(rand::random_range(0..Self::N))
    }
}

#[cfg(feature = "client")]
impl serde::Serialize for Hand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "client")]
impl<'de> serde::Deserialize<'de> for Hand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        assert!(Hand::exhaust().all(|h| h == Hand::try_from(u8::from(h)).unwrap()));
    }

    #[test]
    fn bijective_str() {
        assert!(Hand::exhaust().all(|h| h == Hand::try_from(h.to_string().as_str()).unwrap()));
    }

    #[test]
    fn grid_corners() {
        assert_eq!(u8::from(Hand::try_from("AA").unwrap()), 0);
        assert_eq!(u8::from(Hand::try_from("AKs").unwrap()), 1);
        assert_eq!(u8::from(Hand::try_from("A2s").unwrap()), 12);
        assert_eq!(u8::from(Hand::try_from("AKo").unwrap()), 13);
        assert_eq!(u8::from(Hand::try_from("A2o").unwrap()), 156);
        assert_eq!(u8::from(Hand::try_from("22").unwrap()), 168);
    }

    #[test]
    fn rejects_junk() {
        for s in ["", "A", "AK", "KAs", "KAo", "AAs", "AAo", "aks", "AKx", "AKss", "XX"] {
            assert_eq!(Hand::try_from(s), Err(Error::UnknownHand(s.to_string())));
        }
    }

    #[test]
    fn rejects_index_overflow() {
        assert_eq!(Hand::try_from(169u8), Err(Error::IndexOutOfRange(169)));
        assert_eq!(Hand::try_from(255u8), Err(Error::IndexOutOfRange(255)));
    }

    #[test]
    fn combos_sum() {
        assert_eq!(Hand::exhaust().map(|h| h.combos()).sum::<usize>(), 1326);
    }

    #[test]
    fn broadway_block() {
        assert_eq!(Hand::exhaust().filter(Hand::is_broadway).count(), 25);
        assert!(Hand::try_from("ATs").unwrap().is_broadway());
        assert!(!Hand::try_from("A9s").unwrap().is_broadway());
    }

    #[test]
    fn ranks_and_shape() {
        let h = Hand::try_from("KQo").unwrap();
        assert_eq!(h.hi(), Rank::King);
        assert_eq!(h.lo(), Rank::Queen);
        assert_eq!(h.shape(), Shape::Offsuit);
        let p = Hand::try_from("77").unwrap();
        assert_eq!(p.hi(), p.lo());
        assert_eq!(p.shape(), Shape::Pair);
    }
}
