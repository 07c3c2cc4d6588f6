/// How the two ranks of a starting hand relate: paired, suited, or offsuit.
///
/// The shape fixes how many of the 1326 two-card combinations fall into the
/// category: a pair can be dealt 6 ways, a suited hand 4, an offsuit hand 12.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Shape {
    Pair = 0,
    Suited = 1,
    Offsuit = 2,
}

impl Shape {
    /// All three shapes.
    pub const fn all() -> [Self; 3] {
        [Self::Pair, Self::Suited, Self::Offsuit]
    }
    /// Number of distinct two-card deals in a category of this shape.
    pub const fn combos(&self) -> usize {
        match self {
            Self::Pair => 6,
            Self::Suited => 4,
            Self::Offsuit => 12,
        }
    }
    /// Identifier suffix: pairs have none, suited `s`, offsuit `o`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Pair => "",
            Self::Suited => "s",
            Self::Offsuit => "o",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pair => write!(f, "pair"),
            Self::Suited => write!(f, "suited"),
            Self::Offsuit => write!(f, "offsuit"),
        }
    }
}
