pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod range;
pub use range::*;

pub mod rank;
pub use rank::*;

pub mod shape;
pub use shape::*;
