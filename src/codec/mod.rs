pub mod alphabet;

mod collection;
pub use collection::*;

mod range;
pub use range::*;
