//! Domain models for the stockbot core.

mod knowledge;
mod matching;

pub use knowledge::*;
pub use matching::*;
