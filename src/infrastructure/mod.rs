pub mod contracts;

pub use contracts::*;
