pub mod formula;

pub use formula::*;
