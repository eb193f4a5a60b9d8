pub mod craft;
pub mod create_formula;

pub use craft::*;
pub use create_formula::*;
