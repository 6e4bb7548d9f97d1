mod catalog;
mod cell;
mod universe;

pub use catalog::{Pattern, PatternCatalog};
pub use cell::Cell;
pub use universe::Universe;
