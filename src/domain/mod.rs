//! Domain layer - Tag model and static analysis

pub mod numeric;
pub mod site;
pub mod tags;

pub use numeric::NumericClass;
pub use site::{SiteKind, TagSite};
