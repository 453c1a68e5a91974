pub mod dataset;
pub mod entry;
pub mod filter;
pub mod location;

pub use dataset::{MapData, ValidityMode};
pub use entry::{EntryType, Link, MapEntry};
pub use filter::FilterType;
pub use location::{LocationId, MapLocation};
