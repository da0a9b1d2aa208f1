pub mod section;
pub mod table;

pub use section::*;
pub use table::*;
