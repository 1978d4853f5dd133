mod error;
mod range;
mod table;

pub use error::VersionError;
pub use range::VersionRange;
pub use table::{DeprecationTable, parse_version};

pub type Result<T> = std::result::Result<T, VersionError>;
