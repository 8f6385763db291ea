pub mod curves;
pub mod table;
pub mod header;
pub mod config;
pub mod error;

pub use curves::{Curve, GammaCurve};
pub use table::{TableGenerator, Values, SCALE, TABLE_SIZE};
pub use header::{CHeader, HeaderLayout};
pub use config::Config;
pub use error::GenerateError;
