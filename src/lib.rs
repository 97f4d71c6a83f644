pub mod cs;
pub mod error;
pub mod harness;

pub use cs::sort;
pub use error::{Error, Result};
