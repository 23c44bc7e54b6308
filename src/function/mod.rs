//! Helper functions.

pub mod convert;
pub mod focal;

pub use convert::*;
pub use focal::*;
