//! `cvdutils` is a library containing filesystem utilities for the cvd project.

#![warn(missing_docs)]

pub mod error;
pub mod file;

//--------------------------------------------------------------------------------------------------
// Exports
//--------------------------------------------------------------------------------------------------

pub use error::*;
pub use file::*;
