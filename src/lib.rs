#![doc = include_str!("../README.md")]

#[cfg(not(target_pointer_width = "64"))]
compile_error!("compilation is only possible for 64-bit targets");

mod cell;
mod error;
mod nibble;
mod table;
mod walk;

pub use error::Error;
pub use table::Table;
pub use walk::SizeReport;
