#[macro_use] extern crate error_chain;
#[cfg(feature = "openblas")]
extern crate openblas_src;
#[cfg(test)]
#[macro_use] extern crate unittest;

#[macro_use] mod macro_def;

pub mod errors;
pub use errors::{Error, ErrorKind, Result};

pub mod approx;
pub mod accel;
pub use accel::Accelerator;

mod vector;
pub use vector::{angle, Vector};

pub mod core;
pub use crate::core::{Matrix, MatrixIter};

mod concat;
mod map;
pub use map::Axis;

mod ops;
mod solve;
