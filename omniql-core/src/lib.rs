//! # OmniQL Core
//!
//! Runtime contracts implemented by the readers behind generated OmniQL
//! interfaces.
//!
//! This crate provides:
//! - The [`VectorReader`] trait mirroring the generated `Vector<T>Reader`
//!   interfaces (`Len` / `Get`)
//! - [`VectorStringReader`] for vectors of scalar strings
//! - [`SliceVector`], a reference implementation over borrowed slots
//! - Error types for out-of-range access

pub mod error;
pub mod vector;

pub use error::{Error, Result};
pub use vector::{SliceVector, VectorIter, VectorReader, VectorStringReader, check_index};
