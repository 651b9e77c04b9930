// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Shared value types for udfkit.
//!
//! This crate carries the collaborators the UDF descriptors are built from:
//! - [`Value`] and [`Params`], the ordered argument list a UDF call references
//! - [`Blob`], the byte buffer UDF file content is supplied as
//! - [`Diagnostic`] and [`Error`], the error representation every udfkit crate returns

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod params;
pub mod util;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic};
pub use params::Params;
pub use value::{Blob, IntoValue, Value};

pub type Result<T> = std::result::Result<T, Error>;
