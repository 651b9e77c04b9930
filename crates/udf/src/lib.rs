// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Descriptors for registering and invoking user-defined functions (UDFs).
//!
//! This crate provides:
//! - [`UdfCall`], a reference to a module/function pair plus an externally owned argument list
//! - [`UdfFile`], the name, digest, kind and content of one UDF artifact
//! - [`UdfFiles`], a fixed-capacity collection of UDF files
//!
//! # Ownership
//!
//! Every descriptor can either be allocated by the crate or initialised inside caller storage:
//! - `create(..)` returns a `Box<T>`; destroying it releases the sub-resources and the allocation
//! - `init_in(slot, ..)` fills a caller-provided [`Slot`] and returns an [`InPlace`] handle; destroying it
//!   releases the sub-resources and leaves the slot empty
//!
//! Both handles are consumed by [`Destroy::destroy`], so a descriptor cannot be destroyed twice.
//!
//! ```ignore
//! let args = params![1, 2];
//! let call = UdfCall::create("test", "run", &args)?;
//! call.destroy();
//!
//! let mut slot = Slot::empty();
//! let mut files = UdfFiles::init_in(&mut slot, 3)?;
//! files.add("sum.lua", FileHash::zero(), Content::owned("function sum() end")?)?;
//! files.destroy();
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod call;
mod config;
mod error;
pub mod file;
mod files;
mod handle;

pub use call::UdfCall;
pub use config::UdfConfig;
pub use error::UdfError;
pub use file::{
	Content, FILE_HASH_SIZE, FILE_NAME_LEN, FILE_NAME_SIZE, FileHash, FileName, NameOverflow, UdfFile, UdfType,
};
pub use files::UdfFiles;
pub use handle::{Destroy, InPlace, Release, Slot};
pub use udfkit_type::{Error, Result};
