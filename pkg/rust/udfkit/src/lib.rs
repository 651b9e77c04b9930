// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Client-side descriptors for calling and registering user-defined functions.
//!
//! Re-exports the descriptor types of `udfkit-udf` and the value types of
//! `udfkit-type`, and offers [`logging::init`] for binaries that want the
//! crate's `tracing` output on stderr.

pub mod logging;

pub use udfkit_type as r#type;
pub use udfkit_type::{Blob, Diagnostic, Error, IntoValue, Params, Result, Value, params};
pub use udfkit_udf as udf;
pub use udfkit_udf::{
	Content, Destroy, FILE_HASH_SIZE, FILE_NAME_LEN, FileHash, FileName, InPlace, NameOverflow, Release, Slot,
	UdfCall, UdfConfig, UdfError, UdfFile, UdfFiles, UdfType,
};

pub use logging::{LogFormat, LoggingConfig};
