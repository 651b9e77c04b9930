// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use udfkit_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UdfError {
	#[error("UDF module name must not be empty")]
	EmptyModule,

	#[error("UDF function name must not be empty in module '{module}'")]
	EmptyFunction {
		module: String,
	},

	#[error("UDF file name is {len} bytes long, the maximum is {max}")]
	NameTooLong {
		name: String,
		len: usize,
		max: usize,
	},

	#[error("UDF file hash must be {expected} bytes, got {actual}")]
	InvalidHash {
		expected: usize,
		actual: usize,
	},

	#[error("UDF file content of {size} bytes exceeds the maximum of {max}")]
	ContentTooLarge {
		size: usize,
		max: usize,
	},

	#[error("Failed to allocate {bytes} bytes for {target}")]
	AllocationFailed {
		target: &'static str,
		bytes: usize,
	},

	#[error("UDF file collection is full ({capacity} entries)")]
	CollectionFull {
		capacity: u32,
	},

	#[error("UDF file name contains invalid character {ch:?} at byte {index}")]
	InvalidNameCharacter {
		ch: char,
		index: usize,
	},
}

impl IntoDiagnostic for UdfError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			UdfError::EmptyModule => Diagnostic {
				code: "UDF_001".to_string(),
				message,
				label: Some("empty module name".to_string()),
				help: Some("Provide the name of the registered UDF module, e.g. 'test'".to_string()),
				notes: vec![],
				cause: None,
			},

			UdfError::EmptyFunction {
				..
			} => Diagnostic {
				code: "UDF_002".to_string(),
				message,
				label: Some("empty function name".to_string()),
				help: Some("Provide the name of a function exported by the module, e.g. 'run'".to_string()),
				notes: vec![],
				cause: None,
			},

			UdfError::NameTooLong {
				name,
				max,
				..
			} => {
				let preview: String = name.chars().take(32).collect();
				Diagnostic {
					code: "UDF_003".to_string(),
					message,
					label: Some(format!("name starting with '{}' does not fit", preview)),
					help: Some(format!(
						"Shorten the file name to at most {} bytes, or use the truncate name overflow policy",
						max
					)),
					notes: vec!["UDF file names are stored in a fixed 128-byte field including the terminator"
						.to_string()],
					cause: None,
				}
			}

			UdfError::InvalidHash {
				expected,
				..
			} => Diagnostic {
				code: "UDF_004".to_string(),
				message,
				label: Some("wrong digest length".to_string()),
				help: Some(format!("Supply a digest of exactly {} bytes", expected)),
				notes: vec![],
				cause: None,
			},

			UdfError::ContentTooLarge {
				..
			} => Diagnostic {
				code: "UDF_005".to_string(),
				message,
				label: Some("content size does not fit in 32 bits".to_string()),
				help: Some("Split the UDF into smaller modules".to_string()),
				notes: vec![],
				cause: None,
			},

			UdfError::AllocationFailed {
				..
			} => Diagnostic {
				code: "UDF_006".to_string(),
				message,
				label: Some("allocation failed".to_string()),
				help: None,
				notes: vec!["No partially constructed descriptor was returned".to_string()],
				cause: None,
			},

			UdfError::CollectionFull {
				..
			} => Diagnostic {
				code: "UDF_007".to_string(),
				message,
				label: Some("no free slot".to_string()),
				help: Some("Create the collection with a larger capacity".to_string()),
				notes: vec!["UDF file collections have a fixed capacity and never grow".to_string()],
				cause: None,
			},

			UdfError::InvalidNameCharacter {
				..
			} => Diagnostic {
				code: "UDF_008".to_string(),
				message,
				label: Some("non-printable character".to_string()),
				help: Some("UDF file names may only contain printable characters".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<UdfError> for Error {
	fn from(err: UdfError) -> Self {
		Error(err.into_diagnostic())
	}
}
