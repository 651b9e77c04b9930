// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Hex decoding diagnostic functions

use crate::{error::diagnostic::Diagnostic, util::hex::DecodeError};

/// Invalid hexadecimal string
pub fn invalid_hex_string(text: &str, error: DecodeError) -> Diagnostic {
	Diagnostic {
		code: "HEX_001".to_string(),
		message: format!("Invalid hexadecimal string: '{}'", text),
		label: Some(error.to_string()),
		help: Some("Hex strings should only contain 0-9, a-f, A-F characters and have an even length".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Decoded hex has the wrong number of bytes for a fixed-size target
pub fn invalid_hex_length(text: &str, expected: usize, actual: usize) -> Diagnostic {
	Diagnostic {
		code: "HEX_002".to_string(),
		message: format!("Hexadecimal string '{}' decodes to {} bytes, expected {}", text, actual, expected),
		label: Some("wrong digest length".to_string()),
		help: Some(format!("Provide exactly {} hex characters", expected * 2)),
		notes: vec![],
		cause: None,
	}
}
