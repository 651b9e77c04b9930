// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Logging setup diagnostic functions

use crate::error::diagnostic::Diagnostic;

/// The log filter directive could not be parsed
pub fn invalid_log_filter(filter: &str, reason: &str) -> Diagnostic {
	Diagnostic {
		code: "LOGGING_001".to_string(),
		message: format!("Invalid log filter: '{}'", filter),
		label: Some(reason.to_string()),
		help: Some("Use directives such as 'info' or 'udfkit_udf=trace,warn'".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A global subscriber was installed before logging initialisation ran
pub fn subscriber_already_set(reason: &str) -> Diagnostic {
	Diagnostic {
		code: "LOGGING_002".to_string(),
		message: "A global tracing subscriber is already installed".to_string(),
		label: Some(reason.to_string()),
		help: Some("Initialise logging once, at program start".to_string()),
		notes: vec![],
		cause: None,
	}
}
