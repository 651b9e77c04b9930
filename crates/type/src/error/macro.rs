// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Wraps anything implementing `IntoDiagnostic` into an [`Error`](crate::Error).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Returns early with an [`Error`](crate::Error) built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Diagnostic, Error};

	fn diagnostic() -> Diagnostic {
		Diagnostic {
			code: "TEST_001".to_string(),
			message: "test".to_string(),
			..Default::default()
		}
	}

	fn fails() -> Result<(), Error> {
		return_error!(diagnostic());
	}

	#[test]
	fn test_error_macro() {
		let err = error!(diagnostic());
		assert_eq!(err.code(), "TEST_001");
	}

	#[test]
	fn test_return_error_macro() {
		let err = fails().unwrap_err();
		assert_eq!(err.code, "TEST_001");
	}
}
