// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::NameOverflow;

/// Defaults applied when building UDF descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UdfConfig {
	/// Policy for file names longer than 127 bytes.
	pub name_overflow: NameOverflow,
	/// Capacity of collections built with `UdfFiles::from_config`.
	pub files_capacity: u32,
}

impl UdfConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name_overflow(mut self, policy: NameOverflow) -> Self {
		self.name_overflow = policy;
		self
	}

	pub fn files_capacity(mut self, capacity: u32) -> Self {
		self.files_capacity = capacity;
		self
	}
}

impl Default for UdfConfig {
	fn default() -> Self {
		Self {
			name_overflow: NameOverflow::Reject,
			files_capacity: 16,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder() {
		let config = UdfConfig::new().name_overflow(NameOverflow::Truncate).files_capacity(3);
		assert_eq!(config.name_overflow, NameOverflow::Truncate);
		assert_eq!(config.files_capacity, 3);
	}

	#[test]
	fn test_deserialize_partial() {
		let config: UdfConfig = serde_json::from_str(r#"{"files_capacity": 4}"#).unwrap();
		assert_eq!(config.files_capacity, 4);
		assert_eq!(config.name_overflow, NameOverflow::Reject);
	}

	#[test]
	fn test_deserialize_policy() {
		let config: UdfConfig = serde_json::from_str(r#"{"name_overflow": "truncate"}"#).unwrap();
		assert_eq!(config.name_overflow, NameOverflow::Truncate);
		assert_eq!(config.files_capacity, 16);
	}
}
