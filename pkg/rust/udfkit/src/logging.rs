// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Installs a global `tracing` subscriber for binaries built on udfkit.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use udfkit_type::{
	Error,
	error::diagnostic::logging::{invalid_log_filter, subscriber_already_set},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Plain,
	Json,
}

/// Logging setup applied by [`init`].
///
/// `RUST_LOG`, when set, takes precedence over `filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
	pub filter: String,
	pub format: LogFormat,
}

impl LoggingConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn filter(mut self, filter: impl Into<String>) -> Self {
		self.filter = filter.into();
		self
	}

	pub fn format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	/// Parses the configured filter directives.
	pub fn env_filter(&self) -> crate::Result<EnvFilter> {
		EnvFilter::try_new(&self.filter).map_err(|err| Error(invalid_log_filter(&self.filter, &err.to_string())))
	}
}

impl Default for LoggingConfig {
	fn default() -> Self {
		Self {
			filter: "info".to_string(),
			format: LogFormat::Plain,
		}
	}
}

/// Installs the global subscriber described by `config`, writing to stderr.
///
/// Fails when the filter does not parse or a global subscriber already exists.
pub fn init(config: &LoggingConfig) -> crate::Result<()> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => config.env_filter()?,
	};

	let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
	let installed = match config.format {
		LogFormat::Plain => builder.try_init(),
		LogFormat::Json => builder.json().try_init(),
	};
	installed.map_err(|err| Error(subscriber_already_set(&err.to_string())))?;

	debug!(filter = %config.filter, format = ?config.format, "logging initialised");
	Ok(())
}
