// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	collections::TryReserveError,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

mod hex;

/// An owned, growable sequence of bytes.
///
/// `len()` is the number of bytes in use and `capacity()` the number of bytes
/// allocated; `len() <= capacity()` always holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn empty() -> Self {
		Self(Vec::new())
	}

	/// Allocates exactly `capacity` bytes, reporting allocation failure
	/// instead of aborting.
	pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
		let mut bytes = Vec::new();
		bytes.try_reserve_exact(capacity)?;
		Ok(Self(bytes))
	}

	pub fn from_slice(bytes: &[u8]) -> Self {
		Self(bytes.to_vec())
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.0.capacity()
	}

	/// Appends `bytes`, growing the allocation fallibly when needed.
	pub fn try_extend_from_slice(&mut self, bytes: &[u8]) -> Result<(), TryReserveError> {
		self.0.try_reserve(bytes.len())?;
		self.0.extend_from_slice(bytes);
		Ok(())
	}

	pub fn clear(&mut self) {
		self.0.clear();
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.0
	}
}

impl Deref for Blob {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Self::from_slice(bytes)
	}
}

impl From<&str> for Blob {
	fn from(text: &str) -> Self {
		Self::from_slice(text.as_bytes())
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_hex())
	}
}
