// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Display, Formatter};

use udfkit_type::{
	Error,
	error::diagnostic::hex::{invalid_hex_length, invalid_hex_string},
	util::hex::{decode, encode},
};

use crate::UdfError;

/// Size of a UDF file digest in bytes.
pub const FILE_HASH_SIZE: usize = 20;

/// Digest of a UDF file's content.
///
/// The digest is opaque to this crate: it is supplied by whoever finalised the
/// content and is never computed here.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FileHash([u8; FILE_HASH_SIZE]);

impl FileHash {
	pub const fn zero() -> Self {
		Self([0; FILE_HASH_SIZE])
	}

	pub const fn from_bytes(bytes: [u8; FILE_HASH_SIZE]) -> Self {
		Self(bytes)
	}

	pub fn from_hex(text: &str) -> crate::Result<Self> {
		let bytes = decode(text).map_err(|err| Error(invalid_hex_string(text, err)))?;
		let bytes: [u8; FILE_HASH_SIZE] = bytes
			.as_slice()
			.try_into()
			.map_err(|_| Error(invalid_hex_length(text, FILE_HASH_SIZE, bytes.len())))?;
		Ok(Self(bytes))
	}

	pub fn to_hex(&self) -> String {
		encode(&self.0)
	}

	pub fn as_bytes(&self) -> &[u8; FILE_HASH_SIZE] {
		&self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|b| *b == 0)
	}
}

impl From<[u8; FILE_HASH_SIZE]> for FileHash {
	fn from(bytes: [u8; FILE_HASH_SIZE]) -> Self {
		Self(bytes)
	}
}

impl TryFrom<&[u8]> for FileHash {
	type Error = Error;

	fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
		let digest: [u8; FILE_HASH_SIZE] = bytes.try_into().map_err(|_| UdfError::InvalidHash {
			expected: FILE_HASH_SIZE,
			actual: bytes.len(),
		})?;
		Ok(Self(digest))
	}
}

impl Debug for FileHash {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FileHash").field(&self.to_hex()).finish()
	}
}

impl Display for FileHash {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}
