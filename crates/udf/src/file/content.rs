// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::debug;
use udfkit_type::{Blob, return_error};

use crate::UdfError;

/// The byte content of a UDF file.
///
/// Owned content is freed when the file is destroyed; borrowed content belongs
/// to the caller and is left alone. `size()` never exceeds `capacity()` and
/// both fit in 32 bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content<'c> {
	bytes: Bytes<'c>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bytes<'c> {
	Owned(Blob),
	Borrowed(&'c [u8]),
}

impl<'c> Content<'c> {
	/// Empty borrowed content without backing storage.
	pub const fn empty() -> Self {
		Self {
			bytes: Bytes::Borrowed(&[]),
		}
	}

	/// Owned, empty content with exactly `capacity` bytes reserved.
	pub fn with_capacity(capacity: u32) -> crate::Result<Self> {
		let blob = Blob::try_with_capacity(capacity as usize).map_err(|_| UdfError::AllocationFailed {
			target: "UDF file content",
			bytes: capacity as usize,
		})?;
		Ok(Self {
			bytes: Bytes::Owned(blob),
		})
	}

	/// Content the file takes ownership of.
	pub fn owned(bytes: impl Into<Blob>) -> crate::Result<Self> {
		let blob = bytes.into();
		check_size(blob.len())?;
		Ok(Self {
			bytes: Bytes::Owned(blob),
		})
	}

	/// Content that stays owned by the caller.
	pub fn borrowed(bytes: &'c [u8]) -> crate::Result<Self> {
		check_size(bytes.len())?;
		Ok(Self {
			bytes: Bytes::Borrowed(bytes),
		})
	}

	pub fn is_owned(&self) -> bool {
		matches!(self.bytes, Bytes::Owned(_))
	}

	pub fn as_bytes(&self) -> &[u8] {
		match &self.bytes {
			Bytes::Owned(blob) => blob.as_bytes(),
			Bytes::Borrowed(bytes) => bytes,
		}
	}

	/// Number of bytes in use.
	pub fn size(&self) -> u32 {
		self.as_bytes().len() as u32
	}

	/// Number of bytes allocated. Borrowed content reports its own length.
	pub fn capacity(&self) -> u32 {
		match &self.bytes {
			Bytes::Owned(blob) => u32::try_from(blob.capacity()).unwrap_or(u32::MAX),
			Bytes::Borrowed(bytes) => bytes.len() as u32,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.as_bytes().is_empty()
	}

	/// Appends `bytes`, first copying borrowed content into an owned buffer.
	///
	/// Nothing changes when the append fails.
	pub fn extend_from_slice(&mut self, bytes: &[u8]) -> crate::Result<()> {
		let size = self.as_bytes().len().saturating_add(bytes.len());
		check_size(size)?;

		if let Bytes::Borrowed(current) = self.bytes {
			let mut blob = Blob::try_with_capacity(size).map_err(|_| UdfError::AllocationFailed {
				target: "UDF file content",
				bytes: size,
			})?;
			blob.try_extend_from_slice(current).map_err(|_| UdfError::AllocationFailed {
				target: "UDF file content",
				bytes: size,
			})?;
			self.bytes = Bytes::Owned(blob);
		}

		if let Bytes::Owned(blob) = &mut self.bytes {
			blob.try_extend_from_slice(bytes).map_err(|_| UdfError::AllocationFailed {
				target: "UDF file content",
				bytes: size,
			})?;
		}
		Ok(())
	}

	/// Frees owned bytes and resets to empty borrowed content.
	///
	/// Returns the number of bytes that were freed.
	pub fn release(&mut self) -> usize {
		match std::mem::replace(&mut self.bytes, Bytes::Borrowed(&[])) {
			Bytes::Owned(blob) => {
				let freed = blob.capacity();
				debug!(size = blob.len(), capacity = freed, "released owned UDF file content");
				freed
			}
			Bytes::Borrowed(_) => 0,
		}
	}
}

impl Default for Content<'_> {
	fn default() -> Self {
		Self::empty()
	}
}

fn check_size(size: usize) -> crate::Result<u32> {
	match u32::try_from(size) {
		Ok(size) => Ok(size),
		Err(_) => return_error!(UdfError::ContentTooLarge {
			size,
			max: u32::MAX as usize,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty() {
		let content = Content::empty();
		assert!(!content.is_owned());
		assert_eq!(content.size(), 0);
		assert_eq!(content.capacity(), 0);
	}

	#[test]
	fn test_with_capacity() {
		let content = Content::with_capacity(64).unwrap();
		assert!(content.is_owned());
		assert_eq!(content.size(), 0);
		assert_eq!(content.capacity(), 64);
	}

	#[test]
	fn test_owned() {
		let content = Content::owned("function sum() end").unwrap();
		assert!(content.is_owned());
		assert_eq!(content.as_bytes(), b"function sum() end");
		assert!(content.size() <= content.capacity());
	}

	#[test]
	fn test_borrowed() {
		let source = b"function filter() end".to_vec();
		let content = Content::borrowed(&source).unwrap();
		assert!(!content.is_owned());
		assert_eq!(content.size(), content.capacity());
		assert_eq!(content.as_bytes().as_ptr(), source.as_ptr());
	}

	#[test]
	fn test_extend_owned() {
		let mut content = Content::with_capacity(4).unwrap();
		content.extend_from_slice(b"func").unwrap();
		assert_eq!(content.capacity(), 4);
		content.extend_from_slice(b"tion").unwrap();
		assert_eq!(content.as_bytes(), b"function");
		assert!(content.size() <= content.capacity());
	}

	#[test]
	fn test_extend_borrowed_copies_first() {
		let source = b"function".to_vec();
		let mut content = Content::borrowed(&source).unwrap();
		content.extend_from_slice(b" sum() end").unwrap();

		assert!(content.is_owned());
		assert_eq!(content.as_bytes(), b"function sum() end");
		assert_eq!(source, b"function");
	}

	#[test]
	fn test_release_owned() {
		let mut content = Content::with_capacity(32).unwrap();
		assert_eq!(content.release(), 32);
		assert_eq!(content, Content::empty());
	}

	#[test]
	fn test_release_borrowed_frees_nothing() {
		let source = vec![1u8, 2, 3];
		let mut content = Content::borrowed(&source).unwrap();
		assert_eq!(content.release(), 0);
		assert_eq!(source, vec![1, 2, 3]);
	}

	#[test]
	fn test_check_size() {
		assert_eq!(check_size(18).unwrap(), 18);
		assert_eq!(check_size(u32::MAX as usize).unwrap(), u32::MAX);

		let err = check_size(u32::MAX as usize + 1).unwrap_err();
		assert_eq!(err.code(), "UDF_005");
	}
}
