// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use tracing::instrument;
use udfkit_type::Blob;

use crate::handle::{InPlace, Release, Slot};

mod content;
mod hash;
mod name;

pub use content::Content;
pub use hash::{FILE_HASH_SIZE, FileHash};
pub use name::{FILE_NAME_LEN, FILE_NAME_SIZE, FileName, NameOverflow};

/// Kind of UDF a file contains.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UdfType {
	#[default]
	Lua,
}

impl UdfType {
	/// Numeric tag of the kind as seen by the remote engine.
	pub fn tag(&self) -> u8 {
		match self {
			UdfType::Lua => 0,
		}
	}
}

impl Display for UdfType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			UdfType::Lua => f.write_str("LUA"),
		}
	}
}

/// One UDF artifact: its registered name, content digest, kind and bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UdfFile<'c> {
	name: FileName,
	hash: FileHash,
	udf_type: UdfType,
	content: Content<'c>,
}

impl<'c> UdfFile<'c> {
	/// An empty file: no name, zero hash, [`UdfType::Lua`], empty borrowed content.
	pub const fn new() -> Self {
		Self {
			name: FileName::empty(),
			hash: FileHash::zero(),
			udf_type: UdfType::Lua,
			content: Content::empty(),
		}
	}

	/// Builds a fully populated file, validating the name before anything is kept.
	pub fn from_parts(name: &str, hash: FileHash, content: Content<'c>) -> crate::Result<Self> {
		Self::from_parts_with(name, NameOverflow::Reject, hash, content)
	}

	pub fn from_parts_with(
		name: &str,
		policy: NameOverflow,
		hash: FileHash,
		content: Content<'c>,
	) -> crate::Result<Self> {
		Ok(Self {
			name: FileName::with_policy(name, policy)?,
			hash,
			udf_type: UdfType::Lua,
			content,
		})
	}

	/// Allocates a new, empty self-owned file.
	#[instrument(name = "udf::file::create", level = "trace")]
	pub fn create() -> Box<Self> {
		Box::new(Self::new())
	}

	/// Initialises an empty file inside caller-provided storage.
	#[instrument(name = "udf::file::init_in", level = "trace", skip(slot))]
	pub fn init_in<'s>(slot: &'s mut Slot<UdfFile<'c>>) -> InPlace<'s, UdfFile<'c>> {
		slot.fill(Self::new())
	}

	pub fn name(&self) -> &FileName {
		&self.name
	}

	/// Sets the name, rejecting names longer than [`FILE_NAME_LEN`] bytes.
	///
	/// The previous name is kept when the new one is refused.
	pub fn set_name(&mut self, name: &str) -> crate::Result<()> {
		self.set_name_with(name, NameOverflow::Reject)
	}

	pub fn set_name_with(&mut self, name: &str, policy: NameOverflow) -> crate::Result<()> {
		self.name = FileName::with_policy(name, policy)?;
		Ok(())
	}

	pub fn hash(&self) -> &FileHash {
		&self.hash
	}

	pub fn set_hash(&mut self, hash: impl Into<FileHash>) {
		self.hash = hash.into();
	}

	pub fn udf_type(&self) -> UdfType {
		self.udf_type
	}

	pub fn set_udf_type(&mut self, udf_type: UdfType) {
		self.udf_type = udf_type;
	}

	pub fn content(&self) -> &Content<'c> {
		&self.content
	}

	pub fn content_mut(&mut self) -> &mut Content<'c> {
		&mut self.content
	}

	/// Replaces the content, freeing previously owned bytes.
	pub fn attach(&mut self, content: Content<'c>) {
		self.content.release();
		self.content = content;
	}

	pub fn attach_owned(&mut self, bytes: impl Into<Blob>) -> crate::Result<()> {
		let content = Content::owned(bytes)?;
		self.attach(content);
		Ok(())
	}

	pub fn attach_borrowed(&mut self, bytes: &'c [u8]) -> crate::Result<()> {
		let content = Content::borrowed(bytes)?;
		self.attach(content);
		Ok(())
	}
}

impl Release for UdfFile<'_> {
	#[instrument(name = "udf::file::release", level = "trace", skip(self), fields(name = %self.name))]
	fn release(&mut self) {
		self.content.release();
		self.name.clear();
		self.hash = FileHash::zero();
		self.udf_type = UdfType::Lua;
	}
}
