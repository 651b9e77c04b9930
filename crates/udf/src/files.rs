// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{mem::size_of, slice};

use tracing::{debug, instrument};
use udfkit_type::return_error;

use crate::{
	Content, FileHash, FileName, NameOverflow, UdfConfig, UdfError, UdfFile,
	handle::{InPlace, Release, Slot},
};

/// A fixed-capacity, ordered collection of UDF files.
///
/// Storage for `capacity` entries is reserved once at construction and the
/// collection never grows past it. Only the first `len()` slots ever hold live
/// files. Copies are made with [`UdfFiles::try_clone`], which reserves the full
/// capacity again.
#[derive(Debug, PartialEq, Eq)]
pub struct UdfFiles<'c> {
	entries: Vec<UdfFile<'c>>,
	capacity: u32,
	name_overflow: NameOverflow,
}

impl<'c> UdfFiles<'c> {
	/// Reserves room for exactly `capacity` files.
	pub fn new(capacity: u32) -> crate::Result<Self> {
		let mut entries = Vec::new();
		entries.try_reserve_exact(capacity as usize).map_err(|_| UdfError::AllocationFailed {
			target: "UDF file collection",
			bytes: (capacity as usize).saturating_mul(size_of::<UdfFile<'c>>()),
		})?;

		Ok(Self {
			entries,
			capacity,
			name_overflow: NameOverflow::Reject,
		})
	}

	pub fn from_config(config: &UdfConfig) -> crate::Result<Self> {
		Ok(Self::new(config.files_capacity)?.with_name_overflow(config.name_overflow))
	}

	/// Policy applied to names passed to [`UdfFiles::add`].
	pub fn with_name_overflow(mut self, policy: NameOverflow) -> Self {
		self.name_overflow = policy;
		self
	}

	/// Copies the collection into fresh storage reserved for the full capacity.
	pub fn try_clone(&self) -> crate::Result<Self> {
		let mut files = Self::new(self.capacity)?.with_name_overflow(self.name_overflow);
		files.entries.extend(self.entries.iter().cloned());
		Ok(files)
	}

	/// Allocates a new self-owned collection.
	#[instrument(name = "udf::files::create", level = "trace")]
	pub fn create(capacity: u32) -> crate::Result<Box<Self>> {
		Ok(Box::new(Self::new(capacity)?))
	}

	/// Initialises a collection inside caller-provided storage.
	///
	/// On failure the slot is left untouched.
	#[instrument(name = "udf::files::init_in", level = "trace", skip(slot))]
	pub fn init_in<'s>(slot: &'s mut Slot<UdfFiles<'c>>, capacity: u32) -> crate::Result<InPlace<'s, UdfFiles<'c>>> {
		let files = Self::new(capacity)?;
		Ok(slot.fill(files))
	}

	/// Appends `file` into the next free slot.
	pub fn push(&mut self, file: UdfFile<'c>) -> crate::Result<&mut UdfFile<'c>> {
		self.ensure_free_slot()?;
		let index = self.entries.len();
		self.entries.push(file);
		Ok(&mut self.entries[index])
	}

	/// Initialises the next free slot with an empty file for in-place population.
	pub fn next_slot(&mut self) -> crate::Result<&mut UdfFile<'c>> {
		self.push(UdfFile::new())
	}

	/// Builds a file from its parts and appends it.
	///
	/// The name is checked against the collection's overflow policy before
	/// anything is appended.
	pub fn add(&mut self, name: &str, hash: FileHash, content: Content<'c>) -> crate::Result<&mut UdfFile<'c>> {
		self.ensure_free_slot()?;
		let file = UdfFile::from_parts_with(name, self.name_overflow, hash, content)?;
		self.push(file)
	}

	pub fn get(&self, index: usize) -> Option<&UdfFile<'c>> {
		self.entries.get(index)
	}

	pub fn get_mut(&mut self, index: usize) -> Option<&mut UdfFile<'c>> {
		self.entries.get_mut(index)
	}

	pub fn find(&self, name: &str) -> Option<&UdfFile<'c>> {
		self.entries.iter().find(|file| file.name() == name)
	}

	/// The live files, `entries[0..len())`.
	pub fn entries(&self) -> &[UdfFile<'c>] {
		&self.entries
	}

	pub fn iter(&self) -> slice::Iter<'_, UdfFile<'c>> {
		self.entries.iter()
	}

	pub fn names(&self) -> impl Iterator<Item = &FileName> {
		self.entries.iter().map(UdfFile::name)
	}

	/// Number of slots in use.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Same as [`UdfFiles::len`], as the 32-bit count the remote engine expects.
	pub fn size(&self) -> u32 {
		self.entries.len() as u32
	}

	/// Number of slots reserved at construction.
	pub fn capacity(&self) -> u32 {
		self.capacity
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn is_full(&self) -> bool {
		self.entries.len() >= self.capacity as usize
	}

	fn ensure_free_slot(&self) -> crate::Result<()> {
		if self.is_full() {
			return_error!(UdfError::CollectionFull {
				capacity: self.capacity,
			});
		}
		Ok(())
	}
}

impl Release for UdfFiles<'_> {
	#[instrument(name = "udf::files::release", level = "trace", skip(self), fields(size = self.entries.len(), capacity = self.capacity))]
	fn release(&mut self) {
		for file in self.entries.iter_mut() {
			file.release();
		}
		debug!(released = self.entries.len(), "released UDF file collection entries");
		self.entries = Vec::new();
		self.capacity = 0;
	}
}

impl<'a, 'c> IntoIterator for &'a UdfFiles<'c> {
	type Item = &'a UdfFile<'c>;
	type IntoIter = slice::Iter<'a, UdfFile<'c>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Destroy;

	#[test]
	fn test_create() {
		let files = UdfFiles::create(3).unwrap();
		assert_eq!(files.capacity(), 3);
		assert_eq!(files.size(), 0);
		assert!(files.is_empty());
		files.destroy();
	}

	#[test]
	fn test_zero_capacity_is_full() {
		let mut files = UdfFiles::new(0).unwrap();
		assert!(files.is_full());
		let err = files.next_slot().unwrap_err();
		assert_eq!(err.code(), "UDF_007");
	}

	#[test]
	fn test_push_until_full() {
		let mut files = UdfFiles::new(2).unwrap();
		files.push(UdfFile::new()).unwrap();
		files.push(UdfFile::new()).unwrap();

		let err = files.push(UdfFile::new()).unwrap_err();
		assert_eq!(err.code(), "UDF_007");
		assert_eq!(files.len(), 2);
		assert!(files.size() <= files.capacity());
	}

	#[test]
	fn test_push_never_reallocates() {
		let mut files = UdfFiles::new(4).unwrap();
		assert_eq!(files.entries.capacity(), 4);
		for _ in 0..4 {
			files.next_slot().unwrap();
			assert_eq!(files.entries.capacity(), 4);
		}
		assert!(files.next_slot().is_err());
		assert_eq!(files.entries.capacity(), 4);
	}

	#[test]
	fn test_try_clone_keeps_reserved_capacity() {
		let mut files = UdfFiles::new(3).unwrap().with_name_overflow(NameOverflow::Truncate);
		files.add("sum.lua", FileHash::zero(), Content::owned("function sum() end").unwrap()).unwrap();

		let mut copy = files.try_clone().unwrap();
		assert_eq!(copy, files);
		assert_eq!(copy.entries.capacity(), 3);

		copy.next_slot().unwrap();
		copy.next_slot().unwrap();
		assert_eq!(copy.entries.capacity(), 3);
		assert!(copy.is_full());
		assert_eq!(copy.next_slot().unwrap_err().code(), "UDF_007");
		assert_eq!(files.len(), 1);
	}

	#[test]
	fn test_next_slot_in_place_population() {
		let mut files = UdfFiles::new(1).unwrap();
		let file = files.next_slot().unwrap();
		file.set_name("sum.lua").unwrap();
		file.attach_owned("function sum() end").unwrap();

		assert_eq!(files.get(0).unwrap().name(), "sum.lua");
		assert!(files.get(1).is_none());
	}

	#[test]
	fn test_add_and_find() {
		let mut files = UdfFiles::new(3).unwrap();
		files.add("sum.lua", FileHash::zero(), Content::owned("function sum() end").unwrap()).unwrap();
		files.add("filter.lua", FileHash::zero(), Content::owned("function filter() end").unwrap()).unwrap();

		let names: Vec<&str> = files.names().map(FileName::as_str).collect();
		assert_eq!(names, vec!["sum.lua", "filter.lua"]);
		assert_eq!(files.find("filter.lua").unwrap().content().as_bytes(), b"function filter() end");
		assert!(files.find("missing.lua").is_none());
	}

	#[test]
	fn test_add_rejected_name_appends_nothing() {
		let mut files = UdfFiles::new(3).unwrap();
		let err = files.add(&"x".repeat(200), FileHash::zero(), Content::empty()).unwrap_err();
		assert_eq!(err.code(), "UDF_003");
		assert!(files.is_empty());
	}

	#[test]
	fn test_add_truncates_with_policy() {
		let mut files = UdfFiles::new(1).unwrap().with_name_overflow(NameOverflow::Truncate);
		let file = files.add(&"x".repeat(200), FileHash::zero(), Content::empty()).unwrap();
		assert_eq!(file.name().len(), 127);
	}

	#[test]
	fn test_from_config() {
		let config = UdfConfig::new().files_capacity(2).name_overflow(NameOverflow::Truncate);
		let files = UdfFiles::from_config(&config).unwrap();
		assert_eq!(files.capacity(), 2);
		assert_eq!(files.name_overflow, NameOverflow::Truncate);
	}

	#[test]
	fn test_init_in_and_destroy() {
		let mut slot = Slot::empty();
		let mut files = UdfFiles::init_in(&mut slot, 3).unwrap();
		files.add("sum.lua", FileHash::zero(), Content::owned("function sum() end").unwrap()).unwrap();
		files.destroy();
		assert!(!slot.is_live());
	}

	#[test]
	fn test_release_empties_collection() {
		let mut files = UdfFiles::new(2).unwrap();
		files.add("sum.lua", FileHash::zero(), Content::owned("function sum() end").unwrap()).unwrap();
		files.release();
		assert_eq!(files.len(), 0);
		assert_eq!(files.capacity(), 0);
		assert!(files.next_slot().is_err());
	}
}
