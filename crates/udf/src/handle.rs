// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	ops::{Deref, DerefMut},
};

use tracing::{debug, trace};

/// Frees the owned sub-resources of a descriptor and resets its fields.
///
/// Releasing never touches storage the descriptor only borrows.
pub trait Release {
	fn release(&mut self);
}

/// Ends the lifetime of a descriptor handle.
///
/// Consumes the handle, so the same descriptor cannot be destroyed twice.
pub trait Destroy {
	fn destroy(self);
}

impl<T: Release> Destroy for Box<T> {
	fn destroy(mut self) {
		self.release();
		trace!("freeing self-owned descriptor storage");
	}
}

/// Destroying an absent descriptor does nothing.
impl<T: Destroy> Destroy for Option<T> {
	fn destroy(self) {
		if let Some(handle) = self {
			handle.destroy();
		}
	}
}

/// Caller-provided storage a descriptor can be initialised into.
///
/// The slot stays allocated for as long as the caller keeps it; destroying the
/// descriptor inside only empties it.
pub struct Slot<T>(Option<T>);

impl<T> Slot<T> {
	pub const fn empty() -> Self {
		Self(None)
	}

	pub fn is_live(&self) -> bool {
		self.0.is_some()
	}

	pub fn get(&self) -> Option<&T> {
		self.0.as_ref()
	}

	pub fn get_mut(&mut self) -> Option<&mut T> {
		self.0.as_mut()
	}

	/// Places `value` into the slot, releasing any descriptor still living there.
	pub(crate) fn fill(&mut self, value: T) -> InPlace<'_, T>
	where
		T: Release,
	{
		if self.destroy() {
			debug!("released descriptor left live in slot before re-initialisation");
		}
		self.0 = Some(value);
		InPlace {
			slot: self,
		}
	}

	/// Releases the descriptor living in the slot.
	///
	/// Returns `false` without doing anything when the slot is already empty.
	pub fn destroy(&mut self) -> bool
	where
		T: Release,
	{
		match self.0.take() {
			Some(mut value) => {
				value.release();
				true
			}
			None => false,
		}
	}
}

impl<T> Default for Slot<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			Some(value) => f.debug_tuple("Slot").field(value).finish(),
			None => f.write_str("Slot(<empty>)"),
		}
	}
}

/// Handle to a descriptor living in caller storage.
pub struct InPlace<'s, T> {
	slot: &'s mut Slot<T>,
}

impl<'s, T> InPlace<'s, T> {
	fn live(&self) -> &T {
		occupant(self.slot.0.as_ref())
	}

	fn live_mut(&mut self) -> &mut T {
		occupant(self.slot.0.as_mut())
	}

	/// Gives up the handle, leaving the descriptor live in the slot.
	pub fn into_mut(self) -> &'s mut T {
		let slot = self.slot;
		occupant(slot.0.as_mut())
	}
}

fn occupant<R>(value: Option<R>) -> R {
	match value {
		Some(value) => value,
		None => unreachable!("in-place handle always points at a live slot"),
	}
}

impl<T: Release> Destroy for InPlace<'_, T> {
	fn destroy(self) {
		self.slot.destroy();
		trace!("released in-place descriptor, caller keeps the storage");
	}
}

impl<T> Deref for InPlace<'_, T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		self.live()
	}
}

impl<T> DerefMut for InPlace<'_, T> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.live_mut()
	}
}

impl<T: fmt::Debug> fmt::Debug for InPlace<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("InPlace").field(self.live()).finish()
	}
}
