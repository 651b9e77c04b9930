// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	alloc::{GlobalAlloc, Layout, System},
	cell::Cell,
};

thread_local! {
	static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
	static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Global allocator that forwards to [`System`] and keeps per-thread counters.
///
/// Install it in a test binary with
///
/// ```ignore
/// #[global_allocator]
/// static ALLOCATOR: udfkit_testing::TrackingAllocator = udfkit_testing::TrackingAllocator;
/// ```
///
/// Counters are thread local so tests running in parallel do not see each
/// other's traffic.
pub struct TrackingAllocator;

fn record(delta: isize, allocated: bool) {
	// Thread-local storage can already be gone while a thread shuts down.
	let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + delta));
	if allocated {
		let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
	}
}

unsafe impl GlobalAlloc for TrackingAllocator {
	unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
		let ptr = unsafe { System.alloc(layout) };
		if !ptr.is_null() {
			record(layout.size() as isize, true);
		}
		ptr
	}

	unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
		let ptr = unsafe { System.alloc_zeroed(layout) };
		if !ptr.is_null() {
			record(layout.size() as isize, true);
		}
		ptr
	}

	unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
		unsafe { System.dealloc(ptr, layout) };
		record(-(layout.size() as isize), false);
	}

	unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
		let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
		if !new_ptr.is_null() {
			record(new_size as isize - layout.size() as isize, true);
		}
		new_ptr
	}
}

/// Snapshot of the current thread's allocation counters.
///
/// Only meaningful when [`TrackingAllocator`] is the global allocator.
#[derive(Debug, Clone, Copy)]
pub struct AllocationScope {
	live_bytes: isize,
	allocations: usize,
}

impl AllocationScope {
	pub fn begin() -> Self {
		Self {
			live_bytes: LIVE_BYTES.with(Cell::get),
			allocations: ALLOCATIONS.with(Cell::get),
		}
	}

	/// Bytes allocated minus bytes freed on this thread since [`AllocationScope::begin`].
	pub fn net_bytes(&self) -> isize {
		LIVE_BYTES.with(Cell::get) - self.live_bytes
	}

	/// Allocation calls (including reallocations) since [`AllocationScope::begin`].
	pub fn allocations(&self) -> usize {
		ALLOCATIONS.with(Cell::get) - self.allocations
	}
}
