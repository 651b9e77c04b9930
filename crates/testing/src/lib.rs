// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Test helpers shared by the udfkit crates.
//!
//! - [`TrackingAllocator`] and [`AllocationScope`] count heap traffic per
//!   thread, so a test can assert that a create/destroy cycle leaves nothing
//!   behind.
//! - [`capture_logs`] runs a closure under a scoped subscriber and hands back
//!   everything it logged.

pub mod alloc;
pub mod log;

pub use alloc::{AllocationScope, TrackingAllocator};
pub use log::capture_logs;
