// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	io::{self, Write},
	sync::{Arc, Mutex},
};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
	fn contents(&self) -> String {
		let bytes = match self.0.lock() {
			Ok(guard) => guard.clone(),
			Err(poisoned) => poisoned.into_inner().clone(),
		};
		String::from_utf8_lossy(&bytes).into_owned()
	}
}

impl Write for SharedBuffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self.0.lock() {
			Ok(mut guard) => guard.extend_from_slice(buf),
			Err(poisoned) => poisoned.into_inner().extend_from_slice(buf),
		}
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl<'a> MakeWriter<'a> for SharedBuffer {
	type Writer = SharedBuffer;

	fn make_writer(&'a self) -> Self::Writer {
		self.clone()
	}
}

/// Runs `f` with a thread-scoped subscriber recording events at `level` and
/// above, and returns its result together with the plain-text log output.
pub fn capture_logs<F, R>(level: Level, f: F) -> (R, String)
where
	F: FnOnce() -> R,
{
	let buffer = SharedBuffer::default();
	let subscriber = tracing_subscriber::fmt()
		.with_max_level(level)
		.with_ansi(false)
		.with_target(true)
		.without_time()
		.with_writer(buffer.clone())
		.finish();

	let result = tracing::subscriber::with_default(subscriber, f);
	(result, buffer.contents())
}
