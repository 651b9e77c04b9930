// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use tracing::instrument;
use udfkit_type::{Params, return_error};

use crate::{
	UdfError,
	handle::{InPlace, Release, Slot},
};

/// A call to the function `function` of the UDF module `module`.
///
/// The argument list is borrowed; the caller keeps ownership of it and it
/// outlives the call.
#[derive(Debug, Clone, PartialEq)]
pub struct UdfCall<'a> {
	module: String,
	function: String,
	arglist: &'a Params,
}

impl<'a> UdfCall<'a> {
	/// Builds a call descriptor value, copying both names.
	pub fn new(module: &str, function: &str, arglist: &'a Params) -> crate::Result<Self> {
		if module.is_empty() {
			return_error!(UdfError::EmptyModule);
		}
		if function.is_empty() {
			return_error!(UdfError::EmptyFunction {
				module: module.to_string(),
			});
		}

		Ok(Self {
			module: module.to_string(),
			function: function.to_string(),
			arglist,
		})
	}

	/// Allocates a new self-owned call descriptor.
	#[instrument(name = "udf::call::create", level = "trace", skip(arglist))]
	pub fn create(module: &str, function: &str, arglist: &'a Params) -> crate::Result<Box<Self>> {
		Ok(Box::new(Self::new(module, function, arglist)?))
	}

	/// Initialises a call descriptor inside caller-provided storage.
	///
	/// On failure the slot is left untouched.
	#[instrument(name = "udf::call::init_in", level = "trace", skip(slot, arglist))]
	pub fn init_in<'s>(
		slot: &'s mut Slot<UdfCall<'a>>,
		module: &str,
		function: &str,
		arglist: &'a Params,
	) -> crate::Result<InPlace<'s, UdfCall<'a>>> {
		let call = Self::new(module, function, arglist)?;
		Ok(slot.fill(call))
	}

	pub fn module(&self) -> &str {
		&self.module
	}

	pub fn function(&self) -> &str {
		&self.function
	}

	pub fn arglist(&self) -> &'a Params {
		self.arglist
	}
}

impl Release for UdfCall<'_> {
	#[instrument(name = "udf::call::release", level = "trace", skip(self), fields(module = %self.module, function = %self.function))]
	fn release(&mut self) {
		self.module = String::new();
		self.function = String::new();
	}
}

impl Display for UdfCall<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}({} args)", self.module, self.function, self.arglist.len())
	}
}

#[cfg(test)]
mod tests {
	use udfkit_type::{Value, params};

	use super::*;
	use crate::Destroy;

	#[test]
	fn test_create_copies_names() {
		let args = params![1, 2];
		let module = String::from("test");
		let call = UdfCall::create(&module, "run", &args).unwrap();
		drop(module);

		assert_eq!(call.module(), "test");
		assert_eq!(call.function(), "run");
		assert_eq!(call.arglist().len(), 2);
		call.destroy();
	}

	#[test]
	fn test_destroy_leaves_arglist_untouched() {
		let args = params![1, "two"];
		let snapshot = args.clone();

		let call = UdfCall::create("test", "run", &args).unwrap();
		call.destroy();

		assert_eq!(args, snapshot);
		assert_eq!(args.get_positional(1), Some(&Value::utf8("two")));
	}

	#[test]
	fn test_init_in() {
		let args = params![];
		let mut slot = Slot::empty();

		let call = UdfCall::init_in(&mut slot, "test", "run", &args).unwrap();
		assert_eq!(call.to_string(), "test.run(0 args)");
		call.destroy();

		assert!(!slot.is_live());
	}

	#[test]
	fn test_empty_module_rejected() {
		let args = Params::None;
		let err = UdfCall::create("", "run", &args).unwrap_err();
		assert_eq!(err.code(), "UDF_001");
	}

	#[test]
	fn test_empty_function_rejected() {
		let args = Params::None;
		let mut slot = Slot::empty();
		let err = UdfCall::init_in(&mut slot, "test", "", &args).unwrap_err();
		assert_eq!(err.code(), "UDF_002");
		assert!(!slot.is_live());
	}

	#[test]
	fn test_release_resets_names() {
		let args = Params::None;
		let mut call = UdfCall::new("test", "run", &args).unwrap();
		call.release();
		assert_eq!(call.module(), "");
		assert_eq!(call.function(), "");
	}
}
