// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Blob;
pub(crate) use crate::util::hex::{decode, encode};
use crate::{Error, error::diagnostic::hex};

impl Blob {
	pub fn from_hex(text: &str) -> Result<Self, Error> {
		let clean_hex = if text.starts_with("0x") || text.starts_with("0X") {
			&text[2..]
		} else {
			text
		};

		match decode(clean_hex) {
			Ok(bytes) => Ok(Blob::new(bytes)),
			Err(err) => Err(Error(hex::invalid_hex_string(text, err))),
		}
	}

	pub fn to_hex(&self) -> String {
		format!("0x{}", encode(self.as_bytes()))
	}
}
