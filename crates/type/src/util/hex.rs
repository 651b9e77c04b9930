// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt;

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
	InvalidCharacter {
		ch: char,
		index: usize,
	},
	OddLength,
}

impl fmt::Display for DecodeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DecodeError::InvalidCharacter {
				ch,
				index,
			} => write!(f, "invalid character '{}' at position {}", ch, index),
			DecodeError::OddLength => write!(f, "odd number of hex digits"),
		}
	}
}

impl std::error::Error for DecodeError {}

pub fn encode(bytes: &[u8]) -> String {
	let mut out = String::with_capacity(bytes.len() * 2);
	for &b in bytes {
		out.push(HEX_CHARS[(b >> 4) as usize] as char);
		out.push(HEX_CHARS[(b & 0x0f) as usize] as char);
	}
	out
}

pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
	let bytes = input.as_bytes();
	if bytes.len() % 2 != 0 {
		return Err(DecodeError::OddLength);
	}

	let mut out = Vec::with_capacity(bytes.len() / 2);
	for (i, pair) in bytes.chunks_exact(2).enumerate() {
		let high = nibble(pair[0], i * 2)?;
		let low = nibble(pair[1], i * 2 + 1)?;
		out.push((high << 4) | low);
	}
	Ok(out)
}

fn nibble(b: u8, index: usize) -> Result<u8, DecodeError> {
	match b {
		b'0'..=b'9' => Ok(b - b'0'),
		b'a'..=b'f' => Ok(b - b'a' + 10),
		b'A'..=b'F' => Ok(b - b'A' + 10),
		_ => Err(DecodeError::InvalidCharacter {
			ch: b as char,
			index,
		}),
	}
}
