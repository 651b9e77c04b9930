// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Debug, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::warn;
use udfkit_type::return_error;

use crate::UdfError;

/// Size of the fixed UDF file name field, terminator included.
pub const FILE_NAME_SIZE: usize = 128;

/// Maximum number of bytes a UDF file name may hold.
pub const FILE_NAME_LEN: usize = FILE_NAME_SIZE - 1;

/// What happens to a name that does not fit into [`FILE_NAME_LEN`] bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameOverflow {
	/// Refuse the name with `UDF_003`.
	#[default]
	Reject,
	/// Keep the longest prefix that ends on a character boundary.
	Truncate,
}

/// A UDF file name stored inline in a NUL-terminated 128-byte buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileName {
	buf: [u8; FILE_NAME_SIZE],
	len: u8,
}

impl FileName {
	pub const fn empty() -> Self {
		Self {
			buf: [0; FILE_NAME_SIZE],
			len: 0,
		}
	}

	/// Builds a name, rejecting anything longer than [`FILE_NAME_LEN`] bytes.
	pub fn new(name: &str) -> crate::Result<Self> {
		Self::with_policy(name, NameOverflow::Reject)
	}

	/// Builds a name, cutting it down to at most [`FILE_NAME_LEN`] bytes.
	pub fn truncated(name: &str) -> crate::Result<Self> {
		Self::with_policy(name, NameOverflow::Truncate)
	}

	pub fn with_policy(name: &str, policy: NameOverflow) -> crate::Result<Self> {
		validate_characters(name)?;

		let end = if name.len() <= FILE_NAME_LEN {
			name.len()
		} else {
			match policy {
				NameOverflow::Reject => {
					warn!(len = name.len(), max = FILE_NAME_LEN, "rejected oversized UDF file name");
					return_error!(UdfError::NameTooLong {
						name: name.to_string(),
						len: name.len(),
						max: FILE_NAME_LEN,
					});
				}
				NameOverflow::Truncate => {
					let end = floor_char_boundary(name, FILE_NAME_LEN);
					warn!(len = name.len(), kept = end, "truncated oversized UDF file name");
					end
				}
			}
		};

		let mut buf = [0; FILE_NAME_SIZE];
		buf[..end].copy_from_slice(&name.as_bytes()[..end]);
		Ok(Self {
			buf,
			len: end as u8,
		})
	}

	pub fn as_str(&self) -> &str {
		std::str::from_utf8(self.as_bytes()).unwrap_or_default()
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.buf[..self.len as usize]
	}

	/// The full NUL-padded field.
	pub fn as_raw(&self) -> &[u8; FILE_NAME_SIZE] {
		&self.buf
	}

	pub fn len(&self) -> usize {
		self.len as usize
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn clear(&mut self) {
		*self = Self::empty();
	}
}

fn validate_characters(name: &str) -> crate::Result<()> {
	if let Some((index, ch)) = name.char_indices().find(|(_, ch)| !is_printable(*ch)) {
		return_error!(UdfError::InvalidNameCharacter {
			ch,
			index,
		});
	}
	Ok(())
}

/// Control characters (Cc), format characters (Cf) and the line and paragraph
/// separators are not printable.
fn is_printable(ch: char) -> bool {
	!ch.is_control()
		&& !matches!(
			ch,
			'\u{00AD}'
				| '\u{0600}'..='\u{0605}'
				| '\u{061C}'
				| '\u{06DD}'
				| '\u{070F}'
				| '\u{0890}'..='\u{0891}'
				| '\u{08E2}'
				| '\u{180E}'
				| '\u{200B}'..='\u{200F}'
				| '\u{2028}'..='\u{202E}'
				| '\u{2060}'..='\u{2064}'
				| '\u{2066}'..='\u{206F}'
				| '\u{FEFF}'
				| '\u{FFF9}'..='\u{FFFB}'
				| '\u{110BD}'
				| '\u{110CD}'
				| '\u{13430}'..='\u{1343F}'
				| '\u{1BCA0}'..='\u{1BCA3}'
				| '\u{1D173}'..='\u{1D17A}'
				| '\u{E0001}'
				| '\u{E0020}'..='\u{E007F}'
		)
}

fn floor_char_boundary(text: &str, max: usize) -> usize {
	let mut end = max.min(text.len());
	while !text.is_char_boundary(end) {
		end -= 1;
	}
	end
}

impl Default for FileName {
	fn default() -> Self {
		Self::empty()
	}
}

impl Debug for FileName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FileName").field(&self.as_str()).finish()
	}
}

impl Display for FileName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl PartialEq<str> for FileName {
	fn eq(&self, other: &str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

impl PartialEq<&str> for FileName {
	fn eq(&self, other: &&str) -> bool {
		self.as_bytes() == other.as_bytes()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new() {
		let name = FileName::new("sum.lua").unwrap();
		assert_eq!(name.as_str(), "sum.lua");
		assert_eq!(name.len(), 7);
		assert_eq!(&name.as_raw()[..8], b"sum.lua\0");
	}

	#[test]
	fn test_empty() {
		let name = FileName::empty();
		assert!(name.is_empty());
		assert_eq!(name.as_raw(), &[0u8; FILE_NAME_SIZE]);
	}

	#[test]
	fn test_exactly_max_len_accepted() {
		let text = "a".repeat(FILE_NAME_LEN);
		let name = FileName::new(&text).unwrap();
		assert_eq!(name.len(), 127);
		assert_eq!(name.as_raw()[127], 0);
	}

	#[test]
	fn test_reject_too_long() {
		let text = "a".repeat(FILE_NAME_SIZE);
		let err = FileName::new(&text).unwrap_err();
		assert_eq!(err.code(), "UDF_003");
	}

	#[test]
	fn test_truncate_too_long() {
		let text = "b".repeat(200);
		let name = FileName::truncated(&text).unwrap();
		assert_eq!(name.len(), FILE_NAME_LEN);
		assert_eq!(name.as_str(), &text[..FILE_NAME_LEN]);
		assert_eq!(name.as_raw()[FILE_NAME_LEN], 0);
	}

	#[test]
	fn test_truncate_respects_char_boundary() {
		// 126 ASCII bytes followed by a 2-byte character straddling the limit
		let text = format!("{}é{}", "x".repeat(126), "y".repeat(10));
		let name = FileName::truncated(&text).unwrap();
		assert_eq!(name.len(), 126);
		assert!(name.as_str().chars().all(|c| c == 'x'));
	}

	#[test]
	fn test_control_character_rejected() {
		let err = FileName::new("sum\0.lua").unwrap_err();
		assert_eq!(err.code(), "UDF_008");

		let err = FileName::truncated("line\nbreak").unwrap_err();
		assert_eq!(err.code(), "UDF_008");
	}

	#[test]
	fn test_invisible_character_rejected() {
		let err = FileName::new("sum\u{200B}.lua").unwrap_err();
		assert_eq!(err.code(), "UDF_008");

		let err = FileName::new("\u{FEFF}filter.lua").unwrap_err();
		assert_eq!(err.code(), "UDF_008");

		let err = FileName::truncated("sum\u{2028}.lua").unwrap_err();
		assert_eq!(err.code(), "UDF_008");
	}

	#[test]
	fn test_printable_unicode_accepted() {
		let name = FileName::new("résumé_σ.lua").unwrap();
		assert_eq!(name, "résumé_σ.lua");
	}

	#[test]
	fn test_clear() {
		let mut name = FileName::new("filter.lua").unwrap();
		name.clear();
		assert_eq!(name, FileName::empty());
	}

	#[test]
	fn test_policy_deserialize() {
		let policy: NameOverflow = serde_json::from_str("\"truncate\"").unwrap();
		assert_eq!(policy, NameOverflow::Truncate);
		assert_eq!(NameOverflow::default(), NameOverflow::Reject);
	}
}
