// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::BTreeMap, fmt, path::PathBuf};

use serde_json::Value;

use crate::error::Result;

/// A single form field submitted in a request body
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Value(Value),
	/// Local file uploaded as a multipart file part
	File(PathBuf),
}

impl FieldValue {
	pub fn is_file(&self) -> bool {
		matches!(self, FieldValue::File(_))
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			// Strings render without JSON quotes, as they go on the wire
			FieldValue::Value(Value::String(s)) => f.write_str(s),
			FieldValue::Value(other) => write!(f, "{}", other),
			FieldValue::File(path) => write!(f, "{}", path.display()),
		}
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		FieldValue::Value(Value::String(value.to_string()))
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		FieldValue::Value(Value::String(value))
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		FieldValue::Value(Value::Bool(value))
	}
}

impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		FieldValue::Value(Value::from(value))
	}
}

impl From<u32> for FieldValue {
	fn from(value: u32) -> Self {
		FieldValue::Value(Value::from(value))
	}
}

impl From<Value> for FieldValue {
	fn from(value: Value) -> Self {
		FieldValue::Value(value)
	}
}

impl From<PathBuf> for FieldValue {
	fn from(value: PathBuf) -> Self {
		FieldValue::File(value)
	}
}

/// Flat form fields keyed by their wire name, e.g. `signers[0][email_address]`
pub type FieldMap = BTreeMap<String, FieldValue>;

/// Implemented by request objects that are submitted as form fields
pub trait PostFields {
	fn post_fields(&self) -> Result<FieldMap>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_display_strings_unquoted() {
		assert_eq!(FieldValue::from("hello").to_string(), "hello");
		assert_eq!(FieldValue::from(String::new()).to_string(), "");
	}

	#[test]
	fn test_display_scalars() {
		assert_eq!(FieldValue::from(1u32).to_string(), "1");
		assert_eq!(FieldValue::from(-7i64).to_string(), "-7");
		assert_eq!(FieldValue::from(true).to_string(), "true");
		assert_eq!(FieldValue::from(json!(null)).to_string(), "null");
	}

	#[test]
	fn test_display_file_is_path() {
		let value = FieldValue::from(PathBuf::from("docs/nda.pdf"));
		assert!(value.is_file());
		assert_eq!(value.to_string(), "docs/nda.pdf");
	}
}
