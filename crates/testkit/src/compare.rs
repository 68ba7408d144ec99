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

//! Deep comparison of request fields and JSON responses
//!
//! Two checks back the SDK's test assertions:
//!
//! - **Field comparison** ([`fields_equal`]): the form fields a request object
//!   produces are checked against an expectation map. An expected value of
//!   [`WILDCARD`] accepts anything, and file parts are always accepted since
//!   their contents are not comparable.
//! - **Structure comparison** ([`structure_equal`]): two JSON objects are
//!   walked from the expected (first) side. Keys that exist on only one side
//!   are skipped, so `{"a": 1}` and `{}` compare equal. Arrays compare in
//!   order, scalars by value, and values of different JSON kinds never match.
//!   With `ignore_data` only key presence of an object root is checked; array
//!   and scalar roots are always compared as values.
//!
//! Pass [`Strictness::Strict`] to [`structure_equal_with`] to also fail on
//! keys missing from either side.
//!
//! Every failure is logged under the `compare` target. Logging never changes
//! the result, and no comparison panics.

use hellosign_sdk::fields::{FieldMap, FieldValue};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, error};

/// Expected value that matches any actual value
pub const WILDCARD: &str = "*";

/// How keys present on only one side are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
	/// Walk the expected side only; unmatched keys are skipped
	#[default]
	Lenient,
	/// Key sets must match in both directions
	Strict,
}

/// A single reason two values did not compare equal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
	#[error("Key '{path}' not found in actual value")]
	MissingKey { path: String },
	#[error("Key '{path}' not found in expected value")]
	UnexpectedKey { path: String },
	#[error("Type mismatch at '{path}': expected {expected}, found {actual}")]
	TypeMismatch {
		path: String,
		expected: &'static str,
		actual: &'static str,
	},
	#[error("Length mismatch at '{path}': expected {expected}, found {actual}")]
	LengthMismatch {
		path: String,
		expected: usize,
		actual: usize,
	},
	#[error("Actual value '{actual}' does not equal expected value '{expected}' at '{path}'")]
	ValueMismatch {
		path: String,
		expected: String,
		actual: String,
	},
}

/// Compare submitted form fields against expected fields
///
/// Returns `true` when every expected key is present in `actual` and its
/// value matches. Extra keys in `actual` are ignored.
pub fn fields_equal(expected: &FieldMap, actual: &FieldMap) -> bool {
	let mismatches = field_mismatches(expected, actual);
	for mismatch in &mismatches {
		error!(target: "compare", "{}", mismatch);
	}
	mismatches.is_empty()
}

/// Every mismatch between expected and actual fields, in key order
pub fn field_mismatches(expected: &FieldMap, actual: &FieldMap) -> Vec<Mismatch> {
	let mut mismatches = Vec::new();
	for (key, expected_value) in expected {
		let Some(actual_value) = actual.get(key) else {
			mismatches.push(Mismatch::MissingKey { path: key.clone() });
			continue;
		};
		if is_wildcard(expected_value) || actual_value.is_file() {
			continue;
		}
		let expected_text = expected_value.to_string();
		let actual_text = actual_value.to_string();
		if expected_text != actual_text {
			mismatches.push(Mismatch::ValueMismatch {
				path: key.clone(),
				expected: expected_text,
				actual: actual_text,
			});
		}
	}
	mismatches
}

fn is_wildcard(value: &FieldValue) -> bool {
	matches!(value, FieldValue::Value(Value::String(s)) if s == WILDCARD)
}

/// Log every field at debug level
pub fn print_fields(fields: &FieldMap) {
	for (key, value) in fields {
		debug!(target: "compare", "\t{}={}", key, value);
	}
}

/// Compare two JSON values for structure and, unless `ignore_data`, content
pub fn structure_equal(a: &Value, b: &Value, ignore_data: bool) -> bool {
	structure_equal_with(a, b, ignore_data, Strictness::Lenient)
}

/// [`structure_equal`] with explicit key strictness
pub fn structure_equal_with(
	a: &Value,
	b: &Value,
	ignore_data: bool,
	strictness: Strictness,
) -> bool {
	match structure_mismatch(a, b, ignore_data, strictness) {
		Some(mismatch) => {
			error!(target: "compare", "{}", mismatch);
			false
		}
		None => true,
	}
}

/// Compare structure and content
pub fn json_equal(a: &Value, b: &Value) -> bool {
	structure_equal(a, b, false)
}

/// Compare structure only, ignoring leaf values
pub fn json_equal_ignore_data(a: &Value, b: &Value) -> bool {
	structure_equal(a, b, true)
}

/// The first mismatch found walking `a` against `b`, if any
pub fn structure_mismatch(
	a: &Value,
	b: &Value,
	ignore_data: bool,
	strictness: Strictness,
) -> Option<Mismatch> {
	match (a, b) {
		(Value::Object(a), Value::Object(b)) => {
			objects_mismatch(a, b, ignore_data, strictness, "")
		}
		// Key presence only applies to objects
		_ => values_mismatch(a, b, strictness, ""),
	}
}

fn objects_mismatch(
	a: &Map<String, Value>,
	b: &Map<String, Value>,
	ignore_data: bool,
	strictness: Strictness,
	path: &str,
) -> Option<Mismatch> {
	for (key, a_value) in a {
		let child = format!("{}/{}", path, key);
		match b.get(key) {
			None if strictness == Strictness::Strict => {
				return Some(Mismatch::MissingKey { path: child });
			}
			None => {}
			Some(_) if ignore_data => {}
			Some(b_value) => {
				if let Some(mismatch) = values_mismatch(a_value, b_value, strictness, &child) {
					return Some(mismatch);
				}
			}
		}
	}

	if strictness == Strictness::Strict
		&& let Some(key) = b.keys().find(|key| !a.contains_key(*key))
	{
		return Some(Mismatch::UnexpectedKey {
			path: format!("{}/{}", path, key),
		});
	}

	None
}

fn values_mismatch(a: &Value, b: &Value, strictness: Strictness, path: &str) -> Option<Mismatch> {
	match (a, b) {
		(Value::Object(a), Value::Object(b)) => objects_mismatch(a, b, false, strictness, path),
		(Value::Array(a), Value::Array(b)) => {
			if a.len() != b.len() {
				return Some(Mismatch::LengthMismatch {
					path: path.to_string(),
					expected: a.len(),
					actual: b.len(),
				});
			}
			// Order is significant
			a.iter().zip(b).enumerate().find_map(|(i, (a, b))| {
				values_mismatch(a, b, strictness, &format!("{}/{}", path, i))
			})
		}
		(Value::String(_), Value::String(_))
		| (Value::Number(_), Value::Number(_))
		| (Value::Bool(_), Value::Bool(_))
		| (Value::Null, Value::Null) => (a != b).then(|| Mismatch::ValueMismatch {
			path: path.to_string(),
			expected: a.to_string(),
			actual: b.to_string(),
		}),
		_ => Some(Mismatch::TypeMismatch {
			path: path.to_string(),
			expected: kind(a),
			actual: kind(b),
		}),
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
