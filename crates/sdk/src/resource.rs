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

//! JSON-backed resource base
//!
//! API resources are thin typed views over the JSON object returned by the
//! server. Responses usually wrap the object in an envelope named after the
//! resource (`{"signature_request": {...}}`); nested objects arrive bare.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{HelloSignError, Result};

/// A JSON object with typed accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
	data: Map<String, Value>,
}

impl Resource {
	/// Wrap a JSON object, unwrapping `envelope` when the object carries it
	pub fn from_json(json: Value, envelope: &str) -> Result<Self> {
		let Value::Object(mut map) = json else {
			return Err(HelloSignError::InvalidResponse(format!(
				"Expected JSON object for '{}'",
				envelope
			)));
		};

		let data = match map.remove(envelope) {
			Some(Value::Object(inner)) => inner,
			Some(other) => {
				return Err(HelloSignError::InvalidResponse(format!(
					"Envelope '{}' is not an object: {}",
					envelope, other
				)));
			}
			None => map,
		};

		Ok(Self { data })
	}

	pub fn has(&self, key: &str) -> bool {
		self.data.get(key).is_some_and(|v| !v.is_null())
	}

	pub fn get(&self, key: &str) -> Option<&Value> {
		self.data.get(key).filter(|v| !v.is_null())
	}

	pub fn get_string(&self, key: &str) -> Option<String> {
		self.get(key).and_then(Value::as_str).map(str::to_string)
	}

	pub fn get_integer(&self, key: &str) -> Option<i64> {
		self.get(key).and_then(Value::as_i64)
	}

	pub fn get_bool(&self, key: &str) -> Option<bool> {
		self.get(key).and_then(Value::as_bool)
	}

	/// Read a unix timestamp (seconds)
	pub fn get_date(&self, key: &str) -> Option<DateTime<Utc>> {
		self.get_integer(key)
			.and_then(|secs| DateTime::from_timestamp(secs, 0))
	}

	pub fn get_array(&self, key: &str) -> &[Value] {
		self.get(key)
			.and_then(Value::as_array)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// The underlying JSON object
	pub fn as_json(&self) -> Value {
		Value::Object(self.data.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_unwraps_envelope() {
		let resource = Resource::from_json(json!({"thing": {"id": "x"}}), "thing").unwrap();
		assert_eq!(resource.get_string("id").as_deref(), Some("x"));
	}

	#[test]
	fn test_bare_object_accepted() {
		let resource = Resource::from_json(json!({"id": "x"}), "thing").unwrap();
		assert!(resource.has("id"));
	}

	#[test]
	fn test_non_object_rejected() {
		assert!(Resource::from_json(json!([1, 2]), "thing").is_err());
		assert!(Resource::from_json(json!({"thing": "nope"}), "thing").is_err());
	}

	#[test]
	fn test_null_treated_as_absent() {
		let resource = Resource::from_json(json!({"signed_at": null}), "thing").unwrap();
		assert!(!resource.has("signed_at"));
		assert_eq!(resource.get_date("signed_at"), None);
	}

	#[test]
	fn test_typed_accessors() {
		let resource = Resource::from_json(
			json!({"n": 3, "b": true, "at": 1_400_000_000, "list": [1, 2]}),
			"thing",
		)
		.unwrap();
		assert_eq!(resource.get_integer("n"), Some(3));
		assert_eq!(resource.get_bool("b"), Some(true));
		assert_eq!(resource.get_date("at").unwrap().timestamp(), 1_400_000_000);
		assert_eq!(resource.get_array("list").len(), 2);
		assert!(resource.get_array("missing").is_empty());
		assert_eq!(resource.get_string("n"), None);
	}
}
