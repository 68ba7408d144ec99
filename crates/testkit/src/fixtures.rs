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

//! Test fixture files
//!
//! Fixtures live in one directory per test suite:
//!
//! ```text
//! {root}/{suite}/expectedFields.txt    key=value lines
//! {root}/{suite}/expectedResponse.txt  JSON response body
//! ```

use std::{
	fs,
	path::{Path, PathBuf},
};

use hellosign_sdk::fields::{FieldMap, FieldValue};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub const EXPECTED_FIELDS_FILE: &str = "expectedFields.txt";
pub const EXPECTED_RESPONSE_FILE: &str = "expectedResponse.txt";

/// Error types for fixture loading
#[derive(Debug, Error)]
pub enum FixtureError {
	#[error("Failed to read fixture {path}: {message}")]
	Io { path: PathBuf, message: String },
	#[error("Malformed JSON in fixture {path}: {message}")]
	Malformed { path: PathBuf, message: String },
}

/// Parse `key=value` lines into expected fields
///
/// Lines that do not split into exactly a key and a non-empty value are
/// skipped, including values that themselves contain `=`.
pub fn parse_expected_fields(text: &str) -> FieldMap {
	text.lines()
		.filter_map(|line| {
			let mut parts = line.split('=');
			match (parts.next(), parts.next(), parts.next()) {
				(Some(key), Some(value), None) if !value.is_empty() => {
					Some((key.to_string(), FieldValue::from(value)))
				}
				_ => None,
			}
		})
		.collect()
}

/// Fixture root directory
#[derive(Debug, Clone)]
pub struct Fixtures {
	root: PathBuf,
}

impl Fixtures {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Fixtures for a single suite, usually named after the test
	pub fn for_suite(&self, suite: &str) -> SuiteFixtures {
		SuiteFixtures {
			dir: self.root.join(suite),
		}
	}
}

/// Fixture files of one test suite
#[derive(Debug, Clone)]
pub struct SuiteFixtures {
	dir: PathBuf,
}

impl SuiteFixtures {
	pub fn path(&self, name: &str) -> PathBuf {
		self.dir.join(name)
	}

	pub fn read_string(&self, name: &str) -> Result<String, FixtureError> {
		let path = self.path(name);
		fs::read_to_string(&path).map_err(|e| FixtureError::Io {
			path,
			message: e.to_string(),
		})
	}

	/// Expected request fields; a missing or unreadable file yields no fields
	pub fn expected_fields(&self) -> FieldMap {
		match self.read_string(EXPECTED_FIELDS_FILE) {
			Ok(text) => parse_expected_fields(&text),
			Err(e) => {
				debug!(target: "fixtures", "{}", e);
				FieldMap::new()
			}
		}
	}

	/// Expected response body
	pub fn expected_response(&self) -> Result<Value, FixtureError> {
		self.read_json(EXPECTED_RESPONSE_FILE)
	}

	pub fn read_json(&self, name: &str) -> Result<Value, FixtureError> {
		let text = self.read_string(name)?;
		serde_json::from_str(&text).map_err(|e| FixtureError::Malformed {
			path: self.path(name),
			message: e.to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_expected_fields() {
		let fields = parse_expected_fields(
			"title=NDA\nsigners[0][name]=Jack\nempty=\nno delimiter\na=b=c\n=orphan\nid=*\n",
		);
		assert_eq!(fields.len(), 4);
		assert_eq!(fields["title"].to_string(), "NDA");
		assert_eq!(fields["signers[0][name]"].to_string(), "Jack");
		assert_eq!(fields["id"].to_string(), "*");
		assert_eq!(fields[""].to_string(), "orphan");
		assert!(!fields.contains_key("empty"));
		assert!(!fields.contains_key("a"));
	}

	#[test]
	fn test_parse_handles_crlf() {
		let fields = parse_expected_fields("title=NDA\r\nsubject=Hi\r\n");
		assert_eq!(fields["title"].to_string(), "NDA");
		assert_eq!(fields["subject"].to_string(), "Hi");
	}
}
