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

use std::{collections::BTreeMap, path::PathBuf};

use serde_json::Value;

use crate::error::{HelloSignError, Result};
use crate::fields::{FieldMap, FieldValue, PostFields};
use crate::resource::Resource;
use crate::signature::Signature;

const SIGNATURE_REQUEST_KEY: &str = "signature_request";

/// A signature request as returned by the API
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureRequest {
	resource: Resource,
}

impl SignatureRequest {
	pub fn from_json(json: Value) -> Result<Self> {
		Ok(Self {
			resource: Resource::from_json(json, SIGNATURE_REQUEST_KEY)?,
		})
	}

	pub fn id(&self) -> Option<String> {
		self.resource.get_string("signature_request_id")
	}

	pub fn title(&self) -> Option<String> {
		self.resource.get_string("title")
	}

	pub fn subject(&self) -> Option<String> {
		self.resource.get_string("subject")
	}

	pub fn message(&self) -> Option<String> {
		self.resource.get_string("message")
	}

	pub fn is_complete(&self) -> bool {
		self.resource.get_bool("is_complete").unwrap_or(false)
	}

	pub fn signatures(&self) -> Result<Vec<Signature>> {
		self.resource
			.get_array("signatures")
			.iter()
			.cloned()
			.map(Signature::from_json)
			.collect()
	}

	pub fn as_json(&self) -> Value {
		self.resource.as_json()
	}
}

/// A recipient who must sign the documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
	pub email: String,
	pub name: String,
	/// Position in the signing order, when order is enforced
	pub order: Option<u32>,
}

impl Signer {
	pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			email: email.into(),
			name: name.into(),
			order: None,
		}
	}

	pub fn with_order(mut self, order: u32) -> Self {
		self.order = Some(order);
		self
	}
}

/// Request to send documents out for signature
#[derive(Debug, Clone, Default)]
pub struct SendSignatureRequest {
	pub title: Option<String>,
	pub subject: Option<String>,
	pub message: Option<String>,
	pub test_mode: bool,
	pub signers: Vec<Signer>,
	pub cc_email_addresses: Vec<String>,
	pub files: Vec<PathBuf>,
	pub metadata: BTreeMap<String, String>,
}

impl SendSignatureRequest {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn subject(mut self, subject: impl Into<String>) -> Self {
		self.subject = Some(subject.into());
		self
	}

	pub fn message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	pub fn test_mode(mut self, enabled: bool) -> Self {
		self.test_mode = enabled;
		self
	}

	pub fn signer(mut self, signer: Signer) -> Self {
		self.signers.push(signer);
		self
	}

	pub fn cc(mut self, email: impl Into<String>) -> Self {
		self.cc_email_addresses.push(email.into());
		self
	}

	pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
		self.files.push(path.into());
		self
	}

	pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.metadata.insert(key.into(), value.into());
		self
	}
}

impl PostFields for SendSignatureRequest {
	fn post_fields(&self) -> Result<FieldMap> {
		if self.signers.is_empty() {
			return Err(HelloSignError::MissingField("signers".to_string()));
		}
		if self.files.is_empty() {
			return Err(HelloSignError::MissingField("file".to_string()));
		}

		let mut fields = FieldMap::new();
		for (key, value) in [
			("title", &self.title),
			("subject", &self.subject),
			("message", &self.message),
		] {
			if let Some(value) = value {
				fields.insert(key.to_string(), FieldValue::from(value.as_str()));
			}
		}
		fields.insert(
			"test_mode".to_string(),
			FieldValue::from(if self.test_mode { "1" } else { "0" }),
		);

		for (i, signer) in self.signers.iter().enumerate() {
			fields.insert(
				format!("signers[{}][email_address]", i),
				FieldValue::from(signer.email.as_str()),
			);
			fields.insert(
				format!("signers[{}][name]", i),
				FieldValue::from(signer.name.as_str()),
			);
			if let Some(order) = signer.order {
				fields.insert(format!("signers[{}][order]", i), FieldValue::from(order));
			}
		}

		for (i, email) in self.cc_email_addresses.iter().enumerate() {
			fields.insert(
				format!("cc_email_addresses[{}]", i),
				FieldValue::from(email.as_str()),
			);
		}

		for (i, path) in self.files.iter().enumerate() {
			fields.insert(format!("file[{}]", i), FieldValue::File(path.clone()));
		}

		for (key, value) in &self.metadata {
			fields.insert(
				format!("metadata[{}]", key),
				FieldValue::from(value.as_str()),
			);
		}

		Ok(fields)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_post_fields() {
		let request = SendSignatureRequest::new()
			.title("NDA")
			.subject("Please sign")
			.test_mode(true)
			.signer(Signer::new("jack@example.com", "Jack").with_order(0))
			.signer(Signer::new("jill@example.com", "Jill"))
			.cc("lawyer@example.com")
			.file("nda.pdf")
			.metadata("client_id", "1234");

		let fields = request.post_fields().unwrap();
		assert_eq!(fields["title"].to_string(), "NDA");
		assert_eq!(fields["test_mode"].to_string(), "1");
		assert_eq!(
			fields["signers[0][email_address]"].to_string(),
			"jack@example.com"
		);
		assert_eq!(fields["signers[0][order]"].to_string(), "0");
		assert!(!fields.contains_key("signers[1][order]"));
		assert!(!fields.contains_key("message"));
		assert_eq!(
			fields["cc_email_addresses[0]"].to_string(),
			"lawyer@example.com"
		);
		assert!(fields["file[0]"].is_file());
		assert_eq!(fields["metadata[client_id]"].to_string(), "1234");
	}

	#[test]
	fn test_post_fields_require_signers_and_files() {
		let no_signers = SendSignatureRequest::new().file("nda.pdf");
		assert!(matches!(
			no_signers.post_fields(),
			Err(HelloSignError::MissingField(f)) if f == "signers"
		));

		let no_files = SendSignatureRequest::new().signer(Signer::new("a@b.com", "A"));
		assert!(matches!(
			no_files.post_fields(),
			Err(HelloSignError::MissingField(f)) if f == "file"
		));
	}

	#[test]
	fn test_signature_request_resource() {
		let request = SignatureRequest::from_json(json!({
			"signature_request": {
				"signature_request_id": "fa5c8a0b0f492d768749333ad6fcc214c111e967",
				"title": "NDA",
				"is_complete": false,
				"signatures": [
					{"signature_id": "a", "signer_email_address": "jack@example.com", "status_code": "awaiting_signature"},
					{"signature_id": "b", "signer_email_address": "jill@example.com", "status_code": "signed"}
				]
			}
		}))
		.unwrap();

		assert_eq!(request.title().as_deref(), Some("NDA"));
		assert!(!request.is_complete());
		let signatures = request.signatures().unwrap();
		assert_eq!(signatures.len(), 2);
		assert_eq!(signatures[1].email().as_deref(), Some("jill@example.com"));
	}
}
