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

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Result;
use crate::resource::Resource;
use crate::types::SignatureStatus;

const SIGNATURE_KEY: &str = "signature";
const SIGNATURE_ID: &str = "signature_id";
const SIGNER_EMAIL_ADDRESS: &str = "signer_email_address";
const SIGNER_NAME: &str = "signer_name";
const SIGNER_ORDER: &str = "order";
const SIGNER_STATUS_CODE: &str = "status_code";
const SIGNER_SIGNED_AT: &str = "signed_at";
const SIGNER_LAST_VIEWED_AT: &str = "last_viewed_at";
const SIGNER_LAST_REMINDED_AT: &str = "last_reminded_at";

/// A signature captured on a signature request, one per signer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
	resource: Resource,
}

impl Signature {
	pub fn from_json(json: Value) -> Result<Self> {
		Ok(Self {
			resource: Resource::from_json(json, SIGNATURE_KEY)?,
		})
	}

	pub fn id(&self) -> Option<String> {
		self.resource.get_string(SIGNATURE_ID)
	}

	pub fn has_id(&self) -> bool {
		self.resource.has(SIGNATURE_ID)
	}

	pub fn email(&self) -> Option<String> {
		self.resource.get_string(SIGNER_EMAIL_ADDRESS)
	}

	pub fn has_email(&self) -> bool {
		self.resource.has(SIGNER_EMAIL_ADDRESS)
	}

	pub fn name(&self) -> Option<String> {
		self.resource.get_string(SIGNER_NAME)
	}

	pub fn has_name(&self) -> bool {
		self.resource.has(SIGNER_NAME)
	}

	/// Signing order, if the request enforces one
	pub fn order(&self) -> Option<i64> {
		self.resource.get_integer(SIGNER_ORDER)
	}

	pub fn status(&self) -> Result<SignatureStatus> {
		self.status_string().parse()
	}

	pub fn status_string(&self) -> String {
		self.resource
			.get_string(SIGNER_STATUS_CODE)
			.unwrap_or_default()
	}

	pub fn date_signed(&self) -> Option<DateTime<Utc>> {
		self.resource.get_date(SIGNER_SIGNED_AT)
	}

	pub fn last_viewed(&self) -> Option<DateTime<Utc>> {
		self.resource.get_date(SIGNER_LAST_VIEWED_AT)
	}

	pub fn last_reminded(&self) -> Option<DateTime<Utc>> {
		self.resource.get_date(SIGNER_LAST_REMINDED_AT)
	}

	pub fn as_json(&self) -> Value {
		self.resource.as_json()
	}
}
