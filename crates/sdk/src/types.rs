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

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::HelloSignError;

/// Status of a single signer's signature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStatus {
	AwaitingSignature,
	Signed,
	Declined,
	OnHold,
	ErrorUnknown,
	ErrorFile,
	ErrorComponentPosition,
	ErrorTextTag,
	ErrorConverting,
}

impl SignatureStatus {
	pub const ALL: [SignatureStatus; 9] = [
		SignatureStatus::AwaitingSignature,
		SignatureStatus::Signed,
		SignatureStatus::Declined,
		SignatureStatus::OnHold,
		SignatureStatus::ErrorUnknown,
		SignatureStatus::ErrorFile,
		SignatureStatus::ErrorComponentPosition,
		SignatureStatus::ErrorTextTag,
		SignatureStatus::ErrorConverting,
	];

	/// Status code as sent by the API
	pub fn as_str(&self) -> &'static str {
		match self {
			SignatureStatus::AwaitingSignature => "awaiting_signature",
			SignatureStatus::Signed => "signed",
			SignatureStatus::Declined => "declined",
			SignatureStatus::OnHold => "on_hold",
			SignatureStatus::ErrorUnknown => "error_unknown",
			SignatureStatus::ErrorFile => "error_file",
			SignatureStatus::ErrorComponentPosition => "error_component_position",
			SignatureStatus::ErrorTextTag => "error_text_tag",
			SignatureStatus::ErrorConverting => "error_converting",
		}
	}

	pub fn is_error(&self) -> bool {
		self.as_str().starts_with("error_")
	}
}

impl fmt::Display for SignatureStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SignatureStatus {
	type Err = HelloSignError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SignatureStatus::ALL
			.into_iter()
			.find(|status| status.as_str() == s)
			.ok_or_else(|| HelloSignError::InvalidResponse(format!("Unknown status code: {}", s)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_codes_match_serde_names() {
		for status in SignatureStatus::ALL {
			let json = serde_json::to_value(status).unwrap();
			assert_eq!(json.as_str(), Some(status.as_str()));
			assert_eq!(status.as_str().parse::<SignatureStatus>().unwrap(), status);
		}
	}

	#[test]
	fn test_unknown_status_rejected() {
		assert!("signed_twice".parse::<SignatureStatus>().is_err());
	}

	#[test]
	fn test_error_statuses() {
		assert!(SignatureStatus::ErrorFile.is_error());
		assert!(!SignatureStatus::Declined.is_error());
	}
}
