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

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default API base URL (can be overridden by HELLOSIGN_BASE_URL)
pub const DEFAULT_BASE_URL: &str = "https://api.hellosign.com/v3";

/// Default request timeout in seconds (can be overridden by HELLOSIGN_TIMEOUT_SECS)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// API base URL, without trailing slash
	pub base_url: String,
	/// Request timeout in seconds
	pub timeout_secs: u64,
	/// Skip TLS certificate verification (development environments only)
	pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
			accept_invalid_certs: false,
		}
	}
}

impl ClientConfig {
	/// Load configuration from environment variables
	pub fn from_env() -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix("HELLOSIGN"))
			.build()?;

		cfg.try_deserialize()
	}

	/// Load configuration from file
	pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix("HELLOSIGN"))
			.build()?;

		cfg.try_deserialize()
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Join an endpoint path onto the base URL
	pub fn url(&self, path: &str) -> String {
		format!(
			"{}/{}",
			self.base_url.trim_end_matches('/'),
			path.trim_start_matches('/')
		)
	}
}
