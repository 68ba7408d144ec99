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

use anyhow::{Context, Result};
use hellosign_sdk::{Authentication, ClientConfig, HelloSignClient};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::fixtures::Fixtures;

/// Environment prefix for test settings, e.g. `HELLOSIGN_TEST_API_KEY`
pub const ENV_PREFIX: &str = "HELLOSIGN_TEST";

/// Default fixture directory, relative to the crate under test
pub const DEFAULT_FIXTURE_ROOT: &str = "tests/fixtures";

/// Settings shared by tests that talk to a live account
///
/// Nested client settings use a double underscore, e.g.
/// `HELLOSIGN_TEST_CLIENT__BASE_URL`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestConfig {
	pub api_key: String,
	pub email: String,
	pub password: String,
	pub email_2: String,
	pub team_name: String,
	pub invalid_email: String,
	pub invalid_password: String,
	pub template_id: String,
	pub template_title: String,
	pub client_id: String,
	pub callback_url: String,
	pub fixture_root: String,
	pub client: ClientConfig,
}

impl Default for TestConfig {
	fn default() -> Self {
		Self {
			api_key: String::new(),
			email: String::new(),
			password: String::new(),
			email_2: String::new(),
			team_name: String::new(),
			invalid_email: String::new(),
			invalid_password: String::new(),
			template_id: String::new(),
			template_title: String::new(),
			client_id: String::new(),
			callback_url: String::new(),
			fixture_root: DEFAULT_FIXTURE_ROOT.to_string(),
			client: ClientConfig::default(),
		}
	}
}

impl TestConfig {
	/// Load configuration from `.env` and environment variables
	pub fn from_env() -> Result<Self> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(
				config::Environment::with_prefix(ENV_PREFIX)
					.prefix_separator("_")
					.separator("__"),
			)
			.build()
			.context("Failed to read test configuration from environment")?;

		cfg.try_deserialize()
			.context("Invalid test configuration")
	}

	/// Credentials built from the configured API key and website login
	pub fn authentication(&self) -> Result<Authentication> {
		let mut auth = Authentication::with_api_key(&self.api_key);
		if !self.email.is_empty() {
			auth.set_website_credentials(&self.email, &self.password)
				.context("Invalid website credentials")?;
		}
		Ok(auth)
	}

	pub fn fixtures(&self) -> Fixtures {
		Fixtures::new(&self.fixture_root)
	}
}

/// Test configuration together with the result of a reachability probe
#[derive(Debug, Clone)]
pub struct TestEnv {
	pub config: TestConfig,
	pub online: bool,
}

impl TestEnv {
	/// Probe the API once and record whether live tests can run
	///
	/// Without an API key no request is made. Probe failures count as offline.
	pub async fn probe(config: TestConfig) -> Result<Self> {
		if config.api_key.is_empty() {
			info!(target: "testkit", "No API key configured, live tests disabled");
			return Ok(Self::offline(config));
		}

		let client = HelloSignClient::with_config(config.authentication()?, config.client.clone())
			.context("Failed to create client")?;
		let online = match client.is_online().await {
			Ok(online) => online,
			Err(e) => {
				warn!(target: "testkit", "Health check failed: {}", e);
				false
			}
		};
		info!(target: "testkit", online, base_url = %config.client.base_url, "API probe complete");

		Ok(Self { config, online })
	}

	pub fn offline(config: TestConfig) -> Self {
		Self {
			config,
			online: false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = TestConfig::default();
		assert!(config.api_key.is_empty());
		assert_eq!(config.fixture_root, DEFAULT_FIXTURE_ROOT);
		assert_eq!(config.fixtures().root().to_str(), Some(DEFAULT_FIXTURE_ROOT));
	}

	#[test]
	fn test_authentication_from_config() {
		let config = TestConfig {
			api_key: "key".to_string(),
			email: "a@b.com".to_string(),
			password: "secret".to_string(),
			..TestConfig::default()
		};
		let auth = config.authentication().unwrap();
		assert_eq!(auth.api_key(), Some("key"));
		assert!(!TestConfig::default().authentication().unwrap().has_credentials());
	}

	#[tokio::test]
	async fn test_probe_without_key_is_offline() {
		let env = TestEnv::probe(TestConfig::default()).await.unwrap();
		assert!(!env.online);
	}

	#[tokio::test]
	async fn test_probe_failure_is_offline() {
		let config = TestConfig {
			api_key: "key".to_string(),
			client: ClientConfig {
				base_url: "http://127.0.0.1:9".to_string(),
				timeout_secs: 2,
				..ClientConfig::default()
			},
			..TestConfig::default()
		};
		let env = TestEnv::probe(config).await.unwrap();
		assert!(!env.online);
	}
}
