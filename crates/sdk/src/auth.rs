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

//! Request authentication
//!
//! The API accepts three kinds of credentials. When more than one is set,
//! they are applied in this order:
//!
//! 1. OAuth access token (`Authorization: Bearer ...`)
//! 2. API key (HTTP basic auth, key as username, empty password)
//! 3. Website credentials (HTTP basic auth, email and password)
//!
//! Obtaining tokens is left to the caller.

use reqwest::RequestBuilder;

use crate::error::{HelloSignError, Result};

#[derive(Debug, Clone)]
struct WebsiteCredentials {
	email: String,
	password: String,
}

/// Credentials attached to every API request
#[derive(Debug, Clone, Default)]
pub struct Authentication {
	api_key: Option<String>,
	credentials: Option<WebsiteCredentials>,
	access_token: Option<String>,
}

impl Authentication {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an authentication that uses the given API key
	pub fn with_api_key(api_key: impl Into<String>) -> Self {
		let mut auth = Self::default();
		auth.set_api_key(api_key);
		auth
	}

	/// Set the API key. An empty key clears it.
	pub fn set_api_key(&mut self, api_key: impl Into<String>) {
		let api_key = api_key.into();
		self.api_key = (!api_key.is_empty()).then_some(api_key);
	}

	pub fn set_website_credentials(
		&mut self,
		email: impl Into<String>,
		password: impl Into<String>,
	) -> Result<()> {
		let email = email.into();
		if email.trim().is_empty() {
			return Err(HelloSignError::Authentication(
				"Email address must not be empty".to_string(),
			));
		}
		self.credentials = Some(WebsiteCredentials {
			email,
			password: password.into(),
		});
		Ok(())
	}

	pub fn set_access_token(&mut self, token: impl Into<String>) {
		let token = token.into();
		self.access_token = (!token.is_empty()).then_some(token);
	}

	pub fn api_key(&self) -> Option<&str> {
		self.api_key.as_deref()
	}

	pub fn has_credentials(&self) -> bool {
		self.access_token.is_some() || self.api_key.is_some() || self.credentials.is_some()
	}

	/// Attach the highest-priority credential to a request
	pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
		if let Some(token) = &self.access_token {
			request.bearer_auth(token)
		} else if let Some(key) = &self.api_key {
			request.basic_auth(key, Some(""))
		} else if let Some(creds) = &self.credentials {
			request.basic_auth(&creds.email, Some(&creds.password))
		} else {
			request
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn authorization_header(auth: &Authentication) -> Option<String> {
		let client = reqwest::Client::new();
		let request = auth
			.apply(client.get("http://localhost/account"))
			.build()
			.unwrap();
		request
			.headers()
			.get(reqwest::header::AUTHORIZATION)
			.map(|v| v.to_str().unwrap().to_string())
	}

	#[test]
	fn test_no_credentials_leaves_request_untouched() {
		let auth = Authentication::new();
		assert!(!auth.has_credentials());
		assert_eq!(authorization_header(&auth), None);
	}

	#[test]
	fn test_api_key_uses_basic_auth() {
		let auth = Authentication::with_api_key("abc123");
		assert_eq!(auth.api_key(), Some("abc123"));
		let header = authorization_header(&auth).unwrap();
		assert!(header.starts_with("Basic "));
	}

	#[test]
	fn test_access_token_takes_priority() {
		let mut auth = Authentication::with_api_key("abc123");
		auth.set_access_token("token");
		assert_eq!(authorization_header(&auth).unwrap(), "Bearer token");
	}

	#[test]
	fn test_empty_email_rejected() {
		let mut auth = Authentication::new();
		assert!(auth.set_website_credentials("  ", "secret").is_err());
		assert!(!auth.has_credentials());
		assert!(auth.set_website_credentials("a@b.com", "secret").is_ok());
		assert!(auth.has_credentials());
	}

	#[test]
	fn test_empty_api_key_clears() {
		let mut auth = Authentication::with_api_key("abc123");
		auth.set_api_key("");
		assert_eq!(auth.api_key(), None);
	}
}
