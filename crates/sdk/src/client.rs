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

use reqwest::{
	Client as ReqwestClient, RequestBuilder, Response,
	multipart::{Form, Part},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Authentication;
use crate::config::ClientConfig;
use crate::error::{HelloSignError, Result};
use crate::fields::{FieldValue, PostFields};
use crate::signature_request::{SendSignatureRequest, SignatureRequest};

/// Client for the HelloSign API
///
/// This is an async client interface using reqwest for HTTP communication.
/// Requests are sent once; failed calls are not retried.
pub struct HelloSignClient {
	config: ClientConfig,
	auth: Authentication,
	client: ReqwestClient,
}

impl HelloSignClient {
	/// Create a new client against the production API
	pub fn new(auth: Authentication) -> Result<Self> {
		Self::with_config(auth, ClientConfig::default())
	}

	/// Create a new client with custom configuration
	pub fn with_config(auth: Authentication, config: ClientConfig) -> Result<Self> {
		let client = ReqwestClient::builder()
			.timeout(config.timeout())
			.danger_accept_invalid_certs(config.accept_invalid_certs)
			.build()
			.map_err(|e| HelloSignError::Network(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self {
			config,
			auth,
			client,
		})
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Check whether the API is reachable with the configured credentials
	///
	/// The result is not cached; callers decide how long to trust it.
	pub async fn is_online(&self) -> Result<bool> {
		let url = self.config.url("account");

		let response = self
			.request(self.client.get(&url))
			.send()
			.await
			.map_err(|e| HelloSignError::Network(format!("Request failed: {}", e)))?;

		let online = response.status().is_success();
		debug!(target: "client", url = %url, status = %response.status(), online, "health check");
		Ok(online)
	}

	/// Get a signature request by ID
	pub async fn get_signature_request(&self, id: &str) -> Result<SignatureRequest> {
		let url = self.config.url(&format!("signature_request/{}", id));

		let response = self
			.request(self.client.get(&url))
			.send()
			.await
			.map_err(|e| HelloSignError::Network(format!("Request failed: {}", e)))?;

		let json = read_json(response).await?;
		SignatureRequest::from_json(json)
	}

	/// Send documents out for signature
	pub async fn send_signature_request(
		&self,
		request: &SendSignatureRequest,
	) -> Result<SignatureRequest> {
		let url = self.config.url("signature_request/send");

		let fields = request.post_fields()?;
		let mut form = Form::new();
		for (key, value) in fields {
			form = match value {
				FieldValue::File(path) => {
					let bytes = tokio::fs::read(&path).await.map_err(|e| {
						HelloSignError::Io(format!("Failed to read {}: {}", path.display(), e))
					})?;
					let file_name = path
						.file_name()
						.map(|n| n.to_string_lossy().to_string())
						.unwrap_or_else(|| key.clone());
					form.part(key, Part::bytes(bytes).file_name(file_name))
				}
				other => form.text(key, other.to_string()),
			};
		}

		let response = self
			.request(self.client.post(&url))
			.multipart(form)
			.send()
			.await
			.map_err(|e| HelloSignError::Network(format!("Request failed: {}", e)))?;

		let json = read_json(response).await?;
		SignatureRequest::from_json(json)
	}

	fn request(&self, builder: RequestBuilder) -> RequestBuilder {
		self.auth.apply(builder)
	}
}

/// Decode a response body, mapping non-success statuses to `Server` errors
async fn read_json(response: Response) -> Result<Value> {
	let status = response.status();
	if !status.is_success() {
		let error_text = response
			.text()
			.await
			.unwrap_or_else(|_| format!("HTTP {}", status));
		let message = api_error_message(&error_text).unwrap_or(error_text);
		warn!(target: "client", status = %status, "API error: {}", message);
		return Err(HelloSignError::Server {
			status: status.as_u16(),
			message,
		});
	}

	response
		.json()
		.await
		.map_err(|e| HelloSignError::Serialization(format!("Failed to parse response: {}", e)))
}

/// Extract `error.error_msg` from an API error body
fn api_error_message(body: &str) -> Option<String> {
	let json: Value = serde_json::from_str(body).ok()?;
	json.get("error")?
		.get("error_msg")?
		.as_str()
		.map(str::to_string)
}
