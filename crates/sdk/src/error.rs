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

use thiserror::Error;

/// Error types for SDK operations
#[derive(Debug, Error)]
pub enum HelloSignError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("Server error ({status}): {message}")]
	Server { status: u16, message: String },
	#[error("Authentication error: {0}")]
	Authentication(String),
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
	#[error("Missing required field: {0}")]
	MissingField(String),
	#[error("I/O error: {0}")]
	Io(String),
}

pub type Result<T> = std::result::Result<T, HelloSignError>;
