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

//! HelloSign SDK - Client library for the HelloSign e-signature API
//!
//! This crate provides typed request objects that serialize into form
//! fields, JSON-backed resource types, and an async HTTP client.
//!
//! The SDK is designed to be lightweight and embeddable:
//! - No background threads
//! - No global state; configuration and credentials are passed explicitly

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod resource;
pub mod signature;
pub mod signature_request;
pub mod types;

pub use auth::Authentication;
pub use client::HelloSignClient;
pub use config::ClientConfig;
pub use error::{HelloSignError, Result};
pub use fields::{FieldMap, FieldValue, PostFields};
pub use resource::Resource;
pub use signature::Signature;
pub use signature_request::{SendSignatureRequest, SignatureRequest, Signer};
pub use types::SignatureStatus;
