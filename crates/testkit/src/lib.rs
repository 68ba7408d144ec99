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

//! HelloSign test support
//!
//! Shared plumbing for SDK tests: deep comparison of request fields and
//! JSON responses, fixture loading, explicit test configuration, and
//! logging setup.

pub mod compare;
pub mod config;
pub mod fixtures;
pub mod logging;

pub use compare::{
	Mismatch, Strictness, WILDCARD, field_mismatches, fields_equal, json_equal,
	json_equal_ignore_data, print_fields, structure_equal, structure_equal_with,
	structure_mismatch,
};
pub use config::{TestConfig, TestEnv};
pub use fixtures::{FixtureError, Fixtures, SuiteFixtures, parse_expected_fields};
pub use logging::init_logging;
