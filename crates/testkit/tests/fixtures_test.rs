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

//! SDK requests and responses checked against fixture files

use std::fs;

use hellosign_sdk::{PostFields, SendSignatureRequest, SignatureRequest, SignatureStatus, Signer};
use hellosign_testkit::{
	FixtureError, Fixtures, fields_equal, init_logging, json_equal, json_equal_ignore_data,
	print_fields,
};
use serde_json::json;

fn fixtures() -> Fixtures {
	Fixtures::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn nda_request() -> SendSignatureRequest {
	SendSignatureRequest::new()
		.title("NDA with Acme Co.")
		.subject("The NDA we talked about")
		.message("Please sign this NDA and then we can discuss more.")
		.test_mode(true)
		.signer(Signer::new("jack@example.com", "Jack").with_order(0))
		.signer(Signer::new("jill@example.com", "Jill").with_order(1))
		.cc("lawyer@example.com")
		.file("/tmp/uploads/nda.pdf")
		.metadata("custom_id", "generated-per-run")
}

#[test]
fn test_send_signature_request_fields() {
	init_logging().unwrap();

	let expected = fixtures()
		.for_suite("send_signature_request")
		.expected_fields();
	assert_eq!(expected.len(), 13);

	let actual = nda_request().post_fields().unwrap();
	print_fields(&actual);
	assert!(fields_equal(&expected, &actual));
}

#[test]
fn test_changed_request_no_longer_matches() {
	let expected = fixtures()
		.for_suite("send_signature_request")
		.expected_fields();

	let actual = nda_request().test_mode(false).post_fields().unwrap();
	assert!(!fields_equal(&expected, &actual));
}

#[test]
fn test_signature_request_response() {
	let expected = fixtures()
		.for_suite("get_signature_request")
		.expected_response()
		.unwrap();

	let request = SignatureRequest::from_json(expected.clone()).unwrap();
	let signatures = request.signatures().unwrap();
	assert_eq!(signatures.len(), 2);
	assert_eq!(signatures[0].status().unwrap(), SignatureStatus::Signed);
	assert_eq!(
		signatures[1].status().unwrap(),
		SignatureStatus::AwaitingSignature
	);

	assert_eq!(
		request.id().as_deref(),
		Some("fa5c8a0b0f492d768749333ad6fcc214c111e967")
	);
	assert_eq!(signatures[1].email().as_deref(), Some("jill@example.com"));

	let first_signer = json!({
		"signature_id": "78caf2a1d01cd39cea2bc1cbb340dac3",
		"signer_email_address": "jack@example.com",
		"signer_name": "Jack",
		"order": 0,
		"status_code": "signed",
		"signed_at": 1_398_384_045
	});
	assert!(json_equal(&first_signer, &signatures[0].as_json()));
	assert!(!json_equal(&first_signer, &signatures[1].as_json()));
}

#[test]
fn test_response_with_different_ids_matches_structure_only() {
	let expected = fixtures()
		.for_suite("get_signature_request")
		.expected_response()
		.unwrap();

	let mut actual = expected.clone();
	actual["signature_request"]["signature_request_id"] = json!("0000");
	actual["signature_request"]["signatures"][0]["signed_at"] = json!(1_500_000_000);

	assert!(!json_equal(&expected, &actual));
	assert!(json_equal_ignore_data(&expected, &actual));
}

#[test]
fn test_missing_fixtures() {
	let dir = tempfile::tempdir().unwrap();
	let suite = Fixtures::new(dir.path()).for_suite("nothing_here");

	assert!(suite.expected_fields().is_empty());
	assert!(matches!(
		suite.expected_response(),
		Err(FixtureError::Io { .. })
	));
}

#[test]
fn test_malformed_response_fixture() {
	let dir = tempfile::tempdir().unwrap();
	fs::create_dir_all(dir.path().join("broken")).unwrap();
	fs::write(
		dir.path().join("broken").join("expectedResponse.txt"),
		"{\"signature\": ",
	)
	.unwrap();

	let suite = Fixtures::new(dir.path()).for_suite("broken");
	assert!(matches!(
		suite.expected_response(),
		Err(FixtureError::Malformed { .. })
	));
}
