//! Behaviour-driven tests for identifying partner users.
//!
//! These scenarios drive the real client against a local mock Partner API to
//! check successful resolution, local rejection of requests without an
//! identifier, validation error mapping and request timeouts.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use mobihealth_partner::{
    ClientConfig, ClientError, IDENTIFY_PATH, IdentifyRequest, IdentifyResponse, PartnerClient,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARTNER_ID: &str = "123e4567-e89b-42d3-a456-426614174000";
const PARTNER_SECRET: &str = "partner-secret";

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

/// Wrapper for non-Clone runtime handle.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

/// Wrapper for the mock server, which is not Clone.
#[derive(Clone)]
struct ServerHandle(Arc<MockServer>);

#[derive(Default, ScenarioState)]
struct IdentifyWorld {
    runtime: Slot<RuntimeHandle>,
    server: Slot<ServerHandle>,
    client: Slot<PartnerClient>,
    last_result: Slot<Result<IdentifyResponse, ClientError>>,
}

impl IdentifyWorld {
    fn runtime(&self) -> Arc<Runtime> {
        if let Some(handle) = self.runtime.get() {
            return handle.0;
        }
        let runtime = Arc::new(Runtime::new().expect("create runtime"));
        self.runtime.set(RuntimeHandle(Arc::clone(&runtime)));
        runtime
    }

    fn server(&self) -> Arc<MockServer> {
        self.server.get().expect("mock server should be started").0
    }

    fn start_server(&self, response: ResponseTemplate) {
        let runtime = self.runtime();
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(IDENTIFY_PATH))
                .respond_with(response)
                .mount(&server)
                .await;
            server
        });
        self.server.set(ServerHandle(Arc::new(server)));
    }

    fn build_client(&self, timeout: Option<Duration>) {
        let base = ClientConfig::new(self.server().uri(), PARTNER_ID, PARTNER_SECRET);
        let config = match timeout {
            Some(limit) => base.with_timeout(limit),
            None => base,
        };
        let client = PartnerClient::new(config).expect("client should build");
        self.client.set(client);
    }

    fn identify(&self, request: &IdentifyRequest) {
        let client = self.client.get().expect("client should be built");
        let result = self.runtime().block_on(client.identify(request));
        self.last_result.set(result);
    }

    fn last_error(&self) -> ClientError {
        match self.last_result.get().expect("identify result should be set") {
            Ok(user) => panic!("expected identify to fail, got {user:?}"),
            Err(error) => error,
        }
    }
}

#[fixture]
fn world() -> IdentifyWorld {
    IdentifyWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a partner API that identifies users")]
fn a_partner_api_that_identifies_users(world: &IdentifyWorld) {
    world.start_server(ResponseTemplate::new(200).set_body_json(json!({
        "status": true,
        "message": "User identified",
        "data": {
            "id": "1",
            "profile_id": "p1",
            "public_id": "pub1",
            "email": "john.doe@example.com",
            "first_name": "John",
            "last_name": "Doe"
        }
    })));
}

#[given("a partner API that rejects the email field")]
fn a_partner_api_that_rejects_the_email_field(world: &IdentifyWorld) {
    world.start_server(ResponseTemplate::new(422).set_body_json(json!({
        "status": false,
        "message": "Validation failed",
        "errors": { "email": ["invalid format"] }
    })));
}

#[given("a partner API that responds after {secs} seconds")]
fn a_partner_api_that_responds_after(world: &IdentifyWorld, secs: u64) {
    world.start_server(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "status": true, "data": {} }))
            .set_delay(Duration::from_secs(secs)),
    );
}

#[given("a partner client for the API")]
fn a_partner_client_for_the_api(world: &IdentifyWorld) {
    world.build_client(None);
}

#[given("a partner client with a {millis} millisecond timeout")]
fn a_partner_client_with_timeout(world: &IdentifyWorld, millis: u64) {
    world.build_client(Some(Duration::from_millis(millis)));
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the partner identifies the email {email}")]
fn the_partner_identifies_the_email(world: &IdentifyWorld, email: String) {
    world.identify(&IdentifyRequest::by_email(email.trim_matches('"')));
}

#[when("the partner identifies a user by name only")]
fn the_partner_identifies_a_user_by_name_only(world: &IdentifyWorld) {
    let request = IdentifyRequest::default().with_name("Test", "User");
    world.identify(&request);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the user with public id {public_id} is returned")]
fn the_user_is_returned(world: &IdentifyWorld, public_id: String) {
    let result = world
        .last_result
        .get()
        .expect("identify result should be set");
    let user = result.expect("identify should succeed");
    assert_eq!(user.public_id, public_id.trim_matches('"'));
}

#[then("the request is rejected as invalid")]
fn the_request_is_rejected_as_invalid(world: &IdentifyWorld) {
    let error = world.last_error();
    assert_eq!(
        error,
        ClientError::invalid_request("Either email or phone_number must be provided")
    );
    assert_eq!(error.status_code(), None);
}

#[then("the partner API receives no requests")]
fn the_partner_api_receives_no_requests(world: &IdentifyWorld) {
    let server = world.server();
    let requests = world
        .runtime()
        .block_on(server.received_requests())
        .expect("request recording enabled");
    assert!(requests.is_empty(), "expected no requests, got {requests:?}");
}

#[then("an API error with status {status} is returned")]
fn an_api_error_with_status_is_returned(world: &IdentifyWorld, status: u16) {
    let error = world.last_error();
    assert_eq!(error.status_code(), Some(status));
}

#[then("the email field error is {message}")]
fn the_email_field_error_is(world: &IdentifyWorld, message: String) {
    let error = world.last_error();
    let field_errors = error.field_errors().expect("field errors present");
    assert_eq!(
        field_errors.get("email"),
        Some(&vec![message.trim_matches('"').to_owned()])
    );
}

#[then("the request fails with a timeout")]
fn the_request_fails_with_a_timeout(world: &IdentifyWorld) {
    let error = world.last_error();
    assert!(error.is_timeout(), "expected timeout, got {error:?}");
    assert_eq!(error.to_string(), "Request timeout");
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/identify.feature",
    name = "Identifying a user by email returns the user record"
)]
fn identifying_by_email_returns_user(world: IdentifyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identify.feature",
    name = "A request without email or phone number is rejected locally"
)]
fn request_without_identifier_is_rejected(world: IdentifyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identify.feature",
    name = "Validation failures carry field errors"
)]
fn validation_failures_carry_field_errors(world: IdentifyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/identify.feature",
    name = "A slow partner API times out"
)]
fn slow_partner_api_times_out(world: IdentifyWorld) {
    let _ = world;
}
