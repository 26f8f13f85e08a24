//! Shared world and steps for HTTP behaviour scenarios.
//!
//! Each request builds the full application around the world's shared state
//! and drives it on a fresh Actix system, so writes made by one step are
//! visible to the next.

use actix_web::http::Method;
use actix_web::http::header::ContentType;
use actix_web::{test, web};
use in_n_out_books::domain::TRACE_ID_HEADER;
use in_n_out_books::inbound::http::health::HealthState;
use in_n_out_books::outbound::password::BcryptPasswords;
use in_n_out_books::outbound::persistence::{seed_books, seed_users};
use in_n_out_books::server::{AppDependencies, build_app, http_state_from_records};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then};
use serde_json::Value;

/// Lowest bcrypt cost; keeps seeded hashing fast.
const TEST_COST: u32 = 4;

#[derive(Default, ScenarioState)]
pub(crate) struct HttpWorld {
    deps: Slot<AppDependencies>,
    last_status: Slot<u16>,
    last_body: Slot<String>,
    last_trace_id: Slot<String>,
}

impl HttpWorld {
    fn use_store(&self, seeded: bool) {
        let passwords = BcryptPasswords::new(TEST_COST);
        let (books, users) = if seeded {
            (
                seed_books().expect("seed books"),
                seed_users(&passwords).expect("seed users"),
            )
        } else {
            (Vec::new(), Vec::new())
        };
        self.deps.set(AppDependencies {
            health_state: web::Data::new(HealthState::new()),
            http_state: web::Data::new(http_state_from_records(books, users, passwords)),
        });
    }

    /// Send one request and record its status, body and trace id.
    pub(crate) fn request(&self, method: Method, path: &str, body: Option<String>) {
        let deps = self.deps.get().expect("store configured by a Given step");
        let (status, text, trace_id) = actix_rt::System::new().block_on(async move {
            let app = test::init_service(build_app(deps)).await;
            let mut req = test::TestRequest::default().method(method).uri(path);
            if let Some(body) = body {
                req = req.insert_header(ContentType::json()).set_payload(body);
            }
            let res = test::call_service(&app, req.to_request()).await;
            let status = res.status().as_u16();
            let trace_id = res
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(res).await;
            (status, String::from_utf8_lossy(&bytes).into_owned(), trace_id)
        });
        self.last_status.set(status);
        self.last_body.set(text);
        if let Some(trace_id) = trace_id {
            self.last_trace_id.set(trace_id);
        }
    }

    pub(crate) fn status(&self) -> u16 {
        self.last_status.get().expect("a request was sent")
    }

    pub(crate) fn body(&self) -> String {
        self.last_body.get().expect("a request was sent")
    }

    pub(crate) fn json(&self) -> Value {
        serde_json::from_str(&self.body()).expect("JSON response body")
    }
}

/// Strip the Gherkin quotes around a placeholder value.
pub(crate) fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

#[fixture]
pub(crate) fn world() -> HttpWorld {
    HttpWorld::default()
}

#[given("the seeded store")]
fn the_seeded_store(world: &HttpWorld) {
    world.use_store(true);
}

#[given("an empty store")]
fn an_empty_store(world: &HttpWorld) {
    world.use_store(false);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &HttpWorld, status: u16) {
    assert_eq!(world.status(), status, "body: {}", world.body());
}

#[then("the response body is empty")]
fn the_response_body_is_empty(world: &HttpWorld) {
    assert!(world.body().is_empty(), "unexpected body: {}", world.body());
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &HttpWorld) {
    let trace_id = world.last_trace_id.get().expect("trace-id header");
    uuid::Uuid::parse_str(&trace_id).expect("trace id is a UUID");
}

#[then("the message is {message}")]
fn the_message_is(world: &HttpWorld, message: String) {
    let body = world.json();
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(unquote(&message))
    );
}
