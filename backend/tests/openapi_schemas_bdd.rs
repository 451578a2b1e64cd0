//! Behaviour tests for the OpenAPI document.
//!
//! These tests verify that the quote endpoint is published and that error
//! responses reference the wrapper schema from `inbound::http::schemas`.
use std::sync::Mutex;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use shipping_calculator::doc::ApiDoc;
use utoipa::OpenApi;
use utoipa::openapi::RefOr;

// Note: utoipa replaces :: with . in schema names
const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

#[derive(Default)]
struct OpenApiWorld {
    document: Option<utoipa::openapi::OpenApi>,
}

#[fixture]
fn world() -> Mutex<OpenApiWorld> {
    Mutex::new(OpenApiWorld::default())
}

#[given("the OpenAPI document is generated")]
fn generate_openapi_document(world: &Mutex<OpenApiWorld>) {
    let doc = ApiDoc::openapi();
    doc.to_json().expect("document serialises to JSON");
    world.lock().expect("world lock").document = Some(doc);
}

#[when("the document is inspected")]
fn inspect_document(world: &Mutex<OpenApiWorld>) {
    let world = world.lock().expect("world lock");
    assert!(world.document.is_some(), "document should be generated");
}

#[then("the calculate operation is documented")]
fn calculate_operation_is_documented(world: &Mutex<OpenApiWorld>) {
    let world = world.lock().expect("world lock");
    let doc = world.document.as_ref().expect("document");
    let operation = doc
        .paths
        .paths
        .get("/calculate")
        .and_then(|item| item.post.as_ref())
        .expect("POST /calculate");

    assert_eq!(operation.operation_id.as_deref(), Some("calculateShipping"));
    let responses = &operation.responses.responses;
    assert!(responses.contains_key("200"), "success response documented");
    assert!(responses.contains_key("400"), "error response documented");
}

#[then("the error schema is registered under the domain name")]
fn error_schema_is_registered(world: &Mutex<OpenApiWorld>) {
    let world = world.lock().expect("world lock");
    let doc = world.document.as_ref().expect("document");
    let schemas = &doc.components.as_ref().expect("components").schemas;
    assert!(
        matches!(schemas.get(ERROR_SCHEMA_NAME), Some(RefOr::T(_))),
        "{ERROR_SCHEMA_NAME} should be registered"
    );
}

#[scenario(
    path = "tests/features/openapi_schemas.feature",
    name = "Quote endpoint references the wrapper schemas"
)]
fn quote_endpoint_references_wrapper_schemas(world: Mutex<OpenApiWorld>) {
    let _ = world;
}
