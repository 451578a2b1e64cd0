//! End-to-end HTTP tests for the quote endpoint and health probes.

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};
use shipping_calculator::Trace;
use shipping_calculator::domain::TRACE_ID_HEADER;
use shipping_calculator::inbound::http::health::{HealthState, live, ready};
use shipping_calculator::inbound::http::shipping::calculate_shipping;
use shipping_calculator::inbound::http::state::HttpState;

async fn post_calculate(body: Value) -> (StatusCode, Option<String>, Value) {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::default()))
            .wrap(Trace)
            .service(calculate_shipping),
    )
    .await;
    let req = test::TestRequest::post()
        .uri("/calculate")
        .set_json(&body)
        .to_request();
    let res = test::call_service(&app, req).await;
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = test::read_body_json(res).await;
    (status, trace_id, body)
}

fn parcel(origin: &str, destination: &str, weight: f64, dims: [f64; 3], express: bool) -> Value {
    json!({
        "origin_zipcode": origin,
        "destination_zipcode": destination,
        "weight": weight,
        "dimensions": { "length": dims[0], "width": dims[1], "height": dims[2] },
        "is_express": express
    })
}

#[actix_web::test]
async fn express_quote_matches_express_option() {
    let (status, trace_id, body) =
        post_calculate(parcel("1414", "1428", 1.0, [10.0, 10.0, 10.0], true)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(trace_id.is_some(), "every response carries a trace id");
    assert_eq!(body["shipping_cost"], json!(1875.0));
    assert_eq!(body["estimated_delivery_time"], "1 dia");
    assert_eq!(body["available_services"], json!(["standard", "express"]));
    assert_eq!(body["shipping_options"][0]["cost"], json!(1250.0));
    assert_eq!(body["shipping_options"][1]["cost"], json!(1875.0));
}

#[rstest]
#[case::missing_origin(
    parcel("", "1428", 1.0, [10.0, 10.0, 10.0], false),
    "invalid origin_zipcode: origin_zipcode is required",
    "origin_zipcode"
)]
#[case::short_destination(
    parcel("1414", "123", 1.0, [10.0, 10.0, 10.0], false),
    "invalid destination_zipcode: destination_zipcode must be a valid zipcode format (4-8 digits)",
    "destination_zipcode"
)]
#[case::negative_weight(
    parcel("1414", "1428", -2.0, [10.0, 10.0, 10.0], false),
    "invalid weight: weight must be greater than 0",
    "weight"
)]
#[case::oversized(
    parcel("1414", "1428", 1.0, [30.0, 30.0, 20.0], false),
    "invalid dimensions: package volume (18000.00 cm³) exceeds maximum allowed volume (15000.00 cm³)",
    "dimensions"
)]
#[actix_web::test]
async fn validation_failures_use_the_error_envelope(
    #[case] body: Value,
    #[case] message: &str,
    #[case] field: &str,
) {
    let (status, trace_id, body) = post_calculate(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], message);
    assert_eq!(body["details"]["field"], field);
    assert_eq!(body["traceId"].as_str(), trace_id.as_deref());
}

#[actix_web::test]
async fn health_probes_report_readiness() {
    let health = web::Data::new(HealthState::new());
    let app = test::init_service(
        App::new()
            .app_data(health.clone())
            .service(ready)
            .service(live),
    )
    .await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    health.mark_ready();
    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
}
