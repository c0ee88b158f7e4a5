// ============================================================================
// Basic Usage Example
// ============================================================================

use serde_json::{json, Value};
use std::sync::Arc;
use tally::prelude::*;
use tally::utils::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("tally=debug");

    println!("=== Tally Example ===\n");

    // Sentinel aggregation
    let values = vec![Operand::from("1"), Operand::from("2"), Operand::from(3)];
    println!("add([\"1\", \"2\", 3]) = {:?}", add(values));
    println!("add([\"invalid\", \"1\"]) = {:?}", add(["invalid", "1"]));

    // Strict aggregation
    match add_strict(["", "1"]) {
        Ok(sum) => println!("add_strict = {}", sum),
        Err(e) => println!("add_strict failed: {}", e),
    }

    // Outcome text for a form
    for entered in [vec!["4", "5.5"], vec!["4", "x"], vec![]] {
        let outcome = calculate_result(entered.clone());
        println!("{:?} -> {:?}", entered, outcome.result_text());
    }

    // Request wrapper against a mock transport
    println!("\n=== Sending Data ===");
    let mock = MockTransport::new();
    mock.add_response(
        "POST https://dummy-site.dev/posts",
        TransportResponse::new(201, r#"{"id":1}"#),
    );
    mock.add_response(
        "POST https://dummy-site.dev/posts",
        TransportResponse::new(422, r#"{"title":"required"}"#),
    );

    let client = DataClient::new(mock.clone(), RequestConfig::posts())
        .unwrap()
        .with_event_handler(Arc::new(LoggingEventHandler));

    let created: Result<Value> = client
        .send_data_request(&json!({ "title": "Hello", "content": "World" }))
        .await;
    println!("First request: {:?}", created);

    if let Err(e) = client.send_data_request::<_, Value>(&json!({})).await {
        println!(
            "Second request: {} (status {:?}, data {:?})",
            e,
            e.status_code(),
            e.data()
        );
    }

    println!("\nBodies sent:");
    for call in mock.get_calls() {
        println!("  {} {} {}", call.method, call.url, call.body);
    }
}
