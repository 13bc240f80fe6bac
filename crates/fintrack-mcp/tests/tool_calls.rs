//! End-to-end tool call tests for the fintrack MCP server.
//!
//! Drives the server the way an MCP client session would: a sequence of
//! tool calls whose JSON payloads are checked field by field, plus a
//! concurrency check on the shared ledger handle.

use std::sync::Arc;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, RawContent};
use tokio::sync::RwLock;

use fintrack_ledger::Ledger;
use fintrack_mcp::{AddTransactionInput, FintrackMcpServer, ListTransactionsInput};

fn payload(result: &CallToolResult) -> serde_json::Value {
    match &result.content.first().expect("tool returned no content").raw {
        RawContent::Text(t) => serde_json::from_str(&t.text).expect("tool output was not valid JSON"),
        other => panic!("expected text content, got {:?}", other),
    }
}

fn add(kind: &str, amount: f64, category: &str, description: &str) -> Parameters<AddTransactionInput> {
    Parameters(AddTransactionInput {
        kind: kind.to_string(),
        amount,
        category: category.to_string(),
        description: if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        },
    })
}

fn list(category: Option<&str>) -> Parameters<ListTransactionsInput> {
    Parameters(ListTransactionsInput {
        category: category.map(str::to_string),
    })
}

#[tokio::test]
async fn full_session_walkthrough() {
    let server = FintrackMcpServer::new();

    // Record 1000 dollars of salary income.
    let result = server
        .add_transaction(add("income", 1000.0, "Income", "salary"))
        .await
        .unwrap();
    assert!(!result.is_error.unwrap_or(false));
    let salary = payload(&result);
    assert_eq!(salary["id"], 1);
    assert_eq!(salary["type"], "income");
    assert_eq!(salary["amount"], 1000.0);
    assert_eq!(salary["category"], "Income");
    assert_eq!(salary["description"], "salary");
    assert!(salary["timestamp"].as_u64().unwrap() > 0);

    // Record a 50 dollar dinner.
    let result = server
        .add_transaction(add("expense", 50.0, "Food", "dinner"))
        .await
        .unwrap();
    let dinner = payload(&result);
    assert_eq!(dinner["id"], 2);
    assert!(dinner["timestamp"].as_u64().unwrap() >= salary["timestamp"].as_u64().unwrap());

    // Balance nets the two.
    let result = server.get_balance().await.unwrap();
    assert_eq!(payload(&result)["balance"], 950.0);

    // Breakdown holds one signed total per touched category.
    let result = server.get_category_breakdown().await.unwrap();
    let totals = payload(&result)["totals"].clone();
    assert_eq!(totals["Income"], 1000.0);
    assert_eq!(totals["Food"], -50.0);
    assert_eq!(totals.as_object().unwrap().len(), 2);

    // Filtered listing returns just the dinner.
    let result = server.list_transactions(list(Some("Food"))).await.unwrap();
    let transactions = payload(&result)["transactions"].clone();
    let transactions = transactions.as_array().unwrap();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0]["id"], 2);
    assert_eq!(transactions[0]["description"], "dinner");

    // Unfiltered listing preserves insertion order.
    let result = server.list_transactions(list(None)).await.unwrap();
    let transactions = payload(&result)["transactions"].clone();
    let transactions = transactions.as_array().unwrap();
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0]["id"], 1);
    assert_eq!(transactions[1]["id"], 2);
}

#[tokio::test]
async fn queries_before_any_record_return_empty_shapes() {
    let server = FintrackMcpServer::new();

    let result = server.get_balance().await.unwrap();
    assert!(!result.is_error.unwrap_or(false));
    assert_eq!(payload(&result)["balance"], 0.0);

    let result = server.get_category_breakdown().await.unwrap();
    assert!(!result.is_error.unwrap_or(false));
    assert_eq!(payload(&result)["totals"], serde_json::json!({}));

    let result = server.list_transactions(list(None)).await.unwrap();
    assert!(!result.is_error.unwrap_or(false));
    assert_eq!(payload(&result)["transactions"], serde_json::json!([]));
}

#[tokio::test]
async fn rejected_inputs_leave_the_session_state_untouched() {
    let ledger = Arc::new(RwLock::new(Ledger::new()));
    let server = FintrackMcpServer::with_ledger(Arc::clone(&ledger));

    server
        .add_transaction(add("income", 100.0, "Income", ""))
        .await
        .unwrap();

    // A burst of bad calls: wrong type, wrong category, bad amounts,
    // bad list filter.
    let bad_calls = [
        server.add_transaction(add("transfer", 10.0, "Food", "")).await,
        server.add_transaction(add("expense", 10.0, "food", "")).await,
        server.add_transaction(add("expense", 0.0, "Food", "")).await,
        server.add_transaction(add("expense", -3.5, "Food", "")).await,
    ];
    for result in bad_calls {
        assert!(result.unwrap().is_error.unwrap_or(false));
    }
    let result = server.list_transactions(list(Some("Travel"))).await.unwrap();
    assert!(result.is_error.unwrap_or(false));

    // One good entry, then verify nothing leaked through.
    let result = server
        .add_transaction(add("expense", 25.0, "Food", "groceries"))
        .await
        .unwrap();
    assert_eq!(payload(&result)["id"], 2);

    let guard = ledger.read().await;
    assert_eq!(guard.len(), 2);
    assert_eq!(guard.balance(), 7_500);
}

#[tokio::test]
async fn concurrent_adds_produce_dense_unique_ids() {
    let ledger = Arc::new(RwLock::new(Ledger::new()));
    let server = FintrackMcpServer::with_ledger(Arc::clone(&ledger));

    let mut handles = Vec::new();
    for i in 0..32 {
        let server = server.clone();
        handles.push(tokio::spawn(async move {
            let kind = if i % 2 == 0 { "income" } else { "expense" };
            let result = server
                .add_transaction(add(kind, 1.0 + i as f64, "Other", ""))
                .await
                .unwrap();
            assert!(!result.is_error.unwrap_or(false));
            payload(&result)["id"].as_u64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();

    // Writes serialize on the lock, so ids come out dense: 1..=32.
    let expected: Vec<u64> = (1..=32).collect();
    assert_eq!(ids, expected);
    assert_eq!(ledger.read().await.len(), 32);
}

#[tokio::test]
async fn reads_run_while_the_ledger_is_shared() {
    let ledger = Arc::new(RwLock::new(Ledger::new()));
    let server = FintrackMcpServer::with_ledger(Arc::clone(&ledger));

    server
        .add_transaction(add("income", 500.0, "Income", ""))
        .await
        .unwrap();

    // Hold a read guard on the shared handle while queries run; read
    // locks do not exclude each other, so these complete without
    // deadlocking.
    let guard = ledger.read().await;
    let balance = server.get_balance().await.unwrap();
    let breakdown = server.get_category_breakdown().await.unwrap();
    drop(guard);

    assert_eq!(payload(&balance)["balance"], 500.0);
    assert_eq!(payload(&breakdown)["totals"]["Income"], 500.0);
}
