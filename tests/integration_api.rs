//! API Integration Tests: financial transaction creation and lookup

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use track_expenses::api::routes::CreateFinancialTransactionRequest;
use track_expenses::domain::{FinancialTransactionType, NewFinancialTransactionCategory};
use track_expenses::store::{CategoryRepository, TransactionRepository, WalletRepository};
use track_expenses::ErrorCode;

mod common;

/// The maximum value for `amount`, exclusive
const MAX_ALLOWED_TRANSACTION_AMOUNT: Decimal = dec!(12345678901234.99);

fn create_request(
    wallet_id: i64,
    amount: Decimal,
    category_id: Option<i64>,
) -> CreateFinancialTransactionRequest {
    CreateFinancialTransactionRequest {
        wallet_id,
        amount: amount.into(),
        description: "Test Description".to_string(),
        transaction_date: Utc.timestamp_opt(1, 0).unwrap(),
        transaction_type: FinancialTransactionType::Expense,
        category_id,
    }
}

fn assert_error_body(body: &Value, code: ErrorCode) {
    assert_eq!(body["status"], code.business_status());
    assert_eq!(body["message"], code.business_message());
    assert_eq!(body["statusCode"], code.business_status_code());
}

#[tokio::test]
async fn test_create_transaction_with_correct_data_saves_it() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let request = create_request(wallet.id, dec!(5.0), None);

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["amount"], "5.0");
    assert_eq!(body["type"], "EXPENSE");
    assert_eq!(body["description"], "Test Description");
    assert_eq!(body["walletId"], wallet.id);
    assert_eq!(body["transactionDate"], "1970-01-01T00:00:01Z");

    assert_eq!(store.count_wallets().await.unwrap(), 1);
    assert_eq!(store.count_transactions().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_transaction_with_unknown_wallet_returns_not_found() {
    let (app, store) = common::setup_test_app();
    let request = create_request(1, dec!(5.0), None);

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, ErrorCode::W003);

    assert_eq!(store.count_wallets().await.unwrap(), 0);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_transaction_with_amount_exceeding_limit_returns_bad_request() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let request = create_request(wallet.id, MAX_ALLOWED_TRANSACTION_AMOUNT, None);

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, ErrorCode::TEA003);

    assert_eq!(store.count_wallets().await.unwrap(), 1);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

fn create_body_with_raw_amount(wallet_id: i64, amount: &str) -> String {
    format!(
        r#"{{
            "walletId": {wallet_id},
            "amount": {amount},
            "description": "Test Description",
            "transactionDate": "1970-01-01T00:00:01Z",
            "type": "EXPENSE"
        }}"#
    )
}

async fn post_raw(app: &axum::Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    common::send(app, request).await
}

#[tokio::test]
async fn test_create_transaction_with_amount_beyond_decimal_range_returns_bad_request() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();

    for amount in [
        r#""99999999999999999999999999999999""#,
        "99999999999999999999999999999999",
        "1e30",
    ] {
        let (status, body) = post_raw(&app, create_body_with_raw_amount(wallet.id, amount)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "amount {amount}");
        assert_error_body(&body, ErrorCode::TEA003);
    }

    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_transaction_with_unknown_wallet_and_oversized_amount_returns_not_found() {
    let (app, store) = common::setup_test_app();

    let (status, body) = post_raw(&app, create_body_with_raw_amount(1, "1e30")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, ErrorCode::W003);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_transaction_with_type_not_matching_category_returns_bad_request() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let category = store
        .insert_category(NewFinancialTransactionCategory {
            name: "name".to_string(),
            category_type: FinancialTransactionType::Income,
        })
        .await
        .unwrap();
    let request = create_request(wallet.id, dec!(10), Some(category.id));

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, ErrorCode::FT002);

    assert_eq!(store.count_wallets().await.unwrap(), 1);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
    assert_eq!(store.count_categories().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_transaction_with_unknown_category_returns_not_found() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let request = create_request(wallet.id, dec!(10), Some(42));

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, ErrorCode::FTC001);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_failed_attempts_leave_transaction_count_unchanged() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let income = store
        .insert_category(NewFinancialTransactionCategory {
            name: "Salary".to_string(),
            category_type: FinancialTransactionType::Income,
        })
        .await
        .unwrap();

    let (status, _) = common::send_json(
        &app,
        "POST",
        "/api/transactions",
        &create_request(wallet.id, dec!(1.00), None),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let failing = [
        create_request(wallet.id + 100, dec!(1.00), None),
        create_request(wallet.id, MAX_ALLOWED_TRANSACTION_AMOUNT, None),
        create_request(wallet.id, dec!(1.00), Some(income.id)),
        create_request(wallet.id, dec!(1.00), Some(income.id + 100)),
    ];
    for request in &failing {
        let (status, _) = common::send_json(&app, "POST", "/api/transactions", request).await;
        assert!(status.is_client_error());
        assert_eq!(store.count_transactions().await.unwrap(), 1);
    }
}

#[tokio::test]
async fn test_create_transaction_accepts_numeric_amount() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let body = json!({
        "walletId": wallet.id,
        "amount": 10,
        "description": "Groceries",
        "transactionDate": "2024-05-01T10:00:00Z",
        "type": "EXPENSE",
        "categoryId": null
    });

    let (status, body) = common::send_json(&app, "POST", "/api/transactions", &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["amount"], "10");
}

#[tokio::test]
async fn test_malformed_body_uses_error_catalog() {
    let (app, store) = common::setup_test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/transactions")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"walletId": "not-a-number"}"#))
        .unwrap();

    let (status, body) = common::send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, ErrorCode::TEA002);
    assert_eq!(store.count_transactions().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let (app, store) = common::setup_test_app();
    let wallet = store.insert_wallet("Test wallet").await.unwrap();
    let (_, created) = common::send_json(
        &app,
        "POST",
        "/api/transactions",
        &create_request(wallet.id, dec!(7.25), None),
    )
    .await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/transactions/{}", created["id"]))
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_get_unknown_transaction_returns_not_found() {
    let (app, _store) = common::setup_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/api/transactions/999")
        .body(Body::empty())
        .unwrap();

    let (status, body) = common::send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body, ErrorCode::FT001);
}

#[tokio::test]
async fn test_correlation_id_is_echoed() {
    let (app, _store) = common::setup_test_app();
    let correlation_id = "3f2c9c1e-7d41-4c55-9a8e-0d3b5d1f6a10";
    let request = Request::builder()
        .method("GET")
        .uri("/api/transactions/1")
        .header("x-correlation-id", correlation_id)
        .body(Body::empty())
        .unwrap();

    let response = tower::util::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.headers()["x-correlation-id"], correlation_id);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _store) = common::setup_test_app();
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = tower::util::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
