use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use everyday_toolbox::grocery::{
    build_receipt, read_catalog, read_requests, Catalog, Product, ReceiptError, RequestLine,
};
use tempfile::TempDir;

const STORE: &str = "Ernesto's Daily Groceries";
const SURVEY: &str = "www.ernestosgroceries.com/survey";

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(14, 5, 9))
        .expect("valid timestamp")
}

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write csv");
    path
}

fn sample_catalog() -> Catalog {
    [
        Product {
            id: "D150".into(),
            name: "1 gallon milk".into(),
            price: 2.85,
        },
        Product {
            id: "W231".into(),
            name: "32 oz granola".into(),
            price: 3.85,
        },
    ]
    .into_iter()
    .collect()
}

fn sample_requests() -> Vec<RequestLine> {
    vec![
        RequestLine {
            product_id: "D150".into(),
            quantity: 2,
        },
        RequestLine {
            product_id: "W231".into(),
            quantity: 1,
        },
    ]
}

#[test]
fn reads_catalog_and_requests_from_csv() {
    let dir = TempDir::new().unwrap();
    let products = write(
        dir.path(),
        "products.csv",
        "Product #,Name,Price,Aisle\nD150,1 gallon milk,2.85,4\nW231, 32 oz granola ,3.85,7\n,,,\n",
    );
    let requests = write(
        dir.path(),
        "request.csv",
        "Product #,Quantity\nD150,2\nlonely\nW231,1\n",
    );

    let catalog = read_catalog(&products).unwrap();
    assert_eq!(catalog.len(), 2);
    let granola = catalog.get("W231").expect("granola present");
    assert_eq!(granola.name, "32 oz granola");
    assert_close(granola.price, 3.85, 1e-12);

    let lines = read_requests(&requests).unwrap();
    assert_eq!(lines, sample_requests());
}

#[test]
fn thursday_receipt_has_no_discount() {
    // 2024-06-06 목요일
    let receipt = build_receipt(STORE, SURVEY, &sample_catalog(), &sample_requests(), at(2024, 6, 6))
        .unwrap();
    assert_eq!(receipt.item_count, 3);
    assert_close(receipt.discount_rate, 0.0, 1e-12);
    assert_close(receipt.subtotal, 9.55, 1e-9);
    assert_close(receipt.sales_tax, 0.573, 1e-9);
    assert_close(receipt.total, 10.123, 1e-9);

    let text = receipt.to_string();
    assert!(text.starts_with(STORE));
    assert!(text.contains("1 gallon milk: 2 @ $2.85"));
    assert!(text.contains("Number of items: 3"));
    assert!(text.contains("Subtotal: $9.55"));
    assert!(text.contains("Total: $10.12"));
    assert!(text.contains("Thu Jun 06 14:05:09 2024"));
    assert!(text.ends_with(&format!("Survey URL: {SURVEY}")));
    assert!(!text.contains("discount"));
}

#[test]
fn tuesday_receipt_discounts_unit_prices() {
    // 2024-06-04 화요일
    let receipt = build_receipt(STORE, SURVEY, &sample_catalog(), &sample_requests(), at(2024, 6, 4))
        .unwrap();
    assert_close(receipt.discount_rate, 0.10, 1e-12);
    assert_close(receipt.lines[0].unit_price, 2.565, 1e-9);
    assert_close(receipt.subtotal, 8.595, 1e-9);
    assert_close(receipt.sales_tax, 0.5157, 1e-9);
    assert_close(receipt.total, 9.1107, 1e-9);
    assert!(receipt.to_string().contains("Weekday discount: 10%"));
}

#[test]
fn unknown_product_is_an_error() {
    let requests = vec![RequestLine {
        product_id: "X999".into(),
        quantity: 1,
    }];
    let err = build_receipt(STORE, SURVEY, &sample_catalog(), &requests, at(2024, 6, 6)).unwrap_err();
    assert!(matches!(err, ReceiptError::UnknownProduct(ref id) if id == "X999"));
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");
    let err = read_catalog(&path).unwrap_err();
    assert!(matches!(err, ReceiptError::MissingFile(ref p) if p == &path));
}

#[test]
fn bad_price_reports_line() {
    let dir = TempDir::new().unwrap();
    let products = write(
        dir.path(),
        "products.csv",
        "Product #,Name,Price\nD150,milk,2.85\nW231,granola,cheap\n",
    );
    let err = read_catalog(&products).unwrap_err();
    match err {
        ReceiptError::InvalidRow { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_quantity_is_an_error() {
    let dir = TempDir::new().unwrap();
    let requests = write(dir.path(), "request.csv", "Product #,Quantity\nD150,two\n");
    assert!(matches!(
        read_requests(&requests),
        Err(ReceiptError::InvalidRow { .. })
    ));
}

#[test]
fn huge_quantities_are_counted_without_overflow() {
    let dir = TempDir::new().unwrap();
    let requests = write(
        dir.path(),
        "request.csv",
        "Product #,Quantity\nD150,3000000000\nD150,3000000000\n",
    );
    let lines = read_requests(&requests).unwrap();
    assert_eq!(lines.len(), 2);

    let receipt = build_receipt(STORE, SURVEY, &sample_catalog(), &lines, at(2024, 6, 6)).unwrap();
    assert_eq!(receipt.item_count, 6_000_000_000);
    assert!(receipt.to_string().contains("Number of items: 6000000000"));
}
