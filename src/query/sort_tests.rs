//! Tests for the sort stage.

use super::*;
use crate::model::{Amount, Customer, InvoiceId, InvoiceStatus};
use chrono::{NaiveDate, TimeZone, Utc};

// ===== Test Helpers =====

fn make_invoice(id: &str, name: &str, cents: u64, due: Option<NaiveDate>) -> Invoice {
    Invoice {
        id: InvoiceId::new(id).expect("valid id"),
        customer: Some(Customer {
            name: Some(name.to_string()),
            company: None,
        }),
        amount: Amount::from_cents(cents),
        due_date: due,
        status: InvoiceStatus::Pending,
        comments: Vec::new(),
        last_updated: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

fn spec(key: SortKey, direction: SortDirection) -> SortSpec {
    SortSpec { key, direction }
}

fn ids<'a>(records: &[&'a Invoice]) -> Vec<&'a str> {
    records.iter().map(|i| i.id.as_str()).collect()
}

// ===== SortKey Parsing =====

#[test]
fn parse_accepts_dotted_customer_name() {
    assert_eq!(SortKey::parse("customer.name"), Ok(SortKey::CustomerName));
}

#[test]
fn parse_roundtrips_all_keys() {
    for key in [
        SortKey::Id,
        SortKey::CustomerName,
        SortKey::Amount,
        SortKey::DueDate,
        SortKey::Status,
        SortKey::LastUpdated,
    ] {
        assert_eq!(SortKey::parse(key.as_str()), Ok(key));
    }
}

#[test]
fn parse_rejects_unknown_field() {
    assert!(SortKey::parse("customer.address").is_err());
}

// ===== Numeric Sort =====

#[test]
fn amount_sorts_numerically_ascending() {
    // [500, 50000, 1500] -> [500, 1500, 50000].
    let records = vec![
        make_invoice("a", "A", 500_00, None),
        make_invoice("b", "B", 50_000_00, None),
        make_invoice("c", "C", 1_500_00, None),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::Amount, SortDirection::Ascending));
    assert_eq!(ids(&sorted), vec!["a", "c", "b"]);
}

#[test]
fn amount_descending_reverses_ascending() {
    let records = vec![
        make_invoice("a", "A", 500_00, None),
        make_invoice("b", "B", 50_000_00, None),
        make_invoice("c", "C", 1_500_00, None),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::Amount, SortDirection::Descending));
    assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
}

// ===== String Sort =====

#[test]
fn customer_name_sorts_case_insensitively() {
    let records = vec![
        make_invoice("a", "beta llc", 100, None),
        make_invoice("b", "Alpha Inc", 100, None),
        make_invoice("c", "GAMMA Co", 100, None),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::CustomerName, SortDirection::Ascending));
    assert_eq!(ids(&sorted), vec!["b", "a", "c"]);
}

#[test]
fn missing_customer_sorts_with_placeholder_name() {
    let mut records = vec![
        make_invoice("a", "Zed", 100, None),
        make_invoice("b", "Alpha", 100, None),
    ];
    records[0].customer = None; // customer_name() == "N/A"
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::CustomerName, SortDirection::Ascending));
    assert_eq!(ids(&sorted), vec!["b", "a"]);
}

// ===== Date Sort =====

#[test]
fn due_date_sorts_chronologically_with_missing_first() {
    let records = vec![
        make_invoice("a", "A", 100, NaiveDate::from_ymd_opt(2026, 5, 1)),
        make_invoice("b", "B", 100, None),
        make_invoice("c", "C", 100, NaiveDate::from_ymd_opt(2026, 2, 1)),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::DueDate, SortDirection::Ascending));
    assert_eq!(ids(&sorted), vec!["b", "c", "a"]);
}

// ===== Stability & Direction Inversion =====

#[test]
fn equal_keys_preserve_input_order_ascending() {
    let records = vec![
        make_invoice("first", "Same", 100, None),
        make_invoice("second", "Same", 100, None),
        make_invoice("third", "Same", 100, None),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let sorted = apply(refs, spec(SortKey::Amount, SortDirection::Ascending));
    assert_eq!(ids(&sorted), vec!["first", "second", "third"]);
}

#[test]
fn descending_is_exact_inverse_of_ascending_with_ties() {
    let records = vec![
        make_invoice("a", "X", 200, None),
        make_invoice("b", "X", 100, None),
        make_invoice("c", "X", 200, None),
        make_invoice("d", "X", 100, None),
    ];
    let refs: Vec<&Invoice> = records.iter().collect();
    let mut asc = apply(refs.clone(), spec(SortKey::Amount, SortDirection::Ascending));
    let desc = apply(refs, spec(SortKey::Amount, SortDirection::Descending));
    asc.reverse();
    assert_eq!(ids(&asc), ids(&desc));
}

#[test]
fn toggled_flips_direction() {
    assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
}
