//! Integration tests for finex-gatekeeper
//!
//! These tests drive whole model replies through annotation and check the
//! cell-status and coercion guarantees the exporters rely on.

use finex_domain::{CellStatus, FieldValue, NOT_MENTIONED};
use finex_gatekeeper::Gatekeeper;
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn test_revenue_over_two_periods() {
    let gatekeeper = Gatekeeper::default_config();
    let candidate = json!({
        "currency": "USD",
        "units": "in thousands",
        "years": ["2023", "2022"],
        "line_items": {
            "Revenue": {"values": ["1,000", "N/A"], "notes": ""}
        }
    });

    let statement = gatekeeper.annotate_statement(&candidate).unwrap();

    let current = statement.cell("Revenue", "2023").unwrap();
    assert_eq!(current.value, "1,000");
    assert_eq!(current.status, CellStatus::Ok);

    let prior = statement.cell("Revenue", "2022").unwrap();
    assert_eq!(prior.value, "N/A");
    assert_eq!(prior.status, CellStatus::Missing);
}

#[test]
fn test_summary_scenarios() {
    let gatekeeper = Gatekeeper::default_config();
    let summary = gatekeeper
        .normalize_summary(&json!({
            "executive_summary": "Demand recovered in the second half.",
            "management_tone": "Optimistic",
            "confidence_level": "High",
            "key_positives": "Strong margins",
            "key_concerns": [],
            "growth_initiatives": ["New plant in Pune", "Export push"]
        }))
        .unwrap();

    assert_eq!(
        summary.get("key_positives"),
        Some(&FieldValue::List(vec!["Strong margins".to_string()]))
    );
    assert_eq!(
        summary.get("key_concerns"),
        Some(&FieldValue::List(vec![NOT_MENTIONED.to_string()]))
    );
    assert_eq!(
        summary.get("forward_guidance"),
        Some(&FieldValue::Text(NOT_MENTIONED.to_string()))
    );
    assert_eq!(summary.get("growth_initiatives").unwrap().as_list().unwrap().len(), 2);
}

#[test]
fn test_period_order_is_preserved() {
    let gatekeeper = Gatekeeper::default_config();
    let candidate = json!({
        "years": ["2021", "2023", "2022"],
        "line_items": {"Revenue": {"values": ["1", "3", "2"], "notes": ""}}
    });

    let statement = gatekeeper.annotate_statement(&candidate).unwrap();
    assert_eq!(statement.periods, vec!["2021", "2023", "2022"]);
    assert_eq!(statement.cell("Revenue", "2023").unwrap().value, "3");
}

fn line_item_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::String("N/A".to_string())),
        "[0-9]{1,3}(,[0-9]{3}){0,2}".prop_map(Value::String),
        "\\([0-9]{1,4}\\)".prop_map(Value::String),
        (-10_000i64..10_000).prop_map(|n| json!(n)),
        Just(Value::Null),
    ]
}

fn notes() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Ambiguous: label differs".to_string()),
        Just("figure looks AMBIGUOUS".to_string()),
        "[a-z ]{0,20}",
    ]
}

fn candidate_statement() -> impl Strategy<Value = Value> {
    let names = prop::sample::select(vec![
        "Revenue",
        "Net Sales",
        "COGS",
        "Gross Profit",
        "Operating Income",
        "Net Income",
        "EBITDA",
    ]);
    let row = (prop::collection::vec(line_item_value(), 0..4), notes())
        .prop_map(|(values, notes)| json!({"values": values, "notes": notes}));

    (
        prop::collection::vec("20[0-2][0-9]", 0..4),
        prop::collection::btree_map(names, row, 0..6),
    )
        .prop_map(|(years, rows)| {
            let line_items: serde_json::Map<String, Value> =
                rows.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
            json!({"currency": "USD", "units": "in millions", "years": years, "line_items": line_items})
        })
}

proptest! {
    /// Property: annotating the same reply twice yields identical records
    #[test]
    fn test_annotation_is_idempotent(candidate in candidate_statement()) {
        let gatekeeper = Gatekeeper::default_config();
        let first = gatekeeper.annotate_statement(&candidate).unwrap();
        let second = gatekeeper.annotate_statement(&candidate).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: every row has exactly one cell per period
    #[test]
    fn test_rows_match_period_count(candidate in candidate_statement()) {
        let statement = Gatekeeper::default_config().annotate_statement(&candidate).unwrap();
        for row in &statement.rows {
            prop_assert_eq!(row.cells.len(), statement.periods.len());
        }
    }

    /// Property: N/A cells are missing; other cells in ambiguous rows are ambiguous
    #[test]
    fn test_status_follows_value_and_note(candidate in candidate_statement()) {
        let statement = Gatekeeper::default_config().annotate_statement(&candidate).unwrap();
        for row in &statement.rows {
            let flagged = row.notes.to_lowercase().contains("ambiguous");
            for cell in &row.cells {
                if cell.value == "N/A" {
                    prop_assert_eq!(cell.status, CellStatus::Missing);
                } else if flagged {
                    prop_assert_eq!(cell.status, CellStatus::Ambiguous);
                } else {
                    prop_assert_eq!(cell.status, CellStatus::Ok);
                }
            }
        }
    }

    /// Property: a list field given as a bare string becomes a one-element list
    #[test]
    fn test_bare_string_becomes_single_list(text in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]") {
        let summary = Gatekeeper::default_config()
            .normalize_summary(&json!({"key_positives": text.clone()}))
            .unwrap();
        prop_assert_eq!(
            summary.get("key_positives"),
            Some(&FieldValue::List(vec![text]))
        );
    }

    /// Property: summary normalization is idempotent
    #[test]
    fn test_summary_is_idempotent(
        positives in prop::collection::vec("[a-z ]{0,10}", 0..4),
        tone in prop::sample::select(vec!["optimistic", "Cautious", "unsure", ""]),
    ) {
        let candidate = json!({"key_positives": positives, "management_tone": tone});
        let gatekeeper = Gatekeeper::default_config();
        prop_assert_eq!(
            gatekeeper.normalize_summary(&candidate).unwrap(),
            gatekeeper.normalize_summary(&candidate).unwrap()
        );
    }
}
