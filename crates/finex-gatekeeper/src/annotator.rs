//! Statement annotation: candidate line items → status-tagged grid

use crate::config::{UnknownFieldPolicy, ValidationConfig};
use crate::error::GatekeeperError;
use crate::value::{cell_values, labels, render_notes};
use finex_domain::{
    AnnotatedCell, AnnotatedStatement, LineItemRow, LineItemSchema, Resolution, SummarySchema,
    ValidationIssue,
};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Currency reported when the reply leaves it blank
pub const UNKNOWN_CURRENCY: &str = "Unknown";

/// Units reported when the reply leaves them blank
pub const UNSPECIFIED_UNITS: &str = "Units not specified";

/// The Gatekeeper validates and annotates model replies
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    pub(crate) config: ValidationConfig,
    pub(crate) line_items: LineItemSchema,
    pub(crate) summary: SummarySchema,
}

/// A line item as pulled from the reply, before period alignment
struct RawRow {
    name: String,
    values: Vec<String>,
    notes: String,
}

/// Where a canonical slot's row came from
#[derive(Clone, Copy, PartialEq, Eq)]
enum Origin {
    Canonical,
    Synonym,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration and schemas
    pub fn new(config: ValidationConfig, line_items: LineItemSchema, summary: SummarySchema) -> Self {
        Self {
            config,
            line_items,
            summary,
        }
    }

    /// Create a Gatekeeper with default configuration and standard schemas
    pub fn default_config() -> Self {
        Self::new(
            ValidationConfig::default(),
            LineItemSchema::standard(),
            SummarySchema::earnings_call(),
        )
    }

    /// The line item schema in use
    pub fn line_items(&self) -> &LineItemSchema {
        &self.line_items
    }

    /// The summary schema in use
    pub fn summary_schema(&self) -> &SummarySchema {
        &self.summary
    }

    /// The validation rules in use
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Annotate a full statement reply
    ///
    /// Expects an object with `currency`, `units`, `years` and a `line_items`
    /// object. Only the `line_items` object is mandatory.
    ///
    /// # Errors
    ///
    /// `MalformedRecord` if the reply is not an object or `line_items` is
    /// missing or not an object.
    pub fn annotate_statement(&self, candidate: &Value) -> Result<AnnotatedStatement, GatekeeperError> {
        let obj = candidate.as_object().ok_or_else(|| {
            GatekeeperError::MalformedRecord("Expected a JSON object".to_string())
        })?;

        let line_items = match obj.get("line_items") {
            Some(Value::Object(items)) => items,
            Some(_) => {
                return Err(GatekeeperError::MalformedRecord(
                    "'line_items' is not an object".to_string(),
                ))
            }
            None => {
                return Err(GatekeeperError::MalformedRecord(
                    "Missing 'line_items' object".to_string(),
                ))
            }
        };

        let mut period_issues = Vec::new();
        let periods: Vec<String> = labels(obj.get("years"))
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                label.unwrap_or_else(|| {
                    let placeholder = format!("Period {}", idx + 1);
                    warn!("Period {} has no label, using '{}'", idx + 1, placeholder);
                    period_issues.push(ValidationIssue::UnlabeledPeriod {
                        position: idx + 1,
                        label: placeholder.clone(),
                    });
                    placeholder
                })
            })
            .collect();
        let (periods, rows, mut issues) = self.annotate_rows(line_items, periods);
        period_issues.append(&mut issues);
        let issues = period_issues;

        Ok(AnnotatedStatement {
            currency: text_or(obj.get("currency"), UNKNOWN_CURRENCY),
            units: text_or(obj.get("units"), UNSPECIFIED_UNITS),
            periods,
            rows,
            issues,
        })
    }

    /// Annotate a line item map over known periods
    ///
    /// Returns the rows in schema order followed by any kept unknown fields,
    /// plus the issues recorded along the way.
    pub fn annotate_line_items(
        &self,
        line_items: &Map<String, Value>,
        periods: &[String],
    ) -> (Vec<LineItemRow>, Vec<ValidationIssue>) {
        let (_, rows, issues) = self.annotate_rows(line_items, periods.to_vec());
        (rows, issues)
    }

    fn annotate_rows(
        &self,
        line_items: &Map<String, Value>,
        periods: Vec<String>,
    ) -> (Vec<String>, Vec<LineItemRow>, Vec<ValidationIssue>) {
        let mut issues = Vec::new();
        let mut slots: Vec<Option<(RawRow, Origin)>> = self.line_items.items().iter().map(|_| None).collect();
        let mut unknown: Vec<RawRow> = Vec::new();

        for (name, raw) in line_items {
            let row = split_line_item(name, raw);

            let (canonical, origin) = match self.line_items.resolve(name) {
                Some(Resolution::Canonical(canonical)) => (canonical, Origin::Canonical),
                Some(Resolution::Synonym { canonical }) if self.config.remap_synonyms => {
                    (canonical, Origin::Synonym)
                }
                _ => {
                    let kept = self.config.unknown_fields == UnknownFieldPolicy::Flag;
                    warn!("Field '{}' is not in the line item schema (kept: {})", name, kept);
                    issues.push(ValidationIssue::UnknownField {
                        field: name.clone(),
                        kept,
                    });
                    if kept {
                        unknown.push(row);
                    }
                    continue;
                }
            };

            let Some(idx) = self.line_items.position(&canonical) else {
                continue;
            };

            let replace = match &slots[idx] {
                None => true,
                Some((_, existing)) => *existing == Origin::Synonym && origin == Origin::Canonical,
            };
            if !replace {
                debug!("Dropping duplicate row '{}' for '{}'", name, canonical);
                continue;
            }

            if origin == Origin::Synonym {
                issues.push(ValidationIssue::SynonymRemapped {
                    from: name.clone(),
                    to: canonical.clone(),
                });
            }
            slots[idx] = Some((
                RawRow {
                    name: canonical,
                    ..row
                },
                origin,
            ));
        }

        let periods = if periods.is_empty() {
            let widest = slots
                .iter()
                .flatten()
                .map(|(row, _)| row.values.len())
                .chain(unknown.iter().map(|row| row.values.len()))
                .max()
                .unwrap_or(0);
            if widest > 0 {
                issues.push(ValidationIssue::MissingPeriods);
            }
            (1..=widest).map(|n| format!("Period {}", n)).collect()
        } else {
            periods
        };

        let mut rows = Vec::with_capacity(slots.len() + unknown.len());
        for (item, slot) in self.line_items.items().iter().zip(slots) {
            match slot {
                Some((raw, _)) => rows.push(align(raw, periods.len(), &mut issues)),
                None if self.config.fill_absent_items => rows.push(LineItemRow {
                    name: item.name.clone(),
                    cells: vec![AnnotatedCell::missing(); periods.len()],
                    notes: String::new(),
                }),
                None => {}
            }
        }
        for raw in unknown {
            rows.push(align(raw, periods.len(), &mut issues));
        }

        (periods, rows, issues)
    }
}

/// Pull values and notes out of one line item, whatever its shape
fn split_line_item(name: &str, raw: &Value) -> RawRow {
    let (values, notes) = match raw {
        Value::Object(fields) => (cell_values(fields.get("values")), render_notes(fields.get("notes"))),
        other => (cell_values(Some(other)), String::new()),
    };
    RawRow {
        name: name.to_string(),
        values,
        notes,
    }
}

/// Pad or truncate a row to the period count and tag each cell
fn align(raw: RawRow, period_count: usize, issues: &mut Vec<ValidationIssue>) -> LineItemRow {
    let RawRow { name, mut values, notes } = raw;

    if values.len() != period_count {
        warn!(
            "Line item '{}' has {} value(s) for {} period(s)",
            name,
            values.len(),
            period_count
        );
        issues.push(ValidationIssue::PeriodCountMismatch {
            field: name.clone(),
            expected: period_count,
            actual: values.len(),
        });
        values.resize_with(period_count, || finex_domain::NOT_AVAILABLE.to_string());
    }

    let cells = values
        .into_iter()
        .map(|value| AnnotatedCell::classified(value, &notes))
        .collect();

    LineItemRow { name, cells, notes }
}

fn text_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => fallback.to_string(),
    }
}
