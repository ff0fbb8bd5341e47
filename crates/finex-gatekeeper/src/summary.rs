//! Summary normalization: candidate analyst record → typed fields

use crate::annotator::Gatekeeper;
use crate::config::UnknownFieldPolicy;
use crate::error::GatekeeperError;
use crate::value::{coerce_list, render_text};
use finex_domain::{
    AnnotatedSummary, FieldKind, FieldValue, SummaryField, ValidationIssue, NOT_MENTIONED,
};
use serde_json::{Map, Value};
use tracing::warn;

impl Gatekeeper {
    /// Normalize a call-summary reply
    ///
    /// List fields are always lists (a bare string becomes a one-element list,
    /// an empty value becomes `["Not mentioned"]`), text fields are never
    /// blank, and enum fields take their canonical spelling when recognized.
    ///
    /// # Errors
    ///
    /// `MalformedRecord` if the reply is not a JSON object.
    pub fn normalize_summary(&self, candidate: &Value) -> Result<AnnotatedSummary, GatekeeperError> {
        let obj = candidate.as_object().ok_or_else(|| {
            GatekeeperError::MalformedRecord("Expected a JSON object".to_string())
        })?;

        let mut issues = Vec::new();
        let mut fields = Vec::with_capacity(self.summary.fields().len());

        for spec in self.summary.fields() {
            let raw = lookup(obj, &spec.name);
            let value = match &spec.kind {
                FieldKind::Text => FieldValue::Text(render_text(raw)),
                FieldKind::List => FieldValue::List(coerce_list(raw)),
                FieldKind::Enum(choices) => {
                    let text = render_text(raw);
                    match choices.iter().find(|c| c.eq_ignore_ascii_case(&text)) {
                        Some(choice) => FieldValue::Text(choice.clone()),
                        None => {
                            if text != NOT_MENTIONED {
                                warn!("Field '{}' has unrecognized value '{}'", spec.name, text);
                                issues.push(ValidationIssue::UnrecognizedChoice {
                                    field: spec.name.clone(),
                                    value: text.clone(),
                                });
                            }
                            FieldValue::Text(text)
                        }
                    }
                }
            };
            fields.push(SummaryField {
                name: spec.name.clone(),
                value,
            });
        }

        for (name, raw) in obj {
            if self.summary.field(name).is_some() {
                continue;
            }
            let kept = self.config.unknown_fields == UnknownFieldPolicy::Flag;
            warn!("Field '{}' is not in the summary schema (kept: {})", name, kept);
            issues.push(ValidationIssue::UnknownField {
                field: name.clone(),
                kept,
            });
            if kept {
                let value = match raw {
                    Value::Array(_) => FieldValue::List(coerce_list(Some(raw))),
                    other => FieldValue::Text(render_text(Some(other))),
                };
                fields.push(SummaryField {
                    name: name.clone(),
                    value,
                });
            }
        }

        Ok(AnnotatedSummary {
            fields,
            issues,
            degraded: false,
        })
    }

    /// A summary with every field at its placeholder, marked degraded
    ///
    /// Used when the source document yielded no usable text.
    pub fn placeholder_summary(&self) -> AnnotatedSummary {
        let fields = self
            .summary
            .fields()
            .iter()
            .map(|spec| SummaryField {
                name: spec.name.clone(),
                value: match spec.kind {
                    FieldKind::List => FieldValue::List(vec![NOT_MENTIONED.to_string()]),
                    _ => FieldValue::Text(NOT_MENTIONED.to_string()),
                },
            })
            .collect();

        AnnotatedSummary {
            fields,
            issues: Vec::new(),
            degraded: true,
        }
    }
}

/// Case-insensitive key lookup
fn lookup<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).or_else(|| {
        obj.iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}
