//! Canonical schemas that extracted data is mapped into
//!
//! Two shapes exist:
//! - [`LineItemSchema`]: ordered canonical income-statement line items, each with
//!   the synonyms a filing might use for it. The table is embedded verbatim into
//!   the extraction prompt and used locally to check the names the model returns.
//! - [`SummarySchema`]: the analyst fields of an earnings-call summary, each
//!   tagged with the kind of value it holds.
//!
//! Both are immutable once built and are shared read-only for the whole process.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Errors raised when constructing a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Schema has no entries
    Empty,

    /// An entry has a blank name
    BlankName,

    /// Two entries share a name (compared case-insensitively)
    DuplicateName(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::Empty => write!(f, "schema has no entries"),
            SchemaError::BlankName => write!(f, "schema entry has a blank name"),
            SchemaError::DuplicateName(name) => write!(f, "duplicate schema entry '{}'", name),
        }
    }
}

impl std::error::Error for SchemaError {}

/// A canonical line item and the synonyms that map onto it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Canonical name (e.g., "Revenue")
    pub name: String,

    /// Accepted alternative labels (e.g., "Net Sales")
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl LineItem {
    /// Create a line item from a name and its synonyms
    pub fn new(name: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            name: name.into(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// How a returned field name relates to the schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Name is a canonical item (the canonical spelling is returned)
    Canonical(String),

    /// Name is a synonym of the given canonical item
    Synonym {
        /// Canonical item the synonym maps onto
        canonical: String,
    },
}

impl Resolution {
    /// Canonical name regardless of how it was reached
    pub fn canonical(&self) -> &str {
        match self {
            Resolution::Canonical(name) => name,
            Resolution::Synonym { canonical } => canonical,
        }
    }
}

/// Ordered set of canonical line items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemSchema {
    items: Vec<LineItem>,
}

impl LineItemSchema {
    /// Build a schema, rejecting empty tables, blank names and duplicates
    pub fn new(items: Vec<LineItem>) -> Result<Self, SchemaError> {
        if items.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen: Vec<String> = Vec::with_capacity(items.len());
        for item in &items {
            let key = item.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(SchemaError::BlankName);
            }
            if seen.contains(&key) {
                return Err(SchemaError::DuplicateName(item.name.clone()));
            }
            seen.push(key);
        }

        Ok(Self { items })
    }

    /// The standard income-statement schema
    pub fn standard() -> Self {
        Self {
            items: vec![
                LineItem::new(
                    "Revenue",
                    &["Net Sales", "Total Revenue", "Sales", "Operating Revenue"],
                ),
                LineItem::new(
                    "Cost of Goods Sold",
                    &["Cost of Sales", "COGS", "Cost of Revenue"],
                ),
                LineItem::new("Gross Profit", &["Gross Margin", "Gross Income"]),
                LineItem::new(
                    "Operating Expenses",
                    &[
                        "Operating Costs",
                        "Selling, General and Administrative Expenses",
                        "SG&A",
                        "Operating Expenses",
                    ],
                ),
                LineItem::new(
                    "Operating Income",
                    &["EBIT", "Operating Profit", "Income from Operations"],
                ),
                LineItem::new(
                    "Net Income",
                    &["Net Profit", "Profit After Tax", "Bottom Line"],
                ),
            ],
        }
    }

    /// Line items in declared order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Canonical names in declared order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Declared position of a canonical name
    pub fn position(&self, canonical: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == canonical)
    }

    /// Resolve a returned field name against the schema (case-insensitive)
    ///
    /// Canonical names win over synonyms, so an item listed as its own synonym
    /// ("Operating Expenses") resolves as canonical.
    pub fn resolve(&self, name: &str) -> Option<Resolution> {
        let wanted = name.trim();

        if let Some(item) = self
            .items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(wanted))
        {
            return Some(Resolution::Canonical(item.name.clone()));
        }

        self.items
            .iter()
            .find(|item| item.synonyms.iter().any(|s| s.eq_ignore_ascii_case(wanted)))
            .map(|item| Resolution::Synonym {
                canonical: item.name.clone(),
            })
    }

    /// Render the synonym table for embedding into a prompt
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            let _ = writeln!(out, "- {}: {}", item.name, item.synonyms.join(", "));
        }
        out
    }
}

impl Default for LineItemSchema {
    fn default() -> Self {
        Self::standard()
    }
}

/// Kind of value a summary field holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,

    /// One of a fixed set of choices
    Enum(Vec<String>),

    /// List of short strings
    List,
}

impl FieldKind {
    /// Short name used in prompts and listings
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Enum(_) => "enum",
            FieldKind::List => "list of strings",
        }
    }
}

/// A named summary field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON reply
    pub name: String,

    /// Kind of value expected
    pub kind: FieldKind,

    /// What the field should capture
    pub description: String,
}

impl FieldSpec {
    fn new(name: &str, kind: FieldKind, description: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            description: description.to_string(),
        }
    }

    fn choices(values: &[&str]) -> FieldKind {
        FieldKind::Enum(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Fixed set of analyst fields for a call summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySchema {
    fields: Vec<FieldSpec>,
}

impl SummarySchema {
    /// Build a summary schema, rejecting empty tables, blank names and duplicates
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (idx, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::BlankName);
            }
            if fields[..idx].iter().any(|f| f.name.eq_ignore_ascii_case(&field.name)) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    /// The earnings-call summary schema
    pub fn earnings_call() -> Self {
        Self {
            fields: vec![
                FieldSpec::new(
                    "executive_summary",
                    FieldKind::Text,
                    "Three to five sentence overview of the call",
                ),
                FieldSpec::new(
                    "management_tone",
                    FieldSpec::choices(&["Optimistic", "Cautious", "Neutral", "Pessimistic"]),
                    "Overall tone of management commentary",
                ),
                FieldSpec::new(
                    "confidence_level",
                    FieldSpec::choices(&["High", "Medium", "Low"]),
                    "How confident management sounds about its outlook",
                ),
                FieldSpec::new(
                    "key_positives",
                    FieldKind::List,
                    "Positive developments highlighted on the call",
                ),
                FieldSpec::new(
                    "key_concerns",
                    FieldKind::List,
                    "Risks, headwinds or weaknesses discussed",
                ),
                FieldSpec::new(
                    "forward_guidance",
                    FieldKind::Text,
                    "Guidance on revenue, margins or capex for upcoming periods",
                ),
                FieldSpec::new(
                    "capacity_utilization",
                    FieldKind::Text,
                    "Statements about capacity or utilization levels",
                ),
                FieldSpec::new(
                    "growth_initiatives",
                    FieldKind::List,
                    "New products, markets or investments announced",
                ),
            ],
        }
    }

    /// Fields in declared order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by name (case-insensitive)
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        let wanted = name.trim();
        self.fields.iter().find(|f| f.name.eq_ignore_ascii_case(wanted))
    }

    /// Render the field table for embedding into a prompt
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            match &field.kind {
                FieldKind::Enum(choices) => {
                    let _ = writeln!(
                        out,
                        "- {} (one of: {}): {}",
                        field.name,
                        choices.join(", "),
                        field.description
                    );
                }
                kind => {
                    let _ = writeln!(out, "- {} ({}): {}", field.name, kind.as_str(), field.description);
                }
            }
        }
        out
    }
}

impl Default for SummarySchema {
    fn default() -> Self {
        Self::earnings_call()
    }
}
