use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Well-known recipe columns.
pub mod fields {
    pub const NAME: &str = "name";
    pub const MINUTES: &str = "minutes";
    pub const N_STEPS: &str = "n_steps";
    pub const N_INGREDIENTS: &str = "n_ingredients";
    pub const INGREDIENTS: &str = "ingredients";
    pub const STEPS: &str = "steps";
    pub const DESCRIPTION: &str = "description";

    /// Columns whose cells load as numbers; every other column stays text.
    pub const NUMERIC: &[&str] = &[MINUTES, N_STEPS, N_INGREDIENTS];

    pub fn is_numeric(column: &str) -> bool {
        NUMERIC.contains(&column)
    }
}

/// Literal cell contents that stand for a missing value in exported datasets.
const NULL_LITERALS: &[&str] = &["NA", "NaN", "nan", "null", "NULL", "None", "<NA>"];

fn is_null_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || NULL_LITERALS.contains(&trimmed)
}

/// A single cell of a recipe record.
///
/// `Null` is a field that exists on the record but carries no value, which is
/// different from the field not being there at all (see [`Record::get`]).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl FieldValue {
    /// Type a raw cell from a delimited file by its column: numeric columns
    /// go through [`FieldValue::parse_cell`], all others keep their exact text.
    pub fn parse_column_cell(column: &str, raw: &str) -> Self {
        if fields::is_numeric(column) {
            Self::parse_cell(raw)
        } else {
            Self::parse_text_cell(raw)
        }
    }

    /// Keep a cell verbatim, mapping only empty and null literals to `Null`.
    pub fn parse_text_cell(raw: &str) -> Self {
        if is_null_literal(raw) {
            FieldValue::Null
        } else {
            FieldValue::Text(raw.to_string())
        }
    }

    /// Guess a number from a raw cell, falling back to text.
    pub fn parse_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_null_literal(raw) {
            return FieldValue::Null;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return FieldValue::Integer(n);
        }
        // Only digit-led cells are numeric; "inf" and "infinity pie" stay text
        if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.') {
            if let Ok(f) = trimmed.parse::<f64>() {
                return FieldValue::Float(f);
            }
        }
        FieldValue::Text(raw.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text form of the value for matching, `None` for null.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Null => None,
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) if x.fract() == 0.0 && x.abs() < 1e15 => write!(f, "{x:.0}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// One recipe: a mapping from column name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly handy in tests and fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Raw lookup: `None` when the field is absent, `Some(Null)` when it is present but empty.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// True when the record carries the field, null or not.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The field's value when it is present and not null.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.get(field).filter(|v| !v.is_null())
    }

    /// The field's value as text when it is present and not null.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn name(&self) -> Option<Cow<'_, str>> {
        self.text(fields::NAME)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// The full, ordered set of recipes for a session. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCollection {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecipeCollection {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Build a collection whose columns are every field seen on any record,
    /// in first-seen order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (field, _) in record.fields() {
                if !columns.iter().any(|c| c == field) {
                    columns.push(field.to_string());
                }
            }
        }
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
