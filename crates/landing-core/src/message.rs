//! Conversation Messages
//!
//! Typed records for the canned transcript shown on the landing page.
//! A message is a role plus an ordered list of content blocks; blocks
//! are either markdown prose or a tabular attachment with a chart view.

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};

/// Role of a message sender
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor side of the transcript
    User,
    /// Canned agent response
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single table cell
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value, if this cell holds one (feeds the chart view)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.into())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

/// One abbreviation/definition pair; rendered in insertion order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub abbreviation: String,
    pub definition: String,
}

impl GlossaryEntry {
    pub fn new(abbreviation: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            definition: definition.into(),
        }
    }
}

/// One table row: a key cell plus one value per column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub key: Scalar,
    pub values: Vec<Scalar>,
}

impl TableRow {
    pub fn new(key: impl Into<Scalar>, values: Vec<Scalar>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// Tabular attachment rendered as both a table and a chart.
///
/// Fields are private: the shape invariant (every row carries exactly
/// one value per column) is checked once at construction and cannot be
/// broken afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    title: String,
    index_column: String,
    columns: Vec<String>,
    rows: Vec<TableRow>,
    glossary: Vec<GlossaryEntry>,
}

impl DataTable {
    /// Build a table, rejecting shape violations.
    ///
    /// `index_column` names the row-key axis; `columns` name the value
    /// cells each row must supply, in order.
    pub fn new(
        title: impl Into<String>,
        index_column: impl Into<String>,
        columns: Vec<String>,
        rows: Vec<TableRow>,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(LandingError::TableShape(
                "a data table needs at least one value column".into(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.values.len() != columns.len() {
                return Err(LandingError::TableShape(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.values.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self {
            title: title.into(),
            index_column: index_column.into(),
            columns,
            rows,
            glossary: Vec::new(),
        })
    }

    /// Attach a glossary; entries keep their insertion order.
    pub fn with_glossary(mut self, entries: Vec<GlossaryEntry>) -> Self {
        self.glossary = entries;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn index_column(&self) -> &str {
        &self.index_column
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn glossary(&self) -> &[GlossaryEntry] {
        &self.glossary
    }

    /// Largest numeric value in the given column, used to scale bars
    /// in the chart view. `None` if the column has no numeric cells.
    pub fn column_max(&self, column: usize) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.values.get(column).and_then(Scalar::as_number))
            .fold(None, |max, n| Some(max.map_or(n, |m: f64| m.max(n))))
    }
}

/// One renderable unit within a message
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Markdown-formatted prose, rendered verbatim
    Text { text: String },
    /// Tabular data with table/chart views and a glossary
    Data(DataTable),
}

/// A single conversation turn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: Vec<ContentBlock>,
}

impl Message {
    /// Create a user turn with one text block
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Create an assistant turn with one text block
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Append a text block
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentBlock::Text { text: text.into() });
        self
    }

    /// Append a tabular attachment
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.content.push(ContentBlock::Data(table));
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Content blocks in render order
    pub fn blocks(&self) -> &[ContentBlock] {
        &self.content
    }
}

/// A clickable canned prompt under the transcript
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_columns() -> Vec<String> {
        vec!["PPG".into(), "RPG".into()]
    }

    #[test]
    fn test_table_accepts_aligned_rows() {
        let table = DataTable::new(
            "Stats",
            "Player",
            stat_columns(),
            vec![
                TableRow::new("Tatum", vec![30.1.into(), 8.8.into()]),
                TableRow::new("Brown", vec![26.6.into(), 6.9.into()]),
            ],
        )
        .unwrap();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.index_column(), "Player");
    }

    #[test]
    fn test_table_rejects_short_row() {
        let result = DataTable::new(
            "Stats",
            "Player",
            stat_columns(),
            vec![TableRow::new("Tatum", vec![30.1.into()])],
        );
        assert!(matches!(result, Err(LandingError::TableShape(_))));
    }

    #[test]
    fn test_table_rejects_empty_columns() {
        let result = DataTable::new("Stats", "Player", vec![], vec![]);
        assert!(matches!(result, Err(LandingError::TableShape(_))));
    }

    #[test]
    fn test_blocks_keep_insertion_order() {
        let table = DataTable::new(
            "Stats",
            "Player",
            stat_columns(),
            vec![TableRow::new("Tatum", vec![30.1.into(), 8.8.into()])],
        )
        .unwrap();

        let msg = Message::assistant("Here are the numbers.")
            .with_table(table)
            .with_text("Let me know if you want more detail.");

        assert_eq!(msg.blocks().len(), 3);
        assert!(matches!(msg.blocks()[0], ContentBlock::Text { .. }));
        assert!(matches!(msg.blocks()[1], ContentBlock::Data(_)));
        assert!(matches!(msg.blocks()[2], ContentBlock::Text { .. }));
    }

    #[test]
    fn test_glossary_keeps_insertion_order() {
        let table = DataTable::new(
            "Stats",
            "Player",
            stat_columns(),
            vec![],
        )
        .unwrap()
        .with_glossary(vec![
            GlossaryEntry::new("PPG", "Points per game"),
            GlossaryEntry::new("RPG", "Rebounds per game"),
        ]);

        let abbrs: Vec<_> = table
            .glossary()
            .iter()
            .map(|g| g.abbreviation.as_str())
            .collect();
        assert_eq!(abbrs, ["PPG", "RPG"]);
    }

    #[test]
    fn test_column_max_skips_text_cells() {
        let table = DataTable::new(
            "Stats",
            "Player",
            vec!["PPG".into()],
            vec![
                TableRow::new("Tatum", vec![30.1.into()]),
                TableRow::new("Brown", vec!["DNP".into()]),
            ],
        )
        .unwrap();

        assert_eq!(table.column_max(0), Some(30.1));
        assert_eq!(table.column_max(7), None);
    }
}
