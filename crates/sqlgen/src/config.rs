use crate::error::SqlGenResult;
use crate::ident::Quote;
use serde::Deserialize;

/// Placeholder strategy: maps a 1-based argument index to its SQL marker.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `$1, $2, ...` (PostgreSQL)
    #[default]
    Dollar,
    /// `?` for every argument (MySQL, SQLite)
    Question,
    /// Caller-supplied renderer.
    #[serde(skip)]
    Custom(fn(usize) -> String),
}

impl Placeholder {
    /// Render the placeholder for the argument at `idx` (1-based).
    pub fn render(&self, idx: usize) -> String {
        match self {
            Placeholder::Dollar => format!("${idx}"),
            Placeholder::Question => "?".to_string(),
            Placeholder::Custom(f) => f(idx),
        }
    }
}

/// Construction parameters for a [`Builder`](crate::Builder).
///
/// The default matches a PostgreSQL setup that maps records through their
/// `json` tags: `$n` placeholders, tag selector `"json"`, backtick quoting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Placeholder style.
    pub placeholder: Placeholder,
    /// Tag namespace read by the record mapper. Empty means declared field
    /// names are used as columns.
    pub tag: String,
    /// Column quoting style.
    pub quote: Quote,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            placeholder: Placeholder::Dollar,
            tag: "json".to_string(),
            quote: Quote::Backtick,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON, filling missing keys with defaults.
    ///
    /// ```ignore
    /// let cfg = BuilderConfig::from_json(r#"{"placeholder": "question", "tag": "db"}"#)?;
    /// ```
    pub fn from_json(s: &str) -> SqlGenResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Set the placeholder style.
    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the tag namespace used by the record mapper.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the column quoting style.
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }
}
