//! Record types produced by the extractors.

use serde::{Deserialize, Serialize};

/// One highlight recovered by the structured extractor.
///
/// Every field holds the exact text captured from the export, untrimmed.
/// A `Clipping` only exists when all five fields were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clipping {
    title: String,
    author: String,
    page: String,
    when: String,
    highlight: String,
}

impl Clipping {
    /// Create a clipping from its five fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        page: impl Into<String>,
        when: impl Into<String>,
        highlight: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            page: page.into(),
            when: when.into(),
            highlight: highlight.into(),
        }
    }

    /// Text preceding the first parenthesis.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Text inside the first parenthesised group.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Digits following "on page".
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Free text following "Added on".
    pub fn when(&self) -> &str {
        &self.when
    }

    /// The line following the "Added on" line.
    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    /// Value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => self.title(),
            Field::Author => self.author(),
            Field::Page => self.page(),
            Field::When => self.when(),
            Field::Highlight => self.highlight(),
        }
    }
}

/// The five fields of a structured clipping, in extraction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Page,
    When,
    Highlight,
}

impl Field {
    /// All fields in the order they are extracted.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Page,
        Field::When,
        Field::Highlight,
    ];

    /// Field name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Page => "page",
            Self::When => "when",
            Self::Highlight => "highlight",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which extraction algorithm to run over an export.
///
/// The two variants segment differently and are kept apart on purpose:
/// `Minimal` splits on delimiter lines by prefix, `Structured` splits on
/// every literal occurrence of the delimiter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Each record is one opaque text block
    #[default]
    Minimal,
    /// Each record yields title, author, page, date and highlight
    Structured,
}

impl Variant {
    /// Name as written in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Structured => "structured",
        }
    }
}

/// What the structured extractor does with a record missing a field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OnMalformed {
    /// Stop at the first malformed record and fail the whole run
    #[default]
    Abort,
    /// Log the malformed record and continue with the rest
    Skip,
}
