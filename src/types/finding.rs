use serde::{Deserialize, Serialize};

/// The four message classes that are tallied. Pylint also emits `fatal` and
/// `info` records; those are listed in reports but never counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Error,
    Warning,
    Refactor,
    Convention,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Error,
        Category::Warning,
        Category::Refactor,
        Category::Convention,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "refactor" => Some(Self::Refactor),
            "convention" => Some(Self::Convention),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Refactor => "refactor",
            Self::Convention => "convention",
        }
    }

    /// Plural label used in the run-wide summary table.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Error => "errors",
            Self::Warning => "warnings",
            Self::Refactor => "refactors",
            Self::Convention => "conventions",
        }
    }
}

/// One record of pylint's `-f json` output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: String,
    pub line: u32,
    pub message: String,
    #[serde(rename = "message-id")]
    pub message_id: String,
    pub module: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obj: Option<String>,
}

impl Finding {
    #[cfg(test)]
    pub fn new(
        kind: impl Into<String>,
        line: u32,
        message: impl Into<String>,
        message_id: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            line,
            message: message.into(),
            message_id: message_id.into(),
            module: module.into(),
            column: None,
            symbol: None,
            path: None,
            obj: None,
        }
    }

    pub fn category(&self) -> Option<Category> {
        Category::from_tag(&self.kind)
    }
}
