use serde::Serialize;

/// Output density of the console commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Bare identifiers, one per line
    Minimal,
    /// One line per page or hit
    Compact,
    #[default]
    Standard,
    /// Adds tab labels, keywords and file locations
    Verbose,
}

/// Headline printed above a command's content.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    /// A preference was written
    Success,
    /// Search hits or other neutral counts
    Info,
    /// The command ran but found nothing
    Warning,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
        }
    }
}

impl StatusBadge {
    fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

/// Follow-up `everest` invocation listed under "Tips:".
#[derive(Debug, Clone, Serialize)]
pub struct Tip {
    pub description: String,
    pub command: String,
}

impl Tip {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}
