//! Output format selection for CLI commands.

/// How a command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain line-oriented text for terminals.
    #[default]
    Text,
    /// The unified JSON envelope, for piping and tool integration.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}
