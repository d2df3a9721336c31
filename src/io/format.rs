//! Output format selection.

/// How a command reports its result on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Prompts plus the plain result line
    #[default]
    Text,
    /// No prompts, one [`Envelope`](super::Envelope) per run
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}
