/// Web part identity
#[derive(Debug, Clone)]
pub struct WebPartManifest {
    /// Component id (GUID)
    pub id: &'static str,
    /// Alias used by the host to address the web part
    pub alias: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// Web part lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebPartState {
    Created,
    Initialized,
    Disposed,
    Failed,
}

impl std::fmt::Display for WebPartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WebPartState::Created => "created",
            WebPartState::Initialized => "initialized",
            WebPartState::Disposed => "disposed",
            WebPartState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Page theme as reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Theme {
    /// Dark variant
    pub is_inverted: bool,
}

/// Web part errors with structured variants
#[derive(Debug, thiserror::Error)]
pub enum WebPartError {
    #[error("web part init failed: {message}")]
    Init {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("web part render failed: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("invalid value for property '{property}': {message}")]
    Property { property: String, message: String },

    #[error("no web part registered as '{alias}'")]
    NotFound { alias: String },

    #[error("cannot {operation} web part '{alias}' while {state}")]
    InvalidState {
        alias: String,
        state: WebPartState,
        operation: &'static str,
    },
}
