use thiserror::Error;

/// How bad a failure is for the overall operation.
///
/// `Advisory` failures are reported like any other error but leave the
/// scaffolded project usable. Callers branch on this, not on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Advisory,
}

#[derive(Debug, Error)]
pub enum HindsightError {
    #[error("could not create file '{name}'")]
    CreateFile {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not create folder '{name}'")]
    CreateFolder {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write to '{name}'")]
    WriteContents {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write to '{name}' (not critical, the project is usable without it)")]
    WriteAdvisory {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not a hindsight project: 'hindsight.json' not found")]
    NotAProject,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HindsightError>;

impl HindsightError {
    pub fn severity(&self) -> Severity {
        match self {
            HindsightError::WriteAdvisory { .. } => Severity::Advisory,
            _ => Severity::Fatal,
        }
    }

    pub fn is_advisory(&self) -> bool {
        self.severity() == Severity::Advisory
    }

    /// Rewrap a bare I/O failure as a content-write failure for `name`,
    /// so every surfaced error identifies the artifact it concerns.
    pub(crate) fn name_artifact(self, name: &str) -> Self {
        match self {
            HindsightError::Io(source) => HindsightError::WriteContents {
                name: name.to_string(),
                source,
            },
            other => other,
        }
    }
}
