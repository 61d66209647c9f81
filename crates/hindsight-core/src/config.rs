use crate::error::{HindsightError, Result};
use crate::json::JsonFile;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// PageData
// ---------------------------------------------------------------------------

/// Page metadata consumed by the compose step. Placeholder values only need
/// to be strings, so `footer` may carry raw HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub title: String,
    pub header: String,
    pub footer: String,
}

// ---------------------------------------------------------------------------
// HindsightConfig
// ---------------------------------------------------------------------------

/// The `hindsight.json` document at a project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HindsightConfig {
    pub data: PageData,
}

impl HindsightConfig {
    /// Load `<root>/hindsight.json`. A missing file means `root` is not a
    /// hindsight project.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(HindsightError::NotAProject);
        }
        JsonFile::new(path).read()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
