//! Starter project creation.
//!
//! Populates a directory with the artifacts a freshly created Hindsight
//! project needs: the config document, the two content folders, the page
//! template, a sample content document, and a short guide.

use crate::error::{HindsightError, Result};
use crate::io;
use crate::json::JsonFile;
use crate::paths;
use crate::template;
use std::path::Path;

/// Create a starter project in `project_dir`.
///
/// Steps run in a fixed order, each checked before the next: config
/// document, `pages/`, `composed/`, page template, sample content, guide.
/// A failing step aborts the run; artifacts created by earlier steps stay
/// on disk. The one exception is the guide content write, which returns an
/// advisory error and leaves the scaffold usable.
pub fn create(project_dir: &Path) -> Result<()> {
    create_hindsight_json(project_dir)?;

    create_folder(project_dir, paths::PAGES_DIR)?;
    create_folder(project_dir, paths::COMPOSED_DIR)?;

    create_page_html(project_dir)?;
    create_index_md(project_dir)?;
    create_readme_txt(project_dir)?;

    Ok(())
}

fn create_hindsight_json(project_dir: &Path) -> Result<()> {
    let path = paths::config_path(project_dir);
    io::create_file(&path).map_err(|source| HindsightError::CreateFile {
        name: paths::CONFIG_FILE.to_string(),
        source,
    })?;

    JsonFile::new(&path)
        .write(&template::config(), true)
        .map_err(|e| e.name_artifact(paths::CONFIG_FILE))
}

fn create_folder(project_dir: &Path, name: &str) -> Result<()> {
    io::create_dir(&project_dir.join(name)).map_err(|source| HindsightError::CreateFolder {
        name: name.to_string(),
        source,
    })
}

fn create_page_html(project_dir: &Path) -> Result<()> {
    let path = paths::page_template_path(project_dir);
    io::create_file(&path).map_err(|source| HindsightError::CreateFile {
        name: paths::PAGE_TEMPLATE.to_string(),
        source,
    })?;

    io::put_contents(&path, template::page_html().as_bytes()).map_err(|source| {
        HindsightError::WriteContents {
            name: paths::PAGE_TEMPLATE.to_string(),
            source,
        }
    })
}

fn create_index_md(project_dir: &Path) -> Result<()> {
    let path = paths::index_path(project_dir);
    io::create_file(&path).map_err(|source| HindsightError::CreateFile {
        name: paths::INDEX_FILE.to_string(),
        source,
    })?;

    io::put_contents(&path, template::index_md().as_bytes()).map_err(|source| {
        HindsightError::WriteContents {
            name: paths::INDEX_FILE.to_string(),
            source,
        }
    })
}

fn create_readme_txt(project_dir: &Path) -> Result<()> {
    let path = paths::readme_path(project_dir);
    io::create_file(&path).map_err(|source| HindsightError::CreateFile {
        name: paths::README_FILE.to_string(),
        source,
    })?;

    // Content-write failure here is the only advisory outcome: the project
    // composes fine without the guide text.
    io::put_contents(&path, template::readme_txt().as_bytes()).map_err(|source| {
        HindsightError::WriteAdvisory {
            name: paths::README_FILE.to_string(),
            source,
        }
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
