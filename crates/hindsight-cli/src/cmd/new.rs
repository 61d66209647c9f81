use crate::output::print_json;
use anyhow::Context;
use hindsight_core::{io, paths, scaffold, Severity};
use serde::Serialize;
use std::path::Path;

/// Artifacts in creation order, as reported after a successful run.
const ARTIFACTS: &[&str] = &[
    paths::CONFIG_FILE,
    "pages/",
    "composed/",
    paths::PAGE_TEMPLATE,
    paths::INDEX_FILE,
    paths::README_FILE,
];

#[derive(Serialize)]
struct NewReport<'a> {
    root: String,
    created: Vec<&'a str>,
    warnings: Vec<String>,
}

pub fn run(directory: &Path, json: bool) -> anyhow::Result<()> {
    io::ensure_dir(directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;

    if !json {
        println!("Creating starter project in: {}", directory.display());
    }

    let mut warnings = Vec::new();
    match scaffold::create(directory) {
        Ok(()) => {}
        // Advisory failures leave a usable project behind; report and move on.
        Err(e) if e.severity() == Severity::Advisory => warnings.push(e.to_string()),
        Err(e) => {
            return Err(e).with_context(|| format!("could not scaffold {}", directory.display()))
        }
    }

    if json {
        return print_json(&NewReport {
            root: directory.display().to_string(),
            created: ARTIFACTS.to_vec(),
            warnings,
        });
    }

    for artifact in ARTIFACTS {
        println!("  created: {artifact}");
    }
    for warning in &warnings {
        eprintln!("  warning: {warning}");
    }

    println!("\nProject is ready.");
    println!("Next: edit hindsight.json and pages/index.md, then compose the project.");

    Ok(())
}
