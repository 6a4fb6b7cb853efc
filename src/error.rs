//! Error types for parsing, rendering and checking generated files.

use crate::model::Tag;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No {tag} annotation for property: {property}")]
    MissingAnnotation { tag: Tag, property: String },

    #[error(
        "The generated enum files for VehicleProperty.aidl require update:\n{}\nRun:\n    {command}",
        format_paths(.stale)
    )]
    GenerationMismatch { stale: Vec<PathBuf>, command: String },
}

pub type Result<T> = std::result::Result<T, Error>;

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("    {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
