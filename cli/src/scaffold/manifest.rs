//! # Kickoff Project Manifest
//!
//! File: cli/src/scaffold/manifest.rs
//!
//! Reads a starter's `default-package.json`, stamps the project name into it
//! and writes the result as the new project's `package.json`. Only `name` and
//! `description` are touched; every other field keeps its value and position.
//!
use crate::common::fs::io;
use crate::core::error::{KickoffError, Result};
use crate::scaffold::starter::StarterKit;
use anyhow::{anyhow, Context};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

/// File name of the default manifest inside each starter directory.
pub const DEFAULT_MANIFEST: &str = "default-package.json";
/// File name of the manifest written to the project root.
pub const MANIFEST: &str = "package.json";

/// A parsed `package.json` object.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifest {
    fields: Map<String, Value>,
}

impl ProjectManifest {
    /// Parses manifest text. The top level must be a JSON object.
    ///
    /// `origin` is only used for error reporting.
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let invalid = |reason: String| {
            anyhow!(KickoffError::InvalidManifestTemplate {
                path: origin.to_path_buf(),
                reason,
            })
        };
        match serde_json::from_str::<Value>(text).map_err(|e| invalid(e.to_string()))? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(invalid(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Reads and parses the default manifest of one starter.
    ///
    /// `KickoffError::MissingTemplateFile` when the starter has none.
    pub fn load_default(kit: &StarterKit, starter_id: &str) -> Result<Self> {
        let text = kit.read_to_string(starter_id, DEFAULT_MANIFEST)?;
        Self::parse(&text, &kit.location(starter_id, DEFAULT_MANIFEST))
    }

    /// Sets both `name` and `description` to the project name.
    pub fn customize(&mut self, project_name: &str) {
        self.fields
            .insert("name".to_string(), Value::String(project_name.to_string()));
        self.fields.insert(
            "description".to_string(),
            Value::String(project_name.to_string()),
        );
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serializes with 2-space indentation.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.fields).context("Failed to serialize package manifest")
    }

    /// Writes `package.json` into `project_dir`.
    pub fn write_to(&self, project_dir: &Path) -> Result<()> {
        let path = project_dir.join(MANIFEST);
        io::write_string_to_file(&path, &self.to_pretty_string()?)?;
        debug!("Wrote manifest {:?}", path);
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
