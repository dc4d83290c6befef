//! In-memory model of the `pyproject.toml` build manifest.
//!
//! The manifest is a transient view: materialized fresh on every read and
//! discarded after every write. A write serializes the *whole* document from
//! this model — it is not a textual patch — so any manifest content that the
//! model does not represent (comments, extra tables) is lost on write. This
//! is a known fidelity gap of the tool, not an accident.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `[build-system]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildSystemTable {
    pub requires: Vec<String>,
    pub build_backend: String,
}

/// The `[tool.poetry]` table.
///
/// `dependencies` and `scripts` use [`IndexMap`] so the key order observed
/// on read survives the round-trip; new keys are appended at the end. The
/// ordering is irrelevant for correctness but keeps serialized diffs stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoetryTable {
    pub name: String,
    pub version: String,
    pub description: String,
    pub authors: Vec<String>,
    pub readme: String,
    pub dependencies: IndexMap<String, String>,
    pub scripts: IndexMap<String, String>,
}

/// The `[tool]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolTable {
    pub poetry: PoetryTable,
}

/// Full manifest document: `[tool.poetry]` plus `[build-system]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PyprojectManifest {
    pub tool: ToolTable,
    #[serde(rename = "build-system")]
    pub build_system: BuildSystemTable,
}

impl PyprojectManifest {
    /// Pure script upsert.
    ///
    /// Returns `None` when `scripts[name]` already equals `target` — the
    /// idempotence short-circuit; the caller must not write anything in that
    /// case. Otherwise returns a new document, identical to `self` except
    /// that `scripts[name] == target`. The scripts map of the result is an
    /// independently-owned copy; `self` is never mutated or aliased.
    pub fn with_script(&self, name: &str, target: &str) -> Option<Self> {
        if self.tool.poetry.scripts.get(name).map(String::as_str) == Some(target) {
            return None;
        }
        let mut updated = self.clone();
        updated
            .tool
            .poetry
            .scripts
            .insert(name.to_owned(), target.to_owned());
        Some(updated)
    }
}
