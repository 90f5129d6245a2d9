//! Configuration reconciliation between [`SCHEMA`] and the on-disk document.
//!
//! `reload` reads the persisted JSON (comments tolerated), resolves every
//! property against the schema — adopting valid values, clamping integers,
//! and substituting defaults for anything missing or malformed — then writes
//! the canonical document back and swaps the typed snapshot readers see.
//! Reloading is best-effort: read, parse, and write failures are logged and
//! never propagate, so the mod always runs with valid in-memory values.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::schema::{Config, PropertyKind, SCHEMA};
use crate::MOD_ID;

/// Outcome of reading the persisted document.
///
/// Malformed or unreadable input is an explicit `Absent`, not an error:
/// reload then reconciles against an empty document, which resolves every
/// property to its default and rewrites the file.
enum DocumentSource {
    /// The file existed and parsed to a JSON object.
    Parsed(Map<String, Value>),
    /// Missing, unreadable, or malformed; start from empty.
    Absent,
}

/// Owns the current configuration snapshot and its backing file.
pub struct ConfigStore {
    path: PathBuf,
    current: RwLock<Arc<Config>>,
}

impl ConfigStore {
    /// Create a store backed by `path`, initialized to schema defaults.
    /// No I/O happens until the first [`reload`](Self::reload).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            current: RwLock::new(Arc::new(Config::default())),
        }
    }

    /// Create a store at the conventional `config/<mod id>.json` path.
    pub fn at_default_path() -> Self {
        Self::new(Path::new("config").join(format!("{MOD_ID}.json")))
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current configuration snapshot.
    ///
    /// The returned `Arc` stays consistent even if a reload swaps the store
    /// contents while the caller holds it.
    pub fn get(&self) -> Arc<Config> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reconcile the persisted document against the schema and adopt the
    /// result.
    ///
    /// Repeated calls with no external file changes reach a fixed point:
    /// identical bytes on disk and identical in-memory values.
    pub fn reload(&self) {
        let old = match read_document(&self.path) {
            DocumentSource::Parsed(map) => map,
            DocumentSource::Absent => Map::new(),
        };

        let (document, config) = reconcile(&old);

        if let Err(err) = write_document(&self.path, &document) {
            warn!(
                "Failed to write config to {}: {err:#}. In-memory values remain current",
                self.path.display()
            );
        }

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(config);

        debug!("Reloaded config from {}", self.path.display());
    }
}

/// Read and parse the persisted document, tolerating `//` and `/* */`
/// comments. Every failure path degrades to `Absent`.
fn read_document(path: &Path) -> DocumentSource {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound {
                warn!("Failed to read {}: {err}. Using defaults", path.display());
            }
            return DocumentSource::Absent;
        }
    };

    match jsonc_parser::parse_to_serde_value(&text, &Default::default()) {
        Ok(Some(Value::Object(map))) => DocumentSource::Parsed(map),
        Ok(Some(_)) => {
            warn!(
                "{} does not contain a JSON object. Using defaults",
                path.display()
            );
            DocumentSource::Absent
        }
        Ok(None) => DocumentSource::Absent,
        Err(err) => {
            warn!("Failed to parse {}: {err}. Using defaults", path.display());
            DocumentSource::Absent
        }
    }
}

/// Rebuild the canonical document from the schema, adopting every valid
/// persisted value and filling the typed config along the way.
///
/// Building the output from the schema rather than editing `old` in place
/// makes pruning structural: the result contains exactly the known
/// categories and properties, each with a freshly written description.
fn reconcile(old: &Map<String, Value>) -> (Map<String, Value>, Config) {
    let mut config = Config::default();
    let mut document = Map::new();

    for category in SCHEMA {
        let old_category = old.get(category.key).and_then(Value::as_object);

        let mut node = Map::new();
        node.insert(
            "description".to_string(),
            description_array(category.description),
        );

        for property in category.properties {
            let old_value = old_category
                .and_then(|object| object.get(property.key))
                .and_then(Value::as_object)
                .and_then(|object| object.get("value"));

            let value = resolve_property(&property.kind, old_value, &mut config);

            let mut property_node = Map::new();
            property_node.insert(
                "description".to_string(),
                description_array(property.description),
            );
            property_node.insert("value".to_string(), value);
            node.insert(property.key.to_string(), Value::Object(property_node));
        }

        document.insert(category.key.to_string(), Value::Object(node));
    }

    (document, config)
}

/// Resolve one property: adopt the persisted value when it satisfies the
/// kind's predicate (clamping integers into range), otherwise fall back to
/// the default. The adopted value is applied to `config` and returned in its
/// canonical JSON form.
fn resolve_property(kind: &PropertyKind, raw: Option<&Value>, config: &mut Config) -> Value {
    match *kind {
        PropertyKind::Bool { default, apply } => {
            let value = raw.and_then(Value::as_bool).unwrap_or(default);
            apply(config, value);
            Value::Bool(value)
        }
        PropertyKind::Int {
            default,
            min,
            max,
            apply,
        } => {
            let number = raw.and_then(|value| {
                value
                    .as_i64()
                    .or_else(|| value.as_f64().map(|float| float as i64))
            });
            let value = match number {
                Some(number) => number.clamp(min, max),
                None => default,
            };
            apply(config, value);
            Value::from(value)
        }
        PropertyKind::Str { default, apply } => {
            let value = raw.and_then(Value::as_str).unwrap_or(default);
            apply(config, value);
            Value::String(value.to_string())
        }
        PropertyKind::Enum {
            default,
            variants,
            apply,
        } => {
            let value = raw
                .and_then(Value::as_str)
                .filter(|text| variants.contains(text))
                .unwrap_or(default);
            apply(config, value);
            Value::String(value.to_string())
        }
    }
}

fn description_array(lines: &[&str]) -> Value {
    Value::Array(
        lines
            .iter()
            .map(|line| Value::String(line.to_string()))
            .collect(),
    )
}

/// Serialize with tab indentation and a trailing newline, then write via a
/// sibling temp file and rename so a crash leaves old or new content.
fn write_document(path: &Path, document: &Map<String, Value>) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document
        .serialize(&mut serializer)
        .context("Failed to serialize config document")?;
    buffer.push(b'\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
    }

    let temp = path.with_extension("json.tmp");
    fs::write(&temp, &buffer).context("Failed to write temp config file")?;
    fs::rename(&temp, path).context("Failed to move config file into place")?;

    Ok(())
}
