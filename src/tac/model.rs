//! # Document Model
//!
//! Core data types for tac: [`Project`], [`Paragraph`], [`ParagraphKind`] and
//! the formatting machinery. The model is purely in-memory and owns no I/O;
//! persistence lives in [`crate::store`], rendering in [`crate::export`].
//!
//! ## Paragraph ordering
//!
//! Every paragraph carries an `order` field that is kept equal to its index in
//! the owning project's sequence. The mutators renumber after every insert,
//! removal and move, so the field and the vector never disagree.
//!
//! ## Formatting
//!
//! Paragraph formatting is a sparse override map: only the attributes the user
//! actually changed are stored. Effective values are resolved against a
//! [`FormatDefaults`] table at read time via [`Formatting::resolve`]. Unknown
//! keys arriving through a patch are rejected (typo protection); unknown keys
//! already present in a loaded file are preserved as-is.
//!
//! ## Forward compatibility
//!
//! Paragraph types outside the built-in set deserialize to
//! [`ParagraphKind::Other`] and reserialize to the exact same string, so files
//! written by newer versions survive a round-trip through this one.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// The structural role of a paragraph within a composition.
///
/// The four built-in kinds mirror the topic/argument/quote/conclusion layout
/// of an academic paragraph. Anything else round-trips through [`Self::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    Topic,
    Argument,
    ArgumentQuote,
    Conclusion,
    Other(String),
}

impl ParagraphKind {
    pub fn as_str(&self) -> &str {
        match self {
            ParagraphKind::Topic => "topic",
            ParagraphKind::Argument => "argument",
            ParagraphKind::ArgumentQuote => "argument_quote",
            ParagraphKind::Conclusion => "conclusion",
            ParagraphKind::Other(s) => s,
        }
    }

    /// Whether this paragraph renders as a block quote.
    pub fn is_quote(&self) -> bool {
        matches!(self, ParagraphKind::ArgumentQuote)
    }
}

impl From<&str> for ParagraphKind {
    fn from(s: &str) -> Self {
        match s {
            "topic" => ParagraphKind::Topic,
            "argument" => ParagraphKind::Argument,
            "argument_quote" => ParagraphKind::ArgumentQuote,
            "conclusion" => ParagraphKind::Conclusion,
            other => ParagraphKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ParagraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParagraphKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ParagraphKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ParagraphKind::from(s.as_str()))
    }
}

/// A scalar formatting value.
///
/// Untagged so the JSON representation stays flat: `true`, `12`, `1.5`, `"left"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatValue {
    Flag(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FormatValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FormatValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FormatValue::Int(i) => Some(*i as f64),
            FormatValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            FormatValue::Int(i) => u32::try_from(*i).ok(),
            FormatValue::Float(f) if *f >= 0.0 => Some(*f as u32),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The formatting attributes the model recognizes.
pub const KNOWN_FORMAT_KEYS: &[&str] = &[
    "font_family",
    "font_size",
    "line_spacing",
    "first_indent",
    "quote_indent",
    "alignment",
    "bold",
    "italic",
    "underline",
];

/// Sparse per-paragraph formatting overrides.
///
/// Keys absent from the map fall back to [`FormatDefaults`] when resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formatting(BTreeMap<String, FormatValue>);

impl Formatting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&FormatValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_known_key(key: &str) -> bool {
        KNOWN_FORMAT_KEYS.contains(&key)
    }

    /// Set a recognized attribute. Returns false (and leaves the map
    /// untouched) for unknown keys.
    pub fn set(&mut self, key: &str, value: FormatValue) -> bool {
        if !Self::is_known_key(key) {
            return false;
        }
        self.0.insert(key.to_string(), value);
        true
    }

    /// Merge a patch key-by-key into this map. Recognized keys overwrite,
    /// unknown keys are skipped with a warning. Returns how many keys were
    /// applied.
    pub fn merge(&mut self, patch: &Formatting) -> usize {
        let mut applied = 0;
        for (key, value) in &patch.0 {
            if Self::is_known_key(key) {
                self.0.insert(key.clone(), value.clone());
                applied += 1;
            } else {
                warn!("ignoring unknown formatting key '{}'", key);
            }
        }
        applied
    }

    /// Materialize the effective attributes for this paragraph.
    pub fn resolve(&self, defaults: &FormatDefaults) -> ResolvedFormatting {
        ResolvedFormatting {
            font_family: self
                .get("font_family")
                .and_then(FormatValue::as_text)
                .unwrap_or(&defaults.font_family)
                .to_string(),
            font_size: self
                .get("font_size")
                .and_then(FormatValue::as_u32)
                .unwrap_or(defaults.font_size),
            line_spacing: self
                .get("line_spacing")
                .and_then(FormatValue::as_f64)
                .unwrap_or(defaults.line_spacing),
            first_indent: self
                .get("first_indent")
                .and_then(FormatValue::as_f64)
                .unwrap_or(defaults.first_indent),
            quote_indent: self
                .get("quote_indent")
                .and_then(FormatValue::as_f64)
                .unwrap_or(defaults.quote_indent),
            alignment: self
                .get("alignment")
                .and_then(FormatValue::as_text)
                .unwrap_or("left")
                .to_string(),
            bold: self.get("bold").and_then(FormatValue::as_flag).unwrap_or(false),
            italic: self
                .get("italic")
                .and_then(FormatValue::as_flag)
                .unwrap_or(false),
            underline: self
                .get("underline")
                .and_then(FormatValue::as_flag)
                .unwrap_or(false),
        }
    }
}

/// Process-wide fallback values for unset formatting keys.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDefaults {
    pub font_family: String,
    pub font_size: u32,
    pub line_spacing: f64,
    pub first_indent: f64,
    pub quote_indent: f64,
}

impl Default for FormatDefaults {
    fn default() -> Self {
        Self {
            font_family: "Liberation Sans".to_string(),
            font_size: 12,
            line_spacing: 1.5,
            first_indent: 0.0,
            quote_indent: 4.0,
        }
    }
}

/// Fully resolved formatting, ready for a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFormatting {
    pub font_family: String,
    pub font_size: u32,
    pub line_spacing: f64,
    pub first_indent: f64,
    pub quote_indent: f64,
    pub alignment: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

/// One typed block of text within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: ParagraphKind,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub formatting: Formatting,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    pub order: usize,
}

impl Paragraph {
    fn new(kind: ParagraphKind, content: String, formatting: Formatting, order: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content,
            formatting,
            created_at: Utc::now(),
            modified_at: None,
            order,
        }
    }
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// Free-form descriptive data attached to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_schema_version")]
    pub version: String,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            author: String::new(),
            description: String::new(),
            tags: Vec::new(),
            version: default_schema_version(),
        }
    }
}

/// Derived counts, recomputed on every serialization. Never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
}

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// The persisted form of a project: exactly the on-disk JSON layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub id: Uuid,
    pub name: String,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub statistics: Statistics,
}

/// One user document: an ordered sequence of typed paragraphs.
///
/// The paragraph vector is private so the `order == index` invariant cannot be
/// broken from outside; all mutation goes through the methods below, each of
/// which bumps `modified_at`.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub metadata: ProjectMetadata,
    paragraphs: Vec<Paragraph>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            modified_at: now,
            metadata: ProjectMetadata::default(),
            paragraphs: Vec::new(),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Append a new paragraph and return its id.
    ///
    /// With `formatting == None` the paragraph starts with an empty override
    /// map; effective values come from [`FormatDefaults`] at read time.
    pub fn add_paragraph(
        &mut self,
        kind: ParagraphKind,
        content: impl Into<String>,
        formatting: Option<Formatting>,
    ) -> Uuid {
        let order = self.paragraphs.len();
        let paragraph = Paragraph::new(
            kind,
            content.into(),
            formatting.unwrap_or_default(),
            order,
        );
        let id = paragraph.id;
        self.paragraphs.push(paragraph);
        self.touch();
        id
    }

    /// Remove the paragraph with the given id. Returns whether a removal
    /// occurred; an absent id is a normal no-op, not an error.
    pub fn remove_paragraph(&mut self, id: Uuid) -> bool {
        let before = self.paragraphs.len();
        self.paragraphs.retain(|p| p.id != id);
        if self.paragraphs.len() < before {
            self.renumber();
            self.touch();
            true
        } else {
            false
        }
    }

    /// Replace content and/or merge a formatting patch. Returns false when the
    /// id is absent.
    pub fn update_paragraph(
        &mut self,
        id: Uuid,
        content: Option<&str>,
        patch: Option<&Formatting>,
    ) -> bool {
        let Some(paragraph) = self.paragraphs.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if let Some(content) = content {
            paragraph.content = content.to_string();
        }
        if let Some(patch) = patch {
            paragraph.formatting.merge(patch);
        }
        paragraph.modified_at = Some(Utc::now());
        self.touch();
        true
    }

    /// Move a paragraph to `new_position`, clamped to the valid range.
    /// Returns false when the id is absent.
    pub fn reorder_paragraph(&mut self, id: Uuid, new_position: usize) -> bool {
        let Some(index) = self.paragraphs.iter().position(|p| p.id == id) else {
            return false;
        };
        let paragraph = self.paragraphs.remove(index);
        let clamped = new_position.min(self.paragraphs.len());
        self.paragraphs.insert(clamped, paragraph);
        self.renumber();
        self.touch();
        true
    }

    /// Detached copy of a paragraph; mutating it does not affect the project.
    pub fn get_paragraph(&self, id: Uuid) -> Option<Paragraph> {
        self.paragraphs.iter().find(|p| p.id == id).cloned()
    }

    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.content.split_whitespace().count())
            .sum()
    }

    pub fn character_count(&self, include_spaces: bool) -> usize {
        self.paragraphs
            .iter()
            .map(|p| {
                if include_spaces {
                    p.content.chars().count()
                } else {
                    p.content.chars().filter(|c| *c != ' ').count()
                }
            })
            .sum()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            word_count: self.word_count(),
            character_count: self.character_count(true),
            paragraph_count: self.paragraphs.len(),
        }
    }

    /// Full JSON-compatible representation with freshly computed statistics.
    pub fn to_document(&self) -> ProjectDocument {
        ProjectDocument {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            modified_at: self.modified_at,
            metadata: self.metadata.clone(),
            paragraphs: self.paragraphs.clone(),
            statistics: self.statistics(),
        }
    }

    /// Reconstruct a project from its persisted form. Paragraphs are sorted by
    /// their stored `order` and renumbered, so the sequence invariant holds
    /// even for hand-edited files. Persisted statistics are discarded.
    pub fn from_document(doc: ProjectDocument) -> Self {
        let mut paragraphs = doc.paragraphs;
        paragraphs.sort_by_key(|p| p.order);
        let mut project = Self {
            id: doc.id,
            name: doc.name,
            created_at: doc.created_at,
            modified_at: doc.modified_at,
            metadata: doc.metadata,
            paragraphs,
        };
        project.renumber();
        project
    }

    fn renumber(&mut self) {
        for (index, paragraph) in self.paragraphs.iter_mut().enumerate() {
            paragraph.order = index;
        }
    }

    // Monotonic even if the wall clock steps backwards.
    fn touch(&mut self) {
        let now = Utc::now();
        if now > self.modified_at {
            self.modified_at = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders(project: &Project) -> Vec<usize> {
        project.paragraphs().iter().map(|p| p.order).collect()
    }

    #[test]
    fn test_add_assigns_dense_orders() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "one", None);
        project.add_paragraph(ParagraphKind::Argument, "two", None);
        project.add_paragraph(ParagraphKind::Conclusion, "three", None);
        assert_eq!(orders(&project), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "one", None);
        let middle = project.add_paragraph(ParagraphKind::Argument, "two", None);
        project.add_paragraph(ParagraphKind::Conclusion, "three", None);

        assert!(project.remove_paragraph(middle));
        assert_eq!(project.paragraph_count(), 2);
        assert_eq!(orders(&project), vec![0, 1]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "one", None);
        let before = project.modified_at;

        assert!(!project.remove_paragraph(Uuid::new_v4()));
        assert_eq!(project.paragraph_count(), 1);
        assert_eq!(project.modified_at, before);
    }

    #[test]
    fn test_update_content_and_formatting() {
        let mut project = Project::new("Essay");
        let id = project.add_paragraph(ParagraphKind::Topic, "draft", None);

        let mut patch = Formatting::new();
        patch.set("font_size", FormatValue::Int(14));
        assert!(project.update_paragraph(id, Some("final"), Some(&patch)));

        let paragraph = project.get_paragraph(id).unwrap();
        assert_eq!(paragraph.content, "final");
        assert_eq!(
            paragraph.formatting.get("font_size"),
            Some(&FormatValue::Int(14))
        );
        assert!(paragraph.modified_at.is_some());
    }

    #[test]
    fn test_update_merges_rather_than_replaces() {
        let mut project = Project::new("Essay");
        let mut initial = Formatting::new();
        initial.set("bold", FormatValue::Flag(true));
        let id = project.add_paragraph(ParagraphKind::Topic, "", Some(initial));

        let mut patch = Formatting::new();
        patch.set("italic", FormatValue::Flag(true));
        project.update_paragraph(id, None, Some(&patch));

        let formatting = project.get_paragraph(id).unwrap().formatting;
        assert_eq!(formatting.get("bold"), Some(&FormatValue::Flag(true)));
        assert_eq!(formatting.get("italic"), Some(&FormatValue::Flag(true)));
    }

    #[test]
    fn test_update_absent_returns_false() {
        let mut project = Project::new("Essay");
        assert!(!project.update_paragraph(Uuid::new_v4(), Some("x"), None));
    }

    #[test]
    fn test_reorder_moves_and_renumbers() {
        let mut project = Project::new("Essay");
        let first = project.add_paragraph(ParagraphKind::Topic, "one", None);
        project.add_paragraph(ParagraphKind::Argument, "two", None);
        project.add_paragraph(ParagraphKind::Conclusion, "three", None);

        assert!(project.reorder_paragraph(first, 2));
        let contents: Vec<&str> = project
            .paragraphs()
            .iter()
            .map(|p| p.content.as_str())
            .collect();
        assert_eq!(contents, vec!["two", "three", "one"]);
        assert_eq!(orders(&project), vec![0, 1, 2]);
    }

    #[test]
    fn test_reorder_clamps_out_of_range() {
        let mut project = Project::new("Essay");
        let first = project.add_paragraph(ParagraphKind::Topic, "one", None);
        project.add_paragraph(ParagraphKind::Argument, "two", None);

        assert!(project.reorder_paragraph(first, 99));
        assert_eq!(project.paragraphs()[1].id, first);
        assert_eq!(orders(&project), vec![0, 1]);
    }

    #[test]
    fn test_reorder_absent_returns_false() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "one", None);
        assert!(!project.reorder_paragraph(Uuid::new_v4(), 0));
    }

    #[test]
    fn test_get_paragraph_is_detached() {
        let mut project = Project::new("Essay");
        let id = project.add_paragraph(ParagraphKind::Topic, "original", None);

        let mut copy = project.get_paragraph(id).unwrap();
        copy.content = "mutated".to_string();

        assert_eq!(project.get_paragraph(id).unwrap().content, "original");
    }

    #[test]
    fn test_counts() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "Intro text", None);
        project.add_paragraph(ParagraphKind::Conclusion, "Final text", None);

        assert_eq!(project.word_count(), 4);
        assert_eq!(project.character_count(true), 20);
        assert_eq!(project.character_count(false), 18);
    }

    #[test]
    fn test_modified_at_is_monotonic() {
        let mut project = Project::new("Essay");
        let mut last = project.modified_at;
        let id = project.add_paragraph(ParagraphKind::Topic, "x", None);
        assert!(project.modified_at >= last);
        last = project.modified_at;

        project.update_paragraph(id, Some("y"), None);
        assert!(project.modified_at >= last);
        last = project.modified_at;

        project.remove_paragraph(id);
        assert!(project.modified_at >= last);
    }

    #[test]
    fn test_unknown_kind_round_trips() {
        let json = r#""sidebar_note""#;
        let kind: ParagraphKind = serde_json::from_str(json).unwrap();
        assert_eq!(kind, ParagraphKind::Other("sidebar_note".to_string()));
        assert_eq!(serde_json::to_string(&kind).unwrap(), json);
    }

    #[test]
    fn test_known_kinds_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&ParagraphKind::ArgumentQuote).unwrap(),
            r#""argument_quote""#
        );
        let parsed: ParagraphKind = serde_json::from_str(r#""argument_quote""#).unwrap();
        assert_eq!(parsed, ParagraphKind::ArgumentQuote);
    }

    #[test]
    fn test_formatting_rejects_unknown_patch_keys() {
        let mut formatting = Formatting::new();
        assert!(!formatting.set("font_sze", FormatValue::Int(14)));
        assert!(formatting.is_empty());
    }

    #[test]
    fn test_formatting_merge_skips_unknown_keys() {
        // A patch deserialized from the wire can carry arbitrary keys.
        let patch: Formatting =
            serde_json::from_str(r#"{"font_size": 14, "font_sze": 99}"#).unwrap();
        let mut target = Formatting::new();
        assert_eq!(target.merge(&patch), 1);
        assert_eq!(target.get("font_size"), Some(&FormatValue::Int(14)));
        assert!(target.get("font_sze").is_none());
    }

    #[test]
    fn test_formatting_resolution_falls_back_to_defaults() {
        let defaults = FormatDefaults::default();
        let mut formatting = Formatting::new();
        formatting.set("font_size", FormatValue::Int(16));
        formatting.set("bold", FormatValue::Flag(true));

        let resolved = formatting.resolve(&defaults);
        assert_eq!(resolved.font_size, 16);
        assert!(resolved.bold);
        assert_eq!(resolved.font_family, "Liberation Sans");
        assert_eq!(resolved.line_spacing, 1.5);
        assert_eq!(resolved.quote_indent, 4.0);
        assert_eq!(resolved.alignment, "left");
        assert!(!resolved.italic);
    }

    #[test]
    fn test_document_round_trip_preserves_everything() {
        let mut project = Project::new("Essay");
        let mut formatting = Formatting::new();
        formatting.set("line_spacing", FormatValue::Float(2.0));
        project.add_paragraph(ParagraphKind::Topic, "Intro text", Some(formatting));
        project.add_paragraph(
            ParagraphKind::Other("aside".to_string()),
            "An aside",
            None,
        );

        let json = serde_json::to_string_pretty(&project.to_document()).unwrap();
        let doc: ProjectDocument = serde_json::from_str(&json).unwrap();
        let restored = Project::from_document(doc);
        let json_again = serde_json::to_string_pretty(&restored.to_document()).unwrap();

        assert_eq!(json, json_again);
        assert_eq!(restored.paragraphs()[1].kind.as_str(), "aside");
    }

    #[test]
    fn test_from_document_sorts_by_stored_order() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "first", None);
        project.add_paragraph(ParagraphKind::Argument, "second", None);

        let mut doc = project.to_document();
        doc.paragraphs.reverse();
        let restored = Project::from_document(doc);

        assert_eq!(restored.paragraphs()[0].content, "first");
        assert_eq!(orders(&restored), vec![0, 1]);
    }

    #[test]
    fn test_statistics_match_serialized_counts() {
        let mut project = Project::new("Essay");
        project.add_paragraph(ParagraphKind::Topic, "a b c", None);

        let doc = project.to_document();
        assert_eq!(doc.statistics.word_count, 3);
        assert_eq!(doc.statistics.character_count, 5);
        assert_eq!(doc.statistics.paragraph_count, 1);
    }
}
