//! # Project Store
//!
//! [`ProjectManager`] maps projects to individual JSON files under a data
//! directory and keeps a process-local read-through cache:
//!
//! ```text
//! <data-dir>/
//! ├── projects/
//! │   ├── <project-id>.json        # one document per project
//! │   └── <project-id>.json.bak    # previous generation, when backups are on
//! └── trash/
//!     └── <project-id>_<YYYYMMDD_HHMMSS>.json
//! ```
//!
//! Saving renames the existing file to its `.bak` sibling before writing the
//! replacement, so exactly one rollback generation exists at any time. The
//! write itself is a whole-file replace; if the process dies mid-write the
//! `.bak` is the recovery path. Deleting moves the file into `trash/` instead
//! of erasing it; the store never resurrects from trash.
//!
//! Persistence failures are logged and reported as `false`/`None`; the only
//! error surfaced to callers is [`TacError::Validation`] from
//! [`ProjectManager::create_project`]. The store assumes a single-threaded
//! caller and performs no file locking.

use crate::config::TacConfig;
use crate::error::{Result, TacError};
use crate::model::{Project, ProjectDocument, Statistics};
use chrono::{DateTime, Utc};
use log::{error, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Listing entry parsed from a project file's header, without materializing
/// the full document.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub word_count: usize,
    pub paragraph_count: usize,
    pub path: PathBuf,
}

// Lenient mirror of the file layout: every field optional so a sparse or
// older file still lists.
#[derive(Deserialize)]
struct SummaryFile {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    statistics: Statistics,
    #[serde(default)]
    paragraphs: Vec<serde_json::Value>,
}

pub struct ProjectManager {
    projects_dir: PathBuf,
    trash_dir: PathBuf,
    backup_files: bool,
    cache: HashMap<Uuid, Project>,
}

impl ProjectManager {
    /// Open (creating if needed) the store rooted at `data_dir`.
    pub fn new<P: AsRef<Path>>(data_dir: P, config: &TacConfig) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let projects_dir = data_dir.join("projects");
        fs::create_dir_all(&projects_dir).map_err(TacError::Io)?;

        Ok(Self {
            projects_dir,
            trash_dir: data_dir.join("trash"),
            backup_files: config.backup_files,
            cache: HashMap::new(),
        })
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    pub fn trash_dir(&self) -> &Path {
        &self.trash_dir
    }

    fn project_path(&self, id: &Uuid) -> PathBuf {
        self.projects_dir.join(format!("{}.json", id))
    }

    /// List all persisted projects, most recently modified first; entries
    /// without a modification timestamp sort last.
    ///
    /// One unreadable file is skipped with a warning, never fatal to the scan.
    pub fn list_projects(&self) -> Vec<ProjectSummary> {
        let mut projects = Vec::new();

        let entries = match fs::read_dir(&self.projects_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!(
                    "failed to scan projects directory {}: {}",
                    self.projects_dir.display(),
                    e
                );
                return projects;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            if let Some(summary) = read_summary(&path) {
                projects.push(summary);
            }
        }

        projects.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
        projects
    }

    /// Create, persist and cache a new empty project.
    ///
    /// The one validation surfaced to callers: a name that trims to empty is
    /// rejected and nothing is written.
    pub fn create_project(
        &mut self,
        name: &str,
        author: &str,
        description: &str,
    ) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TacError::Validation(
                "project name cannot be empty".to_string(),
            ));
        }

        let mut project = Project::new(name);
        project.metadata.author = author.trim().to_string();
        project.metadata.description = description.trim().to_string();

        // Cached even when the immediate write fails; the next save retries.
        self.save_project(&project);
        self.cache.insert(project.id, project.clone());
        Ok(project)
    }

    /// Resolve `identifier` as a project id first, then as a display name.
    ///
    /// The name fallback scans the directory and takes the first match; when
    /// two projects share a name the winner is unspecified; callers wanting
    /// determinism must resolve by id.
    pub fn load_project(&mut self, identifier: &str) -> Option<Project> {
        if let Ok(id) = Uuid::parse_str(identifier) {
            if let Some(project) = self.cache.get(&id) {
                return Some(project.clone());
            }
            let path = self.project_path(&id);
            if path.exists() {
                return self.load_from_path(&path);
            }
        }

        let path = self.find_by_name(identifier)?;
        self.load_from_path(&path)
    }

    /// Persist a project, rotating the previous file to `.bak` first when
    /// backups are enabled. Failures are logged and reported as `false`.
    pub fn save_project(&mut self, project: &Project) -> bool {
        let path = self.project_path(&project.id);
        match self.write_document(project, &path) {
            Ok(()) => {
                self.cache.insert(project.id, project.clone());
                true
            }
            Err(e) => {
                error!("failed to save project '{}': {}", project.name, e);
                false
            }
        }
    }

    /// Soft-delete: move the backing file into the trash directory, suffixed
    /// with a timestamp to avoid collisions, and evict the cache entry.
    /// An unknown identifier is a normal `false`.
    pub fn delete_project(&mut self, identifier: &str) -> bool {
        let Some(project) = self.load_project(identifier) else {
            return false;
        };

        let path = self.project_path(&project.id);
        if !path.exists() {
            return false;
        }

        if let Err(e) = self.move_to_trash(&path, &project.id) {
            error!("failed to trash project '{}': {}", project.name, e);
            return false;
        }

        self.cache.remove(&project.id);
        true
    }

    /// Deep-copy a project under a new id and name. Paragraphs get fresh ids
    /// and creation timestamps; formatting and content carry over.
    pub fn duplicate_project(&mut self, identifier: &str, new_name: &str) -> Option<Project> {
        let original = self.load_project(identifier)?;

        let mut duplicate = Project::new(new_name);
        duplicate.metadata = original.metadata.clone();
        duplicate.metadata.description = format!("Copy of: {}", original.name);
        for paragraph in original.paragraphs() {
            duplicate.add_paragraph(
                paragraph.kind.clone(),
                paragraph.content.clone(),
                Some(paragraph.formatting.clone()),
            );
        }

        if self.save_project(&duplicate) {
            Some(duplicate)
        } else {
            None
        }
    }

    fn load_from_path(&mut self, path: &Path) -> Option<Project> {
        match read_document(path) {
            Ok(doc) => {
                let project = Project::from_document(doc);
                self.cache.insert(project.id, project.clone());
                Some(project)
            }
            Err(e) => {
                error!("failed to load project from {}: {}", path.display(), e);
                None
            }
        }
    }

    fn find_by_name(&self, name: &str) -> Option<PathBuf> {
        let entries = fs::read_dir(&self.projects_dir).ok()?;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            // Unreadable files are simply not candidates here; list_projects
            // is the place that reports them.
            let Ok(doc) = read_document(&path) else {
                continue;
            };
            if doc.name == name {
                return Some(path);
            }
        }
        None
    }

    fn write_document(&self, project: &Project, path: &Path) -> Result<()> {
        fs::create_dir_all(&self.projects_dir).map_err(TacError::Io)?;

        if path.exists() && self.backup_files {
            // One rollback generation: any older .bak is clobbered.
            let backup = path.with_extension("json.bak");
            fs::rename(path, &backup).map_err(TacError::Io)?;
        }

        // Whole-file replace; the .bak above is the crash-recovery path.
        let content =
            serde_json::to_string_pretty(&project.to_document()).map_err(TacError::Serialization)?;
        fs::write(path, content).map_err(TacError::Io)?;
        Ok(())
    }

    fn move_to_trash(&self, path: &Path, id: &Uuid) -> Result<()> {
        fs::create_dir_all(&self.trash_dir).map_err(TacError::Io)?;

        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let trash_path = self.trash_dir.join(format!("{}_{}.json", id, timestamp));
        fs::rename(path, trash_path).map_err(TacError::Io)?;
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<ProjectDocument> {
    let content = fs::read_to_string(path).map_err(TacError::Io)?;
    let doc: ProjectDocument = serde_json::from_str(&content).map_err(TacError::Serialization)?;
    Ok(doc)
}

fn read_summary(path: &Path) -> Option<ProjectSummary> {
    let parsed: Result<SummaryFile> = fs::read_to_string(path)
        .map_err(TacError::Io)
        .and_then(|content| serde_json::from_str(&content).map_err(TacError::Serialization));

    let file = match parsed {
        Ok(file) => file,
        Err(e) => {
            warn!("skipping unreadable project file {}: {}", path.display(), e);
            return None;
        }
    };

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let id = match file.id.or_else(|| Uuid::parse_str(stem).ok()) {
        Some(id) => id,
        None => {
            warn!(
                "skipping project file {} with no usable id",
                path.display()
            );
            return None;
        }
    };

    Some(ProjectSummary {
        id,
        name: file.name.unwrap_or_else(|| stem.to_string()),
        created_at: file.created_at,
        modified_at: file.modified_at,
        word_count: file.statistics.word_count,
        paragraph_count: file.paragraphs.len(),
        path: path.to_path_buf(),
    })
}
