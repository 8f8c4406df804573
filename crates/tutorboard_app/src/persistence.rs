use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use board_logging::{board_error, board_info, board_warn};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tutorboard_core::{CourseFilter, ViewPrefs};

const PREFS_FILENAME: &str = ".tutorboard_view.ron";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum PersistedFilter {
    All,
    Published,
    Drafts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedView {
    filter: PersistedFilter,
    page: u32,
    saved_at: String,
}

/// Preferences live next to the catalog file, or in the working directory
/// when running against the fixture catalog.
pub fn prefs_path(catalog: Option<&Path>) -> PathBuf {
    let dir = catalog
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(PREFS_FILENAME)
}

pub fn load_view_prefs(path: &Path) -> Option<ViewPrefs> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            board_warn!("failed to read view prefs from {:?}: {}", path, err);
            return None;
        }
    };

    let persisted: PersistedView = match ron::from_str(&content) {
        Ok(view) => view,
        Err(err) => {
            board_warn!("failed to parse view prefs from {:?}: {}", path, err);
            return None;
        }
    };

    board_info!("restored view prefs from {:?}", path);
    Some(ViewPrefs {
        filter: match persisted.filter {
            PersistedFilter::All => CourseFilter::All,
            PersistedFilter::Published => CourseFilter::Published,
            PersistedFilter::Drafts => CourseFilter::Drafts,
        },
        page: persisted.page,
    })
}

pub fn save_view_prefs(path: &Path, prefs: &ViewPrefs) {
    let persisted = PersistedView {
        filter: match prefs.filter {
            CourseFilter::All => PersistedFilter::All,
            CourseFilter::Published => PersistedFilter::Published,
            CourseFilter::Drafts => PersistedFilter::Drafts,
        },
        page: prefs.page,
        saved_at: Utc::now().to_rfc3339(),
    };

    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&persisted, pretty) {
        Ok(text) => text,
        Err(err) => {
            board_error!("failed to serialize view prefs: {}", err);
            return;
        }
    };

    if let Err(err) = write_atomically(path, &content) {
        board_error!("failed to write view prefs to {:?}: {}", path, err);
    }
}

/// Write a temp file in the target's directory, then rename into place.
fn write_atomically(target: &Path, content: &str) -> std::io::Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing prefs file if present.
    if target.exists() {
        fs::remove_file(target)?;
    }
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
