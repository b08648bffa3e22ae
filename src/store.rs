use crate::error::{Result, TodoError};
use crate::models::TaskList;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// JSON file backing the todo list
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list. A missing or blank file is an empty list.
    pub fn load(&self) -> Result<TaskList> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "todo file missing, starting empty");
                return Ok(TaskList::new());
            }
            Err(e) => return Err(self.file_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(TaskList::new());
        }

        let tasks: TaskList =
            serde_json::from_str(&content).map_err(|source| TodoError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = tasks.len(), "loaded todos");
        Ok(tasks)
    }

    /// Replace the file with `tasks`, pretty-printed.
    ///
    /// Writes a sibling temp file and renames it into place, so a failed save
    /// leaves the previous content intact. Symlinks are followed and the
    /// existing file mode is kept.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        let data = serde_json::to_string_pretty(tasks)?;

        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let permissions = match fs::metadata(&target) {
            Ok(meta) => Some(meta.permissions()),
            Err(_) => new_file_permissions(),
        };

        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.file_error(e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.file_error(e))?;
        tmp.write_all(data.as_bytes())
            .and_then(|()| match permissions {
                Some(permissions) => tmp.as_file().set_permissions(permissions),
                None => Ok(()),
            })
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.file_error(e))?;
        tmp.persist(&target).map_err(|e| self.file_error(e.error))?;

        debug!(path = %target.display(), count = tasks.len(), "saved todos");
        Ok(())
    }

    fn file_error(&self, source: io::Error) -> TodoError {
        TodoError::File {
            path: self.path.clone(),
            source,
        }
    }
}

/// Mode for a freshly created todo file
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}
