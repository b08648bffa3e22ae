//! Store location resolution.

use crate::error::{Result, TodoError};
use std::path::{Path, PathBuf};

/// Environment variable overriding the todo file location.
pub const FILE_ENV: &str = "TODO_FILE";

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub todos_file: PathBuf,
}

impl Config {
    /// Use an explicit file, falling back to `~/.config/todo/todos.json`.
    pub fn resolve(file: Option<PathBuf>) -> Result<Self> {
        let todos_file = match file {
            Some(path) => path,
            None => Self::default_path(dirs::home_dir().as_deref())?,
        };
        Ok(Config { todos_file })
    }

    /// `<home>/.config/todo/todos.json`
    pub fn default_path(home: Option<&Path>) -> Result<PathBuf> {
        let home = home.ok_or(TodoError::HomeDir)?;
        Ok(home.join(".config").join("todo").join("todos.json"))
    }
}
