use std::path::PathBuf;
use thiserror::Error;

/// All possible errors in the todo list
#[derive(Error, Debug)]
pub enum TodoError {
    #[error("could not read or write {path}", path = path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed todo file {path}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `index` is the 1-based position the user typed.
    #[error("index {index} is out of bounds (1 to {len})")]
    InvalidIndex { index: i64, len: usize },

    #[error("could not determine home directory")]
    HomeDir,

    #[error("could not encode todos")]
    Serialize(#[from] serde_json::Error),
}

impl TodoError {
    /// Out-of-range error for a 0-based index
    pub fn index_out_of_range(offset: usize, len: usize) -> Self {
        TodoError::InvalidIndex {
            index: i64::try_from(offset).map_or(i64::MAX, |i| i.saturating_add(1)),
            len,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
