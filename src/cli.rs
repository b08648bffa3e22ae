use crate::config::FILE_ENV;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal todo list")]
#[command(version)]
pub struct Cli {
    /// Todo file to use instead of ~/.config/todo/todos.json
    #[arg(long, global = true, env = FILE_ENV, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all todos
    #[command(visible_alias = "l")]
    List,

    /// Add a new todo
    #[command(visible_alias = "a")]
    Add {
        /// Task to add to the todo list
        task: String,
    },

    /// Remove a todo by its index
    #[command(name = "rm", visible_alias = "remove")]
    Remove {
        /// Index of the todo to remove
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Move a todo to a different spot in the list.
    ///
    /// `mv 3 1` shifts the todo at place 3 to place 1, moving the rest down.
    #[command(name = "mv", visible_alias = "move")]
    Move {
        /// Index of the todo to move
        #[arg(allow_negative_numbers = true)]
        start: i64,
        /// Target index of the moving todo
        #[arg(allow_negative_numbers = true)]
        target: i64,
    },
}
