//! Index-based list mutation.
//!
//! Indices here are 0-based. User-facing positions go through [`to_offset`]
//! first.

use crate::error::{Result, TodoError};
use crate::models::{Task, TaskList};

/// Convert a 1-based position into a 0-based index into a list of `len` items.
pub fn to_offset(position: i64, len: usize) -> Result<usize> {
    usize::try_from(position)
        .ok()
        .and_then(|p| p.checked_sub(1))
        .filter(|&offset| offset < len)
        .ok_or(TodoError::InvalidIndex {
            index: position,
            len,
        })
}

fn check_index(list: &TaskList, index: usize) -> Result<()> {
    if index >= list.len() {
        return Err(TodoError::index_out_of_range(index, list.len()));
    }
    Ok(())
}

/// Move the task at `source` to `target`, shifting the tasks in between.
///
/// Both indices must be in `[0, len)`. On error the list is untouched.
pub fn move_task(list: &mut TaskList, source: usize, target: usize) -> Result<()> {
    check_index(list, source)?;
    check_index(list, target)?;

    let tasks = list.as_mut_vec();
    let moving = tasks.remove(source);
    let target = target.min(tasks.len());
    tasks.insert(target, moving);

    Ok(())
}

/// Remove and return the task at `index`. On error the list is untouched.
pub fn remove_task(list: &mut TaskList, index: usize) -> Result<Task> {
    check_index(list, index)?;
    Ok(list.as_mut_vec().remove(index))
}
