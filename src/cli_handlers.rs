use crate::models::{Task, TaskList};
use crate::reorder;
use crate::store::Store;
use anyhow::{Context, Result};
use tracing::info;

/// Handle the list command
pub fn handle_list(store: &Store) -> Result<()> {
    let tasks = load(store)?;
    print!("{}", format_list(&tasks));
    Ok(())
}

/// Handle the add command
pub fn handle_add(store: &Store, task: &str) -> Result<()> {
    let mut tasks = load(store)?;
    tasks.push(Task::new(task));
    save(store, &tasks)?;

    info!(task, position = tasks.len(), "added todo");
    println!("Added: {task}");
    print!("{}", format_list(&tasks));
    Ok(())
}

/// Handle the rm command
pub fn handle_remove(store: &Store, index: i64) -> Result<()> {
    let mut tasks = load(store)?;

    let removed = reorder::to_offset(index, tasks.len())
        .and_then(|offset| reorder::remove_task(&mut tasks, offset))
        .context("failed to remove todo")?;
    save(store, &tasks)?;

    info!(task = %removed, index, "removed todo");
    println!("Removed: {removed}");
    print!("{}", format_list(&tasks));
    Ok(())
}

/// Handle the mv command
pub fn handle_move(store: &Store, start: i64, target: i64) -> Result<()> {
    let mut tasks = load(store)?;

    let (source, dest) = positions(start, target, tasks.len()).context("failed to move todo")?;
    let moved = tasks.get(source).map(Task::to_string).unwrap_or_default();
    reorder::move_task(&mut tasks, source, dest).context("failed to move todo")?;
    save(store, &tasks)?;

    info!(task = %moved, start, target, "moved todo");
    println!("Moved {moved} from {start} to {target}");
    print!("{}", format_list(&tasks));
    Ok(())
}

/// Render the list, one `<n>. <task>` line per todo
pub fn format_list(tasks: &TaskList) -> String {
    if tasks.is_empty() {
        return "No todos found. Add some!\n".to_string();
    }

    let mut out = String::from("Your Todos:\n");
    for (i, task) in tasks.into_iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, task));
    }
    out
}

// Helpers
fn positions(start: i64, target: i64, len: usize) -> crate::Result<(usize, usize)> {
    Ok((
        reorder::to_offset(start, len)?,
        reorder::to_offset(target, len)?,
    ))
}

fn load(store: &Store) -> Result<TaskList> {
    store.load().context("failed to load todos")
}

fn save(store: &Store, tasks: &TaskList) -> Result<()> {
    store.save(tasks).context("failed to save todos")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use std::fs;
    use tempfile::TempDir;

    fn setup(items: &[&str]) -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("todos.json"));
        if !items.is_empty() {
            store.save(&items.iter().copied().collect()).unwrap();
        }
        (store, temp_dir)
    }

    fn texts(store: &Store) -> Vec<String> {
        store
            .load()
            .unwrap()
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_format_list() {
        let tasks: TaskList = ["a", "b"].into_iter().collect();
        assert_eq!(format_list(&tasks), "Your Todos:\n1. a\n2. b\n");
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_list(&TaskList::new()), "No todos found. Add some!\n");
    }

    #[test]
    fn test_list_does_not_create_file() {
        let (store, _temp) = setup(&[]);
        handle_list(&store).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_add_appends() {
        let (store, _temp) = setup(&["a"]);
        handle_add(&store, "b").unwrap();
        assert_eq!(texts(&store), ["a", "b"]);
    }

    #[test]
    fn test_remove() {
        let (store, _temp) = setup(&["a", "b", "c"]);
        handle_remove(&store, 2).unwrap();
        assert_eq!(texts(&store), ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_keeps_file() {
        let (store, _temp) = setup(&["a", "b", "c"]);
        let before = fs::read_to_string(store.path()).unwrap();

        let err = handle_remove(&store, 5).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to remove todo: index 5 is out of bounds (1 to 3)"
        );
        assert!(matches!(
            err.downcast_ref::<TodoError>(),
            Some(TodoError::InvalidIndex { index: 5, len: 3 })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_move() {
        let (store, _temp) = setup(&["a", "b", "c"]);
        handle_move(&store, 1, 3).unwrap();
        assert_eq!(texts(&store), ["b", "c", "a"]);

        handle_move(&store, 3, 1).unwrap();
        assert_eq!(texts(&store), ["a", "b", "c"]);
    }

    #[test]
    fn test_move_invalid_target_keeps_file() {
        let (store, _temp) = setup(&["a", "b"]);
        let before = fs::read_to_string(store.path()).unwrap();

        let err = handle_move(&store, 1, 0).unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to move todo: "));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_malformed_file_reports_load_failure() {
        let (store, _temp) = setup(&[]);
        fs::write(store.path(), "[{").unwrap();

        let err = handle_add(&store, "x").unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to load todos: malformed todo file"));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[{");
    }
}
