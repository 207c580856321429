//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::info;

/// Create the parent directory of a file-backed store if it is missing.
///
/// Paths without a parent component (plain file names) need nothing.
pub async fn ensure_parent_dir(file: impl AsRef<Path>) -> anyhow::Result<()> {
    let Some(parent) = file.as_ref().parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    if tokio::fs::metadata(parent).await.is_err() {
        info!(dir = %parent.display(), "creating data directory");
    }
    tokio::fs::create_dir_all(parent)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
    Ok(())
}

/// Extract the on-disk file of a `sqlite:` URL, if it names one.
///
/// `sqlite::memory:` and non-sqlite URLs yield `None`.
pub fn sqlite_file_path(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_file_path_parses_urls() {
        assert_eq!(sqlite_file_path("sqlite://data/todos.sqlite?mode=rwc"), Some("data/todos.sqlite"));
        assert_eq!(sqlite_file_path("sqlite:todos.db"), Some("todos.db"));
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/todos"), None);
    }

    #[tokio::test]
    async fn ensure_parent_dir_creates_nested_dirs() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("todo_env_{}", uuid::Uuid::new_v4()));
        let file = root.join("nested").join("todos.json");
        ensure_parent_dir(&file).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());
        ensure_parent_dir("todos.json").await?;
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
