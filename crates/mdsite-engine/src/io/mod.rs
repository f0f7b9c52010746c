//! Filesystem access for documentation sources. The parser itself never
//! touches the filesystem; these helpers exist for callers feeding files
//! through the preprocessing pipeline.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("source not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid docs directory: {0}")]
    InvalidDocsDir(String),
}

/// Reads one markdown source under the docs root.
pub fn read_source(relative: &RelativePath, docs_root: &Path) -> Result<String, IoError> {
    let path = relative.to_path(docs_root);
    if !path.exists() {
        return Err(IoError::NotFound(path));
    }
    Ok(fs::read_to_string(&path)?)
}

/// Writes processed output under the output root, creating parent
/// directories as needed.
pub fn write_output(relative: &RelativePath, out_root: &Path, text: &str) -> Result<(), IoError> {
    let path = relative.to_path(out_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::write(&path, text)?)
}

/// Collects every `.md` source under the docs root, sorted, as paths
/// relative to that root.
pub fn collect_sources(docs_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !docs_root.is_dir() {
        return Err(IoError::InvalidDocsDir(docs_root.display().to_string()));
    }
    let mut found = Vec::new();
    collect_recursive(docs_root, docs_root, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_recursive(
    root: &Path,
    dir: &Path,
    found: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_recursive(root, &path, found)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
            && let Ok(rel) = path.strip_prefix(root)
            && let Ok(rel) = RelativePathBuf::from_path(rel)
        {
            found.push(rel);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn read_source_returns_content() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "index.md", "# Home\n");

        let content = read_source(RelativePath::new("index.md"), dir.path()).unwrap();
        assert_eq!(content, "# Home\n");
    }

    #[test]
    fn read_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_source(RelativePath::new("missing.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn write_output_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        write_output(RelativePath::new("guides/install.md"), dir.path(), "body\n").unwrap();

        let written = fs::read_to_string(dir.path().join("guides/install.md")).unwrap();
        assert_eq!(written, "body\n");
    }

    #[test]
    fn collect_sources_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "z.md", "");
        write_file(dir.path(), "guides/a.md", "");
        write_file(dir.path(), "notes.txt", "not markdown");

        let sources = collect_sources(dir.path()).unwrap();
        assert_eq!(
            sources,
            vec![
                RelativePathBuf::from("guides/a.md"),
                RelativePathBuf::from("z.md"),
            ]
        );
    }

    #[test]
    fn collect_sources_rejects_missing_root() {
        let result = collect_sources(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidDocsDir(_))));
    }
}
