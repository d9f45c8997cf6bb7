use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a markdown file: {0}")]
    NotMarkdown(PathBuf),
}

/// Read a markdown document
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write a markdown document, creating parent directories if needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Check that `path` is an existing `.md` file
pub fn validate_markdown_file(path: &Path) -> Result<(), IoError> {
    if !path.is_file() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    match path.extension() {
        Some(ext) if ext == "md" || ext == "markdown" => Ok(()),
        _ => Err(IoError::NotMarkdown(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_file_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "test.md", "## Test Content\n\nParagraph");

        let content = read_file(&path).unwrap();
        assert_eq!(content, "## Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = create_test_dir();
        let result = read_file(&dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("folder/subfolder/new_file.md");
        let content = "## New File in Nested Folder";

        write_file(&path, content).unwrap();

        assert_eq!(read_file(&path).unwrap(), content);
        assert!(dir.path().join("folder").join("subfolder").is_dir());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "existing.md", "## Original Content");

        write_file(&path, "## Updated Content\n").unwrap();

        assert_eq!(read_file(&path).unwrap(), "## Updated Content\n");
    }

    #[test]
    fn test_validate_markdown_file() {
        let dir = create_test_dir();
        let markdown = create_test_file(&dir, "doc.md", "");
        let other = create_test_file(&dir, "config.json", "{}");

        assert!(validate_markdown_file(&markdown).is_ok());
        assert!(matches!(
            validate_markdown_file(&other),
            Err(IoError::NotMarkdown(_))
        ));
        assert!(matches!(
            validate_markdown_file(dir.path()),
            Err(IoError::NotFound(_))
        ));
    }
}
