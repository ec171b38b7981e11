//! File I/O operations and validation
//!
//! This module checks input paths before reading, splits text into lines,
//! and writes finished output.

use std::path::Path;

use crate::error::{ConvertError, Result};

const TEXT_EXTENSIONS: [&str; 3] = ["md", "txt", "text"];

/// Validates that the path names a readable text document
pub(crate) fn validate_source_file(file_path: &Path) -> Result<()> {
    if !file_path.exists() {
        return Err(ConvertError::MissingInput {
            path: file_path.to_path_buf(),
        });
    }

    if !file_path.is_file() {
        return Err(ConvertError::InvalidInput {
            path: file_path.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    // Files without an extension are accepted as plain text
    if let Some(extension) = file_path.extension().and_then(|ext| ext.to_str()) {
        let extension = extension.to_ascii_lowercase();
        if !TEXT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ConvertError::InvalidInput {
                path: file_path.to_path_buf(),
                reason: format!(
                    "expected a text outline (.md, .txt or .text), got .{extension}"
                ),
            });
        }
    }

    Ok(())
}

/// Read a whole file and split it into lines
pub(crate) async fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|source| ConvertError::Read {
            path: file_path.to_path_buf(),
            source,
        })?;

    Ok(split_lines(&content))
}

/// Split text into lines, accepting both `\n` and `\r\n` endings and a leading BOM
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}

pub(crate) async fn write_text(file_path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(file_path, content)
        .await
        .map_err(|source| ConvertError::Write {
            path: file_path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\r\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(split_lines("\u{feff}Title\n"), vec!["Title"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_validate_source_file() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.md");
        assert!(matches!(
            validate_source_file(&missing),
            Err(ConvertError::MissingInput { .. })
        ));

        assert!(matches!(
            validate_source_file(dir.path()),
            Err(ConvertError::InvalidInput { .. })
        ));

        let docx = dir.path().join("guide.docx");
        std::fs::write(&docx, "x").unwrap();
        assert!(matches!(
            validate_source_file(&docx),
            Err(ConvertError::InvalidInput { .. })
        ));

        let markdown = dir.path().join("guide.MD");
        std::fs::write(&markdown, "x").unwrap();
        assert!(validate_source_file(&markdown).is_ok());

        let bare = dir.path().join("GUIDE");
        std::fs::write(&bare, "x").unwrap();
        assert!(validate_source_file(&bare).is_ok());
    }
}
