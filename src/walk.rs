use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{LOCALE_FILE_NAME, RebrandError};

/// Finds every file named `messages.json` beneath `root`, including `root` itself. Symlinks to
/// files count, symlinked directories are not followed.
/// Nested matches are all returned; nothing is deduplicated. Entries are sorted by file name
/// within each directory so repeated runs visit files in the same order.
pub fn find_locale_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, RebrandError> {
    let mut locale_paths = vec![];

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;

        if entry.file_name() != LOCALE_FILE_NAME {
            continue;
        }

        // Links to directories aren't descended into, but a linked file is read through
        let is_file = if entry.path_is_symlink() {
            entry.path().is_file()
        } else {
            entry.file_type().is_file()
        };

        if is_file {
            locale_paths.push(entry.into_path());
        }
    }

    Ok(locale_paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use ntest::timeout;

    #[test]
    #[timeout(5000)]
    fn finds_nested_locale_files() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let dir = tempfile::tempdir()?;
        let root = dir.path();

        fs::create_dir_all(root.join("app/_locales/en"))?;
        fs::create_dir_all(root.join("app/_locales/de/messages.json.d"))?;
        fs::create_dir_all(root.join("dist/messages.json"))?;

        fs::write(root.join("messages.json"), "{}")?;
        fs::write(root.join("app/_locales/en/messages.json"), "{}")?;
        fs::write(root.join("app/_locales/de/messages.json"), "{}")?;
        fs::write(root.join("app/_locales/de/messages.json.d/messages.json"), "{}")?;
        fs::write(root.join("app/_locales/en/Messages.json"), "{}")?;
        fs::write(root.join("app/_locales/en/messages.json.bak"), "{}")?;

        let found = find_locale_files(root)?;

        assert_eq!(
            found,
            vec![
                root.join("app/_locales/de/messages.json"),
                root.join("app/_locales/de/messages.json.d/messages.json"),
                root.join("app/_locales/en/messages.json"),
                root.join("messages.json"),
            ]
        );

        Ok(())
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            find_locale_files(dir.path().join("does_not_exist")),
            Err(RebrandError::Walk(_))
        ));
    }
}
