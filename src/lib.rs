pub mod locale;

pub mod walk;

use std::{
    fmt::Display,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::locale::{LocaleError, LocaleFile};

/// Name of the files which are rewritten. Matched exactly (case sensitive).
pub const LOCALE_FILE_NAME: &str = "messages.json";

/// The brand string searched for in scanned fields.
pub const TARGET: &str = "MetaMask";
/// The brand string it gets replaced with.
pub const REPLACEMENT: &str = "Widllet";

#[derive(Debug, Error)]
pub enum RebrandError {
    /// The directory tree could not be traversed.
    #[error("unable to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unable to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Locale { path: PathBuf, source: LocaleError },
}

/// What happened to a single locale file during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one field was rebranded and the file was written back.
    Updated { path: PathBuf, fields: usize },
    /// Nothing matched, the file was not touched.
    Unchanged { path: PathBuf },
    /// The file could not be parsed and was left as is.
    Skipped { path: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Updated { path, .. }
            | FileOutcome::Unchanged { path }
            | FileOutcome::Skipped { path, .. } => path,
        }
    }

    /// The console line reported for this file. Unchanged files are silent.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            FileOutcome::Unchanged { .. } => None,
            _ => Some(self.to_string()),
        }
    }
}

impl Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Updated { path, .. } => write!(f, "Updated {}", path.display()),
            FileOutcome::Unchanged { path } => write!(f, "Unchanged {}", path.display()),
            FileOutcome::Skipped { path, reason } => {
                write!(f, "Skipping {}: {}", path.display(), reason)
            }
        }
    }
}

/// The result of a full pass over a directory tree, outcomes in traversal order.
#[derive(Debug, Default, Clone)]
pub struct RewriteSummary {
    outcomes: Vec<FileOutcome>,
}

impl RewriteSummary {
    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn scanned(&self) -> usize {
        self.outcomes.len()
    }

    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Updated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, FileOutcome::Skipped { .. }))
            .count()
    }
}

/// Rebrands a single locale file in place. The file is only written when a field actually
/// changed. Malformed JSON is the one recoverable failure and comes back as
/// [`FileOutcome::Skipped`]; read and write failures are returned as errors.
pub fn rewrite_file<P: AsRef<Path>>(path: P) -> Result<FileOutcome, RebrandError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| RebrandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut locale = match LocaleFile::from_bytes(&bytes) {
        Ok(locale) => locale,
        Err(e @ LocaleError::Malformed(_)) => {
            return Ok(FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
        Err(source) => {
            return Err(RebrandError::Locale {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let fields = locale.rebrand();

    if fields == 0 {
        return Ok(FileOutcome::Unchanged {
            path: path.to_path_buf(),
        });
    }

    let out_bytes = locale.dump().map_err(|source| RebrandError::Locale {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, out_bytes).map_err(|source| RebrandError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Updated {
        path: path.to_path_buf(),
        fields,
    })
}

/// Runs a full pass over `root`: every `messages.json` in the tree is rebranded in turn.
pub fn rewrite_tree<P: AsRef<Path>>(root: P) -> Result<RewriteSummary, RebrandError> {
    rewrite_tree_with(root, |_| ())
}

/// Same as [`rewrite_tree`], calling `on_outcome` as soon as each file has been handled.
pub fn rewrite_tree_with<P, F>(root: P, mut on_outcome: F) -> Result<RewriteSummary, RebrandError>
where
    P: AsRef<Path>,
    F: FnMut(&FileOutcome),
{
    let mut summary = RewriteSummary::default();

    for locale_path in walk::find_locale_files(root)? {
        let outcome = rewrite_file(&locale_path)?;
        on_outcome(&outcome);

        summary.outcomes.push(outcome);
    }

    Ok(summary)
}
