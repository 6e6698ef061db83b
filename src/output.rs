//! Destinations for a rendered script.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::script::Script;

/// Where the generated script is written.
#[derive(Debug, Clone)]
pub enum ScriptTarget {
    /// Standard output. The artifact is the only thing written there;
    /// diagnostics go to stderr.
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl From<Option<PathBuf>> for ScriptTarget {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ScriptTarget::File(path),
            None => ScriptTarget::Stdout,
        }
    }
}

/// Errors that can occur writing a script out.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to write {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] io::Error),
}

impl ScriptTarget {
    /// Write the script to this target.
    pub fn write(&self, script: &Script) -> Result<(), WriteError> {
        match self {
            ScriptTarget::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                script
                    .write_to(&mut handle)
                    .and_then(|()| handle.flush())
                    .map_err(WriteError::Stdout)
            }
            ScriptTarget::File(path) => File::create(path)
                .and_then(|mut file| script.write_to(&mut file).and_then(|()| file.flush()))
                .map_err(|source| WriteError::File {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Directive;
    use crate::sql::Statement;

    fn sample_script() -> Script {
        let mut script = Script::new();
        script.directive(Directive::DisableWarnings);
        script.statement(Statement::DropTable {
            tables: vec!["t".to_string()],
            if_exists: true,
        });
        script.directive(Directive::EnableWarnings);
        script
    }

    #[test]
    fn test_file_target_round_trips() {
        let script = sample_script();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.test");

        ScriptTarget::File(path.clone()).write(&script).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, script.render());
    }

    #[test]
    fn test_file_target_reports_path_on_failure() {
        let script = sample_script();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.test");

        let error = ScriptTarget::File(path.clone()).write(&script).unwrap_err();
        match error {
            WriteError::File { path: reported, .. } => assert_eq!(reported, path),
            WriteError::Stdout(_) => panic!("wrong variant"),
        }
    }
}
