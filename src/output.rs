//! Destination of the generated document.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::FootprintError;

/// Where the generated document is written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Standard output.
    #[default]
    Stdout,
    /// A file, created or truncated.
    File(PathBuf),
}

impl Destination {
    /// Creates a destination from an optional output path.
    #[must_use]
    pub fn from_path(path: Option<&Path>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_path_buf()))
    }

    /// Writes `contents` to the destination.
    ///
    /// The document is written in one piece after it has been fully rendered.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::OutputOpen`] if the file cannot be created and
    /// [`FootprintError::OutputWrite`] if writing fails.
    pub fn write(&self, contents: &str) -> Result<(), FootprintError> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                write_all(&mut stdout, contents)
            }
            Self::File(path) => {
                let mut file = File::create(path).map_err(|source| FootprintError::OutputOpen {
                    path: path.clone(),
                    source,
                })?;
                write_all(&mut file, contents)?;
                info!(path = %path.display(), bytes = contents.len(), "Footprint written");
                Ok(())
            }
        }
    }
}

fn write_all(writer: &mut impl Write, contents: &str) -> Result<(), FootprintError> {
    writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| FootprintError::OutputWrite { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path() {
        assert_eq!(Destination::from_path(None), Destination::Stdout);
        assert_eq!(
            Destination::from_path(Some(Path::new("out.kicad_mod"))),
            Destination::File(PathBuf::from("out.kicad_mod"))
        );
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plug.kicad_mod");
        Destination::File(path.clone()).write("(footprint)\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "(footprint)\n");
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plug.kicad_mod");
        let err = Destination::File(path).write("x").unwrap_err();
        assert!(matches!(err, FootprintError::OutputOpen { .. }));
    }
}
