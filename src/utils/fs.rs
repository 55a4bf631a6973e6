use std::fs;
use std::io::{self, BufReader, Write};
use std::path::Path;

use crate::utils::error::TocError;

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Open a file for buffered, line-by-line reading
pub fn open_reader<P: AsRef<Path>>(path: P) -> Result<BufReader<fs::File>, TocError> {
    let file = fs::File::open(path.as_ref()).map_err(|source| TocError::Read {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Write a string to a file in one go, replacing any previous content.
///
/// Parent directories are not created; a missing directory is an error.
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), TocError> {
    let path = path.as_ref();
    let write_err = |source: io::Error| TocError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = fs::File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("toc.md");
        fs::write(&path, "old content that is longer than the new one\n").unwrap();

        write_file(&path, "1. [A](#a)\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1. [A](#a)\n");
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("toc.md");

        let err = write_file(&path, "1. [A](#a)\n").unwrap_err();

        assert!(matches!(err, TocError::Write { .. }));
        assert!(!path.exists());
        assert!(!is_directory(dir.path().join("missing")));
    }

    #[test]
    fn test_open_reader() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "## One\n## Two\n").unwrap();

        assert!(is_file(&path));
        let lines: Vec<String> = open_reader(&path).unwrap().lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["## One", "## Two"]);
    }

    #[test]
    fn test_open_reader_missing_file() {
        let dir = tempdir().unwrap();
        let err = open_reader(dir.path().join("nope.md")).unwrap_err();

        assert!(matches!(err, TocError::Read { .. }));
    }
}
