use std::fs;
use std::path::Path;

use super::{Extraction, ExtractionFailure};

/// Reads a plain-text file. Invalid UTF-8 counts as an IO failure.
pub fn extract_text(path: &Path) -> Extraction {
    match fs::read_to_string(path) {
        Ok(text) => Extraction::from_text(text),
        Err(e) => Extraction::Failure(ExtractionFailure::Io(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Python developer").unwrap();
        file.flush().unwrap();

        match extract_text(file.path()) {
            Extraction::Success(text) => assert_eq!(text, "Python developer"),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_is_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            extract_text(file.path()),
            Extraction::Failure(ExtractionFailure::Empty)
        ));
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        assert!(matches!(
            extract_text(Path::new("/no/such/file.txt")),
            Extraction::Failure(ExtractionFailure::Io(_))
        ));
    }
}
