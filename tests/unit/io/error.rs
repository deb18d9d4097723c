//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use searchkit::SearchError;
    use searchkit::io::error::{WithPath, invalid_input, invalid_parameter};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SearchError::FileSystem {
            path: "/tmp/maze.txt".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/maze.txt"));
        assert!(error.to_string().contains("file not found"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("workers", &0, &"at least one worker is required");

        let message = error.to_string();
        assert!(message.contains("workers"));
        assert!(message.contains('0'));
        assert!(message.contains("at least one worker"));
        assert!(error.source().is_none());
    }

    // Tests input errors report one-based line numbers
    // Verified by printing the zero-based index
    #[test]
    fn test_invalid_input_line_number() {
        let error = invalid_input(2, &"expected 4 columns, found 3");
        assert!(error.to_string().contains("line 3"));
        assert!(matches!(error, SearchError::InvalidInput { line: 2, .. }));
    }

    // Tests marker and worker errors name what failed
    // Verified by dropping the marker from the message
    #[test]
    fn test_marker_and_worker_messages() {
        let marker = SearchError::MissingMarker { marker: 'E' };
        assert!(marker.to_string().contains("'E'"));

        let worker = SearchError::WorkerPanicked { worker: 3 };
        assert!(worker.to_string().contains("worker 3"));
    }

    // Tests path context is attached to I/O failures
    // Verified by recording the wrong operation
    #[test]
    fn test_with_path() {
        let failed: std::io::Result<()> = Err(std::io::Error::other("denied"));
        match failed.with_path(Path::new("maps/b.txt"), "read") {
            Err(SearchError::FileSystem { path, operation, .. }) => {
                assert_eq!(path, PathBuf::from("maps/b.txt"));
                assert_eq!(operation, "read");
            }
            other => unreachable!("expected FileSystem error, got {other:?}"),
        }
    }

    // Tests bare I/O errors convert without a known path
    // Verified by dropping the source in the conversion
    #[test]
    fn test_from_io_error() {
        let error: SearchError = std::io::Error::other("boom").into();
        assert!(error.source().is_some());
        assert!(error.to_string().contains("<unknown>"));
    }
}
