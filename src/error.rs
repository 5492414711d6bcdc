use std::io;
use thiserror::Error;

/// Failures surfaced while running a lesson.
///
/// The lessons themselves are total; the only thing that can go wrong is the
/// sink refusing a line (closed pipe, full disk).
#[derive(Error, Debug)]
pub enum TourError {
    #[error("Failed to write lesson output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_display() {
        let error = TourError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let display = format!("{}", error);
        assert!(display.contains("Failed to write lesson output"));
        assert!(display.contains("pipe closed"));
    }

    #[test]
    fn test_question_mark_converts_io_error() {
        fn write_line() -> Result<()> {
            let written: io::Result<()> = Err(io::Error::new(io::ErrorKind::WriteZero, "no space"));
            written?;
            Ok(())
        }

        assert!(matches!(write_line(), Err(TourError::Output(_))));
    }
}
