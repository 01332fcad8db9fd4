//! Error types for stream operations.

/// [`StreamError`] enumerates what can go wrong when observing a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A position past the end of a finite stream was requested.
    #[error("index {index} is out of range for a stream of {len} elements")]
    IndexOutOfRange {
        /// the requested position
        index: usize,
        /// the number of elements the stream turned out to have
        len: usize,
    },
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;
