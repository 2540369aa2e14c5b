use thiserror::Error;

/// Compilation errors we want to handle specifically
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("unmatched ']' at position {position}")]
    MismatchedLoop { position: usize },
    #[error("unterminated '[' opened at position {position}")]
    UnterminatedLoop { position: usize },
}

/// Encoding errors we want to handle specifically
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("not an integer in input stream: {token:?}")]
    BadInputValue {
        token: String,
        source: std::num::ParseIntError,
    },
}

/// Interpreter errors we want to handle specifically
#[derive(Debug, Error)]
pub enum VmError {
    #[error("data pointer out of bounds")]
    DataPointerOutOfBounds,
    #[error("unmatched '{0}' in program")]
    UnmatchedLoop(char),
    #[error("malformed program image: {0}")]
    MalformedImage(&'static str),
}

// For compiler operations where callers match on the failure
pub type CompileResult<T> = std::result::Result<T, CompileError>;

// For encoder operations where callers match on the failure
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

// For interpreter operations where callers match on the failure
pub type VmResult<T> = std::result::Result<T, VmError>;

// For general operations where we want to propagate errors with anyhow
pub type Result<T> = anyhow::Result<T>;
