#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid record length: expected 4, 8, 10, 12, or 16 bytes, got {0} bytes")]
    InvalidLength(usize),

    #[error("buffer length mismatch: format needs {expected} bytes, got {actual} bytes")]
    BufferLength { expected: usize, actual: usize },

    #[error("invalid comp literal ({0})")]
    ParseComp(#[from] std::num::ParseIntError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
