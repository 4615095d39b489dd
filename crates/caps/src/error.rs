use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// A mutator was called after the array was frozen. The array is left unchanged.
    #[error("invalid operation: `{operation}` on a frozen array")]
    Frozen { operation: &'static str },

    #[error("index {index} out of range for count {count}")]
    OutOfRange { index: usize, count: usize },
}
