use thiserror::Error;

/// Code generation errors.
#[derive(Error, Debug)]
pub enum Error {
   #[error("IO error: {0}")]
   Io(#[from] std::io::Error),
   #[error("`{first}` and `{second}` would both be embedded as `{ident}`")]
   DuplicateSymbol { ident: String, first: String, second: String },
}

pub type Result<T> = std::result::Result<T, Error>;
