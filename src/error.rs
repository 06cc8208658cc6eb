use crate::file::LoadError;
use crate::tree::TreeError;
use thiserror::Error;

/// Top-level error type for the cfgtree library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("configuration load error: {0}")]
    Load(#[from] LoadError),
}
