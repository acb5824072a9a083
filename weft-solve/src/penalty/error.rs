use thiserror::Error;

use crate::nelder_mead;

/// Errors that can occur during a penalty search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The inner simplex search could not evaluate the penalized
    /// objective.
    #[error(transparent)]
    Simplex(#[from] nelder_mead::Error),
}
