use thiserror::Error;

/// Errors that can occur during a simplex search.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The problem carries constraints, which this backend cannot honor.
    #[error("the simplex search cannot handle constraints; use the penalty backend")]
    ConstrainedProblem,

    /// The initial guess has no entries.
    #[error("the initial guess is empty")]
    EmptyStart,

    /// The objective was non-finite at the initial guess.
    #[error("objective is not finite at the initial guess ({value})")]
    NonFiniteStart { value: f64 },
}
