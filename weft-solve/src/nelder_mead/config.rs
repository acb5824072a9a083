use thiserror::Error;

/// Configuration for the simplex search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    f_tol: f64,
}

/// Errors that can occur when validating a simplex config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and non-negative")]
    XTol,

    #[error("f_tol must be finite and non-negative")]
    FTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10_000, 1e-8, 1e-8).unwrap()
    }
}

impl Config {
    /// Creates a config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_tol: f64, f_tol: f64) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol < 0.0 {
            return Err(ConfigError::XTol);
        }
        if !f_tol.is_finite() || f_tol < 0.0 {
            return Err(ConfigError::FTol);
        }

        Ok(Self {
            max_iters,
            x_tol,
            f_tol,
        })
    }

    /// Maximum number of simplex iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Convergence tolerance on the simplex spread in x.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Convergence tolerance on the objective spread across vertices.
    #[must_use]
    pub fn f_tol(&self) -> f64 {
        self.f_tol
    }
}
