use thiserror::Error;

use crate::nelder_mead;

/// Configuration for the quadratic-penalty search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    inner: nelder_mead::Config,
    outer_iters: usize,
    mu0: f64,
    mu_growth: f64,
    violation_tol: f64,
}

/// Errors that can occur when validating a penalty config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mu0 must be finite and positive")]
    Mu0,

    #[error("mu_growth must be finite and greater than 1")]
    MuGrowth,

    #[error("violation_tol must be finite and non-negative")]
    ViolationTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(nelder_mead::Config::default(), 20, 1.0, 10.0, 1e-6).unwrap()
    }
}

impl Config {
    /// Creates a config with validated penalty parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting coefficient is not positive,
    /// the growth factor does not exceed 1, or the violation tolerance
    /// is negative or non-finite.
    pub fn new(
        inner: nelder_mead::Config,
        outer_iters: usize,
        mu0: f64,
        mu_growth: f64,
        violation_tol: f64,
    ) -> Result<Self, ConfigError> {
        if !mu0.is_finite() || mu0 <= 0.0 {
            return Err(ConfigError::Mu0);
        }
        if !mu_growth.is_finite() || mu_growth <= 1.0 {
            return Err(ConfigError::MuGrowth);
        }
        if !violation_tol.is_finite() || violation_tol < 0.0 {
            return Err(ConfigError::ViolationTol);
        }

        Ok(Self {
            inner,
            outer_iters,
            mu0,
            mu_growth,
            violation_tol,
        })
    }

    /// Config for the inner simplex runs.
    #[must_use]
    pub fn inner(&self) -> &nelder_mead::Config {
        &self.inner
    }

    /// Maximum number of penalty rounds.
    #[must_use]
    pub fn outer_iters(&self) -> usize {
        self.outer_iters
    }

    /// Penalty coefficient for the first round.
    #[must_use]
    pub fn mu0(&self) -> f64 {
        self.mu0
    }

    /// Factor applied to the coefficient between rounds.
    #[must_use]
    pub fn mu_growth(&self) -> f64 {
        self.mu_growth
    }

    /// Worst constraint violation accepted as feasible.
    #[must_use]
    pub fn violation_tol(&self) -> f64 {
        self.violation_tol
    }
}
