//! The seam between the network engine and minimizer backends.
//!
//! A [`Problem`] bundles the caller's objective with its constraint
//! set; a [`Minimizer`] searches it from a given start point and
//! reports the best [`Minimum`] found, tagged with a [`Status`].
//! Backend errors are reserved for evaluation-level failures; an
//! orderly but unsuccessful search ends with a non-converged status
//! whose `Display` text is the diagnostic handed back to callers.

use std::fmt;

use crate::{Constraint, Objective};

/// A minimization problem handed to a [`Minimizer`] backend.
pub struct Problem<'a> {
    objective: &'a dyn Objective,
    constraints: &'a [Constraint],
}

impl<'a> Problem<'a> {
    #[must_use]
    pub fn new(objective: &'a dyn Objective, constraints: &'a [Constraint]) -> Self {
        Self {
            objective,
            constraints,
        }
    }

    /// Scores a candidate vector with the caller's objective.
    #[must_use]
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.value(x)
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        self.constraints
    }

    /// Returns the worst constraint violation at `x`, or zero when the
    /// problem is unconstrained.
    #[must_use]
    pub fn max_violation(&self, x: &[f64]) -> f64 {
        self.constraints
            .iter()
            .map(|c| c.violation(x))
            .fold(0.0, f64::max)
    }
}

/// How a minimizer run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Status {
    /// Converged within the backend's tolerances with all constraints
    /// satisfied.
    Converged,

    /// Reached the iteration limit without converging.
    IterationLimit { iters: usize },

    /// The search ended with constraints still violated.
    Infeasible { violation: f64 },

    /// Stopped early by an observer decision.
    Stopped,
}

impl Status {
    /// Whether this status counts as a successful solve.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Converged)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::IterationLimit { iters } => {
                write!(f, "reached the iteration limit ({iters}) without converging")
            }
            Self::Infeasible { violation } => {
                write!(f, "constraints still violated by {violation:e} when the search ended")
            }
            Self::Stopped => write!(f, "stopped early by an observer"),
        }
    }
}

/// The best point a minimizer backend found.
#[derive(Debug, Clone)]
pub struct Minimum {
    /// The flat vector at the reported minimum.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of objective evaluations spent.
    pub evals: usize,

    /// How the run ended.
    pub status: Status,
}

/// A constrained nonlinear minimizer.
///
/// This is where the caller selects an algorithm: the engine owns the
/// problem and the initial guess, the backend owns the search. The
/// engine never inspects a backend beyond this contract.
pub trait Minimizer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Searches for the `x` minimizing the problem's objective,
    /// starting from `x0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot evaluate the problem or
    /// rejects its shape.
    fn minimize(&self, problem: &Problem<'_>, x0: &[f64]) -> Result<Minimum, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_violation_picks_the_worst_constraint() {
        let objective = |x: &[f64]| x[0];
        let constraints = vec![
            Constraint::equality(|x: &[f64]| x[0]),
            Constraint::inequality(|x: &[f64]| x[0] + 2.0),
        ];
        let problem = Problem::new(&objective, &constraints);

        assert_eq!(problem.max_violation(&[-3.0]), 3.0);
        assert_eq!(problem.max_violation(&[0.0]), 0.0);
    }

    #[test]
    fn unconstrained_problems_have_zero_violation() {
        let objective = |x: &[f64]| x[0];
        let problem = Problem::new(&objective, &[]);

        assert_eq!(problem.max_violation(&[42.0]), 0.0);
    }

    #[test]
    fn only_convergence_counts_as_success() {
        assert!(Status::Converged.is_success());
        assert!(!Status::IterationLimit { iters: 10 }.is_success());
        assert!(!Status::Infeasible { violation: 0.1 }.is_success());
        assert!(!Status::Stopped.is_success());
    }

    #[test]
    fn statuses_describe_themselves() {
        let text = Status::IterationLimit { iters: 250 }.to_string();

        assert!(text.contains("250"));
        assert!(text.contains("iteration limit"));
    }
}
