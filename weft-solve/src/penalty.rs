//! Quadratic-penalty search for constrained problems.
//!
//! Each round minimizes `f(x) + mu * sum(violation(x)^2)` with the
//! simplex search, then inflates `mu` and starts the next round from
//! the best point found so far. The search ends once the worst
//! violation falls inside the configured tolerance, the rounds run
//! out, or an observer stops it.
//!
//! Inequality constraints contribute to the penalty only while
//! violated, so the penalized objective reduces to the caller's plain
//! objective on the feasible set.

mod config;
mod error;
mod event;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};

use weft_core::{
    solve::{Minimizer, Minimum, Problem, Status},
    Observer,
};

use crate::nelder_mead;

/// The quadratic-penalty backend.
///
/// The usual choice for flow-network problems: it honors equality and
/// inequality constraints and needs no derivative information from the
/// caller's objective.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Penalty {
    config: Config,
}

impl Penalty {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the search, emitting an [`Event`] per penalty round.
    ///
    /// Unconstrained problems skip the penalty machinery and run the
    /// simplex search once, without events.
    ///
    /// # Errors
    ///
    /// Returns an error if the inner simplex search cannot evaluate
    /// the penalized objective.
    pub fn minimize_observed<Obs>(
        &self,
        problem: &Problem<'_>,
        x0: &[f64],
        mut observer: Obs,
    ) -> Result<Minimum, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        if problem.constraints().is_empty() {
            return Ok(nelder_mead::search(
                |x| problem.objective_value(x),
                x0,
                self.config.inner(),
            )?);
        }

        let mut mu = self.config.mu0();
        let mut x = x0.to_vec();
        let mut evals = 0;

        for round in 1..=self.config.outer_iters() {
            let penalized = |x: &[f64]| {
                let penalty: f64 = problem
                    .constraints()
                    .iter()
                    .map(|c| {
                        let v = c.violation(x);
                        v * v
                    })
                    .sum();
                problem.objective_value(x) + mu * penalty
            };

            let inner = nelder_mead::search(&penalized, &x, self.config.inner())?;
            let inner_status = inner.status;
            evals += inner.evals;
            x = inner.x;

            let objective = problem.objective_value(&x);
            let violation = problem.max_violation(&x);

            let event = Event {
                round,
                mu,
                x: &x,
                objective,
                violation,
            };
            let stop = matches!(observer.observe(&event), Some(Action::StopEarly));

            if violation <= self.config.violation_tol() {
                return Ok(Minimum {
                    x,
                    objective,
                    evals,
                    status: inner_status,
                });
            }

            if stop {
                return Ok(Minimum {
                    x,
                    objective,
                    evals,
                    status: Status::Stopped,
                });
            }

            mu *= self.config.mu_growth();
        }

        let objective = problem.objective_value(&x);
        let violation = problem.max_violation(&x);

        Ok(Minimum {
            x,
            objective,
            evals,
            status: Status::Infeasible { violation },
        })
    }
}

impl Minimizer for Penalty {
    type Error = Error;

    fn minimize(&self, problem: &Problem<'_>, x0: &[f64]) -> Result<Minimum, Error> {
        self.minimize_observed(problem, x0, ())
    }
}
