//! Nelder–Mead downhill simplex search.
//!
//! A derivative-free minimizer for unconstrained problems. The simplex
//! starts as the initial guess plus one nudged vertex per coordinate,
//! then walks downhill through reflection, expansion, contraction, and
//! shrink steps until its vertices agree within the configured
//! tolerances or the iteration cap is hit.
//!
//! Constrained problems are rejected; the [`penalty`](crate::penalty)
//! backend layers constraint handling on top of this search.

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use weft_core::solve::{Minimizer, Minimum, Problem, Status};

/// Reflection, expansion, contraction, and shrink coefficients.
const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Relative and absolute nudges used to seed the simplex around `x0`.
const NUDGE: f64 = 0.05;
const ZERO_NUDGE: f64 = 0.000_25;

/// The Nelder–Mead simplex backend.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NelderMead {
    config: Config,
}

impl NelderMead {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Minimizer for NelderMead {
    type Error = Error;

    fn minimize(&self, problem: &Problem<'_>, x0: &[f64]) -> Result<Minimum, Error> {
        if !problem.constraints().is_empty() {
            return Err(Error::ConstrainedProblem);
        }

        search(|x| problem.objective_value(x), x0, &self.config)
    }
}

/// Runs the simplex search on a plain function.
///
/// Shared with the penalty backend, which pushes a penalized objective
/// through the same machinery.
pub(crate) fn search<F>(f: F, x0: &[f64], config: &Config) -> Result<Minimum, Error>
where
    F: Fn(&[f64]) -> f64,
{
    if x0.is_empty() {
        return Err(Error::EmptyStart);
    }

    let n = x0.len();
    let mut evals = 0usize;

    let f0 = f(x0);
    evals += 1;
    if !f0.is_finite() {
        return Err(Error::NonFiniteStart { value: f0 });
    }

    // Vertices paired with their objective values, kept sorted best-first.
    let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
    simplex.push((x0.to_vec(), f0));
    for i in 0..n {
        let mut vertex = x0.to_vec();
        vertex[i] = if vertex[i] == 0.0 {
            ZERO_NUDGE
        } else {
            vertex[i] * (1.0 + NUDGE)
        };
        let value = f(&vertex);
        evals += 1;
        simplex.push((vertex, value));
    }
    sort(&mut simplex);

    for _ in 0..config.max_iters() {
        if converged(&simplex, config) {
            let (x, objective) = simplex.swap_remove(0);
            return Ok(Minimum {
                x,
                objective,
                evals,
                status: Status::Converged,
            });
        }

        let centroid = centroid(&simplex[..n]);
        let f_best = simplex[0].1;
        let f_second_worst = simplex[n - 1].1;
        let f_worst = simplex[n].1;

        let reflected = blend(&centroid, &simplex[n].0, 1.0 + REFLECT, -REFLECT);
        let f_reflected = f(&reflected);
        evals += 1;

        if f_reflected < f_best {
            let stretch = REFLECT * EXPAND;
            let expanded = blend(&centroid, &simplex[n].0, 1.0 + stretch, -stretch);
            let f_expanded = f(&expanded);
            evals += 1;

            simplex[n] = if f_expanded < f_reflected {
                (expanded, f_expanded)
            } else {
                (reflected, f_reflected)
            };
        } else if f_reflected < f_second_worst {
            simplex[n] = (reflected, f_reflected);
        } else {
            let outside = f_reflected < f_worst;
            let contracted = if outside {
                let step = REFLECT * CONTRACT;
                blend(&centroid, &simplex[n].0, 1.0 + step, -step)
            } else {
                blend(&centroid, &simplex[n].0, 1.0 - CONTRACT, CONTRACT)
            };
            let f_contracted = f(&contracted);
            evals += 1;

            let accept = if outside {
                f_contracted <= f_reflected
            } else {
                f_contracted < f_worst
            };

            if accept {
                simplex[n] = (contracted, f_contracted);
            } else {
                let best = simplex[0].0.clone();
                for (vertex, value) in simplex.iter_mut().skip(1) {
                    for (v, b) in vertex.iter_mut().zip(&best) {
                        *v = b + SHRINK * (*v - b);
                    }
                    *value = f(vertex.as_slice());
                    evals += 1;
                }
            }
        }

        sort(&mut simplex);
    }

    let (x, objective) = simplex.swap_remove(0);
    Ok(Minimum {
        x,
        objective,
        evals,
        status: Status::IterationLimit {
            iters: config.max_iters(),
        },
    })
}

fn sort(simplex: &mut [(Vec<f64>, f64)]) {
    simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
}

fn centroid(vertices: &[(Vec<f64>, f64)]) -> Vec<f64> {
    let n = vertices[0].0.len();
    let mut c = vec![0.0; n];

    for (vertex, _) in vertices {
        for (ci, vi) in c.iter_mut().zip(vertex) {
            *ci += vi;
        }
    }

    let count = vertices.len() as f64;
    for ci in &mut c {
        *ci /= count;
    }

    c
}

/// Returns `a * wa + b * wb` component-wise.
fn blend(a: &[f64], b: &[f64], wa: f64, wb: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(ai, bi)| ai * wa + bi * wb).collect()
}

fn converged(simplex: &[(Vec<f64>, f64)], config: &Config) -> bool {
    let (best_x, best_f) = &simplex[0];

    simplex[1..].iter().all(|(vertex, value)| {
        (value - best_f).abs() <= config.f_tol()
            && vertex
                .iter()
                .zip(best_x)
                .all(|(v, b)| (v - b).abs() <= config.x_tol())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use weft_core::Constraint;

    fn paraboloid(x: &[f64]) -> f64 {
        (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2)
    }

    #[test]
    fn minimizes_a_paraboloid() {
        let objective = paraboloid as fn(&[f64]) -> f64;
        let problem = Problem::new(&objective, &[]);

        let minimum = NelderMead::default().minimize(&problem, &[0.0, 0.0]).unwrap();

        assert_eq!(minimum.status, Status::Converged);
        assert_relative_eq!(minimum.x[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(minimum.x[1], -2.0, epsilon = 1e-3);
        assert!(minimum.objective < 1e-4);
        assert!(minimum.evals > 0);
    }

    #[test]
    fn minimizes_in_one_dimension() {
        let objective = |x: &[f64]| (x[0] - 3.0).powi(2);
        let problem = Problem::new(&objective, &[]);

        let minimum = NelderMead::default().minimize(&problem, &[10.0]).unwrap();

        assert_eq!(minimum.status, Status::Converged);
        assert_relative_eq!(minimum.x[0], 3.0, epsilon = 1e-3);
    }

    #[test]
    fn reports_the_iteration_limit() {
        let config = Config::new(3, 0.0, 0.0).unwrap();
        let objective = paraboloid as fn(&[f64]) -> f64;
        let problem = Problem::new(&objective, &[]);

        let minimum = NelderMead::new(config).minimize(&problem, &[5.0, 5.0]).unwrap();

        assert_eq!(minimum.status, Status::IterationLimit { iters: 3 });
    }

    #[test]
    fn rejects_constrained_problems() {
        let objective = paraboloid as fn(&[f64]) -> f64;
        let constraints = vec![Constraint::equality(|x: &[f64]| x[0])];
        let problem = Problem::new(&objective, &constraints);

        let result = NelderMead::default().minimize(&problem, &[0.0, 0.0]);

        assert_eq!(result.unwrap_err(), Error::ConstrainedProblem);
    }

    #[test]
    fn rejects_an_empty_start() {
        let objective = |_: &[f64]| 0.0;
        let problem = Problem::new(&objective, &[]);

        let result = NelderMead::default().minimize(&problem, &[]);

        assert_eq!(result.unwrap_err(), Error::EmptyStart);
    }

    #[test]
    fn rejects_a_non_finite_start() {
        let objective = |_: &[f64]| f64::NAN;
        let problem = Problem::new(&objective, &[]);

        let result = NelderMead::default().minimize(&problem, &[1.0]);

        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn validates_config_tolerances() {
        assert_eq!(Config::new(10, -1.0, 0.0), Err(ConfigError::XTol));
        assert_eq!(Config::new(10, 0.0, f64::NAN), Err(ConfigError::FTol));
    }
}
