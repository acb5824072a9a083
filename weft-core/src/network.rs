use rand::Rng;
use thiserror::Error;

use crate::{
    solve::{Minimizer, Problem},
    Constraint, FlowGraph, FlowMatrix, Objective,
};

/// Errors surfaced by a [`FlowNetwork`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The minimizer ended without success; carries its diagnostic.
    #[error("optimization failed: {message}")]
    OptimizationFailed { message: String },

    /// The solved graph was requested before any successful solve.
    #[error("the network has not been solved yet")]
    NotSolved,
}

/// A flow network paired with the objective and constraints to optimize
/// its weights against.
///
/// The matrix, objective, and constraint set are fixed at construction,
/// and the graph view of the original weights is built eagerly. [`solve`]
/// may be called any number of times with different minimizer backends;
/// each successful run replaces the stored solution, while a failed run
/// leaves the previous solution untouched.
///
/// A solve blocks the calling thread until the backend finishes, and
/// taking `&mut self` keeps concurrent solves on one network out of
/// reach; callers wanting parallel searches use one network per thread.
///
/// [`solve`]: FlowNetwork::solve
#[derive(Debug)]
pub struct FlowNetwork<O> {
    matrix: FlowMatrix,
    objective: O,
    constraints: Vec<Constraint>,
    graph: FlowGraph,
    solution: Option<FlowMatrix>,
}

impl<O: Objective> FlowNetwork<O> {
    /// Creates a network from a weight matrix, an objective, and a
    /// constraint set.
    #[must_use]
    pub fn new(matrix: FlowMatrix, objective: O, constraints: Vec<Constraint>) -> Self {
        let graph = FlowGraph::from_matrix(&matrix);
        Self {
            matrix,
            objective,
            constraints,
            graph,
            solution: None,
        }
    }

    /// The matrix the network was built from.
    #[must_use]
    pub fn matrix(&self) -> &FlowMatrix {
        &self.matrix
    }

    /// The graph view of the original weights.
    #[must_use]
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    /// The constraints the search must honor.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The most recent successful solution, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&FlowMatrix> {
        self.solution.as_ref()
    }

    /// Searches for a weight matrix minimizing the objective.
    ///
    /// The initial guess draws each of the N² entries uniformly from
    /// `[0, 1)`, so repeated solves explore from fresh starting points;
    /// pass a seeded rng for reproducible runs. The winning flat vector
    /// is reshaped row-major back into a matrix of the original order
    /// and stored as the solution.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::OptimizationFailed`] carrying the
    /// backend's diagnostic if the search errors or ends unconverged.
    /// The stored solution is not changed on failure.
    pub fn solve<M, R>(&mut self, minimizer: &M, rng: &mut R) -> Result<&FlowMatrix, NetworkError>
    where
        M: Minimizer,
        R: Rng + ?Sized,
    {
        let x0: Vec<f64> = (0..self.matrix.len()).map(|_| rng.gen::<f64>()).collect();
        let problem = Problem::new(&self.objective, &self.constraints);

        let minimum = minimizer
            .minimize(&problem, &x0)
            .map_err(|e| NetworkError::OptimizationFailed {
                message: e.to_string(),
            })?;

        if !minimum.status.is_success() {
            return Err(NetworkError::OptimizationFailed {
                message: minimum.status.to_string(),
            });
        }

        let solved = FlowMatrix::from_flat(self.matrix.order(), minimum.x).map_err(|e| {
            NetworkError::OptimizationFailed {
                message: e.to_string(),
            }
        })?;

        Ok(self.solution.insert(solved))
    }

    /// Derives a fresh graph view of the solved weights.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::NotSolved`] until a solve has succeeded.
    pub fn solved_graph(&self) -> Result<FlowGraph, NetworkError> {
        self.solution
            .as_ref()
            .map(FlowGraph::from_matrix)
            .ok_or(NetworkError::NotSolved)
    }
}
