//! Core types for modeling a flow network and searching for a better
//! set of edge weights.
//!
//! A [`FlowMatrix`] holds directed edge weights between indexed nodes,
//! and [`FlowGraph`] is its sparse directed-graph projection. A
//! [`FlowNetwork`] pairs a matrix with a caller-supplied [`Objective`]
//! and [`Constraint`] set, hands the flattened matrix to any
//! [`Minimizer`] backend, and reshapes the winning flat vector back
//! into matrix form.

mod constraint;
mod graph;
mod matrix;
mod network;
mod objective;
mod observe;
pub mod solve;

pub use constraint::{Constraint, ConstraintKind};
pub use graph::FlowGraph;
pub use matrix::{FlowMatrix, MatrixError};
pub use network::{FlowNetwork, NetworkError};
pub use objective::Objective;
pub use observe::Observer;
pub use solve::{Minimizer, Minimum, Problem, Status};
