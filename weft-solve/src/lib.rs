//! Minimizer backends for Weft flow networks.
//!
//! Both backends implement [`weft_core::Minimizer`], so a
//! [`FlowNetwork`](weft_core::FlowNetwork) can switch algorithms by
//! switching the value passed to `solve`:
//!
//! - [`nelder_mead`] — derivative-free downhill simplex search for
//!   unconstrained problems
//! - [`penalty`] — quadratic-penalty rounds over the simplex search,
//!   handling equality and inequality constraints (the default choice
//!   for flow-network problems)

pub mod nelder_mead;
pub mod penalty;

pub use nelder_mead::NelderMead;
pub use penalty::Penalty;
