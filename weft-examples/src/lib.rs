//! Runnable examples for Weft.
//!
//! See the `examples/` directory: `network_flow` solves a small
//! constrained network and prints the result, `plotting` draws the
//! solved graph in a window.
