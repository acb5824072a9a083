use std::fmt;

/// Whether a constraint is an equality or an inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// Feasible when the constraint function is exactly zero.
    Equality,

    /// Feasible when the constraint function is non-negative.
    Inequality,
}

/// A single condition over the flattened flow matrix.
///
/// The callable is opaque to the engine and is handed through verbatim
/// to whichever minimizer backend runs the search. Conventions follow
/// the usual constrained-solver shape: an equality constraint is
/// satisfied at `c(x) = 0`, an inequality constraint at `c(x) >= 0`.
pub struct Constraint {
    kind: ConstraintKind,
    f: Box<dyn Fn(&[f64]) -> f64 + Send + Sync>,
}

impl Constraint {
    /// Creates a constraint satisfied when `f(x) = 0`.
    pub fn equality<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            kind: ConstraintKind::Equality,
            f: Box::new(f),
        }
    }

    /// Creates a constraint satisfied when `f(x) >= 0`.
    pub fn inequality<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            kind: ConstraintKind::Inequality,
            f: Box::new(f),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Evaluates the raw constraint function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        (self.f)(x)
    }

    /// Returns how far `x` is from satisfying this constraint.
    ///
    /// Zero means feasible. Equality constraints report `|c(x)|`,
    /// inequality constraints report `max(0, -c(x))`.
    #[must_use]
    pub fn violation(&self, x: &[f64]) -> f64 {
        let value = (self.f)(x);
        match self.kind {
            ConstraintKind::Equality => value.abs(),
            ConstraintKind::Inequality => (-value).max(0.0),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_violation_is_absolute_distance() {
        let constraint = Constraint::equality(|x: &[f64]| x[0] + x[1] - 1.0);

        assert_eq!(constraint.kind(), ConstraintKind::Equality);
        assert_eq!(constraint.violation(&[0.5, 0.5]), 0.0);
        assert_eq!(constraint.violation(&[0.0, 0.0]), 1.0);
        assert_eq!(constraint.violation(&[2.0, 0.0]), 1.0);
    }

    #[test]
    fn inequality_is_feasible_when_non_negative() {
        let constraint = Constraint::inequality(|x: &[f64]| x[0]);

        assert_eq!(constraint.violation(&[2.0]), 0.0);
        assert_eq!(constraint.violation(&[0.0]), 0.0);
        assert_eq!(constraint.violation(&[-1.5]), 1.5);
    }

    #[test]
    fn evaluate_exposes_the_raw_value() {
        let constraint = Constraint::inequality(|x: &[f64]| 1.0 - x[0]);

        assert_eq!(constraint.evaluate(&[3.0]), -2.0);
    }
}
