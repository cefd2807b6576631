//! # Optimization Direction
//!
//! The `Direction` enum states whether lower or higher fitness is better.
//! It is threaded through selection, best-ever tracking and termination so
//! that every direction-aware comparison in the engine lives in one place.

/// The optimization direction of a problem.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower fitness is better (e.g. tour length, password distance).
    Minimize,
    /// Higher fitness is better (e.g. box sum, knapsack value).
    Maximize,
}

impl Direction {
    /// Returns `true` if `candidate` is a strict improvement over
    /// `incumbent` under this direction.
    ///
    /// Ties are not improvements, so the first-encountered value wins
    /// when scores are equal.
    pub fn is_improvement(&self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Direction::Minimize => candidate < incumbent,
            Direction::Maximize => candidate > incumbent,
        }
    }

    /// Returns `true` if `score` satisfies `target` under this direction
    /// (`<=` for minimization, `>=` for maximization).
    pub fn meets_target(&self, score: f64, target: f64) -> bool {
        match self {
            Direction::Minimize => score <= target,
            Direction::Maximize => score >= target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_improvement_minimize() {
        assert!(Direction::Minimize.is_improvement(1.0, 2.0));
        assert!(!Direction::Minimize.is_improvement(2.0, 1.0));
        assert!(!Direction::Minimize.is_improvement(1.0, 1.0));
    }

    #[test]
    fn test_is_improvement_maximize() {
        assert!(Direction::Maximize.is_improvement(2.0, 1.0));
        assert!(!Direction::Maximize.is_improvement(1.0, 2.0));
        assert!(!Direction::Maximize.is_improvement(1.0, 1.0));
    }

    #[test]
    fn test_meets_target_is_inclusive() {
        assert!(Direction::Minimize.meets_target(5.0, 5.0));
        assert!(Direction::Minimize.meets_target(4.0, 5.0));
        assert!(!Direction::Minimize.meets_target(6.0, 5.0));

        assert!(Direction::Maximize.meets_target(5.0, 5.0));
        assert!(Direction::Maximize.meets_target(6.0, 5.0));
        assert!(!Direction::Maximize.meets_target(4.0, 5.0));
    }
}
