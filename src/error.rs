//! Error types for chain construction.

use thiserror::Error;

/// Rejected simulation setup.
///
/// Raised only while building a [`ChainState`](crate::ChainState) or
/// [`Simulation`](crate::Simulation); a running tick never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// A chain needs at least two particles to have a segment.
    #[error("chain needs at least 2 particles, got {count}")]
    TooFewParticles { count: usize },
    /// Timestep must be positive and finite.
    #[error("timestep must be positive and finite")]
    NonPositiveTimestep,
    /// Total and segment lengths must be positive and finite.
    #[error("chain length must be positive and finite")]
    NonPositiveLength,
    /// Selection threshold must be positive and finite.
    #[error("selection threshold must be positive and finite")]
    NonPositiveThreshold,
    /// Gravity magnitude must be finite.
    #[error("gravity must be finite")]
    NonFiniteGravity,
    /// `current` and `previous` must hold one position per particle.
    #[error("position arrays differ in length (current: {current}, previous: {previous})")]
    LengthMismatch { current: usize, previous: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_carry_context() {
        let e = ConfigurationError::TooFewParticles { count: 1 };
        assert_eq!(e.to_string(), "chain needs at least 2 particles, got 1");

        let e = ConfigurationError::LengthMismatch { current: 3, previous: 2 };
        assert!(e.to_string().contains("current: 3"));
    }
}
