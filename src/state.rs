//! Current and previous particle positions of the chain.

use crate::error::ConfigurationError;
use crate::float::Float;
use crate::vec::{Vec, Vec2};
use alloc::vec::Vec as AllocVec;

/// Position history of a chain of N particles.
///
/// There is no velocity field: velocity is inferred as `current - previous`,
/// so the two arrays always advance together in [`commit`](Self::commit).
#[derive(Clone, Debug, PartialEq)]
pub struct ChainState<V: Vec> {
    current: AllocVec<V>,
    previous: AllocVec<V>,
    segment_length: V::Scalar,
}

impl<F: Float> ChainState<Vec2<F>> {
    /// Lay the chain out as a vertical line hanging down from the origin,
    /// at rest (`previous == current`).
    pub fn hanging(particle_count: usize, total_length: F) -> Result<Self, ConfigurationError> {
        if particle_count < 2 {
            return Err(ConfigurationError::TooFewParticles { count: particle_count });
        }
        Self::spaced(particle_count, total_length / F::from_usize(particle_count - 1))
    }

    /// Same vertical line, given the distance between neighbours directly.
    pub fn spaced(particle_count: usize, segment_length: F) -> Result<Self, ConfigurationError> {
        let current: AllocVec<_> = (0..particle_count)
            .map(|i| Vec2::new(F::zero(), -(F::from_usize(i) * segment_length)))
            .collect();
        Self::from_positions(current.clone(), current, segment_length)
    }
}

impl<V: Vec> ChainState<V> {
    /// Start from an arbitrary configuration.
    pub fn from_positions(
        current: AllocVec<V>,
        previous: AllocVec<V>,
        segment_length: V::Scalar,
    ) -> Result<Self, ConfigurationError> {
        if current.len() != previous.len() {
            return Err(ConfigurationError::LengthMismatch {
                current: current.len(),
                previous: previous.len(),
            });
        }
        if current.len() < 2 {
            return Err(ConfigurationError::TooFewParticles { count: current.len() });
        }
        if !(segment_length > V::Scalar::zero()) || !segment_length.is_finite() {
            return Err(ConfigurationError::NonPositiveLength);
        }
        log::debug!(
            "chain state created: {} particles, segment length {}",
            current.len(),
            segment_length
        );
        Ok(ChainState { current, previous, segment_length })
    }

    pub fn current(&self) -> &[V] {
        &self.current
    }

    pub fn previous(&self) -> &[V] {
        &self.previous
    }

    /// Position of one particle, if the index is in range.
    pub fn position(&self, index: usize) -> Option<V> {
        self.current.get(index).copied()
    }

    /// Number of particles N.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always false; a chain holds at least two particles.
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn segment_length(&self) -> V::Scalar {
        self.segment_length
    }

    /// Per-step displacement `current - previous` of one particle.
    pub fn displacement(&self, index: usize) -> Option<V> {
        Some(*self.current.get(index)? - *self.previous.get(index)?)
    }

    /// Shift the history by one step: the old `current` becomes `previous`.
    ///
    /// `relaxed` must hold one position per particle.
    pub(crate) fn commit(&mut self, relaxed: AllocVec<V>) {
        debug_assert_eq!(relaxed.len(), self.current.len());
        self.previous = core::mem::replace(&mut self.current, relaxed);
    }
}
