//! Verlet integration step producing tentative positions.

use crate::drag::Pin;
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Advance every particle one timestep and return the tentative positions.
///
/// Free particles take the Verlet step
/// `2 * current - previous + gravity * dt^2`. Particle 0 stays where it is
/// unless it is the pinned particle, and the pinned particle is placed
/// directly at its drag target. Each output depends only on the same index
/// of the inputs.
///
/// # Panics
/// If `current` and `previous` differ in length.
pub fn advance<V: Vec>(
    current: &[V],
    previous: &[V],
    gravity: V,
    dt: V::Scalar,
    pin: Option<Pin<V>>,
) -> AllocVec<V> {
    assert_eq!(current.len(), previous.len(), "position history out of step");
    let step = gravity.scale(dt * dt);
    current
        .iter()
        .zip(previous)
        .enumerate()
        .map(|(i, (&pos, &prev))| match pin {
            Some(p) if p.index == i => p.target,
            _ if i == 0 => pos,
            _ => pos.scale(V::Scalar::two()) - prev + step,
        })
        .collect()
}
