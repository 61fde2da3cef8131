//! Gauss-Seidel relaxation of the chain's distance constraints.

use crate::float::Float;
use crate::observer::StepObserver;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Fixed-budget distance-constraint solver for a chain.
///
/// Holds only the rest length and pass count; the positions it works on are
/// handed in per call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstraintSolver<V: Vec> {
    pub segment_length: V::Scalar,
    pub iterations: usize,
}

impl<V: Vec> ConstraintSolver<V> {
    pub fn new(segment_length: V::Scalar, iterations: usize) -> Self {
        ConstraintSolver { segment_length, iterations }
    }

    /// Run `iterations` passes over the pairs `(0, 1) .. (N-2, N-1)` in order.
    ///
    /// Corrections are written in place, so each pair sees the pairs before
    /// it in the same pass. When `is_dragging` is false the first pair only
    /// moves particle 1, keeping particle 0 as a fixed anchor. Every other
    /// pair splits the correction evenly between both ends, including a
    /// dragged particle. Coincident pairs are skipped for that pass.
    pub fn relax<O: StepObserver>(
        &self,
        mut positions: AllocVec<V>,
        is_dragging: bool,
        observer: &mut O,
    ) -> AllocVec<V> {
        for pass in 0..self.iterations {
            for i in 0..positions.len().saturating_sub(1) {
                self.solve_pair(&mut positions, i, is_dragging);
            }
            observer.on_constraint_iteration(pass);
        }
        positions
    }

    fn solve_pair(&self, positions: &mut [V], i: usize, is_dragging: bool) {
        let a = positions[i];
        let b = positions[i + 1];
        let delta = b - a;
        let dist = delta.length();
        if dist == V::Scalar::zero() {
            return; // coincident, no direction to push along
        }

        if i == 0 && !is_dragging {
            positions[1] = a + delta.scale(self.segment_length / dist);
        } else {
            let correction = (dist - self.segment_length) / (V::Scalar::two() * dist);
            let shift = delta.scale(correction);
            positions[i] = a + shift;
            positions[i + 1] = b - shift;
        }
    }
}

/// Mean of `|distance(i, i+1) - segment_length|` over all adjacent pairs.
pub fn mean_violation<V: Vec>(positions: &[V], segment_length: V::Scalar) -> V::Scalar {
    let pairs = positions.len().saturating_sub(1);
    if pairs == 0 {
        return V::Scalar::zero();
    }
    let total = positions
        .windows(2)
        .fold(V::Scalar::zero(), |acc, w| acc + (w[0].distance(w[1]) - segment_length).abs());
    total / V::Scalar::from_usize(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use crate::vec::Vec2;
    use alloc::vec;

    #[test]
    fn anchor_pair_rescales_only_particle_one() {
        let solver = ConstraintSolver::new(1.0, 1);
        let out = solver.relax(
            vec![Vec2::new(0.0f64, 0.0), Vec2::new(0.0, -2.0)],
            false,
            &mut NoOpStepObserver,
        );
        assert_eq!(out[0], Vec2::new(0.0, 0.0));
        assert_eq!(out[1], Vec2::new(0.0, -1.0));
    }

    #[test]
    fn general_pair_splits_symmetrically() {
        let solver = ConstraintSolver::new(1.0, 1);
        let out = solver.relax(
            vec![Vec2::new(0.0f64, 0.0), Vec2::new(3.0, 0.0)],
            true,
            &mut NoOpStepObserver,
        );
        assert_eq!(out[0], Vec2::new(1.0, 0.0));
        assert_eq!(out[1], Vec2::new(2.0, 0.0));
    }

    #[test]
    fn compressed_pair_pushes_apart() {
        let solver = ConstraintSolver::new(1.0, 1);
        let out = solver.relax(
            vec![Vec2::new(0.0f64, 0.0), Vec2::new(0.5, 0.0)],
            true,
            &mut NoOpStepObserver,
        );
        assert_eq!(out[0], Vec2::new(-0.25, 0.0));
        assert_eq!(out[1], Vec2::new(0.75, 0.0));
    }

    #[test]
    fn later_pairs_see_earlier_corrections_in_same_pass() {
        // Particles 1 and 2 start coincident. Pair (0,1) moves particle 1 to
        // y = -1 first, so pair (1,2) sees a distance of exactly 1.0.
        let solver = ConstraintSolver::new(1.0, 1);
        let out = solver.relax(
            vec![Vec2::new(0.0f64, 0.0), Vec2::new(0.0, -2.0), Vec2::new(0.0, -2.0)],
            false,
            &mut NoOpStepObserver,
        );
        assert_eq!(out[1], Vec2::new(0.0, -1.0));
        assert_eq!(out[2], Vec2::new(0.0, -2.0));
    }

    #[test]
    fn mean_violation_averages_pairs() {
        let p = [Vec2::new(0.0f64, 0.0), Vec2::new(0.0, -1.5), Vec2::new(0.0, -2.0)];
        assert!((mean_violation(&p, 1.0) - 0.5).abs() < 1e-12);
    }
}
