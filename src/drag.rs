//! Mouse-drag state machine that pins one particle to the cursor.

use crate::float::Float;
use crate::input::{PointerButton, PointerEvent};
use crate::vec::Vec;

/// A particle forced to a position for the coming tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pin<V: Vec> {
    pub index: usize,
    pub target: V,
}

/// Whether a particle is currently held.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState<V: Vec> {
    #[default]
    Idle,
    Dragging {
        index: usize,
        /// `position - cursor` captured at press time.
        offset: V,
        /// Where the held particle is forced to each tick.
        target: V,
    },
}

/// Result of feeding one pointer event to the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DragTransition {
    Started(usize),
    Moved,
    Ended(usize),
    Ignored,
}

/// Tracks which particle, if any, the pointer is holding.
///
/// The controller never writes to the chain. It only reports a [`Pin`] that
/// the integrator uses in place of the Verlet step for that particle.
#[derive(Clone, Debug)]
pub struct DragController<V: Vec> {
    threshold: V::Scalar,
    state: DragState<V>,
}

impl<V: Vec> DragController<V> {
    pub fn new(threshold: V::Scalar) -> Self {
        DragController { threshold, state: DragState::Idle }
    }

    pub fn state(&self) -> DragState<V> {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the held particle.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// The pin to apply this tick, if a particle is held.
    pub fn pin(&self) -> Option<Pin<V>> {
        match self.state {
            DragState::Dragging { index, target, .. } => Some(Pin { index, target }),
            DragState::Idle => None,
        }
    }

    /// Grab the particle nearest to `cursor` if it is strictly closer than
    /// the selection threshold. Ties go to the lowest index.
    ///
    /// A press while already dragging is ignored; the gesture must be
    /// released first.
    pub fn press(&mut self, cursor: V, positions: &[V]) -> Option<usize> {
        if self.is_dragging() {
            log::trace!("press ignored, particle {:?} already held", self.selected());
            return None;
        }
        if !cursor.is_finite() {
            log::trace!("press ignored, cursor {:?} is not finite", cursor);
            return None;
        }

        let (index, dist) = nearest(cursor, positions)?;
        if !(dist < self.threshold) {
            log::trace!("press missed: nearest particle {} at {}", index, dist);
            return None;
        }

        let position = positions[index];
        self.state = DragState::Dragging {
            index,
            offset: position - cursor,
            target: position,
        };
        log::debug!("drag started on particle {} at distance {}", index, dist);
        Some(index)
    }

    /// Move the held particle's target to `cursor + offset`.
    ///
    /// Returns false, leaving the last target in place, when idle or when
    /// the cursor is not finite.
    pub fn move_to(&mut self, cursor: V) -> bool {
        match &mut self.state {
            DragState::Dragging { offset, target, .. } if cursor.is_finite() => {
                *target = cursor + *offset;
                true
            }
            _ => false,
        }
    }

    /// Let go of the held particle, if any.
    pub fn release(&mut self) -> Option<usize> {
        let released = self.selected();
        self.state = DragState::Idle;
        if let Some(index) = released {
            log::debug!("drag released particle {}", index);
        }
        released
    }

    /// Dispatch one pointer event.
    ///
    /// Presses and moves flagged as outside the simulation area are dropped,
    /// as are presses with any button other than [`PointerButton::Primary`].
    /// Releases always end the drag.
    pub fn handle(&mut self, event: &PointerEvent<V>, positions: &[V]) -> DragTransition {
        match *event {
            PointerEvent::Press { at, button, in_bounds } => {
                if !in_bounds || button != PointerButton::Primary {
                    return DragTransition::Ignored;
                }
                self.press(at, positions)
                    .map_or(DragTransition::Ignored, DragTransition::Started)
            }
            PointerEvent::Move { at, in_bounds } => {
                if in_bounds && self.move_to(at) {
                    DragTransition::Moved
                } else {
                    DragTransition::Ignored
                }
            }
            PointerEvent::Release => self
                .release()
                .map_or(DragTransition::Ignored, DragTransition::Ended),
        }
    }
}

/// Index and distance of the particle closest to `point`.
fn nearest<V: Vec>(point: V, positions: &[V]) -> Option<(usize, V::Scalar)> {
    positions
        .iter()
        .map(|p| p.distance(point))
        .enumerate()
        .fold(None, |best, (i, d)| match best {
            Some((_, bd)) if !(d < bd) => best,
            _ => Some((i, d)),
        })
}

impl<V: Vec> Default for DragController<V> {
    fn default() -> Self {
        Self::new(V::Scalar::from_f64(0.1))
    }
}
