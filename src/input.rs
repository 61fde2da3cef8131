//! Pointer events and the seams to the windowing and drawing layers.
//!
//! The simulation never talks to a window system. A front end translates its
//! own callbacks into [`PointerEvent`]s, pushes them into an [`InputSource`]
//! (usually an [`InputQueue`]) and receives the committed positions through
//! a [`Renderer`] once per tick.

use crate::vec::Vec;
use alloc::collections::VecDeque;

/// Mouse button identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// One pointer event in simulation coordinates.
///
/// `in_bounds` is false when the front end saw the pointer outside the
/// simulation area; such presses and moves are ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<V: Vec> {
    Press { at: V, button: PointerButton, in_bounds: bool },
    Move { at: V, in_bounds: bool },
    Release,
}

impl<V: Vec> PointerEvent<V> {
    /// Primary-button press inside the simulation area.
    pub fn press(at: V) -> Self {
        PointerEvent::Press { at, button: PointerButton::Primary, in_bounds: true }
    }

    /// Move inside the simulation area.
    pub fn moved(at: V) -> Self {
        PointerEvent::Move { at, in_bounds: true }
    }
}

/// Producer of pointer events, drained at the top of each tick.
pub trait InputSource<V: Vec> {
    fn poll_event(&mut self) -> Option<PointerEvent<V>>;
}

/// Consumer of the committed chain, called once per tick.
pub trait Renderer<V: Vec> {
    fn draw(&mut self, positions: &[V]);
}

/// FIFO of pointer events recorded between ticks.
#[derive(Clone, Debug, Default)]
pub struct InputQueue<V: Vec> {
    events: VecDeque<PointerEvent<V>>,
}

impl<V: Vec> InputQueue<V> {
    pub fn new() -> Self {
        InputQueue { events: VecDeque::new() }
    }

    pub fn push(&mut self, event: PointerEvent<V>) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<V: Vec> InputSource<V> for InputQueue<V> {
    fn poll_event(&mut self) -> Option<PointerEvent<V>> {
        self.events.pop_front()
    }
}

/// Discards every frame; for headless runs.
pub struct NullRenderer;

impl<V: Vec> Renderer<V> for NullRenderer {
    fn draw(&mut self, _positions: &[V]) {}
}
