//! Step observer trait for monitoring the chain as it ticks.

/// Trait for observing simulation ticks and drag gestures.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after the tentative positions have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over all pairs.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called once the relaxed positions have been committed.
    fn on_step_complete(&mut self) {}

    /// Called when a press grabs a particle.
    fn on_drag_start(&mut self, _index: usize) {}

    /// Called when the grabbed particle is let go.
    fn on_drag_end(&mut self, _index: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
