//! Per-tick orchestration: input, integration, relaxation, commit, draw.

use crate::config::{AnchorPolicy, SimulationConfig};
use crate::drag::{DragController, DragTransition, Pin};
use crate::error::ConfigurationError;
use crate::float::Float;
use crate::input::{InputSource, PointerEvent, Renderer};
use crate::integrator;
use crate::observer::StepObserver;
use crate::solver::{self, ConstraintSolver};
use crate::state::ChainState;
use crate::vec::Vec2;

/// A draggable chain hanging from particle 0.
///
/// Owns the chain state exclusively. Each [`step`](Self::step) runs to
/// completion, so [`positions`](Self::positions) only ever exposes a fully
/// relaxed, committed configuration.
///
/// ```
/// use linkage::{Simulation, SimulationConfig, NoOpStepObserver};
///
/// let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
/// for _ in 0..100 {
///     sim.step(&mut NoOpStepObserver);
/// }
/// assert_eq!(sim.positions().len(), 30);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    config: SimulationConfig<F>,
    state: ChainState<Vec2<F>>,
    drag: DragController<Vec2<F>>,
    solver: ConstraintSolver<Vec2<F>>,
    gravity: Vec2<F>,
    ticks: u64,
}

impl<F: Float> Simulation<F> {
    /// Validate `config` and lay the chain out hanging straight down.
    pub fn new(config: SimulationConfig<F>) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let state = ChainState::hanging(config.particle_count, config.total_length)?;
        Self::with_state(config, state)
    }

    /// Start from a prepared chain.
    ///
    /// The particle count and segment length come from `state`, and so does
    /// the line [`reset`](Self::reset) rebuilds; `config.particle_count` and
    /// `config.total_length` are only validated. The rest of `config` applies.
    pub fn with_state(
        config: SimulationConfig<F>,
        state: ChainState<Vec2<F>>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let solver = ConstraintSolver::new(state.segment_length(), config.constraint_iterations);
        log::debug!(
            "simulation ready: {} particles, dt {}, gravity {}, {} passes per tick",
            state.len(),
            config.timestep,
            config.gravity,
            config.constraint_iterations
        );
        Ok(Simulation {
            drag: DragController::new(config.selection_threshold),
            gravity: Vec2::down(config.gravity),
            config,
            state,
            solver,
            ticks: 0,
        })
    }

    /// Feed one pointer event to the drag controller.
    ///
    /// Hit-testing uses the last committed positions.
    pub fn handle_event<O: StepObserver>(
        &mut self,
        event: &PointerEvent<Vec2<F>>,
        observer: &mut O,
    ) -> DragTransition {
        let transition = self.drag.handle(event, self.state.current());
        match transition {
            DragTransition::Started(index) => observer.on_drag_start(index),
            DragTransition::Ended(index) => observer.on_drag_end(index),
            DragTransition::Moved | DragTransition::Ignored => {}
        }
        transition
    }

    /// Advance the chain by one timestep.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        let pin = self.drag.pin();

        let tentative = integrator::advance(
            self.state.current(),
            self.state.previous(),
            self.gravity,
            self.config.timestep,
            pin,
        );
        observer.on_integrate();

        let relaxed = self.solver.relax(tentative, self.anchor_released(pin), observer);
        self.state.commit(relaxed);
        self.ticks += 1;

        observer.on_step_complete();
    }

    /// Drain `input`, step once and hand the committed chain to `renderer`.
    pub fn tick<I, R, O>(&mut self, input: &mut I, renderer: &mut R, observer: &mut O)
    where
        I: InputSource<Vec2<F>>,
        R: Renderer<Vec2<F>>,
        O: StepObserver,
    {
        while let Some(event) = input.poll_event() {
            self.handle_event(&event, observer);
        }
        self.step(observer);
        renderer.draw(self.state.current());
    }

    /// Put the chain back into a hanging line and drop any drag.
    ///
    /// Keeps the chain's own particle count and segment length. A drag that
    /// was still active is reported through `on_drag_end`.
    pub fn reset<O: StepObserver>(&mut self, observer: &mut O) -> Result<(), ConfigurationError> {
        self.state = ChainState::spaced(self.state.len(), self.state.segment_length())?;
        if let Some(index) = self.drag.release() {
            observer.on_drag_end(index);
        }
        self.ticks = 0;
        Ok(())
    }

    // Whether the solver should treat particle 0 as an ordinary particle.
    fn anchor_released(&self, pin: Option<Pin<Vec2<F>>>) -> bool {
        match self.config.anchor_policy {
            AnchorPolicy::HoldUnlessGrabbed => pin.is_some_and(|p| p.index == 0),
            AnchorPolicy::ReleaseWhileDragging => pin.is_some(),
        }
    }

    pub fn positions(&self) -> &[Vec2<F>] {
        self.state.current()
    }

    pub fn state(&self) -> &ChainState<Vec2<F>> {
        &self.state
    }

    pub fn drag(&self) -> &DragController<Vec2<F>> {
        &self.drag
    }

    pub fn config(&self) -> &SimulationConfig<F> {
        &self.config
    }

    /// Ticks committed since construction or the last reset.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Mean `|distance - segment_length|` over the committed chain.
    pub fn mean_violation(&self) -> F {
        solver::mean_violation(self.state.current(), self.state.segment_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use alloc::vec;

    #[derive(Default)]
    struct Counter {
        integrations: usize,
        passes: usize,
        completed: usize,
        grabbed: Option<usize>,
        released: Option<usize>,
    }

    impl StepObserver for Counter {
        fn on_integrate(&mut self) { self.integrations += 1; }
        fn on_constraint_iteration(&mut self, _iteration: usize) { self.passes += 1; }
        fn on_step_complete(&mut self) { self.completed += 1; }
        fn on_drag_start(&mut self, index: usize) { self.grabbed = Some(index); }
        fn on_drag_end(&mut self, index: usize) { self.released = Some(index); }
    }

    #[test]
    fn observer_sees_every_phase() {
        let config = SimulationConfig::new().with_constraint_iterations(7);
        let mut sim: Simulation<f64> = Simulation::new(config).unwrap();
        let mut counter = Counter::default();
        sim.step(&mut counter);
        sim.step(&mut counter);
        assert_eq!(counter.integrations, 2);
        assert_eq!(counter.passes, 14);
        assert_eq!(counter.completed, 2);
        assert_eq!(sim.ticks(), 2);
    }

    #[test]
    fn observer_sees_drag_gesture() {
        let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
        let mut counter = Counter::default();
        let tip = sim.positions()[29];
        sim.handle_event(&PointerEvent::press(tip), &mut counter);
        sim.handle_event(&PointerEvent::Release, &mut counter);
        assert_eq!(counter.grabbed, Some(29));
        assert_eq!(counter.released, Some(29));
    }

    #[test]
    fn invalid_config_fails_construction() {
        let config = SimulationConfig::new().with_timestep(-0.01);
        let r: Result<Simulation<f64>, _> = Simulation::new(config);
        assert_eq!(r.err(), Some(ConfigurationError::NonPositiveTimestep));
    }

    #[test]
    fn reset_restores_hanging_line() {
        let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
        let initial = sim.positions().to_vec();
        sim.handle_event(&PointerEvent::press(initial[10]), &mut NoOpStepObserver);
        sim.handle_event(&PointerEvent::moved(Vec2::new(1.0, -0.5)), &mut NoOpStepObserver);
        for _ in 0..20 {
            sim.step(&mut NoOpStepObserver);
        }
        assert_ne!(sim.positions(), &initial[..]);

        sim.reset(&mut NoOpStepObserver).unwrap();
        assert_eq!(sim.positions(), &initial[..]);
        assert_eq!(sim.state().previous(), &initial[..]);
        assert!(!sim.drag().is_dragging());
        assert_eq!(sim.ticks(), 0);
    }

    #[test]
    fn reset_keeps_custom_segment_length() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(0.05, -0.0667), Vec2::new(0.1, -0.13)];
        let state = ChainState::from_positions(positions.clone(), positions, 0.0667).unwrap();
        let config = SimulationConfig::new().with_particle_count(3);
        let mut sim: Simulation<f64> = Simulation::with_state(config, state).unwrap();
        for _ in 0..10 {
            sim.step(&mut NoOpStepObserver);
        }

        sim.reset(&mut NoOpStepObserver).unwrap();
        assert_eq!(sim.state().segment_length(), 0.0667);
        assert_eq!(sim.positions().len(), 3);
        assert_eq!(sim.positions()[2], Vec2::new(0.0, -(2.0 * 0.0667)));

        // The rebuilt line is already at rest length, so it only sags under gravity.
        sim.step(&mut NoOpStepObserver);
        assert!(sim.mean_violation() < 1e-3);
    }

    #[test]
    fn reset_during_drag_reports_drag_end() {
        let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
        let mut counter = Counter::default();
        let tip = sim.positions()[29];
        sim.handle_event(&PointerEvent::press(tip), &mut counter);
        sim.reset(&mut counter).unwrap();
        assert_eq!(counter.released, Some(29));

        // Nothing left to end; a later release stays silent.
        counter.released = None;
        sim.handle_event(&PointerEvent::Release, &mut counter);
        assert_eq!(counter.released, None);
    }

    #[test]
    fn reset_while_idle_reports_nothing() {
        let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
        let mut counter = Counter::default();
        sim.reset(&mut counter).unwrap();
        assert_eq!(counter.released, None);
    }
}
