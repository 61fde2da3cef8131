//! Startup configuration for the chain simulation.

use crate::error::ConfigurationError;
use crate::float::Float;

/// How the solver treats particle 0 while some particle is being dragged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Particle 0 stays an immovable pivot unless it is the one grabbed.
    #[default]
    HoldUnlessGrabbed,
    /// Any drag turns the anchor into an ordinary particle for the solver,
    /// so pulling hard on the chain can drag the top loose.
    ReleaseWhileDragging,
}

/// Configuration for the chain and its solver, fixed at startup.
///
/// # Builder Pattern
/// ```
/// use linkage::config::SimulationConfig;
///
/// let config: SimulationConfig<f64> = SimulationConfig::new()
///     .with_particle_count(20)
///     .with_gravity(4.0)
///     .with_constraint_iterations(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<F: Float> {
    /// Number of particles N. Default: 30.
    pub particle_count: usize,
    /// Gravity magnitude, acting along -y. Default: 9.81.
    pub gravity: F,
    /// Rest length of the whole chain. Default: 2.0.
    pub total_length: F,
    /// Seconds advanced per tick. Default: 0.01.
    pub timestep: F,
    /// Gauss-Seidel passes per tick. Default: 10.
    pub constraint_iterations: usize,
    /// A press grabs the nearest particle only if strictly closer than this. Default: 0.1.
    pub selection_threshold: F,
    /// Anchor handling during drags. Default: [`AnchorPolicy::HoldUnlessGrabbed`].
    pub anchor_policy: AnchorPolicy,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            particle_count: 30,
            gravity: F::from_f64(9.81),
            total_length: F::from_f64(2.0),
            timestep: F::from_f64(0.01),
            constraint_iterations: 10,
            selection_threshold: F::from_f64(0.1),
            anchor_policy: AnchorPolicy::default(),
        }
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the gravity magnitude.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the rest length of the whole chain.
    pub fn with_total_length(mut self, length: F) -> Self {
        self.total_length = length;
        self
    }

    /// Set the timestep per tick.
    pub fn with_timestep(mut self, dt: F) -> Self {
        self.timestep = dt;
        self
    }

    /// Set the number of relaxation passes per tick.
    pub fn with_constraint_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    /// Set the grab distance for presses.
    pub fn with_selection_threshold(mut self, threshold: F) -> Self {
        self.selection_threshold = threshold;
        self
    }

    /// Set how the anchor behaves during drags.
    pub fn with_anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.anchor_policy = policy;
        self
    }

    /// Check the invariants the solver divides by or integrates with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.particle_count < 2 {
            return Err(ConfigurationError::TooFewParticles { count: self.particle_count });
        }
        // NaN fails every comparison, so test for "not positive" explicitly.
        if !(self.timestep > F::zero()) || !self.timestep.is_finite() {
            return Err(ConfigurationError::NonPositiveTimestep);
        }
        if !(self.total_length > F::zero()) || !self.total_length.is_finite() {
            return Err(ConfigurationError::NonPositiveLength);
        }
        if !(self.selection_threshold > F::zero()) || !self.selection_threshold.is_finite() {
            return Err(ConfigurationError::NonPositiveThreshold);
        }
        if !self.gravity.is_finite() {
            return Err(ConfigurationError::NonFiniteGravity);
        }
        Ok(())
    }

    /// Rest distance between neighbours: `total_length / (N - 1)`.
    ///
    /// Only meaningful once [`validate`](Self::validate) has passed.
    pub fn segment_length(&self) -> F {
        self.total_length / F::from_usize(self.particle_count - 1)
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
