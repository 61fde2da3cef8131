//! Interactive particle chain with position-based dynamics.
//!
//! `linkage` simulates a chain of point masses joined by inextensible links,
//! hanging from particle 0 under gravity. Each tick integrates with Verlet
//! (velocity is implicit in the position history), then relaxes the link
//! lengths with a fixed number of in-place Gauss-Seidel passes. A pointer
//! can grab any particle and drag it around.
//!
//! # Features
//!
//! - **Verlet integration**: no velocity field, `current - previous` is the velocity
//! - **Distance constraints**: fixed-budget, ordered relaxation with an anchored first link
//! - **Dragging**: press/move/release state machine with a grab offset
//! - **Seams**: `InputSource` and `Renderer` traits keep windowing out of the core
//! - **Observable**: Monitor physics steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use linkage::{InputQueue, NullRenderer, NoOpStepObserver, PointerEvent, Simulation, SimulationConfig, Vec2};
//!
//! let mut sim: Simulation<f64> = Simulation::new(SimulationConfig::new()).unwrap();
//! let mut input = InputQueue::new();
//! let tip = sim.positions()[29];
//! input.push(PointerEvent::press(tip));
//! input.push(PointerEvent::moved(Vec2::new(0.8, -1.0)));
//! sim.tick(&mut input, &mut NullRenderer, &mut NoOpStepObserver);
//! assert_eq!(sim.drag().selected(), Some(29));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod state;
pub mod integrator;
pub mod solver;
pub mod drag;
pub mod input;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2};
pub use state::ChainState;
pub use integrator::advance;
pub use solver::{ConstraintSolver, mean_violation};
pub use drag::{DragController, DragState, DragTransition, Pin};
pub use input::{InputQueue, InputSource, NullRenderer, PointerButton, PointerEvent, Renderer};
pub use simulation::Simulation;
pub use config::{AnchorPolicy, SimulationConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ConfigurationError;
