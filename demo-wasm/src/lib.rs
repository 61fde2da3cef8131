use linkage::{
    InputQueue, NoOpStepObserver, PointerButton, PointerEvent, Renderer, Simulation,
    SimulationConfig, Vec2,
};
use wasm_bindgen::prelude::*;

/// Flattens each committed frame into `[x0, y0, x1, y1, ...]` for the canvas.
struct FlatFrame(Vec<f32>);

impl Renderer<Vec2<f32>> for FlatFrame {
    fn draw(&mut self, positions: &[Vec2<f32>]) {
        self.0.clear();
        for p in positions {
            self.0.push(p.x);
            self.0.push(p.y);
        }
    }
}

// ---- Chain Demo ----

#[wasm_bindgen]
pub struct ChainDemo {
    sim: Simulation<f32>,
    input: InputQueue<Vec2<f32>>,
    frame: FlatFrame,
}

#[wasm_bindgen]
impl ChainDemo {
    /// Throws if the parameters are rejected (fewer than 2 particles,
    /// non-finite gravity).
    #[wasm_bindgen(constructor)]
    pub fn new(particles: usize, gravity: f32) -> Result<ChainDemo, JsError> {
        let config = SimulationConfig::new()
            .with_particle_count(particles)
            .with_gravity(gravity);
        let sim = Simulation::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        let mut frame = FlatFrame(Vec::new());
        frame.draw(sim.positions());
        Ok(ChainDemo { sim, input: InputQueue::new(), frame })
    }

    /// `button` follows the DOM convention: 0 primary, 1 middle, 2 secondary.
    pub fn press(&mut self, x: f32, y: f32, button: u16, in_bounds: bool) {
        let button = match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Middle,
            _ => PointerButton::Secondary,
        };
        self.input.push(PointerEvent::Press { at: Vec2::new(x, y), button, in_bounds });
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, in_bounds: bool) {
        self.input.push(PointerEvent::Move { at: Vec2::new(x, y), in_bounds });
    }

    pub fn release(&mut self) {
        self.input.push(PointerEvent::Release);
    }

    /// Advance one tick; call at the configured timestep cadence.
    pub fn update(&mut self) {
        self.sim.tick(&mut self.input, &mut self.frame, &mut NoOpStepObserver);
    }

    pub fn reset(&mut self) {
        if self.sim.reset(&mut NoOpStepObserver).is_ok() {
            self.frame.draw(self.sim.positions());
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        self.frame.0.clone()
    }

    /// Index of the held particle, or -1.
    pub fn selected(&self) -> i32 {
        self.sim.drag().selected().map_or(-1, |i| i as i32)
    }

    /// Seconds per tick, for scheduling `update`.
    pub fn timestep(&self) -> f32 {
        self.sim.config().timestep
    }

    pub fn particle_count(&self) -> usize {
        self.sim.positions().len()
    }
}
