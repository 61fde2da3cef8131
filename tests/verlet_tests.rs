use linkage::{advance, ChainState, Pin, Vec2};
use linkage::Vec as _;

#[test]
fn zero_gravity_leaves_resting_chain_in_place() {
    let state: ChainState<Vec2<f64>> = ChainState::hanging(30, 2.0).unwrap();
    let tentative = advance(state.current(), state.previous(), Vec2::zero(), 0.01, None);
    assert_eq!(tentative, state.current());
}

#[test]
fn zero_timestep_leaves_resting_chain_in_place() {
    let state: ChainState<Vec2<f64>> = ChainState::hanging(30, 2.0).unwrap();
    let tentative = advance(state.current(), state.previous(), Vec2::down(9.81), 0.0, None);
    assert_eq!(tentative, state.current());
}

#[test]
fn one_step_of_free_fall_matches_formula() {
    let state: ChainState<Vec2<f64>> = ChainState::hanging(3, 2.0).unwrap();
    let g = Vec2::down(9.81);
    let dt = 0.01;
    let tentative = advance(state.current(), state.previous(), g, dt, None);

    assert_eq!(tentative[0], state.current()[0]);
    for i in 1..3 {
        let expected = state.current()[i].scale(2.0) - state.previous()[i] + g.scale(dt * dt);
        assert_eq!(tentative[i], expected);
    }
}

#[test]
fn output_length_matches_input() {
    let state: ChainState<Vec2<f32>> = ChainState::hanging(11, 1.0).unwrap();
    let pin = Pin { index: 4, target: Vec2::new(0.3, -0.3) };
    let tentative = advance(state.current(), state.previous(), Vec2::down(9.81), 0.01, Some(pin));
    assert_eq!(tentative.len(), 11);
    assert_eq!(tentative[4], pin.target);
}

#[test]
fn moving_particle_keeps_momentum_without_gravity() {
    let current = vec![Vec2::new(0.0f64, 0.0), Vec2::new(0.5, -1.0), Vec2::new(1.0, -2.0)];
    let previous = vec![Vec2::new(0.0f64, 0.0), Vec2::new(0.25, -1.0), Vec2::new(1.0, -1.5)];
    let tentative = advance(&current, &previous, Vec2::zero(), 0.01, None);
    assert_eq!(tentative[1], Vec2::new(0.75, -1.0));
    assert_eq!(tentative[2], Vec2::new(1.0, -2.5));
}
