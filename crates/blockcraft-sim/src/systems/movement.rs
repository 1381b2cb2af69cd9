//! Collision-aware walking.
//!
//! The step is resolved one axis at a time (X, then Y from the possibly
//! updated position), so a diagonal move into a wall keeps its free
//! component and slides along the wall.

use glam::DVec2;

use blockcraft_core::constants::COLLIDER_RADIUS;
use blockcraft_core::types::Position;
use blockcraft_world::{sweep_axis, Axis, Grid};

/// Position reached by walking from `from` toward `direction` at `speed`
/// tiles per second for `dt` seconds.
pub fn walk(grid: &Grid, from: Position, direction: DVec2, speed: f64, dt: f64) -> Position {
    if direction == DVec2::ZERO || !direction.is_finite() || !dt.is_finite() || dt <= 0.0 {
        return from;
    }

    let step = direction.normalize() * speed * dt;

    let x = sweep_axis(grid, from, Axis::X, step.x, COLLIDER_RADIUS);
    let y = sweep_axis(grid, DVec2::new(x, from.y), Axis::Y, step.y, COLLIDER_RADIUS);
    DVec2::new(x, y)
}
