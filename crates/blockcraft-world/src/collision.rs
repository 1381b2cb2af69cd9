//! Axis-aligned collider tests against the tile grid.
//!
//! A collider is a square of half-width `radius` centred on a continuous
//! position. It covers the inclusive tile range `[floor(p - r), floor(p + r)]`
//! on each axis, and collides if any covered tile is solid. Tiles outside the
//! grid read as Stone and therefore always collide.

use std::ops::RangeInclusive;

use glam::DVec2;

use crate::grid::Grid;

/// Gap left between a collider and the face it stops against, so that the
/// floor-based coverage test does not count the blocking tile as covered.
const CONTACT_GAP: f64 = 1e-9;

/// Movement axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn get(self, v: DVec2) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    fn with(self, v: DVec2, value: f64) -> DVec2 {
        match self {
            Axis::X => DVec2::new(value, v.y),
            Axis::Y => DVec2::new(v.x, value),
        }
    }

    fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Tile indices covered by a collider spanning `[center - radius, center + radius]`.
fn covered(center: f64, radius: f64) -> RangeInclusive<i32> {
    (center - radius).floor() as i32..=(center + radius).floor() as i32
}

/// Whether a collider at `center` overlaps any solid tile.
pub fn collider_overlaps_solid(grid: &Grid, center: DVec2, radius: f64) -> bool {
    covered(center.y, radius)
        .any(|ty| covered(center.x, radius).any(|tx| grid.get(tx, ty).is_solid()))
}

/// Whether any tile in line `line` along `axis` is solid within `span` on
/// the other axis.
fn line_blocked(grid: &Grid, axis: Axis, line: i32, span: RangeInclusive<i32>) -> bool {
    span.into_iter().any(|t| {
        let tile = match axis {
            Axis::X => grid.get(line, t),
            Axis::Y => grid.get(t, line),
        };
        tile.is_solid()
    })
}

/// Move a collider along one axis by `delta` and return its new coordinate
/// on that axis.
///
/// Every tile line the leading edge crosses on the way is checked, so a long
/// step cannot pass through a thin wall. The collider advances until it
/// touches the first solid line in its path, or takes the full move if the
/// path is clear. A collider that already overlaps solid ground stays where
/// it is.
pub fn sweep_axis(grid: &Grid, pos: DVec2, axis: Axis, delta: f64, radius: f64) -> f64 {
    let current = axis.get(pos);
    if delta == 0.0 || !delta.is_finite() {
        return current;
    }

    let target = current + delta;
    let span = covered(axis.other().get(pos), radius);
    // Coordinates far outside the i32 tile range saturate at the edge lines.
    let contact = if delta > 0.0 {
        let first = ((current + radius).floor() as i32).saturating_add(1);
        let last = (target + radius).floor() as i32;
        (first..=last)
            .find(|line| line_blocked(grid, axis, *line, span.clone()))
            .map(|line| (line as f64 - radius - CONTACT_GAP).max(current))
    } else {
        let first = ((current - radius).floor() as i32).saturating_sub(1);
        let last = (target - radius).floor() as i32;
        (last..=first)
            .rev()
            .find(|line| line_blocked(grid, axis, *line, span.clone()))
            .map(|line| (line as f64 + 1.0 + radius + CONTACT_GAP).min(current))
    };

    let next = contact.unwrap_or(target);
    if collider_overlaps_solid(grid, axis.with(pos, next), radius) {
        current
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_core::constants::COLLIDER_RADIUS;
    use blockcraft_core::tile::TileKind;

    /// 10×10 solid stone with a single air pocket at (5, 5).
    fn pocket_grid() -> Grid {
        let mut grid = Grid::new(10, 10);
        grid.fill(TileKind::Stone);
        grid.set(5, 5, TileKind::Air);
        grid
    }

    #[test]
    fn test_centered_collider_in_pocket_is_clear() {
        let grid = pocket_grid();
        assert!(!collider_overlaps_solid(
            &grid,
            DVec2::new(5.5, 5.5),
            COLLIDER_RADIUS
        ));
        assert!(collider_overlaps_solid(
            &grid,
            DVec2::new(5.9, 5.5),
            COLLIDER_RADIUS
        ));
    }

    #[test]
    fn test_outside_grid_collides() {
        let grid = Grid::new(4, 4);
        assert!(!collider_overlaps_solid(&grid, DVec2::new(0.5, 0.5), 0.28));
        assert!(collider_overlaps_solid(&grid, DVec2::new(0.1, 0.5), 0.28));
        assert!(collider_overlaps_solid(&grid, DVec2::new(3.9, 3.5), 0.28));
    }

    #[test]
    fn test_sweep_blocked_east_stops_at_face() {
        let grid = pocket_grid();
        let start = DVec2::new(5.5, 5.5);
        let x = sweep_axis(&grid, start, Axis::X, 2.0, COLLIDER_RADIUS);
        assert!(x <= 6.0 - COLLIDER_RADIUS, "overlapped the wall: {x}");
        assert!(x > 6.0 - COLLIDER_RADIUS - 1e-6, "stopped short: {x}");
        assert!(!collider_overlaps_solid(
            &grid,
            DVec2::new(x, 5.5),
            COLLIDER_RADIUS
        ));
    }

    #[test]
    fn test_sweep_blocked_west_and_north() {
        let grid = pocket_grid();
        let start = DVec2::new(5.5, 5.5);
        let x = sweep_axis(&grid, start, Axis::X, -3.0, COLLIDER_RADIUS);
        assert!(x >= 5.0 + COLLIDER_RADIUS);
        assert!(x < 5.0 + COLLIDER_RADIUS + 1e-6);
        let y = sweep_axis(&grid, start, Axis::Y, -0.5, COLLIDER_RADIUS);
        assert!(y >= 5.0 + COLLIDER_RADIUS);
        assert!(!collider_overlaps_solid(
            &grid,
            DVec2::new(5.5, y),
            COLLIDER_RADIUS
        ));
    }

    #[test]
    fn test_sweep_free_move_is_exact() {
        let grid = Grid::new(20, 20);
        let x = sweep_axis(&grid, DVec2::new(5.5, 5.5), Axis::X, 1.25, 0.28);
        assert_eq!(x, 6.75);
    }

    #[test]
    fn test_sweep_stops_at_isolated_tile() {
        let mut grid = Grid::new(20, 20);
        grid.set(8, 5, TileKind::Planks);
        let x = sweep_axis(&grid, DVec2::new(7.5, 5.5), Axis::X, 0.5, 0.28);
        assert!(x < 8.0 - 0.28 && x > 7.5);
        // Passing beside the tile is unaffected.
        let x = sweep_axis(&grid, DVec2::new(7.5, 6.5), Axis::X, 0.5, 0.28);
        assert_eq!(x, 8.0);
    }

    #[test]
    fn test_long_step_cannot_pass_isolated_tile() {
        let mut grid = Grid::new(20, 20);
        grid.set(8, 5, TileKind::Planks);

        // Two tiles east: the target cell (9, 5) is open, the tile between is not.
        let x = sweep_axis(&grid, DVec2::new(7.5, 5.5), Axis::X, 2.0, COLLIDER_RADIUS);
        assert!(x < 8.0 - COLLIDER_RADIUS, "passed through the wall: {x}");
        assert!(x > 8.0 - COLLIDER_RADIUS - 1e-6);

        let x = sweep_axis(&grid, DVec2::new(9.5, 5.5), Axis::X, -2.0, COLLIDER_RADIUS);
        assert!(x > 9.0 + COLLIDER_RADIUS, "passed through the wall: {x}");
        assert!(x < 9.0 + COLLIDER_RADIUS + 1e-6);

        let y = sweep_axis(&grid, DVec2::new(8.5, 3.5), Axis::Y, 5.0, COLLIDER_RADIUS);
        assert!(y < 5.0 - COLLIDER_RADIUS, "passed through the wall: {y}");
    }

    #[test]
    fn test_far_out_collider_stays_put() {
        let grid = Grid::new(3, 2);
        for x in [3.0e9, -3.0e9, 1.0e300, -1.0e300] {
            let pos = DVec2::new(x, 0.5);
            assert_eq!(sweep_axis(&grid, pos, Axis::X, 0.25, COLLIDER_RADIUS), x);
            assert_eq!(sweep_axis(&grid, pos, Axis::X, -0.25, COLLIDER_RADIUS), x);
            assert_eq!(sweep_axis(&grid, pos, Axis::Y, 0.25, COLLIDER_RADIUS), 0.5);
            assert!(collider_overlaps_solid(&grid, pos, COLLIDER_RADIUS));
        }
    }

    #[test]
    fn test_sweep_zero_and_non_finite_delta() {
        let grid = Grid::new(8, 8);
        let pos = DVec2::new(3.5, 3.5);
        assert_eq!(sweep_axis(&grid, pos, Axis::Y, 0.0, 0.28), 3.5);
        assert_eq!(sweep_axis(&grid, pos, Axis::Y, f64::NAN, 0.28), 3.5);
        assert_eq!(sweep_axis(&grid, pos, Axis::X, f64::INFINITY, 0.28), 3.5);
    }

    #[test]
    fn test_embedded_collider_stays_put() {
        let mut grid = Grid::new(8, 8);
        grid.set(3, 3, TileKind::Stone);
        let pos = DVec2::new(3.5, 3.5);
        assert_eq!(sweep_axis(&grid, pos, Axis::X, 0.1, 0.28), 3.5);
    }
}
