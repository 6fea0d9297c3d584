//! Circuit-board background pattern: a fixed grid with sparse node markers
//! and light pulses travelling along the grid lines.
//!
//! Everything here is plain arithmetic over in-memory state, so the module
//! compiles and tests on any target. The wasm renderer only reads the state
//! left behind by [`PatternState::step`] and turns it into canvas calls.

use rand::Rng;

/// Grid spacing in surface units.
pub const CELL: f64 = 50.0;
/// Radius of the small intersection dots.
pub const NODE_RADIUS: f64 = 2.2;
/// Radius of the highlighted ring markers.
pub const RING_RADIUS: f64 = NODE_RADIUS + 2.0;
/// Hard cap on simultaneously active pulses.
pub const MAX_PULSES: usize = 15;
/// A spawn is attempted once every this many frames (~0.8s at 60fps).
pub const SPAWN_INTERVAL: u64 = 50;
/// Pulses launched immediately at startup.
pub const INITIAL_PULSES: usize = 5;

const SPEED_MIN: f64 = 1.5;
const SPEED_MAX: f64 = 3.0;
const LEN_MIN: f64 = 60.0;
const LEN_MAX: f64 = 140.0;

/// Surface dimensions plus the derived grid-line counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub width: f64,
    pub height: f64,
    pub cols: u32,
    pub rows: u32,
}

impl Grid {
    /// Derives `cols`/`rows` from the surface size. Both are always >= 1,
    /// even for a zero-sized surface.
    pub fn new(width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        Self {
            width,
            height,
            cols: (width / CELL).ceil() as u32 + 1,
            rows: (height / CELL).ceil() as u32 + 1,
        }
    }
}

/// Small dot at intersection `(c, r)`: one in three, diagonal stripes.
pub fn node_at(c: u32, r: u32) -> bool {
    (c + r) % 3 == 0
}

/// Highlight ring at intersection `(c, r)`. Independent of [`node_at`].
pub fn ring_at(c: u32, r: u32) -> bool {
    (3 * c + 7 * r) % 17 == 0
}

/// A light pulse running along one grid line. Exactly one of `dx`/`dy` is
/// non-zero; the trail fades out over `len` units behind the head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub len: f64,
}

impl Pulse {
    fn spawn<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let speed = rng.gen_range(SPEED_MIN..SPEED_MAX);
        let len = rng.gen_range(LEN_MIN..LEN_MAX);
        if rng.gen_bool(0.5) {
            // Horizontal: enters at the left edge on a random row line.
            Self {
                x: 0.0,
                y: f64::from(rng.gen_range(0..grid.rows)) * CELL,
                dx: speed,
                dy: 0.0,
                len,
            }
        } else {
            Self {
                x: f64::from(rng.gen_range(0..grid.cols)) * CELL,
                y: 0.0,
                dx: 0.0,
                dy: speed,
                len,
            }
        }
    }

    /// Moves the head one frame forward.
    pub fn advance(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }

    /// Tail end of the fading trail.
    pub fn tail(&self) -> (f64, f64) {
        (self.x - self.dx * self.len, self.y - self.dy * self.len)
    }

    /// True once the head has cleared the surface by more than the trail
    /// length, i.e. nothing of the pulse is visible any more.
    pub fn is_offscreen(&self, grid: &Grid) -> bool {
        self.x > grid.width + self.len || self.y > grid.height + self.len
    }
}

/// Exclusive owner of the animated pattern: grid dimensions, the active
/// pulse set and the frame counter driving the spawn cadence.
#[derive(Debug)]
pub struct PatternState {
    grid: Grid,
    pulses: Vec<Pulse>,
    frame: u64,
}

impl PatternState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            grid: Grid::new(width, height),
            pulses: Vec::new(),
            frame: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Adopts the new viewport size. Takes effect on the next `step`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.grid = Grid::new(width, height);
    }

    /// Launches the startup burst. Not subject to the pulse cap.
    pub fn seed<R: Rng>(&mut self, rng: &mut R) {
        for _ in 0..INITIAL_PULSES {
            self.spawn_pulse(rng);
        }
    }

    /// Appends one pulse unconditionally; callers enforce [`MAX_PULSES`].
    pub fn spawn_pulse<R: Rng>(&mut self, rng: &mut R) {
        let pulse = Pulse::spawn(&self.grid, rng);
        self.pulses.push(pulse);
    }

    /// Advances one frame: moves every pulse, drops the ones that left the
    /// surface, bumps the frame counter and spawns on the cadence while the
    /// active set is under the cap.
    pub fn step<R: Rng>(&mut self, rng: &mut R) {
        let grid = self.grid;
        self.pulses.retain_mut(|pulse| {
            pulse.advance();
            !pulse.is_offscreen(&grid)
        });
        self.frame += 1;
        if self.frame % SPAWN_INTERVAL == 0 && self.pulses.len() < MAX_PULSES {
            self.spawn_pulse(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(0x5eed)
    }

    #[test]
    fn grid_line_counts_follow_viewport() {
        let grid = Grid::new(1024.0, 600.0);
        assert_eq!(grid.cols, 22);
        assert_eq!(grid.rows, 13);

        let grid = Grid::new(800.0, 600.0);
        assert_eq!(grid.cols, 17);
        assert_eq!(grid.rows, 13);

        // Exact multiples do not round up an extra line.
        let grid = Grid::new(100.0, 50.0);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.rows, 2);
    }

    #[test]
    fn zero_sized_surface_keeps_at_least_one_line() {
        let grid = Grid::new(0.0, 0.0);
        assert_eq!(grid.cols, 1);
        assert_eq!(grid.rows, 1);
    }

    #[test]
    fn node_and_ring_markers_are_independent() {
        // Both hold at the origin.
        assert!(node_at(0, 0));
        assert!(ring_at(0, 0));
        // Node without ring.
        assert!(node_at(3, 0));
        assert!(!ring_at(3, 0));
        // Ring without node: 3*9 + 7*1 = 34.
        assert!(!node_at(9, 1));
        assert!(ring_at(9, 1));
        // Neither.
        assert!(!node_at(0, 5));
        assert!(!ring_at(0, 5));

        for c in 0..48 {
            for r in 0..48 {
                assert_eq!(node_at(c, r), (c + r) % 3 == 0, "node at ({c}, {r})");
                assert_eq!(ring_at(c, r), (3 * c + 7 * r) % 17 == 0, "ring at ({c}, {r})");
            }
        }
    }

    #[test]
    fn node_markers_cover_one_third_of_intersections() {
        let hits = (0..30)
            .flat_map(|c| (0..30).map(move |r| (c, r)))
            .filter(|&(c, r)| node_at(c, r))
            .count();
        assert_eq!(hits, 300);
    }

    #[test]
    fn spawned_pulses_stay_within_parameter_ranges() {
        let mut rng = rng();
        let mut state = PatternState::new(800.0, 600.0);
        let mut horizontal = 0;
        for _ in 0..200 {
            state.spawn_pulse(&mut rng);
            let pulse = *state.pulses().last().unwrap();

            let moving = if pulse.dx != 0.0 {
                assert_eq!(pulse.dy, 0.0);
                assert_eq!(pulse.x, 0.0);
                assert_eq!(pulse.y % CELL, 0.0);
                assert!(pulse.y <= f64::from(state.grid().rows - 1) * CELL);
                horizontal += 1;
                pulse.dx
            } else {
                assert_eq!(pulse.y, 0.0);
                assert_eq!(pulse.x % CELL, 0.0);
                assert!(pulse.x <= f64::from(state.grid().cols - 1) * CELL);
                pulse.dy
            };
            assert!((1.5..3.0).contains(&moving), "speed {moving}");
            assert!((60.0..140.0).contains(&pulse.len), "len {}", pulse.len);
        }
        // Axis choice is an even coin; a seeded run lands well inside this.
        assert!((50..150).contains(&horizontal), "horizontal {horizontal}");
    }

    #[test]
    fn pulse_is_dropped_once_the_trail_clears_the_edge() {
        let mut rng = rng();
        let mut state = PatternState::new(800.0, 600.0);

        // Head will advance to 872.0, past width + len = 870.0.
        state.pulses.push(Pulse {
            x: 870.0,
            y: 100.0,
            dx: 2.0,
            dy: 0.0,
            len: 70.0,
        });
        // Head advances to 862.0, still within width + len.
        state.pulses.push(Pulse {
            x: 860.0,
            y: 100.0,
            dx: 2.0,
            dy: 0.0,
            len: 70.0,
        });
        // Vertical mover past height + len after advancing.
        state.pulses.push(Pulse {
            x: 100.0,
            y: 669.0,
            dx: 0.0,
            dy: 2.5,
            len: 70.0,
        });

        state.step(&mut rng);
        assert_eq!(state.pulses().len(), 1);
        assert_eq!(state.pulses()[0].x, 862.0);
    }

    #[test]
    fn startup_burst_spawns_five() {
        let mut rng = rng();
        let mut state = PatternState::new(800.0, 600.0);
        state.seed(&mut rng);
        assert_eq!(state.pulses().len(), INITIAL_PULSES);
    }

    #[test]
    fn tail_sits_len_units_behind_the_head() {
        let pulse = Pulse {
            x: 300.0,
            y: 150.0,
            dx: 2.0,
            dy: 0.0,
            len: 80.0,
        };
        assert_eq!(pulse.tail(), (300.0 - 2.0 * 80.0, 150.0));
    }

    #[test]
    fn zero_sized_surface_still_ticks() {
        let mut rng = rng();
        let mut state = PatternState::new(0.0, 0.0);
        state.seed(&mut rng);
        for _ in 0..200 {
            state.step(&mut rng);
        }
        // Pulses fall off the degenerate surface instead of accumulating.
        assert!(state.pulses().len() <= MAX_PULSES);
    }

    #[test]
    fn resize_applies_before_the_next_step() {
        let mut state = PatternState::new(800.0, 600.0);
        state.resize(1024.0, 768.0);
        assert_eq!(state.grid().cols, 22);
        assert_eq!(state.grid().rows, 17);
        assert_eq!(state.grid().width, 1024.0);
    }
}
