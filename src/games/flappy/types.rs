//! Flappy bird data structures and world constants.
//!
//! The world is a fixed 400x300 float-coordinate play area with y growing
//! downward. All motion constants are per-tick deltas; the simulation is
//! fixed-step and never scales by wall-clock time.

use rand::Rng;

/// Play area dimensions in world units.
pub const PLAY_WIDTH: f64 = 400.0;
pub const PLAY_HEIGHT: f64 = 300.0;

/// The bird's fixed horizontal position.
pub const BIRD_X: f64 = 80.0;

/// Radius of the bird's circular hit region.
pub const BIRD_RADIUS: f64 = 10.0;

/// Velocity change per tick (positive = downward).
pub const GRAVITY: f64 = 0.5;

/// Velocity a flap sets directly (negative = upward). Overwrites, never
/// accumulates.
pub const FLAP_IMPULSE: f64 = -8.0;

/// Pipe geometry and scroll speed.
pub const PIPE_WIDTH: f64 = 40.0;
pub const PIPE_GAP: f64 = 100.0;
pub const PIPE_SPEED: f64 = 2.0;

/// A new pipe spawns every this many ticks. The cadence check runs before
/// the frame counter increments, so a fresh round spawns a pipe on its very
/// first tick.
pub const PIPE_SPAWN_INTERVAL: u64 = 90;

/// Minimum clearance between a pipe's gap and the play area edges.
pub const GAP_MARGIN: f64 = 20.0;

/// The player-controlled bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub y: f64,
    pub velocity: f64,
}

/// One scrolling obstacle pair: solid above `gap_top` and below
/// `gap_top + PIPE_GAP`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge in world units. Decreases every tick.
    pub x: f64,
    /// Top of the passable gap.
    pub gap_top: f64,
    /// Set when the bird passes the trailing edge; each pipe scores at most
    /// once.
    pub scored: bool,
}

/// State for one flappy session. Owned by the shell, mutated only by the
/// tick and input functions on the one UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct FlappyGame {
    /// Physics active. False both before the first flap and after a crash.
    pub running: bool,
    /// Set on crash. Distinguishes "not started yet" from "round over" for
    /// the status display; the next flap clears it.
    pub game_over: bool,
    pub bird: Bird,
    /// Active pipes in spawn order (oldest, leftmost first).
    pub pipes: Vec<Pipe>,
    pub frame_count: u64,
    pub score: u32,
}

impl FlappyGame {
    /// A fresh idle session: bird centered, no pipes, nothing running.
    pub fn new() -> Self {
        Self {
            running: false,
            game_over: false,
            bird: Bird {
                y: PLAY_HEIGHT / 2.0,
                velocity: 0.0,
            },
            pipes: Vec::new(),
            frame_count: 0,
            score: 0,
        }
    }

    /// Reset the whole session atomically and start running: bird back to
    /// center with zero velocity, pipes cleared, counters zeroed.
    pub fn restart(&mut self) {
        self.bird.y = PLAY_HEIGHT / 2.0;
        self.bird.velocity = 0.0;
        self.pipes.clear();
        self.frame_count = 0;
        self.score = 0;
        self.game_over = false;
        self.running = true;
    }

    /// Spawn a pipe at the right edge with a uniformly random gap, clamped
    /// so the gap keeps `GAP_MARGIN` clearance top and bottom.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let gap_top = rng.gen_range(GAP_MARGIN..=PLAY_HEIGHT - PIPE_GAP - GAP_MARGIN);
        self.pipes.push(Pipe {
            x: PLAY_WIDTH,
            gap_top,
            scored: false,
        });
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}
