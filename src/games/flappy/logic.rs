//! Flappy bird round logic: flap input, the fixed-step tick, and collision.

use super::types::{
    Bird, FlappyGame, Pipe, BIRD_RADIUS, BIRD_X, FLAP_IMPULSE, GRAVITY, PIPE_GAP,
    PIPE_SPAWN_INTERVAL, PIPE_SPEED, PIPE_WIDTH, PLAY_HEIGHT,
};
use rand::Rng;

/// Apply a flap. From idle (fresh or just crashed) this restarts the round;
/// while running it overwrites the bird's velocity with the flap impulse.
/// Last impulse wins, impulses never stack.
pub fn flap(game: &mut FlappyGame) {
    if game.running {
        game.bird.velocity = FLAP_IMPULSE;
    } else {
        game.restart();
    }
}

/// Advance the session by one fixed step. Returns true when display state
/// changed; an idle session returns false and stays untouched.
///
/// Order within a tick: gravity, move bird, spawn, count the frame, scroll
/// and score pipes, drop off-screen pipes, collide. Scoring and collision
/// are evaluated independently, so a pipe can score and end the round on
/// the same tick with both effects standing.
pub fn tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> bool {
    if !game.running {
        return false;
    }

    game.bird.velocity += GRAVITY;
    game.bird.y += game.bird.velocity;

    if game.frame_count % PIPE_SPAWN_INTERVAL == 0 {
        game.spawn_pipe(rng);
    }
    game.frame_count += 1;

    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED;
        // Trailing edge strictly past the bird's x scores, exactly once.
        if !pipe.scored && pipe.x + PIPE_WIDTH < BIRD_X {
            pipe.scored = true;
            game.score += 1;
        }
    }

    game.pipes.retain(|pipe| pipe.x + PIPE_WIDTH > 0.0);

    if out_of_bounds(&game.bird) || game.pipes.iter().any(|pipe| hits_pipe(&game.bird, pipe)) {
        game.running = false;
        game.game_over = true;
    }

    true
}

/// Bird escaped the vertical bounds of the play area.
fn out_of_bounds(bird: &Bird) -> bool {
    bird.y + BIRD_RADIUS > PLAY_HEIGHT || bird.y - BIRD_RADIUS < 0.0
}

/// Circle-vs-rectangle-halves test. A pipe is only a hazard inside its
/// horizontal span, and only when the bird's circle pokes above the gap top
/// or below the gap bottom.
fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_horizontally =
        BIRD_X + BIRD_RADIUS > pipe.x && BIRD_X - BIRD_RADIUS < pipe.x + PIPE_WIDTH;
    let outside_gap = bird.y - BIRD_RADIUS < pipe.gap_top
        || bird.y + BIRD_RADIUS > pipe.gap_top + PIPE_GAP;
    overlaps_horizontally && outside_gap
}
