/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    GamePhase, GameState, MovementDirection, Position, ScoreState, ShotRecord, Snapshot,
    INNER_RING_RADIUS, MAX_DEVIATION, MAX_POSITION, MIN_POSITION, MOVE_DISTANCE, RING_COUNT,
    RING_WIDTH, TARGET_CENTER,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh game: waiting for Space, sight on the bullseye, full magazine.
pub fn init_state() -> GameState {
    GameState {
        phase: GamePhase::NotStarted,
        sight: TARGET_CENTER,
        bullet_holes: Vec::new(),
        score: ScoreState::default(),
        last_direction: MovementDirection::None,
    }
}

// ── Phase transitions ────────────────────────────────────────────────────────

pub fn start_game(state: &GameState) -> GameState {
    if state.phase != GamePhase::NotStarted {
        return state.clone();
    }
    GameState {
        phase: GamePhase::Playing,
        ..state.clone()
    }
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Signed per-step delta `(dx, dy)` for a direction; screen y grows downward.
pub fn unit_delta(direction: MovementDirection) -> (i32, i32) {
    match direction {
        MovementDirection::Up => (0, -MOVE_DISTANCE),
        MovementDirection::Down => (0, MOVE_DISTANCE),
        MovementDirection::Left => (-MOVE_DISTANCE, 0),
        MovementDirection::Right => (MOVE_DISTANCE, 0),
        MovementDirection::None => (0, 0),
    }
}

pub fn clamp_axis(value: i32) -> i32 {
    value.clamp(MIN_POSITION, MAX_POSITION)
}

/// Record the direction of a new glide.  Returns `true` when it differs from
/// the previous one, meaning the acceleration profile restarts.
pub fn turn(state: &GameState, direction: MovementDirection) -> (GameState, bool) {
    if state.last_direction == direction {
        return (state.clone(), false);
    }
    (
        GameState {
            last_direction: direction,
            ..state.clone()
        },
        true,
    )
}

/// Advance the sight by one profile step, clamped into the playable square.
pub fn step_sight(state: &GameState, direction: MovementDirection, factor: i32) -> GameState {
    let (dx, dy) = unit_delta(direction);
    GameState {
        sight: Position {
            x: clamp_axis(state.sight.x + dx * factor),
            y: clamp_axis(state.sight.y + dy * factor),
        },
        ..state.clone()
    }
}

// ── Scoring ──────────────────────────────────────────────────────────────────

/// Radius of ring `index`, counted outward from the bullseye.
pub fn ring_radius(index: i32) -> i32 {
    INNER_RING_RADIUS + index * RING_WIDTH
}

/// Score for an aim point: 10 inside the bullseye, one less per ring
/// outward, 0 past the outermost ring.  Ring borders count as inside.
pub fn score_at(aim: Position) -> u32 {
    let distance_sq = aim.distance_squared_to(TARGET_CENTER);
    (0..RING_COUNT)
        .find(|&i| distance_sq <= i64::from(ring_radius(i)).pow(2))
        .map(|i| (RING_COUNT - i) as u32)
        .unwrap_or(0)
}

/// Fire one shot.  The hole lands at the sight plus scatter from `rng`, but
/// the score is taken from the sight itself.  No-op unless playing with
/// attempts left.
pub fn fire(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.phase != GamePhase::Playing || state.score.attempts_remaining == 0 {
        return state.clone();
    }

    let deviation_x = rng.gen_range(-MAX_DEVIATION..=MAX_DEVIATION);
    let deviation_y = rng.gen_range(-MAX_DEVIATION..=MAX_DEVIATION);
    let mut bullet_holes = state.bullet_holes.clone();
    bullet_holes.push(ShotRecord {
        x: state.sight.x + deviation_x,
        y: state.sight.y + deviation_y,
    });

    let shot = score_at(state.sight);
    let attempts_remaining = state.score.attempts_remaining - 1;
    let phase = if attempts_remaining == 0 {
        GamePhase::Finished
    } else {
        GamePhase::Playing
    };

    GameState {
        phase,
        bullet_holes,
        score: ScoreState {
            attempts_remaining,
            total_score: state.score.total_score + shot,
            last_shot_score: shot,
        },
        ..state.clone()
    }
}

// ── Presentation views ───────────────────────────────────────────────────────

pub fn status_text(state: &GameState) -> String {
    match state.phase {
        GamePhase::NotStarted => "Press the SPACE bar to start the game".to_string(),
        GamePhase::Playing => format!(
            "Bullets left: {}, your score: {} ({})",
            state.score.attempts_remaining, state.score.total_score, state.score.last_shot_score
        ),
        GamePhase::Finished => format!("Game over, your score: {}", state.score.total_score),
    }
}

pub fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        phase: state.phase,
        sight: state.sight,
        bullet_holes: state.bullet_holes.clone(),
        attempts_remaining: state.score.attempts_remaining,
        total_score: state.score.total_score,
        last_shot_score: state.score.last_shot_score,
        status_text: status_text(state),
    }
}
