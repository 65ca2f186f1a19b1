/// All game entity types — pure data, no logic.

// ── Reference geometry ────────────────────────────────────────────────────────

/// Side length of the square reference space every coordinate lives in.
pub const FIELD_SIZE: i32 = 700;

/// Centre of the target (and starting point of the sight).
pub const TARGET_CENTER: Position = Position { x: FIELD_SIZE / 2, y: FIELD_SIZE / 2 };

/// Inclusive bounds the sight is clamped to on both axes.
pub const MIN_POSITION: i32 = 40;
pub const MAX_POSITION: i32 = 660;

pub const RING_COUNT: i32 = 10;
pub const INNER_RING_RADIUS: i32 = 30;
pub const RING_WIDTH: i32 = 30;

// ── Rules ─────────────────────────────────────────────────────────────────────

pub const STARTING_ATTEMPTS: u32 = 12;

/// Reference units moved per profile step before the multiplier is applied.
pub const MOVE_DISTANCE: i32 = 2;

/// Multipliers applied over the consecutive steps of one key-press glide.
pub const ACCELERATION_PROFILE: [i32; 5] = [1, 2, 4, 2, 1];

/// Maximum scatter of a shot away from the sight, on each axis.
pub const MAX_DEVIATION: i32 = 10;

// ── Phases & directions ───────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementDirection {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Logical keys understood by the controller.  Space starts the game and
/// then fires; arrows move the sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// The movement this key requests, if it is a directional key.
    pub fn direction(self) -> Option<MovementDirection> {
        match self {
            Key::Up => Some(MovementDirection::Up),
            Key::Down => Some(MovementDirection::Down),
            Key::Left => Some(MovementDirection::Left),
            Key::Right => Some(MovementDirection::Right),
            Key::Space => None,
        }
    }
}

// ── Coordinates ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Exact squared distance; ring membership is decided on this.
    pub fn distance_squared_to(&self, other: Position) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

/// Where a fired shot landed: the sight plus random scatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotRecord {
    pub x: i32,
    pub y: i32,
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreState {
    pub attempts_remaining: u32,
    pub total_score: u32,
    /// Score of the most recent shot (0 before the first one).
    pub last_shot_score: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            attempts_remaining: STARTING_ATTEMPTS,
            total_score: 0,
            last_shot_score: 0,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub sight: Position,
    /// Oldest first.
    pub bullet_holes: Vec<ShotRecord>,
    pub score: ScoreState,
    pub last_direction: MovementDirection,
}

/// Read-only view handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub sight: Position,
    pub bullet_holes: Vec<ShotRecord>,
    pub attempts_remaining: u32,
    pub total_score: u32,
    pub last_shot_score: u32,
    pub status_text: String,
}
