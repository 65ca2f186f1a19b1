/// Stateful front of the game: routes keys into the pure functions in
/// `compute`, paces movement glides and reports to a `Presenter`.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::compute::{fire, init_state, snapshot, start_game, status_text, step_sight, turn};
use crate::entities::{
    GamePhase, GameState, Key, MovementDirection, Snapshot, ACCELERATION_PROFILE,
};

/// Pause between two steps of a glide.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(25);

/// Receives everything the controller wants shown.
pub trait Presenter {
    /// New status-line text, sent after start, after every shot and once on
    /// construction.
    fn status_changed(&mut self, text: &str);

    /// Draw the intermediate state of a glide.  Called once per profile step
    /// before the controller pauses.
    fn checkpoint(&mut self, snapshot: &Snapshot) -> std::io::Result<()>;
}

pub struct GameController<P, R> {
    state: GameState,
    presenter: P,
    rng: R,
    step_delay: Duration,
}

impl<P: Presenter, R: Rng> GameController<P, R> {
    pub fn new(presenter: P, rng: R, step_delay: Duration) -> Self {
        let mut controller = Self {
            state: init_state(),
            presenter,
            rng,
            step_delay,
        };
        controller.publish_status();
        controller
    }

    /// Apply one key press.  Keys that mean nothing in the current phase are
    /// ignored.  Directional keys block for the whole glide.
    pub fn handle_input(&mut self, key: Key) {
        match self.state.phase {
            GamePhase::NotStarted => {
                if key == Key::Space {
                    self.state = start_game(&self.state);
                    info!("game started");
                    self.publish_status();
                }
            }
            GamePhase::Playing => match key.direction() {
                Some(direction) => self.glide(direction),
                None => self.shoot(),
            },
            GamePhase::Finished => {}
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        snapshot(&self.state)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    fn glide(&mut self, direction: MovementDirection) {
        let (state, restarted) = turn(&self.state, direction);
        self.state = state;
        if restarted {
            debug!(?direction, "direction changed, acceleration restarts");
        }

        for &factor in ACCELERATION_PROFILE.iter() {
            self.state = step_sight(&self.state, direction, factor);
            let snap = self.snapshot();
            if let Err(err) = self.presenter.checkpoint(&snap) {
                warn!(%err, "glide checkpoint failed, continuing");
            }
            if !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        }
        debug!(x = self.state.sight.x, y = self.state.sight.y, "sight moved");
    }

    fn shoot(&mut self) {
        if self.state.score.attempts_remaining == 0 {
            return;
        }
        self.state = fire(&self.state, &mut self.rng);
        debug!(
            score = self.state.score.last_shot_score,
            attempts_remaining = self.state.score.attempts_remaining,
            "shot fired"
        );
        if self.state.phase == GamePhase::Finished {
            info!(total = self.state.score.total_score, "game over");
        }
        self.publish_status();
    }

    fn publish_status(&mut self) {
        let text = status_text(&self.state);
        self.presenter.status_changed(&text);
    }
}
