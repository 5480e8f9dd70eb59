//! Game state module - the engine
//!
//! `GameState` owns the board, the active piece, the score and the phase.
//! Every command goes through the same transaction: apply the candidate
//! change, ask [`Board::collides`], keep it or restore the previous value.
//! Rejected moves are silent no-ops; nothing here returns an error once a
//! session exists.

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::pieces::Piece;
use crate::rng::SpawnRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, Phase};

/// What the most recent freeze did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub score_delta: u64,
    /// The replacement piece could not be placed
    pub game_over: bool,
}

/// A single game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    rng: SpawnRng,
    score: u64,
    lines: u64,
    pieces_spawned: u64,
    phase: Phase,
    /// Last freeze (consumed by the driver)
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session with an empty board and no active piece
    ///
    /// Fails only on an invalid configuration.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => SpawnRng::new(seed),
            None => SpawnRng::from_entropy(),
        };
        debug!(
            width = config.width,
            height = config.height,
            level = config.level,
            seed = rng.seed(),
            "new game"
        );

        Ok(Self {
            board: Board::new(config.width, config.height),
            active: None,
            rng,
            score: 0,
            lines: 0,
            pieces_spawned: 0,
            phase: Phase::Running,
            last_event: None,
            config,
        })
    }

    /// Spawn the first piece if none is active yet
    pub fn start(&mut self) -> &Self {
        self.ensure_active();
        self
    }

    /// Empty the board and start over with the same configuration
    ///
    /// The spawn RNG keeps running, so the new game gets fresh pieces.
    pub fn restart(&mut self) -> &Self {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces_spawned = 0;
        self.phase = Phase::Running;
        self.last_event = None;
        info!("game restarted");
        self.start()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> u16 {
        self.board.width()
    }

    pub fn height(&self) -> u16 {
        self.board.height()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Total rows counted as cleared this session
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.config.level
    }

    pub fn pieces_spawned(&self) -> u64 {
        self.pieces_spawned
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Seed of the spawn RNG (replays this session's spawn sequence)
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Take and clear the last freeze event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// The collision predicate for the active piece; false when none is active
    pub fn intersects(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|piece| self.board.collides(piece))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.config.level;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// One gravity step: move down, or freeze where the piece stands
    pub fn tick_gravity(&mut self) -> &Self {
        if self.ensure_active() && !self.try_shift(0, 1) {
            self.freeze();
        }
        self
    }

    /// Input-driven gravity step
    pub fn soft_drop(&mut self) -> &Self {
        self.tick_gravity()
    }

    pub fn move_piece(&mut self, direction: Direction) -> &Self {
        if self.ensure_active() {
            self.try_shift(direction.dx(), 0);
        }
        self
    }

    pub fn move_left(&mut self) -> &Self {
        self.move_piece(Direction::Left)
    }

    pub fn move_right(&mut self) -> &Self {
        self.move_piece(Direction::Right)
    }

    /// Advance to the next rotation state if it fits in place
    pub fn rotate(&mut self) -> &Self {
        if self.ensure_active() {
            self.try_rotate();
        }
        self
    }

    /// Drop to the lowest legal row and freeze
    pub fn hard_drop(&mut self) -> &Self {
        if !self.ensure_active() {
            return self;
        }
        let Some(piece) = self.active.as_mut() else {
            return self;
        };

        // Terminates: the floor check fails once the piece passes the last row.
        while !self.board.collides(piece) {
            piece.shift(0, 1);
        }
        piece.shift(0, -1);

        self.freeze();
        self
    }

    /// Apply an input-level action
    ///
    /// `Pause` belongs to the driver and is ignored here.
    pub fn apply_action(&mut self, action: GameAction) -> &Self {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => self.restart(),
            GameAction::Pause => self,
        }
    }

    /// Remove full rows under the configured policy and score them
    ///
    /// Adds `lines²` to the score; returns the number of rows counted.
    pub fn break_lines(&mut self) -> u32 {
        let lines = self.board.clear_lines(self.config.line_clear);
        if lines > 0 {
            let delta = u64::from(lines).pow(2);
            self.score += delta;
            self.lines += u64::from(lines);
            debug!(lines, delta, score = self.score, "lines cleared");
        }
        lines
    }

    /// True if a piece is active and the game is still running; spawns the
    /// first piece on demand.
    fn ensure_active(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        if self.active.is_none() {
            self.spawn_piece();
        }
        self.phase == Phase::Running && self.active.is_some()
    }

    /// Place a fresh random piece at the spawn position
    ///
    /// Returns false (and ends the game) when it collides on arrival.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let (family, color) = self.rng.next_spawn();
        let piece = Piece::spawn(family, color);
        self.active = Some(piece);
        self.pieces_spawned += 1;
        trace!(?family, color = color.index(), "spawn");

        if self.board.collides(&piece) {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                lines = self.lines,
                pieces = self.pieces_spawned,
                "game over"
            );
            return false;
        }
        true
    }

    /// Move the active piece by `(dx, dy)`, restoring it on collision
    pub(crate) fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.shift(dx, dy);
        if self.board.collides(piece) {
            piece.shift(-dx, -dy);
            return false;
        }
        true
    }

    /// Advance the active piece's rotation, restoring it on collision
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let previous = piece.rotation();
        piece.advance_rotation();
        if self.board.collides(piece) {
            piece.set_rotation(previous);
            return false;
        }
        true
    }

    /// Write the active piece into the board, clear lines, spawn the next piece
    fn freeze(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock_piece(&piece);
        debug!(family = ?piece.family(), x = piece.x(), y = piece.y(), "freeze");

        let score_before = self.score;
        let lines_cleared = self.break_lines();
        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared,
            score_delta: self.score - score_before,
            game_over: !spawned,
        });
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }
}
