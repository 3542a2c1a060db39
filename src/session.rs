//! Game session: phase machine, scoreboard and timers around the core rules.
//!
//! A [`Session`] is driven by two calls. [`Session::handle`] feeds one
//! discrete input; [`Session::advance`] moves the virtual clock and fires
//! every timer that falls due. Nothing blocks and nothing reads the wall
//! clock, so a session replays exactly from its seed and input timeline.
//!
//! ```text
//!  MENU ─start─▶ READY ─delay─▶ PLAYING ─time up──────────────▶ GAMEOVER
//!                  ▲              │  │                              ▲
//!                  │          touchdown tackle                      │
//!                  │              ▼  ▼                              │
//!                  ├─blinks── TOUCHDOWN  TACKLED ─pause, 0 left─────┘
//!                  └──────────────────── pause, downs left
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{GameConfig, RulesConfig, TimingConfig};
use crate::error::ConfigError;
use crate::game::{
    resolve_move, tick, Camera, Coord, Direction, Field, Mobile, MoveOutcome, Player, Roster,
    SpawnReport, TickOutcome,
};
use crate::invariants::assert_invariants;
use crate::rng::{seeded, GameRng};
use crate::schedule::{Scheduler, Task, TimerId};

/// Game clock resolution.
const CLOCK_TICK_MS: u64 = 1000;

/// Top-level phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// Title screen, waiting for start.
    Menu,
    /// Pre-snap countdown. Input is ignored and nobody moves.
    Ready,
    /// Live play.
    Playing,
    /// Touchdown celebration.
    Touchdown,
    /// Post-tackle pause.
    Tackled,
    /// Game finished, waiting for restart.
    GameOver,
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameOverReason {
    /// The game clock ran out.
    TimeUp,
    /// The last down ended in a tackle.
    OutOfAttempts,
}

impl GameOverReason {
    /// Banner text for the game-over screen.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            GameOverReason::TimeUp => "TIME'S UP!",
            GameOverReason::OutOfAttempts => "GAME OVER",
        }
    }
}

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Move the runner one tile. Only honoured while playing.
    Move(Direction),
    /// Start from the menu, or restart after game over.
    Start,
}

/// Fire-and-forget audio cue for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cue {
    /// Crowd roar at kickoff and on a touchdown.
    Cheer,
    /// Delayed crowd reaction after the opening kickoff.
    Seal,
    /// Referee whistle at the snap.
    Whistle,
    /// Runner footstep.
    Step,
    /// Knockdown or tackle impact.
    Thud,
}

/// Numbers shown on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// Points scored this game.
    pub score: u32,
    /// Downs left before game over.
    pub attempts: u32,
    /// Seconds left on the game clock.
    pub time_remaining: u32,
    /// Touchdowns scored, which also sets the difficulty level.
    pub touchdowns: u32,
    /// Defenders flattened this game.
    pub knockdowns: u32,
}

impl Scoreboard {
    /// A fresh scoreboard for a new game.
    #[must_use]
    pub const fn new(rules: &RulesConfig, timing: &TimingConfig) -> Self {
        Self {
            score: 0,
            attempts: rules.start_attempts,
            time_remaining: timing.game_duration_secs,
            touchdowns: 0,
            knockdowns: 0,
        }
    }
}

/// Serializable view of everything a renderer needs.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    /// Virtual time in milliseconds.
    pub time_ms: u64,
    /// Current phase.
    pub phase: Phase,
    /// Scoreboard values.
    pub scoreboard: Scoreboard,
    /// Distance left to the goal line.
    pub yards_to_go: i32,
    /// Leftmost visible column.
    pub camera_x: i32,
    /// Every entity on the field.
    pub roster: &'a Roster,
    /// Where the tackle came from, while tackled.
    pub tackle_source: Option<Coord>,
    /// Whether the touchdown banner is lit.
    pub touchdown_banner_visible: bool,
    /// Why the game ended, once it has.
    pub game_over_reason: Option<GameOverReason>,
}

/// One game from title screen to game over, and any restarts after it.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    field: Field,
    roster: Roster,
    camera: Camera,
    board: Scoreboard,
    phase: Phase,
    rng: GameRng,
    scheduler: Scheduler,
    play_timers: Vec<TimerId>,
    cues: Vec<Cue>,
    tackle_source: Option<Coord>,
    banner_visible: bool,
    blinks: u32,
    game_over: Option<GameOverReason>,
    downs: u32,
    last_spawn: SpawnReport,
}

impl Session {
    /// A session on the title screen.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Field::new(&config.field);
        Ok(Self {
            field,
            roster: Roster::new(Player::new(field.kickoff_spot())),
            camera: Camera::new(&field, &config.camera),
            board: Scoreboard::new(&config.rules, &config.timing),
            phase: Phase::Menu,
            rng: seeded(seed),
            scheduler: Scheduler::new(),
            play_timers: Vec::new(),
            cues: Vec::new(),
            tackle_source: None,
            banner_visible: false,
            blinks: 0,
            game_over: None,
            downs: 0,
            last_spawn: SpawnReport::default(),
            config,
        })
    }

    /// Apply one input. Inputs that make no sense in the current phase
    /// are ignored.
    pub fn handle(&mut self, input: Input) {
        match (self.phase, input) {
            (Phase::Menu, Input::Start) => self.kickoff(),
            (Phase::GameOver, Input::Start) => {
                info!("restart");
                self.board = Scoreboard::new(&self.config.rules, &self.config.timing);
                self.game_over = None;
                self.kickoff();
            }
            (Phase::Playing, Input::Move(dir)) => self.move_runner(dir),
            _ => {}
        }
        assert_invariants(self);
    }

    /// Move the virtual clock forward by `elapsed_ms`, firing every timer
    /// that falls due on the way in time order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((_, task)) = self.scheduler.pop_due(until) {
            self.run(task);
        }
        self.scheduler.advance_to(until);
        assert_invariants(self);
    }

    /// Take every audio cue raised since the last call.
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Replace the entities on the field, for scripted layouts.
    ///
    /// The phase, clock and pending timers are left alone. The layout is
    /// held to the same invariants as every other state change.
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
        assert_invariants(self);
    }

    /// Install a layout without checking it, to exercise the checker.
    #[cfg(test)]
    pub(crate) fn set_roster_unchecked(&mut self, roster: Roster) {
        self.roster = roster;
    }

    /// The configuration this session was built with.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Field geometry.
    #[must_use]
    pub const fn field(&self) -> &Field {
        &self.field
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Every entity on the field.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Leftmost visible column.
    #[must_use]
    pub const fn camera_x(&self) -> i32 {
        self.camera.x()
    }

    /// The scrolling camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Scoreboard values.
    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.board
    }

    /// Distance from the runner to the goal line.
    #[must_use]
    pub fn yards_to_go(&self) -> i32 {
        self.field.yards_from_goal(self.roster.player.pos.x)
    }

    /// Tile of the defender that made the last tackle, while tackled.
    #[must_use]
    pub const fn tackle_source(&self) -> Option<Coord> {
        self.tackle_source
    }

    /// Whether the blinking touchdown banner is currently lit.
    #[must_use]
    pub const fn touchdown_banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub const fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    /// Virtual time in milliseconds.
    #[must_use]
    pub const fn now(&self) -> u64 {
        self.scheduler.now()
    }

    /// Downs started this game, counting the current one.
    #[must_use]
    pub const fn downs(&self) -> u32 {
        self.downs
    }

    /// How the latest spawn pass went.
    #[must_use]
    pub const fn last_spawn(&self) -> SpawnReport {
        self.last_spawn
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            time_ms: self.now(),
            phase: self.phase,
            scoreboard: self.board,
            yards_to_go: self.yards_to_go(),
            camera_x: self.camera_x(),
            roster: &self.roster,
            tackle_source: self.tackle_source,
            touchdown_banner_visible: self.banner_visible,
            game_over_reason: self.game_over,
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug!(from = ?self.phase, to = ?phase, t = self.scheduler.now(), "phase change");
        self.phase = phase;
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::BeginPlay => self.begin_play(),
            Task::DefenderTick => self.defender_tick(),
            Task::ClockTick => self.clock_tick(),
            Task::TackleResolved => self.tackle_resolved(),
            Task::TouchdownBlink => self.touchdown_blink(),
            Task::CrowdCue => self.cues.push(Cue::Seal),
        }
    }

    /// Opening kickoff of a game: crowd roar, then the usual countdown.
    fn kickoff(&mut self) {
        self.downs = 0;
        self.next_down();
        self.cues.push(Cue::Cheer);
        self.scheduler
            .schedule_once(self.config.timing.crowd_cue_delay_ms, Task::CrowdCue);
    }

    /// Reset the field and start the pre-snap countdown.
    fn next_down(&mut self) {
        self.prepare_field();
        self.enter(Phase::Ready);
        self.scheduler
            .schedule_once(self.config.timing.ready_delay_ms, Task::BeginPlay);
    }

    /// Line the runner up, park the camera and spawn a fresh defence.
    ///
    /// Every pending timer from the previous down is dropped first.
    fn prepare_field(&mut self) {
        self.scheduler.cancel_all();
        self.play_timers.clear();
        self.roster = Roster::new(Player::new(self.field.kickoff_spot()));
        self.camera.reset();
        self.tackle_source = None;
        self.banner_visible = false;
        self.blinks = 0;
        self.downs += 1;
        self.last_spawn = self.roster.spawn(
            &self.field,
            &self.config.spawn,
            self.board.touchdowns,
            &mut self.rng,
        );
        debug!(
            down = self.downs,
            level = self.board.touchdowns,
            defenders = self.roster.defenders.len(),
            referees = self.roster.referees.len(),
            "field prepared"
        );
    }

    fn begin_play(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.cues.push(Cue::Whistle);
        self.enter(Phase::Playing);
        let tick = self
            .scheduler
            .schedule_repeating(self.config.timing.turn_delay_ms, Task::DefenderTick);
        let clock = self
            .scheduler
            .schedule_repeating(CLOCK_TICK_MS, Task::ClockTick);
        self.play_timers = vec![tick, clock];
    }

    fn stop_play(&mut self) {
        for id in self.play_timers.drain(..) {
            self.scheduler.cancel(id);
        }
    }

    fn defender_tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let outcome = tick(&mut self.roster, &self.field, &self.config.ai, &mut self.rng);
        if let TickOutcome::Tackle { defender } = outcome {
            self.tackled(defender);
        }
    }

    fn clock_tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        self.board.time_remaining = self.board.time_remaining.saturating_sub(1);
        if self.board.time_remaining == 0 {
            self.finish(GameOverReason::TimeUp);
        }
    }

    fn move_runner(&mut self, dir: Direction) {
        let outcome = resolve_move(&mut self.roster, &self.field, dir);
        match outcome {
            MoveOutcome::Discarded => return,
            MoveOutcome::Tackled { defender } => {
                self.tackled(defender);
                return;
            }
            MoveOutcome::Stepped | MoveOutcome::KnockedDown { .. } | MoveOutcome::Touchdown { .. } => {}
        }

        if let Some(defender) = outcome.knockdown() {
            self.board.score += self.config.rules.knockdown_points;
            self.board.knockdowns += 1;
            self.cues.push(Cue::Thud);
            debug!(defender, score = self.board.score, "knockdown");
        }
        self.cues.push(Cue::Step);
        self.camera.follow(self.roster.player.pos.x);

        if matches!(outcome, MoveOutcome::Touchdown { .. }) {
            self.touchdown();
        }
    }

    fn tackled(&mut self, defender: usize) {
        self.stop_play();
        self.cues.push(Cue::Thud);
        self.tackle_source = self.roster.defenders.get(defender).map(Mobile::pos);
        debug!(
            defender,
            yards_to_go = self.yards_to_go(),
            attempts = self.board.attempts,
            "tackled"
        );
        self.enter(Phase::Tackled);
        self.scheduler
            .schedule_once(self.config.timing.tackle_pause_ms, Task::TackleResolved);
    }

    fn tackle_resolved(&mut self) {
        if self.phase != Phase::Tackled {
            return;
        }
        self.board.attempts = self.board.attempts.saturating_sub(1);
        if self.board.attempts == 0 {
            self.finish(GameOverReason::OutOfAttempts);
        } else {
            self.next_down();
        }
    }

    fn touchdown(&mut self) {
        self.stop_play();
        self.cues.push(Cue::Cheer);
        self.board.score += self.config.rules.touchdown_points;
        self.board.touchdowns += 1;
        self.board.attempts = self.config.rules.start_attempts;
        info!(
            touchdowns = self.board.touchdowns,
            score = self.board.score,
            time_remaining = self.board.time_remaining,
            "touchdown"
        );
        self.enter(Phase::Touchdown);
        self.blinks = 0;
        self.banner_visible = true;
        self.scheduler
            .schedule_repeating(self.config.timing.blink_interval_ms, Task::TouchdownBlink);
    }

    fn touchdown_blink(&mut self) {
        if self.phase != Phase::Touchdown {
            return;
        }
        self.blinks += 1;
        self.banner_visible = self.blinks % 2 == 1;
        if self.blinks >= self.config.timing.blink_count {
            self.next_down();
        }
    }

    fn finish(&mut self, reason: GameOverReason) {
        self.scheduler.cancel_all();
        self.play_timers.clear();
        self.game_over = Some(reason);
        info!(
            reason = reason.message(),
            score = self.board.score,
            touchdowns = self.board.touchdowns,
            knockdowns = self.board.knockdowns,
            "game over"
        );
        self.enter(Phase::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Defender, Referee};

    fn quiet_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.ai.lunge_chance = 0.0;
        config.ai.idle_chance = 1.0;
        config.ai.referee_idle_chance = 1.0;
        config
    }

    fn playing(config: GameConfig) -> Session {
        let mut session = Session::new(config, 11).unwrap();
        session.handle(Input::Start);
        session.advance(config.timing.ready_delay_ms);
        assert_eq!(session.phase(), Phase::Playing);
        session.drain_cues();
        session
    }

    fn scripted(session: &mut Session, player: Coord) {
        session.set_roster(Roster::new(Player::new(player)));
    }

    #[test]
    fn test_starts_on_menu() {
        let session = Session::new(GameConfig::default(), 1).unwrap();
        assert_eq!(session.phase(), Phase::Menu);
        assert_eq!(session.scoreboard().attempts, 4);
        assert_eq!(session.scoreboard().time_remaining, 60);
        assert_eq!(session.camera_x(), 30);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.rules.start_attempts = 0;
        assert!(Session::new(config, 1).is_err());
    }

    #[test]
    fn test_start_sequence_and_cues() {
        let mut session = Session::new(GameConfig::default(), 3).unwrap();
        session.handle(Input::Start);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.drain_cues(), vec![Cue::Cheer]);
        assert!(!session.roster().defenders.is_empty());

        session.advance(999);
        assert!(session.drain_cues().is_empty());
        session.advance(1);
        assert_eq!(session.drain_cues(), vec![Cue::Seal]);

        session.advance(1999);
        assert_eq!(session.phase(), Phase::Ready);
        session.advance(1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.drain_cues(), vec![Cue::Whistle]);
    }

    #[test]
    fn test_input_ignored_while_ready() {
        let mut session = Session::new(GameConfig::default(), 3).unwrap();
        session.handle(Input::Start);
        let before = session.roster().player;
        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.roster().player, before);
        session.handle(Input::Start);
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[test]
    fn test_step_emits_cue() {
        let mut session = playing(quiet_config());
        scripted(&mut session, Coord::new(20, 3));
        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.roster().player.pos, Coord::new(19, 3));
        assert_eq!(session.drain_cues(), vec![Cue::Step]);
    }

    #[test]
    fn test_knockdown_scores_one_point() {
        let mut session = playing(quiet_config());
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.defenders.push(Defender::new(Coord::new(19, 3)));
        session.set_roster(roster);

        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.scoreboard().score, 1);
        assert_eq!(session.scoreboard().knockdowns, 1);
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(session.drain_cues(), vec![Cue::Thud, Cue::Step]);
    }

    #[test]
    fn test_referee_block_changes_nothing() {
        let mut session = playing(quiet_config());
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.referees.push(Referee::new(Coord::new(19, 3)));
        session.set_roster(roster);
        let board = *session.scoreboard();

        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.roster().player.pos, Coord::new(20, 3));
        assert_eq!(*session.scoreboard(), board);
        assert_eq!(session.phase(), Phase::Playing);
        assert!(session.drain_cues().is_empty());
    }

    #[test]
    fn test_tackle_costs_an_attempt_after_pause() {
        let mut session = playing(quiet_config());
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.defenders.push(Defender::new(Coord::new(19, 3)));
        roster.defenders.push(Defender::new(Coord::new(18, 3)));
        session.set_roster(roster);

        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.phase(), Phase::Tackled);
        assert_eq!(session.tackle_source(), Some(Coord::new(19, 3)));
        assert_eq!(session.scoreboard().attempts, 4);

        // Clock is stopped during the pause
        let time = session.scoreboard().time_remaining;
        session.advance(4999);
        assert_eq!(session.phase(), Phase::Tackled);
        assert_eq!(session.scoreboard().time_remaining, time);

        session.advance(1);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.scoreboard().attempts, 3);
        assert_eq!(session.roster().player.pos, session.field().kickoff_spot());
        assert_eq!(session.tackle_source(), None);
        assert_eq!(session.downs(), 2);
    }

    #[test]
    fn test_last_tackle_ends_game() {
        let mut config = quiet_config();
        config.rules.start_attempts = 1;
        let mut session = playing(config);
        // The tile behind the defender is off the field
        let mut roster = Roster::new(Player::new(Coord::new(20, 1)));
        roster.defenders.push(Defender::new(Coord::new(20, 0)));
        session.set_roster(roster);

        session.handle(Input::Move(Direction::Up));
        assert_eq!(session.phase(), Phase::Tackled);

        session.advance(config.timing.tackle_pause_ms);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.scoreboard().attempts, 0);
        assert_eq!(session.game_over_reason(), Some(GameOverReason::OutOfAttempts));
    }

    #[test]
    fn test_touchdown_then_blinks_into_next_down() {
        let config = quiet_config();
        let mut session = playing(config);
        scripted(&mut session, Coord::new(2, 3));

        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.phase(), Phase::Touchdown);
        assert_eq!(session.scoreboard().score, 7);
        assert_eq!(session.scoreboard().touchdowns, 1);
        assert!(session.touchdown_banner_visible());
        assert_eq!(session.drain_cues(), vec![Cue::Step, Cue::Cheer]);

        session.advance(625);
        assert!(session.touchdown_banner_visible());
        session.advance(625);
        assert!(!session.touchdown_banner_visible());

        session.advance(625 * 6 - 1);
        assert_eq!(session.phase(), Phase::Touchdown);
        session.advance(1);
        assert_eq!(session.phase(), Phase::Ready);
        // Level 1 fields two more defenders
        assert_eq!(session.last_spawn().defenders_requested, 14);
    }

    #[test]
    fn test_clock_runs_only_while_playing() {
        let mut session = Session::new(quiet_config(), 5).unwrap();
        session.advance(10_000);
        assert_eq!(session.scoreboard().time_remaining, 60);
        session.handle(Input::Start);
        session.advance(3000);
        assert_eq!(session.scoreboard().time_remaining, 60);
        session.advance(5000);
        assert_eq!(session.scoreboard().time_remaining, 55);
    }

    #[test]
    fn test_time_up() {
        let mut config = quiet_config();
        config.timing.game_duration_secs = 2;
        let mut session = playing(config);
        session.advance(1000);
        assert_eq!(session.scoreboard().time_remaining, 1);
        session.advance(1000);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.game_over_reason(), Some(GameOverReason::TimeUp));

        // Only restart is accepted now
        session.handle(Input::Move(Direction::Left));
        session.advance(60_000);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.scoreboard().time_remaining, 0);
    }

    #[test]
    fn test_restart_resets_scoreboard() {
        let mut config = quiet_config();
        config.timing.game_duration_secs = 1;
        let mut session = playing(config);
        scripted(&mut session, Coord::new(2, 3));
        session.handle(Input::Move(Direction::Left));
        session.advance(625 * 8 + 3000 + 1000);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.scoreboard().touchdowns, 1);

        session.handle(Input::Start);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(*session.scoreboard(), Scoreboard::new(&config.rules, &config.timing));
        assert_eq!(session.game_over_reason(), None);
        assert_eq!(session.downs(), 1);
        assert_eq!(session.last_spawn().defenders_requested, 12);
    }

    #[test]
    fn test_camera_follows_runner() {
        let mut session = playing(quiet_config());
        scripted(&mut session, Coord::new(39, 3));
        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.camera_x(), 29);
        session.handle(Input::Move(Direction::Left));
        assert_eq!(session.camera_x(), 28);
    }

    #[test]
    fn test_same_seed_same_game() {
        let run = |seed| {
            let mut s = Session::new(GameConfig::default(), seed).unwrap();
            s.handle(Input::Start);
            for _ in 0..40 {
                s.advance(250);
                s.handle(Input::Move(Direction::Left));
            }
            (s.roster().clone(), *s.scoreboard(), s.phase())
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "shares its tile")]
    fn test_set_roster_rejects_overlap() {
        let mut session = playing(quiet_config());
        let mut roster = Roster::new(Player::new(Coord::new(20, 3)));
        roster.defenders.push(Defender::new(Coord::new(20, 3)));
        session.set_roster(roster);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = playing(quiet_config());
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"yards_to_go\":41"));
    }
}
