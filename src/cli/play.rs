//! Play command implementation - interactive terminal front end.

// Screen geometry is small and non-negative
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{stdout, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};
use touchdown::game::{Facing, Mobile, Pose};
use touchdown::{Coord, Cue, Direction, GameOverReason, Input, Phase, Session};
use tracing::info;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the config is invalid or the terminal fails.
pub(crate) fn execute(seed: Option<u64>, config: Option<&Path>) -> Result<(), CliError> {
    let config = super::load_config(config)?;
    let seed = super::seed_or_random(seed);
    info!(seed, "starting interactive session");
    let session = Session::new(config, seed)?;

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = run_tui(&mut terminal, App::new(session, seed));

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

/// App state for the TUI.
struct App {
    session: Session,
    seed: u64,
    last_advance: Instant,
    last_cue: Option<Cue>,
}

impl App {
    fn new(session: Session, seed: u64) -> Self {
        Self {
            session,
            seed,
            last_advance: Instant::now(),
            last_cue: None,
        }
    }

    /// Feed wall-clock time to the session in whole milliseconds.
    fn catch_up(&mut self) {
        let elapsed = self.last_advance.elapsed().as_millis();
        let ms = u64::try_from(elapsed).unwrap_or(u64::MAX);
        if ms > 0 {
            self.session.advance(ms);
            self.last_advance += Duration::from_millis(ms);
        }
        if let Some(cue) = self.session.drain_cues().pop() {
            self.last_cue = Some(cue);
        }
    }

    fn press(&mut self, code: KeyCode) {
        let input = match code {
            KeyCode::Left | KeyCode::Char('a') => Input::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => Input::Move(Direction::Right),
            KeyCode::Up | KeyCode::Char('w') => Input::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => Input::Move(Direction::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Input::Start,
            _ => return,
        };
        self.session.handle(input);
    }
}

fn run_tui(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<(), CliError> {
    loop {
        app.catch_up();
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Key repeat is ignored: one press, one move
        if event::poll(Duration::from_millis(30))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                code => app.press(code),
            }
        }
    }
    let board = app.session.scoreboard();
    info!(score = board.score, touchdowns = board.touchdowns, "player quit");
    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let field_rows = app.session.field().height() as u16 + 2;
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Length(field_rows), // Field
            Constraint::Length(3),          // Scoreboard
            Constraint::Length(3),          // Footer
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    if app.session.phase() == Phase::Menu {
        render_menu(f, chunks[1]);
    } else {
        render_field(f, chunks[1], app);
    }
    render_scoreboard(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn banner(app: &App) -> (String, Color) {
    let session = &app.session;
    match session.phase() {
        Phase::Menu => ("PRESS ENTER TO KICK OFF".to_string(), Color::Cyan),
        Phase::Ready => ("READY...".to_string(), Color::Yellow),
        Phase::Playing => ("HUT! HUT! GO!".to_string(), Color::Green),
        Phase::Touchdown if session.touchdown_banner_visible() => {
            ("TOUCHDOWN!".to_string(), Color::LightYellow)
        }
        Phase::Touchdown => (String::new(), Color::LightYellow),
        Phase::Tackled => ("TACKLED!".to_string(), Color::Red),
        Phase::GameOver => {
            let reason = session.game_over_reason().map_or("GAME OVER", GameOverReason::message);
            (format!("{reason}  Enter to play again"), Color::Red)
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let (text, color) = banner(app);
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Touchdown | seed {} ", app.seed)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "T O U C H D O W N",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Run left to the goal line. Knock defenders flat,"),
        Line::from("but never into a teammate or the sideline."),
    ];
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(menu, area);
}

fn render_field(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let field = session.field();
    let camera = session.camera();

    let mut lines: Vec<Line> = Vec::with_capacity(field.height() as usize);
    for y in 0..field.height() {
        let spans: Vec<Span> = (0..field.view_width())
            .map(|sx| tile(session, Coord::new(camera.x() + sx, y)))
            .collect();
        lines.push(Line::from(spans));
    }

    let title = format!(" {} yards to go ", session.yards_to_go());
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

/// Two-column glyph for the tile at `pos`.
fn tile(session: &Session, pos: Coord) -> Span<'static> {
    let field = session.field();
    let roster = session.roster();

    let ground = if field.is_touchdown(pos.x) {
        Style::default().bg(Color::Blue)
    } else if field.is_endzone(pos.x) {
        Style::default().bg(Color::LightBlue)
    } else {
        Style::default().bg(Color::Green)
    };

    if roster.player.pos == pos {
        let glyph = match (roster.player.pose, roster.player.facing) {
            (Pose::RunningUp, _) => "/\\",
            (Pose::RunningDown, _) => "\\/",
            (Pose::Standing, _) => "@@",
            (Pose::RunningSideways, Facing::Left) => "@<",
            (Pose::RunningSideways, Facing::Right) => ">@",
        };
        return Span::styled(glyph, ground.fg(Color::Yellow).add_modifier(Modifier::BOLD));
    }
    if session.phase() == Phase::Tackled && session.tackle_source() == Some(pos) {
        return Span::styled("!!", ground.fg(Color::White).bg(Color::Red));
    }
    if let Some(i) = roster.defender_at(pos) {
        let glyph = match roster.defenders[i].facing() {
            Facing::Left => "<D",
            Facing::Right => "D>",
        };
        return Span::styled(glyph, ground.fg(Color::Red).add_modifier(Modifier::BOLD));
    }
    if roster.has_referee_at(pos) {
        return Span::styled("||", ground.fg(Color::White).bg(Color::Black));
    }
    if roster.defenders.iter().any(|d| d.is_knocked_down() && d.pos() == pos) {
        return Span::styled("__", ground.fg(Color::DarkGray));
    }
    let glyph = if pos.x % 5 == 0 { "' " } else { "  " };
    Span::styled(glyph, ground.fg(Color::White))
}

fn render_scoreboard(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let board = session.scoreboard();
    let start_attempts = session.config().rules.start_attempts;
    let down = start_attempts.saturating_sub(board.attempts) + 1;

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" TIME ", label),
        Span::styled(
            format!("{}:{:02}", board.time_remaining / 60, board.time_remaining % 60),
            value,
        ),
        Span::styled("   SCORE ", label),
        Span::styled(board.score.to_string(), value),
        Span::styled("   YARDS ", label),
        Span::styled(session.yards_to_go().to_string(), value),
        Span::styled("   DOWN ", label),
        Span::styled(down.min(start_attempts).to_string(), value),
        Span::styled("   TD ", label),
        Span::styled(board.touchdowns.to_string(), value),
    ]);
    let widget = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Scoreboard "));
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let sound = match app.last_cue {
        Some(Cue::Cheer) => "crowd roars",
        Some(Cue::Seal) => "seal barks",
        Some(Cue::Whistle) => "whistle",
        Some(Cue::Step) => "step",
        Some(Cue::Thud) => "THUD",
        None => "",
    };
    let help = format!(" arrows/wasd: run | enter: start | q: quit   {sound}");
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
