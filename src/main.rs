//! Terminal host for the snake core
//!
//! Thin presentation layer: draws the grid with crossterm, maps keys to
//! steering input, rings the bell on eat, and drives the sim through the
//! tick scheduler. All game logic lives in `tile_snake::sim`.

use std::io::{self, Stdout, Write, stdout};
use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use tile_snake::sim::{GameEvent, GameState, Heading, tick};
use tile_snake::{GameConfig, TickScheduler, TimerHandle, palette};

const CONFIG_PATH: &str = "tile-snake.json";

fn main() -> io::Result<()> {
    env_logger::init();

    let config = GameConfig::load_or_default(Path::new(CONFIG_PATH));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Session seed: {seed}");

    let mut state = GameState::new(config, seed);
    let mut scheduler = TickScheduler::new(Instant::now());
    let mut handle = scheduler.schedule(
        Duration::from_millis(state.interval_ms()),
        Instant::now(),
    );

    let mut screen = Screen::new();
    screen.setup()?;
    let result = run(&mut state, &mut scheduler, &mut handle, &mut screen);
    screen.restore()?;
    result
}

fn run(
    state: &mut GameState,
    scheduler: &mut TickScheduler,
    handle: &mut TimerHandle,
    screen: &mut Screen,
) -> io::Result<()> {
    screen.draw(state)?;

    loop {
        let wait = scheduler
            .deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(50));

        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match map_key(&key) {
                        Some(HostAction::Quit) => return Ok(()),
                        Some(HostAction::Steer(heading)) => state.steer(heading),
                        None => {}
                    }
                }
            }
        }

        if scheduler.poll(*handle, Instant::now()) {
            for ev in tick(state) {
                match ev {
                    GameEvent::Ate => screen.bell()?,
                    GameEvent::LevelUp { level } => {
                        log::info!("Level {level}, interval {} ms", state.interval_ms());
                        // Cancel-and-replace the driving timer at the new interval
                        *handle = scheduler.schedule(
                            Duration::from_millis(state.interval_ms()),
                            Instant::now(),
                        );
                    }
                    GameEvent::GameOver { score, level } => {
                        log::info!("Game over: score {score}, level {level}");
                        scheduler.cancel(*handle);
                        screen.draw(state)?;
                        screen.game_over_banner(state.tile_count(), score, level)?;
                        if wait_for_key()? {
                            return Ok(());
                        }
                        *handle = scheduler.schedule(
                            Duration::from_millis(state.interval_ms()),
                            Instant::now(),
                        );
                    }
                }
            }
            screen.draw(state)?;
        }
    }
}

enum HostAction {
    Steer(Heading),
    Quit,
}

fn map_key(key: &KeyEvent) -> Option<HostAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(HostAction::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(HostAction::Steer(Heading::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(HostAction::Steer(Heading::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(HostAction::Steer(Heading::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(HostAction::Steer(Heading::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(HostAction::Quit),
        _ => None,
    }
}

/// Block until a key press; true means the player wants to quit
fn wait_for_key() -> io::Result<bool> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(matches!(map_key(&key), Some(HostAction::Quit)));
        }
    }
}

struct Screen {
    out: Stdout,
}

impl Screen {
    fn new() -> Self {
        Self { out: stdout() }
    }

    fn setup(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, cursor::Hide)
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.out, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn bell(&mut self) -> io::Result<()> {
        write!(self.out, "\x07")?;
        self.out.flush()
    }

    /// Full repaint: border, empty cells, food, snake, status line
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let n = state.tile_count() as u16;

        for x in 0..n + 2 {
            let ch = if x == 0 || x == n + 1 { '+' } else { '-' };
            queue!(self.out, cursor::MoveTo(x, 0), Print(ch))?;
            queue!(self.out, cursor::MoveTo(x, n + 1), Print(ch))?;
        }
        for y in 1..n + 1 {
            queue!(self.out, cursor::MoveTo(0, y), Print('|'))?;
            queue!(self.out, cursor::MoveTo(n + 1, y), Print('|'))?;
            for x in 1..n + 1 {
                queue!(self.out, cursor::MoveTo(x, y), Print(' '))?;
            }
        }

        let food = state.food();
        let (r, g, b) = palette::FOOD_RGB;
        queue!(
            self.out,
            cursor::MoveTo(food.x as u16 + 1, food.y as u16 + 1),
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print('O'),
        )?;

        for (i, seg) in state.snake().segments().enumerate() {
            let (r, g, b) = if i == 0 {
                palette::HEAD_RGB
            } else {
                palette::body_rgb(i)
            };
            queue!(
                self.out,
                cursor::MoveTo(seg.x as u16 + 1, seg.y as u16 + 1),
                SetForegroundColor(Color::Rgb { r, g, b }),
                Print('#'),
            )?;
        }

        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, n + 2),
            Print(format!(
                "Score: {:<6} Level: {:<4}",
                state.score(),
                state.level()
            )),
        )?;
        self.out.flush()
    }

    fn game_over_banner(&mut self, tile_count: i32, score: u32, level: u32) -> io::Result<()> {
        let mid = tile_count as u16 / 2;
        let lines = [
            "  GAME OVER  ".to_string(),
            format!("  Score {score}  Level {level}  "),
            "  Any key to restart, q quits  ".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(2, mid + i as u16),
                Print(line),
            )?;
        }
        self.out.flush()
    }
}
