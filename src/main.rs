mod game;
mod generate;
mod grid;
mod render;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, Stdout};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use game::{Dir, Game};
use render::Renderer;

const DEFAULT_GRID_W: i32 = 79;
const DEFAULT_GRID_H: i32 = 23;

struct Config {
    width: i32,
    height: i32,
    seed: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Command {
    Move(Dir),
    Quit,
}

fn main() -> io::Result<()> {
    let config = match read_config() {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("amaze: {msg}");
            process::exit(2);
        }
    };

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &config);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

/// Turn loop: render, block for one key, apply. There is no tick; the game
/// only advances on input.
fn run(stdout: &mut Stdout, config: &Config) -> io::Result<()> {
    let mut game = Game::new(config.seed, config.width, config.height);
    let mut renderer = Renderer::new(config.width, config.height);

    loop {
        render::render(stdout, &game, &mut renderer)?;
        if let Event::Key(key) = event::read()? {
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            match map_key(key.code) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Move(dir)) => {
                    game.move_player(dir);
                }
                None => {}
            }
        }
    }
}

/// Unmapped keys yield no command and the turn is a no-op.
fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('h') | KeyCode::Left => Some(Command::Move(Dir::Left)),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Move(Dir::Right)),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::Move(Dir::Up)),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::Move(Dir::Down)),
        _ => None,
    }
}

fn read_config() -> Result<Config, String> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => parse_seed(&arg)?,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0),
    };
    let width = parse_dimension("AMAZE_WIDTH", std::env::var("AMAZE_WIDTH").ok(), DEFAULT_GRID_W)?;
    let height = parse_dimension(
        "AMAZE_HEIGHT",
        std::env::var("AMAZE_HEIGHT").ok(),
        DEFAULT_GRID_H,
    )?;
    Ok(Config {
        width,
        height,
        seed,
    })
}

fn parse_seed(arg: &str) -> Result<u64, String> {
    arg.parse()
        .map_err(|_| format!("seed must be a non-negative integer, got {arg:?}"))
}

/// Grid dimensions must be odd so the border stays solid wall; anything
/// else is a configuration error, not a value to be quietly clamped.
fn parse_dimension(name: &str, value: Option<String>, default: i32) -> Result<i32, String> {
    let Some(value) = value else {
        return Ok(default);
    };
    let n: i32 = value
        .parse()
        .map_err(|_| format!("{name} must be an integer, got {value:?}"))?;
    if n < 3 || n % 2 == 0 {
        return Err(format!("{name} must be an odd integer of at least 3, got {n}"));
    }
    Ok(n)
}
