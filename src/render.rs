//! Terminal rendering: a diffing cell renderer over crossterm.
//!
//! Each grid cell occupies two terminal columns. Only cells that changed
//! since the previous frame are redrawn; a resize or a too-small terminal
//! forces a full repaint.

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};
use unicode_width::UnicodeWidthStr;

use crate::game::Game;
use crate::grid::{Cell, Coord};

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
pub enum Glyph {
    Player,
    Goal,
    Wall,
    Open,
    Trail,
}

#[derive(Clone, Copy, PartialEq)]
pub struct ScreenCell {
    glyph: Glyph,
    color: Color,
}

pub struct Renderer {
    last: Vec<ScreenCell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            last: vec![
                ScreenCell {
                    glyph: Glyph::Open,
                    color: Color::Reset,
                };
                (width * height) as usize
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

pub fn render(stdout: &mut Stdout, game: &Game, renderer: &mut Renderer) -> io::Result<()> {
    let needed_w = (game.grid.width() as usize * CELL_W) as u16;
    let needed_h = (game.grid.height() + 2) as u16;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(MoveTo(0, 0))?;
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    for y in 0..game.grid.height() {
        for x in 0..game.grid.width() {
            let cell = cell_for(game, Coord::new(x, y));
            let idx = (y * game.grid.width() + x) as usize;
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, x as u16, y as u16, cell)?;
            }
        }
    }

    let hud = format!(
        "[{}] you are the @, goal is the X  q=quit h=left j=down k=up l=right",
        game.seed
    );
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y + game.grid.height() as u16 + 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

/// The player glyph wins over everything; the goal glyph shows only while
/// the goal room is untouched.
pub fn cell_for(game: &Game, pos: Coord) -> ScreenCell {
    if pos == game.player {
        return ScreenCell {
            glyph: Glyph::Player,
            color: Color::Yellow,
        };
    }
    if pos == game.goal && game.grid.get(pos) == Cell::Room {
        return ScreenCell {
            glyph: Glyph::Goal,
            color: Color::Magenta,
        };
    }
    match game.grid.get(pos) {
        Cell::Wall => ScreenCell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        Cell::Room => ScreenCell {
            glyph: Glyph::Open,
            color: Color::Reset,
        },
        Cell::Trail | Cell::GoalTrail => ScreenCell {
            glyph: Glyph::Trail,
            color: Color::DarkGrey,
        },
    }
}

fn draw_cell(
    stdout: &mut Stdout,
    renderer: &Renderer,
    x: u16,
    y: u16,
    cell: ScreenCell,
) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player => "@",
        Glyph::Goal => "X",
        Glyph::Wall => "██",
        Glyph::Open => "  ",
        Glyph::Trail => "·",
    };
    stdout.queue(MoveTo(renderer.origin_x + x * CELL_W as u16, renderer.origin_y + y))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    for _ in 0..CELL_W.saturating_sub(w) {
        stdout.queue(Print(' '))?;
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
