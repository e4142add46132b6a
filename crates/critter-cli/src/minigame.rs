//! Terminal rendering for the arcade mini-games.
//!
//! The physics live in `critter-games`; this module owns the frame cadence,
//! keyboard input, and a coarse character-cell view of the field. Esc or `q`
//! is the manual stop the simulation treats as forfeiting the bonus.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use critter_core::clock::now_ms;
use critter_games::{GamePhase, JumpGame, MiniGameOutcome, PipesGame};

use crate::GameChoice;

const FRAME: Duration = Duration::from_millis(33);

/// Run the chosen mini-game to completion and report its outcome.
pub fn run(choice: GameChoice) -> Result<MiniGameOutcome, String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .map_err(|e| format!("terminal error: {e}"))?;

    let result = match choice {
        GameChoice::Jump => run_jump(&mut stdout),
        GameChoice::Pipes => run_pipes(&mut stdout),
    };

    execute!(stdout, cursor::Show, LeaveAlternateScreen).ok();
    disable_raw_mode().ok();
    result
}

/// Poll one frame's worth of input. Returns (action_pressed, stop_pressed).
fn poll_input() -> Result<(bool, bool), String> {
    let mut action = false;
    let mut stop = false;
    while event::poll(Duration::ZERO).map_err(|e| e.to_string())? {
        if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char(' ') | KeyCode::Up => action = true,
                KeyCode::Esc | KeyCode::Char('q') => stop = true,
                _ => {}
            }
        }
    }
    Ok((action, stop))
}

fn run_jump(out: &mut impl Write) -> Result<MiniGameOutcome, String> {
    let mut game = JumpGame::new();
    loop {
        let (jump, stop) = poll_input()?;
        if stop {
            game.stop();
        }
        if jump {
            game.jump();
        }
        game.step();

        draw_jump(out, &game)?;
        if game.is_over() {
            break;
        }
        std::thread::sleep(FRAME);
    }
    std::thread::sleep(Duration::from_millis(600));
    Ok(game.outcome())
}

fn run_pipes(out: &mut impl Write) -> Result<MiniGameOutcome, String> {
    let mut game = PipesGame::new(now_ms() as u64);
    loop {
        let (flap, stop) = poll_input()?;
        if stop {
            game.stop();
        }
        if flap {
            game.flap();
        }
        game.step();

        draw_pipes(out, &game)?;
        if game.is_over() {
            break;
        }
        std::thread::sleep(FRAME);
    }
    std::thread::sleep(Duration::from_millis(600));
    Ok(game.outcome())
}

/// A coarse character-cell canvas, redrawn whole each frame.
struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn set(&mut self, col: i32, row: i32, ch: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height {
            self.cells[row as usize * self.width + col as usize] = ch;
        }
    }

    fn fill_col(&mut self, col: i32, rows: std::ops::Range<i32>, ch: char) {
        for row in rows {
            self.set(col, row, ch);
        }
    }

    fn render(&self, out: &mut impl Write, header: &str) -> Result<(), String> {
        queue!(out, cursor::MoveTo(0, 0), Clear(ClearType::All)).map_err(|e| e.to_string())?;
        queue!(out, crossterm::style::Print(header)).map_err(|e| e.to_string())?;
        for row in 0..self.height {
            let line: String = self.cells[row * self.width..(row + 1) * self.width]
                .iter()
                .collect();
            queue!(
                out,
                cursor::MoveTo(0, (row + 1) as u16),
                crossterm::style::Print(line)
            )
            .map_err(|e| e.to_string())?;
        }
        out.flush().map_err(|e| e.to_string())
    }
}

fn draw_jump(out: &mut impl Write, game: &JumpGame) -> Result<(), String> {
    const ROWS: i32 = 14;
    let width = critter_games::jump::FIELD_WIDTH as usize;
    let mut canvas = Canvas::new(width, ROWS as usize + 1);

    // Ground
    for col in 0..width as i32 {
        canvas.set(col, ROWS, '=');
    }

    // Obstacle (3 cells wide and tall, sitting on the ground)
    let ob_x = game.obstacle_x().round() as i32;
    let ob = critter_games::jump::OBSTACLE_SIZE as i32;
    for dx in 0..ob {
        canvas.fill_col(ob_x + dx, (ROWS - ob)..ROWS, '#');
    }

    // Runner
    let runner_row = ROWS - 1 - game.altitude().round() as i32;
    canvas.set(critter_games::jump::RUNNER_X as i32, runner_row, '@');

    let header = match game.phase() {
        GamePhase::Ready => format!("score {:>3}   SPACE to jump, Q to quit", game.score()),
        GamePhase::Playing => format!("score {:>3}", game.score()),
        GamePhase::Over => format!("score {:>3}   GAME OVER", game.score()),
    };
    canvas.render(out, &header)
}

fn draw_pipes(out: &mut impl Write, game: &PipesGame) -> Result<(), String> {
    // Field cells are squished 2:1 vertically to fit a terminal.
    let width = critter_games::pipes::FIELD_WIDTH as usize;
    let rows = (critter_games::pipes::FIELD_HEIGHT / 2.0) as i32;
    let mut canvas = Canvas::new(width, rows as usize);

    for pipe in game.pipes() {
        let x = pipe.x.round() as i32;
        let gap_top = ((pipe.gap_center - critter_games::pipes::GAP_HALF) / 2.0).round() as i32;
        let gap_bottom = ((pipe.gap_center + critter_games::pipes::GAP_HALF) / 2.0).round() as i32;
        for dx in 0..critter_games::pipes::PIPE_WIDTH as i32 {
            canvas.fill_col(x + dx, 0..gap_top, '|');
            canvas.fill_col(x + dx, gap_bottom..rows, '|');
        }
    }

    let bird_row = (game.bird_y() / 2.0).round() as i32;
    canvas.set(critter_games::pipes::BIRD_X as i32, bird_row, '>');

    let header = match game.phase() {
        GamePhase::Ready => format!("score {:>3}   SPACE to flap, Q to quit", game.score()),
        GamePhase::Playing => format!("score {:>3}", game.score()),
        GamePhase::Over => format!("score {:>3}   GAME OVER", game.score()),
    };
    canvas.render(out, &header)
}
