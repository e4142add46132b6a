//! Live care session: a ratatui loop ticking the simulation once a second.

mod app;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use critter_core::PetSimulation;
use critter_store::FileStore;

use app::App;

/// Run the watch loop until the user quits.
pub fn run(store: FileStore, sim: PetSimulation) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let mut app = App::new(store, sim);
    let result = run_loop(&mut terminal, &mut app);

    // Persist once more on the way out, whatever happened in the loop.
    let exit_save = app.persist();
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.and(exit_save)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), String> {
    loop {
        app.tick_if_due()?;

        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| format!("draw error: {e}"))?;

        if !event::poll(Duration::from_millis(250)).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(());
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('f') => app.feed()?,
                KeyCode::Char('p') => app.play()?,
                KeyCode::Char('c') => app.clean()?,
                _ => {}
            }
        }
    }
}
