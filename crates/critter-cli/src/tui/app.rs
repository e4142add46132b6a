//! Watch-session state and rendering.

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};

use critter_core::clock::now_ms;
use critter_core::{FrameCycle, Mood, PetSimulation};
use critter_store::FileStore;

/// Two-frame ASCII sprites per mood. Index 0/1 alternate each second.
fn sprite(mood: Mood, frame: u8) -> &'static str {
    match (mood, frame % 2) {
        (Mood::Happy, 0) => "  (\\_/)\n  (^.^)\n  /   \\",
        (Mood::Happy, _) => "  (\\_/)\n  (^o^)\n  \\   /",
        (Mood::Neutral, 0) => "  (\\_/)\n  (o.o)\n  /   \\",
        (Mood::Neutral, _) => "  (\\_/)\n  (o.o)\n  \\   /",
        (Mood::Sad, 0) => "  (\\_/)\n  (;_;)\n  /   \\",
        (Mood::Sad, _) => "  (\\_/)\n  (T_T)\n  /   \\",
        (Mood::Sleepy, 0) => "  (\\_/)\n  (-.-) z\n  /   \\",
        (Mood::Sleepy, _) => "  (\\_/)\n  (-.-) zZ\n  /   \\",
    }
}

/// The watch session: simulation, its store, and display bookkeeping.
pub struct App {
    store: FileStore,
    sim: PetSimulation,
    last_tick: Instant,
    mood: Mood,
    frames: FrameCycle,
    frame_index: u8,
}

impl App {
    pub fn new(store: FileStore, sim: PetSimulation) -> Self {
        let mood = sim.mood();
        Self {
            store,
            sim,
            last_tick: Instant::now(),
            mood,
            frames: FrameCycle::for_mood(mood, 30),
            frame_index: 0,
        }
    }

    /// Advance the simulation once per elapsed second and persist.
    pub fn tick_if_due(&mut self) -> Result<(), String> {
        if self.last_tick.elapsed().as_secs() < 1 {
            return Ok(());
        }
        self.last_tick = Instant::now();
        self.sim.tick(now_ms());
        self.advance_frame();
        self.persist()
    }

    /// Step the mood animation, restarting the cycle when the mood shifts
    /// or the current cycle runs out.
    fn advance_frame(&mut self) {
        let mood = self.sim.mood();
        if mood != self.mood {
            self.mood = mood;
            self.frames = FrameCycle::for_mood(mood, 30);
        }
        match self.frames.next() {
            Some(frame) => self.frame_index = frame.index,
            None => {
                self.frames.restart();
                self.frame_index = 0;
            }
        }
    }

    pub fn feed(&mut self) -> Result<(), String> {
        self.sim.feed();
        self.persist()
    }

    pub fn play(&mut self) -> Result<(), String> {
        self.sim.play();
        self.persist()
    }

    pub fn clean(&mut self) -> Result<(), String> {
        self.sim.clean_lawn();
        self.persist()
    }

    pub fn persist(&self) -> Result<(), String> {
        critter_store::save_pet(&self.store, self.sim.identity(), self.sim.state())
            .map_err(|e| e.to_string())
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let state = self.sim.state();
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let title = format!(
            " {} the {} — {} days old — {}",
            self.sim.identity().name,
            self.sim.identity().kind,
            state.age_days,
            self.mood.status_line(state),
        );
        frame.render_widget(
            Paragraph::new(title).style(Style::new().bold()),
            layout[0],
        );

        frame.render_widget(
            Paragraph::new(sprite(self.mood, self.frame_index))
                .block(Block::new().borders(Borders::ALL)),
            layout[1],
        );

        // Hunger renders inverted: a full bar means a fed pet.
        let fed = (100.0 - state.hunger) / 100.0;
        frame.render_widget(
            Gauge::default()
                .block(Block::new().borders(Borders::ALL).title("fed"))
                .gauge_style(Style::new().fg(Color::Yellow))
                .ratio(fed.clamp(0.0, 1.0)),
            layout[2],
        );
        frame.render_widget(
            Gauge::default()
                .block(Block::new().borders(Borders::ALL).title("happiness"))
                .gauge_style(Style::new().fg(Color::Magenta))
                .ratio((state.happiness / 100.0).clamp(0.0, 1.0)),
            layout[3],
        );

        let items: Vec<ListItem<'_>> = self
            .sim
            .events()
            .events()
            .iter()
            .rev()
            .take(layout[4].height.saturating_sub(2) as usize)
            .map(|e| ListItem::new(format!("[{:>4}] {}", e.tick, e.description)))
            .collect();
        frame.render_widget(
            List::new(items).block(Block::new().borders(Borders::ALL).title("events")),
            layout[4],
        );

        let droppings = if state.droppings > 0 {
            format!("  droppings: {}", state.droppings)
        } else {
            String::new()
        };
        frame.render_widget(
            Paragraph::new(format!(
                " f feed   p play   c clean   q quit{droppings}"
            ))
            .style(Style::new().dim()),
            layout[5],
        );
    }
}
