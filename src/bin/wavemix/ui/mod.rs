//! TUI module for wavemix
//!
//! Four waveform views (A, B, crossfade, spectral), a mix slider and a
//! spectrum of the table being auditioned.

pub mod state;
mod spectrum;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::warn;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    DefaultTerminal, Frame,
};
use rtrb::Producer;
use std::time::Duration;
use wavemix::playback::PlaybackMessage;

pub use state::MixState;

use spectrum::render_spectrum;
use waveform::render_waveform;

/// UI application state
pub struct UiApp {
    state: MixState,
    /// Control channel to the audio thread, if audio is enabled
    audio_tx: Option<Producer<PlaybackMessage>>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(state: MixState, audio_tx: Option<Producer<PlaybackMessage>>) -> Self {
        Self {
            state,
            audio_tx,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        self.sync_audio();

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // Nothing animates, so block a little longer than a frame
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let coarse = key.modifiers.contains(KeyModifiers::SHIFT);
        let step = if coarse { 10 } else { 1 };
        let mix = self.state.mix_percent();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Left => self.state.set_mix_percent(mix - step),
            KeyCode::Right => self.state.set_mix_percent(mix + step),
            KeyCode::PageDown => self.state.set_mix_percent(mix - 10),
            KeyCode::PageUp => self.state.set_mix_percent(mix + 10),
            KeyCode::Home => self.state.set_mix_percent(0),
            KeyCode::End => self.state.set_mix_percent(100),
            KeyCode::Tab => self.state.next_audition(),
            KeyCode::Char('p') => self.state.toggle_phase(),
            KeyCode::Char('r') => self.state.reload(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.state.transpose(1),
            KeyCode::Char('-') => self.state.transpose(-1),
            KeyCode::Char(' ') => self.state.playing = !self.state.playing,
            _ => return,
        }

        self.sync_audio();
    }

    /// Push the current table, pitch and play state to the audio thread
    fn sync_audio(&mut self) {
        let Some(tx) = self.audio_tx.as_mut() else {
            return;
        };

        let messages = [
            PlaybackMessage::SetTable(self.state.audition_table()),
            PlaybackMessage::SetFrequency {
                hz: self.state.frequency,
            },
            PlaybackMessage::SetPlaying(self.state.playing),
        ];
        for msg in messages {
            if tx.push(msg).is_err() {
                warn!("audio control queue full, dropping update");
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        // Main layout: header, slider, waveforms, spectrum, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(3),  // Mix slider
                Constraint::Min(16),    // Waveform grid
                Constraint::Length(10), // Spectrum
                Constraint::Length(1),  // Help bar
            ])
            .split(area);

        self.render_header(frame, chunks[0]);
        self.render_slider(frame, chunks[1]);
        self.render_waveforms(frame, chunks[2]);

        render_spectrum(frame, chunks[3], self.state.audition.label(), &self.state.spectrum);

        let help = Paragraph::new(
            " [←/→] Mix  [Shift/PgUp/PgDn] ±10  [Tab] Audition  [Space] Play/Pause  [+/-] Pitch  [P] Phase  [R] Reload  [Q] Quit",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[4]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" wavemix ").borders(Borders::ALL);
        let state = &self.state;

        let play_symbol = if state.playing { "▶" } else { "⏸" };
        let mut spans = vec![
            Span::styled(
                format!(" {} {}  ", play_symbol, state.audition.label()),
                Style::default().fg(if state.playing {
                    Color::Green
                } else {
                    Color::Yellow
                }),
            ),
            Span::styled(
                format!("{:.1} Hz  ", state.frequency),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("phase: {}  ", state.phase().name()),
                Style::default().fg(Color::White),
            ),
        ];
        if self.audio_tx.is_none() {
            spans.push(Span::styled("no audio  ", Style::default().fg(Color::DarkGray)));
        }
        if let Some(status) = &state.status {
            spans.push(Span::styled(status.clone(), Style::default().fg(Color::Red)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_slider(&self, frame: &mut Frame, area: Rect) {
        let percent = self.state.mix_percent();
        let gauge = Gauge::default()
            .block(Block::default().title(" Mix A ↔ B ").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Magenta))
            .percent(percent.clamp(0, 100) as u16)
            .label(format!("{percent}%"));
        frame.render_widget(gauge, area);
    }

    fn render_waveforms(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let [a, b] = &self.state.sources;
        render_waveform(frame, top[0], &format!("A: {}", a.name), Color::Red, &a.samples);
        render_waveform(frame, top[1], &format!("B: {}", b.name), Color::Red, &b.samples);
        render_waveform(
            frame,
            bottom[0],
            "Crossfade mix",
            Color::Cyan,
            &self.state.output.crossfade,
        );
        render_waveform(
            frame,
            bottom[1],
            "Spectral mix",
            Color::Cyan,
            &self.state.output.spectral,
        );
    }
}
