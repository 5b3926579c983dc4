//! TUI application state and logic

use crate::engine::{GameEngine, GameOutcome, Key, SubmitOutcome};
use crate::ports::DictionaryValidator;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// One on-screen keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Letter(char),
    /// Submit the row
    Go,
    /// Delete the last letter
    Del,
}

impl KeypadKey {
    /// The engine operation this key maps to
    #[must_use]
    pub const fn to_key(self) -> Key {
        match self {
            Self::Letter(c) => Key::Letter(c),
            Self::Go => Key::Submit,
            Self::Del => Key::Delete,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => c.to_string(),
            Self::Go => "GO".to_string(),
            Self::Del => "DEL".to_string(),
        }
    }
}

const fn letters<const N: usize>(s: &[u8; N]) -> [KeypadKey; N] {
    let mut keys = [KeypadKey::Go; N];
    let mut i = 0;
    while i < N {
        keys[i] = KeypadKey::Letter(s[i] as char);
        i += 1;
    }
    keys
}

const ROW_TOP: [KeypadKey; 10] = letters(b"QWERTYUIOP");
const ROW_MID: [KeypadKey; 9] = letters(b"ASDFGHJKL");
const ROW_BOTTOM: [KeypadKey; 9] = {
    let mut keys = letters(b"ZZXCVBNMZ");
    keys[0] = KeypadKey::Go;
    keys[1] = KeypadKey::Letter('Z');
    keys[8] = KeypadKey::Del;
    keys
};

/// The keypad layout: three sparse rows of keys, no filler cells
pub const KEYPAD_ROWS: [&[KeypadKey]; 3] = [&ROW_TOP, &ROW_MID, &ROW_BOTTOM];

/// How long messages stay on screen
const MESSAGE_SHORT: Duration = Duration::from_millis(1000);
const MESSAGE_RETRY: Duration = Duration::from_millis(2000);
const MESSAGE_WIN: Duration = Duration::from_millis(3000);
const MESSAGE_LOSS: Duration = Duration::from_millis(5000);

/// How long a rejected row shakes
const SHAKE_DURATION: Duration = Duration::from_millis(1000);

/// A transient status message
pub struct Message {
    pub text: String,
    pub expires_at: Instant,
}

/// Application state
pub struct App<V> {
    pub engine: GameEngine<V>,
    pub message: Option<Message>,
    /// Row currently shaking after a rejected submission
    pub shaking: Option<(usize, Instant)>,
    /// Keypad hit-boxes recorded during the last draw, for mouse input
    pub key_rects: Vec<(Rect, KeypadKey)>,
    pub should_quit: bool,
}

impl<V: DictionaryValidator> App<V> {
    #[must_use]
    pub fn new(engine: GameEngine<V>) -> Self {
        Self {
            engine,
            message: None,
            shaking: None,
            key_rects: Vec::new(),
            should_quit: false,
        }
    }

    pub fn show_message(&mut self, text: impl Into<String>, duration: Duration) {
        self.message = Some(Message {
            text: text.into(),
            expires_at: Instant::now() + duration,
        });
    }

    fn shake_current_row(&mut self) {
        let (row, _) = self.engine.grid().cursor();
        self.shaking = Some((row, Instant::now() + SHAKE_DURATION));
    }

    /// Drop the message and shake cue once their display time is up
    pub fn tick(&mut self) {
        let now = Instant::now();
        if self.message.as_ref().is_some_and(|m| m.expires_at <= now) {
            self.message = None;
        }
        if self.shaking.is_some_and(|(_, until)| until <= now) {
            self.shaking = None;
        }
    }

    /// Submit the current row and translate the outcome into UI cues
    pub async fn submit(&mut self) {
        match self.engine.submit_row().await {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::NotEnoughLetters => {
                self.shake_current_row();
                self.show_message("Not enough letters", MESSAGE_SHORT);
            }
            SubmitOutcome::NotInDictionary => {
                self.shake_current_row();
                self.show_message("Not in dictionary", MESSAGE_SHORT);
            }
            SubmitOutcome::ValidatorUnavailable => {
                self.shake_current_row();
                self.show_message("Validation unavailable, try again", MESSAGE_RETRY);
            }
            SubmitOutcome::Scored(report) => match report.outcome {
                GameOutcome::Won { attempts } => {
                    let noun = if attempts == 1 { "attempt" } else { "attempts" };
                    self.show_message(
                        format!("Congrats! You guessed it in {attempts} {noun}."),
                        MESSAGE_WIN,
                    );
                }
                GameOutcome::Lost => {
                    self.show_message(
                        format!(
                            "Sorry, you ran out of all attempts. The word is {}.",
                            self.engine.solution()
                        ),
                        MESSAGE_LOSS,
                    );
                }
                GameOutcome::InProgress => {}
            },
        }
    }

    /// Route a normalized key; submits when the key asks for it
    pub async fn handle_key(&mut self, key: Key) {
        if self.engine.handle_key(key) {
            self.submit().await;
        }
    }

    /// Map a mouse click to the keypad key under it, if any
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<KeypadKey> {
        self.key_rects
            .iter()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|&(_, key)| key)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<V: DictionaryValidator>(app: App<V>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend, V: DictionaryValidator>(
    terminal: &mut Terminal<B>,
    mut app: App<V>,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        // Poll with a short tick so message/shake expiry redraws promptly
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (fixes Windows double-input bug)
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') if app.engine.is_over() => {
                            app.should_quit = true;
                        }
                        KeyCode::Enter => {
                            app.handle_key(Key::Submit).await;
                        }
                        KeyCode::Backspace => {
                            app.handle_key(Key::Delete).await;
                        }
                        KeyCode::Char(c) => {
                            if let Some(key) = Key::from_char(c) {
                                app.handle_key(key).await;
                            }
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                        && let Some(key) = app.key_at(mouse.column, mouse.row)
                    {
                        app.handle_key(key.to_key()).await;
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keypad_covers_the_alphabet_once() {
        let mut seen = [false; 26];
        let mut go = 0;
        let mut del = 0;

        for row in KEYPAD_ROWS {
            for key in row {
                match key {
                    KeypadKey::Letter(c) => {
                        let i = (*c as u8 - b'A') as usize;
                        assert!(!seen[i], "duplicate keypad letter {c}");
                        seen[i] = true;
                    }
                    KeypadKey::Go => go += 1,
                    KeypadKey::Del => del += 1,
                }
            }
        }

        assert!(seen.iter().all(|&s| s), "keypad missing letters");
        assert_eq!(go, 1);
        assert_eq!(del, 1);
    }

    #[test]
    fn keypad_keys_normalize_to_engine_ops() {
        assert_eq!(KeypadKey::Go.to_key(), Key::Submit);
        assert_eq!(KeypadKey::Del.to_key(), Key::Delete);
        assert_eq!(KeypadKey::Letter('A').to_key(), Key::Letter('A'));
    }

    #[test]
    fn keypad_labels() {
        assert_eq!(KeypadKey::Go.label(), "GO");
        assert_eq!(KeypadKey::Del.label(), "DEL");
        assert_eq!(KeypadKey::Letter('Q').label(), "Q");
    }
}
