//! Application state and key dispatch for the TUI shell.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use neoncode_core::animator::{Speed, StepAnimator};
use neoncode_core::chat::ChatSession;
use neoncode_core::collab::CollabChat;
use neoncode_core::editor::{DemoEditor, SUGGESTIONS};
use neoncode_core::lessons::LessonDeck;
use neoncode_core::prompts::SavedPrompts;
use neoncode_core::session::Session;
use neoncode_core::shell::{MockShell, ShellEffect};
use neoncode_core::trace::FIB_STEPS;
use neoncode_core::voice::{VoiceEffect, VoicePanel, VoicePhase};
use neoncode_core::{Clock, SystemClock};
use neoncode_core_types::{SoundTheme, Theme};

use crate::config::Config;

/// Which input panel receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Editor,
    Shell,
    Collab,
}

/// Modal panels layered over the workspace. At most one is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Debug,
    Learning,
    Voice,
}

pub struct App {
    clock: SystemClock,
    pub session: Session,
    pub chat: ChatSession,
    pub prompts: SavedPrompts,
    pub shell: MockShell,
    pub voice: VoicePanel,
    pub collab: CollabChat,
    pub editor: DemoEditor,
    pub lessons: LessonDeck,
    pub animator: Option<StepAnimator>,
    pub rotation: f64,
    pub focus: Focus,
    pub overlay: Overlay,
    pub chat_input: String,
    pub collab_input: String,
    pub shell_input: String,
    pub suggestion_cursor: usize,
    pub prompt_cursor: Option<usize>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut session = Session::new();
        if let Some(theme) = config.theme {
            session.set_theme(theme);
        }
        if let Some(sound) = config.sound_theme {
            session.set_sound_theme(sound);
        }
        if let Some(ref name) = config.username {
            session.set_username(name);
        }
        Self {
            clock: SystemClock,
            session,
            chat: ChatSession::new(),
            prompts: SavedPrompts::with_defaults(),
            shell: MockShell::new(),
            voice: VoicePanel::new(),
            collab: CollabChat::new(),
            editor: DemoEditor::new(),
            lessons: LessonDeck::new(),
            animator: None,
            rotation: 0.0,
            focus: Focus::Chat,
            overlay: Overlay::None,
            chat_input: String::new(),
            collab_input: String::new(),
            shell_input: String::new(),
            suggestion_cursor: 0,
            prompt_cursor: None,
            notice: None,
            should_quit: false,
        }
    }

    pub fn now(&self) -> std::time::Instant {
        self.clock.now()
    }

    /// Advance every time-driven component. Called once per event-loop
    /// iteration, whether or not a key arrived.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.chat.poll(now);
        self.shell.poll(now);
        self.collab.poll(now);
        self.editor.poll(now);
        if let Some(VoiceEffect::ActivateLearning) = self.voice.poll(now) {
            self.session.set_learning_mode(true);
            self.overlay = Overlay::Learning;
        }
        if self.overlay == Overlay::Debug {
            if let Some(animator) = self.animator.as_mut() {
                animator.tick(now);
                if animator.is_playing() {
                    self.rotation = (self.rotation + 1.0) % 360.0;
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        match self.overlay {
            Overlay::Debug => self.handle_debug_key(key),
            Overlay::Learning => self.handle_learning_key(key),
            Overlay::Voice => self.handle_voice_key(key),
            Overlay::None => self.handle_workspace_key(key),
        }
    }

    fn handle_workspace_key(&mut self, key: KeyEvent) {
        let now = self.clock.now();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('t') => self.toggle_terminal(),
                KeyCode::Char('s') if self.focus == Focus::Chat => {
                    if self.prompts.save(&self.chat_input) {
                        self.notice = Some("Prompt saved".into());
                    }
                }
                KeyCode::Char('l') if self.focus == Focus::Chat => {
                    self.chat.clear();
                    self.notice = Some("Conversation cleared".into());
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::F(2) => {
                self.overlay = Overlay::Voice;
            }
            KeyCode::F(3) => self.open_debug(),
            KeyCode::F(4) => {
                self.session.set_learning_mode(true);
                self.overlay = Overlay::Learning;
            }
            KeyCode::F(5) => {
                self.session.toggle_multiplayer();
                if !self.session.multiplayer_mode() && self.focus == Focus::Collab {
                    self.focus = Focus::Chat;
                }
            }
            KeyCode::F(6) => self.cycle_theme(),
            KeyCode::F(7) => self.cycle_sound_theme(),
            KeyCode::F(8) => self.session.toggle_sound(),
            KeyCode::F(9) => self.session.toggle_presentation(),
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Enter => self.submit_focused(now),
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input_mut() {
                    input.pop();
                }
            }
            KeyCode::Up => self.focused_up(),
            KeyCode::Down => self.focused_down(),
            KeyCode::Esc => {
                if self.focus == Focus::Shell {
                    self.toggle_terminal();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.focused_input_mut() {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_debug_key(&mut self, key: KeyEvent) {
        let now = self.clock.now();
        let Some(animator) = self.animator.as_mut() else {
            self.overlay = Overlay::None;
            return;
        };
        match key.code {
            KeyCode::Char(' ') => animator.toggle(now),
            KeyCode::Left => animator.prev(now),
            KeyCode::Right => animator.next(now),
            KeyCode::Char('1') => animator.set_speed(Speed::Half),
            KeyCode::Char('2') => animator.set_speed(Speed::Normal),
            KeyCode::Char('3') => animator.set_speed(Speed::Double),
            KeyCode::Esc => {
                self.session.set_debug_mode(false);
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn handle_learning_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right | KeyCode::Enter => self.lessons.next(),
            KeyCode::Left => self.lessons.prev(),
            KeyCode::Char('h') => self.lessons.toggle_hint(),
            KeyCode::Esc => {
                self.session.set_learning_mode(false);
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn handle_voice_key(&mut self, key: KeyEvent) {
        let now = self.clock.now();
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('f') {
            self.voice.toggle_feedback();
            return;
        }
        match key.code {
            KeyCode::Enter => match self.voice.phase() {
                VoicePhase::Idle => self.voice.toggle_listening(),
                VoicePhase::Listening => {
                    self.voice.submit(now);
                }
                _ => {}
            },
            KeyCode::Backspace => {
                if let Some(transcript) = self.voice.transcript_mut() {
                    transcript.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(transcript) = self.voice.transcript_mut() {
                    transcript.push(c);
                }
            }
            KeyCode::Esc => {
                if self.voice.phase() != VoicePhase::Idle {
                    self.voice.toggle_listening();
                }
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    fn open_debug(&mut self) {
        self.session.set_debug_mode(true);
        self.animator = Some(StepAnimator::new(FIB_STEPS.len(), self.clock.now()));
        self.rotation = 0.0;
        self.overlay = Overlay::Debug;
        info!("debug visualization opened");
    }

    fn toggle_terminal(&mut self) {
        let open = !self.session.terminal_open();
        self.session.set_terminal_open(open);
        self.focus = if open { Focus::Shell } else { Focus::Chat };
    }

    fn cycle_focus(&mut self) {
        let order = [Focus::Chat, Focus::Editor, Focus::Shell, Focus::Collab];
        let mut index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        for _ in 0..order.len() {
            index = (index + 1) % order.len();
            let candidate = order[index];
            let visible = match candidate {
                Focus::Shell => self.session.terminal_open(),
                Focus::Collab => self.session.multiplayer_mode(),
                _ => true,
            };
            if visible {
                self.focus = candidate;
                return;
            }
        }
    }

    fn cycle_theme(&mut self) {
        let index = Theme::ALL
            .iter()
            .position(|t| *t == self.session.theme())
            .unwrap_or(0);
        self.session.set_theme(Theme::ALL[(index + 1) % Theme::ALL.len()]);
    }

    fn cycle_sound_theme(&mut self) {
        let index = SoundTheme::ALL
            .iter()
            .position(|t| *t == self.session.sound_theme())
            .unwrap_or(0);
        self.session
            .set_sound_theme(SoundTheme::ALL[(index + 1) % SoundTheme::ALL.len()]);
    }

    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Chat => Some(&mut self.chat_input),
            Focus::Shell => Some(&mut self.shell_input),
            Focus::Collab => Some(&mut self.collab_input),
            Focus::Editor => None,
        }
    }

    fn submit_focused(&mut self, now: std::time::Instant) {
        match self.focus {
            Focus::Chat => {
                if self.chat.submit(&self.chat_input, now) {
                    self.chat_input.clear();
                    self.prompt_cursor = None;
                }
            }
            Focus::Shell => {
                let command = std::mem::take(&mut self.shell_input);
                if self.shell.execute(&command, now) == ShellEffect::Close {
                    self.toggle_terminal();
                }
            }
            Focus::Collab => {
                if self.collab.send(&self.collab_input, now) {
                    self.collab_input.clear();
                }
            }
            Focus::Editor => {
                let suggestion = &SUGGESTIONS[self.suggestion_cursor];
                let outcome = self.editor.apply(suggestion, now);
                self.notice = Some(outcome.notice().to_string());
            }
        }
    }

    fn focused_up(&mut self) {
        match self.focus {
            Focus::Shell => {
                if let Some(entry) = self.shell.history_prev() {
                    self.shell_input = entry.to_string();
                }
            }
            Focus::Chat => {
                // Walk saved prompts oldest-last, recalling into the input.
                let next = match self.prompt_cursor {
                    Some(i) if i + 1 < self.prompts.len() => i + 1,
                    Some(i) => i,
                    None => 0,
                };
                if let Some(prompt) = self.prompts.get(next) {
                    self.chat_input = prompt.to_string();
                    self.prompt_cursor = Some(next);
                }
            }
            Focus::Editor => {
                self.suggestion_cursor = self.suggestion_cursor.saturating_sub(1);
            }
            Focus::Collab => {}
        }
    }

    fn focused_down(&mut self) {
        match self.focus {
            Focus::Shell => {
                match self.shell.history_next() {
                    Some(entry) => self.shell_input = entry.to_string(),
                    None => self.shell_input.clear(),
                }
            }
            Focus::Chat => match self.prompt_cursor {
                Some(0) | None => {
                    self.chat_input.clear();
                    self.prompt_cursor = None;
                }
                Some(i) => {
                    if let Some(prompt) = self.prompts.get(i - 1) {
                        self.chat_input = prompt.to_string();
                        self.prompt_cursor = Some(i - 1);
                    }
                }
            },
            Focus::Editor => {
                if self.suggestion_cursor + 1 < SUGGESTIONS.len() {
                    self.suggestion_cursor += 1;
                }
            }
            Focus::Collab => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = App::new(Config::default());
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_skips_hidden_panels() {
        let mut app = App::new(Config::default());
        assert_eq!(app.focus, Focus::Chat);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Editor);
        // Shell closed and multiplayer off: wraps straight back to chat.
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Chat);
    }

    #[test]
    fn terminal_toggle_moves_focus() {
        let mut app = App::new(Config::default());
        app.handle_key(ctrl('t'));
        assert!(app.session.terminal_open());
        assert_eq!(app.focus, Focus::Shell);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.session.terminal_open());
        assert_eq!(app.focus, Focus::Chat);
    }

    #[test]
    fn debug_overlay_owns_the_animator() {
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::F(3)));
        assert_eq!(app.overlay, Overlay::Debug);
        assert!(app.session.debug_mode());
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.animator.as_ref().unwrap().index(), 1);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert!(!app.session.debug_mode());
    }

    #[test]
    fn typed_chat_input_submits_and_clears() {
        let mut app = App::new(Config::default());
        for c in "hi".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.chat_input, "hi");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.chat_input.is_empty());
        assert!(app.chat.is_thinking());
    }

    #[test]
    fn prompt_recall_walks_saved_entries() {
        let mut app = App::new(Config::default());
        app.handle_key(key(KeyCode::Up));
        let first = app.chat_input.clone();
        assert_eq!(first.as_str(), app.prompts.get(0).unwrap());
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.chat_input.as_str(), app.prompts.get(1).unwrap());
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.chat_input, first);
    }
}
