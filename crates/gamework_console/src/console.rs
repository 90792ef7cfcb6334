use std::collections::VecDeque;

use gamework_core::{ConsoleConfig, InputState, KeyCode};
use gamework_gui::{Rect, RenderCommand};

use crate::command::{CommandError, CommandOutcome, DevelopmentCommand};
use crate::registry::{CommandRegistry, ConsoleError};
use crate::sink::ConsoleSink;

const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 0.8];
const TEXT: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
const INPUT_BACKGROUND: [f32; 4] = [0.1, 0.1, 0.12, 1.0];

/// Everything a command may change: visibility, input line, output and
/// history.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    visible: bool,
    prompt: String,
    input: String,
    output: VecDeque<String>,
    max_lines: usize,
    history: VecDeque<String>,
    history_limit: usize,
    /// Entry shown by up/down recall; `None` while editing a fresh line.
    history_cursor: Option<usize>,
}

impl ConsoleState {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            visible: config.open_on_start,
            prompt: config.prompt.clone(),
            input: String::new(),
            output: VecDeque::new(),
            max_lines: config.max_lines.max(1),
            history: VecDeque::new(),
            history_limit: config.history,
            history_cursor: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.history_cursor = None;
    }

    /// Append a line of output, dropping the oldest past `max_lines`.
    /// Embedded newlines start new lines.
    pub fn print(&mut self, text: &str) {
        for line in text.lines() {
            if self.output.len() == self.max_lines {
                self.output.pop_front();
            }
            self.output.push_back(line.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.output.clear();
    }

    pub fn output(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(String::as_str)
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    fn remember(&mut self, line: &str) {
        self.history_cursor = None;
        if self.history_limit == 0 || self.history.back().is_some_and(|last| last == line) {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(line.to_string());
    }

    /// Step back through history (older).
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_cursor {
            Some(i) => i.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.history_cursor = Some(index);
        self.input = self.history[index].clone();
    }

    /// Step forward through history; past the newest entry the line empties.
    pub fn history_down(&mut self) {
        let Some(i) = self.history_cursor else {
            return;
        };
        if i + 1 < self.history.len() {
            self.history_cursor = Some(i + 1);
            self.input = self.history[i + 1].clone();
        } else {
            self.history_cursor = None;
            self.input.clear();
        }
    }
}

/// In-game command console.
///
/// Drive it once per frame with [`handle_input`](Self::handle_input); draw it
/// with [`collect`](Self::collect) while visible.
pub struct DevelopmentConsole {
    state: ConsoleState,
    commands: CommandRegistry,
    sink: Option<ConsoleSink>,
}

impl DevelopmentConsole {
    /// Console with the built-in commands registered.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            state: ConsoleState::new(config),
            commands: CommandRegistry::with_builtins(),
            sink: None,
        }
    }

    /// Show captured log records in the output.
    pub fn with_sink(mut self, sink: ConsoleSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn register(&mut self, command: Box<dyn DevelopmentCommand>) -> Result<(), ConsoleError> {
        self.commands.register(command)
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ConsoleState {
        &mut self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Echo `line`, remember it and run it. Output lines and error messages
    /// are printed to the console as well as returned.
    pub fn submit(&mut self, line: &str) -> Result<CommandOutcome, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(CommandOutcome::Ok);
        }
        let echo = format!("{}{}", self.state.prompt, line);
        self.state.print(&echo);
        self.state.remember(line);

        let result = self.commands.execute(line, Some(&mut self.state));
        match &result {
            Ok(CommandOutcome::Output(lines)) => {
                for l in lines {
                    self.state.print(l);
                }
            }
            Ok(CommandOutcome::Ok) => {}
            Err(e) => self.state.print(&e.to_string()),
        }
        result
    }

    /// Move captured log lines into the output.
    pub fn drain_log(&mut self) {
        if let Some(sink) = &self.sink {
            for line in sink.drain() {
                self.state.print(&line);
            }
        }
    }

    /// Process this frame's keyboard input.
    ///
    /// Backquote toggles the console; while visible, typed text goes to the
    /// input line, Backspace deletes, Enter submits and Up/Down recall
    /// history.
    pub fn handle_input(&mut self, input: &InputState) {
        self.drain_log();

        if input.key_just_pressed(KeyCode::Backquote) {
            self.state.toggle();
            return;
        }
        if !self.state.visible {
            return;
        }

        for c in input.text().chars() {
            if !c.is_control() && c != '`' {
                self.state.input.push(c);
            }
        }
        if input.key_just_pressed(KeyCode::Backspace) {
            self.state.input.pop();
        }
        if input.key_just_pressed(KeyCode::ArrowUp) {
            self.state.history_up();
        }
        if input.key_just_pressed(KeyCode::ArrowDown) {
            self.state.history_down();
        }
        if input.key_just_pressed(KeyCode::Enter) || input.key_just_pressed(KeyCode::NumpadEnter) {
            let line = std::mem::take(&mut self.state.input);
            // failures are already printed
            let _ = self.submit(&line);
        }
    }

    /// Draw the console over `area`: output lines from the bottom up, then
    /// the input line along the bottom edge. Nothing is drawn when hidden.
    pub fn collect(&self, area: Rect, font_size: f32, cmds: &mut Vec<RenderCommand>) {
        if !self.state.visible {
            return;
        }
        let line_height = font_size + 4.0;
        cmds.push(RenderCommand::quad(area, BACKGROUND));

        let input_rect = Rect::new(area.x, area.bottom() - line_height, area.width, line_height);
        cmds.push(RenderCommand::quad(input_rect, INPUT_BACKGROUND));
        cmds.push(RenderCommand::text(
            input_rect.inset(2.0),
            format!("{}{}", self.state.prompt, self.state.input),
            TEXT,
            font_size,
        ));

        let mut y = input_rect.y - line_height;
        for line in self.state.output.iter().rev() {
            if y < area.y {
                break;
            }
            let rect = Rect::new(area.x + 2.0, y, area.width - 4.0, line_height);
            cmds.push(RenderCommand::text(rect, line.clone(), TEXT, font_size));
            y -= line_height;
        }
    }
}
