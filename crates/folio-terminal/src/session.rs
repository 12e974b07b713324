//! Terminal session: navigation state, output log, and the loading phase.
//!
//! A session starts in [`Phase::Loading`] with input disabled. When the
//! loading timer runs out (or [`Session::finish_loading`] is called) it moves
//! to [`Phase::Ready`] exactly once and the output log is replaced by the
//! welcome banner. From then on every submitted line runs through the
//! command registry and its result is appended to the log.

use folio_types::config::FolioConfig;
use folio_types::input::InputEvent;
use folio_vfs::{ContentTree, NodePath};

use crate::banner;
use crate::commands::register_builtins;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::loading::LoadingTimer;

/// Prefix of the line that re-displays a submitted command.
pub const ECHO_PREFIX: &str = "> ";

/// Session lifecycle phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Startup animation in progress; input is ignored.
    Loading(LoadingTimer),
    /// Accepting one command per submission.
    Ready,
}

/// What the frontend should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// A single visitor's terminal session over a read-only content tree.
pub struct Session<'a> {
    tree: &'a ContentTree,
    registry: CommandRegistry,
    title: String,
    phase: Phase,
    path: NodePath,
    output: Vec<String>,
    input: String,
    resets: u64,
}

impl<'a> Session<'a> {
    /// Create a session in the loading phase with the built-in commands.
    pub fn new(tree: &'a ContentTree, config: &FolioConfig) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self {
            tree,
            registry,
            title: config.title.clone(),
            phase: Phase::Loading(LoadingTimer::new(
                config.loading_delay_ms,
                config.loading_tick_ms,
            )),
            path: NodePath::root(),
            output: Vec::new(),
            input: String::new(),
            resets: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Current directory.
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// Terminal scrollback.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// How many times the output log has been wholesale replaced (banner
    /// or `clear`). Renderers compare it to know when to redraw from scratch.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// The line being composed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Prompt shown before the input line: `/a/b$`, or `$` at the root.
    pub fn prompt(&self) -> String {
        if self.path.is_root() {
            "$".to_string()
        } else {
            format!("{}$", self.path)
        }
    }

    /// Loading animation text, or empty once ready.
    pub fn loading_text(&self) -> String {
        match &self.phase {
            Phase::Loading(timer) => timer.text(),
            Phase::Ready => String::new(),
        }
    }

    /// Advance the loading timer by `dt_ms`.
    ///
    /// Returns `true` on the tick that completes loading. Has no effect once
    /// the session is ready.
    pub fn tick(&mut self, dt_ms: u32) -> bool {
        let done = match &mut self.phase {
            Phase::Loading(timer) => timer.tick(dt_ms),
            Phase::Ready => return false,
        };
        if done {
            self.finish_loading();
        }
        done
    }

    /// Move to the ready phase now and show the welcome banner.
    ///
    /// Does nothing if the session is already ready.
    pub fn finish_loading(&mut self) {
        if self.is_ready() {
            return;
        }
        // Dropping the timer stops the animation.
        self.phase = Phase::Ready;
        self.output = banner::welcome_lines(&self.title, &self.registry.help_lines());
        self.resets += 1;
        log::info!("Terminal ready ({} commands)", self.registry.names().len());
    }

    /// Apply one input event. Ignored while loading, except for quit.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputResult {
        if *event == InputEvent::Quit {
            return InputResult::Quit;
        }
        if !self.is_ready() {
            return InputResult::Continue;
        }
        match event {
            InputEvent::TextInput(ch) => self.input.push(*ch),
            InputEvent::Backspace => {
                self.input.pop();
            },
            InputEvent::Submit => {
                let line = std::mem::take(&mut self.input);
                self.submit(&line);
            },
            InputEvent::Quit => {},
        }
        InputResult::Continue
    }

    /// Run one raw line through the interpreter and clear the pending input.
    ///
    /// Every outcome, failures included, lands in the output log. Ignored
    /// while loading.
    pub fn submit(&mut self, line: &str) {
        if !self.is_ready() {
            log::debug!("Input ignored while loading");
            return;
        }
        self.input.clear();

        let trimmed = line.trim();
        let mut env = Environment {
            cwd: self.path.clone(),
            tree: self.tree,
        };
        let result = self.registry.execute(trimmed, &mut env);

        match result {
            Ok(CommandOutput::Clear) => {
                self.output.clear();
                self.resets += 1;
            },
            Ok(output) => {
                self.echo(trimmed);
                if let CommandOutput::Text(text) = output {
                    self.output.extend(text.lines().map(str::to_string));
                }
                debug_assert!(self.tree.resolve_dir(&env.cwd).is_some());
                self.path = env.cwd;
            },
            Err(e) => {
                log::debug!("{trimmed:?} in {}: {e}", self.path);
                self.echo(trimmed);
                self.output.push(e.to_string());
            },
        }
    }

    fn echo(&mut self, line: &str) {
        self.output.push(format!("{ECHO_PREFIX}{line}"));
    }
}
