//! Command trait, registry, and dispatch logic.
//!
//! A line is split on whitespace; the first token names the command (exact,
//! case-sensitive match) and the rest are positional arguments. There is no
//! quoting, piping, or redirection.

use folio_types::error::{FolioError, Result};
use folio_vfs::{ContentTree, Node, NodePath};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Text to append after the echo line. Embedded newlines become
    /// separate output lines.
    Text(String),
    /// Command produced no visible output beyond the echo line.
    None,
    /// Signal to wipe the output log.
    Clear,
}

/// Navigation state passed to every command.
pub struct Environment<'a> {
    /// Current working directory. Always resolves to a directory.
    pub cwd: NodePath,
    /// The read-only content tree.
    pub tree: &'a ContentTree,
}

impl<'a> Environment<'a> {
    /// The node the current path resolves to.
    pub fn current_dir(&self) -> Option<&'a Node> {
        self.tree.resolve(&self.cwd)
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cd \[dir\]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Commands are kept in registration order, which is also the order of the
/// `help` listing.
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name,
    /// keeping its position in the listing.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        match self.commands.iter().position(|c| c.name() == cmd.name()) {
            Some(i) => self.commands[i] = cmd,
            None => self.commands.push(cmd),
        }
    }

    /// Names of registered commands in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// One `usage - description` line per command, in registration order.
    pub fn help_lines(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(|c| format!("{} - {}", c.usage(), c.description()))
            .collect()
    }

    /// Parse and execute a command line.
    ///
    /// An empty line names no command and fails with
    /// [`FolioError::CommandNotFound`] like any unknown name.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<CommandOutput> {
        let tokens = tokenize(line);
        let Some((&name, args)) = tokens.split_first() else {
            return Err(FolioError::CommandNotFound);
        };

        // `help` needs the registry itself.
        if name == "help" && self.contains("help") {
            log::debug!("dispatch: help");
            return Ok(CommandOutput::Text(self.help_lines().join("\n")));
        }

        match self.commands.iter().find(|c| c.name() == name) {
            Some(cmd) => {
                log::debug!("dispatch: {name} {args:?} in {}", env.cwd);
                cmd.execute(args, env)
            },
            None => Err(FolioError::CommandNotFound),
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.commands.iter().any(|c| c.name() == name)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a trimmed line into whitespace-separated tokens.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_vfs::portfolio_tree;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    struct LoudEchoCmd;
    impl Command for LoudEchoCmd {
        fn name(&self) -> &str {
            "echo"
        }
        fn description(&self) -> &str {
            "Print arguments loudly"
        }
        fn usage(&self) -> &str {
            "echo [text...]"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(args.join(" ").to_uppercase()))
        }
    }

    fn make_env(tree: &ContentTree) -> Environment<'_> {
        Environment {
            cwd: NodePath::root(),
            tree,
        }
    }

    #[test]
    fn register_and_execute() {
        let tree = portfolio_tree().unwrap();
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let mut env = make_env(&tree);
        assert_eq!(
            reg.execute("echo hello world", &mut env).unwrap(),
            CommandOutput::Text("hello world".to_string())
        );
    }

    #[test]
    fn extra_whitespace_between_args() {
        let tree = portfolio_tree().unwrap();
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let mut env = make_env(&tree);
        assert_eq!(
            reg.execute("echo   a \t b", &mut env).unwrap(),
            CommandOutput::Text("a b".to_string())
        );
    }

    #[test]
    fn unknown_command() {
        let tree = portfolio_tree().unwrap();
        let reg = CommandRegistry::new();
        let mut env = make_env(&tree);
        let err = reg.execute("nonexistent", &mut env).unwrap_err();
        assert!(matches!(err, FolioError::CommandNotFound));
    }

    #[test]
    fn command_names_are_case_sensitive() {
        let tree = portfolio_tree().unwrap();
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let mut env = make_env(&tree);
        assert!(matches!(
            reg.execute("ECHO hi", &mut env),
            Err(FolioError::CommandNotFound)
        ));
    }

    #[test]
    fn empty_line_is_command_not_found() {
        let tree = portfolio_tree().unwrap();
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        let mut env = make_env(&tree);
        assert!(matches!(
            reg.execute("", &mut env),
            Err(FolioError::CommandNotFound)
        ));
        assert!(matches!(
            reg.execute("   ", &mut env),
            Err(FolioError::CommandNotFound)
        ));
    }

    #[test]
    fn register_replaces_in_place() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(LoudEchoCmd));
        assert_eq!(reg.names(), vec!["echo"]);
        assert_eq!(reg.help_lines(), vec!["echo [text...] - Print arguments loudly"]);
    }

    #[test]
    fn help_is_unknown_when_not_registered() {
        let tree = portfolio_tree().unwrap();
        let reg = CommandRegistry::new();
        let mut env = make_env(&tree);
        assert!(matches!(
            reg.execute("help", &mut env),
            Err(FolioError::CommandNotFound)
        ));
    }

    #[test]
    fn current_dir_is_root_initially() {
        let tree = portfolio_tree().unwrap();
        let env = make_env(&tree);
        assert_eq!(env.current_dir(), Some(tree.root()));
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        assert_eq!(tokenize("cd  projects"), vec!["cd", "projects"]);
        assert_eq!(tokenize("\tls\n"), vec!["ls"]);
        assert!(tokenize("").is_empty());
    }
}
