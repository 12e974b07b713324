//! Built-in commands for the folio terminal.

use folio_types::error::{FolioError, Result};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Register the built-in commands into a registry.
///
/// Registration order is the `help` listing order.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(ClearCmd));
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> &str {
        "ls"
    }
    fn description(&self) -> &str {
        "List directory contents"
    }
    fn usage(&self) -> &str {
        "ls"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let dir = env
            .current_dir()
            .filter(|node| node.is_dir())
            .ok_or(FolioError::NotADirectory)?;
        let names: Vec<&str> = dir.entry_names().collect();
        Ok(CommandOutput::Text(names.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> &str {
        "cd"
    }
    fn description(&self) -> &str {
        "Change directory"
    }
    fn usage(&self) -> &str {
        "cd [dir]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let target = args.first().copied().ok_or(FolioError::DirectoryNotFound)?;
        if target == ".." {
            env.cwd = env.cwd.parent();
            return Ok(CommandOutput::None);
        }
        let dir = env.current_dir().ok_or(FolioError::DirectoryNotFound)?;
        match dir.entry(target) {
            Some(node) if node.is_dir() => {
                env.cwd = env.cwd.join(target);
                Ok(CommandOutput::None)
            },
            _ => Err(FolioError::DirectoryNotFound),
        }
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> &str {
        "cat"
    }
    fn description(&self) -> &str {
        "Display file contents"
    }
    fn usage(&self) -> &str {
        "cat [file]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let name = args.first().copied().ok_or(FolioError::FileNotFound)?;
        let content = env
            .current_dir()
            .and_then(|dir| dir.entry(name))
            .and_then(|node| node.content())
            .ok_or(FolioError::FileNotFound)?;
        Ok(CommandOutput::Text(content.to_string()))
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "Show available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        // The registry intercepts `help` and renders its own listing; this
        // entry only supplies the name and description for it.
        Ok(CommandOutput::None)
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
