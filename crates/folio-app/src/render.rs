//! Console rendering of the session output log.

use std::io::{self, Write};

use folio_terminal::Session;

/// ANSI: clear screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Incremental renderer: prints only the log lines added since the last
/// sync, and redraws from scratch after the log has been reset.
pub struct ConsoleRenderer {
    title: String,
    shown: usize,
    resets: u64,
}

impl ConsoleRenderer {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            shown: 0,
            resets: 0,
        }
    }

    /// Print the page header.
    pub fn header(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, ">_ {}", self.title)?;
        writeln!(out)
    }

    /// Overwrite the current line with the loading animation.
    pub fn loading(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        // Trailing spaces erase leftover dots from the previous frame.
        write!(out, "\r{text:<10}")?;
        out.flush()
    }

    /// Bring the screen up to date with the session's log.
    pub fn sync(&mut self, out: &mut impl Write, session: &Session<'_>) -> io::Result<()> {
        if session.resets() != self.resets {
            write!(out, "{CLEAR_SCREEN}")?;
            self.header(out)?;
            self.resets = session.resets();
            self.shown = 0;
        }
        let lines = session.output();
        for line in lines.iter().skip(self.shown) {
            writeln!(out, "{line}")?;
        }
        self.shown = lines.len();
        out.flush()
    }

    /// Print the prompt without a newline.
    pub fn prompt(&self, out: &mut impl Write, session: &Session<'_>) -> io::Result<()> {
        write!(out, "{} ", session.prompt())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::config::FolioConfig;
    use folio_vfs::portfolio_tree;

    fn text(buf: &[u8]) -> String {
        String::from_utf8(buf.to_vec()).unwrap()
    }

    #[test]
    fn banner_sync_clears_screen_first() {
        let tree = portfolio_tree().unwrap();
        let mut session = Session::new(&tree, &FolioConfig::default());
        session.finish_loading();
        let mut r = ConsoleRenderer::new("T");
        let mut buf: Vec<u8> = Vec::new();
        r.sync(&mut buf, &session).unwrap();
        let out = text(&buf);
        assert!(out.starts_with(CLEAR_SCREEN));
        assert!(out.contains(">_ T\n"));
        assert!(out.contains("Available commands:\n"));
    }

    #[test]
    fn sync_is_incremental() {
        let tree = portfolio_tree().unwrap();
        let mut session = Session::new(&tree, &FolioConfig::default());
        session.finish_loading();
        let mut r = ConsoleRenderer::new("T");
        r.sync(&mut io::sink(), &session).unwrap();

        session.submit("cat about.txt");
        let mut buf: Vec<u8> = Vec::new();
        r.sync(&mut buf, &session).unwrap();
        assert_eq!(
            text(&buf),
            "> cat about.txt\nHi, I'm 2Usi. A newbie hacker and CS student.\n"
        );

        let mut buf: Vec<u8> = Vec::new();
        r.sync(&mut buf, &session).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_redraws_header_only() {
        let tree = portfolio_tree().unwrap();
        let mut session = Session::new(&tree, &FolioConfig::default());
        session.finish_loading();
        let mut r = ConsoleRenderer::new("T");
        r.sync(&mut io::sink(), &session).unwrap();

        session.submit("clear");
        let mut buf: Vec<u8> = Vec::new();
        r.sync(&mut buf, &session).unwrap();
        assert_eq!(text(&buf), format!("{CLEAR_SCREEN}>_ T\n\n"));
    }

    #[test]
    fn prompt_follows_path() {
        let tree = portfolio_tree().unwrap();
        let mut session = Session::new(&tree, &FolioConfig::default());
        session.finish_loading();
        session.submit("cd projects");
        let r = ConsoleRenderer::new("T");
        let mut buf: Vec<u8> = Vec::new();
        r.prompt(&mut buf, &session).unwrap();
        assert_eq!(text(&buf), "/projects$ ");
    }

    #[test]
    fn loading_frame_is_padded() {
        let r = ConsoleRenderer::new("T");
        let mut buf: Vec<u8> = Vec::new();
        r.loading(&mut buf, "Loading").unwrap();
        assert_eq!(text(&buf), "\rLoading   ");
    }
}
