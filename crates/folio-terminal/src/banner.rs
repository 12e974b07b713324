//! Welcome banner shown when loading finishes.

const ASCII_ART: &[&str] = &[
    " ___  _   _     _ ",
    r"|__ \| | | |   (_)",
    "   ) | | | |___ _ ",
    "  / /| | | / __| |",
    r" / /_| |_| \__ \ |",
    r"|____|\___/|___/_|",
];

/// Build the banner lines: ASCII art, greeting, then the command list.
pub fn welcome_lines(title: &str, help_lines: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(ASCII_ART.len() + help_lines.len() + 6);
    lines.push(String::new());
    lines.extend(ASCII_ART.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push(String::new());
    lines.push(format!("Welcome to {title}"));
    lines.push(String::new());
    lines.push("Available commands:".to_string());
    lines.extend(help_lines.iter().cloned());
    lines
}
