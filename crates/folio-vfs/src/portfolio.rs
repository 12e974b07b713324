//! The portfolio content shipped with the terminal.

use folio_types::error::Result;

use crate::tree::{ContentTree, Node};

/// Build the fixed portfolio tree.
///
/// Root entries, in display order: `about.txt`, `projects/`, `contact.txt`.
pub fn portfolio_tree() -> Result<ContentTree> {
    let projects = Node::directory([
        (
            "criptography.txt",
            Node::file(
                "An intro into criptography, understanding most basic and some advanced ciphers",
            ),
        ),
        (
            "this-project.txt",
            Node::file("A UNIX command like portfolio that is interactive"),
        ),
        (
            "static-page.txt",
            Node::file("A basic static page that got me into front-end and cloudflare"),
        ),
    ])?;

    let root = Node::directory([
        (
            "about.txt",
            Node::file("Hi, I'm 2Usi. A newbie hacker and CS student."),
        ),
        ("projects", projects),
        ("contact.txt", Node::file("Email: ...\nInstagram: @doua.usi")),
    ])?;

    ContentTree::new(root)
}
