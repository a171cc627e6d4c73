use std::fmt::{self, Write};

use crate::render::{Action, Element, Kind};

/// Plain-text rendering of a render tree for terminals
pub struct TextView<'a>(pub &'a Element);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self.0, 0, None)
    }
}

fn write_element(
    f: &mut fmt::Formatter<'_>,
    element: &Element,
    depth: usize,
    ordinal: Option<usize>,
) -> fmt::Result {
    let indent = "  ".repeat(depth);

    match element.kind {
        Kind::Panel => {}
        Kind::Card => {
            if let Some(n) = ordinal {
                writeln!(f, "{indent}#{n}")?;
            }
        }
        Kind::Heading => writeln!(f, "{indent}{}", element.text)?,
        Kind::Strong => writeln!(f, "{indent}**{}**", element.text)?,
        Kind::Text | Kind::Small => {
            if !element.text.is_empty() {
                writeln!(f, "{indent}{}", element.text)?;
            }
        }
        Kind::Button => writeln!(f, "{indent}[{}]", element.text)?,
        Kind::Choice => {
            let number = match element.action {
                Some(Action::SelectOption(index)) => index + 1,
                _ => ordinal.unwrap_or(0),
            };
            let mark = if element.has_class("correct") {
                " ✔"
            } else if element.has_class("wrong") {
                " ✘"
            } else {
                ""
            };
            writeln!(f, "{indent}{number}) {}{mark}", element.text)?;
        }
    }

    let child_depth = if element.kind == Kind::Panel {
        depth
    } else {
        depth + 1
    };

    // Phrase cards are addressed by number from the command line
    let numbered = element.has_class("phrase-list");
    let mut cards = 0;
    for child in &element.children {
        let ordinal = if numbered && child.kind == Kind::Card {
            cards += 1;
            Some(cards)
        } else {
            None
        };
        write_element(f, child, child_depth, ordinal)?;
    }

    Ok(())
}

/// Render with a titled frame
pub fn framed(title: &str, element: &Element) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "── {title} ──");
    let _ = write!(out, "{}", TextView(element));
    out
}
