//! Line-level netlist syntax checks.

use crate::error::{Error, Result, SyntaxIssue};

/// Dot-commands accepted outside a control block, upper-cased.
pub const DOT_COMMANDS: &[&str] = &[
    "OPTIONS", // simulator variables
    "NODESET", // initial node voltage guesses
    "IC",      // initial conditions
    "AC",
    "DC",
    "DISTO",
    "NOISE",
    "OP",
    "PZ",
    "SENS",
    "TF",
    "TRAN",
    "PSS",
    "MEAS",
    "MEASURE",
    "SAVE",
    "PRINT",
    "PLOT",
    "FOUR",
    "PROBE",
    "WIDTH",
    "TITLE",
    "END",
    "MODEL",
    "SUBCKT",
    "ENDS",
    "GLOBAL",
    "INCLUDE",
    "LIB",
    "PARAM",
    "FUNC",
    "CSPARAM",
    "TEMP",
    "IF",
];

/// Comment and continuation markers.
const IGNORED_FIRST_CHARS: &[char] = &['*', '+'];

/// Validate normalized netlist lines.
///
/// `lines` must already be trimmed and free of blank entries. The first line
/// is the title and is never checked. `.control` / `.endc` open and close a
/// block whose lines, delimiters included, are not checked either.
pub fn validate_lines(lines: &[String]) -> Result<()> {
    let mut in_control = false;

    for (idx, line) in lines.iter().enumerate().skip(1) {
        let first_token = line.split_whitespace().next().unwrap_or_default();

        match first_token.to_uppercase().as_str() {
            ".CONTROL" => {
                in_control = true;
                continue;
            }
            ".ENDC" => {
                in_control = false;
                continue;
            }
            _ => {}
        }

        if in_control {
            continue;
        }

        if let Some(issue) = check_line(line) {
            log::debug!("netlist line {} rejected: {}", idx + 1, issue);
            return Err(Error::Syntax {
                line: idx + 1,
                text: line.clone(),
                issue,
            });
        }
    }

    Ok(())
}

/// Check a single line outside a control block.
fn check_line(line: &str) -> Option<SyntaxIssue> {
    let first = line.chars().next()?;

    if let Some(rest) = line.strip_prefix('.') {
        let command = rest
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_uppercase();
        return (!DOT_COMMANDS.contains(&command.as_str()))
            .then_some(SyntaxIssue::UnknownCommand(command));
    }

    if first.is_ascii_alphabetic() || IGNORED_FIRST_CHARS.contains(&first) {
        None
    } else {
        Some(SyntaxIssue::UnknownComponent(first))
    }
}
