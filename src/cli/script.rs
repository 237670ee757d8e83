//! Paint scripts
//!
//! One command per line; `#` starts a comment and blank lines are ignored.
//!
//! ```text
//! paint <layer> <x> <y>   # layer is a registry position or id
//! special
//! undo
//! redo
//! brush +|-
//! style                   # cycle the draw mode
//! tick <seconds>
//! ```

use std::str::FromStr;

use thiserror::Error;

/// A parse failure, tagged with its 1-based line number
#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

/// A single script command
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Paint { layer: String, x: usize, y: usize },
    Special,
    Undo,
    Redo,
    BrushUp,
    BrushDown,
    Style,
    Tick(f64),
}

/// A command and the line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

fn parse_number<T: FromStr>(token: &str, what: &str) -> Result<T, String> {
    token
        .parse()
        .map_err(|_| format!("invalid {}: '{}'", what, token))
}

fn expect_args(keyword: &str, args: &[&str], count: usize) -> Result<(), String> {
    if args.len() != count {
        return Err(format!(
            "'{}' takes {} argument(s), got {}",
            keyword,
            count,
            args.len()
        ));
    }
    Ok(())
}

impl FromStr for ScriptCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or_else(|| "empty command".to_string())?;
        let args: Vec<&str> = tokens.collect();

        match keyword.to_ascii_lowercase().as_str() {
            "paint" => {
                expect_args(keyword, &args, 3)?;
                Ok(ScriptCommand::Paint {
                    layer: args[0].to_string(),
                    x: parse_number(args[1], "x coordinate")?,
                    y: parse_number(args[2], "y coordinate")?,
                })
            }
            "special" => expect_args(keyword, &args, 0).map(|_| ScriptCommand::Special),
            "undo" => expect_args(keyword, &args, 0).map(|_| ScriptCommand::Undo),
            "redo" => expect_args(keyword, &args, 0).map(|_| ScriptCommand::Redo),
            "style" => expect_args(keyword, &args, 0).map(|_| ScriptCommand::Style),
            "brush" => {
                expect_args(keyword, &args, 1)?;
                match args[0] {
                    "+" => Ok(ScriptCommand::BrushUp),
                    "-" => Ok(ScriptCommand::BrushDown),
                    other => Err(format!("brush expects '+' or '-', got '{}'", other)),
                }
            }
            "tick" => {
                expect_args(keyword, &args, 1)?;
                let seconds: f64 = parse_number(args[0], "duration")?;
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(format!("tick needs a non-negative duration, got {}", seconds));
                }
                Ok(ScriptCommand::Tick(seconds))
            }
            other => Err(format!("unknown command '{}'", other)),
        }
    }
}

/// Parse a whole script, stopping at the first bad line
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();

    for (i, raw) in source.lines().enumerate() {
        let text = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        }
        .trim();

        if text.is_empty() {
            continue;
        }

        let command = text.parse().map_err(|message| ScriptError {
            line: i + 1,
            message,
        })?;
        commands.push(ScriptLine {
            line: i + 1,
            command,
        });
    }

    Ok(commands)
}
