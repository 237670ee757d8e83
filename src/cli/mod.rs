//! CLI Module
//!
//! Command-line interface for running paint scripts.

pub mod commands;
pub mod script;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::grid::DrawStyle;

/// Layerpaint - layered colour canvas with undo, redo and replay
#[derive(Parser, Debug)]
#[command(name = "layerpaint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available layers
    #[command(name = "layers")]
    Layers,

    /// Run a paint script and print the final canvas
    #[command(name = "run")]
    Run {
        /// Path to the paint script
        script: PathBuf,

        #[command(flatten)]
        session: SessionArgs,

        /// Output format for the final canvas
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Replay the recorded edits on a fresh canvas and compare
        #[arg(short, long)]
        replay: bool,
    },

    /// Run a paint script and show the undo/redo history
    #[command(name = "history")]
    History {
        /// Path to the paint script
        script: PathBuf,

        #[command(flatten)]
        session: SessionArgs,
    },
}

/// Session settings shared by the script commands
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Draw style: SET, ADD or SEQUENCE
    #[arg(short, long)]
    pub style: Option<DrawStyle>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<usize>,
}

impl SessionArgs {
    /// Build the session config: file (or defaults), then flag overrides
    pub fn to_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(style) = self.style {
            config.draw_style = style;
        }
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }

        config.validate()?;
        Ok(config)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per row of #rrggbb values
    Text,
    /// JSON frame
    Json,
}
