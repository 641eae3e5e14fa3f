//! CLI definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inspector-demo")]
#[command(about = "Interactive demo of the attribute-driven inspector")]
pub struct Cli {
    /// Config file to use instead of the platform config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Don't load or save foldout expansion states (saved on every toggle otherwise)
    #[arg(long)]
    pub no_persist: bool,

    /// Target selected at startup
    #[arg(long, value_enum, default_value_t = TargetChoice::Lantern)]
    pub target: TargetChoice,
}

/// Sample targets shown by the demo
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TargetChoice {
    Lantern,
    Spawner,
}
