mod app;
mod config;
mod fragments;
mod input;
mod model;
mod noise;
mod render;
mod sim;

use anyhow::Result;
use clap::Parser;

/// A small memory garden for your terminal. Click to plant, hover to read,
/// 1/2/3 switch themes, end when ready.
#[derive(Parser)]
pub(crate) struct Args {
    /// deterministic session seed (otherwise taken from settings or the clock)
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// frames per second cap
    #[arg(long)]
    pub(crate) fps: Option<u32>,

    /// plain white-on-black output
    #[arg(long)]
    pub(crate) no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    app::run(&args)
}
