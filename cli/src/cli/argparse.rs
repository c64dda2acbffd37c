use std::path::PathBuf;

use clap::Parser;

pub fn get_args() -> CliOpts {
    CliOpts::parse()
}

#[derive(Parser, Debug)]
#[clap(version = clap::crate_version!())]
pub struct CliOpts {
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser, Debug)]
pub enum SubCommand {
    /// Inspect subtitle files the way the player ingests them
    #[clap(subcommand)]
    Subs(SubsCommand),
}

#[derive(Parser, Debug)]
pub enum SubsCommand {
    /// Parse a subtitle file and print its cues
    Dump(DumpOpts),

    /// Flatten a subtitle file into a single script line
    Script(ScriptOpts),

    /// Show the cue active at a given playback time
    At(AtOpts),
}

#[derive(Parser, Debug)]
pub struct DumpOpts {
    /// Subtitle file (.srt or .vtt)
    pub file: PathBuf,

    /// Emit cues as JSON instead of text
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ScriptOpts {
    /// Subtitle file (.srt or .vtt)
    pub file: PathBuf,
}

#[derive(Parser, Debug)]
pub struct AtOpts {
    /// Subtitle file (.srt or .vtt)
    pub file: PathBuf,

    /// Playback time in seconds
    pub time: f64,
}
