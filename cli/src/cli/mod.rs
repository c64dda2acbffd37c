pub mod argparse;

use std::path::Path;

use anyhow::Context;
use marquee_core::{
    clean_cue::{CleanCue, CleanCues},
    subs, timecode, Cue,
};

impl argparse::CliOpts {
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.subcmd {
            argparse::SubCommand::Subs(cmd) => match cmd {
                argparse::SubsCommand::Dump(args) => dump(args),
                argparse::SubsCommand::Script(args) => script(args),
                argparse::SubsCommand::At(args) => at(args),
            },
        }
    }
}

/// Read a subtitle file the way the player does: lossy text, lenient
/// parse, zero cues is not an error.
fn load_cues(path: &Path) -> anyhow::Result<Vec<Cue>> {
    let raw = std::fs::read(path)
        .with_context(|| format!("could not read subtitle file {:?}", path))?;
    let text = String::from_utf8_lossy(&raw);
    let cues = subs::parse(&text);
    if cues.is_empty() && !raw.is_empty() {
        log::warn!("no cues parsed from non-empty file {:?}", path);
    }
    Ok(cues)
}

fn dump(args: &argparse::DumpOpts) -> anyhow::Result<()> {
    let cues = load_cues(&args.file)?;
    log::info!("parsed {} cues from {:?}", cues.len(), args.file);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cues)?);
        return Ok(());
    }

    for (idx, cue) in cues.iter().enumerate() {
        println!(
            "{:>4}  {} --> {}",
            idx + 1,
            timecode::format_seconds(cue.start),
            timecode::format_seconds(cue.end),
        );
        for line in cue.text.lines() {
            println!("      {}", line);
        }
    }
    Ok(())
}

fn script(args: &argparse::ScriptOpts) -> anyhow::Result<()> {
    let cues = load_cues(&args.file)?;
    println!("{}", CleanCues(&cues));
    Ok(())
}

fn at(args: &argparse::AtOpts) -> anyhow::Result<()> {
    let cues = load_cues(&args.file)?;
    match marquee_core::active_cue(&cues, args.time) {
        Some(cue) => println!("{}", CleanCue(cue)),
        None => log::info!("no active cue at {}s", args.time),
    }
    Ok(())
}
