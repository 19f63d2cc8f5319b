use std::path::PathBuf;

use anyhow::{Context, Result};
use bsor_rs::{load_replay_file_with_options, DecodeOptions, Replay, ReplaySummary};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bsor-rs")]
#[command(about = "Decode a BSOR replay and print a summary")]
struct Cli {
    /// Path to the .bsor file
    file: PathBuf,

    /// Print the full decoded replay and summary as JSON
    #[arg(long)]
    json: bool,

    /// Fail on strings that are not valid UTF-8
    #[arg(long)]
    strict_utf8: bool,

    /// Fail when bytes follow the last section
    #[arg(long)]
    reject_trailing: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    replay: &'a Replay,
    summary: &'a ReplaySummary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = DecodeOptions::default()
        .strict_text(cli.strict_utf8)
        .reject_trailing_bytes(cli.reject_trailing);

    let replay = load_replay_file_with_options(&cli.file, &options)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;
    let summary = ReplaySummary::from_replay(&replay);

    if cli.json {
        let report = JsonReport {
            replay: &replay,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&replay, &summary);
    }

    Ok(())
}

fn print_report(replay: &Replay, summary: &ReplaySummary) {
    let info = &replay.info;
    println!("Parsed BSOR (version {}):", replay.header.file_version);
    println!();
    println!("Info:");
    println!("  Player:      {} ({})", info.player_name, info.player_id);
    println!("  Platform:    {} / {}", info.platform, info.game_version);
    println!("  Headset:     {} / {} / {}", info.hmd, info.controller, info.tracking_system);
    println!("  Song:        {} mapped by {}", info.song_name, info.mapper);
    println!("  Difficulty:  {} ({})", info.difficulty, info.mode);
    println!("  Environment: {}", info.environment);
    println!("  Hash:        {}", info.hash);
    println!("  Score:       {}", info.score);
    println!("  Modifiers:   {}", info.modifiers.join(", "));
    println!("  Left handed: {}", info.left_handed);
    println!("  Height:      {:.2}", info.height);
    println!("  Jump dist.:  {:.2}", info.jump_distance);
    if info.fail_time > 0.0 {
        println!("  Failed at:   {:.2}s", info.fail_time);
    }
    println!();
    println!("Frames count: {}", replay.frame_count);
    println!("Note count: {}", replay.note_count);
    println!("Wall count: {}", replay.wall_count);
    println!("Height count (automatic height adjustment): {}", replay.height_count);
    println!("Pause count: {}", replay.pause_count);
    println!();
    match summary.average_fps {
        Some(fps) => println!("Average FPS: {fps:.2}"),
        None => println!("Average FPS: n/a"),
    }
    println!(
        "Good: {}  Bad: {}  Miss: {}  Bomb: {}",
        summary.good_cuts, summary.bad_cuts, summary.misses, summary.bombs
    );
    println!("Full combo: {}", summary.full_combo);
    println!("Total pause: {}s", summary.total_pause_duration);
}
