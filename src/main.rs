/**
 * pointSpitter
 *
 * A point-cycle splitter for craps roll-sequence analysis.
 *
 * Reads a plain-text session log of dice-roll sums, splits it into successive
 * point cycles (come-out roll through resolution) and prints an annotated
 * report. With --json the cycles are emitted as a JSON document instead.
 *
 * Usage: ./pointSpitter [filename.log] [--json] > [report]
 * If no filename is provided, it defaults to "session.log".
 */
mod point_spitter;

use std::error::Error;
use std::fs;

use clap::Parser;
use serde::Serialize;

use crate::point_spitter::format_helpers::{format_cycle_header, format_roll_sequence};
use crate::point_spitter::models::PointCycle;
use crate::point_spitter::parser::parse_session_log;
use crate::point_spitter::session::split_session;

#[derive(Parser)]
#[command(
    name = "pointSpitter",
    version,
    about = "Splits a craps roll log into point cycles"
)]
struct Cli {
    /// Session log to split. One or more rolls per line; `;` and `#` start comments.
    #[arg(default_value = "session.log")]
    filename: String,

    /// Emit the point cycles as JSON instead of the annotated report.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SessionReport<'a> {
    source: &'a str,
    total_rolls: usize,
    cycles: &'a [PointCycle],
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.filename)?;
    let rolls = parse_session_log(&content)?;
    let cycles = split_session(&rolls)?;

    if cli.json {
        let report = SessionReport {
            source: &cli.filename,
            total_rolls: rolls.len(),
            cycles: &cycles,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("; ------------------------------------------");
    println!("; This report is generated using");
    println!("; pointSpitter");
    println!("; Source: {}", cli.filename);
    println!("; Total rolls: {}", rolls.len());
    println!("; Point cycles found: {}", cycles.len());
    println!("; ------------------------------------------");
    for (i, cycle) in cycles.iter().enumerate() {
        println!("{}", format_cycle_header(i + 1, cycle));
        println!("\t{}", format_roll_sequence(&cycle.rolls));
    }

    Ok(())
}
