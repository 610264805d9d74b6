//! Cricket Scorer CLI
//!
//! Scores a match ball by ball against a JSON snapshot file. Every command
//! reads the snapshot, runs one pure transition, and writes the file back
//! only after the transition succeeded.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cricket_core::{BallInput, Match, MatchStatus};

#[derive(Parser)]
#[command(name = "cricket")]
#[command(about = "Ball-by-ball cricket match scorer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new match snapshot file
    New {
        /// Output snapshot file path
        #[arg(long)]
        out: PathBuf,

        /// Overs per innings
        #[arg(long)]
        overs: u32,

        /// Team batting first
        #[arg(long)]
        team_a: String,

        /// Team batting second
        #[arg(long)]
        team_b: String,

        /// Players per team
        #[arg(long, default_value = "11")]
        players: u8,
    },

    /// Record one delivery
    Ball {
        /// Snapshot file path
        #[arg(long)]
        file: PathBuf,

        /// Runs off the bat (0-6)
        #[arg(long, default_value = "0")]
        runs: u8,

        /// Score the delivery as a wide
        #[arg(long)]
        wide: bool,

        /// Score the delivery as a no-ball
        #[arg(long)]
        no_ball: bool,

        /// A wicket fell on this delivery
        #[arg(long)]
        wicket: bool,

        /// Batsman on strike (required when the slot is empty)
        #[arg(long)]
        striker: Option<String>,

        /// Batsman at the non-striker's end
        #[arg(long)]
        non_striker: Option<String>,

        /// Bowler for this delivery (required after an over break)
        #[arg(long)]
        bowler: Option<String>,

        /// Incoming batsman replacing a dismissed striker
        #[arg(long)]
        new_batsman: Option<String>,
    },

    /// Undo the last recorded delivery
    Undo {
        /// Snapshot file path
        #[arg(long)]
        file: PathBuf,
    },

    /// Print the scorecard for a snapshot
    Scorecard {
        /// Snapshot file path
        #[arg(long)]
        file: PathBuf,
    },

    /// Print career statistics aggregated over snapshot files
    Players {
        /// Snapshot file paths
        #[arg(long, required = true, num_args = 1..)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::New { out, overs, team_a, team_b, players } => {
            let snapshot = create_snapshot(overs, &team_a, &team_b, players)?;
            write_snapshot(&out, &snapshot)?;
            println!("🏏 New match: {} v {}, {} overs per innings", team_a, team_b, overs);
            println!("   Snapshot: {}", out.display());
        }

        Commands::Ball {
            file,
            runs,
            wide,
            no_ball,
            wicket,
            striker,
            non_striker,
            bowler,
            new_batsman,
        } => {
            let input = BallInput {
                runs,
                is_wide: wide,
                is_no_ball: no_ball,
                is_wicket: wicket,
                striker,
                non_striker,
                bowler,
                new_batsman,
            };
            let snapshot = apply_to_file(&file, &input)?;
            write_snapshot(&file, &snapshot)?;
            print_score_line(&snapshot)?;
        }

        Commands::Undo { file } => {
            let current = read_snapshot(&file)?;
            let snapshot = cricket_core::undo_last_ball_json(&current)?;
            write_snapshot(&file, &snapshot)?;
            println!("↩️  Last delivery removed");
            print_score_line(&snapshot)?;
        }

        Commands::Scorecard { file } => {
            let snapshot = read_snapshot(&file)?;
            let m: Match = serde_json::from_str(&snapshot)?;
            print_scorecard(&m);
        }

        Commands::Players { files } => {
            let mut matches = Vec::with_capacity(files.len());
            for file in &files {
                let snapshot = read_snapshot(file)?;
                matches.push(serde_json::from_str::<Match>(&snapshot)?);
            }
            print_careers(&matches);
        }
    }

    Ok(())
}

fn create_snapshot(overs: u32, team_a: &str, team_b: &str, players: u8) -> Result<String> {
    let request = serde_json::json!({
        "schema_version": cricket_core::SCHEMA_VERSION,
        "overs_per_innings": overs,
        "teams": [team_a, team_b],
        "players_per_team": players,
    });
    Ok(cricket_core::create_match_json(&request.to_string())?)
}

fn apply_to_file(file: &Path, input: &BallInput) -> Result<String> {
    let current = read_snapshot(file)?;
    let ball_json = serde_json::to_string(input)?;
    Ok(cricket_core::apply_ball_json(&current, &ball_json)?)
}

fn read_snapshot(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot: {}", path.display()))
}

fn write_snapshot(path: &Path, snapshot: &str) -> Result<()> {
    std::fs::write(path, snapshot)
        .with_context(|| format!("failed to write snapshot: {}", path.display()))
}

fn print_score_line(snapshot: &str) -> Result<()> {
    let m: Match = serde_json::from_str(snapshot)?;
    let innings = m.active_innings();
    println!(
        "   {} {}/{} ({:.1} ov)",
        innings.batting_team,
        innings.runs,
        innings.wickets,
        innings.total_overs()
    );
    if m.status == MatchStatus::Completed {
        if let Some(result) = &m.result {
            match &result.winner {
                Some(winner) => println!("🏆 {} won by {}", winner, result.margin),
                None => println!("🤝 {}", result.margin),
            }
        }
    }
    Ok(())
}

fn print_scorecard(m: &Match) {
    println!("🏏 {} v {} ({} overs per innings)", m.teams[0], m.teams[1], m.overs_per_innings);
    for innings in &m.innings {
        println!(
            "\nInnings {}: {} {}/{} ({:.1} ov)",
            innings.innings_number,
            innings.batting_team,
            innings.runs,
            innings.wickets,
            innings.total_overs()
        );
        println!("   Extras: {} wides, {} no-balls", innings.extras.wides, innings.extras.no_balls);
        for figures in &innings.player_stats {
            let marker = if figures.is_out { "" } else { "*" };
            println!(
                "   {:<20} {:>3}{} ({} balls, {}x4, {}x6)",
                figures.name, figures.runs, marker, figures.balls, figures.fours, figures.sixes
            );
        }
        println!("   Bowling:");
        for figures in &innings.bowler_stats {
            println!(
                "   {:<20} {}.{} ov, {} runs, {} wkts",
                figures.name, figures.overs, figures.balls, figures.runs, figures.wickets
            );
        }
    }
    if let Some(result) = &m.result {
        match &result.winner {
            Some(winner) => println!("\n🏆 {} won by {}", winner, result.margin),
            None => println!("\n🤝 {}", result.margin),
        }
    }
}

fn print_careers(matches: &[Match]) {
    let careers = cricket_core::aggregate_players(matches);
    println!("📊 Careers over {} match(es)", matches.len());
    for career in &careers {
        println!(
            "   {:<20} {} runs @ {:.2} (SR {:.1}), best {}",
            career.name,
            career.batting.runs,
            career.batting.average(),
            career.batting.strike_rate(),
            career.bowling.best_figures()
        );
    }
}
