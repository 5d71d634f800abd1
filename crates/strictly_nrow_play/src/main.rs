//! Strictly N-in-a-row - terminal client
//!
//! Play against the computer or watch two computer players.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use strictly_nrow::{BoardSize, Player as Mark};
use strictly_nrow_agent::{DecisionAgent, Difficulty};
use strictly_nrow_play::{
    AgentPlayer, GameEvent, GameSession, HumanPlayer, Orchestrator, Player, Preferences,
};
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let prefs = Preferences::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command {
        Command::Play {
            size,
            difficulty,
            mark,
            rounds,
            instant,
            seed,
        } => run_play(prefs.with_overrides(size, difficulty, mark, instant, seed), rounds).await,
        Command::Watch {
            size,
            x_difficulty,
            o_difficulty,
            rounds,
            boards,
            instant,
            seed,
        } => {
            let prefs = prefs.with_overrides(size, None, None, instant, seed);
            let x = x_difficulty.unwrap_or(*prefs.difficulty());
            let o = o_difficulty.unwrap_or(*prefs.difficulty());
            run_watch(prefs, x, o, rounds, boards).await
        }
    }
}

/// Human against the computer
#[instrument(skip(prefs))]
async fn run_play(prefs: Preferences, rounds: u32) -> Result<()> {
    let size = *prefs.board_size();
    let human_mark = *prefs.human_mark();
    info!(%size, %human_mark, difficulty = %prefs.difficulty(), "Starting play");

    let (input_tx, input_rx) = mpsc::unbounded_channel();
    // Plain thread: a blocked stdin read must not hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let human: Box<dyn Player> = Box::new(HumanPlayer::new("You", input_rx));
    let computer: Box<dyn Player> = Box::new(AgentPlayer::new(
        format!("Computer ({})", prefs.difficulty()),
        build_agent(size, *prefs.difficulty(), human_mark.opponent(), &prefs),
    ));
    let (player_x, player_o) = match human_mark {
        Mark::X => (human, computer),
        Mark::O => (computer, human),
    };

    println!(
        "{size} board, {} in a row wins. You play {human_mark}.",
        size.win_length()
    );
    println!("Enter moves as row,col counting from 0.");

    play_rounds(GameSession::new(size), player_x, player_o, rounds, true).await
}

/// Computer against computer
#[instrument(skip(prefs))]
async fn run_watch(
    prefs: Preferences,
    x_difficulty: Difficulty,
    o_difficulty: Difficulty,
    rounds: u32,
    boards: bool,
) -> Result<()> {
    let size = *prefs.board_size();
    // Distinct seeds so the two agents do not mirror each other's draws.
    let o_prefs = prefs
        .clone()
        .with_overrides(None, None, None, false, prefs.seed().map(|s| s.wrapping_add(1)));

    let player_x: Box<dyn Player> = Box::new(AgentPlayer::new(
        format!("X ({x_difficulty})"),
        build_agent(size, x_difficulty, Mark::X, &prefs),
    ));
    let player_o: Box<dyn Player> = Box::new(AgentPlayer::new(
        format!("O ({o_difficulty})"),
        build_agent(size, o_difficulty, Mark::O, &o_prefs),
    ));

    play_rounds(GameSession::new(size), player_x, player_o, rounds, boards).await
}

fn build_agent(
    size: BoardSize,
    difficulty: Difficulty,
    mark: Mark,
    prefs: &Preferences,
) -> DecisionAgent {
    let agent = match prefs.seed() {
        Some(seed) => DecisionAgent::seeded(size, difficulty, mark, *seed),
        None => DecisionAgent::new(size, difficulty, mark),
    };
    agent.with_pacing(prefs.pace())
}

async fn play_rounds(
    session: GameSession,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    rounds: u32,
    boards: bool,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            render(&event, boards);
        }
    });

    let mut orchestrator = Orchestrator::new(session, player_x, player_o, event_tx);
    for round in 1..=rounds {
        if round > 1 {
            orchestrator.restart();
        }
        orchestrator.run().await?;
    }

    let scores = *orchestrator.session().scores();
    drop(orchestrator);
    printer.await.context("Event printer panicked")?;
    println!("Final score: {scores}");
    Ok(())
}

fn render(event: &GameEvent, boards: bool) {
    match event {
        GameEvent::StateChanged(board) if boards => println!("\n{board}\n"),
        GameEvent::StateChanged(_) => {}
        GameEvent::AgentThinking { player } if boards => println!("{player} is thinking..."),
        GameEvent::AgentThinking { .. } => {}
        GameEvent::MoveMade {
            player,
            mark,
            position,
        } => {
            if boards {
                println!("{player} ({mark}) plays {position}");
            }
        }
        GameEvent::InvalidMove { player, reason } => {
            println!("{player}: {reason}. Try again.")
        }
        GameEvent::GameOver { winner, scores } => match winner {
            Some(name) => println!("{name} wins! {scores}"),
            None => println!("Draw. {scores}"),
        },
    }
}
