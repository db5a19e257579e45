use std::io::Write;
use std::time::Duration;
use tictactoe_common::games::tictactoe::{MoveOutcome, TicTacToeSession};
use tictactoe_common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;
use crate::state::ClientCommand;
use crate::ui::{self, Mover};

pub async fn run_tictactoe_game(
    config: &Config,
    session: &mut TicTacToeSession,
) -> Result<(), Box<dyn std::error::Error>> {
    let computer_name = config.computer.name.as_str();
    let delay = Duration::from_millis(config.computer.delay_ms);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", ui::HELP);
    start_round(session, computer_name, delay).await;

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match ClientCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ClientCommand::PlaceMark { index } => {
                let outcome = session.apply_human_move(index);
                if !outcome.accepted {
                    println!("Cell {} is not available.", index + 1);
                    continue;
                }
                show_move(session, outcome, Mover::Human, computer_name);
                play_pending_computer_turns(session, computer_name, delay).await;
            }
            ClientCommand::ResetGame => {
                session.reset_game();
                start_round(session, computer_name, delay).await;
            }
            ClientCommand::ResetScores => {
                session.reset_scores();
                start_round(session, computer_name, delay).await;
            }
            ClientCommand::ToggleMode => {
                session.set_mode(session.mode().toggled());
                start_round(session, computer_name, delay).await;
            }
            ClientCommand::SetDifficulty { difficulty } => {
                session.set_difficulty(difficulty);
                println!("Difficulty set to {}", difficulty.as_str().to_uppercase());
            }
            ClientCommand::Share => println!("{}", ui::share_summary(session, computer_name)),
            ClientCommand::Help => println!("{}", ui::HELP),
            ClientCommand::Quit => break,
        }
    }

    log!(
        "Leaving with score X {} : O {}",
        session.scores().x,
        session.scores().o
    );
    Ok(())
}

async fn start_round(session: &mut TicTacToeSession, computer_name: &str, delay: Duration) {
    println!("{}", ui::render_frame(session, computer_name));
    if session.is_computer_turn() {
        println!("{}: {}", computer_name, ui::opening_narration());
    }
    play_pending_computer_turns(session, computer_name, delay).await;
}

/// The pause before each reply is presentation only; the move itself is computed synchronously.
async fn play_pending_computer_turns(
    session: &mut TicTacToeSession,
    computer_name: &str,
    delay: Duration,
) {
    while session.is_computer_turn() {
        tokio::time::sleep(delay).await;
        let outcome = session.play_computer_turn();
        if !outcome.accepted {
            break;
        }
        if let Some(index) = session.last_move() {
            println!("{} plays {}", computer_name, index + 1);
        }
        show_move(session, outcome, Mover::Computer, computer_name);
    }
}

fn show_move(
    session: &TicTacToeSession,
    outcome: MoveOutcome,
    mover: Mover,
    computer_name: &str,
) {
    println!("{}", ui::render_frame(session, computer_name));
    let next_is_computer = session.is_computer_turn();
    if let Some(line) = ui::narration(outcome.result, mover, session.mode(), next_is_computer) {
        println!("{}: {}", computer_name, line);
    }
}
