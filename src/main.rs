use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use video_chess::move_generation::attack_checks::is_king_in_check;
use video_chess::session::game_session::GameSession;
use video_chess::session::session_config::SessionConfig;
use video_chess::utils::algebraic::{parse_coordinate_move, square_to_algebraic};
use video_chess::utils::render_game_state::render_board;

const HELP: &str = "commands: <move> (e2e4) | new | level N | board | record | help | quit";

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("video_chess=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = SessionConfig::from_env();
    info!(?config, "starting session");
    let mut session = GameSession::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{HELP}");
    machine_turns(&mut session);
    print_position(&session);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(%err, "failed to read input");
                break;
            }
        };

        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        let mut words = command.split_whitespace();
        match words.next().map(str::to_ascii_lowercase).as_deref() {
            Some("quit") | Some("exit") => break,
            Some("help") => println!("{HELP}"),
            Some("board") => print_position(&session),
            Some("new") => {
                session.reset();
                machine_turns(&mut session);
                print_position(&session);
            }
            Some("level") => match words.next().map(str::parse::<i32>) {
                Some(Ok(level)) => {
                    session.set_difficulty(level);
                    println!("difficulty {}", session.difficulty());
                }
                _ => println!("usage: level N (0-7)"),
            },
            Some("record") => match session.game_record() {
                Ok(record) => print!("{record}"),
                Err(err) => println!("cannot write record: {err}"),
            },
            _ => play_human_move(&mut session, command),
        }

        if stdout.flush().is_err() {
            break;
        }
    }
}

fn play_human_move(session: &mut GameSession, text: &str) {
    if session.is_terminal() {
        println!("game over; type 'new' to play again");
        return;
    }

    let (source, dest) = match parse_coordinate_move(text) {
        Ok(squares) => squares,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    if !session.submit_move(source as usize, dest as usize) {
        println!("illegal move");
        return;
    }

    machine_turns(session);
    print_position(session);
}

/// Let the engine move for as long as it holds the turn.
fn machine_turns(session: &mut GameSession) {
    while !session.is_terminal() && session.side_to_move() == session.machine_color() {
        match session.request_opponent_move() {
            Some((source, dest)) => println!(
                "{} plays {}{}",
                session.engine_name(),
                square_name(source),
                square_name(dest)
            ),
            None => {
                println!("{} has no move", session.side_to_move().name());
                break;
            }
        }
    }
}

fn print_position(session: &GameSession) {
    println!("{}", render_board(&session.snapshot()));

    if let Some(winner) = session.winner() {
        println!("{} wins by capturing the king", winner.name());
        return;
    }

    let side = session.side_to_move();
    if is_king_in_check(session.state(), side) {
        println!("{} is in check", side.name());
    }
    let who = if side == session.machine_color() { "machine" } else { "you" };
    println!("{} to move ({who})", side.name());
}

fn square_name(square: u8) -> String {
    square_to_algebraic(square).unwrap_or_else(|_| square.to_string())
}
