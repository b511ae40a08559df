use gyoku::board::Color;
use gyoku::engine::{EASY_MINIMAX_DEPTH, MINIMAX_DEPTH};
use gyoku::game::GameState;
use gyoku::logger::init_logging;
use gyoku::search::agents::{GreedyAgent, MinimaxAgent, RandomAgent};
use std::io::{self, BufRead};

fn main() {
    if let Err(reason) = init_logging("logs/gyoku.log", "gyoku=info") {
        eprintln!("logging disabled: {reason}");
    }

    let mut game = GameState::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        match command {
            "help" => print_help(),
            "new" => {
                game = GameState::new();
                println!("{}", game.to_sfen());
            }
            "position" => match handle_position(&parts) {
                Ok(new_game) => {
                    game = new_game;
                    println!("{}", game.to_sfen());
                }
                Err(reason) => println!("error: {reason}"),
            },
            "sfen" => println!("{}", game.to_sfen()),
            "d" | "display" => {
                print!("{}", game.board);
                println!("{}", game.to_sfen());
                if game.in_check() {
                    println!("(in check)");
                }
                if game.result.is_terminal() {
                    println!("result: {}", game.result);
                }
            }
            "moves" => {
                let moves: Vec<String> = game.legal_moves().iter().map(|m| m.to_usi()).collect();
                println!("{} legal: {}", moves.len(), moves.join(" "));
            }
            "move" => {
                if parts.len() != 2 {
                    println!("usage: move <usi>");
                    continue;
                }
                match game.make_move_usi(parts[1]) {
                    Ok(()) => report_after_move(&game),
                    Err(reason) => println!("illegal: {reason}"),
                }
            }
            "undo" => {
                if game.undo_move() {
                    println!("{}", game.to_sfen());
                } else {
                    println!("nothing to undo");
                }
            }
            "go" => handle_go(&parts, &mut game),
            "quit" | "exit" => break,
            _ => println!("unknown command: {command} (try `help`)"),
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  new                         start a fresh game");
    println!("  position <sfen> [moves ...] load a position, then apply moves");
    println!("  move <usi>                  play a move (e.g. 1d1c, P*3c)");
    println!("  moves                       list legal moves");
    println!("  go [bot]                    let a bot move: random|greedy|minimax|easy_minimax");
    println!("  d | display                 show the board");
    println!("  sfen                        print the current SFEN");
    println!("  undo                        take the last move back");
    println!("  quit");
}

fn handle_position(parts: &[&str]) -> Result<GameState, String> {
    // SFEN is four whitespace-separated fields; anything after an optional
    // `moves` token is applied on top.
    if parts.len() < 5 {
        return Err("usage: position <board> <side> <hand> <movenum> [moves ...]".to_string());
    }
    let sfen = parts[1..5].join(" ");
    let mut game = GameState::from_sfen(&sfen)?;

    if let Some(moves_idx) = parts.iter().position(|&p| p == "moves") {
        for notation in &parts[moves_idx + 1..] {
            game.make_move_usi(notation)
                .map_err(|reason| format!("move {notation}: {reason}"))?;
        }
    }
    Ok(game)
}

fn handle_go(parts: &[&str], game: &mut GameState) {
    if game.result.is_terminal() {
        println!("game over: {}", game.result);
        return;
    }

    let bot = parts.get(1).copied().unwrap_or("minimax");
    let chosen = match bot {
        "random" => RandomAgent::from_entropy().choose_move(&game.board, game.side_to_move),
        "greedy" => GreedyAgent::from_entropy().choose_move(&game.board, game.side_to_move),
        "minimax" => MinimaxAgent::new(MINIMAX_DEPTH).choose_move(&game.board, game.side_to_move),
        "easy_minimax" => {
            MinimaxAgent::new(EASY_MINIMAX_DEPTH).choose_move(&game.board, game.side_to_move)
        }
        other => {
            println!("unknown bot type: {other}");
            return;
        }
    };

    match chosen {
        Some(mv) => {
            let usi = mv.to_usi();
            if game.make_move(mv) {
                println!("bestmove {usi}");
                report_after_move(game);
            } else {
                // The agents only propose generator output, so this would be
                // an engine bug worth surfacing loudly.
                println!("error: agent proposed an illegal move {usi}");
            }
        }
        None => println!("no legal moves"),
    }
}

fn report_after_move(game: &GameState) {
    println!("{}", game.to_sfen());
    if game.result.is_terminal() {
        println!("result: {}", game.result);
    } else if game.in_check() {
        let side = match game.side_to_move {
            Color::Black => "black",
            Color::White => "white",
        };
        println!("{side} is in check");
    }
}
