//! CLI Crazy Eights demo.

extern crate alloc;

use alloc::sync::Arc;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy8s::{Card, Game, GameOptions, GameSnapshot, GameState, Suit, spawn_opponent_turn};

fn main() {
    println!("Crazy Eights CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Arc::new(Game::new(GameOptions::default(), seed));

    loop {
        let snapshot = game.snapshot();
        println!("\n{}", snapshot.status);

        match snapshot.state {
            GameState::PlayerTurn => {
                print_table(&snapshot);
                if !player_turn(&game, &snapshot) {
                    return;
                }
            }
            GameState::PendingWild { card } => {
                if !choose_suit(&game, card) {
                    return;
                }
            }
            GameState::OpponentTurn => {
                println!("Opponent is thinking...");
                if let Some(handle) = spawn_opponent_turn(&game) {
                    match handle.join() {
                        Ok(Ok(_)) => {}
                        Ok(Err(err)) => println!("Opponent error: {err}"),
                        Err(_) => println!("Opponent thread panicked."),
                    }
                }
            }
            GameState::GameOver { .. } => {
                print_table(&snapshot);
                match prompt_line("Play again? (y/n): ").as_str() {
                    "y" | "yes" => {
                        game.new_game();
                    }
                    _ => {
                        println!("Goodbye.");
                        return;
                    }
                }
            }
            GameState::Dealing => {}
        }
    }
}

/// Handles one player command. Returns `false` to quit.
fn player_turn(game: &Game, snapshot: &GameSnapshot) -> bool {
    let input = prompt_line("Card number to play, [d]raw, [n]ew game: ");
    let result = match input.as_str() {
        "q" | "quit" => return false,
        "d" | "draw" => game.player_draw().map(|_| ()),
        "n" | "new" => {
            game.new_game();
            Ok(())
        }
        other => {
            let Some(card) = other
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1))
                .and_then(|index| snapshot.player_hand.get(index))
            else {
                println!("Unknown command.");
                return true;
            };
            game.player_play(card.id(), None).map(|_| ())
        }
    };

    if let Err(err) = result {
        println!("Action error: {err}");
    }
    true
}

/// Asks for the suit of a committed eight. Returns `false` to quit.
fn choose_suit(game: &Game, card: Card) -> bool {
    let input = prompt_line(&format!(
        "Suit for {card}: [h]earts [d]iamonds [c]lubs [s]pades, [b]ack: "
    ));
    let suit = match input.as_str() {
        "q" | "quit" => return false,
        "b" | "back" => {
            if let Err(err) = game.cancel_wild() {
                println!("Wild error: {err}");
            }
            return true;
        }
        "h" | "hearts" => Suit::Hearts,
        "d" | "diamonds" => Suit::Diamonds,
        "c" | "clubs" => Suit::Clubs,
        "s" | "spades" => Suit::Spades,
        _ => {
            println!("Unknown suit.");
            return true;
        }
    };

    if let Err(err) = game.resolve_wild(suit) {
        println!("Wild error: {err}");
    }
    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(snapshot: &GameSnapshot) {
    println!(
        "\nDeck: {} | Discard: {} | Top: {} | Suit: {}",
        snapshot.draw_pile_count, snapshot.discard_count, snapshot.top_discard, snapshot.active_suit
    );
    println!("Opponent: {} cards", snapshot.opponent_count);

    let hand: Vec<String> = snapshot
        .player_hand
        .iter()
        .enumerate()
        .map(|(index, card)| format_card(index + 1, card, snapshot.playable.contains(card)))
        .collect();
    let label = if snapshot.is_player_turn() {
        "Your hand"
    } else {
        "Final hand"
    };
    println!("{label}: {}", hand.join(" "));
}

fn format_card(number: usize, card: &Card, playable: bool) -> String {
    let text = format!("{number}:{card}");
    if playable {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
