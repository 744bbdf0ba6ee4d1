//! CLI 21 points example.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    ActionError, Card, DEALER_SEAT, Game, GameOptions, PLAYER_SEAT, Participant, Suit,
    TableSnapshot, Tick, TurnStatement,
};

/// Pause between two automated steps so the dealer's play can be followed.
const DEALER_PACE: Duration = Duration::from_millis(650);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("21 points CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        game.start_round();

        if !play_player_turn(&game) {
            return;
        }
        play_dealer_turn(&game);

        match game.resolve_winners() {
            Ok(winners) if winners.is_empty() => println!("No winners this round."),
            Ok(winners) => {
                for winner in winners {
                    println!("{} wins with {} points.", winner.name(), winner.score());
                }
            }
            Err(err) => println!("Resolve error: {err}"),
        }
        print_table(&game.snapshot());

        match prompt_line("Play again? (y/n): ").as_deref() {
            Some("y" | "yes") => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }
    }
}

/// Returns `false` if the user asked to quit.
fn play_player_turn(game: &Game) -> bool {
    loop {
        print_table(&game.snapshot());

        match prompt_line("[h]it [s]tand: ").as_deref() {
            Some("h" | "hit") => {
                if game.is_deck_empty() {
                    println!("The deck is empty.");
                    continue;
                }
                match game.hit(PLAYER_SEAT) {
                    Ok(card) => println!("You drew {}.", format_card(&card)),
                    Err(err) => {
                        println!("Hit error: {err}");
                        continue;
                    }
                }
                match game.evaluate(PLAYER_SEAT) {
                    Ok(TurnStatement::Exceed) => {
                        println!("You went over 21.");
                        return true;
                    }
                    Ok(TurnStatement::Win) => {
                        println!("21 points!");
                        return true;
                    }
                    Ok(_) => {}
                    Err(err) => println!("Evaluate error: {err}"),
                }
            }
            Some("s" | "stand") => {
                if let Err(err) = game.pass(PLAYER_SEAT) {
                    println!("Stand error: {err}");
                }
                return true;
            }
            Some("q" | "quit") | None => return false,
            _ => println!("Unknown action."),
        }
    }
}

fn play_dealer_turn(game: &Game) {
    loop {
        thread::sleep(DEALER_PACE);

        match game.tick() {
            Ok(Tick::Drew { card, .. }) => println!("Dealer draws {}.", format_card(&card)),
            Ok(Tick::Settled { statement, .. }) => {
                let name = game
                    .participant(DEALER_SEAT)
                    .map(|dealer| dealer.name().to_string())
                    .unwrap_or_default();
                match statement {
                    TurnStatement::Stand => println!("{name} stands."),
                    TurnStatement::Exceed => println!("{name} went over 21."),
                    TurnStatement::Win => println!("{name} has 21 points."),
                    TurnStatement::Hit | TurnStatement::Pending => {}
                }
                return;
            }
            Err(ActionError::EmptyDeck) => {
                println!("The deck is empty.");
                return;
            }
            Err(err) => {
                println!("Dealer error: {err}");
                return;
            }
        }
    }
}

/// Reads one trimmed, lowercased line. `None` means stdin is closed or
/// unreadable.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    if let Err(err) = io::stdout().flush() {
        tracing::warn!(%err, "failed to flush prompt");
    }

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
        Err(err) => {
            tracing::warn!(%err, "failed to read input");
            None
        }
    }
}

fn print_table(snapshot: &TableSnapshot) {
    println!("\nDeck: {} cards remaining", snapshot.deck_remaining);
    for participant in &snapshot.participants {
        println!("{}", format_participant(participant));
    }
    println!();
}

fn format_participant(participant: &Participant) -> String {
    let status = if participant.has_exceeded() {
        " | exceeded"
    } else if participant.has_won() {
        " | won"
    } else if participant.has_passed() {
        " | stands"
    } else {
        ""
    };

    format!(
        "{:<12} {} | points {}{status}",
        participant.name(),
        format_hand(participant.hand()),
        participant.score(),
    )
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
