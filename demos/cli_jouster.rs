//! CLI jouster example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use jouster::{Card, Game, GameOptions, InspectTarget, MoveOutcome, SelectOutcome, Suit};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("JOUSTER_LOG", "warn"))
        .init();
}

fn main() {
    init_logging();
    println!("Jouster CLI example (type 'help' for commands)");

    let seed = std::env::args().nth(1);
    let game = match seed {
        Some(seed) => Game::new(GameOptions::default(), &seed),
        None => Game::with_fresh_seed(GameOptions::default(), entropy()),
    };
    let mut game = match game {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    loop {
        print_table(&game);

        if let Some(result) = game.result() {
            println!(
                "Game over: {} piles left, score {}",
                result.piles_left, result.score
            );
            match prompt_line("[r]eplay, [n]ew deal or [q]uit: ").as_str() {
                "r" | "replay" => game.restart(),
                "n" | "new" => game.restart_fresh(entropy()),
                _ => return,
            }
            continue;
        }

        let input = prompt_line("> ");
        let mut words = input.split_whitespace();
        match (words.next(), words.next()) {
            (Some("q" | "quit"), _) => return,
            (Some("h" | "help"), _) => print_help(),
            (Some("d" | "deck"), _) => print_cards(&game, InspectTarget::Deck),
            (Some("i" | "inspect"), Some(index)) => match index.parse() {
                Ok(index) => print_cards(&game, InspectTarget::Pile(index)),
                Err(_) => println!("Please enter a pile number."),
            },
            (Some("c" | "cancel"), _) => game.clear_selection(),
            (Some("r" | "restart"), _) => game.restart(),
            (Some(index), None) => match index.parse() {
                Ok(index) => handle_select(&mut game, index),
                Err(_) => println!("Unknown command."),
            },
            _ => println!("Unknown command."),
        }
    }
}

fn entropy() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn handle_select(game: &mut Game, index: usize) {
    match game.select(index) {
        Ok(SelectOutcome::Selected(index)) => {
            let targets = game.valid_targets();
            if targets.is_empty() {
                println!("Pile {index} selected; it has no legal target.");
            } else {
                println!("Pile {index} selected; targets {targets:?}");
            }
        }
        Ok(SelectOutcome::Moved(MoveOutcome::Accepted { target, dealt })) => {
            print!("Stacked onto pile {target}.");
            if let Some(card) = dealt {
                print!(" Dealt {}.", format_card(&card));
            }
            println!();
        }
        Ok(SelectOutcome::Moved(MoveOutcome::Rejected(reason))) => {
            println!("Move rejected: {reason:?}");
        }
        Ok(SelectOutcome::Ignored) => {}
        Err(err) => println!("Select error: {err}"),
    }
}

fn print_help() {
    println!("  <n>          select pile n, or stack the selected pile onto n");
    println!("  c, cancel    drop the selection");
    println!("  i <n>        list pile n, top card first");
    println!("  d, deck      list the undealt cards");
    println!("  r, restart   replay this seed");
    println!("  q, quit      leave");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    if input.is_empty() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let view = game.view();
    println!(
        "\nSeed {} | deck: {} cards remaining",
        game.seed(),
        view.deck_remaining
    );

    let columns = game.board().columns();
    for (row, piles) in view.piles.chunks(columns).enumerate() {
        let cells: Vec<String> = piles
            .iter()
            .enumerate()
            .map(|(offset, pile)| {
                let index = row * columns + offset;
                let marker = if view.selected == Some(index) {
                    "*"
                } else if view.valid_targets.contains(&index) {
                    "+"
                } else {
                    " "
                };
                format!(
                    "{marker}{index:>2}: {} ({:>2})",
                    format_card(&pile.top()),
                    pile.len()
                )
            })
            .collect();
        println!("{}", cells.join("   "));
    }
    println!();
}

fn print_cards(game: &Game, target: InspectTarget) {
    match game.inspect(target) {
        Ok(cards) if cards.is_empty() => println!("(empty)"),
        Ok(cards) => println!(
            "{}",
            cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
        ),
        Err(err) => println!("Inspect error: {err}"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&format!("{:>3}", card.to_string()), color_code)
}
