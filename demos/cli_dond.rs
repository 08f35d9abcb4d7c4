//! CLI deal-or-no-deal example.
//!
//! Images are looked up on disk under the asset root; placeholders are never
//! fetched, so slots without a local image show as blank.

#![allow(clippy::missing_docs_in_private_items)]

use core::future::{Future, ready};
use std::io::{self, Write};
use std::path::Path;

use dondrs::{
    Action, AssetError, AudioError, AudioPlayer, Folder, Game, GameOptions, ImageLoader, Key,
    Phase, PRIZE_VALUES, SlotImage, SlotView, View,
};

struct LocalImages;

impl ImageLoader for LocalImages {
    fn load(&self, url: &str) -> impl Future<Output = Result<(), AssetError>> {
        ready(if Path::new(url).is_file() {
            Ok(())
        } else {
            Err(AssetError::NotFound)
        })
    }
}

struct Bell;

impl AudioPlayer for Bell {
    fn play(&self, path: &str) -> Result<(), AudioError> {
        if !Path::new(path).is_file() {
            return Err(AudioError::Unavailable);
        }
        print!("\u{7}");
        io::stdout()
            .flush()
            .map_err(|_| AudioError::PlaybackFailed)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Deal or No Deal CLI example (type 'q' to quit, 'z' to reset)");

    let game = Game::new(GameOptions::default());

    loop {
        match game.phase() {
            Phase::SelectingStart => {
                let prompt = format!("Choose an asset folder (1-{}): ", game.options.folders);
                let Some(input) = prompt_line(&prompt) else {
                    break;
                };
                if input == "q" || input == "quit" {
                    break;
                }
                let Some(folder) = input.parse::<u8>().ok().and_then(Folder::new) else {
                    println!("Please enter a folder number.");
                    continue;
                };
                if !pollster::block_on(game.start(folder, &LocalImages)) {
                    println!("Folder {} is not available.", folder.get());
                }
            }
            Phase::Playing => {
                print_board(&game.view());
                let Some(input) = prompt_line("Open case (1-10): ") else {
                    break;
                };
                if !handle_common(&game, &input) {
                    match input.parse::<usize>() {
                        Ok(number) if (1..=PRIZE_VALUES.len()).contains(&number) => {
                            if !game.apply(Action::SelectCase(number - 1), &Bell) {
                                println!("Case {number} is already gone.");
                            }
                        }
                        _ => println!("Please enter a case number."),
                    }
                }
            }
            Phase::DealDecision => {
                print_board(&game.view());
                let Some(input) = prompt_line("Banker's offer! [space/n] no deal, [d] deal: ") else {
                    break;
                };
                if !handle_common(&game, &input) {
                    let key = match input.as_str() {
                        "" | "n" | "no" => Key::Space,
                        other => parse_key(other),
                    };
                    if !game.handle_key(key, &Bell) {
                        println!("Unknown answer.");
                    }
                }
            }
            Phase::RoundComplete => {
                println!("No deal! Round {} complete.", game.state().round);
                let Some(input) = prompt_line("Press enter for the next round: ") else {
                    break;
                };
                if !handle_common(&game, &input) {
                    game.handle_key(Key::Space, &Bell);
                }
            }
            Phase::GameOver => {
                let view = game.view();
                println!("Deal! Final average {} ({}).", view.average, view.reduced_average);
                let input = prompt_line("Press 'z' to play again or 'q' to quit: ");
                if !input.is_some_and(|input| handle_common(&game, &input)) {
                    println!("Goodbye.");
                    break;
                }
            }
        }
    }
}

/// Handles quit and reset. Returns whether the input was consumed.
fn handle_common(game: &Game, input: &str) -> bool {
    if input == "q" || input == "quit" {
        std::process::exit(0);
    }
    let key = parse_key(input);
    key == game.options.keys.reset && game.handle_key(key, &Bell)
}

fn parse_key(input: &str) -> Key {
    Key::from_dom(input, "")
}

/// Reads one trimmed, lowercased line. Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_board(view: &View) {
    println!(
        "\nRound {} | cases left {} | average {} | 75% {}",
        view.round, view.cases_left, view.average, view.reduced_average
    );

    let cells: Vec<String> = view
        .slots
        .iter()
        .enumerate()
        .map(|(index, slot)| format_slot(index, *slot, view.images.get(index)))
        .collect();
    println!("{}", cells.join(" "));
    println!();
}

fn format_slot(index: usize, slot: SlotView, image: Option<&SlotImage>) -> String {
    let label = format!("{:>2}", index + 1);
    match slot {
        SlotView::Eliminated => colorize(&format!("[{label}:--]"), "90"),
        SlotView::FaceDown => colorize(&format!("[{label}:??]"), "33"),
        SlotView::FaceUp => match image {
            Some(SlotImage::Primary(_)) => colorize(&format!("[{label}:im]"), "32"),
            Some(SlotImage::Placeholder(_)) => colorize(&format!("[{label}:ph]"), "36"),
            Some(SlotImage::Missing) | None => format!("[{label}:  ]"),
        },
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
