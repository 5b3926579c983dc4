//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole five-letter word per turn,
//! colored tiles come back.

use crate::core::{Feedback, LetterScore, MAX_GUESSES, WORD_LEN};
use crate::engine::{GameEngine, GameOutcome, SubmitOutcome};
use crate::ports::DictionaryValidator;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game loop
///
/// # Errors
///
/// Returns an error on I/O failure reading user input.
pub async fn run_simple<V: DictionaryValidator>(mut engine: GameEngine<V>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║            W O R L D L E                  ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in {MAX_GUESSES} attempts.");
    println!("Tiles: green = right spot, yellow = wrong spot, gray = absent.");
    println!("Type 'quit' to give up.\n");

    loop {
        let (row, _) = engine.grid().cursor();
        let line = prompt(&format!("Guess {}/{MAX_GUESSES}", row + 1))?;

        if line.eq_ignore_ascii_case("quit") {
            println!("The word was {}.", engine.solution());
            return Ok(());
        }

        if line.len() != WORD_LEN {
            println!("Enter exactly {WORD_LEN} letters.\n");
            continue;
        }

        for c in line.chars() {
            engine.append_letter(c);
        }

        match engine.submit_row().await {
            SubmitOutcome::Ignored => return Ok(()),
            SubmitOutcome::NotEnoughLetters => {
                // Non-alphabetic input never reached the grid
                println!("Letters only, please.\n");
                clear_row(&mut engine);
            }
            SubmitOutcome::NotInDictionary => {
                println!("'{}' is not in the dictionary.\n", line.to_uppercase());
                clear_row(&mut engine);
            }
            SubmitOutcome::ValidatorUnavailable => {
                println!("Validation unavailable, try again.\n");
                clear_row(&mut engine);
            }
            SubmitOutcome::Scored(report) => {
                println!("         {}", render_tiles(&line, report.feedback));
                print_used_letters(&engine);

                match report.outcome {
                    GameOutcome::InProgress => {}
                    GameOutcome::Won { attempts } => {
                        let noun = if attempts == 1 { "attempt" } else { "attempts" };
                        println!(
                            "\n{} You guessed it in {attempts} {noun}.",
                            "Congrats!".green().bold()
                        );
                        return Ok(());
                    }
                    GameOutcome::Lost => {
                        println!(
                            "\nSorry, you ran out of all attempts. The word is {}.",
                            engine.solution().to_string().bold()
                        );
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn clear_row<V: DictionaryValidator>(engine: &mut GameEngine<V>) {
    while engine.delete_letter() {}
}

fn render_tiles(guess: &str, feedback: Feedback) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(feedback.scores())
        .map(|(c, score)| {
            let tile = format!(" {c} ");
            match score {
                LetterScore::Correct => tile.black().on_green().to_string(),
                LetterScore::Present => tile.black().on_yellow().to_string(),
                LetterScore::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

fn print_used_letters<V: DictionaryValidator>(engine: &GameEngine<V>) {
    let mut used: Vec<char> = engine.used_letters().collect();
    if used.is_empty() {
        println!();
        return;
    }
    used.sort_unstable();
    let listed: String = used.iter().map(|c| format!("{c} ")).collect();
    println!("         absent: {}\n", listed.trim_end().dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn tiles_render_one_per_letter() {
        let feedback = Feedback::score(
            &Word::new("world").unwrap(),
            &Word::new("hello").unwrap(),
        );
        let tiles = render_tiles("world", feedback);
        // One 3-character tile per letter, plus color escapes
        for c in ['W', 'O', 'R', 'L', 'D'] {
            assert!(tiles.contains(c), "tile for {c} missing");
        }
    }
}
