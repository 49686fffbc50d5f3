//! Interactive game mode
//!
//! Line-oriented loop: the engine asks, the user answers yes or no, the
//! loop reports progress until the secret is found.

use crate::game::{Guesser, RangeGuesser};
use crate::output::formatters::{create_progress_bar, format_percent, format_question};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Classify a line of user input as an answer
///
/// Accepts `y`/`yes` and `n`/`no` in any casing; anything else is `None`.
#[must_use]
pub fn yes_or_no(line: &str) -> Option<bool> {
    let answer = line.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

/// Run the interactive game over `min..=max`
///
/// # Errors
///
/// Returns an error if the range is invalid or reading from stdin fails.
pub fn run_play(min: i32, max: i32) -> Result<(), String> {
    let mut game = RangeGuesser::new(min, max).map_err(|e| format!("Invalid range: {e}"))?;

    println!(
        "\nPlaying HiLo between {} and {}.",
        min.to_string().bright_yellow(),
        max.to_string().bright_yellow()
    );
    println!("Think of a number in that range and answer my questions.\n");

    while !game.solved() {
        let span = game.choices().map_err(|e| e.to_string())?;

        let mut answer = yes_or_no(&get_user_input(&format_question(span))?);
        while answer.is_none() {
            answer = yes_or_no(&get_user_input("  yes or no?")?);
        }

        if answer == Some(true) {
            game.yes().map_err(|e| e.to_string())?;
        } else {
            game.no().map_err(|e| e.to_string())?;
        }

        let progress = game.progress();
        println!(
            "[{}] I'm {} done.\n",
            create_progress_bar(progress, 1.0, 20).green(),
            format_percent(progress).bright_cyan()
        );
    }

    let secret = game.secret().map_err(|e| e.to_string())?;
    println!(
        "Your number is: {}",
        secret.to_string().bright_green().bold()
    );

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    read_input_line(&mut io::stdin().lock())
}

/// Read one line, failing on end of input so prompt loops terminate
fn read_input_line<R: BufRead>(input: &mut R) -> Result<String, String> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Err("unexpected end of input".to_string());
    }

    Ok(line.trim().to_string())
}
