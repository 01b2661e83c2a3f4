//! Command implementations for the `wg` binary.

pub mod castle;
pub mod rpsls;
pub mod rules;

use std::io::{self, BufRead, Write};

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wg_duel::{Choice, parse_choice, parse_menu};

/// Build the session RNG: seeded when requested, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Read one line, trimmed. Errors when the input stream has closed.
fn read_line(reader: &mut impl BufRead) -> Result<String, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err("input stream closed".to_string()),
        Ok(_) => Ok(line.trim().to_string()),
        Err(e) => Err(e.to_string()),
    }
}

/// Prompt until the player enters a number in `1..=max`.
pub fn prompt_menu(reader: &mut impl BufRead, prompt: &str, max: usize) -> Result<usize, String> {
    loop {
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let line = read_line(reader)?;
        match parse_menu(&line, max) {
            Ok(selection) => return Ok(selection),
            Err(e) => println!("{}", format!("Invalid input: {e}. Please try again.").yellow()),
        }
    }
}

/// Prompt until the player picks a valid member of the choice set.
pub fn prompt_choice<C: Choice>(reader: &mut impl BufRead, prompt: &str) -> Result<C, String> {
    loop {
        print!("{prompt}");
        io::stdout().flush().map_err(|e| e.to_string())?;
        let line = read_line(reader)?;
        match parse_choice::<C>(&line) {
            Ok(choice) => return Ok(choice),
            Err(e) => println!("{}", format!("Invalid input: {e}. Please try again.").yellow()),
        }
    }
}

/// Ask a yes/no question; any answer not starting with 'y' counts as no.
pub fn prompt_yes_no(reader: &mut impl BufRead, prompt: &str) -> Result<bool, String> {
    print!("{prompt}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let line = read_line(reader)?;
    Ok(line.to_lowercase().starts_with('y'))
}
