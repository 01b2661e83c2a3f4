//! The rock-paper-scissors-lizard-Spock session loop.

use std::io::{self, BufRead};

use colored::Colorize;
use rand::rngs::StdRng;

use wg_duel::{Choice, Hand, RuleTable, Verdict, preset, random_choice};

/// Play RPSLS rounds until the player declines to continue.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let table = preset::rpsls();
    let mut rng = super::seeded_rng(seed);
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("Welcome to Rock Paper Scissors Lizard Spock!");

    loop {
        println!();
        round(&table, &mut rng, &mut reader)?;
        if !super::prompt_yes_no(&mut reader, "Play again? (y/n): ")? {
            break;
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// One round: menu, both picks, verdict.
fn round(
    table: &RuleTable<Hand>,
    rng: &mut StdRng,
    reader: &mut impl BufRead,
) -> Result<(), String> {
    println!("Choose one:");
    for (i, hand) in Hand::all().iter().enumerate() {
        println!("  {}. {hand}", i + 1);
    }

    let prompt = format!("Enter number (1-{}): ", Hand::all().len());
    let player: Hand = super::prompt_choice(reader, &prompt)?;
    let computer: Hand = random_choice(rng);

    println!();
    println!("You chose: {player}");
    println!("Computer chose: {computer}");

    let ruling = table.resolve(player, computer);
    if let Some(reason) = ruling.reason {
        println!("{reason}");
    }
    match ruling.verdict {
        Verdict::Win => println!("{}", "You win!".green()),
        Verdict::Loss => println!("{}", "You lose!".red()),
        Verdict::Tie => println!("It's a tie!"),
    }
    Ok(())
}
