//! The castle exploration session loop.

use std::io::{self, BufRead};

use colored::Colorize;
use rand::rngs::StdRng;

use wg_castle::{ClueGenerator, Expedition, Progress, Room, Wizard, corridor_doors};
use wg_duel::{Choice, RuleTable, Spell, Verdict, preset, random_choice};

/// Walk the castle gauntlet until victory, banishment, or a declined replay.
pub fn run(seed: Option<u64>) -> Result<(), String> {
    let table = preset::spellcraft();
    let mut rng = super::seeded_rng(seed);
    let mut clues = ClueGenerator::new();
    let mut expedition = Expedition::new();
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    println!("Welcome to the castle exploration game!");
    println!("Objective: fight your way through the castle rooms and claim the treasure.");

    loop {
        if let Some(room) = expedition.current_room().copied() {
            enter_room(
                &mut expedition,
                room,
                &table,
                &mut clues,
                &mut rng,
                &mut reader,
            )?;
            continue;
        }

        if expedition.progress() == Progress::Victory {
            println!();
            println!(
                "{}",
                "As you enter the treasure chamber, a chest gleams in the torchlight. You have found the treasure!"
                    .green()
            );
            println!("{}", "Congratulations, you have won the game.".green().bold());
        }
        println!("Game Over");
        let again = super::prompt_yes_no(
            &mut reader,
            "Would you like to explore a different castle? (y/n): ",
        )?;
        if !again {
            break;
        }
        expedition.reset();
        println!("Starting a new exploration...");
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Pick a door, describe the room, and fight its guardian.
fn enter_room(
    expedition: &mut Expedition,
    room: Room,
    table: &RuleTable<Spell>,
    clues: &mut ClueGenerator,
    rng: &mut StdRng,
    reader: &mut impl BufRead,
) -> Result<(), String> {
    let doors = corridor_doors(rng);
    println!();
    println!("You approach a corridor with {doors} closed doors.");
    let door = super::prompt_menu(reader, &format!("Select a door (1-{doors}): "), doors)?;
    println!("You open door {door}...");
    println!();
    println!("You find yourself in the {}.", room.name);
    println!("{}", clues.next_line(rng).italic());

    duel(expedition, room.guardian, table, rng, reader)
}

/// Spell battle against a room's guardian; ties re-duel.
fn duel(
    expedition: &mut Expedition,
    wizard: Wizard,
    table: &RuleTable<Spell>,
    rng: &mut StdRng,
    reader: &mut impl BufRead,
) -> Result<(), String> {
    println!();
    println!("{}", wizard.challenge().red().bold());
    println!("{}", wizard.taunt(rng));

    loop {
        println!();
        println!("Choose a spell:");
        for (i, spell) in Spell::all().iter().enumerate() {
            println!("  {}. {spell}", i + 1);
        }

        let prompt = format!("Enter number (1-{}): ", Spell::all().len());
        let player: Spell = super::prompt_choice(reader, &prompt)?;
        let foe: Spell = random_choice(rng);
        println!("You cast {player}, and {wizard} casts {foe}.");

        let ruling = table.resolve(player, foe);
        if let Some(reason) = ruling.reason {
            println!("{reason}!");
        }
        expedition.record(ruling.verdict).map_err(|e| e.to_string())?;

        match ruling.verdict {
            Verdict::Tie => println!("The spells clash evenly. The duel continues."),
            Verdict::Win => {
                println!("{}", wizard.defeat_line().green());
                return Ok(());
            }
            Verdict::Loss => {
                println!("{}", wizard.victory_line().red());
                return Ok(());
            }
        }
    }
}
