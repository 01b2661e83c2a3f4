//! Print the rule tables for both games.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

use wg_duel::{Choice, RuleTable, preset};

/// List every "beats" rule, as text tables or JSON.
pub fn run(json_output: bool) -> Result<(), String> {
    let hands = preset::rpsls();
    let spells = preset::spellcraft();

    if json_output {
        let value = json!({
            "rpsls": edges(&hands),
            "spellcraft": edges(&spells),
        });
        let text = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print_table("Rock Paper Scissors Lizard Spock", &hands);
        println!();
        print_table("Wizard duel spells", &spells);
    }

    Ok(())
}

fn edges<C: Choice>(table: &RuleTable<C>) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    for &winner in C::all() {
        for loser in table.victims(winner) {
            let reason = table.resolve(winner, loser).reason.unwrap_or_default();
            out.push(json!({
                "winner": winner.name(),
                "loser": loser.name(),
                "reason": reason,
            }));
        }
    }
    out
}

fn print_table<C: Choice>(title: &str, table: &RuleTable<C>) {
    println!("{}", title.bold());

    let mut display = Table::new();
    display.set_content_arrangement(ContentArrangement::Dynamic);
    display.set_header(vec!["Choice", "Beats", "How"]);

    for &winner in C::all() {
        for loser in table.victims(winner) {
            let reason = table.resolve(winner, loser).reason.unwrap_or_default();
            display.add_row(vec![winner.name(), loser.name(), reason]);
        }
    }

    println!("{display}");
}
