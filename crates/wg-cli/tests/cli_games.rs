#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)] // integration test crate; workspace denies missing_docs

use assert_cmd::Command;
use predicates::prelude::*;

fn wg() -> Command {
    Command::cargo_bin("wg").unwrap()
}

/// Enough valid-ish menu input to drive any castle run to its end, plus a
/// trailing decline for the replay prompt.
fn castle_script() -> String {
    let mut input = String::new();
    for i in 0..400 {
        input.push_str(&format!("{}\n", i % 5 + 1));
    }
    input.push_str("n\n");
    input
}

// ---------------------------------------------------------------------------
// rpsls
// ---------------------------------------------------------------------------

#[test]
fn rpsls_plays_one_round() {
    wg().args(["rpsls", "--seed", "42"])
        .write_stdin("2\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You chose: Paper")
                .and(predicate::str::contains("Computer chose:"))
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn rpsls_reports_a_verdict() {
    wg().args(["rpsls", "--seed", "42"])
        .write_stdin("1\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You win!")
                .or(predicate::str::contains("You lose!"))
                .or(predicate::str::contains("It's a tie!")),
        );
}

#[test]
fn rpsls_reprompts_on_invalid_input() {
    wg().args(["rpsls", "--seed", "42"])
        .write_stdin("abc\n0\n6\n1\nn\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input")
                .and(predicate::str::contains("You chose: Rock")),
        );
}

#[test]
fn rpsls_seed_makes_runs_reproducible() {
    let run = || {
        wg().args(["rpsls", "--seed", "7"])
            .write_stdin("3\ny\n4\nn\n")
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn rpsls_errors_when_input_closes_mid_prompt() {
    wg().args(["rpsls", "--seed", "42"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input stream closed"));
}

// ---------------------------------------------------------------------------
// castle
// ---------------------------------------------------------------------------

#[test]
fn castle_runs_to_game_over() {
    wg().args(["castle", "--seed", "42"])
        .write_stdin(castle_script())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to the castle exploration game!")
                .and(predicate::str::contains("Game Over"))
                .and(predicate::str::contains("Thanks for playing!")),
        );
}

#[test]
fn castle_announces_rooms_and_duels() {
    wg().args(["castle", "--seed", "42"])
        .write_stdin(castle_script())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("closed doors")
                .and(predicate::str::contains("You find yourself in the Great Hall."))
                .and(predicate::str::contains("Choose a spell:")),
        );
}

#[test]
fn castle_rejects_invalid_door_selection() {
    let script = format!("9\n{}", castle_script());
    wg().args(["castle", "--seed", "42"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn castle_seed_makes_runs_reproducible() {
    let run = || {
        wg().args(["castle", "--seed", "11"])
            .write_stdin(castle_script())
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ---------------------------------------------------------------------------
// rules
// ---------------------------------------------------------------------------

#[test]
fn rules_prints_both_tables() {
    wg().arg("rules").assert().success().stdout(
        predicate::str::contains("Rock Paper Scissors Lizard Spock")
            .and(predicate::str::contains("Paper covers rock"))
            .and(predicate::str::contains("Wind Gust")),
    );
}

#[test]
fn rules_json_lists_ten_edges_per_game() {
    let output = wg().args(["rules", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rpsls"].as_array().unwrap().len(), 10);
    assert_eq!(value["spellcraft"].as_array().unwrap().len(), 10);
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    wg().arg("--help").assert().success().stdout(
        predicate::str::contains("rpsls")
            .and(predicate::str::contains("castle"))
            .and(predicate::str::contains("rules")),
    );
}
