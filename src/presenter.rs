use crate::battle::{BattleEvent, BattleReport, BattleView};
use crate::fighter::Archetype;

pub fn print_usage() {
    println!("Usage: battle-arena <fighter1> <fighter2> [--seed N] [--turn-order random|alternate] [--log battle.json]");
    println!("       battle-arena --matrix [--sims-per-cell N] [--seed N] [--output matrix.csv]");
    println!("Fighters: knight, archer, mage");
}

pub fn print_invalid_fighters() {
    println!("Invalid fighter type(s). Please choose from: knight, archer, mage.");
}

pub fn print_welcome() {
    println!("Welcome to the Battle Arena");
}

pub fn print_event(event: &BattleEvent) {
    match event {
        BattleEvent::TurnStart { snapshot, .. } => print_snapshot(snapshot),
        BattleEvent::Attack {
            attacker,
            verb,
            defender,
            damage,
        } => println!("{attacker} {verb} {defender} for {damage} damage"),
        BattleEvent::Defeat { fighter } => println!("{fighter} has fallen"),
    }
}

fn print_snapshot(view: &BattleView) {
    println!();
    println!("-------------------------------------------------");
    println!(
        "{:<12} HP: {:>4} | {:<12} HP: {:>4}",
        view.side_a.name, view.side_a.health, view.side_b.name, view.side_b.health
    );
    println!("-------------------------------------------------");
    println!();
}

pub fn print_result(report: &BattleReport) {
    let winner = report.winner();
    println!();
    println!("==================== RESULT ====================");
    println!(
        "The winner is: {} with {} HP remaining",
        winner.name, winner.health
    );
}

pub fn print_matrix(matrix: &[Vec<f64>]) {
    print!("{:<8}", "");
    for archetype in Archetype::ALL {
        print!(" {:>8}", archetype.label());
    }
    println!();
    for (row_idx, row) in matrix.iter().enumerate() {
        print!("{:<8}", Archetype::ALL[row_idx].label());
        for value in row {
            print!(" {value:>8.4}");
        }
        println!();
    }
}
