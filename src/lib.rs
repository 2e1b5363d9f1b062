pub mod battle;
pub mod fighter;
pub mod matrix;
pub mod presenter;

use crate::battle::{Battle, BattleOptions, BattleReport};
use crate::fighter::{Archetype, Fighter};
use anyhow::Context;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub labels: Vec<String>,
    pub seed: Option<u64>,
    pub battle: BattleOptions,
    pub log_path: Option<PathBuf>,
    pub matrix: bool,
    pub sims_per_cell: usize,
    pub output_path: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            labels: Vec::new(),
            seed: None,
            battle: BattleOptions::default(),
            log_path: None,
            matrix: false,
            sims_per_cell: 1000,
            output_path: None,
        }
    }
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let seed = opts.seed.unwrap_or_else(|| rand::thread_rng().gen());
    if opts.matrix {
        if opts.sims_per_cell == 0 {
            anyhow::bail!("--sims-per-cell must be > 0");
        }
        return run_matrix(
            opts.sims_per_cell,
            seed,
            opts.battle,
            opts.output_path.as_deref(),
        );
    }
    if opts.labels.len() < 2 {
        presenter::print_usage();
        return Ok(());
    }
    let first = Archetype::from_label(&opts.labels[0]);
    let second = Archetype::from_label(&opts.labels[1]);
    let (Some(first), Some(second)) = (first, second) else {
        presenter::print_invalid_fighters();
        return Ok(());
    };
    run_duel(first, second, seed, opts.battle, opts.log_path.as_deref())
}

fn run_duel(
    a: Archetype,
    b: Archetype,
    seed: u64,
    options: BattleOptions,
    log_path: Option<&Path>,
) -> anyhow::Result<()> {
    let mut battle = Battle::new_with_options(Fighter::new(a), Fighter::new(b), seed, options);
    presenter::print_welcome();
    let mut events = Vec::new();
    let outcome = loop {
        if let Some(outcome) = battle.outcome() {
            break outcome;
        }
        let turn_events = battle.run_turn();
        for event in &turn_events {
            presenter::print_event(event);
        }
        events.extend(turn_events);
    };
    let report = BattleReport {
        seed,
        outcome,
        turns: battle.turn(),
        final_view: battle.view(),
        events,
    };
    presenter::print_result(&report);
    if let Some(path) = log_path {
        write_transcript(&report, path)?;
    }
    Ok(())
}

fn write_transcript(report: &BattleReport, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write battle log to {}", path.display()))?;
    Ok(())
}

fn run_matrix(
    sims_per_cell: usize,
    seed: u64,
    options: BattleOptions,
    output_path: Option<&Path>,
) -> anyhow::Result<()> {
    let matrix = matrix::compute_matrix(sims_per_cell, seed, options);
    presenter::print_matrix(&matrix);
    if let Some(path) = output_path {
        matrix::write_csv(&matrix, path)?;
        println!(
            "Wrote {}x{} matrix to {}",
            matrix.len(),
            matrix.first().map(|r| r.len()).unwrap_or(0),
            path.display()
        );
    }
    Ok(())
}
