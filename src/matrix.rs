use crate::battle::{simulate_battle, BattleOptions, BattleOutcome};
use crate::fighter::Archetype;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub fn compute_matrix(sims_per_cell: usize, seed: u64, options: BattleOptions) -> Vec<Vec<f64>> {
    let roster = Archetype::ALL;
    let tasks: Vec<(usize, usize)> = (0..roster.len())
        .flat_map(|a| (0..roster.len()).map(move |b| (a, b)))
        .collect();
    let cell_results: Vec<CellResult> = tasks
        .par_iter()
        .map(|(a_idx, b_idx)| {
            let mut cell_rng =
                SmallRng::seed_from_u64(seed ^ ((*a_idx as u64) << 32) ^ (*b_idx as u64));
            let mut a_wins = 0u64;
            for _ in 0..sims_per_cell {
                let battle_seed = cell_rng.gen();
                if simulate_battle(roster[*a_idx], roster[*b_idx], battle_seed, options)
                    == BattleOutcome::AWins
                {
                    a_wins += 1;
                }
            }
            CellResult {
                a_idx: *a_idx,
                b_idx: *b_idx,
                win_rate: a_wins as f64 / sims_per_cell as f64,
            }
        })
        .collect();

    let mut matrix = vec![vec![0.0; roster.len()]; roster.len()];
    for cell in cell_results {
        matrix[cell.a_idx][cell.b_idx] = cell.win_rate;
    }
    matrix
}

pub fn write_csv(matrix: &[Vec<f64>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&format!("{value:.4}"));
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}

struct CellResult {
    a_idx: usize,
    b_idx: usize,
    win_rate: f64,
}
