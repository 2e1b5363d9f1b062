use battle_arena::battle::{Side, TurnOrder};
use battle_arena::{presenter, run, CliOptions};
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut opts = CliOptions::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                opts.seed = Some(val.parse()?);
            }
            "--turn-order" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--turn-order requires random or alternate"))?;
                opts.battle.turn_order = match val.to_ascii_lowercase().as_str() {
                    "random" => TurnOrder::Random,
                    "alternate" => TurnOrder::Alternate { first: Side::A },
                    other => anyhow::bail!("--turn-order must be random or alternate, got {other}"),
                };
            }
            "--log" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--log requires a path (e.g. --log battle.json)")
                })?;
                opts.log_path = Some(path);
            }
            "--matrix" => {
                opts.matrix = true;
            }
            "--sims-per-cell" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--sims-per-cell requires a number"))?;
                opts.sims_per_cell = val.parse()?;
            }
            "--output" => {
                let path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output matrix.csv)")
                })?;
                opts.output_path = Some(path);
            }
            "--help" | "-h" => {
                presenter::print_usage();
                std::process::exit(0);
            }
            other => {
                if other.starts_with('-') {
                    anyhow::bail!("Unknown argument {other}");
                }
                opts.labels.push(other.to_string());
            }
        }
    }

    Ok(opts)
}
