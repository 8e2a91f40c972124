// Copyright © 2019 Bart Massey
// [This program is licensed under the "MIT License"]
// Please see the file LICENSE in the source
// distribution of this software for license terms.

use std::fs::File;
use std::io::stdin;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use matrix_game::*;

/// Solve a two-player zero-sum matrix game. The payoff
/// matrix is read as whitespace-separated integers, one
/// row per line, from FILE or standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File holding the payoff matrix.
    file: Option<PathBuf>,

    /// Solve a random ROWSxCOLUMNS matrix instead of
    /// reading one.
    #[arg(long, value_name = "ROWSxCOLUMNS", value_parser = parse_dims)]
    random: Option<(usize, usize)>,

    /// Seed for --random.
    #[arg(long)]
    seed: Option<u64>,

    /// Smallest random payoff.
    #[arg(long, default_value_t = *RANDOM_PAYOFFS.start(), allow_negative_numbers = true)]
    low: Payoff,

    /// Largest random payoff.
    #[arg(long, default_value_t = *RANDOM_PAYOFFS.end(), allow_negative_numbers = true)]
    high: Payoff,

    /// Decimal places shown for probabilities.
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Repeat dominance elimination until nothing more is
    /// dominated, rather than making a single pass.
    #[arg(long)]
    fixed_point: bool,

    /// Smallest allowed number of rows or columns.
    #[arg(long, default_value_t = Limits::default().min)]
    min_dim: usize,

    /// Largest allowed number of rows or columns.
    #[arg(long, default_value_t = Limits::default().max)]
    max_dim: usize,

    /// More logging; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Parse `ROWSxCOLUMNS`, as in `3x4`.
fn parse_dims(s: &str) -> Result<(usize, usize), String> {
    let bad = || format!("expected ROWSxCOLUMNS, got {:?}", s);
    let (r, c) = s.split_once(|c| c == 'x' || c == 'X').ok_or_else(bad)?;
    let r = r.trim().parse().map_err(|_| bad())?;
    let c = c.trim().parse().map_err(|_| bad())?;
    Ok((r, c))
}

#[test]
fn test_parse_dims() {
    assert_eq!(parse_dims("3x4"), Ok((3, 4)));
    assert_eq!(parse_dims("20X2"), Ok((20, 2)));
    assert!(parse_dims("3").is_err());
    assert!(parse_dims("ax4").is_err());
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn get_matrix(args: &Args) -> Result<PayoffMatrix, GameError> {
    let limits = Limits {
        min: args.min_dim,
        max: args.max_dim,
    };
    let m = match args.random {
        Some((rows, columns)) => {
            limits.check(rows, columns)?;
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            random_matrix(&mut rng, rows, columns, args.low..=args.high)?
        }
        None => {
            let rows = match &args.file {
                Some(path) => read_matrix(File::open(path)?)?,
                None => read_matrix(stdin())?,
            };
            PayoffMatrix::from_rows(rows)?
        }
    };
    limits.check(m.rows(), m.columns())?;
    log::info!("read {}x{} payoff matrix", m.rows(), m.columns());
    Ok(m)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let m = match get_matrix(&args) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };
    print!("{}", m);

    let policy = if args.fixed_point {
        Policy::FixedPoint
    } else {
        Policy::SinglePass
    };
    let soln = Solver::new(policy).solve(&m);
    if let Solution::Unsolvable { reason, .. } = &soln {
        log::warn!("{}", reason);
    }
    print!("{}", Report::new(&soln).precision(args.precision));
}
