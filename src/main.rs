use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};

use vecmat::{generate_vector_with, generate_with, utils::print_vector, Matrix};

/// Multiplies a random vector by a random matrix, first on one worker and
/// then on several, and prints both results.
#[derive(Parser, Debug)]
#[command(name = "vecmat", version, about)]
struct Args {
    /// Matrix rows (also the vector length)
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Matrix columns
    #[arg(long, default_value_t = 6)]
    cols: usize,

    /// Workers for the parallel run
    #[arg(short, long, default_value_t = 4)]
    workers: usize,

    /// Seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,
}

fn run(args: &Args) -> vecmat::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let matrix: Matrix<f64> = generate_with(&mut rng, args.rows, args.cols);
    let vector: Vec<f64> = generate_vector_with(&mut rng, args.rows);

    println!("Matrix:");
    matrix.print();

    println!("\nVector:");
    print_vector(&vector);

    println!("\nSingle-threaded multiplication (left multiplication):");
    let result = matrix.multiply_by_vector_left(&vector, 1)?;
    print_vector(&result);

    println!(
        "\nMulti-threaded multiplication (left multiplication) with {} threads:",
        args.workers
    );
    let result = matrix.multiply_by_vector_left(&vector, args.workers)?;
    print_vector(&result);

    info!(
        "multiplied {}x{} matrix with 1 and {} workers",
        args.rows, args.cols, args.workers
    );
    Ok(())
}

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
