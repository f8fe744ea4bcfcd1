//! Serial vs parallel generation throughput

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::{Board, BoardError};

fn seeded_board(size: usize) -> Result<Board, BoardError> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut board = Board::new(size, size)?;
    board.randomize(&mut rng, 0.3)?;
    Ok(board)
}

/// Average milliseconds per generation
fn time_steps(mut board: Board, iterations: u32, step: fn(&Board) -> Board) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        board = step(&board);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() -> Result<(), BoardError> {
    println!("=== Toroidal Life Step Benchmark ===\n");

    let sizes = [20, 50, 200, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let board = seeded_board(size)?;
        let serial_ms = time_steps(board.clone(), iterations, Board::step);
        let parallel_ms = time_steps(board, iterations, Board::step_parallel);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
