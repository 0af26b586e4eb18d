//! `encode_decode k p` — encode a random k-byte block, decode it back from
//! a random surviving k-subset, and report success or failure.
//!
//! Rust sibling of the reference `encode_decode.c`: same surface
//! (`<program> k p`), same exit-code contract (0 on success, non-zero on
//! any initialization, encode, or decode failure).

use std::process::ExitCode;

use ec_gf2::coder::{Coder, STANDARD_DEGREE, STANDARD_MODULUS};
use ec_gf2::field::Field;
use ec_gf2::fmt::{format_bytes, format_indices};
use ec_gf2::rng::random_vec;

const USAGE: &str = "usage: encode_decode k p\nExample: encode_decode 4 2\n";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprint!("Requires 2 parameters.\n\n{}", USAGE);
        return ExitCode::FAILURE;
    }

    let (k, p) = match (args[1].parse::<usize>(), args[2].parse::<usize>()) {
        (Ok(k), Ok(p)) => (k, p),
        _ => {
            eprint!("k and p must be positive integers.\n\n{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let field = match Field::new(STANDARD_DEGREE, STANDARD_MODULUS) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error initializing Galois Field: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let coder = match Coder::new(&field, k, p) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error initializing Erasure Code: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let data = random_vec(k);
    println!("Original data: {}", format_bytes(&data));

    let parity = match coder.encode(&data) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error encoding: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let codeword: Vec<u8> = data.iter().chain(parity.iter()).copied().collect();
    println!("Erasure Code: {}", format_bytes(&codeword));

    // Pick k distinct positions out of the n-byte codeword.
    use rand::seq::SliceRandom;
    let mut rng = rand::thread_rng();
    let mut indices: Vec<usize> = (0..coder.n()).collect();
    indices.shuffle(&mut rng);
    indices.truncate(k);
    indices.sort_unstable();

    let input: Vec<u8> = indices.iter().map(|&i| codeword[i]).collect();
    println!("Indices: {}", format_indices(&indices));

    let result = match coder.decode(&input, &indices) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error decoding - {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!("Result: {}", format_bytes(&result));

    if result != data {
        eprintln!("ERROR: Incorrect decoded bytes.");
        return ExitCode::FAILURE;
    }

    println!("Decode successful!");
    ExitCode::SUCCESS
}
