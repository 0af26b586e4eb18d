//! `gf_tables degree g` — print the multiplication and multiplicative
//! inverse tables for GF(2^degree) with irreducible polynomial `g`.
//!
//! Direct sibling of the reference `gf_tables.c`; unlike `encode_decode`
//! and `exhaustive_ec_test` this one isn't tied to the erasure coder's
//! fixed `(m=8, g=283)` — it accepts any valid `(m, g)` pair, per spec §6
//! ("Tools exposing raw field table printing accept (m, g) as decimal
//! integers on the command line").

use std::process::ExitCode;

use ec_gf2::field::Field;

const USAGE: &str = "usage: gf_tables degree g(x)\n\
   degree: degree of the base 2 Galois Field\n\
   g(x):   the coefficients of the irreducible polynomial used for multiplication\n\
Example: 'gf_tables 3 11', or 'gf_tables 8 283'";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Requires 2 parameters.\n\n{}", USAGE);
        return ExitCode::FAILURE;
    }

    let (m, g) = match (args[1].parse::<u32>(), args[2].parse::<u32>()) {
        (Ok(m), Ok(g)) => (m, g),
        _ => {
            eprintln!("degree and g(x) must be non-negative integers.\n\n{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let field = match Field::new(m, g) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error initializing gf: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_mult_table(&field);
    println!();
    print_mult_inv_table(&field);

    ExitCode::SUCCESS
}

fn print_mult_table(field: &Field) {
    println!("Multiplication table for GF(2^{}) with g(x) = 0x{:x}\n", field.degree(), field.modulus());
    print!("     ");
    for i in 0..field.order() {
        print!("{:02x} ", i);
    }
    println!();
    for i in 0..field.order() {
        print!("{:02x} | ", i);
        for j in 0..field.order() {
            print!("{:02x} ", field.mul(i as u8, j as u8));
        }
        println!();
    }
}

fn print_mult_inv_table(field: &Field) {
    println!(
        "Multiplicative inverse table for GF(2^{}) with g(x) = 0x{:x}\n",
        field.degree(),
        field.modulus()
    );
    for i in 1..field.order() {
        println!("{:02x} : {:02x}", i, field.mul_inv(i as u8));
    }
}
