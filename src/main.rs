use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use galois::{
    all_possible_polynomials, DirectField, ExpLogField, Field256, FIELD_SIZE,
    GENERATING_POLYNOMIAL,
};
use itertools::Itertools;
use log::{info, warn};
use rand::Rng;

#[derive(Parser)]
#[command(name = "galois", about = "GF(2^8) arithmetic and table diagnostics")]
struct Cli {
    /// Generating polynomial without its x^8 term, decimal or 0x-prefixed hex.
    #[arg(long, global = true, default_value_t = GENERATING_POLYNOMIAL, value_parser = parse_byte)]
    polynomial: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every polynomial that generates the field.
    Polynomials,
    /// Print the logarithm and exponent tables.
    Tables,
    Mul {
        #[arg(value_parser = parse_byte)]
        a: u8,
        #[arg(value_parser = parse_byte)]
        b: u8,
    },
    Div {
        #[arg(value_parser = parse_byte)]
        a: u8,
        #[arg(value_parser = parse_byte)]
        b: u8,
    },
    Exp {
        #[arg(value_parser = parse_byte)]
        a: u8,
        n: u32,
    },
    /// Compare table lookups against direct multiplication on random operands.
    Check {
        #[arg(long, default_value_t = 100_000)]
        samples: usize,
    },
}

// Reads a field element written either in decimal ("29") or hex ("0x1d").
fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    return parsed.map_err(|e| format!("{:?} is not a byte value: {}", s, e));
}

fn print_rows<I: Iterator<Item = String>>(cells: I) {
    for row in &cells.chunks(8) {
        println!("{}", row.map(|c| format!("{:>4}", c)).join(" "));
    }
}

fn check(field: &ExpLogField, samples: usize) -> Result<()> {
    let direct = DirectField::new(field.polynomial());
    let mut rng = rand::thread_rng();
    let mut mismatches = 0usize;
    for _ in 0..samples {
        let a: u8 = rng.gen();
        let b: u8 = rng.gen();
        let n: u32 = rng.gen_range(0..4 * FIELD_SIZE as u32);
        if field.mul(a, b) != direct.mul(a, b)
            || field.div(a, b).ok() != direct.div(a, b).ok()
            || field.exp(a, n) != direct.exp(a, n)
        {
            warn!("mismatch for a={} b={} n={}", a, b, n);
            mismatches += 1;
        }
    }
    if mismatches > 0 {
        bail!("{} of {} samples disagree", mismatches, samples);
    }
    info!("{} samples agree", samples);
    return Ok(());
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Command::Polynomials = cli.command {
        let polynomials = all_possible_polynomials();
        println!("{}", polynomials.iter().join(", "));
        return Ok(());
    }

    let field = ExpLogField::new(cli.polynomial)
        .with_context(|| format!("polynomial {} does not generate GF(2^8)", cli.polynomial))?;
    info!("using generating polynomial {}", field.polynomial());

    match cli.command {
        Command::Polynomials => {}
        Command::Tables => {
            let log = field.log_table();
            println!("log:");
            print_rows((0..FIELD_SIZE).map(|e| match log.log(e as u8) {
                Some(l) => l.to_string(),
                None => String::from("-"),
            }));
            println!("exp:");
            print_rows(field.exp_table().as_slice().iter().map(|e| e.to_string()));
        }
        Command::Mul { a, b } => println!("{}", field.mul(a, b)),
        Command::Div { a, b } => println!("{}", field.div(a, b)?),
        Command::Exp { a, n } => println!("{}", field.exp(a, n)),
        Command::Check { samples } => check(&field, samples)?,
    }
    return Ok(());
}
