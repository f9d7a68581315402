use std::io;
use std::process::exit;

use clap::Parser;
use tracing::debug;

use bitseq::{
    error::BitSeqError,
    generate::write_bits,
    input::{prompt, read_bit_count, Policy},
    source::Method,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// the number of bits to generate, read from stdin after a prompt when omitted
    #[arg(short = 'n', long)]
    bits: Option<usize>,

    /// how a single pseudo-random draw is reduced to a bit
    #[arg(long, value_enum, default_value_t = Method::Modulo)]
    method: Method,

    /// read negative or malformed bit counts as 0 instead of failing
    #[arg(long)]
    lenient: bool,
}

fn run(cli: &Cli) -> Result<usize, BitSeqError> {
    let policy = if cli.lenient {
        Policy::Lenient
    } else {
        Policy::Strict
    };

    let mut stdout = io::stdout().lock();

    let n = match cli.bits {
        Some(n) => n,
        None => {
            prompt(&mut stdout)?;
            read_bit_count(&mut io::stdin().lock(), policy)?
        }
    };

    let mut source = cli.method.time_seeded();
    write_bits(n, &mut source, &mut stdout)
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .try_init()
        .expect("cannot init logger");

    let cli = Cli::parse();

    match run(&cli) {
        Ok(n) => debug!("wrote {} bits with the {} method", n, cli.method),
        Err(e) => {
            eprintln!("error: {}", e);
            exit(1);
        }
    }
}
