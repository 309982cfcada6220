use clap::Parser;
use hamming_blocks::hamming::display::{group_bits, mark_noise, mark_parity, message_bits};
use hamming_blocks::{HammingCode, NoiseInjector, Result};
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Encode a message with Hamming codes, add noise and decode it again.
#[derive(Parser, Debug)]
#[command(name = "hamming_demo", version, about)]
struct Args {
    /// Message to encode (read from stdin when omitted)
    message: Option<String>,

    /// Payload bits per block; may be repeated
    #[arg(short, long = "data-bits", default_values_t = [8usize, 4])]
    data_bits: Vec<usize>,

    /// Seed for the noise generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Also flip two bits per block and decode leniently
    #[arg(long)]
    double: bool,
}

fn run_mode(message: &str, data_bits: usize, args: &Args) -> Result<()> {
    let code = HammingCode::new(data_bits)?;
    let mut noise = match args.seed {
        Some(seed) => NoiseInjector::with_seed(code, seed),
        None => NoiseInjector::new(code),
    };

    println!("\ndata bits = {}, parity bits = {}", data_bits, code.parity_bits());
    println!("msg: {}", group_bits(&message_bits(message.as_bytes()), data_bits, " "));

    let encoded = code.encode(message.as_bytes());
    println!(
        "enc: {}",
        mark_parity(&encoded, code.code_length(), &code.parity_positions())
    );

    let noisy = noise.inject_single_error(&encoded)?;
    println!("nz1: {}", mark_noise(&encoded, &noisy, code.code_length()));
    println!("dec: {}", code.decode_text(&noisy)?);

    if args.double {
        let noisy = noise.inject_double_error(&encoded)?;
        println!("nz2: {}", mark_noise(&encoded, &noisy, code.code_length()));
        println!("dec: {}", code.decode_lenient(&noisy)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let message = match &args.message {
        Some(message) => message.clone(),
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().lock().read_line(&mut line) {
                eprintln!("failed to read message: {}", e);
                return ExitCode::FAILURE;
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    for &data_bits in &args.data_bits {
        if let Err(e) = run_mode(&message, data_bits, &args) {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
