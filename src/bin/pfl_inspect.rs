//! Inspect picofloat formats from the command line.
//!
//! Encodes values given as arguments, sweeps the representable-value density
//! of a layout, or runs a random-walk delta demo on synthetic telemetry.

use clap::{Parser, ValueEnum};
use picofloat::Format;
use rand::Rng;

#[derive(Copy, Clone, ValueEnum)]
enum Preset {
    /// Base-2, 4 exponent bits, bias -8
    X4,
    /// Base-3, 3 exponent bits, bias -6
    X3,
    /// Base-3, 2 exponent bits, bias -3
    X2,
}

#[derive(Parser)]
#[command(name = "pfl-inspect")]
#[command(about = "Inspect picofloat formats: codes, density sweeps, delta demos")]
#[command(after_help = "EXAMPLES:\n  \
    pfl-inspect 1.567 -- encode one value with the default 12-bit x4 format\n  \
    pfl-inspect --preset x3 --bits 13 --sweep 40 -- print density of 13-bit x3\n  \
    pfl-inspect --walk 1000 -- random-walk delta statistics")]
struct Args {
    /// Values to encode and print
    values: Vec<f64>,

    /// Preset exponent layout
    #[arg(long, value_enum, default_value = "x4")]
    preset: Preset,

    /// Total code width in bits
    #[arg(long, default_value = "12")]
    bits: u32,

    /// Drop the sign bit (magnitude-only format)
    #[arg(long)]
    unsigned: bool,

    /// Print N evenly spaced probes with codes and quantization error
    #[arg(long)]
    sweep: Option<usize>,

    /// Run a random-walk delta demo with N steps
    #[arg(long)]
    walk: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let signed = !args.unsigned;
    let format = match args.preset {
        Preset::X4 => Format::x4(args.bits, signed),
        Preset::X3 => Format::x3(args.bits, signed),
        Preset::X2 => Format::x2(args.bits, signed),
    };
    let format = match format {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "{}-bit {} base-{} | exponent {} bits (bias {}) | mantissa {} bits | range [{:.6}, {:.6}]",
        format.total_bits(),
        if format.signed() { "signed" } else { "unsigned" },
        format.exponent_base(),
        format.exponent_bits(),
        format.min_exponent(),
        format.mantissa_bits(),
        format.min_value(),
        format.max_value(),
    );

    for &v in &args.values {
        let code = format.encode(v);
        let back = format.decode(code);
        println!(
            "{v:>14.6}  ->  {code:#06x}  ->  {back:>14.6}  (error {:+.3e})",
            back - v
        );
    }

    if let Some(n) = args.sweep {
        sweep(&format, n.max(2));
    }
    if let Some(n) = args.walk {
        walk(&format, n);
    }
}

/// Print evenly spaced probes with the distance to the next representable
/// value, showing how precision degrades across the range.
fn sweep(format: &Format, n: usize) {
    println!("\n{:>14}  {:>6}  {:>14}  {:>12}", "probe", "code", "decoded", "step");
    let lo = format.min_value();
    let span = format.max_value() - lo;
    for i in 0..n {
        let v = lo + span * (i as f64) / ((n - 1) as f64);
        let code = format.encode(v);
        let decoded = format.decode(code);
        let next = format.decode(format.use_integer_delta(code, 1));
        println!(
            "{v:>14.6}  {code:#06x}  {decoded:>14.6}  {:>12.3e}",
            next - decoded
        );
    }
}

/// Random-walk telemetry demo: encode a drifting signal and report how the
/// integer deltas distribute.
fn walk(format: &Format, n: usize) {
    let mut rng = rand::rng();
    let amplitude = format.max_value() / 50.0;

    let mut v = 0.0f64;
    let mut last = format.encode(v);
    let mut max_delta = 0i32;
    let mut single_byte = 0usize;

    for _ in 0..n {
        v += rng.random_range(-amplitude..amplitude);
        v = v.clamp(format.min_value(), format.max_value());
        let code = format.encode(v);
        let delta = format.get_integer_delta(last, code);
        max_delta = max_delta.max(delta.abs());
        if (-128..=127).contains(&delta) {
            single_byte += 1;
        }
        last = code;
    }

    println!("\nrandom walk: {n} steps, amplitude {amplitude:.4}");
    println!("  max |delta|:        {max_delta}");
    println!(
        "  single-byte deltas: {single_byte}/{n} ({:.1}%)",
        100.0 * single_byte as f64 / n as f64
    );
}
