mod input;
mod report;

use std::path::PathBuf;
use std::{env, fs};

use anyhow::Context;
use unseal_recovery::{recover, split_secret};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let cmd = &args[1];

    match cmd.as_str() {
        "recover" => {
            if args.len() < 3 {
                println!("Usage: unseal recover <shares.json> [--threshold <k>] [--json]");
                return;
            }
            let opts = parse_recover_args(&args[2..]);
            if let Err(e) = run_recover(&opts) {
                eprintln!("❌ Error recovering secret: {e:#}");
                std::process::exit(1);
            }
        }
        "split" => {
            if args.len() < 3 {
                println!(
                    "Usage: unseal split <secret> --threshold <k> --shares <n> [--base <b>] [--out <path>]"
                );
                return;
            }
            let opts = match parse_split_args(&args[2..]) {
                Ok(opts) => opts,
                Err(e) => {
                    eprintln!("❌ {e:#}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = run_split(&opts) {
                eprintln!("❌ Error splitting secret: {e:#}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        _ => {
            println!("❌ Unknown command: {}", cmd);
            println!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Unseal - Threshold Secret Recovery Tool");
    println!();
    println!("USAGE:");
    println!("  unseal <command> [args]");
    println!();
    println!("COMMANDS:");
    println!("  recover <shares.json>      Reconstruct a secret and audit every share");
    println!("  split <secret>             Split a decimal secret into shares");
    println!("  help                       Show this help message");
    println!();
    println!("RECOVER OPTIONS:");
    println!("  --threshold <k>            Override the document's threshold");
    println!("  --json                     Emit the report as JSON");
    println!();
    println!("SPLIT OPTIONS:");
    println!("  --threshold <k>            Shares required to reconstruct (required)");
    println!("  --shares <n>               Total shares to generate (required)");
    println!("  --base <b>                 Base share values are encoded in (default: 10)");
    println!("  --out <path>               Write the document to a file instead of stdout");
    println!();
    println!("EXAMPLES:");
    println!("  unseal recover shares.json              # Recover and audit");
    println!("  unseal recover shares.json --json       # Machine-readable report");
    println!("  unseal recover shares.json --threshold 3");
    println!("  unseal split 12345 --threshold 2 --shares 5");
    println!("  unseal split -98765 --threshold 3 --shares 5 --base 16 --out shares.json");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("  RUST_LOG             Log level (debug/info/warn/error)");
}

struct RecoverOptions {
    path: PathBuf,
    threshold: Option<usize>,
    json: bool,
}

fn parse_recover_args(args: &[String]) -> RecoverOptions {
    let mut opts = RecoverOptions {
        path: PathBuf::from(&args[0]),
        threshold: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threshold" | "-k" => {
                if let Some(value) = args.get(i + 1) {
                    if let Ok(k) = value.parse() {
                        opts.threshold = Some(k);
                    }
                    i += 1;
                }
            }
            "--json" => {
                opts.json = true;
            }
            _ => {}
        }
        i += 1;
    }

    opts
}

fn run_recover(opts: &RecoverOptions) -> anyhow::Result<()> {
    let document = input::load_document(&opts.path)?;
    let (document_threshold, shares) = input::decode_document(&document)?;

    let threshold = opts.threshold.unwrap_or(document_threshold);
    log::info!(
        "recovering with threshold {} over {} shares",
        threshold,
        shares.len()
    );

    let recovery = recover(&shares, threshold)?;
    log::debug!("basis x-coordinates: {:?}", recovery.basis_x);

    if opts.json {
        let rendered = serde_json::to_string_pretty(&report::to_json(&recovery))?;
        println!("{rendered}");
    } else {
        report::print_text(&recovery);
    }

    Ok(())
}

/// Encoding base for emitted share values unless --base says otherwise.
const DEFAULT_BASE: u32 = 10;

struct SplitOptions {
    secret: String,
    threshold: usize,
    total: usize,
    base: u32,
    out: Option<PathBuf>,
}

fn parse_split_args(args: &[String]) -> anyhow::Result<SplitOptions> {
    let secret = args[0].clone();
    let mut threshold = None;
    let mut total = None;
    let mut base = DEFAULT_BASE;
    let mut out = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--threshold" | "-k" => {
                let value = args.get(i + 1).context("--threshold needs a value")?;
                threshold = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid threshold '{value}'"))?,
                );
                i += 1;
            }
            "--shares" | "-n" => {
                let value = args.get(i + 1).context("--shares needs a value")?;
                total = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid share count '{value}'"))?,
                );
                i += 1;
            }
            "--base" => {
                let value = args.get(i + 1).context("--base needs a value")?;
                base = value
                    .parse()
                    .with_context(|| format!("invalid base '{value}'"))?;
                i += 1;
            }
            "--out" => {
                let value = args.get(i + 1).context("--out needs a path")?;
                out = Some(PathBuf::from(value));
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    Ok(SplitOptions {
        secret,
        threshold: threshold.context("split requires --threshold <k>")?,
        total: total.context("split requires --shares <n>")?,
        base,
        out,
    })
}

fn run_split(opts: &SplitOptions) -> anyhow::Result<()> {
    let secret = unseal_codec::decode(&opts.secret, 10)
        .with_context(|| format!("secret '{}' is not a decimal integer", opts.secret))?;

    let shares = split_secret(&secret, opts.threshold, opts.total)?;
    let document = input::encode_document(&shares, opts.threshold, opts.base)?;
    let rendered = serde_json::to_string_pretty(&document)?;

    match &opts.out {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "✅ Wrote {} shares (threshold {}) to {}",
                shares.len(),
                opts.threshold,
                path.display()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
