//! mcjar CLI - fetch and verify Minecraft server jars and Forge installers
//!
//! Usage:
//!   mcjar 1.18.2                   Download server.jar for a release
//!   mcjar latest                   Download the current stable release
//!   mcjar latest-snapshot          Download the current snapshot
//!   mcjar list                     List all known versions
//!   mcjar forge:1.18.2             Download the promoted Forge installer
//!   mcjar forge:1.18.2-40.1.80     Download a specific Forge installer
//!   mcjar forge:list               List Forge versions and promotions

use anyhow::Result;
use clap::Parser;
use mcjar::{checksum, download, options, output, resolve, FetchOptions, Outcome, VerifyResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcjar")]
#[command(about = "Fetch and verify Minecraft server jars and Forge installers")]
#[command(version)]
struct Cli {
    /// Version token: a release id, latest, latest-snapshot, list,
    /// list-latest, list-latest-snapshot, or forge:<spec>
    token: String,

    /// Destination directory for the downloaded artifact
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Suppress progress bars and detail output
    #[arg(short, long)]
    quiet: bool,

    /// Print extra resolution detail
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// HTTP timeout in seconds (clamped to 5-300)
    #[arg(long, env = "MCJAR_HTTP_TIMEOUT")]
    timeout: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let opts = FetchOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        timeout: options::http_timeout(cli.timeout),
    };

    let target = match resolve::dispatch(&cli.token, &opts)? {
        Outcome::Listing(ids) => {
            for id in ids {
                println!("{}", id);
            }
            return Ok(());
        }
        Outcome::Target(target) => target,
    };

    if opts.verbose {
        output::detail(&format!("resolved {} -> {}", cli.token, target.url));
    }
    if !opts.quiet {
        output::action(&format!("Fetching {}", target.file_name));
    }

    let dest = cli.dir.join(&target.file_name);
    let bytes = download::download(&target.url, &dest, &opts)?;
    if !opts.quiet {
        output::detail(&format!("downloaded {} ({} bytes)", target.file_name, bytes));
    }

    match checksum::verify(&dest, target.checksum.as_deref(), target.algorithm, &opts)? {
        VerifyResult::Verified => {
            if !opts.quiet {
                output::success(&format!(
                    "{} verified ({})",
                    target.file_name,
                    target.algorithm.name()
                ));
            }
            Ok(())
        }
        VerifyResult::Skipped(reason) => {
            output::warning(&format!("verification skipped: {}", reason));
            Ok(())
        }
        VerifyResult::Mismatch { expected, actual } => anyhow::bail!(
            "{} checksum mismatch for '{}': expected {}, got {} (file kept on disk)",
            target.algorithm.name(),
            dest.display(),
            expected,
            actual
        ),
    }
}
