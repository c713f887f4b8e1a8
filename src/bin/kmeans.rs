//! K-means++ Binary
//!
//! Clusters comma-separated points from stdin, a file, or two keyed files.
//!
//! Usage:
//!   kmeans K [ITER] [--epsilon EPS] [--file PATH] [--seed N] [--json] [-v]
//!   kmeans K [ITER] EPS LEFT RIGHT [--seed N] [--json] [-v]
use clap::Parser;
use kmeanspp::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    kmeanspp::log(args.level());
    match args.config().and_then(execute) {
        Ok(clustering) if args.json() => println!("{}", serde_json::to_string_pretty(&clustering)?),
        Ok(clustering) => print!("{}", clustering),
        Err(e) => {
            log::debug!("{}", e.detail());
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
