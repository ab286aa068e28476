use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use pwncheck_client::RangeClient;
use tracing_subscriber::EnvFilter;

mod batch;
mod error;
mod interactive;

use batch::{output_path, run_batch};
use error::Error;

#[derive(Parser, Debug)]
#[command(name = "pwncheck")]
#[command(about = "Check passwords against the Have I Been Pwned range API")]
struct Args {
    /// Optional path to a line-separated password file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Input file path; overrides --file when both are given
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let client = RangeClient::new();

    match args.input.or(args.file) {
        Some(input) => {
            let output = output_path(&input, Local::now());
            println!("Saving results to: {}", output.display());

            let summary = run_batch(&client, &input, &output).await?;
            println!("{} passwords checked.", summary.checked);
            println!("{} errors.", summary.errors);
        }
        None => interactive::run(&client).await?,
    }

    Ok(())
}
