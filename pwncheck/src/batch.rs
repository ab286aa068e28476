use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pwncheck_client::{RangeLookup, check_password};
use tokio::fs;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};
use tracing::warn;

use crate::error::Error;

/// Successful writes between flushes of the output file.
const FLUSH_EVERY: u64 = 10;

/// Totals reported at the end of a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Passwords checked with a numeric outcome. Query errors do not count.
    pub checked: u64,
    /// Passwords whose range query failed.
    pub errors: u64,
}

/// Derives the result-file path from the input path: same directory, input
/// stem plus `-pwnresult-<YYYYMMDD-HHMMSS>.txt`.
pub fn output_path(input: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("passwords");
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    dir.join(format!("{}-pwnresult-{}.txt", stem, now.format("%Y%m%d-%H%M%S")))
}

/// Checks every non-blank line of `input` and writes one annotated line per
/// password to `output`.
///
/// File open/create failures and write failures are fatal; per-password
/// query failures are recorded in the output and the summary.
pub async fn run_batch<C: RangeLookup>(
    client: &C,
    input: &Path,
    output: &Path,
) -> Result<BatchSummary, Error> {
    let in_file = fs::File::open(input).await?;
    let out_file = fs::File::create(output).await?;

    let reader = BufReader::new(in_file);
    let mut writer = BufWriter::new(out_file);

    process_lines(client, reader, &mut writer).await
}

/// Batch state machine over lines: skip blanks, check each password, write
/// `password:count` or `password:error`, flush every [`FLUSH_EVERY`]
/// successful writes and once more at the end. Error lines are flushed
/// immediately so they survive an interrupted run.
pub(crate) async fn process_lines<C, R, W>(
    client: &C,
    reader: R,
    writer: &mut W,
) -> Result<BatchSummary, Error>
where
    C: RangeLookup,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = BatchSummary::default();
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let password = line.as_str();
        if password.is_empty() {
            continue;
        }

        match check_password(client, password).await {
            Ok(outcome) => {
                let count = outcome.unwrap_or(0);
                writer.write_all(format!("{password}:{count}\n").as_bytes()).await?;
                summary.checked += 1;
                if summary.checked % FLUSH_EVERY == 0 {
                    writer.flush().await?;
                }
            }
            Err(e) => {
                warn!("skipping entry after failed range query: {e}");
                writer.write_all(format!("{password}:error\n").as_bytes()).await?;
                writer.flush().await?;
                summary.errors += 1;
            }
        }
    }

    writer.flush().await?;
    Ok(summary)
}
