//! Runs the filter over newline-delimited JSON records.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::filter::{Event, FilterOutcome, PublicIpFilter};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub processed: u64,
    pub matched: u64,
    pub tagged: u64,
    /// Lines that were not JSON objects.
    pub skipped: u64,
}

/// Reads records from `input` until EOF, writing each filtered record as one line to `output`.
pub async fn run<R, W>(filter: &PublicIpFilter, mut input: R, mut output: W) -> Result<Stats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();
    let mut stats = Stats::default();

    // Raw bytes, so a badly encoded line is skipped instead of ending the run
    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .await
            .context("Reading input record")?;
        if read == 0 {
            break;
        }
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let mut event: Event = match serde_json::from_slice(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping line that is not a JSON object: {e}");
                stats.skipped += 1;
                continue;
            }
        };

        match filter.filter(&mut event) {
            FilterOutcome::Matched { .. } => stats.matched += 1,
            FilterOutcome::Tagged(_) => stats.tagged += 1,
        }
        stats.processed += 1;

        let mut record = serde_json::to_vec(&event).context("Serializing record")?;
        record.push(b'\n');
        output.write_all(&record).await.context("Writing output record")?;
    }

    output.flush().await.context("Flushing output")?;
    Ok(stats)
}
