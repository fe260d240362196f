use futures::{StreamExt, pin_mut, stream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::core::constants::diagnostics;
use crate::core::error::Result;
use crate::core::types::RunReport;
use crate::discovery::is_valid_url;
use crate::probe::checker::CheckSite;
use crate::reporting::logging;

/// Drive one full run: read candidate URLs line by line from `input`, probe
/// every valid one with at most `concurrency` probes in flight, and write one
/// result line per probe to `output`.
///
/// Line reading is strictly sequential; probing is not. Result lines appear
/// in completion order. Invalid lines (blank lines included) are reported on
/// standard error in the same step that classifies them and never launch a
/// probe. The function returns only after every launched probe has finished
/// and its line has been written.
pub async fn run<R, W, C>(
    input: R,
    mut output: W,
    checker: Arc<C>,
    concurrency: usize,
) -> Result<RunReport>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: CheckSite + Send + Sync + 'static,
{
    let invalid = AtomicUsize::new(0);

    // `buffer_unordered` pulls the next candidate whenever a probe slot
    // frees up, so this closure is the only reader of the input stream.
    let candidates = stream::unfold(input.lines(), |mut lines| {
        let invalid = &invalid;
        async move {
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let candidate = line.trim();
                        if is_valid_url(candidate) {
                            return Some((candidate.to_string(), lines));
                        }
                        invalid.fetch_add(1, AtomicOrdering::Relaxed);
                        eprintln!("{}{}", diagnostics::INVALID_URL_PREFIX, candidate);
                    }
                    Ok(None) => return None,
                    Err(err) => {
                        eprintln!("{}{}", diagnostics::STDIN_READ_PREFIX, err);
                        return None;
                    }
                }
            }
        }
    });

    let results = candidates
        .map(|site| {
            let checker = Arc::clone(&checker);
            // Each probe is its own task so the runtime schedules probes in
            // parallel instead of multiplexing them on this loop's task.
            async move { tokio::spawn(async move { checker.check_site(&site).await }).await }
        })
        .buffer_unordered(concurrency);
    pin_mut!(results);

    // Single consumer: probe tasks never touch the output, so result lines
    // cannot interleave. Draining the stream is the completion barrier.
    let mut report = RunReport::default();
    while let Some(joined) = results.next().await {
        match joined {
            Ok(result) => {
                logging::log_probe_result(&result);
                report.record(&result);
                output.write_all(format!("{result}\n").as_bytes()).await?;
            }
            Err(err) => {
                // A panicked probe task must not stall the rest of the run.
                logging::log_error("probe task failed", Some(&err));
            }
        }
    }
    output.flush().await?;

    report.invalid = invalid.load(AtomicOrdering::Relaxed);
    Ok(report)
}
