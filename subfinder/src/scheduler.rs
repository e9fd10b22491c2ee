use std::sync::Arc;

use futures::{stream, StreamExt};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::warn;

use crate::{models::ProbeResult, prober::Probe, Error};

/// Probes every host exactly once with at most `concurrency` probes in flight
/// and returns the live results in completion order.
///
/// Each probe runs as its own task, so probes can land on different worker
/// threads and a panicking probe only costs its own host.
pub async fn run<P: Probe>(
    prober: Arc<P>,
    hosts: Vec<String>,
    concurrency: usize,
) -> Result<Vec<ProbeResult>, Error> {
    if concurrency == 0 {
        return Err(Error::InvalidConcurrency);
    }

    let (output_tx, output_rx) = mpsc::channel(concurrency);
    // drained while probes are still running so the bounded channel never
    // blocks the pool
    let collector = tokio::spawn(ReceiverStream::new(output_rx).collect::<Vec<ProbeResult>>());

    stream::iter(hosts)
        .for_each_concurrent(concurrency, |host| {
            let prober = prober.clone();
            let output_tx = output_tx.clone();

            async move {
                let task = tokio::spawn({
                    let host = host.clone();
                    async move { prober.probe(host).await }
                });

                match task.await {
                    Ok(outcome) => {
                        if let Some(result) = outcome.into_live() {
                            let _ = output_tx.send(result).await;
                        }
                    }
                    Err(err) => warn!(host = %host, "probe task failed: {}", err),
                }
            }
        })
        .await;
    // close channel
    drop(output_tx);

    Ok(collector.await?)
}
