use std::{sync::Arc, time::Instant};

use tracing::info;

use crate::{
    aggregator,
    args::Args,
    config::{self, ProbeConfig},
    dns, http, output,
    prober::HostProber,
    report, scheduler, wordlist, Error,
};

pub fn scan(args: &Args) -> Result<(), Error> {
    // configuration errors are all reported before any network setup
    let config = ProbeConfig::from_args(args)?;
    if args.threads == 0 {
        return Err(Error::InvalidConcurrency);
    }
    let domain = config::normalize_domain(&args.domain)?;
    let labels = wordlist::load(&args.wordlist)?;
    let hosts = wordlist::hosts(&labels, &domain);

    info!(
        domain = %domain,
        candidates = hosts.len(),
        concurrency = args.threads,
        "starting scan"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let report = runtime.block_on(async move {
        let resolver = dns::new_resolver(config.timeout)?;
        let http_client = http::new_http_client(config.timeout)?;
        let prober = Arc::new(HostProber::new(resolver, http_client, config));

        let started = Instant::now();
        let results = scheduler::run(prober, hosts, args.threads).await?;
        Ok::<_, Error>(aggregator::aggregate(results, started))
    })?;

    println!();
    println!("{}", report::summary_line(&report));

    if let Some(path) = &args.output {
        output::save(&report.results, path)?;
        println!("Saved results to: {}", path.display());
    }

    Ok(())
}
