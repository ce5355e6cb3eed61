use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ticksched::config::{Config, USAGE};
use ticksched::core::Engine;
use ticksched::sim::{read_process_table, summarize, write_completion_report};

fn main() -> Result<()> {
    init_tracing();

    let cfg = match Config::parse(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let records = read_process_table(&cfg.input)?;
    info!(
        scheduler = %cfg.discipline,
        processes = records.len(),
        "starting simulation"
    );

    let engine = Engine::new(cfg.discipline, cfg.quantum, records)?;
    let finished = engine.run();

    write_completion_report(&cfg.output, &finished)?;
    match summarize(&finished) {
        Some(summary) => info!(
            finished = finished.len(),
            mean_turnaround = summary.mean_turnaround,
            mean_normalized_turnaround = summary.mean_normalized_turnaround,
            output = %cfg.output.display(),
            "wrote completion report"
        ),
        None => info!(output = %cfg.output.display(), "no processes to report"),
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
