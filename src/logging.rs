use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pc_build_validator=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pc_build_validator=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log a parsed input document
pub fn log_input_loaded(source: &str, budget: i64, components: usize, kits: usize) {
    tracing::info!(
        source = source,
        budget = budget,
        components = components,
        kits = kits,
        "Input loaded"
    );
}

/// Log the outcome of one kit evaluation
pub fn log_kit_evaluated(kit: &str, valid: bool, cost: u64, score: u64) {
    tracing::debug!(
        kit = kit,
        valid = valid,
        cost = cost,
        score = score,
        "Kit evaluated"
    );
}

/// Log the ranking result
pub fn log_best_build(kit: &str, score: u64) {
    tracing::debug!(kit = kit, score = score, "Best build selected");
}

/// Log performance metrics
pub fn log_performance(operation: &str, duration_ms: u64) {
    tracing::debug!(
        operation = operation,
        duration_ms = duration_ms,
        "Operation performance"
    );
}
