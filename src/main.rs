use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vendor_alias::{builder, cli::Cli, stats::BuildStats};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    eprintln!("Reading {}...", args.input.display());

    let mut stats = BuildStats::new();
    let map = builder::build_alias_map(&args.input, &mut stats)?;
    builder::write_alias_map(&map, &args.output)?;

    stats.report();
    eprintln!("Written to {}", args.output.display());

    if args.summary {
        stats.report_summary();
    }

    Ok(())
}
