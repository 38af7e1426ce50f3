use bench_lpp::chart::{render_svg, to_html};
use bench_lpp::cli::parse_cli;
use bench_lpp::viewer::{open_in_viewer, write_chart};
use bench_lpp::{parse_results, BenchmarkReport};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = parse_cli();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        "read results from {} with baseline {:?}",
        args.benchmarks_result.display(),
        args.baseline_name
    );
    let report = BenchmarkReport::from_path(&args.benchmarks_result)?;
    let variants = parse_results(&report, &args.baseline_name)?;
    for v in variants.iter() {
        tracing::debug!("{}", v);
    }

    let svg = render_svg(&variants, args.mode)?;
    let path = write_chart(&to_html(&svg), args.output.as_deref())?;
    if args.open {
        open_in_viewer(&path)?;
    }
    Ok(())
}
