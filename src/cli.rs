use super::{DisplayMode, DEFAULT_BASELINE, VERSION};
use clap::{App, Arg, ArgMatches};
use std::ffi::OsString;
use std::path::PathBuf;

/// Everything the plotting run needs from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotArgs {
    pub benchmarks_result: PathBuf,
    pub baseline_name: String,
    pub mode: DisplayMode,
    pub output: Option<PathBuf>,
    pub open: bool,
    pub verbose: bool,
}

fn app() -> App<'static, 'static> {
    let arg_results = Arg::with_name("benchmarks_result")
        .help("json file with the benchmark results")
        .short("b")
        .long("benchmarks_result")
        .takes_value(true)
        .required(true);
    let arg_last_40 = Arg::with_name("last_40")
        .help("finer axis ticks, for a narrow range of input sizes")
        .long("last_40")
        .takes_value(false);
    let arg_flat_sets = Arg::with_name("flat_sets")
        .help("axis scale and x label of the set benchmarks")
        .long("flat_sets")
        .takes_value(false);
    let arg_baseline = Arg::with_name("baseline_name")
        .help("name of the variant used as baseline, not plotted")
        .long("baseline_name")
        .takes_value(true)
        .default_value(DEFAULT_BASELINE);
    let arg_output = Arg::with_name("output_htmlfile")
        .help("name of the output html file, a temporary file if not given")
        .short("o")
        .long("output")
        .takes_value(true);
    let arg_no_open = Arg::with_name("no_open")
        .help("only write the chart, do not open it in the default viewer")
        .long("no_open")
        .takes_value(false);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false);
    App::new("bench_plot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("Comparing performance of different implementations.")
        .arg(arg_results)
        .arg(arg_last_40)
        .arg(arg_flat_sets)
        .arg(arg_baseline)
        .arg(arg_output)
        .arg(arg_no_open)
        .arg(arg_verbose)
}

fn plot_args(cli_args: &ArgMatches) -> PlotArgs {
    let benchmarks_result = PathBuf::from(cli_args.value_of("benchmarks_result").unwrap_or_default());
    let baseline_name = cli_args
        .value_of("baseline_name")
        .unwrap_or(DEFAULT_BASELINE)
        .to_string();
    let mode = DisplayMode {
        compact_range: cli_args.is_present("last_40"),
        grouped_sets: cli_args.is_present("flat_sets"),
    };
    PlotArgs {
        benchmarks_result,
        baseline_name,
        mode,
        output: cli_args.value_of("output_htmlfile").map(PathBuf::from),
        open: !cli_args.is_present("no_open"),
        verbose: cli_args.is_present("verbose"),
    }
}

/// Takes the CLI arguments that control the plotting of the benchmark results.
/// Prints usage and exits on invalid arguments.
pub fn parse_cli() -> PlotArgs {
    plot_args(&app().get_matches())
}

/// Same as [`parse_cli`] on an explicit argument list, returning clap errors.
pub fn parse_cli_from<I, T>(args: I) -> Result<PlotArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    Ok(plot_args(&cli_args))
}
