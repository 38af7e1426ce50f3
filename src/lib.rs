pub mod axis;
pub mod chart;
pub mod cli;
pub mod error;
pub mod parse;
pub mod viewer;

pub use crate::axis::{AxisConfig, DisplayMode};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::parse::{parse_results, BenchmarkName, BenchmarkReport};

pub const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");

pub const DEFAULT_BASELINE: &str = "baseline";
pub const SOLUTION_SUFFIX: &str = "_solution";

pub const Y_TITLE: &str = "ns";
pub const X_TITLE_RHS: &str = "rhs size";
pub const X_TITLE_INSERTING: &str = "inserting elements size";

pub const CHART_SIZE: (u32, u32) = (1600, 800);
pub const LINE_WIDTH: u32 = 3;
pub const TICK_LENGTH: i32 = 8;
pub const TICK_WIDTH: u32 = 4;

/// One benchmark sample: the input size and the measured real time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub input_size: i64,
    pub time: f64,
}

impl Measurement {
    pub fn new(input_size: i64, time: f64) -> Measurement {
        Measurement { input_size, time }
    }
}

/// A named implementation with its samples in input order.
/// The name is kept for display, underscores already replaced by spaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub measurements: Vec<Measurement>,
}

impl Variant {
    pub fn new(raw_name: &str, measurements: Vec<Measurement>) -> Variant {
        Variant {
            name: display_name(raw_name),
            measurements,
        }
    }

    pub fn input_sizes(&self) -> impl Iterator<Item = i64> + '_ {
        self.measurements.iter().map(|m| m.input_size)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.measurements.iter().map(|m| m.time)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "input size, time [{}]", Y_TITLE)?;
        for m in self.measurements.iter() {
            writeln!(f, "{},{}", m.input_size, m.time)?
        }
        Ok(())
    }
}

pub fn display_name(raw_name: &str) -> String {
    raw_name.replace('_', " ")
}

/// largest x and y over all the variants, (0, 0.) when there is no data
pub fn max_extent(variants: &[Variant]) -> (i64, f64) {
    let mut xmax = 0i64;
    let mut ymax = 0f64;
    for m in variants.iter().flat_map(|v| v.measurements.iter()) {
        if m.input_size > xmax {
            xmax = m.input_size
        }
        if m.time > ymax {
            ymax = m.time
        }
    }
    (xmax, ymax)
}
