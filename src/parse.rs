use crate::error::{Error, Result};
use crate::{Measurement, Variant};
use indexmap::IndexMap;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, info, trace};

/// `<variant>[_solution]/<group>/<input_size>`, the group may hold further slashes
const NAME_PATTERN: &str = r"^(.*?)(_solution)?/(.*)/(.*)$";

fn name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("Always valid"))
}

/// The benchmark results file, only the fields used for plotting.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BenchmarkReport {
    pub benchmarks: Vec<BenchmarkEntry>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    /// kept raw to report a non-numeric time against the benchmark name
    #[serde(default)]
    pub real_time: serde_json::Value,
}

impl BenchmarkReport {
    pub fn from_path(path: &Path) -> Result<BenchmarkReport> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        let report: BenchmarkReport =
            serde_json::from_str(text.as_str()).map_err(|error| Error::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        info!(
            "loaded {} benchmarks from {}",
            report.benchmarks.len(),
            path.display()
        );
        Ok(report)
    }
}

/// The parts of a benchmark identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkName {
    pub variant: String,
    pub solution: bool,
    pub group: String,
    pub input_size: i64,
}

impl BenchmarkName {
    pub fn parse(raw: &str) -> Result<BenchmarkName> {
        let captures = name_regex()
            .captures(raw)
            .ok_or_else(|| Error::MalformedName {
                name: raw.to_string(),
            })?;
        let field = |i: usize| captures.get(i).map(|m| m.as_str()).unwrap_or_default();
        let size = field(4);
        let invalid_size = || Error::InvalidInputSize {
            name: raw.to_string(),
            size: size.to_string(),
        };
        let input_size = size.parse::<i64>().map_err(|_| invalid_size())?;
        if input_size < 0 {
            return Err(invalid_size());
        }
        Ok(BenchmarkName {
            variant: field(1).to_string(),
            solution: captures.get(2).is_some(),
            group: field(3).to_string(),
            input_size,
        })
    }
}

impl BenchmarkEntry {
    pub fn to_measurement(&self) -> Result<(String, Measurement)> {
        let name = BenchmarkName::parse(&self.name)?;
        trace!(
            "{}: variant {}, group {}, size {}, solution {}",
            self.name,
            name.variant,
            name.group,
            name.input_size,
            name.solution
        );
        let time = self.real_time.as_f64().ok_or_else(|| Error::InvalidTime {
            name: self.name.clone(),
        })?;
        Ok((name.variant, Measurement::new(name.input_size, time)))
    }
}

/// Positional check of a variant against the baseline:
/// same number of samples and the same input size at every position.
pub fn check_alignment(
    variant: &str,
    measurements: &[Measurement],
    baseline: &[Measurement],
) -> Result<()> {
    if measurements.len() != baseline.len() {
        return Err(Error::LengthMismatch {
            variant: variant.to_string(),
            expected: baseline.len(),
            found: measurements.len(),
        });
    }
    for (position, (m, b)) in measurements.iter().zip(baseline.iter()).enumerate() {
        if m.input_size != b.input_size {
            return Err(Error::SizeMismatch {
                variant: variant.to_string(),
                position,
                expected: b.input_size,
                found: m.input_size,
            });
        }
    }
    Ok(())
}

/// Groups the benchmarks by variant, in first-seen order,
/// and returns every variant except the baseline.
/// The stored times are the measured ones, not relative to the baseline.
pub fn parse_results(report: &BenchmarkReport, baseline_name: &str) -> Result<Vec<Variant>> {
    let mut measurements: IndexMap<String, Vec<Measurement>> = IndexMap::new();
    for entry in report.benchmarks.iter() {
        let (name, m) = entry.to_measurement()?;
        measurements.entry(name).or_default().push(m);
    }

    let baseline = measurements
        .shift_remove(baseline_name)
        .ok_or_else(|| Error::MissingBaseline {
            baseline: baseline_name.to_string(),
        })?;

    let mut variants = Vec::with_capacity(measurements.len());
    for (name, ms) in measurements.into_iter() {
        check_alignment(&name, &ms, &baseline)?;
        debug!("variant {} with {} measurements", name, ms.len());
        variants.push(Variant::new(&name, ms));
    }
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    fn report(entries: &[(&str, f64)]) -> BenchmarkReport {
        let benchmarks: Vec<_> = entries
            .iter()
            .map(|(name, t)| json!({ "name": name, "real_time": t, "cpu_time": t }))
            .collect();
        serde_json::from_value(json!({ "benchmarks": benchmarks })).unwrap()
    }

    #[test]
    fn name_with_solution_suffix() {
        let n = BenchmarkName::parse("std_inplace_merge_solution/merge/120").unwrap();
        assert_eq!(n.variant, "std_inplace_merge");
        assert!(n.solution);
        assert_eq!(n.group, "merge");
        assert_eq!(n.input_size, 120);
    }

    #[test]
    fn name_without_suffix_and_nested_group() {
        let n = BenchmarkName::parse("baseline/sets/flat/40").unwrap();
        assert_eq!(n.variant, "baseline");
        assert!(!n.solution);
        assert_eq!(n.group, "sets/flat");
        assert_eq!(n.input_size, 40);
    }

    #[test]
    fn solution_only_stripped_before_slash() {
        let n = BenchmarkName::parse("a_solution_b/g/3").unwrap();
        assert_eq!(n.variant, "a_solution_b");
        assert!(!n.solution);
    }

    #[test]
    fn malformed_names() {
        let e = BenchmarkName::parse("no_slashes_here").unwrap_err();
        assert!(matches!(e, Error::MalformedName { .. }));
        assert_eq!(e.kind(), ErrorKind::Format);
        let e = BenchmarkName::parse("foo/group/ten").unwrap_err();
        assert!(matches!(e, Error::InvalidInputSize { ref size, .. } if size == "ten"));
    }

    #[test]
    fn negative_input_size() {
        let e = BenchmarkName::parse("a/g/-5").unwrap_err();
        assert!(matches!(e, Error::InvalidInputSize { ref size, .. } if size == "-5"));
        assert_eq!(e.kind(), ErrorKind::Format);
        assert_eq!(BenchmarkName::parse("a/g/0").unwrap().input_size, 0);
    }

    #[test]
    fn non_numeric_time() {
        let r: BenchmarkReport =
            serde_json::from_value(json!({ "benchmarks": [ { "name": "baseline/g/1", "real_time": "fast" } ] }))
                .unwrap();
        let e = parse_results(&r, "baseline").unwrap_err();
        assert!(matches!(e, Error::InvalidTime { ref name } if name == "baseline/g/1"));
        let r: BenchmarkReport =
            serde_json::from_value(json!({ "benchmarks": [ { "name": "baseline/g/1" } ] })).unwrap();
        assert!(matches!(parse_results(&r, "baseline"), Err(Error::InvalidTime { .. })));
    }

    #[test]
    fn groups_in_first_seen_order_without_baseline() {
        let r = report(&[
            ("zeta_solution/g/10", 3.),
            ("baseline/g/10", 1.),
            ("alpha/g/10", 2.),
            ("zeta_solution/g/20", 6.),
            ("baseline/g/20", 2.),
            ("alpha/g/20", 4.),
        ]);
        let variants = parse_results(&r, "baseline").unwrap();
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert_eq!(
            variants[0].measurements,
            vec![Measurement::new(10, 3.), Measurement::new(20, 6.)]
        );
    }

    #[test]
    fn times_are_not_normalized() {
        let r = report(&[("baseline/g/5", 100.), ("my_variant/g/5", 150.)]);
        let variants = parse_results(&r, "baseline").unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].name, "my variant");
        assert_eq!(variants[0].measurements[0].time, 150.);
    }

    #[test]
    fn missing_baseline() {
        let r = report(&[("foo/group/10", 5.)]);
        let e = parse_results(&r, "baseline").unwrap_err();
        assert!(matches!(e, Error::MissingBaseline { ref baseline } if baseline == "baseline"));
        assert_eq!(e.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn custom_baseline_name() {
        let r = report(&[("reference/g/1", 1.), ("baseline/g/1", 2.)]);
        let variants = parse_results(&r, "reference").unwrap();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].name, "baseline");
    }

    #[test]
    fn mismatched_sizes() {
        let r = report(&[
            ("baseline/g/10", 1.),
            ("baseline/g/20", 2.),
            ("other/g/10", 1.),
            ("other/g/30", 2.),
        ]);
        let e = parse_results(&r, "baseline").unwrap_err();
        assert!(matches!(
            e,
            Error::SizeMismatch { position: 1, expected: 20, found: 30, .. }
        ));
        assert_eq!(e.kind(), ErrorKind::Consistency);
    }

    #[test]
    fn mismatched_lengths() {
        let base = [Measurement::new(10, 1.), Measurement::new(20, 1.)];
        let short = [Measurement::new(10, 1.)];
        let e = check_alignment("short", &short, &base).unwrap_err();
        assert!(matches!(e, Error::LengthMismatch { expected: 2, found: 1, .. }));
        let long = [
            Measurement::new(10, 1.),
            Measurement::new(20, 1.),
            Measurement::new(30, 1.),
        ];
        assert!(matches!(
            check_alignment("long", &long, &base),
            Err(Error::LengthMismatch { expected: 2, found: 3, .. })
        ));
    }

    #[test]
    fn parsing_twice_gives_the_same_variants() {
        let r = report(&[("baseline/g/1", 1.), ("a/g/1", 2.), ("b_solution/g/1", 3.)]);
        assert_eq!(
            parse_results(&r, "baseline").unwrap(),
            parse_results(&r, "baseline").unwrap()
        );
    }

    #[test]
    fn report_ignores_extra_fields() {
        let text = r#"{"context": {"num_cpus": 8}, "benchmarks": [
            {"name": "baseline/g/1", "iterations": 10, "real_time": 4.5, "time_unit": "ns"}
        ]}"#;
        let r: BenchmarkReport = serde_json::from_str(text).unwrap();
        assert_eq!(r.benchmarks.len(), 1);
        assert_eq!(r.benchmarks[0].real_time.as_f64(), Some(4.5));
    }
}
