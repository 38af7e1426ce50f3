use crate::{X_TITLE_INSERTING, X_TITLE_RHS, Y_TITLE};

/// The two display switches of the plot, they only change the axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayMode {
    /// finer ticks for a narrow range of input sizes
    pub compact_range: bool,
    /// results of the set benchmarks, different x semantic and y scale
    pub grouped_sets: bool,
}

/// Fixed tick spacing and titles of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub x_tick: f64,
    pub y_tick: f64,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl AxisConfig {
    pub fn from_mode(mode: DisplayMode) -> AxisConfig {
        let (x_tick, y_tick) = match (mode.grouped_sets, mode.compact_range) {
            (false, false) => (40., 500.),
            (true, false) => (40., 5000.),
            (false, true) => (1., 200.),
            (true, true) => (1., 1000.),
        };
        let x_title = if mode.grouped_sets {
            X_TITLE_INSERTING
        } else {
            X_TITLE_RHS
        };
        AxisConfig {
            x_tick,
            y_tick,
            x_title,
            y_title: Y_TITLE,
        }
    }
}

/// smallest multiple of tick >= max, at least one tick so that the range is never empty
pub fn upper_bound(max: f64, tick: f64) -> f64 {
    let n = (max / tick).ceil().max(1.);
    n * tick
}

/// end of the plotted range, a sliver past the upper bound so that the stepped
/// coordinate, which excludes its end, still places a tick on the upper bound
pub fn range_end(upper: f64, tick: f64) -> f64 {
    upper + tick / 100.
}

/// tick positions 0, tick, 2 tick, ... up to the upper bound included
pub fn tick_points(max: f64, tick: f64) -> Vec<f64> {
    let n = (upper_bound(max, tick) / tick).round() as u64;
    (0..=n).map(|i| i as f64 * tick).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode(grouped_sets: bool, compact_range: bool) -> DisplayMode {
        DisplayMode {
            compact_range,
            grouped_sets,
        }
    }

    #[test]
    fn lookup_table() {
        let c = AxisConfig::from_mode(mode(false, false));
        assert_eq!((c.x_tick, c.y_tick, c.x_title), (40., 500., "rhs size"));
        let c = AxisConfig::from_mode(mode(true, false));
        assert_eq!(
            (c.x_tick, c.y_tick, c.x_title),
            (40., 5000., "inserting elements size")
        );
        let c = AxisConfig::from_mode(mode(false, true));
        assert_eq!((c.x_tick, c.y_tick, c.x_title), (1., 200., "rhs size"));
        let c = AxisConfig::from_mode(mode(true, true));
        assert_eq!(
            (c.x_tick, c.y_tick, c.x_title),
            (1., 1000., "inserting elements size")
        );
    }

    #[test]
    fn y_title_is_fixed() {
        for &g in [false, true].iter() {
            for &c in [false, true].iter() {
                assert_eq!(AxisConfig::from_mode(mode(g, c)).y_title, "ns");
            }
        }
    }

    #[test]
    fn default_mode_is_plain() {
        assert_eq!(
            AxisConfig::from_mode(DisplayMode::default()),
            AxisConfig::from_mode(mode(false, false))
        );
    }

    #[test]
    fn bounds_round_up_to_tick() {
        assert_eq!(upper_bound(100., 40.), 120.);
        assert_eq!(upper_bound(120., 40.), 120.);
        assert_eq!(upper_bound(0., 500.), 500.);
        assert_eq!(upper_bound(1234.5, 500.), 1500.);
    }

    #[test]
    fn range_end_keeps_last_tick_only() {
        let end = range_end(120., 40.);
        assert!(end > 120.);
        assert!(end < 160.);
    }

    #[test]
    fn ticks_start_at_zero() {
        assert_eq!(tick_points(100., 40.), vec![0., 40., 80., 120.]);
        assert_eq!(tick_points(3., 1.), vec![0., 1., 2., 3.]);
        assert_eq!(tick_points(0., 200.), vec![0., 200.]);
    }
}
