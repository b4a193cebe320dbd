//! Area-chart rendering of a day-grouped elevation profile.

use anyhow::Error as AnyError;
use clap::ValueEnum;
use plotters::{
    coord::Shift,
    prelude::*,
    style::colors::colormaps::{Bone, ColorMap, Copper, DerivedColorMap, ViridisRGB},
};
use std::{collections::BTreeMap, ffi::OsStr, path::Path};
use trek::{ElevationPoint, Units};

const DIMENSIONS: (u32, u32) = (1200, 600);

/// Named color ramps for the day → color mapping.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Hsv,
    Jet,
    Rainbow,
    Bone,
    Copper,
}

// Anchor tables for ramps plotters doesn't ship.
const PLASMA: [RGBColor; 5] = [
    RGBColor(13, 8, 135),
    RGBColor(126, 3, 168),
    RGBColor(204, 71, 120),
    RGBColor(248, 149, 64),
    RGBColor(240, 249, 33),
];
const INFERNO: [RGBColor; 5] = [
    RGBColor(0, 0, 4),
    RGBColor(87, 16, 110),
    RGBColor(188, 55, 84),
    RGBColor(249, 142, 9),
    RGBColor(252, 255, 164),
];
const MAGMA: [RGBColor; 5] = [
    RGBColor(0, 0, 4),
    RGBColor(81, 18, 124),
    RGBColor(183, 55, 121),
    RGBColor(252, 137, 97),
    RGBColor(252, 253, 191),
];
const JET: [RGBColor; 6] = [
    RGBColor(0, 0, 143),
    RGBColor(0, 0, 255),
    RGBColor(0, 255, 255),
    RGBColor(255, 255, 0),
    RGBColor(255, 0, 0),
    RGBColor(128, 0, 0),
];
const RAINBOW: [RGBColor; 6] = [
    RGBColor(255, 0, 40),
    RGBColor(255, 255, 0),
    RGBColor(0, 255, 0),
    RGBColor(0, 255, 255),
    RGBColor(0, 0, 255),
    RGBColor(255, 0, 255),
];

impl Ramp {
    /// Color for day `day` of `day_count` total days.
    ///
    /// Days are spread evenly over the ramp, endpoints included, so
    /// ordering reads left-to-right along the ramp. A single-day trek
    /// samples position 0.
    pub fn color(self, day: usize, day_count: usize) -> RGBColor {
        let t = if day_count > 1 {
            day as f64 / (day_count - 1) as f64
        } else {
            0.0
        };
        self.sample(t)
    }

    fn sample(self, t: f64) -> RGBColor {
        match self {
            Self::Viridis => ViridisRGB.get_color(t),
            Self::Plasma => DerivedColorMap::new(&PLASMA).get_color(t),
            Self::Inferno => DerivedColorMap::new(&INFERNO).get_color(t),
            Self::Magma => DerivedColorMap::new(&MAGMA).get_color(t),
            // Hue wraps at 1.0; stop short so the last day doesn't
            // land back on the first day's red.
            Self::Hsv => to_rgb(&HSLColor(t * 0.85, 1.0, 0.5)),
            Self::Jet => DerivedColorMap::new(&JET).get_color(t),
            Self::Rainbow => DerivedColorMap::new(&RAINBOW).get_color(t),
            Self::Bone => Bone.get_color(t),
            Self::Copper => Copper.get_color(t),
        }
    }
}

fn to_rgb<C: Color>(color: &C) -> RGBColor {
    let (r, g, b) = color.to_backend_color().rgb;
    RGBColor(r, g, b)
}

/// Renders the day-grouped profile to `out`.
///
/// `day_count` is the number of input files, which may exceed the
/// number of non-empty partitions in `days`.
pub fn render(
    days: &BTreeMap<usize, Vec<ElevationPoint>>,
    day_count: usize,
    units: Units,
    ramp: Ramp,
    out: &Path,
) -> Result<(), AnyError> {
    match out.extension().and_then(OsStr::to_str) {
        Some("svg") => draw(
            SVGBackend::new(out, DIMENSIONS).into_drawing_area(),
            days,
            day_count,
            units,
            ramp,
        ),
        _ => draw(
            BitMapBackend::new(out, DIMENSIONS).into_drawing_area(),
            days,
            day_count,
            units,
            ramp,
        ),
    }
}

fn draw<DB>(
    root: DrawingArea<DB, Shift>,
    days: &BTreeMap<usize, Vec<ElevationPoint>>,
    day_count: usize,
    units: Units,
    ramp: Ramp,
) -> Result<(), AnyError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let series: BTreeMap<usize, Vec<(f64, f64)>> = days
        .iter()
        .map(|(day, points)| {
            let converted = points
                .iter()
                .map(|p| units.convert(p.distance, p.elevation))
                .collect();
            (*day, converted)
        })
        .collect();

    let x_max = series
        .values()
        .flatten()
        .map(|(x, _)| *x)
        .fold(0.0, f64::max);
    let y_max = series
        .values()
        .flatten()
        .map(|(_, y)| *y)
        .fold(0.0, f64::max);
    let y_min = series
        .values()
        .flatten()
        .map(|(_, y)| *y)
        .fold(0.0, f64::min);

    // Degenerate inputs (no points, or a single point at distance 0)
    // still get a well-formed empty chart.
    let x_max = if x_max > 0.0 { x_max * 1.01 } else { 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Elevation Profile by Day", ("serif", 30))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(units.distance_label())
        .y_desc(units.elevation_label())
        .axis_desc_style(("serif", 18))
        .label_style(("serif", 14))
        .draw()?;

    for (day, points) in &series {
        if points.is_empty() {
            continue;
        }
        let color = ramp.color(*day, day_count);
        chart.draw_series(
            AreaSeries::new(points.iter().copied(), 0.0, color.mix(0.3))
                .border_style(color.stroke_width(2)),
        )?;
        // Day number at the start of the day's segment, on the baseline.
        chart.draw_series(std::iter::once(Text::new(
            day.to_string(),
            (points[0].0, 0.0),
            ("serif", 20).into_font(),
        )))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Ramp;
    use clap::ValueEnum;

    #[test]
    fn ramps_have_distinct_endpoints() {
        for ramp in Ramp::value_variants() {
            assert_ne!(
                ramp.color(0, 5),
                ramp.color(4, 5),
                "{ramp:?} endpoints collide"
            );
        }
    }

    #[test]
    fn single_day_samples_ramp_start() {
        assert_eq!(Ramp::Viridis.color(0, 1), Ramp::Viridis.color(0, 2));
    }

    #[test]
    fn consecutive_days_differ() {
        for day in 0..7 {
            assert_ne!(Ramp::Jet.color(day, 8), Ramp::Jet.color(day + 1, 8));
        }
    }
}
