//! Scatter plots of sampled source positions.

use super::{fvz, padded_range, render_error, FigureSize, MAX_LEGEND_SERIES};
use crate::{
    geometry::{
        Dim3::{X, Y, Z},
        Point3,
    },
    source::IndependentSource,
};
use plotters::prelude::*;
use rand::rngs::StdRng;
use std::{fs, io, path::Path};

/// Accumulates sampled emission positions from one or more sources and
/// renders them as a 3D scatter plot.
#[derive(Clone, Debug)]
pub struct PositionScatter {
    series: Vec<PositionSeries>,
}

#[derive(Clone, Debug)]
struct PositionSeries {
    label: String,
    positions: Vec<Point3<fvz>>,
}

impl PositionScatter {
    /// Creates a new empty scatter plot.
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Draws a fresh batch of particles from the given source and adds
    /// their positions as a new labeled series.
    pub fn add_source(
        &mut self,
        label: &str,
        source: &IndependentSource,
        n_samples: usize,
        rng: &mut StdRng,
    ) {
        let positions: Vec<Point3<fvz>> = source
            .sample_batch(n_samples, rng)
            .iter()
            .map(|particle| particle.position().clone())
            .collect();
        self.add_positions(label, positions);
    }

    /// Adds precomputed positions as a new labeled series.
    pub fn add_positions(&mut self, label: &str, positions: Vec<Point3<fvz>>) {
        self.series.push(PositionSeries {
            label: label.to_string(),
            positions,
        });
    }

    /// Number of series accumulated so far.
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Total number of accumulated positions over all series.
    pub fn n_positions(&self) -> usize {
        self.series.iter().map(|series| series.positions.len()).sum()
    }

    fn axis_ranges(&self) -> [(fvz, fvz); 3] {
        let mut lower = [fvz::INFINITY; 3];
        let mut upper = [fvz::NEG_INFINITY; 3];
        for series in &self.series {
            for position in &series.positions {
                for dim in [X, Y, Z] {
                    lower[dim.num()] = lower[dim.num()].min(position[dim]);
                    upper[dim.num()] = upper[dim.num()].max(position[dim]);
                }
            }
        }
        [
            padded_range(lower[0].min(upper[0]), upper[0]),
            padded_range(lower[1].min(upper[1]), upper[1]),
            padded_range(lower[2].min(upper[2]), upper[2]),
        ]
    }

    /// Renders the scatter plot to an SVG document.
    pub fn render_to_string(&self, size: FigureSize) -> io::Result<String> {
        assert!(
            self.n_positions() > 0,
            "Cannot render a position plot with no accumulated positions."
        );
        let [x_range, y_range, z_range] = self.axis_ranges();

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (size.width(), size.height()))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .caption("Source position distribution", ("sans-serif", 24))
                .build_cartesian_3d(
                    x_range.0..x_range.1,
                    y_range.0..y_range.1,
                    z_range.0..z_range.1,
                )
                .map_err(render_error)?;

            chart.configure_axes().draw().map_err(render_error)?;

            for (series_idx, series) in self.series.iter().enumerate() {
                let color = Palette99::pick(series_idx).to_rgba();
                chart
                    .draw_series(series.positions.iter().map(|position| {
                        Circle::new(
                            (position[X], position[Y], position[Z]),
                            2,
                            color.filled(),
                        )
                    }))
                    .map_err(render_error)?
                    .label(&series.label)
                    .legend(move |(x, y)| Circle::new((x + 6, y), 4, color.filled()));
            }

            if self.series.len() <= MAX_LEGEND_SERIES {
                chart
                    .configure_series_labels()
                    .border_style(&BLACK)
                    .background_style(&WHITE.mix(0.8))
                    .draw()
                    .map_err(render_error)?;
            }

            root.present().map_err(render_error)?;
        }
        Ok(svg)
    }

    /// Renders the scatter plot and writes it to the given path.
    pub fn render(&self, output_path: &Path, size: FigureSize) -> io::Result<()> {
        fs::write(output_path, self.render_to_string(size)?)
    }
}

impl Default for PositionScatter {
    fn default() -> Self {
        Self::new()
    }
}
