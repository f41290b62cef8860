//! Scatter plots of sampled source emission directions.

use super::{fvz, render_error, FigureSize, MAX_LEGEND_SERIES};
use crate::{
    geometry::{
        Dim3::{X, Y, Z},
        Vec3,
    },
    source::IndependentSource,
};
use plotters::prelude::*;
use rand::rngs::StdRng;
use std::{fs, io, path::Path};

/// Accumulates sampled unit emission directions from one or more sources
/// and renders them as points on the unit sphere.
#[derive(Clone, Debug)]
pub struct DirectionScatter {
    series: Vec<DirectionSeries>,
}

#[derive(Clone, Debug)]
struct DirectionSeries {
    label: String,
    directions: Vec<Vec3<fvz>>,
}

impl DirectionScatter {
    /// Creates a new empty scatter plot.
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Draws a fresh batch of particles from the given source and adds
    /// their directions as a new labeled series.
    pub fn add_source(
        &mut self,
        label: &str,
        source: &IndependentSource,
        n_samples: usize,
        rng: &mut StdRng,
    ) {
        let directions: Vec<Vec3<fvz>> = source
            .sample_batch(n_samples, rng)
            .iter()
            .map(|particle| particle.direction().clone())
            .collect();
        self.add_directions(label, directions);
    }

    /// Adds precomputed unit directions as a new labeled series.
    pub fn add_directions(&mut self, label: &str, directions: Vec<Vec3<fvz>>) {
        self.series.push(DirectionSeries {
            label: label.to_string(),
            directions,
        });
    }

    /// Number of series accumulated so far.
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Total number of accumulated directions over all series.
    pub fn n_directions(&self) -> usize {
        self.series
            .iter()
            .map(|series| series.directions.len())
            .sum()
    }

    /// Renders the scatter plot to an SVG document.
    pub fn render_to_string(&self, size: FigureSize) -> io::Result<String> {
        assert!(
            self.n_directions() > 0,
            "Cannot render a direction plot with no accumulated directions."
        );

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (size.width(), size.height()))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            // Directions are unit vectors, so the axes span the unit cube
            // with a fixed margin.
            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .caption("Source direction distribution", ("sans-serif", 24))
                .build_cartesian_3d(-1.2..1.2, -1.2..1.2, -1.2..1.2)
                .map_err(render_error)?;

            chart.configure_axes().draw().map_err(render_error)?;

            for (series_idx, series) in self.series.iter().enumerate() {
                let color = Palette99::pick(series_idx).to_rgba();
                chart
                    .draw_series(series.directions.iter().map(|direction| {
                        Circle::new(
                            (direction[X], direction[Y], direction[Z]),
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

impl Default for DirectionScatter {
    fn default() -> Self {
        Self::new()
    }
}
