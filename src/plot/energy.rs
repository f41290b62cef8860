//! Histograms of sampled source energies.

use super::{fvz, render_error, FigureSize, MAX_LEGEND_SERIES};
use crate::source::IndependentSource;
use ndarray::Array1;
use plotters::prelude::*;
use rand::rngs::StdRng;
use std::{fs, io, path::Path};

/// Accumulates energy samples from one or more sources and renders them as
/// an overlaid histogram.
///
/// Samples are binned as they are added, so series from any number of
/// sources can be accumulated onto the same figure before rendering.
#[derive(Clone, Debug)]
pub struct EnergyHistogram {
    lower_bound: fvz,
    upper_bound: fvz,
    n_bins: usize,
    series: Vec<EnergySeries>,
}

#[derive(Clone, Debug)]
struct EnergySeries {
    label: String,
    counts: Array1<usize>,
}

impl EnergyHistogram {
    /// Creates a new empty histogram with the given energy range [eV] and
    /// number of bins.
    pub fn new(lower_bound: fvz, upper_bound: fvz, n_bins: usize) -> Self {
        assert!(
            upper_bound > lower_bound,
            "Upper energy bound must exceed lower energy bound."
        );
        assert_ne!(n_bins, 0, "Number of bins must be larger than zero.");
        Self {
            lower_bound,
            upper_bound,
            n_bins,
            series: Vec::new(),
        }
    }

    /// Bin edges of the histogram, including the rightmost edge.
    pub fn bin_edges(&self) -> Array1<fvz> {
        Array1::linspace(self.lower_bound, self.upper_bound, self.n_bins + 1)
    }

    /// Draws a fresh batch of particles from the given source and adds
    /// their energies as a new labeled series.
    pub fn add_source(
        &mut self,
        label: &str,
        source: &IndependentSource,
        n_samples: usize,
        rng: &mut StdRng,
    ) {
        let energies: Vec<fvz> = source
            .sample_batch(n_samples, rng)
            .iter()
            .map(|particle| particle.energy())
            .collect();
        self.add_samples(label, &energies);
    }

    /// Adds precomputed energy samples as a new labeled series.
    ///
    /// Samples outside the energy range are discarded.
    pub fn add_samples(&mut self, label: &str, samples: &[fvz]) {
        let bin_width = (self.upper_bound - self.lower_bound) / self.n_bins as fvz;
        let mut counts = Array1::zeros(self.n_bins);
        for &energy in samples {
            if energy >= self.lower_bound && energy <= self.upper_bound {
                let bin_idx =
                    (((energy - self.lower_bound) / bin_width) as usize).min(self.n_bins - 1);
                counts[bin_idx] += 1;
            }
        }
        self.series.push(EnergySeries {
            label: label.to_string(),
            counts,
        });
    }

    /// Number of series accumulated so far.
    pub fn n_series(&self) -> usize {
        self.series.len()
    }

    /// Total counts per bin aggregated over all accumulated series.
    pub fn aggregate_counts(&self) -> Array1<usize> {
        let mut total = Array1::zeros(self.n_bins);
        for series in &self.series {
            total = total + &series.counts;
        }
        total
    }

    /// Renders the histogram to an SVG document.
    pub fn render_to_string(&self, size: FigureSize) -> io::Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (size.width(), size.height()))
                .into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let max_count = self
                .series
                .iter()
                .flat_map(|series| series.counts.iter())
                .copied()
                .max()
                .unwrap_or(0);

            let mut chart = ChartBuilder::on(&root)
                .margin(10)
                .caption("Source energy distribution", ("sans-serif", 24))
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(
                    self.lower_bound..self.upper_bound,
                    0.0..(max_count as fvz * 1.05).max(1.0),
                )
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .x_desc("Energy [eV]")
                .y_desc("Particles per bin")
                .draw()
                .map_err(render_error)?;

            let edges = self.bin_edges();
            for (series_idx, series) in self.series.iter().enumerate() {
                let color = Palette99::pick(series_idx).to_rgba();
                chart
                    .draw_series((0..self.n_bins).map(|bin_idx| {
                        Rectangle::new(
                            [
                                (edges[bin_idx], 0.0),
                                (edges[bin_idx + 1], series.counts[bin_idx] as fvz),
                            ],
                            color.mix(0.4).filled(),
                        )
                    }))
                    .map_err(render_error)?
                    .label(&series.label)
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 4), (x + 12, y + 4)], color.filled())
                    });
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

    /// Renders the histogram and writes it to the given path.
    pub fn render(&self, output_path: &Path, size: FigureSize) -> io::Result<()> {
        fs::write(output_path, self.render_to_string(size)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_binned_into_the_correct_bins() {
        let mut histogram = EnergyHistogram::new(0.0, 10.0, 5);
        histogram.add_samples("test", &[0.5, 2.5, 2.6, 9.9, 10.0, -0.1, 10.1]);
        let counts = histogram.aggregate_counts();
        assert_eq!(counts.as_slice().unwrap(), &[1, 2, 0, 0, 2]);
    }

    #[test]
    fn aggregation_is_independent_of_series_order() {
        let samples_a = [1.0, 2.0, 3.0];
        let samples_b = [7.0, 8.0];

        let mut histogram_ab = EnergyHistogram::new(0.0, 10.0, 10);
        histogram_ab.add_samples("a", &samples_a);
        histogram_ab.add_samples("b", &samples_b);

        let mut histogram_ba = EnergyHistogram::new(0.0, 10.0, 10);
        histogram_ba.add_samples("b", &samples_b);
        histogram_ba.add_samples("a", &samples_a);

        let mut histogram_merged = EnergyHistogram::new(0.0, 10.0, 10);
        let mut merged: Vec<fvz> = samples_a.to_vec();
        merged.extend_from_slice(&samples_b);
        histogram_merged.add_samples("merged", &merged);

        assert_eq!(
            histogram_ab.aggregate_counts(),
            histogram_ba.aggregate_counts()
        );
        assert_eq!(
            histogram_ab.aggregate_counts(),
            histogram_merged.aggregate_counts()
        );
    }

    #[test]
    fn rendering_produces_svg_markup() {
        let mut histogram = EnergyHistogram::new(0.0, 20e6, 20);
        histogram.add_samples("test", &[14.08e6; 100]);
        let svg = histogram.render_to_string(FigureSize::default()).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn adding_a_source_bins_a_fresh_batch() {
        use crate::distribution::discrete::Discrete;
        use crate::random::new_rng;
        use crate::source::{angular::Isotropic, spatial::FixedPoint, IndependentSource};

        let source = IndependentSource::new(
            Box::new(FixedPoint::origin()),
            Box::new(Isotropic),
            Box::new(Discrete::single(5.0)),
        );
        let mut histogram = EnergyHistogram::new(0.0, 10.0, 10);
        let mut rng = new_rng(Some(23));
        histogram.add_source("point", &source, 250, &mut rng);
        assert_eq!(histogram.n_series(), 1);
        assert_eq!(histogram.aggregate_counts()[5], 250);
    }
}
