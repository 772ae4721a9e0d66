use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::to_rgb;
use crate::data::model::{AggregatePoint, TimingData};
use crate::error::{draw_err, RenderError};

use super::{padded, Chart};

pub const X_LABEL: &str = "Size (N)";
pub const Y_LABEL: &str = "Time (s)";

/// Error-bar chart of mean time against problem size, one line per file.
pub struct TimingChart<'a> {
    pub data: &'a TimingData,
    pub title: &'a str,
}

impl Chart for TimingChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let series: Vec<_> = self
            .data
            .series
            .iter()
            .map(|s| (s, s.aggregate()))
            .collect();
        let (x_range, y_range) = bounds(series.iter().flat_map(|(_, pts)| pts.iter()));

        let mut chart = ChartBuilder::on(root)
            .caption(self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .light_line_style(BLACK.mix(0.05))
            .draw()
            .map_err(draw_err)?;

        for (s, points) in &series {
            let color = to_rgb(s.color);

            chart
                .draw_series(
                    LineSeries::new(points.iter().map(|p| (p.n, p.mean)), color.stroke_width(2))
                        .point_size(4),
                )
                .map_err(draw_err)?
                .label(s.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
                });

            chart
                .draw_series(points.iter().filter(|p| p.std_dev > 0.0).map(|p| {
                    ErrorBar::new_vertical(
                        p.n,
                        p.mean - p.std_dev,
                        p.mean,
                        p.mean + p.std_dev,
                        color.stroke_width(1),
                        8,
                    )
                }))
                .map_err(draw_err)?;
        }

        if !series.is_empty() {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .position(SeriesLabelPosition::UpperLeft)
                .draw()
                .map_err(draw_err)?;
        }

        Ok(())
    }
}

/// Axis ranges enclosing every mean ± standard deviation.
fn bounds<'a>(
    points: impl Iterator<Item = &'a AggregatePoint>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        x_min = x_min.min(p.n);
        x_max = x_max.max(p.n);
        y_min = y_min.min(p.mean - p.std_dev);
        y_max = y_max.max(p.mean + p.std_dev);
    }
    (padded(x_min, x_max), padded(y_min, y_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::SeriesColor;
    use crate::data::model::{Sample, TimingSeries};
    use crate::render::{render_rgb, render_svg};

    const SIZE: (u32, u32) = (320, 240);

    fn example() -> TimingData {
        let samples = [(128.0, 0.5), (256.0, 1.2), (128.0, 0.6)];
        TimingData {
            series: vec![TimingSeries {
                name: "gemm".into(),
                color: SeriesColor::new(30, 90, 200),
                samples: samples.iter().map(|&(n, t)| Sample { n, t }).collect(),
            }],
        }
    }

    fn has_ink(buf: &[u8]) -> bool {
        buf.iter().any(|&b| b != 255)
    }

    #[test]
    fn bounds_include_error_bars() {
        let pts = [
            AggregatePoint {
                n: 128.0,
                mean: 1.0,
                std_dev: 0.5,
                count: 2,
            },
            AggregatePoint {
                n: 512.0,
                mean: 3.0,
                std_dev: 0.0,
                count: 1,
            },
        ];
        let (x, y) = bounds(pts.iter());
        assert!(x.start < 128.0 && x.end > 512.0);
        assert!(y.start < 0.5 && y.end > 3.0);
    }

    #[test]
    fn bounds_of_nothing_are_unit() {
        let (x, y) = bounds(std::iter::empty());
        assert_eq!(x, 0.0..1.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn renders_empty_data() {
        let data = TimingData::default();
        let chart = TimingChart {
            data: &data,
            title: "empty",
        };
        let buf = render_rgb(&chart, SIZE).unwrap();
        assert_eq!(buf.len(), 320 * 240 * 3);
        assert!(has_ink(&buf));
    }

    #[test]
    fn renders_repeated_sizes_with_error_bar() {
        let data = example();
        let chart = TimingChart {
            data: &data,
            title: "gemm",
        };
        let buf = render_rgb(&chart, SIZE).unwrap();
        assert!(buf.chunks(3).any(|px| px == [30, 90, 200]));

        let svg = render_svg(&chart, SIZE).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("gemm"));
    }
}
