use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::to_rgb;
use crate::data::model::{GridData, GridGroup};
use crate::data::triangulate::triangulate;
use crate::error::{draw_err, RenderError};

use super::{padded, Chart};

pub const ROWS_LABEL: &str = "Rows (BLK_I)";
pub const COLS_LABEL: &str = "Cols (BLK_J)";
pub const TIME_LABEL: &str = "Time (s)";

/// Viewing angles for the 3D projection, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.5,
            pitch: 0.3,
        }
    }
}

impl Camera {
    /// Rotate by a pointer drag, keeping pitch away from the poles.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.yaw = (self.yaw - dx).rem_euclid(std::f64::consts::TAU);
        self.pitch = (self.pitch + dy).clamp(-1.5, 1.5);
    }
}

/// One surface facet in chart coordinates `(I, T, J)`.
type Facet = [(f64, f64, f64); 3];

/// Triangulated surface of time over the `(I, J)` grid, one per `N`.
pub struct SurfaceChart<'a> {
    pub data: &'a GridData,
    pub title: &'a str,
    pub camera: Camera,
}

impl Chart for SurfaceChart<'_> {
    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let (i_range, t_range, j_range) = bounds(self.data);

        let mut chart = ChartBuilder::on(root)
            .caption(self.title, ("sans-serif", 28))
            .margin(20)
            .build_cartesian_3d(i_range, t_range, j_range)
            .map_err(draw_err)?;

        let camera = self.camera;
        chart.with_projection(|mut pb| {
            pb.yaw = camera.yaw;
            pb.pitch = camera.pitch;
            pb.scale = 0.8;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .draw()
            .map_err(draw_err)?;

        let mut drawn = 0;
        for group in &self.data.groups {
            // Skipped groups are reported by `GridData::warn_unplottable`.
            let facets = facets(group);
            if facets.is_empty() {
                continue;
            }

            let color = to_rgb(group.color);
            chart
                .draw_series(
                    facets
                        .iter()
                        .map(|f| Polygon::new(f.to_vec(), color.mix(0.65).filled())),
                )
                .map_err(draw_err)?
                .label(group.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
                });

            chart
                .draw_series(facets.iter().map(|f| {
                    PathElement::new(vec![f[0], f[1], f[2], f[0]], color.stroke_width(1))
                }))
                .map_err(draw_err)?;
            drawn += 1;
        }

        if drawn > 0 {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        let (_, height) = root.dim_in_pixel();
        let axes = format!("x: {ROWS_LABEL}    y: {TIME_LABEL}    z: {COLS_LABEL}");
        root.draw(&Text::new(
            axes,
            (15, height as i32 - 25),
            ("sans-serif", 16).into_font().color(&BLACK.mix(0.7)),
        ))
        .map_err(draw_err)?;

        Ok(())
    }
}

fn facets(group: &GridGroup) -> Vec<Facet> {
    let positions: Vec<(f64, f64)> = group.points.iter().map(|p| (p.i, p.j)).collect();
    triangulate(&positions)
        .into_iter()
        .map(|tri| {
            tri.map(|k| {
                let p = group.points[k];
                (p.i, p.t, p.j)
            })
        })
        .collect()
}

fn bounds(
    data: &GridData,
) -> (
    std::ops::Range<f64>,
    std::ops::Range<f64>,
    std::ops::Range<f64>,
) {
    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for p in data.groups.iter().flat_map(|g| g.points.iter()) {
        for (k, v) in [p.i, p.t, p.j].into_iter().enumerate() {
            lo[k] = lo[k].min(v);
            hi[k] = hi[k].max(v);
        }
    }
    (
        padded(lo[0], hi[0]),
        padded(lo[1], hi[1]),
        padded(lo[2], hi[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::SeriesColor;
    use crate::render::{render_rgb, render_svg};

    const SIZE: (u32, u32) = (320, 240);

    fn grid() -> GridData {
        let mut data = GridData::default();
        for i in [8.0, 16.0] {
            for j in [8.0, 16.0] {
                data.push(i, j, 256.0, i * j / 100.0);
            }
        }
        data.push(8.0, 8.0, 128.0, 0.1);
        data
    }

    #[test]
    fn facets_for_full_group() {
        let data = grid();
        let f = facets(&data.groups[0]);
        assert_eq!(f.len(), 2);
        for facet in &f {
            for &(i, t, j) in facet {
                assert_eq!(t, i * j / 100.0);
            }
        }
    }

    #[test]
    fn lone_point_has_no_facets() {
        let data = grid();
        assert!(facets(&data.groups[1]).is_empty());
    }

    #[test]
    fn duplicate_positions_share_one_facet_set() {
        let mut data = GridData::default();
        for (i, j) in [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (0.0, 0.0)] {
            data.push(i, j, 64.0, 1.0);
        }
        assert_eq!(facets(&data.groups[0]).len(), 1);
    }

    #[test]
    fn bounds_cover_all_axes() {
        let (i, t, j) = bounds(&grid());
        assert!(i.start < 8.0 && i.end > 16.0);
        assert!(j.start < 8.0 && j.end > 16.0);
        assert!(t.start < 0.1 && t.end > 2.56);
    }

    #[test]
    fn camera_pitch_is_clamped() {
        let mut cam = Camera::default();
        cam.rotate(0.0, 10.0);
        assert_eq!(cam.pitch, 1.5);
        cam.rotate(7.0, 0.0);
        assert!((0.0..std::f64::consts::TAU).contains(&cam.yaw));
    }

    #[test]
    fn renders_empty_grid() {
        let data = GridData::default();
        let chart = SurfaceChart {
            data: &data,
            title: "empty",
            camera: Camera::default(),
        };
        let buf = render_rgb(&chart, SIZE).unwrap();
        assert!(buf.iter().any(|&b| b != 255));
        assert!(render_svg(&chart, SIZE).unwrap().contains("<svg"));
    }

    #[test]
    fn renders_around_a_skipped_group() {
        let mut data = grid();
        data.assign_colors(&[SeriesColor::new(200, 40, 40), SeriesColor::new(40, 200, 40)]);
        let chart = SurfaceChart {
            data: &data,
            title: "grid",
            camera: Camera::default(),
        };
        let buf = render_rgb(&chart, SIZE).unwrap();
        assert!(buf.iter().any(|&b| b != 255));

        let svg = render_svg(&chart, SIZE).unwrap();
        assert!(svg.contains("N=256"));
        assert!(!svg.contains("N=128"));
    }
}
