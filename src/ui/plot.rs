use eframe::egui::Ui;
use egui_plot::{Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::to_color32;
use crate::render::timing::{X_LABEL, Y_LABEL};
use crate::state::TimingState;

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render the error-bar plot of every series.
pub fn timing_plot(ui: &mut Ui, state: &TimingState) {
    let cap = cap_half_width(state);

    Plot::new("timing_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (series, points) in state.data.series.iter().zip(&state.aggregates) {
                let color = to_color32(series.color);

                let means: PlotPoints = points.iter().map(|p| [p.n, p.mean]).collect();
                plot_ui.line(Line::new(means).name(&series.name).color(color).width(1.5));

                let markers: PlotPoints = points.iter().map(|p| [p.n, p.mean]).collect();
                plot_ui.points(
                    Points::new(markers)
                        .name(&series.name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );

                // Unnamed items stay out of the legend.
                for p in points.iter().filter(|p| p.std_dev > 0.0) {
                    let (lo, hi) = (p.mean - p.std_dev, p.mean + p.std_dev);
                    for segment in [
                        [[p.n, lo], [p.n, hi]],
                        [[p.n - cap, lo], [p.n + cap, lo]],
                        [[p.n - cap, hi], [p.n + cap, hi]],
                    ] {
                        let segment = PlotPoints::from(segment.to_vec());
                        plot_ui.line(Line::new(segment).color(color).width(1.0));
                    }
                }
            }
        });
}

/// Error-bar caps span 1% of the x extent.
fn cap_half_width(state: &TimingState) -> f64 {
    let (min, max) = state
        .aggregates
        .iter()
        .flatten()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.n), hi.max(p.n)));
    if max > min {
        (max - min) * 0.01
    } else {
        1.0
    }
}
