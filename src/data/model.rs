use crate::color::SeriesColor;
use crate::error::LoadError;

use super::stats;
use super::triangulate::triangulate;

// ---------------------------------------------------------------------------
// Timing series – one input file of "N T" rows
// ---------------------------------------------------------------------------

/// One `(N, T)` measurement: problem size and elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub n: f64,
    pub t: f64,
}

/// Mean and spread of every sample sharing one problem size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatePoint {
    pub n: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// All samples read from one file.
#[derive(Debug, Clone)]
pub struct TimingSeries {
    /// Legend label, derived from the file name.
    pub name: String,
    pub color: SeriesColor,
    /// Raw samples in file order.
    pub samples: Vec<Sample>,
}

impl TimingSeries {
    /// Group samples by exact `N` (first-occurrence order) and summarise each
    /// group.
    pub fn aggregate(&self) -> Vec<AggregatePoint> {
        let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
        for s in &self.samples {
            match groups.iter_mut().find(|(n, _)| *n == s.n) {
                Some((_, ts)) => ts.push(s.t),
                None => groups.push((s.n, vec![s.t])),
            }
        }

        groups
            .into_iter()
            .filter_map(|(n, ts)| {
                Some(AggregatePoint {
                    n,
                    mean: stats::mean(&ts)?,
                    std_dev: stats::std_dev(&ts)?,
                    count: ts.len(),
                })
            })
            .collect()
    }
}

/// Everything `timeplot` draws: one series per input file.
#[derive(Debug, Clone, Default)]
pub struct TimingData {
    pub series: Vec<TimingSeries>,
}

impl TimingData {
    /// Title used when none is given on the command line.
    pub fn default_title(&self) -> String {
        self.series
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" vs ")
    }

    /// Total number of raw samples across all series.
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Grid data – "I J N T" rows grouped by N
// ---------------------------------------------------------------------------

/// One grid measurement: row block, column block and elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub i: f64,
    pub j: f64,
    pub t: f64,
}

/// All grid points sharing one problem size `N`.
#[derive(Debug, Clone)]
pub struct GridGroup {
    pub n: f64,
    pub color: SeriesColor,
    pub points: Vec<GridPoint>,
}

impl GridGroup {
    /// Legend label, e.g. `N=256`.
    pub fn label(&self) -> String {
        format!("N={}", self.n as i64)
    }

    /// Number of points whose `(I, J)` already occurred earlier in the group.
    /// The surface keeps only the first of each.
    pub fn duplicate_positions(&self) -> usize {
        let mut seen: Vec<(f64, f64)> = Vec::with_capacity(self.points.len());
        let mut dupes = 0;
        for p in &self.points {
            if seen.contains(&(p.i, p.j)) {
                dupes += 1;
            } else {
                seen.push((p.i, p.j));
            }
        }
        dupes
    }

    /// Whether the distinct positions span at least one triangle.
    pub fn can_form_surface(&self) -> bool {
        let positions: Vec<(f64, f64)> = self.points.iter().map(|p| (p.i, p.j)).collect();
        !triangulate(&positions).is_empty()
    }
}

/// Everything `timeplot-g3d` draws: one surface per distinct `N`.
#[derive(Debug, Clone, Default)]
pub struct GridData {
    /// File stems the data was read from, in argument order.
    pub sources: Vec<String>,
    /// Groups in order of first occurrence of their `N`.
    pub groups: Vec<GridGroup>,
}

impl GridData {
    /// Append one row. Keys are matched by exact equality.
    ///
    /// New groups get a placeholder colour; [`GridData::assign_colors`] sets
    /// the real ones once all groups are known.
    pub fn push(&mut self, i: f64, j: f64, n: f64, t: f64) {
        let point = GridPoint { i, j, t };
        match self.groups.iter_mut().find(|g| g.n == n) {
            Some(group) => group.points.push(point),
            None => self.groups.push(GridGroup {
                n,
                color: SeriesColor::new(128, 128, 128),
                points: vec![point],
            }),
        }
    }

    pub fn assign_colors(&mut self, palette: &[SeriesColor]) {
        for (group, color) in self.groups.iter_mut().zip(palette) {
            group.color = *color;
        }
    }

    /// Keep only the requested sizes, in the requested order.
    pub fn select_sizes(mut self, sizes: &[f64]) -> Result<Self, LoadError> {
        let mut selected = Vec::with_capacity(sizes.len());
        for &n in sizes {
            let idx = self
                .groups
                .iter()
                .position(|g| g.n == n)
                .ok_or(LoadError::MissingSize(n))?;
            selected.push(self.groups.remove(idx));
        }
        self.groups = selected;
        Ok(self)
    }

    pub fn default_title(&self) -> String {
        self.sources.join(" vs ")
    }

    /// Warn about groups the surface chart draws partially or not at all.
    ///
    /// Returns how many groups will be skipped.
    pub fn warn_unplottable(&self) -> usize {
        let mut skipped = 0;
        for group in &self.groups {
            let dupes = group.duplicate_positions();
            if dupes > 0 {
                log::warn!(
                    "{}: {dupes} repeated (I, J) positions, keeping the first of each",
                    group.label()
                );
            }
            if !group.can_form_surface() {
                log::warn!(
                    "{}: {} points cannot form a surface, skipping",
                    group.label(),
                    group.points.len()
                );
                skipped += 1;
            }
        }
        skipped
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
