//! Chart construction for sweep results.

use crate::algorithms::Catalog;
use crate::harness::SweepResults;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
};

/// Chart title.
pub const TITLE: &str = "Algorithm Time Complexity Comparison";
/// X axis label.
pub const X_LABEL: &str = "Input Size";
/// Y axis label.
pub const Y_LABEL: &str = "Time (seconds)";

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::LightCyan,
    Color::LightYellow,
];

const GRID_ROWS: usize = 4;

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend entry, e.g. `Merge Sort (O(n log n)) - Bad`.
    pub label: String,
    /// Line colour.
    pub color: Color,
    /// `(size, seconds)` points, in sweep order.
    pub points: Vec<(f64, f64)>,
}

/// Owned chart data; [`ChartData::chart`] borrows it to build the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    series: Vec<ChartSeries>,
    sizes: Vec<usize>,
    grid: Vec<Vec<(f64, f64)>>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl ChartData {
    /// Build one line per algorithm with at least one point, in catalog order.
    ///
    /// Series cut short by a ceiling or retirement cover only the sizes they
    /// were measured at.
    #[must_use]
    pub fn new(catalog: &Catalog, results: &SweepResults) -> Self {
        let series: Vec<ChartSeries> = catalog
            .iter()
            .filter_map(|spec| results.series(spec.id).map(|s| (spec, s)))
            .filter(|(_, s)| !s.is_empty())
            .enumerate()
            .map(|(i, (spec, s))| ChartSeries {
                label: spec.legend_label(),
                color: PALETTE[i % PALETTE.len()],
                points: s.coordinates(),
            })
            .collect();

        let sizes = results.sizes().to_vec();
        let x_min = sizes.first().copied().unwrap_or(0) as f64;
        let x_max = sizes.last().copied().unwrap_or(1) as f64;
        let x_bounds = if x_max > x_min {
            [x_min, x_max]
        } else {
            [x_min - 1.0, x_max + 1.0]
        };

        let y_top = series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .fold(0.0_f64, f64::max);
        let y_bounds = [0.0, if y_top > 0.0 { y_top * 1.1 } else { 1e-6 }];

        let mut grid: Vec<Vec<(f64, f64)>> = sizes
            .iter()
            .map(|&size| vec![(size as f64, y_bounds[0]), (size as f64, y_bounds[1])])
            .collect();
        grid.extend((1..GRID_ROWS).map(|row| {
            let y = y_bounds[1] * row as f64 / GRID_ROWS as f64;
            vec![(x_bounds[0], y), (x_bounds[1], y)]
        }));

        Self {
            series,
            sizes,
            grid,
            x_bounds,
            y_bounds,
        }
    }

    /// Plotted lines.
    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Whether there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// X axis range.
    #[must_use]
    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Y axis range.
    #[must_use]
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// The chart widget: grid first, then one line per series.
    #[must_use]
    pub fn chart(&self) -> Chart<'_> {
        let grid = self.grid.iter().map(|line| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::DarkGray))
                .data(line)
        });

        let lines = self.series.iter().map(|s| {
            Dataset::default()
                .name(s.label.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(&s.points)
        });

        let [y_min, y_max] = self.y_bounds;

        Chart::new(grid.chain(lines).collect())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {TITLE} ")),
            )
            .x_axis(
                Axis::default()
                    .title(X_LABEL)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(self.x_bounds)
                    .labels(self.x_labels()),
            )
            .y_axis(
                Axis::default()
                    .title(Y_LABEL)
                    .style(Style::default().fg(Color::Gray))
                    .bounds(self.y_bounds)
                    .labels(vec![
                        Span::raw(format!("{y_min:.6}")),
                        Span::raw(format!("{:.6}", (y_min + y_max) / 2.0)),
                        Span::raw(format!("{y_max:.6}")),
                    ]),
            )
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)))
    }

    fn x_labels(&self) -> Vec<Span<'static>> {
        match self.sizes.as_slice() {
            [] => Vec::new(),
            [only] => vec![Span::raw(only.to_string())],
            [first, last] => vec![Span::raw(first.to_string()), Span::raw(last.to_string())],
            [first, .., last] => {
                let mid = self.sizes[self.sizes.len() / 2];
                vec![
                    Span::raw(first.to_string()),
                    Span::raw(mid.to_string()),
                    Span::raw(last.to_string()),
                ]
            },
        }
    }
}
