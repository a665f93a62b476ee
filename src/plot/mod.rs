//! # Plotting
//!
//! Draws sweep results as an overlaid time-vs-size line chart with
//! ratatui. [`ChartData`] owns everything the widget borrows, so the chart
//! can be rendered to a real terminal with [`show`] or to any other ratatui
//! backend.

mod chart;
mod error;
mod terminal;

pub use chart::{ChartData, ChartSeries, TITLE, X_LABEL, Y_LABEL};
pub use error::{PlotError, PlotResult};
pub use terminal::show;
