//! Presentation: Plotly figures and the HTML page that hosts them.

pub mod figure;
pub mod panels;
