use serde::Serialize;

use crate::color::{ColorMap, generate_palette};
use crate::data::aggregate::{count_by, first_rows, top_by_traffic, traffic_by_city, unique_in_order};
use crate::data::filter::{Selection, filter_counts, filter_traffic_by_network};
use crate::data::model::{CategoryCount, StationDataset, TrafficDataset, TrafficRecord};
use crate::ui::figure::{Figure, bar_chart, pie_chart, scatter_map};

/// Rows kept for the traffic bar chart.
pub const TOP_BAR_ROWS: usize = 10;
/// Rows kept for the city pie chart.  These are the first rows of the
/// file as read, not the busiest ones.
pub const TOP_PIE_ROWS: usize = 20;

const MAP_ZOOM: f64 = 6.0;
const MAP_STYLE: &str = "open-street-map";

// ---------------------------------------------------------------------------
// Dashboard state
// ---------------------------------------------------------------------------

/// Everything the page shows, derived once from the two datasets.
///
/// Nothing here changes after construction: filter callbacks read these
/// views and build a fresh figure on every call.
pub struct DashboardState {
    pub stations: StationDataset,
    /// Busiest stations, highest traffic first.
    pub top_bar: Vec<TrafficRecord>,
    pub top_pie: Vec<TrafficRecord>,
    pub operator_counts: Vec<CategoryCount>,
    pub line_counts: Vec<CategoryCount>,
    /// Dropdown options, in order of first appearance.
    pub network_options: Vec<String>,
    pub operator_options: Vec<String>,
    operator_colors: ColorMap,
}

/// The five charts as first displayed, keyed by graph id.
#[derive(Debug, Serialize)]
pub struct InitialFigures {
    #[serde(rename = "bar-chart")]
    pub traffic_bar: Figure,
    #[serde(rename = "pie-chart")]
    pub city_pie: Figure,
    #[serde(rename = "bar-chart2")]
    pub operator_bar: Figure,
    #[serde(rename = "bar-chart3")]
    pub line_bar: Figure,
    #[serde(rename = "map-graph")]
    pub station_map: Figure,
}

impl DashboardState {
    pub fn new(traffic: TrafficDataset, stations: StationDataset) -> Self {
        let sorted = top_by_traffic(&traffic.records, traffic.len());
        let network_options = unique_in_order(sorted.iter().map(|r| r.network.as_str()));
        let top_bar = first_rows(&sorted, TOP_BAR_ROWS);
        let top_pie = first_rows(&traffic.records, TOP_PIE_ROWS);

        let operator_counts = count_by(&stations.records, |s| s.operator.as_str());
        let line_counts = count_by(&stations.records, |s| s.line.as_str());
        let operator_options = unique_in_order(stations.records.iter().map(|s| s.operator.as_str()));
        let operator_colors = ColorMap::new(operator_counts.iter().map(|c| c.category.as_str()));

        log::debug!(
            "{} networks, {} operators, {} lines",
            network_options.len(),
            operator_counts.len(),
            line_counts.len()
        );

        DashboardState {
            stations,
            top_bar,
            top_pie,
            operator_counts,
            line_counts,
            network_options,
            operator_options,
            operator_colors,
        }
    }

    /// Top-10 traffic bars, restricted to one network if selected.
    pub fn traffic_bar_figure(&self, network: &Selection) -> Figure {
        let rows = filter_traffic_by_network(&self.top_bar, network);
        let bars = rows.into_iter().map(|r| (r.station, r.traffic)).collect();
        bar_chart(bars, "Station", "Trafic", None)
    }

    /// Share of traffic per city over the first rows of the file.
    pub fn city_pie_figure(&self) -> Figure {
        let slices = traffic_by_city(&self.top_pie);
        let colors = generate_palette(slices.len());
        pie_chart(slices, colors)
    }

    /// Stations per operator, restricted to one operator if selected.
    pub fn operator_bar_figure(&self, operator: &Selection) -> Figure {
        let counts = filter_counts(&self.operator_counts, operator);
        let colors = counts
            .iter()
            .map(|c| self.operator_colors.color_for(&c.category).to_string())
            .collect();
        bar_chart(to_bars(counts), "exploitant", "nom", Some(colors))
    }

    pub fn line_bar_figure(&self) -> Figure {
        bar_chart(to_bars(self.line_counts.clone()), "ligne", "Nombre de station", None)
    }

    pub fn station_map_figure(&self) -> Figure {
        let points: Vec<_> = self
            .stations
            .records
            .iter()
            .map(|s| (s.position, format!("{}<br>{}", s.geo_point, s.name)))
            .collect();
        scatter_map(&points, MAP_ZOOM, MAP_STYLE)
    }

    /// Figures for a fresh page, both dropdowns cleared.
    pub fn initial_figures(&self) -> InitialFigures {
        InitialFigures {
            traffic_bar: self.traffic_bar_figure(&Selection::none()),
            city_pie: self.city_pie_figure(),
            operator_bar: self.operator_bar_figure(&Selection::none()),
            line_bar: self.line_bar_figure(),
            station_map: self.station_map_figure(),
        }
    }
}

fn to_bars(counts: Vec<CategoryCount>) -> Vec<(String, u64)> {
    counts
        .into_iter()
        .map(|c| (c.category, c.count as u64))
        .collect()
}
