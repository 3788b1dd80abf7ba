use serde::Serialize;

use crate::data::model::GeoPoint;

// ---------------------------------------------------------------------------
// Plotly figure model
// ---------------------------------------------------------------------------

/// A chart description in the JSON shape plotly.js expects
/// (`Plotly.react(div, figure.data, figure.layout)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar {
        x: Vec<String>,
        y: Vec<u64>,
        marker: Marker,
    },
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
        marker: Marker,
    },
    Scattermapbox {
        lat: Vec<f64>,
        lon: Vec<f64>,
        hovertext: Vec<String>,
        mode: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<MapboxLayout>,
    pub margin: Margin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

impl Axis {
    fn titled(text: &str) -> Self {
        Axis {
            title: AxisTitle {
                text: text.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapboxLayout {
    pub style: &'static str,
    pub zoom: f64,
    pub center: Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Margin { t: 40, b: 40, l: 60, r: 20 }
    }
}

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------

/// One bar per `(label, value)` pair, in the given order.
pub fn bar_chart(
    bars: Vec<(String, u64)>,
    x_title: &str,
    y_title: &str,
    colors: Option<Vec<String>>,
) -> Figure {
    let (x, y) = bars.into_iter().unzip();
    Figure {
        data: vec![Trace::Bar {
            x,
            y,
            marker: Marker {
                color: colors,
                colors: None,
            },
        }],
        layout: Layout {
            xaxis: Some(Axis::titled(x_title)),
            yaxis: Some(Axis::titled(y_title)),
            ..Layout::default()
        },
    }
}

/// One slice per `(name, value)` pair.
pub fn pie_chart(slices: Vec<(String, u64)>, colors: Vec<String>) -> Figure {
    let (labels, values) = slices.into_iter().unzip();
    Figure {
        data: vec![Trace::Pie {
            labels,
            values,
            marker: Marker {
                color: None,
                colors: Some(colors),
            },
        }],
        layout: Layout::default(),
    }
}

/// Scatter of points on street-map tiles, centred on their mean position.
pub fn scatter_map(points: &[(GeoPoint, String)], zoom: f64, style: &'static str) -> Figure {
    let lat: Vec<f64> = points.iter().map(|(p, _)| p.lat).collect();
    let lon: Vec<f64> = points.iter().map(|(p, _)| p.lng).collect();
    let hovertext = points.iter().map(|(_, h)| h.clone()).collect();

    let center = if points.is_empty() {
        Center { lat: 0.0, lon: 0.0 }
    } else {
        let n = points.len() as f64;
        Center {
            lat: lat.iter().sum::<f64>() / n,
            lon: lon.iter().sum::<f64>() / n,
        }
    };

    Figure {
        data: vec![Trace::Scattermapbox {
            lat,
            lon,
            hovertext,
            mode: "markers",
        }],
        layout: Layout {
            mapbox: Some(MapboxLayout { style, zoom, center }),
            margin: Margin { t: 0, b: 0, l: 0, r: 0 },
            ..Layout::default()
        },
    }
}

impl Figure {
    /// Number of bars (or slices, or points) in the first trace.
    pub fn point_count(&self) -> usize {
        match self.data.first() {
            Some(Trace::Bar { x, .. }) => x.len(),
            Some(Trace::Pie { labels, .. }) => labels.len(),
            Some(Trace::Scattermapbox { lat, .. }) => lat.len(),
            None => 0,
        }
    }
}
