use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::config::DashboardConfig;
use crate::data::filter::Selection;
use crate::state::{DashboardState, InitialFigures};
use crate::ui::figure::Figure;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn create_router(state: Arc<DashboardState>, config: &DashboardConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/figures", get(initial_figures))
        .route("/api/figures/bar-chart", get(update_traffic_bar))
        .route("/api/figures/bar-chart2", get(update_operator_bar))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: Arc<DashboardState>, config: &DashboardConfig) -> Result<()> {
    let router = create_router(state, config);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("Dashboard listening on http://{addr}");
    axum::serve(listener, router).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct NetworkFilter {
    reseau: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct OperatorFilter {
    exploitant: Option<String>,
}

async fn index(State(state): State<Arc<DashboardState>>) -> Html<String> {
    Html(panels::render_page(&state))
}

async fn initial_figures(State(state): State<Arc<DashboardState>>) -> Json<InitialFigures> {
    Json(state.initial_figures())
}

async fn update_traffic_bar(
    State(state): State<Arc<DashboardState>>,
    Query(params): Query<NetworkFilter>,
) -> Json<Figure> {
    let selection = Selection::from_query(params.reseau.as_deref());
    let figure = state.traffic_bar_figure(&selection);
    log::debug!("bar-chart: reseau={:?} -> {} bars", selection.as_deref(), figure.point_count());
    Json(figure)
}

async fn update_operator_bar(
    State(state): State<Arc<DashboardState>>,
    Query(params): Query<OperatorFilter>,
) -> Json<Figure> {
    let selection = Selection::from_query(params.exploitant.as_deref());
    let figure = state.operator_bar_figure(&selection);
    log::debug!("bar-chart2: exploitant={:?} -> {} bars", selection.as_deref(), figure.point_count());
    Json(figure)
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;
    use crate::state::tests::sample_state;
    use crate::ui::figure::Trace;

    fn state() -> Arc<DashboardState> {
        Arc::new(sample_state())
    }

    fn bar_values(fig: &Figure) -> Vec<u64> {
        match &fig.data[0] {
            Trace::Bar { y, .. } => y.clone(),
            other => panic!("expected a bar trace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_operator_callback() {
        let Json(fig) = update_operator_bar(
            State(state()),
            Query(OperatorFilter {
                exploitant: Some("X".into()),
            }),
        )
        .await;
        assert_eq!(bar_values(&fig), [3]);

        let Json(fig) = update_operator_bar(State(state()), Query(OperatorFilter::default())).await;
        assert_eq!(bar_values(&fig), [3, 5]);
    }

    #[tokio::test]
    async fn test_empty_selection_is_unfiltered() {
        let st = state();
        let Json(initial) = initial_figures(State(st.clone())).await;
        let Json(cleared) = update_traffic_bar(
            State(st),
            Query(NetworkFilter {
                reseau: Some(String::new()),
            }),
        )
        .await;
        assert_eq!(cleared, initial.traffic_bar);
    }

    #[tokio::test]
    async fn test_traffic_callback_filters_network() {
        let Json(fig) = update_traffic_bar(
            State(state()),
            Query(NetworkFilter {
                reseau: Some("RER".into()),
            }),
        )
        .await;
        assert_eq!(bar_values(&fig), [7000, 5000]);
    }

    #[tokio::test]
    async fn test_index_lists_options() {
        let Html(page) = index(State(state())).await;
        assert!(page.contains(r#"<option value="X">X</option>"#));
        assert!(page.contains(r#"<option value="RER">RER</option>"#));
    }

    async fn get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_router_over_http() {
        let router = create_router(state(), &DashboardConfig::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let health = get(addr, "/health").await;
        assert!(health.starts_with("HTTP/1.1 200"));
        assert!(health.ends_with("OK"));

        let figures = get(addr, "/api/figures").await;
        assert!(figures.contains(r#""map-graph""#));
        assert!(figures.contains(r#""type":"scattermapbox""#));

        let filtered = get(addr, "/api/figures/bar-chart2?exploitant=Y").await;
        assert!(filtered.contains(r#""x":["Y"],"y":[5]"#));

        let script = get(addr, "/assets/dashboard.js").await;
        assert!(script.starts_with("HTTP/1.1 200"));
        assert!(script.contains("Plotly.react"));

        let missing = get(addr, "/nope").await;
        assert!(missing.starts_with("HTTP/1.1 404"));
    }
}
