use std::path::PathBuf;

/// Where the dashboard reads its data and how it serves it.
///
/// The values are fixed: there are no flags or environment overrides,
/// only `RUST_LOG` for log output.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub traffic_csv: PathBuf,
    pub stations_csv: PathBuf,
    pub assets_dir: PathBuf,
    pub host: String,
    pub port: u16,
    /// Verbose logging of every callback.  There is no hot reload: the
    /// page is rendered from data loaded once at startup.
    pub debug: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            traffic_csv: PathBuf::from("trafic-annuel-entrant-par-station-du-reseau-ferre-2021.csv"),
            stations_csv: PathBuf::from("emplacement-des-gares-idf.csv"),
            assets_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")),
            host: "0.0.0.0".to_string(),
            port: 8050,
            debug: true,
        }
    }
}

impl DashboardConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
