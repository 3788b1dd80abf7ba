//! Writes small sample copies of the two input files into `sample_data/`,
//! so the dashboard can run there without the open-data downloads.
//! Existing files are never overwritten.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use csv::WriterBuilder;

const OUTPUT_DIR: &str = "sample_data";
const TRAFFIC_FILE: &str = "trafic-annuel-entrant-par-station-du-reseau-ferre-2021.csv";
const STATIONS_FILE: &str = "emplacement-des-gares-idf.csv";

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Refuse to clobber a file that is already there.
fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists; remove it first", path.display());
    }
    Ok(())
}

/// Create `path`, failing if it appeared since `ensure_absent` ran.
fn create_new(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("creating {}", path.display()))
}

fn write_traffic(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let networks = ["Ferré", "RER"];
    let cities = ["Paris", "Saint-Denis", "Puteaux", "Vincennes", "Montreuil", "Boulogne-Billancourt"];

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(create_new(path)?);
    writer.write_record(["Rang", "Réseau", "Station", "Trafic", "Ville"])?;

    let n = 60;
    for i in 0..n {
        let network = rng.pick(&networks);
        let city = if i % 3 == 0 { "Paris" } else { rng.pick(&cities) };
        // Heavy-tailed: a few hub stations, many small ones.
        let traffic = (1_000_000.0 * (1.0 / (0.03 + rng.next_f64()))) as u64;
        writer.write_record([
            (i + 1).to_string(),
            network.to_string(),
            format!("STATION {:02}", i + 1),
            traffic.to_string(),
            city.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(n)
}

fn write_stations(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let operators = ["RATP", "SNCF"];
    let lines = ["1", "4", "14", "A", "B", "C", "H", "L", "T2"];

    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(create_new(path)?);
    writer.write_record(["Geo Point", "nom", "exploitant", "ligne"])?;

    let n = 120;
    for i in 0..n {
        // Scatter around Paris, roughly the Île-de-France extent.
        let lat = 48.86 + (rng.next_f64() - 0.5) * 0.6;
        let lng = 2.35 + (rng.next_f64() - 0.5) * 1.0;
        writer.write_record([
            format!("{lat:.6}, {lng:.6}"),
            format!("Gare {:03}", i + 1),
            rng.pick(&operators).to_string(),
            rng.pick(&lines).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(n)
}

fn main() -> Result<()> {
    let dir = PathBuf::from(OUTPUT_DIR);
    let traffic_path = dir.join(TRAFFIC_FILE);
    let stations_path = dir.join(STATIONS_FILE);
    ensure_absent(&traffic_path)?;
    ensure_absent(&stations_path)?;
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let traffic_rows = write_traffic(&traffic_path, &mut rng)?;
    println!("Wrote {traffic_rows} traffic rows to {}", traffic_path.display());

    let station_rows = write_stations(&stations_path, &mut rng)?;
    println!("Wrote {station_rows} stations to {}", stations_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = ensure_absent(&manifest).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert!(create_new(&manifest).is_err());

        let fresh = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-sample.csv");
        assert!(ensure_absent(&fresh).is_ok());
    }

    #[test]
    fn test_output_is_outside_the_input_location() {
        let cfg_traffic = Path::new(TRAFFIC_FILE);
        let out = Path::new(OUTPUT_DIR).join(TRAFFIC_FILE);
        assert_ne!(out.as_path(), cfg_traffic);
        assert!(out.starts_with(OUTPUT_DIR));
    }
}
