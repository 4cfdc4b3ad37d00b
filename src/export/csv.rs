use crate::config::TimeWindow;
use crate::generate::SideFixture;
use anyhow::Context;
use rand::Rng;
use std::fs;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub files: usize,
    pub rows: usize,
}

/// Writes `node_<class>.csv` and `edge_identity_<class>.csv` for one side
/// into `dir`. With a window, every row of a file carries the same random
/// timestamp as its last field. Node files keep the raw draws, duplicates
/// included.
pub fn write_side<R: Rng + ?Sized>(
    dir: &Path,
    fixture: &SideFixture,
    window: Option<&TimeWindow>,
    rng: &mut R,
) -> anyhow::Result<ExportStats> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    let mut stats = ExportStats::default();

    for (class, values) in &fixture.nodes {
        let path = dir.join(format!("node_{class}.csv"));
        let rows = values.iter().map(|v| vec![v.as_str()]);
        stats.rows += write_rows(&path, rows, window, rng)?;
        stats.files += 1;
    }

    for edge_set in &fixture.edges {
        let path = dir.join(format!("{}.csv", edge_set.file_stem()));
        let rows = edge_set
            .pairs
            .iter()
            .map(|(l, r)| vec![l.as_str(), r.as_str()]);
        stats.rows += write_rows(&path, rows, window, rng)?;
        stats.files += 1;
    }

    tracing::info!(
        side = %fixture.side,
        dir = %dir.display(),
        files = stats.files,
        rows = stats.rows,
        "exported side"
    );

    anyhow::Ok(stats)
}

fn write_rows<'a, R: Rng + ?Sized>(
    path: &Path,
    rows: impl Iterator<Item = Vec<&'a str>>,
    window: Option<&TimeWindow>,
    rng: &mut R,
) -> anyhow::Result<usize> {
    let stamp = window.map(|w| w.sample_formatted(rng));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut count = 0;
    for row in rows {
        writer
            .write_record(row.iter().copied().chain(stamp.as_deref()))
            .with_context(|| format!("failed to write {}", path.display()))?;
        count += 1;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = count, "wrote csv");
    anyhow::Ok(count)
}

/// Reads the first field of every row, dropping any trailing timestamp.
pub fn read_node_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(reader));

    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("malformed csv row")?;
        if let Some(value) = record.get(0) {
            values.push(value.to_string());
        }
    }
    anyhow::Ok(values)
}
