use std::path::Path;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{LaunchDataset, LaunchRecord};

pub const SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [SITE_COLUMN, PAYLOAD_COLUMN, CLASS_COLUMN, BOOSTER_COLUMN];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch columns, extra columns ignored
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – the same columns as flat Utf8 / numeric fields
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    Ok(LaunchDataset::from_records(records))
}

/// One row as it appears in CSV and JSON sources.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

impl RawRecord {
    fn into_record(self) -> Result<LaunchRecord, super::model::RecordError> {
        LaunchRecord::from_raw(
            &self.site,
            self.payload_mass_kg,
            self.class,
            &self.booster_category,
        )
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV missing '{column}' column");
        }
    }

    reader
        .deserialize::<RawRecord>()
        .enumerate()
        .map(|(row_no, result)| {
            let raw = result.with_context(|| format!("CSV row {row_no}"))?;
            raw.into_record()
                .with_context(|| format!("CSV row {row_no}"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 525.0,
///     "class": 0, "Booster Version Category": "v1.0" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRecord> = serde_json::from_str(&text).context("parsing JSON")?;

    rows.into_iter()
        .enumerate()
        .map(|(i, raw)| raw.into_record().with_context(|| format!("Row {i}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one launch per row.
///
/// String columns may be Utf8 or LargeUtf8; numeric columns may be any of
/// Int32, Int64, Float32, Float64. Nulls in required columns are rejected.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    for name in REQUIRED_COLUMNS {
        if builder.schema().index_of(name).is_err() {
            bail!("Parquet file missing '{name}' column");
        }
    }
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = column(&batch, SITE_COLUMN)?;
        let payload_col = column(&batch, PAYLOAD_COLUMN)?;
        let class_col = column(&batch, CLASS_COLUMN)?;
        let booster_col = column(&batch, BOOSTER_COLUMN)?;

        for row in 0..batch.num_rows() {
            let row_no = records.len();
            let site = extract_string(site_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{SITE_COLUMN}'"))?;
            let payload = extract_f64(payload_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{PAYLOAD_COLUMN}'"))?;
            let class = extract_f64(class_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{CLASS_COLUMN}'"))?;
            let booster = extract_string(booster_col, row)
                .with_context(|| format!("Row {row_no}: failed to read '{BOOSTER_COLUMN}'"))?;

            let record = LaunchRecord::from_raw(&site, payload, class, &booster)
                .with_context(|| format!("Row {row_no}"))?;
            records.push(record);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    let value = match col.data_type() {
        DataType::Int32 => col
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Int64 => col
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Float32 => col
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Float64 => col
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        other => bail!("Expected numeric column, got {other:?}"),
    };
    value.context("column type does not match its array")
}
