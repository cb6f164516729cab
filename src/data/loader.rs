use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Reading, Sector, Status};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// A required column is absent from the input after header trimming.
#[derive(Debug, Error)]
#[error("missing required column '{0}'")]
pub struct MissingColumn(pub &'static str);

const COL_WEIGHT: &str = "Peso";
const COL_MAX_CAPACITY: &str = "Peso Máximo";
const COL_SECTOR: &str = "Setor";
const COL_SCALE_ID: &str = "Balança";

/// Load a readings file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Peso`, `Peso Máximo`, `Setor` and optionally
///   `Balança` columns (the usual export)
/// * `.json` – the same table as a records-oriented array
///   (`df.to_json(orient='records')`)
pub fn load_file(path: &Path) -> Result<Vec<Reading>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).context("opening CSV file")?;
            read_csv(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_json(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse the CSV export.  Column names are trimmed of surrounding whitespace
/// before lookup; extra columns are ignored.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<Reading>> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let col = |name: &'static str| -> Result<usize, MissingColumn> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(MissingColumn(name))
    };

    let weight_idx = col(COL_WEIGHT)?;
    let max_capacity_idx = col(COL_MAX_CAPACITY)?;
    let sector_idx = col(COL_SECTOR)?;
    let scale_id_idx = col(COL_SCALE_ID).ok();

    let mut readings = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let weight = parse_grams(record.get(weight_idx).unwrap_or(""), row_no, COL_WEIGHT)?;
        let max_capacity = parse_grams(
            record.get(max_capacity_idx).unwrap_or(""),
            row_no,
            COL_MAX_CAPACITY,
        )?;
        let sector = Sector::from_label(record.get(sector_idx).unwrap_or(""));
        let scale_id = normalize_scale_id(
            scale_id_idx
                .and_then(|idx| record.get(idx))
                .unwrap_or(""),
        );

        readings.push(Reading {
            scale_id,
            sector,
            weight,
            max_capacity,
            status: Status::Unclassified,
        });
    }

    Ok(readings)
}

fn parse_grams(s: &str, row: usize, col: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Row {row}, column '{col}': '{s}' is not a number"))
}

/// Scale ids in the exports are nominally integers but arrive as blanks or
/// floats (`"12.0"`).  Blank → `"0"`, floats are truncated; anything else is
/// kept as trimmed text.
fn normalize_scale_id(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return "0".to_string();
    }
    match s.parse::<f64>() {
        Ok(v) => format!("{}", v as i64),
        Err(_) => s.to_string(),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Peso")]
    weight: f64,
    #[serde(rename = "Peso Máximo")]
    max_capacity: f64,
    #[serde(rename = "Setor")]
    sector: String,
    #[serde(rename = "Balança", default)]
    scale_id: Option<JsonValue>,
}

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Balança": 12, "Setor": "Frios", "Peso": 20000, "Peso Máximo": 35000 },
///   ...
/// ]
/// ```
pub fn parse_json(text: &str) -> Result<Vec<Reading>> {
    let records: Vec<RawRecord> = serde_json::from_str(text).context("parsing JSON records")?;

    let readings = records
        .into_iter()
        .map(|rec| {
            let scale_id = match rec.scale_id {
                Some(JsonValue::Number(n)) => normalize_scale_id(&n.to_string()),
                Some(JsonValue::String(s)) => normalize_scale_id(&s),
                _ => "0".to_string(),
            };
            Reading {
                scale_id,
                sector: Sector::from_label(&rec.sector),
                weight: rec.weight,
                max_capacity: rec.max_capacity,
                status: Status::Unclassified,
            }
        })
        .collect();

    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_headers_are_trimmed_before_lookup() {
        let csv = "\
 Balança , Setor ,Peso , Peso Máximo \n\
12,Frios,20000,35000\n";
        let rows = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].scale_id, "12");
        assert_eq!(rows[0].sector, Some(Sector::Frios));
        assert_eq!(rows[0].weight, 20000.0);
        assert_eq!(rows[0].max_capacity, 35000.0);
        assert_eq!(rows[0].status, Status::Unclassified);
    }

    #[test]
    fn scale_id_column_is_optional_and_blank_ids_normalise() {
        let csv = "Setor,Peso,Peso Máximo\nPadaria,10000,15000\n";
        let rows = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].scale_id, "0");

        let csv = "Balança,Setor,Peso,Peso Máximo\n7.0,Padaria,10000,15000\n";
        let rows = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].scale_id, "7");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "Balança,Setor,Peso\n1,Frios,20000\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Peso Máximo"), "{err}");
    }

    #[test]
    fn malformed_weight_is_an_error() {
        let csv = "Setor,Peso,Peso Máximo\nFrios,n/a,35000\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Row 0"), "{err:#}");
    }

    #[test]
    fn unknown_sector_is_kept_but_unassigned() {
        let csv = "Setor,Peso,Peso Máximo\nEstoque,20000,35000\n";
        let rows = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].sector, None);
    }

    #[test]
    fn json_records_load() {
        let text = r#"[
            {"Balança": 3, "Setor": "Doca Fria", "Peso": 20004, "Peso Máximo": 35000},
            {"Setor": "Açougue", "Peso": 10000, "Peso Máximo": 15000}
        ]"#;
        let rows = parse_json(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].scale_id, "3");
        assert_eq!(rows[0].sector, Some(Sector::DocaFria));
        assert_eq!(rows[1].scale_id, "0");
        assert_eq!(rows[1].sector, Some(Sector::Acougue));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("balancas.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"), "{err}");
    }
}
