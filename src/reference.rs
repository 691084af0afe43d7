/// Reference data loading
///
/// This module handles:
/// - Parsing the research item catalog (`id`, `name`, `class`)
/// - Parsing the blacklist (`id`, `name`)
/// - Building id-keyed lookup maps for the record parser
///
/// Both files are delimited text with a header row. Tab is used when the
/// header line contains one, comma otherwise.
use crate::error::PipelineError;
use crate::types::{BlacklistEntry, Blacklist, Catalog, CatalogEntry, CharacterClass, ReferenceData};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use serde::Deserialize;

const CATALOG: &str = "catalog";
const BLACKLIST: &str = "blacklist";

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    class: String,
}

#[derive(Debug, Deserialize)]
struct BlacklistRow {
    id: String,
    name: String,
}

/// Load both reference datasets from raw file contents
pub fn load_reference_data(catalog_bytes: &[u8], blacklist_bytes: &[u8]) -> Result<ReferenceData, PipelineError> {
    let catalog = load_catalog(catalog_bytes)?;
    info!("Loaded {} items from catalog", catalog.len());

    let blacklist = load_blacklist(blacklist_bytes)?;
    info!("Loaded {} blacklist items", blacklist.len());

    Ok(ReferenceData { catalog, blacklist })
}

/// Parse the research item catalog
///
/// Any `quantity` column is ignored; every entry starts at 0.
pub fn load_catalog(bytes: &[u8]) -> Result<Catalog, PipelineError> {
    let mut rdr = open_reader(bytes, CATALOG, &["id", "name", "class"])?;
    let mut catalog = Catalog::new();

    for (index, result) in rdr.deserialize::<CatalogRow>().enumerate() {
        let row_number = index + 1;
        let row = result.map_err(|e| PipelineError::malformed(CATALOG, format!("row {}: {}", row_number, e)))?;

        let id = parse_id(&row.id, CATALOG, row_number)?;
        let class: CharacterClass =
            row.class.parse().map_err(|e| PipelineError::malformed(CATALOG, format!("row {}: {}", row_number, e)))?;

        let entry = CatalogEntry { id, name: row.name, class, quantity: 0 };
        if let Some(previous) = catalog.insert(id, entry) {
            warn!("Catalog id {} appears more than once; replacing '{}'", id, previous.name);
        }
    }

    Ok(catalog)
}

/// Parse the blacklist
pub fn load_blacklist(bytes: &[u8]) -> Result<Blacklist, PipelineError> {
    let mut rdr = open_reader(bytes, BLACKLIST, &["id", "name"])?;
    let mut blacklist = Blacklist::new();

    for (index, result) in rdr.deserialize::<BlacklistRow>().enumerate() {
        let row_number = index + 1;
        let row = result.map_err(|e| PipelineError::malformed(BLACKLIST, format!("row {}: {}", row_number, e)))?;

        let id = parse_id(&row.id, BLACKLIST, row_number)?;
        if let Some(previous) = blacklist.insert(id, BlacklistEntry { id, name: row.name }) {
            warn!("Blacklist id {} appears more than once; replacing '{}'", id, previous.name);
        }
    }

    Ok(blacklist)
}

/// Pick the delimiter from the header line
fn detect_delimiter(bytes: &[u8]) -> u8 {
    let header = bytes.split(|b| *b == b'\n').next().unwrap_or_default();
    if header.contains(&b'\t') { b'\t' } else { b',' }
}

/// Build a reader with normalized headers, checking the required columns exist
fn open_reader<'a>(
    bytes: &'a [u8],
    dataset: &'static str,
    required: &[&str],
) -> Result<Reader<&'a [u8]>, PipelineError> {
    let delimiter = detect_delimiter(bytes);
    debug!("Reading {} with delimiter {:?}", dataset, delimiter as char);

    let mut rdr = ReaderBuilder::new().delimiter(delimiter).trim(Trim::All).from_reader(bytes);

    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::malformed(dataset, format!("unreadable header row: {}", e)))?;
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_ascii_lowercase()).collect();

    for column in required {
        if !normalized.iter().any(|h| h == column) {
            return Err(PipelineError::malformed(dataset, format!("missing required column '{}'", column)));
        }
    }

    rdr.set_headers(StringRecord::from(normalized));
    Ok(rdr)
}

fn parse_id(raw: &str, dataset: &'static str, row_number: usize) -> Result<i64, PipelineError> {
    raw.trim()
        .parse()
        .map_err(|_| PipelineError::malformed(dataset, format!("row {}: id '{}' is not numeric", row_number, raw)))
}

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;
