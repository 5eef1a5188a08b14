//! Country population table: CSV parsing, coordinate join, year filter.

use csv::ReaderBuilder;
use gpm_geo::coordinate::{Coordinate, CoordinateCache};
use log::warn;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Required `Entity` header
const ENTITY_COLUMN: &str = "Entity";
/// Optional ISO code header
const CODE_COLUMN: &str = "Code";
/// Required `Year` header
const YEAR_COLUMN: &str = "Year";
/// The population column is matched by prefix; reference exports carry the
/// full UN variant string ("Population - Sex: all - Age: all - ...").
const POPULATION_PREFIX: &str = "Population";

/// Error type for table operations
#[derive(Error, Debug)]
pub enum TableError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A cell that must be numeric is not
    #[error("Row {row}: invalid {field} value: {value:?}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

/// Type alias for Results using TableError
pub type Result<T> = std::result::Result<T, TableError>;

/// One row of the uploaded table.
///
/// `coordinate` starts out `None` and is set once when the geocoding cache
/// is applied; rows still `None` after the join are dropped before mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub entity: String,
    pub code: Option<String>,
    pub year: i32,
    pub population: f64,
    pub coordinate: Option<Coordinate>,
}

/// Resolved indices of the columns we read.
struct ColumnLayout {
    entity: usize,
    code: Option<usize>,
    year: usize,
    population: usize,
}

fn locate_columns(headers: &csv::StringRecord) -> Result<ColumnLayout> {
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let entity = position(ENTITY_COLUMN).ok_or(TableError::MissingColumn(ENTITY_COLUMN))?;
    let year = position(YEAR_COLUMN).ok_or(TableError::MissingColumn(YEAR_COLUMN))?;
    let code = position(CODE_COLUMN);
    let population = headers
        .iter()
        .position(|h| h.trim().starts_with(POPULATION_PREFIX))
        .ok_or(TableError::MissingColumn(POPULATION_PREFIX))?;

    Ok(ColumnLayout {
        entity,
        code,
        year,
        population,
    })
}

/// Parse an uploaded population CSV into records.
///
/// Columns are located by header name, so their order does not matter.
/// Rows with an empty entity cell are skipped; rows with non-numeric year
/// or population cells abort the parse with the offending row number.
pub fn parse_population_csv(csv_text: &str) -> Result<Vec<CountryRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_text.as_bytes());

    let layout = locate_columns(rdr.headers()?)?;
    let mut records = Vec::new();

    for (index, row) in rdr.records().enumerate() {
        let row = row?;
        let row_number = index + 1;

        let entity = row.get(layout.entity).unwrap_or("").trim();
        if entity.is_empty() {
            warn!("Row {}: empty entity cell, skipping", row_number);
            continue;
        }

        let year_text = row.get(layout.year).unwrap_or("").trim();
        let year = year_text
            .parse::<i32>()
            .map_err(|_| TableError::InvalidNumber {
                row: row_number,
                field: "Year",
                value: year_text.to_string(),
            })?;

        let population_text = row.get(layout.population).unwrap_or("").trim();
        let population = population_text
            .parse::<f64>()
            .map_err(|_| TableError::InvalidNumber {
                row: row_number,
                field: "Population",
                value: population_text.to_string(),
            })?;

        let code = layout
            .code
            .and_then(|i| row.get(i))
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        records.push(CountryRecord {
            entity: entity.to_string(),
            code,
            year,
            population,
            coordinate: None,
        });
    }

    Ok(records)
}

/// Entity names in first-seen order, without duplicates.
///
/// This is the list the geocoder iterates, so one upload never looks the
/// same country up twice.
pub fn distinct_entities(records: &[CountryRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut entities = Vec::new();

    for record in records {
        if seen.insert(record.entity.as_str()) {
            entities.push(record.entity.clone());
        }
    }

    entities
}

/// Set each row's coordinate from the cache by entity name.
///
/// Rows whose entity has no cache entry keep `coordinate: None`.
pub fn apply_coordinates(records: &mut [CountryRecord], cache: &CoordinateCache) {
    for record in records.iter_mut() {
        record.coordinate = cache.get(&record.entity).copied();
    }
}

/// The rows that survived the join, i.e. have coordinates attached.
pub fn located_rows(records: &[CountryRecord]) -> Vec<CountryRecord> {
    records
        .iter()
        .filter(|record| record.coordinate.is_some())
        .cloned()
        .collect()
}

/// Rows for one year, used by the per-year population table.
pub fn rows_for_year(records: &[CountryRecord], year: i32) -> Vec<CountryRecord> {
    records
        .iter()
        .filter(|record| record.year == year)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE_CSV: &str = include_str!("../../fixtures/population.csv");

    fn sample_records() -> Vec<CountryRecord> {
        parse_population_csv(SAMPLE_CSV).expect("fixture parses")
    }

    fn cache_for(entries: &[(&str, f64, f64)]) -> CoordinateCache {
        entries
            .iter()
            .map(|(name, lat, lon)| (name.to_string(), Coordinate::new(*lat, *lon)))
            .collect()
    }

    #[test]
    fn test_parse_sample_fixture() {
        let records = sample_records();
        assert_eq!(records.len(), 24);

        let france = &records[4];
        assert_eq!(france.entity, "France");
        assert_eq!(france.code.as_deref(), Some("FRA"));
        assert_eq!(france.year, 1950);
        assert_eq!(france.population, 41829176.0);
        assert!(france.coordinate.is_none());
    }

    #[test]
    fn test_missing_entity_column_is_an_error() {
        let csv_text = "Country,Year,Population\nFrance,1950,41829176\n";
        match parse_population_csv(csv_text) {
            Err(TableError::MissingColumn(column)) => assert_eq!(column, "Entity"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_population_column_is_an_error() {
        let csv_text = "Entity,Code,Year\nFrance,FRA,1950\n";
        assert!(matches!(
            parse_population_csv(csv_text),
            Err(TableError::MissingColumn("Population"))
        ));
    }

    #[test]
    fn test_short_population_header_is_accepted() {
        let csv_text = "Entity,Year,Population\nFrance,1950,41829176\n";
        let records = parse_population_csv(csv_text).expect("short header parses");
        assert_eq!(records.len(), 1);
        assert!(records[0].code.is_none());
    }

    #[test]
    fn test_bad_year_reports_row_number() {
        let csv_text = "Entity,Year,Population\nFrance,1950,41829176\nJapan,nineteen,82802084\n";
        match parse_population_csv(csv_text) {
            Err(TableError::InvalidNumber { row, field, .. }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "Year");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_distinct_entities_keep_first_seen_order() {
        let records = sample_records();
        let entities = distinct_entities(&records);
        assert_eq!(entities.len(), 12);
        assert_eq!(entities[0], "Australia");
        assert_eq!(entities[2], "France");
        assert_eq!(entities.last().map(String::as_str), Some("Vietnam"));
    }

    #[test]
    fn test_join_drops_rows_without_coordinates() {
        let mut records = sample_records();
        let total = records.len();
        let cache = cache_for(&[("France", 46.6, 1.89)]);

        apply_coordinates(&mut records, &cache);
        let located = located_rows(&records);

        // Both France rows survive with the same coordinates; nothing else does.
        assert_eq!(located.len(), 2);
        assert!(located.len() < total);
        assert!(located.iter().all(|r| r.entity == "France"));
        assert_eq!(located[0].coordinate, located[1].coordinate);
    }

    #[test]
    fn test_join_with_empty_cache_drops_everything() {
        let mut records = sample_records();
        apply_coordinates(&mut records, &CoordinateCache::new());
        assert!(located_rows(&records).is_empty());
    }

    #[test]
    fn test_located_rows_are_a_subset_of_the_upload() {
        let mut records = sample_records();
        let cache = cache_for(&[("France", 46.6, 1.89), ("Japan", 36.57, 139.24)]);

        apply_coordinates(&mut records, &cache);
        let located = located_rows(&records);

        for row in &located {
            assert!(records
                .iter()
                .any(|r| r.entity == row.entity && r.year == row.year));
        }
        assert_eq!(located.len(), 4);
    }

    #[test]
    fn test_rows_for_year() {
        let records = sample_records();
        let year_1950 = rows_for_year(&records, 1950);
        assert_eq!(year_1950.len(), 12);
        assert!(year_1950.iter().all(|r| r.year == 1950));
        assert!(rows_for_year(&records, 1900).is_empty());
    }
}
