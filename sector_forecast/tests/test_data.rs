use sector_forecast::{DataLoader, ForecastError, TimePoint};
use std::io::Write;
use tempfile::NamedTempFile;

fn agency_export() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();

    writeln!(file, "\"Gross domestic product (GDP) at basic prices, by industry, monthly\"").unwrap();
    writeln!(file, "\"Frequency: Monthly\"").unwrap();
    writeln!(file, "\"Geography\",\"Canada\"").unwrap();
    writeln!(
        file,
        "\"North American Industry Classification System (NAICS)\",\"December 2019\",\"January 2020\",\"February 2020\",\"March 2020\""
    )
    .unwrap();
    writeln!(file, "\"\",\"Chained (2012) dollars\",\"\",\"\",\"\"").unwrap();
    writeln!(file, "\"Crop and animal production [111-112]\",\"2,001\",\"2,010\",\"2,020\",\"1,990\"").unwrap();
    writeln!(file, "\"Mining [21]\",\"4,500\",\"4,520\",\"4,540\",\"4,100\"").unwrap();
    writeln!(file, "\"Finance and insurance [52]\",\"..\",\"7,000\",\"7,100\",\"7,200\"").unwrap();
    writeln!(file, "\"Construction [23]\",\"6,000\",\"6,100\",\"6,200\",\"5,000\",\"\"").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "\"Symbol legend:\"").unwrap();
    writeln!(file, "\"..\",\"not available for a specific reference period\"").unwrap();

    file
}

#[test]
fn test_load_agency_export() {
    let file = agency_export();
    let table = DataLoader::from_csv(file.path()).unwrap();

    // the ".." row is skipped
    assert_eq!(table.len(), 3);
    assert!(table.get("Finance and insurance [52]").is_none());

    let mining = table.get("Mining [21]").unwrap();
    assert_eq!(mining.values(), vec![4500.0, 4520.0, 4540.0, 4100.0]);
    assert_eq!(mining.first(), Some(TimePoint::new(2019, 12).unwrap()));
    assert_eq!(mining.last(), Some(TimePoint::new(2020, 3).unwrap()));

    assert_eq!(
        table.get("Construction [23]").unwrap().values(),
        vec![6000.0, 6100.0, 6200.0, 5000.0]
    );
    assert!(table.check_aligned().is_ok());
}

#[test]
fn test_from_rows_grid() {
    let rows: Vec<Vec<String>> = vec![
        vec!["Industry", "November 2020", "December 2020", "January 2021"],
        vec!["Utilities [22]", "10", "11", "12.5"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect();

    let table = DataLoader::from_rows(&rows).unwrap();
    let series = table.get("Utilities [22]").unwrap();
    assert_eq!(series.values(), vec![10.0, 11.0, 12.5]);
    assert_eq!(series.last(), Some(TimePoint::new(2021, 1).unwrap()));
}

#[test]
fn test_no_month_header() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,value").unwrap();
    writeln!(file, "2020-01-01,3").unwrap();

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::InputShape(_))));
}

#[test]
fn test_gap_in_header_rejected() {
    let rows: Vec<Vec<String>> = vec![
        vec!["Industry", "January 2020", "March 2020"],
        vec!["Utilities [22]", "10", "11"],
    ]
    .into_iter()
    .map(|row| row.into_iter().map(String::from).collect())
    .collect();

    assert!(matches!(
        DataLoader::from_rows(&rows),
        Err(ForecastError::InputShape(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = DataLoader::from_csv("nonexistent_table.csv");
    assert!(matches!(result, Err(ForecastError::Io(_))));
}
