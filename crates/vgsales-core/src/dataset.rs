//! Dataset types.
//!
//! Two representations exist side by side:
//!
//! - [`RawDataset`]: the verbatim parse of the cached CSV, every field kept
//!   as a string. Used for the upload preview and for the prediction page's
//!   historical comparison, which runs on the uncleaned file.
//! - [`Dataset`]: the cleaned, fully typed rows produced by
//!   [`crate::preprocess::clean`], consumed by aggregation, filtering and
//!   statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column headers the dataset CSV must provide. Extra columns (including the
/// "Unnamed: N" index artifacts some exports carry) are dropped at parse.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Rank",
    "Name",
    "Platform",
    "Year",
    "Genre",
    "Publisher",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

/// One row of the dataset exactly as uploaded, all fields unparsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "NA_Sales")]
    pub na_sales: String,
    #[serde(rename = "EU_Sales")]
    pub eu_sales: String,
    #[serde(rename = "JP_Sales")]
    pub jp_sales: String,
    #[serde(rename = "Other_Sales")]
    pub other_sales: String,
    #[serde(rename = "Global_Sales")]
    pub global_sales: String,
}

/// The verbatim parse of the cached CSV, row order preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    records: Vec<RawRecord>,
}

impl RawDataset {
    /// Parse CSV bytes into raw records.
    ///
    /// Validates that every required column is present before reading rows;
    /// unknown columns are ignored.
    ///
    /// # Errors
    /// Returns [`Error::MissingColumn`] when a required header is absent and
    /// [`Error::Csv`] when a row cannot be read at all.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(bytes);

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: RawRecord = row?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Build a raw dataset from already-parsed records.
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// All rows in upload order.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    /// The first `n` rows, fewer if the dataset is shorter.
    pub fn head(&self, n: usize) -> &[RawRecord] {
        &self.records[..self.records.len().min(n)]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One cleaned dataset row.
///
/// `global_sales` is the figure reported by the source data; it is passed
/// through untouched and never recomputed from the regional columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Source ranking. Unparseable ranks are carried as missing; a bad rank
    /// never drops a row.
    pub rank: Option<u32>,
    /// Game title.
    pub name: String,
    /// Platform code, e.g. "Wii" or "PS2".
    pub platform: String,
    /// Release year.
    pub year: i32,
    /// Genre label.
    pub genre: String,
    /// Publisher name.
    pub publisher: String,
    /// North America sales, millions of units.
    pub na_sales: f64,
    /// Europe sales, millions of units.
    pub eu_sales: f64,
    /// Japan sales, millions of units.
    pub jp_sales: f64,
    /// Rest-of-world sales, millions of units.
    pub other_sales: f64,
    /// Worldwide sales as reported, millions of units.
    pub global_sales: f64,
}

/// An ordered sequence of cleaned rows.
///
/// Rows are keyed implicitly by position; a title may appear once per
/// platform, so there is no uniqueness constraint on name/platform.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Wrap cleaned records, preserving their order.
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// All rows in original order.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// The first `n` rows, fewer if the dataset is shorter.
    pub fn head(&self, n: usize) -> &[SalesRecord] {
        &self.records[..self.records.len().min(n)]
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The five sales metrics of a [`SalesRecord`].
///
/// Shared by the aggregation engine (metric selection) and the statistics
/// module (correlation columns). Serializes as the CSV header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesColumn {
    #[serde(rename = "NA_Sales")]
    NaSales,
    #[serde(rename = "EU_Sales")]
    EuSales,
    #[serde(rename = "JP_Sales")]
    JpSales,
    #[serde(rename = "Other_Sales")]
    OtherSales,
    #[serde(rename = "Global_Sales")]
    GlobalSales,
}

impl SalesColumn {
    /// The four regional columns plus the global column, in CSV order.
    pub const ALL: [SalesColumn; 5] = [
        SalesColumn::NaSales,
        SalesColumn::EuSales,
        SalesColumn::JpSales,
        SalesColumn::OtherSales,
        SalesColumn::GlobalSales,
    ];

    /// Read this metric from a record.
    pub fn value(self, record: &SalesRecord) -> f64 {
        match self {
            SalesColumn::NaSales => record.na_sales,
            SalesColumn::EuSales => record.eu_sales,
            SalesColumn::JpSales => record.jp_sales,
            SalesColumn::OtherSales => record.other_sales,
            SalesColumn::GlobalSales => record.global_sales,
        }
    }

    /// The CSV header name of this column.
    pub fn label(self) -> &'static str {
        match self {
            SalesColumn::NaSales => "NA_Sales",
            SalesColumn::EuSales => "EU_Sales",
            SalesColumn::JpSales => "JP_Sales",
            SalesColumn::OtherSales => "Other_Sales",
            SalesColumn::GlobalSales => "Global_Sales",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24
";

    #[test]
    fn test_parse_sample() {
        let raw = RawDataset::parse(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.records()[0].name, "Wii Sports");
        assert_eq!(raw.records()[1].year, "1985");
    }

    #[test]
    fn test_parse_ignores_unnamed_columns() {
        let csv = "\
Unnamed: 0,Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
0,1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
";
        let raw = RawDataset::parse(csv.as_bytes()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.records()[0].rank, "1");
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let csv = "Rank,Name,Platform\n1,Wii Sports,Wii\n";
        let err = RawDataset::parse(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(ref c) if c == "Year"));
    }

    #[test]
    fn test_head_clamps_to_len() {
        let raw = RawDataset::parse(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(raw.head(10).len(), 2);
        assert_eq!(raw.head(1).len(), 1);
    }

    #[test]
    fn test_sales_column_labels_match_headers() {
        for column in SalesColumn::ALL {
            assert!(REQUIRED_COLUMNS.contains(&column.label()));
        }
    }
}
