//! Statistics module.
//!
//! One-way ANOVA across platform groups, the Pearson correlation matrix
//! over the sales columns, and per-platform distribution summaries for the
//! box plot panel. All of it runs on a filtered dataset in memory.

use rustc_hash::FxHashMap;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::dataset::{Dataset, SalesColumn};
use crate::error::{Error, Result};

/// Fixed interpretation threshold: p below this means the group means
/// differ more than chance would explain.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// One row of the ANOVA table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnovaRow {
    /// Sum of squares.
    pub sum_sq: f64,
    /// Degrees of freedom.
    pub df: f64,
    /// Mean square (sum of squares over degrees of freedom).
    pub mean_sq: f64,
}

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnovaResult {
    /// The F-statistic (between-group over within-group mean square).
    pub f_statistic: f64,
    /// Probability of an F at least this large under the null hypothesis.
    pub p_value: f64,
    /// Between-groups table row.
    pub between: AnovaRow,
    /// Residual (within-groups) table row.
    pub residual: AnovaRow,
    /// Number of distinct groups compared.
    pub groups: usize,
    /// Total number of observations.
    pub observations: usize,
}

impl AnovaResult {
    /// Whether the difference among group means is statistically
    /// significant at the fixed threshold.
    pub fn is_significant(&self) -> bool {
        self.p_value < SIGNIFICANCE_LEVEL
    }
}

/// One-way ANOVA of a sales column across platform groups.
///
/// The caller is expected to enforce "at least two platforms selected"
/// before invoking this; the same condition is validated here and reported
/// as guidance-level errors, never a panic.
///
/// # Errors
/// [`Error::InsufficientGroups`] with fewer than two distinct platforms,
/// [`Error::InsufficientData`] when there are no residual degrees of
/// freedom (every group has a single observation).
pub fn anova(data: &Dataset, value: SalesColumn) -> Result<AnovaResult> {
    let mut groups: FxHashMap<&str, Vec<f64>> = FxHashMap::default();
    for record in data.records() {
        groups
            .entry(record.platform.as_str())
            .or_default()
            .push(value.value(record));
    }

    let k = groups.len();
    if k < 2 {
        return Err(Error::InsufficientGroups { found: k });
    }

    let n: usize = groups.values().map(Vec::len).sum();
    if n <= k {
        return Err(Error::InsufficientData);
    }

    let grand_mean = groups.values().flatten().sum::<f64>() / n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for values in groups.values() {
        let group_mean = values.iter().sum::<f64>() / values.len() as f64;
        ss_between += values.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += values.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    let df_between = (k - 1) as f64;
    let df_within = (n - k) as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;

    // Identical values within every group: the F-statistic degenerates and
    // any between-group difference is infinitely significant.
    let (f_statistic, p_value) = if ms_within == 0.0 {
        if ms_between == 0.0 {
            (f64::NAN, 1.0)
        } else {
            (f64::INFINITY, 0.0)
        }
    } else {
        let f = ms_between / ms_within;
        let dist = FisherSnedecor::new(df_between, df_within)
            .map_err(|e| Error::Statistics(e.to_string()))?;
        (f, dist.sf(f))
    };

    Ok(AnovaResult {
        f_statistic,
        p_value,
        between: AnovaRow {
            sum_sq: ss_between,
            df: df_between,
            mean_sq: ms_between,
        },
        residual: AnovaRow {
            sum_sq: ss_within,
            df: df_within,
            mean_sq: ms_within,
        },
        groups: k,
        observations: n,
    })
}

/// Pearson correlation matrix over sales columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Column order of the matrix axes.
    pub columns: Vec<SalesColumn>,
    /// Row-major coefficient matrix, symmetric with unit diagonal.
    pub values: Vec<Vec<f64>>,
}

/// Compute the Pearson correlation matrix for the given columns.
///
/// Entries involving a zero-variance column are reported as 0.0 so the
/// matrix stays inside [-1, 1]; the diagonal is 1.0 by definition.
///
/// # Errors
/// [`Error::EmptyDataset`] on an empty dataset; callers skip the heatmap
/// and report "no data" instead of charting NaNs.
pub fn correlation(data: &Dataset, columns: &[SalesColumn]) -> Result<CorrelationMatrix> {
    if data.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|c| data.records().iter().map(|r| c.value(r)).collect())
        .collect();

    let mut values = vec![vec![0.0; columns.len()]; columns.len()];
    for i in 0..columns.len() {
        values[i][i] = 1.0;
        for j in (i + 1)..columns.len() {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        cov += (a - mean_x) * (b - mean_y);
        var_x += (a - mean_x).powi(2);
        var_y += (b - mean_y).powi(2);
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (cov / denom).clamp(-1.0, 1.0)
}

/// Summary of one group's value distribution, the data behind a box plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionStats {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
}

impl DistributionStats {
    fn from_values(values: &[f64]) -> Self {
        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let std_dev = if count < 2 {
            0.0
        } else {
            let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0);
            var.sqrt()
        };

        Self {
            count,
            mean,
            median,
            std_dev,
            min: sorted[0],
            max: sorted[count - 1],
            sum,
        }
    }
}

/// Per-platform distribution of a sales column, platforms in first-seen
/// input order. Empty dataset yields an empty list.
pub fn distribution_by_platform(
    data: &Dataset,
    value: SalesColumn,
) -> Vec<(String, DistributionStats)> {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();

    for record in data.records() {
        match index.get(record.platform.as_str()) {
            Some(&at) => groups[at].1.push(value.value(record)),
            None => {
                index.insert(record.platform.clone(), groups.len());
                groups.push((record.platform.clone(), vec![value.value(record)]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(platform, values)| (platform, DistributionStats::from_values(&values)))
        .collect()
}
