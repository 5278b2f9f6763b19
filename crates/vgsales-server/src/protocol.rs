//! Page payloads for the dashboard endpoints.
//!
//! Each page renders from one of these structures; they carry chart-ready
//! series rather than raw widgets, so any frontend can plot them directly.

use serde::Serialize;
use vgsales_core::{
    AggregateRow, AggregateSpec, AnovaResult, CleanReport, CorrelationMatrix, Dataset,
    Dimension, DistributionStats, FilterSpec, PageContext, RawRecord, SalesRecord, YearlySales,
    aggregate, labels,
};

/// Rows shown in the upload previews.
pub const PREVIEW_ROWS: usize = 5;

/// Home page: upload preview and cleaning overview.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetPage {
    /// Rows in the uploaded file.
    pub total_rows: usize,
    /// First rows exactly as uploaded.
    pub preview: Vec<RawRecord>,
    /// First rows after cleaning.
    pub cleaned_preview: Vec<SalesRecord>,
    /// Counts from the cleaning pass.
    pub report: CleanReport,
}

impl DatasetPage {
    pub fn from_context(ctx: &PageContext) -> Self {
        Self {
            total_rows: ctx.raw.len(),
            preview: ctx.raw.head(PREVIEW_ROWS).to_vec(),
            cleaned_preview: ctx.data.head(PREVIEW_ROWS).to_vec(),
            report: ctx.report,
        }
    }
}

/// Dataset Analytics page: the seven chart panel series.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsPage {
    /// Annual global sales, chronological.
    pub yearly_sales: Vec<AggregateRow>,
    /// Top 10 games by total global sales.
    pub top_games: Vec<AggregateRow>,
    /// Top 10 publishers by total global sales.
    pub top_publishers: Vec<AggregateRow>,
    /// Top 10 platforms by total global sales.
    pub top_platforms: Vec<AggregateRow>,
    /// Top 10 revenue generating games (same aggregation as `top_games`,
    /// kept as its own panel).
    pub top_revenue_games: Vec<AggregateRow>,
    /// Global sales per genre, alphabetical.
    pub genre_sales: Vec<AggregateRow>,
    /// Global sales per genre, ranked descending.
    pub genre_ranking: Vec<AggregateRow>,
}

impl AnalyticsPage {
    pub fn from_dataset(data: &Dataset) -> Self {
        let top = |dimension| aggregate(data, &AggregateSpec::new(dimension).sorted_desc().top_n(10));
        // Both genre views share one aggregation and differ only in order.
        let genre_sales = aggregate(data, &AggregateSpec::new(Dimension::Genre));
        let mut genre_ranking = genre_sales.clone();
        genre_ranking.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Self {
            yearly_sales: aggregate(data, &AggregateSpec::new(Dimension::Year)),
            top_games: top(Dimension::Name),
            top_publishers: top(Dimension::Publisher),
            top_platforms: top(Dimension::Platform),
            top_revenue_games: top(Dimension::Name),
            genre_sales,
            genre_ranking,
        }
    }
}

/// Picklists for the prediction form, in encoder order.
#[derive(Debug, Clone, Serialize)]
pub struct LabelsPage {
    pub platforms: &'static [&'static str],
    pub genres: &'static [&'static str],
    pub publishers: &'static [&'static str],
}

impl LabelsPage {
    pub fn current() -> Self {
        Self {
            platforms: labels::PLATFORMS.labels(),
            genres: labels::GENRES.labels(),
            publishers: labels::PUBLISHERS.labels(),
        }
    }
}

/// Sales Predictions page response.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionPage {
    /// Estimated global sales, millions of units.
    pub predicted_global_sales: f64,
    /// Historical overlay series, chronological; empty when nothing matched.
    pub history: Vec<YearlySales>,
    /// Set when there is no historical data to chart.
    pub history_message: Option<String>,
}

/// ANOVA result plus its fixed-threshold interpretation.
#[derive(Debug, Clone, Serialize)]
pub struct AnovaReport {
    #[serde(flatten)]
    pub result: AnovaResult,
    pub significant: bool,
    pub interpretation: String,
}

impl AnovaReport {
    pub fn new(result: AnovaResult) -> Self {
        let significant = result.is_significant();
        let interpretation = if significant {
            format!(
                "The p-value is {:.4}, below 0.05: the differences in global sales across \
                 the selected platforms are statistically significant.",
                result.p_value
            )
        } else {
            format!(
                "The p-value is {:.4}, at or above 0.05: the differences in global sales \
                 across the selected platforms are not statistically significant and may \
                 be due to random variation.",
                result.p_value
            )
        };
        Self {
            result,
            significant,
            interpretation,
        }
    }
}

/// One platform's sales distribution, for the box plot panel.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformDistribution {
    pub platform: String,
    #[serde(flatten)]
    pub stats: DistributionStats,
}

/// Filtered Analytics page response.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredPage {
    /// The filter that produced this view.
    pub filter: FilterSpec,
    /// Number of matching rows.
    pub row_count: usize,
    /// The matching rows, original order.
    pub rows: Vec<SalesRecord>,
    /// ANOVA across platforms, when it could run.
    pub anova: Option<AnovaReport>,
    /// Guidance when it could not.
    pub anova_message: Option<String>,
    /// Correlation heatmap data, when the filtered set is non-empty.
    pub correlation: Option<CorrelationMatrix>,
    /// Message when it is not.
    pub correlation_message: Option<String>,
    /// Per-platform distribution summaries.
    pub distribution: Vec<PlatformDistribution>,
}
