//! HTTP routes for the dashboard server.
//!
//! Every handler is one page render: it reloads the dataset from disk into
//! a fresh [`PageContext`], produces the page payload, and drops the
//! context. Handlers block on file IO; each render is a single synchronous
//! pass, which is all a single-user local tool needs.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    response::Html,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use vgsales_core::{
    DataPaths, FilterSpec, PageContext, PredictionInput, RegressionModel, SalesColumn, filter,
    labels, predict, stats, store,
};

use crate::error::{ServerError, ServerResult};
use crate::protocol::{
    AnalyticsPage, AnovaReport, DatasetPage, FilteredPage, LabelsPage, PlatformDistribution,
    PredictionPage,
};

/// Application state shared across handlers: only the file locations.
/// Handlers hold no dataset state between requests.
pub struct AppState {
    /// Data directory layout.
    pub paths: DataPaths,
}

/// Create the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/dataset", get(dataset_handler).post(upload_handler))
        .route("/api/analytics", get(analytics_handler))
        .route("/api/labels", get(labels_handler))
        .route("/api/predict", post(predict_handler))
        .route("/api/filtered", post(filtered_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Load the page context or halt the render with the upload prompt.
fn load_context(state: &AppState) -> ServerResult<PageContext> {
    PageContext::load(&state.paths)?.ok_or(ServerError::DatasetMissing)
}

/// Index page listing the dashboard surface.
async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Video Game Sales Dashboard</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 2rem; }
        h1 { color: #2563eb; }
        code { background: #f3f4f6; padding: 0.1rem 0.3rem; border-radius: 0.25rem; }
    </style>
</head>
<body>
    <h1>Video Game Sales Dashboard</h1>
    <p>Pages:</p>
    <ul>
        <li><code>GET /api/dataset</code> - Home: upload preview and cleaning overview</li>
        <li><code>POST /api/dataset</code> - Upload the dataset CSV (request body)</li>
        <li><code>GET /api/analytics</code> - Dataset Analytics: the seven chart panels</li>
        <li><code>GET /api/labels</code> - Picklists for the prediction form</li>
        <li><code>POST /api/predict</code> - Sales Predictions: estimate + historical overlay</li>
        <li><code>POST /api/filtered</code> - Filtered Analytics: filters + ANOVA + heatmap</li>
        <li><code>GET /health</code> - Health check</li>
    </ul>
</body>
</html>"#,
    )
}

/// Health check handler.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Home page: preview of the cached dataset.
async fn dataset_handler(State(state): State<Arc<AppState>>) -> ServerResult<Json<DatasetPage>> {
    let ctx = load_context(&state)?;
    Ok(Json(DatasetPage::from_context(&ctx)))
}

/// Upload the dataset. The body is the CSV file; it is validated by
/// parsing, then persisted verbatim to the cache path.
async fn upload_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ServerResult<Json<DatasetPage>> {
    state.paths.ensure_exists()?;
    store::save_upload(&state.paths.dataset_path(), &body)?;
    let ctx = load_context(&state)?;
    Ok(Json(DatasetPage::from_context(&ctx)))
}

/// Dataset Analytics page: all seven panel series.
async fn analytics_handler(
    State(state): State<Arc<AppState>>,
) -> ServerResult<Json<AnalyticsPage>> {
    let ctx = load_context(&state)?;
    Ok(Json(AnalyticsPage::from_dataset(&ctx.data)))
}

/// Picklists for the prediction form.
async fn labels_handler() -> Json<LabelsPage> {
    Json(LabelsPage::current())
}

/// Reject labels outside the encoder tables before they reach the
/// prediction adapter, where an unknown label is an invariant violation.
fn validate_labels(input: &PredictionInput) -> ServerResult<()> {
    for (column, map, label) in [
        ("platform", &labels::PLATFORMS, &input.platform),
        ("genre", &labels::GENRES, &input.genre),
        ("publisher", &labels::PUBLISHERS, &input.publisher),
    ] {
        if map.code(label).is_none() {
            return Err(ServerError::UnknownLabel {
                column,
                label: label.clone(),
            });
        }
    }
    Ok(())
}

/// Sales Predictions page.
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    Json(input): Json<PredictionInput>,
) -> ServerResult<Json<PredictionPage>> {
    validate_labels(&input)?;

    let ctx = load_context(&state)?;
    let model = RegressionModel::load(&state.paths.model_path())?;
    let outcome = predict::predict(&model, &input, &ctx.raw);

    let history_message = outcome
        .history
        .is_empty()
        .then(|| "No historical data available for the selected combination.".to_string());

    Ok(Json(PredictionPage {
        predicted_global_sales: outcome.predicted_global_sales,
        history: outcome.history,
        history_message,
    }))
}

/// Filtered Analytics page: filter, ANOVA, correlation heatmap, box plot
/// summaries.
async fn filtered_handler(
    State(state): State<Arc<AppState>>,
    Json(spec): Json<FilterSpec>,
) -> ServerResult<Json<FilteredPage>> {
    let ctx = load_context(&state)?;
    let filtered = filter::apply(&ctx.data, &spec);

    // ANOVA runs only when the user selected at least two platforms; the
    // statistics module re-validates against the groups actually present.
    let (anova, anova_message) = if spec.platforms.len() >= 2 {
        match stats::anova(&filtered, SalesColumn::GlobalSales) {
            Ok(result) => (Some(AnovaReport::new(result)), None),
            Err(e) => (None, Some(e.to_string())),
        }
    } else {
        (
            None,
            Some("Select at least two platforms to run the ANOVA test.".to_string()),
        )
    };

    let (correlation, correlation_message) = if filtered.is_empty() {
        (
            None,
            Some("No rows match the selected filters.".to_string()),
        )
    } else {
        (
            Some(stats::correlation(&filtered, &SalesColumn::ALL)?),
            None,
        )
    };

    let distribution = stats::distribution_by_platform(&filtered, SalesColumn::GlobalSales)
        .into_iter()
        .map(|(platform, stats)| PlatformDistribution { platform, stats })
        .collect();

    Ok(Json(FilteredPage {
        row_count: filtered.len(),
        rows: filtered.records().to_vec(),
        filter: spec,
        anova,
        anova_message,
        correlation,
        correlation_message,
        distribution,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_json() {
        let health = serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION")
        });
        assert_eq!(health["status"], "ok");
    }

    #[test]
    fn test_validate_labels_accepts_picklist_values() {
        let input = PredictionInput {
            rank: 1,
            platform: "Wii".to_string(),
            year: 2010,
            genre: "Sports".to_string(),
            publisher: "Nintendo".to_string(),
            na_sales: 0.0,
            eu_sales: 0.0,
            jp_sales: 0.0,
            other_sales: 0.0,
        };
        assert!(validate_labels(&input).is_ok());

        let bad = PredictionInput {
            platform: "Dreamcast 2".to_string(),
            ..input
        };
        assert!(matches!(
            validate_labels(&bad),
            Err(ServerError::UnknownLabel { column: "platform", .. })
        ));
    }
}
