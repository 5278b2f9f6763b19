//! Predict command implementation.
//!
//! Headless Sales Prediction: validates the labels against the encoder
//! tables (the CLI takes free text where the dashboard form offers
//! picklists), runs the model, and prints the historical comparison.

use vgsales_core::{DataPaths, PageContext, PredictionInput, RegressionModel, labels, predict};

use crate::colors;

/// Predict global sales for one hypothetical title.
pub fn execute(data_dir: &str, input: PredictionInput) -> anyhow::Result<()> {
    // Free-text labels must be checked up front; inside the adapter an
    // unknown label is an invariant violation, not a user error.
    for (name, map, label) in [
        ("platform", &labels::PLATFORMS, &input.platform),
        ("genre", &labels::GENRES, &input.genre),
        ("publisher", &labels::PUBLISHERS, &input.publisher),
    ] {
        if map.code(label).is_none() {
            anyhow::bail!(
                "Unknown {name} {label:?}. Known values: {}",
                map.labels().join(", ")
            );
        }
    }

    let paths = DataPaths::new(data_dir);
    let Some(ctx) = PageContext::load(&paths)? else {
        anyhow::bail!(
            "Dataset not found at {}. Place the CSV there or upload it through the server.",
            paths.dataset_path().display()
        );
    };
    let model = RegressionModel::load(&paths.model_path())?;

    let outcome = predict::predict(&model, &input, &ctx.raw);

    println!(
        "\n{}Sales Prediction{} - {}, {}, {}",
        colors::BOLD,
        colors::RESET,
        input.platform,
        input.genre,
        input.publisher
    );
    println!("{}", "─".repeat(50));
    println!(
        "{}Predicted global sales:{} {:.2} million units",
        colors::GREEN,
        colors::RESET,
        outcome.predicted_global_sales
    );

    if outcome.history.is_empty() {
        println!(
            "{}No historical data available for the selected combination.{}",
            colors::YELLOW,
            colors::RESET
        );
    } else {
        println!("\n{}Historical global sales:{}", colors::BOLD, colors::RESET);
        for point in &outcome.history {
            println!("  {}  {:>8.2}", point.year, point.global_sales);
        }
    }

    Ok(())
}
