//! Summary command implementation.
//!
//! Renders the Dataset Analytics page as text tables: the same aggregation
//! passes the server exposes, printed headlessly.

use vgsales_core::{AggregateRow, AggregateSpec, DataPaths, Dimension, PageContext, aggregate};

use crate::colors;

/// Print the dataset analytics.
pub fn execute(data_dir: &str) -> anyhow::Result<()> {
    let paths = DataPaths::new(data_dir);
    let Some(ctx) = PageContext::load(&paths)? else {
        anyhow::bail!(
            "Dataset not found at {}. Place the CSV there or upload it through the server.",
            paths.dataset_path().display()
        );
    };

    println!(
        "\n{}Dataset Analytics{} - {}",
        colors::BOLD,
        colors::RESET,
        paths.dataset_path().display()
    );
    println!("{}", "─".repeat(50));
    println!(
        "{} rows uploaded, {} kept after cleaning ({} missing year, {} missing sales)",
        ctx.report.input_rows,
        ctx.report.kept_rows,
        ctx.report.dropped_missing_year,
        ctx.report.dropped_missing_sales
    );

    let top = |dimension| aggregate(&ctx.data, &AggregateSpec::new(dimension).sorted_desc().top_n(10));

    print_panel(
        "Yearly global sales",
        &aggregate(&ctx.data, &AggregateSpec::new(Dimension::Year)),
    );
    print_panel("Top 10 games", &top(Dimension::Name));
    print_panel("Top 10 publishers", &top(Dimension::Publisher));
    print_panel("Top 10 platforms", &top(Dimension::Platform));
    print_panel(
        "Sales by genre",
        &aggregate(&ctx.data, &AggregateSpec::new(Dimension::Genre).sorted_desc()),
    );

    Ok(())
}

fn print_panel(title: &str, rows: &[AggregateRow]) {
    println!("\n{}{title}:{}", colors::BOLD, colors::RESET);
    if rows.is_empty() {
        println!("{}  (no data){}", colors::DIM, colors::RESET);
        return;
    }
    for row in rows {
        println!("  {:>10.2}  {}", row.value, row.key);
    }
}
