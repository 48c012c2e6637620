//! The `select` subcommand: run one window and print the chosen portfolio.

use anyhow::Result;
use cadiz_engine::Selection;

use crate::data;
use crate::WindowArgs;

pub(crate) async fn run(window: &WindowArgs) -> Result<()> {
    let Some(selection) = data::run_window(window).await? else {
        println!("No portfolio produced for this window (see log for the tripped guard).");
        return Ok(());
    };

    if window.format == "json" {
        println!("{}", serde_json::to_string_pretty(&selection)?);
        return Ok(());
    }

    print_selection(&selection);
    Ok(())
}

pub(crate) fn print_selection(selection: &Selection) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Portfolio Selection                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Rebalance date: {}", selection.rebalance_date);
    println!("Names:          {}", selection.symbols.len());
    println!("Weight sum:     {:.6}", selection.weight_sum());
    println!();

    println!("{:<10} {:>10}", "Symbol", "Weight");
    println!("{}", "-".repeat(21));
    for symbol in &selection.symbols {
        if let Some(weight) = selection.weights.get(symbol) {
            println!("{symbol:<10} {:>9.4}%", weight * 100.0);
        }
    }
    println!();
}
