//! The `backtest` subcommand: selection plus forward performance.

use anyhow::Result;
use cadiz_backtest::PerformanceSummary;
use serde_json::json;

use crate::cmd::select::print_selection;
use crate::data;
use crate::WindowArgs;

pub(crate) async fn run(window: &WindowArgs) -> Result<()> {
    let Some(selection) = data::run_window(window).await? else {
        println!("No portfolio produced for this window (see log for the tripped guard).");
        return Ok(());
    };

    let summary = PerformanceSummary::from_daily(&selection.daily_returns);

    if window.format == "json" {
        let out = json!({
            "selection": selection,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_selection(&selection);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("FORWARD PERFORMANCE ({} trading days)", summary.n_days);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("Total return:          {:>8.2}%", summary.total_return * 100.0);
    println!("CAGR:                  {:>8.2}%", summary.cagr * 100.0);
    println!(
        "Annualized volatility: {:>8.2}%",
        summary.annualized_volatility * 100.0
    );
    println!("Sharpe ratio:          {:>8.2}", summary.sharpe_ratio);
    println!("Max drawdown:          {:>8.2}%", summary.max_drawdown * 100.0);
    println!();

    if let Some((last_date, _)) = selection.daily_returns.last() {
        let tail: Vec<_> = selection
            .daily_returns
            .iter()
            .rev()
            .take(5)
            .rev()
            .collect();
        println!("Last {} daily returns (through {last_date}):", tail.len());
        for (date, ret) in tail {
            println!("  {date}  {:>8.4}%", ret * 100.0);
        }
        println!();
    }

    Ok(())
}
