//! The selection result surface.

use std::collections::BTreeMap;

use cadiz_traits::{Date, Symbol};
use serde::{Deserialize, Serialize};

/// One completed portfolio selection with its forward simulation.
///
/// Produced by [`crate::SelectionEngine::run`]; immutable once built.
/// `symbols` preserves the Sharpe-rank order the names were selected in,
/// while `weights` carries the same names keyed for lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// The single day the portfolio was constructed on.
    pub rebalance_date: Date,
    /// Selected symbols in screening order.
    pub symbols: Vec<Symbol>,
    /// Target weight per selected symbol.
    pub weights: BTreeMap<Symbol, f64>,
    /// Simulated daily portfolio returns for days strictly after the
    /// rebalance date, up to the window end.
    pub daily_returns: Vec<(Date, f64)>,
}

impl Selection {
    /// Sum of the target weights.
    pub fn weight_sum(&self) -> f64 {
        self.weights.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_sum() {
        let mut weights = BTreeMap::new();
        weights.insert("A".to_string(), 0.6);
        weights.insert("B".to_string(), 0.4);

        let selection = Selection {
            rebalance_date: Date::from_ymd_opt(2024, 1, 31).unwrap(),
            symbols: vec!["A".to_string(), "B".to_string()],
            weights,
            daily_returns: Vec::new(),
        };
        assert!((selection.weight_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut weights = BTreeMap::new();
        weights.insert("A".to_string(), 1.0);

        let selection = Selection {
            rebalance_date: Date::from_ymd_opt(2024, 1, 31).unwrap(),
            symbols: vec!["A".to_string()],
            weights,
            daily_returns: vec![(Date::from_ymd_opt(2024, 2, 1).unwrap(), 0.01)],
        };

        let json = serde_json::to_string(&selection).unwrap();
        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back.symbols, selection.symbols);
        assert_eq!(back.daily_returns.len(), 1);
    }
}
