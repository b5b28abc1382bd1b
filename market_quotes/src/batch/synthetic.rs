//! Placeholder records for symbols with no live data.
//!
//! The distribution is arbitrary: a whole-number price in `[100, 999]` and a
//! whole-number change in `[-10, 9]`. It is not calibrated to any market and
//! only exists so the dashboard can render a card.

use rand::Rng;

use crate::{
    models::stock_record::{StockRecord, Tier},
    reference,
};

/// Builds a synthetic record for `symbol`.
///
/// `change_percent` is always derived as `change / price * 100` and
/// `prev_close` as `price - change`, so the record is internally consistent.
/// Observation time and reference values are left empty.
pub fn synthesize<R: Rng>(symbol: &str, rng: &mut R) -> StockRecord {
    let price = rng.random_range(100..1000) as f64;
    let change = rng.random_range(-10..10) as f64;

    StockRecord {
        symbol: symbol.to_string(),
        company_name: reference::display_name_or_symbol(symbol),
        price,
        change,
        change_percent: change / price * 100.0,
        high_day: price + rng.random_range(0..20) as f64,
        low_day: price - rng.random_range(0..20) as f64,
        open_price: price - rng.random_range(0..10) as f64,
        prev_close: price - change,
        update_time: None,
        all_time_high: None,
        source: Tier::Synthetic,
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn values_stay_in_range_and_are_consistent() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let record = synthesize("AAPL", &mut rng);

            assert!((100.0..1000.0).contains(&record.price));
            assert!((-10.0..10.0).contains(&record.change));
            assert!((record.change_percent - record.change / record.price * 100.0).abs() < 1e-9);
            assert!(record.low_day <= record.price && record.price <= record.high_day);
            assert!(record.open_price <= record.price);
            assert_eq!(record.prev_close, record.price - record.change);
        }
    }

    #[test]
    fn carries_names_but_no_reference_fields() {
        let mut rng = StdRng::seed_from_u64(1);

        let known = synthesize("TSLA", &mut rng);
        assert_eq!(known.company_name, "Tesla Inc.");
        assert_eq!(known.source, Tier::Synthetic);
        assert_eq!(known.update_time, None);
        assert_eq!(known.all_time_high, None);

        let unknown = synthesize("ZZZZ", &mut rng);
        assert_eq!(unknown.company_name, "ZZZZ");
    }
}
