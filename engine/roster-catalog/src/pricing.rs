//! Deterministic player pricing
//!
//! Prices are derived from the roster feed, never quoted by it: a base by
//! position, a bump for first-string players, a bump for veterans, clamped
//! and rounded to one decimal. Re-pricing the same feed record always yields
//! the same price.

use crate::types::Position;
use rust_decimal::Decimal;

/// Price floor, in budget units
pub fn min_price() -> Decimal {
    Decimal::new(40, 1) // 4.0
}

/// Price ceiling, in budget units
pub fn max_price() -> Decimal {
    Decimal::new(130, 1) // 13.0
}

/// Base price by position
pub fn base_price(position: Position) -> Decimal {
    match position {
        Position::QB => Decimal::new(65, 1),  // 6.5
        Position::RB => Decimal::new(55, 1),  // 5.5
        Position::WR => Decimal::new(50, 1),  // 5.0
        Position::TE => Decimal::new(45, 1),  // 4.5
        Position::K => Decimal::new(40, 1),   // 4.0
        Position::DST => Decimal::new(45, 1), // 4.5
    }
}

/// Derive a player's price from feed attributes.
///
/// +2.0 for the top of the depth chart, +0.7 for five or more years of
/// experience, clamped to [4.0, 13.0] and rounded to one decimal.
pub fn price_for(
    position: Position,
    depth_chart_order: Option<u32>,
    years_experience: u32,
) -> Decimal {
    let mut price = base_price(position);

    if depth_chart_order == Some(1) {
        price += Decimal::new(20, 1); // +2.0
    }

    if years_experience >= 5 {
        price += Decimal::new(7, 1); // +0.7
    }

    price.clamp(min_price(), max_price()).round_dp(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_within_bounds() {
        for position in Position::ALL {
            for depth in [None, Some(1), Some(3)] {
                for exp in [0, 5, 12] {
                    let price = price_for(position, depth, exp);
                    assert!(price >= min_price());
                    assert!(price <= max_price());
                }
            }
        }
    }

    #[test]
    fn test_depth_chart_bump() {
        let backup = price_for(Position::QB, Some(2), 0);
        let starter = price_for(Position::QB, Some(1), 0);
        assert_eq!(starter - backup, Decimal::new(20, 1));
    }

    #[test]
    fn test_veteran_bump() {
        let rookie = price_for(Position::WR, None, 0);
        let veteran = price_for(Position::WR, None, 5);
        assert_eq!(veteran - rookie, Decimal::new(7, 1));
    }

    #[test]
    fn test_floor_binds_for_cheapest_player() {
        assert_eq!(price_for(Position::K, None, 0), min_price());
    }

    #[test]
    fn test_fully_bumped_quarterback() {
        // 6.5 + 2.0 + 0.7
        assert_eq!(price_for(Position::QB, Some(1), 10), Decimal::new(92, 1));
    }

    #[test]
    fn test_pricing_is_deterministic() {
        let a = price_for(Position::TE, Some(1), 7);
        let b = price_for(Position::TE, Some(1), 7);
        assert_eq!(a, b);
    }
}
