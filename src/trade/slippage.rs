//! Minimum-output bound from a quote and a slippage tolerance.

use ethers::types::U256;

/// Basis points in one whole.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Minimum acceptable output for `quote_output` at `tolerance_bps`.
///
/// Exactly `quote_output - floor(quote_output * bps / 10_000)`, computed
/// without intermediate overflow by splitting the quotient:
/// `q * bps + floor(r * bps / 10_000)` for `quote_output = q * 10_000 + r`.
/// Tolerances at or above 100% degrade protection to a zero bound, which is
/// deliberate; a validation layer above constrains the practical range.
pub fn min_output(quote_output: U256, tolerance_bps: u32) -> U256 {
    let bps = U256::from((tolerance_bps as u64).min(BPS_DENOMINATOR));
    let denom = U256::from(BPS_DENOMINATOR);
    let deduction = (quote_output / denom) * bps + ((quote_output % denom) * bps) / denom;
    quote_output - deduction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_percent_of_thousand() {
        assert_eq!(min_output(U256::from(1000u64), 100), U256::from(990u64));
    }

    #[test]
    fn zero_tolerance_is_identity() {
        for out in [0u64, 1, 999, 10_000, u64::MAX] {
            assert_eq!(min_output(U256::from(out), 0), U256::from(out));
        }
    }

    #[test]
    fn never_exceeds_quote() {
        for out in [0u64, 1, 7, 9_999, 10_001, u64::MAX] {
            for bps in [0u32, 1, 50, 100, 9_999, 10_000, 20_000] {
                assert!(min_output(U256::from(out), bps) <= U256::from(out));
            }
        }
    }

    #[test]
    fn monotonically_non_increasing_in_tolerance() {
        let out = U256::from(123_456_789u64);
        let mut last = min_output(out, 0);
        for bps in 1..=100u32 {
            let next = min_output(out, bps * 100);
            assert!(next <= last);
            last = next;
        }
    }

    #[test]
    fn full_tolerance_and_beyond_is_zero() {
        assert_eq!(min_output(U256::from(1000u64), 10_000), U256::zero());
        assert_eq!(min_output(U256::from(1000u64), 25_000), U256::zero());
    }

    #[test]
    fn matches_floor_division_on_huge_values() {
        // larger than u128, exercises the overflow-free split
        let out = U256::from_dec_str("340282366920938463463374607431768211456000").unwrap();
        let bound = min_output(out, 37);
        let expected = out - (out * U256::from(37u64)) / U256::from(10_000u64);
        assert_eq!(bound, expected);
    }
}
