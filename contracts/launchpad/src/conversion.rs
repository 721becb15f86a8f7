/// Offering-token allocation for a recorded contribution
///
/// Formula: tokens = contribution × sto_price / base_price, rescaled from
/// the funding token's decimals to the offering token's decimals.
///
/// Every division truncates toward zero. Returns `None` on overflow.
///
/// Example:
/// - contribution: 10,000 (6-decimal funding units)
/// - sto_price / base_price = 10
/// - offering token: 18 decimals
/// - tokens: 10,000 × 10 × 10^12 = 100,000 (18-decimal offering units)
pub fn claimable_tokens(
    contribution: i128,
    sto_price: i128,
    base_price: i128,
    base_decimals: u32,
    sto_decimals: u32,
) -> Option<i128> {
    let value = contribution
        .checked_mul(sto_price)?
        .checked_div(base_price)?;

    if sto_decimals >= base_decimals {
        value.checked_mul(pow10(sto_decimals - base_decimals)?)
    } else {
        value.checked_div(pow10(base_decimals - sto_decimals)?)
    }
}

fn pow10(exp: u32) -> Option<i128> {
    10i128.checked_pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E6: i128 = 1_000_000;
    const E18: i128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_upscale_6_to_18() {
        // 10,000 USDC at price ratio 10 -> 100,000 offering tokens
        let tokens = claimable_tokens(10_000 * E6, 10 * E18, E18, 6, 18).unwrap();
        assert_eq!(tokens, 100_000 * E18);
    }

    #[test]
    fn test_equal_decimals() {
        let tokens = claimable_tokens(10_000 * E6, 10 * E6, E6, 6, 6).unwrap();
        assert_eq!(tokens, 100_000 * E6);
    }

    #[test]
    fn test_downscale_18_to_6_truncates() {
        // 1.5 units at 18 decimals, ratio 1 -> 1.5 units at 6 decimals
        let tokens = claimable_tokens(E18 + E18 / 2, E6, E6, 18, 6).unwrap();
        assert_eq!(tokens, E6 + E6 / 2);

        // A sub-6-decimal remainder is dropped
        let tokens = claimable_tokens(E18 + 1, E6, E6, 18, 6).unwrap();
        assert_eq!(tokens, E6);
    }

    #[test]
    fn test_non_exact_ratio_truncates_toward_zero() {
        // ratio 1/3: 100 / 3 = 33, remainder dropped
        let tokens = claimable_tokens(100, 1, 3, 0, 0).unwrap();
        assert_eq!(tokens, 33);
    }

    #[test]
    fn test_overflow_returns_none() {
        assert_eq!(claimable_tokens(i128::MAX, 2, 1, 0, 0), None);
        assert_eq!(claimable_tokens(i128::MAX / 2, 1, 1, 0, 38), None);
    }
}
