use alloy::primitives::U256;

use crate::constants::CELO_DECIMALS;

/// Fixed-point rendering of a base-unit amount, trailing zeros trimmed.
///
/// Decimals whose power of ten does not fit a `U256` render the raw integer.
pub fn format_units(amount: U256, decimals: u32) -> String {
    let Some(base) = U256::from(10u64).checked_pow(U256::from(decimals)) else {
        return amount.to_string();
    };
    let whole = amount / base;
    let frac = amount % base;
    if frac.is_zero() {
        return format!("{whole}");
    }
    let digits = frac.to_string();
    let mut frac_str = "0".repeat((decimals as usize).saturating_sub(digits.len()));
    frac_str.push_str(&digits);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

pub fn format_celo(wei: U256) -> String {
    format!("{} CELO", format_units(wei, CELO_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_have_no_fraction() {
        assert_eq!(format_units(U256::from(3_000_000u64), 6), "3");
        assert_eq!(format_units(U256::ZERO, 18), "0");
    }

    #[test]
    fn fraction_keeps_leading_zeros() {
        assert_eq!(format_units(U256::from(1_000_500u64), 6), "1.0005");
        assert_eq!(format_units(U256::from(1u64), 18), "0.000000000000000001");
    }

    #[test]
    fn celo_amounts() {
        let wei = U256::from(123_456_789_000_000_000_000u128);
        assert_eq!(format_celo(wei), "123.456789 CELO");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(format_units(U256::from(42u64), 0), "42");
    }

    #[test]
    fn oversized_decimals_render_raw_amount() {
        assert_eq!(format_units(U256::from(5u64), 78), "5");
        assert_eq!(format_units(U256::from(5u64), 256), "5");
        assert_eq!(format_units(U256::MAX, u32::MAX), U256::MAX.to_string());
        let one = format_units(U256::from(1u64), 77);
        assert_eq!(one, format!("0.{}1", "0".repeat(76)));
    }
}
