use thiserror::Error;

const ETH_DECIMALS: u32 = 18;
const WEI_PER_ETH: u128 = 10u128.pow(ETH_DECIMALS);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    #[error("enter an amount")]
    Empty,

    #[error("invalid amount format")]
    Malformed,

    #[error("too many decimal places")]
    TooManyDecimals,

    #[error("amount overflow")]
    Overflow,
}

/// User-entered ETH amount ("0.1", "2", "1.") to wei.
pub fn parse_ether(value: &str) -> Result<u128, UnitsError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UnitsError::Empty);
    }

    let mut parts = value.split('.');
    let whole = parts.next().unwrap_or("0");
    let frac = parts.next();
    if parts.next().is_some() {
        return Err(UnitsError::Malformed);
    }
    // "." alone carries no digits; signs are not part of an amount
    if whole.is_empty() && frac.map_or(true, |f| f.is_empty()) {
        return Err(UnitsError::Malformed);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(UnitsError::Malformed);
    }

    let whole_val: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| UnitsError::Malformed)?
    };
    let mut amount = whole_val
        .checked_mul(WEI_PER_ETH)
        .ok_or(UnitsError::Overflow)?;

    if let Some(frac_str) = frac {
        if !frac_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(UnitsError::Malformed);
        }
        if frac_str.len() > ETH_DECIMALS as usize {
            return Err(UnitsError::TooManyDecimals);
        }
        let frac_val: u128 = if frac_str.is_empty() {
            0
        } else {
            frac_str.parse().map_err(|_| UnitsError::Malformed)?
        };
        let frac_scale = 10u128.pow(ETH_DECIMALS - frac_str.len() as u32);
        amount = amount
            .checked_add(frac_val * frac_scale)
            .ok_or(UnitsError::Overflow)?;
    }

    Ok(amount)
}

/// Wei back to a display ETH string, trailing zeros trimmed.
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETH;
    let frac = wei % WEI_PER_ETH;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:018}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_ether("1"), Ok(WEI_PER_ETH));
        assert_eq!(parse_ether("0.1"), Ok(WEI_PER_ETH / 10));
        assert_eq!(parse_ether("1.5"), Ok(WEI_PER_ETH + WEI_PER_ETH / 2));
        assert_eq!(parse_ether(".25"), Ok(WEI_PER_ETH / 4));
        assert_eq!(parse_ether("2."), Ok(2 * WEI_PER_ETH));
        assert_eq!(parse_ether(" 3 "), Ok(3 * WEI_PER_ETH));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_ether(""), Err(UnitsError::Empty));
        assert_eq!(parse_ether("   "), Err(UnitsError::Empty));
        assert_eq!(parse_ether("1.2.3"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("abc"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("1,5"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("."), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("+1"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("-1"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("1.+5"), Err(UnitsError::Malformed));
        assert_eq!(
            parse_ether("0.1234567890123456789"),
            Err(UnitsError::TooManyDecimals)
        );
        assert_eq!(
            parse_ether("400000000000000000000"),
            Err(UnitsError::Overflow)
        );
    }

    #[test]
    fn formats_wei_for_display() {
        assert_eq!(format_ether(0), "0");
        assert_eq!(format_ether(WEI_PER_ETH), "1");
        assert_eq!(format_ether(WEI_PER_ETH + WEI_PER_ETH / 2), "1.5");
        assert_eq!(format_ether(WEI_PER_ETH / 1000), "0.001");
        assert_eq!(format_ether(1), "0.000000000000000001");
    }

    #[test]
    fn display_round_trip_is_stable() {
        for wei in [0, 1, WEI_PER_ETH / 4, 7 * WEI_PER_ETH / 10, 42 * WEI_PER_ETH] {
            assert_eq!(parse_ether(&format_ether(wei)), Ok(wei));
        }
    }
}
