//! Low-income offset evaluation.

use rust_decimal::Decimal;

use crate::config::LitoConfig;

/// Computes the low-income offset for an annual income.
///
/// Piecewise over the configured thresholds:
///
/// - at or below `full_threshold`: the full `maximum`;
/// - up to `middle_threshold`: `maximum` reduced at `phase_out_rate_low`;
/// - up to `phase_out`: `middle_offset` reduced at `phase_out_rate_high`;
/// - above `phase_out`: zero.
///
/// The result is never negative and is monotonically non-increasing in
/// income past `full_threshold`.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::compute_lito;
/// use shiftpay_engine::config::LitoConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let lito = LitoConfig {
///     maximum: dec("700"),
///     full_threshold: dec("37500"),
///     middle_threshold: dec("45000"),
///     phase_out: dec("66667"),
///     phase_out_rate_low: dec("0.05"),
///     phase_out_rate_high: dec("0.015"),
///     middle_offset: dec("325"),
/// };
///
/// assert_eq!(compute_lito(dec("30000"), &lito), dec("700"));
/// assert_eq!(compute_lito(dec("62400"), &lito), dec("64.000"));
/// assert_eq!(compute_lito(dec("80000"), &lito), Decimal::ZERO);
/// ```
pub fn compute_lito(annual_income: Decimal, config: &LitoConfig) -> Decimal {
    if annual_income <= config.full_threshold {
        config.maximum
    } else if annual_income <= config.middle_threshold {
        let reduction = (annual_income - config.full_threshold) * config.phase_out_rate_low;
        (config.maximum - reduction).max(Decimal::ZERO)
    } else if annual_income <= config.phase_out {
        let reduction = (annual_income - config.middle_threshold) * config.phase_out_rate_high;
        (config.middle_offset - reduction).max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    }
}
