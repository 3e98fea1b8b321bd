//! Progressive tax bracket evaluation.

use rust_decimal::Decimal;

use crate::config::TaxRateBand;

/// Computes annual tax before offsets from a progressive scale.
///
/// The active band is the highest-threshold band whose threshold does not
/// exceed the income; income below every threshold uses the lowest band.
/// Tax is the band's accumulated base plus the marginal rate applied to the
/// income above the band's threshold.
///
/// Total over any non-negative income; callers clamp negative income to
/// zero before this stage.
///
/// # Arguments
///
/// * `annual_income` - Annual income in dollars
/// * `bands` - The scale, pre-sorted ascending by threshold
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::apply_bands;
/// use shiftpay_engine::config::TaxRateBand;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let bands = vec![
///     TaxRateBand { threshold: dec("0"), marginal_rate: dec("0"), base_tax: dec("0") },
///     TaxRateBand { threshold: dec("18200"), marginal_rate: dec("0.16"), base_tax: dec("0") },
///     TaxRateBand { threshold: dec("45000"), marginal_rate: dec("0.30"), base_tax: dec("4288") },
/// ];
///
/// // 62,400 lands in the 45,000 band: 4288 + 17,400 * 0.30 = 9,508
/// assert_eq!(apply_bands(dec("62400"), &bands), dec("9508.00"));
/// ```
pub fn apply_bands(annual_income: Decimal, bands: &[TaxRateBand]) -> Decimal {
    let Some(active) = bands
        .iter()
        .rev()
        .find(|band| band.threshold <= annual_income)
        .or_else(|| bands.first())
    else {
        return Decimal::ZERO;
    };

    let above_threshold = (annual_income - active.threshold).max(Decimal::ZERO);
    active.base_tax + above_threshold * active.marginal_rate
}
