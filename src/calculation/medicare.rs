//! Medicare levy evaluation.

use rust_decimal::Decimal;

use crate::config::MedicareConfig;
use crate::models::MedicareLevyStatus;

/// Computes the Medicare levy for an annual income and exemption status.
///
/// The standard status pays `standard_rate`, a half exemption pays
/// `half_rate`, and a full exemption pays nothing.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::compute_medicare_levy;
/// use shiftpay_engine::config::MedicareConfig;
/// use shiftpay_engine::models::MedicareLevyStatus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = MedicareConfig {
///     standard_rate: Decimal::from_str("0.02").unwrap(),
///     half_rate: Decimal::from_str("0.01").unwrap(),
/// };
///
/// let income = Decimal::from(62_400);
/// assert_eq!(
///     compute_medicare_levy(income, MedicareLevyStatus::Standard, &config),
///     Decimal::from_str("1248.00").unwrap(),
/// );
/// assert_eq!(
///     compute_medicare_levy(income, MedicareLevyStatus::FullExempt, &config),
///     Decimal::ZERO,
/// );
/// ```
pub fn compute_medicare_levy(
    annual_income: Decimal,
    status: MedicareLevyStatus,
    config: &MedicareConfig,
) -> Decimal {
    match status {
        MedicareLevyStatus::Standard => annual_income * config.standard_rate,
        MedicareLevyStatus::HalfExempt => annual_income * config.half_rate,
        MedicareLevyStatus::FullExempt => Decimal::ZERO,
    }
}
