//! Schedule table loading and validation.
//!
//! This module provides the [`TaxTableLoader`] type for loading withholding
//! schedule tables from YAML files. Every file is validated against the
//! schema rules at load time; a table that fails validation aborts the load,
//! because a corrupt regulatory table must never silently produce wrong tax
//! amounts.

use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::types::{
    LitoConfig, RoundingRule, Schedule1Data, Schedule8Data, TaxRateBand, TaxTables,
};

/// Loads and provides access to the withholding schedule tables.
///
/// # Directory Structure
///
/// The table directory should have the following structure, one file per
/// effective date per schedule:
/// ```text
/// config/tax-au/
/// ├── schedule1/
/// │   ├── 2024-07-01.yaml
/// │   └── 2025-09-24.yaml
/// └── schedule8/
///     ├── 2024-07-01.yaml
///     └── 2025-09-24.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::config::TaxTableLoader;
///
/// let loader = TaxTableLoader::load("./config/tax-au").unwrap();
/// assert!(!loader.tables().schedule1().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TaxTableLoader {
    tables: TaxTables,
}

impl TaxTableLoader {
    /// Loads all schedule tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the table directory (e.g., "./config/tax-au")
    ///
    /// # Returns
    ///
    /// Returns a `TaxTableLoader` on success, or an error if:
    /// - Either schedule directory is missing or contains no YAML files
    /// - Any file contains invalid YAML
    /// - Any table fails schema validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let mut schedule1 = Vec::new();
        for file in Self::schedule_files(&path.join("schedule1"))? {
            let data = Self::load_yaml::<Schedule1Data>(&file)?;
            validate_schedule1(&file, &data)?;
            schedule1.push(data);
        }

        let mut schedule8 = Vec::new();
        for file in Self::schedule_files(&path.join("schedule8"))? {
            let data = Self::load_yaml::<Schedule8Data>(&file)?;
            validate_schedule8(&file, &data)?;
            schedule8.push(data);
        }

        Ok(Self {
            tables: TaxTables::new(schedule1, schedule8),
        })
    }

    /// Builds a loader from already-validated in-memory tables.
    ///
    /// Intended for tests and callers that embed table data directly.
    pub fn from_tables(tables: TaxTables) -> Self {
        Self { tables }
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Lists the YAML files of one schedule directory.
    ///
    /// Files are returned in filename order so that records sharing an
    /// effective date resolve deterministically across runs.
    fn schedule_files(dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let dir_str = dir.display().to_string();

        if !dir.exists() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        files.sort();
        Ok(files)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

fn validation_error(path: &Path, message: impl Into<String>) -> EngineError {
    EngineError::ScheduleValidation {
        path: path.display().to_string(),
        message: message.into(),
    }
}

fn validate_rate(path: &Path, name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(validation_error(
            path,
            format!("{} must be within [0, 1], got {}", name, rate),
        ));
    }
    Ok(())
}

fn validate_rounding(path: &Path, rule: &RoundingRule) -> EngineResult<()> {
    if rule.precision <= Decimal::ZERO {
        return Err(validation_error(
            path,
            format!("rounding precision must be positive, got {}", rule.precision),
        ));
    }
    Ok(())
}

fn validate_bands(path: &Path, scale: &str, bands: &[TaxRateBand]) -> EngineResult<()> {
    let Some(first) = bands.first() else {
        return Err(validation_error(
            path,
            format!("scale '{}' declares no bands", scale),
        ));
    };
    if first.threshold != Decimal::ZERO {
        return Err(validation_error(
            path,
            format!(
                "scale '{}' must start at threshold 0, got {}",
                scale, first.threshold
            ),
        ));
    }
    for pair in bands.windows(2) {
        if pair[1].threshold <= pair[0].threshold {
            return Err(validation_error(
                path,
                format!(
                    "scale '{}' thresholds must be strictly increasing ({} then {})",
                    scale, pair[0].threshold, pair[1].threshold
                ),
            ));
        }
    }
    for band in bands {
        validate_rate(path, &format!("scale '{}' marginal rate", scale), band.marginal_rate)?;
        if band.base_tax < Decimal::ZERO {
            return Err(validation_error(
                path,
                format!("scale '{}' base tax must be non-negative", scale),
            ));
        }
    }
    Ok(())
}

fn validate_lito(path: &Path, lito: &LitoConfig) -> EngineResult<()> {
    for (name, value) in [
        ("lito maximum", lito.maximum),
        ("lito full_threshold", lito.full_threshold),
        ("lito middle_threshold", lito.middle_threshold),
        ("lito phase_out", lito.phase_out),
        ("lito middle_offset", lito.middle_offset),
    ] {
        if value < Decimal::ZERO {
            return Err(validation_error(
                path,
                format!("{} must be non-negative, got {}", name, value),
            ));
        }
    }
    validate_rate(path, "lito phase_out_rate_low", lito.phase_out_rate_low)?;
    validate_rate(path, "lito phase_out_rate_high", lito.phase_out_rate_high)?;
    if !(lito.full_threshold <= lito.middle_threshold && lito.middle_threshold <= lito.phase_out) {
        return Err(validation_error(
            path,
            "lito thresholds must satisfy full <= middle <= phase_out",
        ));
    }
    Ok(())
}

/// Validates one primary schedule version.
fn validate_schedule1(path: &Path, data: &Schedule1Data) -> EngineResult<()> {
    if data.frequencies.is_empty() {
        return Err(validation_error(path, "schedule declares no frequencies"));
    }
    for (frequency, entry) in &data.frequencies {
        if entry.annual_factor <= Decimal::ZERO {
            return Err(validation_error(
                path,
                format!(
                    "annual factor for '{}' must be positive, got {}",
                    frequency, entry.annual_factor
                ),
            ));
        }
        validate_rounding(path, &entry.rounding)?;
    }

    validate_bands(path, "resident_with_threshold", &data.scales.resident_with_threshold)?;
    validate_bands(path, "resident_no_threshold", &data.scales.resident_no_threshold)?;
    validate_bands(path, "non_resident", &data.scales.non_resident)?;

    validate_lito(path, &data.lito)?;
    validate_rate(path, "medicare standard_rate", data.medicare.standard_rate)?;
    validate_rate(path, "medicare half_rate", data.medicare.half_rate)?;
    Ok(())
}

/// Validates one study-loan schedule version.
fn validate_schedule8(path: &Path, data: &Schedule8Data) -> EngineResult<()> {
    if data.tiers.is_empty() {
        return Err(validation_error(path, "schedule declares no repayment tiers"));
    }
    for tier in &data.tiers {
        if tier.minimum < Decimal::ZERO {
            return Err(validation_error(
                path,
                format!("tier minimum must be non-negative, got {}", tier.minimum),
            ));
        }
        validate_rate(path, "tier rate", tier.rate)?;
    }
    for pair in data.tiers.windows(2) {
        if pair[1].minimum <= pair[0].minimum {
            return Err(validation_error(
                path,
                format!(
                    "tier minimums must be strictly increasing ({} then {})",
                    pair[0].minimum, pair[1].minimum
                ),
            ));
        }
    }
    validate_rounding(path, &data.rounding)?;
    Ok(())
}
