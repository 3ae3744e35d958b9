use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::parsing::{parse_leading_float, parse_loan_bounds, parse_tier_label, parse_trading_months};
use crate::core::repayment::repayment_terms;
use crate::models::{EligibilityRules, LenderCriterion, LenderRecord};

/// Errors that can occur while loading the lender catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not a JSON object of lenders: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog entry for {lender}: {source}")]
    InvalidEntry {
        lender: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A catalog field that could not be read and fell back to a default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDiagnostic {
    pub lender: String,
    pub field: &'static str,
    pub value: String,
    pub fallback: &'static str,
}

/// Read-only lender catalog, normalized once at load time
///
/// Entries keep the order of the source file.
#[derive(Debug, Clone, Default)]
pub struct LenderCatalog {
    lenders: Vec<LenderCriterion>,
    diagnostics: Vec<CatalogDiagnostic>,
}

impl LenderCatalog {
    /// Load the catalog from a JSON file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::from_json_str(&contents)
    }

    /// Parse a catalog from JSON text: an object mapping lender name to criteria
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let records = entries
            .into_iter()
            .map(|(lender, value)| match serde_json::from_value::<LenderRecord>(value) {
                Ok(record) => Ok((lender, record)),
                Err(source) => Err(CatalogError::InvalidEntry { lender, source }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_records(records))
    }

    /// Build a catalog from already-decoded records
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (String, LenderRecord)>,
    {
        let mut catalog = Self::default();

        for (name, record) in records {
            catalog.diagnose(&name, &record);

            let eligibility = EligibilityRules {
                loan_bounds: parse_loan_bounds(&record.loan_amount),
                min_trading_months: parse_trading_months(&record.min_trading_time),
                tier: parse_tier_label(record.tier.as_deref()),
            };
            let repayment = repayment_terms(&record.loan_amount, &record.rates, &record.term);

            catalog.lenders.push(LenderCriterion {
                name,
                record,
                eligibility,
                repayment,
            });
        }

        catalog
    }

    pub fn lenders(&self) -> &[LenderCriterion] {
        &self.lenders
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }

    /// Fields that fell back to defaults during normalization
    pub fn diagnostics(&self) -> &[CatalogDiagnostic] {
        &self.diagnostics
    }

    fn diagnose(&mut self, lender: &str, record: &LenderRecord) {
        let mut flag = |field: &'static str, value: &str, fallback: &'static str| {
            tracing::warn!(
                "Catalog entry {} has unreadable {} {:?}, {}",
                lender,
                field,
                value,
                fallback
            );
            self.diagnostics.push(CatalogDiagnostic {
                lender: lender.to_string(),
                field,
                value: value.to_string(),
                fallback,
            });
        };

        if !record.loan_amount.chars().any(|c| c.is_ascii_digit()) {
            flag("Loan Amount", record.loan_amount.as_str(), "accepting any loan amount");
        }
        if parse_trading_months(&record.min_trading_time).is_none() {
            flag("Min Trading Time", record.min_trading_time.as_str(), "lender will never match");
        }
        if let Some(label) = record.tier.as_deref() {
            if parse_tier_label(Some(label)).is_none() {
                flag("Tier", label, "lender will never match");
            }
        }
        if !record.rates.chars().any(|c| c.is_ascii_digit()) {
            flag("Rates", record.rates.as_str(), "repayment estimates will be zero");
        }
        if parse_leading_float(&record.term).is_none() {
            flag("Term", record.term.as_str(), "repayment estimates will be zero");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;

    fn find<'a>(catalog: &'a LenderCatalog, name: &str) -> &'a LenderCriterion {
        catalog.lenders().iter().find(|lender| lender.name == name).unwrap()
    }

    const CATALOG: &str = r#"{
        "Shawbrook": {
            "Loan Amount": "25000 - 1000000",
            "Min Trading Time": "24 months",
            "Tier": "Tier 1",
            "Term": "12-60 months",
            "Rates": "7.5 - 12 pm"
        },
        "Capify": {
            "Loan Amount": "5000 - 500000",
            "Min Trading Time": "6 months",
            "Term": "3-12 months",
            "Rates": "1.5 pm",
            "Net Assets > 0": "No"
        },
        "Alpha": {
            "Loan Amount": "N/A",
            "Min Trading Time": "N/A",
            "Tier": "Tier 2",
            "Term": "N/A",
            "Rates": "N/A"
        }
    }"#;

    #[test]
    fn test_keeps_file_order() {
        let catalog = LenderCatalog::from_json_str(CATALOG).unwrap();
        let names: Vec<&str> = catalog.lenders().iter().map(|l| l.name.as_str()).collect();

        assert_eq!(names, vec!["Shawbrook", "Capify", "Alpha"]);
    }

    #[test]
    fn test_normalizes_entries() {
        let catalog = LenderCatalog::from_json_str(CATALOG).unwrap();

        let shawbrook = find(&catalog, "Shawbrook");
        assert_eq!(shawbrook.eligibility.loan_bounds.min, 25_000.0);
        assert_eq!(shawbrook.eligibility.loan_bounds.max, 1_000_000.0);
        assert_eq!(shawbrook.eligibility.min_trading_months, Some(24));
        assert_eq!(shawbrook.eligibility.tier, Some(Tier::One));
        assert_eq!(shawbrook.repayment.flat_term, 12.0);

        let capify = find(&catalog, "Capify");
        assert_eq!(capify.eligibility.tier, Some(Tier::Three));
        assert_eq!(capify.record.tier, None);
    }

    #[test]
    fn test_reports_unreadable_fields() {
        let catalog = LenderCatalog::from_json_str(CATALOG).unwrap();
        let flagged: Vec<&str> = catalog
            .diagnostics()
            .iter()
            .filter(|d| d.lender == "Alpha")
            .map(|d| d.field)
            .collect();

        assert_eq!(flagged, vec!["Loan Amount", "Min Trading Time", "Rates", "Term"]);
        assert!(catalog.diagnostics().iter().all(|d| d.lender == "Alpha"));
    }

    #[test]
    fn test_rejects_entry_missing_fields() {
        let err = LenderCatalog::from_json_str(r#"{"Broken": {"Loan Amount": "1000"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidEntry { ref lender, .. } if lender == "Broken"));
    }

    #[test]
    fn test_rejects_non_object() {
        let err = LenderCatalog::from_json_str("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = LenderCatalog::load("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
