// crates/job-search/src/domain/value_objects/reference_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Identifiant numérique d'un référentiel (secteur, province).
/// Les filtres de recherche arrivent en texte : un identifiant non numérique est une erreur client.
macro_rules! reference_id {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn try_new(raw: &str) -> Result<Self> {
                let value = raw.trim().parse::<i64>().map_err(|_| {
                    DomainError::validation($field, format!("'{}' is not a numeric identifier", raw))
                })?;
                let id = Self(value);
                id.validate()?;
                Ok(id)
            }

            pub fn new_unchecked(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl ValueObject for $name {
            fn validate(&self) -> Result<()> {
                if self.0 <= 0 {
                    return Err(DomainError::validation($field, "Identifier must be positive"));
                }
                Ok(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

reference_id!(IndustryId, "industry_ids");
reference_id!(ProvinceId, "province_ids");
