//! Contract-type hint supplied alongside the document text.
//!
//! The hint is informational: scoring does not branch on it. Parsing never
//! fails; unknown values are kept verbatim as [`ContractType::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContractType {
    #[default]
    General,
    Employment,
    Vendor,
    Service,
    Lease,
    Nda,
    Partnership,
    Other(String),
}

impl ContractType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "general",
            Self::Employment => "employment",
            Self::Vendor => "vendor",
            Self::Service => "service",
            Self::Lease => "lease",
            Self::Nda => "nda",
            Self::Partnership => "partnership",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ContractType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "" | "general" => Self::General,
            "employment" => Self::Employment,
            "vendor" => Self::Vendor,
            "service" => Self::Service,
            "lease" => Self::Lease,
            "nda" => Self::Nda,
            "partnership" => Self::Partnership,
            _ => Self::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for ContractType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<ContractType> for String {
    fn from(t: ContractType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
