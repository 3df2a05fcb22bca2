//! PII categories and their placeholder tokens

use crate::domain::{MindRepError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse PII category
///
/// Every category maps to exactly one placeholder token. Several fine-grained
/// detector labels may collapse into the same category (cities, landmarks and
/// facilities all become [`PiiCategory::Location`]); keeping the subtype
/// would itself leak re-identifying structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Email addresses
    Email,
    /// US Social Security Numbers
    Ssn,
    /// UK National Insurance numbers
    NiNumber,
    /// NHS numbers, spaced or contiguous
    NhsNumber,
    /// UK and US telephone numbers
    Phone,
    /// UK postcodes
    Postcode,
    /// US ZIP codes
    Zipcode,
    /// Web links
    Url,
    /// Numeric and narrative dates
    Date,
    /// Clock times
    Time,
    /// Person names
    Name,
    /// Companies, agencies, institutions
    Organisation,
    /// Cities, countries, landmarks, facilities
    Location,
    /// Nationalities, religious and political groups
    Group,
}

impl PiiCategory {
    /// Placeholder token substituted for every value of this category
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "[EMAIL]",
            Self::Ssn => "[SSN]",
            Self::NiNumber => "[NI_NUMBER]",
            Self::NhsNumber => "[NHS_NUMBER]",
            Self::Phone => "[PHONE]",
            Self::Postcode => "[POSTCODE]",
            Self::Zipcode => "[ZIPCODE]",
            Self::Url => "[URL]",
            Self::Date => "[DATE]",
            Self::Time => "[TIME]",
            Self::Name => "[NAME]",
            Self::Organisation => "[ORG]",
            Self::Location => "[LOCATION]",
            Self::Group => "[GROUP]",
        }
    }

    /// Parse a category name as written in a pattern library file
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "EMAIL" => Ok(Self::Email),
            "SSN" => Ok(Self::Ssn),
            "NI_NUMBER" | "NI" => Ok(Self::NiNumber),
            "NHS_NUMBER" | "NHS" => Ok(Self::NhsNumber),
            "PHONE" => Ok(Self::Phone),
            "POSTCODE" => Ok(Self::Postcode),
            "ZIPCODE" | "ZIP" => Ok(Self::Zipcode),
            "URL" => Ok(Self::Url),
            "DATE" => Ok(Self::Date),
            "TIME" => Ok(Self::Time),
            "NAME" | "PERSON" => Ok(Self::Name),
            "ORG" | "ORGANISATION" | "ORGANIZATION" => Ok(Self::Organisation),
            "LOCATION" => Ok(Self::Location),
            "GROUP" => Ok(Self::Group),
            _ => Err(MindRepError::Pattern(format!("Unknown PII category: {s}"))),
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.placeholder();
        write!(f, "{}", &token[1..token.len() - 1])
    }
}
