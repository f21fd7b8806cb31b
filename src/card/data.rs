//! Card details collected by the first step of the add-card flow.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons card details are refused at construction
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CardDataError {
    #[error("Card owner name is empty")]
    EmptyOwnerName,

    #[error("Card number must be 12 to 19 digits")]
    InvalidNumber,

    #[error("Expiry month {0} is not between 1 and 12")]
    InvalidExpiryMonth(u32),

    #[error("Security code must be 3 or 4 digits")]
    InvalidSecurityCode,
}

/// Card details entered on the card-details screen.
///
/// `Debug` masks the number down to its last four digits and omits the
/// security code. Deserialization goes through [`CardData::new`], so a
/// card read back from a snapshot or event is validated like a fresh one.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCardData")]
pub struct CardData {
    owner_name: String,
    number: String,
    expiry_month: u32,
    expiry_year: u32,
    security_code: String,
}

/// Unvalidated wire form of [`CardData`]
#[derive(Deserialize)]
struct RawCardData {
    owner_name: String,
    number: String,
    expiry_month: u32,
    expiry_year: u32,
    security_code: String,
}

impl TryFrom<RawCardData> for CardData {
    type Error = CardDataError;

    fn try_from(raw: RawCardData) -> Result<Self, Self::Error> {
        CardData::new(
            raw.owner_name,
            raw.number,
            raw.expiry_month,
            raw.expiry_year,
            raw.security_code,
        )
    }
}

impl CardData {
    /// Validate and collect card details. Spaces in `number` are ignored.
    ///
    /// ```rust
    /// use backstack::card::{CardData, CardDataError};
    ///
    /// let card = CardData::new("Ada Lovelace", "4111 1111 1111 1111", 12, 2030, "123").unwrap();
    /// assert_eq!(card.last_four(), "1111");
    ///
    /// let err = CardData::new("Ada Lovelace", "4111 1111 1111 1111", 13, 2030, "123");
    /// assert_eq!(err, Err(CardDataError::InvalidExpiryMonth(13)));
    /// ```
    pub fn new(
        owner_name: impl Into<String>,
        number: impl AsRef<str>,
        expiry_month: u32,
        expiry_year: u32,
        security_code: impl Into<String>,
    ) -> Result<Self, CardDataError> {
        let owner_name = owner_name.into().trim().to_string();
        if owner_name.is_empty() {
            return Err(CardDataError::EmptyOwnerName);
        }

        let number: String = number.as_ref().chars().filter(|c| *c != ' ').collect();
        if !(12..=19).contains(&number.len()) || !is_digits(&number) {
            return Err(CardDataError::InvalidNumber);
        }

        if !(1..=12).contains(&expiry_month) {
            return Err(CardDataError::InvalidExpiryMonth(expiry_month));
        }

        let security_code = security_code.into();
        if !(3..=4).contains(&security_code.len()) || !is_digits(&security_code) {
            return Err(CardDataError::InvalidSecurityCode);
        }

        Ok(Self {
            owner_name,
            number,
            expiry_month,
            expiry_year,
            security_code,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn expiry_month(&self) -> u32 {
        self.expiry_month
    }

    pub fn expiry_year(&self) -> u32 {
        self.expiry_year
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }

    pub fn last_four(&self) -> &str {
        let start = self.number.len().saturating_sub(4);
        self.number.get(start..).unwrap_or_default()
    }

    /// Number with every digit but the last four replaced by `•`.
    pub fn masked_number(&self) -> String {
        let hidden = self.number.len().saturating_sub(4);
        let mut masked = "•".repeat(hidden);
        masked.push_str(self.last_four());
        masked
    }
}

impl fmt::Debug for CardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardData")
            .field("owner_name", &self.owner_name)
            .field("number", &self.masked_number())
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish_non_exhaustive()
    }
}

fn is_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CardData {
        CardData::new("Ada Lovelace", "4111 1111 1111 1234", 7, 2031, "987").unwrap()
    }

    #[test]
    fn new_strips_spaces_from_number() {
        assert_eq!(valid().number(), "4111111111111234");
    }

    #[test]
    fn new_trims_owner_name() {
        let card = CardData::new("  Ada  ", "411111111111", 1, 2030, "123").unwrap();
        assert_eq!(card.owner_name(), "Ada");
    }

    #[test]
    fn rejects_empty_owner() {
        let result = CardData::new("   ", "4111111111111111", 1, 2030, "123");
        assert_eq!(result, Err(CardDataError::EmptyOwnerName));
    }

    #[test]
    fn rejects_bad_numbers() {
        for number in ["4111", "4111-1111-1111-1111", "41111111111111111111", "abcdabcdabcd"] {
            let result = CardData::new("Ada", number, 1, 2030, "123");
            assert_eq!(result, Err(CardDataError::InvalidNumber), "{number}");
        }
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert_eq!(
            CardData::new("Ada", "4111111111111111", 0, 2030, "123"),
            Err(CardDataError::InvalidExpiryMonth(0))
        );
        assert!(CardData::new("Ada", "4111111111111111", 12, 2030, "123").is_ok());
    }

    #[test]
    fn rejects_bad_security_code() {
        for code in ["12", "12345", "12a"] {
            let result = CardData::new("Ada", "4111111111111111", 1, 2030, code);
            assert_eq!(result, Err(CardDataError::InvalidSecurityCode), "{code}");
        }
    }

    #[test]
    fn masked_number_keeps_last_four() {
        let card = valid();
        assert_eq!(card.last_four(), "1234");
        assert_eq!(card.masked_number(), "••••••••••••1234");
    }

    #[test]
    fn deserialize_accepts_valid_card() {
        let json = serde_json::to_string(&valid()).unwrap();
        let card: CardData = serde_json::from_str(&json).unwrap();
        assert_eq!(card, valid());
    }

    #[test]
    fn deserialize_rejects_invalid_card() {
        let json = r#"{
            "owner_name": "",
            "number": "1",
            "expiry_month": 99,
            "expiry_year": 2030,
            "security_code": "123"
        }"#;

        let err = serde_json::from_str::<CardData>(json).unwrap_err();
        assert!(err.to_string().contains("owner name is empty"));
    }

    #[test]
    fn deserialize_rejects_short_number() {
        let json = r#"{
            "owner_name": "Ada",
            "number": "1",
            "expiry_month": 1,
            "expiry_year": 2030,
            "security_code": "123"
        }"#;

        let err = serde_json::from_str::<CardData>(json).unwrap_err();
        assert!(err.to_string().contains("12 to 19 digits"));
    }

    #[test]
    fn debug_hides_sensitive_fields() {
        let rendered = format!("{:?}", valid());
        assert!(rendered.contains("1234"));
        assert!(!rendered.contains("4111111111111234"));
        assert!(!rendered.contains("987"));
    }
}
