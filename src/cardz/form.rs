//! Form input and typed validation.
//!
//! [`GiftCardFormData`] is the shape screens and CLI flags produce: every
//! field a string, `amount` included, so partial input survives until the
//! user commits. Turning it into a domain record goes through a typed parse:
//!
//! - [`GiftCardFormData::draft`] is the minimal coercion the wallet needs —
//!   amount becomes a finite `f64` or a structured error, never a NaN.
//! - [`GiftCardFormData::validate`] applies the full form rules (brand,
//!   amount shape and sign, supported currency, expiration date present,
//!   well-formed, and not in the past) and belongs to the UI layer.

use crate::currency;
use crate::dates;
use chrono::{Local, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Brand is required")]
    BrandRequired,

    #[error("Amount is required")]
    AmountRequired,

    #[error("Please enter a valid amount")]
    AmountInvalid,

    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Expiration date is required")]
    ExpirationRequired,

    #[error("Please enter a valid date")]
    ExpirationInvalid,

    #[error("Expiration date must be today or in the future")]
    ExpirationInPast,
}

/// Raw form input for creating or editing a card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GiftCardFormData {
    pub brand: String,
    pub amount: String,
    pub currency: String,
    pub expiration_date: String,
    pub card_number: Option<String>,
    pub pin: Option<String>,
    pub notes: Option<String>,
}

/// A form whose amount has been coerced to a number. Input to
/// [`crate::model::GiftCard::new`] and [`crate::model::GiftCard::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    pub brand: String,
    pub amount: f64,
    pub currency: String,
    pub expiration_date: String,
    pub card_number: Option<String>,
    pub pin: Option<String>,
    pub notes: Option<String>,
}

impl GiftCardFormData {
    /// Coerce the amount and normalize the optional fields, without applying
    /// the full form rules. The wallet calls this on create and update.
    pub fn draft(&self) -> Result<CardDraft, ValidationError> {
        let amount: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::AmountInvalid)?;
        if !amount.is_finite() {
            return Err(ValidationError::AmountInvalid);
        }

        Ok(CardDraft {
            brand: self.brand.trim().to_string(),
            amount,
            currency: self.currency.clone(),
            expiration_date: self.expiration_date.trim().to_string(),
            card_number: clean(&self.card_number),
            pin: clean(&self.pin),
            notes: clean(&self.notes),
        })
    }

    /// Apply the full form rules and return the coerced draft, or the first
    /// failure. Expiration dates must be `DD-MM-YYYY` here, and today or
    /// later; already-stored cards are exempt from these rules.
    pub fn validate(&self) -> Result<CardDraft, ValidationError> {
        if self.brand.trim().is_empty() {
            return Err(ValidationError::BrandRequired);
        }
        validate_amount(&self.amount)?;
        if !currency::is_supported(&self.currency) {
            return Err(ValidationError::UnsupportedCurrency(self.currency.clone()));
        }
        validate_expiration(&self.expiration_date)?;
        self.draft()
    }
}

/// The amount rules on their own, for callers validating a single field.
pub fn validate_amount(value: &str) -> Result<f64, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::AmountRequired);
    }
    if !is_amount_shape(value) {
        return Err(ValidationError::AmountInvalid);
    }
    let amount: f64 = value.parse().map_err(|_| ValidationError::AmountInvalid)?;
    if amount <= 0.0 {
        return Err(ValidationError::AmountNotPositive);
    }
    Ok(amount)
}

/// The expiration rules on their own: present, `DD-MM-YYYY`, today or later.
pub fn validate_expiration(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::ExpirationRequired);
    }
    let date = dates::parse_date_dd_mm_yyyy(value).ok_or(ValidationError::ExpirationInvalid)?;
    if date < Local::now().date_naive() {
        return Err(ValidationError::ExpirationInPast);
    }
    Ok(date)
}

/// Digits, optionally a dot and up to two more digits. Stricter than `f64`
/// parsing on purpose: no sign, no exponent, no `inf`.
fn is_amount_shape(value: &str) -> bool {
    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match fraction {
        Some(f) => f.len() <= 2 && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

fn clean(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn future_dd_mm_yyyy() -> String {
        (Local::now().date_naive() + Duration::days(90))
            .format("%d-%m-%Y")
            .to_string()
    }

    fn valid_form() -> GiftCardFormData {
        GiftCardFormData {
            brand: "Amazon".to_string(),
            amount: "50".to_string(),
            currency: "USD".to_string(),
            expiration_date: future_dd_mm_yyyy(),
            card_number: None,
            pin: None,
            notes: None,
        }
    }

    #[test]
    fn valid_form_passes() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.amount, 50.0);
        assert_eq!(draft.brand, "Amazon");
    }

    #[test]
    fn brand_must_be_non_empty() {
        let mut form = valid_form();
        form.brand = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::BrandRequired));
    }

    #[test]
    fn amount_rules() {
        let mut form = valid_form();
        form.amount = String::new();
        assert_eq!(form.validate(), Err(ValidationError::AmountRequired));

        form.amount = "12.345".to_string();
        assert_eq!(form.validate(), Err(ValidationError::AmountInvalid));

        form.amount = "-5".to_string();
        assert_eq!(form.validate(), Err(ValidationError::AmountInvalid));

        form.amount = "abc".to_string();
        assert_eq!(form.validate(), Err(ValidationError::AmountInvalid));

        form.amount = "0".to_string();
        assert_eq!(form.validate(), Err(ValidationError::AmountNotPositive));

        form.amount = "25.50".to_string();
        assert_eq!(form.validate().unwrap().amount, 25.5);
    }

    #[test]
    fn currency_must_be_supported() {
        let mut form = valid_form();
        form.currency = "ZZZ".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::UnsupportedCurrency("ZZZ".to_string()))
        );
    }

    #[test]
    fn expiration_rules() {
        let mut form = valid_form();
        form.expiration_date = String::new();
        assert_eq!(form.validate(), Err(ValidationError::ExpirationRequired));

        form.expiration_date = "30-02-2030".to_string();
        assert_eq!(form.validate(), Err(ValidationError::ExpirationInvalid));

        form.expiration_date = "01-01-2020".to_string();
        assert_eq!(form.validate(), Err(ValidationError::ExpirationInPast));

        // Today is allowed.
        form.expiration_date = Local::now().date_naive().format("%d-%m-%Y").to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn draft_skips_the_form_rules() {
        // A past date and an unsupported currency still coerce; only the
        // amount has to be numeric.
        let form = GiftCardFormData {
            brand: "Legacy".to_string(),
            amount: "12.5".to_string(),
            currency: "ZZZ".to_string(),
            expiration_date: "01-01-2020".to_string(),
            ..Default::default()
        };
        assert_eq!(form.draft().unwrap().amount, 12.5);

        let mut bad = form;
        bad.amount = "twelve".to_string();
        assert_eq!(bad.draft(), Err(ValidationError::AmountInvalid));
    }

    #[test]
    fn draft_normalizes_blank_optionals() {
        let mut form = valid_form();
        form.card_number = Some("  ".to_string());
        form.notes = Some(" birthday gift ".to_string());
        let draft = form.draft().unwrap();
        assert_eq!(draft.card_number, None);
        assert_eq!(draft.notes, Some("birthday gift".to_string()));
    }
}
