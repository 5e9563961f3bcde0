//! Validation and input masking for client payment details.
//!
//! The payment form collaborator hands over loosely-typed strings; this
//! module reports per-field problems as data (never as errors) and, once a
//! form is clean, produces a [`Payment`] whose variant carries only the
//! fields that exist for that method.

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use serde::Deserialize;
use std::str::FromStr;
use std::sync::LazyLock;

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("static pattern"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})/(\d{2})$").expect("static pattern"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("static pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("static pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Credit,
    Debit,
    Paypal,
    Zelle,
    Bitcoin,
}

impl FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(PaymentMethod::Credit),
            "debit" => Ok(PaymentMethod::Debit),
            "paypal" => Ok(PaymentMethod::Paypal),
            "zelle" => Ok(PaymentMethod::Zelle),
            "bitcoin" => Ok(PaymentMethod::Bitcoin),
            _ => Err(()),
        }
    }
}

/// Raw form input, exactly as collected: every field optional, every value
/// an unparsed string. Field names follow the form collaborator's keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    pub payment_method: Option<String>,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub cvv: Option<String>,
    pub paypal_email: Option<String>,
    pub zelle_phone: Option<String>,
    pub bitcoin_address: Option<String>,
    pub amount: Option<f64>,
}

/// A single field-level validation problem. An empty list of these means
/// the form is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: &str) -> Self {
        FieldError {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardDetails {
    /// Digits only, separators stripped.
    pub number: String,
    /// Canonical MM/YY.
    pub expiry: String,
    pub cvv: String,
}

/// Method-specific payment fields. One variant per accepted method, so a
/// card number can never ride along with a Zelle payment.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentDetails {
    Credit(CardDetails),
    Debit(CardDetails),
    Paypal { email: String },
    Zelle { phone: String },
    Bitcoin { address: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub amount: f64,
    pub details: PaymentDetails,
}

/// Validates a raw form against today's date. Returns the ordered list of
/// field errors; empty means valid. Never panics, never returns `Err`.
pub fn validate(form: &PaymentForm) -> Vec<FieldError> {
    validate_at(form, Utc::now().date_naive())
}

/// Like [`validate`], with the date the card expiry is compared against
/// passed in explicitly.
pub fn validate_at(form: &PaymentForm, today: NaiveDate) -> Vec<FieldError> {
    match parse_at(form, today) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

/// Parses a raw form into a typed [`Payment`], collecting every field
/// problem when it cannot.
pub fn parse(form: &PaymentForm) -> Result<Payment, Vec<FieldError>> {
    parse_at(form, Utc::now().date_naive())
}

pub fn parse_at(form: &PaymentForm, today: NaiveDate) -> Result<Payment, Vec<FieldError>> {
    // No method selected means no branch to check the other fields under;
    // this is the one short-circuiting case.
    let Some(method_str) = form.payment_method.as_deref() else {
        return Err(vec![FieldError::new(
            "paymentMethod",
            "Payment method is required",
        )]);
    };
    let Ok(method) = method_str.parse::<PaymentMethod>() else {
        return Err(vec![FieldError::new(
            "paymentMethod",
            "Unsupported payment method",
        )]);
    };

    let mut errors = Vec::new();

    let details = match method {
        PaymentMethod::Credit | PaymentMethod::Debit => {
            let card = check_card_fields(form, today, &mut errors);
            match method {
                PaymentMethod::Credit => card.map(PaymentDetails::Credit),
                _ => card.map(PaymentDetails::Debit),
            }
        }
        PaymentMethod::Paypal => {
            check_paypal_email(form.paypal_email.as_deref(), &mut errors)
                .map(|email| PaymentDetails::Paypal { email })
        }
        PaymentMethod::Zelle => check_zelle_phone(form.zelle_phone.as_deref(), &mut errors)
            .map(|phone| PaymentDetails::Zelle { phone }),
        PaymentMethod::Bitcoin => {
            check_bitcoin_address(form.bitcoin_address.as_deref(), &mut errors)
                .map(|address| PaymentDetails::Bitcoin { address })
        }
    };

    let amount = match form.amount {
        Some(amount) if amount > 0.0 => Some(amount),
        _ => {
            errors.push(FieldError::new("amount", "Amount must be greater than zero"));
            None
        }
    };

    if errors.is_empty() {
        // Both are Some exactly when no error was recorded for them.
        Ok(Payment {
            amount: amount.unwrap(),
            details: details.unwrap(),
        })
    } else {
        Err(errors)
    }
}

fn check_card_fields(
    form: &PaymentForm,
    today: NaiveDate,
    errors: &mut Vec<FieldError>,
) -> Option<CardDetails> {
    let number = check_card_number(form.card_number.as_deref(), errors);
    let expiry = check_expiry(form.expiry_date.as_deref(), today, errors);
    let cvv = check_cvv(form.cvv.as_deref(), errors);

    Some(CardDetails {
        number: number?,
        expiry: expiry?,
        cvv: cvv?,
    })
}

fn check_card_number(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let stripped: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if CARD_NUMBER_RE.is_match(&stripped) {
        Some(stripped)
    } else {
        errors.push(FieldError::new(
            "cardNumber",
            "Card number must be 16 digits",
        ));
        None
    }
}

fn check_expiry(
    raw: Option<&str>,
    today: NaiveDate,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let raw = raw.unwrap_or_default().trim().to_string();
    if expiry_is_valid(&raw, today) {
        Some(raw)
    } else {
        errors.push(FieldError::new(
            "expiryDate",
            "Expiry date must be a valid MM/YY not in the past",
        ));
        None
    }
}

/// MM/YY with a real month, not strictly before the current month. The
/// two-digit year is compared against the current year mod 100, with no
/// century windowing.
fn expiry_is_valid(raw: &str, today: NaiveDate) -> bool {
    let Some(caps) = EXPIRY_RE.captures(raw) else {
        return false;
    };
    let month: u32 = caps[1].parse().unwrap_or(0);
    let year: u32 = caps[2].parse().unwrap_or(0);
    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = (today.year().rem_euclid(100)) as u32;
    (year, month) >= (current_year, today.month())
}

fn check_cvv(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = raw.unwrap_or_default().trim().to_string();
    if CVV_RE.is_match(&raw) {
        Some(raw)
    } else {
        errors.push(FieldError::new("cvv", "CVV must be 3 or 4 digits"));
        None
    }
}

fn check_paypal_email(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = raw.unwrap_or_default().trim().to_string();
    if EMAIL_RE.is_match(&raw) {
        Some(raw)
    } else {
        errors.push(FieldError::new(
            "paypalEmail",
            "A valid PayPal email is required",
        ));
        None
    }
}

fn check_zelle_phone(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = raw.unwrap_or_default().trim().to_string();
    if PHONE_RE.is_match(&raw) {
        Some(raw)
    } else {
        errors.push(FieldError::new(
            "zellePhone",
            "Phone number must be in (555) 555-5555 format",
        ));
        None
    }
}

fn check_bitcoin_address(raw: Option<&str>, errors: &mut Vec<FieldError>) -> Option<String> {
    let raw = raw.unwrap_or_default().trim().to_string();
    if raw.len() >= 26 {
        Some(raw)
    } else {
        errors.push(FieldError::new(
            "bitcoinAddress",
            "Bitcoin address is too short",
        ));
        None
    }
}

/// Masks a card number for display: digits only, grouped in fours, capped
/// at 16 digits (19 characters with separators).
pub fn format_card_number(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(16).collect();
    digits
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Masks an expiry as MM/YY while it is typed.
pub fn format_expiry(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(4).collect();
    if digits.len() <= 2 {
        digits
    } else {
        format!("{}/{}", &digits[..2], &digits[2..])
    }
}

/// Masks a US phone number as (NNN) NNN-NNNN while it is typed.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({digits}"),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn credit_form() -> PaymentForm {
        PaymentForm {
            payment_method: Some("credit".to_string()),
            card_number: Some("4111111111111111".to_string()),
            expiry_date: Some("12/99".to_string()),
            cvv: Some("123".to_string()),
            amount: Some(10.0),
            ..PaymentForm::default()
        }
    }

    #[test]
    fn test_valid_credit_card() {
        assert!(validate_at(&credit_form(), today()).is_empty());
    }

    #[test]
    fn test_card_number_may_contain_spaces() {
        let mut form = credit_form();
        form.card_number = Some("4111 1111 1111 1111".to_string());
        assert!(validate_at(&form, today()).is_empty());
    }

    #[test]
    fn test_invalid_card_fields_each_report_once() {
        let form = PaymentForm {
            payment_method: Some("credit".to_string()),
            card_number: Some("123".to_string()),
            expiry_date: Some("13/20".to_string()),
            cvv: Some("1".to_string()),
            amount: Some(10.0),
            ..PaymentForm::default()
        };

        let errors = validate_at(&form, today());
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["cardNumber", "expiryDate", "cvv"]);
    }

    #[test]
    fn test_missing_method_short_circuits() {
        let form = PaymentForm {
            amount: Some(10.0),
            ..PaymentForm::default()
        };

        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paymentMethod");
        assert_eq!(errors[0].message, "Payment method is required");
    }

    #[test]
    fn test_unknown_method_short_circuits() {
        let form = PaymentForm {
            payment_method: Some("cheque".to_string()),
            ..PaymentForm::default()
        };

        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paymentMethod");
    }

    #[test]
    fn test_expiry_boundaries() {
        // Same month as today is still accepted.
        assert!(expiry_is_valid("06/24", today()));
        // The month before is not.
        assert!(!expiry_is_valid("05/24", today()));
        assert!(expiry_is_valid("07/24", today()));
        assert!(expiry_is_valid("01/25", today()));
        // Two-digit years compare without century windowing.
        assert!(expiry_is_valid("12/99", today()));
        assert!(!expiry_is_valid("12/23", today()));
        // Shape violations.
        assert!(!expiry_is_valid("13/25", today()));
        assert!(!expiry_is_valid("00/25", today()));
        assert!(!expiry_is_valid("1/25", today()));
        assert!(!expiry_is_valid("0125", today()));
    }

    #[test]
    fn test_paypal_email_shape() {
        let mut form = PaymentForm {
            payment_method: Some("paypal".to_string()),
            paypal_email: Some("office@harmonarch.com".to_string()),
            amount: Some(250.0),
            ..PaymentForm::default()
        };
        assert!(validate_at(&form, today()).is_empty());

        form.paypal_email = Some("not-an-email".to_string());
        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "paypalEmail");

        form.paypal_email = None;
        assert_eq!(validate_at(&form, today()).len(), 1);
    }

    #[test]
    fn test_zelle_phone_shape() {
        let mut form = PaymentForm {
            payment_method: Some("zelle".to_string()),
            zelle_phone: Some("(555) 867-5309".to_string()),
            amount: Some(80.0),
            ..PaymentForm::default()
        };
        assert!(validate_at(&form, today()).is_empty());

        form.zelle_phone = Some("555-867-5309".to_string());
        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "zellePhone");
    }

    #[test]
    fn test_bitcoin_address_length() {
        let mut form = PaymentForm {
            payment_method: Some("bitcoin".to_string()),
            bitcoin_address: Some("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2".to_string()),
            amount: Some(1200.0),
            ..PaymentForm::default()
        };
        assert!(validate_at(&form, today()).is_empty());

        form.bitcoin_address = Some("tooshort".to_string());
        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "bitcoinAddress");
    }

    #[test]
    fn test_amount_must_be_positive() {
        let mut form = credit_form();
        form.amount = Some(0.0);
        let errors = validate_at(&form, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "amount");

        form.amount = None;
        assert_eq!(validate_at(&form, today()).len(), 1);
    }

    #[test]
    fn test_parse_produces_the_matching_variant() {
        let payment = parse_at(&credit_form(), today()).expect("form is valid");
        assert_eq!(payment.amount, 10.0);
        match payment.details {
            PaymentDetails::Credit(card) => {
                assert_eq!(card.number, "4111111111111111");
                assert_eq!(card.expiry, "12/99");
                assert_eq!(card.cvv, "123");
            }
            other => panic!("Expected a credit card payment, got {other:?}"),
        }

        let mut form = credit_form();
        form.payment_method = Some("debit".to_string());
        let payment = parse_at(&form, today()).expect("form is valid");
        assert!(matches!(payment.details, PaymentDetails::Debit(_)));
    }

    #[test]
    fn test_card_number_formatter() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
        // Max 19 chars including separators; extra digits are dropped.
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4111-1111"), "4111 1111");
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number(""), "");

        // Idempotent once spaces are stripped from its own output.
        let formatted = format_card_number("4111111111111111");
        let restripped: String = formatted.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(format_card_number(&restripped), formatted);
    }

    #[test]
    fn test_expiry_formatter() {
        assert_eq!(format_expiry("1299"), "12/99");
        assert_eq!(format_expiry("12/99"), "12/99");
        assert_eq!(format_expiry("129"), "12/9");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("129900"), "12/99");
    }

    #[test]
    fn test_phone_formatter() {
        assert_eq!(format_phone("5558675309"), "(555) 867-5309");
        assert_eq!(format_phone("555-867-5309"), "(555) 867-5309");
        assert_eq!(format_phone("555867"), "(555) 867");
        assert_eq!(format_phone("555"), "(555");
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("55586753091111"), "(555) 867-5309");
    }
}
