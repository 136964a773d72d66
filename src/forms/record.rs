//! Request records, field validation and the submission lifecycle shared by
//! the contact and quick-quote forms.
//!
//! A record starts empty, gets mutated field by field as the visitor types,
//! and is only handed to the submission collaborator once `validate_*` comes
//! back clean. Every failing field is reported in one pass so the visitor can
//! fix the whole form at once.

use serde::Serialize;
use std::collections::BTreeMap;

/// Field name to human-readable message, for inline display next to inputs.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted,
}

/// Gate into the `Submitting` state. Re-validates the record and refuses the
/// transition while any field is still invalid.
pub fn begin_submission<R>(record: &R, validate: fn(&R) -> FieldErrors) -> Result<FormStatus, FieldErrors> {
    let errors = validate(record);
    if errors.is_empty() {
        Ok(FormStatus::Submitting)
    } else {
        Err(errors)
    }
}

/// The collaborator accepted the record: land in `Submitted` with the form
/// wiped clean for the next visitor.
pub fn finish_submission<R: Default>() -> (FormStatus, R) {
    (FormStatus::Submitted, R::default())
}

// value / label pairs for the quote form selects, values double as the
// membership sets the validators check against.
pub const PROPERTY_TYPES: [(&str, &str); 4] = [
    ("house", "House"),
    ("condo", "Condo"),
    ("townhouse", "Townhouse"),
    ("commercial", "Commercial"),
];

pub const QUOTE_URGENCY: [(&str, &str, &str); 4] = [
    ("asap", "ASAP", "Same/next day"),
    ("week", "This week", "Within 7 days"),
    ("month", "This month", "Within 30 days"),
    ("flexible", "Flexible", "Best price"),
];

pub const QUOTE_SERVICES: [(&str, &str, &str); 4] = [
    ("duct-cleaning", "Duct Cleaning", "from $299"),
    ("dryer-vent", "Dryer Vent Cleaning", "from $149"),
    ("sanitization", "Sanitization Services", "from $199"),
    ("hvac-maintenance", "HVAC Maintenance", "from $249"),
];

pub const INQUIRY_TYPES: [(&str, &str, &str); 5] = [
    ("general", "General Inquiry", "Questions about our services"),
    ("quote", "Request Quote", "Get pricing for your project"),
    ("emergency", "Emergency Service", "Urgent cleaning needed"),
    ("complaint", "Service Issue", "Report a problem"),
    ("compliment", "Compliment", "Share positive feedback"),
];

pub const PREFERRED_CONTACT: [(&str, &str); 3] = [
    ("phone", "Phone call"),
    ("email", "Email"),
    ("text", "Text message"),
];

pub const CONTACT_URGENCY: [(&str, &str, &str); 4] = [
    ("low", "Low", "No rush, flexible timing"),
    ("medium", "Medium", "Within this week"),
    ("high", "High", "Within 1-2 days"),
    ("emergency", "Emergency", "Same day service needed"),
];

pub const TIME_SLOTS: [&str; 5] = [
    "Morning (8AM - 12PM)",
    "Afternoon (12PM - 5PM)",
    "Evening (5PM - 8PM)",
    "Anytime during business hours",
    "Weekends only",
];

pub const CONTACT_SERVICES: [&str; 6] = [
    "Residential Duct Cleaning",
    "Commercial Duct Cleaning",
    "Dryer Vent Cleaning",
    "Sanitization Services",
    "HVAC Maintenance",
    "Air Quality Testing",
];

#[derive(Clone, Default, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub property_type: String,
    pub square_footage: String,
    pub services: Vec<String>,
    pub urgency: String,
    pub additional_info: String,
}

#[derive(Clone, Default, PartialEq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub inquiry_type: String,
    pub services: Vec<String>,
    pub preferred_contact: String,
    pub best_time: String,
    pub message: String,
    pub address: String,
    pub urgency: String,
    pub heard_about_us: String,
}

pub fn validate_quote(record: &QuoteRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_min(&mut errors, "first_name", &record.first_name, 2, "First name must be at least 2 characters");
    require_min(&mut errors, "last_name", &record.last_name, 2, "Last name must be at least 2 characters");
    if !is_valid_email(&record.email) {
        errors.insert("email", "Please enter a valid email address".to_string());
    }
    if !is_valid_phone(&record.phone) {
        errors.insert("phone", "Please enter a valid phone number".to_string());
    }
    require_min(&mut errors, "address", &record.address, 5, "Please enter your full address");
    require_min(&mut errors, "city", &record.city, 2, "Please enter your city");
    if !is_valid_postal_code(&record.postal_code) {
        errors.insert("postal_code", "Please enter a valid postal code".to_string());
    }
    if !is_member(&record.property_type, PROPERTY_TYPES.iter().map(|(value, _)| *value)) {
        errors.insert("property_type", "Please select a property type".to_string());
    }
    if record.square_footage.is_empty() {
        errors.insert("square_footage", "Please select square footage".to_string());
    }
    if record.services.is_empty() {
        errors.insert("services", "Please select at least one service".to_string());
    }
    if !is_member(&record.urgency, QUOTE_URGENCY.iter().map(|(value, _, _)| *value)) {
        errors.insert("urgency", "Please select when you need service".to_string());
    }
    errors
}

pub fn validate_contact(record: &ContactRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require_min(&mut errors, "first_name", &record.first_name, 2, "First name must be at least 2 characters");
    require_min(&mut errors, "last_name", &record.last_name, 2, "Last name must be at least 2 characters");
    if !is_valid_email(&record.email) {
        errors.insert("email", "Please enter a valid email address".to_string());
    }
    if !is_valid_phone(&record.phone) {
        errors.insert("phone", "Please enter a valid phone number".to_string());
    }
    require_min(&mut errors, "subject", &record.subject, 5, "Subject must be at least 5 characters");
    if !is_member(&record.inquiry_type, INQUIRY_TYPES.iter().map(|(value, _, _)| *value)) {
        errors.insert("inquiry_type", "Please select an inquiry type".to_string());
    }
    if !is_member(&record.preferred_contact, PREFERRED_CONTACT.iter().map(|(value, _)| *value)) {
        errors.insert("preferred_contact", "Please select how we should reach you".to_string());
    }
    if record.best_time.is_empty() {
        errors.insert("best_time", "Please select the best time to contact you".to_string());
    }
    require_min(&mut errors, "message", &record.message, 10, "Message must be at least 10 characters");
    if !is_member(&record.urgency, CONTACT_URGENCY.iter().map(|(value, _, _)| *value)) {
        errors.insert("urgency", "Please select an urgency level".to_string());
    }
    errors
}

fn require_min(errors: &mut FieldErrors, field: &'static str, value: &str, min: usize, message: &str) {
    if value.trim().chars().count() < min {
        errors.insert(field, message.to_string());
    }
}

fn is_member<'a>(value: &str, mut allowed: impl Iterator<Item = &'a str>) -> bool {
    allowed.any(|candidate| candidate == value)
}

fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Canadian postal code, `A1A 1A1`. Only a single space between the two
/// halves is allowed, never scattered whitespace.
fn is_valid_postal_code(value: &str) -> bool {
    let mut compact: Vec<char> = value.trim().chars().collect();
    if compact.len() == 7 {
        if compact[3] != ' ' {
            return false;
        }
        compact.remove(3);
    }
    compact.len() == 6
        && compact.iter().enumerate().all(|(i, c)| {
            if i % 2 == 0 {
                c.is_ascii_alphabetic()
            } else {
                c.is_ascii_digit()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_quote() -> QuoteRequest {
        QuoteRequest {
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            phone: "(416) 555-0182".to_string(),
            address: "123 Main Street".to_string(),
            city: "Toronto".to_string(),
            postal_code: "M5V 3A8".to_string(),
            property_type: "house".to_string(),
            square_footage: "1000-2000".to_string(),
            services: vec!["duct-cleaning".to_string()],
            urgency: "week".to_string(),
            additional_info: String::new(),
        }
    }

    fn filled_contact() -> ContactRequest {
        ContactRequest {
            first_name: "Michael".to_string(),
            last_name: "Chen".to_string(),
            email: "michael@example.com".to_string(),
            phone: "905-555-0134".to_string(),
            subject: "Duct cleaning for a condo".to_string(),
            inquiry_type: "quote".to_string(),
            services: vec![],
            preferred_contact: "email".to_string(),
            best_time: TIME_SLOTS[0].to_string(),
            message: "Looking for a quote on a two bedroom condo downtown.".to_string(),
            address: String::new(),
            urgency: "medium".to_string(),
            heard_about_us: String::new(),
        }
    }

    #[test]
    fn valid_quote_has_no_errors() {
        assert!(validate_quote(&filled_quote()).is_empty());
    }

    #[test]
    fn valid_contact_has_no_errors() {
        assert!(validate_contact(&filled_contact()).is_empty());
    }

    #[test]
    fn every_missing_quote_field_is_reported_together() {
        let errors = validate_quote(&QuoteRequest::default());
        for field in [
            "first_name",
            "last_name",
            "email",
            "phone",
            "address",
            "city",
            "postal_code",
            "property_type",
            "square_footage",
            "services",
            "urgency",
        ] {
            assert!(errors.contains_key(field), "expected an error for {field}");
        }
    }

    #[test]
    fn optional_fields_never_fail_validation() {
        let mut record = filled_quote();
        record.additional_info = String::new();
        assert!(validate_quote(&record).is_empty());

        let mut contact = filled_contact();
        contact.address = String::new();
        contact.heard_about_us = String::new();
        contact.services = vec![];
        assert!(validate_contact(&contact).is_empty());
    }

    #[test]
    fn quote_requires_at_least_one_service() {
        let mut record = filled_quote();
        record.services.clear();
        let errors = validate_quote(&record);
        assert_eq!(errors.get("services").map(String::as_str), Some("Please select at least one service"));
    }

    #[test]
    fn email_shape_is_checked() {
        let mut record = filled_quote();
        for bad in ["", "plain", "missing-domain@", "@example.com", "a@b", "a@.com", "a@example."] {
            record.email = bad.to_string();
            assert!(validate_quote(&record).contains_key("email"), "{bad:?} should fail");
        }
        record.email = "name@mail.example.ca".to_string();
        assert!(!validate_quote(&record).contains_key("email"));
    }

    #[test]
    fn phone_needs_ten_digits_anywhere_in_the_string() {
        let mut record = filled_quote();
        record.phone = "555-0134".to_string();
        assert!(validate_quote(&record).contains_key("phone"));
        record.phone = "+1 (416) 555-0134".to_string();
        assert!(!validate_quote(&record).contains_key("phone"));
    }

    #[test]
    fn postal_code_accepts_both_spacings() {
        let mut record = filled_quote();
        for good in ["M5V 3A8", "m5v3a8", " M5V 3A8 "] {
            record.postal_code = good.to_string();
            assert!(!validate_quote(&record).contains_key("postal_code"), "{good:?} should pass");
        }
        for bad in ["", "12345", "M5V", "M5V 3A", "55V 3A8", "M5V-3A8"] {
            record.postal_code = bad.to_string();
            assert!(validate_quote(&record).contains_key("postal_code"), "{bad:?} should fail");
        }
    }

    #[test]
    fn postal_code_rejects_scattered_whitespace() {
        let mut record = filled_quote();
        for bad in ["M 5 V 3 A 8", "M5 V3A8", "M5V  3A8", "M5V3 A8"] {
            record.postal_code = bad.to_string();
            assert!(validate_quote(&record).contains_key("postal_code"), "{bad:?} should fail");
        }
    }

    #[test]
    fn enum_fields_reject_values_outside_the_option_set() {
        let mut record = filled_quote();
        record.property_type = "castle".to_string();
        record.urgency = "yesterday".to_string();
        let errors = validate_quote(&record);
        assert!(errors.contains_key("property_type"));
        assert!(errors.contains_key("urgency"));
    }

    #[test]
    fn whitespace_does_not_satisfy_minimum_lengths() {
        let mut record = filled_quote();
        record.first_name = "   ".to_string();
        assert!(validate_quote(&record).contains_key("first_name"));
    }

    #[test]
    fn submission_is_refused_while_the_record_is_invalid() {
        let mut record = filled_quote();
        record.email = "nope".to_string();
        let refused = begin_submission(&record, validate_quote);
        assert!(matches!(refused, Err(ref errors) if errors.contains_key("email")));
    }

    #[test]
    fn submission_begins_once_the_record_is_valid() {
        assert_eq!(
            begin_submission(&filled_quote(), validate_quote),
            Ok(FormStatus::Submitting)
        );
    }

    #[test]
    fn successful_submission_lands_submitted_with_an_empty_record() {
        let record = filled_quote();
        assert_eq!(begin_submission(&record, validate_quote), Ok(FormStatus::Submitting));
        let (status, reset): (FormStatus, QuoteRequest) = finish_submission();
        assert_eq!(status, FormStatus::Submitted);
        assert_eq!(reset, QuoteRequest::default());
        // A fresh record is gated again until the visitor fills it back in.
        assert!(begin_submission(&reset, validate_quote).is_err());
    }

    #[test]
    fn quote_payload_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(filled_quote()).expect("serializable");
        assert!(json.get("firstName").is_some());
        assert!(json.get("postalCode").is_some());
        assert!(json.get("additionalInfo").is_some());
    }
}
