//! Caller-side input validation.
//!
//! The generator assumes valid, ordered instants; this module is where the
//! raw request gets checked before the generator is ever invoked. Detects:
//! - Missing start or end instant
//! - Unparseable date/time text
//! - `start >= end` ordering violations
//!
//! An unrecognized product label is deliberately NOT a validation error:
//! it parses to `None` and the generator returns an empty schedule, which
//! the presentation layer renders as a "no reports generated" notice.

use chrono::NaiveDateTime;

use crate::models::ProductType;

/// Validation result: parsed inputs, or every detected problem.
pub type ValidationResult = Result<ScheduleInput, Vec<ValidationError>>;

/// A raw, as-entered scheduling request.
#[derive(Debug, Clone, Default)]
pub struct ScheduleRequest {
    /// Fill start date/time text.
    pub start_time: String,
    /// Fill end date/time text.
    pub end_time: String,
    /// Product type label (expected `"Aseptic"` or `"Terminal"`).
    pub product_type: String,
}

impl ScheduleRequest {
    /// Creates a request from raw field values.
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        product_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            product_type: product_type.into(),
        }
    }
}

/// A validated, parsed request ready for the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleInput {
    /// Fill start. Always strictly before `end_time`.
    pub start_time: NaiveDateTime,
    /// Fill end.
    pub end_time: NaiveDateTime,
    /// Recognized product type, or `None` for an unknown label.
    pub product_type: Option<ProductType>,
}

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required field is empty.
    MissingInput,
    /// A date/time field could not be parsed.
    UnparseableInstant,
    /// Start time is not strictly before end time.
    InvalidOrdering,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parses a date/time field.
///
/// Accepts the `datetime-local` shapes `YYYY-MM-DDTHH:MM[:SS]` and their
/// space-separated equivalents.
pub fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text.trim(), fmt).ok())
}

/// Validates a raw request.
///
/// Collects all detected problems rather than stopping at the first, so
/// the caller can surface every issue at once.
///
/// # Examples
///
/// ```
/// use em_schedule::validation::{validate_request, ScheduleRequest, ValidationErrorKind};
///
/// let ok = validate_request(&ScheduleRequest::new(
///     "2024-01-01T08:00", "2024-01-01T20:00", "Aseptic",
/// ));
/// assert!(ok.is_ok());
///
/// let swapped = validate_request(&ScheduleRequest::new(
///     "2024-01-01T20:00", "2024-01-01T08:00", "Aseptic",
/// ));
/// let errors = swapped.unwrap_err();
/// assert_eq!(errors[0].kind, ValidationErrorKind::InvalidOrdering);
/// ```
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    let start = check_instant(&request.start_time, "start filling date and time", &mut errors);
    let end = check_instant(&request.end_time, "end filling date and time", &mut errors);

    if let (Some(start_time), Some(end_time)) = (start, end) {
        if start_time >= end_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOrdering,
                "Start time must be before end time",
            ));
        } else {
            return Ok(ScheduleInput {
                start_time,
                end_time,
                product_type: ProductType::parse(&request.product_type),
            });
        }
    }

    Err(errors)
}

fn check_instant(
    text: &str,
    field: &str,
    errors: &mut Vec<ValidationError>,
) -> Option<NaiveDateTime> {
    if text.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingInput,
            format!("Please enter the {field}"),
        ));
        return None;
    }
    match parse_instant(text) {
        Some(instant) => Some(instant),
        None => {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnparseableInstant,
                format!("Could not parse the {field}: '{}'", text.trim()),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_instant_accepted_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(parse_instant("2024-01-01T08:30"), Some(expected));
        assert_eq!(parse_instant("2024-01-01 08:30"), Some(expected));
        assert_eq!(parse_instant("2024-01-01T08:30:00"), Some(expected));
        assert_eq!(parse_instant("  2024-01-01 08:30:00  "), Some(expected));
        assert_eq!(parse_instant("01/01/2024 8:30"), None);
        assert_eq!(parse_instant(""), None);
    }

    #[test]
    fn test_valid_request_parses() {
        let input = validate_request(&ScheduleRequest::new(
            "2024-01-01T08:00",
            "2024-01-01T20:00",
            "Terminal",
        ))
        .unwrap();
        assert!(input.start_time < input.end_time);
        assert_eq!(input.product_type, Some(ProductType::Terminal));
    }

    #[test]
    fn test_unknown_product_label_is_not_an_error() {
        let input = validate_request(&ScheduleRequest::new(
            "2024-01-01T08:00",
            "2024-01-01T20:00",
            "Unknown",
        ))
        .unwrap();
        assert_eq!(input.product_type, None);
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let errors = validate_request(&ScheduleRequest::new("", "", "Aseptic")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MissingInput));
    }

    #[test]
    fn test_unparseable_instant_reported() {
        let errors = validate_request(&ScheduleRequest::new(
            "yesterday",
            "2024-01-01T20:00",
            "Aseptic",
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::UnparseableInstant);
        assert!(errors[0].message.contains("yesterday"));
    }

    #[test]
    fn test_equal_instants_rejected() {
        let errors = validate_request(&ScheduleRequest::new(
            "2024-01-01T08:00",
            "2024-01-01T08:00",
            "Aseptic",
        ))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidOrdering);
    }

    #[test]
    fn test_reversed_instants_rejected() {
        let errors = validate_request(&ScheduleRequest::new(
            "2024-01-02T08:00",
            "2024-01-01T08:00",
            "Aseptic",
        ))
        .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidOrdering);
    }
}
