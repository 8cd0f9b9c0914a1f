use thiserror::Error;

use crate::types::NewEntry;

/// Why a single form field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required")]
    RequiredFieldMissing,
    #[error("must be 0 or more")]
    OutOfRange,
    #[error("must be a whole number")]
    NotANumber,
}

/// Raw text values as typed into the form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub title: String,
    pub time: String,
}

/// Per-field validation outcome. `None` means the field is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub title: Option<ValidationError>,
    pub time: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.time.is_none()
    }
}

pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredFieldMissing);
    }
    Ok(trimmed.to_string())
}

pub fn validate_time(time: &str) -> Result<u32, ValidationError> {
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::RequiredFieldMissing);
    }
    // Parse wide first so "-3" is reported as out of range rather than malformed.
    let value: i64 = match trimmed.parse() {
        Ok(value) => value,
        Err(_) if is_integer_text(trimmed) => return Err(ValidationError::OutOfRange),
        Err(_) => return Err(ValidationError::NotANumber),
    };
    if value < 0 {
        return Err(ValidationError::OutOfRange);
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange)
}

fn is_integer_text(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Check both fields independently so every problem is reported at once.
pub fn validate(values: &FormValues) -> Result<NewEntry, FieldErrors> {
    let title = validate_title(&values.title);
    let time = validate_time(&values.time);
    match (title, time) {
        (Ok(title), Ok(time)) => Ok(NewEntry { title, time }),
        (title, time) => Err(FieldErrors {
            title: title.err(),
            time: time.err(),
        }),
    }
}
