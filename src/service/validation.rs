//! Request validation: required fields and simple formats.

use crate::error::AppError;
use regex::Regex;

/// A field value that can be absent in practice even when the JSON key exists.
pub trait Present {
    fn is_present(&self) -> bool;
}

impl Present for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl Present for i64 {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Present for Vec<T> {
    fn is_present(&self) -> bool {
        true
    }
}

/// Collects every missing required field so the 400 lists all of them at once.
#[derive(Debug, Default)]
pub struct RequestValidator {
    missing: Vec<&'static str>,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require<T: Present>(mut self, field: &'static str, value: &Option<T>) -> Self {
        if !value.as_ref().is_some_and(Present::is_present) {
            self.missing.push(field);
        }
        self
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingFields(self.missing))
        }
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    let re = Regex::new(EMAIL_PATTERN)
        .map_err(|_| AppError::BadRequest(format!("padrão inválido para {}", field)))?;
    if re.is_match(value.trim()) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!("{} deve ser um email válido", field)))
    }
}

/// Treat blank strings as absent so COALESCE keeps the stored value.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
