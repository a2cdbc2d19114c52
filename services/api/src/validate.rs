//! Declarative request-field validation
//!
//! Checks collect into a per-field error list that is returned verbatim as
//! the `error` payload of a 400 response. Rules mirror the wire contract:
//! length bounds, exact 42-character addresses, structural email checks,
//! integer minimums, and the 1-10 star range.

use crate::error::AppError;
use serde::Serialize;
use types::Address;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Length bounds in characters; `max` of None means unbounded above.
    pub fn length(
        &mut self,
        field: &'static str,
        value: &str,
        min: usize,
        max: Option<usize>,
        message: &'static str,
    ) -> &mut Self {
        let len = value.chars().count();
        if len < min || max.is_some_and(|m| len > m) {
            self.fail(field, message);
        }
        self
    }

    /// Exactly 42 characters, the opaque address format.
    pub fn address(&mut self, field: &'static str, value: &str, message: &'static str) -> &mut Self {
        if Address::try_new(value).is_none() {
            self.fail(field, message);
        }
        self
    }

    /// Structural email check: one `@` with a non-empty local part and a
    /// dotted domain, no whitespace anywhere.
    pub fn email(&mut self, field: &'static str, value: &str, message: &'static str) -> &mut Self {
        if !is_email(value) {
            self.fail(field, message);
        }
        self
    }

    pub fn min_int(
        &mut self,
        field: &'static str,
        value: u64,
        min: u64,
        message: &'static str,
    ) -> &mut Self {
        if value < min {
            self.fail(field, message);
        }
        self
    }

    /// Stars are integers in 1-10; zero is not allowed.
    pub fn stars(&mut self, field: &'static str, value: u32, message: &'static str) -> &mut Self {
        if !(1..=10).contains(&value) {
            self.fail(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.errors))
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs an interior dot.
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_failing_field() {
        let mut v = Validator::new();
        v.length("name", "ab", 3, Some(50), "Enter a valid name")
            .address("marketOwner", "0xshort", "Enter a valid owner address")
            .stars("stars", 0, "Invalid range(1-10)");

        let err = v.finish().unwrap_err();
        match err {
            AppError::Validation(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["name", "marketOwner", "stars"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_passing_validation_is_ok() {
        let mut v = Validator::new();
        v.length("name", "Shop1", 3, Some(50), "Enter a valid name")
            .min_int("marketId", 7, 1, "Enter a valid marketId")
            .stars("stars", 10, "Invalid range(1-10)");
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email("user@example.com"));
        assert!(is_email("a.b+c@mail.example.org"));
        assert!(!is_email("no-at-sign.example.com"));
        assert!(!is_email("user@nodot"));
        assert!(!is_email("user@.com"));
        assert!(!is_email("user name@example.com"));
        assert!(!is_email("@example.com"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let mut v = Validator::new();
        v.length("name", "héllo", 5, Some(5), "Enter a valid name");
        assert!(v.finish().is_ok());
    }
}
