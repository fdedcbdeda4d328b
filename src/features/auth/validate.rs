//! Client-side validation for the account forms. Pure and synchronous; an
//! empty result is the precondition for submitting.

use std::collections::BTreeMap;

use super::fields::FieldSpec;
use super::types::FormValues;

/// Field key mapped to an error message, present only while that field fails.
pub type ValidationResult = BTreeMap<&'static str, String>;

/// Minimum password length enforced by the client for early UX feedback.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates `values` against the rendered field list. A key appears in the
/// result only when that field currently fails; absence means valid.
pub fn validate(fields: &[FieldSpec], values: &FormValues) -> ValidationResult {
    let mut errors = ValidationResult::new();

    for field in fields {
        let value = values.get(field.key).map(String::as_str).unwrap_or("");
        let trimmed = value.trim();

        if field.required && trimmed.is_empty() {
            errors.insert(field.key, format!("{} is required.", field.label));
            continue;
        }

        match field.key {
            "email" if !is_valid_email(trimmed) => {
                errors.insert(field.key, "Email address looks invalid.".to_string());
            }
            "password" if trimmed.len() < MIN_PASSWORD_LENGTH => {
                errors.insert(
                    field.key,
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters."),
                );
            }
            _ => {}
        }
    }

    errors
}

/// Checks the `local@domain.tld` shape: exactly one `@`, a non-empty local
/// part, a dotted domain with non-empty labels, and no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{MIN_PASSWORD_LENGTH, is_valid_email, validate};
    use crate::features::auth::fields::{LOGIN_FORM, SIGN_UP_FORM};
    use crate::features::auth::types::FormValues;

    fn values(pairs: &[(&'static str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(key, value)| (*key, (*value).to_string()))
            .collect()
    }

    #[test]
    fn valid_sign_up_values_pass() {
        let result = validate(
            SIGN_UP_FORM.fields,
            &values(&[
                ("firstName", "Ana"),
                ("lastName", "Lee"),
                ("email", "ana@x.com"),
                ("password", "secret1"),
            ]),
        );

        assert!(result.is_empty());
    }

    #[test]
    fn empty_required_fields_each_get_an_entry() {
        let result = validate(SIGN_UP_FORM.fields, &FormValues::new());

        assert_eq!(result.len(), SIGN_UP_FORM.fields.len());
        assert_eq!(result["firstName"], "First name is required.");
        assert_eq!(result["lastName"], "Last name is required.");
        assert_eq!(result["email"], "Email is required.");
        assert_eq!(result["password"], "Password is required.");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let result = validate(
            SIGN_UP_FORM.fields,
            &values(&[
                ("firstName", "   "),
                ("lastName", "Lee"),
                ("email", "ana@x.com"),
                ("password", "secret1"),
            ]),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result["firstName"], "First name is required.");
    }

    #[test]
    fn malformed_email_fails_the_login_form() {
        let result = validate(
            LOGIN_FORM.fields,
            &values(&[("email", "bad"), ("password", "secret1")]),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result["email"], "Email address looks invalid.");
    }

    #[test]
    fn short_password_reports_the_policy() {
        let result = validate(
            LOGIN_FORM.fields,
            &values(&[("email", "ana@x.com"), ("password", "abc")]),
        );

        assert_eq!(result.len(), 1);
        assert_eq!(
            result["password"],
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters.")
        );
    }

    #[test]
    fn messages_are_deterministic_across_passes() {
        let input = values(&[("email", "bad"), ("password", "abc")]);
        let first = validate(LOGIN_FORM.fields, &input);
        let second = validate(LOGIN_FORM.fields, &input);

        assert_eq!(first, second);
    }

    #[test]
    fn email_shape_accepts_common_addresses() {
        for address in [
            "ana@x.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.io",
        ] {
            assert!(is_valid_email(address), "rejected {address}");
        }
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        for address in [
            "",
            "bad",
            "@x.com",
            "ana@",
            "ana@nodot",
            "ana@x..com",
            "ana@.com",
            "ana@x.com.",
            "a na@x.com",
            "ana@x@y.com",
        ] {
            assert!(!is_valid_email(address), "accepted {address}");
        }
    }
}
