//! Validation of interest signups submitted through the directory.

use anyhow::{Context, Result};
use regex::Regex;
use thiserror::Error;

use crate::util::non_blank;

const MAX_NAME_CHARS: usize = 120;
const MAX_EMAIL_CHARS: usize = 254;
const MAX_ORGANIZATION_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub message: Option<String>,
}

/// A signup that passed validation, with values trimmed.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestSignup {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
#[error("signup rejected: {}", .problems.join("; "))]
pub struct SignupRejected {
    pub problems: Vec<String>,
}

pub struct SignupValidator {
    email_pattern: Regex,
}

impl SignupValidator {
    pub fn new() -> Result<Self> {
        let email_pattern = Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$")
            .context("failed to compile email regex")?;
        Ok(Self { email_pattern })
    }

    /// Checks every field and reports all problems at once.
    pub fn validate(&self, form: &SignupForm) -> Result<InterestSignup, SignupRejected> {
        let mut problems = Vec::new();

        let name = form.name.trim();
        if name.is_empty() {
            problems.push("name is required".to_string());
        } else if name.chars().count() > MAX_NAME_CHARS {
            problems.push(format!("name must be at most {MAX_NAME_CHARS} characters"));
        }

        let email = form.email.trim();
        if email.is_empty() {
            problems.push("email is required".to_string());
        } else if email.chars().count() > MAX_EMAIL_CHARS {
            problems.push(format!("email must be at most {MAX_EMAIL_CHARS} characters"));
        } else if !self.email_pattern.is_match(email) {
            problems.push("email must look like name@example.org".to_string());
        }

        let organization = non_blank(form.organization.as_deref());
        if organization
            .as_ref()
            .is_some_and(|value| value.chars().count() > MAX_ORGANIZATION_CHARS)
        {
            problems.push(format!(
                "organization must be at most {MAX_ORGANIZATION_CHARS} characters"
            ));
        }

        let message = non_blank(form.message.as_deref());
        if message
            .as_ref()
            .is_some_and(|value| value.chars().count() > MAX_MESSAGE_CHARS)
        {
            problems.push(format!("message must be at most {MAX_MESSAGE_CHARS} characters"));
        }

        if !problems.is_empty() {
            return Err(SignupRejected { problems });
        }

        Ok(InterestSignup {
            name: name.to_string(),
            email: email.to_string(),
            organization,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> SignupForm {
        SignupForm {
            name: name.to_string(),
            email: email.to_string(),
            ..SignupForm::default()
        }
    }

    #[test]
    fn accepts_and_trims_valid_signup() {
        let validator = SignupValidator::new().expect("validator");
        let signup = validator
            .validate(&SignupForm {
                name: "  Ada Lovelace ".to_string(),
                email: " ada@example.org ".to_string(),
                organization: Some("  ".to_string()),
                message: Some(" Happy to help. ".to_string()),
            })
            .expect("valid signup");

        assert_eq!(signup.name, "Ada Lovelace");
        assert_eq!(signup.email, "ada@example.org");
        assert_eq!(signup.organization, None);
        assert_eq!(signup.message.as_deref(), Some("Happy to help."));
    }

    #[test]
    fn reports_every_problem() {
        let validator = SignupValidator::new().expect("validator");
        let err = validator.validate(&form(" ", "")).expect_err("blank form");

        assert_eq!(
            err.problems,
            vec!["name is required", "email is required"]
        );
        assert!(err.to_string().contains("name is required; email is required"));
    }

    #[test]
    fn rejects_malformed_email() {
        let validator = SignupValidator::new().expect("validator");
        for email in ["ada", "ada@", "ada@example", "a da@example.org", "ada@@example.org"] {
            let err = validator
                .validate(&form("Ada", email))
                .expect_err("malformed email");
            assert_eq!(err.problems.len(), 1, "{email}");
        }
        assert!(validator.validate(&form("Ada", "ada@mail.example.org")).is_ok());
    }

    #[test]
    fn rejects_overlong_fields() {
        let validator = SignupValidator::new().expect("validator");
        let mut long = form(&"n".repeat(121), "ada@example.org");
        long.message = Some("m".repeat(2001));

        let err = validator.validate(&long).expect_err("overlong");
        assert_eq!(err.problems.len(), 2);
        assert!(err.problems[0].starts_with("name"));
        assert!(err.problems[1].starts_with("message"));
    }
}
