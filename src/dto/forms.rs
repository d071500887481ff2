//! HTML form payloads and their validation rules.
//!
//! Every field defaults to an empty string so a missing field is reported
//! next to its input instead of failing extraction.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::model::role::Role;

/// Field name to messages, as shown beside each input.
pub type FormErrors = BTreeMap<String, Vec<String>>;

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("This field is required.")));
    }
    Ok(())
}

fn validate_role(value: &str) -> Result<(), ValidationError> {
    validate_required(value)?;
    if value.parse::<Role>().is_ok() {
        return Ok(());
    }
    Err(ValidationError::new("role")
        .with_message(Cow::Borrowed("Role must be either \"student\" or \"faculty\".")))
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub username: String,
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub password: String,
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub username: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        length(min = 6, message = "Password must be at least 6 characters long.")
    )]
    pub password: String,
    #[serde(default)]
    #[validate(
        custom(function = "validate_required"),
        must_match(other = "password", message = "Passwords must match.")
    )]
    pub confirm_password: String,
    #[serde(default)]
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

impl RegisterForm {
    /// The role after validation succeeded.
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ActivityForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub activity: String,
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub days_spent: String,
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct AchievementForm {
    #[serde(default)]
    #[validate(custom(function = "validate_required"))]
    pub achievement: String,
}

/// Values echoed back into a re-rendered form. Passwords are never echoed.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FormEcho {
    #[serde(flatten)]
    pub values: BTreeMap<&'static str, String>,
}

impl From<&LoginForm> for FormEcho {
    fn from(form: &LoginForm) -> Self {
        FormEcho {
            values: BTreeMap::from([("username", form.username.clone())]),
        }
    }
}

impl From<&RegisterForm> for FormEcho {
    fn from(form: &RegisterForm) -> Self {
        FormEcho {
            values: BTreeMap::from([("username", form.username.clone()), ("role", form.role.clone())]),
        }
    }
}

impl From<&ActivityForm> for FormEcho {
    fn from(form: &ActivityForm) -> Self {
        FormEcho {
            values: BTreeMap::from([
                ("activity", form.activity.clone()),
                ("days_spent", form.days_spent.clone()),
            ]),
        }
    }
}

impl From<&AchievementForm> for FormEcho {
    fn from(form: &AchievementForm) -> Self {
        FormEcho {
            values: BTreeMap::from([("achievement", form.achievement.clone())]),
        }
    }
}

/// Flattens validator output into per-field display messages.
pub fn field_messages(errors: &ValidationErrors) -> FormErrors {
    let mut out = FormErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("Invalid value ({}).", e.code),
            })
            .collect();
        out.insert(field.to_string(), messages);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, confirm: &str, role: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        let form = register("alice", "secret1", "secret1", "student");
        assert!(form.validate().is_ok());
        assert_eq!(form.parsed_role(), Some(Role::Student));
    }

    #[test]
    fn test_password_confirmation_mismatch() {
        let form = register("alice", "secret1", "secret2", "student");
        let errors = field_messages(&form.validate().unwrap_err());
        assert_eq!(errors.get("confirm_password").unwrap(), &vec!["Passwords must match.".to_string()]);
        assert!(!errors.contains_key("password"));
    }

    #[test]
    fn test_short_password() {
        let form = register("alice", "abc", "abc", "faculty");
        let errors = field_messages(&form.validate().unwrap_err());
        assert!(errors.contains_key("password"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_unknown_role() {
        let form = register("alice", "secret1", "secret1", "admin");
        let errors = field_messages(&form.validate().unwrap_err());
        assert_eq!(
            errors.get("role").unwrap(),
            &vec!["Role must be either \"student\" or \"faculty\".".to_string()]
        );
    }

    #[test]
    fn test_blank_fields_are_required() {
        let form = ActivityForm {
            activity: "   ".to_string(),
            days_spent: String::new(),
        };
        let errors = field_messages(&form.validate().unwrap_err());
        assert_eq!(errors.get("activity").unwrap(), &vec!["This field is required.".to_string()]);
        assert!(errors.contains_key("days_spent"));

        let form = LoginForm::default();
        let errors = field_messages(&form.validate().unwrap_err());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_days_spent_is_free_text() {
        let form = ActivityForm {
            activity: "Club".to_string(),
            days_spent: "a few".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_echo_skips_passwords() {
        let form = register("alice", "secret1", "secret1", "student");
        let echo = serde_json::to_value(FormEcho::from(&form)).unwrap();
        assert_eq!(echo["username"], "alice");
        assert!(echo.get("password").is_none());
    }
}
