//! State of the sign-up form: field values, their validation and the
//! operations the form inputs are bound to.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use serde::{Deserialize, Serialize};

use crate::user::{parse_sign_up_email, Password, Username, NAME_MAX_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignUpField {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
}

impl SignUpField {
    /// Fields in rendering order.
    pub const ALL: [SignUpField; 5] = [
        SignUpField::FirstName,
        SignUpField::LastName,
        SignUpField::Username,
        SignUpField::Email,
        SignUpField::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SignUpField::FirstName => "first_name",
            SignUpField::LastName => "last_name",
            SignUpField::Username => "username",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignUpField::FirstName => "Name",
            SignUpField::LastName => "Surname",
            SignUpField::Username => "Username",
            SignUpField::Email => "E-mail",
            SignUpField::Password => "Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            _ => "text",
        }
    }

    /// Checks `value` against the rule of this field.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            return Err(format!("{} is required", self.label()));
        }

        match self {
            SignUpField::FirstName | SignUpField::LastName => {
                if value.trim().chars().count() > NAME_MAX_LENGTH {
                    return Err(format!(
                        "{} must be at most {NAME_MAX_LENGTH} characters long",
                        self.label()
                    ));
                }
            }
            SignUpField::Username => {
                value
                    .parse::<Username>()
                    .map_err(|err| err.to_string())?;
            }
            SignUpField::Email => {
                parse_sign_up_email(value).map_err(|err| err.to_string())?;
            }
            SignUpField::Password => {
                value
                    .parse::<Password>()
                    .map_err(|err| err.to_string())?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for SignUpField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpFormValues {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpFormValues {
    pub fn get(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::FirstName => &self.first_name,
            SignUpField::LastName => &self.last_name,
            SignUpField::Username => &self.username,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
        }
    }

    /// Returns a copy of these values where only `field` is replaced.
    pub fn with_field(&self, field: SignUpField, value: impl Into<String>) -> Self {
        let mut values = self.clone();
        let slot = match field {
            SignUpField::FirstName => &mut values.first_name,
            SignUpField::LastName => &mut values.last_name,
            SignUpField::Username => &mut values.username,
            SignUpField::Email => &mut values.email,
            SignUpField::Password => &mut values.password,
        };
        *slot = value.into();
        values
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<SignUpField, String>,
}

impl FormValidation {
    pub fn of(values: &SignUpFormValues) -> Self {
        let errors = SignUpField::ALL
            .into_iter()
            .filter_map(|field| {
                field
                    .validate(values.get(field))
                    .err()
                    .map(|error| (field, error))
            })
            .collect();

        Self { errors }
    }

    pub fn errors(&self) -> &BTreeMap<SignUpField, String> {
        &self.errors
    }

    pub fn error(&self, field: SignUpField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Values, validation result and edited fields of the sign-up form.
///
/// Every field is validated on each change; errors are only displayed for
/// the fields the user already edited or left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormWithValidation {
    values: SignUpFormValues,
    validation: FormValidation,
    touched: BTreeSet<SignUpField>,
}

impl Default for FormWithValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl FormWithValidation {
    pub fn new() -> Self {
        let values = SignUpFormValues::default();
        let validation = FormValidation::of(&values);

        Self {
            values,
            validation,
            touched: BTreeSet::new(),
        }
    }

    pub fn values(&self) -> &SignUpFormValues {
        &self.values
    }

    pub fn errors(&self) -> &BTreeMap<SignUpField, String> {
        self.validation.errors()
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn displayed_error(&self, field: SignUpField) -> Option<&str> {
        if self.touched.contains(&field) {
            self.validation.error(field)
        } else {
            None
        }
    }

    pub fn handle_change(&mut self, field: SignUpField, value: impl Into<String>) {
        self.values = self.values.with_field(field, value);
        self.touched.insert(field);
        self.validation = FormValidation::of(&self.values);
    }

    pub fn touch(&mut self, field: SignUpField) {
        self.touched.insert(field);
    }

    pub fn reset_form(&mut self) {
        *self = Self::new();
    }

    /// Hands a snapshot of the current values to `on_submit`.
    pub fn submit<F>(&self, on_submit: F)
    where
        F: FnOnce(SignUpFormValues),
    {
        on_submit(self.values.clone());
    }
}
