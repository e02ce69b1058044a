use anyhow::anyhow;
use dioxus::prelude::{use_signal, Signal};
use secrecy::Secret;

use foodgram::{auth::Credentials, form::FormWithValidation};

/// Sign-up form state shared by all inputs of a form.
pub fn use_form_with_validation() -> Signal<FormWithValidation> {
    use_signal(FormWithValidation::new)
}

pub struct SignInFormValues {
    pub email: String,
    pub password: String,
}

impl TryFrom<SignInFormValues> for Credentials {
    type Error = anyhow::Error;

    fn try_from(form_values: SignInFormValues) -> Result<Self, Self::Error> {
        if form_values.email.is_empty() {
            return Err(anyhow!("email is required"));
        }

        Ok(Self {
            email: form_values.email.parse()?,
            password: Secret::new(form_values.password.parse()?),
        })
    }
}
