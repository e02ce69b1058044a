#![allow(non_snake_case)]

use dioxus::prelude::*;

use foodgram::form::{FormWithValidation, SignUpField, SignUpFormValues};

use crate::{components::floating_label_inputs::FloatingLabelInput, form::use_form_with_validation};

/// Registration form. `on_sign_up` receives the field values on submit.
///
/// The submit button stays disabled until every field is valid.
#[component]
pub fn SignUpForm(on_sign_up: EventHandler<SignUpFormValues>) -> Element {
    let form = use_form_with_validation();

    rsx! { SignUpFormFields { form, on_sign_up } }
}

#[component]
fn SignUpFormFields(
    form: Signal<FormWithValidation>,
    on_sign_up: EventHandler<SignUpFormValues>,
) -> Element {
    let is_valid = form.read().is_valid();

    rsx! {
        form {
            class: "flex flex-col justify-center gap-4 px-10 pb-8",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                submit_sign_up(&form.read(), on_sign_up);
            },

            div {
                class: "flex flex-row justify-between gap-4",

                SignUpInput { form, field: SignUpField::FirstName, autofocus: true }
                SignUpInput { form, field: SignUpField::LastName }
            }

            SignUpInput { form, field: SignUpField::Username }
            SignUpInput { form, field: SignUpField::Email }
            SignUpInput { form, field: SignUpField::Password }

            button {
                class: "btn btn-primary mt-2",
                r#type: "submit",
                disabled: !is_valid,
                "Create account"
            }
        }
    }
}

fn submit_sign_up(form: &FormWithValidation, on_sign_up: EventHandler<SignUpFormValues>) {
    form.submit(|values| on_sign_up.call(values));
}

#[component]
fn SignUpInput(
    form: Signal<FormWithValidation>,
    field: SignUpField,
    #[props(default)] autofocus: bool,
) -> Element {
    let mut form = form;
    let value = form.read().values().get(field).to_string();
    let error = form.read().displayed_error(field).map(str::to_string);

    rsx! {
        FloatingLabelInput {
            name: field.name(),
            label: field.label(),
            input_type: field.input_type(),
            required: true,
            value,
            error,
            autofocus,
            oninput: move |value: String| form.write().handle_change(field, value),
            onfocusout: move |_| form.write().touch(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    thread_local! {
        static SIGNED_UP: RefCell<Vec<SignUpFormValues>> = const { RefCell::new(Vec::new()) };
    }

    fn ann_lee() -> SignUpFormValues {
        SignUpFormValues {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            username: "annlee".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn filled_form() -> FormWithValidation {
        let values = ann_lee();
        let mut form = FormWithValidation::new();
        for field in SignUpField::ALL {
            form.handle_change(field, values.get(field));
        }
        form
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_sign_up_form() -> String {
        render(|| {
            rsx! {
                SignUpForm { on_sign_up: move |_| {} }
            }
        })
    }

    #[wasm_bindgen_test]
    fn test_renders_every_field_as_required_input() {
        let html = render_sign_up_form();

        for field in SignUpField::ALL {
            assert!(
                html.contains(&format!(r#"name="{}""#, field.name())),
                "missing input {field}"
            );
            assert!(html.contains(field.label()), "missing label {field}");
        }
        assert_eq!(html.matches("<input").count(), 5);
        assert_eq!(html.matches("required").count(), 5);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(r#"type="password""#));
    }

    #[wasm_bindgen_test]
    fn test_submit_is_disabled_while_form_is_empty() {
        let html = render_sign_up_form();

        assert!(html.contains("Create account"));
        assert!(html.contains("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_submit_is_enabled_once_every_field_is_valid() {
        let html = render(|| {
            let form = use_signal(filled_form);

            rsx! {
                SignUpFormFields { form, on_sign_up: move |_| {} }
            }
        });

        assert!(html.contains("Create account"));
        assert!(html.contains(r#"value="annlee""#));
        assert!(!html.contains("disabled"));
    }

    #[wasm_bindgen_test]
    fn test_submit_hands_values_to_on_sign_up_once() {
        SIGNED_UP.with(|signed_up| signed_up.borrow_mut().clear());

        render(|| {
            let form = use_signal(filled_form);
            let on_sign_up = EventHandler::new(|values: SignUpFormValues| {
                SIGNED_UP.with(|signed_up| signed_up.borrow_mut().push(values));
            });
            use_hook(move || submit_sign_up(&form.read(), on_sign_up));

            rsx! {
                SignUpFormFields { form, on_sign_up }
            }
        });

        SIGNED_UP.with(|signed_up| {
            assert_eq!(*signed_up.borrow(), vec![ann_lee()]);
        });
    }
}
