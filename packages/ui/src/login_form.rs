use dioxus::prelude::*;
use store::{Action, AppState, Field};

use crate::components::{Button, ButtonVariant, Input};
use crate::signup_form::on_field;
use crate::state::{dispatch, submit_login, use_landing, use_mock_auth};
use crate::status::FormMessage;
use crate::views::ModalOverlay;

/// Login modal. Any credentials sign in as the newest profile.
#[component]
pub fn LoginForm() -> Element {
    let state = use_landing();
    let auth = use_mock_auth();
    let AppState {
        form,
        loading,
        message,
        ..
    } = state();

    rsx! {
        ModalOverlay {
            title: "Login",
            on_close: move |_| dispatch(state, Action::CloseModal),

            form {
                class: "mt-4 space-y-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit_login(state, auth.clone());
                },

                Input {
                    name: "email",
                    r#type: "email",
                    placeholder: "Email",
                    value: form.email.clone(),
                    oninput: on_field(state, Field::Email),
                }
                Input {
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: form.password.clone(),
                    oninput: on_field(state, Field::Password),
                }

                FormMessage { message: message.clone() }

                div {
                    class: "flex flex-col sm:flex-row justify-end gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| dispatch(state, Action::CloseModal),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: loading,
                        if loading { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
