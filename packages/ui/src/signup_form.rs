use dioxus::prelude::*;
use store::{password_strength, Action, AppState, Field, UserType};

use crate::components::{Button, ButtonVariant, Input, Textarea};
use crate::state::{dispatch, submit_signup, use_landing, use_mock_auth};
use crate::status::FormMessage;
use crate::strength_bar::PasswordStrengthBar;
use crate::views::ModalOverlay;

/// Input handler that writes one form field.
pub(crate) fn on_field(state: Signal<AppState>, field: Field) -> impl FnMut(FormEvent) + 'static {
    move |evt: FormEvent| dispatch(state, Action::SetField(field, evt.value()))
}

/// Signup modal: creates a profile and signs in as it.
#[component]
pub fn SignupForm() -> Element {
    let state = use_landing();
    let auth = use_mock_auth();
    let AppState {
        form,
        loading,
        message,
        ..
    } = state();
    let score = password_strength(&form.password);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_signup(state, auth.clone());
    };

    rsx! {
        ModalOverlay {
            title: "Signup",
            on_close: move |_| dispatch(state, Action::CloseModal),

            form {
                class: "mt-4 space-y-3",
                onsubmit: handle_submit,

                Input {
                    name: "fullName",
                    placeholder: "Full name",
                    value: form.full_name.clone(),
                    oninput: on_field(state, Field::FullName),
                }
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
                PasswordStrengthBar { score: score }
                Input {
                    name: "confirmPassword",
                    r#type: "password",
                    placeholder: "Confirm Password",
                    value: form.confirm_password.clone(),
                    oninput: on_field(state, Field::ConfirmPassword),
                }
                select {
                    class: "w-full p-3 border border-slate-200 rounded bg-white",
                    name: "userType",
                    value: "{form.user_type}",
                    onchange: move |evt: FormEvent| match evt.value().parse::<UserType>() {
                        Ok(user_type) => dispatch(state, Action::SetUserType(user_type)),
                        Err(err) => tracing::warn!("{}", err),
                    },
                    for user_type in UserType::ALL {
                        option {
                            key: "{user_type}",
                            value: "{user_type}",
                            selected: user_type == form.user_type,
                            "{user_type}"
                        }
                    }
                }
                Input {
                    name: "gradYear",
                    placeholder: "Graduation year",
                    value: form.grad_year.clone(),
                    oninput: on_field(state, Field::GradYear),
                }
                Textarea {
                    name: "bio",
                    placeholder: "Short bio",
                    rows: 3,
                    value: form.bio.clone(),
                    oninput: on_field(state, Field::Bio),
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
                        if loading { "Signing up..." } else { "Signup" }
                    }
                }
            }
        }
    }
}
