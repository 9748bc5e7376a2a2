use crate::auth::use_admin_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::AccessState;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

/// Sign-in page for the admin dashboard.
///
/// Submitting opens a new check epoch and moves the gate to `Verifying`;
/// the resolution is applied only while that epoch is still current, so a
/// resubmit quietly discards the superseded attempt. A failed directory
/// check leaves no session behind and lands back on the signed-out form.
#[component]
pub fn Login() -> Element {
    let mut auth = use_admin_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already granted (e.g. back-navigation after sign-in)
    if auth.is_granted() {
        navigator().push(Route::Overview {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let epoch = auth.begin_check();
        auth.access.set(AccessState::Verifying);

        match server::api::admin_login(email(), password()).await {
            Ok(session) => {
                if auth.resolve_check(epoch, AccessState::Granted(session)) {
                    navigator().push(Route::Overview {});
                }
            }
            Err(e) => {
                if auth.resolve_check(epoch, AccessState::SignedOut) {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Admin Sign In" }
                    CardDescription { "Jos Vendors Hub admin dashboard" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "admin@josvendors.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link", "Admin access only. Contact support if you need an account." }
                }
            }
        }
    }
}
