use crate::auth::use_admin_auth;
use dioxus::prelude::*;
use shared_types::UpdateProfileRequest;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label, ToastOptions,
};
use std::collections::HashMap;

/// Profile tab: display name and phone for the signed-in admin. Saving
/// replaces the session payload held by the gate, so the navbar picks up
/// the new name without a re-check.
#[component]
pub fn ProfileTab() -> Element {
    let mut auth = use_admin_auth();
    let toast = use_toast();

    let session = auth.session();
    let mut display_name =
        use_signal(|| session.as_ref().map(|s| s.display_name.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        session
            .as_ref()
            .and_then(|s| s.phone.clone())
            .unwrap_or_default()
    });
    let email = session.as_ref().map(|s| s.email.clone()).unwrap_or_default();

    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = UpdateProfileRequest {
            display_name: display_name(),
            phone: {
                let p = phone();
                if p.trim().is_empty() { None } else { Some(p) }
            },
        };

        match server::api::update_profile(req).await {
            Ok(session) => {
                auth.update_session(session);
                toast.success("Profile updated".to_string(), ToastOptions::new());
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = shared_types::AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        saving.set(false);
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile" }
                CardDescription { "Your admin account details" }
            }
            CardContent {
                if let Some(err) = error_msg() {
                    div { class: "settings-error", "{err}" }
                }

                form { onsubmit: handle_save,
                    div { class: "settings-field",
                        Label { html_for: "profile-name", "Full Name" }
                        Input {
                            id: "profile-name",
                            value: display_name(),
                            placeholder: "Enter your name",
                            label: "",
                            on_input: move |evt: FormEvent| display_name.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("display_name") {
                            div { class: "settings-field-error", "{err}" }
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "profile-email", "Email" }
                        Input {
                            id: "profile-email",
                            value: email,
                            disabled: true,
                            label: "",
                            on_input: move |_| {},
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "profile-phone", "Phone" }
                        Input {
                            id: "profile-phone",
                            value: phone(),
                            placeholder: "+234 800 000 0000",
                            label: "",
                            on_input: move |evt: FormEvent| phone.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("phone") {
                            div { class: "settings-field-error", "{err}" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save Profile" }
                    }
                }
            }
        }
    }
}
