use dioxus::prelude::*;
use shared_types::ChangePasswordRequest;
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label, ToastOptions,
};
use std::collections::HashMap;

/// Security tab: change the signed-in admin's password. The confirm field
/// is checked locally; the current password is verified server-side.
#[component]
pub fn SecurityTab() -> Element {
    let toast = use_toast();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);

    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        if new_password() != confirm_password() {
            field_errors.set(HashMap::from([(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            )]));
            return;
        }

        saving.set(true);
        let req = ChangePasswordRequest {
            current_password: current_password(),
            new_password: new_password(),
        };

        match server::api::change_password(req).await {
            Ok(()) => {
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
                toast.success("Password changed".to_string(), ToastOptions::new());
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
                CardTitle { "Security" }
                CardDescription { "Change your password" }
            }
            CardContent {
                if let Some(err) = error_msg() {
                    div { class: "settings-error", "{err}" }
                }

                form { onsubmit: handle_save,
                    div { class: "settings-field",
                        Label { html_for: "current-password", "Current Password" }
                        Input {
                            input_type: "password",
                            id: "current-password",
                            value: current_password(),
                            label: "",
                            on_input: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("current_password") {
                            div { class: "settings-field-error", "{err}" }
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "new-password", "New Password" }
                        Input {
                            input_type: "password",
                            id: "new-password",
                            placeholder: "At least 8 characters",
                            value: new_password(),
                            label: "",
                            on_input: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("new_password") {
                            div { class: "settings-field-error", "{err}" }
                        }
                    }
                    div { class: "settings-field",
                        Label { html_for: "confirm-password", "Confirm New Password" }
                        Input {
                            input_type: "password",
                            id: "confirm-password",
                            value: confirm_password(),
                            label: "",
                            on_input: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                        if let Some(err) = field_errors().get("confirm_password") {
                            div { class: "settings-field-error", "{err}" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Change Password" }
                    }
                }
            }
        }
    }
}
