use dioxus::prelude::*;
use shared_types::{PlatformSettings, UpdatePlatformSettingsRequest, CURRENCIES};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FormSelect, Input, Label, Skeleton, Switch, SwitchThumb, ToastOptions,
};
use std::collections::HashMap;

/// Platform tab: marketplace-wide settings. One row server-side; the form
/// reloads from the saved response so stale edits never linger.
#[component]
pub fn PlatformTab() -> Element {
    let toast = use_toast();

    let mut site_name = use_signal(String::new);
    let mut support_email = use_signal(String::new);
    let mut currency = use_signal(String::new);
    let mut timezone = use_signal(String::new);
    let mut maintenance_mode = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    let mut apply = move |settings: PlatformSettings| {
        site_name.set(settings.site_name);
        support_email.set(settings.support_email);
        currency.set(settings.currency);
        timezone.set(settings.timezone);
        maintenance_mode.set(settings.maintenance_mode);
    };

    let _fetch = use_resource(move || async move {
        match server::api::get_platform_settings().await {
            Ok(settings) => apply(settings),
            Err(_) => {
                tracing::warn!("platform settings fetch failed, showing defaults");
                apply(PlatformSettings::default());
            }
        }
        loaded.set(true);
    });

    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        saving.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let req = UpdatePlatformSettingsRequest {
            site_name: site_name(),
            support_email: support_email(),
            currency: currency(),
            timezone: timezone(),
            maintenance_mode: maintenance_mode(),
        };

        match server::api::update_platform_settings(req).await {
            Ok(settings) => {
                apply(settings);
                toast.success("Platform settings saved".to_string(), ToastOptions::new());
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
                CardTitle { "Platform" }
                CardDescription { "Marketplace-wide configuration" }
            }
            CardContent {
                if !loaded() {
                    Skeleton {}
                } else {
                    if let Some(err) = error_msg() {
                        div { class: "settings-error", "{err}" }
                    }

                    form { onsubmit: handle_save,
                        div { class: "settings-field",
                            Label { html_for: "site-name", "Site Name" }
                            Input {
                                id: "site-name",
                                value: site_name(),
                                label: "",
                                on_input: move |evt: FormEvent| site_name.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("site_name") {
                                div { class: "settings-field-error", "{err}" }
                            }
                        }
                        div { class: "settings-field",
                            Label { html_for: "support-email", "Support Email" }
                            Input {
                                input_type: "email",
                                id: "support-email",
                                value: support_email(),
                                label: "",
                                on_input: move |evt: FormEvent| support_email.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("support_email") {
                                div { class: "settings-field-error", "{err}" }
                            }
                        }
                        div { class: "settings-field",
                            FormSelect {
                                label: "Currency".to_string(),
                                value: currency(),
                                onchange: move |evt: Event<FormData>| currency.set(evt.value()),
                                for code in CURRENCIES {
                                    option { value: *code, "{code}" }
                                }
                            }
                        }
                        div { class: "settings-field",
                            Label { html_for: "timezone", "Timezone" }
                            Input {
                                id: "timezone",
                                value: timezone(),
                                placeholder: "Africa/Lagos",
                                label: "",
                                on_input: move |evt: FormEvent| timezone.set(evt.value()),
                            }
                            if let Some(err) = field_errors().get("timezone") {
                                div { class: "settings-field-error", "{err}" }
                            }
                        }
                        div { class: "settings-toggle-row",
                            Label { "Maintenance Mode" }
                            Switch {
                                checked: Some(maintenance_mode()),
                                on_checked_change: move |val: bool| maintenance_mode.set(val),
                                SwitchThumb {}
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save Settings" }
                        }
                    }
                }
            }
        }
    }
}
