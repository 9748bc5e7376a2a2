use dioxus::prelude::*;
use shared_types::NotificationPrefs;
use shared_ui::{
    use_toast, Card, CardContent, CardDescription, CardHeader, CardTitle, Label, Skeleton, Switch,
    SwitchThumb, ToastOptions,
};

/// Notifications tab: five toggles saved on change. A failed save flips the
/// toggle back so the screen never disagrees with the server.
#[component]
pub fn NotificationsTab() -> Element {
    let toast = use_toast();

    let mut prefs = use_signal(NotificationPrefs::default);
    let mut loaded = use_signal(|| false);

    let _fetch = use_resource(move || async move {
        match server::api::get_notification_prefs().await {
            Ok(p) => prefs.set(p),
            Err(_) => {
                tracing::warn!("notification prefs fetch failed, showing defaults");
            }
        }
        loaded.set(true);
    });

    let mut save = move |updated: NotificationPrefs, previous: NotificationPrefs| {
        prefs.set(updated);
        spawn(async move {
            match server::api::update_notification_prefs(updated).await {
                Ok(()) => {
                    toast.success("Preferences saved".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    prefs.set(previous);
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
        });
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Notifications" }
                CardDescription { "Choose which events reach your inbox" }
            }
            CardContent {
                if !loaded() {
                    Skeleton {}
                } else {
                    div { class: "settings-toggle-row",
                        Label { "Email Notifications" }
                        Switch {
                            checked: Some(prefs().email_notifications),
                            on_checked_change: move |val: bool| {
                                let previous = prefs();
                                let mut updated = previous;
                                updated.email_notifications = val;
                                save(updated, previous);
                            },
                            SwitchThumb {}
                        }
                    }
                    div { class: "settings-toggle-row",
                        Label { "New Orders" }
                        Switch {
                            checked: Some(prefs().order_notifications),
                            on_checked_change: move |val: bool| {
                                let previous = prefs();
                                let mut updated = previous;
                                updated.order_notifications = val;
                                save(updated, previous);
                            },
                            SwitchThumb {}
                        }
                    }
                    div { class: "settings-toggle-row",
                        Label { "Vendor Applications" }
                        Switch {
                            checked: Some(prefs().vendor_notifications),
                            on_checked_change: move |val: bool| {
                                let previous = prefs();
                                let mut updated = previous;
                                updated.vendor_notifications = val;
                                save(updated, previous);
                            },
                            SwitchThumb {}
                        }
                    }
                    div { class: "settings-toggle-row",
                        Label { "Customer Signups" }
                        Switch {
                            checked: Some(prefs().customer_notifications),
                            on_checked_change: move |val: bool| {
                                let previous = prefs();
                                let mut updated = previous;
                                updated.customer_notifications = val;
                                save(updated, previous);
                            },
                            SwitchThumb {}
                        }
                    }
                    div { class: "settings-toggle-row",
                        Label { "Security Alerts" }
                        Switch {
                            checked: Some(prefs().security_alerts),
                            on_checked_change: move |val: bool| {
                                let previous = prefs();
                                let mut updated = previous;
                                updated.security_alerts = val;
                                save(updated, previous);
                            },
                            SwitchThumb {}
                        }
                    }
                }
            }
        }
    }
}
