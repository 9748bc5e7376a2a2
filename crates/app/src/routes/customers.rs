use dioxus::prelude::*;
use shared_types::{sample_customers, toggled_status, Customer, CustomerStats, ListCache};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, PageHeader, PageTitle, SearchBar, Skeleton, ToastOptions,
};

use crate::format_helpers::{format_date, format_naira, format_status_label};

/// Customers page: searchable list with status filter, stat cards, a detail
/// dialog, and confirm-guarded enable/disable and delete actions.
///
/// Mutations go to the server first; the local cache is patched only after
/// the call succeeds, so a failed call changes nothing on screen.
#[component]
pub fn Customers() -> Element {
    let toast = use_toast();

    let mut cache = use_signal(ListCache::<Customer>::default);
    let mut loaded = use_signal(|| false);

    let _fetch = use_resource(move || async move {
        let result = server::api::list_customers().await;
        if result.is_err() {
            tracing::warn!("customer list fetch failed, substituting sample rows");
        }
        cache.set(ListCache::from_fetch(result, sample_customers));
        loaded.set(true);
    });

    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());

    // One in-flight mutation at a time
    let mut mutating = use_signal(|| false);

    let mut selected: Signal<Option<Customer>> = use_signal(|| None);
    let mut pending_toggle: Signal<Option<Customer>> = use_signal(|| None);
    let mut pending_delete: Signal<Option<Customer>> = use_signal(|| None);

    let stats = CustomerStats::from_list(cache.read().items());

    let filtered: Vec<Customer> = cache
        .read()
        .items()
        .iter()
        .filter(|c| c.matches_query(&query.read()) && c.matches_status(&status_filter.read()))
        .cloned()
        .collect();

    let handle_toggle = move |_: MouseEvent| {
        let Some(customer) = pending_toggle.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }
        mutating.set(true);

        let id = customer.id;
        let new_status = toggled_status(&customer.status).to_string();
        spawn(async move {
            match server::api::set_customer_status(id.to_string(), new_status.clone()).await {
                Ok(()) => {
                    cache.write().update_where(|c| c.id == id, |c| c.status = new_status.clone());
                    if selected.read().as_ref().map(|c| c.id) == Some(id) {
                        selected.set(cache.read().find(|c| c.id == id).cloned());
                    }
                    toast.success("Customer status updated".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            pending_toggle.set(None);
            mutating.set(false);
        });
    };

    let handle_delete = move |_: MouseEvent| {
        let Some(customer) = pending_delete.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }
        mutating.set(true);

        let id = customer.id;
        spawn(async move {
            match server::api::delete_customer(id.to_string()).await {
                Ok(()) => {
                    cache.write().remove_where(|c| c.id == id);
                    if selected.read().as_ref().map(|c| c.id) == Some(id) {
                        selected.set(None);
                    }
                    toast.success("Customer deleted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            pending_delete.set(None);
            mutating.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./customers.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Customers" }
            }

            if cache.read().is_sample() {
                div { class: "sample-banner",
                    "Showing sample data. Could not reach the server."
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Total Customers", value: stats.total.to_string() }
                StatCard { label: "Active", value: stats.active.to_string() }
                StatCard { label: "Inactive", value: stats.inactive.to_string() }
            }

            SearchBar {
                Input {
                    value: query(),
                    placeholder: "Search by name or email...",
                    label: "",
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                FormSelect {
                    value: status_filter(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: "all", "All Statuses" }
                    option { value: "active", "Active" }
                    option { value: "inactive", "Inactive" }
                }
            }

            if !loaded() {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            } else if filtered.is_empty() {
                Card {
                    CardContent {
                        p { "No customers match the current filters." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Location" }
                        DataTableColumn { "Orders" }
                        DataTableColumn { "Total Spent" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for customer in filtered {
                            CustomerRow {
                                customer: customer.clone(),
                                mutating: mutating(),
                                on_view: move |c: Customer| selected.set(Some(c)),
                                on_toggle: move |c: Customer| pending_toggle.set(Some(c)),
                                on_delete: move |c: Customer| pending_delete.set(Some(c)),
                            }
                        }
                    }
                }
            }

            // Detail dialog
            DialogRoot {
                open: selected.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        selected.set(None);
                    }
                },
                DialogContent {
                    if let Some(customer) = selected.read().clone() {
                        DialogTitle { "{customer.name}" }
                        DialogDescription { "Customer account details" }

                        div { class: "detail-grid",
                            DetailField { label: "Email", value: customer.email.clone() }
                            DetailField { label: "Phone", value: customer.phone.clone() }
                            DetailField { label: "Location", value: customer.location.clone() }
                            DetailField { label: "Joined", value: format_date(customer.joined_date) }
                            DetailField { label: "Total Orders", value: customer.total_orders.to_string() }
                            DetailField { label: "Total Spent", value: format_naira(customer.total_spent) }
                            div { class: "detail-field",
                                span { class: "detail-label", "Status" }
                                Badge {
                                    variant: customer_badge_variant(&customer.status),
                                    {format_status_label(&customer.status)}
                                }
                            }
                        }

                        div { class: "dialog-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: mutating(),
                                onclick: {
                                    let customer = customer.clone();
                                    move |_| pending_toggle.set(Some(customer.clone()))
                                },
                                if customer.status == "active" { "Disable Account" } else { "Enable Account" }
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                disabled: mutating(),
                                onclick: {
                                    let customer = customer.clone();
                                    move |_| pending_delete.set(Some(customer.clone()))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            // Enable/disable confirmation
            AlertDialogRoot {
                open: pending_toggle.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_toggle.set(None);
                    }
                },
                AlertDialogContent {
                    if let Some(customer) = pending_toggle.read().clone() {
                        AlertDialogTitle {
                            if customer.status == "active" { "Disable Account" } else { "Enable Account" }
                        }
                        AlertDialogDescription {
                            {format!(
                                "Set {} to {}?",
                                customer.name,
                                format_status_label(toggled_status(&customer.status))
                            )}
                        }
                        AlertDialogActions {
                            AlertDialogCancel { "Cancel" }
                            AlertDialogAction {
                                on_click: handle_toggle,
                                if mutating() { "Saving..." } else { "Confirm" }
                            }
                        }
                    }
                }
            }

            // Delete confirmation
            AlertDialogRoot {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                AlertDialogContent {
                    if let Some(customer) = pending_delete.read().clone() {
                        AlertDialogTitle { "Delete Customer" }
                        AlertDialogDescription {
                            {format!(
                                "Delete {}? This action cannot be undone.",
                                customer.name
                            )}
                        }
                        AlertDialogActions {
                            AlertDialogCancel { "Cancel" }
                            AlertDialogAction {
                                on_click: handle_delete,
                                if mutating() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CustomerRow(
    customer: Customer,
    mutating: bool,
    on_view: EventHandler<Customer>,
    on_toggle: EventHandler<Customer>,
    on_delete: EventHandler<Customer>,
) -> Element {
    let toggle_label = if customer.status == "active" {
        "Disable"
    } else {
        "Enable"
    };

    rsx! {
        DataTableRow {
            DataTableCell { "{customer.name}" }
            DataTableCell { "{customer.email}" }
            DataTableCell { "{customer.location}" }
            DataTableCell { "{customer.total_orders}" }
            DataTableCell { {format_naira(customer.total_spent)} }
            DataTableCell {
                Badge {
                    variant: customer_badge_variant(&customer.status),
                    {format_status_label(&customer.status)}
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let customer = customer.clone();
                            move |_| on_view.call(customer.clone())
                        },
                        "View"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: mutating,
                        onclick: {
                            let customer = customer.clone();
                            move |_| on_toggle.call(customer.clone())
                        },
                        "{toggle_label}"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: mutating,
                        onclick: {
                            let customer = customer.clone();
                            move |_| on_delete.call(customer.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        Card { class: "stat-card",
            CardContent {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

#[component]
fn DetailField(label: String, value: String) -> Element {
    rsx! {
        div { class: "detail-field",
            span { class: "detail-label", "{label}" }
            span { class: "detail-value", "{value}" }
        }
    }
}

fn customer_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "active" => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    }
}
