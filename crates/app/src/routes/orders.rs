use dioxus::prelude::*;
use shared_types::{sample_orders, ListCache, Order, OrderStats, ORDER_STATUSES};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, PageHeader, PageTitle, SearchBar, Skeleton, ToastOptions,
};

use crate::format_helpers::{format_date, format_naira, format_status_label};

/// Orders page: order pipeline with a per-row status picker. Picking a new
/// status asks for confirmation before the server call; the row is patched
/// only after the call succeeds.
#[component]
pub fn Orders() -> Element {
    let toast = use_toast();

    let mut cache = use_signal(ListCache::<Order>::default);
    let mut loaded = use_signal(|| false);

    let _fetch = use_resource(move || async move {
        let result = server::api::list_orders().await;
        if result.is_err() {
            tracing::warn!("order list fetch failed, substituting sample rows");
        }
        cache.set(ListCache::from_fetch(result, sample_orders));
        loaded.set(true);
    });

    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());
    let mut mutating = use_signal(|| false);

    let mut selected: Signal<Option<Order>> = use_signal(|| None);
    // Order plus the status the picker chose for it
    let mut pending_status: Signal<Option<(Order, String)>> = use_signal(|| None);

    let stats = OrderStats::from_list(cache.read().items());

    let filtered: Vec<Order> = cache
        .read()
        .items()
        .iter()
        .filter(|o| o.matches_query(&query.read()) && o.matches_status(&status_filter.read()))
        .cloned()
        .collect();

    let handle_confirm = move |_: MouseEvent| {
        let Some((order, new_status)) = pending_status.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }
        mutating.set(true);

        let id = order.id;
        spawn(async move {
            match server::api::set_order_status(id.to_string(), new_status.clone()).await {
                Ok(()) => {
                    cache
                        .write()
                        .update_where(|o| o.id == id, |o| o.status = new_status.clone());
                    if selected.read().as_ref().map(|o| o.id) == Some(id) {
                        selected.set(cache.read().find(|o| o.id == id).cloned());
                    }
                    toast.success("Order status updated".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            pending_status.set(None);
            mutating.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./orders.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Orders" }
            }

            if cache.read().is_sample() {
                div { class: "sample-banner",
                    "Showing sample data. Could not reach the server."
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Total Orders", value: stats.total.to_string() }
                StatCard { label: "Pending", value: stats.pending.to_string() }
                StatCard { label: "Processing", value: stats.processing.to_string() }
                StatCard { label: "Shipped", value: stats.shipped.to_string() }
                StatCard { label: "Completed", value: stats.completed.to_string() }
                StatCard { label: "Cancelled", value: stats.cancelled.to_string() }
            }

            SearchBar {
                Input {
                    value: query(),
                    placeholder: "Search by order number, customer, or vendor...",
                    label: "",
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                FormSelect {
                    value: status_filter(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: "all", "All Statuses" }
                    for status in ORDER_STATUSES {
                        option { value: *status, {format_status_label(status)} }
                    }
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
                        p { "No orders match the current filters." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Order" }
                        DataTableColumn { "Customer" }
                        DataTableColumn { "Vendor" }
                        DataTableColumn { "Items" }
                        DataTableColumn { "Total" }
                        DataTableColumn { "Placed" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for order in filtered {
                            OrderRow {
                                order: order.clone(),
                                mutating: mutating(),
                                on_view: move |o: Order| selected.set(Some(o)),
                                on_pick_status: move |pick: (Order, String)| pending_status.set(Some(pick)),
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
                    if let Some(order) = selected.read().clone() {
                        DialogTitle { "{order.order_number}" }
                        DialogDescription { "Order details" }

                        div { class: "detail-grid",
                            DetailField { label: "Customer", value: order.customer.clone() }
                            DetailField { label: "Vendor", value: order.vendor.clone() }
                            DetailField { label: "Items", value: order.items.to_string() }
                            DetailField { label: "Total", value: format_naira(order.total) }
                            DetailField { label: "Payment Method", value: order.payment_method.clone() }
                            DetailField { label: "Placed", value: format_date(order.placed_date) }
                            div { class: "detail-field",
                                span { class: "detail-label", "Status" }
                                Badge {
                                    variant: order_badge_variant(&order.status),
                                    {format_status_label(&order.status)}
                                }
                            }
                        }

                        div { class: "dialog-actions",
                            FormSelect {
                                label: "Set Status".to_string(),
                                value: order.status.clone(),
                                disabled: mutating(),
                                onchange: {
                                    let order = order.clone();
                                    move |evt: Event<FormData>| {
                                        let picked = evt.value();
                                        if picked != order.status {
                                            pending_status.set(Some((order.clone(), picked)));
                                        }
                                    }
                                },
                                for status in ORDER_STATUSES {
                                    option { value: *status, {format_status_label(status)} }
                                }
                            }
                        }
                    }
                }
            }

            // Status change confirmation
            AlertDialogRoot {
                open: pending_status.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_status.set(None);
                    }
                },
                AlertDialogContent {
                    if let Some((order, new_status)) = pending_status.read().clone() {
                        AlertDialogTitle { "Update Order Status" }
                        AlertDialogDescription {
                            {format!(
                                "Move {} from {} to {}?",
                                order.order_number,
                                format_status_label(&order.status),
                                format_status_label(&new_status)
                            )}
                        }
                        AlertDialogActions {
                            AlertDialogCancel { "Cancel" }
                            AlertDialogAction {
                                on_click: handle_confirm,
                                if mutating() { "Saving..." } else { "Confirm" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(
    order: Order,
    mutating: bool,
    on_view: EventHandler<Order>,
    on_pick_status: EventHandler<(Order, String)>,
) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{order.order_number}" }
            DataTableCell { "{order.customer}" }
            DataTableCell { "{order.vendor}" }
            DataTableCell { "{order.items}" }
            DataTableCell { {format_naira(order.total)} }
            DataTableCell { {format_date(order.placed_date)} }
            DataTableCell {
                Badge {
                    variant: order_badge_variant(&order.status),
                    {format_status_label(&order.status)}
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let order = order.clone();
                            move |_| on_view.call(order.clone())
                        },
                        "View"
                    }
                    FormSelect {
                        value: order.status.clone(),
                        disabled: mutating,
                        onchange: {
                            let order = order.clone();
                            move |evt: Event<FormData>| {
                                let picked = evt.value();
                                if picked != order.status {
                                    on_pick_status.call((order.clone(), picked));
                                }
                            }
                        },
                        for status in ORDER_STATUSES {
                            option { value: *status, {format_status_label(status)} }
                        }
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

fn order_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "completed" => BadgeVariant::Primary,
        "processing" | "shipped" => BadgeVariant::Secondary,
        "cancelled" => BadgeVariant::Destructive,
        _ => BadgeVariant::Outline,
    }
}
