use dioxus::prelude::*;
use shared_types::{sample_vendors, ListCache, Vendor, VendorStats};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, PageHeader, PageTitle, SearchBar, Skeleton, ToastOptions,
};

use crate::format_helpers::{format_date, format_naira, format_rating, format_status_label};

/// A confirm-guarded vendor mutation.
#[derive(Debug, Clone, PartialEq)]
enum VendorAction {
    Approve(Vendor),
    Reject(Vendor),
    Delete(Vendor),
}

impl VendorAction {
    fn vendor(&self) -> &Vendor {
        match self {
            Self::Approve(v) | Self::Reject(v) | Self::Delete(v) => v,
        }
    }
}

/// Vendors page: approval workflow over the store directory.
///
/// Approval status (approved/pending/rejected) and identity verification
/// (verified/pending/unverified) are independent; both render as badges.
#[component]
pub fn Vendors() -> Element {
    let toast = use_toast();

    let mut cache = use_signal(ListCache::<Vendor>::default);
    let mut loaded = use_signal(|| false);

    let _fetch = use_resource(move || async move {
        let result = server::api::list_vendors().await;
        if result.is_err() {
            tracing::warn!("vendor list fetch failed, substituting sample rows");
        }
        cache.set(ListCache::from_fetch(result, sample_vendors));
        loaded.set(true);
    });

    let mut query = use_signal(String::new);
    let mut status_filter = use_signal(|| "all".to_string());
    let mut mutating = use_signal(|| false);

    let mut selected: Signal<Option<Vendor>> = use_signal(|| None);
    let mut pending_action: Signal<Option<VendorAction>> = use_signal(|| None);

    let stats = VendorStats::from_list(cache.read().items());

    let filtered: Vec<Vendor> = cache
        .read()
        .items()
        .iter()
        .filter(|v| v.matches_query(&query.read()) && v.matches_status(&status_filter.read()))
        .cloned()
        .collect();

    let handle_confirm = move |_: MouseEvent| {
        let Some(action) = pending_action.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }
        mutating.set(true);

        let id = action.vendor().id;
        spawn(async move {
            let result = match &action {
                VendorAction::Approve(_) => {
                    server::api::set_vendor_status(id.to_string(), "approved".to_string()).await
                }
                VendorAction::Reject(_) => {
                    server::api::set_vendor_status(id.to_string(), "rejected".to_string()).await
                }
                VendorAction::Delete(_) => server::api::delete_vendor(id.to_string()).await,
            };

            match result {
                Ok(()) => {
                    match &action {
                        VendorAction::Approve(_) => {
                            cache
                                .write()
                                .update_where(|v| v.id == id, |v| v.status = "approved".into());
                            toast.success("Vendor approved".to_string(), ToastOptions::new());
                        }
                        VendorAction::Reject(_) => {
                            cache
                                .write()
                                .update_where(|v| v.id == id, |v| v.status = "rejected".into());
                            toast.success("Vendor rejected".to_string(), ToastOptions::new());
                        }
                        VendorAction::Delete(_) => {
                            cache.write().remove_where(|v| v.id == id);
                            toast.success("Vendor deleted".to_string(), ToastOptions::new());
                        }
                    }
                    if selected.read().as_ref().map(|v| v.id) == Some(id) {
                        selected.set(cache.read().find(|v| v.id == id).cloned());
                    }
                }
                Err(e) => {
                    toast.error(
                        shared_types::AppError::friendly_message(&e.to_string()),
                        ToastOptions::new(),
                    );
                }
            }
            pending_action.set(None);
            mutating.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./vendors.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Vendors" }
            }

            if cache.read().is_sample() {
                div { class: "sample-banner",
                    "Showing sample data. Could not reach the server."
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Total Vendors", value: stats.total.to_string() }
                StatCard { label: "Approved", value: stats.approved.to_string() }
                StatCard { label: "Pending Approval", value: stats.pending.to_string() }
                StatCard { label: "Verified", value: stats.verified.to_string() }
            }

            SearchBar {
                Input {
                    value: query(),
                    placeholder: "Search by store name or email...",
                    label: "",
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                FormSelect {
                    value: status_filter(),
                    onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                    option { value: "all", "All Statuses" }
                    option { value: "approved", "Approved" }
                    option { value: "pending", "Pending" }
                    option { value: "rejected", "Rejected" }
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
                        p { "No vendors match the current filters." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Store" }
                        DataTableColumn { "Email" }
                        DataTableColumn { "Location" }
                        DataTableColumn { "Products" }
                        DataTableColumn { "Revenue" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Verification" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for vendor in filtered {
                            VendorRow {
                                vendor: vendor.clone(),
                                mutating: mutating(),
                                on_view: move |v: Vendor| selected.set(Some(v)),
                                on_action: move |a: VendorAction| pending_action.set(Some(a)),
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
                    if let Some(vendor) = selected.read().clone() {
                        DialogTitle { "{vendor.name}" }
                        DialogDescription { "Vendor store details" }

                        div { class: "detail-grid",
                            DetailField { label: "Email", value: vendor.email.clone() }
                            DetailField { label: "Phone", value: vendor.phone.clone() }
                            DetailField { label: "Location", value: vendor.location.clone() }
                            DetailField { label: "Joined", value: format_date(vendor.joined_date) }
                            DetailField { label: "Products", value: vendor.product_count.to_string() }
                            DetailField { label: "Revenue", value: format_naira(vendor.revenue) }
                            DetailField { label: "Rating", value: format_rating(vendor.rating) }
                            div { class: "detail-field",
                                span { class: "detail-label", "Status" }
                                Badge {
                                    variant: approval_badge_variant(&vendor.status),
                                    {format_status_label(&vendor.status)}
                                }
                            }
                            div { class: "detail-field",
                                span { class: "detail-label", "Verification" }
                                Badge {
                                    variant: verification_badge_variant(&vendor.verification_status),
                                    {format_status_label(&vendor.verification_status)}
                                }
                            }
                        }

                        div { class: "dialog-actions",
                            if vendor.status != "approved" {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: mutating(),
                                    onclick: {
                                        let vendor = vendor.clone();
                                        move |_| pending_action.set(Some(VendorAction::Approve(vendor.clone())))
                                    },
                                    "Approve"
                                }
                            }
                            if vendor.status != "rejected" {
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    disabled: mutating(),
                                    onclick: {
                                        let vendor = vendor.clone();
                                        move |_| pending_action.set(Some(VendorAction::Reject(vendor.clone())))
                                    },
                                    "Reject"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Destructive,
                                disabled: mutating(),
                                onclick: {
                                    let vendor = vendor.clone();
                                    move |_| pending_action.set(Some(VendorAction::Delete(vendor.clone())))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            // Confirmation
            AlertDialogRoot {
                open: pending_action.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_action.set(None);
                    }
                },
                AlertDialogContent {
                    if let Some(action) = pending_action.read().clone() {
                        AlertDialogTitle {
                            match &action {
                                VendorAction::Approve(_) => "Approve Vendor",
                                VendorAction::Reject(_) => "Reject Vendor",
                                VendorAction::Delete(_) => "Delete Vendor",
                            }
                        }
                        AlertDialogDescription {
                            {match &action {
                                VendorAction::Approve(v) => format!("Approve {} to sell on the marketplace?", v.name),
                                VendorAction::Reject(v) => format!("Reject {}? Their listings will be hidden.", v.name),
                                VendorAction::Delete(v) => format!("Delete {}? This action cannot be undone.", v.name),
                            }}
                        }
                        AlertDialogActions {
                            AlertDialogCancel { "Cancel" }
                            AlertDialogAction {
                                on_click: handle_confirm,
                                if mutating() { "Working..." } else { "Confirm" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VendorRow(
    vendor: Vendor,
    mutating: bool,
    on_view: EventHandler<Vendor>,
    on_action: EventHandler<VendorAction>,
) -> Element {
    rsx! {
        DataTableRow {
            DataTableCell { "{vendor.name}" }
            DataTableCell { "{vendor.email}" }
            DataTableCell { "{vendor.location}" }
            DataTableCell { "{vendor.product_count}" }
            DataTableCell { {format_naira(vendor.revenue)} }
            DataTableCell {
                Badge {
                    variant: approval_badge_variant(&vendor.status),
                    {format_status_label(&vendor.status)}
                }
            }
            DataTableCell {
                Badge {
                    variant: verification_badge_variant(&vendor.verification_status),
                    {format_status_label(&vendor.verification_status)}
                }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let vendor = vendor.clone();
                            move |_| on_view.call(vendor.clone())
                        },
                        "View"
                    }
                    if vendor.status != "approved" {
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: mutating,
                            onclick: {
                                let vendor = vendor.clone();
                                move |_| on_action.call(VendorAction::Approve(vendor.clone()))
                            },
                            "Approve"
                        }
                    }
                    if vendor.status != "rejected" {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: mutating,
                            onclick: {
                                let vendor = vendor.clone();
                                move |_| on_action.call(VendorAction::Reject(vendor.clone()))
                            },
                            "Reject"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: mutating,
                        onclick: {
                            let vendor = vendor.clone();
                            move |_| on_action.call(VendorAction::Delete(vendor.clone()))
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

fn approval_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "approved" => BadgeVariant::Primary,
        "rejected" => BadgeVariant::Destructive,
        _ => BadgeVariant::Secondary,
    }
}

fn verification_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "verified" => BadgeVariant::Primary,
        "unverified" => BadgeVariant::Outline,
        _ => BadgeVariant::Secondary,
    }
}
