use dioxus::prelude::*;
use shared_types::{sample_overview, Order, OverviewMetrics, TopVendor};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_count, format_date, format_naira, format_rating, format_status_label};

/// Overview page: headline stat cards, recent orders, and top vendors.
///
/// A failed fetch substitutes the built-in sample metrics and flags the
/// page as sample data instead of erroring out.
#[component]
pub fn Overview() -> Element {
    let data = use_resource(move || async move { server::api::overview_metrics().await });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./overview.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Overview" }
            }

            match &*data.read() {
                Some(Ok(metrics)) => rsx! {
                    OverviewBody { metrics: metrics.clone(), is_sample: false }
                },
                Some(Err(_)) => rsx! {
                    OverviewBody { metrics: sample_overview(), is_sample: true }
                },
                None => rsx! {
                    div { class: "loading",
                        Skeleton {}
                        Skeleton {}
                        Skeleton {}
                    }
                },
            }
        }
    }
}

#[component]
fn OverviewBody(metrics: OverviewMetrics, is_sample: bool) -> Element {
    let stats = &metrics.stats;

    rsx! {
        if is_sample {
            div { class: "sample-banner",
                "Showing sample data. Could not reach the server."
            }
        }

        div { class: "stat-grid",
            StatCard { label: "Total Customers", value: format_count(stats.total_customers) }
            StatCard { label: "Active Vendors", value: format_count(stats.active_vendors) }
            StatCard { label: "Total Products", value: format_count(stats.total_products) }
            StatCard { label: "Total Orders", value: format_count(stats.total_orders) }
            StatCard { label: "Total Revenue", value: format_naira(stats.total_revenue) }
        }

        div { class: "overview-panels",
            Card { class: "overview-panel",
                CardHeader {
                    CardTitle { "Recent Orders" }
                }
                CardContent {
                    RecentOrdersTable { orders: metrics.recent_orders.clone() }
                }
            }

            Card { class: "overview-panel",
                CardHeader {
                    CardTitle { "Top Vendors" }
                }
                CardContent {
                    TopVendorsList { vendors: metrics.top_vendors.clone() }
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
fn RecentOrdersTable(orders: Vec<Order>) -> Element {
    if orders.is_empty() {
        return rsx! {
            p { class: "panel-empty", "No orders yet." }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Order" }
                DataTableColumn { "Customer" }
                DataTableColumn { "Total" }
                DataTableColumn { "Status" }
                DataTableColumn { "Date" }
            }
            DataTableBody {
                for order in orders {
                    DataTableRow {
                        DataTableCell { "{order.order_number}" }
                        DataTableCell { "{order.customer}" }
                        DataTableCell { {format_naira(order.total)} }
                        DataTableCell {
                            Badge {
                                variant: order_badge_variant(&order.status),
                                {format_status_label(&order.status)}
                            }
                        }
                        DataTableCell { {format_date(order.placed_date)} }
                    }
                }
            }
        }
    }
}

#[component]
fn TopVendorsList(vendors: Vec<TopVendor>) -> Element {
    if vendors.is_empty() {
        return rsx! {
            p { class: "panel-empty", "No vendor activity yet." }
        };
    }

    rsx! {
        div { class: "top-vendors",
            for vendor in vendors {
                div { class: "top-vendor-row",
                    div { class: "top-vendor-info",
                        span { class: "top-vendor-name", "{vendor.name}" }
                        span { class: "top-vendor-meta",
                            {format!("{} orders · {}", vendor.order_count, format_rating(vendor.rating))}
                        }
                    }
                    span { class: "top-vendor-revenue", {format_naira(vendor.revenue)} }
                }
            }
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
