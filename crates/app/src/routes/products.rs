use dioxus::prelude::*;
use shared_types::{
    sample_products, ListCache, Product, ProductStats, UpdateProductRequest, PRODUCT_CATEGORIES,
};
use shared_ui::{
    use_toast, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge, BadgeVariant, Button,
    ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, Label, PageHeader, PageTitle, SearchBar, Skeleton, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::format_helpers::{format_naira, format_rating};

/// Products page: catalog list filtered by text, category, and derived
/// stock level, with an edit dialog and confirm-guarded delete.
#[component]
pub fn Products() -> Element {
    let toast = use_toast();

    let mut cache = use_signal(ListCache::<Product>::default);
    let mut loaded = use_signal(|| false);

    let _fetch = use_resource(move || async move {
        let result = server::api::list_products().await;
        if result.is_err() {
            tracing::warn!("product list fetch failed, substituting sample rows");
        }
        cache.set(ListCache::from_fetch(result, sample_products));
        loaded.set(true);
    });

    let mut query = use_signal(String::new);
    let mut category_filter = use_signal(|| "all".to_string());
    let mut stock_filter = use_signal(|| "all".to_string());
    let mut mutating = use_signal(|| false);

    // Edit dialog state
    let mut editing: Signal<Option<Product>> = use_signal(|| None);
    let mut form_name = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut form_price = use_signal(String::new);
    let mut form_category = use_signal(String::new);
    let mut form_stock = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let mut pending_delete: Signal<Option<Product>> = use_signal(|| None);

    let stats = ProductStats::from_list(cache.read().items());

    let filtered: Vec<Product> = cache
        .read()
        .items()
        .iter()
        .filter(|p| {
            p.matches_query(&query.read())
                && p.matches_category(&category_filter.read())
                && p.matches_stock(&stock_filter.read())
        })
        .cloned()
        .collect();

    let mut open_edit = move |product: Product| {
        form_name.set(product.name.clone());
        form_description.set(product.description.clone());
        form_price.set(format!("{:.0}", product.price));
        form_category.set(product.category.clone());
        form_stock.set(product.stock.to_string());
        field_errors.set(HashMap::new());
        editing.set(Some(product));
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(product) = editing.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }

        // Non-numeric input never reaches the server
        let price: f64 = match form_price.read().trim().parse() {
            Ok(p) => p,
            Err(_) => {
                field_errors.set(HashMap::from([(
                    "price".to_string(),
                    "Price must be a number".to_string(),
                )]));
                return;
            }
        };
        let stock: i32 = match form_stock.read().trim().parse() {
            Ok(s) => s,
            Err(_) => {
                field_errors.set(HashMap::from([(
                    "stock".to_string(),
                    "Stock must be a whole number".to_string(),
                )]));
                return;
            }
        };

        mutating.set(true);
        field_errors.set(HashMap::new());

        let req = UpdateProductRequest {
            name: form_name.read().trim().to_string(),
            price,
            category: form_category.read().clone(),
            stock,
            description: form_description.read().clone(),
        };
        let id = product.id;

        spawn(async move {
            match server::api::update_product(id.to_string(), req.clone()).await {
                Ok(()) => {
                    cache.write().update_where(
                        |p| p.id == id,
                        |p| {
                            p.name = req.name.clone();
                            p.price = req.price;
                            p.category = req.category.clone();
                            p.stock = req.stock;
                            p.description = req.description.clone();
                        },
                    );
                    editing.set(None);
                    toast.success("Product updated".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        toast.error(
                            shared_types::AppError::friendly_message(&err_str),
                            ToastOptions::new(),
                        );
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            mutating.set(false);
        });
    };

    let handle_delete = move |_: MouseEvent| {
        let Some(product) = pending_delete.read().clone() else {
            return;
        };
        if *mutating.read() {
            return;
        }
        mutating.set(true);

        let id = product.id;
        spawn(async move {
            match server::api::delete_product(id.to_string()).await {
                Ok(()) => {
                    cache.write().remove_where(|p| p.id == id);
                    toast.success("Product deleted".to_string(), ToastOptions::new());
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
        document::Link { rel: "stylesheet", href: asset!("./products.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Products" }
            }

            if cache.read().is_sample() {
                div { class: "sample-banner",
                    "Showing sample data. Could not reach the server."
                }
            }

            div { class: "stat-grid",
                StatCard { label: "Total Products", value: stats.total.to_string() }
                StatCard { label: "Active", value: stats.active.to_string() }
                StatCard { label: "Low Stock", value: stats.low_stock.to_string() }
                StatCard { label: "Out of Stock", value: stats.out_of_stock.to_string() }
            }

            SearchBar {
                Input {
                    value: query(),
                    placeholder: "Search by product or vendor...",
                    label: "",
                    on_input: move |evt: FormEvent| query.set(evt.value()),
                }
                FormSelect {
                    value: category_filter(),
                    onchange: move |evt: Event<FormData>| category_filter.set(evt.value()),
                    option { value: "all", "All Categories" }
                    for category in PRODUCT_CATEGORIES {
                        option { value: *category, "{category}" }
                    }
                }
                FormSelect {
                    value: stock_filter(),
                    onchange: move |evt: Event<FormData>| stock_filter.set(evt.value()),
                    option { value: "all", "All Stock Levels" }
                    option { value: "in_stock", "In Stock" }
                    option { value: "low_stock", "Low Stock" }
                    option { value: "out_of_stock", "Out of Stock" }
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
                        p { "No products match the current filters." }
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Product" }
                        DataTableColumn { "Vendor" }
                        DataTableColumn { "Category" }
                        DataTableColumn { "Price" }
                        DataTableColumn { "Stock" }
                        DataTableColumn { "Rating" }
                        DataTableColumn { "Actions" }
                    }
                    DataTableBody {
                        for product in filtered {
                            ProductRow {
                                product: product.clone(),
                                mutating: mutating(),
                                on_edit: move |p: Product| open_edit(p),
                                on_delete: move |p: Product| pending_delete.set(Some(p)),
                            }
                        }
                    }
                }
            }

            // Edit dialog
            DialogRoot {
                open: editing.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        editing.set(None);
                    }
                },
                DialogContent {
                    if let Some(product) = editing.read().clone() {
                        DialogTitle { "Edit Product" }
                        DialogDescription { {format!("Sold by {} · {} sales", product.vendor, product.sales)} }

                        form { onsubmit: handle_save,
                            div { class: "dialog-form",
                                div { class: "dialog-field",
                                    Label { html_for: "product-name", "Name" }
                                    Input {
                                        value: form_name(),
                                        label: "",
                                        on_input: move |evt: FormEvent| form_name.set(evt.value()),
                                    }
                                    if let Some(err) = field_errors().get("name") {
                                        div { class: "dialog-field-error", "{err}" }
                                    }
                                }

                                div { class: "dialog-field",
                                    Label { html_for: "product-price", "Price (₦)" }
                                    Input {
                                        value: form_price(),
                                        label: "",
                                        on_input: move |evt: FormEvent| form_price.set(evt.value()),
                                    }
                                    if let Some(err) = field_errors().get("price") {
                                        div { class: "dialog-field-error", "{err}" }
                                    }
                                }

                                FormSelect {
                                    label: "Category".to_string(),
                                    value: form_category(),
                                    onchange: move |evt: Event<FormData>| form_category.set(evt.value()),
                                    for category in PRODUCT_CATEGORIES {
                                        option { value: *category, "{category}" }
                                    }
                                }

                                div { class: "dialog-field",
                                    Label { html_for: "product-stock", "Stock" }
                                    Input {
                                        value: form_stock(),
                                        label: "",
                                        on_input: move |evt: FormEvent| form_stock.set(evt.value()),
                                    }
                                    if let Some(err) = field_errors().get("stock") {
                                        div { class: "dialog-field-error", "{err}" }
                                    }
                                }

                                div { class: "dialog-field",
                                    Label { html_for: "product-description", "Description" }
                                    Textarea {
                                        value: form_description(),
                                        label: "",
                                        on_input: move |evt: FormEvent| form_description.set(evt.value()),
                                    }
                                }
                            }

                            div { class: "dialog-actions",
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: move |_| editing.set(None),
                                    "Cancel"
                                }
                                Button {
                                    variant: ButtonVariant::Primary,
                                    disabled: mutating(),
                                    if mutating() { "Saving..." } else { "Save Changes" }
                                }
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
                    if let Some(product) = pending_delete.read().clone() {
                        AlertDialogTitle { "Delete Product" }
                        AlertDialogDescription {
                            {format!(
                                "Delete {}? This action cannot be undone.",
                                product.name
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
fn ProductRow(
    product: Product,
    mutating: bool,
    on_edit: EventHandler<Product>,
    on_delete: EventHandler<Product>,
) -> Element {
    let level = product.stock_level();

    rsx! {
        DataTableRow {
            DataTableCell { "{product.name}" }
            DataTableCell { "{product.vendor}" }
            DataTableCell { "{product.category}" }
            DataTableCell { {format_naira(product.price)} }
            DataTableCell {
                Badge {
                    variant: stock_badge_variant(product.stock),
                    {format!("{} ({})", level.label(), product.stock)}
                }
            }
            DataTableCell { {format_rating(product.rating)} }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let product = product.clone();
                            move |_| on_edit.call(product.clone())
                        },
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: mutating,
                        onclick: {
                            let product = product.clone();
                            move |_| on_delete.call(product.clone())
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

fn stock_badge_variant(stock: i32) -> BadgeVariant {
    use shared_types::StockLevel;
    match StockLevel::of(stock) {
        StockLevel::InStock => BadgeVariant::Primary,
        StockLevel::LowStock => BadgeVariant::Secondary,
        StockLevel::OutOfStock => BadgeVariant::Destructive,
    }
}
