use dioxus::prelude::*;

/// Bordered table for the list pages. Compose with `DataTableHeader`,
/// `DataTableBody`, and the row/cell components below.
#[component]
pub fn DataTable(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "data-table", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            table {
                {children}
            }
        }
    }
}

/// `thead > tr` wrapper; fill with `DataTableColumn`s.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row. With `onclick` set it gets a pointer cursor and hover
/// highlight; list pages use that to open the detail dialog.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = if onclick.is_some() {
        "data-table-row clickable"
    } else {
        "data-table-row"
    };

    rsx! {
        tr {
            class,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
