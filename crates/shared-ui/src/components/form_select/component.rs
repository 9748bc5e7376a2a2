use dioxus::prelude::*;

/// Native `<select>` with the dashboard's input styling.
///
/// Used for the status/category filters above each table and for the
/// order status picker; a primitive-backed compound select would be
/// overkill there. Children are `option { value: "...", "Label" }`
/// elements; extra attributes (e.g. `id`) land on the `<select>`.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    /// Called when the selection changes.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    /// Optional label displayed above the select.
    #[props(default)]
    label: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                value,
                disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                ..merged,
                {children}
            }
        }
    }
}
