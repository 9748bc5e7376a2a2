use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

/// Tab strip for the settings page. Give `Tabs` a `default_value`
/// matching one `TabTrigger`/`TabContent` pair's `value`.
#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hub-tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hub-tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

#[component]
pub fn TabTrigger(mut props: prim::TabTriggerProps) -> Element {
    if props.class.is_none() {
        props.class = Some("hub-tab-trigger".to_string());
    }

    rsx! {
        prim::TabTrigger { ..props }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("hub-tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}
