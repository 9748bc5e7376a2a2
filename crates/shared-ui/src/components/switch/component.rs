use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// Toggle used for boolean settings (notification prefs, maintenance
/// mode, dark mode). Pass `checked` and `on_checked_change`; render a
/// `SwitchThumb` as the child.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hub-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "hub-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}
