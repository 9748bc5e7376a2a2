use dioxus::prelude::*;

/// Shared open/closed state for the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// One class plus caller attributes, merged the way every wrapper here
/// does it.
fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let base = vec![Attribute::new("class", class, None, false)];
    dioxus_primitives::merge_attributes(vec![base, attributes])
}

/// Provides sidebar state context. The dashboard starts closed so the
/// first paint on small screens is the content, not the menu.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

/// The navigation rail itself. On narrow viewports it overlays the page
/// with a backdrop that closes it on tap.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = (state)().open;

    let mut merged = classed("sidebar", attributes);
    merged.push(Attribute::new(
        "data-state",
        if is_open { "open" } else { "closed" },
        None,
        false,
    ));

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Header section inside the Sidebar; holds the brand row.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-header", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable middle section holding the menu groups.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Bottom section; the dashboard puts the dark-mode toggle here.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-footer", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// A labeled group of navigation items (Marketplace / Account).
#[component]
pub fn SidebarGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-group", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarGroupLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-group-label", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarGroupContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-group-content", attributes);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-menu", attributes);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-menu-item", attributes);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Navigation entry. `active` marks the current route; clicking closes
/// the sidebar so overlay-mode navigation doesn't leave the menu up.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    let mut merged = classed("sidebar-menu-button", attributes);
    merged.push(Attribute::new(
        "data-active",
        if active { "true" } else { "false" },
        None,
        false,
    ));

    rsx! {
        button {
            onclick: move |_| {
                state.set(SidebarState { open: false });
            },
            ..merged,
            {children}
        }
    }
}

/// Hamburger button in the navbar that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let merged = classed("sidebar-trigger", attributes);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
            ..merged,
            {children}
        }
    }
}

/// Divider line between sidebar sections.
#[component]
pub fn SidebarSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = classed("sidebar-separator", attributes);

    rsx! {
        hr {
            ..merged,
        }
    }
}

/// Main content area beside the sidebar; its margin follows the
/// open/closed state.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("sidebar-inset", attributes);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

/// Thin strip along the sidebar edge that toggles it on click.
#[component]
pub fn SidebarRail() -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            class: "sidebar-rail",
            r#type: "button",
            "aria-label": "Toggle sidebar",
            tabindex: -1,
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
        }
    }
}
