pub mod customers;
pub mod login;
pub mod not_found;
pub mod orders;
pub mod overview;
pub mod products;
pub mod settings;
pub mod vendors;

use crate::auth::use_admin_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdLayoutDashboard, LdPackage, LdSettings, LdShoppingCart, LdStore, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::AccessState;
use shared_ui::{
    use_toast, Avatar, AvatarFallback, Button, ButtonVariant, DropdownMenu, DropdownMenuContent,
    DropdownMenuItem, DropdownMenuSeparator, DropdownMenuTrigger, Navbar, Separator, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarGroupLabel,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarRail, SidebarSeparator, SidebarTrigger, Switch, SwitchThumb, ToastOptions,
};

use customers::Customers;
use login::Login;
use not_found::NotFound;
use orders::Orders;
use overview::Overview;
use products::Products;
use settings::Settings;
use vendors::Vendors;

/// Application routes. Everything except the login page sits behind the
/// access gate.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AccessGate)]
    #[layout(AdminLayout)]
    #[route("/")]
    Overview {},
    #[route("/customers")]
    Customers {},
    #[route("/vendors")]
    Vendors {},
    #[route("/products")]
    Products {},
    #[route("/orders")]
    Orders {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Access gate layout. Replays the persisted session against the admin
/// directory before rendering anything gated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly:
/// during SSR the component suspends until the session check completes,
/// and during hydration the embedded data is available immediately. The
/// `SuspenseBoundary` in `App` catches the suspension.
///
/// A session that exists but fails the directory check lands on a denial
/// screen rather than the login page: the credentials are fine, the
/// account just is not an admin anymore.
#[component]
fn AccessGate() -> Element {
    let mut auth = use_admin_auth();

    let resource =
        use_server_future(move || async move { server::api::current_admin_session().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(res) => match AccessState::from_check(res) {
            AccessState::Granted(session) => {
                if !auth.is_granted() {
                    auth.set_state(AccessState::Granted(session));
                }
                rsx! { Outlet::<Route> {} }
            }
            AccessState::Denied(session) => {
                auth.set_state(AccessState::Denied(session));
                rsx! { DeniedScreen {} }
            }
            _ => {
                auth.sign_out();
                navigator().push(Route::Login {});
                rsx! {
                    div { class: "access-gate-loading",
                        p { "Redirecting to login..." }
                    }
                }
            }
        },
        None => {
            rsx! {
                div { class: "access-gate-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Shown when a signed-in account fails the admin directory check.
#[component]
fn DeniedScreen() -> Element {
    let mut auth = use_admin_auth();
    let toast = use_toast();
    let mut signing_out = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "access-denied-page",
            div { class: "access-denied-card",
                h1 { class: "access-denied-title", "Unauthorized: Admin access only" }
                p { class: "access-denied-message",
                    "Your account is signed in but is not authorized for the admin dashboard."
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: signing_out(),
                    onclick: move |_| {
                        signing_out.set(true);
                        spawn(async move {
                            // Local state resets either way; the failure is
                            // still surfaced so the revocation can be retried.
                            if let Err(e) = server::api::admin_logout().await {
                                toast.error(
                                    shared_types::AppError::friendly_message(&e.to_string()),
                                    ToastOptions::new(),
                                );
                            }
                            auth.sign_out();
                            navigator().push(Route::Login {});
                        });
                    },
                    if signing_out() { "Signing out..." } else { "Sign Out" }
                }
            }
        }
    }
}

/// Main dashboard layout with sidebar and top navbar.
#[component]
fn AdminLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_admin_auth();
    let toast = use_toast();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        is_dark: Signal::new(true),
    });

    let page_title = match &route {
        Route::Overview {} => "Overview",
        Route::Customers {} => "Customers",
        Route::Vendors {} => "Vendors",
        Route::Products {} => "Products",
        Route::Orders {} => "Orders",
        Route::Settings {} => "Settings",
        _ => "",
    };

    let display_name = auth
        .session()
        .map(|s| s.display_name)
        .unwrap_or_else(|| "Admin".to_string());
    let initials = display_name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Jos Vendors Hub" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Marketplace" }
                        SidebarGroupContent {
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Overview {},
                                        SidebarMenuButton { active: matches!(route, Route::Overview {}),
                                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                            "Overview"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Customers {},
                                        SidebarMenuButton { active: matches!(route, Route::Customers {}),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            "Customers"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Vendors {},
                                        SidebarMenuButton { active: matches!(route, Route::Vendors {}),
                                            Icon::<LdStore> { icon: LdStore, width: 18, height: 18 }
                                            "Vendors"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Products {},
                                        SidebarMenuButton { active: matches!(route, Route::Products {}),
                                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                                            "Products"
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Orders {},
                                        SidebarMenuButton { active: matches!(route, Route::Orders {}),
                                            Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 }
                                            "Orders"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    SidebarSeparator {}

                    SidebarGroup {
                        SidebarGroupLabel { "Account" }
                        SidebarGroupContent {
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Settings {},
                                        SidebarMenuButton { active: matches!(route, Route::Settings {}),
                                            Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                            "Settings"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark Mode" }
                        Switch {
                            checked: Some((theme_state.is_dark)()),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                }

                SidebarRail {}
            }

            SidebarInset {
                Navbar {
                    div { class: "navbar-bar",
                        SidebarTrigger {
                            span { class: "navbar-trigger-icon", "\u{2630}" }
                        }

                        Separator { horizontal: false }

                        span { class: "navbar-title", "{page_title}" }

                        div { class: "navbar-spacer" }

                        DropdownMenu {
                            DropdownMenuTrigger {
                                Avatar {
                                    AvatarFallback { "{initials}" }
                                }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "profile".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        navigator().push(Route::Settings {});
                                    },
                                    "Profile"
                                }
                                DropdownMenuSeparator {}
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        spawn(async move {
                                            if let Err(e) = server::api::admin_logout().await {
                                                toast.error(
                                                    shared_types::AppError::friendly_message(&e.to_string()),
                                                    ToastOptions::new(),
                                                );
                                            }
                                            auth.sign_out();
                                            navigator().push(Route::Login {});
                                        });
                                    },
                                    "Sign Out"
                                }
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
