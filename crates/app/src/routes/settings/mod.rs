mod notifications_tab;
mod platform_tab;
mod profile_tab;
mod security_tab;

use dioxus::prelude::*;
use shared_ui::{PageHeader, PageTitle, TabContent, TabList, TabTrigger, Tabs};

use notifications_tab::NotificationsTab;
use platform_tab::PlatformTab;
use profile_tab::ProfileTab;
use security_tab::SecurityTab;

/// Settings page with four tabs. Each tab is its own component with its own
/// stack frame, which keeps hydration within WASM's limited stack.
#[component]
pub fn Settings() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Settings" }
            }

            Tabs { default_value: "profile", horizontal: true,
                TabList {
                    TabTrigger { value: "profile", index: 0usize, "Profile" }
                    TabTrigger { value: "security", index: 1usize, "Security" }
                    TabTrigger { value: "notifications", index: 2usize, "Notifications" }
                    TabTrigger { value: "platform", index: 3usize, "Platform" }
                }
                TabContent { value: "profile", index: 0usize,
                    ProfileTab {}
                }
                TabContent { value: "security", index: 1usize,
                    SecurityTab {}
                }
                TabContent { value: "notifications", index: 2usize,
                    NotificationsTab {}
                }
                TabContent { value: "platform", index: 3usize,
                    PlatformTab {}
                }
            }
        }
    }
}
