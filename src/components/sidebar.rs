//! Sidebar Component
//!
//! Fixed left column with the viewer's profile link, logout, search and the
//! study tools.

use dioxus::prelude::*;
use dof3a_core::{ViewerId, DEFAULT_AVATAR};

use super::icon::{self, Icon};
use super::navbar::NavSection;

pub const SIDEBAR_LINKS: [NavSection; 5] = [
    NavSection { label: "To-Do List", href: "/todo-list", icon: icon::CHECK_CIRCLE },
    NavSection { label: "Games", href: "/games", icon: icon::PUZZLE },
    NavSection { label: "School", href: "/school", icon: icon::GRADUATION_CAP },
    NavSection { label: "Classroom", href: "/classroom", icon: icon::LANDMARK },
    NavSection { label: "Study Group", href: "/study-group", icon: icon::USERS },
];

/// Left sidebar
///
/// # Props
///
/// * `viewer` - Whose profile the header links to
#[component]
pub fn Sidebar(viewer: ViewerId) -> Element {
    rsx! {
        aside { class: "sidebar",
            a { class: "sidebar-profile", href: "/profile",
                img { class: "avatar avatar-lg", src: DEFAULT_AVATAR, alt: "Profile" }
                span { class: "sidebar-profile-name", "{viewer}" }
            }

            button { class: "sidebar-logout",
                Icon { path: icon::LOG_OUT }
                "Logout"
            }

            input {
                class: "sidebar-search",
                r#type: "text",
                placeholder: "Search :Dof3a",
            }

            div { class: "sidebar-nav",
                for link in SIDEBAR_LINKS {
                    a {
                        key: "{link.href}",
                        class: "sidebar-link",
                        href: "{link.href}",
                        Icon { path: link.icon }
                        span { class: "sidebar-link-label", "{link.label}" }
                    }
                }
            }
        }
    }
}
