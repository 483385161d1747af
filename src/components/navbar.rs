//! Navigation Bar Component
//!
//! Fixed top bar: logo on the left, section links with hover tooltips in the
//! middle, profile link on the right.

use dioxus::prelude::*;
use dof3a_core::DEFAULT_AVATAR;

use super::icon::{self, Icon};

/// A top-level section of the site.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavSection {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const NAV_SECTIONS: [NavSection; 5] = [
    NavSection { label: "Home", href: "/", icon: icon::HOME },
    NavSection { label: "Reels", href: "/reels", icon: icon::FILM },
    NavSection { label: "Challenge", href: "/challenge", icon: icon::TROPHY },
    NavSection { label: "Organize", href: "/organize", icon: icon::CALENDAR },
    NavSection { label: "School", href: "/school", icon: icon::GRADUATION_CAP },
];

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-logo", "DOF3A" }

            div { class: "navbar-links",
                for section in NAV_SECTIONS {
                    a {
                        key: "{section.href}",
                        class: "navbar-link",
                        href: "{section.href}",
                        Icon { path: section.icon, size: 32 }
                        span { class: "navbar-tooltip", "{section.label}" }
                    }
                }
            }

            a { href: "/user-profile",
                img { class: "navbar-profile", src: DEFAULT_AVATAR, alt: "user-profile" }
            }
        }
    }
}
