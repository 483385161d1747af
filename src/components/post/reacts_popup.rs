//! Reactions popup listing every kind with its count and holders.

use dioxus::prelude::*;
use dof3a_core::RosterEntry;

use super::overlay_class;

#[component]
pub fn ReactsPopup(rosters: Vec<RosterEntry>, open: bool) -> Element {
    rsx! {
        div { class: "reacts-anchor",
            div { class: "reacts-popup {overlay_class(open)}",
                div { class: "reacts-popup-title", "Reactions" }
                for entry in rosters {
                    div { key: "{entry.kind}", class: "reacts-row",
                        span { "{entry.kind.emoji()}" }
                        span { class: "reacts-row-count", "{entry.count()}" }
                        span { class: "reacts-row-names", "{entry.names()}" }
                    }
                }
            }
        }
    }
}
