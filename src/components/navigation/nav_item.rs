use dioxus::prelude::*;

use crate::hooks::use_dashboard_config;
use crate::navigation::is_activation_key;
use crate::style::nav_item_style;
use crate::types::NavigationEntry;

#[component]
pub fn NavItem(
    entry: NavigationEntry,
    opened: bool,
    active: bool,
    on_select: EventHandler<&'static str>,
) -> Element {
    let config = use_dashboard_config();
    let style = nav_item_style(opened, active, &config);

    let path = entry.path;
    let title = entry.title;
    let icon_class = format!("nav-icon {}", entry.icon.symbol());
    let glyph = entry.icon.glyph();

    rsx! {
        div { class: "nav-item-wrapper",
            div {
                class: style.class,
                role: "button",
                tabindex: "0",
                onclick: move |_| on_select.call(path),
                onkeydown: move |evt: KeyboardEvent| {
                    if is_activation_key(&evt.key()) {
                        on_select.call(path);
                    }
                },
                span { class: "{icon_class}", "aria-hidden": "true", "{glyph}" }
                span { class: "nav-label", style: "{style.label_style}", "{title}" }
            }
            // Only collapsed entries get a tooltip; CSS reveals it on hover
            if style.show_tooltip {
                div { class: "nav-tooltip", role: "tooltip", "{title}" }
            }
        }
    }
}
