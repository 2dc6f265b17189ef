use nav_dashboard::prelude::*;
use nav_dashboard::style::nav_item_style;

#[test]
fn toggle_opened_follows_call_parity() {
    for calls in 0..12 {
        let mut state = SidebarState::default();
        for _ in 0..calls {
            state.toggle_opened();
        }
        assert_eq!(state.opened, true ^ (calls % 2 == 1), "after {calls} toggles");
    }
}

#[test]
fn selecting_an_entry_activates_only_that_entry() {
    for selected in all_routes() {
        let mut state = SidebarState::default();
        state.select_entry(selected.path);

        let active: Vec<&str> = all_routes()
            .filter(|entry| state.is_active(entry))
            .map(|entry| entry.title)
            .collect();
        assert_eq!(active, vec![selected.title]);
        assert_eq!(state.active_entry(), Some(*selected));
    }
}

#[test]
fn select_sales_from_initial_state() {
    let mut state = SidebarState::default();
    assert!(state.opened);
    assert_eq!(state.active_path, "/");

    state.select_entry("/sales");

    let sales = find_route("/sales").unwrap();
    let home = find_route("/").unwrap();
    assert_eq!(state.active_path, "/sales");
    assert!(state.is_active(&sales));
    assert!(!state.is_active(&home));
    assert!(state.opened);
}

#[test]
fn collapsed_entries_show_tooltip_and_hide_label() {
    let config = DashboardConfig::default();
    let mut state = SidebarState::default();
    state.toggle_opened();
    assert!(!state.opened);

    for entry in all_routes() {
        let style = nav_item_style(state.opened, state.is_active(entry), &config);
        assert!(style.show_tooltip, "{} should have a tooltip", entry.title);
        assert!(!style.label_visible, "{} label should be hidden", entry.title);
    }
}

#[test]
fn expanded_entries_show_label_without_tooltip() {
    let config = DashboardConfig::default();
    let state = SidebarState::default();

    for entry in all_routes() {
        let style = nav_item_style(state.opened, state.is_active(entry), &config);
        assert!(!style.show_tooltip);
        assert!(style.label_visible);
        assert!(style.label_style.contains("opacity: 1;"));
    }
}

#[test]
fn theme_toggles_from_dark_and_back() {
    let theme = ThemeName::default();
    assert_eq!(theme, ThemeName::Dark);
    let theme = theme.toggled();
    assert_eq!(theme, ThemeName::Light);
    let theme = theme.toggled();
    assert_eq!(theme, ThemeName::Dark);
}
