#![allow(non_snake_case)]

use std::cell::RefCell;

use dioxus::dioxus_core::VirtualDom;
use dioxus::prelude::*;
use nav_dashboard::prelude::*;

thread_local! {
    static OUTCOME: RefCell<Option<Result<ThemeName, ThemeError>>> = RefCell::new(None);
    static HANDLE: RefCell<Option<ThemeContext>> = RefCell::new(None);
}

fn Probe() -> Element {
    let outcome = try_use_theme();
    HANDLE.with(|h| *h.borrow_mut() = outcome.clone().ok());
    OUTCOME.with(|o| *o.borrow_mut() = Some(outcome.map(|theme| theme.current())));
    rsx! { div {} }
}

fn Unwrapped() -> Element {
    rsx! { Probe {} }
}

fn DefaultProvider() -> Element {
    rsx! {
        ThemeProvider { Probe {} }
    }
}

fn LightProvider() -> Element {
    rsx! {
        ThemeProvider { initial: ThemeName::Light, Probe {} }
    }
}

fn render(root: fn() -> Element) -> VirtualDom {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    dom
}

fn outcome() -> Option<Result<ThemeName, ThemeError>> {
    OUTCOME.with(|o| o.borrow().clone())
}

#[test]
fn accessor_fails_outside_provider() {
    let _dom = render(Unwrapped);
    assert_eq!(outcome(), Some(Err(ThemeError::MissingProvider)));
}

#[test]
fn missing_provider_error_is_descriptive() {
    let message = ThemeError::MissingProvider.to_string();
    assert!(message.contains("ThemeProvider"));
}

#[test]
fn provider_defaults_to_dark() {
    let _dom = render(DefaultProvider);
    assert_eq!(outcome(), Some(Ok(ThemeName::Dark)));
}

#[test]
fn provider_honours_initial_theme() {
    let _dom = render(LightProvider);
    assert_eq!(outcome(), Some(Ok(ThemeName::Light)));
}

#[test]
fn toggle_through_context_flips_theme() {
    let dom = render(DefaultProvider);
    let mut theme = HANDLE.with(|h| *h.borrow()).expect("probe rendered under provider");

    dom.in_runtime(|| {
        theme.toggle();
        assert_eq!(theme.current(), ThemeName::Light);
        assert!(theme.variables()[0].value.contains("light"));
        theme.toggle();
        assert_eq!(theme.current(), ThemeName::Dark);
    });
}
