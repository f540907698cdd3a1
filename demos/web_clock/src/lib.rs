// Copyright 2026 the Horologium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser clock: a `<select>` of every built-in time system above the live
//! display and visual, with a reference link when the system has one.
//!
//! The selection is kept in `localStorage`, so a reload comes back to the
//! same system.
//!
//! Build with: `wasm-pack build --target web demos/web_clock`
//! Then serve `demos/web_clock/` and open a page that loads the module.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

#[cfg(test)]
extern crate std;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::RefCell;

use horologium_backend_web::{
    DomPresenter, IntervalLoop, LocalStoragePreferences, Presenter as _, now, wall_clock,
};
use horologium_core::registry::Registry;
use horologium_core::session::Session;
use horologium_core::time::HostTime;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlAnchorElement, HtmlElement, HtmlOptionElement, HtmlSelectElement};

/// One entry of the time system picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Provider id, used as the option value.
    pub id: &'static str,
    /// Visible option text.
    pub label: String,
    /// Hover text: the provider's description.
    pub title: &'static str,
    /// Whether this is the active provider.
    pub selected: bool,
}

/// Lists the registered systems in registry order, marking `current`.
#[must_use]
pub fn choices(registry: &Registry, current: &str) -> Vec<Choice> {
    registry
        .all()
        .iter()
        .map(|provider| Choice {
            id: provider.id(),
            label: format!("{} ({})", provider.name(), provider.category().as_str()),
            title: provider.description(),
            selected: provider.id() == current,
        })
        .collect()
}

struct App {
    session: Session<LocalStoragePreferences>,
    presenter: DomPresenter,
    link: HtmlAnchorElement,
}

impl App {
    /// Pushes pending tree changes to the page.
    fn present(&mut self) {
        let changes = self.session.flush();
        self.presenter.apply(self.session.store(), &changes);
    }

    fn on_tick(&mut self, now: HostTime) {
        if self.session.poll(now, &wall_clock()) {
            self.present();
        }
    }

    fn select(&mut self, id: &str) -> bool {
        if !self.session.switch_to(id, now()) {
            return false;
        }
        self.session.paint(&wall_clock());
        self.present();
        self.sync_link();
        true
    }

    fn sync_link(&self) {
        match self.session.reference_link() {
            Some(href) => {
                self.link.set_href(href);
                self.link.set_hidden(false);
            }
            None => {
                self.link.remove_attribute("href").ok();
                self.link.set_hidden(true);
            }
        }
    }
}

/// Entry point for the web clock demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let registry =
        horologium_systems::registry().map_err(|err| JsValue::from_str(&err.to_string()))?;
    let mut session = Session::new(registry, LocalStoragePreferences::new(), now());

    let shell = element(&document, "section")?;
    shell.set_class_name("horologium");
    let picker: HtmlSelectElement = document.create_element("select")?.unchecked_into();
    for choice in choices(session.registry(), session.current().id()) {
        let option: HtmlOptionElement = document.create_element("option")?.unchecked_into();
        option.set_value(choice.id);
        option.set_text(&choice.label);
        option.set_title(choice.title);
        option.set_selected(choice.selected);
        picker.append_child(&option)?;
    }
    let display = element(&document, "div")?;
    let visual = element(&document, "div")?;
    let link: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    link.set_text_content(Some("Learn more"));
    link.set_target("_blank");

    shell.append_child(&picker)?;
    shell.append_child(&display)?;
    shell.append_child(&visual)?;
    shell.append_child(&link)?;
    body.append_child(&shell)?;

    let mut presenter = DomPresenter::new(shell.clone());
    presenter.mount(session.display_target(), display.into());
    presenter.mount(session.visual_target(), visual.into());

    session.paint(&wall_clock());
    let tick_interval = session.current().tick_interval();
    tracing::info!(id = session.current().id(), "web clock started");

    let app = Rc::new(RefCell::new(App {
        session,
        presenter,
        link,
    }));
    {
        let mut app = app.borrow_mut();
        app.present();
        app.sync_link();
    }

    let tick_app = Rc::clone(&app);
    let interval = Rc::new(IntervalLoop::new(move |now| {
        tick_app.borrow_mut().on_tick(now);
    }));
    interval.start(tick_interval);

    bind_picker(&picker, &app, &interval)?;
    Ok(())
}

fn bind_picker(
    picker: &HtmlSelectElement,
    app: &Rc<RefCell<App>>,
    interval: &Rc<IntervalLoop>,
) -> Result<(), JsValue> {
    let change_app = Rc::clone(app);
    let change_interval = Rc::clone(interval);
    let change_picker = picker.clone();
    let on_change = Closure::wrap(Box::new(move |_event: Event| {
        let id = change_picker.value();
        let period = {
            let mut app = change_app.borrow_mut();
            if !app.select(&id) {
                tracing::warn!(id = id.as_str(), "picker offered an unknown time system");
                return;
            }
            app.session.current().tick_interval()
        };
        change_interval.start(period);
    }) as Box<dyn FnMut(_)>);
    picker.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    // The listener owns the app and the interval for the page's lifetime.
    on_change.forget();
    Ok(())
}

fn element(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_system_is_offered_once() {
        let registry = horologium_systems::registry().unwrap();
        let offered = choices(&registry, "swatch");

        assert_eq!(offered.len(), registry.len());
        let ids: Vec<_> = offered.iter().map(|c| c.id).collect();
        let expected: Vec<_> = registry.all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, expected);

        let selected: Vec<_> = offered.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "swatch");
    }

    #[test]
    fn options_carry_description_as_title() {
        let registry = horologium_systems::registry().unwrap();
        for (choice, provider) in choices(&registry, "standard").iter().zip(registry.all()) {
            assert_eq!(choice.title, provider.description());
            assert!(choice.label.starts_with(provider.name()));
        }
    }

    #[test]
    fn unknown_current_selects_nothing() {
        let registry = horologium_systems::registry().unwrap();
        assert!(choices(&registry, "sundial").iter().all(|c| !c.selected));
    }
}
