//! Event plumbing for driving mounted components without a renderer.
//!
//! Listeners are looked up by event name in the mutations emitted while the
//! dom builds, then fired through the runtime with serialized event payloads,
//! the same path a webview or wasm renderer takes.
#![allow(dead_code)]

use std::any::Any;
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    PlatformEventData, SerializedFormData, SerializedHtmlEventConverter, SerializedImageData,
};
use serde_json::json;

/// Decode `PlatformEventData` as the serialized payloads built below.
pub fn install_event_converter() {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
}

/// Ids of every element that registered a listener for `event` ("input", "error", ...).
pub fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

pub fn listener(mutations: &Mutations, event: &str) -> ElementId {
    let found = listeners(mutations, event);
    assert_eq!(found.len(), 1, "expected one `{event}` listener, got {found:?}");
    found[0]
}

fn platform_event<T: 'static>(data: T) -> Event<dyn Any> {
    let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(data)));
    Event::new(data, true)
}

/// An `input`/`submit` payload carrying `value`.
pub fn form_event(value: &str) -> Event<dyn Any> {
    let data: SerializedFormData =
        serde_json::from_value(json!({ "value": value, "values": {}, "valid": true }))
            .expect("form payload");
    platform_event(data)
}

/// An `<img>` `error` payload.
pub fn image_error_event() -> Event<dyn Any> {
    let data: SerializedImageData =
        serde_json::from_value(json!({ "load_error": true })).expect("image payload");
    platform_event(data)
}

/// Fire `event` at `target` and apply whatever it dirtied.
pub fn fire(dom: &mut VirtualDom, name: &str, event: Event<dyn Any>, target: ElementId) {
    dom.runtime().handle_event(name, event, target);
    dom.render_immediate_to_vec();
}
