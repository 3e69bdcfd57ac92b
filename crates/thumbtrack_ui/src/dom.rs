//! Browser bindings
//!
//! Adapters that let the controller run against a real DOM element: the
//! element as a [`ScrollContainer`], a track element as a [`ThumbSurface`],
//! and a pair of `ResizeObserver`/`MutationObserver` as the
//! [`ObservationBridge`].

use crate::layout::{Axis, Padding, Size};
use crate::metrics::{parse_css_px, ScrollContainer};
use crate::observe::{LayoutTrigger, ObservationBridge};
use crate::projector::ThumbSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, MutationObserver, MutationObserverInit, MutationRecord, Node, ResizeObserver,
    ResizeObserverEntry,
};

/// A scrollable DOM element.
#[derive(Debug, Clone)]
pub struct DomContainer {
    element: HtmlElement,
}

impl DomContainer {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl ScrollContainer for DomContainer {
    fn client_size(&self) -> Size {
        Size::new(
            self.element.client_width() as f32,
            self.element.client_height() as f32,
        )
    }

    fn scroll_size(&self) -> Size {
        Size::new(
            self.element.scroll_width() as f32,
            self.element.scroll_height() as f32,
        )
    }

    fn padding(&self) -> Padding {
        let Some(window) = web_sys::window() else {
            return Padding::zero();
        };
        let style = match window.get_computed_style(&self.element) {
            Ok(Some(style)) => style,
            Ok(None) => return Padding::zero(),
            Err(e) => {
                log::warn!("Failed to read computed style: {:?}", e);
                return Padding::zero();
            }
        };
        let side = |name: &str| {
            style
                .get_property_value(name)
                .map_or(0.0, |value| parse_css_px(&value))
        };
        Padding::new(
            side("padding-top"),
            side("padding-right"),
            side("padding-bottom"),
            side("padding-left"),
        )
    }

    fn is_mounted(&self) -> bool {
        self.element.is_connected()
    }
}

/// A thumb element moved with a CSS transform.
#[derive(Debug, Clone)]
pub struct DomThumb {
    thumb: HtmlElement,
}

impl DomThumb {
    pub fn new(thumb: HtmlElement) -> Self {
        Self { thumb }
    }
}

impl ThumbSurface for DomThumb {
    fn set_thumb_offset(&mut self, axis: Axis, offset: f32) {
        let transform = match axis {
            Axis::Horizontal => format!("translateX({}px)", offset),
            Axis::Vertical => format!("translateY({}px)", offset),
        };
        if let Err(e) = self.thumb.style().set_property("transform", &transform) {
            log::warn!("Failed to move {:?} thumb: {:?}", axis, e);
        }
    }
}

/// Raises the layout trigger when the observed element resizes or its
/// content changes.
///
/// Content growth inside a fixed-size box changes the scroll size without a
/// resize, so the subtree is watched for mutations too. Mutations inside
/// ignored elements (the overlay's own tracks) do not count.
pub struct DomObserverBridge {
    target: HtmlElement,
    ignored: Vec<HtmlElement>,
    resize: Option<ResizeObserver>,
    resize_callback: Option<Closure<dyn FnMut(js_sys::Array, ResizeObserver)>>,
    mutation: Option<MutationObserver>,
    mutation_callback: Option<Closure<dyn FnMut(js_sys::Array, MutationObserver)>>,
}

impl DomObserverBridge {
    pub fn new(target: HtmlElement) -> Self {
        Self {
            target,
            ignored: Vec::new(),
            resize: None,
            resize_callback: None,
            mutation: None,
            mutation_callback: None,
        }
    }

    /// Skip mutations whose target lies inside `element`.
    pub fn ignore(mut self, element: HtmlElement) -> Self {
        self.ignored.push(element);
        self
    }

    fn observe_resize(&mut self, trigger: LayoutTrigger) {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: ResizeObserver| {
            if entries
                .iter()
                .any(|entry| entry.dyn_into::<ResizeObserverEntry>().is_ok())
            {
                trigger.notify();
            }
        }) as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);

        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&self.target);
                self.resize = Some(observer);
                self.resize_callback = Some(callback);
            }
            Err(e) => log::warn!("ResizeObserver unavailable: {:?}", e),
        }
    }

    fn observe_mutations(&mut self, trigger: LayoutTrigger) {
        let ignored = self.ignored.clone();
        let callback = Closure::wrap(Box::new(move |records: js_sys::Array, _: MutationObserver| {
            let relevant = records
                .iter()
                .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                .any(|record| match record.target() {
                    Some(node) => !is_ignored(&ignored, &node),
                    None => true,
                });
            if relevant {
                trigger.notify();
            }
        }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

        let observer = match MutationObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("MutationObserver unavailable: {:?}", e);
                return;
            }
        };

        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        options.set_character_data(true);
        options.set_attributes(true);

        match observer.observe_with_options(&self.target, &options) {
            Ok(()) => {
                self.mutation = Some(observer);
                self.mutation_callback = Some(callback);
            }
            Err(e) => log::warn!("Failed to observe content mutations: {:?}", e),
        }
    }
}

fn is_ignored(ignored: &[HtmlElement], node: &Node) -> bool {
    ignored.iter().any(|element| element.contains(Some(node)))
}

impl ObservationBridge for DomObserverBridge {
    fn observe(&mut self, trigger: LayoutTrigger) {
        self.disconnect();
        self.observe_resize(trigger.clone());
        self.observe_mutations(trigger);
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.resize.take() {
            observer.disconnect();
        }
        if let Some(observer) = self.mutation.take() {
            observer.disconnect();
        }
        self.resize_callback = None;
        self.mutation_callback = None;
    }
}

impl Drop for DomObserverBridge {
    fn drop(&mut self) {
        self.disconnect();
    }
}
