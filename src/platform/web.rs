//! Browser glue

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent};

use crate::input::{DragEvent, DragPhase, Rect};
use crate::renderer::ScoreSink;

/// Score display backed by a DOM element's text
pub struct DomScoreSink {
    element: Element,
}

impl DomScoreSink {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ScoreSink for DomScoreSink {
    fn show_score(&mut self, score: u64) {
        self.element.set_text_content(Some(&score.to_string()));
    }
}

/// The joystick's container and knob elements
pub struct JoystickView {
    container: Element,
    knob: HtmlElement,
}

impl JoystickView {
    pub fn new(container: Element, knob: HtmlElement) -> Self {
        Self { container, knob }
    }

    pub fn knob(&self) -> &HtmlElement {
        &self.knob
    }

    /// Current client rect of the joystick zone
    pub fn zone(&self) -> Rect {
        let rect = self.container.get_bounding_client_rect();
        Rect::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    /// Move the knob element to `offset` from the zone center
    pub fn show_offset(&self, offset: Vec2) -> Result<(), JsValue> {
        let transform = format!("translate({}px, {}px)", offset.x, offset.y);
        self.knob.style().set_property("transform", &transform)
    }
}

/// Drag event from a mouse event
pub fn mouse_drag(phase: DragPhase, event: &MouseEvent) -> DragEvent {
    DragEvent::pointer(phase, event.client_x() as f32, event.client_y() as f32)
}

/// Drag event from a touch event's active touches
pub fn touch_drag(phase: DragPhase, event: &TouchEvent) -> DragEvent {
    let list = event.touches();
    let touches: Vec<Vec2> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect();
    DragEvent::touch(phase, &touches)
}
