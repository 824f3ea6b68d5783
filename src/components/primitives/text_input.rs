//! TextInput Component
//!
//! Single-line input. Typed characters are appended, backspace deletes the last
//! character, enter submits. Changes are published as `TextInputEvent`s.

use gpui::{
    ClickEvent, Context, ElementId, EventEmitter, FocusHandle, Focusable, InteractiveElement, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
    div, prelude::*, px,
};

use crate::theme::colors::GridColors;

/// Events emitted by a text input
#[derive(Debug, Clone, PartialEq)]
pub enum TextInputEvent {
    Changed(String),
    Submitted(String),
}

/// A text input component
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextInputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Set the value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    fn handle_key(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.control || keystroke.modifiers.platform {
            return;
        }

        match keystroke.key.as_str() {
            "enter" => {
                cx.emit(TextInputEvent::Submitted(self.value.clone()));
                return;
            }
            "backspace" => {
                if self.value.pop().is_none() {
                    return;
                }
            }
            "escape" => {
                if self.value.is_empty() {
                    return;
                }
                self.value.clear();
            }
            _ => match keystroke.key_char.as_deref() {
                Some(text) if !text.chars().any(char::is_control) => self.value.push_str(text),
                _ => return,
            },
        }

        cx.emit(TextInputEvent::Changed(self.value.clone()));
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            GridColors::border_focus()
        } else {
            GridColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if is_focused {
            SharedString::from(format!("{}|", self.value))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            GridColors::input_placeholder()
        } else {
            GridColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_click(cx.listener(|this, _event: &ClickEvent, window, _cx| {
                this.focus_handle.focus(window);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key(event, cx);
            }))
            .px_3()
            .py_1()
            .bg(GridColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(120.0))
            .cursor_text()
            .child(display_text)
    }
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: impl Into<SharedString>,
    cx: &mut Context<V>,
) -> gpui::Entity<TextInput> {
    let id = id.into();
    let placeholder = placeholder.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input
    })
}
