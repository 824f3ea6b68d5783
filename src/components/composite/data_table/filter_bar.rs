//! FilterBar Component
//!
//! One input per filterable column, with an operator chip that cycles through
//! the column's operator set. Applying publishes the complete filter model.

use gpui::{
    App, ClickEvent, Context, Entity, EventEmitter, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::*,
};

use chrono::NaiveDate;

use crate::components::primitives::button::{Button, ButtonSize};
use crate::components::primitives::text_input::{TextInput, TextInputEvent, text_input};
use crate::domain::column::{FilterConfig, FilterKind, ProcessedColumn};
use crate::domain::filter::{FilterDefinition, FilterModel, FilterOperator};
use crate::theme::colors::GridColors;

/// Events emitted by the filter bar
#[derive(Debug, Clone, PartialEq)]
pub enum FilterBarEvent {
    Apply(FilterModel),
}

/// Turn user input into a filter definition. Blank input means no filter.
pub fn build_filter(
    config: &FilterConfig,
    operator: Option<FilterOperator>,
    text: &str,
) -> Result<Option<FilterDefinition>, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let operator = operator.or(config.default_operator());
    let filter = match (config.kind, operator) {
        (FilterKind::Set, _) => FilterDefinition::set(
            text.split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty()),
        ),
        (FilterKind::Text, Some(op)) => FilterDefinition::text(op, text),
        (FilterKind::Number, Some(op)) => {
            let value = text
                .parse::<f64>()
                .map_err(|_| format!("'{text}' is not a number"))?;
            FilterDefinition::number(op, value)
        }
        (FilterKind::Date, Some(op)) => {
            let value = NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| format!("'{text}' is not a date (YYYY-MM-DD)"))?;
            FilterDefinition::date(op, value)
        }
        (_, None) => return Ok(None),
    };
    Ok(Some(filter))
}

struct FilterField {
    field: String,
    label: String,
    config: FilterConfig,
    operator_index: usize,
    input: Entity<TextInput>,
}

impl FilterField {
    fn operator(&self) -> Option<FilterOperator> {
        self.config.operators.get(self.operator_index).copied()
    }

    fn operator_label(&self) -> &'static str {
        match self.config.kind {
            FilterKind::Set => "in",
            _ => self.operator().map(|op| op.label()).unwrap_or(""),
        }
    }

    fn placeholder(config: &FilterConfig) -> &'static str {
        match config.kind {
            FilterKind::Text => "text",
            FilterKind::Number => "number",
            FilterKind::Date => "YYYY-MM-DD",
            FilterKind::Set => "true,false",
        }
    }
}

/// FilterBar component
pub struct FilterBar {
    fields: Vec<FilterField>,
    error: Option<SharedString>,
}

impl EventEmitter<FilterBarEvent> for FilterBar {}

impl FilterBar {
    pub fn new(columns: &[ProcessedColumn], cx: &mut Context<Self>) -> Self {
        let mut fields = Vec::new();

        for column in columns {
            let Some(config) = column.filter else {
                continue;
            };

            let id = SharedString::from(format!("filter-{}", column.descriptor.field));
            let input = text_input(id, FilterField::placeholder(&config), cx);

            cx.subscribe(&input, |this, _input, event: &TextInputEvent, cx| match event {
                TextInputEvent::Submitted(_) => this.apply(cx),
                TextInputEvent::Changed(_) => {
                    // Editing dismisses the previous parse error
                    if this.error.take().is_some() {
                        cx.notify();
                    }
                }
            })
            .detach();

            fields.push(FilterField {
                field: column.descriptor.field.clone(),
                label: column.descriptor.header_label().to_string(),
                config,
                operator_index: 0,
                input,
            });
        }

        Self {
            fields,
            error: None,
        }
    }

    fn collect(&self, cx: &App) -> Result<FilterModel, String> {
        let mut model = FilterModel::new();
        for field in &self.fields {
            let text = field.input.read(cx).value().to_string();
            let filter = build_filter(&field.config, field.operator(), &text)
                .map_err(|e| format!("{}: {e}", field.label))?;
            if let Some(filter) = filter {
                model.set(field.field.clone(), filter);
            }
        }
        Ok(model)
    }

    /// Publish the current inputs as a filter model
    pub fn apply(&mut self, cx: &mut Context<Self>) {
        match self.collect(cx) {
            Ok(model) => {
                self.error = None;
                cx.emit(FilterBarEvent::Apply(model));
            }
            Err(message) => self.error = Some(message.into()),
        }
        cx.notify();
    }

    /// Empty every input and publish an empty model
    pub fn clear(&mut self, cx: &mut Context<Self>) {
        for field in &self.fields {
            field.input.update(cx, |input, cx| {
                input.set_value("");
                cx.notify();
            });
        }
        self.error = None;
        cx.emit(FilterBarEvent::Apply(FilterModel::new()));
        cx.notify();
    }

    fn cycle_operator(&mut self, index: usize, cx: &mut Context<Self>) {
        if let Some(field) = self.fields.get_mut(index) {
            let count = field.config.operators.len();
            if count > 0 {
                field.operator_index = (field.operator_index + 1) % count;
                cx.notify();
            }
        }
    }

    fn render_field(&self, index: usize, field: &FilterField, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .child(
                div()
                    .text_sm()
                    .text_color(GridColors::text_secondary())
                    .child(field.label.clone()),
            )
            .child(
                div()
                    .id(("filter-op", index))
                    .px_2()
                    .py_1()
                    .rounded_sm()
                    .text_sm()
                    .bg(GridColors::table_header_bg())
                    .cursor_pointer()
                    .hover(|s| s.bg(GridColors::table_row_hover()))
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.cycle_operator(index, cx);
                    }))
                    .child(field.operator_label()),
            )
            .child(field.input.clone())
    }
}

impl Render for FilterBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let fields: Vec<_> = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| self.render_field(i, field, cx).into_any_element())
            .collect();

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_2()
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .items_center()
                    .gap_4()
                    .children(fields)
                    .child(
                        Button::primary("filter-apply", "Apply")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.apply(cx);
                            })),
                    )
                    .child(
                        Button::ghost("filter-clear", "Clear")
                            .size(ButtonSize::Small)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.clear(cx);
                            })),
                    ),
            )
            .children(self.error.clone().map(|error| {
                div()
                    .text_sm()
                    .text_color(GridColors::danger())
                    .child(error)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnType;

    #[test]
    fn blank_input_is_no_filter() {
        let config = FilterConfig::for_type(ColumnType::Text);
        assert_eq!(build_filter(&config, None, "   "), Ok(None));
    }

    #[test]
    fn text_uses_default_operator() {
        let config = FilterConfig::for_type(ColumnType::Text);
        assert_eq!(
            build_filter(&config, None, "jo"),
            Ok(Some(FilterDefinition::text(FilterOperator::Contains, "jo")))
        );
    }

    #[test]
    fn number_must_parse() {
        let config = FilterConfig::for_type(ColumnType::Number);
        assert_eq!(
            build_filter(&config, Some(FilterOperator::LessThan), "12.5"),
            Ok(Some(FilterDefinition::number(FilterOperator::LessThan, 12.5)))
        );
        assert!(build_filter(&config, None, "twelve").is_err());
    }

    #[test]
    fn date_must_be_iso() {
        let config = FilterConfig::for_type(ColumnType::Date);
        let parsed = build_filter(&config, None, "2024-02-29").expect("valid date");
        assert!(matches!(parsed, Some(FilterDefinition::Date { .. })));
        assert!(build_filter(&config, None, "29/02/2024").is_err());
    }

    #[test]
    fn boolean_input_becomes_a_set() {
        let config = FilterConfig::for_type(ColumnType::Boolean);
        assert_eq!(
            build_filter(&config, None, "true, false"),
            Ok(Some(FilterDefinition::set(["true", "false"])))
        );
    }
}
