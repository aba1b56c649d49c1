//! In-memory page used by the console host and tests.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use maud::Markup;
use regex::Regex;

use super::{ElementId, Page};

/// Retained state of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub text: String,
    pub html: String,
    pub visible: bool,
    pub value: String,
    pub invalid: bool,
}

impl ElementState {
    /// Markup if set, otherwise the text content.
    pub fn content(&self) -> &str {
        if self.html.is_empty() {
            &self.text
        } else {
            &self.html
        }
    }
}

static MISSING: ElementState = ElementState {
    text: String::new(),
    html: String::new(),
    visible: false,
    value: String::new(),
    invalid: false,
};

/// A page that records every update instead of drawing it.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    elements: BTreeMap<ElementId, ElementState>,
    viewport_width: u32,
    focused: Option<ElementId>,
    scrolled_to: Option<ElementId>,
    typeset_requests: usize,
}

impl MemoryPage {
    pub fn new(viewport_width: u32) -> Self {
        let elements = ElementId::ALL
            .iter()
            .map(|&id| {
                let state = ElementState {
                    visible: !id.hidden_initially(),
                    ..Default::default()
                };
                (id, state)
            })
            .collect();
        Self {
            elements,
            viewport_width,
            focused: None,
            scrolled_to: None,
            typeset_requests: 0,
        }
    }

    pub fn element(&self, id: ElementId) -> &ElementState {
        self.elements.get(&id).unwrap_or(&MISSING)
    }

    fn element_mut(&mut self, id: ElementId) -> &mut ElementState {
        self.elements.entry(id).or_default()
    }

    /// Markup or text content of an element.
    pub fn content(&self, id: ElementId) -> &str {
        self.element(id).content()
    }

    /// Visible, with every enclosing container visible too.
    pub fn is_shown(&self, id: ElementId) -> bool {
        self.element(id).visible && id.parent().map_or(true, |p| self.is_shown(p))
    }

    pub fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn scrolled_to(&self) -> Option<ElementId> {
        self.scrolled_to
    }

    pub fn typeset_requests(&self) -> usize {
        self.typeset_requests
    }

    /// Plain-text rendering of every shown element with content.
    pub fn snapshot(&self) -> String {
        let mut lines = Vec::new();
        for id in ElementId::ALL {
            if !self.is_shown(id) {
                continue;
            }
            let element = self.element(id);
            let content = if id == ElementId::SearchInput {
                element.value.clone()
            } else {
                plain_text(element.content())
            };
            if !content.is_empty() {
                lines.push(format!("[{}] {}", id.dom_id(), content));
            }
        }
        lines.join("\n")
    }
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

/// Strip tags and collapse whitespace.
fn plain_text(markup: &str) -> String {
    tag_re()
        .replace_all(markup, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl Page for MemoryPage {
    fn set_text(&mut self, id: ElementId, text: &str) {
        let element = self.element_mut(id);
        element.text = text.to_string();
        element.html.clear();
    }

    fn set_html(&mut self, id: ElementId, markup: Markup) {
        let element = self.element_mut(id);
        element.html = markup.into_string();
        element.text.clear();
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        self.element_mut(id).visible = visible;
    }

    fn is_visible(&self, id: ElementId) -> bool {
        self.element(id).visible
    }

    fn value(&self, id: ElementId) -> String {
        self.element(id).value.clone()
    }

    fn set_value(&mut self, id: ElementId, value: &str) {
        self.element_mut(id).value = value.to_string();
    }

    fn set_invalid(&mut self, id: ElementId, invalid: bool) {
        self.element_mut(id).invalid = invalid;
    }

    fn focus(&mut self, id: ElementId) {
        self.focused = Some(id);
    }

    fn scroll_into_view(&mut self, id: ElementId) {
        self.scrolled_to = Some(id);
    }

    fn typeset_math(&mut self) {
        self.typeset_requests += 1;
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }
}
