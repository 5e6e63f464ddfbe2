//! Headless view backed by plain fields

use super::{ContentNode, Style, View};

/// In-memory [`View`] that behaves like a rendered element
///
/// Mirrors the platform rules the core relies on: widths and heights never
/// go negative, and a freshly rendered window is hidden until opened.
#[derive(Clone, Debug, Default)]
pub struct MemoryView {
    title: String,
    classes: Vec<String>,
    visible: bool,
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    z_index: f64,
    content: Vec<ContentNode>,
}

impl MemoryView {
    /// Create an empty, hidden view
    pub fn new() -> Self {
        Self::default()
    }

    /// Title bar text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Classes on the root element, in the order they were added
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl View for MemoryView {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn set_width(&mut self, value: i32) {
        self.width = f64::from(value.max(0));
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_height(&mut self, value: i32) {
        self.height = f64::from(value.max(0));
    }

    fn style(&self, property: Style) -> f64 {
        match property {
            Style::Left => self.left,
            Style::Top => self.top,
            Style::ZIndex => self.z_index,
        }
    }

    fn set_style(&mut self, property: Style, value: i32) {
        let value = f64::from(value);
        match property {
            Style::Left => self.left = value,
            Style::Top => self.top = value,
            Style::ZIndex => self.z_index = value,
        }
    }

    fn append_content(&mut self, node: ContentNode) {
        self.content.push(node);
    }

    fn content(&self) -> &[ContentNode] {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_unique() {
        let mut view = MemoryView::new();
        view.add_class("active");
        view.add_class("active");
        assert_eq!(view.classes(), &["active".to_string()]);

        view.remove_class("active");
        assert!(!view.has_class("active"));

        // Removing an absent class is harmless
        view.remove_class("active");
        assert!(view.classes().is_empty());
    }

    #[test]
    fn test_size_never_negative() {
        let mut view = MemoryView::new();
        view.set_width(-20);
        view.set_height(-1);
        assert_eq!(view.width(), 0.0);
        assert_eq!(view.height(), 0.0);
    }

    #[test]
    fn test_position_may_be_negative() {
        let mut view = MemoryView::new();
        view.set_style(Style::Left, -40);
        view.set_style(Style::Top, -5);
        assert_eq!(view.style(Style::Left), -40.0);
        assert_eq!(view.style(Style::Top), -5.0);
    }

    #[test]
    fn test_starts_hidden() {
        let mut view = MemoryView::new();
        assert!(!view.is_visible());
        view.show();
        assert!(view.is_visible());
        view.hide();
        assert!(!view.is_visible());
    }
}
