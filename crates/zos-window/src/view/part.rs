//! The window's element tree and the selectors routes are scoped by
//!
//! ```text
//! Root (.wm-window)
//! ├── Title (.wm-window-title)
//! │   ├── MinimizeButton (button.wm-minimize)
//! │   ├── MaximizeButton (button.wm-maximize)
//! │   └── CloseButton    (button.wm-close)
//! ├── Content (.wm-content)
//! └── ResizeHandle (button.wm-resize)
//! ```

/// An element of the window tree, used as a pointer event target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The window root element (frame, borders)
    Root,
    /// The title bar
    Title,
    /// Title bar close button
    CloseButton,
    /// Title bar maximize button
    MaximizeButton,
    /// Title bar minimize button
    MinimizeButton,
    /// The content region
    Content,
    /// The resize handle
    ResizeHandle,
}

impl Part {
    /// The enclosing element, `None` for the root
    pub fn parent(self) -> Option<Part> {
        match self {
            Part::Root => None,
            Part::Title | Part::Content | Part::ResizeHandle => Some(Part::Root),
            Part::CloseButton | Part::MaximizeButton | Part::MinimizeButton => Some(Part::Title),
        }
    }

    /// This part followed by its ancestors, ending at the root
    pub fn path(self) -> impl Iterator<Item = Part> {
        std::iter::successors(Some(self), |part| part.parent())
    }

    /// Whether this part is one of the title bar buttons
    pub fn is_title_button(self) -> bool {
        matches!(
            self,
            Part::CloseButton | Part::MaximizeButton | Part::MinimizeButton
        )
    }
}

/// Scopes a route to a subset of the window tree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `.wm-window-title`
    Title,
    /// `.wm-window-title button`
    TitleButton,
    /// `.wm-window-title button.wm-close`
    CloseButton,
    /// `.wm-window-title button.wm-maximize`
    MaximizeButton,
    /// `.wm-window-title button.wm-minimize`
    MinimizeButton,
    /// `button.wm-resize`
    ResizeHandle,
}

impl Selector {
    /// Whether an element matches this selector
    pub fn matches(self, part: Part) -> bool {
        match self {
            Selector::Title => part == Part::Title,
            Selector::TitleButton => part.is_title_button(),
            Selector::CloseButton => part == Part::CloseButton,
            Selector::MaximizeButton => part == Part::MaximizeButton,
            Selector::MinimizeButton => part == Part::MinimizeButton,
            Selector::ResizeHandle => part == Part::ResizeHandle,
        }
    }

    /// CSS form of the selector, for diagnostics
    pub fn css(self) -> &'static str {
        match self {
            Selector::Title => ".wm-window-title",
            Selector::TitleButton => ".wm-window-title button",
            Selector::CloseButton => ".wm-window-title button.wm-close",
            Selector::MaximizeButton => ".wm-window-title button.wm-maximize",
            Selector::MinimizeButton => ".wm-window-title button.wm-minimize",
            Selector::ResizeHandle => "button.wm-resize",
        }
    }
}
