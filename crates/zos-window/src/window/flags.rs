//! Boolean window state

use serde::Serialize;

/// A boolean window attribute, driven through
/// [`Window::transition`](super::Window::transition)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Opened,
    Closed,
    Enabled,
    Active,
    Maximized,
    Minimized,
    Movable,
    Resizable,
}

/// Current value of every flag
///
/// Flags are independent: nothing keeps `maximized` and `minimized` from
/// both being set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub opened: bool,
    pub closed: bool,
    pub enabled: bool,
    pub active: bool,
    pub maximized: bool,
    pub minimized: bool,
    pub movable: bool,
    pub resizable: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            opened: false,
            closed: false,
            enabled: true,
            active: false,
            maximized: false,
            minimized: false,
            movable: true,
            resizable: true,
        }
    }
}

impl Flags {
    /// Read one flag
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Opened => self.opened,
            Flag::Closed => self.closed,
            Flag::Enabled => self.enabled,
            Flag::Active => self.active,
            Flag::Maximized => self.maximized,
            Flag::Minimized => self.minimized,
            Flag::Movable => self.movable,
            Flag::Resizable => self.resizable,
        }
    }

    pub(crate) fn set(&mut self, flag: Flag, value: bool) {
        let slot = match flag {
            Flag::Opened => &mut self.opened,
            Flag::Closed => &mut self.closed,
            Flag::Enabled => &mut self.enabled,
            Flag::Active => &mut self.active,
            Flag::Maximized => &mut self.maximized,
            Flag::Minimized => &mut self.minimized,
            Flag::Movable => &mut self.movable,
            Flag::Resizable => &mut self.resizable,
        };
        *slot = value;
    }
}
