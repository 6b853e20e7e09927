//! Ephemeral navbar state and the events that move it.

/// Local UI state for one mounted navbar. Reset on every mount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub is_scrolled: bool,
    /// Shared by the desktop dropdown and the mobile courses block.
    pub is_dropdown_open: bool,
    pub is_mobile_menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Scrolled { offset: f64 },
    Pressed { inside_dropdown: bool },
    CoursesToggled,
    MenuToggled,
}

impl NavState {
    pub fn apply(&mut self, event: NavEvent) {
        match event {
            // NaN compares false, so it reads as "not scrolled".
            NavEvent::Scrolled { offset } => self.is_scrolled = offset > 0.0,
            NavEvent::Pressed { inside_dropdown } => {
                if !inside_dropdown {
                    self.is_dropdown_open = false;
                }
            }
            NavEvent::CoursesToggled => self.is_dropdown_open = !self.is_dropdown_open,
            NavEvent::MenuToggled => self.is_mobile_menu_open = !self.is_mobile_menu_open,
        }
    }

    pub fn after(mut self, event: NavEvent) -> Self {
        self.apply(event);
        self
    }
}
