use crate::surface::Viewport;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme implied by the document root's class list.
    pub fn from_class_list<'a>(mut classes: impl Iterator<Item = &'a str>) -> Self {
        if classes.any(|c| c == "dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Host-fed input the simulation reads each frame. Event handlers write it
/// between frames; only the frame step reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputState {
    pub pointer: Vec2,
    pub theme: Theme,
}

impl InputState {
    /// Pointer parked at the viewport centre.
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            pointer: viewport.center(),
            theme: Theme::Light,
        }
    }

    pub fn pointer_leave(&mut self, viewport: Viewport) {
        self.pointer = viewport.center();
    }
}
