// SPDX-License-Identifier: MPL-2.0
//! Open/closed state for the dashboard header panels.
//!
//! Each panel is independent: opening one never closes another. Panels close
//! on explicit calls, on a pointer press outside both the panel and its
//! toggle control, on viewport resize, or on Escape, as allowed by the
//! panel's [`DismissPolicy`].

mod surface;

pub use surface::{LayoutRegions, Region, Surface};

use iced::Point;

/// Identifies a header panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    User,
    Search,
    Notifications,
    New,
}

impl PanelId {
    pub const ALL: [PanelId; 4] = [
        PanelId::User,
        PanelId::Search,
        PanelId::Notifications,
        PanelId::New,
    ];

    /// Order in which Escape closes panels, one per press.
    pub const ESCAPE_ORDER: [PanelId; 4] = [
        PanelId::Search,
        PanelId::New,
        PanelId::Notifications,
        PanelId::User,
    ];

    #[must_use]
    pub fn policy(self) -> DismissPolicy {
        match self {
            PanelId::User | PanelId::New => DismissPolicy {
                outside_click: true,
                viewport_resize: false,
            },
            PanelId::Search => DismissPolicy {
                outside_click: true,
                viewport_resize: true,
            },
            // The notifications tray stays put until toggled again.
            PanelId::Notifications => DismissPolicy {
                outside_click: false,
                viewport_resize: false,
            },
        }
    }

    fn index(self) -> usize {
        match self {
            PanelId::User => 0,
            PanelId::Search => 1,
            PanelId::Notifications => 2,
            PanelId::New => 3,
        }
    }
}

/// Which external interactions close a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissPolicy {
    pub outside_click: bool,
    pub viewport_resize: bool,
}

/// Open flag of a single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelState {
    pub id: PanelId,
    pub is_open: bool,
}

/// Tracks the open flag of every header panel.
#[derive(Debug, Clone)]
pub struct Controller {
    panels: [PanelState; 4],
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            panels: PanelId::ALL.map(|id| PanelState { id, is_open: false }),
        }
    }
}

impl Controller {
    /// Creates a controller with every panel closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, panel: PanelId) {
        self.set(panel, true);
    }

    pub fn close(&mut self, panel: PanelId) {
        self.set(panel, false);
    }

    pub fn toggle(&mut self, panel: PanelId) {
        let open = !self.is_open(panel);
        self.set(panel, open);
    }

    #[must_use]
    pub fn is_open(&self, panel: PanelId) -> bool {
        self.panels[panel.index()].is_open
    }

    #[must_use]
    pub fn state(&self, panel: PanelId) -> PanelState {
        self.panels[panel.index()]
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.panels.iter().any(|panel| panel.is_open)
    }

    /// Panels currently open, in declaration order.
    pub fn open_panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.panels
            .iter()
            .filter(|panel| panel.is_open)
            .map(|panel| panel.id)
    }

    /// Returns whether `target` lies outside both `panel` and its toggle.
    ///
    /// When it does, the panel is open, and its policy allows outside
    /// dismissal, the panel is closed as a side effect.
    pub fn is_outside_interaction(
        &mut self,
        panel: PanelId,
        target: Point,
        surface: &impl Surface,
    ) -> bool {
        let outside = !surface.contains(Region::Panel(panel), target)
            && !surface.contains(Region::Toggle(panel), target);

        if outside && self.is_open(panel) && panel.policy().outside_click {
            self.close(panel);
        }
        outside
    }

    /// Runs outside-interaction detection for every open panel.
    ///
    /// Returns the panels that were closed.
    pub fn on_pointer_pressed(&mut self, target: Point, surface: &impl Surface) -> Vec<PanelId> {
        let open: Vec<PanelId> = self.open_panels().collect();
        open.into_iter()
            .filter(|&panel| {
                self.is_outside_interaction(panel, target, surface) && !self.is_open(panel)
            })
            .collect()
    }

    /// Closes panels whose positioning is invalidated by a resize.
    ///
    /// Returns the panels that were closed.
    pub fn on_viewport_resize(&mut self) -> Vec<PanelId> {
        let affected: Vec<PanelId> = self
            .open_panels()
            .filter(|panel| panel.policy().viewport_resize)
            .collect();
        for &panel in &affected {
            self.close(panel);
        }
        affected
    }

    /// Closes the highest-priority open panel, if any.
    pub fn on_escape(&mut self) -> Option<PanelId> {
        let panel = PanelId::ESCAPE_ORDER
            .into_iter()
            .find(|&panel| self.is_open(panel))?;
        self.close(panel);
        Some(panel)
    }

    fn set(&mut self, panel: PanelId, open: bool) {
        let state = &mut self.panels[panel.index()];
        if state.is_open != open {
            tracing::debug!(?panel, open, "panel state changed");
            state.is_open = open;
        }
    }
}
