// SPDX-License-Identifier: MPL-2.0
//! Containment queries against the rendered layout.

use super::PanelId;
use iced::{Point, Rectangle};
use std::collections::HashMap;

/// A hit-testable area belonging to a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The panel body itself.
    Panel(PanelId),
    /// The control that opens the panel.
    Toggle(PanelId),
}

/// Answers "is this point inside that region" for the current frame.
pub trait Surface {
    fn contains(&self, region: Region, target: Point) -> bool;
}

/// Surface backed by a map of axis-aligned bounds.
///
/// Regions without recorded bounds contain nothing.
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    bounds: HashMap<Region, Rectangle>,
}

impl LayoutRegions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the bounds of `region`, replacing previous bounds.
    pub fn insert(&mut self, region: Region, bounds: Rectangle) {
        self.bounds.insert(region, bounds);
    }

    #[must_use]
    pub fn with(mut self, region: Region, bounds: Rectangle) -> Self {
        self.insert(region, bounds);
        self
    }

    #[must_use]
    pub fn bounds(&self, region: Region) -> Option<Rectangle> {
        self.bounds.get(&region).copied()
    }
}

impl Surface for LayoutRegions {
    fn contains(&self, region: Region, target: Point) -> bool {
        self.bounds
            .get(&region)
            .is_some_and(|bounds| bounds.contains(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    #[test]
    fn missing_region_contains_nothing() {
        let regions = LayoutRegions::new();
        assert!(!regions.contains(Region::Panel(PanelId::User), Point::ORIGIN));
    }

    #[test]
    fn recorded_region_contains_inner_points() {
        let regions = LayoutRegions::new().with(
            Region::Toggle(PanelId::New),
            Rectangle::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0)),
        );

        assert!(regions.contains(Region::Toggle(PanelId::New), Point::new(15.0, 15.0)));
        assert!(!regions.contains(Region::Toggle(PanelId::New), Point::new(40.0, 15.0)));
        assert!(!regions.contains(Region::Panel(PanelId::New), Point::new(15.0, 15.0)));
    }
}
