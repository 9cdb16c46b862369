// SPDX-License-Identifier: MPL-2.0
//! Grouping of the active set by position, as the overlay draws it.

use super::item::NotificationItem;
use super::method::Position;

/// Active items split into the three shared stacks plus individually
/// placed custom-position items. Each group keeps active-set order.
#[derive(Debug)]
pub struct PositionGroups<'a, C> {
    pub top: Vec<&'a NotificationItem<C>>,
    pub bottom: Vec<&'a NotificationItem<C>>,
    pub center: Vec<&'a NotificationItem<C>>,
    pub custom: Vec<&'a NotificationItem<C>>,
}

impl<'a, C> PositionGroups<'a, C> {
    #[must_use]
    pub fn from_active(active: &'a [NotificationItem<C>]) -> Self {
        let mut groups = Self {
            top: Vec::new(),
            bottom: Vec::new(),
            center: Vec::new(),
            custom: Vec::new(),
        };
        for item in active {
            match item.position() {
                Position::TopEdge => groups.top.push(item),
                Position::BottomEdge => groups.bottom.push(item),
                Position::Center => groups.center.push(item),
                Position::Custom(_) => groups.custom.push(item),
            }
        }
        groups
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top.is_empty()
            && self.bottom.is_empty()
            && self.center.is_empty()
            && self.custom.is_empty()
    }
}
