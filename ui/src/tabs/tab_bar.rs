use super::gesture::GestureId;
use std::collections::BTreeMap;

/// The tab bar widget, as seen by the controller.
///
/// Item taps flow the other way, into
/// [`TabViewController::did_select_item`](super::TabViewController::did_select_item).
pub trait TabBar {
    /// Highlight the item at `index`.
    fn set_selected(&mut self, index: usize);

    /// Show `count` on the item at `index`. Zero hides the badge.
    fn set_badge(&mut self, index: usize, count: u32);

    fn attach_gesture(&mut self, id: GestureId);

    fn detach_gesture(&mut self, id: GestureId);
}

/// Badge counts per tab index. Missing entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeState(BTreeMap<usize, u32>);

impl BadgeState {
    pub fn get(&self, index: usize) -> u32 {
        self.0.get(&index).copied().unwrap_or(0)
    }

    /// Stores `count` for `index`. Returns `true` if the visible value changed.
    pub(crate) fn set(&mut self, index: usize, count: u32) -> bool {
        if self.get(index) == count {
            return false;
        }
        if count == 0 {
            self.0.remove(&index);
        } else {
            self.0.insert(index, count);
        }
        true
    }

    /// Tabs currently showing a badge, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.0.iter().map(|(&index, &count)| (index, count))
    }
}
