use api::AssetType;
use std::ops::Index;
use std::ops::IndexMut;
use thiserror::Error;

/// A slot table that cannot back a tab controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("no tab slots registered")]
    NoSlots,
    #[error("asset {0} is registered for more than one tab")]
    DuplicateAsset(AssetType),
}

/// One tab: its asset, its position in the tab bar, and the screen it owns.
#[derive(Debug)]
pub struct TabSlot<S> {
    asset: AssetType,
    index: usize,
    pub(crate) screen: S,
    /// Whether the screen is attached to the content area.
    pub(crate) mounted: bool,
    /// A symbol refresh arrived while the screen was detached.
    pub(crate) needs_symbol_refresh: bool,
}

impl<S> TabSlot<S> {
    pub fn asset(&self) -> AssetType {
        self.asset
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn needs_symbol_refresh(&self) -> bool {
        self.needs_symbol_refresh
    }
}

/// The fixed set of tabs, indexed from 0 in registration order.
#[derive(Debug)]
pub struct SlotTable<S> {
    slots: Vec<TabSlot<S>>,
}

impl<S> SlotTable<S> {
    pub fn builder() -> SlotTableBuilder<S> {
        SlotTableBuilder { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false for a built table; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn index_of(&self, asset: AssetType) -> Option<usize> {
        self.slots.iter().position(|slot| slot.asset == asset)
    }

    pub fn get(&self, index: usize) -> Option<&TabSlot<S>> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TabSlot<S>> {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, TabSlot<S>> {
        self.slots.iter_mut()
    }

    pub fn assets(&self) -> impl Iterator<Item = AssetType> + '_ {
        self.slots.iter().map(|slot| slot.asset)
    }
}

impl<S> Index<usize> for SlotTable<S> {
    type Output = TabSlot<S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl<S> IndexMut<usize> for SlotTable<S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}

pub struct SlotTableBuilder<S> {
    entries: Vec<(AssetType, S)>,
}

impl<S> SlotTableBuilder<S> {
    /// Appends a tab for `asset`; its index is its position in the builder.
    pub fn slot(mut self, asset: AssetType, screen: S) -> Self {
        self.entries.push((asset, screen));
        self
    }

    pub fn build(self) -> Result<SlotTable<S>, SetupError> {
        if self.entries.is_empty() {
            return Err(SetupError::NoSlots);
        }

        let mut slots: Vec<TabSlot<S>> = Vec::with_capacity(self.entries.len());
        for (index, (asset, screen)) in self.entries.into_iter().enumerate() {
            if slots.iter().any(|slot| slot.asset == asset) {
                return Err(SetupError::DuplicateAsset(asset));
            }
            slots.push(TabSlot {
                asset,
                index,
                screen,
                mounted: false,
                needs_symbol_refresh: false,
            });
        }

        Ok(SlotTable { slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_registration_order() {
        let table = SlotTable::builder()
            .slot(AssetType::Ether, "eth")
            .slot(AssetType::Bitcoin, "btc")
            .build()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.index_of(AssetType::Bitcoin), Some(1));
        assert_eq!(table.index_of(AssetType::Pax), None);
        assert_eq!(table[0].asset(), AssetType::Ether);
        assert_eq!(*table[1].screen(), "btc");
        assert!(table.iter().all(|slot| !slot.is_mounted()));
    }

    #[test]
    fn rejects_empty_and_duplicate_tables() {
        assert_eq!(
            SlotTable::<()>::builder().build().unwrap_err(),
            SetupError::NoSlots
        );
        assert_eq!(
            SlotTable::builder()
                .slot(AssetType::Pax, ())
                .slot(AssetType::Pax, ())
                .build()
                .unwrap_err(),
            SetupError::DuplicateAsset(AssetType::Pax)
        );
    }
}
