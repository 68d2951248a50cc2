//! Swaps the visible asset screen and keeps badges and rate-derived text current.
//!
//! Everything here runs on the UI thread. The only operation that spans more
//! than one event-loop turn is an animated swap: the controller mounts the
//! incoming screen, reports [`SwapOutcome::Animating`], and waits for the host
//! to call [`TabViewController::complete_transition`] when its cross-fade ends.
//! Swap requests that arrive in between are queued and run in order.

use super::delegate::AssetDelegate;
use super::gesture::GestureId;
use super::gesture::TapGesture;
use super::screen::Screen;
use super::slot::SetupError;
use super::slot::SlotTable;
use super::tab_bar::BadgeState;
use super::tab_bar::TabBar;
use api::prefs::user_prefs::UserPrefs;
use api::AssetType;
use api::RateMap;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use std::collections::VecDeque;
use std::rc::Rc;
use std::rc::Weak;

/// The tab currently shown. Replaced as a whole when a swap commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSelection {
    pub index: usize,
    pub asset: AssetType,
}

/// An animated swap in flight. Both screens are mounted until it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

/// What a swap request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The target was already shown (or already the pending target).
    Unchanged,
    /// The swap committed before the call returned.
    Swapped { from: usize, to: usize },
    /// The incoming screen is mounted; call `complete_transition` when the
    /// host's animation finishes.
    Animating { from: usize, to: usize },
    /// Another swap is in flight; this one runs after it.
    Queued { to: usize },
}

#[derive(Debug, Clone, Copy)]
struct SwapRequest {
    index: usize,
    animated: bool,
}

pub struct TabViewController<S, B> {
    slots: SlotTable<S>,
    tab_bar: B,
    active: ActiveSelection,
    transition: Option<Transition>,
    queued: VecDeque<SwapRequest>,
    badges: BadgeState,
    rates: RateMap,
    gestures: Vec<TapGesture>,
    delegate: Option<Weak<dyn AssetDelegate>>,
    animate_swaps: bool,
}

impl<S: Screen, B: TabBar> TabViewController<S, B> {
    /// Takes ownership of the slots and mounts the tab for the user's default asset.
    ///
    /// Falls back to the first slot if the default asset has no tab.
    pub fn new(slots: SlotTable<S>, mut tab_bar: B, prefs: &UserPrefs) -> Result<Self, SetupError> {
        if slots.is_empty() {
            return Err(SetupError::NoSlots);
        }

        let index = slots.index_of(prefs.default_asset()).unwrap_or_else(|| {
            warn!(
                "default asset {} has no tab, starting on {}",
                prefs.default_asset(),
                slots[0].asset()
            );
            0
        });
        let active = ActiveSelection {
            index,
            asset: slots[index].asset(),
        };
        tab_bar.set_selected(index);

        let mut controller = Self {
            slots,
            tab_bar,
            active,
            transition: None,
            queued: VecDeque::new(),
            badges: BadgeState::default(),
            rates: RateMap::default(),
            gestures: Vec::new(),
            delegate: None,
            animate_swaps: prefs.animate_tab_swaps(),
        };
        controller.mount(index);
        Ok(controller)
    }

    /// Registers the delegate without taking ownership of it.
    pub fn set_delegate<D: AssetDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let delegate: Rc<dyn AssetDelegate> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    // --- Selection ---

    pub fn selected_index(&self) -> usize {
        self.active.index
    }

    pub fn active(&self) -> ActiveSelection {
        self.active
    }

    pub fn active_asset(&self) -> AssetType {
        self.active.asset
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Shows the tab for `asset` and tells the delegate.
    ///
    /// Selecting the tab that is already shown, or already about to be
    /// shown, does nothing. An asset without a tab is logged and ignored.
    pub fn select_asset(&mut self, asset: AssetType) -> SwapOutcome {
        let Some(index) = self.slots.index_of(asset) else {
            error!("select_asset: no tab registered for {asset}");
            return SwapOutcome::Unchanged;
        };

        if index == self.target_index() {
            debug!("select_asset: {asset} already selected");
            return SwapOutcome::Unchanged;
        }

        let outcome = self.set_active_view_controller(index, self.animate_swaps);
        self.notify(|delegate| delegate.did_set_asset_type(asset));
        outcome
    }

    /// Tab bar callback for a tap on the item at `index`.
    ///
    /// # Panics
    /// If `index` has no slot.
    pub fn did_select_item(&mut self, index: usize) -> SwapOutcome {
        self.assert_index(index);
        let asset = self.slots[index].asset();
        self.select_asset(asset)
    }

    /// Makes the screen in slot `index` the visible one.
    ///
    /// # Panics
    /// If `index` has no slot.
    pub fn set_active_view_controller(&mut self, index: usize, animated: bool) -> SwapOutcome {
        self.assert_index(index);

        if let Some(transition) = self.transition {
            debug!(
                "swap to {index} queued behind {} -> {}",
                transition.from, transition.to
            );
            self.queued.push_back(SwapRequest { index, animated });
            return SwapOutcome::Queued { to: index };
        }

        if index == self.active.index {
            return SwapOutcome::Unchanged;
        }

        self.begin_swap(index, animated)
    }

    /// Finishes the in-flight animated swap, then starts queued swaps.
    ///
    /// Returns `None` when nothing was animating. Otherwise returns
    /// `Animating` if a queued animated swap has started (call this again
    /// when it finishes), or `Swapped` with the tab now shown.
    pub fn complete_transition(&mut self) -> Option<SwapOutcome> {
        let Transition { from, to } = self.transition.take()?;
        self.commit(from, to);

        while let Some(request) = self.queued.pop_front() {
            if request.index == self.active.index {
                continue;
            }
            if let started @ SwapOutcome::Animating { .. } =
                self.begin_swap(request.index, request.animated)
            {
                return Some(started);
            }
        }
        Some(SwapOutcome::Swapped {
            from,
            to: self.active.index,
        })
    }

    /// The index the selection is heading to once pending swaps settle.
    fn target_index(&self) -> usize {
        self.queued
            .back()
            .map(|request| request.index)
            .or(self.transition.map(|transition| transition.to))
            .unwrap_or(self.active.index)
    }

    fn begin_swap(&mut self, index: usize, animated: bool) -> SwapOutcome {
        let from = self.active.index;
        self.mount(index);

        if animated {
            self.transition = Some(Transition { from, to: index });
            SwapOutcome::Animating { from, to: index }
        } else {
            self.commit(from, index);
            SwapOutcome::Swapped { from, to: index }
        }
    }

    /// Unmounts the old screen and switches the selection in one step.
    fn commit(&mut self, from: usize, to: usize) {
        let old = &mut self.slots[from];
        old.screen.unmount();
        old.mounted = false;
        self.active = ActiveSelection {
            index: to,
            asset: self.slots[to].asset(),
        };
        self.tab_bar.set_selected(to);
        info!(
            "tab {} -> {} ({})",
            from,
            to,
            self.active.asset.name()
        );
    }

    fn mount(&mut self, index: usize) {
        let slot = &mut self.slots[index];
        slot.screen.mount();
        slot.mounted = true;
        if slot.needs_symbol_refresh {
            debug!("applying deferred symbol refresh to tab {index}");
            slot.screen.reload_symbols(&self.rates);
            slot.needs_symbol_refresh = false;
        }
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.slots.len(),
            "tab index {index} out of range for {} slots",
            self.slots.len()
        );
    }

    // --- Delegate relay ---

    fn notify(&self, f: impl FnOnce(&dyn AssetDelegate)) {
        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(delegate) => f(delegate.as_ref()),
            None => debug!("no asset delegate attached"),
        }
    }

    pub fn selector_button_clicked(&self) {
        self.notify(|delegate| delegate.selector_button_clicked());
    }

    pub fn qr_code_button_clicked(&self) {
        self.notify(|delegate| delegate.qr_code_button_clicked());
    }

    // --- Gestures ---

    /// Attaches `gesture` to the tab bar, replacing any gesture with the same id.
    pub fn add_tap_gesture_recognizer_to_tab_bar(&mut self, gesture: TapGesture) {
        let id = gesture.id();
        match self.gestures.iter_mut().find(|existing| existing.id() == id) {
            Some(existing) => *existing = gesture,
            None => {
                self.tab_bar.attach_gesture(id);
                self.gestures.push(gesture);
            }
        }
    }

    /// Detaches the gesture. Returns `false` if it was never attached.
    pub fn remove_tap_gesture_recognizer_from_tab_bar(&mut self, id: GestureId) -> bool {
        let Some(position) = self.gestures.iter().position(|g| g.id() == id) else {
            debug!("{id} is not attached to the tab bar");
            return false;
        };
        self.gestures.remove(position);
        self.tab_bar.detach_gesture(id);
        true
    }

    /// Runs the handler of an attached gesture. Returns `false` for unknown ids.
    pub fn tap_gesture_fired(&mut self, id: GestureId) -> bool {
        match self.gestures.iter_mut().find(|g| g.id() == id) {
            Some(gesture) => {
                gesture.fire();
                true
            }
            None => false,
        }
    }

    // --- Badges ---

    /// Sets the badge for tab `index`; negative numbers clear it.
    ///
    /// # Panics
    /// If `index` has no slot.
    pub fn update_badge_number(&mut self, number: i64, index: usize) {
        self.assert_index(index);
        let count = u32::try_from(number.max(0)).unwrap_or(u32::MAX);
        if self.badges.set(index, count) {
            self.tab_bar.set_badge(index, count);
        }
    }

    pub fn badge_number(&self, index: usize) -> u32 {
        self.badges.get(index)
    }

    pub fn badges(&self) -> &BadgeState {
        &self.badges
    }

    // --- Exchange rates ---

    pub fn exchange_rates(&self) -> &RateMap {
        &self.rates
    }

    /// Stores freshly fetched rates and re-renders symbols on every screen.
    pub fn did_fetch_exchange_rate(&mut self, rates: RateMap) {
        self.rates = rates;
        self.reload_symbols();
    }

    /// Asks every mounted screen to re-render its symbols. This includes
    /// both screens of an in-flight swap. Detached screens are refreshed
    /// when next mounted.
    pub fn reload_symbols(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.mounted {
                slot.screen.reload_symbols(&self.rates);
                slot.needs_symbol_refresh = false;
            } else {
                debug!("deferring symbol refresh for tab {}", slot.index());
                slot.needs_symbol_refresh = true;
            }
        }
    }

    // --- Collaborators ---

    pub fn slots(&self) -> &SlotTable<S> {
        &self.slots
    }

    pub fn screen(&self, index: usize) -> Option<&S> {
        self.slots.get(index).map(|slot| slot.screen())
    }

    pub fn tab_bar(&self) -> &B {
        &self.tab_bar
    }
}
