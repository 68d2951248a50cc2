// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
pub mod compat;
pub mod components;
pub mod screens;
pub mod tabs;

use api::prefs::user_prefs::UserPrefs;
use api::AssetType;
use api::RateMap;
use app_state_mut::AppStateMut;
use app_state_mut::ShellDelegate;
use components::asset_tab_bar::AssetTabBar;
use components::asset_tab_bar::SignalTabBar;
use components::asset_tab_bar::TabBarModel;
use dioxus_logger::tracing::warn;
use futures::StreamExt;
use screens::asset_summary::AssetSummary;
use screens::asset_summary::AssetSummaryScreen;
use screens::asset_summary::ScreenView;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use strum::IntoEnumIterator;
use tabs::AssetEvent;
use tabs::GestureId;
use tabs::SetupError;
use tabs::SlotTable;
use tabs::SwapOutcome;
use tabs::TabViewController;
use tabs::TapGesture;
use tabs::Transition;

/// Length of the cross-fade between asset screens.
const FADE_DURATION: Duration = Duration::from_millis(250);

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        display: flex;
        flex-direction: column;
        height: 100vh;
        padding: 10px;
    }

    .tab-menu ul { display: flex; gap: 0.5rem; list-style: none; padding: 0; }

    .tab-menu a.active-tab {
        color: var(--pico-primary);
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .tab-menu .badge {
        margin-left: 0.35rem;
        padding: 0 0.4rem;
        border-radius: 0.75rem;
        font-size: 0.75rem;
        color: white;
        background: #d9534f;
    }

    .content { position: relative; flex: 1; overflow: hidden; }

    .asset-screen { position: absolute; inset: 0; }
    .asset-screen.fading-in { animation: fade-in 250ms ease-in forwards; }
    .asset-screen.fading-out { animation: fade-out 250ms ease-out forwards; }

    @keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
    @keyframes fade-out { from { opacity: 1; } to { opacity: 0; } }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

/// Builds the tab controller once, then hands it to [`LoadedApp`].
#[component]
fn AppBody() -> Element {
    let setup = use_hook(|| build_state(UserPrefs::default()).map_err(|e| e.to_string()));

    match setup {
        Ok(state) => rsx! {
            LoadedApp {
                state,
            }
        },
        Err(e) => rsx! {
            p {
                "Wallet tabs could not be set up: {e}"
            }
        },
    }
}

/// Creates one tab per asset and wires the controller to the shell's signals.
fn build_state(prefs: UserPrefs) -> Result<AppStateMut, SetupError> {
    let tab_bar = Signal::new(TabBarModel::new(AssetType::iter()));
    let views: Vec<ScreenView> = AssetType::iter().map(ScreenView::new).collect();

    let slots = views
        .iter()
        .fold(SlotTable::builder(), |builder, view| {
            builder.slot(
                view.asset,
                AssetSummaryScreen::new(*view, *prefs.display_preference()),
            )
        })
        .build()?;
    let mut controller = TabViewController::new(slots, SignalTabBar::new(tab_bar), &prefs)?;

    let selector_open = Signal::new(false);
    let last_event = Signal::new(None);
    let delegate = Rc::new(ShellDelegate {
        selector_open,
        last_event,
    });
    controller.set_delegate(&delegate);

    if let Some(rates) = rates_from_env() {
        controller.did_fetch_exchange_rate(rates);
    }

    Ok(AppStateMut {
        controller: Rc::new(RefCell::new(controller)),
        tab_bar,
        views: Rc::new(views),
        transition: Signal::new(None),
        selector_open,
        dismiss_gesture: Signal::new(None),
        last_event,
        delegate,
    })
}

/// Reads startup rates from `EXCHANGE_RATES`, e.g. "BTC-USD=6500,ETH-USD=204.51".
fn rates_from_env() -> Option<RateMap> {
    let list = std::env::var("EXCHANGE_RATES").ok()?;
    match RateMap::parse_list(&list) {
        Ok(rates) => Some(rates),
        Err(e) => {
            warn!("ignoring EXCHANGE_RATES: {e}");
            None
        }
    }
}

/// Runs the host side of animated swaps: for each `Animating` outcome sent
/// to it, wait out the fade, then let the controller commit it and start
/// whatever was queued behind it.
///
/// Call from the shell's root layout. The driver lives as long as that scope,
/// so swaps started from short-lived components such as the selector still
/// complete after those components unmount.
fn use_swap_driver(state: &AppStateMut) -> Coroutine<SwapOutcome> {
    let controller = state.controller.clone();
    let transition = state.transition;

    use_coroutine(move |mut outcomes: UnboundedReceiver<SwapOutcome>| {
        let controller = controller.clone();
        let mut transition = transition;
        async move {
            while let Some(outcome) = outcomes.next().await {
                let SwapOutcome::Animating { from, to } = outcome else {
                    continue;
                };
                transition.set(Some(Transition { from, to }));

                loop {
                    compat::sleep(FADE_DURATION).await;
                    let next = controller.borrow_mut().complete_transition();
                    match next {
                        Some(SwapOutcome::Animating { from, to }) => {
                            transition.set(Some(Transition { from, to }));
                        }
                        _ => {
                            transition.set(None);
                            break;
                        }
                    }
                }
            }
        }
    })
}

fn open_selector(state: &AppStateMut) {
    state.controller.borrow().selector_button_clicked();

    if state.dismiss_gesture.peek().is_none() {
        let mut selector_open = state.selector_open;
        let gesture = TapGesture::new(move || selector_open.set(false));
        let mut dismiss_gesture = state.dismiss_gesture;
        dismiss_gesture.set(Some(gesture.id()));
        state
            .controller
            .borrow_mut()
            .add_tap_gesture_recognizer_to_tab_bar(gesture);
    }
}

fn close_selector(state: &AppStateMut) {
    let mut selector_open = state.selector_open;
    selector_open.set(false);

    let mut dismiss_gesture = state.dismiss_gesture;
    let attached = *dismiss_gesture.peek();
    if let Some(id) = attached {
        dismiss_gesture.set(None);
        state
            .controller
            .borrow_mut()
            .remove_tap_gesture_recognizer_from_tab_bar(id);
    }
}

fn choose_asset(state: &AppStateMut, swaps: Coroutine<SwapOutcome>, asset: AssetType) {
    let outcome = state.controller.borrow_mut().select_asset(asset);
    swaps.send(outcome);
    close_selector(state);
}

fn tab_selected(state: &AppStateMut, swaps: Coroutine<SwapOutcome>, index: usize) {
    let outcome = state.controller.borrow_mut().did_select_item(index);
    swaps.send(outcome);
}

/// A tap anywhere on the tab bar. Closes the selector if its dismiss
/// gesture was the one that fired.
fn tab_bar_tapped(state: &AppStateMut, id: GestureId) {
    let fired = state.controller.borrow_mut().tap_gesture_fired(id);
    if fired {
        close_selector(state);
    }
}

fn fade_class(transition: Option<Transition>, index: usize) -> &'static str {
    match transition {
        Some(t) if t.from == index => "asset-screen fading-out",
        Some(t) if t.to == index => "asset-screen fading-in",
        _ => "asset-screen",
    }
}

fn describe(event: AssetEvent) -> String {
    match event {
        AssetEvent::DidSetAssetType(asset) => format!("Showing {}", asset.name()),
        AssetEvent::SelectorButtonClicked => "Choose an asset".to_string(),
        AssetEvent::QrCodeButtonClicked => "QR scanner requested".to_string(),
    }
}

/// The asset chooser opened from the header.
#[component]
fn AssetSelector() -> Element {
    let state = use_context::<AppStateMut>();
    let swaps = use_coroutine_handle::<SwapOutcome>();
    let assets: Vec<AssetType> = state.controller.borrow().slots().assets().collect();

    rsx! {
        article {
            class: "custom-dropdown-menu",
            for asset in assets {
                a {
                    class: "custom-dropdown-item",
                    href: "#",
                    onclick: {
                        let state = state.clone();
                        move |event: MouseEvent| {
                            event.prevent_default();
                            choose_asset(&state, swaps, asset);
                        }
                    },
                    "{asset.name()} ({asset.symbol()})"
                }
            }
        }
    }
}

/// This component holds the main app layout and only runs once setup succeeded.
#[component]
fn LoadedApp(state: AppStateMut) -> Element {
    use_context_provider(|| state.clone());
    let swaps = use_swap_driver(&state);

    let transition = (state.transition)();
    let selector_open = (state.selector_open)();
    let status = (state.last_event)().map(describe).unwrap_or_default();

    let on_select = {
        let state = state.clone();
        move |index: usize| tab_selected(&state, swaps, index)
    };
    let on_gesture = {
        let state = state.clone();
        move |id: GestureId| tab_bar_tapped(&state, id)
    };
    let on_selector = {
        let state = state.clone();
        move |_: MouseEvent| open_selector(&state)
    };
    let on_scan = {
        let state = state.clone();
        move |_: MouseEvent| {
            state.controller.borrow().qr_code_button_clicked();
        }
    };

    rsx! {
        div {
            class: "app-main-container",
            header {
                nav {
                    ul {
                        li {
                            strong {
                                "Wallet"
                            }
                        }
                    }
                    ul {
                        li {
                            button {
                                class: "secondary outline",
                                onclick: on_selector,
                                "Assets ▾"
                            }
                        }
                        li {
                            button {
                                class: "contrast outline",
                                onclick: on_scan,
                                "Scan QR"
                            }
                        }
                    }
                }
                AssetTabBar {
                    model: state.tab_bar,
                    on_select,
                    on_gesture,
                }
            }
            if selector_open {
                AssetSelector {}
            }
            div {
                class: "content",
                for (index, view) in state.views.iter().copied().enumerate() {
                    if (view.mounted)() {
                        AssetSummary {
                            key: "{view.asset.symbol()}",
                            view,
                            class: fade_class(transition, index).to_string(),
                        }
                    }
                }
            }
            if !status.is_empty() {
                footer {
                    small {
                        "{status}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::display_preference::DisplayPreference;
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::dioxus_core::VirtualDom;

    /// Hands the state built inside the VirtualDom back to the test body.
    #[derive(Clone, Default)]
    struct StateCell(Rc<RefCell<Option<(AppStateMut, Coroutine<SwapOutcome>)>>>);

    impl PartialEq for StateCell {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    impl StateCell {
        fn get(&self) -> (AppStateMut, Coroutine<SwapOutcome>) {
            self.0.borrow().clone().expect("shell state not built")
        }
    }

    fn animated_prefs() -> UserPrefs {
        UserPrefs::new(DisplayPreference::CryptoOnly, AssetType::Bitcoin, true)
    }

    /// Root layout the way `LoadedApp` wires it, optionally opening the
    /// selector and rendering a chooser while it is open.
    #[component]
    fn Shell(cell: StateCell, pick: Option<AssetType>) -> Element {
        let state = use_hook(|| build_state(animated_prefs()).expect("tab setup"));
        use_context_provider(|| state.clone());
        let swaps = use_swap_driver(&state);
        use_hook(|| {
            *cell.0.borrow_mut() = Some((state.clone(), swaps));
            if pick.is_some() {
                open_selector(&state);
            }
        });
        let chooser = pick.filter(|_| (state.selector_open)());

        rsx! {
            for asset in chooser {
                Chooser {
                    key: "{asset}",
                    asset,
                }
            }
        }
    }

    /// Picks `asset` on first render, the way a click in `AssetSelector` does.
    #[component]
    fn Chooser(asset: AssetType) -> Element {
        let state = use_context::<AppStateMut>();
        let swaps = use_coroutine_handle::<SwapOutcome>();
        use_hook(|| choose_asset(&state, swaps, asset));
        rsx! {}
    }

    fn launch(pick: Option<AssetType>) -> (VirtualDom, AppStateMut, Coroutine<SwapOutcome>) {
        let cell = StateCell::default();
        let mut dom = VirtualDom::new_with_props(
            Shell,
            ShellProps {
                cell: cell.clone(),
                pick,
            },
        );
        dom.rebuild_in_place();
        dom.render_immediate(&mut NoOpMutations);
        let (state, swaps) = cell.get();
        (dom, state, swaps)
    }

    /// Drives the dom until `done` holds or about two seconds have passed.
    async fn run_until(dom: &mut VirtualDom, done: impl Fn() -> bool) {
        for _ in 0..40 {
            if done() {
                return;
            }
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[tokio::test]
    async fn fade_started_from_selector_completes_after_it_closes() {
        let (mut dom, state, _swaps) = launch(Some(AssetType::Ether));

        assert!(!dom.in_runtime(|| *state.selector_open.peek()));
        assert!(state.controller.borrow().is_transitioning());
        assert_eq!(state.controller.borrow().selected_index(), 0);

        let controller = state.controller.clone();
        run_until(&mut dom, || !controller.borrow().is_transitioning()).await;

        let c = state.controller.borrow();
        assert!(!c.is_transitioning());
        assert_eq!(c.selected_index(), 1);
        assert_eq!(c.active_asset(), AssetType::Ether);
        assert_eq!(dom.in_runtime(|| *state.transition.peek()), None);
        assert_eq!(dom.in_runtime(|| state.tab_bar.peek().selected), 1);
    }

    #[tokio::test]
    async fn tab_taps_after_a_selector_pick_still_swap() {
        let (mut dom, state, swaps) = launch(Some(AssetType::Ether));
        let controller = state.controller.clone();
        run_until(&mut dom, || !controller.borrow().is_transitioning()).await;
        assert_eq!(controller.borrow().selected_index(), 1);

        dom.in_runtime(|| tab_selected(&state, swaps, 2));
        assert_eq!(
            state.controller.borrow().transition(),
            Some(Transition { from: 1, to: 2 })
        );

        run_until(&mut dom, || !controller.borrow().is_transitioning()).await;
        assert_eq!(state.controller.borrow().selected_index(), 2);
    }

    #[tokio::test]
    async fn dismiss_gesture_is_attached_only_while_selector_is_open() {
        let (dom, state, _swaps) = launch(None);
        let gestures = || dom.in_runtime(|| state.tab_bar.peek().gestures.clone());
        assert!(gestures().is_empty());

        dom.in_runtime(|| open_selector(&state));
        let id = dom
            .in_runtime(|| *state.dismiss_gesture.peek())
            .expect("dismiss gesture attached");
        assert!(dom.in_runtime(|| *state.selector_open.peek()));
        assert_eq!(gestures(), vec![id]);

        // Opening again keeps the single gesture.
        dom.in_runtime(|| open_selector(&state));
        assert_eq!(gestures(), vec![id]);

        dom.in_runtime(|| tab_bar_tapped(&state, id));
        assert!(!dom.in_runtime(|| *state.selector_open.peek()));
        assert_eq!(dom.in_runtime(|| *state.dismiss_gesture.peek()), None);
        assert!(gestures().is_empty());
        assert!(!state.controller.borrow_mut().tap_gesture_fired(id));
        assert_eq!(
            dom.in_runtime(|| state.last_event.peek().clone()),
            Some(AssetEvent::SelectorButtonClicked)
        );
    }
}
