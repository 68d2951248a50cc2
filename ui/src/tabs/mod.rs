//! The headless tab controller: slot table, swap protocol, badges and
//! exchange-rate refresh. Rendering collaborators plug in through the
//! [`Screen`] and [`TabBar`] traits.

pub mod controller;
pub mod delegate;
pub mod gesture;
pub mod screen;
pub mod slot;
pub mod tab_bar;

pub use controller::ActiveSelection;
pub use controller::SwapOutcome;
pub use controller::TabViewController;
pub use controller::Transition;
pub use delegate::AssetDelegate;
pub use delegate::AssetEvent;
pub use delegate::ChannelDelegate;
pub use gesture::GestureId;
pub use gesture::TapGesture;
pub use screen::Screen;
pub use slot::SetupError;
pub use slot::SlotTable;
pub use slot::TabSlot;
pub use tab_bar::BadgeState;
pub use tab_bar::TabBar;
