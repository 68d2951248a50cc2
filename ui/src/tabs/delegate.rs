use api::AssetType;
use dioxus_logger::tracing::debug;
use tokio::sync::mpsc;

/// Receives the user's asset-level requests from the tab controller.
///
/// Calls are synchronous and happen before the triggering controller method
/// returns. The controller only holds a weak reference to its delegate.
pub trait AssetDelegate {
    /// The active asset changed through [`select_asset`](super::TabViewController::select_asset).
    fn did_set_asset_type(&self, asset: AssetType);

    /// The "choose asset" control was activated.
    fn selector_button_clicked(&self);

    /// The "scan QR code" control was activated.
    fn qr_code_button_clicked(&self);
}

/// The delegate notifications as a tagged value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetEvent {
    DidSetAssetType(AssetType),
    SelectorButtonClicked,
    QrCodeButtonClicked,
}

/// Forwards delegate calls into an unbounded channel with a single consumer.
#[derive(Debug, Clone)]
pub struct ChannelDelegate {
    tx: mpsc::UnboundedSender<AssetEvent>,
}

impl ChannelDelegate {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AssetEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: AssetEvent) {
        if self.tx.send(event).is_err() {
            debug!("asset event {event:?} dropped: receiver closed");
        }
    }
}

impl AssetDelegate for ChannelDelegate {
    fn did_set_asset_type(&self, asset: AssetType) {
        self.send(AssetEvent::DidSetAssetType(asset));
    }

    fn selector_button_clicked(&self) {
        self.send(AssetEvent::SelectorButtonClicked);
    }

    fn qr_code_button_clicked(&self) {
        self.send(AssetEvent::QrCodeButtonClicked);
    }
}
