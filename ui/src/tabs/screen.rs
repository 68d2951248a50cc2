use api::RateMap;

/// An asset screen hosted in one tab slot.
///
/// The controller owns every screen for its whole lifetime and only moves it
/// in and out of the content area, so per-screen state survives tab switches.
pub trait Screen {
    /// Attach to the content area.
    fn mount(&mut self);

    /// Detach from the content area. The screen is kept for reuse.
    fn unmount(&mut self);

    /// Re-render currency symbols and fiat values from `rates`.
    ///
    /// Only called while the screen is mounted.
    fn reload_symbols(&mut self, rates: &RateMap);
}
