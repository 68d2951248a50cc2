use std::fmt;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

/// Identifies a registered tap gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(u64);

impl GestureId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GestureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gesture#{}", self.0)
    }
}

/// A tap recognizer built by the host and attached to the tab bar surface.
///
/// Typical use is dismissing an open side menu when the tab bar is tapped.
pub struct TapGesture {
    id: GestureId,
    handler: Box<dyn FnMut()>,
}

impl TapGesture {
    pub fn new(handler: impl FnMut() + 'static) -> Self {
        Self {
            id: GestureId::next(),
            handler: Box::new(handler),
        }
    }

    pub fn id(&self) -> GestureId {
        self.id
    }

    pub(crate) fn fire(&mut self) {
        (self.handler)()
    }
}

impl fmt::Debug for TapGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TapGesture").field("id", &self.id).finish()
    }
}
