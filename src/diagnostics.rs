//! Optional reporting of rejected calls
//!
//! Invalid input never raises an error on the animation path: the call is
//! ignored. A cube can be configured with a [`RejectionHook`] that is told
//! about every ignored call. The hook is a plain function, so reports are
//! usually forwarded into a `static` [`RejectionChannel`] and drained later:
//!
//! ```ignore
//! static REJECTIONS: RejectionChannel<8> = RejectionChannel::new();
//!
//! fn report(rejection: Rejection) {
//!     let _ = REJECTIONS.try_send(rejection);
//! }
//!
//! let config = CubeConfig { on_reject: Some(report), ..CubeConfig::default() };
//! ```

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::geometry::Cell;

/// Pattern generator that received an out-of-range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Level,
    Row,
    Plane,
    Column,
    Drop,
    Perimeter,
}

/// A call that was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Cell write outside the cube
    CellOutOfBounds(Cell),
    /// Flat sequence with a dangling level byte
    OddSequence { len: usize },
    /// Pattern selector of zero or above its bound
    Selector { pattern: Pattern, value: u8 },
}

/// Receives every rejected call
pub type RejectionHook = fn(Rejection);

/// Bounded rejection queue, safe to share from a `static`.
///
/// Synchronized with critical sections and backed by a fixed-size
/// `heapless::Deque`.
pub struct RejectionChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Rejection, SIZE>>>,
}

impl<const SIZE: usize> RejectionChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Queue a rejection
    ///
    /// Returns the rejection back if the channel is full.
    pub fn try_send(&self, rejection: Rejection) -> Result<(), Rejection> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().push_back(rejection))
    }

    /// Take the oldest queued rejection
    pub fn try_receive(&self) -> Option<Rejection> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of queued rejections
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for RejectionChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
