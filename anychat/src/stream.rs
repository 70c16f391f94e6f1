#![allow(unsafe_code)]
//! Subscription bridge: repeating native callbacks delivered to a queue or a
//! listener.
//!
//! Each registration owns one [`Sink`] behind one correlation token. The
//! native core keeps a single listener per event source, so the handle owner
//! replaces an earlier registration with an explicit clear-then-set and
//! closes the replaced sink. Once a sink is closed nothing more is delivered
//! through it; events already queued stay readable.

use std::any::Any;
use std::cell::Cell;
use std::ffi::c_void;
use std::pin::Pin;
use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};
use std::fmt;

use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{error, warn};

use crate::error::{Error, Result};
use crate::ffi::catch_panic;
use crate::handle::{ClientPtr, HandleOwner};
use crate::native::Native;
use crate::token::{self, Entry, TokenId};

/// Listener callback type for push-style delivery.
pub(crate) type Listener<E> = Arc<dyn Fn(E) + Send + Sync>;

/// Install (`Some(userdata)`) or clear (`None`) one source's native registration.
pub(crate) type Install = unsafe fn(&dyn Native, ClientPtr, Option<*mut c_void>) -> Result<()>;

/// A native push source.
pub(crate) trait EventSource: 'static {
    /// Host value delivered per native invocation.
    type Event: Send + 'static;
    /// Stable name used for logging and for the one-registration-per-source map.
    const NAME: &'static str;

    /// Point the source's native setter at `userdata` with this source's
    /// trampoline, or clear it with `None`.
    ///
    /// # Safety
    ///
    /// `client` must be the live client handle of the owner calling this.
    unsafe fn install(
        native: &dyn Native,
        client: ClientPtr,
        userdata: Option<*mut c_void>,
    ) -> Result<()>;
}

pub(crate) enum Delivery<E> {
    Queue(mpsc::UnboundedSender<E>),
    Listener(Listener<E>),
    Closed,
}

thread_local! {
    static DELIVERING: Cell<usize> = const { Cell::new(0) };
}

/// Marks the sink whose listener runs on this thread, so a listener that
/// cancels its own registration does not wait on itself.
struct DeliveringMarker(usize);

impl DeliveringMarker {
    fn enter(addr: usize) -> Self {
        Self(DELIVERING.replace(addr))
    }
}

impl Drop for DeliveringMarker {
    fn drop(&mut self) {
        DELIVERING.set(self.0);
    }
}

/// Delivery end of one registration.
pub(crate) struct Sink<E> {
    source: &'static str,
    closed: AtomicBool,
    delivery: RwLock<Delivery<E>>,
}

impl<E: Send + 'static> Sink<E> {
    pub(crate) fn new(source: &'static str, delivery: Delivery<E>) -> Self {
        Self {
            source,
            closed: AtomicBool::new(false),
            delivery: RwLock::new(delivery),
        }
    }

    fn addr(&self) -> usize {
        ptr::from_ref(self).addr()
    }

    fn deliver(&self, event: E) {
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        let delivery = self.delivery.read_recursive();
        if self.closed.load(Ordering::Acquire) {
            return;
        }
        match &*delivery {
            Delivery::Queue(tx) => {
                if tx.send(event).is_err() {
                    tracing::debug!(source = self.source, "subscriber gone, event dropped");
                }
            }
            Delivery::Listener(listener) => {
                let _marker = DeliveringMarker::enter(self.addr());
                listener(event);
            }
            Delivery::Closed => {}
        }
    }
}

/// Type-erased control over a [`Sink`], as stored in the token arena.
pub(crate) trait SinkControl: Send + Sync {
    fn source(&self) -> &'static str;
    /// Stop delivery. On return no delivery through this sink is running,
    /// except one on the calling thread that led here.
    fn close(&self);
    fn is_closed(&self) -> bool;
    fn as_any(&self) -> &dyn Any;
}

impl<E: Send + 'static> SinkControl for Sink<E> {
    fn source(&self) -> &'static str {
        self.source
    }

    fn close(&self) {
        self.closed.store(true, Ordering::Release);
        if DELIVERING.get() == self.addr() {
            return;
        }
        *self.delivery.write() = Delivery::Closed;
    }

    fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Close the sink behind `token`, if it is still registered.
pub(crate) fn retire(token: TokenId) {
    if let Some(Entry::Subscription(sink)) = token::remove(token) {
        sink.close();
    }
}

/// Route one native delivery for source `S` to its sink.
///
/// `convert` runs only when the token is live; a conversion failure drops
/// that single event.
pub(crate) fn deliver<S: EventSource>(userdata: *mut c_void, convert: impl FnOnce() -> Result<S::Event>) {
    catch_panic(S::NAME, || {
        let id = TokenId::from_userdata(userdata);
        let Some(control) = token::subscription(id) else {
            warn!(token = %id, source = S::NAME, "event for an unknown or cancelled subscription discarded");
            return;
        };
        let Some(sink) = control.as_any().downcast_ref::<Sink<S::Event>>() else {
            error!(token = %id, source = S::NAME, "subscription token bound to a different event type");
            return;
        };
        if control.is_closed() {
            return;
        }
        match convert() {
            Ok(event) => sink.deliver(event),
            Err(e) => warn!(source = S::NAME, error = %e, "malformed event dropped"),
        }
    });
}

/// Who a [`Subscription`] deregisters from when it ends.
pub(crate) struct Registration {
    pub(crate) owner: Weak<HandleOwner>,
    pub(crate) source: &'static str,
    pub(crate) token: TokenId,
}

impl Registration {
    fn release(self) {
        match self.owner.upgrade() {
            Some(owner) => owner.release(self.source, self.token),
            None => retire(self.token),
        }
    }
}

/// A live event subscription backed by an unbounded queue.
///
/// Yields events in the order the native core produced them via
/// [`recv`](Self::recv), [`try_recv`](Self::try_recv),
/// [`blocking_recv`](Self::blocking_recv) or as a [`futures::Stream`].
/// Dropping it cancels the native registration.
pub struct Subscription<E> {
    rx: mpsc::UnboundedReceiver<E>,
    registration: Option<Registration>,
}

impl<E> Subscription<E> {
    pub(crate) const fn new(rx: mpsc::UnboundedReceiver<E>, registration: Registration) -> Self {
        Self {
            rx,
            registration: Some(registration),
        }
    }

    /// Wait for the next event. `None` once the subscription has ended and
    /// every queued event was taken.
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Take a queued event without waiting.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] once the subscription has ended and drained.
    pub fn try_recv(&mut self) -> Result<Option<E>> {
        match self.rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => {
                Err(Error::InvalidState("subscription has ended".into()))
            }
        }
    }

    /// Block the current thread until the next event.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn blocking_recv(&mut self) -> Option<E> {
        self.rx.blocking_recv()
    }

    /// Clear the native registration. Queued events stay readable. Safe to
    /// call more than once.
    pub fn cancel(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.release();
        }
        self.rx.close();
    }

    /// Whether [`cancel`](Self::cancel) has run.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.registration.is_none()
    }
}

impl<E> Unpin for Subscription<E> {}

impl<E> futures::Stream for Subscription<E> {
    type Item = E;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<E>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<E> fmt::Debug for Subscription<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("source", &self.registration.as_ref().map(|r| r.source))
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}
