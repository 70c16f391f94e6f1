#![allow(unsafe_code)]
//! Operation bridge: one native call with a one-shot completion callback
//! becomes one [`Pending`] future that resolves exactly once.
//!
//! Resolution paths, all funnelled through [`token::take_operation`]:
//!
//! 1. the native call returns a non-zero status without calling back;
//! 2. the callback fires inline, before the native call returns;
//! 3. the callback fires later, from any thread;
//! 4. the handle owner is destroyed first and fails the operation.
//!
//! Whichever path takes the token first resolves; the rest find nothing and
//! log the inconsistency.

use std::any::Any;
use std::ffi::{c_char, c_int, c_void};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use anychat_sys as sys;
use tokio::sync::oneshot;
use tracing::{debug, error, warn};

use crate::error::{self, Error, Result};
use crate::ffi::{borrowed_str, catch_panic, error_message, flag};
use crate::marshal::{FromNative, ListGuard, NativeList};
use crate::native::Native;
use crate::token::{self, Entry, TokenId};

/// Upload progress listener: `(uploaded, total)` bytes.
pub(crate) type Progress = Arc<dyn Fn(u64, u64) + Send + Sync>;

trait Resolve: Send {
    fn fail(self: Box<Self>, error: Error);
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send>;
}

impl<T: Send + 'static> Resolve for oneshot::Sender<Result<T>> {
    fn fail(self: Box<Self>, error: Error) {
        if (*self).send(Err(error)).is_err() {
            debug!("operation failed after the caller stopped waiting");
        }
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send> {
        self
    }
}

/// The registered half of a pending operation, owned by the token arena.
pub(crate) struct Operation {
    native: Arc<dyn Native>,
    failure: c_int,
    progress: Option<Progress>,
    resolver: Box<dyn Resolve>,
}

impl Operation {
    pub(crate) fn progress(&self) -> Option<Progress> {
        self.progress.clone()
    }

    /// Classify an asynchronous failure message with this operation's status.
    fn failure(&self, message: *const c_char) -> Error {
        let message = unsafe { error_message(message, "operation failed") };
        Error::from_native(self.failure, message)
    }

    /// Resolve with `result`.
    pub(crate) fn resolve<T: Send + 'static>(self, result: Result<T>) {
        match self.resolver.into_any().downcast::<oneshot::Sender<Result<T>>>() {
            Ok(tx) => {
                if tx.send(result).is_err() {
                    debug!("operation resolved after the caller stopped waiting");
                }
            }
            Err(_) => error!(
                expected = std::any::type_name::<T>(),
                "correlation token resolved with a mismatched payload type"
            ),
        }
    }

    /// Resolve with `error`.
    pub(crate) fn fail(self, error: Error) {
        self.resolver.fail(error);
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("failure", &self.failure)
            .field("has_progress", &self.progress.is_some())
            .finish_non_exhaustive()
    }
}

enum State<T> {
    Ready(Option<Result<T>>),
    Waiting(oneshot::Receiver<Result<T>>),
}

/// An in-flight native operation.
///
/// The native call has already been issued when a `Pending` is returned;
/// awaiting it only waits for the result. Dropping it stops waiting: the
/// correlation token stays registered until the native callback fires or
/// the client is destroyed.
#[must_use = "a Pending resolves to the operation's result"]
pub struct Pending<T> {
    state: State<T>,
}

impl<T> Pending<T> {
    pub(crate) const fn failed(error: Error) -> Self {
        Self {
            state: State::Ready(Some(Err(error))),
        }
    }

    const fn waiting(rx: oneshot::Receiver<Result<T>>) -> Self {
        Self {
            state: State::Waiting(rx),
        }
    }

    /// Wait at most `duration` for the result.
    ///
    /// A local race: if the timer wins the operation fails with
    /// [`Error::Timeout`], and the native callback is discarded whenever it
    /// eventually fires.
    ///
    /// # Errors
    ///
    /// The operation's own error, or [`Error::Timeout`].
    pub async fn timeout(self, duration: Duration) -> Result<T> {
        tokio::time::timeout(duration, self)
            .await
            .map_err(|_| Error::Timeout(format!("no completion within {duration:?}")))?
    }

    /// Block the current thread until the result arrives.
    ///
    /// # Errors
    ///
    /// The operation's error.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context.
    pub fn wait(self) -> Result<T> {
        match self.state {
            State::Ready(result) => result.unwrap_or_else(|| Err(polled_twice())),
            State::Waiting(rx) => rx.blocking_recv().unwrap_or_else(|_| Err(abandoned())),
        }
    }
}

impl<T> Unpin for Pending<T> {}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Result<T>> {
        match &mut self.state {
            State::Ready(result) => Poll::Ready(result.take().unwrap_or_else(|| Err(polled_twice()))),
            State::Waiting(rx) => Pin::new(rx)
                .poll(cx)
                .map(|r| r.unwrap_or_else(|_| Err(abandoned()))),
        }
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Ready(_) => "ready",
            State::Waiting(_) => "waiting",
        };
        f.debug_struct("Pending").field("state", &state).finish()
    }
}

fn abandoned() -> Error {
    Error::InvalidState("operation was dropped without resolving".into())
}

fn polled_twice() -> Error {
    Error::InvalidState("operation result already taken".into())
}

/// Run `f`, turning an early argument error into a failed [`Pending`].
pub(crate) fn attempt<T>(f: impl FnOnce() -> Result<Pending<T>>) -> Pending<T> {
    f().unwrap_or_else(Pending::failed)
}

/// Register a token, then issue the native call with it.
///
/// `failure` is the native status asynchronous failures classify to.
pub(crate) fn invoke<T: Send + 'static>(
    owner: u64,
    native: &Arc<dyn Native>,
    failure: c_int,
    progress: Option<Progress>,
    submit: impl FnOnce(*mut c_void) -> c_int,
) -> Pending<T> {
    let (tx, rx) = oneshot::channel::<Result<T>>();
    let operation = Operation {
        native: Arc::clone(native),
        failure,
        progress,
        resolver: Box::new(tx),
    };
    let id = match token::insert(owner, Entry::Operation(operation)) {
        Ok(id) => id,
        Err(e) => return Pending::failed(e),
    };
    debug!(token = %id, owner, "operation registered");

    let rc = submit(id.into_userdata());
    if let Err(e) = error::check(native.as_ref(), rc) {
        match token::take_operation(id) {
            Some(op) => op.fail(e),
            None => warn!(
                token = %id,
                status = rc,
                "native call reported failure after already calling back"
            ),
        }
    }
    Pending::waiting(rx)
}

/// Take the operation behind `userdata` and hand it to `finish`.
fn complete(context: &'static str, userdata: *mut c_void, finish: impl FnOnce(Operation)) {
    catch_panic(context, || {
        let id = TokenId::from_userdata(userdata);
        match token::take_operation(id) {
            Some(op) => {
                debug!(token = %id, context, "operation resolved");
                finish(op);
            }
            None => warn!(
                token = %id,
                context,
                "callback for an unknown or already resolved token discarded"
            ),
        }
    });
}

/// `(userdata, success, error)`.
pub(crate) unsafe extern "C" fn result_trampoline(
    userdata: *mut c_void,
    success: c_int,
    error: *const c_char,
) {
    complete("result", userdata, |op| {
        if flag(success) {
            op.resolve(Ok(()));
        } else {
            let e = op.failure(error);
            op.fail(e);
        }
    });
}

/// `(userdata, success, payload, error)` where the payload is one native struct.
pub(crate) unsafe extern "C" fn value_trampoline<V: FromNative>(
    userdata: *mut c_void,
    success: c_int,
    payload: *const V::Raw,
    error: *const c_char,
) {
    complete(std::any::type_name::<V>(), userdata, |op| {
        if !flag(success) {
            let e = op.failure(error);
            return op.fail(e);
        }
        let result = match unsafe { payload.as_ref() } {
            Some(raw) => unsafe { V::from_native(raw) },
            None => Err(Error::InternalFault("success reported without a payload".into())),
        };
        op.resolve(result);
    });
}

/// `(userdata, list, error)`; a non-null `error` is failure. The list is
/// released on every path once the token is found.
///
/// A stale or duplicate token never reaches the guard: the owning client may
/// be gone, and the core reclaims a list nobody took once the callback returns.
pub(crate) unsafe extern "C" fn list_trampoline<L: NativeList>(
    userdata: *mut c_void,
    list: *const L::Raw,
    error: *const c_char,
) {
    complete(std::any::type_name::<L>(), userdata, |op| {
        let guard = unsafe { ListGuard::<L>::new(op.native.as_ref(), list) };
        let result = if error.is_null() {
            guard.convert()
        } else {
            Err(op.failure(error))
        };
        drop(guard);
        op.resolve(result);
    });
}

/// `(userdata, success, url, error)`.
pub(crate) unsafe extern "C" fn url_trampoline(
    userdata: *mut c_void,
    success: c_int,
    url: *const c_char,
    error: *const c_char,
) {
    complete("download_url", userdata, |op| {
        if !flag(success) {
            let e = op.failure(error);
            return op.fail(e);
        }
        let result = unsafe { borrowed_str(url) }.and_then(|url| {
            url.ok_or_else(|| Error::InternalFault("success reported without a URL".into()))
        });
        op.resolve(result);
    });
}

/// `(userdata, uploaded, total)`; shares its token with the upload's
/// completion callback and never consumes it.
pub(crate) unsafe extern "C" fn progress_trampoline(
    userdata: *mut c_void,
    uploaded: i64,
    total: i64,
) {
    catch_panic("upload_progress", || {
        let id = TokenId::from_userdata(userdata);
        match token::operation_progress(id) {
            Some(progress) => progress(
                u64::try_from(uploaded).unwrap_or(0),
                u64::try_from(total).unwrap_or(0),
            ),
            None => debug!(token = %id, "progress after resolution discarded"),
        }
    });
}

/// Status asynchronous auth failures classify to.
pub(crate) const AUTH_FAILURE: c_int = sys::ANYCHAT_ERROR_AUTH;
/// Status every other asynchronous failure classifies to.
pub(crate) const NETWORK_FAILURE: c_int = sys::ANYCHAT_ERROR_NETWORK;
