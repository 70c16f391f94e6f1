#![allow(unsafe_code)]
//! Handle ownership: one native client handle, destroyed exactly once, and
//! the weak sub-module handles derived from it.
//!
//! Every native call runs under the owner's gate (a read lock over the
//! client pointer). Destruction takes the gate for writing and empties it,
//! so once [`HandleOwner::destroy`] has started no new call reaches the
//! native core. It then clears every listener, fails every outstanding
//! operation with [`Error::InvalidState`], and only then destroys the native
//! client.

use std::collections::HashMap;
use std::ffi::{c_int, c_void};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use anychat_sys as sys;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{Error, Result, last_error};
use crate::native::Native;
use crate::pending::{self, Pending, Progress};
use crate::stream::{
    Delivery, EventSource, Install, Listener, Registration, Sink, Subscription, retire,
};
use crate::token::{self, Entry, TokenId};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// A live native client pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClientPtr(NonNull<sys::AnyChatClient_T>);

// The native core accepts its handles from any thread.
unsafe impl Send for ClientPtr {}
unsafe impl Sync for ClientPtr {}

impl ClientPtr {
    pub(crate) const fn as_ptr(self) -> sys::AnyChatClientHandle {
        self.0.as_ptr()
    }
}

/// Opaque identity of a native object.
///
/// Equality is identity; a `NativeHandle` carries no behavior and is only
/// meaningful while the client it came from is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(usize);

impl NativeHandle {
    pub(crate) fn from_ptr<T>(ptr: *mut T) -> Self {
        Self(ptr.addr())
    }

    /// The address identifying the native object.
    #[must_use]
    pub const fn addr(self) -> usize {
        self.0
    }
}

/// Exclusive owner of one native client handle.
pub(crate) struct HandleOwner {
    id: u64,
    native: Arc<dyn Native>,
    gate: RwLock<Option<ClientPtr>>,
    sources: Mutex<HashMap<&'static str, (TokenId, Install)>>,
}

impl HandleOwner {
    /// Create the native client. A null handle is never owned and never destroyed.
    pub(crate) fn create(
        native: Arc<dyn Native>,
        config: &sys::AnyChatClientConfig_C,
    ) -> Result<Arc<Self>> {
        let raw = unsafe { native.client_create(config) };
        let Some(ptr) = NonNull::new(raw) else {
            let mut message = last_error(native.as_ref());
            if message.is_empty() {
                message = "native client creation returned null".into();
            }
            return Err(Error::Initialization(message));
        };
        let id = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
        debug!(owner = id, "native client created");
        Ok(Arc::new(Self {
            id,
            native,
            gate: RwLock::new(Some(ClientPtr(ptr))),
            sources: Mutex::new(HashMap::new()),
        }))
    }

    pub(crate) const fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.gate.read_recursive().is_none()
    }

    /// Number of correlation tokens (operations and subscriptions) still registered.
    pub(crate) fn outstanding(&self) -> usize {
        token::outstanding(self.id)
    }

    /// Run `f` against the live client, holding the gate open for its duration.
    pub(crate) fn with_client<R>(
        &self,
        f: impl FnOnce(&Arc<dyn Native>, ClientPtr) -> Result<R>,
    ) -> Result<R> {
        let gate = self.gate.read_recursive();
        let client = (*gate).ok_or_else(Error::destroyed)?;
        f(&self.native, client)
    }

    /// Register a queue sink for `S` and wrap it in a [`Subscription`].
    pub(crate) fn subscribe<S: EventSource>(self: &Arc<Self>) -> Result<Subscription<S::Event>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let token = self.register::<S>(Delivery::Queue(tx))?;
        Ok(Subscription::new(
            rx,
            Registration {
                owner: Arc::downgrade(self),
                source: S::NAME,
                token,
            },
        ))
    }

    /// Register a listener sink for `S`.
    pub(crate) fn set_listener<S: EventSource>(&self, listener: Listener<S::Event>) -> Result<()> {
        self.register::<S>(Delivery::Listener(listener)).map(drop)
    }

    /// Clear whatever registration `S` currently has.
    pub(crate) fn clear_listener<S: EventSource>(&self) -> Result<()> {
        let mut removed = None;
        let result = self.with_client(|native, client| {
            let mut sources = self.sources.lock();
            let Some((previous, clear)) = sources.remove(S::NAME) else {
                return Ok(());
            };
            removed = Some(previous);
            unsafe { clear(native.as_ref(), client, None) }
        });
        if let Some(token) = removed {
            retire(token);
            debug!(owner = self.id, source = S::NAME, %token, "listener cleared");
        }
        result
    }

    /// Clear-then-set: drop any earlier registration of `S`, then install a
    /// fresh sink under a fresh token.
    fn register<S: EventSource>(&self, delivery: Delivery<S::Event>) -> Result<TokenId> {
        let mut retired = Vec::new();
        let result = self.with_client(|native, client| {
            let native = native.as_ref();
            let mut sources = self.sources.lock();
            if let Some((previous, clear)) = sources.remove(S::NAME) {
                retired.push(previous);
                unsafe { clear(native, client, None) }?;
                debug!(owner = self.id, source = S::NAME, token = %previous, "previous registration cleared");
            }
            let token = token::insert(
                self.id,
                Entry::Subscription(Arc::new(Sink::new(S::NAME, delivery))),
            )?;
            if let Err(e) = unsafe { S::install(native, client, Some(token.into_userdata())) } {
                retired.push(token);
                return Err(e);
            }
            let clear: Install = S::install;
            sources.insert(S::NAME, (token, clear));
            debug!(owner = self.id, source = S::NAME, %token, "subscription installed");
            Ok(token)
        });
        // Closing waits for in-flight deliveries, so it runs with no lock held.
        for token in retired {
            retire(token);
        }
        result
    }

    /// Deregister `token` from `source`, clearing the native listener only
    /// if it is still the current registration.
    pub(crate) fn release(&self, source: &'static str, token: TokenId) {
        {
            let gate = self.gate.read_recursive();
            let mut sources = self.sources.lock();
            if sources.get(source).is_some_and(|(current, _)| *current == token) {
                if let (Some((_, clear)), Some(client)) = (sources.remove(source), *gate) {
                    if let Err(e) = unsafe { clear(self.native.as_ref(), client, None) } {
                        warn!(owner = self.id, source, error = %e, "failed to clear native listener");
                    }
                }
                debug!(owner = self.id, source, %token, "subscription cancelled");
            }
        }
        retire(token);
    }

    /// Tear down: block new calls, clear listeners, fail outstanding
    /// operations, then destroy the native client. Only the first call has
    /// any effect.
    pub(crate) fn destroy(&self) {
        let Some(client) = self.gate.write().take() else {
            return;
        };
        let registrations: Vec<_> = self.sources.lock().drain().collect();
        for (source, (token, clear)) in registrations {
            if let Err(e) = unsafe { clear(self.native.as_ref(), client, None) } {
                warn!(owner = self.id, source, error = %e, "failed to clear native listener");
            }
            retire(token);
        }
        let drained = token::drain_owner(self.id);
        let outstanding = drained.len();
        for entry in drained {
            match entry {
                Entry::Operation(op) => op.fail(Error::InvalidState(
                    "client destroyed while the operation was pending".into(),
                )),
                Entry::Subscription(sink) => {
                    warn!(owner = self.id, source = sink.source(), "orphaned subscription closed");
                    sink.close();
                }
            }
        }
        unsafe { self.native.client_destroy(client.as_ptr()) };
        debug!(owner = self.id, outstanding, "native client destroyed");
    }
}

impl Drop for HandleOwner {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl fmt::Debug for HandleOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandleOwner")
            .field("id", &self.id)
            .field("destroyed", &self.is_destroyed())
            .finish_non_exhaustive()
    }
}

/// A native sub-module reachable from the client handle.
pub(crate) trait SubModule: 'static {
    type Raw;
    const NAME: &'static str;

    /// # Safety
    ///
    /// `client` must be live.
    unsafe fn get(native: &dyn Native, client: ClientPtr) -> *mut Self::Raw;
}

/// Resolve sub-module `M` of a live client.
///
/// # Safety
///
/// `client` must be live.
pub(crate) unsafe fn module<M: SubModule>(
    native: &dyn Native,
    client: ClientPtr,
) -> Result<*mut M::Raw> {
    let raw = unsafe { M::get(native, client) };
    if raw.is_null() {
        return Err(Error::InvalidState(format!("native {} module unavailable", M::NAME)));
    }
    Ok(raw)
}

macro_rules! sub_module {
    ($marker:ident, $raw:ty, $name:literal, $get:ident) => {
        pub(crate) enum $marker {}

        impl SubModule for $marker {
            type Raw = $raw;
            const NAME: &'static str = $name;

            unsafe fn get(native: &dyn Native, client: ClientPtr) -> *mut $raw {
                unsafe { native.$get(client.as_ptr()) }
            }
        }
    };
}

sub_module!(AuthModule, sys::AnyChatAuthManager_T, "auth", client_get_auth);
sub_module!(MessageModule, sys::AnyChatMessage_T, "message", client_get_message);
sub_module!(ConversationModule, sys::AnyChatConversation_T, "conversation", client_get_conversation);
sub_module!(FriendModule, sys::AnyChatFriend_T, "friend", client_get_friend);
sub_module!(GroupModule, sys::AnyChatGroup_T, "group", client_get_group);
sub_module!(FileModule, sys::AnyChatFile_T, "file", client_get_file);
sub_module!(UserModule, sys::AnyChatUser_T, "user", client_get_user);
sub_module!(RtcModule, sys::AnyChatRtc_T, "rtc", client_get_rtc);

/// Weak back-reference from a sub-module API to its owner.
pub(crate) struct SubHandle<M> {
    owner: Weak<HandleOwner>,
    owner_id: u64,
    _module: PhantomData<fn() -> M>,
}

impl<M: SubModule> SubHandle<M> {
    pub(crate) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            owner: Arc::downgrade(owner),
            owner_id: owner.id(),
            _module: PhantomData,
        }
    }

    pub(crate) fn owner(&self) -> Result<Arc<HandleOwner>> {
        self.owner.upgrade().ok_or_else(Error::destroyed)
    }

    /// The native sub-module handle, queried from the still-live client.
    pub(crate) fn handle(&self) -> Result<NativeHandle> {
        self.query(|_, raw| Ok(NativeHandle::from_ptr(raw)))
    }

    /// Run a synchronous query against the sub-module.
    pub(crate) fn query<R>(
        &self,
        f: impl FnOnce(&dyn Native, *mut M::Raw) -> Result<R>,
    ) -> Result<R> {
        self.owner()?.with_client(|native, client| {
            let raw = unsafe { module::<M>(native.as_ref(), client) }?;
            f(native.as_ref(), raw)
        })
    }

    /// Issue a one-shot call. `failure` is the status async failures classify to.
    pub(crate) fn invoke<T: Send + 'static>(
        &self,
        failure: c_int,
        call: impl FnOnce(&dyn Native, *mut M::Raw, *mut c_void) -> c_int,
    ) -> Pending<T> {
        self.invoke_with_progress(failure, None, call)
    }

    pub(crate) fn invoke_with_progress<T: Send + 'static>(
        &self,
        failure: c_int,
        progress: Option<Progress>,
        call: impl FnOnce(&dyn Native, *mut M::Raw, *mut c_void) -> c_int,
    ) -> Pending<T> {
        let owner = match self.owner() {
            Ok(owner) => owner,
            Err(e) => return Pending::failed(e),
        };
        owner
            .with_client(|native, client| {
                let raw = unsafe { module::<M>(native.as_ref(), client) }?;
                Ok(pending::invoke(owner.id(), native, failure, progress, |userdata| {
                    call(native.as_ref(), raw, userdata)
                }))
            })
            .unwrap_or_else(Pending::failed)
    }

    pub(crate) fn subscribe<S: EventSource>(&self) -> Result<Subscription<S::Event>> {
        self.owner()?.subscribe::<S>()
    }

    pub(crate) fn set_listener<S: EventSource>(&self, listener: Listener<S::Event>) -> Result<()> {
        self.owner()?.set_listener::<S>(listener)
    }

    pub(crate) fn clear_listener<S: EventSource>(&self) -> Result<()> {
        self.owner()?.clear_listener::<S>()
    }
}

impl<M> Clone for SubHandle<M> {
    fn clone(&self) -> Self {
        Self {
            owner: Weak::clone(&self.owner),
            owner_id: self.owner_id,
            _module: PhantomData,
        }
    }
}

impl<M: SubModule> fmt::Debug for SubHandle<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubHandle")
            .field("module", &M::NAME)
            .field("owner", &self.owner_id)
            .finish()
    }
}
