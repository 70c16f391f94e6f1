#![allow(unsafe_code)]
//! AnyChat client: the primary entry point for the SDK.

mod auth;
mod conversations;
mod files;
mod friends;
mod groups;
mod messages;
mod rtc;
mod users;

pub use auth::Auth;
pub use conversations::Conversations;
pub use files::Files;
pub use friends::Friends;
pub use groups::Groups;
pub use messages::Messages;
pub use rtc::Rtc;
pub use users::Users;

use std::ffi::c_int;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anychat_sys as sys;

use crate::error::{Error, Result};
use crate::events::ConnectionStateChanged;
use crate::ffi::{c_str_ptr, optional_c_string, to_c_string, to_flag};
use crate::handle::{HandleOwner, NativeHandle};
use crate::native::Native;
use crate::stream::Subscription;
use crate::types::ConnectionState;

/// Initialize the `tracing` logger. `RUST_LOG` wins over `level`
/// (default `info`).
///
/// Only the first call installs anything; later calls return its outcome.
///
/// # Errors
///
/// [`Error::InvalidState`] if the application already installed a global
/// subscriber.
pub fn init_logger(level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    static LOGGER_INIT: OnceLock<Result<()>> = OnceLock::new();
    LOGGER_INIT
        .get_or_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::builder().parse_lossy(level.unwrap_or("info")));
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::InvalidState(format!("global subscriber already set: {e}")))
        })
        .clone()
}

/// A native AnyChat client.
///
/// Cloning shares the same native client. The native client is destroyed by
/// [`destroy`](Self::destroy) or when the last clone is dropped, whichever
/// comes first; sub-module APIs and subscriptions only hold weak references
/// and fail with [`Error::InvalidState`] afterwards.
#[derive(Debug, Clone)]
pub struct Client {
    owner: Arc<HandleOwner>,
}

impl Client {
    /// Create a new [`ClientBuilder`].
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The native client handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.owner
            .with_client(|_, client| Ok(NativeHandle::from_ptr(client.as_ptr())))
    }

    /// Start connecting to the gateway. Progress is reported through the
    /// connection-state source.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn connect(&self) -> Result<()> {
        self.owner
            .with_client(|native, client| {
                unsafe { native.client_connect(client.as_ptr()) };
                Ok(())
            })
    }

    /// Disconnect from the gateway.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn disconnect(&self) -> Result<()> {
        self.owner
            .with_client(|native, client| {
                unsafe { native.client_disconnect(client.as_ptr()) };
                Ok(())
            })
    }

    /// The current connection state.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction, [`Error::InternalFault`]
    /// for a state this SDK does not know.
    pub fn connection_state(&self) -> Result<ConnectionState> {
        self.owner.with_client(|native, client| {
            let state = unsafe { native.client_get_connection_state(client.as_ptr()) };
            ConnectionState::from_ffi(state)
                .ok_or_else(|| Error::InternalFault(format!("unknown connection state {state}")))
        })
    }

    /// Subscribe to connection state transitions. Replaces any earlier
    /// connection-state registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn subscribe_connection_state(&self) -> Result<Subscription<ConnectionState>> {
        self.owner.subscribe::<ConnectionStateChanged>()
    }

    /// Push connection state transitions to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn set_connection_listener(
        &self,
        listener: impl Fn(ConnectionState) + Send + Sync + 'static,
    ) -> Result<()> {
        self.owner
            .set_listener::<ConnectionStateChanged>(Arc::new(listener))
    }

    /// Clear the connection-state registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`] after destruction.
    pub fn clear_connection_listener(&self) -> Result<()> {
        self.owner.clear_listener::<ConnectionStateChanged>()
    }

    /// Authentication API.
    #[must_use]
    pub fn auth(&self) -> Auth {
        Auth::new(&self.owner)
    }

    /// Messaging API.
    #[must_use]
    pub fn messages(&self) -> Messages {
        Messages::new(&self.owner)
    }

    /// Conversation list API.
    #[must_use]
    pub fn conversations(&self) -> Conversations {
        Conversations::new(&self.owner)
    }

    /// Friends API.
    #[must_use]
    pub fn friends(&self) -> Friends {
        Friends::new(&self.owner)
    }

    /// Groups API.
    #[must_use]
    pub fn groups(&self) -> Groups {
        Groups::new(&self.owner)
    }

    /// File transfer API.
    #[must_use]
    pub fn files(&self) -> Files {
        Files::new(&self.owner)
    }

    /// User profile and settings API.
    #[must_use]
    pub fn users(&self) -> Users {
        Users::new(&self.owner)
    }

    /// Calls and meetings API.
    #[must_use]
    pub fn rtc(&self) -> Rtc {
        Rtc::new(&self.owner)
    }

    /// Destroy the native client now.
    ///
    /// Clears every listener, fails every pending operation with
    /// [`Error::InvalidState`], then releases the native handle. Later calls
    /// do nothing.
    pub fn destroy(&self) {
        self.owner.destroy();
    }

    /// Whether the native client has been destroyed.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.owner.is_destroyed()
    }

    /// Operations and subscriptions still registered with the native core.
    #[must_use]
    pub fn outstanding_operations(&self) -> usize {
        self.owner.outstanding()
    }
}

/// Connection settings for a new client.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClientConfig {
    /// WebSocket gateway URL.
    pub gateway_url: String,
    /// HTTP API base URL.
    pub api_base_url: String,
    /// Stable identifier of this device.
    pub device_id: String,
    /// Local database path. `None` lets the native core choose.
    pub db_path: Option<String>,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// Reconnect attempts before giving up.
    pub max_reconnect_attempts: u32,
    /// Reconnect automatically after a dropped connection.
    pub auto_reconnect: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: String::new(),
            api_base_url: String::new(),
            device_id: String::new(),
            db_path: None,
            connect_timeout: Duration::from_secs(10),
            max_reconnect_attempts: 5,
            auto_reconnect: true,
        }
    }
}

impl ClientConfig {
    fn validate(&self) -> Result<()> {
        if self.gateway_url.is_empty() {
            return Err(Error::InvalidParam("gateway_url is required".into()));
        }
        if self.api_base_url.is_empty() {
            return Err(Error::InvalidParam("api_base_url is required".into()));
        }
        Ok(())
    }
}

/// Builder for [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the gateway URL (required).
    #[must_use]
    pub fn gateway_url(mut self, url: impl Into<String>) -> Self {
        self.config.gateway_url = url.into();
        self
    }

    /// Set the HTTP API base URL (required).
    #[must_use]
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    /// Set the device identifier.
    #[must_use]
    pub fn device_id(mut self, id: impl Into<String>) -> Self {
        self.config.device_id = id.into();
        self
    }

    /// Set the local database path.
    #[must_use]
    pub fn db_path(mut self, path: impl Into<String>) -> Self {
        self.config.db_path = Some(path.into());
        self
    }

    /// Set the connect timeout (default: 10 s).
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the reconnect attempt limit (default: 5).
    #[must_use]
    pub const fn max_reconnect_attempts(mut self, attempts: u32) -> Self {
        self.config.max_reconnect_attempts = attempts;
        self
    }

    /// Enable or disable automatic reconnection (default: enabled).
    #[must_use]
    pub const fn auto_reconnect(mut self, enabled: bool) -> Self {
        self.config.auto_reconnect = enabled;
        self
    }

    /// Create the client against the linked native library.
    ///
    /// # Errors
    ///
    /// See [`build_with`](Self::build_with).
    #[cfg(feature = "linked")]
    pub fn build(self) -> Result<Client> {
        self.build_with(Arc::new(crate::native::LinkedNative))
    }

    /// Create the client against `native`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParam`] for a missing URL, a string containing NUL or
    /// an out-of-range number; [`Error::Initialization`] if the native core
    /// returns no client.
    pub fn build_with(self, native: Arc<dyn Native>) -> Result<Client> {
        let config = &self.config;
        config.validate()?;
        let gateway = to_c_string(&config.gateway_url)?;
        let api_base = to_c_string(&config.api_base_url)?;
        let device = to_c_string(&config.device_id)?;
        let db_path = optional_c_string(config.db_path.as_deref())?;
        let connect_timeout_ms = c_int::try_from(config.connect_timeout.as_millis())
            .map_err(|_| Error::InvalidParam("connect_timeout is too large".into()))?;
        let max_reconnect_attempts = c_int::try_from(config.max_reconnect_attempts)
            .map_err(|_| Error::InvalidParam("max_reconnect_attempts is too large".into()))?;

        let raw = sys::AnyChatClientConfig_C {
            gateway_url: gateway.as_ptr(),
            api_base_url: api_base.as_ptr(),
            device_id: device.as_ptr(),
            db_path: c_str_ptr(&db_path),
            connect_timeout_ms,
            max_reconnect_attempts,
            auto_reconnect: to_flag(config.auto_reconnect),
        };
        let owner = HandleOwner::create(native, &raw)?;
        Ok(Client { owner })
    }
}
