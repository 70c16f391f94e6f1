#![allow(unsafe_code)]
//! Authentication: login, registration and the session token.

use std::sync::Arc;

use anychat_sys as sys;

use crate::error::{self, Result};
use crate::events::AuthExpired;
use crate::ffi::{c_str_ptr, flag, optional_c_string, to_c_string};
use crate::handle::{AuthModule, HandleOwner, NativeHandle, SubHandle};
use crate::marshal::FromNative;
use crate::pending::{self, AUTH_FAILURE, Pending, result_trampoline, value_trampoline};
use crate::stream::Subscription;
use crate::types::{AuthToken, DeviceType};

/// Authentication API of one client.
#[derive(Debug, Clone)]
pub struct Auth {
    inner: SubHandle<AuthModule>,
}

impl Auth {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native auth module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// Log in with a phone number or e-mail address.
    pub fn login(&self, account: &str, password: &str, device: DeviceType) -> Pending<AuthToken> {
        pending::attempt(|| {
            let account = to_c_string(account)?;
            let password = to_c_string(password)?;
            let device = to_c_string(device.as_str())?;
            Ok(self.inner.invoke(AUTH_FAILURE, |native, raw, userdata| unsafe {
                native.auth_login(
                    raw,
                    account.as_ptr(),
                    password.as_ptr(),
                    device.as_ptr(),
                    userdata,
                    Some(value_trampoline::<AuthToken>),
                )
            }))
        })
    }

    /// Register a new account and log in with it.
    pub fn register(
        &self,
        account: &str,
        password: &str,
        verify_code: &str,
        device: DeviceType,
        nickname: Option<&str>,
    ) -> Pending<AuthToken> {
        pending::attempt(|| {
            let account = to_c_string(account)?;
            let password = to_c_string(password)?;
            let verify_code = to_c_string(verify_code)?;
            let device = to_c_string(device.as_str())?;
            let nickname = optional_c_string(nickname)?;
            Ok(self.inner.invoke(AUTH_FAILURE, |native, raw, userdata| unsafe {
                native.auth_register(
                    raw,
                    account.as_ptr(),
                    password.as_ptr(),
                    verify_code.as_ptr(),
                    device.as_ptr(),
                    c_str_ptr(&nickname),
                    userdata,
                    Some(value_trampoline::<AuthToken>),
                )
            }))
        })
    }

    /// End the session.
    pub fn logout(&self) -> Pending<()> {
        self.inner.invoke(AUTH_FAILURE, |native, raw, userdata| unsafe {
            native.auth_logout(raw, userdata, Some(result_trampoline))
        })
    }

    /// Exchange a refresh token for a new token pair.
    pub fn refresh_token(&self, refresh_token: &str) -> Pending<AuthToken> {
        pending::attempt(|| {
            let refresh_token = to_c_string(refresh_token)?;
            Ok(self.inner.invoke(AUTH_FAILURE, |native, raw, userdata| unsafe {
                native.auth_refresh_token(
                    raw,
                    refresh_token.as_ptr(),
                    userdata,
                    Some(value_trampoline::<AuthToken>),
                )
            }))
        })
    }

    /// Change the account password.
    pub fn change_password(&self, old_password: &str, new_password: &str) -> Pending<()> {
        pending::attempt(|| {
            let old_password = to_c_string(old_password)?;
            let new_password = to_c_string(new_password)?;
            Ok(self.inner.invoke(AUTH_FAILURE, |native, raw, userdata| unsafe {
                native.auth_change_password(
                    raw,
                    old_password.as_ptr(),
                    new_password.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Whether a session is active.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn is_logged_in(&self) -> Result<bool> {
        self.inner
            .query(|native, raw| Ok(flag(unsafe { native.auth_is_logged_in(raw) })))
    }

    /// The current token pair.
    ///
    /// # Errors
    ///
    /// [`Error::NotLoggedIn`](crate::Error::NotLoggedIn) without a session.
    pub fn current_token(&self) -> Result<AuthToken> {
        self.inner.query(|native, raw| {
            let mut token = sys::AnyChatAuthToken_C::default();
            let rc = unsafe { native.auth_get_current_token(raw, &mut token) };
            error::check(native, rc)?;
            unsafe { AuthToken::from_native(&token) }
        })
    }

    /// Subscribe to token expiry.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_expired(&self) -> Result<Subscription<()>> {
        self.inner.subscribe::<AuthExpired>()
    }

    /// Call `listener` on token expiry, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_expired_listener(&self, listener: impl Fn() + Send + Sync + 'static) -> Result<()> {
        self.inner
            .set_listener::<AuthExpired>(Arc::new(move |()| listener()))
    }

    /// Clear the token-expiry registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_expired_listener(&self) -> Result<()> {
        self.inner.clear_listener::<AuthExpired>()
    }
}
