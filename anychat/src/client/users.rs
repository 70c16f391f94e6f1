#![allow(unsafe_code)]
//! Own profile and settings, user search and lookup.

use std::sync::Arc;

use crate::error::Result;
use crate::ffi::{c_count, to_c_string};
use crate::handle::{HandleOwner, NativeHandle, SubHandle, UserModule};
use crate::marshal::{IntoNative, UserList};
use crate::pending::{
    self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline, value_trampoline,
};
use crate::types::{DeviceType, Page, UserInfo, UserProfile, UserSettings};

/// User API of one client.
#[derive(Debug, Clone)]
pub struct Users {
    inner: SubHandle<UserModule>,
}

impl Users {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native user module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// This user's profile.
    pub fn profile(&self) -> Pending<UserProfile> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.user_get_profile(raw, userdata, Some(value_trampoline::<UserProfile>))
        })
    }

    /// Replace this user's profile. Resolves to the stored profile.
    ///
    /// Text fields longer than the native buffers are truncated.
    pub fn update_profile(&self, profile: &UserProfile) -> Pending<UserProfile> {
        pending::attempt(|| {
            let profile = profile.to_native()?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.user_update_profile(
                    raw,
                    &profile,
                    userdata,
                    Some(value_trampoline::<UserProfile>),
                )
            }))
        })
    }

    /// This user's settings.
    pub fn settings(&self) -> Pending<UserSettings> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.user_get_settings(raw, userdata, Some(value_trampoline::<UserSettings>))
        })
    }

    /// Replace this user's settings. Resolves to the stored settings.
    pub fn update_settings(&self, settings: &UserSettings) -> Pending<UserSettings> {
        pending::attempt(|| {
            let settings = settings.to_native()?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.user_update_settings(
                    raw,
                    &settings,
                    userdata,
                    Some(value_trampoline::<UserSettings>),
                )
            }))
        })
    }

    /// Register a push notification token for `platform`.
    pub fn update_push_token(&self, push_token: &str, platform: DeviceType) -> Pending<()> {
        pending::attempt(|| {
            let push_token = to_c_string(push_token)?;
            let platform = to_c_string(platform.as_str())?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.user_update_push_token(
                    raw,
                    push_token.as_ptr(),
                    platform.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Search users by keyword.
    pub fn search(&self, keyword: &str, page: u32, page_size: u32) -> Pending<Page<UserInfo>> {
        pending::attempt(|| {
            let keyword = to_c_string(keyword)?;
            let page = c_count("page", page)?;
            let page_size = c_count("page_size", page_size)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.user_search(
                    raw,
                    keyword.as_ptr(),
                    page,
                    page_size,
                    userdata,
                    Some(list_trampoline::<UserList>),
                )
            }))
        })
    }

    /// Public details of one user.
    pub fn info(&self, user_id: &str) -> Pending<UserInfo> {
        pending::attempt(|| {
            let user_id = to_c_string(user_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.user_get_info(
                    raw,
                    user_id.as_ptr(),
                    userdata,
                    Some(value_trampoline::<UserInfo>),
                )
            }))
        })
    }
}
