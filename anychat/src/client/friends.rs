#![allow(unsafe_code)]
//! Friends, friend requests and the blacklist.

use std::sync::Arc;

use crate::error::Result;
use crate::events::{FriendListChanged, FriendRequestReceived};
use crate::ffi::{to_c_string, to_flag};
use crate::handle::{FriendModule, HandleOwner, NativeHandle, SubHandle};
use crate::marshal::{FriendList, FriendRequestList};
use crate::pending::{self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline};
use crate::stream::Subscription;
use crate::types::{Friend, FriendRequest};

/// Friends API of one client.
#[derive(Debug, Clone)]
pub struct Friends {
    inner: SubHandle<FriendModule>,
}

impl Friends {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native friend module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// All friends.
    pub fn list(&self) -> Pending<Vec<Friend>> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.friend_get_list(raw, userdata, Some(list_trampoline::<FriendList>))
        })
    }

    /// Ask `user_id` to become a friend.
    pub fn send_request(&self, user_id: &str, message: &str) -> Pending<()> {
        pending::attempt(|| {
            let user_id = to_c_string(user_id)?;
            let message = to_c_string(message)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.friend_send_request(
                    raw,
                    user_id.as_ptr(),
                    message.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Accept or reject a received request.
    pub fn respond(&self, request_id: i64, accept: bool) -> Pending<()> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.friend_handle_request(
                raw,
                request_id,
                to_flag(accept),
                userdata,
                Some(result_trampoline),
            )
        })
    }

    /// Requests waiting for an answer.
    pub fn pending_requests(&self) -> Pending<Vec<FriendRequest>> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.friend_get_pending_requests(
                raw,
                userdata,
                Some(list_trampoline::<FriendRequestList>),
            )
        })
    }

    /// Remove a friend.
    pub fn delete(&self, friend_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let friend_id = to_c_string(friend_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.friend_delete(raw, friend_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }

    /// Set the private remark shown for a friend.
    pub fn update_remark(&self, friend_id: &str, remark: &str) -> Pending<()> {
        pending::attempt(|| {
            let friend_id = to_c_string(friend_id)?;
            let remark = to_c_string(remark)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.friend_update_remark(
                    raw,
                    friend_id.as_ptr(),
                    remark.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Block a user.
    pub fn add_to_blacklist(&self, user_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let user_id = to_c_string(user_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.friend_add_to_blacklist(raw, user_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }

    /// Unblock a user.
    pub fn remove_from_blacklist(&self, user_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let user_id = to_c_string(user_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.friend_remove_from_blacklist(
                    raw,
                    user_id.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Subscribe to incoming friend requests.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_requests(&self) -> Result<Subscription<FriendRequest>> {
        self.inner.subscribe::<FriendRequestReceived>()
    }

    /// Push incoming friend requests to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_request_listener(
        &self,
        listener: impl Fn(FriendRequest) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner
            .set_listener::<FriendRequestReceived>(Arc::new(listener))
    }

    /// Clear the friend-request registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_request_listener(&self) -> Result<()> {
        self.inner.clear_listener::<FriendRequestReceived>()
    }

    /// Subscribe to friend list changes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_list_changed(&self) -> Result<Subscription<()>> {
        self.inner.subscribe::<FriendListChanged>()
    }

    /// Call `listener` when the friend list changes, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_list_changed_listener(
        &self,
        listener: impl Fn() + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner
            .set_listener::<FriendListChanged>(Arc::new(move |()| listener()))
    }

    /// Clear the friend-list registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_list_changed_listener(&self) -> Result<()> {
        self.inner.clear_listener::<FriendListChanged>()
    }
}
