#![allow(unsafe_code)]
//! Groups and group membership.

use std::sync::Arc;

use crate::error::Result;
use crate::events::{GroupInvited, GroupUpdated};
use crate::ffi::{c_count, c_len, c_str_ptr, optional_c_string, to_c_string, to_c_string_array};
use crate::handle::{GroupModule, HandleOwner, NativeHandle, SubHandle};
use crate::marshal::{GroupList, GroupMemberList};
use crate::pending::{self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline};
use crate::stream::Subscription;
use crate::types::{Group, GroupInvitation, GroupMember};

/// Groups API of one client.
#[derive(Debug, Clone)]
pub struct Groups {
    inner: SubHandle<GroupModule>,
}

impl Groups {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native group module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// Groups this user belongs to.
    pub fn list(&self) -> Pending<Vec<Group>> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.group_get_list(raw, userdata, Some(list_trampoline::<GroupList>))
        })
    }

    /// Create a group with the given initial members.
    pub fn create<S: AsRef<str>>(&self, name: &str, member_ids: &[S]) -> Pending<()> {
        pending::attempt(|| {
            let name = to_c_string(name)?;
            let (_owned, members) = to_c_string_array(member_ids)?;
            let count = c_len(members.len())?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_create(
                    raw,
                    name.as_ptr(),
                    members.as_ptr(),
                    count,
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Ask to join a group.
    pub fn join(&self, group_id: &str, message: &str) -> Pending<()> {
        pending::attempt(|| {
            let group_id = to_c_string(group_id)?;
            let message = to_c_string(message)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_join(
                    raw,
                    group_id.as_ptr(),
                    message.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Invite users into a group.
    pub fn invite<S: AsRef<str>>(&self, group_id: &str, user_ids: &[S]) -> Pending<()> {
        pending::attempt(|| {
            let group_id = to_c_string(group_id)?;
            let (_owned, users) = to_c_string_array(user_ids)?;
            let count = c_len(users.len())?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_invite(
                    raw,
                    group_id.as_ptr(),
                    users.as_ptr(),
                    count,
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Leave a group.
    pub fn quit(&self, group_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let group_id = to_c_string(group_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_quit(raw, group_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }

    /// Rename a group or change its avatar. `None` leaves a field unchanged.
    pub fn update(
        &self,
        group_id: &str,
        name: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Pending<()> {
        pending::attempt(|| {
            let group_id = to_c_string(group_id)?;
            let name = optional_c_string(name)?;
            let avatar_url = optional_c_string(avatar_url)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_update(
                    raw,
                    group_id.as_ptr(),
                    c_str_ptr(&name),
                    c_str_ptr(&avatar_url),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// One page of a group's members.
    pub fn members(&self, group_id: &str, page: u32, page_size: u32) -> Pending<Vec<GroupMember>> {
        pending::attempt(|| {
            let group_id = to_c_string(group_id)?;
            let page = c_count("page", page)?;
            let page_size = c_count("page_size", page_size)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.group_get_members(
                    raw,
                    group_id.as_ptr(),
                    page,
                    page_size,
                    userdata,
                    Some(list_trampoline::<GroupMemberList>),
                )
            }))
        })
    }

    /// Subscribe to group invitations.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_invitations(&self) -> Result<Subscription<GroupInvitation>> {
        self.inner.subscribe::<GroupInvited>()
    }

    /// Push group invitations to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_invitation_listener(
        &self,
        listener: impl Fn(GroupInvitation) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner.set_listener::<GroupInvited>(Arc::new(listener))
    }

    /// Clear the invitation registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_invitation_listener(&self) -> Result<()> {
        self.inner.clear_listener::<GroupInvited>()
    }

    /// Subscribe to group detail changes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_updates(&self) -> Result<Subscription<Group>> {
        self.inner.subscribe::<GroupUpdated>()
    }

    /// Push group detail changes to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_update_listener(
        &self,
        listener: impl Fn(Group) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner.set_listener::<GroupUpdated>(Arc::new(listener))
    }

    /// Clear the group-update registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_update_listener(&self) -> Result<()> {
        self.inner.clear_listener::<GroupUpdated>()
    }
}
