#![allow(unsafe_code)]
//! The conversation list.

use std::sync::Arc;

use crate::error::Result;
use crate::events::ConversationUpdated;
use crate::ffi::{to_c_string, to_flag};
use crate::handle::{ConversationModule, HandleOwner, NativeHandle, SubHandle};
use crate::marshal::ConversationList;
use crate::pending::{self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline};
use crate::stream::Subscription;
use crate::types::Conversation;

/// Conversation list API of one client.
#[derive(Debug, Clone)]
pub struct Conversations {
    inner: SubHandle<ConversationModule>,
}

impl Conversations {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native conversation module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// All conversations.
    pub fn list(&self) -> Pending<Vec<Conversation>> {
        self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
            native.conv_get_list(raw, userdata, Some(list_trampoline::<ConversationList>))
        })
    }

    /// Clear a conversation's unread count.
    pub fn mark_read(&self, conversation_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.conv_mark_read(raw, conversation_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }

    /// Pin or unpin a conversation.
    pub fn set_pinned(&self, conversation_id: &str, pinned: bool) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.conv_set_pinned(
                    raw,
                    conversation_id.as_ptr(),
                    to_flag(pinned),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Mute or unmute a conversation.
    pub fn set_muted(&self, conversation_id: &str, muted: bool) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.conv_set_muted(
                    raw,
                    conversation_id.as_ptr(),
                    to_flag(muted),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Delete a conversation.
    pub fn delete(&self, conversation_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.conv_delete(raw, conversation_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }

    /// Subscribe to conversation changes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe(&self) -> Result<Subscription<Conversation>> {
        self.inner.subscribe::<ConversationUpdated>()
    }

    /// Push conversation changes to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_listener(
        &self,
        listener: impl Fn(Conversation) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner
            .set_listener::<ConversationUpdated>(Arc::new(listener))
    }

    /// Clear the conversation-change registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_listener(&self) -> Result<()> {
        self.inner.clear_listener::<ConversationUpdated>()
    }
}
