#![allow(unsafe_code)]
//! Sending and reading messages.

use std::sync::Arc;

use crate::error::Result;
use crate::events::MessageReceived;
use crate::ffi::{c_count, to_c_string};
use crate::handle::{HandleOwner, MessageModule, NativeHandle, SubHandle};
use crate::marshal::MessageList;
use crate::pending::{self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline};
use crate::stream::Subscription;
use crate::types::Message;

/// Messaging API of one client.
#[derive(Debug, Clone)]
pub struct Messages {
    inner: SubHandle<MessageModule>,
}

impl Messages {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native message module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// Send a text message to a conversation.
    pub fn send_text(&self, conversation_id: &str, content: &str) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            let content = to_c_string(content)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.message_send_text(
                    raw,
                    conversation_id.as_ptr(),
                    content.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Up to `limit` messages older than `before` (newest when `None`).
    pub fn history(
        &self,
        conversation_id: &str,
        before: Option<i64>,
        limit: u32,
    ) -> Pending<Vec<Message>> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            let limit = c_count("limit", limit)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.message_get_history(
                    raw,
                    conversation_id.as_ptr(),
                    before.unwrap_or(0),
                    limit,
                    userdata,
                    Some(list_trampoline::<MessageList>),
                )
            }))
        })
    }

    /// Mark a message and everything before it as read.
    pub fn mark_read(&self, conversation_id: &str, message_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let conversation_id = to_c_string(conversation_id)?;
            let message_id = to_c_string(message_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.message_mark_read(
                    raw,
                    conversation_id.as_ptr(),
                    message_id.as_ptr(),
                    userdata,
                    Some(result_trampoline),
                )
            }))
        })
    }

    /// Subscribe to incoming messages.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe(&self) -> Result<Subscription<Message>> {
        self.inner.subscribe::<MessageReceived>()
    }

    /// Push incoming messages to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_listener(&self, listener: impl Fn(Message) + Send + Sync + 'static) -> Result<()> {
        self.inner.set_listener::<MessageReceived>(Arc::new(listener))
    }

    /// Clear the incoming-message registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_listener(&self) -> Result<()> {
        self.inner.clear_listener::<MessageReceived>()
    }
}
