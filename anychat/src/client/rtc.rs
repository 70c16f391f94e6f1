#![allow(unsafe_code)]
//! One-to-one calls and multi-party meetings.

use std::ffi::{c_char, c_int, c_void};
use std::sync::Arc;

use anychat_sys as sys;

use crate::error::Result;
use crate::events::{CallStatusChanged, IncomingCall};
use crate::ffi::{c_count, c_str_ptr, optional_c_string, to_c_string};
use crate::handle::{HandleOwner, NativeHandle, RtcModule, SubHandle};
use crate::marshal::{CallList, MeetingList};
use crate::native::Native;
use crate::pending::{
    self, NETWORK_FAILURE, Pending, list_trampoline, result_trampoline, value_trampoline,
};
use crate::stream::Subscription;
use crate::types::{CallSession, CallStatusChange, CallType, MeetingRoom, Page};

/// Real-time communication API of one client.
#[derive(Debug, Clone)]
pub struct Rtc {
    inner: SubHandle<RtcModule>,
}

impl Rtc {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native RTC module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// Call `callee_id`.
    pub fn initiate_call(&self, callee_id: &str, call_type: CallType) -> Pending<CallSession> {
        pending::attempt(|| {
            let callee_id = to_c_string(callee_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.rtc_initiate_call(
                    raw,
                    callee_id.as_ptr(),
                    call_type as i32,
                    userdata,
                    Some(value_trampoline::<CallSession>),
                )
            }))
        })
    }

    /// Answer a call.
    pub fn join_call(&self, call_id: &str) -> Pending<CallSession> {
        self.by_id(call_id, |native, raw, call_id, userdata| unsafe {
            native.rtc_join_call(raw, call_id, userdata, Some(value_trampoline::<CallSession>))
        })
    }

    /// Decline a call.
    pub fn reject_call(&self, call_id: &str) -> Pending<()> {
        self.by_id(call_id, |native, raw, call_id, userdata| unsafe {
            native.rtc_reject_call(raw, call_id, userdata, Some(result_trampoline))
        })
    }

    /// Hang up.
    pub fn end_call(&self, call_id: &str) -> Pending<()> {
        self.by_id(call_id, |native, raw, call_id, userdata| unsafe {
            native.rtc_end_call(raw, call_id, userdata, Some(result_trampoline))
        })
    }

    /// Current details of a call.
    pub fn call_session(&self, call_id: &str) -> Pending<CallSession> {
        self.by_id(call_id, |native, raw, call_id, userdata| unsafe {
            native.rtc_get_call_session(
                raw,
                call_id,
                userdata,
                Some(value_trampoline::<CallSession>),
            )
        })
    }

    /// One page of the call history.
    pub fn call_logs(&self, page: u32, page_size: u32) -> Pending<Page<CallSession>> {
        pending::attempt(|| {
            let page = c_count("page", page)?;
            let page_size = c_count("page_size", page_size)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.rtc_get_call_logs(
                    raw,
                    page,
                    page_size,
                    userdata,
                    Some(list_trampoline::<CallList>),
                )
            }))
        })
    }

    /// Open a meeting room.
    pub fn create_meeting(
        &self,
        title: &str,
        password: Option<&str>,
        max_participants: u32,
    ) -> Pending<MeetingRoom> {
        pending::attempt(|| {
            let title = to_c_string(title)?;
            let password = optional_c_string(password)?;
            let max_participants = c_count("max_participants", max_participants)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.rtc_create_meeting(
                    raw,
                    title.as_ptr(),
                    c_str_ptr(&password),
                    max_participants,
                    userdata,
                    Some(value_trampoline::<MeetingRoom>),
                )
            }))
        })
    }

    /// Enter a meeting room.
    pub fn join_meeting(&self, room_id: &str, password: Option<&str>) -> Pending<MeetingRoom> {
        pending::attempt(|| {
            let room_id = to_c_string(room_id)?;
            let password = optional_c_string(password)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.rtc_join_meeting(
                    raw,
                    room_id.as_ptr(),
                    c_str_ptr(&password),
                    userdata,
                    Some(value_trampoline::<MeetingRoom>),
                )
            }))
        })
    }

    /// Close a meeting room.
    pub fn end_meeting(&self, room_id: &str) -> Pending<()> {
        self.by_id(room_id, |native, raw, room_id, userdata| unsafe {
            native.rtc_end_meeting(raw, room_id, userdata, Some(result_trampoline))
        })
    }

    /// Current details of a meeting room.
    pub fn meeting(&self, room_id: &str) -> Pending<MeetingRoom> {
        self.by_id(room_id, |native, raw, room_id, userdata| unsafe {
            native.rtc_get_meeting(raw, room_id, userdata, Some(value_trampoline::<MeetingRoom>))
        })
    }

    /// One page of active meeting rooms.
    pub fn list_meetings(&self, page: u32, page_size: u32) -> Pending<Page<MeetingRoom>> {
        pending::attempt(|| {
            let page = c_count("page", page)?;
            let page_size = c_count("page_size", page_size)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.rtc_list_meetings(
                    raw,
                    page,
                    page_size,
                    userdata,
                    Some(list_trampoline::<MeetingList>),
                )
            }))
        })
    }

    /// An id-only verb on a call or room.
    fn by_id<T: Send + 'static>(
        &self,
        id: &str,
        call: impl FnOnce(&dyn Native, *mut sys::AnyChatRtc_T, *const c_char, *mut c_void) -> c_int,
    ) -> Pending<T> {
        pending::attempt(|| {
            let id = to_c_string(id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| {
                call(native, raw, id.as_ptr(), userdata)
            }))
        })
    }

    /// Subscribe to incoming calls.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_incoming_calls(&self) -> Result<Subscription<CallSession>> {
        self.inner.subscribe::<IncomingCall>()
    }

    /// Push incoming calls to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_incoming_call_listener(
        &self,
        listener: impl Fn(CallSession) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner.set_listener::<IncomingCall>(Arc::new(listener))
    }

    /// Clear the incoming-call registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_incoming_call_listener(&self) -> Result<()> {
        self.inner.clear_listener::<IncomingCall>()
    }

    /// Subscribe to call status changes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn subscribe_call_status(&self) -> Result<Subscription<CallStatusChange>> {
        self.inner.subscribe::<CallStatusChanged>()
    }

    /// Push call status changes to `listener`, on the native thread.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn set_call_status_listener(
        &self,
        listener: impl Fn(CallStatusChange) + Send + Sync + 'static,
    ) -> Result<()> {
        self.inner.set_listener::<CallStatusChanged>(Arc::new(listener))
    }

    /// Clear the call-status registration.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn clear_call_status_listener(&self) -> Result<()> {
        self.inner.clear_listener::<CallStatusChanged>()
    }
}
