#![allow(unsafe_code)]
//! Native push sources and their trampolines.
//!
//! Each source knows its setter, its payload shape and how to convert it.
//! The trampolines only look up the sink behind the userdata token; the
//! subscription bridge does the rest.

use std::ffi::{c_char, c_int, c_void};
use std::ptr;

use anychat_sys as sys;

use crate::error::{Error, Result};
use crate::ffi::borrowed_str;
use crate::handle::{
    AuthModule, ClientPtr, ConversationModule, FriendModule, GroupModule, MessageModule,
    RtcModule, module,
};
use crate::marshal::FromNative;
use crate::native::Native;
use crate::stream::{EventSource, deliver};
use crate::types::{
    CallSession, CallStatus, CallStatusChange, ConnectionState, Conversation, FriendRequest,
    Group, GroupInvitation, Message,
};

/// Convert a borrowed event payload.
unsafe fn payload<V: FromNative>(raw: *const V::Raw) -> Result<V> {
    match unsafe { raw.as_ref() } {
        Some(raw) => unsafe { V::from_native(raw) },
        None => Err(Error::InternalFault("event delivered without a payload".into())),
    }
}

fn required(value: Option<String>, what: &str) -> Result<String> {
    value.ok_or_else(|| Error::InternalFault(format!("event delivered without {what}")))
}

/// Client connection state transitions.
pub(crate) enum ConnectionStateChanged {}

impl ConnectionStateChanged {
    unsafe extern "C" fn trampoline(userdata: *mut c_void, state: c_int) {
        deliver::<Self>(userdata, || {
            ConnectionState::from_ffi(state)
                .ok_or_else(|| Error::InternalFault(format!("unknown connection state {state}")))
        });
    }
}

impl EventSource for ConnectionStateChanged {
    type Event = ConnectionState;
    const NAME: &'static str = "connection_state";

    unsafe fn install(
        native: &dyn Native,
        client: ClientPtr,
        userdata: Option<*mut c_void>,
    ) -> Result<()> {
        match userdata {
            Some(userdata) => unsafe {
                native.client_set_connection_callback(client.as_ptr(), userdata, Some(Self::trampoline));
            },
            None => unsafe {
                native.client_set_connection_callback(client.as_ptr(), ptr::null_mut(), None);
            },
        }
        Ok(())
    }
}

macro_rules! event_source {
    (
        $(#[$meta:meta])*
        $marker:ident($name:literal) on $module:ty => $event:ty,
        via $setter:ident,
        |$($arg:ident: $ty:ty),*| $convert:block
    ) => {
        $(#[$meta])*
        pub(crate) enum $marker {}

        impl $marker {
            unsafe extern "C" fn trampoline(userdata: *mut c_void, $($arg: $ty),*) {
                deliver::<Self>(userdata, || $convert);
            }
        }

        impl EventSource for $marker {
            type Event = $event;
            const NAME: &'static str = $name;

            unsafe fn install(
                native: &dyn Native,
                client: ClientPtr,
                userdata: Option<*mut c_void>,
            ) -> Result<()> {
                let raw = unsafe { module::<$module>(native, client) }?;
                match userdata {
                    Some(userdata) => unsafe { native.$setter(raw, userdata, Some(Self::trampoline)) },
                    None => unsafe { native.$setter(raw, ptr::null_mut(), None) },
                }
                Ok(())
            }
        }
    };
}

event_source! {
    /// The session token expired and could not be refreshed.
    AuthExpired("auth_expired") on AuthModule => (),
    via auth_set_on_expired,
    | | { Ok(()) }
}

event_source! {
    /// A message arrived.
    MessageReceived("message_received") on MessageModule => Message,
    via message_set_received_callback,
    |message: *const sys::AnyChatMessage_C| { unsafe { payload(message) } }
}

event_source! {
    /// A conversation changed.
    ConversationUpdated("conversation_updated") on ConversationModule => Conversation,
    via conv_set_updated_callback,
    |conversation: *const sys::AnyChatConversation_C| { unsafe { payload(conversation) } }
}

event_source! {
    /// A friend request arrived.
    FriendRequestReceived("friend_request") on FriendModule => FriendRequest,
    via friend_set_request_callback,
    |request: *const sys::AnyChatFriendRequest_C| { unsafe { payload(request) } }
}

event_source! {
    /// The friend list changed; fetch it again to see how.
    FriendListChanged("friend_list_changed") on FriendModule => (),
    via friend_set_list_changed_callback,
    | | { Ok(()) }
}

event_source! {
    /// This user was invited into a group.
    GroupInvited("group_invited") on GroupModule => GroupInvitation,
    via group_set_invited_callback,
    |group: *const sys::AnyChatGroup_C, inviter_id: *const c_char| {
        Ok(GroupInvitation {
            group: unsafe { payload::<Group>(group) }?,
            inviter_id: required(unsafe { borrowed_str(inviter_id) }?, "an inviter")?,
        })
    }
}

event_source! {
    /// A group's details changed.
    GroupUpdated("group_updated") on GroupModule => Group,
    via group_set_updated_callback,
    |group: *const sys::AnyChatGroup_C| { unsafe { payload(group) } }
}

event_source! {
    /// Someone is calling.
    IncomingCall("incoming_call") on RtcModule => CallSession,
    via rtc_set_incoming_call_callback,
    |session: *const sys::AnyChatCallSession_C| { unsafe { payload(session) } }
}

event_source! {
    /// A call moved to a new status.
    CallStatusChanged("call_status_changed") on RtcModule => CallStatusChange,
    via rtc_set_call_status_changed_callback,
    |call_id: *const c_char, status: c_int| {
        Ok(CallStatusChange {
            call_id: required(unsafe { borrowed_str(call_id) }?, "a call id")?,
            status: CallStatus::from_ffi(status)
                .ok_or_else(|| Error::InternalFault(format!("unknown call status {status}")))?,
        })
    }
}
