#![allow(unsafe_code)]
//! Marshaling between native `#[repr(C)]` payloads and host value types.
//!
//! Native list payloads are wrapped in a [`ListGuard`] the moment they are
//! received: the guard releases them through the matching `free_*_list`
//! entry point on every exit path, including a conversion error.

use std::ffi::c_int;
use std::slice;

use anychat_sys as sys;

use crate::error::{Error, Result};
use crate::ffi::{borrowed_str, flag, read_fixed, read_fixed_opt, to_flag, write_fixed};
use crate::native::Native;
use crate::types::*;

/// A host value read from a native struct.
pub(crate) trait FromNative: Sized + Send + 'static {
    type Raw;

    /// # Safety
    ///
    /// Pointer fields of `raw` must be null or valid for reads.
    unsafe fn from_native(raw: &Self::Raw) -> Result<Self>;
}

/// A host value written into a native struct.
pub(crate) trait IntoNative {
    type Raw;

    fn to_native(&self) -> Result<Self::Raw>;
}

fn enumerated<T>(value: c_int, what: &str, from: fn(i32) -> Option<T>) -> Result<T> {
    from(value).ok_or_else(|| Error::InternalFault(format!("unknown {what} {value}")))
}

impl FromNative for AuthToken {
    type Raw = sys::AnyChatAuthToken_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            access_token: read_fixed(&raw.access_token)?,
            refresh_token: read_fixed(&raw.refresh_token)?,
            expires_at_ms: raw.expires_at_ms,
        })
    }
}

impl FromNative for UserInfo {
    type Raw = sys::AnyChatUserInfo_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            user_id: read_fixed(&raw.user_id)?,
            username: read_fixed(&raw.username)?,
            avatar_url: read_fixed(&raw.avatar_url)?,
        })
    }
}

impl FromNative for Message {
    type Raw = sys::AnyChatMessage_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            message_id: read_fixed(&raw.message_id)?,
            local_id: read_fixed(&raw.local_id)?,
            conversation_id: read_fixed(&raw.conv_id)?,
            sender_id: read_fixed(&raw.sender_id)?,
            content_type: read_fixed(&raw.content_type)?,
            message_type: enumerated(raw.type_, "message type", MessageType::from_ffi)?,
            content: unsafe { borrowed_str(raw.content) }?.unwrap_or_default(),
            seq: raw.seq,
            reply_to: read_fixed_opt(&raw.reply_to)?,
            timestamp_ms: raw.timestamp_ms,
            status: enumerated(raw.status, "message status", MessageStatus::from_ffi)?,
            send_state: enumerated(raw.send_state, "send state", SendState::from_ffi)?,
            is_read: flag(raw.is_read),
        })
    }
}

impl FromNative for Conversation {
    type Raw = sys::AnyChatConversation_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            conversation_id: read_fixed(&raw.conv_id)?,
            conversation_type: enumerated(
                raw.conv_type,
                "conversation type",
                ConversationType::from_ffi,
            )?,
            target_id: read_fixed(&raw.target_id)?,
            last_message_id: read_fixed(&raw.last_msg_id)?,
            last_message_text: read_fixed(&raw.last_msg_text)?,
            last_message_time_ms: raw.last_msg_time_ms,
            unread_count: raw.unread_count,
            is_pinned: flag(raw.is_pinned),
            is_muted: flag(raw.is_muted),
            updated_at_ms: raw.updated_at_ms,
        })
    }
}

impl FromNative for Friend {
    type Raw = sys::AnyChatFriend_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            user_id: read_fixed(&raw.user_id)?,
            remark: read_fixed(&raw.remark)?,
            updated_at_ms: raw.updated_at_ms,
            is_deleted: flag(raw.is_deleted),
            user_info: unsafe { UserInfo::from_native(&raw.user_info) }?,
        })
    }
}

impl FromNative for FriendRequest {
    type Raw = sys::AnyChatFriendRequest_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        let status = read_fixed(&raw.status)?;
        Ok(Self {
            request_id: raw.request_id,
            from_user_id: read_fixed(&raw.from_user_id)?,
            to_user_id: read_fixed(&raw.to_user_id)?,
            message: read_fixed(&raw.message)?,
            status: FriendRequestStatus::from_native_str(&status).ok_or_else(|| {
                Error::InternalFault(format!("unknown friend request status {status:?}"))
            })?,
            created_at_ms: raw.created_at_ms,
            from_user_info: unsafe { UserInfo::from_native(&raw.from_user_info) }?,
        })
    }
}

impl FromNative for Group {
    type Raw = sys::AnyChatGroup_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            group_id: read_fixed(&raw.group_id)?,
            name: read_fixed(&raw.name)?,
            avatar_url: read_fixed(&raw.avatar_url)?,
            owner_id: read_fixed(&raw.owner_id)?,
            member_count: raw.member_count,
            my_role: enumerated(raw.my_role, "group role", GroupRole::from_ffi)?,
            join_verify: flag(raw.join_verify),
            updated_at_ms: raw.updated_at_ms,
        })
    }
}

impl FromNative for GroupMember {
    type Raw = sys::AnyChatGroupMember_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            user_id: read_fixed(&raw.user_id)?,
            group_nickname: read_fixed(&raw.group_nickname)?,
            role: enumerated(raw.role, "group role", GroupRole::from_ffi)?,
            is_muted: flag(raw.is_muted),
            joined_at_ms: raw.joined_at_ms,
            user_info: unsafe { UserInfo::from_native(&raw.user_info) }?,
        })
    }
}

impl FromNative for FileInfo {
    type Raw = sys::AnyChatFileInfo_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            file_id: read_fixed(&raw.file_id)?,
            file_name: read_fixed(&raw.file_name)?,
            file_type: read_fixed(&raw.file_type)?,
            file_size_bytes: raw.file_size_bytes,
            mime_type: read_fixed(&raw.mime_type)?,
            download_url: read_fixed(&raw.download_url)?,
            created_at_ms: raw.created_at_ms,
        })
    }
}

impl FromNative for UserProfile {
    type Raw = sys::AnyChatUserProfile_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            user_id: read_fixed(&raw.user_id)?,
            nickname: read_fixed(&raw.nickname)?,
            avatar_url: read_fixed(&raw.avatar_url)?,
            phone: read_fixed(&raw.phone)?,
            email: read_fixed(&raw.email)?,
            signature: read_fixed(&raw.signature)?,
            region: read_fixed(&raw.region)?,
            gender: enumerated(raw.gender, "gender", Gender::from_ffi)?,
            created_at_ms: raw.created_at_ms,
        })
    }
}

impl IntoNative for UserProfile {
    type Raw = sys::AnyChatUserProfile_C;

    fn to_native(&self) -> Result<Self::Raw> {
        Ok(sys::AnyChatUserProfile_C {
            user_id: write_fixed(&self.user_id)?,
            nickname: write_fixed(&self.nickname)?,
            avatar_url: write_fixed(&self.avatar_url)?,
            phone: write_fixed(&self.phone)?,
            email: write_fixed(&self.email)?,
            signature: write_fixed(&self.signature)?,
            region: write_fixed(&self.region)?,
            gender: self.gender as i32,
            created_at_ms: self.created_at_ms,
        })
    }
}

impl FromNative for UserSettings {
    type Raw = sys::AnyChatUserSettings_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            notification_enabled: flag(raw.notification_enabled),
            sound_enabled: flag(raw.sound_enabled),
            vibration_enabled: flag(raw.vibration_enabled),
            message_preview_enabled: flag(raw.message_preview_enabled),
            friend_verify_required: flag(raw.friend_verify_required),
            search_by_phone: flag(raw.search_by_phone),
            search_by_id: flag(raw.search_by_id),
            language: read_fixed(&raw.language)?,
        })
    }
}

impl IntoNative for UserSettings {
    type Raw = sys::AnyChatUserSettings_C;

    fn to_native(&self) -> Result<Self::Raw> {
        Ok(sys::AnyChatUserSettings_C {
            notification_enabled: to_flag(self.notification_enabled),
            sound_enabled: to_flag(self.sound_enabled),
            vibration_enabled: to_flag(self.vibration_enabled),
            message_preview_enabled: to_flag(self.message_preview_enabled),
            friend_verify_required: to_flag(self.friend_verify_required),
            search_by_phone: to_flag(self.search_by_phone),
            search_by_id: to_flag(self.search_by_id),
            language: write_fixed(&self.language)?,
        })
    }
}

impl FromNative for CallSession {
    type Raw = sys::AnyChatCallSession_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            call_id: read_fixed(&raw.call_id)?,
            caller_id: read_fixed(&raw.caller_id)?,
            callee_id: read_fixed(&raw.callee_id)?,
            call_type: enumerated(raw.call_type, "call type", CallType::from_ffi)?,
            status: enumerated(raw.status, "call status", CallStatus::from_ffi)?,
            room_name: read_fixed(&raw.room_name)?,
            token: read_fixed(&raw.token)?,
            started_at: raw.started_at,
            connected_at: raw.connected_at,
            ended_at: raw.ended_at,
            duration: raw.duration,
        })
    }
}

impl FromNative for MeetingRoom {
    type Raw = sys::AnyChatMeetingRoom_C;

    unsafe fn from_native(raw: &Self::Raw) -> Result<Self> {
        Ok(Self {
            room_id: read_fixed(&raw.room_id)?,
            creator_id: read_fixed(&raw.creator_id)?,
            title: read_fixed(&raw.title)?,
            room_name: read_fixed(&raw.room_name)?,
            token: read_fixed(&raw.token)?,
            has_password: flag(raw.has_password),
            max_participants: raw.max_participants,
            is_active: flag(raw.is_active),
            started_at: raw.started_at,
            created_at_ms: raw.created_at_ms,
        })
    }
}

/// A native `{ items, count[, total] }` list and its release entry point.
pub(crate) trait NativeList: 'static {
    type Raw;
    type Item: FromNative;
    type Output: Send + 'static;

    /// # Safety
    ///
    /// `raw.items` must be null or point at `raw.count` initialised elements.
    unsafe fn items(raw: &Self::Raw) -> &[<Self::Item as FromNative>::Raw];

    /// The server-side total, for paged lists.
    fn total(raw: &Self::Raw) -> i64;

    /// # Safety
    ///
    /// `raw` must come from `native` and not have been released yet.
    unsafe fn free(native: &dyn Native, raw: *mut Self::Raw);

    fn finish(items: Vec<Self::Item>, total: i64) -> Self::Output;
}

unsafe fn raw_items<'a, T>(items: *const T, count: c_int) -> &'a [T] {
    match usize::try_from(count) {
        Ok(len) if len > 0 && !items.is_null() => unsafe { slice::from_raw_parts(items, len) },
        _ => &[],
    }
}

macro_rules! native_list {
    ($marker:ident, $raw:ty, $item:ty, $free:ident) => {
        native_list!(@impl $marker, $raw, $item, $free, Vec<$item>, |raw: &$raw| i64::from(raw.count), |items, _total| items);
    };
    ($marker:ident, $raw:ty, $item:ty, $free:ident, paged) => {
        native_list!(@impl $marker, $raw, $item, $free, Page<$item>, |raw: &$raw| raw.total, |items, total| Page { items, total });
    };
    (@impl $marker:ident, $raw:ty, $item:ty, $free:ident, $output:ty, $total:expr, $finish:expr) => {
        pub(crate) enum $marker {}

        impl NativeList for $marker {
            type Raw = $raw;
            type Item = $item;
            type Output = $output;

            unsafe fn items(raw: &Self::Raw) -> &[<$item as FromNative>::Raw] {
                unsafe { raw_items(raw.items, raw.count) }
            }

            fn total(raw: &Self::Raw) -> i64 {
                ($total)(raw)
            }

            unsafe fn free(native: &dyn Native, raw: *mut Self::Raw) {
                unsafe { native.$free(raw) }
            }

            fn finish(items: Vec<$item>, total: i64) -> Self::Output {
                ($finish)(items, total)
            }
        }
    };
}

native_list!(MessageList, sys::AnyChatMessageList_C, Message, free_message_list);
native_list!(ConversationList, sys::AnyChatConversationList_C, Conversation, free_conversation_list);
native_list!(FriendList, sys::AnyChatFriendList_C, Friend, free_friend_list);
native_list!(FriendRequestList, sys::AnyChatFriendRequestList_C, FriendRequest, free_friend_request_list);
native_list!(GroupList, sys::AnyChatGroupList_C, Group, free_group_list);
native_list!(GroupMemberList, sys::AnyChatGroupMemberList_C, GroupMember, free_group_member_list);
native_list!(UserList, sys::AnyChatUserList_C, UserInfo, free_user_list, paged);
native_list!(CallList, sys::AnyChatCallList_C, CallSession, free_call_list, paged);
native_list!(MeetingList, sys::AnyChatMeetingList_C, MeetingRoom, free_meeting_list, paged);

/// Scoped ownership of a native list payload. Released on drop.
pub(crate) struct ListGuard<'a, L: NativeList> {
    native: &'a dyn Native,
    raw: *const L::Raw,
}

impl<'a, L: NativeList> ListGuard<'a, L> {
    /// # Safety
    ///
    /// `raw` must be null or a live list allocated by `native`, released by
    /// nobody else.
    pub(crate) const unsafe fn new(native: &'a dyn Native, raw: *const L::Raw) -> Self {
        Self { native, raw }
    }

    /// Convert every element. Fails on the first malformed one.
    pub(crate) fn convert(&self) -> Result<L::Output> {
        let Some(raw) = (unsafe { self.raw.as_ref() }) else {
            return Ok(L::finish(Vec::new(), 0));
        };
        let items = unsafe { L::items(raw) }
            .iter()
            .map(|item| unsafe { L::Item::from_native(item) })
            .collect::<Result<Vec<_>>>()?;
        Ok(L::finish(items, L::total(raw)))
    }
}

impl<L: NativeList> Drop for ListGuard<'_, L> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { L::free(self.native, self.raw.cast_mut()) };
        }
    }
}
