#![allow(unsafe_code)]
#![allow(clippy::too_many_arguments)]
//! The native call surface the bridge drives.
//!
//! [`Native`] mirrors the AnyChat C API one method per entry point, with the
//! argument order and types of the C header. [`LinkedNative`] (feature
//! `linked`) forwards every method to `anychat-sys`; tests substitute an
//! in-process core that honours the same contract.

use std::ffi::{c_char, c_int, c_void};

use anychat_sys as sys;

macro_rules! native_api {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)? => $sym:ident;
    )*) => {
        /// The AnyChat C entry points, as seen by the bridge.
        ///
        /// Implementations must be callable from any thread and must honour
        /// the C contract: a method that takes `userdata` and a callback
        /// either returns a non-zero status without ever invoking the
        /// callback, or returns `0` and invokes it (possibly before
        /// returning, possibly later from another thread).
        ///
        /// # Safety
        ///
        /// Every method is `unsafe`: handles must come from this backend and
        /// be live, and pointer arguments must be valid for the duration of
        /// the call, exactly as the corresponding C function requires.
        pub trait Native: Send + Sync + 'static {
            $(
                $(#[$meta])*
                #[doc = concat!("\n\nMirrors `", stringify!($sym), "`.")]
                ///
                /// # Safety
                ///
                /// See the trait-level contract.
                unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)?;
            )*
        }

        #[cfg(feature = "linked")]
        impl Native for LinkedNative {
            $(
                #[inline]
                unsafe fn $name(&self, $($arg: $ty),*) $(-> $ret)? {
                    unsafe { sys::$sym($($arg),*) }
                }
            )*
        }
    };
}

/// Backend that calls the linked `libanychat_c`.
#[cfg(feature = "linked")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedNative;

native_api! {
    // ---- errors & memory ----
    /// Last error message for the calling thread.
    fn get_last_error() -> *const c_char => anychat_get_last_error;
    /// Release a message list.
    fn free_message_list(list: *mut sys::AnyChatMessageList_C) => anychat_free_message_list;
    /// Release a conversation list.
    fn free_conversation_list(list: *mut sys::AnyChatConversationList_C) => anychat_free_conversation_list;
    /// Release a friend list.
    fn free_friend_list(list: *mut sys::AnyChatFriendList_C) => anychat_free_friend_list;
    /// Release a friend request list.
    fn free_friend_request_list(list: *mut sys::AnyChatFriendRequestList_C) => anychat_free_friend_request_list;
    /// Release a group list.
    fn free_group_list(list: *mut sys::AnyChatGroupList_C) => anychat_free_group_list;
    /// Release a group member list.
    fn free_group_member_list(list: *mut sys::AnyChatGroupMemberList_C) => anychat_free_group_member_list;
    /// Release a user list.
    fn free_user_list(list: *mut sys::AnyChatUserList_C) => anychat_free_user_list;
    /// Release a call list.
    fn free_call_list(list: *mut sys::AnyChatCallList_C) => anychat_free_call_list;
    /// Release a meeting list.
    fn free_meeting_list(list: *mut sys::AnyChatMeetingList_C) => anychat_free_meeting_list;

    // ---- client ----
    /// Create a client; null on failure.
    fn client_create(config: *const sys::AnyChatClientConfig_C) -> sys::AnyChatClientHandle => anychat_client_create;
    /// Destroy a client and every sub-module handle derived from it.
    fn client_destroy(handle: sys::AnyChatClientHandle) => anychat_client_destroy;
    /// Start connecting.
    fn client_connect(handle: sys::AnyChatClientHandle) => anychat_client_connect;
    /// Disconnect.
    fn client_disconnect(handle: sys::AnyChatClientHandle) => anychat_client_disconnect;
    /// Current `ANYCHAT_STATE_*`.
    fn client_get_connection_state(handle: sys::AnyChatClientHandle) -> c_int => anychat_client_get_connection_state;
    /// Install or clear the connection state listener.
    fn client_set_connection_callback(handle: sys::AnyChatClientHandle, userdata: *mut c_void, callback: sys::AnyChatConnectionStateCallback) => anychat_client_set_connection_callback;
    /// Auth sub-module handle.
    fn client_get_auth(handle: sys::AnyChatClientHandle) -> sys::AnyChatAuthHandle => anychat_client_get_auth;
    /// Message sub-module handle.
    fn client_get_message(handle: sys::AnyChatClientHandle) -> sys::AnyChatMessageHandle => anychat_client_get_message;
    /// Conversation sub-module handle.
    fn client_get_conversation(handle: sys::AnyChatClientHandle) -> sys::AnyChatConvHandle => anychat_client_get_conversation;
    /// Friend sub-module handle.
    fn client_get_friend(handle: sys::AnyChatClientHandle) -> sys::AnyChatFriendHandle => anychat_client_get_friend;
    /// Group sub-module handle.
    fn client_get_group(handle: sys::AnyChatClientHandle) -> sys::AnyChatGroupHandle => anychat_client_get_group;
    /// File sub-module handle.
    fn client_get_file(handle: sys::AnyChatClientHandle) -> sys::AnyChatFileHandle => anychat_client_get_file;
    /// User sub-module handle.
    fn client_get_user(handle: sys::AnyChatClientHandle) -> sys::AnyChatUserHandle => anychat_client_get_user;
    /// RTC sub-module handle.
    fn client_get_rtc(handle: sys::AnyChatClientHandle) -> sys::AnyChatRtcHandle => anychat_client_get_rtc;

    // ---- auth ----
    /// Log in.
    fn auth_login(handle: sys::AnyChatAuthHandle, account: *const c_char, password: *const c_char, device_type: *const c_char, userdata: *mut c_void, callback: sys::AnyChatAuthCallback) -> c_int => anychat_auth_login;
    /// Register an account.
    fn auth_register(handle: sys::AnyChatAuthHandle, phone_or_email: *const c_char, password: *const c_char, verify_code: *const c_char, device_type: *const c_char, nickname: *const c_char, userdata: *mut c_void, callback: sys::AnyChatAuthCallback) -> c_int => anychat_auth_register;
    /// Log out.
    fn auth_logout(handle: sys::AnyChatAuthHandle, userdata: *mut c_void, callback: sys::AnyChatResultCallback) -> c_int => anychat_auth_logout;
    /// Refresh the session token.
    fn auth_refresh_token(handle: sys::AnyChatAuthHandle, refresh_token: *const c_char, userdata: *mut c_void, callback: sys::AnyChatAuthCallback) -> c_int => anychat_auth_refresh_token;
    /// Change the password.
    fn auth_change_password(handle: sys::AnyChatAuthHandle, old_password: *const c_char, new_password: *const c_char, userdata: *mut c_void, callback: sys::AnyChatResultCallback) -> c_int => anychat_auth_change_password;
    /// Whether a session is active.
    fn auth_is_logged_in(handle: sys::AnyChatAuthHandle) -> c_int => anychat_auth_is_logged_in;
    /// Copy the current token into `out_token`.
    fn auth_get_current_token(handle: sys::AnyChatAuthHandle, out_token: *mut sys::AnyChatAuthToken_C) -> c_int => anychat_auth_get_current_token;
    /// Install or clear the token-expired listener.
    fn auth_set_on_expired(handle: sys::AnyChatAuthHandle, userdata: *mut c_void, callback: sys::AnyChatAuthExpiredCallback) => anychat_auth_set_on_expired;

    // ---- message ----
    /// Send a text message.
    fn message_send_text(handle: sys::AnyChatMessageHandle, session_id: *const c_char, content: *const c_char, userdata: *mut c_void, callback: sys::AnyChatMessageCallback) -> c_int => anychat_message_send_text;
    /// Load message history.
    fn message_get_history(handle: sys::AnyChatMessageHandle, session_id: *const c_char, before_timestamp_ms: i64, limit: c_int, userdata: *mut c_void, callback: sys::AnyChatMessageListCallback) -> c_int => anychat_message_get_history;
    /// Mark a message read.
    fn message_mark_read(handle: sys::AnyChatMessageHandle, session_id: *const c_char, message_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatMessageCallback) -> c_int => anychat_message_mark_read;
    /// Install or clear the message-received listener.
    fn message_set_received_callback(handle: sys::AnyChatMessageHandle, userdata: *mut c_void, callback: sys::AnyChatMessageReceivedCallback) => anychat_message_set_received_callback;

    // ---- conversation ----
    /// List conversations.
    fn conv_get_list(handle: sys::AnyChatConvHandle, userdata: *mut c_void, callback: sys::AnyChatConvListCallback) -> c_int => anychat_conv_get_list;
    /// Mark a conversation read.
    fn conv_mark_read(handle: sys::AnyChatConvHandle, conv_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatConvCallback) -> c_int => anychat_conv_mark_read;
    /// Pin or unpin.
    fn conv_set_pinned(handle: sys::AnyChatConvHandle, conv_id: *const c_char, pinned: c_int, userdata: *mut c_void, callback: sys::AnyChatConvCallback) -> c_int => anychat_conv_set_pinned;
    /// Mute or unmute.
    fn conv_set_muted(handle: sys::AnyChatConvHandle, conv_id: *const c_char, muted: c_int, userdata: *mut c_void, callback: sys::AnyChatConvCallback) -> c_int => anychat_conv_set_muted;
    /// Delete a conversation.
    fn conv_delete(handle: sys::AnyChatConvHandle, conv_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatConvCallback) -> c_int => anychat_conv_delete;
    /// Install or clear the conversation-updated listener.
    fn conv_set_updated_callback(handle: sys::AnyChatConvHandle, userdata: *mut c_void, callback: sys::AnyChatConvUpdatedCallback) => anychat_conv_set_updated_callback;

    // ---- friend ----
    /// List friends.
    fn friend_get_list(handle: sys::AnyChatFriendHandle, userdata: *mut c_void, callback: sys::AnyChatFriendListCallback) -> c_int => anychat_friend_get_list;
    /// Send a friend request.
    fn friend_send_request(handle: sys::AnyChatFriendHandle, to_user_id: *const c_char, message: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_send_request;
    /// Accept or reject a friend request.
    fn friend_handle_request(handle: sys::AnyChatFriendHandle, request_id: i64, accept: c_int, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_handle_request;
    /// List pending friend requests.
    fn friend_get_pending_requests(handle: sys::AnyChatFriendHandle, userdata: *mut c_void, callback: sys::AnyChatFriendRequestListCallback) -> c_int => anychat_friend_get_pending_requests;
    /// Delete a friend.
    fn friend_delete(handle: sys::AnyChatFriendHandle, friend_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_delete;
    /// Update a friend's remark.
    fn friend_update_remark(handle: sys::AnyChatFriendHandle, friend_id: *const c_char, remark: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_update_remark;
    /// Block a user.
    fn friend_add_to_blacklist(handle: sys::AnyChatFriendHandle, user_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_add_to_blacklist;
    /// Unblock a user.
    fn friend_remove_from_blacklist(handle: sys::AnyChatFriendHandle, user_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFriendCallback) -> c_int => anychat_friend_remove_from_blacklist;
    /// Install or clear the friend-request listener.
    fn friend_set_request_callback(handle: sys::AnyChatFriendHandle, userdata: *mut c_void, callback: sys::AnyChatFriendRequestCallback) => anychat_friend_set_request_callback;
    /// Install or clear the friend-list-changed listener.
    fn friend_set_list_changed_callback(handle: sys::AnyChatFriendHandle, userdata: *mut c_void, callback: sys::AnyChatFriendListChangedCallback) => anychat_friend_set_list_changed_callback;

    // ---- group ----
    /// List joined groups.
    fn group_get_list(handle: sys::AnyChatGroupHandle, userdata: *mut c_void, callback: sys::AnyChatGroupListCallback) -> c_int => anychat_group_get_list;
    /// Create a group.
    fn group_create(handle: sys::AnyChatGroupHandle, name: *const c_char, member_ids: *const *const c_char, member_count: c_int, userdata: *mut c_void, callback: sys::AnyChatGroupCallback) -> c_int => anychat_group_create;
    /// Ask to join a group.
    fn group_join(handle: sys::AnyChatGroupHandle, group_id: *const c_char, message: *const c_char, userdata: *mut c_void, callback: sys::AnyChatGroupCallback) -> c_int => anychat_group_join;
    /// Invite users into a group.
    fn group_invite(handle: sys::AnyChatGroupHandle, group_id: *const c_char, user_ids: *const *const c_char, user_count: c_int, userdata: *mut c_void, callback: sys::AnyChatGroupCallback) -> c_int => anychat_group_invite;
    /// Leave a group.
    fn group_quit(handle: sys::AnyChatGroupHandle, group_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatGroupCallback) -> c_int => anychat_group_quit;
    /// Update a group's name or avatar.
    fn group_update(handle: sys::AnyChatGroupHandle, group_id: *const c_char, name: *const c_char, avatar_url: *const c_char, userdata: *mut c_void, callback: sys::AnyChatGroupCallback) -> c_int => anychat_group_update;
    /// List group members, paged.
    fn group_get_members(handle: sys::AnyChatGroupHandle, group_id: *const c_char, page: c_int, page_size: c_int, userdata: *mut c_void, callback: sys::AnyChatGroupMemberCallback) -> c_int => anychat_group_get_members;
    /// Install or clear the group-invited listener.
    fn group_set_invited_callback(handle: sys::AnyChatGroupHandle, userdata: *mut c_void, callback: sys::AnyChatGroupInvitedCallback) => anychat_group_set_invited_callback;
    /// Install or clear the group-updated listener.
    fn group_set_updated_callback(handle: sys::AnyChatGroupHandle, userdata: *mut c_void, callback: sys::AnyChatGroupUpdatedCallback) => anychat_group_set_updated_callback;

    // ---- user ----
    /// Load the own profile.
    fn user_get_profile(handle: sys::AnyChatUserHandle, userdata: *mut c_void, callback: sys::AnyChatUserProfileCallback) -> c_int => anychat_user_get_profile;
    /// Update the own profile.
    fn user_update_profile(handle: sys::AnyChatUserHandle, profile: *const sys::AnyChatUserProfile_C, userdata: *mut c_void, callback: sys::AnyChatUserProfileCallback) -> c_int => anychat_user_update_profile;
    /// Load user settings.
    fn user_get_settings(handle: sys::AnyChatUserHandle, userdata: *mut c_void, callback: sys::AnyChatUserSettingsCallback) -> c_int => anychat_user_get_settings;
    /// Update user settings.
    fn user_update_settings(handle: sys::AnyChatUserHandle, settings: *const sys::AnyChatUserSettings_C, userdata: *mut c_void, callback: sys::AnyChatUserSettingsCallback) -> c_int => anychat_user_update_settings;
    /// Register a push token.
    fn user_update_push_token(handle: sys::AnyChatUserHandle, push_token: *const c_char, platform: *const c_char, userdata: *mut c_void, callback: sys::AnyChatUserResultCallback) -> c_int => anychat_user_update_push_token;
    /// Search users, paged.
    fn user_search(handle: sys::AnyChatUserHandle, keyword: *const c_char, page: c_int, page_size: c_int, userdata: *mut c_void, callback: sys::AnyChatUserListCallback) -> c_int => anychat_user_search;
    /// Load another user's public info.
    fn user_get_info(handle: sys::AnyChatUserHandle, user_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatUserInfoCallback) -> c_int => anychat_user_get_info;

    // ---- file ----
    /// Upload a local file; `userdata` is shared by both callbacks.
    fn file_upload(handle: sys::AnyChatFileHandle, local_path: *const c_char, file_type: *const c_char, userdata: *mut c_void, on_progress: sys::AnyChatUploadProgressCallback, on_done: sys::AnyChatFileInfoCallback) -> c_int => anychat_file_upload;
    /// Resolve a download URL.
    fn file_get_download_url(handle: sys::AnyChatFileHandle, file_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatDownloadUrlCallback) -> c_int => anychat_file_get_download_url;
    /// Delete an uploaded file.
    fn file_delete(handle: sys::AnyChatFileHandle, file_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatFileCallback) -> c_int => anychat_file_delete;

    // ---- rtc ----
    /// Start a one-to-one call.
    fn rtc_initiate_call(handle: sys::AnyChatRtcHandle, callee_id: *const c_char, call_type: c_int, userdata: *mut c_void, callback: sys::AnyChatCallCallback) -> c_int => anychat_rtc_initiate_call;
    /// Join a ringing call.
    fn rtc_join_call(handle: sys::AnyChatRtcHandle, call_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatCallCallback) -> c_int => anychat_rtc_join_call;
    /// Reject a call.
    fn rtc_reject_call(handle: sys::AnyChatRtcHandle, call_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatRtcResultCallback) -> c_int => anychat_rtc_reject_call;
    /// Hang up.
    fn rtc_end_call(handle: sys::AnyChatRtcHandle, call_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatRtcResultCallback) -> c_int => anychat_rtc_end_call;
    /// Load a call session.
    fn rtc_get_call_session(handle: sys::AnyChatRtcHandle, call_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatCallCallback) -> c_int => anychat_rtc_get_call_session;
    /// Load call logs, paged.
    fn rtc_get_call_logs(handle: sys::AnyChatRtcHandle, page: c_int, page_size: c_int, userdata: *mut c_void, callback: sys::AnyChatCallListCallback) -> c_int => anychat_rtc_get_call_logs;
    /// Create a meeting room.
    fn rtc_create_meeting(handle: sys::AnyChatRtcHandle, title: *const c_char, password: *const c_char, max_participants: c_int, userdata: *mut c_void, callback: sys::AnyChatMeetingCallback) -> c_int => anychat_rtc_create_meeting;
    /// Join a meeting room.
    fn rtc_join_meeting(handle: sys::AnyChatRtcHandle, room_id: *const c_char, password: *const c_char, userdata: *mut c_void, callback: sys::AnyChatMeetingCallback) -> c_int => anychat_rtc_join_meeting;
    /// Close a meeting room.
    fn rtc_end_meeting(handle: sys::AnyChatRtcHandle, room_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatRtcResultCallback) -> c_int => anychat_rtc_end_meeting;
    /// Load a meeting room.
    fn rtc_get_meeting(handle: sys::AnyChatRtcHandle, room_id: *const c_char, userdata: *mut c_void, callback: sys::AnyChatMeetingCallback) -> c_int => anychat_rtc_get_meeting;
    /// List meeting rooms, paged.
    fn rtc_list_meetings(handle: sys::AnyChatRtcHandle, page: c_int, page_size: c_int, userdata: *mut c_void, callback: sys::AnyChatMeetingListCallback) -> c_int => anychat_rtc_list_meetings;
    /// Install or clear the incoming-call listener.
    fn rtc_set_incoming_call_callback(handle: sys::AnyChatRtcHandle, userdata: *mut c_void, callback: sys::AnyChatIncomingCallCallback) => anychat_rtc_set_incoming_call_callback;
    /// Install or clear the call-status listener.
    fn rtc_set_call_status_changed_callback(handle: sys::AnyChatRtcHandle, userdata: *mut c_void, callback: sys::AnyChatCallStatusChangedCallback) => anychat_rtc_set_call_status_changed_callback;
}
