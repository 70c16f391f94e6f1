//! SDK types: enumerations mirroring the native constants and the host-side
//! records native payloads are converted into.

macro_rules! ffi_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident {
        $($(#[$vm:meta])* $variant:ident = $val:expr),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(i32)]
        $vis enum $name { $($(#[$vm])* $variant = $val),* }

        impl $name {
            /// Convert from FFI `i32`. Returns `None` for unknown values.
            #[must_use]
            pub const fn from_ffi(v: i32) -> Option<Self> {
                match v { $($val => Some(Self::$variant),)* _ => None }
            }
        }
    };
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $vis:vis enum $name:ident {
        $($(#[$vm:meta])* $variant:ident = $val:literal),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        $vis enum $name { $($(#[$vm])* $variant),* }

        impl $name {
            /// The native string form.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self { $(Self::$variant => $val,)* }
            }

            /// Parse the native string form. Returns `None` for unknown values.
            #[must_use]
            pub fn from_native_str(s: &str) -> Option<Self> {
                match s { $($val => Some(Self::$variant),)* _ => None }
            }
        }
    };
}

ffi_enum! {
    /// Connection state of the client.
    pub enum ConnectionState {
        /// Not connected.
        Disconnected = 0,
        /// First connection attempt in progress.
        Connecting = 1,
        /// Connected to the gateway.
        Connected = 2,
        /// Connection lost, retrying.
        Reconnecting = 3,
    }
}

ffi_enum! {
    /// Message payload type.
    pub enum MessageType {
        /// Plain text.
        Text = 0,
        /// Image.
        Image = 1,
        /// Generic file.
        File = 2,
        /// Voice clip.
        Audio = 3,
        /// Video clip.
        Video = 4,
    }
}

ffi_enum! {
    /// Server-side lifecycle of a message.
    pub enum MessageStatus {
        /// Visible.
        Normal = 0,
        /// Recalled by the sender.
        Recalled = 1,
        /// Deleted.
        Deleted = 2,
    }
}

ffi_enum! {
    /// Local send state of an outgoing message.
    pub enum SendState {
        /// Queued locally.
        Pending = 0,
        /// Acknowledged by the server.
        Sent = 1,
        /// Sending failed.
        Failed = 2,
    }
}

ffi_enum! {
    /// Conversation type.
    pub enum ConversationType {
        /// One-to-one.
        Private = 0,
        /// Group conversation.
        Group = 1,
    }
}

ffi_enum! {
    /// Call media type.
    pub enum CallType {
        /// Audio only.
        Audio = 0,
        /// Audio and video.
        Video = 1,
    }
}

ffi_enum! {
    /// Call status.
    pub enum CallStatus {
        /// Waiting for the callee.
        Ringing = 0,
        /// In progress.
        Connected = 1,
        /// Hung up.
        Ended = 2,
        /// Declined by the callee.
        Rejected = 3,
        /// Not answered.
        Missed = 4,
        /// Withdrawn by the caller.
        Cancelled = 5,
    }
}

ffi_enum! {
    /// Role of a member within a group.
    pub enum GroupRole {
        /// Group owner.
        Owner = 0,
        /// Administrator.
        Admin = 1,
        /// Regular member.
        Member = 2,
    }
}

ffi_enum! {
    /// Profile gender.
    pub enum Gender {
        /// Not specified.
        Unknown = 0,
        /// Male.
        Male = 1,
        /// Female.
        Female = 2,
    }
}

string_enum! {
    /// State of a friend request.
    pub enum FriendRequestStatus {
        /// Awaiting an answer.
        Pending = "pending",
        /// Accepted.
        Accepted = "accepted",
        /// Rejected.
        Rejected = "rejected",
    }
}

string_enum! {
    /// Device platform reported at login.
    pub enum DeviceType {
        /// iOS.
        Ios = "ios",
        /// Android.
        Android = "android",
        /// Browser.
        Web = "web",
    }
}

/// Session token issued at login.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthToken {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token used to renew the session.
    pub refresh_token: String,
    /// Expiry, epoch milliseconds.
    pub expires_at_ms: i64,
}

/// Public user summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserInfo {
    /// User ID.
    pub user_id: String,
    /// Display name.
    pub username: String,
    /// Avatar URL.
    pub avatar_url: String,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Server-assigned ID.
    pub message_id: String,
    /// Client-assigned ID.
    pub local_id: String,
    /// Conversation the message belongs to.
    pub conversation_id: String,
    /// Sender user ID.
    pub sender_id: String,
    /// MIME-like content type.
    pub content_type: String,
    /// Payload type.
    pub message_type: MessageType,
    /// Message body.
    pub content: String,
    /// Per-conversation sequence number.
    pub seq: i64,
    /// ID of the message this one replies to.
    pub reply_to: Option<String>,
    /// Send time, epoch milliseconds.
    pub timestamp_ms: i64,
    /// Server-side lifecycle.
    pub status: MessageStatus,
    /// Local send state.
    pub send_state: SendState,
    /// Whether the message has been read.
    pub is_read: bool,
}

/// A conversation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversation {
    /// Conversation ID.
    pub conversation_id: String,
    /// Private or group.
    pub conversation_type: ConversationType,
    /// Peer user ID or group ID.
    pub target_id: String,
    /// Last message ID.
    pub last_message_id: String,
    /// Preview text of the last message.
    pub last_message_text: String,
    /// Last message time, epoch milliseconds.
    pub last_message_time_ms: i64,
    /// Unread message count.
    pub unread_count: i32,
    /// Pinned to the top.
    pub is_pinned: bool,
    /// Notifications muted.
    pub is_muted: bool,
    /// Last update, epoch milliseconds.
    pub updated_at_ms: i64,
}

/// A friend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Friend {
    /// Friend's user ID.
    pub user_id: String,
    /// Private remark.
    pub remark: String,
    /// Last update, epoch milliseconds.
    pub updated_at_ms: i64,
    /// Tombstone flag from incremental sync.
    pub is_deleted: bool,
    /// Public profile.
    pub user_info: UserInfo,
}

/// A friend request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FriendRequest {
    /// Request ID.
    pub request_id: i64,
    /// Requester.
    pub from_user_id: String,
    /// Recipient.
    pub to_user_id: String,
    /// Greeting text.
    pub message: String,
    /// Current state.
    pub status: FriendRequestStatus,
    /// Creation time, epoch milliseconds.
    pub created_at_ms: i64,
    /// Requester's public profile.
    pub from_user_info: UserInfo,
}

/// A group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Group ID.
    pub group_id: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Owner user ID.
    pub owner_id: String,
    /// Member count.
    pub member_count: i32,
    /// The current user's role.
    pub my_role: GroupRole,
    /// Joining needs approval.
    pub join_verify: bool,
    /// Last update, epoch milliseconds.
    pub updated_at_ms: i64,
}

/// A group member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupMember {
    /// Member user ID.
    pub user_id: String,
    /// Nickname within the group.
    pub group_nickname: String,
    /// Role.
    pub role: GroupRole,
    /// Muted by an admin.
    pub is_muted: bool,
    /// Join time, epoch milliseconds.
    pub joined_at_ms: i64,
    /// Public profile.
    pub user_info: UserInfo,
}

/// An invitation into a group, as pushed by the native core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupInvitation {
    /// The group.
    pub group: Group,
    /// Who sent the invitation.
    pub inviter_id: String,
}

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileInfo {
    /// File ID.
    pub file_id: String,
    /// Original file name.
    pub file_name: String,
    /// Category given at upload (`image`, `video`, `audio`, `file`).
    pub file_type: String,
    /// Size in bytes.
    pub file_size_bytes: i64,
    /// MIME type.
    pub mime_type: String,
    /// Download URL.
    pub download_url: String,
    /// Upload time, epoch milliseconds.
    pub created_at_ms: i64,
}

/// The current user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    /// User ID.
    pub user_id: String,
    /// Nickname.
    pub nickname: String,
    /// Avatar URL.
    pub avatar_url: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Personal signature.
    pub signature: String,
    /// Region.
    pub region: String,
    /// Gender.
    pub gender: Gender,
    /// Registration time, epoch milliseconds.
    pub created_at_ms: i64,
}

/// The current user's settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct UserSettings {
    /// Push notifications on.
    pub notification_enabled: bool,
    /// Notification sound on.
    pub sound_enabled: bool,
    /// Vibration on.
    pub vibration_enabled: bool,
    /// Show message text in notifications.
    pub message_preview_enabled: bool,
    /// Friend requests need approval.
    pub friend_verify_required: bool,
    /// Findable by phone number.
    pub search_by_phone: bool,
    /// Findable by user ID.
    pub search_by_id: bool,
    /// UI language tag.
    pub language: String,
}

/// A one-to-one call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallSession {
    /// Call ID.
    pub call_id: String,
    /// Caller user ID.
    pub caller_id: String,
    /// Callee user ID.
    pub callee_id: String,
    /// Media type.
    pub call_type: CallType,
    /// Status.
    pub status: CallStatus,
    /// Media room name.
    pub room_name: String,
    /// Media room token.
    pub token: String,
    /// Start time, epoch seconds.
    pub started_at: i64,
    /// Connect time, epoch seconds.
    pub connected_at: i64,
    /// End time, epoch seconds.
    pub ended_at: i64,
    /// Duration in seconds.
    pub duration: i32,
}

/// A call status change, as pushed by the native core.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallStatusChange {
    /// Call ID.
    pub call_id: String,
    /// New status.
    pub status: CallStatus,
}

/// A multi-party meeting room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingRoom {
    /// Room ID.
    pub room_id: String,
    /// Creator user ID.
    pub creator_id: String,
    /// Title.
    pub title: String,
    /// Media room name.
    pub room_name: String,
    /// Media room token.
    pub token: String,
    /// Joining needs a password.
    pub has_password: bool,
    /// Participant cap.
    pub max_participants: i32,
    /// Still open.
    pub is_active: bool,
    /// Start time, epoch seconds.
    pub started_at: i64,
    /// Creation time, epoch milliseconds.
    pub created_at_ms: i64,
}

/// One page of a server-paged listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total across all pages.
    pub total: i64,
}
