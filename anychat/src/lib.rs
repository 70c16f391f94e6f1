#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
pub mod error;
pub mod native;
pub mod pending;
pub mod stream;
pub mod types;

mod events;
mod ffi;
mod handle;
mod marshal;
mod token;

#[cfg(test)]
mod testing;

pub use anychat_sys as sys;

// Re-export core public API at crate root.
pub use client::{
    Auth, Client, ClientBuilder, ClientConfig, Conversations, Files, Friends, Groups, Messages,
    Rtc, Users, init_logger,
};
pub use error::{Error, ErrorKind, Result};
pub use handle::NativeHandle;
#[cfg(feature = "linked")]
pub use native::LinkedNative;
pub use native::Native;
pub use pending::Pending;
pub use stream::Subscription;
pub use types::{
    AuthToken, CallSession, CallStatus, CallStatusChange, CallType, ConnectionState,
    Conversation, ConversationType, DeviceType, FileInfo, Friend, FriendRequest,
    FriendRequestStatus, Gender, Group, GroupInvitation, GroupMember, GroupRole, MeetingRoom,
    Message, MessageStatus, MessageType, Page, SendState, UserInfo, UserProfile, UserSettings,
};
