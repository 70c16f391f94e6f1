#![allow(unsafe_code)]
#![allow(clippy::too_many_arguments, clippy::missing_safety_doc)]
//! In-process fake of the native core.
//!
//! Honours the C contract: a verb either fails synchronously without calling
//! back, or returns `0` and calls back exactly when the test says so. List
//! payloads are heap allocated here and must come back through the
//! matching `free_*_list`.

use std::collections::HashMap;
use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::ptr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};

use anychat_sys as sys;
use parking_lot::Mutex;

use crate::ffi::write_fixed;
use crate::native::Native;

/// `total` reported by every paged fake list.
pub(crate) const FAKE_TOTAL: i64 = 42;

const CLIENT_ADDR: usize = 0x1000;

fn text<const N: usize>(s: &str) -> [c_char; N] {
    write_fixed(s).expect("fixture text fits")
}

fn invalid_utf8<const N: usize>() -> [c_char; N] {
    let mut buf = [0; N];
    buf[0] = c_char::from_ne_bytes([0xFF]);
    buf
}

fn module_ptr<T>(index: usize) -> *mut T {
    ptr::without_provenance_mut(0x2000 + index * 0x10)
}

unsafe fn arg(p: *const c_char) -> String {
    if p.is_null() {
        "<null>".to_owned()
    } else {
        unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned()
    }
}

/// A native struct the fake can produce.
pub(crate) trait Fixture: Sized + 'static {
    fn fixture(n: usize) -> Self;
    fn malformed() -> Self;
}

impl Fixture for sys::AnyChatAuthToken_C {
    fn fixture(n: usize) -> Self {
        Self {
            access_token: text(&format!("access-{n}")),
            refresh_token: text(&format!("refresh-{n}")),
            expires_at_ms: 1_700_000_000_000,
        }
    }

    fn malformed() -> Self {
        Self {
            access_token: invalid_utf8(),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatUserInfo_C {
    fn fixture(n: usize) -> Self {
        Self {
            user_id: text(&format!("user-{n}")),
            username: text(&format!("User {n}")),
            avatar_url: text(&format!("https://cdn.example.com/u{n}.png")),
        }
    }

    fn malformed() -> Self {
        Self {
            user_id: invalid_utf8(),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatMessage_C {
    fn fixture(n: usize) -> Self {
        Self {
            message_id: text(&format!("msg-{n}")),
            local_id: text(&format!("local-{n}")),
            conv_id: text("conv-1"),
            sender_id: text("user-1"),
            content_type: text("text"),
            type_: sys::ANYCHAT_MSG_TEXT,
            content: c"hello".as_ptr().cast_mut(),
            seq: i64::try_from(n).unwrap_or_default(),
            reply_to: [0; 64],
            timestamp_ms: 1_000,
            status: 0,
            send_state: sys::ANYCHAT_SEND_SENT,
            is_read: 0,
        }
    }

    fn malformed() -> Self {
        Self {
            type_: 42,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatConversation_C {
    fn fixture(n: usize) -> Self {
        Self {
            conv_id: text(&format!("conv-{n}")),
            conv_type: sys::ANYCHAT_CONV_PRIVATE,
            target_id: text("user-2"),
            last_msg_id: text("msg-9"),
            last_msg_text: text("see you"),
            last_msg_time_ms: 2_000,
            unread_count: 3,
            is_pinned: 1,
            is_muted: 0,
            updated_at_ms: 2_000,
        }
    }

    fn malformed() -> Self {
        Self {
            conv_type: 9,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatFriend_C {
    fn fixture(n: usize) -> Self {
        Self {
            user_id: text(&format!("user-{n}")),
            remark: text("old friend"),
            updated_at_ms: 3_000,
            is_deleted: 0,
            user_info: sys::AnyChatUserInfo_C::fixture(n),
        }
    }

    fn malformed() -> Self {
        Self {
            user_info: sys::AnyChatUserInfo_C::malformed(),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatFriendRequest_C {
    fn fixture(n: usize) -> Self {
        Self {
            request_id: i64::try_from(n).unwrap_or_default(),
            from_user_id: text("user-2"),
            to_user_id: text("user-1"),
            message: text("hi, add me"),
            status: text("pending"),
            created_at_ms: 4_000,
            from_user_info: sys::AnyChatUserInfo_C::fixture(2),
        }
    }

    fn malformed() -> Self {
        Self {
            status: text("bogus"),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatGroup_C {
    fn fixture(n: usize) -> Self {
        Self {
            group_id: text(&format!("group-{n}")),
            name: text("Rustaceans"),
            avatar_url: [0; 512],
            owner_id: text("user-1"),
            member_count: 12,
            my_role: sys::ANYCHAT_GROUP_ROLE_MEMBER,
            join_verify: 1,
            updated_at_ms: 5_000,
        }
    }

    fn malformed() -> Self {
        Self {
            my_role: 7,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatGroupMember_C {
    fn fixture(n: usize) -> Self {
        Self {
            user_id: text(&format!("user-{n}")),
            group_nickname: text("ferris"),
            role: sys::ANYCHAT_GROUP_ROLE_ADMIN,
            is_muted: 0,
            joined_at_ms: 6_000,
            user_info: sys::AnyChatUserInfo_C::fixture(n),
        }
    }

    fn malformed() -> Self {
        Self {
            role: 9,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatFileInfo_C {
    fn fixture(n: usize) -> Self {
        Self {
            file_id: text(&format!("file-{n}")),
            file_name: text("photo.png"),
            file_type: text("image"),
            file_size_bytes: 2_048,
            mime_type: text("image/png"),
            download_url: text("https://files.example.com/photo.png"),
            created_at_ms: 7_000,
        }
    }

    fn malformed() -> Self {
        Self {
            file_id: invalid_utf8(),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatUserProfile_C {
    fn fixture(n: usize) -> Self {
        Self {
            user_id: text(&format!("user-{n}")),
            nickname: text("Ferris"),
            avatar_url: [0; 512],
            phone: text("+1 555 0100"),
            email: text("ferris@example.com"),
            signature: text("crab"),
            region: text("Ocean"),
            gender: 1,
            created_at_ms: 8_000,
        }
    }

    fn malformed() -> Self {
        Self {
            gender: 5,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatUserSettings_C {
    fn fixture(_: usize) -> Self {
        Self {
            notification_enabled: 1,
            sound_enabled: 1,
            vibration_enabled: 0,
            message_preview_enabled: 1,
            friend_verify_required: 1,
            search_by_phone: 0,
            search_by_id: 1,
            language: text("en"),
        }
    }

    fn malformed() -> Self {
        Self {
            language: invalid_utf8(),
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatCallSession_C {
    fn fixture(n: usize) -> Self {
        Self {
            call_id: text(&format!("call-{n}")),
            caller_id: text("user-1"),
            callee_id: text("user-2"),
            call_type: sys::ANYCHAT_CALL_VIDEO,
            status: sys::ANYCHAT_CALL_STATUS_RINGING,
            room_name: text("room-call"),
            token: text("lk-token"),
            started_at: 9_000,
            connected_at: 0,
            ended_at: 0,
            duration: 0,
        }
    }

    fn malformed() -> Self {
        Self {
            status: 17,
            ..Self::fixture(0)
        }
    }
}

impl Fixture for sys::AnyChatMeetingRoom_C {
    fn fixture(n: usize) -> Self {
        Self {
            room_id: text(&format!("room-{n}")),
            creator_id: text("user-1"),
            title: text("standup"),
            room_name: text("meeting-standup"),
            token: text("lk-token"),
            has_password: 0,
            max_participants: 8,
            is_active: 1,
            started_at: 10_000,
            created_at_ms: 10_000,
        }
    }

    fn malformed() -> Self {
        Self {
            room_id: invalid_utf8(),
            ..Self::fixture(0)
        }
    }
}

/// A native `{ items, count[, total] }` list the fake can allocate.
pub(crate) trait FakeList: Sized + 'static {
    type Item: Fixture;

    fn assemble(items: *mut Self::Item, count: c_int) -> Self;
    fn parts(&self) -> (*mut Self::Item, c_int);
}

macro_rules! fake_list {
    ($list:ty, $item:ty) => {
        impl FakeList for $list {
            type Item = $item;

            fn assemble(items: *mut $item, count: c_int) -> Self {
                Self { items, count }
            }

            fn parts(&self) -> (*mut $item, c_int) {
                (self.items, self.count)
            }
        }
    };
    ($list:ty, $item:ty, paged) => {
        impl FakeList for $list {
            type Item = $item;

            fn assemble(items: *mut $item, count: c_int) -> Self {
                Self {
                    items,
                    count,
                    total: FAKE_TOTAL,
                }
            }

            fn parts(&self) -> (*mut $item, c_int) {
                (self.items, self.count)
            }
        }
    };
}

fake_list!(sys::AnyChatMessageList_C, sys::AnyChatMessage_C);
fake_list!(sys::AnyChatConversationList_C, sys::AnyChatConversation_C);
fake_list!(sys::AnyChatFriendList_C, sys::AnyChatFriend_C);
fake_list!(sys::AnyChatFriendRequestList_C, sys::AnyChatFriendRequest_C);
fake_list!(sys::AnyChatGroupList_C, sys::AnyChatGroup_C);
fake_list!(sys::AnyChatGroupMemberList_C, sys::AnyChatGroupMember_C);
fake_list!(sys::AnyChatUserList_C, sys::AnyChatUserInfo_C, paged);
fake_list!(sys::AnyChatCallList_C, sys::AnyChatCallSession_C, paged);
fake_list!(sys::AnyChatMeetingList_C, sys::AnyChatMeetingRoom_C, paged);

/// Allocate a list of `count` fixtures, plus one malformed element when asked.
pub(crate) fn build_list<L: FakeList>(count: usize, malformed: bool) -> *mut L {
    let mut items: Vec<L::Item> = (1..=count).map(L::Item::fixture).collect();
    if malformed {
        items.push(L::Item::malformed());
    }
    let len = c_int::try_from(items.len()).expect("fixture list length");
    let items = Box::into_raw(items.into_boxed_slice()).cast::<L::Item>();
    Box::into_raw(Box::new(L::assemble(items, len)))
}

/// Release a list from [`build_list`].
pub(crate) unsafe fn release_list<L: FakeList>(list: *mut L) {
    let list = unsafe { Box::from_raw(list) };
    let (items, count) = list.parts();
    let len = usize::try_from(count).unwrap_or(0);
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(items, len)) });
}

/// How the test completes a recorded call.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    /// Success with a fixture payload (two items for lists).
    Ok,
    /// Failure with this message.
    Fail(&'static str),
    /// Success without a payload: null struct, null list, null URL.
    Empty,
    /// A list of exactly `n` items.
    Items(usize),
    /// A payload (or list element) that cannot be converted.
    Malformed,
}

type Fire = Arc<dyn Fn(*mut c_void, &Reply) + Send + Sync>;
type ResultFn = unsafe extern "C" fn(*mut c_void, c_int, *const c_char);
type ValueFn<R> = unsafe extern "C" fn(*mut c_void, c_int, *const R, *const c_char);
type ListFn<L> = unsafe extern "C" fn(*mut c_void, *const L, *const c_char);
type UrlFn = unsafe extern "C" fn(*mut c_void, c_int, *const c_char, *const c_char);
type ProgressFn = unsafe extern "C" fn(*mut c_void, i64, i64);

fn c_message(m: &str) -> CString {
    CString::new(m).expect("fixture message")
}

fn on_result(cb: Option<ResultFn>) -> Fire {
    Arc::new(move |userdata, reply| {
        let Some(cb) = cb else { return };
        match reply {
            Reply::Fail(m) => {
                let m = c_message(m);
                unsafe { cb(userdata, 0, m.as_ptr()) };
            }
            _ => unsafe { cb(userdata, 1, ptr::null()) },
        }
    })
}

fn on_value<R: Fixture>(cb: Option<ValueFn<R>>) -> Fire {
    Arc::new(move |userdata, reply| {
        let Some(cb) = cb else { return };
        match reply {
            Reply::Fail(m) => {
                let m = c_message(m);
                unsafe { cb(userdata, 0, ptr::null(), m.as_ptr()) };
            }
            Reply::Empty => unsafe { cb(userdata, 1, ptr::null(), ptr::null()) },
            Reply::Malformed => {
                let raw = R::malformed();
                unsafe { cb(userdata, 1, &raw, ptr::null()) };
            }
            Reply::Ok | Reply::Items(_) => {
                let raw = R::fixture(1);
                unsafe { cb(userdata, 1, &raw, ptr::null()) };
            }
        }
    })
}

fn on_list<L: FakeList>(cb: Option<ListFn<L>>, counters: Arc<Counters>) -> Fire {
    Arc::new(move |userdata, reply| {
        let Some(cb) = cb else { return };
        let list = match reply {
            Reply::Fail(m) => {
                let m = c_message(m);
                unsafe { cb(userdata, ptr::null(), m.as_ptr()) };
                return;
            }
            Reply::Empty => {
                unsafe { cb(userdata, ptr::null(), ptr::null()) };
                return;
            }
            Reply::Ok => build_list::<L>(2, false),
            Reply::Items(n) => build_list::<L>(*n, false),
            Reply::Malformed => build_list::<L>(1, true),
        };
        counters.lists_built.fetch_add(1, Ordering::SeqCst);
        unsafe { cb(userdata, list, ptr::null()) };
    })
}

fn on_url(cb: Option<UrlFn>) -> Fire {
    Arc::new(move |userdata, reply| {
        let Some(cb) = cb else { return };
        match reply {
            Reply::Fail(m) => {
                let m = c_message(m);
                unsafe { cb(userdata, 0, ptr::null(), m.as_ptr()) };
            }
            Reply::Empty => unsafe { cb(userdata, 1, ptr::null(), ptr::null()) },
            _ => unsafe { cb(userdata, 1, c"https://files.example.com/f-1".as_ptr(), ptr::null()) },
        }
    })
}

/// One recorded asynchronous call. Clone it to fire twice.
#[derive(Clone)]
pub(crate) struct Call {
    pub(crate) verb: &'static str,
    pub(crate) args: Vec<String>,
    userdata: usize,
    fire: Fire,
    progress: Option<ProgressFn>,
}

impl Call {
    pub(crate) fn userdata(&self) -> *mut c_void {
        ptr::without_provenance_mut(self.userdata)
    }

    /// Invoke the completion callback.
    pub(crate) fn fire(&self, reply: &Reply) {
        (self.fire)(self.userdata(), reply);
    }

    /// Invoke the upload progress callback.
    pub(crate) fn progress(&self, uploaded: i64, total: i64) {
        if let Some(cb) = self.progress {
            unsafe { cb(self.userdata(), uploaded, total) };
        }
    }
}

impl std::fmt::Debug for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("verb", &self.verb)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// What the next asynchronous call does.
#[derive(Debug, Clone)]
pub(crate) enum Mode {
    /// Return this status without calling back.
    Fail(c_int, &'static str),
    /// Call back with this reply before returning `0`.
    Inline(Reply),
    /// Call back with this reply, then return this status anyway.
    InlineThenFail(Reply, c_int),
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    lists_built: AtomicUsize,
    lists_freed: AtomicUsize,
}

/// A registered push listener.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Hook {
    Connection(unsafe extern "C" fn(*mut c_void, c_int)),
    Unit(unsafe extern "C" fn(*mut c_void)),
    Message(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatMessage_C)),
    Conversation(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatConversation_C)),
    FriendRequest(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatFriendRequest_C)),
    GroupInvited(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatGroup_C, *const c_char)),
    Group(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatGroup_C)),
    Call(unsafe extern "C" fn(*mut c_void, *const sys::AnyChatCallSession_C)),
    CallStatus(unsafe extern "C" fn(*mut c_void, *const c_char, c_int)),
}

/// The payload a push event carries.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Emit {
    /// The `n`th fixture (or state / status `n`).
    Nth(usize),
    /// A payload that cannot be converted.
    Malformed,
}

fn with_fixture<R: Fixture>(emit: Emit, f: impl FnOnce(*const R)) {
    let raw = match emit {
        Emit::Nth(n) => R::fixture(n),
        Emit::Malformed => R::malformed(),
    };
    f(&raw);
}

impl Hook {
    /// Invoke the listener as the native core would.
    pub(crate) fn fire(self, userdata: usize, emit: Emit) {
        let ud = ptr::without_provenance_mut(userdata);
        let number = match emit {
            Emit::Nth(n) => c_int::try_from(n).unwrap_or(c_int::MAX),
            Emit::Malformed => 99,
        };
        match self {
            Self::Connection(cb) => unsafe { cb(ud, number) },
            Self::Unit(cb) => unsafe { cb(ud) },
            Self::Message(cb) => with_fixture(emit, |raw| unsafe { cb(ud, raw) }),
            Self::Conversation(cb) => with_fixture(emit, |raw| unsafe { cb(ud, raw) }),
            Self::FriendRequest(cb) => with_fixture(emit, |raw| unsafe { cb(ud, raw) }),
            Self::Group(cb) => with_fixture(emit, |raw| unsafe { cb(ud, raw) }),
            Self::Call(cb) => with_fixture(emit, |raw| unsafe { cb(ud, raw) }),
            Self::GroupInvited(cb) => {
                let group = sys::AnyChatGroup_C::fixture(1);
                let inviter = match emit {
                    Emit::Nth(_) => c"user-7".as_ptr(),
                    Emit::Malformed => ptr::null(),
                };
                unsafe { cb(ud, &group, inviter) };
            }
            Self::CallStatus(cb) => unsafe { cb(ud, c"call-1".as_ptr(), number) },
        }
    }
}

/// Native client config as the fake received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReceivedConfig {
    pub(crate) gateway_url: String,
    pub(crate) api_base_url: String,
    pub(crate) device_id: String,
    pub(crate) db_path: String,
    pub(crate) connect_timeout_ms: c_int,
    pub(crate) max_reconnect_attempts: c_int,
    pub(crate) auto_reconnect: c_int,
}

/// The fake native core.
#[derive(Default)]
pub(crate) struct FakeNative {
    counters: Arc<Counters>,
    next: Mutex<Vec<Mode>>,
    pending: Mutex<Vec<Call>>,
    history: Mutex<Vec<String>>,
    hooks: Mutex<HashMap<&'static str, (usize, Hook)>>,
    last_error: Mutex<CString>,
    config: Mutex<Option<ReceivedConfig>>,
    fail_create: AtomicBool,
    null_modules: AtomicBool,
    logged_in: AtomicBool,
    state: AtomicI32,
    destroys: AtomicUsize,
}

impl FakeNative {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// This fake behind the trait object the bridge takes.
    pub(crate) fn as_native(self: &Arc<Self>) -> Arc<dyn Native> {
        let native: Arc<dyn Native> = Arc::<FakeNative>::clone(self);
        native
    }

    /// Queue the behavior of an upcoming asynchronous call (FIFO).
    pub(crate) fn next(&self, mode: Mode) {
        self.next.lock().push(mode);
    }

    pub(crate) fn fail_create(&self, message: &str) {
        self.set_last_error(message);
        self.fail_create.store(true, Ordering::SeqCst);
    }

    pub(crate) fn set_null_modules(&self, null: bool) {
        self.null_modules.store(null, Ordering::SeqCst);
    }

    pub(crate) fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.store(logged_in, Ordering::SeqCst);
    }

    pub(crate) fn set_state(&self, state: c_int) {
        self.state.store(state, Ordering::SeqCst);
    }

    pub(crate) fn set_last_error(&self, message: &str) {
        *self.last_error.lock() = c_message(message);
    }

    /// Remove and return the oldest recorded call of `verb`.
    pub(crate) fn take(&self, verb: &str) -> Call {
        let mut pending = self.pending.lock();
        let index = pending
            .iter()
            .position(|c| c.verb == verb)
            .unwrap_or_else(|| panic!("no pending {verb} call; have {pending:?}"));
        pending.remove(index)
    }

    pub(crate) fn pending_calls(&self) -> usize {
        self.pending.lock().len()
    }

    /// Every call and listener change, in order, as `verb` or `verb(args)`.
    pub(crate) fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    pub(crate) fn received_config(&self) -> Option<ReceivedConfig> {
        self.config.lock().clone()
    }

    pub(crate) fn lists_built(&self) -> usize {
        self.counters.lists_built.load(Ordering::SeqCst)
    }

    pub(crate) fn lists_freed(&self) -> usize {
        self.counters.lists_freed.load(Ordering::SeqCst)
    }

    pub(crate) fn destroys(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }

    /// The listener currently installed for `source`.
    pub(crate) fn hook(&self, source: &str) -> Option<(usize, Hook)> {
        self.hooks.lock().get(source).copied()
    }

    /// Fire the listener of `source`, if any. No lock is held while it runs.
    pub(crate) fn emit(&self, source: &str, emit: Emit) -> bool {
        match self.hook(source) {
            Some((userdata, hook)) => {
                hook.fire(userdata, emit);
                true
            }
            None => false,
        }
    }

    fn log(&self, entry: String) {
        self.history.lock().push(entry);
    }

    fn submit(
        &self,
        verb: &'static str,
        args: Vec<String>,
        userdata: *mut c_void,
        fire: Fire,
        progress: Option<ProgressFn>,
    ) -> c_int {
        self.log(format!("{verb}({})", args.join(", ")));
        let mode = {
            let mut next = self.next.lock();
            (!next.is_empty()).then(|| next.remove(0))
        };
        let call = Call {
            verb,
            args,
            userdata: userdata.addr(),
            fire,
            progress,
        };
        match mode {
            Some(Mode::Fail(status, message)) => {
                self.set_last_error(message);
                status
            }
            Some(Mode::Inline(reply)) => {
                call.fire(&reply);
                0
            }
            Some(Mode::InlineThenFail(reply, status)) => {
                call.fire(&reply);
                self.set_last_error("late failure");
                status
            }
            None => {
                self.pending.lock().push(call);
                0
            }
        }
    }

    fn set_hook(&self, source: &'static str, userdata: *mut c_void, hook: Option<Hook>) {
        match hook {
            Some(hook) => {
                self.log(format!("set:{source}"));
                self.hooks.lock().insert(source, (userdata.addr(), hook));
            }
            None => {
                self.log(format!("clear:{source}"));
                self.hooks.lock().remove(source);
            }
        }
    }

    fn module<T>(&self, index: usize) -> *mut T {
        if self.null_modules.load(Ordering::SeqCst) {
            ptr::null_mut()
        } else {
            module_ptr(index)
        }
    }

    unsafe fn free<L: FakeList>(&self, list: *mut L) {
        if list.is_null() {
            return;
        }
        self.counters.lists_freed.fetch_add(1, Ordering::SeqCst);
        unsafe { release_list(list) };
    }

    fn list<L: FakeList>(&self, cb: Option<ListFn<L>>) -> Fire {
        on_list(cb, Arc::clone(&self.counters))
    }
}

impl std::fmt::Debug for FakeNative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeNative").finish_non_exhaustive()
    }
}

impl Native for FakeNative {
    unsafe fn get_last_error(&self) -> *const c_char {
        self.last_error.lock().as_ptr()
    }

    unsafe fn free_message_list(&self, list: *mut sys::AnyChatMessageList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_conversation_list(&self, list: *mut sys::AnyChatConversationList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_friend_list(&self, list: *mut sys::AnyChatFriendList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_friend_request_list(&self, list: *mut sys::AnyChatFriendRequestList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_group_list(&self, list: *mut sys::AnyChatGroupList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_group_member_list(&self, list: *mut sys::AnyChatGroupMemberList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_user_list(&self, list: *mut sys::AnyChatUserList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_call_list(&self, list: *mut sys::AnyChatCallList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn free_meeting_list(&self, list: *mut sys::AnyChatMeetingList_C) {
        unsafe { self.free(list) }
    }

    unsafe fn client_create(
        &self,
        config: *const sys::AnyChatClientConfig_C,
    ) -> sys::AnyChatClientHandle {
        self.log("client_create".to_owned());
        if self.fail_create.load(Ordering::SeqCst) {
            return ptr::null_mut();
        }
        let config = unsafe { &*config };
        *self.config.lock() = Some(ReceivedConfig {
            gateway_url: unsafe { arg(config.gateway_url) },
            api_base_url: unsafe { arg(config.api_base_url) },
            device_id: unsafe { arg(config.device_id) },
            db_path: unsafe { arg(config.db_path) },
            connect_timeout_ms: config.connect_timeout_ms,
            max_reconnect_attempts: config.max_reconnect_attempts,
            auto_reconnect: config.auto_reconnect,
        });
        ptr::without_provenance_mut(CLIENT_ADDR)
    }

    unsafe fn client_destroy(&self, _handle: sys::AnyChatClientHandle) {
        self.log("client_destroy".to_owned());
        self.destroys.fetch_add(1, Ordering::SeqCst);
    }

    unsafe fn client_connect(&self, _handle: sys::AnyChatClientHandle) {
        self.log("client_connect".to_owned());
        self.state.store(sys::ANYCHAT_STATE_CONNECTING, Ordering::SeqCst);
    }

    unsafe fn client_disconnect(&self, _handle: sys::AnyChatClientHandle) {
        self.log("client_disconnect".to_owned());
        self.state.store(sys::ANYCHAT_STATE_DISCONNECTED, Ordering::SeqCst);
    }

    unsafe fn client_get_connection_state(&self, _handle: sys::AnyChatClientHandle) -> c_int {
        self.state.load(Ordering::SeqCst)
    }

    unsafe fn client_set_connection_callback(
        &self,
        _handle: sys::AnyChatClientHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatConnectionStateCallback,
    ) {
        self.set_hook("connection_state", userdata, callback.map(Hook::Connection));
    }

    unsafe fn client_get_auth(&self, _handle: sys::AnyChatClientHandle) -> sys::AnyChatAuthHandle {
        self.module(0)
    }

    unsafe fn client_get_message(
        &self,
        _handle: sys::AnyChatClientHandle,
    ) -> sys::AnyChatMessageHandle {
        self.module(1)
    }

    unsafe fn client_get_conversation(
        &self,
        _handle: sys::AnyChatClientHandle,
    ) -> sys::AnyChatConvHandle {
        self.module(2)
    }

    unsafe fn client_get_friend(
        &self,
        _handle: sys::AnyChatClientHandle,
    ) -> sys::AnyChatFriendHandle {
        self.module(3)
    }

    unsafe fn client_get_group(&self, _handle: sys::AnyChatClientHandle) -> sys::AnyChatGroupHandle {
        self.module(4)
    }

    unsafe fn client_get_file(&self, _handle: sys::AnyChatClientHandle) -> sys::AnyChatFileHandle {
        self.module(5)
    }

    unsafe fn client_get_user(&self, _handle: sys::AnyChatClientHandle) -> sys::AnyChatUserHandle {
        self.module(6)
    }

    unsafe fn client_get_rtc(&self, _handle: sys::AnyChatClientHandle) -> sys::AnyChatRtcHandle {
        self.module(7)
    }

    unsafe fn auth_login(
        &self,
        _handle: sys::AnyChatAuthHandle,
        account: *const c_char,
        password: *const c_char,
        device_type: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatAuthCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(account), arg(password), arg(device_type)] };
        self.submit("auth_login", args, userdata, on_value(callback), None)
    }

    unsafe fn auth_register(
        &self,
        _handle: sys::AnyChatAuthHandle,
        phone_or_email: *const c_char,
        password: *const c_char,
        verify_code: *const c_char,
        device_type: *const c_char,
        nickname: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatAuthCallback,
    ) -> c_int {
        let args = unsafe {
            vec![
                arg(phone_or_email),
                arg(password),
                arg(verify_code),
                arg(device_type),
                arg(nickname),
            ]
        };
        self.submit("auth_register", args, userdata, on_value(callback), None)
    }

    unsafe fn auth_logout(
        &self,
        _handle: sys::AnyChatAuthHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatResultCallback,
    ) -> c_int {
        self.submit("auth_logout", Vec::new(), userdata, on_result(callback), None)
    }

    unsafe fn auth_refresh_token(
        &self,
        _handle: sys::AnyChatAuthHandle,
        refresh_token: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatAuthCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(refresh_token)] };
        self.submit("auth_refresh_token", args, userdata, on_value(callback), None)
    }

    unsafe fn auth_change_password(
        &self,
        _handle: sys::AnyChatAuthHandle,
        old_password: *const c_char,
        new_password: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatResultCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(old_password), arg(new_password)] };
        self.submit("auth_change_password", args, userdata, on_result(callback), None)
    }

    unsafe fn auth_is_logged_in(&self, _handle: sys::AnyChatAuthHandle) -> c_int {
        c_int::from(self.logged_in.load(Ordering::SeqCst))
    }

    unsafe fn auth_get_current_token(
        &self,
        _handle: sys::AnyChatAuthHandle,
        out_token: *mut sys::AnyChatAuthToken_C,
    ) -> c_int {
        if !self.logged_in.load(Ordering::SeqCst) {
            self.set_last_error("not logged in");
            return sys::ANYCHAT_ERROR_NOT_LOGGED_IN;
        }
        unsafe { out_token.write(sys::AnyChatAuthToken_C::fixture(1)) };
        sys::ANYCHAT_OK
    }

    unsafe fn auth_set_on_expired(
        &self,
        _handle: sys::AnyChatAuthHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatAuthExpiredCallback,
    ) {
        self.set_hook("auth_expired", userdata, callback.map(Hook::Unit));
    }

    unsafe fn message_send_text(
        &self,
        _handle: sys::AnyChatMessageHandle,
        session_id: *const c_char,
        content: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatMessageCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(session_id), arg(content)] };
        self.submit("message_send_text", args, userdata, on_result(callback), None)
    }

    unsafe fn message_get_history(
        &self,
        _handle: sys::AnyChatMessageHandle,
        session_id: *const c_char,
        before_timestamp_ms: i64,
        limit: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatMessageListCallback,
    ) -> c_int {
        let args = vec![
            unsafe { arg(session_id) },
            before_timestamp_ms.to_string(),
            limit.to_string(),
        ];
        let fire = self.list(callback);
        self.submit("message_get_history", args, userdata, fire, None)
    }

    unsafe fn message_mark_read(
        &self,
        _handle: sys::AnyChatMessageHandle,
        session_id: *const c_char,
        message_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatMessageCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(session_id), arg(message_id)] };
        self.submit("message_mark_read", args, userdata, on_result(callback), None)
    }

    unsafe fn message_set_received_callback(
        &self,
        _handle: sys::AnyChatMessageHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatMessageReceivedCallback,
    ) {
        self.set_hook("message_received", userdata, callback.map(Hook::Message));
    }

    unsafe fn conv_get_list(
        &self,
        _handle: sys::AnyChatConvHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatConvListCallback,
    ) -> c_int {
        let fire = self.list(callback);
        self.submit("conv_get_list", Vec::new(), userdata, fire, None)
    }

    unsafe fn conv_mark_read(
        &self,
        _handle: sys::AnyChatConvHandle,
        conv_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatConvCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(conv_id)] };
        self.submit("conv_mark_read", args, userdata, on_result(callback), None)
    }

    unsafe fn conv_set_pinned(
        &self,
        _handle: sys::AnyChatConvHandle,
        conv_id: *const c_char,
        pinned: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatConvCallback,
    ) -> c_int {
        let args = vec![unsafe { arg(conv_id) }, pinned.to_string()];
        self.submit("conv_set_pinned", args, userdata, on_result(callback), None)
    }

    unsafe fn conv_set_muted(
        &self,
        _handle: sys::AnyChatConvHandle,
        conv_id: *const c_char,
        muted: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatConvCallback,
    ) -> c_int {
        let args = vec![unsafe { arg(conv_id) }, muted.to_string()];
        self.submit("conv_set_muted", args, userdata, on_result(callback), None)
    }

    unsafe fn conv_delete(
        &self,
        _handle: sys::AnyChatConvHandle,
        conv_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatConvCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(conv_id)] };
        self.submit("conv_delete", args, userdata, on_result(callback), None)
    }

    unsafe fn conv_set_updated_callback(
        &self,
        _handle: sys::AnyChatConvHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatConvUpdatedCallback,
    ) {
        self.set_hook("conversation_updated", userdata, callback.map(Hook::Conversation));
    }

    unsafe fn friend_get_list(
        &self,
        _handle: sys::AnyChatFriendHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendListCallback,
    ) -> c_int {
        let fire = self.list(callback);
        self.submit("friend_get_list", Vec::new(), userdata, fire, None)
    }

    unsafe fn friend_send_request(
        &self,
        _handle: sys::AnyChatFriendHandle,
        to_user_id: *const c_char,
        message: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(to_user_id), arg(message)] };
        self.submit("friend_send_request", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_handle_request(
        &self,
        _handle: sys::AnyChatFriendHandle,
        request_id: i64,
        accept: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = vec![request_id.to_string(), accept.to_string()];
        self.submit("friend_handle_request", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_get_pending_requests(
        &self,
        _handle: sys::AnyChatFriendHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendRequestListCallback,
    ) -> c_int {
        let fire = self.list(callback);
        self.submit("friend_get_pending_requests", Vec::new(), userdata, fire, None)
    }

    unsafe fn friend_delete(
        &self,
        _handle: sys::AnyChatFriendHandle,
        friend_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(friend_id)] };
        self.submit("friend_delete", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_update_remark(
        &self,
        _handle: sys::AnyChatFriendHandle,
        friend_id: *const c_char,
        remark: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(friend_id), arg(remark)] };
        self.submit("friend_update_remark", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_add_to_blacklist(
        &self,
        _handle: sys::AnyChatFriendHandle,
        user_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(user_id)] };
        self.submit("friend_add_to_blacklist", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_remove_from_blacklist(
        &self,
        _handle: sys::AnyChatFriendHandle,
        user_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(user_id)] };
        self.submit("friend_remove_from_blacklist", args, userdata, on_result(callback), None)
    }

    unsafe fn friend_set_request_callback(
        &self,
        _handle: sys::AnyChatFriendHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendRequestCallback,
    ) {
        self.set_hook("friend_request", userdata, callback.map(Hook::FriendRequest));
    }

    unsafe fn friend_set_list_changed_callback(
        &self,
        _handle: sys::AnyChatFriendHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatFriendListChangedCallback,
    ) {
        self.set_hook("friend_list_changed", userdata, callback.map(Hook::Unit));
    }

    unsafe fn group_get_list(
        &self,
        _handle: sys::AnyChatGroupHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupListCallback,
    ) -> c_int {
        let fire = self.list(callback);
        self.submit("group_get_list", Vec::new(), userdata, fire, None)
    }

    unsafe fn group_create(
        &self,
        _handle: sys::AnyChatGroupHandle,
        name: *const c_char,
        member_ids: *const *const c_char,
        member_count: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupCallback,
    ) -> c_int {
        let mut args = vec![unsafe { arg(name) }];
        args.extend(unsafe { string_array(member_ids, member_count) });
        self.submit("group_create", args, userdata, on_result(callback), None)
    }

    unsafe fn group_join(
        &self,
        _handle: sys::AnyChatGroupHandle,
        group_id: *const c_char,
        message: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(group_id), arg(message)] };
        self.submit("group_join", args, userdata, on_result(callback), None)
    }

    unsafe fn group_invite(
        &self,
        _handle: sys::AnyChatGroupHandle,
        group_id: *const c_char,
        user_ids: *const *const c_char,
        user_count: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupCallback,
    ) -> c_int {
        let mut args = vec![unsafe { arg(group_id) }];
        args.extend(unsafe { string_array(user_ids, user_count) });
        self.submit("group_invite", args, userdata, on_result(callback), None)
    }

    unsafe fn group_quit(
        &self,
        _handle: sys::AnyChatGroupHandle,
        group_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(group_id)] };
        self.submit("group_quit", args, userdata, on_result(callback), None)
    }

    unsafe fn group_update(
        &self,
        _handle: sys::AnyChatGroupHandle,
        group_id: *const c_char,
        name: *const c_char,
        avatar_url: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(group_id), arg(name), arg(avatar_url)] };
        self.submit("group_update", args, userdata, on_result(callback), None)
    }

    unsafe fn group_get_members(
        &self,
        _handle: sys::AnyChatGroupHandle,
        group_id: *const c_char,
        page: c_int,
        page_size: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupMemberCallback,
    ) -> c_int {
        let args = vec![unsafe { arg(group_id) }, page.to_string(), page_size.to_string()];
        let fire = self.list(callback);
        self.submit("group_get_members", args, userdata, fire, None)
    }

    unsafe fn group_set_invited_callback(
        &self,
        _handle: sys::AnyChatGroupHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupInvitedCallback,
    ) {
        self.set_hook("group_invited", userdata, callback.map(Hook::GroupInvited));
    }

    unsafe fn group_set_updated_callback(
        &self,
        _handle: sys::AnyChatGroupHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatGroupUpdatedCallback,
    ) {
        self.set_hook("group_updated", userdata, callback.map(Hook::Group));
    }

    unsafe fn user_get_profile(
        &self,
        _handle: sys::AnyChatUserHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatUserProfileCallback,
    ) -> c_int {
        self.submit("user_get_profile", Vec::new(), userdata, on_value(callback), None)
    }

    unsafe fn user_update_profile(
        &self,
        _handle: sys::AnyChatUserHandle,
        profile: *const sys::AnyChatUserProfile_C,
        userdata: *mut c_void,
        callback: sys::AnyChatUserProfileCallback,
    ) -> c_int {
        let profile = unsafe { &*profile };
        let args = vec![
            unsafe { arg(profile.nickname.as_ptr()) },
            profile.gender.to_string(),
        ];
        self.submit("user_update_profile", args, userdata, on_value(callback), None)
    }

    unsafe fn user_get_settings(
        &self,
        _handle: sys::AnyChatUserHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatUserSettingsCallback,
    ) -> c_int {
        self.submit("user_get_settings", Vec::new(), userdata, on_value(callback), None)
    }

    unsafe fn user_update_settings(
        &self,
        _handle: sys::AnyChatUserHandle,
        settings: *const sys::AnyChatUserSettings_C,
        userdata: *mut c_void,
        callback: sys::AnyChatUserSettingsCallback,
    ) -> c_int {
        let settings = unsafe { &*settings };
        let args = vec![
            unsafe { arg(settings.language.as_ptr()) },
            settings.notification_enabled.to_string(),
        ];
        self.submit("user_update_settings", args, userdata, on_value(callback), None)
    }

    unsafe fn user_update_push_token(
        &self,
        _handle: sys::AnyChatUserHandle,
        push_token: *const c_char,
        platform: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatUserResultCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(push_token), arg(platform)] };
        self.submit("user_update_push_token", args, userdata, on_result(callback), None)
    }

    unsafe fn user_search(
        &self,
        _handle: sys::AnyChatUserHandle,
        keyword: *const c_char,
        page: c_int,
        page_size: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatUserListCallback,
    ) -> c_int {
        let args = vec![unsafe { arg(keyword) }, page.to_string(), page_size.to_string()];
        let fire = self.list(callback);
        self.submit("user_search", args, userdata, fire, None)
    }

    unsafe fn user_get_info(
        &self,
        _handle: sys::AnyChatUserHandle,
        user_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatUserInfoCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(user_id)] };
        self.submit("user_get_info", args, userdata, on_value(callback), None)
    }

    unsafe fn file_upload(
        &self,
        _handle: sys::AnyChatFileHandle,
        local_path: *const c_char,
        file_type: *const c_char,
        userdata: *mut c_void,
        on_progress: sys::AnyChatUploadProgressCallback,
        on_done: sys::AnyChatFileInfoCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(local_path), arg(file_type)] };
        self.submit("file_upload", args, userdata, on_value(on_done), on_progress)
    }

    unsafe fn file_get_download_url(
        &self,
        _handle: sys::AnyChatFileHandle,
        file_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatDownloadUrlCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(file_id)] };
        self.submit("file_get_download_url", args, userdata, on_url(callback), None)
    }

    unsafe fn file_delete(
        &self,
        _handle: sys::AnyChatFileHandle,
        file_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatFileCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(file_id)] };
        self.submit("file_delete", args, userdata, on_result(callback), None)
    }

    unsafe fn rtc_initiate_call(
        &self,
        _handle: sys::AnyChatRtcHandle,
        callee_id: *const c_char,
        call_type: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatCallCallback,
    ) -> c_int {
        let args = vec![unsafe { arg(callee_id) }, call_type.to_string()];
        self.submit("rtc_initiate_call", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_join_call(
        &self,
        _handle: sys::AnyChatRtcHandle,
        call_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatCallCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(call_id)] };
        self.submit("rtc_join_call", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_reject_call(
        &self,
        _handle: sys::AnyChatRtcHandle,
        call_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatRtcResultCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(call_id)] };
        self.submit("rtc_reject_call", args, userdata, on_result(callback), None)
    }

    unsafe fn rtc_end_call(
        &self,
        _handle: sys::AnyChatRtcHandle,
        call_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatRtcResultCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(call_id)] };
        self.submit("rtc_end_call", args, userdata, on_result(callback), None)
    }

    unsafe fn rtc_get_call_session(
        &self,
        _handle: sys::AnyChatRtcHandle,
        call_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatCallCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(call_id)] };
        self.submit("rtc_get_call_session", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_get_call_logs(
        &self,
        _handle: sys::AnyChatRtcHandle,
        page: c_int,
        page_size: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatCallListCallback,
    ) -> c_int {
        let args = vec![page.to_string(), page_size.to_string()];
        let fire = self.list(callback);
        self.submit("rtc_get_call_logs", args, userdata, fire, None)
    }

    unsafe fn rtc_create_meeting(
        &self,
        _handle: sys::AnyChatRtcHandle,
        title: *const c_char,
        password: *const c_char,
        max_participants: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatMeetingCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(title), arg(password), max_participants.to_string()] };
        self.submit("rtc_create_meeting", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_join_meeting(
        &self,
        _handle: sys::AnyChatRtcHandle,
        room_id: *const c_char,
        password: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatMeetingCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(room_id), arg(password)] };
        self.submit("rtc_join_meeting", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_end_meeting(
        &self,
        _handle: sys::AnyChatRtcHandle,
        room_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatRtcResultCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(room_id)] };
        self.submit("rtc_end_meeting", args, userdata, on_result(callback), None)
    }

    unsafe fn rtc_get_meeting(
        &self,
        _handle: sys::AnyChatRtcHandle,
        room_id: *const c_char,
        userdata: *mut c_void,
        callback: sys::AnyChatMeetingCallback,
    ) -> c_int {
        let args = unsafe { vec![arg(room_id)] };
        self.submit("rtc_get_meeting", args, userdata, on_value(callback), None)
    }

    unsafe fn rtc_list_meetings(
        &self,
        _handle: sys::AnyChatRtcHandle,
        page: c_int,
        page_size: c_int,
        userdata: *mut c_void,
        callback: sys::AnyChatMeetingListCallback,
    ) -> c_int {
        let args = vec![page.to_string(), page_size.to_string()];
        let fire = self.list(callback);
        self.submit("rtc_list_meetings", args, userdata, fire, None)
    }

    unsafe fn rtc_set_incoming_call_callback(
        &self,
        _handle: sys::AnyChatRtcHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatIncomingCallCallback,
    ) {
        self.set_hook("incoming_call", userdata, callback.map(Hook::Call));
    }

    unsafe fn rtc_set_call_status_changed_callback(
        &self,
        _handle: sys::AnyChatRtcHandle,
        userdata: *mut c_void,
        callback: sys::AnyChatCallStatusChangedCallback,
    ) {
        self.set_hook("call_status_changed", userdata, callback.map(Hook::CallStatus));
    }
}

unsafe fn string_array(items: *const *const c_char, count: c_int) -> Vec<String> {
    let len = usize::try_from(count).unwrap_or(0);
    if items.is_null() || len == 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(items, len) }
        .iter()
        .map(|&p| unsafe { arg(p) })
        .collect()
}

/// A client backed by a fresh fake.
pub(crate) fn client() -> (crate::Client, Arc<FakeNative>) {
    let fake = FakeNative::new();
    let client = crate::Client::builder()
        .gateway_url("wss://gateway.example.com/ws")
        .api_base_url("https://api.example.com/api/v1")
        .device_id("device-1")
        .build_with(fake.as_native())
        .expect("fake client");
    (client, fake)
}
