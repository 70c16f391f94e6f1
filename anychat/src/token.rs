//! Correlation tokens: a generation-checked arena of pending operations and
//! subscription sinks.
//!
//! The native core only ever sees a [`TokenId`] packed into its `userdata`
//! pointer. A callback turns it back into an id and looks the slot up; a
//! stale generation (slot freed, possibly reused) never matches, so a late or
//! duplicate callback cannot reach another operation's state.

use std::ffi::c_void;
use std::fmt;
use std::ptr;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::pending::{Operation, Progress};
use crate::stream::SinkControl;

const HALF: u32 = usize::BITS / 2;
const MASK: usize = (1 << HALF) - 1;

/// Identity of one arena slot at one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TokenId {
    index: usize,
    generation: usize,
}

impl TokenId {
    /// Pack into the opaque `userdata` value handed to the native core.
    ///
    /// Generations start at 1, so a packed id is never null.
    pub(crate) fn into_userdata(self) -> *mut c_void {
        ptr::without_provenance_mut((self.generation << HALF) | self.index)
    }

    /// Unpack a `userdata` value received in a callback.
    pub(crate) fn from_userdata(userdata: *mut c_void) -> Self {
        let bits = userdata.addr();
        Self {
            index: bits & MASK,
            generation: bits >> HALF,
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// What a token correlates to.
pub(crate) enum Entry {
    /// A one-shot operation, consumed by its first callback.
    Operation(Operation),
    /// A subscription sink, removed on cancel or teardown.
    Subscription(Arc<dyn SinkControl>),
}

struct Slot {
    generation: usize,
    owner: u64,
    entry: Option<Entry>,
}

struct Arena {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Arena {
    const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    fn slot_mut(&mut self, id: TokenId) -> Option<&mut Slot> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation && slot.entry.is_some())
    }

    fn release(&mut self, index: usize) -> Option<Entry> {
        let slot = &mut self.slots[index];
        let entry = slot.entry.take()?;
        slot.generation = if slot.generation >= MASK {
            1
        } else {
            slot.generation + 1
        };
        self.free.push(index);
        Some(entry)
    }
}

static ARENA: Mutex<Arena> = parking_lot::const_mutex(Arena::new());

/// Register `entry` on behalf of handle owner `owner`.
pub(crate) fn insert(owner: u64, entry: Entry) -> Result<TokenId> {
    let mut arena = ARENA.lock();
    let index = if let Some(index) = arena.free.pop() {
        index
    } else {
        let index = arena.slots.len();
        if index > MASK {
            return Err(Error::InvalidState("correlation token arena exhausted".into()));
        }
        arena.slots.push(Slot {
            generation: 1,
            owner,
            entry: None,
        });
        index
    };
    let slot = &mut arena.slots[index];
    slot.owner = owner;
    slot.entry = Some(entry);
    Ok(TokenId {
        index,
        generation: slot.generation,
    })
}

/// Remove and return the operation behind `id`.
///
/// `None` if the id is stale or already consumed, or names a subscription.
/// This is the single transition out of `Pending`: whoever takes the
/// operation owns its resolution.
pub(crate) fn take_operation(id: TokenId) -> Option<Operation> {
    let mut arena = ARENA.lock();
    let slot = arena.slot_mut(id)?;
    if !matches!(slot.entry, Some(Entry::Operation(_))) {
        return None;
    }
    match arena.release(id.index) {
        Some(Entry::Operation(op)) => Some(op),
        _ => None,
    }
}

/// The progress listener of a still-pending operation.
pub(crate) fn operation_progress(id: TokenId) -> Option<Progress> {
    let mut arena = ARENA.lock();
    match &arena.slot_mut(id)?.entry {
        Some(Entry::Operation(op)) => op.progress(),
        _ => None,
    }
}

/// The sink behind a live subscription token.
pub(crate) fn subscription(id: TokenId) -> Option<Arc<dyn SinkControl>> {
    let mut arena = ARENA.lock();
    match &arena.slot_mut(id)?.entry {
        Some(Entry::Subscription(sink)) => Some(Arc::clone(sink)),
        _ => None,
    }
}

/// Remove whatever `id` refers to.
pub(crate) fn remove(id: TokenId) -> Option<Entry> {
    let mut arena = ARENA.lock();
    arena.slot_mut(id)?;
    arena.release(id.index)
}

/// Remove every entry registered by `owner`.
pub(crate) fn drain_owner(owner: u64) -> Vec<Entry> {
    let mut arena = ARENA.lock();
    let indices: Vec<usize> = arena
        .slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.owner == owner && slot.entry.is_some())
        .map(|(index, _)| index)
        .collect();
    indices
        .into_iter()
        .filter_map(|index| arena.release(index))
        .collect()
}

/// Number of live tokens registered by `owner`.
pub(crate) fn outstanding(owner: u64) -> usize {
    ARENA
        .lock()
        .slots
        .iter()
        .filter(|slot| slot.owner == owner && slot.entry.is_some())
        .count()
}
