//! In-memory record of intents this process has attempted.
//!
//! An intent is marked before its ledger record is read. The mark is removed
//! only when settlement fails, which makes the intent eligible again on a
//! later discovery. Nothing here is persisted; a restart starts empty.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use solver_types::IntentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillState {
	/// Marked; fetch or settlement is in progress.
	InFlight,
	/// Settlement confirmed.
	Filled,
	/// Not fillable (closed on the ledger or expired); not retried.
	Closed,
	/// The ledger record could not be read; not retried.
	Unreadable,
}

#[derive(Debug, Default)]
pub struct FillTracker {
	states: DashMap<IntentId, FillState>,
}

impl FillTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks `id` as in flight. Returns `false` when it is already tracked.
	pub fn try_begin(&self, id: IntentId) -> bool {
		match self.states.entry(id) {
			Entry::Occupied(_) => false,
			Entry::Vacant(entry) => {
				entry.insert(FillState::InFlight);
				true
			}
		}
	}

	/// Records the terminal state of a tracked intent.
	pub fn finish(&self, id: IntentId, state: FillState) {
		if let Some(mut current) = self.states.get_mut(&id) {
			*current = state;
		}
	}

	/// Drops the mark so a later discovery of `id` is attempted again.
	pub fn release(&self, id: &IntentId) -> Option<FillState> {
		self.states.remove(id).map(|(_, state)| state)
	}

	pub fn state(&self, id: &IntentId) -> Option<FillState> {
		self.states.get(id).map(|state| *state)
	}

	pub fn contains(&self, id: &IntentId) -> bool {
		self.states.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
