//! Row status assembly – the (identity, bitmask) pair handed to the
//! renderer for the cursored row.

use bitflags::bitflags;

use crate::core::entry::{Entry, EntryFlags, ServiceRef};
use crate::recordings::RecordKinds;

use super::ServiceList;

bitflags! {
    /// Render-facing status bits for one row.
    ///
    /// The layout is a stable contract; renderers depend on it bit for bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RowStatus: u8 {
        const SELECTED = 1 << 0;
        const MARKED = 1 << 1;
        const IS_MARKER = 1 << 2;
        const PLAYABLE = 1 << 3;
        const RECORDED = 1 << 4;
        const STREAMED = 1 << 5;
        const PSEUDO_RECORDED = 1 << 6;
    }
}

/// Boundary value handed to the renderer for the cursored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowArgs {
    pub service: ServiceRef,
    pub status: RowStatus,
}

impl ServiceList {
    /// Mark state of the cursored row: either grabbed while selected, or
    /// a member of the multi-select set.
    pub fn current_row_marked(&self, selected: bool) -> bool {
        (self.is_current_marked() && selected)
            || self
                .current()
                .is_some_and(|entry| self.is_marked(&entry.service))
    }

    /// Assemble the render arguments for the cursored row, `None` while
    /// the cursor is invalid.
    pub fn row_args(&self, selected: bool) -> Option<RowArgs> {
        let entry = self.current()?;
        let playable = entry.is_playable();
        let indicators = self.record_indicator_mode > 0 && playable;

        let mut status = RowStatus::empty();
        status.set(RowStatus::SELECTED, selected);
        status.set(RowStatus::MARKED, self.current_row_marked(selected));
        status.set(RowStatus::IS_MARKER, entry.flags.contains(EntryFlags::MARKER));
        status.set(RowStatus::PLAYABLE, playable);
        status.set(
            RowStatus::RECORDED,
            indicators && self.is_recorded(entry, RecordKinds::REAL | RecordKinds::UNKNOWN),
        );
        status.set(
            RowStatus::STREAMED,
            indicators && self.is_recorded(entry, RecordKinds::STREAMING),
        );
        status.set(
            RowStatus::PSEUDO_RECORDED,
            indicators && self.is_recorded(entry, RecordKinds::PSEUDO),
        );

        Some(RowArgs {
            service: entry.service.clone(),
            status,
        })
    }

    /// Whether `entry` has an active recording of any of the given kinds,
    /// resolving group references through their bouquet.
    fn is_recorded(&self, entry: &Entry, kinds: RecordKinds) -> bool {
        let active = self.recordings.active_recordings(kinds);
        if active.is_empty() {
            return false;
        }
        if entry.flags.contains(EntryFlags::GROUP) {
            let members = self.recordings.bouquet_members(&entry.service);
            active.iter().any(|recorded| members.contains(recorded))
        } else {
            active.iter().any(|recorded| *recorded == entry.service)
        }
    }
}
