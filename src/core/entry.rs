//! Entry records – the per-row backing data of the list.
//!
//! An [`Entry`] pairs an opaque catalog identity with classification flags
//! and the catalog-assigned channel number. Identities compare by value;
//! nothing in the model ever inspects their contents.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Per-entry classification flags, mirrored from the catalog.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EntryFlags: u32 {
        /// Non-playable section header.
        const MARKER = 1 << 0;
        /// Marker that still occupies a channel-number slot.
        const NUMBERED_MARKER = 1 << 1;
        /// Never shown to the widget, regardless of configuration.
        const INVISIBLE = 1 << 2;
        /// Folder-style entry that opens another list.
        const DIRECTORY = 1 << 3;
        /// Group reference resolved through a bouquet.
        const GROUP = 1 << 4;
    }
}

/// Opaque catalog identity of a service. Compared by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceRef(String);

impl ServiceRef {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row's backing data.
///
/// The channel number stays attached to the list position during reorders
/// while the identity travels; see the swap logic in [`crate::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub service: ServiceRef,
    pub flags: EntryFlags,
    pub channel: u32,
}

impl Entry {
    pub fn new(service: ServiceRef, flags: EntryFlags, channel: u32) -> Self {
        Self {
            service,
            flags,
            channel,
        }
    }

    /// Playable means neither a directory nor a marker.
    pub fn is_playable(&self) -> bool {
        !self
            .flags
            .intersects(EntryFlags::DIRECTORY | EntryFlags::MARKER)
    }
}
