//! Recording registry boundary – which services are being recorded now.

use bitflags::bitflags;

use crate::core::entry::ServiceRef;

bitflags! {
    /// Kinds of active recording sessions the registry distinguishes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RecordKinds: u8 {
        const REAL = 1 << 0;
        const STREAMING = 1 << 1;
        const PSEUDO = 1 << 2;
        const UNKNOWN = 1 << 3;
    }
}

/// External registry of running recordings, plus group resolution.
pub trait RecordingRegistry {
    /// Identities with an active session of any of the given kinds.
    fn active_recordings(&self, kinds: RecordKinds) -> Vec<ServiceRef>;

    /// Member identities of a group reference; empty when unresolvable.
    fn bouquet_members(&self, group: &ServiceRef) -> Vec<ServiceRef>;
}
