//! Change notifications for a [`SessionController`](crate::controllers::SessionController).
//!
//! Each event carries a set of [`EventKind`] flags. Subscribers pass a filter
//! and receive an event when the two share at least one flag.

use crate::data::session::Target;

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing what a session change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    /// A scatter point or path vertex was added.
    pub const POINT_ADDED: Self = Self(1 << 0);
    /// The last point of a target was removed.
    pub const UNDO: Self = Self(1 << 1);
    /// A target was emptied.
    pub const RESET: Self = Self(1 << 2);
    /// Vertex scores changed (explicit run or live re-scoring after an edit).
    pub const SCORED: Self = Self(1 << 3);
    /// All vertices went back to `Unset`.
    pub const COLORS_RESET: Self = Self(1 << 4);
    /// The active write target changed.
    pub const TARGET_CHANGED: Self = Self(1 << 5);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u32::MAX);

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }
        let pairs: &[(EventKind, &str)] = &[
            (EventKind::POINT_ADDED, "POINT_ADDED"),
            (EventKind::UNDO, "UNDO"),
            (EventKind::RESET, "RESET"),
            (EventKind::SCORED, "SCORED"),
            (EventKind::COLORS_RESET, "COLORS_RESET"),
            (EventKind::TARGET_CHANGED, "TARGET_CHANGED"),
        ];
        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{extra:x}"));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SessionEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A change applied through the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub kinds: EventKind,
    /// The target that was edited, when the change concerns one.
    pub target: Option<Target>,
    /// Number of scatter points after the change.
    pub scatter_count: usize,
}

impl SessionEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            target: None,
            scatter_count: 0,
        }
    }

    pub fn matches(&self, filter: EventKind) -> bool {
        self.kinds.intersects(filter)
    }
}
