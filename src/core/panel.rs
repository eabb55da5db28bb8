//! # Profile Panel State
//!
//! Two states, two requests. Opening an open panel and closing a closed
//! one are no-ops.
//!
//! ```text
//!            open request
//!   Closed ───────────────► Open
//!     ▲                       │
//!     └───────────────────────┘
//!     close request (close button, Esc, overlay click)
//! ```

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    /// Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        let changed = *self == PanelState::Closed;
        if changed {
            debug!("Profile panel opened");
        }
        *self = PanelState::Open;
        changed
    }

    /// Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        let changed = *self == PanelState::Open;
        if changed {
            debug!("Profile panel closed");
        }
        *self = PanelState::Closed;
        changed
    }
}

/// Entries listed inside the profile panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEntry {
    Profile,
    MyOrders,
    Settings,
    LogOut,
}

impl ProfileEntry {
    pub const ALL: [ProfileEntry; 4] = [
        ProfileEntry::Profile,
        ProfileEntry::MyOrders,
        ProfileEntry::Settings,
        ProfileEntry::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileEntry::Profile => "Profile",
            ProfileEntry::MyOrders => "My Orders",
            ProfileEntry::Settings => "Settings",
            ProfileEntry::LogOut => "Log Out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed() {
        assert_eq!(PanelState::default(), PanelState::Closed);
        assert!(!PanelState::default().is_open());
    }

    #[test]
    fn test_open_then_close() {
        let mut panel = PanelState::default();
        assert!(panel.open());
        assert!(panel.is_open());
        assert!(panel.close());
        assert!(!panel.is_open());
    }

    #[test]
    fn test_repeated_requests_are_idempotent() {
        let mut panel = PanelState::default();
        assert!(!panel.close());
        assert_eq!(panel, PanelState::Closed);

        panel.open();
        assert!(!panel.open());
        assert_eq!(panel, PanelState::Open);
    }

    #[test]
    fn test_entry_labels_in_order() {
        let labels: Vec<&str> = ProfileEntry::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Profile", "My Orders", "Settings", "Log Out"]);
    }
}
