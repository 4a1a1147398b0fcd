//! Open/closed state for a collapsible region.
//!
//! Independent of color derivation. The component that renders a region
//! owns one [`Panel`]; outside signals reach it as [`PanelCommand`]s.

/// Whether a panel is showing its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// An external request to change a panel's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelCommand {
    Open,
    Close,
    Toggle,
}

/// A collapsible panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    pub state: PanelState,
    /// Keep the body's content alive while closed.
    pub keep_alive: bool,
}

impl Panel {
    #[must_use]
    pub const fn new(state: PanelState) -> Self {
        Self { state, keep_alive: false }
    }

    /// Builder: retain content while closed.
    #[must_use]
    pub const fn keep_alive(mut self, keep: bool) -> Self {
        self.keep_alive = keep;
        self
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, PanelState::Open)
    }

    /// Whether the body should stay mounted.
    #[must_use]
    pub const fn retains_content(&self) -> bool {
        self.is_open() || self.keep_alive
    }

    pub const fn open(&mut self) {
        self.state = PanelState::Open;
    }

    pub const fn close(&mut self) {
        self.state = PanelState::Closed;
    }

    pub const fn toggle(&mut self) {
        self.state = match self.state {
            PanelState::Open => PanelState::Closed,
            PanelState::Closed => PanelState::Open,
        };
    }

    /// Handle an external command. Returns `true` if the state changed.
    pub const fn apply(&mut self, command: PanelCommand) -> bool {
        let before = self.is_open();
        match command {
            PanelCommand::Open => self.open(),
            PanelCommand::Close => self.close(),
            PanelCommand::Toggle => self.toggle(),
        }
        before != self.is_open()
    }
}
