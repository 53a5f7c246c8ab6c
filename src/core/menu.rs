//! Mobile menu state machine

/// Open/closed state of the mobile navigation panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that can move the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button was clicked
    TriggerClick,
    /// A link inside the mobile panel was clicked
    LinkClick,
    /// A click landed outside both the trigger and the panel
    OutsideClick,
    /// Escape was pressed anywhere on the page
    Escape,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`. Only the trigger toggles; everything else closes.
    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::TriggerClick => match self {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            },
            MenuEvent::LinkClick | MenuEvent::OutsideClick | MenuEvent::Escape => MenuState::Closed,
        }
    }
}

impl MenuEvent {
    /// Classify a document-level click. Clicks on the trigger or inside the
    /// panel are left to their own handlers.
    pub fn from_document_click(in_trigger: bool, in_panel: bool) -> Option<Self> {
        (!in_trigger && !in_panel).then_some(MenuEvent::OutsideClick)
    }

    /// Classify a document-level key press by its `KeyboardEvent.key`
    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(MenuEvent::Escape)
    }
}
