//! Action menu
//!
//! A single selectable list of the operations the simulator offers, with the
//! classic numeric shortcuts (1-5 for actions, 0 to quit) alongside arrow-key
//! navigation.

use crate::game::Action;

/// One selectable menu entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    /// Numeric shortcut shown next to the label
    pub shortcut: char,
    pub action: Action,
}

/// Menu state
#[derive(Debug, Clone)]
pub struct Menu {
    pub items: Vec<MenuItem>,
    pub selected: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self {
            selected: 0,
            items: vec![
                MenuItem {
                    label: "Play the front piece",
                    shortcut: '1',
                    action: Action::PlayPiece,
                },
                MenuItem {
                    label: "Send the front piece to the reserve",
                    shortcut: '2',
                    action: Action::SendToReserve,
                },
                MenuItem {
                    label: "Use a reserved piece",
                    shortcut: '3',
                    action: Action::UseReserved,
                },
                MenuItem {
                    label: "Swap queue front with reserve top",
                    shortcut: '4',
                    action: Action::SwapSingle,
                },
                MenuItem {
                    label: "Swap 3 front pieces with the full reserve",
                    shortcut: '5',
                    action: Action::SwapBulk,
                },
                MenuItem {
                    label: "Quit",
                    shortcut: '0',
                    action: Action::Quit,
                },
            ],
        }
    }

    pub fn move_up(&mut self) {
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Action of the currently selected item
    pub fn selected_action(&self) -> Action {
        self.items[self.selected].action
    }

    /// Resolve a numeric shortcut to its action, if any
    pub fn shortcut_action(&self, key: char) -> Option<Action> {
        self.items
            .iter()
            .find(|item| item.shortcut == key)
            .map(|item| item.action)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}
