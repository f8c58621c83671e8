//! Game action definitions

/// Everything a player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (cursor keys / WASD / left stick / d-pad)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Menus
    Confirm,        // Enter / Space / A
    Cancel,         // Escape / B

    // Development
    ToggleDebug,    // F3 / Select
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Confirm,
        Action::Cancel,
        Action::ToggleDebug,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Small set of actions (one bit each)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u16);

impl ActionSet {
    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::default();
        for action in iter {
            set.insert(action);
        }
        set
    }
}
