//! Logical buttons and a compact set of them.

/// The six buttons the game reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    X,
    Z,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::X,
        Button::Z,
    ];

    /// Position of this button in [`Button::ALL`]
    pub fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::X => 4,
            Button::Z => 5,
        }
    }

    fn bit(self) -> u8 {
        1 << self.index()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::X => "x",
            Button::Z => "z",
        }
    }
}

/// Set of buttons packed into one byte, like a gamepad register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);

    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn remove(&mut self, button: Button) {
        self.0 &= !button.bit();
    }

    pub fn with(mut self, button: Button) -> Self {
        self.insert(button);
        self
    }

    pub fn union(self, other: Buttons) -> Self {
        Buttons(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons down now that were up in `previous`.
    pub fn pressed_since(self, previous: Buttons) -> Self {
        Buttons(self.0 & (self.0 ^ previous.0))
    }

    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |&b| self.contains(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_all_order() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn pressed_since_keeps_only_new_buttons() {
        let previous = Buttons::NONE.with(Button::Left).with(Button::X);
        let now = Buttons::NONE.with(Button::Left).with(Button::Z);
        let pressed = now.pressed_since(previous);
        assert!(pressed.contains(Button::Z));
        assert!(!pressed.contains(Button::Left));
        assert!(!pressed.contains(Button::X));
    }

    #[test]
    fn iter_yields_members_in_order() {
        let set = Buttons::NONE.with(Button::Z).with(Button::Up);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Button::Up, Button::Z]);
    }
}
