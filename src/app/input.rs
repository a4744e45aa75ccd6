use winit::event::ElementState;

use crate::settings::KeyBindings;

/// The four logical movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl MovementKeys {
    /// Forward or backward is held.
    #[inline]
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward
    }

    /// Backward is held and forward is not.
    #[inline]
    #[must_use]
    pub fn is_backing_up(&self) -> bool {
        self.backward && !self.forward
    }

    #[must_use]
    pub fn get(&self, key: MovementKey) -> bool {
        match key {
            MovementKey::Forward => self.forward,
            MovementKey::Backward => self.backward,
            MovementKey::TurnLeft => self.turn_left,
            MovementKey::TurnRight => self.turn_right,
        }
    }

    pub fn set(&mut self, key: MovementKey, held: bool) {
        let slot = match key {
            MovementKey::Forward => &mut self.forward,
            MovementKey::Backward => &mut self.backward,
            MovementKey::TurnLeft => &mut self.turn_left,
            MovementKey::TurnRight => &mut self.turn_right,
        };
        *slot = held;
    }
}

/// Keyboard state as seen by the game each frame.
///
/// Mutated only by key events; everything else reads [`Input::keys`].
#[derive(Debug, Clone, Default)]
pub struct Input {
    bindings: KeyBindings,
    keys: MovementKeys,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys: MovementKeys::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn keys(&self) -> MovementKeys {
        self.keys
    }

    /// Maps a key identifier onto a movement key, ignoring case.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<MovementKey> {
        let key = key.to_lowercase();
        let matches = |binding: &str| binding.to_lowercase() == key;
        if matches(&self.bindings.forward) {
            Some(MovementKey::Forward)
        } else if matches(&self.bindings.backward) {
            Some(MovementKey::Backward)
        } else if matches(&self.bindings.turn_left) {
            Some(MovementKey::TurnLeft)
        } else if matches(&self.bindings.turn_right) {
            Some(MovementKey::TurnRight)
        } else {
            None
        }
    }

    /// Applies a key press or release. Unbound keys are ignored.
    /// Returns whether the key was a movement key.
    pub fn handle_key(&mut self, state: ElementState, key: &str) -> bool {
        let Some(movement) = self.resolve(key) else {
            return false;
        };
        self.keys.set(movement, state.is_pressed());
        true
    }

    pub fn press(&mut self, key: &str) -> bool {
        self.handle_key(ElementState::Pressed, key)
    }

    pub fn release(&mut self, key: &str) -> bool {
        self.handle_key(ElementState::Released, key)
    }
}
