//! Classification of stable-pressed inputs into modifiers and regular
//! keys, with the boot protocol's 6-key limit applied.

use heapless::Vec;

use crate::config::{INPUTS, INPUT_KEYCODES};
use crate::debounce::KeyState;
use crate::keymap::KeycodeTable;

/// A pressed input together with the keycode it is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveKey {
    pub input: u8,
    pub keycode: u8,
}

/// The pressed inputs of one cycle, partitioned and in input-index order.
///
/// Rebuilt from scratch every cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveKeySet {
    /// Every pressed modifier input. Modifiers never take a report slot.
    pub modifiers: Vec<ActiveKey, INPUTS>,
    /// The first six pressed regular inputs.
    pub regular: Vec<ActiveKey, INPUT_KEYCODES>,
    /// Regular inputs pressed beyond the sixth. Held but not reported.
    pub dropped: Vec<ActiveKey, INPUTS>,
}

impl ActiveKeySet {
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.regular.is_empty() && self.dropped.is_empty()
    }

    pub fn overflowed(&self) -> bool {
        !self.dropped.is_empty()
    }
}

/// Stateless classifier over a keycode table.
pub struct KeyStateTracker<'t> {
    table: &'t KeycodeTable,
}

impl<'t> KeyStateTracker<'t> {
    pub const fn new(table: &'t KeycodeTable) -> Self {
        Self { table }
    }

    /// Build the active set from the stable state of every input.
    ///
    /// Regular keys are taken in input-index order and the first six win;
    /// anything after that lands in `dropped` for as long as it is held.
    /// Unassigned inputs are ignored.
    pub fn update(&self, stable: &[KeyState; INPUTS]) -> ActiveKeySet {
        let mut set = ActiveKeySet::default();

        for (i, (entry, state)) in self.table.entries().iter().zip(stable).enumerate() {
            if !state.is_pressed() || !entry.is_assigned() {
                continue;
            }

            let key = ActiveKey {
                input: i as u8,
                keycode: entry.keycode,
            };

            // Neither list can outgrow INPUTS, so pushes only fail for
            // `regular` at capacity.
            if entry.is_modifier() {
                let _ = set.modifiers.push(key);
            } else if let Err(key) = set.regular.push(key) {
                let _ = set.dropped.push(key);
            }
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::usage::*;
    use crate::keymap::{KeycodeEntry, DEFAULT_KEYMAP};

    fn pressed(indices: &[usize]) -> [KeyState; INPUTS] {
        let mut states = [KeyState::Released; INPUTS];
        for &i in indices {
            states[i] = KeyState::Pressed;
        }
        states
    }

    fn inputs(keys: &[ActiveKey]) -> std::vec::Vec<u8> {
        keys.iter().map(|k| k.input).collect()
    }

    static LETTERS: KeycodeTable = KeycodeTable::new([
        KeycodeEntry::new(0x04, "A"),
        KeycodeEntry::new(0x05, "B"),
        KeycodeEntry::new(0x06, "C"),
        KeycodeEntry::new(0x07, "D"),
        KeycodeEntry::new(0x08, "E"),
        KeycodeEntry::new(0x09, "F"),
        KeycodeEntry::new(0x0A, "G"),
        KeycodeEntry::new(0x0B, "H"),
        KeycodeEntry::new(0x0C, "I"),
        KeycodeEntry::new(0x0D, "J"),
        KeycodeEntry::new(KEY_LEFT_CTRL, "LCtrl"),
        KeycodeEntry::unassigned(),
    ]);

    #[test]
    fn nothing_pressed() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[]));
        assert!(set.is_empty());
        assert!(!set.overflowed());
    }

    #[test]
    fn regular_keys_in_index_order() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[5, 0, 3]));
        assert_eq!(inputs(&set.regular), [0, 3, 5]);
        assert_eq!(set.regular[1].keycode, 0x07);
        assert!(set.modifiers.is_empty());
    }

    #[test]
    fn modifiers_partitioned_out() {
        let tracker = KeyStateTracker::new(&DEFAULT_KEYMAP);
        let set = tracker.update(&pressed(&[0, 3, 7]));
        assert_eq!(inputs(&set.regular), [0]);
        assert_eq!(inputs(&set.modifiers), [3, 7]);
        assert_eq!(set.modifiers[0].keycode, KEY_LEFT_SHIFT);
    }

    #[test]
    fn seventh_regular_key_dropped() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[0, 1, 2, 3, 4, 5, 6]));
        assert_eq!(inputs(&set.regular), [0, 1, 2, 3, 4, 5]);
        assert_eq!(inputs(&set.dropped), [6]);
        assert!(set.overflowed());
    }

    #[test]
    fn lowest_indices_win_regardless_of_count() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[9, 8, 7, 6, 5, 4, 3, 2, 1]));
        assert_eq!(inputs(&set.regular), [1, 2, 3, 4, 5, 6]);
        assert_eq!(inputs(&set.dropped), [7, 8, 9]);
    }

    #[test]
    fn modifier_does_not_consume_a_slot() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[0, 1, 2, 3, 4, 5, 10]));
        assert_eq!(set.regular.len(), 6);
        assert_eq!(inputs(&set.modifiers), [10]);
        assert!(!set.overflowed());
    }

    #[test]
    fn unassigned_input_ignored() {
        let tracker = KeyStateTracker::new(&LETTERS);
        let set = tracker.update(&pressed(&[11]));
        assert!(set.is_empty());
    }
}
