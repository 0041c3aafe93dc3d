//! Root keys and the store that selects them.

/// AES-128 key wrapper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

impl core::fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Which of the two root keys an encryption uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySlot {
    /// Key index 0.
    Primary,
    /// Any non-zero key index.
    Secondary,
}

impl KeySlot {
    /// Maps an integer key index to a slot: 0 is primary, anything else secondary.
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        if index == 0 {
            KeySlot::Primary
        } else {
            KeySlot::Secondary
        }
    }
}

impl From<u32> for KeySlot {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

/// Source of root keys for the cipher.
pub trait KeyStore {
    /// Returns the root key held in `slot`.
    fn root_key(&self, slot: KeySlot) -> Aes128Key;
}

impl<S: KeyStore + ?Sized> KeyStore for &S {
    fn root_key(&self, slot: KeySlot) -> Aes128Key {
        (**self).root_key(slot)
    }
}

/// A pair of fixed root keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticKeys {
    primary: Aes128Key,
    secondary: Aes128Key,
}

impl StaticKeys {
    /// Builds a store from the two root keys.
    pub const fn new(primary: [u8; 16], secondary: [u8; 16]) -> Self {
        Self {
            primary: Aes128Key(primary),
            secondary: Aes128Key(secondary),
        }
    }

    /// A store that answers every slot with the same key.
    pub const fn single(key: [u8; 16]) -> Self {
        Self::new(key, key)
    }
}

impl KeyStore for StaticKeys {
    fn root_key(&self, slot: KeySlot) -> Aes128Key {
        match slot {
            KeySlot::Primary => self.primary,
            KeySlot::Secondary => self.secondary,
        }
    }
}

/// The two keys built into the reader firmware.
pub const COMPILED_KEYS: StaticKeys = StaticKeys::new(
    [
        0x71, 0x33, 0x62, 0x75, 0x5e, 0x74, 0x31, 0x6e, 0x71, 0x66, 0x5a, 0x28, 0x70, 0x66, 0x24,
        0x31,
    ],
    [
        0x48, 0x40, 0x43, 0x46, 0x6b, 0x52, 0x6e, 0x7a, 0x40, 0x4b, 0x41, 0x74, 0x42, 0x4a, 0x70,
        0x32,
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_index_is_primary() {
        assert_eq!(KeySlot::from_index(0), KeySlot::Primary);
        assert_eq!(KeySlot::from(1), KeySlot::Secondary);
        assert_eq!(KeySlot::from_index(2), KeySlot::Secondary);
        assert_eq!(KeySlot::from_index(u32::MAX), KeySlot::Secondary);
    }

    #[test]
    fn compiled_keys_are_distinct() {
        let primary = COMPILED_KEYS.root_key(KeySlot::Primary);
        let secondary = COMPILED_KEYS.root_key(KeySlot::Secondary);
        assert_ne!(primary, secondary);
        assert_eq!(&primary.0, b"q3bu^t1nqfZ(pf$1");
        assert_eq!(&secondary.0, b"H@CFkRnz@KAtBJp2");
    }

    #[test]
    fn single_store_answers_both_slots() {
        let store = StaticKeys::single([7u8; 16]);
        assert_eq!(store.root_key(KeySlot::Primary), Aes128Key([7u8; 16]));
        assert_eq!(store.root_key(KeySlot::Secondary), Aes128Key([7u8; 16]));
    }

    #[test]
    fn debug_does_not_print_key_bytes() {
        let rendered = format!("{:?}", COMPILED_KEYS.root_key(KeySlot::Primary));
        assert_eq!(rendered, "Aes128Key(..)");
    }
}
