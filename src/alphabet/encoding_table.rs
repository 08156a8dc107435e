use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// A static HashMap mapping an index (0 to 25) to its corresponding
    /// uppercase Latin letter (A-Z).
    pub static ref INDEX_TO_LETTER_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();
        let letters: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().collect();

        for (i, &ch) in letters.iter().enumerate() {
            map.insert(i as u8, ch);
        }

        map
    };

    /// A static HashMap mapping an uppercase Latin letter (A-Z) to its
    /// corresponding index (0 to 25).
    pub static ref LETTER_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_LETTER_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}
