use num_integer::gcd;
use std::collections::HashMap;

/// Sentinel in the dense reverse-lookup table for "not a valid symbol".
const INVALID: u16 = u16::MAX;

/// A fixed, power-of-two-sized ordered set of symbols with derived
/// bit-packing constants.
///
/// The alphabet length determines how many bits each symbol carries
/// (`bits_per_char = log2(len)`) and, from that, the chunk geometry at
/// which packed symbols align to whole bytes: `chars_per_chunk`
/// characters always encode exactly `bytes_per_chunk` bytes.
///
/// Reverse lookup uses a dense table for pure-ASCII alphabets and falls
/// back to a `HashMap` for wider code spaces.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    bits_per_char: usize,
    chars_per_chunk: usize,
    bytes_per_chunk: usize,
    mask: u64,
    ascii_table: Option<Vec<u16>>,
    char_to_index: HashMap<char, usize>,
}

impl Alphabet {
    /// Creates an alphabet from an ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the symbol count is not a power of two in
    /// `2..=256`, or if any symbol appears twice.
    pub fn new(chars: Vec<char>) -> Result<Self, String> {
        let len = chars.len();
        if !len.is_power_of_two() || len < 2 {
            return Err(format!(
                "alphabet size must be a power of two >= 2, got {}",
                len
            ));
        }
        if len > 256 {
            return Err(format!(
                "alphabet size must not exceed 256 (8 bits per symbol), got {}",
                len
            ));
        }

        let mut char_to_index = HashMap::with_capacity(len);
        for (i, &c) in chars.iter().enumerate() {
            if char_to_index.insert(c, i).is_some() {
                return Err(format!("duplicate symbol in alphabet: {}", c));
            }
        }

        // Dense table only when every symbol is ASCII; large code spaces
        // stay on the HashMap.
        let ascii_table = if chars.iter().all(|c| c.is_ascii()) {
            let mut table = vec![INVALID; 128];
            for (i, &c) in chars.iter().enumerate() {
                table[c as usize] = i as u16;
            }
            Some(table)
        } else {
            None
        };

        let bits_per_char = len.trailing_zeros() as usize;
        let g = gcd(bits_per_char, 8);
        Ok(Alphabet {
            chars,
            bits_per_char,
            chars_per_chunk: 8 / g,
            bytes_per_chunk: bits_per_char / g,
            mask: (len - 1) as u64,
            ascii_table,
            char_to_index,
        })
    }

    /// Creates an alphabet from a string of symbols.
    pub fn from_symbols(s: &str) -> Result<Self, String> {
        Self::new(s.chars().collect())
    }

    /// Returns the number of symbols (the base) of the alphabet.
    pub fn base(&self) -> usize {
        self.chars.len()
    }

    /// Bits carried by a single symbol.
    pub fn bits_per_char(&self) -> usize {
        self.bits_per_char
    }

    /// Symbols per byte-aligned chunk.
    ///
    /// `chars_per_chunk * bits_per_char` is the smallest multiple of 8
    /// achievable for this alphabet, so chunk boundaries are always
    /// byte-aligned.
    pub fn chars_per_chunk(&self) -> usize {
        self.chars_per_chunk
    }

    /// Bytes per byte-aligned chunk.
    pub fn bytes_per_chunk(&self) -> usize {
        self.bytes_per_chunk
    }

    /// Bit mask selecting one symbol's worth of bits.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Returns the symbol for a digit value, or `None` if out of range.
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.chars.get(digit).copied()
    }

    /// Reverse lookup: symbol to digit value, `None` if not in the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        match &self.ascii_table {
            Some(table) if c.is_ascii() => {
                let v = table[c as usize];
                (v != INVALID).then_some(v as usize)
            }
            Some(_) => None,
            None => self.char_to_index.get(&c).copied(),
        }
    }

    /// All symbols in order, for error hints and preset listings.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_chunk_geometry() {
        let a = Alphabet::from_symbols(
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
        )
        .unwrap();
        assert_eq!(a.base(), 64);
        assert_eq!(a.bits_per_char(), 6);
        assert_eq!(a.chars_per_chunk(), 4);
        assert_eq!(a.bytes_per_chunk(), 3);
        assert_eq!(a.mask(), 63);
    }

    #[test]
    fn test_base32_chunk_geometry() {
        let a = Alphabet::from_symbols("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567").unwrap();
        assert_eq!(a.bits_per_char(), 5);
        assert_eq!(a.chars_per_chunk(), 8);
        assert_eq!(a.bytes_per_chunk(), 5);
    }

    #[test]
    fn test_base16_chunk_geometry() {
        let a = Alphabet::from_symbols("0123456789ABCDEF").unwrap();
        assert_eq!(a.bits_per_char(), 4);
        assert_eq!(a.chars_per_chunk(), 2);
        assert_eq!(a.bytes_per_chunk(), 1);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert!(Alphabet::from_symbols("0123456789").is_err());
        assert!(Alphabet::from_symbols("0").is_err());
        assert!(Alphabet::from_symbols("").is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(Alphabet::from_symbols("00").is_err());
    }

    #[test]
    fn test_reverse_lookup() {
        let a = Alphabet::from_symbols("0123456789ABCDEF").unwrap();
        assert_eq!(a.index_of('0'), Some(0));
        assert_eq!(a.index_of('F'), Some(15));
        assert_eq!(a.index_of('f'), None);
        assert_eq!(a.index_of('ß'), None);
    }

    #[test]
    fn test_non_ascii_alphabet_uses_hashmap() {
        let a = Alphabet::from_symbols("αβγδ").unwrap();
        assert!(a.ascii_table.is_none());
        assert_eq!(a.index_of('γ'), Some(2));
        assert_eq!(a.index_of('x'), None);
    }
}
