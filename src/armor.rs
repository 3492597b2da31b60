//! # Six-Bit Armoring
//!
//! AIS payloads (and the TTD track data) travel inside NMEA sentences as printable
//! characters, each one carrying six bits. This module turns such a string back into
//! a bitstream and reads fixed-width fields out of it.

use bitvec::prelude::*;

/// Decodes one armored character into its 6-bit value.
///
/// Characters up to `W` (87) map to `code - 48`, later ones to `code - 56`.
///
/// ```rust
/// use nmea0183_decoder::armor::sixbit_value;
///
/// assert_eq!(sixbit_value('0'), 0);
/// assert_eq!(sixbit_value('W'), 39);
/// assert_eq!(sixbit_value('`'), 40);
/// assert_eq!(sixbit_value('w'), 63);
/// ```
pub fn sixbit_value(c: char) -> u8 {
    let code = u32::from(c);
    let value = if code <= 87 {
        code.wrapping_sub(48)
    } else {
        code.wrapping_sub(56)
    };
    (value & 0x3F) as u8
}

/// Writes the low six bits of `value` into `bits` at `offset`, most significant bit first.
///
/// Writes that would run past the end of `bits` are dropped.
pub fn write_sixbit(bits: &mut BitSlice<u8, Msb0>, offset: usize, value: u8) {
    if let Some(slot) = bits.get_mut(offset..offset + 6) {
        slot.store_be(value & 0x3F);
    }
}

/// Converts an armored payload into its bitstream, six bits per character.
pub fn unarmor(payload: &str) -> BitVec<u8, Msb0> {
    let mut bits = bitvec![u8, Msb0; 0; payload.chars().count() * 6];
    for (index, c) in payload.chars().enumerate() {
        write_sixbit(&mut bits, index * 6, sixbit_value(c));
    }
    bits
}

/// Reads fixed-width fields out of an unarmored bitstream.
///
/// Bits past the end of the stream read as zero, so a field that straddles the end
/// of a short payload keeps its leading bits.
#[derive(Debug, Clone, Copy)]
pub struct Bits<'a> {
    bits: &'a BitSlice<u8, Msb0>,
}

impl<'a> Bits<'a> {
    /// Wraps a bitstream.
    pub fn new(bits: &'a BitSlice<u8, Msb0>) -> Self {
        Bits { bits }
    }

    /// Total number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the stream holds no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads `size` bits (at most 64) starting at `start` as an unsigned integer,
    /// most significant bit first.
    pub fn unsigned(&self, start: usize, size: usize) -> u64 {
        if size == 0 || size > 64 {
            return 0;
        }

        let end = (start + size).min(self.bits.len());
        match self.bits.get(start..end) {
            Some(field) if !field.is_empty() => {
                field.load_be::<u64>() << (size - field.len())
            }
            _ => 0,
        }
    }

    /// Reads `size` bits starting at `start` as a two's complement signed integer.
    pub fn signed(&self, start: usize, size: usize) -> i64 {
        let raw = self.unsigned(start, size);
        if (1..64).contains(&size) && raw & (1 << (size - 1)) != 0 {
            raw as i64 - (1_i64 << size)
        } else {
            raw as i64
        }
    }

    /// Reads a single bit.
    pub fn flag(&self, start: usize) -> bool {
        self.unsigned(start, 1) == 1
    }

    /// Reads `size / 6` packed six-bit characters starting at `start`.
    ///
    /// Codes below 32 map to `@` and the upper-case letters, the rest map to
    /// themselves. Trailing spaces and `@` padding are removed.
    pub fn string(&self, start: usize, size: usize) -> String {
        let text: String = (0..size / 6)
            .map(|index| self.unsigned(start + index * 6, 6) as u8)
            .map(|code| if code < 32 { b'@' + code } else { code })
            .map(char::from)
            .collect();

        text.trim_end_matches([' ', '@']).to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixbit_value() {
        let cases = [
            ('0', 0),
            ('9', 9),
            ('@', 16),
            ('W', 39),
            ('`', 40),
            ('a', 41),
            ('w', 63),
        ];

        for (input, expected) in cases {
            let result = sixbit_value(input);
            assert_eq!(result, expected, "Failed: {input:?}\n\t{result:?}");
        }
    }

    #[test]
    fn test_write_sixbit() {
        let mut bits = bitvec![u8, Msb0; 0; 12];
        write_sixbit(&mut bits, 3, 0b101101);
        assert_eq!(bits, bitvec![u8, Msb0; 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0]);

        // Out of range writes are dropped.
        write_sixbit(&mut bits, 9, 0b111111);
        assert_eq!(bits, bitvec![u8, Msb0; 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_unarmor() {
        let bits = unarmor("1w");
        assert_eq!(bits.len(), 12);
        assert_eq!(bits, bitvec![u8, Msb0; 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1]);
        assert!(unarmor("").is_empty());
    }

    #[test]
    fn test_unsigned() {
        let payload = unarmor("1w");
        let bits = Bits::new(&payload);

        assert_eq!(bits.unsigned(0, 6), 1);
        assert_eq!(bits.unsigned(6, 6), 63);
        assert_eq!(bits.unsigned(4, 4), 0b0111);
        assert_eq!(bits.unsigned(0, 12), 0b000001_111111);
        // Zero padded past the end.
        assert_eq!(bits.unsigned(10, 4), 0b1100);
        assert_eq!(bits.unsigned(12, 6), 0);
        assert_eq!(bits.unsigned(0, 0), 0);
        assert_eq!(bits.unsigned(0, 65), 0);
        assert!(bits.flag(6));
        assert!(!bits.flag(0));
    }

    #[test]
    fn test_signed() {
        let payload = unarmor("w0");
        let bits = Bits::new(&payload);

        assert_eq!(bits.signed(0, 6), -1);
        assert_eq!(bits.signed(0, 8), -4);
        assert_eq!(bits.signed(6, 6), 0);
        assert_eq!(bits.signed(1, 5), -1);
        assert_eq!(bits.signed(0, 12), -64);

        let payload = unarmor("7w");
        let bits = Bits::new(&payload);
        assert_eq!(bits.signed(0, 6), 7);
    }

    #[test]
    fn test_string() {
        // "HI" followed by a space and an '@' padding character.
        let payload: String = [8u8, 9, 32, 0]
            .iter()
            .map(|&value| char::from(if value < 40 { value + 48 } else { value + 56 }))
            .collect();
        let bits = unarmor(&payload);
        let bits = Bits::new(&bits);

        assert_eq!(bits.string(0, 24), "HI");
        assert_eq!(bits.string(0, 6), "H");
        assert_eq!(bits.string(0, 0), "");
        assert_eq!(bits.string(12, 12), "");
    }
}
