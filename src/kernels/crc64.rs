//! Table-driven CRC-64 with a generator polynomial chosen at runtime.
//!
//! The polynomial is given in bit-reflected (LSB-first) form, the initial
//! register is all ones and the result is inverted. With the reflected
//! ECMA-182 polynomial this is CRC-64/XZ.

/// Reflected ECMA-182 polynomial (CRC-64/XZ).
pub const ECMA: u64 = 0xC96C_5795_D787_0F42;

/// Reflected ISO 3309 polynomial (CRC-64/GO-ISO).
pub const ISO: u64 = 0xD800_0000_0000_0000;

/// A 256-entry lookup table for one generator polynomial.
#[derive(Clone)]
pub struct Crc64Table {
    poly: u64,
    table: [u64; 256],
}

impl Crc64Table {
    /// Builds the table for `poly`.
    pub fn new(poly: u64) -> Self {
        let mut table = [0u64; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut crc = i as u64;
            for _ in 0..8 {
                crc = if crc & 1 == 1 { (crc >> 1) ^ poly } else { crc >> 1 };
            }
            *entry = crc;
        }
        Self { poly, table }
    }

    /// Continues a checksum: `crc` is a previous result (or 0 to start).
    pub fn update(&self, crc: u64, data: &[u8]) -> u64 {
        let mut crc = !crc;
        for &byte in data {
            crc = self.table[((crc as u8) ^ byte) as usize] ^ (crc >> 8);
        }
        !crc
    }

    /// Computes the checksum of `data`.
    pub fn checksum(&self, data: &[u8]) -> u64 {
        self.update(0, data)
    }
}

impl std::fmt::Debug for Crc64Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crc64Table")
            .field("poly", &format_args!("{:#018x}", self.poly))
            .finish()
    }
}
