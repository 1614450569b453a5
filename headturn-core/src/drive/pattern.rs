//! Four-line drive pattern
//!
//! Bit 3 is coil A and bit 0 is coil D, so patterns read in line order:
//! `0b1000` energises A, `0b0001` energises D.

/// Number of coil lines on the drive bus
pub const LINE_COUNT: usize = 4;

const LINE_MASK: u8 = 0b1111;

/// One-hot coil pattern for the drive bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrivePattern(u8);

impl Default for DrivePattern {
    fn default() -> Self {
        Self::CW_SEED
    }
}

impl DrivePattern {
    /// Clockwise seed and power-on pattern (coil A)
    pub const CW_SEED: Self = Self(0b1000);

    /// Counter-clockwise seed (coil D)
    pub const CCW_SEED: Self = Self(0b0001);

    /// Build a pattern from raw bits; bits above the bus are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & LINE_MASK)
    }

    /// Raw 4-bit pattern
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if exactly one line is energised
    pub fn is_one_hot(self) -> bool {
        self.0.count_ones() == 1
    }

    /// Level of a coil line, `0` = A through `3` = D
    pub fn line(self, index: usize) -> bool {
        index < LINE_COUNT && self.0 & (1 << (LINE_COUNT - 1 - index)) != 0
    }

    /// Next pattern clockwise (A→B→C→D→A)
    pub fn clockwise(self) -> Self {
        let next = self.0 >> 1;
        if !self.is_one_hot() || next == 0 {
            Self::CW_SEED
        } else {
            Self(next)
        }
    }

    /// Next pattern counter-clockwise (D→C→B→A→D)
    pub fn counter_clockwise(self) -> Self {
        let next = (self.0 << 1) & LINE_MASK;
        if !self.is_one_hot() || next == 0 {
            Self::CCW_SEED
        } else {
            Self(next)
        }
    }
}
