//! # Processor Status Register
//!
//! The 6502 packs its flags into one byte (NV-BDIZC):
//!
//! ```text
//! bit 7  N  Negative
//! bit 6  V  Overflow
//! bit 5  -  Unused (reads as 1 when pushed)
//! bit 4  B  Break
//! bit 3  D  Decimal
//! bit 2  I  Interrupt disable
//! bit 1  Z  Zero
//! bit 0  C  Carry
//! ```
//!
//! `ProcessorStatus` is `Copy`, so pushing it to the stack takes an independent
//! copy whose Break/Unused bits can be forced without touching the live register.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Packed processor status flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ProcessorStatus: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL = 0b0000_1000;
        const BREAK = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl ProcessorStatus {
    /// Power-on value: interrupts disabled, unused bit set.
    pub const POWER_ON: Self = Self::INTERRUPT_DISABLE.union(Self::UNUSED);

    /// Builds a status register from a raw byte. All eight bits are kept.
    pub fn from_byte(value: u8) -> Self {
        Self::from_bits_retain(value)
    }

    /// Returns the copy that BRK and PHP write to the stack: Break and Unused
    /// forced to 1.
    pub fn pushed_by_software(self) -> Self {
        self | Self::BREAK | Self::UNUSED
    }

    /// Returns the copy that IRQ and NMI write to the stack: Break clear,
    /// Unused set.
    pub fn pushed_by_hardware(self) -> Self {
        (self | Self::UNUSED) - Self::BREAK
    }

    /// Updates Zero and Negative from a result byte.
    pub fn set_zn(&mut self, value: u8) {
        self.set(Self::ZERO, value == 0);
        self.set(Self::NEGATIVE, value & 0x80 != 0);
    }

    pub fn carry(&self) -> bool {
        self.contains(Self::CARRY)
    }

    pub fn set_carry(&mut self, value: bool) {
        self.set(Self::CARRY, value);
    }

    pub fn zero(&self) -> bool {
        self.contains(Self::ZERO)
    }

    pub fn set_zero(&mut self, value: bool) {
        self.set(Self::ZERO, value);
    }

    pub fn interrupt_disable(&self) -> bool {
        self.contains(Self::INTERRUPT_DISABLE)
    }

    pub fn set_interrupt_disable(&mut self, value: bool) {
        self.set(Self::INTERRUPT_DISABLE, value);
    }

    pub fn decimal(&self) -> bool {
        self.contains(Self::DECIMAL)
    }

    pub fn set_decimal(&mut self, value: bool) {
        self.set(Self::DECIMAL, value);
    }

    pub fn break_flag(&self) -> bool {
        self.contains(Self::BREAK)
    }

    pub fn set_break_flag(&mut self, value: bool) {
        self.set(Self::BREAK, value);
    }

    pub fn unused(&self) -> bool {
        self.contains(Self::UNUSED)
    }

    pub fn set_unused(&mut self, value: bool) {
        self.set(Self::UNUSED, value);
    }

    pub fn overflow(&self) -> bool {
        self.contains(Self::OVERFLOW)
    }

    pub fn set_overflow(&mut self, value: bool) {
        self.set(Self::OVERFLOW, value);
    }

    pub fn negative(&self) -> bool {
        self.contains(Self::NEGATIVE)
    }

    pub fn set_negative(&mut self, value: bool) {
        self.set(Self::NEGATIVE, value);
    }
}

impl Default for ProcessorStatus {
    fn default() -> Self {
        Self::POWER_ON
    }
}

impl From<u8> for ProcessorStatus {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<ProcessorStatus> for u8 {
    fn from(status: ProcessorStatus) -> Self {
        status.bits()
    }
}

/// Formats as `NV-BDIZC`, upper-case letter for a set flag and `-` for a clear one.
/// Formats as `NV-BDIZC`. Bit 5 always prints as `-`.
impl fmt::Display for ProcessorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LETTERS: [char; 8] = ['N', 'V', '-', 'B', 'D', 'I', 'Z', 'C'];
        for (i, letter) in LETTERS.iter().enumerate() {
            let bit = 0x80 >> i;
            if *letter != '-' && self.bits() & bit != 0 {
                write!(f, "{}", letter)?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}
