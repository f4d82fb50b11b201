//! # Arithmetic and Flag Helpers
//!
//! Pure functions computing results and flag outcomes for the ALU, shift and
//! compare instructions. Nothing here touches CPU or memory state; the
//! instruction units apply the returned values.

/// Outcome of an ADC/SBC operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithResult {
    pub result: u8,
    pub carry: bool,
    pub overflow: bool,
    pub zero: bool,
    pub negative: bool,
}

/// Outcome of a shift or rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResult {
    pub result: u8,
    pub carry: bool,
}

/// Outcome of CMP/CPX/CPY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareResult {
    pub carry: bool,
    pub zero: bool,
    pub negative: bool,
}

/// Outcome of BIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTestResult {
    pub zero: bool,
    pub overflow: bool,
    pub negative: bool,
}

/// Binary add with carry.
///
/// Overflow is set when both operands share a sign and the result does not.
pub fn add_binary(a: u8, value: u8, carry_in: bool) -> ArithResult {
    let sum = a as u16 + value as u16 + carry_in as u16;
    let result = sum as u8;

    ArithResult {
        result,
        carry: sum > 0xFF,
        overflow: (a ^ result) & (value ^ result) & 0x80 != 0,
        zero: result == 0,
        negative: result & 0x80 != 0,
    }
}

/// Binary subtract with borrow (carry clear means borrow).
///
/// Equivalent to adding the one's complement of `value`.
pub fn subtract_binary(a: u8, value: u8, carry_in: bool) -> ArithResult {
    add_binary(a, !value, carry_in)
}

/// NMOS decimal-mode add.
///
/// Accumulator and carry follow the BCD adjustment. Zero comes from the
/// binary sum; Negative and Overflow come from the intermediate result after
/// the low-nibble adjustment, before the high-nibble one.
pub fn add_decimal(a: u8, value: u8, carry_in: bool) -> ArithResult {
    let binary = add_binary(a, value, carry_in);

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry_in as u16;
    if lo >= 0x0A {
        lo = ((lo + 0x06) & 0x0F) + 0x10;
    }

    let intermediate = (a & 0xF0) as u16 + (value & 0xF0) as u16 + lo;
    let signed = (a & 0xF0) as i8 as i16 + (value & 0xF0) as i8 as i16 + lo as i16;

    let mut adjusted = intermediate;
    if adjusted >= 0xA0 {
        adjusted += 0x60;
    }

    ArithResult {
        result: adjusted as u8,
        carry: adjusted >= 0x100,
        overflow: !(-128..=127).contains(&signed),
        zero: binary.zero,
        negative: intermediate & 0x80 != 0,
    }
}

/// NMOS decimal-mode subtract.
///
/// Only the accumulator is BCD adjusted; every flag matches the binary
/// subtraction.
pub fn subtract_decimal(a: u8, value: u8, carry_in: bool) -> ArithResult {
    let binary = subtract_binary(a, value, carry_in);

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 + carry_in as i16 - 1;
    if lo < 0 {
        lo = ((lo - 0x06) & 0x0F) - 0x10;
    }

    let mut full = (a & 0xF0) as i16 - (value & 0xF0) as i16 + lo;
    if full < 0 {
        full -= 0x60;
    }

    ArithResult {
        result: full as u8,
        ..binary
    }
}

/// Compares `register` with `value` as unsigned bytes.
pub fn compare(register: u8, value: u8) -> CompareResult {
    let diff = register.wrapping_sub(value);
    CompareResult {
        carry: register >= value,
        zero: diff == 0,
        negative: diff & 0x80 != 0,
    }
}

pub fn shift_left(value: u8) -> ShiftResult {
    ShiftResult {
        result: value << 1,
        carry: value & 0x80 != 0,
    }
}

pub fn shift_right(value: u8) -> ShiftResult {
    ShiftResult {
        result: value >> 1,
        carry: value & 0x01 != 0,
    }
}

/// Rotate left through carry: old carry enters bit 0, bit 7 leaves into carry.
pub fn rotate_left(value: u8, carry_in: bool) -> ShiftResult {
    ShiftResult {
        result: (value << 1) | carry_in as u8,
        carry: value & 0x80 != 0,
    }
}

/// Rotate right through carry: old carry enters bit 7, bit 0 leaves into carry.
pub fn rotate_right(value: u8, carry_in: bool) -> ShiftResult {
    ShiftResult {
        result: (value >> 1) | ((carry_in as u8) << 7),
        carry: value & 0x01 != 0,
    }
}

pub fn bit_test(a: u8, value: u8) -> BitTestResult {
    BitTestResult {
        zero: a & value == 0,
        overflow: value & 0x40 != 0,
        negative: value & 0x80 != 0,
    }
}
