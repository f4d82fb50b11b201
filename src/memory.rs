//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, and `FlatMemory`, a plain 64KB RAM.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Addresses are 16-bit and wrap silently (0xFFFF + 1 = 0x0000)
//! - Word accesses are little-endian (low byte first)

/// Memory bus trait for CPU to read/write bytes.
///
/// Only `read` and `write` are required. Word, bit and bulk helpers are
/// provided on top of them and wrap at the end of the address space.
///
/// # Examples
///
/// ```
/// use emu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_word(0xFFFE, 0xC000);
/// assert_eq!(mem.read(0xFFFE), 0x00);
/// assert_eq!(mem.read(0xFFFF), 0xC0);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use emu6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. Read-only or unmapped regions may ignore
    /// the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Sets bit `bit` (0-7, taken modulo 8) of the byte at `addr`.
    fn set_bit(&mut self, addr: u16, bit: u8) {
        let value = self.read(addr);
        self.write(addr, value | (1 << (bit & 0x07)));
    }

    /// Clears bit `bit` (0-7, taken modulo 8) of the byte at `addr`.
    fn clear_bit(&mut self, addr: u16, bit: u8) {
        let value = self.read(addr);
        self.write(addr, value & !(1 << (bit & 0x07)));
    }

    /// Returns true if bit `bit` (0-7, taken modulo 8) of the byte at `addr` is set.
    fn is_bit_set(&self, addr: u16, bit: u8) -> bool {
        self.read(addr) & (1 << (bit & 0x07)) != 0
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Loading past 0xFFFF continues at 0x0000. Returns the number of bytes
    /// written, which is `bytes.len()`.
    fn load(&mut self, start: u16, bytes: &[u8]) -> usize {
        let mut addr = start;
        for &byte in bytes {
            self.write(addr, byte);
            addr = addr.wrapping_add(1);
        }
        bytes.len()
    }

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line on the 6502 is **level-sensitive**: the CPU samples it
    /// before every instruction and services it while the I flag is clear.
    /// The line stays active until the host clears the condition.
    ///
    /// Returns `false` by default, which is what flat RAM wants.
    ///
    /// ```
    /// use emu6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert!(!mem.irq_active());
    /// ```
    fn irq_active(&self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) map to one contiguous RAM array,
/// initialized to 0x00.
///
/// # Examples
///
/// ```
/// use emu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x2000, &[0xA9, 0x2A]); // LDA #$2A
///
/// let mut cpu = Cpu::new();
/// cpu.pc = 0x2000;
/// cpu.step(&mut memory).unwrap();
/// assert_eq!(cpu.a, 0x2A);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Creates memory pre-filled from `image`, starting at address 0x0000.
    ///
    /// Bytes beyond 64KB are ignored.
    pub fn from_image(image: &[u8]) -> Self {
        let mut memory = Self::new();
        let len = image.len().min(0x10000);
        memory.data[..len].copy_from_slice(&image[..len]);
        memory
    }

    /// Returns the whole address space as a slice, for inspection.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
