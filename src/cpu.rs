//! # CPU State and Execution
//!
//! This module contains the `Cpu` struct representing the 6502 processor state
//! and the single-instruction fetch-decode-execute step.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: packed [`ProcessorStatus`]
//! - **Counters**: cycles consumed and instructions executed
//!
//! All of it is public: hosts, monitors and tests read and poke registers
//! directly. The CPU does not own memory; every operation that touches the bus
//! borrows a [`MemoryBus`] for the duration of the call, so one host can drive
//! several independent machines.
//!
//! ## Execution Model
//!
//! - [`Cpu::step`]: service a pending interrupt or execute one instruction
//! - [`Cpu::run`]: step until a [`StopCondition`](crate::StopCondition) fires

use log::{debug, error, trace};

use crate::addressing;
use crate::instructions;
use crate::{ExecutionError, MemoryBus, OpcodeMetadata, ProcessorStatus};

/// Base address of the stack page.
pub const STACK_BASE: u16 = 0x0100;

/// NMI vector (low byte; high byte at +1).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (low byte; high byte at +1).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte at +1).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles taken by the hardware interrupt sequence (IRQ, NMI).
pub const INTERRUPT_CYCLES: u8 = 7;

/// Behavioural switches for the parts of the NMOS 6502 that emulators
/// disagree on.
///
/// ```
/// use emu6502::{Cpu, CpuConfig};
///
/// // A 2A03-style core: no BCD
/// let cpu = Cpu::with_config(CpuConfig {
///     decimal_mode: false,
///     ..CpuConfig::default()
/// });
/// assert!(!cpu.config.decimal_mode);
/// assert!(cpu.config.indirect_jmp_bug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuConfig {
    /// Honour the D flag in ADC/SBC. When false, ADC/SBC are always binary.
    pub decimal_mode: bool,

    /// Reproduce the JMP ($xxFF) page-wrap bug.
    pub indirect_jmp_bug: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            decimal_mode: true,
            indirect_jmp_bug: true,
        }
    }
}

/// 6502 CPU state.
///
/// # Examples
///
/// ```
/// use emu6502::{Cpu, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&memory);
///
/// assert_eq!(cpu.pc, 0x8000);
/// assert_eq!(cpu.sp, 0xFD);
/// assert!(cpu.status.interrupt_disable());
/// assert_eq!(cpu.cycles, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cpu {
    /// Accumulator register
    pub a: u8,

    /// X index register
    pub x: u8,

    /// Y index register
    pub y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub sp: u8,

    /// Program counter (address of next instruction)
    pub pc: u16,

    /// Processor status flags
    pub status: ProcessorStatus,

    /// Total CPU cycles consumed
    pub cycles: u64,

    /// Total instructions executed (interrupt sequences are not counted)
    pub instructions: u64,

    /// Hardware variant options (decimal mode, indirect JMP page bug)
    pub config: CpuConfig,

    nmi_pending: bool,
}

impl Cpu {
    /// Creates a CPU in the power-on state with the default configuration.
    ///
    /// PC is 0; call [`Cpu::reset`] to load it from the reset vector, or set it
    /// directly.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            pc: 0x0000,
            status: ProcessorStatus::POWER_ON,
            cycles: 0,
            instructions: 0,
            config,
            nmi_pending: false,
        }
    }

    /// Performs a reset: registers cleared, SP = 0xFD, I set, counters zeroed
    /// and PC loaded from the reset vector at 0xFFFC/0xFFFD.
    pub fn reset<M: MemoryBus>(&mut self, memory: &M) {
        *self = Self::with_config(self.config);
        self.pc = memory.read_word(RESET_VECTOR);
        debug!("reset: PC=${:04X}", self.pc);
    }

    /// Full address of the next free stack slot (0x0100 + SP).
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }

    /// Pushes a byte at 0x0100 + SP, then decrements SP (wrapping within the page).
    pub fn push<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.write(self.stack_address(), value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping within the page), then reads 0x0100 + SP.
    pub fn pop<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.read(self.stack_address())
    }

    /// Pushes a word, high byte first.
    pub fn push_word<M: MemoryBus>(&mut self, memory: &mut M, value: u16) {
        self.push(memory, (value >> 8) as u8);
        self.push(memory, (value & 0xFF) as u8);
    }

    /// Pops a word, low byte first.
    pub fn pop_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let lo = self.pop(memory) as u16;
        let hi = self.pop(memory) as u16;
        (hi << 8) | lo
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        let value = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let lo = self.fetch_byte(memory) as u16;
        let hi = self.fetch_byte(memory) as u16;
        (hi << 8) | lo
    }

    /// Latches a non-maskable interrupt. It is serviced at the start of the
    /// next [`Cpu::step`], regardless of the I flag.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    /// Executes one step and returns the cycles it consumed.
    ///
    /// A step is either:
    /// 1. the 7-cycle interrupt sequence, when an NMI is latched or the memory
    ///    bus reports an active IRQ while I is clear, or
    /// 2. one instruction: fetch the opcode at PC, resolve its operand (which
    ///    advances PC past the operand bytes), execute it and add base plus
    ///    extra cycles to the cycle counter.
    ///
    /// # Errors
    ///
    /// `ExecutionError::UnimplementedOpcode` when the byte at PC is not a
    /// documented opcode. PC still points at the offending byte and no state
    /// has changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{Cpu, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x2000, &[0xA9, 0x2A, 0x02]); // LDA #$2A, then an illegal opcode
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.pc = 0x2000;
    ///
    /// assert_eq!(cpu.step(&mut memory), Ok(2));
    /// assert_eq!(cpu.a, 0x2A);
    /// assert_eq!(cpu.pc, 0x2002);
    ///
    /// assert_eq!(
    ///     cpu.step(&mut memory),
    ///     Err(ExecutionError::UnimplementedOpcode { opcode: 0x02, pc: 0x2002 })
    /// );
    /// assert_eq!(cpu.pc, 0x2002);
    /// ```
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<u8, ExecutionError> {
        if self.nmi_pending {
            self.nmi_pending = false;
            return Ok(self.service_interrupt(memory, NMI_VECTOR));
        }

        if memory.irq_active() && !self.status.interrupt_disable() {
            return Ok(self.service_interrupt(memory, IRQ_VECTOR));
        }

        let pc = self.pc;
        let opcode = memory.read(pc);
        let metadata = OpcodeMetadata::lookup(opcode).ok_or_else(|| {
            error!("illegal opcode ${:02X} at ${:04X}", opcode, pc);
            ExecutionError::UnimplementedOpcode { opcode, pc }
        })?;

        trace!(
            "${:04X}  {:02X}  {}  A={:02X} X={:02X} Y={:02X} SP={:02X} P={}",
            pc,
            opcode,
            metadata.mnemonic,
            self.a,
            self.x,
            self.y,
            self.sp,
            self.status
        );

        self.pc = pc.wrapping_add(1);
        let operand = addressing::resolve(self, memory, metadata);
        let extra = instructions::execute(self, memory, &operand);

        let cycles = metadata.base_cycles + extra;
        self.cycles += cycles as u64;
        self.instructions += 1;

        Ok(cycles)
    }

    /// Pushes PC and status (Break clear), sets I and jumps through `vector`.
    fn service_interrupt<M: MemoryBus>(&mut self, memory: &mut M, vector: u16) -> u8 {
        debug!(
            "interrupt via ${:04X}, returning to ${:04X}",
            vector, self.pc
        );

        self.push_word(memory, self.pc);
        let pushed = self.status.pushed_by_hardware();
        self.push(memory, pushed.bits());
        self.status.set_interrupt_disable(true);
        self.pc = memory.read_word(vector);

        self.cycles += INTERRUPT_CYCLES as u64;
        INTERRUPT_CYCLES
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
