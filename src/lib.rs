//! # 6502 CPU Emulator Core
//!
//! A cycle-accurate NMOS 6502 CPU emulator: the documented instruction set,
//! exact base cycle counts with page-crossing and branch penalties, and the
//! hardware quirks programs depend on (zero-page wraparound, the indirect
//! JMP page bug, stack pointer wraparound, BRK's PC+2 return address).
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{Cpu, FlatMemory, MemoryBus, StopCondition, StopReason};
//!
//! let mut memory = FlatMemory::new();
//! memory.load(0x2000, &[0xA9, 0x2A, 0x00]); // LDA #$2A / BRK
//!
//! let mut cpu = Cpu::new();
//! cpu.pc = 0x2000;
//!
//! let summary = cpu.run(&mut memory, &mut StopCondition::AtOpcode(0x00));
//! assert_eq!(summary.reason, StopReason::OpcodeReached { opcode: 0x00, pc: 0x2002 });
//! assert_eq!(cpu.a, 0x2A);
//! assert_eq!(summary.cycles, 2);
//! ```
//!
//! ## Architecture
//!
//! - **Memory is borrowed, not owned**: the CPU works against any [`MemoryBus`]
//!   passed to each call, so hosts keep full control of their address space
//! - **Table-driven decoding**: all opcode metadata lives in [`OPCODE_TABLE`]
//! - **Closed dispatch**: a [`Mnemonic`] enum matched exhaustively
//! - **Inspectable state**: registers, flags and counters are public fields
//!
//! ## Modules
//!
//! - `cpu` - CPU state, reset, interrupts and the single-step engine
//! - `execution` - run loop and stop conditions
//! - `memory` - MemoryBus trait and FlatMemory
//! - `status` - processor status register
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing modes and operand resolution
//! - `arithmetic` - pure ALU and flag helpers
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: every executed instruction at
//! `trace`, interrupts and run boundaries at `debug`, illegal opcodes at
//! `error`. Install any logger (e.g. `env_logger`) to see them.

pub mod addressing;
pub mod arithmetic;
pub mod cpu;
pub mod execution;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cpu::{Cpu, CpuConfig};
pub use execution::{RunSummary, StopCondition, StopPredicate, StopReason};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{opcodes_for, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use status::ProcessorStatus;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionError {
    /// The byte at `pc` is not a documented opcode.
    UnimplementedOpcode { opcode: u8, pc: u16 },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode { opcode, pc } => {
                write!(f, "Opcode 0x{:02X} at 0x{:04X} is not implemented", opcode, pc)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
