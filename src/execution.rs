//! # Execution Loop
//!
//! [`Cpu::run`] drives [`Cpu::step`] repeatedly and consults a
//! [`StopCondition`] after every step. [`StopCondition::AtOpcode`] and
//! [`StopCondition::AtAddress`] are also checked once before the first step,
//! so a run that starts on its target executes nothing. The loop never infers a stopping point
//! by itself: [`StopCondition::Forever`] really runs until the program hits an
//! illegal opcode, so callers running untrusted code should bound it with a
//! cycle or instruction limit.
//!
//! ```
//! use emu6502::{Cpu, FlatMemory, MemoryBus, StopCondition, StopReason};
//!
//! let mut memory = FlatMemory::new();
//! // LDX #$05 / loop: DEX / BNE loop / BRK
//! memory.load(0x0600, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00]);
//!
//! let mut cpu = Cpu::new();
//! cpu.pc = 0x0600;
//!
//! let summary = cpu.run(&mut memory, &mut StopCondition::AtOpcode(0x00));
//! assert_eq!(summary.reason, StopReason::OpcodeReached { opcode: 0x00, pc: 0x0605 });
//! assert_eq!(summary.instructions, 11);
//! assert_eq!(cpu.x, 0);
//! ```

use std::fmt;

use log::debug;

use crate::{Cpu, ExecutionError, MemoryBus};

/// Predicate over the post-step machine state.
pub type StopPredicate<'a, M> = Box<dyn FnMut(&Cpu, &M) -> bool + 'a>;

/// When [`Cpu::run`] should stop.
///
/// Every condition is evaluated after a step completes, so a run always
/// executes at least one step.
pub enum StopCondition<'a, M> {
    /// Never stop voluntarily; only an execution fault ends the run.
    Forever,

    /// Stop once this many instructions have executed during the run.
    MaxInstructions(u64),

    /// Stop once at least this many cycles have been consumed during the run.
    MaxCycles(u64),

    /// Stop when the next opcode to execute is this byte (it is not executed).
    AtOpcode(u8),

    /// Stop when PC reaches this address.
    AtAddress(u16),

    /// Stop when the predicate returns true.
    Predicate(StopPredicate<'a, M>),
}

impl<'a, M: MemoryBus> StopCondition<'a, M> {
    /// Wraps a closure as a predicate condition.
    ///
    /// ```
    /// use emu6502::{Cpu, FlatMemory, MemoryBus, StopCondition, StopReason};
    ///
    /// let mut memory = FlatMemory::new();
    /// // INC $10 / JMP $0600
    /// memory.load(0x0600, &[0xE6, 0x10, 0x4C, 0x00, 0x06]);
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.pc = 0x0600;
    ///
    /// let mut until = StopCondition::predicate(|_, mem: &FlatMemory| mem.read(0x10) == 3);
    /// let summary = cpu.run(&mut memory, &mut until);
    /// assert_eq!(summary.reason, StopReason::PredicateMatched);
    /// assert_eq!(summary.instructions, 5);
    /// ```
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: FnMut(&Cpu, &M) -> bool + 'a,
    {
        StopCondition::Predicate(Box::new(predicate))
    }

    fn evaluate(&mut self, cpu: &Cpu, memory: &M, progress: &RunSummary) -> Option<StopReason> {
        match self {
            StopCondition::Forever => None,
            StopCondition::MaxInstructions(limit) => {
                (progress.instructions >= *limit).then_some(StopReason::InstructionLimit)
            }
            StopCondition::MaxCycles(limit) => {
                (progress.cycles >= *limit).then_some(StopReason::CycleLimit)
            }
            StopCondition::AtOpcode(_) | StopCondition::AtAddress(_) => {
                self.evaluate_position(cpu, memory)
            }
            StopCondition::Predicate(predicate) => {
                predicate(cpu, memory).then_some(StopReason::PredicateMatched)
            }
        }
    }

    /// Checks the conditions that depend only on where PC points. These also
    /// hold before the first step of a run.
    fn evaluate_position(&self, cpu: &Cpu, memory: &M) -> Option<StopReason> {
        match self {
            StopCondition::AtOpcode(opcode) => {
                (memory.read(cpu.pc) == *opcode).then_some(StopReason::OpcodeReached {
                    opcode: *opcode,
                    pc: cpu.pc,
                })
            }
            StopCondition::AtAddress(address) => {
                (cpu.pc == *address).then_some(StopReason::AddressReached(*address))
            }
            _ => None,
        }
    }
}

impl<M> fmt::Debug for StopCondition<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::Forever => write!(f, "Forever"),
            StopCondition::MaxInstructions(n) => write!(f, "MaxInstructions({})", n),
            StopCondition::MaxCycles(n) => write!(f, "MaxCycles({})", n),
            StopCondition::AtOpcode(op) => write!(f, "AtOpcode(${:02X})", op),
            StopCondition::AtAddress(addr) => write!(f, "AtAddress(${:04X})", addr),
            StopCondition::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    InstructionLimit,
    CycleLimit,
    /// The next instruction is the requested opcode, located at `pc`.
    OpcodeReached { opcode: u8, pc: u16 },
    AddressReached(u16),
    PredicateMatched,
    /// A step failed; the CPU state is left at the faulting instruction.
    Fault(ExecutionError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::InstructionLimit => write!(f, "instruction limit reached"),
            StopReason::CycleLimit => write!(f, "cycle limit reached"),
            StopReason::OpcodeReached { opcode, pc } => {
                write!(f, "opcode 0x{:02X} reached at 0x{:04X}", opcode, pc)
            }
            StopReason::AddressReached(addr) => write!(f, "address 0x{:04X} reached", addr),
            StopReason::PredicateMatched => write!(f, "stop predicate matched"),
            StopReason::Fault(err) => write!(f, "fault: {}", err),
        }
    }
}

/// Outcome of [`Cpu::run`]: the stop reason plus what this run consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub reason: StopReason,

    /// Instructions executed during this run.
    pub instructions: u64,

    /// Cycles consumed during this run, interrupt sequences included.
    pub cycles: u64,
}

impl Cpu {
    /// Runs until `condition` fires or a step fails.
    ///
    /// Positional conditions are checked before the first step as well, so
    /// resuming from an `AtOpcode` stop needs a [`Cpu::step`] first.
    ///
    /// Counts in the returned [`RunSummary`] cover this run only; the
    /// cumulative totals stay on [`Cpu::cycles`] and [`Cpu::instructions`].
    pub fn run<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        condition: &mut StopCondition<'_, M>,
    ) -> RunSummary {
        let start_cycles = self.cycles;
        let start_instructions = self.instructions;
        let mut progress = RunSummary {
            reason: StopReason::InstructionLimit,
            instructions: 0,
            cycles: 0,
        };

        debug!("run from ${:04X} until {:?}", self.pc, condition);

        if let Some(reason) = condition.evaluate_position(self, memory) {
            debug!("run stopped before its first step: {}", reason);
            progress.reason = reason;
            return progress;
        }

        loop {
            let stepped = self.step(memory);

            progress.instructions = self.instructions - start_instructions;
            progress.cycles = self.cycles - start_cycles;

            let reason = match stepped {
                Err(err) => Some(StopReason::Fault(err)),
                Ok(_) => condition.evaluate(self, memory, &progress),
            };

            if let Some(reason) = reason {
                debug!(
                    "run stopped at ${:04X}: {} ({} instructions, {} cycles)",
                    self.pc, reason, progress.instructions, progress.cycles
                );
                progress.reason = reason;
                return progress;
            }
        }
    }

    /// Runs until at least `cycle_budget` cycles have been consumed.
    ///
    /// Returns the cycles actually consumed, which can overshoot the budget by
    /// the length of the last instruction.
    ///
    /// # Errors
    ///
    /// The first execution fault encountered.
    pub fn run_for_cycles<M: MemoryBus>(
        &mut self,
        memory: &mut M,
        cycle_budget: u64,
    ) -> Result<u64, ExecutionError> {
        let summary = self.run(memory, &mut StopCondition::MaxCycles(cycle_budget));
        match summary.reason {
            StopReason::Fault(err) => Err(err),
            _ => Ok(summary.cycles),
        }
    }
}
