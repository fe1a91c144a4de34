use crate::arg::Arg;
use crate::error::{Error, Result};
use crate::instr::Instr;
use crate::io::Channel;
use crate::mem::Memory;
use crate::ops::{self, Step};

/// How a run finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The program executed a halt instruction.
    Halted,
    /// The instruction pointer advanced past the end of memory.
    RanOffEnd,
}

impl Exit {
    /// Whether the program stopped at a halt instruction.
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Halted)
    }
}

/// An intcode computer.
///
/// Owns its memory exclusively for the duration of a run and mutates it in
/// place. A computer is built per run and discarded after; callers that
/// re-run the same base program must construct each computer from a fresh
/// copy, since a finished run leaves memory mutated.
#[derive(Debug)]
pub struct Computer {
    mem: Memory,
    ptr: usize,
}

impl Computer {
    /// Create a computer with the program loaded into memory.
    ///
    /// The pointer starts at address 0, so that address must exist.
    pub fn new(program: Vec<i64>) -> Result<Self> {
        if program.is_empty() {
            return Err(Error::IncompatibleMemory);
        }
        Ok(Self {
            mem: Memory::new(program),
            ptr: 0,
        })
    }

    /// Overwrite memory cells before a run.
    ///
    /// This is how seed values are planted, e.g. the noun and verb at
    /// addresses 1 and 2 of the gravity assist program.
    pub fn apply_overrides(
        &mut self,
        overrides: impl IntoIterator<Item = (usize, i64)>,
    ) -> Result<()> {
        for (addr, value) in overrides {
            *self.mem.get_mut(addr)? = value;
        }
        Ok(())
    }

    /// Read a single memory cell.
    pub fn read(&self, addr: usize) -> Result<i64> {
        self.mem.get(addr)
    }

    /// The whole memory.
    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    fn args(&self, instr: &Instr) -> Result<Vec<Arg>> {
        (0..instr.opcode().params())
            .map(|i| {
                let pos = self.ptr + 1 + i;
                Ok(Arg::new(self.mem.get(pos)?, pos, instr.mode(i)))
            })
            .collect()
    }

    /// Decode and execute the instruction at the pointer.
    fn step(&mut self, channel: &mut dyn Channel) -> Result<Step> {
        let instr = Instr::decode(self.mem.get(self.ptr)?)?;
        log::trace!("executing {:?} at `{}`", instr.opcode(), self.ptr);
        let args = self.args(&instr)?;
        ops::execute(instr.opcode(), &args, &mut self.mem, channel)
    }

    /// Run the program to a terminal state.
    ///
    /// Returns [`Exit::Halted`] when a halt instruction executes and
    /// [`Exit::RanOffEnd`] when the pointer walks past the last cell
    /// without one. Decode and dispatch failures propagate as errors.
    pub fn run(&mut self, channel: &mut dyn Channel) -> Result<Exit> {
        loop {
            if self.ptr >= self.mem.len() {
                break Ok(Exit::RanOffEnd);
            }
            match self.step(channel)? {
                Step::Advance(n) => self.ptr += n,
                Step::Jump(addr) => self.ptr = addr,
                Step::Halt => break Ok(Exit::Halted),
            }
        }
    }
}
