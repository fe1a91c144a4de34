use std::io;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

/// Any fatal condition a program run can end with.
///
/// Every variant aborts the run immediately, leaving memory in whatever
/// partially mutated state it reached.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown opcode `{}`", .opcode)]
    InvalidOpcode { opcode: i64 },
    #[error("unknown addressing mode `{}`", .mode)]
    InvalidMode { mode: i64 },
    #[error("address `{}` is out of bounds", .addr)]
    OutOfBounds { addr: i64 },
    #[error("write through the immediate parameter at address `{}`", .pos)]
    ImmediateWrite { pos: usize },
    #[error("queued input is exhausted")]
    InputExhausted,
    #[error("incompatible memory, expected at least one cell")]
    IncompatibleMemory,
    #[error(transparent)]
    Io(#[from] io::Error),
}
