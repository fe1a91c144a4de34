mod arg;
mod computer;
mod error;
mod instr;
mod io;
mod mem;
mod ops;

use std::num::ParseIntError;
use std::result;

pub use crate::arg::Arg;
pub use crate::computer::{Computer, Exit};
pub use crate::error::{Error, Result};
pub use crate::instr::{Instr, Mode, Opcode};
pub use crate::io::{Channel, Console, Queue};
pub use crate::mem::Memory;

/// Parse a comma-separated intcode program.
pub fn parse_program(input: &str) -> result::Result<Vec<i64>, ParseIntError> {
    input.trim().split(',').map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_program_trims_whitespace() {
        assert_eq!(
            parse_program(" 1,9,10,3,2,3,11,0,99,30,40,50\n").unwrap(),
            [1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]
        );
    }

    #[test]
    fn parse_program_accepts_negatives() {
        assert_eq!(parse_program("3,9,-1,8").unwrap(), [3, 9, -1, 8]);
    }

    #[test]
    fn parse_program_rejects_junk() {
        assert!(parse_program("1,two,3").is_err());
        assert!(parse_program("").is_err());
    }
}
