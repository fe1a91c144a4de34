use crate::error::{Error, Result};

/// An instruction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Add,
    Multiply,
    Input,
    Output,
    JumpNonZero,
    JumpZero,
    LessThan,
    Equal,
    Halt,
}

/// How an instruction parameter is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The parameter is the address of the value.
    Positional,
    /// The parameter is the value itself.
    Immediate,
}

impl Opcode {
    fn from_value(v: i64) -> Option<Self> {
        Some(match v {
            1 => Self::Add,
            2 => Self::Multiply,
            3 => Self::Input,
            4 => Self::Output,
            5 => Self::JumpNonZero,
            6 => Self::JumpZero,
            7 => Self::LessThan,
            8 => Self::Equal,
            99 => Self::Halt,
            _ => return None,
        })
    }

    /// The number of parameters this instruction consumes.
    pub fn params(&self) -> usize {
        match self {
            Self::Add => 3,
            Self::Multiply => 3,
            Self::Input => 1,
            Self::Output => 1,
            Self::JumpNonZero => 2,
            Self::JumpZero => 2,
            Self::LessThan => 3,
            Self::Equal => 3,
            Self::Halt => 0,
        }
    }

    /// Whether executing this instruction touches the I/O channel.
    pub fn needs_channel(&self) -> bool {
        matches!(self, Self::Input | Self::Output)
    }
}

impl Mode {
    fn from_value(v: i64) -> Option<Self> {
        Some(match v {
            0 => Self::Positional,
            1 => Self::Immediate,
            _ => return None,
        })
    }
}

/// A decoded instruction: an opcode and an addressing mode per parameter.
///
/// Rebuilt from the raw cell value on every cycle since programs can
/// overwrite their own instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instr {
    opcode: Opcode,
    modes: Vec<Mode>,
}

impl Instr {
    /// Decode the raw value at the instruction pointer.
    ///
    /// The low two digits select the opcode. The remaining digits are read
    /// least significant first, one per parameter; parameters beyond the
    /// supplied digits are positional.
    pub fn decode(value: i64) -> Result<Self> {
        let raw = value % 100;
        let opcode = Opcode::from_value(raw).ok_or(Error::InvalidOpcode { opcode: raw })?;
        let mut digits = value / 100;
        let mut modes = Vec::with_capacity(opcode.params());
        for _ in 0..opcode.params() {
            let digit = digits % 10;
            modes.push(Mode::from_value(digit).ok_or(Error::InvalidMode { mode: digit })?);
            digits /= 10;
        }
        Ok(Self { opcode, modes })
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// The addressing mode of parameter `i`, counting from zero.
    pub fn mode(&self, i: usize) -> Mode {
        self.modes.get(i).copied().unwrap_or(Mode::Positional)
    }
}
