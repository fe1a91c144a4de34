use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{Error, Result};

/// A channel connecting a computer to the outside world.
pub trait Channel {
    /// Fetch the next input value.
    fn read_next_input(&mut self) -> Result<i64>;

    /// Emit an output value.
    fn write_output(&mut self, value: i64) -> Result<()>;
}

/// Interactive console I/O.
///
/// Reads block on stdin, one integer per line; writes go straight to
/// stdout. This blocks the whole process, which is fine for manual runs.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl Channel for Console {
    fn read_next_input(&mut self) -> Result<i64> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        line.trim()
            .parse()
            .map_err(|err| Error::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }

    fn write_output(&mut self, value: i64) -> Result<()> {
        writeln!(io::stdout(), "{}", value)?;
        Ok(())
    }
}

/// Deterministic I/O backed by queues.
///
/// Inputs are seeded up front and consumed front to back; outputs are
/// collected in order for inspection after the run.
#[derive(Debug, Default)]
pub struct Queue {
    input: VecDeque<i64>,
    output: Vec<i64>,
}

impl Queue {
    pub fn new(input: impl IntoIterator<Item = i64>) -> Self {
        Self {
            input: input.into_iter().collect(),
            output: Vec::new(),
        }
    }

    /// Everything the program has written so far.
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    pub fn into_output(self) -> Vec<i64> {
        self.output
    }
}

impl Channel for Queue {
    fn read_next_input(&mut self) -> Result<i64> {
        self.input.pop_front().ok_or(Error::InputExhausted)
    }

    fn write_output(&mut self, value: i64) -> Result<()> {
        self.output.push(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn queue_reads_front_to_back() {
        let mut q = Queue::new([1, 2, 3]);
        assert_eq!(q.read_next_input().unwrap(), 1);
        assert_eq!(q.read_next_input().unwrap(), 2);
        assert_eq!(q.read_next_input().unwrap(), 3);
    }

    #[test]
    fn queue_exhausts() {
        let mut q = Queue::new([1]);
        q.read_next_input().unwrap();
        assert!(matches!(q.read_next_input(), Err(Error::InputExhausted)));
    }

    #[test]
    fn queue_collects_output_in_order() {
        let mut q = Queue::default();
        q.write_output(4).unwrap();
        q.write_output(5).unwrap();
        assert_eq!(q.into_output(), [4, 5]);
    }
}
