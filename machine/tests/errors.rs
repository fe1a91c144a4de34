use intcode_machine::{parse_program, Computer, Error, Queue};

use pretty_assertions::assert_eq;

/// Run a program with the given queued inputs and return the error it hits.
#[track_caller]
fn run_err(program: &str, feed: &[i64]) -> Error {
    let mut c = Computer::new(parse_program(program).unwrap()).unwrap();
    let mut q = Queue::new(feed.iter().copied());
    c.run(&mut q).unwrap_err()
}

#[test]
fn invalid_opcode() {
    let err = run_err("98,0,0", &[]);
    assert!(matches!(err, Error::InvalidOpcode { opcode: 98 }));
    assert_eq!(err.to_string(), "unknown opcode `98`");
}

#[test]
fn invalid_mode() {
    let err = run_err("203,0,99", &[1]);
    assert!(matches!(err, Error::InvalidMode { mode: 2 }));
    assert_eq!(err.to_string(), "unknown addressing mode `2`");
}

#[test]
fn parameters_sliced_past_the_end() {
    let err = run_err("1,0,0", &[]);
    assert!(matches!(err, Error::OutOfBounds { addr: 3 }));
    assert_eq!(err.to_string(), "address `3` is out of bounds");
}

#[test]
fn positional_read_out_of_bounds() {
    let err = run_err("1,50,50,0,99", &[]);
    assert!(matches!(err, Error::OutOfBounds { addr: 50 }));
}

#[test]
fn positional_write_out_of_bounds() {
    let err = run_err("1101,1,1,50,99", &[]);
    assert!(matches!(err, Error::OutOfBounds { addr: 50 }));
}

#[test]
fn jump_to_a_negative_address() {
    let err = run_err("1105,1,-4,99", &[]);
    assert!(matches!(err, Error::OutOfBounds { addr: -4 }));
}

#[test]
fn write_through_an_immediate_parameter() {
    let err = run_err("11102,2,3,0,99", &[]);
    assert!(matches!(err, Error::ImmediateWrite { pos: 3 }));
    assert_eq!(
        err.to_string(),
        "write through the immediate parameter at address `3`"
    );
}

#[test]
fn queued_input_exhausts() {
    let err = run_err("3,0,3,1,99", &[1]);
    assert!(matches!(err, Error::InputExhausted));
    assert_eq!(err.to_string(), "queued input is exhausted");
}

#[test]
fn incompatible_memory_at_construction() {
    let err = Computer::new(Vec::new()).unwrap_err();
    assert!(matches!(err, Error::IncompatibleMemory));
    assert_eq!(
        err.to_string(),
        "incompatible memory, expected at least one cell"
    );
}

#[test]
fn memory_keeps_partial_mutations_on_failure() {
    // The first add lands before the bad opcode aborts the run.
    let mut c = Computer::new(parse_program("1101,2,3,0,98").unwrap()).unwrap();
    c.run(&mut Queue::default()).unwrap_err();
    assert_eq!(c.memory().cells(), [5, 2, 3, 0, 98]);
}
