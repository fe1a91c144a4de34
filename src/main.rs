mod log;

use std::fs;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process;
use std::result;
use std::str::FromStr;

use anyhow::Result;
use clap::{AppSettings, Parser};
use indexmap::IndexMap;
use machine::{Computer, Console, Exit, Queue};
use thiserror::Error;

#[derive(Debug, Clone, Parser)]
#[clap(
    author,
    global_setting = AppSettings::DeriveDisplayOrder,
)]
struct Opt {
    /// The intcode program file.
    #[clap()]
    input: PathBuf,

    /// Queue up input values and run without a console.
    #[clap(long, multiple_occurrences(true))]
    feed: Vec<Feed>,

    /// Overwrite a memory cell before the run, e.g. `--set 1=12`.
    #[clap(long, multiple_occurrences(true))]
    set: Vec<Override>,

    /// Print the given memory cell after the run.
    #[clap(long)]
    read: Option<usize>,

    /// Enable trace logging.
    #[clap(long, short)]
    verbose: bool,
}

/// A comma-separated list of input values.
#[derive(Debug, Clone)]
struct Feed(Vec<i64>);

impl FromStr for Feed {
    type Err = ParseIntError;

    fn from_str(s: &str) -> result::Result<Self, ParseIntError> {
        machine::parse_program(s).map(Self)
    }
}

/// A memory override in `addr=value` form.
#[derive(Debug, Clone)]
struct Override {
    addr: usize,
    value: i64,
}

#[derive(Debug, Error)]
#[error("expected `addr=value`")]
struct ParseOverrideError;

impl FromStr for Override {
    type Err = ParseOverrideError;

    fn from_str(s: &str) -> result::Result<Self, ParseOverrideError> {
        let (addr, value) = s.split_once('=').ok_or(ParseOverrideError)?;
        Ok(Self {
            addr: addr.trim().parse().map_err(|_| ParseOverrideError)?,
            value: value.trim().parse().map_err(|_| ParseOverrideError)?,
        })
    }
}

fn run(opt: Opt) -> Result<()> {
    let Opt {
        input,
        feed,
        set,
        read,
        ..
    } = opt;

    let program = machine::parse_program(&fs::read_to_string(&input)?)?;
    let mut c = Computer::new(program)?;

    // Later `--set`s for the same address win.
    let overrides: IndexMap<usize, i64> = set
        .into_iter()
        .map(|Override { addr, value }| (addr, value))
        .collect();
    c.apply_overrides(overrides)?;

    log::info!("running {}", input.display());
    let exit = if feed.is_empty() {
        c.run(&mut Console::new())?
    } else {
        let mut q = Queue::new(feed.into_iter().flat_map(|Feed(values)| values));
        let exit = c.run(&mut q)?;
        for value in q.output() {
            println!("{}", value);
        }
        exit
    };
    if exit == Exit::RanOffEnd {
        log::warn!("program ran off the end of memory");
    }

    if let Some(addr) = read {
        println!("{}", c.read(addr)?);
    }
    Ok(())
}

fn main() {
    let opt = Opt::parse();
    log::init(opt.verbose);
    if let Err(err) = run(opt) {
        log::error!("{:#}", err);
        process::exit(1);
    }
}
