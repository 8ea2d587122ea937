//! Interactive text console around the allocator.
//!
//! Reads one command per line: `close`, `help`, or a calculation line
//! `a.b.c.d/p hosts hosts ...`, optionally prefixed with `csv` or `json`.

use crate::error::{parse_int, VlsmError};
use crate::models::Subnet;
use crate::output::{allocation_csv, allocation_json, allocation_lines, OutputOrder};
use crate::processing::{allocate, Allocation};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead, Write};

pub const EXIT: &str = "close";
pub const HELP: &str = "help";
const PROMPT: &str = ">>> ";
const IN_PROMPT: &str = "?> ";
const ERR_PROMPT: &str = "!> ";
const OUT_PROMPT: &str = "#> ";

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"\S+").expect("Invalid Regex?");
}

/// Split a line on runs of whitespace.
fn split_tokens(input: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(input).map(|m| m.as_str()).collect()
}

/// How a calculation result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Sentences,
    Csv,
    Json,
}

/// A parsed calculation line.
#[derive(Debug, PartialEq)]
struct Request {
    format: Format,
    root: Subnet,
    hosts: Vec<i64>,
}

/// Console failures, rendered with the stage that failed.
#[derive(Debug)]
enum ConsoleError {
    Network(VlsmError),
    HostCount(VlsmError),
    Input(VlsmError),
    Impossible(VlsmError),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConsoleError::Network(e) => {
                write!(f, "Invalid network address or slash notation mask: {e}")
            }
            ConsoleError::HostCount(e) => write!(f, "Invalid subnet host count requirement: {e}"),
            ConsoleError::Input(e) => write!(f, "Invalid input: {e}"),
            ConsoleError::Impossible(e) => write!(f, "Impossible subnetting request: {e}"),
        }
    }
}

fn interpret(line: &str) -> Result<Request, ConsoleError> {
    let mut tokens = split_tokens(line);
    let format = match tokens.first().copied() {
        Some("csv") => Format::Csv,
        Some("json") => Format::Json,
        _ => Format::Sentences,
    };
    if format != Format::Sentences {
        tokens.remove(0);
    }
    let (root, hosts) = match tokens.split_first() {
        Some((root, hosts)) => (*root, hosts),
        None => ("", &[][..]),
    };
    let root = Subnet::parse(root).map_err(ConsoleError::Network)?;
    let hosts = hosts
        .iter()
        .map(|h| parse_int(h))
        .collect::<Result<Vec<i64>, VlsmError>>()
        .map_err(ConsoleError::HostCount)?;
    Ok(Request {
        format,
        root,
        hosts,
    })
}

fn calculate(request: &Request) -> Result<Allocation, ConsoleError> {
    allocate(&request.root, &request.hosts).map_err(|e| match e {
        VlsmError::InfeasibleAllocation { .. } => ConsoleError::Impossible(e),
        _ => ConsoleError::Input(e),
    })
}

/// Line oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    order: OutputOrder,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, order: OutputOrder) -> Self {
        Console {
            input,
            output,
            order,
        }
    }

    /// Run until `close` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}Welcome to the VLSM subnet calculator.\n",
            PROMPT.cyan()
        )?;
        self.help()?;

        let mut line = String::new();
        loop {
            write!(self.output, "{}", IN_PROMPT.green())?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                log::info!("End of input, closing console");
                return self.close();
            }
            let command = line.trim();
            log::trace!("command={command:?}");
            match command {
                "" => continue,
                EXIT => return self.close(),
                HELP => self.help()?,
                _ => self.calculate_and_display(command)?,
            }
        }
    }

    fn help(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}Enter an IPv4 network address with a slash notation mask (a.b.c.d/mask) as the address space to divide,\n\
             followed by the required number of hosts for each sub-network, separated by spaces (hosts hosts ...).\n\
             Prefix the line with 'csv' or 'json' to change the output format.\n\
             '{EXIT}' closes this program and '{HELP}' shows this message again.\n",
            PROMPT.cyan()
        )
    }

    fn close(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}Thank you for using the VLSM subnet calculator.",
            PROMPT.cyan()
        )
    }

    fn calculate_and_display(&mut self, command: &str) -> io::Result<()> {
        let result = interpret(command).and_then(|request| {
            let allocation = calculate(&request)?;
            Ok((request.format, allocation))
        });
        let (format, allocation) = match result {
            Ok(ok) => ok,
            Err(e) => {
                log::warn!("{e}");
                return writeln!(self.output, "{}{e}\n", ERR_PROMPT.red());
            }
        };

        let lines = match format {
            Format::Sentences => allocation_lines(&allocation, self.order),
            Format::Csv => allocation_csv(&allocation, self.order),
            Format::Json => match allocation_json(&allocation, self.order) {
                Ok(json) => json.lines().map(str::to_string).collect(),
                Err(e) => return Err(io::Error::new(io::ErrorKind::Other, e)),
            },
        };
        for line in lines {
            writeln!(self.output, "{}{line}", OUT_PROMPT.yellow())?;
        }
        writeln!(self.output)
    }
}
