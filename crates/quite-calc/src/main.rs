//! Evaluates a single `quite-math` operation given on the command line.
//!
//! ```text
//! $ quite-calc cross 1,0,0 0,1,0
//! (0, 0, 1)
//! $ quite-calc determinant "1,2;3,4"
//! -2
//! ```
//!
//! Log output goes to *stderr*. The level defaults to *info* and can be raised with `-v` (debug)
//! and `-vv` (trace), or overridden through `RUST_LOG`.

mod op;
mod value;

use anyhow::{bail, Context};
use log::LevelFilter;

use crate::{op::Op, value::Value};

const USAGE: &str = "usage: quite-calc [-v | -vv | -q] <operation> <operands...>";

fn main() -> anyhow::Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    init_logger(args.log_level);

    match args.command {
        Command::Help => print_help(),
        Command::Eval { op, operands } => {
            log::debug!("{} {:?}", op.name(), operands);

            let result = op.eval(&operands)?;
            if !result.is_finite() {
                log::warn!(
                    "result of `{}` is not finite, the operands may be degenerate",
                    op.name()
                );
            }
            println!("{}", result);
        }
    }

    Ok(())
}

/// Initializes logging to *stderr*, filtering this crate at `level`.
///
/// `RUST_LOG` is applied afterwards and takes precedence. If a global logger is already
/// registered, this does nothing.
fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn print_help() {
    println!("{}", USAGE);
    println!();
    println!("Scalars are plain numbers, vectors are comma-separated (`1,2,3`), and square");
    println!("matrices list their rows separated by semicolons (`1,2;3,4`).");
    println!();
    println!("operations:");
    for op in Op::ALL {
        println!("  {:<16} {}", op.name(), op.usage());
    }
}

#[derive(Debug)]
struct Args {
    log_level: LevelFilter,
    command: Command,
}

#[derive(Debug)]
enum Command {
    Help,
    Eval { op: Op, operands: Vec<Value> },
}

impl Args {
    fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut log_level = LevelFilter::Info;
        let mut args = args.into_iter().peekable();

        // Flags come first; negative numbers (`-1,2`) are operands, not flags.
        while let Some(flag) = args.next_if(|arg| is_flag(arg)) {
            log_level = match flag.as_str() {
                "-h" | "--help" => {
                    return Ok(Self {
                        log_level,
                        command: Command::Help,
                    })
                }
                "-q" | "--quiet" => LevelFilter::Warn,
                "-v" | "--verbose" => LevelFilter::Debug,
                "-vv" => LevelFilter::Trace,
                _ => bail!("unknown flag `{}`\n{}", flag, USAGE),
            };
        }

        let op = match args.next() {
            Some(name) => Op::from_name(&name)?,
            None => bail!("missing operation\n{}", USAGE),
        };
        let operands = args
            .enumerate()
            .map(|(i, arg)| {
                Value::parse(&arg)
                    .with_context(|| format!("operand {} of `{}`", i + 1, op.name()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            log_level,
            command: Command::Eval { op, operands },
        })
    }
}

fn is_flag(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '-')
}

#[cfg(test)]
mod tests {
    use quite_math::vec2;

    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        Args::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn flags() {
        assert!(is_flag("-v"));
        assert!(is_flag("--help"));
        assert!(!is_flag("-1"));
        assert!(!is_flag("-.5,2"));
        assert!(!is_flag("length"));

        assert_eq!(parse(&["length", "1,2"]).unwrap().log_level, LevelFilter::Info);
        assert_eq!(parse(&["-v", "length", "1,2"]).unwrap().log_level, LevelFilter::Debug);
        assert_eq!(parse(&["-vv", "length", "1,2"]).unwrap().log_level, LevelFilter::Trace);
        assert_eq!(parse(&["-q", "length", "1,2"]).unwrap().log_level, LevelFilter::Warn);
        assert!(matches!(parse(&["--help"]).unwrap().command, Command::Help));
        assert!(matches!(parse(&["-v", "-h", "bogus"]).unwrap().command, Command::Help));
    }

    #[test]
    fn operation_and_operands() {
        let args = parse(&["dot", "-1,2", "3,4"]).unwrap();
        match args.command {
            Command::Eval { op, operands } => {
                assert_eq!(op, Op::Dot);
                assert_eq!(
                    operands,
                    [Value::Vec2(vec2(-1.0, 2.0)), Value::Vec2(vec2(3.0, 4.0))]
                );
            }
            Command::Help => panic!("expected an operation"),
        }
    }

    #[test]
    fn errors() {
        let err = parse(&[]).unwrap_err();
        assert!(err.to_string().starts_with("missing operation"), "{}", err);

        let err = parse(&["-x", "length"]).unwrap_err();
        assert!(err.to_string().starts_with("unknown flag `-x`"), "{}", err);

        let err = parse(&["nope"]).unwrap_err();
        assert!(err.to_string().starts_with("unknown operation `nope`"), "{}", err);

        let err = parse(&["length", "1,2", "a"]).unwrap_err();
        assert_eq!(err.to_string(), "operand 2 of `length`");
    }
}
