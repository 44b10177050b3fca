mod debug_report;

use std::io::{self, IsTerminal};
use triage::classic;

const DEFAULT_FROM: i64 = 1;
const DEFAULT_TO: i64 = 15;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let engine = classic();
    for value in config.from..=config.to {
        if config.trace {
            let report = engine.dispatch_traced(&value);
            debug_report::print_dispatch(value, &report, config.color);
        } else {
            engine.dispatch(&value);
        }
    }
}

struct CliConfig {
    from: i64,
    to: i64,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut from = DEFAULT_FROM;
    let mut to = DEFAULT_TO;
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("triage {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--trace" => trace = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--from" => {
                let value = args.next().ok_or_else(|| "error: --from expects a value".to_string())?;
                from = parse_bound("--from", &value)?;
            }
            "--to" => {
                let value = args.next().ok_or_else(|| "error: --to expects a value".to_string())?;
                to = parse_bound("--to", &value)?;
            }
            _ if arg.starts_with("--from=") => {
                from = parse_bound("--from", arg.trim_start_matches("--from="))?;
            }
            _ if arg.starts_with("--to=") => {
                to = parse_bound("--to", arg.trim_start_matches("--to="))?;
            }
            _ => {
                return Err(format!("error: unknown argument '{arg}'\n\n{}", help_text()));
            }
        }
    }

    if from > to {
        return Err(format!("error: --from ({from}) must not exceed --to ({to})"));
    }

    Ok(CliConfig { from, to, trace, color })
}

fn parse_bound(flag: &str, value: &str) -> Result<i64, String> {
    value.parse::<i64>().map_err(|_| format!("error: invalid {flag} '{value}' (expected an integer)"))
}

fn help_text() -> String {
    format!(
        "triage {version}

First-match rule-dispatch demo: runs the classic FizzBuzz engine over a range.

Usage:
  triage [OPTIONS]

Options:
  --from <n>     First value of the range (inclusive). Default: {from}
  --to <n>       Last value of the range (inclusive). Default: {to}
  --trace        Print a per-value dispatch report after each line.
  --color        Force ANSI color output.
  --no-color     Disable ANSI color output.
  -h, --help     Show this help message.
  -V, --version  Print version information.

Exit codes:
  0  Success.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        from = DEFAULT_FROM,
        to = DEFAULT_TO
    )
}
