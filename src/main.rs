use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

mod cmd;
mod robot;
mod utils;

use cmd::{Dispatcher, Outcome};
use robot::RobotCore;
use utils::output::{Color, color};

/// Robot Console - textual command dispatcher for a small robot agent
///
/// Commands are single lines with named options:
///   rotate --horizontal=0.5 --vertical=-0.25
///   toggle --obj=camera --state=off
///   say --text='hello world'
///   help --command=rotate
///
/// Modes:
///   robot-console "rotate --horizontal=1"   one-shot; exit code 1 on failure
///   robot-console                           interactive console (exit/quit to leave)
///
/// Global flags:
///   -v / -vv        Increase verbosity
///   -q / --quiet    Errors only
///   --json          Emit outcomes as JSON instead of colored text
#[derive(Parser, Debug)]
#[command(
    name = "robot-console",
    version,
    about = "Robot Console - command dispatcher for the robot agent",
    disable_help_subcommand = true
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Emit each outcome as a JSON object
    #[arg(long)]
    json: bool,

    /// Command line to execute; omit to enter the interactive console
    #[arg(value_name = "COMMAND")]
    command: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = utils::derive_level(cli.verbose, cli.quiet);
    utils::init_logging(level);

    let mut dispatcher = Dispatcher::new(RobotCore::new());

    match cli.command {
        Some(line) => {
            let outcome = dispatcher.execute(&line);
            report(&outcome, cli.json);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        None => run_console(&mut dispatcher, cli.json)?,
    }

    Ok(())
}

/// Interactive read-dispatch-print loop over stdin.
fn run_console(dispatcher: &mut Dispatcher, json: bool) -> Result<()> {
    if !json {
        println!(
            "{}",
            color(
                Color::Bold,
                "robot-console - type 'help' for commands, 'exit' to leave"
            )
        );
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        if !json {
            write!(stdout, "{} ", color(Color::Cyan, ">"))?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let outcome = dispatcher.execute(line);
        report(&outcome, json);
    }

    Ok(())
}

/// Print one outcome, as JSON or colored text.
fn report(outcome: &Outcome, json: bool) {
    if json {
        let obj = serde_json::json!({
            "status": if outcome.success { "ok" } else { "error" },
            "message": outcome.message,
        });
        println!(
            "{}",
            serde_json::to_string(&obj).unwrap_or_else(|_| obj.to_string())
        );
    } else if outcome.success {
        println!("{} {}", color(Color::Green, "ok:"), outcome.message);
    } else {
        println!("{} {}", color(Color::Red, "error:"), outcome.message);
    }
}
