// Main entry point for the SkyQuery CLI
// This provides an interactive shell to fill in and review answer slots

use anyhow::{anyhow, Context, Result};
use clap::Parser as ClapParser;
use skyquery::logging::LogConfig;
use skyquery::{prompt, AnswerSheet, QueryTable};
use std::io::{self, Write};
use std::path::PathBuf;

/// SkyQuery - answer slots for the airline database assignment
#[derive(ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Answer sheet (JSON) to load at startup
    #[arg(short, long)]
    answers: Option<PathBuf>,

    /// Start with question 0 already answered by the worked example
    #[arg(short, long)]
    worked_example: bool,

    /// Print one question and its current query, then exit
    #[arg(short, long)]
    show: Option<i64>,

    /// Print the answer sheet as JSON, then exit
    #[arg(short, long)]
    export: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    LogConfig::default().with_level(&args.log_level).init()?;

    let mut table = if args.worked_example {
        QueryTable::with_worked_example()
    } else {
        QueryTable::new()
    };

    if let Some(path) = &args.answers {
        AnswerSheet::load(path)
            .and_then(|sheet| sheet.apply(&mut table))
            .with_context(|| format!("Failed to load answers from {}", path.display()))?;
    }

    if let Some(index) = args.show {
        show_slot(&table, index)?;
        return Ok(());
    }

    if args.export {
        println!("{}", AnswerSheet::from_table(&table).to_json()?);
        return Ok(());
    }

    println!("╔════════════════════════════════════════════╗");
    println!("║          SkyQuery Answer Shell            ║");
    println!("║   Airline database assignment, 11 slots   ║");
    println!("╚════════════════════════════════════════════╝");
    println!();
    println!("Type '.help' for help");
    println!("Type '.exit' to quit");
    println!();

    repl(|input| match Command::parse(input)? {
        Command::Exit => Ok(false),
        command => {
            run_command(&mut table, command)?;
            Ok(true)
        }
    })
}

/// One shell command
#[derive(Debug, PartialEq)]
enum Command {
    Exit,
    Help,
    List,
    Show(i64),
    Set(i64, String),
    Export,
    Save(PathBuf),
}

impl Command {
    /// Parse a line typed at the prompt
    fn parse(input: &str) -> Result<Command> {
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        match name {
            ".exit" | ".quit" => Ok(Command::Exit),
            ".help" => Ok(Command::Help),
            ".list" => Ok(Command::List),
            ".export" => Ok(Command::Export),
            ".show" => Ok(Command::Show(parse_index(rest)?)),
            ".set" => {
                let (index, query) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| anyhow!("Usage: .set <index> <query>"))?;
                Ok(Command::Set(parse_index(index)?, query.trim().to_string()))
            }
            ".save" => {
                if rest.is_empty() {
                    return Err(anyhow!("Usage: .save <file>"));
                }
                Ok(Command::Save(PathBuf::from(rest)))
            }
            _ => Err(anyhow!("Unknown command: {}. Type '.help' for help", input)),
        }
    }
}

fn parse_index(text: &str) -> Result<i64> {
    text.trim()
        .parse()
        .with_context(|| format!("Expected a slot index, got '{}'", text.trim()))
}

/// Run a parsed command against the table
fn run_command(table: &mut QueryTable, command: Command) -> Result<()> {
    match command {
        Command::Exit => {}
        Command::Help => print_help(),
        Command::List => println!("{}", table.format()),
        Command::Show(index) => show_slot(table, index)?,
        Command::Set(index, query) => {
            table.set(index, query)?;
            println!("Slot {} updated", index);
        }
        Command::Export => println!("{}", AnswerSheet::from_table(table).to_json()?),
        Command::Save(path) => {
            AnswerSheet::from_table(table).save(&path)?;
            println!("Answers saved to {}", path.display());
        }
    }
    Ok(())
}

/// Print a question followed by the query currently in its slot
fn show_slot(table: &QueryTable, index: i64) -> Result<()> {
    println!("{}", prompt(index)?);
    println!();
    println!("{}", table.get(index)?.trim());
    Ok(())
}

/// REPL (Read-Eval-Print Loop) implementation
///
/// `execute_fn` returns `Ok(false)` when the shell should stop.
fn repl<F>(mut execute_fn: F) -> Result<()>
where
    F: FnMut(&str) -> Result<bool>,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("skyquery> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            // EOF
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match execute_fn(input) {
            Ok(true) => {}
            Ok(false) => {
                println!("Goodbye!");
                break;
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("Commands:");
    println!("  .help              Show this help message");
    println!("  .exit, .quit       Exit the shell");
    println!("  .list              Show every slot and whether it is answered");
    println!("  .show <index>      Show a question and its current query");
    println!("  .set <index> <q>   Replace the query in a slot");
    println!("  .export            Print the answer sheet as JSON");
    println!("  .save <file>       Write the answer sheet to a file");
    println!();
    println!("Notes:");
    println!("  - Slots are numbered 0 to 10");
    println!("  - Every slot starts as 'select 0;'");
    println!("  - A slot can never be set to an empty query");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse(".quit").unwrap(), Command::Exit);
        assert_eq!(Command::parse(".list").unwrap(), Command::List);
        assert_eq!(Command::parse(".show 3").unwrap(), Command::Show(3));
        assert_eq!(
            Command::parse(".save out.json").unwrap(),
            Command::Save(PathBuf::from("out.json"))
        );
    }

    #[test]
    fn test_parse_set_keeps_query_text() {
        assert_eq!(
            Command::parse(".set 5 select name from airlines order by name;").unwrap(),
            Command::Set(5, "select name from airlines order by name;".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Command::parse(".set 5").is_err());
        assert!(Command::parse(".show five").is_err());
        assert!(Command::parse(".save").is_err());
        assert!(Command::parse("select 1;").is_err());
    }

    #[test]
    fn test_run_set_then_show() {
        let mut table = QueryTable::new();
        run_command(&mut table, Command::Set(5, "select 1;".to_string())).unwrap();
        assert_eq!(table.get(5).unwrap(), "select 1;");
        assert!(run_command(&mut table, Command::Show(11)).is_err());
        assert!(run_command(&mut table, Command::Set(-1, "select 1;".to_string())).is_err());
    }
}
