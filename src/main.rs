use chrono::{Local, NaiveDate, Timelike};
use clap::Parser;
use daybook::application::{self, EditEntryService, NewEntryService};
use daybook::cli::{output, Cli, Commands};
use daybook::domain::{prompts_for, EntryKind};
use daybook::error::{DaybookError, Result};
use daybook::infrastructure::FileSystemRepository;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => application::init::init(&path),
        Commands::New {
            kind,
            date,
            responses,
        } => {
            let kind = parse_kind(&kind)?;
            let date = parse_date_or_today(date.as_deref())?;

            // Locate the journal before asking anything of the user
            let repo = FileSystemRepository::discover()?;

            // Flags take precedence; without them, walk the prompt set
            let responses = if responses.is_empty() {
                collect_responses_interactively(kind)?
            } else {
                parse_responses(&responses)?
            };
            let entry = NewEntryService::new(repo).execute(kind, date, responses)?;
            println!("Saved {} entry {}", entry.kind, entry.id);
            Ok(())
        }
        Commands::List { kind, date, limit } => {
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let repo = FileSystemRepository::discover()?;
            let entries = application::list_entries(&repo, kind, date, limit)?;
            print!("{}", output::format_entry_list(&entries));
            Ok(())
        }
        Commands::Show { id } => {
            let repo = FileSystemRepository::discover()?;
            let entry = application::find_entry(&repo, &id)?;
            print!("{}", output::format_entry(&entry));
            Ok(())
        }
        Commands::Edit {
            id,
            date,
            responses,
        } => {
            if responses.is_empty() && date.is_none() {
                return Err(DaybookError::Config(
                    "Nothing to change: pass --response and/or --date".to_string(),
                ));
            }
            let date = date.as_deref().map(parse_date).transpose()?;

            let repo = FileSystemRepository::discover()?;
            // With no replacement responses the existing content stands;
            // otherwise the given responses replace it as a whole
            let content = if responses.is_empty() {
                application::find_entry(&repo, &id)?.content
            } else {
                parse_responses(&responses)?
            };

            let entry = EditEntryService::new(repo).execute(&id, content, date)?;
            println!("Updated {} entry {}", entry.kind, entry.id);
            Ok(())
        }
        Commands::Delete { id } => {
            let repo = FileSystemRepository::discover()?;
            application::delete_entry(&repo, &id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
    }
}

fn parse_kind(raw: &str) -> Result<EntryKind> {
    EntryKind::from_str(raw).map_err(|_| DaybookError::InvalidEntryKind(raw.to_string()))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DaybookError::InvalidDate(raw.to_string()))
}

fn parse_date_or_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_responses(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut responses = BTreeMap::new();
    for item in raw {
        match item.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                responses.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(DaybookError::Config(format!(
                    "Invalid response '{}': expected key=value",
                    item
                )));
            }
        }
    }
    Ok(responses)
}

/// Walk the prompt set for the kind on stdin. A blank line skips a
/// prompt; end of input stops the walk.
fn collect_responses_interactively(kind: EntryKind) -> Result<BTreeMap<String, String>> {
    println!("{}! Time for your {} reflection.", output::greeting(Local::now().hour()), kind);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut responses = BTreeMap::new();

    for prompt in prompts_for(kind) {
        println!();
        println!("{}", prompt.label);
        println!("({})", prompt.placeholder);
        print!("> ");
        io::stdout().flush()?;

        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    responses.insert(prompt.id.to_string(), line);
                }
            }
            None => break,
        }
    }

    println!();
    Ok(responses)
}
