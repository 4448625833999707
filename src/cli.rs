// src/cli.rs
use std::{env, error::Error, io::{self, Write}, path::PathBuf, time::Duration};

use crate::{
    config::options::{AppOptions, OutputFormat},
    csv,
    progress::RecordingProgress,
    scrape::Pipeline,
    store,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Print what is already in the store.
    List { options: AppOptions, include_headers: bool },
    /// Scrape and print what was found.
    Scrape { options: AppOptions, include_headers: bool },
}

pub fn run() -> Result<(), Box<dyn Error>> {
    crate::log::init();

    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            Ok(())
        }
        Command::List { options, include_headers } => {
            let records = store::load_contacts(&options.scrape.db_path)?;
            let contacts: Vec<_> = records.into_iter().map(|r| r.contact).collect();
            let mut out = io::stdout().lock();
            csv::write_contacts(&mut out, &contacts, include_headers, options.format.delim())?;
            out.flush()?;
            Ok(())
        }
        Command::Scrape { options, include_headers } => {
            let pipeline = Pipeline::new(options.scrape.clone());
            let mut prog = RecordingProgress::default();
            let contacts = pipeline.run_default(Some(&mut prog));

            if let Some(failure) = prog.failures.first() {
                return Err(failure.clone().into());
            }

            let mut out = io::stdout().lock();
            csv::write_contacts(&mut out, &contacts, include_headers, options.format.delim())?;
            out.flush()?;
            eprintln!("Found {} contact(s)", contacts.len());
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut list = false;
    let mut include_headers = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                options.scrape.url = v; }
            "--db" => options.scrape.db_path = PathBuf::from(args.next().ok_or("Missing database path")?),
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if v == 0 { return Err("Timeout must be at least 1 second".into()); }
                options.scrape.timeout = Duration::from_secs(v); }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => OutputFormat::Csv,
                    "tsv" => OutputFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => include_headers = true,
            "--list" => list = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if list {
        return Ok(Command::List { options, include_headers });
    }
    Ok(Command::Scrape { options, include_headers })
}
