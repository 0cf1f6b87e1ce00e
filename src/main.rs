//! chatbook: ask questions about a text file.
//!
//! Usage:
//!   chatbook                       # prompt for the file, default narnia.txt
//!   chatbook book.txt              # read book.txt
//!   chatbook book.txt --max-length 2000 --display-length 500
//!
//! Logs go to stderr (`RUST_LOG` overrides `-v`); stdout is the conversation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chatbook::{
    load, read_line, rule, Capacity, Error, Session, SessionConfig, DEFAULT_DISPLAY_CHARS,
};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILE: &str = "narnia.txt";

#[derive(Parser)]
#[command(
    name = "chatbook",
    version,
    about = "Answer questions about a text file by keyword matching"
)]
struct Cli {
    /// Text file to read (asked interactively when omitted)
    path: Option<PathBuf>,

    /// Maximum chunk length, in characters
    #[arg(long, default_value_t = Capacity::DEFAULT_MAX)]
    max_length: usize,

    /// Maximum answer length shown, in characters
    #[arg(long, default_value_t = DEFAULT_DISPLAY_CHARS)]
    display_length: usize,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "chatbook=debug"
    } else {
        "chatbook=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nПрограмма прервана пользователем.");
        std::process::exit(0);
    }) {
        warn!(error = %e, "interrupt handler not installed");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("\n❌ Критическая ошибка: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SessionConfig::new(cli.max_length, cli.display_length)
        .context("invalid session limits")?;

    let mut input = io::stdin().lock();
    // Not locked: the interrupt handler prints from another thread.
    let mut out = io::stdout();

    let equals = rule('=');
    writeln!(out, "{equals}")?;
    writeln!(out, "ChatBook MVP - Прототип для работы с текстовыми файлами")?;
    writeln!(out, "{equals}")?;
    writeln!(out)?;

    let path = match &cli.path {
        Some(path) => path.clone(),
        None => prompt_path(&mut input, &mut out).context("reading file path")?,
    };

    writeln!(out, "\nЧтение файла: {}", path.display())?;
    let document = match load(&path) {
        Ok(document) => document,
        Err(e) => {
            debug!(error = ?e, "load failed");
            report_load_error(&mut out, &e)?;
            return Ok(());
        }
    };
    writeln!(
        out,
        "✓ Файл успешно прочитан. Размер: {} символов",
        document.char_len()
    )?;

    writeln!(out, "\nРазбиение текста на части...")?;
    let session = Session::from_document(&document, config);
    session.greet(&mut out)?;

    session.run(&mut input, &mut out)?;
    debug!("session finished");
    Ok(())
}

fn prompt_path(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<PathBuf> {
    write!(
        out,
        "Введите путь к текстовому файлу (Enter для '{DEFAULT_FILE}'): "
    )?;
    out.flush()?;

    let mut line = String::new();
    read_line(input, &mut line)?;
    let line = line.trim();
    Ok(PathBuf::from(if line.is_empty() { DEFAULT_FILE } else { line }))
}

fn report_load_error(out: &mut impl Write, err: &Error) -> io::Result<()> {
    match err {
        Error::NotFound { .. } => {
            writeln!(out, "❌ Ошибка: {err}")?;
            writeln!(out, "\nУбедитесь, что файл существует в указанном пути.")
        }
        Error::NotAFile { .. } | Error::EmptyContent { .. } => writeln!(out, "❌ Ошибка: {err}"),
        _ => writeln!(out, "❌ Неожиданная ошибка при чтении файла: {err}"),
    }
}
