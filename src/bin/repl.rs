//! Interactive terminal translator
//!
//! Usage:
//!   cargo run --bin translate-repl
//!
//! Type text and press Enter to translate it. Commands start with `:`
//! (`:help` lists them).
//!
//! Optional environment variables:
//! - TRANSLATION_API_URL (defaults to the MyMemory endpoint)
//! - DEFAULT_SOURCE_LANGUAGE (defaults to en)
//! - DEFAULT_TARGET_LANGUAGE (defaults to es)

use anyhow::Result;
use text_translator::{
    clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard},
    config::Config,
    i18n::{Language, LanguageRegistry},
    session::{TranslatorSession, UiState},
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const HELP: &str = "\
Commands:
  <text>        set the input and translate it
  :go           translate the current input again
  :from <code>  set the source language
  :to <code>    set the target language
  :swap         swap languages and move the result into the input
  :clear        clear input and result
  :copy         copy the result to the clipboard
  :langs        list supported languages
  :help         show this help
  :quit         exit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Translate(String),
    Retranslate,
    From(String),
    To(String),
    Swap,
    Clear,
    Copy,
    Languages,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            return Some(Command::Translate(line.to_string()));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next().unwrap_or_default().to_string();

        Some(match name {
            "go" => Command::Retranslate,
            "from" => Command::From(arg),
            "to" => Command::To(arg),
            "swap" => Command::Swap,
            "clear" => Command::Clear,
            "copy" => Command::Copy,
            "langs" => Command::Languages,
            "help" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => Command::Unknown(name.to_string()),
        })
    }
}

fn open_clipboard() -> Box<dyn ClipboardSink> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!("{:#}; copies will stay inside this session", e);
            Box::new(MemoryClipboard::default())
        }
    }
}

fn print_status(session: &TranslatorSession) {
    println!(
        "[{} -> {}] {} characters",
        session.source().name(),
        session.target().name(),
        session.char_count()
    );
}

fn print_state(session: &TranslatorSession) {
    match session.state() {
        UiState::Idle => print_status(session),
        UiState::Loading => println!("Translating..."),
        UiState::Resolved(outcome) if outcome.is_success() => {
            println!("=> {}", outcome.message())
        }
        UiState::Resolved(outcome) => println!("!! {}", outcome.message()),
    }
}

fn select_language(code: &str) -> Option<Language> {
    match Language::from_code(code) {
        Ok(language) => Some(language),
        Err(e) => {
            println!("{} (try :langs)", e);
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("text_translator=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client = reqwest::Client::new();
    let mut session = TranslatorSession::from_config(&config);
    let mut clipboard = open_clipboard();

    println!("Text translator. Type :help for commands.");
    print_status(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Translate(text) => {
                session.set_text(text);
                println!("Translating...");
                session.translate(&client, &config).await;
                print_state(&session);
            }
            Command::Retranslate => {
                if session.can_translate() {
                    println!("Translating...");
                    session.translate(&client, &config).await;
                    print_state(&session);
                } else {
                    println!("Please enter text to translate.");
                }
            }
            Command::From(code) => {
                if let Some(language) = select_language(&code) {
                    session.set_source(language);
                    print_status(&session);
                }
            }
            Command::To(code) => {
                if let Some(language) = select_language(&code) {
                    session.set_target(language);
                    print_status(&session);
                }
            }
            Command::Swap => {
                session.swap();
                print_status(&session);
                if !session.text().is_empty() {
                    println!("Input: {}", session.text());
                }
            }
            Command::Clear => {
                session.clear();
                print_status(&session);
            }
            Command::Copy => match session.copy_result(clipboard.as_mut()) {
                Ok(true) => println!("Copied to clipboard!"),
                Ok(false) => println!("Nothing to copy yet."),
                Err(e) => println!("Copy failed: {:#}", e),
            },
            Command::Languages => {
                for lang in LanguageRegistry::get().list_all() {
                    println!("  {:<6} {} ({})", lang.code, lang.name, lang.native_name);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::Quit => break,
            Command::Unknown(name) => println!("Unknown command ':{}'. Type :help.", name),
        }
    }

    Ok(())
}
