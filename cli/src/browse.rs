use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use claimdesk::search::client::QueryService;
use claimdesk::state::{parse_document_id, run_search, SearchSession};
use claimdesk::view::render_json;

use crate::render;

const HELP: &str = "\
Commands:
  search CODE    fetch documents for a community
  all            show every document
  status LABEL   show one status group
  id N           narrow the list to document N
  open N         print document N as JSON
  help           show this help
  quit           leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    All,
    Status(String),
    Id(String),
    Open(String),
    Help,
    Quit,
}

impl BrowseCommand {
    /// Parse one input line. Blank lines give `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "search" => BrowseCommand::Search(arg.to_string()),
            "all" => BrowseCommand::All,
            "status" if !arg.is_empty() => BrowseCommand::Status(arg.to_string()),
            "status" => return Err("Usage: status LABEL".to_string()),
            "id" => BrowseCommand::Id(arg.to_string()),
            "open" => BrowseCommand::Open(arg.to_string()),
            "help" | "?" => BrowseCommand::Help,
            "quit" | "exit" | "q" => BrowseCommand::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
        };
        Ok(Some(command))
    }
}

/// Read commands from stdin until `quit` or end of input.
pub async fn run(service: &dyn QueryService) -> Result<()> {
    let mut session = SearchSession::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(HELP.as_bytes()).await?;
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(msg) => {
                stdout.write_all(format!("{msg}\n").as_bytes()).await?;
                continue;
            }
        };
        if command == BrowseCommand::Quit {
            break;
        }

        let output = execute(service, &mut session, command).await;
        stdout.write_all(output.as_bytes()).await?;
    }
    Ok(())
}

/// Apply one command to the session and return what to print. Failures
/// are reported as text; the session stays usable.
pub async fn execute(
    service: &dyn QueryService,
    session: &mut SearchSession,
    command: BrowseCommand,
) -> String {
    match command {
        BrowseCommand::Search(code) => match run_search(service, session, &code).await {
            Ok(()) => render::listing(session),
            Err(e) => format!("{}\n", user_text(&e)),
        },
        BrowseCommand::All => {
            session.show_all();
            render::listing(session)
        }
        BrowseCommand::Status(label) => {
            session.select_status(&label);
            render::listing(session)
        }
        BrowseCommand::Id(raw) => match parse_document_id(&raw) {
            Ok(id) => match session.filter_by_id(id).notice() {
                Some(notice) => format!("{notice}\n"),
                None => render::listing(session),
            },
            Err(e) => format!("{e}\n"),
        },
        BrowseCommand::Open(raw) => match parse_document_id(&raw) {
            Ok(id) => match service.fetch_document(id).await {
                Ok(document) => format!("{}\n", render_json(&document)),
                Err(e) => format!("{}\n", e.user_message()),
            },
            Err(e) => format!("{e}\n"),
        },
        BrowseCommand::Help => HELP.to_string(),
        BrowseCommand::Quit => String::new(),
    }
}

fn user_text(err: &claimdesk::error::AppError) -> String {
    use claimdesk::error::AppError;
    match err {
        AppError::Query(e) => e.user_message(),
        other => other.to_string(),
    }
}
