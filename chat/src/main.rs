mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use commands::{parse_line, Command, HELP};
use rag_client::{AskStatus, ChatService, HttpBackend, Session};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use ui::{ask_notice, upload_notice, uploading_notice, Level, Notice, Screen};

async fn upload(service: &ChatService, screen: &Screen, session: &mut Session, path: &Path) -> Result<Notice> {
    if let Some(notice) = uploading_notice(session, path) {
        screen.show(&notice)?;
    }

    let result = service.upload_pdf(session, path).await;
    if let Err(e) = &result {
        log::warn!("Upload of {} failed: {}", path.display(), e);
    }
    Ok(upload_notice(&result))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = args.client_config()?;
    log::info!("Upload endpoint: {}", config.upload_url);
    log::info!("Question endpoint: {}", config.ask_url);

    let service = ChatService::new(Arc::new(HttpBackend::new(config)));
    let screen = Screen::new(!args.no_color);
    let mut session = Session::new();
    log::info!("Started session {}", session.id());

    screen.redraw(&session, None)?;
    if let Some(pdf) = &args.pdf {
        let notice = upload(&service, &screen, &mut session, pdf).await?;
        screen.redraw(&session, Some(&notice))?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        screen.prompt()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_line(&line) {
            Command::Upload(path) => {
                let notice = upload(&service, &screen, &mut session, &path).await?;
                screen.redraw(&session, Some(&notice))?;
            }
            Command::Ask(question) => {
                let result = service.ask(&mut session, &question).await;
                if let Err(e) = &result {
                    log::warn!("Question failed: {}", e);
                }
                match (&result, ask_notice(&result)) {
                    (Ok(AskStatus::Ignored), _) => {}
                    (_, notice) => screen.redraw(&session, notice.as_ref())?,
                }
            }
            Command::Help => screen.show(&Notice::new(Level::Info, HELP))?,
            Command::Quit => break,
            Command::Unknown(command) => {
                screen.show(&Notice::new(Level::Warning, format!("Unknown command: {} (try /help)", command)))?
            }
        }
    }

    log::info!("Session {} ended with {} messages", session.id(), session.messages().len());
    Ok(())
}
