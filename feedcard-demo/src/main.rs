use crate::command::{Command, CommandError, Step};
use feedcard_common::model::{ModelValidationError, author::Author, post::Post};
use feedcard_ui::{event::EventOutcome, post::PostCard};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::{OffsetDateTime, UtcOffset};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;

const SAMPLE_POST: &str = r#"{
    "author": {
        "name": "Diego Fernandes",
        "avatarUrl": "https://github.com/diego3g.png",
        "role": "CTO @Rocketseat"
    },
    "publishedAt": "2024-11-13T20:00:00-03:00",
    "content": [
        {"text": "Fala galeraa 👋"},
        {"text": "Acabei de subir mais um projeto no meu portifa. É um projeto que fiz no NLW Return, evento da Rocketseat. O nome do projeto é DoctorCare 🚀"},
        {"link": "jane.design/doctorcare"}
    ]
}"#;

#[derive(Debug, Error)]
enum InitError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error("Invalid utc offset: {0}")]
    UtcOffset(#[from] time::error::ComponentRange),
    #[error("Error reading post file {0}: {1}")]
    PostFile(PathBuf, std::io::Error),
    #[error("Post props could not be parsed: {0}")]
    PostProps(#[from] serde_json::Error),
    #[error("Invalid commenter: {0}")]
    Commenter(#[from] ModelValidationError),
    #[error("Error reading input: {0}")]
    Stdin(std::io::Error),
    #[error("Error writing output: {0}")]
    Stdout(std::io::Error),
}

fn default_commenter_name() -> String {
    "Davy Serra".to_owned()
}

fn default_commenter_avatar_url() -> String {
    "https://github.com/davyserra.png".to_owned()
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
struct Env {
    post_file: Option<PathBuf>,
    #[serde(default = "default_commenter_name")]
    commenter_name: String,
    #[serde(default = "default_commenter_avatar_url")]
    commenter_avatar_url: String,
    #[serde(default)]
    commenter_role: String,
    #[serde(default)]
    utc_offset_hours: i8,
}

impl Env {
    fn utc_offset(&self) -> Result<UtcOffset, InitError> {
        Ok(UtcOffset::from_hms(self.utc_offset_hours, 0, 0)?)
    }
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedcard_demo=debug,feedcard_ui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn get_env() -> Result<Env, InitError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .env file found");
        } else {
            return Err(e.into());
        }
    }

    envy::prefixed("FEEDCARD_")
        .from_env()
        .map_err(InitError::from)
}

fn load_post(path: Option<&Path>) -> Result<Post, InitError> {
    let post = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|err| InitError::PostFile(path.to_owned(), err))?;
            serde_json::from_str(&json)?
        }
        None => serde_json::from_str(SAMPLE_POST)?,
    };
    Ok(post)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    let offset = env.utc_offset()?;
    let now = move || OffsetDateTime::now_utc().to_offset(offset);

    let post = load_post(env.post_file.as_deref())?;
    let commenter = Author::new(
        env.commenter_name,
        env.commenter_avatar_url,
        env.commenter_role,
    )?;
    let mut card = PostCard::mount(post, commenter, now());
    info!(
        author = card.post().author.name.get(),
        commenter = card.commenter().name.get(),
        "Post card mounted"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.map_err(InitError::Stdin)?,
            _ = tokio::signal::ctrl_c() => {
                debug!("Interrupted");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        let step = match line.parse::<Command>() {
            Ok(command) => command.into_step(&card),
            Err(CommandError::Empty) => continue,
            Err(err) => Err(err),
        };

        match step {
            Ok(Step::Dispatch(event)) => match card.dispatch(event, now()) {
                Ok(EventOutcome::Deleted { id, removed: false }) => {
                    warn!(%id, "Nothing deleted");
                }
                Ok(outcome) => debug!(?outcome, "Event handled"),
                Err(err) => warn!(error = %err, "Event rejected"),
            },
            Ok(Step::Render) => {
                let html = format!("{}\n", card.render(now()));
                stdout
                    .write_all(html.as_bytes())
                    .await
                    .map_err(InitError::Stdout)?;
                stdout.flush().await.map_err(InitError::Stdout)?;
            }
            Ok(Step::Quit) => break,
            Err(err) => warn!(error = %err, "Invalid command"),
        }
    }

    Ok(())
}
