//! Interactive REPL
//!
//! Reads one command per line, dispatches it against the session, and keeps
//! going until `exit` or end of input.

pub mod commands;
pub mod handlers;

use std::io::Write;
use std::ops::ControlFlow;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::client::PokeClient;
use crate::error::{CommandError, CommandResult};
use crate::session::Session;

pub use commands::{Command, CommandInfo, COMMANDS};

pub const PROMPT: &str = "pokedex > ";

/// Everything a command can touch: the catalog, the session and the dice.
#[derive(Debug)]
pub struct Repl<R> {
    client: PokeClient,
    session: Session,
    rng: R,
}

impl<R: Rng> Repl<R> {
    pub fn new(client: PokeClient, rng: R) -> Self {
        Self {
            client,
            session: Session::new(),
            rng,
        }
    }

    pub fn client(&self) -> &PokeClient {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Execute ==
    /// Runs one command. `Break` means the session should end.
    pub async fn execute(
        &mut self,
        command: Command,
        out: &mut impl Write,
    ) -> CommandResult<ControlFlow<()>> {
        debug!(?command, "Executing command");
        match command {
            Command::Help => handlers::help(out)?,
            Command::Exit => {
                writeln!(out, "Goodbye")?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Map => handlers::map_forward(&self.client, &mut self.session, out).await?,
            Command::MapBack => handlers::map_back(&self.client, &mut self.session, out).await?,
            Command::Explore(area) => handlers::explore(&self.client, &area, out).await?,
            Command::Catch(name) => {
                handlers::catch(&self.client, &mut self.session, &mut self.rng, &name, out).await?
            }
            Command::Inspect(name) => handlers::inspect(&self.session, &name, out)?,
            Command::Pokedex => handlers::pokedex(&self.session, out)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    // == Handle Line ==
    /// Parses and runs one input line, printing any error instead of
    /// returning it. Only failures to write output are propagated.
    pub async fn handle_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
    ) -> std::io::Result<ControlFlow<()>> {
        let result = match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out).await,
            Ok(None) => Ok(ControlFlow::Continue(())),
            Err(e) => Err(e),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(CommandError::Io(e)) => Err(e),
            Err(e @ CommandError::UnknownCommand(_)) => {
                writeln!(out, "{}", e)?;
                Ok(ControlFlow::Continue(()))
            }
            Err(e) => {
                writeln!(out, "Error: {}", e)?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    // == Run ==
    /// Prompts and processes lines from `input` until `exit` or EOF, then
    /// stops the cache reaper. The reaper is stopped even when reading input
    /// or writing output fails.
    pub async fn run<I>(&mut self, input: I, out: &mut impl Write) -> std::io::Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let result = self.read_loop(input, out).await;

        self.client.close().await;
        let stats = self.client.cache().stats();
        info!(
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            hit_rate = stats.hit_rate(),
            caught = self.session.caught_count(),
            "Session ended"
        );
        result
    }

    async fn read_loop<I>(&mut self, mut input: I, out: &mut impl Write) -> std::io::Result<()>
    where
        I: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            // Bytes that are not UTF-8 become U+FFFD instead of ending the session
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line, out).await?.is_break() {
                return Ok(());
            }
        }
    }
}
