use crate::io::{Io, Pipe};
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Move, Position, Square};
use lib::net::{ClientEvent, Handler, ServerEvent};
use lib::view::{BoardView, Options};
use std::{io, ops::ControlFlow};
use tokio::io::{stdin, stdout};
use tokio::net::TcpStream;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::select;
use tracing::{info, instrument, warn};

/// Joins a game server and plays on the terminal.
#[derive(Debug, Parser)]
pub struct Connect {
    /// Address of the game server, e.g. `localhost:3000`.
    address: String,

    /// How to draw the board, e.g. `options(glyphs: letter)`.
    #[clap(long, default_value_t)]
    options: Options,
}

impl Connect {
    #[instrument(level = "trace", skip(self), err)]
    pub async fn execute(self) -> Result<(), Anyhow> {
        let stream = TcpStream::connect(&self.address)
            .await
            .with_context(|| format!("failed to connect to `{}`", self.address))?;

        info!(address = %self.address, "connected");

        let (reader, writer) = stream.into_split();
        let server = Pipe::new(writer, reader);
        let terminal = Pipe::new(stdout(), stdin());
        Session::new(server, terminal, self.options).run().await
    }
}

/// A command typed on the terminal.
#[derive(Debug, Parser)]
#[clap(no_binary_name = true, disable_version_flag = true)]
enum Command {
    /// Picks up the piece on a square.
    Drag { square: Square },

    /// Drops the piece in hand on a square.
    Drop { square: Square },

    /// Puts back the piece in hand.
    Cancel,

    /// Drags a piece and drops it on another square.
    Move { whence: Square, whither: Square },

    /// Draws the board again.
    Show,

    /// Leaves the game.
    Quit,
}

enum Input {
    Outbound(Move),
    Server(io::Result<String>),
    Terminal(io::Result<String>),
}

struct Session<S: Io, T: Io> {
    board: BoardView<Position, UnboundedSender<Move>>,
    outbox: UnboundedReceiver<Move>,
    server: S,
    terminal: T,
    options: Options,
}

impl<S: Io, T: Io> Session<S, T> {
    fn new(server: S, terminal: T, options: Options) -> Self {
        let (tx, outbox) = unbounded_channel();

        Session {
            board: BoardView::new(Position::default(), tx),
            outbox,
            server,
            terminal,
            options,
        }
    }

    async fn run(&mut self) -> Result<(), Anyhow> {
        self.show().await?;

        loop {
            let input = select! {
                biased;
                Some(m) = self.outbox.recv() => Input::Outbound(m),
                line = self.server.recv() => Input::Server(line),
                line = self.terminal.recv() => Input::Terminal(line),
            };

            match input {
                Input::Outbound(m) => self.submit(m).await?,

                Input::Server(Ok(line)) => self.on_server_line(&line).await?,
                Input::Server(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("the server closed the connection");
                    break Ok(());
                }
                Input::Server(Err(e)) => break Err(e).context("lost connection to the server"),

                Input::Terminal(Ok(line)) => {
                    if self.on_terminal_line(&line).await?.is_break() {
                        break Ok(());
                    }
                }

                Input::Terminal(Err(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break Ok(()),
                Input::Terminal(Err(e)) => break Err(e.into()),
            }
        }
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn submit(&mut self, m: Move) -> Result<(), Anyhow> {
        self.server.send(&ClientEvent::Move(m).to_string()).await?;
        self.server.flush().await?;
        Ok(())
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn on_server_line(&mut self, line: &str) -> Result<(), Anyhow> {
        match line.parse::<ServerEvent>() {
            Ok(event) => {
                self.board.dispatch(event);
                self.show().await?;
            }

            Err(e) => warn!(line, "{:?}", Anyhow::from(e)),
        }

        Ok(())
    }

    #[instrument(level = "debug", skip(self), err)]
    async fn on_terminal_line(&mut self, line: &str) -> Result<ControlFlow<()>, Anyhow> {
        if line.trim().is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        let cmd = match Command::try_parse_from(line.split_whitespace()) {
            Ok(cmd) => cmd,
            Err(e) => {
                self.print(e.to_string().trim_end()).await?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        match cmd {
            Command::Drag { square } => {
                if let Err(e) = self.board.on_drag_start(square) {
                    self.print(&e.to_string()).await?;
                }
            }

            Command::Drop { square } => {
                self.board.on_drop(square);
                self.board.on_drag_end();
            }

            Command::Cancel => self.board.on_drag_end(),

            Command::Move { whence, whither } => match self.board.on_drag_start(whence) {
                Ok(_) => {
                    self.board.on_drop(whither);
                    self.board.on_drag_end();
                }

                Err(e) => self.print(&e.to_string()).await?,
            },

            Command::Show => {}

            Command::Quit => return Ok(ControlFlow::Break(())),
        }

        self.show().await?;
        Ok(ControlFlow::Continue(()))
    }

    async fn show(&mut self) -> io::Result<()> {
        let board = format!(
            "{}, {} to move\n{}",
            self.board.viewer(),
            self.board.rules().turn(),
            self.board.tree().draw(self.options)
        );

        self.print(board.trim_end_matches('\n')).await
    }

    async fn print(&mut self, msg: &str) -> io::Result<()> {
        self.terminal.send(msg).await?;
        self.terminal.flush().await
    }
}
