//! Line-oriented terminal front end.
//!
//! Each input line is a path to navigate to or a command:
//!
//! - `fav <id>` - toggle a favorite
//! - `export` - print favorites as JSON
//! - `quit` / `exit` - stop

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::error::Result;
use super::shell::Shell;

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Navigate(&'a str),
    Favorite(&'a str),
    Export,
    Quit,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some(("fav", id)) => Some(Self::Favorite(id.trim())),
            _ => match line {
                "" => None,
                "quit" | "exit" => Some(Self::Quit),
                "export" => Some(Self::Export),
                path => Some(Self::Navigate(path)),
            },
        }
    }
}

/// Terminal handler.
pub struct Terminal;

impl Terminal {
    /// Run over stdin/stdout.
    pub async fn run(shell: &Shell) -> Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        Self::run_with(shell, stdin, stdout).await
    }

    /// Run over arbitrary streams until `quit` or end of input.
    pub async fn run_with<R, W>(shell: &Shell, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Ready - reading paths from stdin");

        shell.navigate("/").settled().await;
        Self::show(shell, &mut output).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            debug!("Command: {:?}", command);

            match command {
                Command::Quit => break,
                Command::Export => {
                    let json = shell.export_favorites()?;
                    output.write_all(json.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                Command::Favorite(id) => {
                    shell.toggle_favorite(id).await;
                    Self::show(shell, &mut output).await?;
                }
                Command::Navigate(path) => {
                    shell.navigate(path).settled().await;
                    Self::show(shell, &mut output).await?;
                }
            }
            output.flush().await?;
        }

        info!("Terminal finished");
        Ok(())
    }

    async fn show<W: AsyncWrite + Unpin>(shell: &Shell, output: &mut W) -> Result<()> {
        output.write_all(shell.render().as_bytes()).await?;
        output.write_all(b"\n\n").await?;
        output.flush().await?;
        Ok(())
    }
}
