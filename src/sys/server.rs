use crate::events::AppEvent;
use async_channel::Sender;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/fandial.sock";

/// Line commands accepted on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum ControlCommand {
    #[strum(to_string = "activate", serialize = "next")]
    Activate,
}

impl From<ControlCommand> for AppEvent {
    fn from(cmd: ControlCommand) -> Self {
        match cmd {
            ControlCommand::Activate => AppEvent::Activate,
        }
    }
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {}", e);
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        let line = line.trim();
                        if line.is_empty() {
                            continue;
                        }
                        match ControlCommand::from_str(line) {
                            Ok(cmd) => {
                                if tx.send(cmd.into()).await.is_err() {
                                    break;
                                }
                            }
                            Err(_) => log::warn!("Unknown control command '{}'", line),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

pub fn send_command(cmd: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to fandial at {}: {}. Is fandial running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", cmd)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        for line in ["activate", "ACTIVATE", "next", "Next"] {
            assert_eq!(ControlCommand::from_str(line), Ok(ControlCommand::Activate));
        }
        assert!(ControlCommand::from_str("faster").is_err());
        assert_eq!(ControlCommand::Activate.to_string(), "activate");
    }

    #[test]
    fn test_command_maps_to_event() {
        assert_eq!(AppEvent::from(ControlCommand::Activate), AppEvent::Activate);
    }
}
