//! Stdin/stdout JSON bridge for the host command channel.
//!
//! Reads newline-delimited JSON `CommandEnvelope` messages, dispatches each
//! through a [`HostHandler`], and writes one `ResponseEnvelope` line per
//! request.
//!
//! Stdout is exclusively reserved for the JSON protocol; all diagnostic
//! output (tracing, logs) must be routed to stderr.

use crate::host::contract::{CommandEnvelope, CommandName, ResponseEnvelope};
use crate::host::handler::HostHandler;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

/// Run the bridge on process stdin/stdout until EOF or `host.stop`.
pub async fn run_stdio_bridge(handler: HostHandler) -> crate::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let writer = BufWriter::new(tokio::io::stdout());
    run_bridge(handler, reader, writer).await
}

/// Run the bridge over arbitrary line-oriented streams.
///
/// Requests are handled one at a time in arrival order. Unparseable lines
/// get an error response with id `parse-error` and the loop continues.
pub async fn run_bridge<R, W>(mut handler: HostHandler, mut reader: R, mut writer: W) -> crate::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| crate::SolaceError::Bridge(format!("failed to read request: {e}")))?;

        // EOF
        if bytes_read == 0 {
            tracing::info!("input closed (EOF); shutting down bridge");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let envelope: CommandEnvelope = match serde_json::from_str(trimmed) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse command envelope");
                let response = rejection(trimmed, &e);
                write_response(&mut writer, &response).await?;
                continue;
            }
        };

        let is_stop = envelope.command == CommandName::HostStop;
        let response = handler.handle(&envelope);
        write_response(&mut writer, &response).await?;

        if is_stop {
            tracing::info!("host.stop received; shutting down bridge");
            break;
        }
    }

    Ok(())
}

/// Error response for a line that is not a valid envelope.
///
/// A well-formed request naming an unknown command keeps its id; anything
/// else is answered under `parse-error`.
fn rejection(line: &str, err: &serde_json::Error) -> ResponseEnvelope {
    let raw: Option<serde_json::Value> = serde_json::from_str(line).ok();
    let id = raw.as_ref().and_then(|v| v.get("id")).and_then(|v| v.as_str());
    let command = raw
        .as_ref()
        .and_then(|v| v.get("command"))
        .and_then(|v| v.as_str());
    match (id, command) {
        (Some(id), Some(command)) if CommandName::parse(command).is_none() => {
            ResponseEnvelope::error(id, format!("unknown command `{command}`"))
        }
        _ => ResponseEnvelope::error(
            "parse-error",
            format!("failed to parse command envelope: {err}"),
        ),
    }
}

/// Write a single JSON line and flush.
async fn write_response<W: AsyncWrite + Unpin>(
    writer: &mut W,
    response: &ResponseEnvelope,
) -> crate::Result<()> {
    let json = serde_json::to_string(response).map_err(|e| {
        crate::SolaceError::Bridge(format!("failed to serialize response envelope: {e}"))
    })?;
    writer
        .write_all(json.as_bytes())
        .await
        .map_err(|e| crate::SolaceError::Bridge(format!("failed to write response: {e}")))?;
    writer
        .write_all(b"\n")
        .await
        .map_err(|e| crate::SolaceError::Bridge(format!("failed to write newline: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| crate::SolaceError::Bridge(format!("failed to flush output: {e}")))?;
    Ok(())
}
