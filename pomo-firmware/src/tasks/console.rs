//! Console transport tasks
//!
//! Carries the remote-control protocol over UART0 as newline-delimited
//! text. Commands raise inbox flags for the UI loop; replies and
//! notifications are written back on the same UART.

use defmt::*;
use embassy_futures::select::{select, Either};
use embedded_io_async::{Read, Write};
use esp_hal::uart::{UartRx, UartTx};
use esp_hal::Async;

use pomo_protocol::{BotCommand, LineParser};

use crate::channels::{current_status, INBOX, NOTIFY_CHANNEL, REPLY_CHANNEL};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Console RX task - parses command lines
#[embassy_executor::task]
pub async fn console_rx_task(mut rx: UartRx<'static, Async>) {
    info!("Console RX task started");

    let mut parser = LineParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(line)) => handle_line(line.as_str()),
                        Ok(None) => {}
                        Err(e) => {
                            warn!("Console line error: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Act on one complete line
fn handle_line(line: &str) {
    let Some(cmd) = BotCommand::parse(line) else {
        debug!("Ignoring console line: {}", line);
        return;
    };
    debug!("Console command: {:?}", cmd);

    // The reply reflects the status before the command is applied
    let reply = cmd.reply(&current_status());
    if let Some(remote) = cmd.remote() {
        INBOX.raise(remote);
    }

    if REPLY_CHANNEL.try_send(reply).is_err() {
        warn!("Reply channel full, dropping reply");
    }
}

/// Console TX task - writes replies and notifications
#[embassy_executor::task]
pub async fn console_tx_task(mut tx: UartTx<'static, Async>) {
    info!("Console TX task started");

    loop {
        let result = match select(NOTIFY_CHANNEL.receive(), REPLY_CHANNEL.receive()).await {
            Either::First(message) => {
                debug!("Notification: {}", message.as_str());
                write_line(&mut tx, message.as_str()).await
            }
            Either::Second(reply) => write_line(&mut tx, reply.as_str()).await,
        };

        if let Err(e) = result {
            warn!("UART write error: {:?}", e);
        }
    }
}

async fn write_line(tx: &mut UartTx<'static, Async>, text: &str) -> Result<(), esp_hal::uart::TxError> {
    tx.write_all(text.as_bytes()).await?;
    tx.write_all(b"\r\n").await?;
    tx.flush().await
}
