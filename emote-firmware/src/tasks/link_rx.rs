//! Link UART receive task
//!
//! Receives frames from the bridge and queues them for the controller.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use emote_core::Inbound;
use emote_protocol::{FrameParser, LinkMessage, TransportReason};

use crate::channels::{post_input, HEARTBEAT_RECEIVED};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - receives and parses frames from the bridge
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match LinkMessage::from_frame(&frame) {
                            Ok(message) => handle_link_message(message).await,
                            Err(e) => {
                                warn!("Failed to parse link message: {:?}", e);
                                report_malformed().await;
                            }
                        },
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Frame parse error: {:?}", e);
                            report_malformed().await;
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

/// Answer heartbeats here, queue everything else for the controller
async fn handle_link_message(message: LinkMessage) {
    if message == LinkMessage::Ping {
        trace!("PING received");
        HEARTBEAT_RECEIVED.signal(());
        return;
    }

    if let LinkMessage::Inbox(record) = &message {
        debug!("Inbox record with {} tuples", record.len());
    }
    post_input(Inbound::Link(message)).await;
}

/// Corrupt bytes count as a lost inbound message
async fn report_malformed() {
    post_input(Inbound::Link(LinkMessage::InboxDropped(TransportReason::Malformed))).await;
}
