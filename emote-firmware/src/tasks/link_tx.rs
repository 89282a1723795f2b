//! Link UART transmit task
//!
//! Opens the message channel, then answers heartbeats from the bridge.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use emote_protocol::DeviceMessage;

use crate::channels::HEARTBEAT_RECEIVED;

/// Link TX task - sends frames to the bridge
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx, inbox_size: u16, outbox_size: u16) {
    info!("Link TX task started");

    let open = DeviceMessage::Open {
        inbox_size,
        outbox_size,
    };
    send(&mut tx, &open).await;
    info!("Link opened (inbox={}, outbox={})", inbox_size, outbox_size);

    loop {
        HEARTBEAT_RECEIVED.wait().await;
        send(&mut tx, &DeviceMessage::Pong).await;
    }
}

/// Encode and write one message
async fn send(tx: &mut BufferedUartTx, message: &DeviceMessage) {
    let frame = match message.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Failed to encode {:?}: {:?}", message, e);
            return;
        }
    };

    if let Err(e) = tx.write_all(&frame.to_bytes()).await {
        warn!("Failed to send {:?}: {:?}", message, e);
    } else {
        trace!("{:?} sent", message);
    }
}
