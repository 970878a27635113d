//! One exchange: ask the server, fall back to the local responder.

use sid_core::filler::RandomPicker;
use sid_core::local::local_reply;

use crate::client::SidClient;
use crate::{Error, Result};

pub const LOCAL_SOURCE: &str = "local";

#[derive(Debug)]
pub struct Reply {
    pub text: String,
    /// Model that answered, or [`LOCAL_SOURCE`].
    pub source: String,
}

pub async fn answer(client: &SidClient, offline: bool, message: &str) -> Result<Reply> {
    if message.trim().is_empty() {
        return Err(Error::Custom("message is required".into()));
    }

    if !offline {
        match client.send(message).await {
            Ok(reply) => {
                if let Some(note) = &reply.note {
                    log::info!("{note}");
                }
                return Ok(Reply {
                    text: reply.response,
                    source: reply.model,
                });
            }
            Err(e) => log::warn!("server unavailable, answering locally: {e}"),
        }
    }

    Ok(Reply {
        text: local_reply(message, &RandomPicker).to_string(),
        source: LOCAL_SOURCE.to_string(),
    })
}
