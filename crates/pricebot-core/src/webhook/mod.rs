//! Inbound platform updates: extraction, routing, acknowledgement.

pub mod ack;
pub mod dispatcher;
pub mod extract;

pub use ack::OutboundAck;
pub use dispatcher::WebhookDispatcher;
