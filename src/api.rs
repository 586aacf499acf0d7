//! Endpoint callers built on the request pipeline.
//!
//! Each caller only maps its arguments into a [`Payload`](crate::payload::Payload) and names the
//! response shape; transport, authentication, and error translation all happen in
//! [`client::pipeline`](crate::client::pipeline).

pub mod add;
pub mod oauth;
pub mod retrieve;

pub use add::*;
pub use oauth::*;
pub use retrieve::*;
