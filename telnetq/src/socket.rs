//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Negotiation bound to a byte transport
//!
//! [`SocketNegotiator`] wires a [`NegotiationEngine`] to anything implementing
//! [`Transport`]: every message the engine emits is encoded and written
//! immediately. Reading stays with the caller, who hands each 3-byte message
//! to [`SocketNegotiator::received_raw_message`].

use crate::{
    NegotiationAnomaly, NegotiationConfig, NegotiationEngine, NegotiationHandler,
    NegotiationMessage, NegotiationResult, NegotiationState, NullHandler, Party, TelnetVerb, codec,
};
use bytes::{Bytes, BytesMut};
use std::io;
use tracing::warn;

/// Write half of a negotiation channel.
pub trait Transport {
    /// Write all of `bytes` or fail.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

impl Transport for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl Transport for BytesMut {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl Transport for std::net::TcpStream {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::Write::write_all(self, bytes)
    }
}

#[cfg(unix)]
impl Transport for std::os::unix::net::UnixStream {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::Write::write_all(self, bytes)
    }
}

/// Hands messages to an async writer task.
impl Transport for tokio::sync::mpsc::UnboundedSender<Bytes> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.send(Bytes::copy_from_slice(bytes))
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "negotiation channel closed"))
    }
}

///
/// [`NegotiationHandler`] that writes outbound messages to a [`Transport`] and
/// forwards every hook to an application policy.
///
/// The policy sees each outbound message before it is written.
///
#[derive(Debug)]
pub struct SocketHandler<T, P> {
    transport: T,
    policy: P,
    pending: Option<io::Error>,
}

impl<T: Transport, P: NegotiationHandler> NegotiationHandler for SocketHandler<T, P> {
    fn send_message(&mut self, verb: TelnetVerb, option: u8) {
        self.policy.send_message(verb, option);
        if let Err(err) = self.transport.write(&codec::encode(verb, option)) {
            warn!(%verb, option, error = %err, "negotiation write failed");
            if self.pending.is_none() {
                self.pending = Some(err);
            }
        }
    }

    fn option_supported(&mut self, party: Party, option: u8, requested: bool) -> bool {
        self.policy.option_supported(party, option, requested)
    }

    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        self.policy.option_negotiated(party, option, enabled);
    }

    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        self.policy.negotiation_error(anomaly, party, option);
    }
}

///
/// A [`NegotiationEngine`] that writes its messages to a [`Transport`].
///
/// Writes happen inside the state machines, which cannot fail. The first write
/// error is held and returned as [`NegotiationError::Io`](crate::NegotiationError::Io)
/// when the operation that caused it finishes.
///
/// # Example
///
/// ```
/// use telnetq::{NegotiationConfig, Party, SocketNegotiator};
///
/// let config = NegotiationConfig::new().with_us([1]);
/// let mut negotiator = SocketNegotiator::new(Vec::new(), config);
/// negotiator.start().unwrap();
/// assert_eq!(negotiator.transport(), &vec![255, 251, 1]);
///
/// negotiator.received_raw_message(&[255, 253, 1]).unwrap();
/// assert!(negotiator.is_enabled(Party::Us, 1));
/// ```
pub struct SocketNegotiator<T, P = NullHandler> {
    engine: NegotiationEngine<SocketHandler<T, P>>,
}

impl<T: Transport> SocketNegotiator<T> {
    /// Creates a negotiator with default policy.
    pub fn new(transport: T, config: NegotiationConfig) -> Self {
        SocketNegotiator::with_policy(transport, config, NullHandler)
    }
}

impl<T: Transport, P: NegotiationHandler> SocketNegotiator<T, P> {
    /// Creates a negotiator that consults `policy` for capability checks and
    /// reports negotiation results to it.
    pub fn with_policy(transport: T, config: NegotiationConfig, policy: P) -> Self {
        let handler = SocketHandler {
            transport,
            policy,
            pending: None,
        };
        SocketNegotiator {
            engine: NegotiationEngine::new(config, handler),
        }
    }

    /// Writes the initial `WILL`/`DO` requests.
    pub fn start(&mut self) -> NegotiationResult<()> {
        self.engine.start();
        self.take_pending()
    }

    /// See [`NegotiationEngine::request`].
    pub fn request(&mut self, party: Party, option: u8) -> NegotiationResult<()> {
        self.engine.request(party, option);
        self.take_pending()
    }

    /// See [`NegotiationEngine::forbid`].
    pub fn forbid(&mut self, party: Party, option: u8) -> NegotiationResult<()> {
        self.engine.forbid(party, option);
        self.take_pending()
    }

    /// Handles an already decoded message.
    pub fn received_message(&mut self, message: NegotiationMessage) -> NegotiationResult<()> {
        self.engine.receive_message(message);
        self.take_pending()
    }

    /// Decodes and handles one 3-byte message read from the peer.
    ///
    /// # Errors
    ///
    /// Malformed input is rejected before any state changes.
    pub fn received_raw_message(&mut self, bytes: &[u8]) -> NegotiationResult<()> {
        let message = codec::decode(bytes)?;
        self.received_message(message)
    }

    fn take_pending(&mut self) -> NegotiationResult<()> {
        match self.engine.handler_mut().pending.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl<T, P> SocketNegotiator<T, P> {
    /// Checks if `option` is enabled on `party`'s side.
    pub fn is_enabled(&self, party: Party, option: u8) -> bool {
        self.engine.is_enabled(party, option)
    }

    /// Current state of `option` on `party`'s side.
    pub fn state(&self, party: Party, option: u8) -> NegotiationState {
        self.engine.state(party, option)
    }

    /// The underlying engine.
    pub fn engine(&self) -> &NegotiationEngine<SocketHandler<T, P>> {
        &self.engine
    }

    /// The transport messages are written to.
    pub fn transport(&self) -> &T {
        &self.engine.handler().transport
    }

    /// Mutable access to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.engine.handler_mut().transport
    }

    /// The application policy.
    pub fn policy(&self) -> &P {
        &self.engine.handler().policy
    }

    /// Mutable access to the application policy.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.engine.handler_mut().policy
    }

    /// Consumes the negotiator, returning transport and policy.
    pub fn into_parts(self) -> (T, P) {
        let handler = self.engine.into_handler();
        (handler.transport, handler.policy)
    }
}

impl<T, P> std::fmt::Debug for SocketNegotiator<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocketNegotiator")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
