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

//! Application policy hooks for a [`NegotiationEngine`](crate::NegotiationEngine)

use crate::{NegotiationAnomaly, NegotiationEvent, NegotiationMessage, Party, TelnetVerb};

///
/// Policy and observer hooks an engine calls while negotiating.
///
/// Only [`send_message`](Self::send_message) must be provided; everything else
/// has a default matching plain RFC 1143 behavior.
///
/// # Example
///
/// ```
/// use telnetq::{NegotiationHandler, Party, TelnetVerb};
///
/// struct AlwaysEcho(Vec<(TelnetVerb, u8)>);
///
/// impl NegotiationHandler for AlwaysEcho {
///     fn send_message(&mut self, verb: TelnetVerb, option: u8) {
///         self.0.push((verb, option));
///     }
///
///     fn option_supported(&mut self, _party: Party, option: u8, requested: bool) -> bool {
///         option == telnetq::consts::option::ECHO || requested
///     }
/// }
/// ```
///
pub trait NegotiationHandler {
    /// Emit `verb option` to the peer.
    fn send_message(&mut self, verb: TelnetVerb, option: u8);

    /// Decide whether the peer may enable `option` on `party`'s side when it
    /// asks unprompted.
    ///
    /// `requested` reports whether the option is currently in the engine's
    /// supported set for that party, which is the default answer.
    fn option_supported(&mut self, party: Party, option: u8, requested: bool) -> bool {
        let _ = (party, option);
        requested
    }

    /// Called once per real transition into `Yes` (`enabled = true`) or `No`.
    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        let _ = (party, option, enabled);
    }

    /// Called when a state machine recovers from an anomaly.
    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        let _ = (anomaly, party, option);
    }
}

impl<T: NegotiationHandler + ?Sized> NegotiationHandler for &mut T {
    fn send_message(&mut self, verb: TelnetVerb, option: u8) {
        (**self).send_message(verb, option);
    }

    fn option_supported(&mut self, party: Party, option: u8, requested: bool) -> bool {
        (**self).option_supported(party, option, requested)
    }

    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        (**self).option_negotiated(party, option, enabled);
    }

    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        (**self).negotiation_error(anomaly, party, option);
    }
}

impl<T: NegotiationHandler + ?Sized> NegotiationHandler for Box<T> {
    fn send_message(&mut self, verb: TelnetVerb, option: u8) {
        (**self).send_message(verb, option);
    }

    fn option_supported(&mut self, party: Party, option: u8, requested: bool) -> bool {
        (**self).option_supported(party, option, requested)
    }

    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        (**self).option_negotiated(party, option, enabled);
    }

    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        (**self).negotiation_error(anomaly, party, option);
    }
}

/// Handler that discards outbound messages and uses every default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullHandler;

impl NegotiationHandler for NullHandler {
    fn send_message(&mut self, _verb: TelnetVerb, _option: u8) {}
}

///
/// Handler that records every side effect as a [`NegotiationEvent`].
///
/// Useful for driving an engine in a pull style: perform an operation, then
/// [`take_outbound`](Self::take_outbound) the messages to put on the wire.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingHandler {
    events: Vec<NegotiationEvent>,
}

impl RecordingHandler {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        RecordingHandler::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> &[NegotiationEvent] {
        &self.events
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<NegotiationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Removes recorded outbound messages, leaving other events in place.
    pub fn take_outbound(&mut self) -> Vec<NegotiationMessage> {
        let mut outbound = Vec::new();
        self.events.retain(|event| match event {
            NegotiationEvent::Sent(message) => {
                outbound.push(*message);
                false
            }
            _ => true,
        });
        outbound
    }
}

impl NegotiationHandler for RecordingHandler {
    fn send_message(&mut self, verb: TelnetVerb, option: u8) {
        self.events.push(NegotiationEvent::Sent(NegotiationMessage::new(verb, option)));
    }

    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        self.events.push(NegotiationEvent::Negotiated(party, option, enabled));
    }

    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        self.events.push(NegotiationEvent::Anomaly(party, option, anomaly));
    }
}
