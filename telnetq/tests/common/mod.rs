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

//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use telnetq::{
    NegotiationAnomaly, NegotiationEngine, NegotiationEvent, NegotiationHandler,
    NegotiationMessage, Party, TelnetVerb,
};

/// Option both test peers always accept.
pub const ALWAYS_SUPPORTED: u8 = 3;

/// A log of everything two named peers did, in the order they did it.
#[derive(Clone, Debug, Default)]
pub struct Transcript(Rc<RefCell<Vec<String>>>);

impl Transcript {
    pub fn new() -> Self {
        Transcript::default()
    }

    pub fn peer(&self, name: &'static str) -> TranscriptPeer {
        TranscriptPeer {
            name,
            transcript: self.clone(),
            outbound: VecDeque::new(),
        }
    }

    pub fn record(&self, name: &str, line: impl std::fmt::Display) {
        self.0.borrow_mut().push(format!("{name}: {line}"));
    }

    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

/// Policy for one peer: accepts option 3 in addition to its configuration,
/// logs everything and queues outbound messages.
#[derive(Debug)]
pub struct TranscriptPeer {
    name: &'static str,
    transcript: Transcript,
    pub outbound: VecDeque<NegotiationMessage>,
}

impl TranscriptPeer {
    pub fn received(&self, message: NegotiationMessage) {
        self.transcript.record(self.name, format_args!("Received {message}"));
    }
}

impl NegotiationHandler for TranscriptPeer {
    fn send_message(&mut self, verb: TelnetVerb, option: u8) {
        let message = NegotiationMessage::new(verb, option);
        self.transcript.record(self.name, NegotiationEvent::Sent(message));
        self.outbound.push_back(message);
    }

    fn option_supported(&mut self, _party: Party, option: u8, requested: bool) -> bool {
        option == ALWAYS_SUPPORTED || requested
    }

    fn option_negotiated(&mut self, party: Party, option: u8, enabled: bool) {
        self.transcript.record(self.name, NegotiationEvent::Negotiated(party, option, enabled));
    }

    fn negotiation_error(&mut self, anomaly: NegotiationAnomaly, party: Party, option: u8) {
        self.transcript.record(self.name, NegotiationEvent::Anomaly(party, option, anomaly));
    }
}

/// Deliver one queued message from `from` to `to`. Returns false when `from`
/// had nothing queued.
pub fn deliver(
    from: &mut NegotiationEngine<TranscriptPeer>,
    to: &mut NegotiationEngine<TranscriptPeer>,
) -> bool {
    match from.handler_mut().outbound.pop_front() {
        Some(message) => {
            to.handler().received(message);
            to.receive_message(message);
            true
        }
        None => false,
    }
}

/// Pass messages back and forth, one at a time, until both queues are empty.
pub fn shuttle(
    alice: &mut NegotiationEngine<TranscriptPeer>,
    bob: &mut NegotiationEngine<TranscriptPeer>,
) {
    loop {
        let forward = deliver(alice, bob);
        let backward = deliver(bob, alice);
        if !forward && !backward {
            break;
        }
    }
}
