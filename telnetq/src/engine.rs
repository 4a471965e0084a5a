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

use crate::machine::{MachineHooks, OptionKey, OptionStateMachine};
use crate::{
    NegotiationAnomaly, NegotiationConfig, NegotiationError, NegotiationHandler,
    NegotiationMessage, NegotiationResult, NegotiationState, Party, TelnetVerb,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Options local policy currently wants enabled, per party.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupportedOptions {
    us: BTreeSet<u8>,
    him: BTreeSet<u8>,
}

impl SupportedOptions {
    /// The set for `party`.
    pub fn get(&self, party: Party) -> &BTreeSet<u8> {
        match party {
            Party::Us => &self.us,
            Party::Him => &self.him,
        }
    }

    fn get_mut(&mut self, party: Party) -> &mut BTreeSet<u8> {
        match party {
            Party::Us => &mut self.us,
            Party::Him => &mut self.him,
        }
    }

    /// Checks if `option` is wanted on `party`'s side
    pub fn contains(&self, party: Party, option: u8) -> bool {
        self.get(party).contains(&option)
    }
}

impl From<NegotiationConfig> for SupportedOptions {
    fn from(config: NegotiationConfig) -> Self {
        SupportedOptions {
            us: config.us,
            him: config.him,
        }
    }
}

///
/// Owns one [`OptionStateMachine`] per (party, option) and routes negotiation
/// traffic to it.
///
/// Machines are created on first use and live as long as the engine, so every
/// event for a given key observes and mutates the same state. All side effects
/// are delivered synchronously to the embedded [`NegotiationHandler`].
///
/// # Example
///
/// ```
/// use telnetq::{NegotiationConfig, NegotiationEngine, RecordingHandler, Party, TelnetVerb};
///
/// let config = NegotiationConfig::new().with_him([3]);
/// let mut engine = NegotiationEngine::new(config, RecordingHandler::new());
///
/// engine.start();
/// let sent = engine.handler_mut().take_outbound();
/// assert_eq!(sent[0].verb, TelnetVerb::Do);
///
/// engine.receive(TelnetVerb::Will, 3);
/// assert!(engine.is_enabled(Party::Him, 3));
/// ```
///
/// # Thread Safety
///
/// The engine uses no locks. Each connection owns its own engine; callers that
/// share one across threads must serialize access themselves.
pub struct NegotiationEngine<H> {
    machines: BTreeMap<OptionKey, OptionStateMachine>,
    supported: SupportedOptions,
    handler: H,
}

impl<H: NegotiationHandler> NegotiationEngine<H> {
    /// Creates an engine whose supported sets start out as `config`.
    pub fn new(config: NegotiationConfig, handler: H) -> Self {
        NegotiationEngine {
            machines: BTreeMap::new(),
            supported: config.into(),
            handler,
        }
    }

    /// Creates an engine with empty supported sets.
    pub fn with_handler(handler: H) -> Self {
        NegotiationEngine::new(NegotiationConfig::default(), handler)
    }

    /// Sends the initial requests: `WILL` for every `us` option and `DO` for
    /// every `him` option.
    pub fn start(&mut self) {
        for party in Party::ALL {
            let options: Vec<u8> = self.supported.get(party).iter().copied().collect();
            for option in options {
                self.request(party, option);
            }
        }
    }

    /// Handles a negotiation message received from the peer.
    ///
    /// `DO`/`DONT` concern our side and `WILL`/`WONT` the peer's side.
    pub fn receive(&mut self, verb: TelnetVerb, option: u8) {
        let party = verb.inbound_party();
        debug!(%party, option, %verb, "received negotiation");
        self.dispatch(OptionKey::new(party, option), |machine, hooks| {
            if verb.is_positive() {
                machine.received_positive(hooks);
            } else {
                machine.received_negative(hooks);
            }
        });
    }

    /// Handles a decoded [`NegotiationMessage`].
    pub fn receive_message(&mut self, message: NegotiationMessage) {
        self.receive(message.verb, message.option);
    }

    /// Handles a message given as a raw verb code.
    ///
    /// # Errors
    ///
    /// Returns [`NegotiationError::InvalidArgument`] if `verb` is not one of
    /// `WILL`, `WONT`, `DO` or `DONT`.
    pub fn receive_code(&mut self, verb: u8, option: u8) -> NegotiationResult<()> {
        let verb = TelnetVerb::from_u8(verb)
            .ok_or_else(|| NegotiationError::invalid(format!("invalid verb {verb}")))?;
        self.receive(verb, option);
        Ok(())
    }

    /// Asks `party` to enable `option` and adds it to the supported set.
    pub fn request(&mut self, party: Party, option: u8) {
        self.supported.get_mut(party).insert(option);
        self.dispatch(OptionKey::new(party, option), |machine, hooks| {
            if machine.current_state() != NegotiationState::Yes {
                machine.ask_enable(hooks);
            }
        });
    }

    /// Asks `party` to disable `option` and removes it from the supported set.
    pub fn forbid(&mut self, party: Party, option: u8) {
        self.supported.get_mut(party).remove(&option);
        self.dispatch(OptionKey::new(party, option), |machine, hooks| {
            if machine.current_state() != NegotiationState::No {
                machine.ask_disable(hooks);
            }
        });
    }

    fn dispatch<F>(&mut self, key: OptionKey, operation: F)
    where
        F: FnOnce(&mut OptionStateMachine, &mut EngineHooks<'_, H>),
    {
        let machine = self
            .machines
            .entry(key)
            .or_insert_with(|| OptionStateMachine::new(key));
        let mut hooks = EngineHooks {
            supported: &self.supported,
            handler: &mut self.handler,
        };
        operation(machine, &mut hooks);
    }
}

impl<H> NegotiationEngine<H> {
    /// Checks if `option` is currently enabled on `party`'s side.
    ///
    /// Options never negotiated report `false`. Never mutates state or sends.
    pub fn is_enabled(&self, party: Party, option: u8) -> bool {
        self.state(party, option) == NegotiationState::Yes
    }

    /// Current negotiation state of `option` on `party`'s side.
    pub fn state(&self, party: Party, option: u8) -> NegotiationState {
        self.machines
            .get(&OptionKey::new(party, option))
            .map_or(NegotiationState::No, OptionStateMachine::current_state)
    }

    /// Options local policy currently wants enabled for `party`.
    pub fn supported(&self, party: Party) -> &BTreeSet<u8> {
        self.supported.get(party)
    }

    /// Every option with a machine on `party`'s side, in ascending order.
    ///
    /// Only negotiation creates entries; [`is_enabled`](Self::is_enabled) and
    /// [`state`](Self::state) queries do not.
    pub fn options(&self, party: Party) -> impl Iterator<Item = (u8, NegotiationState)> + '_ {
        self.machines
            .values()
            .filter(move |machine| machine.key().party == party)
            .map(|machine| (machine.key().option, machine.current_state()))
    }

    /// Borrow the embedded handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrow the embedded handler
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the engine, returning its handler
    pub fn into_handler(self) -> H {
        self.handler
    }
}

impl<H> std::fmt::Debug for NegotiationEngine<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = |party: Party| {
            self.options(party)
                .map(|(option, state)| format!("{option}:{state}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "NegotiationEngine {{ us({}) him({}) }}",
            list(Party::Us),
            list(Party::Him)
        )
    }
}

/// Hook table lent to a machine for the duration of one operation.
struct EngineHooks<'a, H> {
    supported: &'a SupportedOptions,
    handler: &'a mut H,
}

impl<H: NegotiationHandler> MachineHooks for EngineHooks<'_, H> {
    fn option_supported(&mut self, key: OptionKey) -> bool {
        let requested = self.supported.contains(key.party, key.option);
        self.handler.option_supported(key.party, key.option, requested)
    }

    fn send(&mut self, key: OptionKey, verb: TelnetVerb) {
        debug!(party = %key.party, option = key.option, %verb, "sending negotiation");
        self.handler.send_message(verb, key.option);
    }

    fn negotiated(&mut self, key: OptionKey, enabled: bool) {
        debug!(party = %key.party, option = key.option, enabled, "option negotiated");
        self.handler.option_negotiated(key.party, key.option, enabled);
    }

    fn anomaly(&mut self, key: OptionKey, anomaly: NegotiationAnomaly) {
        warn!(party = %key.party, option = key.option, "Error negotiating option: {}", anomaly);
        self.handler.negotiation_error(anomaly, key.party, key.option);
    }
}
