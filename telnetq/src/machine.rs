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

//! # RFC 1143 Option State Machine
//!
//! One [`OptionStateMachine`] tracks one option for one [`Party`]. It is written
//! in terms of abstract events:
//!
//! | Abstract            | `Party::Us` | `Party::Him` |
//! |---------------------|-------------|--------------|
//! | received positive   | `DO`        | `WILL`       |
//! | received negative   | `DONT`      | `WONT`       |
//! | send positive       | `WILL`      | `DO`         |
//! | send negative       | `WONT`      | `DONT`       |
//!
//! so a single transition table serves both roles. The machine performs no I/O;
//! every side effect goes through the [`MachineHooks`] passed into each call.
//!
//! ```text
//! NO      + ask_enable        -> WANTYES + send positive
//! WANTYES + received positive -> YES
//! YES     + ask_disable       -> WANTNO  + send negative
//! WANTNO  + received negative -> NO
//! ```

use crate::{NegotiationAnomaly, NegotiationState, Party, Role, TelnetVerb};
use tracing::trace;

/// Identifies one state machine: an option code on one side of the connection.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct OptionKey {
    /// Side of the connection the option applies to
    pub party: Party,
    /// Telnet option code
    pub option: u8,
}

impl OptionKey {
    /// Creates a key for `option` on `party`'s side.
    pub fn new(party: Party, option: u8) -> Self {
        OptionKey { party, option }
    }
}

impl std::fmt::Display for OptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.party, self.option)
    }
}

///
/// Side-effect surface a state machine drives.
///
/// The machine passes its own [`OptionKey`] on every call, so a single hook
/// table can serve every machine an engine owns.
///
pub trait MachineHooks {
    /// Should an unsolicited enable from the peer be granted?
    fn option_supported(&mut self, key: OptionKey) -> bool;
    /// Emit a negotiation message to the peer.
    fn send(&mut self, key: OptionKey, verb: TelnetVerb);
    /// The option settled into `Yes` (`true`) or `No` (`false`).
    fn negotiated(&mut self, key: OptionKey, enabled: bool);
    /// A recoverable irregularity was detected.
    fn anomaly(&mut self, key: OptionKey, anomaly: NegotiationAnomaly);
}

/// RFC 1143 state machine for a single (party, option) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionStateMachine {
    key: OptionKey,
    state: NegotiationState,
}

impl OptionStateMachine {
    /// Creates a machine in state `No`.
    pub fn new(key: OptionKey) -> Self {
        OptionStateMachine {
            key,
            state: NegotiationState::No,
        }
    }

    /// The (party, option) this machine negotiates.
    pub fn key(&self) -> OptionKey {
        self.key
    }

    /// Current negotiation state.
    pub fn current_state(&self) -> NegotiationState {
        self.state
    }

    /// `true` only in state `Yes`.
    pub fn is_enabled(&self) -> bool {
        self.state == NegotiationState::Yes
    }

    fn role(&self) -> &'static Role {
        self.key.party.role()
    }

    /// Peer sent the positive verb for this role (`DO` for us, `WILL` for him).
    pub fn received_positive<H: MachineHooks + ?Sized>(&mut self, hooks: &mut H) {
        match self.state {
            NegotiationState::No => {
                if hooks.option_supported(self.key) {
                    self.transition(hooks, NegotiationState::Yes);
                    self.send_positive(hooks);
                } else {
                    self.send_negative(hooks);
                }
            }
            NegotiationState::Yes => {}
            NegotiationState::WantNo => {
                self.negative_answered_by_positive(hooks);
                self.transition(hooks, NegotiationState::No);
            }
            NegotiationState::WantNoOpposite => {
                self.negative_answered_by_positive(hooks);
                self.transition(hooks, NegotiationState::Yes);
            }
            NegotiationState::WantYes => {
                self.transition(hooks, NegotiationState::Yes);
            }
            NegotiationState::WantYesOpposite => {
                self.transition(hooks, NegotiationState::WantNo);
                self.send_negative(hooks);
            }
        }
    }

    /// Peer sent the negative verb for this role (`DONT` for us, `WONT` for him).
    pub fn received_negative<H: MachineHooks + ?Sized>(&mut self, hooks: &mut H) {
        match self.state {
            NegotiationState::No => {}
            NegotiationState::Yes => {
                self.transition(hooks, NegotiationState::No);
                self.send_negative(hooks);
            }
            NegotiationState::WantNo
            | NegotiationState::WantYes
            | NegotiationState::WantYesOpposite => {
                self.transition(hooks, NegotiationState::No);
            }
            NegotiationState::WantNoOpposite => {
                self.transition(hooks, NegotiationState::WantYes);
                self.send_positive(hooks);
            }
        }
    }

    /// Local policy wants the option enabled.
    pub fn ask_enable<H: MachineHooks + ?Sized>(&mut self, hooks: &mut H) {
        match self.state {
            NegotiationState::No => {
                self.transition(hooks, NegotiationState::WantYes);
                self.send_positive(hooks);
            }
            NegotiationState::Yes => hooks.anomaly(self.key, NegotiationAnomaly::AlreadyEnabled),
            NegotiationState::WantNo => {
                self.transition(hooks, NegotiationState::WantNoOpposite);
            }
            NegotiationState::WantNoOpposite => {
                hooks.anomaly(self.key, NegotiationAnomaly::EnableAlreadyQueued);
            }
            NegotiationState::WantYes => {
                hooks.anomaly(self.key, NegotiationAnomaly::AlreadyNegotiatingEnable);
            }
            NegotiationState::WantYesOpposite => {
                self.transition(hooks, NegotiationState::WantYes);
            }
        }
    }

    /// Local policy wants the option disabled.
    pub fn ask_disable<H: MachineHooks + ?Sized>(&mut self, hooks: &mut H) {
        match self.state {
            NegotiationState::No => hooks.anomaly(self.key, NegotiationAnomaly::AlreadyDisabled),
            NegotiationState::Yes => {
                self.transition(hooks, NegotiationState::WantNo);
                self.send_negative(hooks);
            }
            NegotiationState::WantNo => {
                hooks.anomaly(self.key, NegotiationAnomaly::AlreadyNegotiatingDisable);
            }
            NegotiationState::WantNoOpposite => {
                self.transition(hooks, NegotiationState::WantNo);
            }
            NegotiationState::WantYes => {
                self.transition(hooks, NegotiationState::WantYesOpposite);
            }
            NegotiationState::WantYesOpposite => {
                hooks.anomaly(self.key, NegotiationAnomaly::DisableAlreadyQueued);
            }
        }
    }

    /// Moves to `next`, notifying only when entering `Yes` or `No` from elsewhere.
    fn transition<H: MachineHooks + ?Sized>(&mut self, hooks: &mut H, next: NegotiationState) {
        let previous = self.state;
        self.state = next;
        if previous == next {
            return;
        }
        trace!(key = %self.key, from = %previous, to = %next, "option state transition");
        match next {
            NegotiationState::Yes => hooks.negotiated(self.key, true),
            NegotiationState::No => hooks.negotiated(self.key, false),
            _ => {}
        }
    }

    fn send_positive<H: MachineHooks + ?Sized>(&self, hooks: &mut H) {
        hooks.send(self.key, self.role().send_positive);
    }

    fn send_negative<H: MachineHooks + ?Sized>(&self, hooks: &mut H) {
        hooks.send(self.key, self.role().send_negative);
    }

    fn negative_answered_by_positive<H: MachineHooks + ?Sized>(&self, hooks: &mut H) {
        let role = self.role();
        hooks.anomaly(
            self.key,
            NegotiationAnomaly::NegativeAnsweredByPositive {
                sent: role.send_negative,
                received: role.received_positive,
            },
        );
    }
}
