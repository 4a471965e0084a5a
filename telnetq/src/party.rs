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

use crate::TelnetVerb;
use std::fmt::Formatter;

///
/// Which side of the connection an option's enablement applies to.
///
/// RFC 1143 calls the two sides "us" and "him". Each option is negotiated
/// independently for both parties, so a connection tracks up to 512 state
/// machines.
///
/// - **Us**: Tracks whether *we* are performing an option
///   - We announce with: `WILL` / `WONT`
///   - Peer answers with: `DO` / `DONT`
///
/// - **Him**: Tracks whether the *remote side* is performing an option
///   - We request with: `DO` / `DONT`
///   - Peer answers with: `WILL` / `WONT`
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Party {
    /// The local side of the connection
    Us,
    /// The remote side of the connection
    Him,
}

impl Party {
    /// Both parties, in the order initial requests are sent.
    pub const ALL: [Party; 2] = [Party::Us, Party::Him];

    /// Verb mapping for state machines negotiating this party's options.
    pub fn role(self) -> &'static Role {
        match self {
            Party::Us => &Role::US,
            Party::Him => &Role::HIM,
        }
    }
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Us => write!(f, "us"),
            Party::Him => write!(f, "him"),
        }
    }
}

///
/// Maps the abstract positive/negative events of a state machine onto concrete
/// wire verbs for one [`Party`].
///
/// The transition table is written once against this descriptor; only the
/// verbs differ between the two roles.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Role {
    /// Verb the peer sends to grant or announce enablement
    pub received_positive: TelnetVerb,
    /// Verb the peer sends to deny or announce disablement
    pub received_negative: TelnetVerb,
    /// Verb we send to ask for or agree to enablement
    pub send_positive: TelnetVerb,
    /// Verb we send to ask for or agree to disablement
    pub send_negative: TelnetVerb,
}

impl Role {
    /// Our own options: peer drives with `DO`/`DONT`, we answer `WILL`/`WONT`.
    pub const US: Role = Role {
        received_positive: TelnetVerb::Do,
        received_negative: TelnetVerb::Dont,
        send_positive: TelnetVerb::Will,
        send_negative: TelnetVerb::Wont,
    };

    /// The peer's options: peer drives with `WILL`/`WONT`, we answer `DO`/`DONT`.
    pub const HIM: Role = Role {
        received_positive: TelnetVerb::Will,
        received_negative: TelnetVerb::Wont,
        send_positive: TelnetVerb::Do,
        send_negative: TelnetVerb::Dont,
    };
}
