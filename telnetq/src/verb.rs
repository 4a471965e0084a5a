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

use crate::Party;
use crate::consts;

///
/// One of the four Telnet negotiation verbs.
///
/// `WILL`/`WONT` announce the sender's own intent; `DO`/`DONT` ask the receiver
/// to act. Which [`Party`] a verb concerns depends on the direction it travels.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum TelnetVerb {
    /// [`consts::WILL`] Sender wants to begin performing an option
    Will,
    /// [`consts::WONT`] Sender refuses to perform an option
    Wont,
    /// [`consts::DO`] Sender wants the receiver to perform an option
    Do,
    /// [`consts::DONT`] Sender wants the receiver to stop performing an option
    Dont,
}

impl TelnetVerb {
    /// All verbs in wire-code order.
    pub const ALL: [TelnetVerb; 4] = [
        TelnetVerb::Will,
        TelnetVerb::Wont,
        TelnetVerb::Do,
        TelnetVerb::Dont,
    ];

    /// Wire code for this verb.
    pub fn to_u8(self) -> u8 {
        match self {
            TelnetVerb::Will => consts::WILL,
            TelnetVerb::Wont => consts::WONT,
            TelnetVerb::Do => consts::DO,
            TelnetVerb::Dont => consts::DONT,
        }
    }

    /// Parse a wire code, returning `None` for anything outside `251..=254`.
    pub fn from_u8(byte: u8) -> Option<TelnetVerb> {
        match byte {
            consts::WILL => Some(TelnetVerb::Will),
            consts::WONT => Some(TelnetVerb::Wont),
            consts::DO => Some(TelnetVerb::Do),
            consts::DONT => Some(TelnetVerb::Dont),
            _ => None,
        }
    }

    /// The party whose option state an *inbound* message with this verb concerns.
    ///
    /// A received `DO`/`DONT` is about our side, a received `WILL`/`WONT` about theirs.
    pub fn inbound_party(self) -> Party {
        match self {
            TelnetVerb::Do | TelnetVerb::Dont => Party::Us,
            TelnetVerb::Will | TelnetVerb::Wont => Party::Him,
        }
    }

    /// Whether this verb asks for or announces enablement.
    pub fn is_positive(self) -> bool {
        matches!(self, TelnetVerb::Will | TelnetVerb::Do)
    }
}

impl std::fmt::Display for TelnetVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetVerb::Will => write!(f, "WILL"),
            TelnetVerb::Wont => write!(f, "WONT"),
            TelnetVerb::Do => write!(f, "DO"),
            TelnetVerb::Dont => write!(f, "DONT"),
        }
    }
}

impl From<TelnetVerb> for u8 {
    fn from(verb: TelnetVerb) -> Self {
        verb.to_u8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_codes() {
        assert_eq!(TelnetVerb::Will.to_u8(), 251);
        assert_eq!(TelnetVerb::Wont.to_u8(), 252);
        assert_eq!(TelnetVerb::Do.to_u8(), 253);
        assert_eq!(TelnetVerb::Dont.to_u8(), 254);
        for verb in TelnetVerb::ALL {
            assert_eq!(TelnetVerb::from_u8(verb.to_u8()), Some(verb));
        }
    }

    #[test]
    fn verb_from_unknown_code() {
        assert_eq!(TelnetVerb::from_u8(0), None);
        assert_eq!(TelnetVerb::from_u8(250), None);
        assert_eq!(TelnetVerb::from_u8(255), None);
    }

    #[test]
    fn verb_inbound_party() {
        assert_eq!(TelnetVerb::Do.inbound_party(), Party::Us);
        assert_eq!(TelnetVerb::Dont.inbound_party(), Party::Us);
        assert_eq!(TelnetVerb::Will.inbound_party(), Party::Him);
        assert_eq!(TelnetVerb::Wont.inbound_party(), Party::Him);
    }

    #[test]
    fn verb_display() {
        assert_eq!(format!("{}", TelnetVerb::Will), "WILL");
        assert_eq!(format!("{}", TelnetVerb::Dont), "DONT");
    }
}
