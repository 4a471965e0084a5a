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

use crate::{NegotiationAnomaly, NegotiationMessage, Party};

///
/// `NegotiationEvent` is one observable side effect of negotiation, as captured
/// by [`RecordingHandler`](crate::RecordingHandler).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NegotiationEvent {
    /// A message was emitted towards the peer
    Sent(NegotiationMessage),
    /// Indicate a completed Negotiation
    /// Parameters: (party, option, enabled)
    Negotiated(Party, u8, bool),
    /// A recoverable anomaly was reported
    /// Parameters: (party, option, anomaly)
    Anomaly(Party, u8, NegotiationAnomaly),
}

impl std::fmt::Display for NegotiationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegotiationEvent::Sent(message) => write!(f, "Sent {message}"),
            NegotiationEvent::Negotiated(party, option, enabled) => write!(
                f,
                "{} {} option {}",
                match party {
                    Party::Us => "We",
                    Party::Him => "They",
                },
                if *enabled { "enabled" } else { "disabled" },
                option
            ),
            NegotiationEvent::Anomaly(party, option, anomaly) => {
                write!(f, "Error negotiating option {party}{option}: {anomaly}")
            }
        }
    }
}
