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

/// Negotiation state of one option for one party, per RFC 1143 §7.
///
/// Folds the RFC's `us`/`him` state and its one-bit queue into six values.
///
/// # Variants
///
/// - `No`: The option is disabled.
/// - `Yes`: The option is enabled.
/// - `WantNo`: We asked to disable and are waiting for the answer.
/// - `WantNoOpposite`: We asked to disable, then queued a request to re-enable.
/// - `WantYes`: We asked to enable and are waiting for the answer.
/// - `WantYesOpposite`: We asked to enable, then queued a request to disable again.
///
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum NegotiationState {
    /// Disabled
    #[default]
    No,
    /// Enabled
    Yes,
    /// Disable requested, awaiting reply
    WantNo,
    /// Disable requested, enable queued
    WantNoOpposite,
    /// Enable requested, awaiting reply
    WantYes,
    /// Enable requested, disable queued
    WantYesOpposite,
}

impl NegotiationState {
    /// Whether a request is in flight.
    pub fn is_pending(self) -> bool {
        !matches!(self, NegotiationState::No | NegotiationState::Yes)
    }
}

impl std::fmt::Display for NegotiationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegotiationState::No => write!(f, "No"),
            NegotiationState::Yes => write!(f, "Yes"),
            NegotiationState::WantNo => write!(f, "WantNo"),
            NegotiationState::WantNoOpposite => write!(f, "WantNoOpposite"),
            NegotiationState::WantYes => write!(f, "WantYes"),
            NegotiationState::WantYesOpposite => write!(f, "WantYesOpposite"),
        }
    }
}
