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

//! Error types for negotiation, wire decoding and transport writes

use crate::verb::TelnetVerb;
use thiserror::Error;

/// Result Type for Negotiation Operations
pub type NegotiationResult<T> = Result<T, NegotiationError>;

/// Errors returned to the immediate caller of a negotiation or codec operation.
///
/// Protocol anomalies reported by a peer are *not* represented here. Those are
/// recovered in place by the state machine and only observed through
/// [`NegotiationHandler::negotiation_error`](crate::NegotiationHandler::negotiation_error).
#[derive(Debug, Error)]
pub enum NegotiationError {
    /// Inbound bytes do not form a valid `IAC <verb> <option>` message.
    #[error("Malformed negotiation message: {reason}")]
    MalformedMessage {
        /// Description of what was wrong with the message
        reason: String,
    },

    /// An argument supplied by the caller is out of range or unrecognized.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument
        reason: String,
    },

    /// The transport failed while writing an outbound message.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NegotiationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        NegotiationError::MalformedMessage {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        NegotiationError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Check if the error came from parsing inbound bytes
    pub fn is_malformed(&self) -> bool {
        matches!(self, NegotiationError::MalformedMessage { .. })
    }

    /// Check if the error is a caller programming error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NegotiationError::InvalidArgument { .. })
    }
}

/// A recoverable irregularity detected by an option state machine.
///
/// Anomalies never unwind negotiation. The machine applies the corrective
/// transition from RFC 1143 (if any) and hands the anomaly to the error hook.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NegotiationAnomaly {
    /// Our pending disable request was answered with an enable.
    ///
    /// Carries the verb we sent and the verb the peer replied with, e.g. `DONT`
    /// answered by `WILL`.
    #[error("{sent} answered by {received}.")]
    NegativeAnsweredByPositive {
        /// The negative verb we sent
        sent: TelnetVerb,
        /// The positive verb the peer replied with
        received: TelnetVerb,
    },
    /// Asked to enable an option that is already enabled.
    #[error("Already enabled.")]
    AlreadyEnabled,
    /// Asked to enable an option while an enable is already queued.
    #[error("Already queued an enable request.")]
    EnableAlreadyQueued,
    /// Asked to enable an option while already negotiating for enable.
    #[error("Already negotiating for enable.")]
    AlreadyNegotiatingEnable,
    /// Asked to disable an option that is already disabled.
    #[error("Already disabled.")]
    AlreadyDisabled,
    /// Asked to disable an option while already negotiating for disable.
    #[error("Already negotiating for disable.")]
    AlreadyNegotiatingDisable,
    /// Asked to disable an option while a disable is already queued.
    #[error("Already queued a disable request.")]
    DisableAlreadyQueued,
}
