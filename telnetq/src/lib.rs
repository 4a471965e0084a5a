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

//! # Telnet Q Method Option Negotiation
//!
//! This crate implements the option negotiation algorithm of RFC 1143 ("The Q
//! Method of Implementing TELNET Option Negotiation"). It lets two Telnet
//! endpoints agree on enabling or disabling options without negotiation loops,
//! even when both sides change their minds at the same time.
//!
//! ## Overview
//!
//! Every option exists twice: once on **our** side (negotiated with `WILL`/`WONT`
//! sent, `DO`/`DONT` received) and once on **his** side (`DO`/`DONT` sent,
//! `WILL`/`WONT` received). Each (party, option) pair is tracked by its own
//! six-state machine:
//!
//! - `No`, `Yes`: settled
//! - `WantNo`, `WantYes`: a request is outstanding
//! - `WantNoOpposite`, `WantYesOpposite`: a request is outstanding and the
//!   opposite request is queued behind it
//!
//! ## Core Components
//!
//! ### [`OptionStateMachine`]
//!
//! The transition table for one (party, option) pair. It is generic over the
//! party through a [`Role`] descriptor and reports side effects through
//! [`MachineHooks`].
//!
//! ### [`NegotiationEngine`]
//!
//! Owns all state machines of a connection, the supported option sets and a
//! [`NegotiationHandler`] carrying application policy.
//!
//! ### [`WireCodec`]
//!
//! Encodes and decodes the 3-byte `IAC <verb> <option>` messages, also as a
//! `tokio_util` [`Decoder`](tokio_util::codec::Decoder)/[`Encoder`](tokio_util::codec::Encoder).
//!
//! ### [`SocketNegotiator`]
//!
//! An engine that writes its messages directly to a [`Transport`].
//!
//! ## Usage Example
//!
//! ```rust
//! use telnetq::{NegotiationConfig, NegotiationEngine, Party, RecordingHandler, TelnetVerb};
//! use telnetq::consts::option;
//!
//! // Ask the peer to suppress go-ahead
//! let config = NegotiationConfig::new().with_him([option::SGA]);
//! let mut engine = NegotiationEngine::new(config, RecordingHandler::new());
//! engine.start();
//!
//! for message in engine.handler_mut().take_outbound() {
//!     // write message.to_bytes() to the connection
//!     assert_eq!(message.to_bytes(), [255, 253, 3]);
//! }
//!
//! // The peer agrees
//! engine.receive(TelnetVerb::Will, option::SGA);
//! assert!(engine.is_enabled(Party::Him, option::SGA));
//! ```
//!
//! ## Thread Safety
//!
//! Nothing in this crate locks. An engine is `Send` when its handler is, and
//! all callbacks run synchronously on the calling thread.
//!
//! ## Logging
//!
//! State transitions are traced with `tracing` at `TRACE`, messages at `DEBUG`
//! and anomalies at `WARN`. The crate never installs a subscriber.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

pub mod codec;
mod config;
pub mod consts;
mod engine;
mod event;
mod handler;
pub mod machine;
mod party;
mod result;
mod socket;
mod state;
mod verb;

pub use self::codec::{NegotiationMessage, WireCodec};
pub use self::config::NegotiationConfig;
pub use self::engine::{NegotiationEngine, SupportedOptions};
pub use self::event::NegotiationEvent;
pub use self::handler::{NegotiationHandler, NullHandler, RecordingHandler};
pub use self::machine::{MachineHooks, OptionKey, OptionStateMachine};
pub use self::party::{Party, Role};
pub use self::result::{NegotiationAnomaly, NegotiationError, NegotiationResult};
pub use self::socket::{SocketHandler, SocketNegotiator, Transport};
pub use self::state::NegotiationState;
pub use self::verb::TelnetVerb;
