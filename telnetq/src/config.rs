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

//! Initial option configuration for a negotiation engine
//!
//! # Examples
//!
//! ```
//! use telnetq::NegotiationConfig;
//! use telnetq::consts::option;
//!
//! // Offer to echo and suppress go-ahead; ask the peer to report window size.
//! let config = NegotiationConfig::new()
//!     .with_us([option::ECHO, option::SGA])
//!     .with_him_option(option::NAWS);
//! assert!(config.us.contains(&option::SGA));
//! ```

use crate::Party;
use std::collections::BTreeSet;

/// Options each party should enable once the connection starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NegotiationConfig {
    /// Options we offer to enable on our side (`WILL` sent on start)
    pub us: BTreeSet<u8>,

    /// Options we ask the peer to enable on its side (`DO` sent on start)
    pub him: BTreeSet<u8>,
}

impl NegotiationConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        NegotiationConfig::default()
    }

    /// Add options to enable on our side
    pub fn with_us(mut self, options: impl IntoIterator<Item = u8>) -> Self {
        self.us.extend(options);
        self
    }

    /// Add options to ask the peer to enable
    pub fn with_him(mut self, options: impl IntoIterator<Item = u8>) -> Self {
        self.him.extend(options);
        self
    }

    /// Add a single option to enable on our side
    pub fn with_us_option(mut self, option: u8) -> Self {
        self.us.insert(option);
        self
    }

    /// Add a single option to ask the peer to enable
    pub fn with_him_option(mut self, option: u8) -> Self {
        self.him.insert(option);
        self
    }

    /// Options configured for `party`.
    pub fn options(&self, party: Party) -> &BTreeSet<u8> {
        match party {
            Party::Us => &self.us,
            Party::Him => &self.him,
        }
    }
}
