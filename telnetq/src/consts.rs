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

//! Telnet byte constants used by negotiation messages

/// Interpret As Command, the escape marker opening every negotiation message
pub const IAC: u8 = 255;
/// Sender wants the receiver to stop performing an option
pub const DONT: u8 = 254;
/// Sender wants the receiver to perform an option
pub const DO: u8 = 253;
/// Sender refuses to perform, or stops performing, an option
pub const WONT: u8 = 252;
/// Sender wants to begin performing an option
pub const WILL: u8 = 251;

/// Length in bytes of one `IAC <verb> <option>` message
pub const MESSAGE_LEN: usize = 3;

/// Well known option codes from the
/// [IANA registry](https://www.iana.org/assignments/telnet-options/telnet-options.xhtml).
///
/// Negotiation treats option codes as opaque keys; these exist for readability.
pub mod option {
    /// Binary Transmission [RFC856](https://tools.ietf.org/html/rfc856)
    pub const BINARY: u8 = 0;
    /// Echo [RFC857](https://tools.ietf.org/html/rfc857)
    pub const ECHO: u8 = 1;
    /// Suppress Go Ahead [RFC858](https://tools.ietf.org/html/rfc858)
    pub const SGA: u8 = 3;
    /// Status [RFC859](https://tools.ietf.org/html/rfc859)
    pub const STATUS: u8 = 5;
    /// Timing Mark [RFC860](https://tools.ietf.org/html/rfc860)
    pub const TM: u8 = 6;
    /// Terminal Type [RFC1091](https://tools.ietf.org/html/rfc1091)
    pub const TTYPE: u8 = 24;
    /// Negotiate About Window Size [RFC1073](https://tools.ietf.org/html/rfc1073)
    pub const NAWS: u8 = 31;
    /// Linemode [RFC1184](https://tools.ietf.org/html/rfc1184)
    pub const LINEMODE: u8 = 34;
    /// Extended Options List [RFC861](https://tools.ietf.org/html/rfc861)
    pub const EXOPL: u8 = 255;
}
