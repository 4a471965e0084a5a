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

//! # Negotiation Wire Codec
//!
//! Every negotiation message is exactly three bytes:
//!
//! | Byte | Meaning                                        |
//! |------|------------------------------------------------|
//! | 0    | [`IAC`](consts::IAC) (255)                     |
//! | 1    | verb: 251=WILL, 252=WONT, 253=DO, 254=DONT      |
//! | 2    | option code, 0-255                             |
//!
//! [`decode`] and [`encode`] translate single messages. [`WireCodec`] frames
//! them over a byte stream via the `tokio_util` codec traits.

use crate::{NegotiationError, NegotiationResult, Party, TelnetVerb, consts};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::warn;

/// A decoded `IAC <verb> <option>` message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NegotiationMessage {
    /// Negotiation verb
    pub verb: TelnetVerb,
    /// Option code
    pub option: u8,
}

impl NegotiationMessage {
    /// Creates a message.
    pub fn new(verb: TelnetVerb, option: u8) -> Self {
        NegotiationMessage { verb, option }
    }

    /// Party whose state this message affects when received.
    pub fn party(&self) -> Party {
        self.verb.inbound_party()
    }

    /// Wire representation.
    pub fn to_bytes(&self) -> [u8; consts::MESSAGE_LEN] {
        encode(self.verb, self.option)
    }
}

impl std::fmt::Display for NegotiationMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.verb, self.option)
    }
}

/// Parse exactly one negotiation message.
///
/// # Errors
///
/// Returns [`NegotiationError::MalformedMessage`] unless `bytes` is exactly
/// three bytes long, starts with `IAC` and carries a known verb.
pub fn decode(bytes: &[u8]) -> NegotiationResult<NegotiationMessage> {
    let &[marker, verb, option] = bytes else {
        return Err(NegotiationError::malformed(format!(
            "expected {} bytes, got {}",
            consts::MESSAGE_LEN,
            bytes.len()
        )));
    };
    if marker != consts::IAC {
        return Err(NegotiationError::malformed(format!(
            "expected IAC marker, got 0x{marker:02X}"
        )));
    }
    let verb = TelnetVerb::from_u8(verb).ok_or_else(|| {
        NegotiationError::malformed(format!("unrecognized verb 0x{verb:02X}"))
    })?;
    Ok(NegotiationMessage::new(verb, option))
}

/// Serialize a negotiation message.
pub fn encode(verb: TelnetVerb, option: u8) -> [u8; consts::MESSAGE_LEN] {
    [consts::IAC, verb.to_u8(), option]
}

/// Serialize a negotiation message from unchecked values.
///
/// # Errors
///
/// Returns [`NegotiationError::InvalidArgument`] if `verb` is not a known verb
/// code or `option` is above 255.
pub fn encode_raw(verb: u8, option: u32) -> NegotiationResult<[u8; consts::MESSAGE_LEN]> {
    let verb = TelnetVerb::from_u8(verb)
        .ok_or_else(|| NegotiationError::invalid(format!("unsupported verb: {verb}")))?;
    let option = u8::try_from(option)
        .map_err(|_| NegotiationError::invalid(format!("illegal option: {option}")))?;
    Ok(encode(verb, option))
}

/// Frames [`NegotiationMessage`]s over a byte stream.
///
/// The decoder waits until three bytes are buffered, then consumes exactly
/// three. A malformed triple is consumed and reported as an error; the stream
/// position stays aligned to message boundaries. A partial message left over
/// at end of stream is also reported as malformed.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use telnetq::{NegotiationMessage, TelnetVerb, WireCodec};
/// use tokio_util::codec::{Decoder, Encoder};
///
/// let mut codec = WireCodec::new();
/// let mut buffer = BytesMut::new();
/// codec.encode(NegotiationMessage::new(TelnetVerb::Do, 1), &mut buffer).unwrap();
/// assert_eq!(&buffer[..], &[255, 253, 1]);
///
/// let message = codec.decode(&mut buffer).unwrap();
/// assert_eq!(message, Some(NegotiationMessage::new(TelnetVerb::Do, 1)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct WireCodec;

impl WireCodec {
    /// Creates a new codec.
    pub fn new() -> WireCodec {
        WireCodec
    }
}

impl Decoder for WireCodec {
    type Item = NegotiationMessage;
    type Error = NegotiationError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<NegotiationMessage>, Self::Error> {
        if src.len() < consts::MESSAGE_LEN {
            src.reserve(consts::MESSAGE_LEN - src.len());
            return Ok(None);
        }
        let raw = [src.get_u8(), src.get_u8(), src.get_u8()];
        match decode(&raw) {
            Ok(message) => Ok(Some(message)),
            Err(err) => {
                warn!("Rejected negotiation message {:02X?}: {}", raw, err);
                Err(err)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<NegotiationMessage>, Self::Error> {
        match src.len() {
            0 => Ok(None),
            n if n < consts::MESSAGE_LEN => {
                let raw = src.split_to(n);
                warn!("Truncated negotiation message at end of stream: {:02X?}", &raw[..]);
                Err(NegotiationError::malformed(format!(
                    "expected {} bytes, got {n}",
                    consts::MESSAGE_LEN
                )))
            }
            _ => self.decode(src),
        }
    }
}

impl Encoder<NegotiationMessage> for WireCodec {
    type Error = NegotiationError;

    fn encode(&mut self, item: NegotiationMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(consts::MESSAGE_LEN);
        dst.put_slice(&item.to_bytes());
        Ok(())
    }
}
