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

//! End-to-end negotiation between two in-memory engines

mod common;

use common::{Transcript, TranscriptPeer, shuttle};
use telnetq::{NegotiationConfig, NegotiationEngine, NegotiationState, Party};

// ============================================================================
// Helper Functions
// ============================================================================

fn create_pair(
    transcript: &Transcript,
    alice: NegotiationConfig,
    bob: NegotiationConfig,
) -> (
    NegotiationEngine<TranscriptPeer>,
    NegotiationEngine<TranscriptPeer>,
) {
    (
        NegotiationEngine::new(alice, transcript.peer("alice")),
        NegotiationEngine::new(bob, transcript.peer("bob")),
    )
}

fn run_exchange(alice: NegotiationConfig, bob: NegotiationConfig) -> Vec<String> {
    let transcript = Transcript::new();
    let (mut alice, mut bob) = create_pair(&transcript, alice, bob);
    alice.start();
    bob.start();
    shuttle(&mut alice, &mut bob);
    transcript.lines()
}

// ============================================================================
// Start-up Exchanges
// ============================================================================

#[test]
fn option_not_supported_him() {
    let events = run_exchange(
        NegotiationConfig::new().with_him([0]),
        NegotiationConfig::new(),
    );
    assert_eq!(
        events,
        vec![
            "alice: Sent DO 0",
            "bob: Received DO 0",
            "bob: Sent WONT 0",
            "alice: Received WONT 0",
            "alice: They disabled option 0",
        ]
    );
}

#[test]
fn option_not_supported_us() {
    let events = run_exchange(
        NegotiationConfig::new().with_us([0]),
        NegotiationConfig::new(),
    );
    assert_eq!(
        events,
        vec![
            "alice: Sent WILL 0",
            "bob: Received WILL 0",
            "bob: Sent DONT 0",
            "alice: Received DONT 0",
            "alice: We disabled option 0",
        ]
    );
}

#[test]
fn option_supported_him() {
    let events = run_exchange(
        NegotiationConfig::new().with_him([3]),
        NegotiationConfig::new(),
    );
    assert_eq!(
        events,
        vec![
            "alice: Sent DO 3",
            "bob: Received DO 3",
            "bob: We enabled option 3",
            "bob: Sent WILL 3",
            "alice: Received WILL 3",
            "alice: They enabled option 3",
        ]
    );
}

#[test]
fn option_supported_us() {
    let events = run_exchange(
        NegotiationConfig::new().with_us([3]),
        NegotiationConfig::new(),
    );
    assert_eq!(
        events,
        vec![
            "alice: Sent WILL 3",
            "bob: Received WILL 3",
            "bob: They enabled option 3",
            "bob: Sent DO 3",
            "alice: Received DO 3",
            "alice: We enabled option 3",
        ]
    );
}

// ============================================================================
// Collisions and Changes of Mind
// ============================================================================

#[test]
fn simultaneous_requests_settle_without_loop() {
    let transcript = Transcript::new();
    let (mut alice, mut bob) = create_pair(
        &transcript,
        NegotiationConfig::new().with_him([1]),
        NegotiationConfig::new().with_us([1]),
    );
    alice.start();
    bob.start();
    shuttle(&mut alice, &mut bob);

    assert_eq!(
        transcript.lines(),
        vec![
            "alice: Sent DO 1",
            "bob: Sent WILL 1",
            "bob: Received DO 1",
            "bob: We enabled option 1",
            "alice: Received WILL 1",
            "alice: They enabled option 1",
        ]
    );
    assert!(alice.is_enabled(Party::Him, 1));
    assert!(bob.is_enabled(Party::Us, 1));
}

#[test]
fn change_of_mind_before_answer() {
    let transcript = Transcript::new();
    let (mut alice, mut bob) =
        create_pair(&transcript, NegotiationConfig::new(), NegotiationConfig::new());

    alice.request(Party::Him, 3);
    alice.forbid(Party::Him, 3);
    assert_eq!(alice.state(Party::Him, 3), NegotiationState::WantYesOpposite);
    shuttle(&mut alice, &mut bob);

    assert_eq!(
        transcript.lines(),
        vec![
            "alice: Sent DO 3",
            "bob: Received DO 3",
            "bob: We enabled option 3",
            "bob: Sent WILL 3",
            "alice: Received WILL 3",
            "alice: Sent DONT 3",
            "bob: Received DONT 3",
            "bob: We disabled option 3",
            "bob: Sent WONT 3",
            "alice: Received WONT 3",
            "alice: They disabled option 3",
        ]
    );
    assert_eq!(alice.state(Party::Him, 3), NegotiationState::No);
    assert_eq!(bob.state(Party::Us, 3), NegotiationState::No);
}

#[test]
fn disable_after_enable() {
    let transcript = Transcript::new();
    let (mut alice, mut bob) = create_pair(
        &transcript,
        NegotiationConfig::new().with_us([3]),
        NegotiationConfig::new(),
    );
    alice.start();
    shuttle(&mut alice, &mut bob);
    assert!(alice.is_enabled(Party::Us, 3));
    assert!(bob.is_enabled(Party::Him, 3));

    bob.forbid(Party::Him, 3);
    shuttle(&mut alice, &mut bob);
    assert!(!alice.is_enabled(Party::Us, 3));
    assert!(!bob.is_enabled(Party::Him, 3));
    assert!(!bob.supported(Party::Him).contains(&3));

    let lines = transcript.lines();
    assert_eq!(
        &lines[lines.len() - 6..],
        &[
            "bob: Sent DONT 3",
            "alice: Received DONT 3",
            "alice: We disabled option 3",
            "alice: Sent WONT 3",
            "bob: Received WONT 3",
            "bob: They disabled option 3",
        ]
    );
    assert_eq!(
        lines.iter().filter(|line| line.contains("disabled")).count(),
        2,
        "each side reports the disable once"
    );
}

#[test]
fn repeated_request_reports_anomaly() {
    let transcript = Transcript::new();
    let (mut alice, mut bob) =
        create_pair(&transcript, NegotiationConfig::new(), NegotiationConfig::new());

    alice.request(Party::Us, 3);
    alice.request(Party::Us, 3);
    shuttle(&mut alice, &mut bob);
    // Already enabled: the engine skips the request silently
    alice.request(Party::Us, 3);

    assert_eq!(
        transcript.lines(),
        vec![
            "alice: Sent WILL 3",
            "alice: Error negotiating option us3: Already negotiating for enable.",
            "bob: Received WILL 3",
            "bob: They enabled option 3",
            "bob: Sent DO 3",
            "alice: Received DO 3",
            "alice: We enabled option 3",
        ]
    );
}

#[test]
fn unsolicited_disable_is_ignored() {
    let transcript = Transcript::new();
    let (mut alice, mut bob) =
        create_pair(&transcript, NegotiationConfig::new(), NegotiationConfig::new());

    alice.receive_code(telnetq::consts::WONT, 5).unwrap();
    alice.receive_code(telnetq::consts::DONT, 5).unwrap();
    shuttle(&mut alice, &mut bob);

    assert!(transcript.lines().is_empty());
    assert_eq!(alice.options(Party::Him).count(), 1);
    assert!(alice.receive_code(0, 5).unwrap_err().is_invalid_argument());
}
