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

//! Benchmarks for negotiation performance

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use telnetq::{
    MachineHooks, NegotiationAnomaly, NegotiationConfig, NegotiationEngine, NegotiationMessage,
    NullHandler, OptionKey, OptionStateMachine, Party, RecordingHandler, TelnetVerb, WireCodec,
    codec,
};
use tokio_util::codec::{Decoder, Encoder};

// ============================================================================
// Codec Benchmarks
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.bench_function("encode", |b| {
        b.iter(|| codec::encode(black_box(TelnetVerb::Do), black_box(31)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| codec::decode(black_box(&[255, 251, 1])).unwrap());
    });

    group.finish();
}

fn bench_framed_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("framed_decode");

    for count in [1usize, 16, 256].iter() {
        let mut input = BytesMut::new();
        let mut codec = WireCodec::new();
        for option in 0..*count {
            let message = NegotiationMessage::new(TelnetVerb::ALL[option % 4], option as u8);
            codec.encode(message, &mut input).unwrap();
        }
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| {
                let mut buffer = input.clone();
                let mut decoded = 0;
                while let Some(message) = codec.decode(&mut buffer).unwrap() {
                    black_box(message);
                    decoded += 1;
                }
                decoded
            });
        });
    }

    group.finish();
}

// ============================================================================
// State Machine Benchmarks
// ============================================================================

struct SilentHooks;

impl MachineHooks for SilentHooks {
    fn option_supported(&mut self, _key: OptionKey) -> bool {
        true
    }

    fn send(&mut self, key: OptionKey, verb: TelnetVerb) {
        black_box((key, verb));
    }

    fn negotiated(&mut self, key: OptionKey, enabled: bool) {
        black_box((key, enabled));
    }

    fn anomaly(&mut self, key: OptionKey, anomaly: NegotiationAnomaly) {
        black_box((key, anomaly));
    }
}

fn bench_state_machine(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_machine");

    group.bench_function("enable_disable_cycle", |b| {
        let mut engine = NegotiationEngine::with_handler(NullHandler);
        b.iter(|| {
            engine.request(Party::Him, black_box(1));
            engine.receive(TelnetVerb::Will, 1);
            engine.forbid(Party::Him, 1);
            engine.receive(TelnetVerb::Wont, 1);
        });
    });

    group.bench_function("standalone_machine", |b| {
        let mut machine = OptionStateMachine::new(OptionKey::new(Party::Us, 3));
        let mut hooks = SilentHooks;
        b.iter(|| {
            machine.ask_enable(&mut hooks);
            machine.received_positive(&mut hooks);
            machine.ask_disable(&mut hooks);
            machine.received_negative(&mut hooks);
            black_box(machine.current_state())
        });
    });

    group.finish();
}

// ============================================================================
// Scenario Benchmarks
// ============================================================================

fn bench_startup(c: &mut Criterion) {
    let mut group = c.benchmark_group("startup");

    for options in [4u8, 32, 128].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(options),
            options,
            |b, &options| {
                b.iter(|| {
                    let config = NegotiationConfig::new()
                        .with_us(0..options)
                        .with_him(0..options);
                    let mut alice = NegotiationEngine::new(config.clone(), RecordingHandler::new());
                    let mut bob = NegotiationEngine::new(config, RecordingHandler::new());
                    alice.start();
                    bob.start();
                    loop {
                        let to_bob = alice.handler_mut().take_outbound();
                        let to_alice = bob.handler_mut().take_outbound();
                        if to_bob.is_empty() && to_alice.is_empty() {
                            break;
                        }
                        for message in to_bob {
                            bob.receive_message(message);
                        }
                        for message in to_alice {
                            alice.receive_message(message);
                        }
                    }
                    black_box(alice.is_enabled(Party::Us, 0))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(codec_benches, bench_codec, bench_framed_decode);

criterion_group!(state_benches, bench_state_machine);

criterion_group!(scenario_benches, bench_startup);

criterion_main!(codec_benches, state_benches, scenario_benches);
