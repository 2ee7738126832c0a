// Copyright 2023-2025 Brian Smith.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sha2_engine::{cpu, digest, digest::sha2};

static ALGORITHMS: &[(&str, &digest::Algorithm)] =
    &[("sha224", &digest::SHA224), ("sha256", &digest::SHA256)];

const INPUT_LENGTHS: &[usize] = &[
    // Benchmark that emphasizes overhead.
    0,
    32,
    64,
    128,
    1024,
    2048,
    4096,
    8192,
    1024 * 1024,
];

const SMALL_MAX: usize = 8192;

#[repr(align(64))]
struct Small([u8; SMALL_MAX]);

fn oneshot(c: &mut Criterion) {
    for &(alg_name, algorithm) in ALGORITHMS {
        for input_len in INPUT_LENGTHS {
            c.bench_with_input(
                BenchmarkId::new(format!("digest::oneshot::{alg_name}"), input_len),
                input_len,
                |b, &input_len| {
                    let small;
                    let v;
                    let input = if input_len <= SMALL_MAX {
                        // Use an aligned buffer to minimize alignment-related variance.
                        small = Small([0; SMALL_MAX]);
                        &small.0[..input_len]
                    } else {
                        v = vec![0u8; input_len];
                        &v[..]
                    };
                    b.iter(|| -> usize {
                        let digest = digest::digest(algorithm, input);
                        black_box(digest.as_ref().len())
                    })
                },
            );
        }
    }
}

// Feeds 8 KiB in pieces of the given size to measure the buffering overhead.
fn streaming(c: &mut Criterion) {
    const TOTAL: usize = 8192;
    let input = Small([0; SMALL_MAX]);
    for piece_len in [1usize, 13, 64, 1000] {
        c.bench_with_input(
            BenchmarkId::new("digest::streaming::sha256", piece_len),
            &piece_len,
            |b, &piece_len| {
                b.iter(|| -> usize {
                    let mut ctx = digest::Context::new(&digest::SHA256);
                    for piece in input.0[..TOTAL].chunks(piece_len) {
                        ctx.update(piece).unwrap();
                    }
                    black_box(ctx.finish().as_ref().len())
                })
            },
        );
    }
}

// Raw compression throughput of each strategy this CPU supports.
fn strategies(c: &mut Criterion) {
    const BLOCKS: usize = 64;
    let input = Small([0; SMALL_MAX]);
    for strategy in sha2::Strategy::all_supported(cpu::Capabilities::detect()) {
        c.bench_function(&format!("sha2::compress::{}", strategy.name()), |b| {
            b.iter(|| {
                let mut state = [0u32; sha2::CHAINING_WORDS];
                for block in input.0.chunks_exact(sha2::BLOCK_LEN).take(BLOCKS) {
                    let block: &[u8; sha2::BLOCK_LEN] = block.try_into().unwrap();
                    strategy.compress_block(&mut state, block);
                }
                black_box(state)
            })
        });
    }
}

criterion_group!(digest, oneshot, streaming, strategies);
criterion_main!(digest);
