/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

use containers::Deque;
use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;
use std::hint::black_box;

const LIMIT: usize = 100_000;

fn deque_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque push back");

    group.bench_function("deque", |b| {
        b.iter(|| {
            let mut deque: Deque<usize> = Deque::new();

            for i in 0..LIMIT {
                deque.push_back(i);
            }

            deque
        });
    });

    group.bench_function("std vec deque", |b| {
        b.iter(|| {
            let mut deque: VecDeque<usize> = VecDeque::new();

            for i in 0..LIMIT {
                deque.push_back(i);
            }

            deque
        });
    });

    group.finish();
}

fn deque_push_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque push front");

    group.bench_function("deque", |b| {
        b.iter(|| {
            let mut deque: Deque<usize> = Deque::new();

            for i in 0..LIMIT {
                deque.push_front(i);
            }

            deque
        });
    });

    group.bench_function("std vec deque", |b| {
        b.iter(|| {
            let mut deque: VecDeque<usize> = VecDeque::new();

            for i in 0..LIMIT {
                deque.push_front(i);
            }

            deque
        });
    });

    group.finish();
}

fn deque_pop_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque pop front");

    group.bench_function("deque", |b| {
        b.iter_with_setup(
            || (0..LIMIT).collect::<Deque<usize>>(),
            |mut deque| {
                for _ in 0..LIMIT {
                    deque.pop_front();
                }

                deque
            },
        );
    });

    group.bench_function("std vec deque", |b| {
        b.iter_with_setup(
            || (0..LIMIT).collect::<VecDeque<usize>>(),
            |mut deque| {
                for _ in 0..LIMIT {
                    deque.pop_front();
                }

                deque
            },
        );
    });

    group.finish();
}

fn deque_iterate(c: &mut Criterion) {
    let deque: Deque<usize> = (0..LIMIT).collect();
    let vec_deque: VecDeque<usize> = (0..LIMIT).collect();
    let mut group = c.benchmark_group("deque iterate");

    group.bench_function("deque", |b| {
        b.iter(|| {
            for i in &deque {
                black_box(i);
            }
        });
    });

    group.bench_function("deque cursor", |b| {
        b.iter(|| {
            let mut cursor = deque.begin();

            while !cursor.is_end() {
                black_box(deque.get_at(cursor).ok());
                cursor = deque.move_next(cursor).unwrap_or_else(|_| deque.end());
            }
        });
    });

    group.bench_function("std vec deque", |b| {
        b.iter(|| {
            for i in &vec_deque {
                black_box(i);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, deque_push_back, deque_push_front, deque_pop_front, deque_iterate);
criterion_main!(benches);
