// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hawser::index::IndicesOfIn;
use hawser::reify::Reify;
use hawser::typenum::{U1, U2, U3};
use hawser::{TypeList, marker, tlist};
use std::hint::black_box;

marker! {
    struct Bow = U1;
    struct Stern = U2;
    struct Keel = U3;
}

type Short = tlist![Bow, Stern, Bow, Keel];
type Long = tlist![
    Bow, Stern, Bow, Keel, Stern, Stern, Bow, Keel, Bow, Stern, Bow, Keel, Keel, Bow, Stern, Bow
];

fn bench_reify<L>(c: &mut Criterion, label: &str)
where
    L: TypeList + hawser::index::IndicesOf<Bow>,
    IndicesOfIn<Bow, L>: Reify,
{
    let mut group = c.benchmark_group("reify_indices");
    group.throughput(Throughput::Elements(<L as TypeList>::LEN as u64));
    group.bench_with_input(BenchmarkId::new("to_vec_usize", label), &(), |b, _| {
        b.iter(|| {
            let positions = <IndicesOfIn<Bow, L> as Reify>::to_vec::<usize>()
                .expect("positions always fit in usize");
            black_box(positions)
        })
    });
    group.finish();
}

fn bench_type_names(c: &mut Criterion) {
    c.bench_function("type_names_long", |b| {
        b.iter(|| black_box(<Long as TypeList>::type_names()))
    });
}

fn bench_indices(c: &mut Criterion) {
    bench_reify::<Short>(c, "short");
    bench_reify::<Long>(c, "long");
}

criterion_group!(benches, bench_indices, bench_type_names);
criterion_main!(benches);
