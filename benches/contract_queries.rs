use criterion::{criterion_group, criterion_main, Criterion};
use pact::{Arity, Contract, IntegerKey, KeySpec, LongKey, StringKey, UserFunction};

struct Sessionize;
impl UserFunction for Sessionize {}

fn make_contract(inputs: usize) -> Contract {
    Contract::builder::<Sessionize>("sessionize", Arity::NAry(inputs))
        .keyed()
        .key(KeySpec::new::<StringKey>(vec![0usize; inputs]))
        .key(KeySpec::new::<LongKey>(vec![1usize; inputs]))
        .secondary_sort_key(KeySpec::new::<IntegerKey>(vec![2usize; inputs]))
        .build()
        .unwrap()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("contract_build_nary_16", |b| {
        b.iter(|| make_contract(16));
    });
}

fn bench_column_lookup(c: &mut Criterion) {
    let contract = make_contract(16);
    c.bench_function("key_column_numbers", |b| {
        b.iter(|| {
            for i in 0..contract.number_of_inputs() {
                let _ = contract.key_column_numbers(i).unwrap();
                let _ = contract.secondary_sort_key_column_numbers(i).unwrap();
            }
        })
    });
}

criterion_group!(contracts, bench_build, bench_column_lookup);
criterion_main!(contracts);
