//! Publishing and wiring contracts into a program graph.

use pact::{Arity, Contract, Error, IntegerKey, KeySpec, OpId, Program, StringKey, UserFunction};

struct ReadLines;
impl UserFunction for ReadLines {}

struct ParseOrder;
impl UserFunction for ParseOrder {}

struct JoinByUser;
impl UserFunction for JoinByUser {}

fn source(name: &str) -> Contract {
    Contract::builder::<ReadLines>(name, Arity::Source)
        .build()
        .unwrap()
}

fn parse(name: &str) -> Contract {
    Contract::builder::<ParseOrder>(name, Arity::Unary)
        .build()
        .unwrap()
}

fn join() -> Contract {
    Contract::builder::<JoinByUser>("join", Arity::Binary)
        .keyed()
        .key(KeySpec::new::<StringKey>([0, 1]))
        .build()
        .unwrap()
}

#[test]
fn test_wire_two_sources_into_join() {
    let mut p = Program::new();
    let users = p.publish(source("users"));
    let orders = p.publish(source("orders"));
    let parsed = p.publish(parse("parse_orders"));
    let j = p.publish(join());

    p.connect(orders, parsed, 0).unwrap();
    p.connect(users, j, 0).unwrap();
    p.connect(parsed, j, 1).unwrap();

    assert!(p.validate().is_ok());
    assert_eq!(p.inputs_of(j).unwrap(), vec![Some(users), Some(parsed)]);
    assert_eq!(p.inputs_of(users).unwrap(), Vec::<Option<OpId>>::new());
    let contract = p.contract(j).unwrap();
    assert_eq!(contract.key_column_numbers(1).unwrap(), vec![1]);
}

#[test]
fn test_connect_checks_input_slot() {
    let mut p = Program::new();
    let a = p.publish(source("a"));
    let j = p.publish(join());

    assert_eq!(
        p.connect(a, j, 2).unwrap_err(),
        Error::InvalidInputIndex {
            contract: "join".into(),
            index: 2,
            inputs: 2
        }
    );
    assert!(matches!(
        p.connect(j, a, 0),
        Err(Error::InvalidInputIndex { inputs: 0, .. })
    ));

    p.connect(a, j, 0).unwrap();
    assert!(matches!(p.connect(a, j, 0), Err(Error::Plan(_))));
    assert!(matches!(p.connect(OpId::new(99), j, 1), Err(Error::Plan(_))));
}

#[test]
fn test_validate_reports_unwired_inputs() {
    let mut p = Program::new();
    let a = p.publish(source("a"));
    let parsed = p.publish(parse("parse"));
    let j = p.publish(join());
    p.connect(a, j, 0).unwrap();
    p.connect(parsed, j, 1).unwrap();

    let err = p.validate().unwrap_err();
    assert!(err.to_string().contains("'parse'"));

    p.connect(a, parsed, 0).unwrap();
    assert!(p.validate().is_ok());
}

#[test]
fn test_empty_and_source_only_programs_validate() {
    let mut p = Program::new();
    assert!(p.validate().is_ok());
    p.publish(source("only"));
    assert!(p.validate().is_ok());
}

#[test]
fn test_republish_changes_fingerprint() {
    let mut p = Program::new();
    let a = p.publish(parse("a"));
    let before = p.fingerprint().unwrap();

    let updated = (**p.contract(a).unwrap())
        .clone()
        .with_secondary_sort_keys(vec![])
        .unwrap();
    assert_eq!(updated.fingerprint().unwrap(), p.contract(a).unwrap().fingerprint().unwrap());

    let keyed = Contract::builder::<ParseOrder>("a", Arity::Unary)
        .keyed()
        .key(KeySpec::new::<IntegerKey>([0]))
        .build()
        .unwrap();
    p.publish(keyed);
    assert_ne!(before, p.fingerprint().unwrap());
}

#[test]
fn test_descriptors_serialize_for_diagnostics() {
    let mut p = Program::new();
    p.publish(source("users"));
    p.publish(join());
    let descriptors: Vec<_> = p.contracts().map(|(_, c)| c.describe()).collect();
    let json = serde_json::to_string(&descriptors).unwrap();
    assert!(json.contains("\"key_type\":\"string\""));
    assert!(json.contains("\"Binary\""));
    assert!(json.contains("\"Source\""));
}
