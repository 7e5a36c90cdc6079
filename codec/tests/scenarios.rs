//! End-to-end pack/unpack scenarios.

use bytes::Bytes;
use parcel_codec::{
    bounded::{
        Char, Double, Float, Int, Long, LongLong, Short, SignedChar, UnsignedChar, UnsignedInt,
        UnsignedLong, UnsignedLongLong, UnsignedShort,
    },
    decode_one, impl_composite, pack, pack_values, unpack, unpack_exact, unpack_values, Error,
    Object, SizeConfig, Unpacked, Value,
};
use tracing::Level;

fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Default, PartialEq)]
struct Header {
    version: UnsignedChar,
    flags: UnsignedShort,
    sender: String,
}
impl_composite!(Header { version, flags, sender });

#[derive(Debug, Default, PartialEq)]
struct Message {
    header: Header,
    sequence: UnsignedLongLong,
    position: (Double, Double),
    payload: Bytes,
    urgent: bool,
    priority: i32,
    weight: f32,
}
impl_composite!(Message {
    header,
    sequence,
    position,
    payload,
    urgent,
    priority,
    weight,
});

fn message() -> Message {
    Message {
        header: Header {
            version: UnsignedChar::new(2).unwrap(),
            flags: UnsignedShort::new(0x0102).unwrap(),
            sender: "alice".into(),
        },
        sequence: UnsignedLongLong::new(u64::MAX).unwrap(),
        position: (Double::new(51.5), Double::new(-0.125)),
        payload: Bytes::from_static(b"\x00\x01\xFF"),
        urgent: true,
        priority: -3,
        weight: 0.5,
    }
}

#[test]
fn test_int_and_float() {
    init();
    let cfg = SizeConfig::default();
    let packed = pack(&(Int::new(5).unwrap(), Float::new(2.5)), &cfg).unwrap();
    assert_eq!(packed.len(), 8);
    assert_eq!(&packed[..4], &5i32.to_ne_bytes()[..]);
    assert_eq!(&packed[4..], &2.5f32.to_ne_bytes()[..]);

    let (int, float) = unpack(&packed, &(Int::default(), Float::default()), &cfg).unwrap();
    assert_eq!(int.get(), 5);
    assert_eq!(float.get(), 2.5);
}

#[test]
fn test_text_hi() {
    init();
    let cfg = SizeConfig::default();
    let packed = pack("hi", &cfg).unwrap();
    let mut expected = 2u32.to_ne_bytes().to_vec();
    expected.extend_from_slice(b"hi");
    assert_eq!(packed, expected);

    let (text, rest) = decode_one(&packed, &String::new(), &cfg).unwrap();
    assert_eq!(text, "hi");
    assert!(rest.is_empty());
}

#[test]
fn test_unsigned_short_limit() {
    init();
    let cfg = SizeConfig::default();
    assert!(matches!(
        UnsignedShort::new(65536),
        Err(Error::OutOfRange {
            kind: "UnsignedShort",
            value: 65536,
            ..
        })
    ));
    let value = UnsignedShort::new(65535).unwrap();
    let packed = pack(&value, &cfg).unwrap();
    assert_eq!(packed.len(), 2);
    assert_eq!(unpack_exact(&packed, &UnsignedShort::default(), &cfg).unwrap(), value);
}

#[test]
fn test_composite_round_trip() {
    init();
    for cfg in [
        SizeConfig::default(),
        SizeConfig::new(8, 1, 8, 2).unwrap(),
        SizeConfig::new(2, 4, 4, 8).unwrap(),
    ] {
        let value = message();
        let packed = pack(&value, &cfg).unwrap();
        let (decoded, rest) = decode_one(&packed, &Message::default(), &cfg).unwrap();
        assert_eq!(decoded, value);
        assert!(rest.is_empty());
    }
}

#[test]
fn test_mismatched_config_misdecodes() {
    init();
    // The format carries no widths: a reader with the wrong config reads garbage or fails
    let writer = SizeConfig::default();
    let reader = SizeConfig::default().with_float(8).unwrap();
    let packed = pack(&(1.5f32, 2.5f32), &writer).unwrap();
    assert_ne!(unpack(&packed, &0f64, &reader).unwrap(), 1.5);
    assert_eq!(unpack(&packed, &(0f64, 0f64), &reader), Err(Error::EndOfBuffer));

    // Native integers keep the Int layout, so a different integer width reads them fine
    let reader = SizeConfig::default().with_integer(8).unwrap();
    let packed = pack(&(1i32, 2i64), &writer).unwrap();
    assert_eq!(unpack_exact(&packed, &(0i64, 0i32), &reader).unwrap(), (1, 2));
}

#[test]
fn test_multiple_values_in_order() {
    init();
    let cfg = SizeConfig::default();
    let a = message();
    let b = (Char::new('q').unwrap(), String::from("tail"));
    let packed = pack(&(&a, &b), &cfg).unwrap();

    let (first, rest) = decode_one(&packed, &Message::default(), &cfg).unwrap();
    let (second, rest) = decode_one(rest, &(Char::default(), String::new()), &cfg).unwrap();
    assert_eq!(first, a);
    assert_eq!(second, b);
    assert!(rest.is_empty());
}

type Kinds = (
    (
        Char,
        UnsignedChar,
        SignedChar,
        Short,
        UnsignedShort,
        Int,
        UnsignedInt,
    ),
    (
        Long,
        UnsignedLong,
        LongLong,
        UnsignedLongLong,
        Float,
        Double,
    ),
);

#[test]
fn test_every_bounded_kind() {
    init();
    let cfg = SizeConfig::default();
    let value: Kinds = (
        (
            Char::new('A').unwrap(),
            UnsignedChar::new(255).unwrap(),
            SignedChar::new(-128).unwrap(),
            Short::new(-32768).unwrap(),
            UnsignedShort::new(65535).unwrap(),
            Int::new(i32::MIN).unwrap(),
            UnsignedInt::new(u32::MAX).unwrap(),
        ),
        (
            Long::new(i32::MAX).unwrap(),
            UnsignedLong::new(0).unwrap(),
            LongLong::new(i64::MIN).unwrap(),
            UnsignedLongLong::new(u64::MAX).unwrap(),
            Float::new(-0.75),
            Double::new(1e-300),
        ),
    );
    let packed = pack(&value, &cfg).unwrap();
    assert_eq!(packed.len(), 1 + 1 + 1 + 2 + 2 + 4 + 4 + 4 + 4 + 8 + 8 + 4 + 8);
    let decoded = unpack_exact(&packed, &<Kinds>::default(), &cfg).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn test_runtime_values() {
    init();
    let cfg = SizeConfig::default();
    let packed = pack_values(
        &[
            Value::Int(5),
            Value::from("hi"),
            Value::Object(Object::new().with("ok", true).with("score", 0.5f64)),
        ],
        &cfg,
    )
    .unwrap();
    assert_eq!(packed.len(), 4 + 6 + 1 + 4);

    let templates = [
        Value::Int(0),
        Value::from(""),
        Value::Object(Object::new().with("ok", false).with("score", 0.0f64)),
    ];
    let Unpacked::Many(values) = unpack_values(&packed, &templates, &cfg).unwrap() else {
        panic!("expected one value per template");
    };
    assert_eq!(values[0], Value::Int(5));
    assert_eq!(values[1], Value::Str("hi".into()));
    let Value::Object(object) = &values[2] else {
        panic!("expected an object");
    };
    assert_eq!(object.get("ok"), Some(&Value::Bool(true)));
    assert_eq!(object.get("score"), Some(&Value::Float(0.5)));

    // The static and dynamic paths agree on the layout
    assert_eq!(pack(&(5i32, "hi", (true, 0.5f32)), &cfg).unwrap(), packed);

    assert_eq!(unpack_values(&packed, &[], &cfg), Err(Error::NoTemplates));
}
