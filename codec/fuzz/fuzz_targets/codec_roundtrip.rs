#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use parcel_codec::{
    bounded::{
        Char, Double, Float, Int, Long, LongLong, Short, SignedChar, UnsignedChar, UnsignedInt,
        UnsignedLong, UnsignedLongLong, UnsignedShort,
    },
    decode_one, pack, pack_values, unpack, unpack_values, Error, Object, SizeConfig, Unpacked,
    Value,
};

const INTEGER_WIDTHS: [usize; 4] = [1, 2, 4, 8];
const FLOAT_WIDTHS: [usize; 2] = [4, 8];

#[derive(Arbitrary, Debug)]
struct Widths {
    integer: u8,
    boolean: u8,
    float: u8,
    string_length: u8,
}

impl Widths {
    fn config(&self) -> SizeConfig {
        SizeConfig::new(
            INTEGER_WIDTHS[self.integer as usize % INTEGER_WIDTHS.len()],
            1 + self.boolean as usize % 8,
            FLOAT_WIDTHS[self.float as usize % FLOAT_WIDTHS.len()],
            INTEGER_WIDTHS[self.string_length as usize % INTEGER_WIDTHS.len()],
        )
        .expect("widths are chosen from the accepted sets")
    }
}

#[derive(Arbitrary, Debug)]
enum BoundedInput {
    Char(u8),
    UnsignedChar(u8),
    SignedChar(i8),
    Short(i16),
    UnsignedShort(u16),
    Int(i32),
    UnsignedInt(u32),
    Long(i32),
    UnsignedLong(u32),
    LongLong(i64),
    UnsignedLongLong(u64),
    Float(f32),
    Double(f64),
    OutOfRange(i128),
}

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Bounded(Widths, BoundedInput),
    Native(Widths, i64, bool, f64),
    Strings(Widths, String, Vec<u8>),
    Tuple(Widths, (i32, bool, String), (u16, i64)),
    Values(Widths, Vec<(String, i32, bool)>),
    Garbage(Widths, Vec<u8>),
}

// Checks that `value` survives a round trip, consuming exactly what was packed.
fn roundtrip<T>(value: &T, cfg: &SizeConfig) -> T
where
    T: parcel_codec::Encode + parcel_codec::Read + Default,
{
    let packed = pack(value, cfg).expect("failed to pack a supported value");
    assert_eq!(value.encode_size(cfg), packed.len());
    let mut suffixed = packed.to_vec();
    suffixed.push(0xAB);
    let (decoded, rest) =
        decode_one(&suffixed, &T::default(), cfg).expect("failed to unpack a packed value");
    assert_eq!(rest, &[0xAB]);
    decoded
}

fn fuzz_bounded(cfg: &SizeConfig, input: BoundedInput) {
    match input {
        BoundedInput::Char(c) => match Char::new(c as char) {
            Ok(value) => assert_eq!(roundtrip(&value, cfg), value),
            Err(err) => {
                assert!(!c.is_ascii());
                assert!(matches!(err, Error::OutOfRange { .. }));
            }
        },
        BoundedInput::UnsignedChar(v) => {
            let value = UnsignedChar::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::SignedChar(v) => {
            let value = SignedChar::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::Short(v) => {
            let value = Short::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::UnsignedShort(v) => {
            let value = UnsignedShort::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::Int(v) => {
            let value = Int::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::UnsignedInt(v) => {
            let value = UnsignedInt::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::Long(v) => {
            let value = Long::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::UnsignedLong(v) => {
            let value = UnsignedLong::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::LongLong(v) => {
            let value = LongLong::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::UnsignedLongLong(v) => {
            let value = UnsignedLongLong::from(v);
            assert_eq!(roundtrip(&value, cfg), value);
        }
        BoundedInput::Float(v) => {
            let decoded = roundtrip(&Float::new(v), cfg);
            assert_eq!(decoded.get().to_bits(), v.to_bits());
        }
        BoundedInput::Double(v) => {
            let decoded = roundtrip(&Double::new(v), cfg);
            assert_eq!(decoded.get().to_bits(), v.to_bits());
        }
        BoundedInput::OutOfRange(v) => {
            let in_range = (UnsignedShort::MIN..=UnsignedShort::MAX).contains(&v);
            assert_eq!(UnsignedShort::new(v).is_ok(), in_range);
            let in_range = (LongLong::MIN..=LongLong::MAX).contains(&v);
            assert_eq!(LongLong::new(v).is_ok(), in_range);
        }
    }
}

fn fuzz_native(cfg: &SizeConfig, int: i64, flag: bool, float: f64) {
    // Integers are truncated to the 4-byte Int layout, then sign-extended
    assert_eq!(roundtrip(&int, cfg), int as i32 as i64);
    assert_eq!(roundtrip(&flag, cfg), flag);

    let decoded = roundtrip(&float, cfg);
    if cfg.float() == 8 {
        assert_eq!(decoded.to_bits(), float.to_bits());
    } else if !float.is_nan() {
        assert_eq!(decoded, float as f32 as f64);
    }
}

fn fuzz_strings(cfg: &SizeConfig, text: String, raw: Vec<u8>) {
    if raw.len() as u64 > cfg.max_length() {
        assert!(matches!(pack(&raw, cfg), Err(Error::LengthOverflow { .. })));
        return;
    }
    if text.len() as u64 > cfg.max_length() {
        assert!(matches!(pack(&text, cfg), Err(Error::LengthOverflow { .. })));
        return;
    }
    assert_eq!(roundtrip(&text, cfg), text);
    assert_eq!(roundtrip(&raw, cfg), raw);
    let bytes = Bytes::from(raw);
    assert_eq!(roundtrip(&bytes, cfg), bytes);

    // Byte strings that are not UTF-8 must not decode as text
    let packed = pack(&bytes, cfg).unwrap();
    match unpack(&packed, &String::new(), cfg) {
        Ok(decoded) => assert_eq!(decoded.as_bytes(), &bytes[..]),
        Err(err) => assert!(matches!(err, Error::InvalidUtf8(_))),
    }
}

fn fuzz_tuple(cfg: &SizeConfig, first: (i32, bool, String), second: (u16, i64)) {
    if first.2.len() as u64 > cfg.max_length() {
        return;
    }
    let value = (first, UnsignedShort::from(second.0), LongLong::from(second.1));
    assert_eq!(roundtrip(&value, cfg), value);
}

fn fuzz_values(cfg: &SizeConfig, entries: Vec<(String, i32, bool)>) {
    if entries.iter().any(|(s, _, _)| s.len() as u64 > cfg.max_length()) {
        return;
    }
    let values: Vec<Value> = entries
        .iter()
        .map(|(name, int, flag)| {
            Value::Object(
                Object::new()
                    .with("name", name.as_str())
                    .with("int", *int)
                    .with("flag", *flag),
            )
        })
        .collect();
    let templates: Vec<Value> = values
        .iter()
        .map(|_| {
            Value::Object(
                Object::new()
                    .with("name", "")
                    .with("int", 0i32)
                    .with("flag", false),
            )
        })
        .collect();
    let packed = pack_values(&values, cfg).unwrap();
    match unpack_values(&packed, &templates, cfg) {
        Ok(Unpacked::One(value)) => assert_eq!(vec![value], values),
        Ok(Unpacked::Many(decoded)) => assert_eq!(decoded, values),
        Err(err) => {
            assert!(values.is_empty());
            assert_eq!(err, Error::NoTemplates);
        }
    }
}

fn fuzz_garbage(cfg: &SizeConfig, data: Vec<u8>) {
    // Arbitrary bytes either decode or fail cleanly; they never panic
    let _ = unpack(&data, &(0i64, String::new(), Bytes::new()), cfg);
    let _ = unpack(&data, &(Char::default(), UnsignedLongLong::default()), cfg);
    let _ = unpack_values(
        &data,
        &[Value::from(""), Value::Bool(false), Value::Float(0.0)],
        cfg,
    );
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Bounded(widths, input) => fuzz_bounded(&widths.config(), input),
        FuzzInput::Native(widths, int, flag, float) => {
            fuzz_native(&widths.config(), int, flag, float)
        }
        FuzzInput::Strings(widths, text, raw) => fuzz_strings(&widths.config(), text, raw),
        FuzzInput::Tuple(widths, first, second) => fuzz_tuple(&widths.config(), first, second),
        FuzzInput::Values(widths, entries) => fuzz_values(&widths.config(), entries),
        FuzzInput::Garbage(widths, data) => fuzz_garbage(&widths.config(), data),
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
