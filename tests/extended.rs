use std::num::FpCategory;

use hex_literal::hex;
use sane_float::{
    Classify, Endian, F80, Format, HostExtended, Info, LongDouble,
    NATIVE_EXTENDED, Width, read_extended, write_extended,
};

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

#[test]
fn one_and_a_half_big_endian_round_trip() {
    // encode 1.5 into extended-10 big-endian and decode it back
    let mut record = [0u8; 10];
    write_extended(1.5f64, Format::EXTENDED_BE, &mut record).unwrap();
    assert_eq!(record, hex!("3fffc000000000000000"));
    let back: f64 = read_extended(Format::EXTENDED_BE, &record).unwrap();
    assert_eq!(back, 1.5);

    let native: F80 = read_extended(Format::EXTENDED_BE, &record).unwrap();
    assert_eq!(native, F80::from_parts(0x3FFF, 0xC000_0000_0000_0000));
    assert_eq!(native.to_f64(), 1.5);
}

#[test]
fn native_transfer_keeps_all_80_bits() {
    // 1 + 2^-63 needs the full extended significand
    let value = F80::from_parts(0x3FFF, 0x8000_0000_0000_0001);
    for width in [Width::Extended10, Width::Extended12, Width::Extended16] {
        for endian in [Endian::Little, Endian::Big] {
            let format = Format::new(width, endian);
            let mut record = vec![0u8; format.len()];
            write_extended(value, format, &mut record).unwrap();
            let back: F80 = read_extended(format, &record).unwrap();
            assert_eq!(back, value, "{format:?}");
        }
    }
    // the fallback cannot hold the low bit
    assert_eq!(value.to_f64(), 1.0);
}

#[test]
fn padded_records_zero_fill_and_ignore_pad() {
    let value = F80::from(1.5f64);

    let mut le = [0xAAu8; 16];
    write_extended(value, Format::new(Width::Extended16, Endian::Little), &mut le)
        .unwrap();
    assert_eq!(le, hex!("00000000000000c0ff3f000000000000"));

    let mut be = [0xAAu8; 12];
    write_extended(value, Format::new(Width::Extended12, Endian::Big), &mut be)
        .unwrap();
    assert_eq!(be, hex!("00003fffc000000000000000"));

    let dirty = hex!("5a5a3fffc000000000000000");
    let back: F80 =
        read_extended(Format::new(Width::Extended12, Endian::Big), &dirty).unwrap();
    assert_eq!(back, value);
}

#[test]
fn fallback_reproduces_every_double() {
    let mut rng = XorShift(0xA5A5_5A5A_0F0F_F0F0);
    let mut values = vec![
        0.0,
        -0.0,
        1.0,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        f64::MAX,
        f64::MIN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];
    for _ in 0..100_000 {
        values.push(f64::from_bits(rng.next()));
    }
    for value in values {
        for width in [Width::Extended10, Width::Extended12, Width::Extended16] {
            let format = Format::new(width, Endian::Big);
            let mut record = vec![0u8; format.len()];
            write_extended(value, format, &mut record).unwrap();
            let back: f64 = read_extended(format, &record).unwrap();
            if value.is_nan() {
                assert!(back.is_nan());
            } else {
                assert_eq!(back.to_bits(), value.to_bits(), "{value:e}");
            }
        }
    }
}

#[test]
fn fallback_loses_extended_range() {
    let record = F80::from_parts(0x7FFE, 0x8000_0000_0000_0000).to_bits();
    assert_eq!(f64::from_record(record), f64::INFINITY);
    let tiny = F80::from_parts(0x0001, 0x8000_0000_0000_0000).to_bits();
    assert_eq!(f64::from_record(tiny), 0.0);
}

#[test]
fn extended_hosts_read_single_and_double_records() {
    let widened: F80 = read_extended(Format::DOUBLE_BE, &hex!("3ff8000000000000")).unwrap();
    assert_eq!(widened, F80::from(1.5f64));

    let widened: F80 = read_extended(Format::SINGLE_LE, &hex!("0000c03f")).unwrap();
    assert_eq!(widened, F80::from(1.5f64));

    // narrowing a full-precision value rounds to nearest
    let third = F80::from_parts(0x3FFD, 0xAAAA_AAAA_AAAA_AAAB);
    let mut out = [0u8; 8];
    write_extended(third, Format::DOUBLE_BE, &mut out).unwrap();
    assert_eq!(out, (1.0f64 / 3.0).to_be_bytes());
}

#[test]
fn infinity_round_trips_through_every_format() {
    for width in [
        Width::Single,
        Width::Double,
        Width::Extended10,
        Width::Extended12,
        Width::Extended16,
    ] {
        for endian in [Endian::Little, Endian::Big] {
            let format = Format::new(width, endian);
            let mut record = vec![0u8; format.len()];
            write_extended(F80::INFINITY, format, &mut record).unwrap();
            let native: F80 = read_extended(format, &record).unwrap();
            assert_eq!(native, F80::INFINITY, "{format:?}");

            write_extended(f64::INFINITY, format, &mut record).unwrap();
            let fallback: f64 = read_extended(format, &record).unwrap();
            assert_eq!(fallback, f64::INFINITY, "{format:?}");
        }
    }
}

#[test]
fn length_is_checked() {
    let mut short = [0u8; 9];
    assert!(write_extended(F80::ONE, Format::EXTENDED_LE, &mut short).is_err());
    assert!(read_extended::<F80>(Format::EXTENDED_LE, &short).is_err());
}

#[test]
fn f80_classification() {
    assert_eq!(F80::ZERO.classify(), FpCategory::Zero);
    assert!(F80::ONE.is_normal());
    assert!(F80::INFINITY.is_infinite());
    assert!(F80::NEG_INFINITY.signbit());
    assert!(F80::NAN.is_nan());
    assert!(!F80::NAN.is_finite());
    assert_eq!(F80::from_parts(0x0000, 1).classify(), FpCategory::Subnormal);
    assert_eq!(F80::from(-2.0f64).abs(), F80::from(2.0f64));
    assert_eq!(F80::from(0.25f32).to_f32(), 0.25);
}

#[test]
fn f80_debug_and_display() {
    assert_eq!(format!("{:?}", F80::ONE), "F80(0x3fff:0x8000000000000000)");
    assert_eq!(F80::ONE.to_string(), "+normal exp=0 sig=0x8000000000000000");
    assert_eq!(F80::NEG_INFINITY.to_string(), "-inf");
}

#[test]
fn long_double_follows_build_policy() {
    let expected = cfg!(all(
        any(target_arch = "x86", target_arch = "x86_64", target_arch = "m68k"),
        not(feature = "double-extended")
    ));
    assert_eq!(NATIVE_EXTENDED, expected);
    assert_eq!(<LongDouble as HostExtended>::NATIVE, expected);

    let value: LongDouble = Info::from(1.5f64).to_long_double();
    assert_eq!(f64::from(value.to_info()), 1.5);
}
