mod common;

use mpx::{Buffer, Error, FormatOptions, MpFloat, Notation, Round, ToFormattedString};

use crate::common::{c_str, parse, THIRD, TWO_THIRDS, ZERO};

#[test]
fn test_third_five_digits() {
    let mut buf = [0u8; 32];
    let n = mpx::format(&mut buf, 5, &*THIRD).unwrap();
    assert_eq!(n, 7);
    assert_eq!(c_str(&buf), "0.33333");
}

#[test]
fn test_zero_three_digits() {
    let mut buf = [0xffu8; 32];
    let n = mpx::format(&mut buf, 3, &*ZERO).unwrap();
    assert_eq!(n, 1);
    assert_eq!(c_str(&buf), "0");
}

#[test]
fn test_zero_digits_means_one() {
    let mut buf = [0u8; 32];
    let _ = mpx::format(&mut buf, 0, &*THIRD).unwrap();
    assert_eq!(c_str(&buf), "0.3");
    let _ = mpx::format(&mut buf, 0, &*TWO_THIRDS).unwrap();
    assert_eq!(c_str(&buf), "0.7");
}

#[test]
fn test_general_notation() {
    let test_cases: &[(&str, &str, u32)] = &[
        ("0.33333", "0.333333333333333333333", 5),
        ("123457", "123456.789", 6),
        ("1.23e+05", "123456.789", 3),
        ("0.0001", "0.0001", 3),
        ("1e-05", "0.00001", 3),
        ("-2.5", "-2.5", 6),
        ("1e+100", "1e100", 3),
        ("3.1415926535897932384626", "3.14159265358979323846264338327950288", 23),
        ("inf", "inf", 5),
        ("-inf", "-inf", 5),
        ("nan", "nan", 5),
    ];

    for (expected, input, digits) in test_cases {
        let value = parse(input);

        // slice
        let mut bytes = [0u8; 64];
        let n = mpx::format(&mut bytes, *digits, &value).unwrap();
        assert_eq!(*expected, c_str(&bytes));
        assert_eq!(n, expected.len());

        // Buffer
        let mut buf = Buffer::new();
        let _ = buf.write_formatted(&value, digits).unwrap();
        assert_eq!(*expected, buf.as_str());
        assert!(!buf.is_truncated());

        // ToFormattedString
        assert_eq!(expected.to_string(), value.to_formatted_string(digits).unwrap());
    }
}

#[test]
fn test_rounding_modes() {
    let minus_two_thirds = -1.0 * &*TWO_THIRDS;
    let test_cases: &[(&str, &MpFloat, Round)] = &[
        ("0.667", &*TWO_THIRDS, Round::Nearest),
        ("0.666", &*TWO_THIRDS, Round::TowardZero),
        ("0.666", &*TWO_THIRDS, Round::Down),
        ("0.667", &*TWO_THIRDS, Round::Up),
        ("0.667", &*TWO_THIRDS, Round::AwayFromZero),
        ("-0.666", &minus_two_thirds, Round::TowardZero),
        ("-0.667", &minus_two_thirds, Round::Down),
        ("-0.666", &minus_two_thirds, Round::Up),
        ("-0.667", &minus_two_thirds, Round::AwayFromZero),
    ];

    for (expected, value, round) in test_cases {
        let options = FormatOptions::new().with_digits(3).with_round(*round);
        let mut buf = [0u8; 16];
        let _ = mpx::format_with(&mut buf, *value, &options).unwrap();
        assert_eq!(*expected, c_str(&buf), "{:?}", round);
    }
}

#[test]
fn test_notations() {
    let options = FormatOptions::new().with_digits(2);
    let scientific = options.with_notation(Notation::Scientific);
    let fixed = options.with_notation(Notation::Fixed);

    assert_eq!(THIRD.to_formatted_string(&options).unwrap(), "0.33");
    assert_eq!(THIRD.to_formatted_string(&scientific).unwrap(), "3.33e-01");
    assert_eq!(THIRD.to_formatted_string(&fixed).unwrap(), "0.33");
    assert_eq!(parse("1234.5").to_formatted_string(&fixed).unwrap(), "1234.50");
    assert_eq!(ZERO.to_formatted_string(&fixed).unwrap(), "0.00");
}

#[test]
fn test_truncation() {
    let mut small = [0xffu8; 4];
    let n = mpx::format(&mut small, 5, &*THIRD).unwrap();
    assert_eq!(n, 7);
    assert_eq!(&small, b"0.3\0");
    assert_eq!(mpx::stored_len(n, small.len()), 3);

    let mut one = [0xffu8; 1];
    assert_eq!(mpx::format(&mut one, 5, &*THIRD).unwrap(), 7);
    assert_eq!(one[0], 0);

    let mut empty: [u8; 0] = [];
    assert_eq!(mpx::format(&mut empty, 5, &*THIRD).unwrap(), 7);
}

#[test]
fn test_buffer_truncation_and_string_fallback() {
    let big = parse("1e200");
    let options = FormatOptions::new()
        .with_digits(0)
        .with_notation(Notation::Fixed);

    let mut buf = Buffer::new();
    let n = buf.write_formatted(&big, &options).unwrap();
    assert_eq!(n, 201);
    assert!(buf.is_truncated());
    assert_eq!(buf.needed(), 201);
    assert_eq!(buf.len(), 127);
    assert!(buf.as_str().starts_with("1000"));

    let s = big.to_formatted_string(&options).unwrap();
    assert_eq!(s.len(), 201);
    assert!(s.starts_with('1'));
    assert!(s[1..].bytes().all(|b| b == b'0'));
}

#[test]
fn test_idempotent() {
    let value = parse("-98765.4321e-20");
    let mut a = [0u8; 64];
    let mut b = [0xaau8; 64];
    let na = mpx::format(&mut a, 17, &value).unwrap();
    let nb = mpx::format(&mut b, 17, &value).unwrap();
    assert_eq!(na, nb);
    assert_eq!(c_str(&a), c_str(&b));
}

#[test]
fn test_rejects_digit_counts() {
    let mut buf = [0xaau8; 32];
    assert_eq!(
        mpx::format(&mut buf, 100, &*THIRD),
        Err(Error::InvalidDigits(100))
    );
    assert!(buf.iter().all(|b| *b == 0xaa));

    assert_eq!(
        THIRD.to_formatted_string(&FormatOptions::new().with_digits(1000)),
        Err(Error::InvalidDigits(1000))
    );

    let mut buf = Buffer::new();
    assert!(buf.write_formatted(&*THIRD, &u32::MAX).is_err());
    assert!(buf.is_empty());
}

#[test]
fn test_max_digits() {
    let s = THIRD.to_formatted_string(&mpx::MAX_DIGITS).unwrap();
    assert!(s.starts_with("0.3333333333333333333333333333333333333"));
    assert!(s.len() <= 2 + mpx::MAX_DIGITS as usize);

    let mut buf = Buffer::new();
    let _ = buf.write_formatted(&*THIRD, &mpx::MAX_DIGITS).unwrap();
    assert!(!buf.is_truncated());
    assert_eq!(buf.as_str(), s);
}

#[test]
fn test_raw_format() {
    let mut buf = [0u8; 32];
    let n = unsafe { mpx::raw::format(buf.as_mut_ptr(), buf.len(), 5, THIRD.as_raw()) }.unwrap();
    assert_eq!(n, 7);
    assert_eq!(c_str(&buf), "0.33333");

    let n = unsafe { mpx::raw::format(std::ptr::null_mut(), 0, 5, THIRD.as_raw()) }.unwrap();
    assert_eq!(n, 7);

    let err = unsafe { mpx::raw::format(buf.as_mut_ptr(), buf.len(), -1, THIRD.as_raw()) };
    assert_eq!(err, Err(Error::InvalidDigits(-1)));

    let err = unsafe { mpx::raw::format(buf.as_mut_ptr(), buf.len(), 100, THIRD.as_raw()) };
    assert_eq!(err, Err(Error::InvalidDigits(100)));

    let options = FormatOptions::new().with_digits(3).with_round(Round::TowardZero);
    let _ = unsafe {
        mpx::raw::format_with(buf.as_mut_ptr(), buf.len(), &options, TWO_THIRDS.as_raw())
    }
    .unwrap();
    assert_eq!(c_str(&buf), "0.666");
}
