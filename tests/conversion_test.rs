use base_converter::{convert, ConvertError, Radix};

#[test]
fn converts_the_documented_examples() {
    assert_eq!(convert("FF", Radix::Hex, Radix::Binary).unwrap().digits, "11111111");
    assert_eq!(convert("255", Radix::Decimal, Radix::Hex).unwrap().digits, "FF");
    assert_eq!(convert("101", Radix::Binary, Radix::Decimal).unwrap().digits, "5");
    assert_eq!(convert("-8", Radix::Decimal, Radix::Binary).unwrap().digits, "-1000");
}

#[test]
fn round_trips_across_all_radix_pairs() {
    let values: [i64; 10] = [
        0,
        1,
        -1,
        5,
        255,
        -256,
        4095,
        65536,
        -883_471,
        9_007_199_254_740_991, // largest JS-safe integer
    ];

    for from in Radix::ALL {
        for to in Radix::ALL {
            for value in values {
                let in_from = convert(&value.to_string(), Radix::Decimal, from)
                    .unwrap()
                    .digits;
                let in_to = convert(&in_from, from, to).unwrap().digits;
                let back = convert(&in_to, to, Radix::Decimal).unwrap().digits;
                assert_eq!(back, value.to_string(), "{:?} -> {:?} for {}", from, to, value);
            }
        }
    }
}

#[test]
fn rejects_empty_input_for_every_radix_pair() {
    for from in Radix::ALL {
        for to in Radix::ALL {
            let err = convert("", from, to).unwrap_err();
            assert_eq!(err, ConvertError::InvalidNumber { radix: from });
        }
    }
}

#[test]
fn error_message_names_the_source_base() {
    let cases = [
        ("Z", Radix::Hex, "Invalid hex number"),
        ("2", Radix::Binary, "Invalid binary number"),
        ("9", Radix::Octal, "Invalid octal number"),
        ("xyz", Radix::Decimal, "Invalid decimal number"),
    ];
    for (input, from, message) in cases {
        let err = convert(input, from, Radix::Decimal).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn hex_output_uses_uppercase_digits_only() {
    for value in [255i64, 48879, 3_405_691_582, -2748] {
        let digits = convert(&value.to_string(), Radix::Decimal, Radix::Hex)
            .unwrap()
            .digits;
        assert!(
            digits
                .trim_start_matches('-')
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            "unexpected digit in {digits}"
        );
    }
}

#[test]
fn parses_the_longest_valid_prefix() {
    assert_eq!(convert("  42abc", Radix::Decimal, Radix::Decimal).unwrap().digits, "42");
    assert_eq!(convert("+101 apples", Radix::Binary, Radix::Decimal).unwrap().digits, "5");
    assert_eq!(convert("178", Radix::Octal, Radix::Decimal).unwrap().digits, "15");
    assert_eq!(convert("12 34", Radix::Decimal, Radix::Decimal).unwrap().digits, "12");
}

#[test]
fn accepts_the_0x_prefix_for_hex_input() {
    assert_eq!(convert("0xFF", Radix::Hex, Radix::Decimal).unwrap().digits, "255");
    assert_eq!(convert("-0X10", Radix::Hex, Radix::Decimal).unwrap().digits, "-16");
    assert!(convert("0x", Radix::Hex, Radix::Decimal).is_err());
    // not a prefix outside hex: the leading 0 parses, the x stops the run
    assert_eq!(convert("0x1", Radix::Decimal, Radix::Binary).unwrap().digits, "0");
}

#[test]
fn success_record_echoes_the_raw_input() {
    let conversion = convert("  255extra", Radix::Decimal, Radix::Hex).unwrap();
    assert_eq!(conversion.input, "  255extra");
    assert_eq!(conversion.digits, "FF");
    assert_eq!(conversion.from, Radix::Decimal);
    assert_eq!(conversion.to, Radix::Hex);
}

#[test]
fn serializes_for_json_output() {
    let conversion = convert("255", Radix::Decimal, Radix::Hex).unwrap();
    let json = serde_json::to_value(&conversion).unwrap();
    assert_eq!(json["input"], "255");
    assert_eq!(json["from"], "decimal");
    assert_eq!(json["to"], "hex");
    assert_eq!(json["digits"], "FF");
}
