use json_joy_json_typed::{
    decode_list, decode_map, from_str, to_string, DecodeError, DynamicMap, DynamicValue, ReadError,
    TokenKind,
};

fn obj(fields: &[(&str, DynamicValue)]) -> DynamicValue {
    DynamicValue::Object(
        fields
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

fn arr(items: &[DynamicValue]) -> DynamicValue {
    DynamicValue::Array(items.to_vec())
}

#[test]
fn integer_width_matrix() {
    let cases: &[(&str, DynamicValue)] = &[
        ("0", DynamicValue::Int32(0)),
        ("7", DynamicValue::Int32(7)),
        ("2147483647", DynamicValue::Int32(2_147_483_647)),
        ("2147483648", DynamicValue::Int64(2_147_483_648)),
        ("-1", DynamicValue::Int32(-1)),
        ("-2147483648", DynamicValue::Int32(i32::MIN)),
        ("-2147483649", DynamicValue::Int64(-2_147_483_649)),
        ("886020729", DynamicValue::Int32(886_020_729)),
        ("9223372036854775807", DynamicValue::Int64(i64::MAX)),
    ];
    for (input, expected) in cases {
        assert_eq!(from_str(input), Ok(expected.clone()), "{input}");
    }
}

#[test]
fn integers_beyond_i64_are_rejected() {
    for input in ["9223372036854775808", "-9223372036854775809", "20190524000013869161"] {
        assert_eq!(
            from_str(input),
            Err(DecodeError::NumberOutOfRange(input.to_owned())),
            "{input}"
        );
    }
}

#[test]
fn float_literal_matrix() {
    for input in ["5039.2", "0.0", "-0.5", "1e3", "1E3", "2.5e-3", "1e+2", "10.0"] {
        let expected: f64 = input.parse().unwrap();
        assert_eq!(
            from_str(input),
            Ok(DynamicValue::Float64(expected)),
            "{input}"
        );
    }
    // Integral value but float form: stays a float.
    assert_eq!(from_str("153.0"), Ok(DynamicValue::Float64(153.0)));
    assert_eq!(
        from_str("1e400"),
        Err(DecodeError::NumberOutOfRange("1e400".into()))
    );
}

#[test]
fn classification_ignores_position() {
    let value = from_str(r#"[12, {"n": 12, "m": [12]}, 12.0]"#).unwrap();
    assert_eq!(
        value,
        arr(&[
            DynamicValue::Int32(12),
            obj(&[
                ("n", DynamicValue::Int32(12)),
                ("m", arr(&[DynamicValue::Int32(12)])),
            ]),
            DynamicValue::Float64(12.0),
        ])
    );
}

#[test]
fn empty_containers() {
    assert_eq!(from_str("{}"), Ok(DynamicValue::Object(DynamicMap::new())));
    assert_eq!(from_str("[]"), Ok(DynamicValue::Array(Vec::new())));
    assert_eq!(from_str(" [ { } , [ ] ] "), Ok(arr(&[obj(&[]), arr(&[])])));
}

#[test]
fn nested_document() {
    let value = from_str(r#"{"total":153,"amt":5039.2,"list":[1,2,3]}"#).unwrap();
    assert_eq!(
        value,
        obj(&[
            ("total", DynamicValue::Int32(153)),
            ("amt", DynamicValue::Float64(5039.2)),
            (
                "list",
                arr(&[
                    DynamicValue::Int32(1),
                    DynamicValue::Int32(2),
                    DynamicValue::Int32(3)
                ])
            ),
        ])
    );
}

#[test]
fn key_order_is_preserved() {
    let value = from_str(r#"{"b":2,"a":1,"c":{"z":0,"y":0}}"#).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["b", "a", "c"]);
    let inner: Vec<&str> = value
        .get("c")
        .and_then(DynamicValue::as_object)
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(inner, ["z", "y"]);
}

#[test]
fn duplicate_keys_last_write_wins() {
    assert_eq!(
        from_str(r#"{"k":1,"k":2}"#),
        Ok(obj(&[("k", DynamicValue::Int32(2))]))
    );
    // The surviving entry keeps the first key position.
    let value = from_str(r#"{"k":1,"j":true,"k":"last"}"#).unwrap();
    assert_eq!(
        value,
        obj(&[
            ("k", DynamicValue::String("last".into())),
            ("j", DynamicValue::Bool(true)),
        ])
    );
}

#[test]
fn scalar_leaves() {
    assert_eq!(from_str("true"), Ok(DynamicValue::Bool(true)));
    assert_eq!(from_str("false"), Ok(DynamicValue::Bool(false)));
    assert_eq!(from_str("null"), Ok(DynamicValue::Null));
    assert_eq!(from_str(r#""x""#), Ok(DynamicValue::String("x".into())));
    // Numeric-looking strings stay strings.
    assert_eq!(
        from_str(r#""000013869161""#),
        Ok(DynamicValue::String("000013869161".into()))
    );
    assert_eq!(
        from_str(r#""交易""#),
        Ok(DynamicValue::String("交易".into()))
    );
}

#[test]
fn decoding_is_deterministic() {
    let input = r#"{"a":[1,2.5,"s",null,{"b":false}],"c":3000000000}"#;
    assert_eq!(from_str(input).unwrap(), from_str(input).unwrap());
}

#[test]
fn malformed_input_fails_whole_document() {
    assert!(matches!(
        from_str(r#"{"key":12, "key2": f11}"#),
        Err(DecodeError::Read(ReadError::UnexpectedChar { found: 'f', .. }))
    ));
    assert!(matches!(
        from_str(r#"[1, 2, oops]"#),
        Err(DecodeError::Read(ReadError::UnexpectedChar { found: 'o', .. }))
    ));
    assert!(matches!(
        from_str(r#"{"a":[1,2}"#),
        Err(DecodeError::Read(_))
    ));
    assert!(matches!(
        from_str(r#"{"deep":{"n":99999999999999999999}}"#),
        Err(DecodeError::NumberOutOfRange(_))
    ));
}

#[test]
fn map_and_list_entry_points() {
    let map = decode_map(r#"{"key":12,"key2":"f11"}"#).unwrap();
    assert_eq!(map["key"], DynamicValue::Int32(12));
    assert_eq!(map["key2"], DynamicValue::String("f11".into()));

    let list = decode_list("[1,2,3]").unwrap();
    assert_eq!(
        list,
        vec![
            DynamicValue::Int32(1),
            DynamicValue::Int32(2),
            DynamicValue::Int32(3)
        ]
    );

    assert_eq!(
        decode_map("[1,2,3]"),
        Err(DecodeError::UnexpectedToken {
            expected: "object",
            found: TokenKind::BeginArray,
        })
    );
    assert_eq!(
        decode_list("{}"),
        Err(DecodeError::UnexpectedToken {
            expected: "array",
            found: TokenKind::BeginObject,
        })
    );
}

#[test]
fn writer_round_trip_preserves_variants() {
    let input = r#"{"i":1,"l":-3000000000,"f":3.0,"g":1e300,"s":"a\"b","n":null,"t":[true,{}]}"#;
    let value = from_str(input).unwrap();
    let text = to_string(&value);
    assert_eq!(
        text,
        r#"{"i":1,"l":-3000000000,"f":3.0,"g":1e300,"s":"a\"b","n":null,"t":[true,{}]}"#
    );
    assert_eq!(from_str(&text), Ok(value));
}

#[test]
fn merchant_payload_keeps_integer_amounts() {
    let input = r#"{
        "orderWebSite": "https://ums.example.com",
        "data": {
            "total": 153,
            "dayList": [
                {"sumTradeAmt": 99, "sumTradeNum": 1, "tradeDate": "20190524"},
                {"sumTradeAmt": 5039.2, "sumTradeNum": 20, "tradeDate": "20190314"}
            ],
            "list": [
                {
                    "tradeAmt": 99,
                    "traceNo": "000013869161",
                    "latitude": "22.523903",
                    "tradeDesc": "交易成功",
                    "cardType": 1,
                    "userId": 886020729,
                    "settleType": 1
                }
            ]
        },
        "resultCode": "1"
    }"#;
    let value = from_str(input).unwrap();
    let data = value.get("data").unwrap();
    assert_eq!(data.get("total"), Some(&DynamicValue::Int32(153)));

    let days = data.get("dayList").and_then(DynamicValue::as_array).unwrap();
    assert_eq!(days[0].get("sumTradeAmt"), Some(&DynamicValue::Int32(99)));
    assert_eq!(
        days[1].get("sumTradeAmt"),
        Some(&DynamicValue::Float64(5039.2))
    );

    let trade = data.get("list").and_then(|l| l.get_index(0)).unwrap();
    assert_eq!(trade.get("userId"), Some(&DynamicValue::Int32(886_020_729)));
    assert_eq!(
        trade.get("latitude"),
        Some(&DynamicValue::String("22.523903".into()))
    );
    assert_eq!(
        trade.get("tradeDesc").and_then(DynamicValue::as_str),
        Some("交易成功")
    );
    assert_eq!(
        value.get("resultCode"),
        Some(&DynamicValue::String("1".into()))
    );
}
