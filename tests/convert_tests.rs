use cumin_lang::{
    ConvertError, EvalError, ParseError, RenderError, Value, convert,
};

fn mapping(pairs: Vec<(&str, Value)>) -> Value {
    Value::Mapping(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

// ============================================================================
// Original fixtures
// ============================================================================

#[test]
fn test_flat_structure() {
    let doc = mapping(vec![(
        "config",
        mapping(vec![
            ("param1", Value::Integer(10)),
            ("param2", Value::Integer(20)),
        ]),
    )]);
    let expected = "\
{
    param1 : 10;
    param2 : 20;
}";
    assert_eq!(convert(&doc).unwrap(), expected);
}

#[test]
fn test_nested_structure() {
    let doc = mapping(vec![(
        "config",
        mapping(vec![
            ("param1", Value::Integer(10)),
            (
                "nested",
                mapping(vec![("key1", s("value1")), ("key2", s("value2"))]),
            ),
        ]),
    )]);
    let expected = "\
{
    param1 : 10;
    nested : {
        key1 : \"value1\";
        key2 : \"value2\";
    }
}";
    assert_eq!(convert(&doc).unwrap(), expected);
}

#[test]
fn test_constants_and_expressions() {
    let doc = mapping(vec![
        ("global x", Value::Integer(10)),
        ("global y", Value::Integer(5)),
        ("config", mapping(vec![("result", s("@[+ x y]"))])),
    ]);
    assert_eq!(convert(&doc).unwrap(), "{\n    result : 15;\n}");
}

#[test]
fn test_absolute_value_expression() {
    let doc = mapping(vec![
        ("global z", Value::Integer(-50)),
        ("config", mapping(vec![("absolute", s("@[abs z]"))])),
    ]);
    assert_eq!(convert(&doc).unwrap(), "{\n    absolute : 50;\n}");
}

#[test]
fn test_invalid_expression_aborts_conversion() {
    let doc = mapping(vec![(
        "config",
        mapping(vec![("invalid", s("@[unknown_operator 10]"))]),
    )]);
    assert!(matches!(
        convert(&doc),
        Err(ConvertError::Render(RenderError::Eval(EvalError::Parse(
            ParseError::UnknownOperator(_)
        ))))
    ));
}

// ============================================================================
// Driver behavior
// ============================================================================

#[test]
fn test_scalar_entries_keep_their_keys() {
    let doc = mapping(vec![
        ("name", s("server")),
        ("port", Value::Integer(8080)),
        ("debug", Value::Boolean(false)),
    ]);
    assert_eq!(
        convert(&doc).unwrap(),
        "name : \"server\";\nport : 8080;\ndebug : false;"
    );
}

#[test]
fn test_top_level_mapping_entries_become_anonymous_blocks() {
    let doc = mapping(vec![
        ("first", mapping(vec![("a", Value::Integer(1))])),
        ("second", mapping(vec![("b", Value::Integer(2))])),
    ]);
    // Keys "first" and "second" are dropped; one block per entry.
    assert_eq!(
        convert(&doc).unwrap(),
        "{\n    a : 1;\n}\n{\n    b : 2;\n}"
    );
}

#[test]
fn test_global_keys_never_appear_in_output() {
    let doc = mapping(vec![
        ("global x", Value::Integer(1)),
        ("visible", Value::Integer(2)),
        ("global y", Value::Integer(3)),
    ]);
    let output = convert(&doc).unwrap();
    assert_eq!(output, "visible : 2;");
    assert!(!output.contains("global"));
}

#[test]
fn test_globals_only_document_yields_empty_output() {
    let doc = mapping(vec![("global x", Value::Integer(1))]);
    assert_eq!(convert(&doc).unwrap(), "");
}

#[test]
fn test_nested_global_key_is_an_ordinary_entry() {
    // Only top-level keys feed the constant table.
    let doc = mapping(vec![(
        "config",
        mapping(vec![("global g", Value::Integer(1))]),
    )]);
    assert_eq!(convert(&doc).unwrap(), "{\n    global g : 1;\n}");
}

#[test]
fn test_top_level_sequence_entry_keeps_its_key() {
    let doc = mapping(vec![(
        "items",
        Value::Sequence(vec![Value::Integer(1), Value::Integer(2)]),
    )]);
    assert_eq!(convert(&doc).unwrap(), "items : {\n    1;\n    2;\n}");
}

#[test]
fn test_entry_order_is_preserved() {
    let doc = mapping(vec![
        ("zulu", Value::Integer(1)),
        ("alpha", Value::Integer(2)),
        ("mike", Value::Integer(3)),
    ]);
    assert_eq!(
        convert(&doc).unwrap(),
        "zulu : 1;\nalpha : 2;\nmike : 3;"
    );
}

#[test]
fn test_duplicate_global_last_write_wins() {
    let doc = mapping(vec![
        ("global x", Value::Integer(1)),
        ("global x", Value::Integer(7)),
        ("config", mapping(vec![("value", s("@[abs x]"))])),
    ]);
    assert_eq!(convert(&doc).unwrap(), "{\n    value : 7;\n}");
}

#[test]
fn test_expression_in_sequence_element() {
    let doc = mapping(vec![
        ("global x", Value::Integer(10)),
        (
            "values",
            Value::Sequence(vec![s("@[+ x 1]"), s("@[abs -3]")]),
        ),
    ]);
    assert_eq!(convert(&doc).unwrap(), "values : {\n    11;\n    3;\n}");
}

#[test]
fn test_integer_overflow_aborts_conversion() {
    let doc = mapping(vec![
        ("global big", Value::Integer(i64::MAX)),
        ("config", mapping(vec![("sum", s("@[+ big 1]"))])),
    ]);
    assert!(matches!(
        convert(&doc),
        Err(ConvertError::Render(RenderError::Eval(EvalError::Overflow)))
    ));
}

#[test]
fn test_top_level_must_be_mapping() {
    assert!(matches!(
        convert(&Value::Integer(3)),
        Err(ConvertError::TopLevelNotMapping("integer"))
    ));
    assert!(matches!(
        convert(&Value::Sequence(vec![])),
        Err(ConvertError::TopLevelNotMapping("sequence"))
    ));
}

#[test]
fn test_conversion_is_pure() {
    let doc = mapping(vec![
        ("global x", Value::Integer(10)),
        ("config", mapping(vec![("result", s("@[+ x 5]"))])),
    ]);
    assert_eq!(convert(&doc).unwrap(), convert(&doc).unwrap());
}
