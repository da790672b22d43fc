use cumin_lang::{
    ConstantTable, EvalError, MAX_DEPTH, ParseError, RenderError, Renderer, Value,
};

fn render(value: &Value) -> Result<String, RenderError> {
    let table = ConstantTable::default();
    Renderer::new(&table).render(value, 1, true)
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_integer_scalar() {
    assert_eq!(render(&Value::Integer(10)).unwrap(), "10;");
}

#[test]
fn test_boolean_scalar() {
    assert_eq!(render(&Value::Boolean(true)).unwrap(), "true;");
    assert_eq!(render(&Value::Boolean(false)).unwrap(), "false;");
}

#[test]
fn test_float_scalar() {
    assert_eq!(render(&Value::Float(3.14)).unwrap(), "3.14;");
}

#[test]
fn test_plain_string_is_quoted_and_trimmed() {
    assert_eq!(
        render(&Value::String("  padded  ".to_string())).unwrap(),
        "\"padded\";"
    );
}

#[test]
fn test_unclosed_marker_renders_as_plain_string() {
    assert_eq!(render(&Value::String("@[oops".to_string())).unwrap(), "\"@[oops\";");
}

#[test]
fn test_expression_scalar_renders_computed_value() {
    let pairs = vec![
        ("global x".to_string(), Value::Integer(10)),
        ("global y".to_string(), Value::Integer(5)),
    ];
    let table = ConstantTable::build(&pairs);
    let renderer = Renderer::new(&table);
    assert_eq!(
        renderer
            .render(&Value::String("@[+ x y]".to_string()), 1, true)
            .unwrap(),
        "15;"
    );
}

// ============================================================================
// Blocks
// ============================================================================

#[test]
fn test_mapping_block() {
    let value = Value::Mapping(vec![
        ("param1".to_string(), Value::Integer(10)),
        ("param2".to_string(), Value::Integer(20)),
    ]);
    assert_eq!(
        render(&value).unwrap(),
        "{\n    param1 : 10;\n    param2 : 20;\n}"
    );
}

#[test]
fn test_nested_mapping_indents_four_spaces_per_level() {
    let value = Value::Mapping(vec![
        ("param1".to_string(), Value::Integer(10)),
        (
            "nested".to_string(),
            Value::Mapping(vec![
                ("key1".to_string(), Value::String("value1".to_string())),
                ("key2".to_string(), Value::String("value2".to_string())),
            ]),
        ),
    ]);
    let expected = "\
{
    param1 : 10;
    nested : {
        key1 : \"value1\";
        key2 : \"value2\";
    }
}";
    assert_eq!(render(&value).unwrap(), expected);
}

#[test]
fn test_sequence_block_has_no_keys() {
    let value = Value::Sequence(vec![
        Value::Integer(1),
        Value::String("two".to_string()),
    ]);
    assert_eq!(render(&value).unwrap(), "{\n    1;\n    \"two\";\n}");
}

#[test]
fn test_sequence_of_mappings() {
    let value = Value::Sequence(vec![Value::Mapping(vec![(
        "a".to_string(),
        Value::Integer(1),
    )])]);
    assert_eq!(
        render(&value).unwrap(),
        "{\n    {\n        a : 1;\n    }\n}"
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_expression_error_propagates_out_of_nested_blocks() {
    let value = Value::Mapping(vec![(
        "bad".to_string(),
        Value::String("@[nope 1]".to_string()),
    )]);
    assert!(matches!(
        render(&value),
        Err(RenderError::Eval(EvalError::Parse(
            ParseError::UnknownOperator(_)
        )))
    ));
}

#[test]
fn test_depth_limit_returns_typed_error() {
    let mut value = Value::Integer(1);
    for _ in 0..(MAX_DEPTH + 8) {
        value = Value::Mapping(vec![("inner".to_string(), value)]);
    }
    assert!(matches!(
        render(&value),
        Err(RenderError::DepthExceeded(limit)) if limit == MAX_DEPTH
    ));
}

#[test]
fn test_depth_limit_allows_reasonable_nesting() {
    let mut value = Value::Integer(1);
    for _ in 0..16 {
        value = Value::Mapping(vec![("inner".to_string(), value)]);
    }
    assert!(render(&value).is_ok());
}
