use tomlmerge_core::{parse, Value};

// ============================================================================
// Literal kinds
// ============================================================================

#[test]
fn parse_scalars() {
    let doc = parse(
        r#"
s = "text"
i = 42
f = 1.0
b = true
d = 1979-05-27
"#,
    )
    .unwrap();
    assert_eq!(doc.get_path("s"), Some(&Value::String("text".into())));
    assert_eq!(doc.get_path("i"), Some(&Value::Integer(42)));
    // 1.0 stays a float in the tree
    assert_eq!(doc.get_path("f"), Some(&Value::Float(1.0)));
    assert_eq!(doc.get_path("b"), Some(&Value::Boolean(true)));
    assert_eq!(doc.get_path("d").map(Value::type_name), Some("datetime"));
}

#[test]
fn parse_integer_forms() {
    let doc = parse("hex = 0xff\noct = 0o17\nbin = 0b101\nsep = 1_000").unwrap();
    assert_eq!(doc.get_path("hex").and_then(Value::as_integer), Some(255));
    assert_eq!(doc.get_path("oct").and_then(Value::as_integer), Some(15));
    assert_eq!(doc.get_path("bin").and_then(Value::as_integer), Some(5));
    assert_eq!(doc.get_path("sep").and_then(Value::as_integer), Some(1000));
}

#[test]
fn parse_nested_tables_and_arrays() {
    let doc = parse("[a.b]\nlist = [1, \"two\"]\n[[a.items]]\nx = 1").unwrap();
    let list = doc.get_path("a.b.list").and_then(Value::as_array).unwrap();
    assert_eq!(list.len(), 2);
    let items = doc.get_path("a.items").and_then(Value::as_array).unwrap();
    assert!(items[0].is_table());
}

#[test]
fn parse_dotted_keys_build_tables() {
    let doc = parse("server.port = 80").unwrap();
    assert_eq!(doc.get_path("server.port"), Some(&Value::Integer(80)));
}

#[test]
fn parse_empty_document() {
    let doc = parse("").unwrap();
    assert_eq!(doc.as_table().map(|t| t.len()), Some(0));
}

#[test]
fn parse_preserves_key_order() {
    let doc = parse("zeta = 1\nalpha = 2\nmid = 3").unwrap();
    let keys: Vec<&str> = doc.as_table().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn parse_invalid_reports_location() {
    let err = parse("ok = 1\n\nbroken").unwrap_err();
    assert_eq!(err.line, Some(3));
    assert!(err.column.is_some());
    assert!(!err.message.is_empty());
    assert!(err.to_string().starts_with("Invalid TOML at line 3"));
}

#[test]
fn parse_unterminated_string_fails() {
    assert!(parse("s = \"open").is_err());
}

#[test]
fn parse_duplicate_table_fails() {
    assert!(parse("[a]\nx = 1\n[a]\ny = 2").is_err());
}
