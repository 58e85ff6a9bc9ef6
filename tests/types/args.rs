use causal_error::types::args::parse_constructor_arguments;
use causal_error::{args, verror, ConfigError, FormatError, Options, PlainError};
use serde_json::{json, Value};

#[test]
fn no_arguments_yield_empty_message() {
    let parsed = parse_constructor_arguments(args![], false).unwrap();
    assert_eq!(parsed.short_message, "");
}

#[test]
fn template_first_formats_every_argument() {
    let parsed = parse_constructor_arguments(args!["%s and %s", "salt", "pepper"], false).unwrap();
    assert_eq!(parsed.short_message, "salt and pepper");
}

#[test]
fn lenient_mode_prints_null_arguments() {
    let parsed = parse_constructor_arguments(args!["value: %s", Value::Null], false).unwrap();
    assert_eq!(parsed.short_message, "value: null");

    let parsed = parse_constructor_arguments(args!["value: %s", None::<&str>], false).unwrap();
    assert_eq!(parsed.short_message, "value: null");
}

#[test]
fn strict_mode_rejects_null_arguments() {
    let err = parse_constructor_arguments(args!["value: %s", Value::Null], true).unwrap_err();
    assert_eq!(err, ConfigError::Format(FormatError::NullArgument { index: 0 }));
}

#[test]
fn strict_option_in_record_rejects_null_arguments() {
    let err =
        parse_constructor_arguments(args![json!({ "strict": true }), "%s", Value::Null], false)
            .unwrap_err();
    assert!(matches!(err, ConfigError::Format(FormatError::NullArgument { .. })));

    let err = parse_constructor_arguments(args![Options::new().strict(true), "%s", Value::Null], false)
        .unwrap_err();
    assert!(matches!(err, ConfigError::Format(FormatError::NullArgument { .. })));
}

#[test]
fn null_first_argument_counts_as_empty_options() {
    let parsed = parse_constructor_arguments(args![Value::Null, "attempt %d", 2], false).unwrap();
    assert_eq!(parsed.short_message, "attempt 2");
}

#[test]
fn unsupported_first_argument_is_rejected() {
    let err = parse_constructor_arguments(args![42, "msg"], false).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFirstArgument { found: "number" });

    let err = parse_constructor_arguments(args![true], false).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFirstArgument { found: "boolean" });

    let err = parse_constructor_arguments(args![json!([1, 2])], false).unwrap_err();
    assert_eq!(err, ConfigError::InvalidFirstArgument { found: "array" });
}

#[test]
fn non_string_template_after_options_is_rejected() {
    let err = parse_constructor_arguments(args![Options::new(), 5], false).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTemplate { found: "number" });
}

#[test]
fn options_after_first_position_are_rejected() {
    let err = parse_constructor_arguments(args!["%s", Options::new()], false).unwrap_err();
    assert_eq!(err, ConfigError::MisplacedOptions { position: 1 });
}

#[test]
fn error_in_format_position_prints_like_to_string() {
    let parsed =
        parse_constructor_arguments(args!["got %s", PlainError::new("timeout")], false).unwrap();
    assert_eq!(parsed.short_message, "got Error: timeout");
}

#[test]
fn record_with_wrongly_typed_keys_is_rejected() {
    let cases = [
        (json!({ "name": 7 }), "name"),
        (json!({ "info": "nope" }), "info"),
        (json!({ "strict": "yes" }), "strict"),
        (json!({ "constructorOpt": false }), "constructorOpt"),
    ];
    for (record, key) in cases {
        let err = parse_constructor_arguments(args![record, "msg"], false).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidOption { key: k, .. } if k == key),
            "unexpected error for {key}: {err:?}"
        );
    }
}

#[test]
fn record_cause_must_be_null_or_absent() {
    let err = parse_constructor_arguments(args![json!({ "cause": "oops" }), "msg"], false).unwrap_err();
    assert_eq!(err, ConfigError::InvalidCause);

    let parsed = parse_constructor_arguments(args![json!({ "cause": null }), "msg"], false).unwrap();
    assert_eq!(parsed.short_message, "msg");
}

#[test]
fn from_record_reads_name_and_info() {
    let record = json!({ "name": "ParseError", "info": { "line": 3 }, "unknown": [1] });
    let options = Options::from_record(record.as_object().unwrap()).unwrap();

    let err = verror!(options, "bad token").unwrap();
    assert_eq!(err.name(), "ParseError");
    assert_eq!(causal_error::chain::info(&err)["line"], 3);
}

#[test]
fn options_are_copied_into_the_error() {
    let options = Options::new().name("Snapshot").info_entry("k", "before");
    let err = verror!(options.clone(), "first").unwrap();

    let _changed = options.info_entry("k", "after");
    assert_eq!(causal_error::chain::info(&err)["k"], "before");
}
