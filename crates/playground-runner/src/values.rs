//! Canned values for bare identifiers echoed by output calls.

const VARIABLES: &[(&str, &str)] = &[
    ("greeting", "\"Hello, World!\""),
    ("counter", "0"),
    ("numbers", "[1, 2, 3, 4, 5]"),
    ("squares", "[1, 4, 9, 16, 25]"),
    ("name", "\"Code Compiler Pro\""),
    ("version", "1.0"),
    (
        "features",
        "[\"syntax highlighting\", \"auto-completion\", \"real-time execution\"]",
    ),
    ("appName", "\"Code Compiler Pro\""),
    ("calc", "Calculator instance"),
    ("person", "Person(name=Alice, age=25)"),
    ("grade", "\"B\""),
];

/// Value shown for `name`; `undefined` for anything unknown.
pub fn variable_value(name: &str) -> &'static str {
    VARIABLES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .unwrap_or("undefined")
}
