//! Reusable test content.

/// Minimal `nua-config.toml` declaring `metadata.id`
pub fn nua_config(image: &str) -> String {
    format!(
        "[metadata]\nid = \"{}\"\nversion = \"1.0\"\n\n[build]\nmethod = \"wrap\"\n",
        image
    )
}

/// A config that parses but has no `metadata.id`
pub const CONFIG_WITHOUT_ID: &str = "[metadata]\nname = \"Ackee\"\n";

/// Settings pointing every target field at localhost
pub const LOCAL_TARGET: &str = "[target]\nhost = \"localhost\"\ndomain = \"example.com\"\n";

/// Fake `nua-build`: logs its arguments and working directory, fails for the
/// app named in `FAKE_FAIL_APP`.
pub fn fake_nua_build(log: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "nua-build $* in $(pwd)" >> "{log}"
if [ -n "$FAKE_FAIL_APP" ] && [ "$1" = "./$FAKE_FAIL_APP" ]; then
    exit 7
fi
exit 0
"#
    )
}

/// Fake `nua-orchestrator`: logs its arguments and keeps a copy of the
/// document it was given.
pub fn fake_nua_orchestrator(log: &str, received: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "nua-orchestrator $*" >> "{log}"
cp "$2" "{received}"
exit 0
"#
    )
}
