//! What stdout can render.

use is_terminal::IsTerminal;

/// Rendering features of the attached terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// ANSI colours are wanted when `--color auto`
    pub color: bool,
    /// Unicode icons render correctly
    pub unicode: bool,
}

impl TerminalCapabilities {
    /// Plain ASCII without colour
    pub const PLAIN: Self = Self {
        color: false,
        unicode: false,
    };

    pub fn detect() -> Self {
        Self::from_env(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    pub(crate) fn from_env(
        get_env: impl Fn(&str) -> Option<String>,
        stdout_is_tty: bool,
    ) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some_and(|v| !v.is_empty());
        // GitHub, GitLab, Buildkite, CircleCI and Travis all export CI.
        let ci = get_env("CI").is_some();

        Self {
            color: stdout_is_tty && !dumb && !no_color && !ci,
            unicode: !dumb && locale_is_unicode(&get_env),
        }
    }
}

/// The first non-empty locale variable decides, as with setlocale(3).
fn locale_is_unicode(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key).filter(|v| !v.is_empty()));

    match locale.map(|l| l.to_ascii_lowercase()) {
        Some(l) if l.contains("utf-8") || l.contains("utf8") => true,
        Some(l) => l != "c" && l != "posix",
        None => true,
    }
}
