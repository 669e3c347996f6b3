use is_terminal::IsTerminal;

/// Color support per output stream; a redirected stream gets plain text
/// even when the other one is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub stdout_color: bool,
    pub stderr_color: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    )
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    stdout_tty: bool,
    stderr_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some() || get_env("SKELETON_NO_COLOR").is_some();
    let allowed = !term_is_dumb && !no_color;

    TerminalCapabilities {
        stdout_color: stdout_tty && allowed,
        stderr_color: stderr_tty && allowed,
        is_ci: is_ci_env(&get_env),
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

#[cfg(test)]
pub(crate) fn caps_from_env(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
    use std::collections::HashMap;

    let map: HashMap<String, String> = env
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    detect_capabilities_impl(|k| map.get(k).cloned(), is_tty, is_tty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_respects_no_color() {
        let c = caps_from_env(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.stdout_color);
    }

    #[test]
    fn detect_respects_skeleton_no_color() {
        let c = caps_from_env(&[("SKELETON_NO_COLOR", ""), ("TERM", "xterm")], true);
        assert!(!c.stdout_color);
    }

    #[test]
    fn detect_term_dumb_disables_color() {
        let c = caps_from_env(&[("TERM", "dumb")], true);
        assert!(!c.stdout_color);
    }

    #[test]
    fn pipes_have_no_color() {
        let c = caps_from_env(&[("TERM", "xterm-256color")], false);
        assert!(!c.stdout_color);
    }

    #[test]
    fn streams_are_checked_separately() {
        let env = |k: &str| (k == "TERM").then(|| "xterm-256color".to_string());

        let c = detect_capabilities_impl(env, true, false);
        assert!(c.stdout_color);
        assert!(!c.stderr_color);

        let c = detect_capabilities_impl(env, false, true);
        assert!(!c.stdout_color);
        assert!(c.stderr_color);
    }

    #[test]
    fn detect_ci_environment() {
        let c = caps_from_env(&[("GITHUB_ACTIONS", "true")], true);
        assert!(c.is_ci);
    }
}
