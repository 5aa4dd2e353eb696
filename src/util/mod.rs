#![allow(clippy::module_name_repetitions)]
//! Small utilities: foreground process execution and shell escaping for command previews.

pub mod exec;

pub fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|a| shell_escape(a))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        "''".to_string()
    } else if s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_=./:@".contains(c))
    {
        s.to_string()
    } else {
        let escaped = s.replace('\'', "'\"'\"'");
        format!("'{}'", escaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_escape_edges() {
        assert_eq!(shell_escape(""), "''");
        assert_eq!(shell_escape("streamline:dev"), "streamline:dev");
        assert_eq!(shell_escape("a b"), "'a b'");
        assert_eq!(shell_escape("it's"), "'it'\"'\"'s'");
        assert_eq!(shell_escape("$HOME"), "'$HOME'");
    }

    #[test]
    fn test_shell_join_keeps_token_boundaries() {
        let args = vec!["sh".to_string(), "-c".to_string(), "echo hi".to_string()];
        assert_eq!(shell_join(&args), "sh -c 'echo hi'");
    }
}
