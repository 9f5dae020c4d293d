use crate::models::{Message, Role};
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

const EMPTY_HISTORY: &str = "(no messages yet)";

// One search-result entry per line; titles may hold `]` and links `)`.
fn markdown_link() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"(?m)^- \[(.*)\]\((\S*)\)$").expect("valid link pattern"))
}

/// Rewrites `- [title](link)` entries as `- title <link>` for a plain terminal.
pub fn terminal_links(text: &str) -> String {
    markdown_link().replace_all(text, "- $1 <$2>").into_owned()
}

fn role_label(role: Role, styled: bool) -> String {
    let label = match role {
        Role::User => "You",
        Role::Bot => "Bot",
    };
    if !styled {
        return format!("{}:", label);
    }
    match role {
        Role::User => format!("{}:", label).cyan().bold().to_string(),
        Role::Bot => format!("{}:", label).green().bold().to_string(),
    }
}

/// Full history, oldest first.
pub fn render_history(messages: &[Message], styled: bool) -> String {
    if messages.is_empty() {
        return format!("{}\n", EMPTY_HISTORY);
    }

    let mut out = String::new();
    for message in messages {
        out.push_str(&role_label(message.role, styled));
        out.push('\n');
        for line in terminal_links(&message.content).lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        assert_eq!(render_history(&[], false), "(no messages yet)\n");
    }

    #[test]
    fn test_history_in_order_with_roles() {
        let messages = vec![Message::user("Is knee surgery covered?"), Message::bot("Yes.")];
        assert_eq!(
            render_history(&messages, false),
            "You:\n  Is knee surgery covered?\n\nBot:\n  Yes.\n\n"
        );
    }

    #[test]
    fn test_multiline_content_is_indented() {
        let messages = vec![Message::bot("line one\n\nline three")];
        assert_eq!(render_history(&messages, false), "Bot:\n  line one\n  \n  line three\n\n");
    }

    #[test]
    fn test_links_rewritten() {
        assert_eq!(
            terminal_links("- [A](http://a)\n- [No Title](#)"),
            "- A <http://a>\n- No Title <#>"
        );
    }

    #[test]
    fn test_title_with_brackets() {
        assert_eq!(
            terminal_links("- [[PDF] Policy wording](https://insurer.example/policy.pdf)"),
            "- [PDF] Policy wording <https://insurer.example/policy.pdf>"
        );
    }

    #[test]
    fn test_link_with_parentheses() {
        assert_eq!(
            terminal_links("- [Foo](https://en.wikipedia.org/wiki/Foo_(bar))\n- [B](http://b)"),
            "- Foo <https://en.wikipedia.org/wiki/Foo_(bar)>\n- B <http://b>"
        );
    }

    #[test]
    fn test_plain_brackets_untouched() {
        assert_eq!(terminal_links("see [note] (later)"), "see [note] (later)");
    }

    #[test]
    fn test_styled_output_keeps_content() {
        let messages = vec![Message::user("hello")];
        assert!(render_history(&messages, true).contains("  hello\n"));
    }
}
