//! Pure textual rewrites applied to the raw buffer before tokenization.
//! These are string transforms, not node-aware passes; the scanner only
//! ever sees the rewritten text.

use regex::Regex;
use std::sync::OnceLock;

/// Rewrites `{% link _<stem>.md %}` directives to absolute page URLs of
/// the form `<base_url>/<stem>.html`. A trailing `/` on `base_url` is
/// tolerated.
pub fn rewrite_link_tags(text: &str, base_url: &str) -> String {
    static LINK_TAG: OnceLock<Regex> = OnceLock::new();
    let link_tag = LINK_TAG
        .get_or_init(|| Regex::new(r"\{% link _(.+?)\.md %}").expect("invalid link-tag regex"));

    let base = base_url.trim_end_matches('/');
    let replacement = format!("{base}/$1.html");
    link_tag.replace_all(text, replacement.as_str()).into_owned()
}

/// Strips paired `{% raw %}` / `{% endraw %}` markers, leaving their
/// content in place.
pub fn strip_raw_tags(text: &str) -> String {
    text.replace("{% raw %}", "").replace("{% endraw %}", "")
}

/// Replaces every `{{ page.<key> }}` occurrence with the matching value.
pub fn substitute_variables(text: &str, variables: &[(String, String)]) -> String {
    let mut out = text.to_string();
    for (name, value) in variables {
        out = out.replace(&format!("{{{{ page.{name} }}}}"), value);
    }
    out
}
