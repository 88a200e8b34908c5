//! Doc comments for generated declarations.

use omniql_schema::Documentation;
use omniql_schema::naming::capitalize;

/// Renders the Go doc comment for a declaration named `name`.
///
/// - short and long text: `// <Name> <short>` followed by the long text
/// - only one of them: `// <Name> <text>`
/// - neither: `// <Name> ...`
///
/// Every line is prefixed with `indent` and ends with a newline.
#[must_use]
pub fn go_doc(name: &str, doc: Option<&Documentation>, indent: &str) -> String {
    let name = capitalize(name);
    let mut out = String::new();
    let (short, long) = doc.map_or((None, None), |d| (d.short_text(), d.long_text()));

    match (short, long) {
        (Some(short), Some(long)) => {
            push_comment(&mut out, indent, &format!("{} {}", name, short));
            push_comment(&mut out, indent, long);
        }
        (Some(text), None) | (None, Some(text)) => {
            push_comment(&mut out, indent, &format!("{} {}", name, text));
        }
        (None, None) => push_comment(&mut out, indent, &format!("{} ...", name)),
    }

    out
}

fn push_comment(out: &mut String, indent: &str, text: &str) {
    for line in text.lines() {
        let line = line.trim_end();
        out.push_str(indent);
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }
}
