// src/core/html.rs
use scraper::{ElementRef, Node, Selector};

/// Parse a selector known at compile time.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e}"))
}

/// Rendered text of an element: text nodes in document order, whitespace kept
/// as written (listings are preformatted), `<br>` as a single space, trimmed.
pub fn element_text(el: ElementRef<'_>) -> String {
    let mut out = s!();
    for node in el.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(e) if e.name() == "br" => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
    out.trim().to_string()
}

/// First element matching `outer` (document order) that contains a match for `inner`.
pub fn first_containing<'a>(
    root: ElementRef<'a>,
    outer: &Selector,
    inner: &Selector,
) -> Option<ElementRef<'a>> {
    root.select(outer).find(|el| el.select(inner).next().is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn element_text_keeps_layout_and_trims() {
        let doc = Html::parse_fragment("<pre>\n  foo(X) :-\n      <b>bar</b>(X).\n</pre>");
        let pre = doc.select(&selector("pre")).next().unwrap();
        assert_eq!(element_text(pre), "foo(X) :-\n      bar(X).");
    }

    #[test]
    fn first_containing_picks_first_in_document_order() {
        let doc = Html::parse_document(
            r#"<div class="s" id="one"><p>x</p></div>
               <div class="s" id="two"><a name="here"></a></div>
               <div class="s" id="three"><a name="here"></a></div>"#,
        );
        let found = first_containing(doc.root_element(), &selector("div.s"), &selector("a[name=here]"))
            .unwrap();
        assert_eq!(found.value().attr("id"), Some("two"));
    }
}
