use crate::parsers::html::extract;
use crate::parsers::Extraction;

const BASE: &str = "https://e.com/p";

fn extract_ok(markup: &str) -> Extraction {
    extract(markup, BASE).expect("extraction should succeed")
}

#[test]
fn test_relative_href_resolves_against_base() {
    let extraction = extract_ok(r#"<body><a href="/x">Go</a></body>"#);
    assert_eq!(extraction.links.len(), 1);
    assert_eq!(extraction.links[0].index, 1);
    assert_eq!(extraction.links[0].text, "Go");
    assert_eq!(extraction.links[0].url, "https://e.com/x");
}

#[test]
fn test_indices_are_one_based_and_contiguous() {
    let extraction = extract_ok(
        r##"<body>
            <a href="/a">one</a>
            <a href="b.html">two</a>
            <a href="#frag">three</a>
            <a href="//other.com/c">four</a>
        </body>"##,
    );
    assert_eq!(extraction.links.len(), 4);
    for (position, link) in extraction.links.iter().enumerate() {
        assert_eq!(link.index, position + 1);
    }
}

#[test]
fn test_resolution_handles_all_relative_forms() {
    let extraction = extract_ok(
        r##"<body>
            <a href="b.html">doc-relative</a>
            <a href="#frag">fragment</a>
            <a href="//other.com/c">protocol-relative</a>
            <a href="https://abs.com/d">absolute</a>
        </body>"##,
    );
    let urls: Vec<&str> = extraction.links.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://e.com/b.html",
            "https://e.com/p#frag",
            "https://other.com/c",
            "https://abs.com/d",
        ]
    );
}

#[test]
fn test_duplicate_targets_get_distinct_indices() {
    let extraction = extract_ok(
        r#"<body><a href="/same">One</a><a href="/same">Two</a></body>"#,
    );
    assert_eq!(extraction.links.len(), 2);
    assert_eq!(extraction.links[0].index, 1);
    assert_eq!(extraction.links[1].index, 2);
    assert_eq!(extraction.links[0].url, extraction.links[1].url);
}

#[test]
fn test_anchor_without_text_uses_its_url_as_text() {
    let extraction = extract_ok(r#"<body><a href="/img"></a></body>"#);
    assert_eq!(extraction.links[0].text, "https://e.com/img");
}

#[test]
fn test_anchor_text_is_trimmed() {
    let extraction = extract_ok(r#"<body><a href="/x">  spaced out  </a></body>"#);
    assert_eq!(extraction.links[0].text, "spaced out");
}

#[test]
fn test_anchor_inside_heading_contributes_both() {
    let extraction = extract_ok(r#"<body><h2>Title <a href="/in">inner</a></h2></body>"#);
    assert_eq!(extraction.items.len(), 1);
    assert_eq!(extraction.items[0].text, "Title inner");
    assert_eq!(extraction.links.len(), 1);
    assert_eq!(extraction.links[0].index, 1);
    assert_eq!(extraction.links[0].text, "inner");
    assert_eq!(extraction.links[0].url, "https://e.com/in");
}

#[test]
fn test_mailto_and_javascript_targets_are_still_indexed() {
    let extraction = extract_ok(
        r#"<body><a href="mailto:x@y.z">mail</a><a href="javascript:void(0)">js</a></body>"#,
    );
    assert_eq!(extraction.links.len(), 2);
    assert_eq!(extraction.links[0].url, "mailto:x@y.z");
    assert_eq!(extraction.links[1].url, "javascript:void(0)");
}

#[test]
fn test_anchors_without_href_are_not_indexed() {
    let extraction = extract_ok(r#"<body><a name="target">no href</a><a href="">empty</a></body>"#);
    assert!(extraction.links.is_empty());
    // Their text still shows up in content.
    assert_eq!(extraction.items.len(), 1);
    assert!(extraction.items[0].text.contains("no href"));
    assert!(extraction.items[0].text.contains("empty"));
}

#[test]
fn test_head_link_elements_are_not_links() {
    let extraction = extract_ok(
        r#"<html><head><link rel="stylesheet" href="/style.css"></head>
           <body><a href="/real">real</a></body></html>"#,
    );
    assert_eq!(extraction.links.len(), 1);
    assert_eq!(extraction.links[0].url, "https://e.com/real");
}

#[test]
fn test_link_indices_restart_per_extraction() {
    let first = extract_ok(r#"<body><a href="/a">a</a><a href="/b">b</a></body>"#);
    let second = extract_ok(r#"<body><a href="/c">c</a></body>"#);
    assert_eq!(first.links.last().map(|l| l.index), Some(2));
    assert_eq!(second.links[0].index, 1);
}

#[test]
fn test_links_in_list_items_are_collected_in_order() {
    let extraction = extract_ok(
        r#"<body><ul>
            <li><a href="/one">first</a></li>
            <li><a href="/two">second</a></li>
        </ul></body>"#,
    );
    assert_eq!(extraction.links.len(), 2);
    assert_eq!(extraction.links[0].url, "https://e.com/one");
    assert_eq!(extraction.links[1].url, "https://e.com/two");
    let texts: Vec<&str> = extraction
        .items
        .iter()
        .filter(|item| !item.text.is_empty())
        .map(|item| item.text.as_str())
        .collect();
    assert_eq!(texts, vec!["first", "second"]);
}
