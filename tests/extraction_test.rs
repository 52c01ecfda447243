use article_extractor::{
    extract, extract_with_options, extract_with_url, text, Article, ErrorKind, Extractor, Options,
};

const FIRST: &str = "FIRST_PARAGRAPH The council met on Tuesday to review the harbor proposal, \
    which had been circulating for weeks, and concluded that further study was needed.";
const SECOND: &str = "SECOND_PARAGRAPH Residents who attended the meeting raised concerns about \
    traffic, noise, and the cost of dredging the northern channel before next spring.";
const THIRD: &str = "THIRD_PARAGRAPH A final vote is now expected in the autumn session, after \
    engineers deliver an updated survey of the seabed and the existing sea walls.";

fn news_page() -> String {
    format!(
        "<html><head><title>Council Delays Harbor Vote Until Autumn | Gazette</title></head>\
         <body>\
         <nav><a href='/'>NAV_HOME</a> <a href='/news'>NAV_NEWS</a></nav>\
         <article><p>{FIRST}</p><p>{SECOND}</p><p>{THIRD}</p></article>\
         <aside><p>ASIDE_TEXT Subscribe to our weekly newsletter for more local stories.</p></aside>\
         </body></html>"
    )
}

fn assert_properties(article: &Article, options: &Options) {
    assert!(text::char_len(&article.text_content) >= options.min_content_length);
    assert!((0.0..=1.0).contains(&article.confidence));
    assert_eq!(article.word_count, article.text_content.split_whitespace().count());
}

#[test]
fn article_paragraphs_kept_and_boilerplate_dropped() {
    match extract(&news_page()) {
        Ok(article) => {
            for marker in ["FIRST_PARAGRAPH", "SECOND_PARAGRAPH", "THIRD_PARAGRAPH"] {
                assert!(article.text_content.contains(marker), "missing {marker}");
            }
            assert!(!article.text_content.contains("NAV_HOME"));
            assert!(!article.text_content.contains("ASIDE_TEXT"));
            assert!(article.confidence > 0.0);
            assert_eq!(article.title, "Council Delays Harbor Vote Until Autumn");
            assert_properties(&article, &Options::default());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn paragraphs_separated_by_blank_lines() {
    let article = extract(&news_page()).unwrap();
    let paragraphs: Vec<&str> = article.text_content.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 3);
    assert!(paragraphs[1].starts_with("SECOND_PARAGRAPH"));
    assert!(!article.text_content.contains("\n\n\n"));
}

#[test]
fn navigation_only_page_has_no_content() {
    let html = "<html><body><nav><ul><li><a href='/a'>Alpha</a></li><li><a href='/b'>Beta</a></li></ul></nav></body></html>";
    match extract(html) {
        Ok(article) => panic!("expected NoContent, got {article:?}"),
        Err(err) => {
            assert_eq!(err.kind(), &ErrorKind::NoContent);
            assert_eq!(err.op(), "extract");
        }
    }
}

#[test]
fn empty_input_is_invalid_html() {
    let err = extract("").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidHtml);
    assert_eq!(err.to_string(), "parse: invalid HTML");
}

#[test]
fn too_short_article_rejected_with_url() {
    let html = "<html><body><article><p>Just one modest sentence that is long enough to score.</p></article></body></html>";
    let err = extract_with_url(html, "https://example.com/short").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ContentTooShort);
    assert_eq!(err.url(), Some("https://example.com/short"));
    assert!(err.to_string().contains("[https://example.com/short]"));
}

#[test]
fn lower_minimum_accepts_short_article() {
    let html = "<html><body><article><p>Just one modest sentence that is long enough to score.</p></article></body></html>";
    let options = Options {
        min_content_length: 20,
        ..Options::default()
    };
    let article = extract_with_options(html, &options).unwrap();
    assert_properties(&article, &options);
    assert_eq!(article.word_count, 10);
}

#[test]
fn relative_urls_resolved_against_base() {
    let html = format!(
        "<html><body><article>\
         <p>{FIRST} <a href='../archive/2023.html'>archive</a></p>\
         <figure><img src='images/harbor.jpg' alt='Harbor' data-lazy='1'></figure>\
         <p>{SECOND} <a href='//cdn.example.net/map.pdf'>map</a></p>\
         <p>{THIRD} <a href='mailto:desk@example.com'>desk</a></p>\
         </article></body></html>"
    );
    let article = extract_with_url(&html, "https://example.com/news/today/story.html").unwrap();

    assert!(article.content.contains(r#"href="https://example.com/news/archive/2023.html""#));
    assert!(article.content.contains(r#"src="https://example.com/news/today/images/harbor.jpg""#));
    assert!(article.content.contains(r#"href="https://cdn.example.net/map.pdf""#));
    assert!(article.content.contains(r#"href="mailto:desk@example.com""#));
    assert!(!article.content.contains("data-lazy"));
    assert_eq!(article.url, "https://example.com/news/today/story.html");
}

#[test]
fn continuation_sibling_is_merged() {
    let html = format!(
        "<html><body><div id='wrapper'>\
         <div class='story'><p>{FIRST}</p><p>{SECOND}</p></div>\
         <p>{THIRD}</p>\
         </div></body></html>"
    );
    let article = extract(&html).unwrap();
    assert!(article.text_content.contains("FIRST_PARAGRAPH"));
    assert!(article.text_content.contains("THIRD_PARAGRAPH"));
}

#[test]
fn hidden_and_script_content_never_extracted() {
    let html = format!(
        "<html><body><article>\
         <p>{FIRST}</p><p style='display: none'>HIDDEN_TEXT {SECOND}</p>\
         <script>var SCRIPT_TEXT = 1;</script>\
         <p>{SECOND}</p><p>{THIRD}</p>\
         </article></body></html>"
    );
    let article = extract(&html).unwrap();
    assert!(!article.text_content.contains("HIDDEN_TEXT"));
    assert!(!article.content.contains("SCRIPT_TEXT"));
}

#[test]
fn br_separated_text_becomes_paragraphs() {
    let html = format!("<html><body><div class='entry'>{FIRST}<br><br>{SECOND}<br>{THIRD}</div></body></html>");
    let article = extract(&html).unwrap();
    assert!(article.text_content.contains("SECOND_PARAGRAPH"));
    assert_eq!(article.text_content.split("\n\n").count(), 3);
}

#[test]
fn excerpt_is_bounded_and_starts_the_text() {
    let article = extract(&news_page()).unwrap();
    assert!(text::char_len(&article.excerpt) <= 203);
    assert!(article.excerpt.starts_with("FIRST_PARAGRAPH"));
}

#[test]
fn extraction_is_deterministic() {
    let extractor = Extractor::default();
    let first = extractor.extract(&news_page()).unwrap();
    for _ in 0..3 {
        assert_eq!(extractor.extract(&news_page()).unwrap(), first);
    }
}

#[test]
fn article_serializes_with_camel_case_keys() {
    let article = extract(&news_page()).unwrap();
    let json = serde_json::to_value(&article).unwrap();
    assert!(json.get("textContent").is_some());
    assert!(json.get("wordCount").is_some());
    assert!(json.get("publishedAt").is_none());
}
