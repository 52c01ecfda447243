//! Extraction pipeline.
//!
//! Parse, read metadata from the pristine tree, preprocess, score, pick the
//! top candidate, merge its siblings, then clean a detached copy of the
//! result. Each call owns its document; nothing is shared between calls.

use url::Url;

use crate::cleaner::{self, ContentBlock};
use crate::confidence;
use crate::dom::{self, Document, Selection};
use crate::error::{Error, ErrorKind, Result};
use crate::metadata;
use crate::options::Options;
use crate::result::Article;
use crate::scorer::{self, ScoreMap};
use crate::text;
use crate::url_utils;

/// Excerpt length in characters, before any `"..."` marker.
const EXCERPT_LENGTH: usize = 200;

/// Candidates logged when `Options::debug` is set.
const DEBUG_CANDIDATES: usize = 5;

/// Runs the full pipeline over `html`.
///
/// `options.url`, when set, is the base for relative URLs and is stamped
/// into [`Article::url`].
pub(crate) fn extract_article(html: &str, options: &Options) -> Result<Article> {
    let url = options.url.as_deref().unwrap_or_default();
    let base = url_utils::parse_base(url);
    let fail = |op, kind| Error::new(op, Some(url), kind);

    if html.trim().is_empty() {
        return Err(fail("parse", ErrorKind::InvalidHtml));
    }

    log::debug!("extracting article ({} bytes)", html.len());
    let doc = dom::parse(html);

    let meta = metadata::extract_metadata(&doc, base.as_ref());
    log::debug!(
        "metadata: title={:?} author={:?} published={:?}",
        meta.title,
        meta.author,
        meta.published_at
    );

    cleaner::preprocess(&doc);

    let scores = scorer::score_document(&doc, options.min_paragraph_length);
    log::debug!("scored {} candidate nodes", scores.len());
    if options.debug {
        log_candidates(&scores);
    }

    let ranked = scores.ranked();
    let Some(top) = ranked.first().copied() else {
        return Err(fail("extract", ErrorKind::NoContent));
    };
    let runner_up = ranked.get(1).copied();
    log::debug!(
        "top candidate <{}> score={:.2} weighted={:.2}",
        dom::node_tag(&top.node),
        top.content_score,
        top.weighted_score()
    );

    let block = cleaner::merge_siblings(top.node, top.content_score, options.min_paragraph_length);
    log::debug!("merged {} sibling(s)", block.merged_siblings);

    let (content, text_content) = clean_block(&block, base.as_ref());

    if text::char_len(&text_content) < options.min_content_length {
        log::debug!(
            "content too short: {} < {} chars",
            text::char_len(&text_content),
            options.min_content_length
        );
        return Err(fail("validate", ErrorKind::ContentTooShort));
    }

    let word_count = text::count_words(&text_content);
    let confidence = confidence::estimate_confidence(top, runner_up, word_count);

    Ok(Article {
        title: meta.title,
        excerpt: text::excerpt(&text_content, EXCERPT_LENGTH),
        content,
        text_content,
        author: meta.author,
        authors: meta.authors,
        published_at: meta.published_at,
        modified_at: meta.modified_at,
        lead_image: meta.lead_image,
        url: url.to_string(),
        word_count,
        score: top.content_score,
        confidence,
    })
}

/// Cleans a detached copy of the merged block, returning `(html, text)`.
fn clean_block(block: &ContentBlock, base: Option<&Url>) -> (String, String) {
    let copy = Document::from(block.html.as_str());
    let root = copy.select("body > div").first();
    let root = if root.exists() { root } else { copy.select("body") };

    cleaner::postprocess(&root, base);
    (cleaner::clean_html(&root), cleaner::clean_text(&root))
}

fn log_candidates(scores: &ScoreMap<'_>) {
    for (rank, candidate) in scores.ranked().iter().take(DEBUG_CANDIDATES).enumerate() {
        let sel = Selection::from(candidate.node);
        log::debug!(
            "candidate #{}: <{} class={:?} id={:?}> weighted={:.2} link_density={:.2}",
            rank + 1,
            dom::node_tag(&candidate.node),
            dom::class_name(&sel),
            dom::id(&sel),
            candidate.weighted_score(),
            candidate.link_density
        );
    }
}
