//! The sentence segmenter
//!
//! One linear pass over the token stream. For every token the rules are
//! tried in a fixed order, and the first rule that applies decides what
//! happens to it:
//!
//! 1. region filtering (tokens outside the region element are dropped)
//! 2. follower attachment to a sentence that just ended
//! 3. forced sentence end
//! 4. forced hold (no breaks until a forced end)
//! 5. newline markers, per [`NewlinePolicy`]
//! 6. XML break elements
//! 7. discard patterns
//! 8. interior of a non-splittable multi-token span
//! 9. multi-token boundary patterns
//! 10. boundary tokens, and plain content otherwise

use crate::config::{NewlinePolicy, SegmenterConfig};
use crate::error::{Error, Result};
use crate::matcher::{compile_anchored, BoundaryPatternMatcher, PatternSet};
use crate::state::ScanState;
use crate::token::TokenView;
use crate::xml::XmlTag;
use regex::{Regex, RegexSet};
use std::borrow::Cow;
use std::fmt;
use std::iter::Peekable;
use std::ops::Range;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// A sentence: the tokens it contains, borrowed from the input
pub type Sentence<'a, T> = Vec<&'a T>;

type Spans<'t> = Peekable<Box<dyn Iterator<Item = Range<usize>> + 't>>;

/// Groups a token stream into sentences
///
/// Built once from a [`SegmenterConfig`]; all patterns are compiled up
/// front. A `Segmenter` holds no per-call state and can be shared across
/// threads.
#[derive(Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
    boundary: Option<Regex>,
    follower: Option<Regex>,
    discard: RegexSet,
    matcher: Option<Arc<dyn BoundaryPatternMatcher>>,
}

/// What region filtering decided for a token
enum RegionEvent {
    /// Token is outside the region, or is a region tag
    Dropped,
    /// Token closed the region
    Exited,
    /// Token is inside the region and goes on to segmentation
    Inside,
}

impl Segmenter {
    /// Compile a configuration
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        let boundary = compile_optional(&config.boundary_regex)?;
        let follower = compile_optional(&config.boundary_follower_regex)?;

        for pattern in &config.token_regexes_to_discard {
            compile_anchored(pattern)?;
        }
        let discard = RegexSet::new(
            config
                .token_regexes_to_discard
                .iter()
                .map(|p| format!("^(?:{p})$")),
        )
        .map_err(|e| Error::Configuration(e.to_string()))?;

        let matcher: Option<Arc<dyn BoundaryPatternMatcher>> =
            if config.multi_token_patterns.is_empty() {
                None
            } else {
                Some(Arc::new(PatternSet::new(&config.multi_token_patterns)?))
            };

        debug!(
            newline_policy = %config.newline_policy,
            region = ?config.region_element_name,
            one_sentence = config.one_sentence,
            "compiled segmenter configuration"
        );

        Ok(Self {
            config,
            boundary,
            follower,
            discard,
            matcher,
        })
    }

    /// Use a custom multi-token boundary matcher
    ///
    /// Replaces any matcher built from `multi_token_patterns`.
    pub fn with_boundary_matcher<M>(mut self, matcher: M) -> Self
    where
        M: BoundaryPatternMatcher + 'static,
    {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    /// The configuration this segmenter was built from
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split tokens into sentences
    ///
    /// Sentences borrow from `tokens`. Fails only if a token has no textual
    /// form; nothing is returned in that case.
    pub fn segment<'a, T>(&self, tokens: &'a [T]) -> Result<Vec<Sentence<'a, T>>>
    where
        T: TokenView,
    {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let texts = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                token.text().ok_or_else(|| Error::UnsupportedToken {
                    index,
                    kind: token.kind().into_owned(),
                })
            })
            .collect::<Result<Vec<Cow<'a, str>>>>()?;
        let texts: Vec<&str> = texts.iter().map(|t| &**t).collect();

        let sentences = if self.config.one_sentence {
            self.single_sentence(tokens, &texts)
        } else {
            self.scan(tokens, &texts)
        };

        debug!(
            tokens = tokens.len(),
            sentences = sentences.len(),
            "segmented token stream"
        );
        Ok(sentences)
    }

    /// Split tokens into sentences of cloned tokens
    pub fn segment_cloned<T>(&self, tokens: &[T]) -> Result<Vec<Vec<T>>>
    where
        T: TokenView + Clone,
    {
        Ok(self
            .segment(tokens)?
            .into_iter()
            .map(|sentence| sentence.into_iter().cloned().collect())
            .collect())
    }

    fn scan<'a, T: TokenView>(&self, tokens: &'a [T], texts: &[&str]) -> Vec<Sentence<'a, T>> {
        let mut spans: Option<Spans<'_>> = self
            .matcher
            .as_ref()
            .map(|matcher| matcher.find_iter(texts).peekable());
        let mut state = ScanState::new(
            self.config.region_element_name.is_none(),
            self.config.allow_empty_sentences,
        );

        for (index, (token, &text)) in tokens.iter().zip(texts).enumerate() {
            match self.region_event(&mut state.in_region, text) {
                RegionEvent::Dropped => {
                    state.last_token_was_newline = false;
                    trace!(index, token = text, "dropped by region filter");
                    continue;
                }
                RegionEvent::Exited => {
                    state.forced_hold = false;
                    state.last_token_was_newline = false;
                    state.end_sentence(true);
                    trace!(index, token = text, "region closed");
                    continue;
                }
                RegionEvent::Inside => {}
            }

            self.step(&mut state, &mut spans, index, token, text);

            // Fires even when an earlier rule consumed the span's last token
            if state.span_end.is_some_and(|end| index + 1 >= end) {
                state.span_end = None;
                if !state.forced_hold {
                    state.end_sentence(false);
                    trace!(index, "multi-token boundary ends");
                }
            }
        }

        state.finish()
    }

    fn step<'a, T: TokenView>(
        &self,
        state: &mut ScanState<'a, T>,
        spans: &mut Option<Spans<'_>>,
        index: usize,
        token: &'a T,
        text: &str,
    ) {
        let forced_end = token.is_forced_end();
        let hold_start = !forced_end && token.is_forced_until_end();
        let interior = !forced_end && !hold_start && token.is_multi_token_interior();
        let newline = self.config.newline_tokens.contains(text);
        let xml_break = self.is_xml_break(text);
        let discard = self.is_discarded(text)
            || (newline && self.config.newline_policy != NewlinePolicy::Never);
        let quote = is_quote(text);

        if state.is_closing()
            && !forced_end
            && !hold_start
            && !newline
            && self.is_follower(text)
            && (!is_ambiguous_quote(text) || state.closing_accepts_quote())
        {
            if discard {
                trace!(index, token = text, "follower discarded");
            } else {
                state.attach_follower(token, quote);
                trace!(index, token = text, "follower attached to previous sentence");
            }
            state.last_token_was_newline = false;
            return;
        }

        if !newline {
            state.touch();
        }
        if hold_start {
            state.forced_hold = true;
        }

        if forced_end {
            if !(discard || xml_break) {
                state.append(token, quote);
            }
            state.forced_hold = false;
            state.last_token_was_newline = newline;
            state.end_sentence(true);
            trace!(index, token = text, "forced sentence end");
            return;
        }

        if state.forced_hold {
            if !(discard || xml_break) {
                state.append(token, quote);
            }
            state.last_token_was_newline = newline;
            trace!(index, token = text, "held until forced end");
            return;
        }

        if newline {
            state.finish_closing();
            match self.config.newline_policy {
                NewlinePolicy::Always => {
                    state.end_sentence(true);
                    state.last_token_was_newline = true;
                }
                NewlinePolicy::TwoConsecutive if state.last_token_was_newline => {
                    state.end_sentence(true);
                    state.last_token_was_newline = false;
                }
                NewlinePolicy::TwoConsecutive => {
                    state.last_token_was_newline = true;
                }
                NewlinePolicy::Never => {
                    state.last_token_was_newline = true;
                    if !discard {
                        state.append(token, quote);
                    }
                }
            }
            trace!(index, policy = %self.config.newline_policy, "newline marker");
            return;
        }
        state.last_token_was_newline = false;

        if xml_break {
            state.end_sentence(true);
            trace!(index, token = text, "xml break element");
            return;
        }

        if discard {
            trace!(index, token = text, "discarded");
            return;
        }

        if interior {
            state.append(token, quote);
            return;
        }

        if state.span_end.is_some() {
            state.append(token, quote);
            return;
        }

        if let Some(span) = next_span_at(spans, index) {
            state.append(token, quote);
            trace!(index, span = ?span, "multi-token boundary starts");
            state.span_end = Some(span.end);
            return;
        }

        state.append(token, quote);
        if self.is_boundary(text) {
            state.end_sentence(false);
            trace!(index, token = text, "sentence boundary");
        }
    }

    fn single_sentence<'a, T: TokenView>(&self, tokens: &'a [T], texts: &[&str]) -> Vec<Sentence<'a, T>> {
        let mut in_region = self.config.region_element_name.is_none();
        let mut reached = false;
        let mut sentence = Vec::new();

        for (token, &text) in tokens.iter().zip(texts) {
            if !matches!(self.region_event(&mut in_region, text), RegionEvent::Inside) {
                continue;
            }
            reached = true;
            if self.is_discarded(text) {
                continue;
            }
            sentence.push(token);
        }

        if !sentence.is_empty() || (self.config.allow_empty_sentences && reached) {
            vec![sentence]
        } else {
            Vec::new()
        }
    }

    fn region_event(&self, in_region: &mut bool, text: &str) -> RegionEvent {
        let Some(region) = self.config.region_element_name.as_deref() else {
            return RegionEvent::Inside;
        };
        let tag = XmlTag::parse(text);

        if !*in_region {
            if tag.is_some_and(|t| t.is_start_of(region)) {
                *in_region = true;
            }
            return RegionEvent::Dropped;
        }

        match tag {
            Some(t) if t.is_end_of(region) => {
                *in_region = false;
                RegionEvent::Exited
            }
            Some(t) if t.is_start_of(region) => RegionEvent::Dropped,
            _ => RegionEvent::Inside,
        }
    }

    fn is_boundary(&self, text: &str) -> bool {
        self.boundary.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn is_follower(&self, text: &str) -> bool {
        self.follower.as_ref().is_some_and(|re| re.is_match(text))
    }

    fn is_discarded(&self, text: &str) -> bool {
        self.config.tokens_to_discard.contains(text) || self.discard.is_match(text)
    }

    fn is_xml_break(&self, text: &str) -> bool {
        !self.config.xml_break_element_names.is_empty()
            && XmlTag::parse(text)
                .is_some_and(|tag| self.config.xml_break_element_names.contains(tag.name))
    }
}

impl fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .field("has_matcher", &self.matcher.is_some())
            .finish()
    }
}

/// An empty pattern disables the rule
fn compile_optional(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        Ok(None)
    } else {
        compile_anchored(pattern).map(Some)
    }
}

/// Take the span starting at `index`, skipping spans already passed
fn next_span_at(spans: &mut Option<Spans<'_>>, index: usize) -> Option<Range<usize>> {
    let spans = spans.as_mut()?;
    while let Some(span) = spans.peek() {
        if span.start > index {
            return None;
        }
        let span = spans.next()?;
        if span.start == index && !span.is_empty() {
            return Some(span);
        }
    }
    None
}

fn is_quote(text: &str) -> bool {
    static QUOTE: OnceLock<Regex> = OnceLock::new();
    QUOTE
        .get_or_init(|| {
            Regex::new(r#"^(?:["'`＂＇‚„]|''|``|\p{Pi}|\p{Pf})$"#).expect("quote pattern is valid")
        })
        .is_match(text)
}

/// Straight quotes, which can open or close
fn is_ambiguous_quote(text: &str) -> bool {
    matches!(text, "\"" | "'" | "＂" | "＇")
}
