//! Mutable scan state for a single segmentation call

use std::mem;

/// Accumulator and flags threaded through one scan
///
/// A sentence ended by an ordinary boundary is held in `closing` until the
/// first token that is not a follower arrives; only then is it emitted.
pub(crate) struct ScanState<'a, T: ?Sized> {
    current: Vec<&'a T>,
    output: Vec<Vec<&'a T>>,
    closing: Option<Vec<&'a T>>,
    open_quote_parity: usize,
    touched: bool,
    allow_empty: bool,
    pub in_region: bool,
    pub forced_hold: bool,
    pub last_token_was_newline: bool,
    /// Exclusive end of the multi-token boundary span being consumed
    pub span_end: Option<usize>,
}

impl<'a, T: ?Sized> ScanState<'a, T> {
    pub fn new(in_region: bool, allow_empty: bool) -> Self {
        Self {
            current: Vec::new(),
            output: Vec::new(),
            closing: None,
            open_quote_parity: 0,
            touched: false,
            allow_empty,
            in_region,
            forced_hold: false,
            last_token_was_newline: false,
            span_end: None,
        }
    }

    /// Record that a token reached segmentation since the last flush
    pub fn touch(&mut self) {
        self.touched = true;
    }

    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }

    /// An ambiguous quote closes the sentence only if it balances the quote count
    pub fn closing_accepts_quote(&self) -> bool {
        (self.open_quote_parity + 1) % 2 == 0
    }

    /// Add a token to the sentence being built
    pub fn append(&mut self, token: &'a T, is_quote: bool) {
        self.finish_closing();
        self.current.push(token);
        self.count_quote(is_quote);
        self.touched = true;
    }

    /// Add a follower to the sentence that just ended
    pub fn attach_follower(&mut self, token: &'a T, is_quote: bool) {
        if let Some(closing) = self.closing.as_mut() {
            closing.push(token);
            self.count_quote(is_quote);
        }
    }

    /// Stop accepting followers and emit the closing sentence
    pub fn finish_closing(&mut self) {
        if let Some(sentence) = self.closing.take() {
            self.output.push(sentence);
            self.open_quote_parity = 0;
        }
    }

    /// End the current sentence
    ///
    /// A forced end emits immediately and settles any pending multi-token
    /// span; an ordinary boundary leaves the sentence open to followers.
    pub fn end_sentence(&mut self, forced: bool) {
        if forced {
            self.span_end = None;
        }
        if !self.current.is_empty() || self.allow_empty {
            let sentence = mem::take(&mut self.current);
            self.finish_closing();
            if forced {
                self.output.push(sentence);
                self.open_quote_parity = 0;
            } else {
                self.closing = Some(sentence);
            }
        } else if forced {
            self.finish_closing();
        }
        self.touched = false;
    }

    /// Flush whatever remains and return the sentences
    pub fn finish(mut self) -> Vec<Vec<&'a T>> {
        self.finish_closing();
        if !self.current.is_empty() || (self.allow_empty && self.touched) {
            self.output.push(self.current);
        }
        self.output
    }

    fn count_quote(&mut self, is_quote: bool) {
        if is_quote {
            self.open_quote_parity = (self.open_quote_parity + 1) % 2;
        }
    }
}
