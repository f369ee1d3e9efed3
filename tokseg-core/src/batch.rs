//! Multi-document segmentation

use crate::error::Result;
use crate::segmenter::{Segmenter, Sentence};
use crate::token::TokenView;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Segmenter {
    /// Segment several documents, keeping document order
    ///
    /// Documents are processed on the rayon thread pool when the `parallel`
    /// feature is enabled. The first document with an unsupported token fails
    /// the whole batch.
    pub fn segment_batch<'a, T, D>(&self, documents: &'a [D]) -> Result<Vec<Vec<Sentence<'a, T>>>>
    where
        T: TokenView + Sync + 'a,
        D: AsRef<[T]> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            documents
                .par_iter()
                .map(|doc| self.segment(doc.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            documents
                .iter()
                .map(|doc| self.segment(doc.as_ref()))
                .collect()
        }
    }
}
