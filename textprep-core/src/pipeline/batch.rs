//! Batch runner

use super::Pipeline;
use crate::error::Result;

impl Pipeline {
    /// Apply [`Pipeline::transform`] to every value, preserving order
    ///
    /// The output has exactly one entry per input entry. The first failure
    /// aborts the batch and is returned unchanged.
    pub fn transform_series<I>(&self, values: I) -> Result<Vec<String>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let values = values.into_iter();
        let mut output = Vec::with_capacity(values.size_hint().0);

        for (index, value) in values.enumerate() {
            match self.transform(value.as_ref()) {
                Ok(text) => output.push(text),
                Err(e) => {
                    log::warn!("batch aborted at index {index}: {e}");
                    return Err(e);
                }
            }
        }

        Ok(output)
    }
}
