use super::ValueRecord;

use std::{
    collections::VecDeque,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

/// Rows returned by a row-returning statement.
///
/// Items are produced in result order. A failing item (a row the store could
/// not produce) ends the useful part of the stream; rows before it were
/// already yielded.
#[derive(Default)]
pub struct ValueStream {
    columns: Vec<String>,
    buffer: VecDeque<crate::Result<ValueRecord>>,
    stream: Option<DynStream>,
}

type DynStream = Pin<Box<dyn Stream<Item = crate::Result<ValueRecord>> + Send + 'static>>;

#[derive(Debug)]
struct Iter<I> {
    iter: I,
}

impl ValueStream {
    pub fn from_stream<T>(stream: T) -> Self
    where
        T: Stream<Item = crate::Result<ValueRecord>> + Send + 'static,
    {
        Self {
            columns: vec![],
            buffer: VecDeque::new(),
            stream: Some(Box::pin(stream)),
        }
    }

    pub fn from_vec(records: Vec<ValueRecord>) -> Self {
        Self {
            columns: vec![],
            buffer: records.into_iter().map(Ok).collect(),
            stream: None,
        }
    }

    /// Builds a stream from already decoded results, including a trailing
    /// error if reading the rows failed part way through.
    pub fn from_results(results: Vec<crate::Result<ValueRecord>>) -> Self {
        Self {
            columns: vec![],
            buffer: results.into(),
            stream: None,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = crate::Result<ValueRecord>> + Send + Unpin + 'static,
    {
        Self::from_stream(Iter { iter })
    }

    /// Attach result column names.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    /// Result column names, in select-list order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the next record in the stream
    pub async fn next(&mut self) -> Option<crate::Result<ValueRecord>> {
        StreamExt::next(self).await
    }

    pub async fn collect(mut self) -> crate::Result<Vec<ValueRecord>> {
        let mut ret = Vec::with_capacity(self.buffer.len());

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }
}

impl Stream for ValueStream {
    type Item = crate::Result<ValueRecord>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.pop_front() {
            return Poll::Ready(Some(next));
        }

        match &mut self.stream {
            Some(stream) => Pin::new(stream).poll_next(cx),
            None => Poll::Ready(None),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.buffer.len();

        match &self.stream {
            Some(stream) => {
                let (low, high) = stream.size_hint();
                (buffered + low, high.map(|high| buffered + high))
            }
            None => (buffered, Some(buffered)),
        }
    }
}

impl<I> Stream for Iter<I>
where
    I: Iterator<Item = crate::Result<ValueRecord>> + Unpin,
{
    type Item = crate::Result<ValueRecord>;

    fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl From<Vec<ValueRecord>> for ValueStream {
    fn from(value: Vec<ValueRecord>) -> Self {
        Self::from_vec(value)
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStream")
            .field("columns", &self.columns)
            .field("buffered", &self.buffer.len())
            .field("streaming", &self.stream.is_some())
            .finish()
    }
}
