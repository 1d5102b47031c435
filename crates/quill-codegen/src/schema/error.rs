/// Accumulates attribute errors so one expansion reports all of them.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    first: Option<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.first {
            Some(first) => first.combine(err),
            None => self.first = Some(err),
        }
    }

    /// Returns `value` when nothing was reported.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.first {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
