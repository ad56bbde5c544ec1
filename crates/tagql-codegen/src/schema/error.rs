/// Collects field-level parse errors so one expansion pass can report all of
/// them together.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    pub(crate) fn into_result(self) -> syn::Result<()> {
        let combined = self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        });

        match combined {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
