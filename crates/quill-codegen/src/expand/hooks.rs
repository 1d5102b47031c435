use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Types without `#[hooks]` get the no-op defaults.
    pub(super) fn expand_hooks_impl(&self) -> TokenStream {
        if self.model.custom_hooks {
            return quote!();
        }

        let quill = &self.quill;
        let model_ident = &self.model.ident;

        quote! {
            impl #quill::Hooks for #model_ident {}
        }
    }
}
