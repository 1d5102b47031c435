mod hooks;
mod model;
mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for quill types
    quill: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let model_impl = self.expand_model_impl();
        let hooks_impl = self.expand_hooks_impl();

        wrap_in_const(quote! {
            #record_impl
            #model_impl
            #hooks_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        quill: quote!(_quill::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use quill as _quill;
            #code
        };
    }
}
