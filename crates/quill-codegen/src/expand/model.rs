use super::Expand;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let quill = &self.quill;
        let model_ident = &self.model.ident;
        let model_name = model_ident.to_string();
        let struct_load_fields = self.expand_struct_load_fields();
        let num_fields = Literal::usize_unsuffixed(self.model.mapped_fields().count());

        quote! {
            impl #quill::Model for #model_ident {
                fn load(mut record: #quill::ValueRecord) -> #quill::Result<Self> {
                    #quill::check_record_len(&record, #num_fields, #model_name)?;

                    Ok(Self {
                        #struct_load_fields
                    })
                }
            }
        }
    }

    /// Mapped fields are bound positionally in declaration order; skipped
    /// fields get their default value.
    fn expand_struct_load_fields(&self) -> TokenStream {
        let quill = &self.quill;
        let model_name = self.model.ident.to_string();
        let mut index = 0;

        self.model
            .fields
            .iter()
            .map(|field| {
                let ident = &field.ident;

                if field.attrs.skip {
                    return quote!(#ident: #quill::Default::default(),);
                }

                let name = field.name();
                let ty = &field.ty;
                let i = Literal::usize_unsuffixed(index);
                index += 1;

                quote! {
                    #ident: #quill::load_field::<#ty>(record.take(#i), #model_name, #name)?,
                }
            })
            .collect()
    }
}
