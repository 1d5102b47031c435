use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let quill = &self.quill;
        let model_ident = &self.model.ident;
        let model_def = self.expand_model_def();
        let get_arms = self.expand_get_arms();

        quote! {
            impl #quill::Record for #model_ident {
                fn def() -> &'static #quill::ModelDef {
                    static DEF: #quill::ModelDef = #model_def;
                    &DEF
                }

                fn get(&self, name: &str) -> #quill::Option<#quill::Value> {
                    match name {
                        #( #get_arms )*
                        _ => #quill::Option::None,
                    }
                }
            }
        }
    }

    fn expand_model_def(&self) -> TokenStream {
        let quill = &self.quill;
        let name = self.model.ident.to_string();

        let fields = self.model.mapped_fields().map(|field| {
            let name = field.name();
            let ty = &field.ty;
            let tag = field
                .attrs
                .tag
                .as_ref()
                .map(syn::LitStr::value)
                .unwrap_or_default();
            let column_type = match &field.attrs.column {
                Some(column) => {
                    let ty = &column.ty;
                    quote!(#quill::Option::Some(#ty))
                }
                None => quote!(#quill::Option::None),
            };

            quote! {
                #quill::FieldDef {
                    name: #name,
                    ty: <#ty as #quill::Primitive>::TYPE,
                    nullable: <#ty as #quill::Primitive>::NULLABLE,
                    tag: #tag,
                    column_type: #column_type,
                },
            }
        });

        quote! {
            #quill::ModelDef {
                name: #name,
                fields: &[ #( #fields )* ],
            }
        }
    }

    fn expand_get_arms(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let quill = &self.quill;

        self.model.mapped_fields().map(move |field| {
            let name = field.name();
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #name => #quill::Option::Some(<#ty as #quill::Primitive>::to_value(&self.#ident)),
            }
        })
    }
}
