use super::{Column, Diagnostics};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Verbatim annotation from `#[tag("...")]`
    pub(crate) tag: Option<syn::LitStr>,

    /// Explicit column type from `#[column(type = "...")]`
    pub(crate) column: Option<Column>,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = Diagnostics::default();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("tag") {
                if attrs.tag.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[tag] attribute"));
                } else {
                    match attr.parse_args::<syn::LitStr>() {
                        Ok(tag) => attrs.tag = Some(tag),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match Column::from_ast(attr) {
                        Ok(column) => attrs.column = Some(column),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("skip") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if attrs.skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else {
                    attrs.skip = true;
                }
            }
        }

        if attrs.skip && (attrs.tag.is_some() || attrs.column.is_some()) {
            errs.push(syn::Error::new_spanned(
                ident,
                "skipped fields cannot have #[tag] or #[column]",
            ));
        }

        errs.finish(Field {
            ident: ident.clone(),
            attrs,
            ty: field.ty.clone(),
        })
    }

    /// Column name; the field identifier verbatim, without a raw prefix.
    pub(crate) fn name(&self) -> String {
        let name = self.ident.to_string();
        match name.strip_prefix("r#") {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }
}
