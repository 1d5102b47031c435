use super::{Diagnostics, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier; also the table name
    pub(crate) ident: syn::Ident,

    /// All struct fields in declaration order, skipped ones included
    pub(crate) fields: Vec<Field>,

    /// True if the struct is annotated with `#[hooks]`
    pub(crate) custom_hooks: bool,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Model` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model fields must be named",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut errs = Diagnostics::default();
        let mut custom_hooks = false;
        let mut fields = vec![];

        for attr in &ast.attrs {
            if attr.path().is_ident("hooks") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if custom_hooks {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[hooks] attribute"));
                } else {
                    custom_hooks = true;
                }
            }
        }

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.finish(Model {
            ident: ast.ident.clone(),
            fields,
            custom_hooks,
        })
    }

    /// Mapped fields in declaration order
    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| !field.attrs.skip)
    }
}
