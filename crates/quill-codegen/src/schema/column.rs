/// Arguments of `#[column(type = "...")]`.
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) ty: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lookahead = input.lookahead1();

        if !lookahead.peek(syn::Token![type]) {
            return Err(lookahead.error());
        }

        let _type_token: syn::Token![type] = input.parse()?;
        let _eq_token: syn::Token![=] = input.parse()?;
        let ty: syn::LitStr = input.parse()?;

        if !input.is_empty() {
            return Err(syn::Error::new(input.span(), "unexpected column argument"));
        }

        Ok(Column { ty })
    }
}
