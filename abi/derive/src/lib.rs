//! `#[derive(Tokenize)]`: a struct becomes a tuple argument whose components
//! are its fields in declaration order. Fields marked `#[abi_skip]` are left
//! out.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Field, Fields};

#[proc_macro_derive(Tokenize, attributes(abi_skip))]
pub fn tokenize_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impl_tokenize(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn impl_tokenize(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let components = tokenize_fields(ast)?;
    Ok(quote! {
        impl #impl_generics ::calldata_abi_enc::Tokenize for #name #ty_generics #where_clause {
            fn to_token(&self) -> ::calldata_abi_enc::Token {
                ::calldata_abi_enc::Token::Tuple(vec![#(#components),*])
            }
        }
    })
}

fn tokenize_fields(ast: &DeriveInput) -> syn::Result<Vec<TokenStream>> {
    let data = match &ast.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                ast.ident.span(),
                "Tokenize can only be derived for structs",
            ))
        }
    };
    match &data.fields {
        Fields::Named(fields) => Ok(fields
            .named
            .iter()
            .filter(|f| !is_skipped(f))
            .map(|f| {
                let field_name = &f.ident;
                quote! { ::calldata_abi_enc::Tokenize::to_token(&self.#field_name) }
            })
            .collect()),
        Fields::Unnamed(fields) => Ok(fields
            .unnamed
            .iter()
            .enumerate()
            .filter(|(_, f)| !is_skipped(f))
            .map(|(index, _)| {
                let index = syn::Index::from(index);
                quote! { ::calldata_abi_enc::Tokenize::to_token(&self.#index) }
            })
            .collect()),
        Fields::Unit => Err(syn::Error::new(
            data.fields.span(),
            "cannot ABI encode a unit struct",
        )),
    }
}

fn is_skipped(field: &Field) -> bool {
    field.attrs.iter().any(|attr| attr.path.is_ident("abi_skip"))
}
