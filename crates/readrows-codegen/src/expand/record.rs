use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let readrows = &self.readrows;
        let ident = &self.record.ident;
        let describe = self.expand_describe_body();
        let bind = self.expand_bind_body();

        quote! {
            #[allow(unused_variables)]
            impl #readrows::Record for #ident {
                fn describe(fields: &mut #readrows::Vec<#readrows::FieldDescriptor>) {
                    #describe
                }

                fn bind<'a>(&'a mut self, slots: &mut #readrows::Vec<&'a mut dyn #readrows::Dest>) {
                    #bind
                }
            }
        }
    }

    /// One push per leaf field; embedded groups describe themselves in place.
    fn expand_describe_body(&self) -> TokenStream {
        let readrows = &self.readrows;

        let stmts = self.record.fields.iter().map(|field| {
            let ty = &field.ty;
            let name = &field.name;

            if field.attrs.embed {
                quote!(<#ty as #readrows::Record>::describe(fields);)
            } else if let Some(column) = &field.attrs.column {
                let column = &column.name;
                quote!(fields.push(#readrows::FieldDescriptor::with_column(#name, #column));)
            } else {
                quote!(fields.push(#readrows::FieldDescriptor::new(#name));)
            }
        });

        quote!(#( #stmts )*)
    }

    fn expand_bind_body(&self) -> TokenStream {
        let readrows = &self.readrows;

        let stmts = self.record.fields.iter().map(|field| {
            let ident = &field.ident;
            let ty = &field.ty;

            if field.attrs.embed {
                quote!(<#ty as #readrows::Record>::bind(&mut self.#ident, slots);)
            } else {
                quote!(slots.push(&mut self.#ident as &mut dyn #readrows::Dest);)
            }
        });

        quote!(#( #stmts )*)
    }
}
