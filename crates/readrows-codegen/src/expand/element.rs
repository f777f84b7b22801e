use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets both `Vec<Record>` and `Vec<Box<Record>>` be scan targets.
    pub(super) fn expand_element_impls(&self) -> TokenStream {
        let readrows = &self.readrows;
        let ident = &self.record.ident;

        quote! {
            impl #readrows::Element for #ident {
                type Record = #ident;

                const KIND: #readrows::ElementKind = #readrows::ElementKind::Value;

                fn from_record(record: #ident) -> Self {
                    record
                }
            }

            impl #readrows::Element for #readrows::Box<#ident> {
                type Record = #ident;

                const KIND: #readrows::ElementKind = #readrows::ElementKind::Boxed;

                fn from_record(record: #ident) -> Self {
                    #readrows::Box::new(record)
                }
            }
        }
    }
}
