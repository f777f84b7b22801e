mod element;
mod record;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for readrows types
    readrows: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let element_impls = self.expand_element_impls();

        wrap_in_const(quote! {
            #record_impl
            #element_impls
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        readrows: quote!(_readrows::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use readrows as _readrows;
            #code
        };
    }
}
