extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `readrows::Record` and the matching `Element` impls.
///
/// Field attributes:
///
/// - `#[column("name")]` reads the field from the named column instead of
///   the snake cased field name.
/// - `#[embed]` flattens the fields of a nested record into this one.
#[proc_macro_derive(Record, attributes(column, embed))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match readrows_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
