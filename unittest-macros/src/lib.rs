//! Procedural macros for the unittest framework
//!
//! This crate provides the `#[def_test]` attribute macro for declaring test
//! functions. A marked function becomes a `unittest::TestDescriptor` constant
//! of the same name, ready to be listed in a suite.

use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Marks a function as a unit test.
///
/// # Example
///
/// ```rust,ignore
/// use unittest::{assert_eq, def_test};
///
/// #[def_test]
/// fn test_addition() {
///     let a = 2 + 2;
///     assert_eq!(a, 4);
/// }
///
/// unittest::tests_name!(ARITHMETIC; test_addition);
/// ```
///
/// The test function can optionally return `TestResult`. If it doesn't return anything,
/// the function body is wrapped to return `TestResult::Ok` on success.
/// This allows using `assert_eq!` and other assertion macros that use `return`.
///
/// # Attributes
/// - `#[def_test]` - Normal test
/// - `#[def_test(ignore)]` - Test will be skipped
/// - `#[def_test(should_panic)]` - Test passes only if its body panics
#[proc_macro_attribute]
pub fn def_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    // Parse attributes
    let attr_str = attr.to_string();
    let ignore = attr_str.contains("ignore");
    let should_panic = attr_str.contains("should_panic");

    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let fn_attrs = &input.attrs;
    let fn_stmts = &input.block.stmts;

    // Check if function returns TestResult
    let has_return_type = !matches!(input.sig.output, syn::ReturnType::Default);

    // The body is embedded in an inner function so the assert macros can
    // `return TestResult::Failed` from it.
    let test_fn = if has_return_type {
        quote! {
            fn #fn_name() -> unittest::TestResult {
                #(#fn_stmts)*
            }
        }
    } else {
        quote! {
            fn #fn_name() -> unittest::TestResult {
                #(#fn_stmts)*
                unittest::TestResult::Ok
            }
        }
    };

    let fn_name_str = fn_name.to_string();

    let output = quote! {
        #(#fn_attrs)*
        #[allow(non_upper_case_globals)]
        #fn_vis const #fn_name: unittest::TestDescriptor = {
            #test_fn
            unittest::TestDescriptor::new(
                #fn_name_str,
                module_path!(),
                #fn_name,
                #should_panic,
                #ignore,
            )
        };
    };

    output.into()
}
