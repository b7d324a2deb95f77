//! Procedural macros for the junction-solver framework

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::parse::Parse;
use syn::{DeriveInput, LitInt, LitStr, parse_macro_input};

/// Values read from a `#[puzzle(...)]` attribute
#[derive(Default)]
struct PuzzleArgs {
    parts: Option<u8>,
    year: Option<u16>,
    day: Option<u8>,
    tags: Vec<String>,
}

fn parse_puzzle_args(input: &DeriveInput) -> syn::Result<PuzzleArgs> {
    let mut args = PuzzleArgs::default();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("puzzle")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("parts") {
                args.parts = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
            } else if meta.path.is_ident("year") {
                args.year = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
            } else if meta.path.is_ident("day") {
                args.day = Some(meta.value()?.parse::<LitInt>()?.base10_parse()?);
            } else if meta.path.is_ident("tags") {
                // tags = ["a", "b"]
                let _ = meta.value()?;
                let content;
                syn::bracketed!(content in meta.input);
                let tags = content.parse_terminated(<LitStr as Parse>::parse, syn::Token![,])?;
                args.tags.extend(tags.iter().map(LitStr::value));
            } else {
                return Err(meta.error("expected `parts`, `year`, `day` or `tags`"));
            }
            Ok(())
        })?;
    }

    Ok(args)
}

/// Derives `Solver` by dispatching part numbers to `PartSolver<N>` impls.
///
/// Requires `#[puzzle(parts = N)]` with `N >= 1`. Every `PartSolver<1>` through
/// `PartSolver<N>` must be implemented, otherwise compilation fails on the
/// missing impl.
///
/// ```ignore
/// #[derive(PuzzleSolver)]
/// #[puzzle(parts = 2)]
/// struct Day8;
///
/// impl PuzzleParser for Day8 { /* ... */ }
/// impl PartSolver<1> for Day8 { /* ... */ }
/// impl PartSolver<2> for Day8 { /* ... */ }
/// ```
#[proc_macro_derive(PuzzleSolver, attributes(puzzle))]
pub fn derive_puzzle_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_puzzle_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_puzzle_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let args = parse_puzzle_args(input)?;
    let parts = match args.parts {
        Some(0) => return Err(syn::Error::new_spanned(&input.ident, "`parts` must be at least 1")),
        Some(parts) => parts,
        None => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "PuzzleSolver requires #[puzzle(parts = N)]",
            ));
        }
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arms = (1..=parts).map(|part| {
        let n = Literal::u8_unsuffixed(part);
        quote! {
            #n => <Self as ::junction_solver::PartSolver<#n>>::solve(shared),
        }
    });
    let parts = Literal::u8_unsuffixed(parts);

    Ok(quote! {
        impl #impl_generics ::junction_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::junction_solver::PuzzleParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::junction_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::junction_solver::SolveError::PartOutOfRange(part)),
                }
            }
        }
    })
}

/// Submits the solver as a `SolverPlugin` for automatic registration.
///
/// Requires `#[puzzle(year = YYYY, day = D)]`, optionally with
/// `tags = ["..."]`. The type must be a unit struct implementing `Solver`;
/// otherwise the generated bound check fails with:
///
/// ```text
/// error[E0277]: the trait bound `Day8: Solver` is not satisfied
/// ```
#[proc_macro_derive(RegisterSolver, attributes(puzzle))]
pub fn derive_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_register_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_register_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let args = parse_puzzle_args(input)?;
    let name = &input.ident;
    let year = args
        .year
        .ok_or_else(|| syn::Error::new_spanned(name, "RegisterSolver requires `year` in #[puzzle(...)]"))?;
    let day = args
        .day
        .ok_or_else(|| syn::Error::new_spanned(name, "RegisterSolver requires `day` in #[puzzle(...)]"))?;
    let tags = args.tags.iter().map(String::as_str);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::junction_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::junction_solver::inventory::submit! {
            ::junction_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
