//! Inert filler expansion.
//!
//! One of 21 mutually exclusive shapes is selected per expansion site:
//! a materialized scalar (int, f32, f64, byte), a four-lane array, a
//! two-lane array folded by one arithmetic operator, or a two-step chain
//! through a named local. Every operand value is drawn and baked in at
//! expansion time; every result is routed through `black_box` so the
//! optimizer keeps the dead arithmetic in the binary. None of it touches
//! program semantics.

use proc_macro2::TokenStream;
use quote::quote;

use crate::expand::session_error;
use crate::site;

const SHAPES: u32 = 21;

/// Select one filler shape for this site and render it.
pub fn emit() -> syn::Result<TokenStream> {
    let pick = site::draw_bounded(SHAPES).map_err(session_error)?;
    Ok(match pick {
        0 => int_scalar(operand(10_000)?),
        1 => f32_scalar(site::draw_bounded(1_000).map_err(session_error)? as f32),
        2 => f64_scalar(site::draw_bounded(1_000).map_err(session_error)? as f64),
        3 => byte_scalar(site::draw_bounded(100_000).map_err(session_error)? as u8),
        4 => lane_array([
            operand(1_000)?,
            operand(1_000)?,
            operand(1_000)?,
            operand(1_000)?,
        ]),
        5..=12 => pair_fold(pick, operand(10_000)?, operand(10_000)?),
        _ => chained(pick, operand(10_000)?, operand(10_000)?),
    })
}

fn operand(bound: u32) -> syn::Result<i32> {
    Ok(site::draw_bounded(bound).map_err(session_error)? as i32)
}

fn int_scalar(value: i32) -> TokenStream {
    quote! { { ::core::hint::black_box(#value); } }
}

fn f32_scalar(value: f32) -> TokenStream {
    quote! { { ::core::hint::black_box(#value); } }
}

fn f64_scalar(value: f64) -> TokenStream {
    quote! { { ::core::hint::black_box(#value); } }
}

fn byte_scalar(value: u8) -> TokenStream {
    quote! { { ::core::hint::black_box(#value); } }
}

fn lane_array(lanes: [i32; 4]) -> TokenStream {
    let [a, b, c, d] = lanes;
    quote! {
        {
            let lanes = [
                ::core::hint::black_box(#a),
                ::core::hint::black_box(#b),
                ::core::hint::black_box(#c),
                ::core::hint::black_box(#d),
            ];
            ::core::hint::black_box(lanes);
        }
    }
}

/// Shapes 5 through 12: load a two-lane array through `black_box`, fold it
/// with one operator, discard. Divisors carry a `+ 1` so no drawn value can
/// divide by zero; the modulo shape reads the lanes in swapped order.
fn pair_fold(pick: u32, a: i32, b: i32) -> TokenStream {
    let fold = match pick {
        5 => quote!(pair[0] + pair[1]),
        6 => quote!(pair[0] * pair[1]),
        7 => quote!(pair[0] | pair[1]),
        8 => quote!(pair[0] ^ pair[1]),
        9 => quote!(pair[0] & pair[1]),
        10 => quote!(pair[0] - pair[1]),
        11 => quote!(pair[0] / (pair[1] + 1)),
        _ => quote!(pair[1] % (pair[0] + 1)),
    };
    quote! {
        {
            let pair = [::core::hint::black_box(#a), ::core::hint::black_box(#b)];
            ::core::hint::black_box(#fold);
        }
    }
}

/// Shapes 13 through 20: bind one opaque local, combine it with a second
/// opaque operand, discard the result.
fn chained(pick: u32, a: i32, b: i32) -> TokenStream {
    let step = match pick {
        13 => quote!(first + ::core::hint::black_box(#b)),
        14 => quote!(first * ::core::hint::black_box(#b)),
        15 => quote!(first | ::core::hint::black_box(#b)),
        16 => quote!(first ^ ::core::hint::black_box(#b)),
        17 => quote!(first & ::core::hint::black_box(#b)),
        18 => quote!(first - ::core::hint::black_box(#b)),
        19 => quote!(first / (::core::hint::black_box(#b) + 1)),
        _ => quote!(first % (::core::hint::black_box(#b) + 1)),
    };
    quote! {
        {
            let first = ::core::hint::black_box(#a);
            ::core::hint::black_box(#step);
        }
    }
}
