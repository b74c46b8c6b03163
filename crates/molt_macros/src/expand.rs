//! Expansion bodies for the value and structure macros.
//!
//! Every function here runs inside the compiler, claims whatever draw
//! indices it needs from [`crate::site`], and renders the outcome as plain
//! tokens. Values become suffixed literals; structure macros emit only the
//! branch the session draw selected, since the draw can never change at
//! run time.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, LitInt, Token};

use crate::site;

/// Report a seed failure at the expansion site instead of aborting the
/// compiler.
pub(crate) fn session_error(message: String) -> syn::Error {
    syn::Error::new(Span::call_site(), message)
}

pub fn value_u32() -> syn::Result<TokenStream> {
    let value = site::draw().map_err(session_error)?;
    Ok(quote! { #value })
}

pub fn value_i32() -> syn::Result<TokenStream> {
    let value = molt_core::sample::to_i32(site::draw().map_err(session_error)?);
    Ok(quote! { #value })
}

pub fn value_u64() -> syn::Result<TokenStream> {
    let value = site::draw_u64().map_err(session_error)?;
    Ok(quote! { #value })
}

pub fn value_i64() -> syn::Result<TokenStream> {
    let value = site::draw_u64().map_err(session_error)? as i64;
    Ok(quote! { #value })
}

pub fn value_f32() -> syn::Result<TokenStream> {
    let value = molt_core::sample::to_f32(site::draw().map_err(session_error)?);
    Ok(quote! { #value })
}

pub fn value_f64() -> syn::Result<TokenStream> {
    let value = site::draw_f64().map_err(session_error)?;
    Ok(quote! { #value })
}

pub fn value_bounded(bound: LitInt) -> syn::Result<TokenStream> {
    let limit: u32 = bound.base10_parse()?;
    if limit == 0 {
        return Err(syn::Error::new(bound.span(), "bound must be positive"));
    }
    let value = site::draw_bounded(limit).map_err(session_error)?;
    Ok(quote! { #value })
}

/// The session seed itself, as a `u64` literal.
pub fn seed_literal() -> syn::Result<TokenStream> {
    let seed = site::seed().map_err(session_error)?;
    Ok(quote! { #seed })
}

/// Two independent operations whose relative order the build decides.
pub struct OrderInput {
    pub first: Expr,
    pub second: Expr,
}

impl Parse for OrderInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let first = input.parse()?;
        input.parse::<Token![,]>()?;
        let second = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(Self { first, second })
    }
}

/// A gate rate and the operation it guards.
pub struct ChanceInput {
    pub rate: LitInt,
    pub operation: Expr,
}

impl Parse for ChanceInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let rate = input.parse()?;
        input.parse::<Token![,]>()?;
        let operation = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(Self { rate, operation })
    }
}

/// Scale and shift for a normal draw.
pub struct NormalInput {
    pub sigma: Expr,
    pub mu: Expr,
}

impl Parse for NormalInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let sigma = input.parse()?;
        input.parse::<Token![,]>()?;
        let mu = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        Ok(Self { sigma, mu })
    }
}

/// Emit both operations in the order one coin draw selects. Both always
/// run exactly once; the caller guarantees they are independent.
pub fn ordered(input: OrderInput) -> syn::Result<TokenStream> {
    let OrderInput { first, second } = input;
    let swapped = site::draw_bounded(2).map_err(session_error)? == 1;
    Ok(if swapped {
        quote! { { #second; #first; } }
    } else {
        quote! { { #first; #second; } }
    })
}

/// Emit the operation iff this site drew 0 out of `rate`. The losing arm
/// expands to an empty block.
pub fn gated(input: ChanceInput) -> syn::Result<TokenStream> {
    let rate: u32 = input.rate.base10_parse()?;
    if rate == 0 {
        return Err(syn::Error::new(input.rate.span(), "rate must be positive"));
    }
    let selected = site::draw_bounded(rate).map_err(session_error)? == 0;
    let operation = input.operation;
    Ok(if selected {
        quote! { { #operation; } }
    } else {
        quote! { {} }
    })
}

/// Bake two unit-interval draws into a runtime Box-Muller call. Sigma and
/// mu pass through verbatim, so they may be runtime expressions. The
/// expansion names the `molt` facade absolutely; callers reach this macro
/// through that crate.
pub fn normal(input: NormalInput) -> syn::Result<TokenStream> {
    let a = site::draw_f64().map_err(session_error)?;
    let b = site::draw_f64().map_err(session_error)?;
    let NormalInput { sigma, mu } = input;
    Ok(quote! {
        ::molt::engine::normal::box_muller(#a, #b, #sigma, #mu)
    })
}
