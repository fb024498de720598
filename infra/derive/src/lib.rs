#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by every crate of the workspace.
//!
//! * [`carhub_error`] turns an enum into a context-aware `thiserror` error.
//! * [`api_model`] and [`api_handler`] keep DTOs and Axum handlers consistent
//!   with the `OpenAPI` documentation.
//! * [`carhub_slice`] builds the `Arc` handle of a feature slice.
//! * [`main`] bootstraps the Tokio runtime with a named profile.
//!
//! Examples are `ignore`d here because a proc-macro crate cannot use its own
//! macros; the consuming crates exercise them in their tests.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime.
///
/// Transforms an `async fn main` into a plain `fn main` that builds a runtime
/// from one of the `carhub_runtime::RuntimeConfig` presets.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive for servers.
/// * `memory_efficient` - Half the worker threads, smaller stacks.
/// * `default` (or no argument) - Auto-detected worker threads.
///
/// # Examples
///
/// ```rust,ignore
/// #[carhub_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for API data transfer objects.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables `server`.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields`
///   unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use carhub_derive::api_model;
///
/// #[api_model]
/// #[derive(Clone, PartialEq, Eq)]
/// pub struct CarDto {
///     pub number: String,
///     pub model: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro bridging Axum handlers with `OpenAPI` documentation.
///
/// Accepts the arguments of `utoipa::path` (`get`, `path = "..."`,
/// `responses(...)`, `tag = "..."`) and only emits the documentation when the
/// consuming crate enables `server`.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/cars/{car_number}",
///     responses((status = OK, body = Option<PersonDto>)),
///     tag = CARS_TAG,
/// )]
/// pub async fn get_car_owner(/* extractors */) -> Result<Json<Option<PersonDto>>, CarsError> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * `Result<T, E = ErrorName>` alias in the same module.
/// * `<ErrorName>Ext` trait adding `.context(...)` to `Result<T, ErrorName>`
///   and to `Result<T, Source>` for every variant with a source field.
/// * `From<Source>` for those variants.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must be `Option<Cow<'static, str>>`.
/// * A variant with a `source` field (or a field marked `#[source]`/`#[from]`)
///   must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[carhub_derive::carhub_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings> {
///     builder.build().context("Failed to build config")?.try_deserialize().map_err(Into::into)
/// }
/// ```
#[proc_macro_attribute]
pub fn carhub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro defining a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a
/// cheap-to-clone `Arc` wrapper that derefs to the inner state and implements
/// `carhub_kernel::domain::registry::FeatureSlice`.
///
/// # Example
/// ```rust,ignore
/// #[carhub_derive::carhub_slice]
/// pub struct Cars {
///     pub registry: SharedRegistry,
/// }
///
/// let cars = Cars::new(CarsInner { registry });
/// ```
#[proc_macro_attribute]
pub fn carhub_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
