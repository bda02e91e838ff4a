//! ApiResource derive macro for REST resource metadata.
//!
//! The [`ApiResource`](macro@ApiResource) derive implements
//! `core_proc_macros::ApiResource` for a record type: its display name,
//! collection, route paths and OpenAPI tag, with defaults derived from the
//! struct name.
//!
//! # Examples
//!
//! ```ignore
//! use core_proc_macros::ApiResource;
//!
//! #[derive(ApiResource)]
//! pub struct Venue {
//!     name: String,
//! }
//!
//! assert_eq!(Venue::NAME, "Venue");
//! assert_eq!(Venue::COLLECTION, "venues");
//! assert_eq!(Venue::URL, "/venues");
//! assert_eq!(Venue::URL_WITH_ID, "/venues/{id}");
//! assert_eq!(Venue::TAG, "Venues");
//! ```
//!
//! Overriding defaults:
//!
//! ```ignore
//! #[derive(ApiResource)]
//! #[api_resource(name = "Guest", collection = "guests", url = "/guests", tag = "Guest List")]
//! pub struct Attendee {
//!     name: String,
//! }
//! ```

extern crate proc_macro;

use darling::FromDeriveInput;
use pluralizer::pluralize;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(api_resource), supports(struct_named))]
struct ApiResourceInput {
    ident: syn::Ident,
    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    collection: Option<String>,
    #[darling(default)]
    url: Option<String>,
    #[darling(default)]
    tag: Option<String>,
}

/// Derives `core_proc_macros::ApiResource`.
///
/// # Attributes
///
/// - `name`: Label used in messages (default: the struct name)
/// - `collection`: Store collection (default: lowercase, pluralized struct name)
/// - `url`: Base route (default: `/` + collection)
/// - `tag`: OpenAPI tag (default: capitalized collection)
///
/// # Generated Constants
///
/// - `NAME`, `COLLECTION`, `URL`, `URL_WITH_ID` (`URL` + `/{id}`), `TAG`
///
/// # Requirements
///
/// Only structs with named fields are supported.
///
/// ```ignore
/// #[derive(ApiResource)]
/// pub struct Booking {
///     event_id: String,
/// }
///
/// assert_eq!(Booking::COLLECTION, "bookings");
/// assert_eq!(Booking::URL_WITH_ID, "/bookings/{id}");
/// ```
#[proc_macro_derive(ApiResource, attributes(api_resource))]
pub fn api_resource_derive(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = parse_macro_input!(input as DeriveInput);
    let receiver = match ApiResourceInput::from_derive_input(&ast) {
        Ok(receiver) => receiver,
        Err(err) => return TokenStream::from(err.write_errors()),
    };
    impl_api_resource(receiver).into()
}

fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn impl_api_resource(receiver: ApiResourceInput) -> proc_macro2::TokenStream {
    let ident = &receiver.ident;
    let lowercase = ident.to_string().to_lowercase();

    let name = receiver.name.unwrap_or_else(|| ident.to_string());

    let collection = receiver
        .collection
        .unwrap_or_else(|| pluralize(&lowercase, 2, false));

    let url = receiver.url.unwrap_or_else(|| format!("/{}", collection));
    let url_with_id = format!("{}/{{id}}", url.trim_end_matches('/'));

    let tag = receiver
        .tag
        .unwrap_or_else(|| capitalize_first_letter(&collection));

    quote! {
        impl core_proc_macros::ApiResource for #ident {
            const NAME: &'static str = #name;
            const COLLECTION: &'static str = #collection;
            const URL: &'static str = #url;
            const URL_WITH_ID: &'static str = #url_with_id;
            const TAG: &'static str = #tag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn expand(input: proc_macro2::TokenStream) -> String {
        let ast: DeriveInput = syn::parse2(input).unwrap();
        let receiver = ApiResourceInput::from_derive_input(&ast).unwrap();
        impl_api_resource(receiver).to_string()
    }

    #[test]
    fn test_defaults() {
        let output = expand(quote! {
            pub struct Event {
                title: String,
                date: String,
            }
        });

        assert!(output.contains("impl core_proc_macros :: ApiResource for Event"));
        assert!(output.contains(r#"const NAME : & 'static str = "Event""#));
        assert!(output.contains(r#"const COLLECTION : & 'static str = "events""#));
        assert!(output.contains(r#"const URL : & 'static str = "/events""#));
        assert!(output.contains(r#"const URL_WITH_ID : & 'static str = "/events/{id}""#));
        assert!(output.contains(r#"const TAG : & 'static str = "Events""#));
    }

    #[test]
    fn test_attendee_pluralization() {
        let output = expand(quote! {
            pub struct Attendee {
                name: String,
            }
        });

        assert!(output.contains(r#"const COLLECTION : & 'static str = "attendees""#));
        assert!(output.contains(r#"const URL : & 'static str = "/attendees""#));
    }

    #[test]
    fn test_custom_collection_drives_url_and_tag() {
        let output = expand(quote! {
            #[api_resource(collection = "people")]
            pub struct Attendee {
                name: String,
            }
        });

        assert!(output.contains(r#"const COLLECTION : & 'static str = "people""#));
        assert!(output.contains(r#"const URL : & 'static str = "/people""#));
        assert!(output.contains(r#"const TAG : & 'static str = "People""#));
    }

    #[test]
    fn test_custom_url_trailing_slash() {
        let output = expand(quote! {
            #[api_resource(url = "/v1/venues/")]
            pub struct Venue {
                name: String,
            }
        });

        assert!(output.contains(r#"const URL : & 'static str = "/v1/venues/""#));
        assert!(output.contains(r#"const URL_WITH_ID : & 'static str = "/v1/venues/{id}""#));
    }

    #[test]
    fn test_all_custom_attributes() {
        let output = expand(quote! {
            #[api_resource(
                name = "Reservation",
                collection = "reservations",
                url = "/reservations",
                tag = "Ticketing"
            )]
            pub struct Booking {
                status: String,
            }
        });

        assert!(output.contains(r#"const NAME : & 'static str = "Reservation""#));
        assert!(output.contains(r#"const COLLECTION : & 'static str = "reservations""#));
        assert!(output.contains(r#"const TAG : & 'static str = "Ticketing""#));
    }

    #[test]
    fn test_rejects_enums() {
        let ast: DeriveInput = syn::parse2(quote! {
            pub enum Status { Confirmed, Cancelled }
        })
        .unwrap();
        assert!(ApiResourceInput::from_derive_input(&ast).is_err());
    }

    #[test]
    fn test_rejects_unknown_attribute() {
        let ast: DeriveInput = syn::parse2(quote! {
            #[api_resource(table = "venues")]
            pub struct Venue { name: String }
        })
        .unwrap();
        assert!(ApiResourceInput::from_derive_input(&ast).is_err());
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("a"), "A");
        assert_eq!(capitalize_first_letter("venues"), "Venues");
        assert_eq!(capitalize_first_letter("API"), "API");
    }
}
