//! Data models for collections and HAR requests.
//!
//! This module contains the input document structures (collection tree,
//! requests, variables) and the HAR request records produced from them.

pub mod collection;
pub mod har;
pub mod request;

pub use collection::{
    Collection, Description, Info, Item, ItemGroup, Node, Variable, Version, UNRESOLVED_SENTINEL,
};
pub use har::{HarCookie, HarHeader, HarQueryParam, HarRequest, PostData, PostParam};
pub use request::{
    FileSource, FileSrc, FormParam, GraphqlBody, Header, Headers, Host, PathSegment, QueryParam,
    Request, RequestAuth, RequestBody, RequestUrl, Url, UrlAuth, UrlEncoded, UrlPath,
};
