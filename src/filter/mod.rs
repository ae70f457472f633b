//! The filter pass: one hook per element type, run once over a finished
//! document before it is written out.

pub mod registry;
pub mod traverser;

pub use registry::{FilterRegistration, FilterRegistry, filter_with_config};
pub use traverser::{FilterSummary, filter_document};

use crate::model::{
    ApiResponse, Callback, Header, Link, OpenApi, Operation, Parameter, PathItem, RequestBody,
    Schema, SecurityScheme, Server, Tag,
};

/// Inspects and rewrites the elements of a document.
///
/// Each element hook receives the element by value and returns what should
/// stand in its place. Returning `None` removes the element from the map,
/// list or field that held it. The defaults keep every element unchanged.
///
/// [`filter_document`] calls the hooks children first, so a hook sees its
/// element with every nested element already filtered, and calls
/// [`OasFilter::filter_open_api`] once at the very end.
pub trait OasFilter {
    fn filter_path_item(&mut self, path_item: PathItem) -> Option<PathItem> {
        Some(path_item)
    }

    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        Some(operation)
    }

    fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
        Some(parameter)
    }

    fn filter_header(&mut self, header: Header) -> Option<Header> {
        Some(header)
    }

    fn filter_request_body(&mut self, request_body: RequestBody) -> Option<RequestBody> {
        Some(request_body)
    }

    fn filter_api_response(&mut self, api_response: ApiResponse) -> Option<ApiResponse> {
        Some(api_response)
    }

    fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
        Some(schema)
    }

    fn filter_security_scheme(&mut self, security_scheme: SecurityScheme) -> Option<SecurityScheme> {
        Some(security_scheme)
    }

    fn filter_server(&mut self, server: Server) -> Option<Server> {
        Some(server)
    }

    fn filter_tag(&mut self, tag: Tag) -> Option<Tag> {
        Some(tag)
    }

    fn filter_link(&mut self, link: Link) -> Option<Link> {
        Some(link)
    }

    fn filter_callback(&mut self, callback: Callback) -> Option<Callback> {
        Some(callback)
    }

    /// The document root. It cannot be removed, only changed in place.
    fn filter_open_api(&mut self, _open_api: &mut OpenApi) {}
}
