use crate::filter::OasFilter;
use crate::model::{
    ApiResponse, ApiResponses, Callback, Components, Content, Encoding, Header, Link, MediaType,
    OpenApi, Operation, Parameter, PathItem, RequestBody, Schema, SecurityScheme, Server, Tag,
};
use crate::types::RefOr;
use crate::types::json_path::JsonPath;
use crate::{COMPONENTS_FIELD, PATHS_FIELD, REF_FIELD};
use indexmap::IndexMap;

/// Counts of one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Elements handed to a hook, the root excluded.
    pub visited: usize,
    /// Elements a hook removed.
    pub removed: usize,
}

/// Runs `filter` over every element of `open_api`.
///
/// Traversal is post-order: the nested elements of an element are filtered,
/// and removals among them applied, before the element's own hook runs.
/// Removing an element therefore never leaves an unfiltered child behind.
/// Elements held as `$ref` are skipped; the component they point to is
/// filtered where it is declared. `filter_open_api` runs last.
///
/// A hook that panics unwinds through this function.
pub fn filter_document(open_api: &mut OpenApi, filter: &mut dyn OasFilter) -> FilterSummary {
    let summary = traverse(open_api, filter);
    log::info!(
        "Filter pass visited {} elements and removed {}",
        summary.visited,
        summary.removed
    );
    summary
}

/// The walk behind [`filter_document`], without the pass log.
pub(crate) fn traverse(open_api: &mut OpenApi, filter: &mut dyn OasFilter) -> FilterSummary {
    let mut traverser = FilterTraverser {
        filter,
        path: JsonPath::new(),
        summary: FilterSummary::default(),
    };
    traverser.open_api(open_api);
    traverser.summary
}

struct FilterTraverser<'f> {
    filter: &'f mut dyn OasFilter,
    /// Location of the element being visited, for log records.
    path: JsonPath,
    summary: FilterSummary,
}

impl<'f> FilterTraverser<'f> {
    /// Hands `item` to a hook and stores what comes back.
    ///
    /// # Parameters
    /// - `item`: The element, already stripped of removed children
    /// - `hook`: The [`OasFilter`] method for the element's type
    ///
    /// # Returns
    /// `false` when the hook removed the element; the caller drops it from
    /// its container.
    fn apply<T, F>(&mut self, item: &mut T, hook: F) -> bool
    where
        T: Default,
        F: FnOnce(&mut (dyn OasFilter + 'f), T) -> Option<T>,
    {
        self.summary.visited += 1;
        let taken = std::mem::take(item);
        match hook(&mut *self.filter, taken) {
            Some(kept) => {
                *item = kept;
                true
            }
            None => {
                self.summary.removed += 1;
                log::debug!("Filter removed #/{}", self.path.format_path());
                false
            }
        }
    }

    fn field<T, F>(&mut self, name: &str, slot: &mut Option<T>, mut visit: F)
    where
        F: FnMut(&mut Self, &mut T) -> bool,
    {
        let keep = match slot.as_mut() {
            Some(value) => {
                self.path.add(name);
                let keep = visit(self, value);
                self.path.pop();
                keep
            }
            None => true,
        };
        if !keep {
            *slot = None;
        }
    }

    fn entries<T, F>(&mut self, entries: &mut IndexMap<String, T>, mut visit: F)
    where
        F: FnMut(&mut Self, &mut T) -> bool,
    {
        entries.retain(|name, entry| {
            self.path.add(name);
            let keep = visit(self, entry);
            self.path.pop();
            keep
        });
    }

    fn map<T, F>(&mut self, name: &str, map: &mut Option<IndexMap<String, T>>, visit: F)
    where
        F: FnMut(&mut Self, &mut T) -> bool,
    {
        if let Some(entries) = map.as_mut() {
            self.path.add(name);
            self.entries(entries, visit);
            self.path.pop();
        }
    }

    fn list<T, F>(&mut self, name: &str, list: &mut Option<Vec<T>>, mut visit: F)
    where
        F: FnMut(&mut Self, &mut T) -> bool,
    {
        if let Some(entries) = list.as_mut() {
            self.path.add(name);
            let mut index = 0;
            entries.retain_mut(|entry| {
                self.path.add(index.to_string());
                index += 1;
                let keep = visit(self, entry);
                self.path.pop();
                keep
            });
            self.path.pop();
        }
    }

    fn open_api(&mut self, open_api: &mut OpenApi) {
        self.list("servers", &mut open_api.servers, |t, server| t.server(server));
        if let Some(paths) = open_api.paths.as_mut() {
            self.path.add(PATHS_FIELD);
            self.entries(&mut paths.path_items, |t, item| t.path_item(item));
            self.path.pop();
        }
        self.map("webhooks", &mut open_api.webhooks, |t, item| t.path_item(item));
        if let Some(components) = open_api.components.as_mut() {
            self.path.add(COMPONENTS_FIELD);
            self.components(components);
            self.path.pop();
        }
        self.list("tags", &mut open_api.tags, |t, tag| t.tag(tag));
        self.filter.filter_open_api(open_api);
    }

    fn components(&mut self, components: &mut Components) {
        self.map("schemas", &mut components.schemas, |t, schema| t.schema(schema));
        self.map("responses", &mut components.responses, |t, response| {
            t.api_response(response)
        });
        self.map("parameters", &mut components.parameters, |t, parameter| {
            t.parameter(parameter)
        });
        self.map("requestBodies", &mut components.request_bodies, |t, body| {
            t.request_body(body)
        });
        self.map("headers", &mut components.headers, |t, header| t.header(header));
        self.map("securitySchemes", &mut components.security_schemes, |t, scheme| {
            t.security_scheme(scheme)
        });
        self.map("links", &mut components.links, |t, link| t.link(link));
        self.map("callbacks", &mut components.callbacks, |t, callback| {
            t.callback(callback)
        });
        self.map("pathItems", &mut components.path_items, |t, item| t.path_item(item));
    }

    fn skip_reference<T>(&self, slot: &RefOr<T>) {
        if let Some(reference) = slot.reference() {
            log::debug!(
                "Not filtering #/{} ({} {})",
                self.path.format_path(),
                REF_FIELD,
                reference.reference()
            );
        }
    }

    fn path_item(&mut self, slot: &mut RefOr<PathItem>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(item) = slot else {
            return true;
        };
        for (method, operation) in item.operation_slots_mut() {
            let name = method.as_str().to_ascii_lowercase();
            self.field(&name, operation, |t, operation| t.operation(operation));
        }
        self.list("servers", &mut item.servers, |t, server| t.server(server));
        self.list("parameters", &mut item.parameters, |t, parameter| {
            t.parameter(parameter)
        });
        self.apply(item, |filter, item| filter.filter_path_item(item))
    }

    fn operation(&mut self, operation: &mut Operation) -> bool {
        self.list("parameters", &mut operation.parameters, |t, parameter| {
            t.parameter(parameter)
        });
        self.field("requestBody", &mut operation.request_body, |t, body| {
            t.request_body(body)
        });
        self.field("responses", &mut operation.responses, |t, responses| {
            t.api_responses(responses);
            true
        });
        self.map("callbacks", &mut operation.callbacks, |t, callback| {
            t.callback(callback)
        });
        self.list("servers", &mut operation.servers, |t, server| t.server(server));
        self.apply(operation, |filter, operation| filter.filter_operation(operation))
    }

    fn api_responses(&mut self, responses: &mut ApiResponses) {
        self.field("default", &mut responses.default_response, |t, response| {
            t.api_response(response)
        });
        self.entries(&mut responses.responses, |t, response| t.api_response(response));
    }

    fn api_response(&mut self, slot: &mut RefOr<ApiResponse>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(response) = slot else {
            return true;
        };
        self.map("headers", &mut response.headers, |t, header| t.header(header));
        self.field("content", &mut response.content, |t, content| {
            t.content(content);
            true
        });
        self.map("links", &mut response.links, |t, link| t.link(link));
        self.apply(response, |filter, response| filter.filter_api_response(response))
    }

    fn parameter(&mut self, slot: &mut RefOr<Parameter>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(parameter) = slot else {
            return true;
        };
        self.field("schema", &mut parameter.schema, |t, schema| t.schema(schema));
        self.field("content", &mut parameter.content, |t, content| {
            t.content(content);
            true
        });
        self.apply(parameter, |filter, parameter| filter.filter_parameter(parameter))
    }

    fn header(&mut self, slot: &mut RefOr<Header>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(header) = slot else {
            return true;
        };
        self.field("schema", &mut header.schema, |t, schema| t.schema(schema));
        self.field("content", &mut header.content, |t, content| {
            t.content(content);
            true
        });
        self.apply(header, |filter, header| filter.filter_header(header))
    }

    fn request_body(&mut self, slot: &mut RefOr<RequestBody>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(body) = slot else {
            return true;
        };
        self.field("content", &mut body.content, |t, content| {
            t.content(content);
            true
        });
        self.apply(body, |filter, body| filter.filter_request_body(body))
    }

    fn content(&mut self, content: &mut Content) {
        self.entries(&mut content.media_types, |t, media_type| {
            t.media_type(media_type);
            true
        });
    }

    fn media_type(&mut self, media_type: &mut MediaType) {
        self.field("schema", &mut media_type.schema, |t, schema| t.schema(schema));
        self.map("encoding", &mut media_type.encoding, |t, encoding| {
            t.encoding(encoding);
            true
        });
    }

    fn encoding(&mut self, encoding: &mut Encoding) {
        self.map("headers", &mut encoding.headers, |t, header| t.header(header));
    }

    fn schema(&mut self, slot: &mut RefOr<Schema>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(schema) = slot else {
            return true;
        };
        schema.retain_subschemas(&mut |child| self.schema(child));
        self.apply(schema, |filter, schema| filter.filter_schema(schema))
    }

    fn security_scheme(&mut self, slot: &mut RefOr<SecurityScheme>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(scheme) = slot else {
            return true;
        };
        self.apply(scheme, |filter, scheme| filter.filter_security_scheme(scheme))
    }

    fn link(&mut self, slot: &mut RefOr<Link>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(link) = slot else {
            return true;
        };
        self.field("server", &mut link.server, |t, server| t.server(server));
        self.apply(link, |filter, link| filter.filter_link(link))
    }

    fn callback(&mut self, slot: &mut RefOr<Callback>) -> bool {
        self.skip_reference(slot);
        let RefOr::Item(callback) = slot else {
            return true;
        };
        self.entries(&mut callback.path_items, |t, item| t.path_item(item));
        self.apply(callback, |filter, callback| filter.filter_callback(callback))
    }

    fn server(&mut self, server: &mut Server) -> bool {
        self.apply(server, |filter, server| filter.filter_server(server))
    }

    fn tag(&mut self, tag: &mut Tag) -> bool {
        self.apply(tag, |filter, tag| filter.filter_tag(tag))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{Info, SchemaType};
    use crate::types::ParameterIn;
    use http::Method;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl OasFilter for Recorder {
        fn filter_path_item(&mut self, path_item: PathItem) -> Option<PathItem> {
            self.calls.push("path_item");
            Some(path_item)
        }

        fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
            self.calls.push("operation");
            Some(operation)
        }

        fn filter_parameter(&mut self, parameter: Parameter) -> Option<Parameter> {
            self.calls.push("parameter");
            Some(parameter)
        }

        fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
            self.calls.push("schema");
            Some(schema)
        }

        fn filter_open_api(&mut self, _open_api: &mut OpenApi) {
            self.calls.push("open_api");
        }
    }

    fn document() -> OpenApi {
        let operation = Operation::default()
            .with_parameters(vec![RefOr::Item(
                Parameter::new("id", ParameterIn::Path)
                    .with_schema(Schema::of_type(SchemaType::String)),
            )]);
        let mut document = OpenApi::new(Info::new("Pets", "1.0.0"));
        document.add_path_item("/pets/{id}", PathItem::default().with_get(operation));
        document
    }

    #[test]
    fn test_children_before_parents() {
        let mut recorder = Recorder::default();
        let summary = filter_document(&mut document(), &mut recorder);
        assert_eq!(
            recorder.calls,
            vec!["schema", "parameter", "operation", "path_item", "open_api"]
        );
        assert_eq!(summary, FilterSummary { visited: 4, removed: 0 });
    }

    struct DropStrings;

    impl OasFilter for DropStrings {
        fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
            match schema.schema_type() {
                Some([SchemaType::String]) => None,
                _ => Some(schema),
            }
        }
    }

    #[test]
    fn test_removed_schema_leaves_parameter() {
        let mut document = document();
        let summary = filter_document(&mut document, &mut DropStrings);
        assert_eq!(summary.removed, 1);
        let parameter = document
            .paths()
            .and_then(|paths| paths.operation("/pets/{id}", &Method::GET))
            .and_then(Operation::parameters)
            .and_then(|parameters| parameters.first())
            .and_then(RefOr::as_item);
        assert!(parameter.is_some_and(|parameter| parameter.schema().is_none()));
    }

    struct DropReferencedPet;

    impl OasFilter for DropReferencedPet {
        fn filter_schema(&mut self, schema: Schema) -> Option<Schema> {
            if schema.title() == Some("Pet") {
                None
            } else {
                Some(schema)
            }
        }
    }

    #[test]
    fn test_references_are_not_filtered() {
        let mut document = document();
        let mut components = Components::default();
        components.add_schema("Pet", Schema::default().with_title("Pet"));
        document.set_components(Some(components));
        if let Some(operation) = document
            .paths_mut()
            .and_then(|paths| paths.operation_mut("/pets/{id}", &Method::GET))
        {
            operation.set_request_body(Some(RefOr::Item(RequestBody::default().with_content(
                Content::of("application/json", RefOr::<Schema>::component_ref("Pet")),
            ))));
        }
        filter_document(&mut document, &mut DropReferencedPet);
        let components = document.components().unwrap();
        assert!(components.schema("Pet").is_none());
        let body = document
            .paths()
            .and_then(|paths| paths.operation("/pets/{id}", &Method::GET))
            .and_then(Operation::request_body)
            .and_then(RefOr::as_item)
            .and_then(RequestBody::content)
            .and_then(|content| content.media_type("application/json"))
            .and_then(MediaType::schema);
        assert!(body.is_some_and(RefOr::is_ref));
    }
}
