use crate::error::ModelError;
use crate::model::{Operation, Parameter, Server};
use crate::types::{Extensions, RefOr, Referenceable};
use http::Method;
use indexmap::IndexMap;
use serde::Serialize;

/// The methods a path item can describe, in document order.
pub const PATH_ITEM_METHODS: [Method; 8] = [
    Method::GET,
    Method::PUT,
    Method::POST,
    Method::DELETE,
    Method::OPTIONS,
    Method::HEAD,
    Method::PATCH,
    Method::TRACE,
];

/// Relative paths (`/pets/{id}`) mapped to what they accept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paths {
    #[serde(flatten)]
    pub(crate) path_items: IndexMap<String, RefOr<PathItem>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

named_collection!(Paths, path_items / path_item: RefOr<PathItem>);

impl Paths {
    /// The inline operation for `method` on `path`, if any.
    pub fn operation(&self, path: &str, method: &Method) -> Option<&Operation> {
        self.path_items
            .get(path)
            .and_then(RefOr::as_item)
            .and_then(|item| item.operation(method))
    }

    pub fn operation_mut(&mut self, path: &str, method: &Method) -> Option<&mut Operation> {
        self.path_items
            .get_mut(path)
            .and_then(RefOr::as_item_mut)
            .and_then(|item| item.operation_mut(method))
    }
}

/// The operations available on a single path.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) delete: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) options: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) head: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) patch: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trace: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) servers: Option<Vec<Server>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) parameters: Option<Vec<RefOr<Parameter>>>,
    #[serde(flatten)]
    pub(crate) extensions: Extensions,
}

accessors!(PathItem {
    str summary: String,
    str description: String,
    opt get: Operation,
    opt put: Operation,
    opt post: Operation,
    opt delete: Operation,
    opt options: Operation,
    opt head: Operation,
    opt patch: Operation,
    opt trace: Operation,
    list servers / server: Server,
    list parameters / parameter: RefOr<Parameter>,
});

impl PathItem {
    fn slot(&self, method: &Method) -> Option<&Option<Operation>> {
        match *method {
            Method::GET => Some(&self.get),
            Method::PUT => Some(&self.put),
            Method::POST => Some(&self.post),
            Method::DELETE => Some(&self.delete),
            Method::OPTIONS => Some(&self.options),
            Method::HEAD => Some(&self.head),
            Method::PATCH => Some(&self.patch),
            Method::TRACE => Some(&self.trace),
            _ => None,
        }
    }

    fn slot_mut(&mut self, method: &Method) -> Option<&mut Option<Operation>> {
        match *method {
            Method::GET => Some(&mut self.get),
            Method::PUT => Some(&mut self.put),
            Method::POST => Some(&mut self.post),
            Method::DELETE => Some(&mut self.delete),
            Method::OPTIONS => Some(&mut self.options),
            Method::HEAD => Some(&mut self.head),
            Method::PATCH => Some(&mut self.patch),
            Method::TRACE => Some(&mut self.trace),
            _ => None,
        }
    }

    pub fn operation(&self, method: &Method) -> Option<&Operation> {
        self.slot(method).and_then(Option::as_ref)
    }

    pub fn operation_mut(&mut self, method: &Method) -> Option<&mut Operation> {
        self.slot_mut(method).and_then(Option::as_mut)
    }

    /// Stores (or with `None`, clears) the operation for `method`.
    /// Methods without a slot in a path item, such as `CONNECT`, are rejected.
    pub fn set_operation(
        &mut self,
        method: &Method,
        operation: Option<Operation>,
    ) -> Result<(), ModelError> {
        match self.slot_mut(method) {
            Some(slot) => {
                *slot = operation;
                Ok(())
            }
            None => Err(ModelError::unsupported_method(method)),
        }
    }

    /// Declared operations in document order.
    pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
        PATH_ITEM_METHODS
            .iter()
            .filter_map(move |method| self.operation(method).map(|op| (method.clone(), op)))
    }

    /// Mutable access to every operation slot, declared or not, in document order.
    pub(crate) fn operation_slots_mut(&mut self) -> [(Method, &mut Option<Operation>); 8] {
        [
            (Method::GET, &mut self.get),
            (Method::PUT, &mut self.put),
            (Method::POST, &mut self.post),
            (Method::DELETE, &mut self.delete),
            (Method::OPTIONS, &mut self.options),
            (Method::HEAD, &mut self.head),
            (Method::PATCH, &mut self.patch),
            (Method::TRACE, &mut self.trace),
        ]
    }
}

impl Referenceable for PathItem {
    const COMPONENT: &'static str = "pathItems";
}

extensible!(Paths, PathItem);

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operations_by_method() {
        let mut item = PathItem::default();
        item.set_operation(&Method::POST, Some(Operation::default().with_operation_id("create")))
            .unwrap();
        item.set_operation(&Method::GET, Some(Operation::default().with_operation_id("list")))
            .unwrap();
        let ids: Vec<(Method, Option<&str>)> = item
            .operations()
            .map(|(method, op)| (method, op.operation_id()))
            .collect();
        assert_eq!(
            ids,
            vec![(Method::GET, Some("list")), (Method::POST, Some("create"))]
        );
        assert_eq!(item.get().and_then(Operation::operation_id), Some("list"));
    }

    #[test]
    fn test_connect_is_rejected() {
        let mut item = PathItem::default();
        assert!(item.set_operation(&Method::CONNECT, Some(Operation::default())).is_err());
        assert_eq!(item.operations().count(), 0);
    }

    #[test]
    fn test_paths_operation_lookup() {
        let paths = Paths::default().with_path_item(
            "/pets",
            PathItem::default().with_get(Operation::default().with_summary("List pets")),
        );
        assert_eq!(
            paths.operation("/pets", &Method::GET).and_then(Operation::summary),
            Some("List pets")
        );
        assert!(paths.operation("/pets", &Method::DELETE).is_none());
        assert_eq!(
            serde_json::to_value(&paths).unwrap(),
            json!({ "/pets": { "get": { "summary": "List pets" } } })
        );
    }
}
