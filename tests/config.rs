use http::Method;
use oasmodel::filter::{FilterRegistration, filter_with_config};
use oasmodel::model::{Info, OpenApi, Operation, PathItem, Server};
use oasmodel::{FilterError, OasConfig, OasFilter};

struct DeprecateEverything;

impl OasFilter for DeprecateEverything {
    fn filter_operation(&mut self, operation: Operation) -> Option<Operation> {
        Some(operation.with_deprecated(true))
    }
}

inventory::submit! {
    FilterRegistration::new("it.DeprecateEverything", || Box::new(DeprecateEverything))
}

const CONFIG: &str = r#"
mp:
  openapi:
    filter: it.DeprecateEverything
    servers:
      - https://api.example.com
      - https://backup.example.com
    servers.operation.listPets: https://pets.example.com
"#;

fn document() -> OpenApi {
    let mut open_api = OpenApi::new(Info::new("Pets", "1.0.0"))
        .with_servers(vec![Server::new("http://localhost:8080")]);
    open_api.add_path_item(
        "/pets",
        PathItem::default()
            .with_get(Operation::default().with_operation_id("listPets"))
            .with_post(Operation::default().with_operation_id("createPet")),
    );
    open_api
}

#[test]
fn configured_filter_and_servers_apply() {
    let config = OasConfig::from_yaml_str(CONFIG).unwrap();
    assert_eq!(config.filter(), Some("it.DeprecateEverything"));

    let mut open_api = document();
    let summary = filter_with_config(&mut open_api, &config).unwrap();
    assert!(summary.is_some());
    config.apply_servers(&mut open_api);

    let urls: Vec<&str> = open_api
        .servers()
        .unwrap_or_default()
        .iter()
        .filter_map(Server::url)
        .collect();
    assert_eq!(urls, vec!["https://api.example.com", "https://backup.example.com"]);

    let paths = open_api.paths().unwrap();
    let get = paths.operation("/pets", &Method::GET).unwrap();
    assert_eq!(get.deprecated(), Some(true));
    assert_eq!(
        get.servers().and_then(|servers| servers[0].url()),
        Some("https://pets.example.com")
    );
    let post = paths.operation("/pets", &Method::POST).unwrap();
    assert_eq!(post.deprecated(), Some(true));
    assert!(post.servers().is_none());
}

#[test]
fn unknown_filter_is_an_error() {
    let config = OasConfig::new().with("mp.openapi.filter", "it.Missing");
    let mut open_api = document();
    assert!(matches!(
        filter_with_config(&mut open_api, &config),
        Err(FilterError::UnknownFilter(_))
    ));
}

#[test]
fn no_filter_configured() {
    let mut open_api = document();
    assert_eq!(
        filter_with_config(&mut open_api, &OasConfig::new()).unwrap(),
        None
    );
}
