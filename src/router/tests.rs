use super::{ConflictKind, NodeKind, RouteError, Router, SyntaxErrorKind};
use http::Method;

fn router_with(routes: &[(Method, &str, &'static str)]) -> Router<&'static str> {
    let mut router = Router::new();
    for (method, path, name) in routes {
        router
            .register(method.clone(), path, *name)
            .unwrap_or_else(|e| panic!("failed to register {method} {path}: {e}"));
    }
    router
}

fn handler(router: &Router<&'static str>, method: Method, path: &str) -> Option<&'static str> {
    router.lookup(&method, path).map(|m| *m.handler)
}

#[test]
fn test_registered_static_routes_resolve_to_their_handler() {
    let routes = [
        (Method::GET, "/", "root"),
        (Method::GET, "/user", "user"),
        (Method::GET, "/user/home", "home"),
        (Method::GET, "/order/detail", "order_detail"),
        (Method::POST, "/order/create", "order_create"),
        (Method::POST, "/login", "login"),
        (Method::DELETE, "/user", "delete_user"),
    ];
    let router = router_with(&routes);
    for (method, path, expected) in routes {
        let m = router.lookup(&method, path).unwrap();
        assert_eq!(*m.handler, expected, "{method} {path}");
        assert_eq!(m.route_pattern, path);
        assert!(m.params.is_empty());
    }
    assert_eq!(router.len(), 7);
}

#[test]
fn test_duplicate_route_conflicts() {
    let mut router = router_with(&[(Method::GET, "/user/home", "home")]);
    let err = router.get("/user/home", "again").unwrap_err();
    assert_eq!(
        err,
        RouteError::Conflict {
            path: "/user/home".to_string(),
            kind: ConflictKind::DuplicateRoute,
        }
    );
    assert_eq!(handler(&router, Method::GET, "/user/home"), Some("home"));
    assert_eq!(router.len(), 1);
}

#[test]
fn test_param_name_collision() {
    let mut router = router_with(&[(Method::GET, "/user/:id", "by_id")]);
    let err = router.get("/user/:name", "by_name").unwrap_err();
    assert!(err.is_conflict());
    assert!(matches!(err, RouteError::Conflict { kind: ConflictKind::ParamName { .. }, .. }));
}

#[test]
fn test_param_wildcard_collision() {
    let mut router = router_with(&[(Method::GET, "/user/:id", "by_id")]);
    let err = router.get("/user/*", "any").unwrap_err();
    assert_eq!(
        err,
        RouteError::Conflict {
            path: "/user/*".to_string(),
            kind: ConflictKind::MixedSpecial {
                existing: NodeKind::Param,
                requested: NodeKind::Wildcard,
            },
        }
    );
}

#[test]
fn test_repeated_param_name_last_occurrence_wins() {
    let router = router_with(&[(Method::GET, "/user/:id/abc/:id", "nested")]);
    let m = router.lookup(&Method::GET, "/user/123/abc/456").unwrap();
    assert_eq!(*m.handler, "nested");
    assert_eq!(m.params.len(), 1);
    assert_eq!(m.get_path_param("id"), Some("456"));
}

#[test]
fn test_partial_static_match_is_not_found() {
    let router = router_with(&[(Method::GET, "/a/c", "c")]);
    assert!(router.lookup(&Method::GET, "/a/b").is_none());
    assert!(router.lookup(&Method::GET, "/a").is_none());
}

#[test]
fn test_root_without_handler_is_not_found() {
    let router = router_with(&[(Method::GET, "/a", "a")]);
    assert!(router.lookup(&Method::GET, "/").is_none());
    assert!(router.lookup(&Method::GET, "").is_none());
    // the node itself exists
    let info = router.tree().find_route(&Method::GET, "").unwrap();
    assert_eq!(info.node().segment(), "/");
}

#[test]
fn test_root_and_empty_path_resolve_to_root() {
    let router = router_with(&[(Method::GET, "/", "root")]);
    assert_eq!(handler(&router, Method::GET, "/"), Some("root"));
    assert_eq!(handler(&router, Method::GET, ""), Some("root"));
    assert_eq!(handler(&router, Method::GET, "//"), Some("root"));
}

#[test]
fn test_unregistered_method_is_not_found() {
    let router = router_with(&[(Method::GET, "/user", "user")]);
    assert!(router.lookup(&Method::POST, "/user").is_none());
    assert!(router
        .lookup(&Method::from_bytes(b"PURGE").unwrap(), "/user")
        .is_none());
}

#[test]
fn test_extension_methods_get_their_own_tree() {
    let purge = Method::from_bytes(b"PURGE").unwrap();
    let router = router_with(&[(purge.clone(), "/cache", "purge")]);
    assert_eq!(handler(&router, purge, "/cache"), Some("purge"));
    assert!(router.lookup(&Method::GET, "/cache").is_none());
}

#[test]
fn test_matching_priority() {
    let router = router_with(&[
        (Method::GET, "/user/home", "home"),
        (Method::GET, "/user/:id", "by_id"),
        (Method::GET, r"/order/:no(\d+)", "order"),
        (Method::GET, "/order/latest", "latest"),
        (Method::GET, "/files/*", "files"),
        (Method::GET, "/files/readme", "readme"),
    ]);

    assert_eq!(handler(&router, Method::GET, "/user/home"), Some("home"));
    assert_eq!(handler(&router, Method::GET, "/user/7"), Some("by_id"));

    assert_eq!(handler(&router, Method::GET, "/order/latest"), Some("latest"));
    let m = router.lookup(&Method::GET, "/order/42").unwrap();
    assert_eq!(*m.handler, "order");
    assert_eq!(m.get_path_param("no"), Some("42"));
    assert!(router.lookup(&Method::GET, "/order/abc").is_none());

    assert_eq!(handler(&router, Method::GET, "/files/readme"), Some("readme"));
    assert_eq!(handler(&router, Method::GET, "/files/img/a.png"), Some("files"));
}

#[test]
fn test_regex_segment_must_match_whole_value() {
    let router = router_with(&[(Method::GET, r"/item/:sku([A-Z]{3}\d{2})", "item")]);
    assert!(router.lookup(&Method::GET, "/item/ABC12").is_some());
    assert!(router.lookup(&Method::GET, "/item/xABC12").is_none());
    assert!(router.lookup(&Method::GET, "/item/ABC123").is_none());
}

#[test]
fn test_regex_and_param_share_a_subtree_when_identical() {
    let router = router_with(&[
        (Method::GET, r"/reg/:id(\d+)", "reg"),
        (Method::GET, r"/reg/:id(\d+)/detail", "reg_detail"),
        (Method::GET, "/user/:id", "user"),
        (Method::GET, "/user/:id/detail", "user_detail"),
    ]);
    let m = router.lookup(&Method::GET, "/reg/9/detail").unwrap();
    assert_eq!(*m.handler, "reg_detail");
    assert_eq!(m.get_path_param("id"), Some("9"));
    let m = router.lookup(&Method::GET, "/user/x/detail").unwrap();
    assert_eq!(*m.handler, "user_detail");
    assert_eq!(m.get_path_param("id"), Some("x"));
}

#[test]
fn test_multiple_params_bind_independently() {
    let router = router_with(&[(Method::GET, "/users/:user_id/posts/:post_id", "post")]);
    let m = router.lookup(&Method::GET, "/users/123/posts/456").unwrap();
    assert_eq!(m.get_path_param("user_id"), Some("123"));
    assert_eq!(m.get_path_param("post_id"), Some("456"));
    let map = m.params.to_map();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_syntax_errors() {
    let cases = [
        ("", SyntaxErrorKind::Empty),
        ("user", SyntaxErrorKind::MissingLeadingSlash),
        ("/user/", SyntaxErrorKind::TrailingSlash),
        ("/a//b", SyntaxErrorKind::EmptySegment),
    ];
    for (path, expected) in cases {
        let mut router = Router::new();
        let err = router.get(path, "h").unwrap_err();
        assert_eq!(
            err,
            RouteError::Syntax {
                path: path.to_string(),
                kind: expected,
            }
        );
        assert!(router.is_empty());
    }

    let mut router = Router::new();
    assert!(router.get("/a/:id(\\d+", "h").unwrap_err().is_syntax());
    assert!(router.get("/a/:id([)", "h").unwrap_err().is_syntax());
    assert!(router.is_empty());
}

#[test]
fn test_unbalanced_regex_is_rejected_not_unanchored() {
    let mut router = Router::new();
    for path in [r"/order/:no(\d+)|(x)", "/order/:no(a))"] {
        let err = router.get(path, "order").unwrap_err();
        assert!(
            matches!(
                err,
                RouteError::Syntax {
                    kind: SyntaxErrorKind::InvalidPattern { .. },
                    ..
                }
            ),
            "{path}: {err}"
        );
    }
    assert!(router.is_empty());
    assert!(router.lookup(&Method::GET, "/order/123abc").is_none());
    assert!(router.lookup(&Method::GET, "/order/zzzx").is_none());
}

#[test]
fn test_failed_registration_keeps_existing_routes() {
    let mut router = router_with(&[(Method::GET, "/user/:id", "by_id")]);
    assert!(router.get("/user/*", "any").is_err());
    assert!(router.get(r"/user/:id(\d+)", "reg").is_err());
    assert_eq!(handler(&router, Method::GET, "/user/abc"), Some("by_id"));
    assert_eq!(router.routes().len(), 1);
}

#[test]
fn test_verb_helpers_register_under_their_method() {
    let mut router = Router::new();
    router.get("/r", "get").unwrap();
    router.post("/r", "post").unwrap();
    router.put("/r", "put").unwrap();
    router.delete("/r", "delete").unwrap();
    router.patch("/r", "patch").unwrap();
    router.head("/r", "head").unwrap();
    router.options("/r", "options").unwrap();
    router.trace("/r", "trace").unwrap();

    for (method, expected) in [
        (Method::GET, "get"),
        (Method::POST, "post"),
        (Method::PUT, "put"),
        (Method::DELETE, "delete"),
        (Method::PATCH, "patch"),
        (Method::HEAD, "head"),
        (Method::OPTIONS, "options"),
        (Method::TRACE, "trace"),
    ] {
        assert_eq!(handler(&router, method, "/r"), Some(expected));
    }
    let methods: Vec<_> = router.routes().iter().map(|r| r.method.clone()).collect();
    assert_eq!(methods.len(), 8);
    assert_eq!(methods[0], Method::GET);
    assert_eq!(methods[7], Method::TRACE);
}

#[test]
fn test_handler_identity_is_preserved() {
    #[derive(Debug, PartialEq)]
    struct Endpoint {
        id: u32,
    }
    let mut router = Router::new();
    router.get("/a", Endpoint { id: 1 }).unwrap();
    router.get("/b", Endpoint { id: 2 }).unwrap();

    let first = router.lookup(&Method::GET, "/a").unwrap().handler;
    let again = router.lookup(&Method::GET, "/a").unwrap().handler;
    assert!(std::ptr::eq(first, again));
    assert_eq!(first, &Endpoint { id: 1 });
}
