//! Full recipe lifecycle against a live server.
//!
//! # Design
//! Starts the recipe server on a random port over an in-memory SQLite store,
//! then exercises every client operation over real HTTP using ureq.

use recipe_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Recipe, RecipeClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// 4xx/5xx responses come back as data so the client interprets status.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn start_server() -> RecipeClient {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let store = recipe_server::open_store("sqlite::memory:", 1).await.unwrap();
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            recipe_server::run(listener, store).await
        })
        .unwrap();
    });

    RecipeClient::new(&format!("http://{addr}"))
}

fn recipe(name: &str, ingredients: &[&str]) -> Recipe {
    Recipe {
        name: name.to_string(),
        difficulty: 1,
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        procedure: format!("Make {name}"),
        image: String::new(),
    }
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn recipe_lifecycle() {
    let client = start_server();

    // Step 1: list - empty.
    let all = client.parse_list_recipes(execute(client.build_list_recipes())).unwrap();
    assert!(all.is_empty(), "expected empty list");

    // Step 2: create two recipes sharing "bread".
    let toast = recipe("Toast", &["bread", "butter"]);
    let req = client.build_create_recipe(&toast).unwrap();
    let created = client.parse_create_recipe(execute(req)).unwrap();
    assert_eq!(created.recipe, toast);
    let toast_id = created.id;

    let req = client.build_create_recipe(&recipe("Sandwich", &["bread", "ham"])).unwrap();
    let sandwich_id = client.parse_create_recipe(execute(req)).unwrap().id;

    // Step 3: get round-trips every field.
    let fetched = client.parse_get_recipe(execute(client.build_get_recipe(&toast_id))).unwrap();
    assert_eq!(fetched.name, toast.name);
    assert_eq!(fetched.difficulty, toast.difficulty);
    assert_eq!(fetched.procedure, toast.procedure);
    assert_eq!(fetched.image, toast.image);
    assert_eq!(sorted(fetched.ingredients), sorted(toast.ingredients.clone()));

    // Step 4: search hits exactly one recipe.
    let req = client.build_search_recipes("andwic");
    let hits = client.parse_search_recipes(execute(req)).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, sandwich_id);

    let req = client.build_search_recipes("pizza");
    assert!(client.parse_search_recipes(execute(req)).unwrap().is_empty());

    // Step 5: update to a disjoint ingredient set.
    let replacement = recipe("Cinnamon toast", &["cinnamon", "sugar"]);
    let req = client.build_update_recipe(&toast_id, &replacement).unwrap();
    let echoed = client.parse_update_recipe(execute(req)).unwrap();
    assert_eq!(echoed, replacement);

    let fetched = client.parse_get_recipe(execute(client.build_get_recipe(&toast_id))).unwrap();
    assert_eq!(fetched.name, "Cinnamon toast");
    assert_eq!(
        sorted(fetched.ingredients),
        vec!["cinnamon".to_string(), "sugar".to_string()]
    );

    // Step 6: delete leaves the other recipe's ingredients alone.
    client.parse_delete_recipe(execute(client.build_delete_recipe(&toast_id))).unwrap();
    let err = client
        .parse_get_recipe(execute(client.build_get_recipe(&toast_id)))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let sandwich = client
        .parse_get_recipe(execute(client.build_get_recipe(&sandwich_id)))
        .unwrap();
    assert_eq!(sorted(sandwich.ingredients), vec!["bread".to_string(), "ham".to_string()]);

    // Step 7: list - only the sandwich remains.
    let all = client.parse_list_recipes(execute(client.build_list_recipes())).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, sandwich_id);
}

#[test]
fn unknown_id_is_not_found() {
    let client = start_server();

    let err = client
        .parse_get_recipe(execute(client.build_get_recipe("nonexistent-id")))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    let req = client.build_update_recipe("nonexistent-id", &recipe("Ghost", &[])).unwrap();
    let err = client.parse_update_recipe(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
}
