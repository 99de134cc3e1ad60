use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, put, web};

use rs_suggest_core::engine::session::SuggestionSession;
use rs_suggest_core::io::list_files;
use serde::Deserialize;

/// Directory the corpus `.txt` files are served from.
const DATA_DIR: &str = "./data";

/// Struct representing query parameters for the `/v1/suggest` endpoint
#[derive(Deserialize)]
struct SuggestParams {
	prefix: Option<String>,
}

#[derive(Deserialize)]
struct CorpusQuery {
	names: Option<String>,
}

struct SharedData {
	session: SuggestionSession,
}

/// HTTP GET endpoint `/v1/suggest`
///
/// Tokenizes the `prefix` query parameter and returns every stored
/// continuation, one suggestion per line. A missing or empty `prefix`
/// means the empty prefix and lists every recorded sequence. An unknown
/// prefix is the ordinary no-suggestions outcome, spelled 404.
#[get("/v1/suggest")]
async fn get_suggestions(data: web::Data<Mutex<SharedData>>, query: web::Query<SuggestParams>) -> impl Responder {
	let prefix = query.prefix.as_deref().unwrap_or("");

	let shared_data = match data.lock() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().body("Session lock failed"),
	};

	match shared_data.session.suggest(prefix) {
		Some(suggestions) => HttpResponse::Ok().body(suggestions.join("\n")),
		None => HttpResponse::NotFound().body("No suggestions found."),
	}
}

#[get("/v1/corpora")]
async fn get_corpora() -> impl Responder {
	match list_files(DATA_DIR, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list corpora"),
	}
}

#[get("/v1/loaded_corpora")]
async fn get_loaded_corpora(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().body("Session lock failed"),
	};
	HttpResponse::Ok().body(shared_data.session.corpus_names().join("\n"))
}

/// HTTP PUT endpoint `/v1/load_corpora`
///
/// Rebuilds the session from scratch with the comma-separated corpus
/// names in `names`, resolved against the data directory.
#[put("/v1/load_corpora")]
async fn put_corpora(data: web::Data<Mutex<SharedData>>, query: web::Query<CorpusQuery>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(s) => s,
		Err(_) => return HttpResponse::InternalServerError().body("Session lock failed"),
	};

	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty corpus name"),
	};

	let corpus_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	shared_data.session = SuggestionSession::default();
	for name in corpus_names {
		let corpus_path = format!("{DATA_DIR}/{name}.txt");
		match shared_data.session.load_corpus(corpus_path) {
			Ok(_) => (),
			Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load corpus: {e}")),
		}
	}

	HttpResponse::Ok().body("Corpora loaded successfully")
}

/// Main entry point for the server.
///
/// Loads every corpus from the data directory, wraps the session in a
/// `Mutex` (one writer phase at load time, read-only queries afterwards)
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - A missing data directory is not fatal; the session starts empty and
///   corpora can be loaded later through `/v1/load_corpora`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let session = match SuggestionSession::new(DATA_DIR) {
		Ok(session) => {
			log::info!(
				"serving {} corpora, {} sequences",
				session.corpus_names().len(),
				session.lines_ingested()
			);
			session
		}
		Err(e) => {
			log::warn!("no corpora loaded at startup: {e}");
			SuggestionSession::default()
		}
	};
	let shared_data = web::Data::new(Mutex::new(SharedData { session }));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_suggestions)
			.service(get_corpora)
			.service(put_corpora)
			.service(get_loaded_corpora)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{test, web};

	fn demo_data() -> web::Data<Mutex<SharedData>> {
		let mut session = SuggestionSession::default();
		session.ingest_line("hi how are you");
		session.ingest_line("hi i am great");
		session.ingest_line("what are you");
		web::Data::new(Mutex::new(SharedData { session }))
	}

	#[actix_web::test]
	async fn suggest_returns_continuations() {
		let app = test::init_service(App::new().app_data(demo_data()).service(get_suggestions)).await;

		let req = test::TestRequest::get().uri("/v1/suggest?prefix=hi").to_request();
		let resp = test::call_service(&app, req).await;

		assert!(resp.status().is_success());
		let body = test::read_body(resp).await;
		assert_eq!(body, "how are you\ni am great");
	}

	#[actix_web::test]
	async fn suggest_spells_a_miss_as_not_found() {
		let app = test::init_service(App::new().app_data(demo_data()).service(get_suggestions)).await;

		let req = test::TestRequest::get().uri("/v1/suggest?prefix=bye").to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
		let body = test::read_body(resp).await;
		assert_eq!(body, "No suggestions found.");
	}

	#[actix_web::test]
	async fn missing_prefix_lists_everything() {
		let app = test::init_service(App::new().app_data(demo_data()).service(get_suggestions)).await;

		let req = test::TestRequest::get().uri("/v1/suggest").to_request();
		let resp = test::call_service(&app, req).await;

		assert!(resp.status().is_success());
		let body = test::read_body(resp).await;
		assert_eq!(body, "hi how are you\nhi i am great\nwhat are you");
	}

	#[actix_web::test]
	async fn load_corpora_rejects_missing_names() {
		let app = test::init_service(App::new().app_data(demo_data()).service(put_corpora)).await;

		let req = test::TestRequest::put().uri("/v1/load_corpora").to_request();
		let resp = test::call_service(&app, req).await;

		assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
	}
}
