use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use serde::{Deserialize, Serialize};
use wordchain_core::model::chain::Chain;
use wordchain_core::model::generation::Generation;
use wordchain_core::text::{assemble, tokenize};

/// Default prefix length for the chain the server starts with.
const DEFAULT_PREFIX_LENGTH: usize = 1;

/// Cap on generated tokens per request; chains can cycle forever.
const DEFAULT_MAX_TOKENS: usize = 100;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	direction: Option<String>, // "forward" (default) or "backward"
	seed: Option<String>,      // whitespace-separated starting context
	max_tokens: Option<usize>,
}

#[derive(Deserialize)]
struct OptionsParams {
	direction: Option<String>,
	seed: Option<String>,
}

#[derive(Deserialize)]
struct ResetParams {
	prefix_length: Option<usize>,
}

#[derive(Serialize)]
struct StatsResponse {
	prefix_length: usize,
	forward_contexts: usize,
	backward_contexts: usize,
}

struct SharedData {
	chain: Chain,
}

/// Walk direction requested by a client.
enum Direction {
	Forward,
	Backward,
}

impl Direction {
	fn parse(raw: &Option<String>) -> Result<Self, String> {
		match raw.as_deref() {
			None => Ok(Direction::Forward),
			Some(s) if s.eq_ignore_ascii_case("forward") => Ok(Direction::Forward),
			Some(s) if s.eq_ignore_ascii_case("backward") => Ok(Direction::Backward),
			Some(s) => Err(format!("Unknown direction '{s}', expected 'forward' or 'backward'")),
		}
	}
}

/// Builds a cursor over `chain` for the requested direction and seed.
fn make_generation<'a>(chain: &'a Chain, direction: &Direction, seed: &Option<String>) -> Generation<'a> {
	let seed_tokens = seed.as_deref().map(tokenize).unwrap_or_default();
	match direction {
		Direction::Forward => chain.generate_forward_from_prefix(&seed_tokens),
		Direction::Backward => chain.generate_backward_from_prefix(&seed_tokens),
	}
}

/// HTTP PUT endpoint `/v1/build`
///
/// Tokenizes the request body and folds it into the shared chain.
/// Repeated calls accumulate; use `/v1/reset` to start over.
#[put("/v1/build")]
async fn put_build(data: web::Data<Mutex<SharedData>>, body: String) -> impl Responder {
	let tokens = tokenize(&body);
	if tokens.is_empty() {
		return HttpResponse::BadRequest().body("Empty input text");
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	shared_data.chain.build(&tokens);
	HttpResponse::Ok().body(format!("Recorded {} tokens", tokens.len()))
}

/// HTTP PUT endpoint `/v1/reset`
///
/// Replaces the shared chain with a fresh one, optionally changing the
/// prefix length.
#[put("/v1/reset")]
async fn put_reset(data: web::Data<Mutex<SharedData>>, query: web::Query<ResetParams>) -> impl Responder {
	let prefix_length = query.prefix_length.unwrap_or(DEFAULT_PREFIX_LENGTH);

	let chain = match Chain::new(prefix_length) {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	shared_data.chain = chain;
	HttpResponse::Ok().body("Chain reset")
}

/// HTTP GET endpoint `/v1/generate`
///
/// Walks the chain from the (optionally seeded) context and returns the
/// assembled text. The walk stops at a dead end or after `max_tokens`.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let direction = match Direction::parse(&query.direction) {
		Ok(d) => d,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};
	let max_tokens = query.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	let generation = make_generation(&shared_data.chain, &direction, &query.seed);
	let tokens: Vec<String> = generation.take(max_tokens).collect();
	HttpResponse::Ok().body(assemble(&tokens))
}

/// HTTP GET endpoint `/v1/options`
///
/// Returns the recorded continuations for the seeded context as a JSON
/// array, duplicates and order preserved.
#[get("/v1/options")]
async fn get_options(data: web::Data<Mutex<SharedData>>, query: web::Query<OptionsParams>) -> impl Responder {
	let direction = match Direction::parse(&query.direction) {
		Ok(d) => d,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	let generation = make_generation(&shared_data.chain, &direction, &query.seed);
	HttpResponse::Ok().json(generation.options())
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns the context counts of both transition tables.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Chain lock failed"),
	};

	HttpResponse::Ok().json(StatsResponse {
		prefix_length: shared_data.chain.prefix_length(),
		forward_contexts: shared_data.chain.forward_contexts(),
		backward_contexts: shared_data.chain.backward_contexts(),
	})
}

/// Main entry point for the server.
///
/// Starts with an empty length-1 chain, wraps it in a `Mutex` so builds
/// are serialized against reads, and serves the chain over HTTP.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The chain is in-memory only and lost on shutdown.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let shared_data = SharedData {
		// Length 1 is always valid.
		chain: Chain::new(DEFAULT_PREFIX_LENGTH).expect("default prefix length"),
	};
	let shared_chain = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_chain.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(put_build)
			.service(put_reset)
			.service(get_generated)
			.service(get_options)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
