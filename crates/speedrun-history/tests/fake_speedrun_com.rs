//! Drives the real HTTP client against a fake speedrun.com served by `axum`.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::num::NonZero;
use std::sync::Arc;
use std::sync::atomic::{self, AtomicBool, AtomicUsize};
use std::time::Duration;

use anyhow::Context;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use speedrun::{CategoryId, GameId, VariableSelections};
use speedrun_history::config::SpeedrunComConfig;
use speedrun_history::selection::Selection;
use speedrun_history::services::SpeedrunComService;
use speedrun_history::services::speedrun_com::FetchError;
use tokio::net::TcpListener;
use url::Url;

/// Pages at or past this offset are refused.
const OFFSET_LIMIT: usize = 100;

/// Raw body so the variable values keep their upstream order.
const GAME: &str = r#"{
	"data": {
		"id": "o1y9wo6q",
		"names": { "international": "Super Mario 64" },
		"categories": { "data": [{ "id": "wkpoo02r", "name": "120 Star", "type": "per-game" }] },
		"variables": {
			"data": [{
				"id": "e8m7em86",
				"name": "Platform",
				"category": "wkpoo02r",
				"mandatory": true,
				"values": { "values": { "zqoyz021": { "label": "N64" }, "9qj7z0oq": { "label": "VC" } } }
			}]
		}
	}
}"#;

#[derive(Clone)]
struct Fake
{
	addr: SocketAddr,

	/// One run per day, oldest first.
	run_count: usize,

	/// Whether the next request should be rate limited.
	rate_limit_next: Arc<AtomicBool>,

	/// How many requests hit the runs endpoint.
	requests: Arc<AtomicUsize>,
}

impl Fake
{
	async fn spawn(run_count: usize) -> anyhow::Result<Self>
	{
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let fake = Self {
			addr: listener.local_addr()?,
			run_count,
			rate_limit_next: Arc::new(AtomicBool::new(true)),
			requests: Arc::new(AtomicUsize::new(0)),
		};

		let router = Router::new()
			.route("/api/v1/runs", get(runs))
			.route("/api/v1/games/{game}", get(game))
			.with_state(fake.clone());

		tokio::spawn(async move { axum::serve(listener, router).await });

		Ok(fake)
	}

	fn service(&self) -> anyhow::Result<SpeedrunComService>
	{
		let config = SpeedrunComConfig {
			base_url: Url::parse(&format!("http://{}/api/v1/", self.addr))?,
			page_size: NonZero::new(20).context("page size")?,
			sweep_threshold: NonZero::new(50).context("sweep threshold")?,
			rate_limit_backoff: Duration::from_millis(10),
			..Default::default()
		};

		SpeedrunComService::from_config(config).map_err(Into::into)
	}

	fn run(&self, idx: usize) -> serde_json::Value
	{
		json!({
			"id": format!("run{idx}"),
			"date": format!("2020-{:02}-{:02}", 1 + idx / 28, 1 + idx % 28),
			"times": { "primary_t": 1000 - idx },
			"players": { "data": [{ "rel": "user", "id": format!("user{}", idx % 13), "names": { "international": "someone" } }] },
			"values": {},
		})
	}
}

async fn runs(State(fake): State<Fake>, Query(query): Query<HashMap<String, String>>) -> Response
{
	fake.requests.fetch_add(1, atomic::Ordering::SeqCst);

	if fake.rate_limit_next.swap(false, atomic::Ordering::SeqCst) {
		let enhance_your_calm = StatusCode::from_u16(420).unwrap_or(StatusCode::TOO_MANY_REQUESTS);
		return (enhance_your_calm, "slow down").into_response();
	}

	let offset = query
		.get("offset")
		.and_then(|offset| offset.parse::<usize>().ok())
		.unwrap_or_default();

	let max = query
		.get("max")
		.and_then(|max| max.parse::<usize>().ok())
		.unwrap_or(20);

	if offset >= OFFSET_LIMIT {
		return (StatusCode::BAD_REQUEST, "Invalid pagination values").into_response();
	}

	let descending = query.get("direction").is_some_and(|direction| direction == "desc");
	let data = (offset..fake.run_count.min(offset + max))
		.map(|idx| if descending { fake.run_count - 1 - idx } else { idx })
		.map(|idx| fake.run(idx))
		.collect::<Vec<_>>();

	let mut links = Vec::new();

	if offset + max < fake.run_count {
		let Ok(mut next) = Url::parse(&format!("http://{}/api/v1/runs", fake.addr)) else {
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		};

		next.query_pairs_mut()
			.extend_pairs(query.iter().filter(|(key, _)| *key != "offset"))
			.append_pair("offset", &(offset + max).to_string());

		links.push(json!({ "rel": "next", "uri": next.as_str() }));
	}

	Json(json!({
		"data": data,
		"pagination": { "offset": offset, "max": max, "size": data.len(), "links": links },
	}))
	.into_response()
}

async fn game(Path(game): Path<String>) -> Response
{
	if game != "o1y9wo6q" {
		return (StatusCode::NOT_FOUND, "game not found").into_response();
	}

	([(header::CONTENT_TYPE, "application/json")], GAME).into_response()
}

fn selection() -> Selection
{
	Selection::new(GameId::from("o1y9wo6q"), CategoryId::from("wkpoo02r"), VariableSelections::new())
}

#[tokio::test]
async fn sweeps_both_directions_over_http() -> anyhow::Result<()>
{
	let fake = Fake::spawn(120).await?;
	let service = fake.service()?;
	let runs = service.fetch_all_runs(&selection()).await?;

	assert_eq!(runs.len(), 120);
	assert!(runs.is_sorted_by_key(|run| run.date));
	assert!(runs.iter().all(|run| run.contributor.display_name() == Some("someone")));

	// 1 rate limited + 3 forward + 4 backward
	assert_eq!(fake.requests.load(atomic::Ordering::SeqCst), 8);

	Ok(())
}

#[tokio::test]
async fn history_over_http() -> anyhow::Result<()>
{
	let fake = Fake::spawn(40).await?;
	let history = fake.service()?.fetch_top_ten_history(&selection()).await?;

	assert_eq!(history.runs().len(), 40);
	assert!(!history.frames().is_empty());

	// every run is faster than the last, so the newest one holds the record
	assert_eq!(history.world_record().map(speedrun::Time::as_secs_f64), Some(961.0));

	Ok(())
}

#[tokio::test]
async fn game_over_http() -> anyhow::Result<()>
{
	let fake = Fake::spawn(0).await?;
	let service = fake.service()?;
	let game = service.fetch_game(&GameId::from("o1y9wo6q")).await?;
	let defaults = game.default_selections(&CategoryId::from("wkpoo02r"));

	assert_eq!(&*game.name, "Super Mario 64");
	assert_eq!(defaults.iter().map(|(_, value)| value.as_str()).collect::<Vec<_>>(), ["zqoyz021"]);

	let error = service.fetch_game(&GameId::from("nope")).await.err();

	assert!(matches!(error, Some(FetchError::Status { status: StatusCode::NOT_FOUND, .. })));

	Ok(())
}
