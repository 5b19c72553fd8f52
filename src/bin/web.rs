//! Single binary web server: JSON API over league seasons.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use league_season::{
    report_result, start_season, MatchId, Season, SeasonConfig, SeasonError, SeasonId, TeamId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-season entry: season data + last activity time (for auto-cleanup).
struct SeasonEntry {
    season: Season,
    last_activity: Instant,
}

type Seasons = HashMap<SeasonId, SeasonEntry>;

/// In-memory state: many seasons by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<Seasons>>;

/// Inactivity threshold: seasons not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportResultBody {
    home_goals: u32,
    away_goals: u32,
}

#[derive(Deserialize)]
struct RoundQuery {
    round: Option<u32>,
}

/// Path segment: season id (e.g. /api/seasons/{id})
#[derive(Deserialize)]
struct SeasonPath {
    id: SeasonId,
}

/// Path segments: season id and team id.
#[derive(Deserialize)]
struct SeasonTeamPath {
    id: SeasonId,
    team_id: TeamId,
}

/// Path segments: season id and fixture id.
#[derive(Deserialize)]
struct SeasonFixturePath {
    id: SeasonId,
    match_id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No season" }))
}

fn bad_request(e: SeasonError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Run `f` on a season, refreshing its last activity. 404 if missing.
fn with_season<F>(state: &AppState, id: SeasonId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Season) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.season)
        }
        None => not_found(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-season",
    })
}

/// Create a new season (returns it with id; client stores id for subsequent requests).
#[post("/api/seasons")]
async fn api_create_season(state: AppState, body: Option<Json<SeasonConfig>>) -> HttpResponse {
    let config = body.map(|b| b.into_inner()).unwrap_or_default();
    let season = Season::new(config);
    let id = season.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let response = HttpResponse::Ok().json(&season);
    g.insert(
        id,
        SeasonEntry {
            season,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/seasons/{id}")]
async fn api_get_season(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    with_season(&state, path.id, |s| HttpResponse::Ok().json(&*s))
}

/// Add a team (season must be in Setup).
#[post("/api/seasons/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<SeasonPath>, body: Json<AddTeamBody>) -> HttpResponse {
    with_season(&state, path.id, |s| match s.add_team(body.name.trim()) {
        Ok(_) => HttpResponse::Ok().json(&*s),
        Err(e) => bad_request(e),
    })
}

/// Remove a team by id (season must be in Setup).
#[delete("/api/seasons/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<SeasonTeamPath>) -> HttpResponse {
    with_season(&state, path.id, |s| match s.remove_team(path.team_id) {
        Ok(()) => HttpResponse::Ok().json(&*s),
        Err(e) => bad_request(e),
    })
}

/// Start the season: generate the calendar and reset counters.
#[post("/api/seasons/{id}/start")]
async fn api_start_season(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    with_season(&state, path.id, |s| match start_season(s) {
        Ok(()) => HttpResponse::Ok().json(&*s),
        Err(e) => bad_request(e),
    })
}

/// Calendar, optionally limited to one round (?round=r).
#[get("/api/seasons/{id}/fixtures")]
async fn api_fixtures(state: AppState, path: Path<SeasonPath>, query: Query<RoundQuery>) -> HttpResponse {
    with_season(&state, path.id, |s| match query.round {
        Some(r) => HttpResponse::Ok().json(s.fixtures_in_round(r)),
        None => HttpResponse::Ok().json(&s.fixtures),
    })
}

/// Next unplayed fixture (204 once the calendar is exhausted).
#[get("/api/seasons/{id}/fixtures/next")]
async fn api_next_fixture(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    with_season(&state, path.id, |s| match s.next_fixture() {
        Some(m) => HttpResponse::Ok().json(m),
        None => HttpResponse::NoContent().finish(),
    })
}

/// Report the final score of one fixture (season must be InProgress).
#[put("/api/seasons/{id}/fixtures/{match_id}/result")]
async fn api_report_result(
    state: AppState,
    path: Path<SeasonFixturePath>,
    body: Json<ReportResultBody>,
) -> HttpResponse {
    with_season(&state, path.id, |s| {
        match report_result(s, path.match_id, body.home_goals, body.away_goals) {
            Ok(()) => HttpResponse::Ok().json(&*s),
            Err(e) => bad_request(e),
        }
    })
}

#[get("/api/seasons/{id}/standings")]
async fn api_standings(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    with_season(&state, path.id, |s| HttpResponse::Ok().json(s.standings_table()))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(Seasons::new()));

    // Background task: every 30 minutes, remove seasons inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive season(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_season)
            .service(api_get_season)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_start_season)
            .service(api_next_fixture)
            .service(api_fixtures)
            .service(api_report_result)
            .service(api_standings)
    })
    .bind(bind)?
    .run()
    .await
}
