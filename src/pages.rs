use rocket::response::content::RawHtml;
use rocket::*;

// Pages are fixed documents compiled into the binary; all dynamic data is
// fetched client-side from the JSON endpoints.
const INDEX_PAGE: &str = include_str!("../static/index.html");
const GAME_PAGE: &str = include_str!("../static/game.html");

/// Leaderboard page.
#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_PAGE)
}

/// Game page; its embedded script submits finished runs to `/highscores`.
#[get("/game")]
pub fn game() -> RawHtml<&'static str> {
    RawHtml(GAME_PAGE)
}
