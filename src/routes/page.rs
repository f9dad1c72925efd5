use rocket::response::content::RawHtml;
use rocket::Route;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The browser client: one button that calls `GET /api/hello`.
#[get("/")]
pub async fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

pub fn routes() -> Vec<Route> {
    rocket::routes![index]
}
