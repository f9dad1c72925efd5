//! Terminal counterpart of the browser page served at `/`.

mod http;
mod page;

pub use http::{GreetingClient, DEFAULT_BASE_URL};
pub use page::{GreetingPage, ViewState};

/// Drives one click of the page: idle, loading, then settled.
/// `show` is called with the page after every transition.
pub async fn fetch_once(
    client: &GreetingClient,
    mut show: impl FnMut(&GreetingPage),
) -> GreetingPage {
    let mut page = GreetingPage::new();
    show(&page);

    if page.click() {
        show(&page);
        let result = client.fetch_greeting().await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, url = %client.hello_url(), "greeting fetch failed");
        }
        page.settle(result);
        show(&page);
    }

    page
}
