//! Landing page served at `/`.

use actix_web::{HttpResponse, get, http::header::ContentType};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>In-N-Out-Books</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 20px; }
        h1 { color: #2C3E50; }
        .section { margin: 20px auto; max-width: 600px; text-align: left; }
        footer { margin-top: 20px; font-size: 0.9em; color: #555; }
    </style>
</head>
<body>
    <header>
        <h1>Welcome to In-N-Out-Books!</h1>
        <p>Manage your book collection with ease.</p>
    </header>
    <main>
        <section class="section">
            <h2>Top Selling Books</h2>
            <ul>
                <li>The Great Gatsby</li>
                <li>To Kill a Mockingbird</li>
                <li>1984</li>
            </ul>
        </section>
        <section class="section">
            <h2>Hours of Operation</h2>
            <p>Monday - Friday: 9 AM - 8 PM</p>
            <p>Saturday - Sunday: 10 AM - 6 PM</p>
        </section>
        <section class="section">
            <h2>Contact Information</h2>
            <p>Email: contact@in-n-out-books.com</p>
            <p>Phone: (555) 123-4567</p>
        </section>
    </main>
    <footer>
        <p>&copy; 2025 In-N-Out-Books. All rights reserved.</p>
    </footer>
</body>
</html>
"#;

/// Store landing page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Landing page", content_type = "text/html")),
    tags = ["home"],
    operation_id = "landingPage"
)]
#[get("/")]
pub async fn landing_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn serves_html_with_store_name() {
        let app = test::init_service(App::new().service(landing_page)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = test::read_body(response).await;
        let html = std::str::from_utf8(&body).expect("utf8 body");
        assert!(html.contains("In-N-Out-Books"));
        assert!(html.contains("Top Selling Books"));
    }
}
