use actix_web::{get, post, web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{app_state::AppState, auth::bearer_token, graphql::Schema};

/// GraphQL endpoint. A valid bearer token is optional here; when present its
/// claims are handed to the resolvers that need a caller.
#[post("/graphql")]
pub async fn graphql(
    schema: web::Data<Schema>,
    state: web::Data<AppState>,
    http_request: HttpRequest,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();

    if let Ok(token) = bearer_token(http_request.headers()) {
        match state.jwt_service.validate_token(token) {
            Ok(claims) => request = request.data(claims),
            Err(err) => log::debug!("Ignoring GraphQL bearer token: {}", err),
        }
    }

    schema.execute(request).await.into()
}

#[get("/graphiql")]
pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
