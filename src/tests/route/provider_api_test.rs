#[cfg(test)]
mod tests {
    use crate::tests::support::{get, send, test_state};
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, StatusCode};
    use dateval::create_app;
    use dateval::model::known_date::KnownDate;
    use dateval::util::extractor::JSON_UTF8;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_date_param() {
        let app = create_app(test_state().await);

        let res = get(app, "/api/provider?validDateTime=").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.headers[CONTENT_TYPE], JSON_UTF8);
        assert_eq!(res.json(), json!({"message": "validDateTime is required"}));
    }

    #[tokio::test]
    async fn test_missing_date_param() {
        let app = create_app(test_state().await);

        let res = get(app, "/api/provider").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json(), json!({"message": "validDateTime is required"}));
    }

    #[tokio::test]
    async fn test_invalid_date_param() {
        let app = create_app(test_state().await);

        let res = get(app, "/api/provider?validDateTime=lolz").await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.headers[CONTENT_TYPE], JSON_UTF8);
        assert_eq!(res.json(), json!({"message": "validDateTime is not a date or time"}));
    }

    #[tokio::test]
    async fn test_no_data() {
        let app = create_app(test_state().await);

        let res = get(app, "/api/provider?validDateTime=04/04/2018").await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert!(res.headers.get(CONTENT_TYPE).is_none());
        assert!(res.body.is_empty());
    }

    #[tokio::test]
    async fn test_parses_date() {
        let state = test_state().await;
        KnownDate::insert_many(&state.db, &["04/05/2018".to_string()]).await.unwrap();
        let app = create_app(state);

        let res = get(app.clone(), "/api/provider?validDateTime=04/05/2018").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.headers[CONTENT_TYPE], JSON_UTF8);
        assert_eq!(res.json(), json!({"test": "NO", "validDateTIme": "05-04-2018 00:00:00"}));

        // same dataset, same answer
        let again = get(app, "/api/provider?validDateTime=04/05/2018").await;
        assert_eq!(again.status, res.status);
        assert_eq!(again.body, res.body);
    }

    #[tokio::test]
    async fn test_encoded_date_param() {
        let state = test_state().await;
        KnownDate::insert_many(&state.db, &["04/05/2018 13:45".to_string()]).await.unwrap();
        let app = create_app(state);

        let res = get(app, "/api/provider?validDateTime=04%2F05%2F2018%2013%3A45").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json()["validDateTIme"], "05-04-2018 13:45:00");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_app(test_state().await);

        let res = get(app, "/api/nothing-here").await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json(), json!({"code": 404, "error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let app = create_app(test_state().await);

        let res = send(app, Method::POST, "/api/provider?validDateTime=04/05/2018", None).await;
        assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
