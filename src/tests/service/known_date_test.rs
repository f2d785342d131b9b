#[cfg(test)]
mod tests {
    use crate::tests::support::test_state;
    use dateval::model::date_validation::{validate, DateValidationResult, RejectReason};
    use dateval::model::known_date::KnownDate;

    fn dates(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let state = test_state().await;

        assert_eq!(KnownDate::get_count(&state.db).await.unwrap(), 0);
        assert!(!KnownDate::exists(&state.db, "04/05/2018").await.unwrap());

        let inserted = KnownDate::insert_many(&state.db, &dates(&["04/05/2018", "01/02/2020"])).await.unwrap();
        assert_eq!(inserted, 2);
        assert!(KnownDate::exists(&state.db, "04/05/2018").await.unwrap());
        assert!(KnownDate::exists(&state.db, "01/02/2020").await.unwrap());

        // the lookup is on the raw value
        assert!(!KnownDate::exists(&state.db, "4/5/2018").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_skips_duplicates() {
        let state = test_state().await;

        KnownDate::insert_many(&state.db, &dates(&["04/05/2018"])).await.unwrap();
        let inserted = KnownDate::insert_many(&state.db, &dates(&["04/05/2018", "04/06/2018"])).await.unwrap();
        assert_eq!(inserted, 1);

        let all = KnownDate::get_all(&state.db).await.unwrap();
        let values: Vec<&str> = all.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["04/05/2018", "04/06/2018"]);
    }

    #[tokio::test]
    async fn test_clear() {
        let state = test_state().await;

        KnownDate::insert_many(&state.db, &dates(&["04/05/2018", "04/06/2018"])).await.unwrap();
        assert_eq!(KnownDate::clear(&state.db).await.unwrap(), 2);
        assert_eq!(KnownDate::get_count(&state.db).await.unwrap(), 0);
        assert_eq!(KnownDate::clear(&state.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_check_against_database() {
        let state = test_state().await;
        KnownDate::insert_many(&state.db, &dates(&["04/05/2018", "lolz"])).await.unwrap();

        assert_eq!(
            DateValidationResult::check(&state.db, "").await.unwrap(),
            DateValidationResult::Rejected { reason: RejectReason::Empty }
        );
        // a stored record never rescues an unparseable value
        assert_eq!(
            DateValidationResult::check(&state.db, "lolz").await.unwrap(),
            DateValidationResult::Rejected { reason: RejectReason::Malformed }
        );
        assert_eq!(
            DateValidationResult::check(&state.db, "04/04/2018").await.unwrap(),
            DateValidationResult::NotFound
        );
        assert_eq!(
            DateValidationResult::check(&state.db, "04/05/2018").await.unwrap(),
            DateValidationResult::Accepted { normalized_date: "05-04-2018 00:00:00".to_string() }
        );
    }

    #[tokio::test]
    async fn test_replace_all() {
        let state = test_state().await;

        KnownDate::insert_many(&state.db, &dates(&["01/02/2020", "04/05/2018"])).await.unwrap();
        let inserted = KnownDate::replace_all(&state.db, &dates(&["04/05/2018"])).await.unwrap();
        assert_eq!(inserted, 1);

        let all = KnownDate::get_all(&state.db).await.unwrap();
        let values: Vec<&str> = all.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["04/05/2018"]);
    }

    #[tokio::test]
    async fn test_check_matches_validate() {
        let state = test_state().await;
        let known = dates(&["04/05/2018", "04/05/2018 13:45", "lolz"]);
        KnownDate::insert_many(&state.db, &known).await.unwrap();

        let inputs = ["", " ", "lolz", "04/04/2018", "04/05/2018", "4/5/2018", "04/05/2018 13:45", "04/05/2018  13:45"];
        for raw in inputs {
            let expected = validate(raw, |value| known.iter().any(|k| k == value));
            assert_eq!(DateValidationResult::check(&state.db, raw).await.unwrap(), expected, "{raw:?}");
        }
    }
}
