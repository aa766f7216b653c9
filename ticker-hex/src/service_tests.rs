//! TickerService unit tests.

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use ticker_types::{
        ApiRequest, AppError, HttpVerb, Payload, RateSource, RateTable, RequestParams,
        SourceError, ValidationError,
    };

    use crate::TickerService;

    /// In-memory rate source that counts fetches.
    pub struct MockSource {
        table: Mutex<Option<RateTable>>,
        fetches: AtomicUsize,
    }

    impl MockSource {
        pub fn with_rates(pairs: &[(&str, f64)]) -> Self {
            let table = RateTable::from_pairs(pairs.iter().copied()).unwrap();
            Self {
                table: Mutex::new(Some(table)),
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn unavailable() -> Self {
            Self {
                table: Mutex::new(None),
                fetches: AtomicUsize::new(0),
            }
        }

        pub fn fetches(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RateSource for MockSource {
        async fn current_rates(&self) -> Result<RateTable, SourceError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.table
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| SourceError::Unavailable("mock is down".into()))
        }
    }

    fn service() -> TickerService<MockSource> {
        TickerService::new(MockSource::with_rates(&[
            ("USD", 50000.0),
            ("EUR", 46000.0),
            ("RUB", 4_600_000.0),
            ("GBP", 39500.0),
        ]))
    }

    fn get(pairs: &[(&str, &str)]) -> ApiRequest {
        ApiRequest::new(HttpVerb::Get, RequestParams::from_pairs(pairs.iter().copied()))
    }

    fn post(pairs: &[(&str, &str)]) -> ApiRequest {
        ApiRequest::new(HttpVerb::Post, RequestParams::from_pairs(pairs.iter().copied()))
    }

    fn convert_req(from: &str, to: &str, value: &str) -> ApiRequest {
        post(&[
            ("method", "convert"),
            ("currency_from", from),
            ("currency_to", to),
            ("value", value),
        ])
    }

    fn is_bad_request(err: &AppError) -> bool {
        matches!(err, AppError::BadRequest(_))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Dispatcher
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_missing_method_is_bad_request_without_fetch() {
        let service = service();
        let err = service.handle(&get(&[])).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest(ValidationError::UnknownOperation)
        ));
        assert_eq!(service.source().fetches(), 0);
    }

    #[tokio::test]
    async fn test_unknown_method_is_bad_request() {
        let service = service();
        for name in ["withdraw", "RATES", "handle"] {
            let err = service
                .handle(&get(&[("method", name)]))
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), 400);
        }
    }

    #[tokio::test]
    async fn test_unavailable_source_is_503() {
        let service = TickerService::new(MockSource::unavailable());
        let err = service
            .handle(&get(&[("method", "rates")]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ServiceUnavailable(_)));
        assert_eq!(err.status_code(), 503);
    }

    #[tokio::test]
    async fn test_empty_source_is_503() {
        let service = TickerService::new(MockSource::with_rates(&[]));
        let err = service
            .handle(&convert_req("BTC", "USD", "1"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 503);
    }

    #[tokio::test]
    async fn test_source_fetched_once_per_request() {
        let service = service();
        service.handle(&get(&[("method", "rates")])).await.unwrap();
        service
            .handle(&convert_req("BTC", "USD", "1"))
            .await
            .unwrap();
        // Rejected by the operation, still fetched once.
        let _ = service.handle(&post(&[("method", "rates")])).await;
        assert_eq!(service.source().fetches(), 3);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rates
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_rates_sorted_by_value() {
        let Payload::Rates(list) = service()
            .handle(&get(&[("method", "rates")]))
            .await
            .unwrap()
        else {
            panic!("expected rates payload");
        };
        assert_eq!(
            list.codes().collect::<Vec<_>>(),
            vec!["GBP", "EUR", "USD", "RUB"]
        );
    }

    #[tokio::test]
    async fn test_rates_requires_get() {
        let err = service()
            .handle(&post(&[("method", "rates")]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::BadRequest(ValidationError::WrongVerb { .. })
        ));
    }

    #[tokio::test]
    async fn test_rates_filter_with_duplicates() {
        let Payload::Rates(list) = service()
            .handle(&get(&[("method", "rates"), ("currency", "USD,EUR,USD")]))
            .await
            .unwrap()
        else {
            panic!("expected rates payload");
        };
        assert_eq!(list.codes().collect::<Vec<_>>(), vec!["EUR", "USD"]);
    }

    #[tokio::test]
    async fn test_rates_filter_mismatch_echoes_request() {
        let err = service()
            .handle(&get(&[("method", "rates"), ("currency", "BTC,XYZ")]))
            .await
            .unwrap_err();
        match err {
            AppError::CurrencyMismatch(codes) => assert_eq!(codes, vec!["BTC", "XYZ"]),
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rates_filter_is_case_sensitive() {
        let err = service()
            .handle(&get(&[("method", "rates"), ("currency", "usd")]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CurrencyMismatch(_)));
    }

    #[tokio::test]
    async fn test_rates_blank_filter_means_all() {
        let Payload::Rates(list) = service()
            .handle(&get(&[("method", "rates"), ("currency", "")]))
            .await
            .unwrap()
        else {
            panic!("expected rates payload");
        };
        assert_eq!(list.len(), 4);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Convert
    // ─────────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_convert_crypto_to_fiat() {
        let Payload::Conversion(result) = service()
            .handle(&convert_req("BTC", "USD", "1"))
            .await
            .unwrap()
        else {
            panic!("expected conversion payload");
        };
        assert_eq!(result.currency_from, "BTC");
        assert_eq!(result.currency_to, "USD");
        assert_eq!(result.value, 1.0);
        assert_eq!(result.converted_value, "50000.00");
        assert_eq!(result.rate, "50000.00");
    }

    #[tokio::test]
    async fn test_convert_fiat_to_crypto() {
        let Payload::Conversion(result) = service()
            .handle(&convert_req("USD", "BTC", "100"))
            .await
            .unwrap()
        else {
            panic!("expected conversion payload");
        };
        assert_eq!(result.converted_value, "0.0020000000");
        assert_eq!(result.rate, "50000.00");
    }

    #[tokio::test]
    async fn test_convert_requires_post() {
        let req = ApiRequest::new(
            HttpVerb::Get,
            convert_req("BTC", "USD", "1").params,
        );
        let err = service().handle(&req).await.unwrap_err();
        assert!(is_bad_request(&err));
    }

    #[tokio::test]
    async fn test_convert_rejects_same_kind_pairs() {
        let service = service();
        for (from, to) in [("BTC", "BTC"), ("USD", "EUR")] {
            let err = service
                .handle(&convert_req(from, to, "1"))
                .await
                .unwrap_err();
            assert!(is_bad_request(&err), "{from}->{to} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_convert_rejects_small_values() {
        let service = service();
        for value in ["0", "-1", "0.001"] {
            let err = service
                .handle(&convert_req("BTC", "USD", value))
                .await
                .unwrap_err();
            assert!(is_bad_request(&err), "value {value} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_convert_unknown_fiat_is_bad_gateway() {
        let err = service()
            .handle(&convert_req("BTC", "XYZ", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadGateway(_)));
        assert_eq!(err.status_code(), 502);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let service = service();
        let first = service
            .handle(&convert_req("USD", "BTC", "123.45"))
            .await
            .unwrap();
        let second = service
            .handle(&convert_req("USD", "BTC", "123.45"))
            .await
            .unwrap();
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
