//! Tests for the Tilawa content client.
//!
//! These tests use mock servers to verify client behavior without
//! touching the real APIs.

use serde_json::{json, Value};
use tilawa_client::{ClientConfig, ClientError, TilawaClient};
use tilawa_core::{AudioQuality, ContentProvider, Language, Prayer, TilawaError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Fixtures
// =============================================================================

fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "code": 200,
        "status": "OK",
        "data": data
    }))
}

fn ikhlas_edition(texts: [&str; 2]) -> Value {
    json!({
        "number": 112,
        "name": "سُورَةُ الإِخۡلَاصِ",
        "englishName": "Al-Ikhlaas",
        "englishNameTranslation": "Sincerity",
        "revelationType": "Meccan",
        "numberOfAyahs": 2,
        "ayahs": [
            { "number": 6222, "text": texts[0], "numberInSurah": 1, "juz": 30 },
            { "number": 6223, "text": texts[1], "numberInSurah": 2, "juz": 30 }
        ]
    })
}

fn client_for(server: &MockServer) -> TilawaClient {
    TilawaClient::new(ClientConfig::with_base_url(server.uri())).expect("valid mock url")
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let client = TilawaClient::new(ClientConfig::default()).unwrap();
        assert_eq!(client.config().quran_base_url, "https://api.alquran.cloud/v1");
        assert_eq!(client.config().prayer_method, 2);
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = ClientConfig {
            prayer_base_url: String::new(),
            ..ClientConfig::default()
        };

        match TilawaClient::new(config).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_url_without_scheme_rejected() {
        let config = ClientConfig::with_base_url("api.alquran.cloud/v1");
        assert!(matches!(
            TilawaClient::new(config),
            Err(ClientError::InvalidUrl(_))
        ));
    }
}

// =============================================================================
// Surah Index Tests
// =============================================================================

mod surahs {
    use super::*;

    #[tokio::test]
    async fn test_fetch_surahs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah"))
            .respond_with(ok(json!([
                {
                    "number": 1,
                    "name": "سُورَةُ ٱلْفَاتِحَةِ",
                    "englishName": "Al-Faatiha",
                    "englishNameTranslation": "The Opening",
                    "numberOfAyahs": 7,
                    "revelationType": "Meccan"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let surahs = client_for(&server).fetch_surahs().await.unwrap();

        assert_eq!(surahs.len(), 1);
        assert_eq!(surahs[0].english_name, "Al-Faatiha");
        assert_eq!(surahs[0].number_of_ayahs, 7);
    }

    #[tokio::test]
    async fn test_envelope_failure_is_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 503,
                "status": "Service Unavailable",
                "data": "Try again later"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).surahs().await.unwrap_err();
        match err {
            ClientError::Api { code, message, .. } => {
                assert_eq!(code, 503);
                assert_eq!(message, "Try again later");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client_for(&server).surahs().await.unwrap_err();
        assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&server)
            .await;

        let err = client_for(&server).surahs().await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
    }
}

// =============================================================================
// Surah Detail Tests
// =============================================================================

mod surah_detail {
    use super::*;

    #[tokio::test]
    async fn test_merges_text_translation_and_audio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah/112"))
            .respond_with(ok(ikhlas_edition(["قُلۡ هُوَ ٱللَّهُ أَحَدٌ", "ٱللَّهُ ٱلصَّمَدُ"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/surah/112/bn.bengali"))
            .respond_with(ok(ikhlas_edition(["বলুন, তিনি আল্লাহ, এক", "আল্লাহ অমুখাপেক্ষী"])))
            .mount(&server)
            .await;

        let detail = client_for(&server)
            .fetch_surah_detail(112, Language::Bengali)
            .await
            .unwrap();

        assert_eq!(detail.surah.english_name, "Al-Ikhlaas");
        assert_eq!(detail.verses.len(), 2);
        assert_eq!(detail.verses[1].number, 2);
        assert_eq!(detail.verses[1].translation, "আল্লাহ অমুখাপেক্ষী");
        assert_eq!(
            detail.verses[0].audio_url,
            format!("{}/128/ar.alafasy/6222.mp3", server.uri())
        );
    }

    #[tokio::test]
    async fn test_missing_translation_leaves_empty_strings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah/112"))
            .respond_with(ok(ikhlas_edition(["a", "b"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/surah/112/en.sahih"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": 404,
                "status": "NOT FOUND",
                "data": "Edition not found"
            })))
            .mount(&server)
            .await;

        let detail = client_for(&server)
            .surah_detail(112, Language::English)
            .await
            .unwrap();

        assert!(detail.verses.iter().all(|v| v.translation.is_empty()));
        assert_eq!(detail.verses[0].text, "a");
    }

    #[tokio::test]
    async fn test_audio_quality_changes_bitrate() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah/112"))
            .respond_with(ok(ikhlas_edition(["a", "b"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/surah/112/ar.muyassar"))
            .respond_with(ok(ikhlas_edition(["c", "d"])))
            .mount(&server)
            .await;

        let config = ClientConfig {
            audio_quality: AudioQuality::High,
            ..ClientConfig::with_base_url(server.uri())
        };
        let detail = TilawaClient::new(config)
            .unwrap()
            .surah_detail(112, Language::Arabic)
            .await
            .unwrap();

        assert!(detail.verses[1].audio_url.ends_with("/192/ar.alafasy/6223.mp3"));
    }

    #[tokio::test]
    async fn test_invalid_surah_rejected_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ok(json!(null)))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server);
        for number in [0, 115] {
            let err = client
                .fetch_surah_detail(number, Language::English)
                .await
                .unwrap_err();
            assert!(matches!(err, TilawaError::InvalidSurah(n) if n == number));
        }
    }

    #[tokio::test]
    async fn test_failed_arabic_text_fails_the_call() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/surah/1"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/surah/1/en.sahih"))
            .respond_with(ok(ikhlas_edition(["x", "y"])))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch_surah_detail(1, Language::English)
            .await
            .unwrap_err();
        assert!(matches!(err, TilawaError::Content(_)));
    }
}

// =============================================================================
// Prayer Times Tests
// =============================================================================

mod prayer_times {
    use super::*;

    #[tokio::test]
    async fn test_fetch_prayer_times() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/timings"))
            .and(query_param("latitude", "21.4225"))
            .and(query_param("longitude", "39.8262"))
            .and(query_param("method", "2"))
            .respond_with(ok(json!({
                "timings": {
                    "Fajr": "05:12", "Sunrise": "06:28", "Dhuhr": "12:14",
                    "Asr": "15:35", "Sunset": "18:00", "Maghrib": "18:00",
                    "Isha": "19:14", "Imsak": "05:02", "Midnight": "00:14"
                },
                "date": {
                    "readable": "19 Oct 2026",
                    "timestamp": "1792396800",
                    "gregorian": {
                        "date": "19-10-2026",
                        "month": { "number": 10, "en": "October" },
                        "year": "2026"
                    },
                    "hijri": {
                        "date": "08-05-1448",
                        "day": "08",
                        "month": { "number": 5, "en": "Jumādá al-ūlá", "ar": "جُمادى الأولى" },
                        "year": "1448"
                    }
                },
                "meta": { "method": { "id": 2 } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let times = client_for(&server)
            .fetch_prayer_times(21.4225, 39.8262)
            .await
            .unwrap();

        assert_eq!(times.fajr, "05:12");
        assert_eq!(times.isha, "19:14");
        assert_eq!(times.date.hijri.month.number, 5);
        assert_eq!(times.entries()[4], (Prayer::Maghrib, "18:00"));
    }
}
